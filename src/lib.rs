//! # Gestalt Match
//!
//! Sequence similarity with an auditable alignment, plus a seeded harness
//! that validates it against synthetic licence plates.
//!
//! ## Core Philosophy
//! - **Show the alignment** - every score comes with the edit script behind it
//! - **Reproducible** - every random choice flows from a caller-supplied seed
//! - **Reject, don't guess** - bad input fails before any work is done
//!
//! ## Architecture
//! The library is split into a core engine (presentation-agnostic) and
//! presentation layers:
//! - `core` - Matcher, plate generator, validation harness, reports
//! - `events` - Event-driven progress reporting
//! - `error` - User-friendly error types
//! - `cli` - Command-line interface (binary only)

pub mod core;
pub mod error;
pub mod events;

// Re-export commonly used types at the crate root
pub use crate::core::harness::{HarnessResult, Summary, TestRecord, ValidationHarness};
pub use crate::core::matcher::{compare, SimilarityResult};
pub use crate::core::plate::Plate;
pub use error::{GestaltError, Result};

use crate::core::plate::PlateGenerator;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Initialize tracing for the library
///
/// This should be called by the application entry point. Filtering follows
/// `RUST_LOG`; a second call is a no-op.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

/// Generate one valid plate from `seed`
pub fn generate_valid_plate(seed: u64) -> Plate {
    let mut rng = StdRng::seed_from_u64(seed);
    PlateGenerator::default().valid(&mut rng)
}

/// Mutate `plate` once using `seed`, or return it unchanged with
/// probability `failure_chance`
pub fn generate_invalid_plate(seed: u64, plate: &str, failure_chance: f64) -> Result<String> {
    let generator = PlateGenerator::new(failure_chance)?;
    let mut rng = StdRng::seed_from_u64(seed);
    Ok(generator.invalid(&mut rng, plate)?)
}

/// Run a validation batch of `count` tests and return its summary
pub fn run_validation_batch(count: usize, failure_chance: f64, seed: u64) -> Result<Summary> {
    Ok(batch(count, failure_chance, seed).run()?.summary)
}

/// [`run_validation_batch`], handing each record to `observer` as it is produced
pub fn run_validation_batch_with<F>(
    count: usize,
    failure_chance: f64,
    seed: u64,
    observer: F,
) -> Result<HarnessResult>
where
    F: FnMut(&TestRecord),
{
    batch(count, failure_chance, seed).run_with_observer(observer)
}

fn batch(count: usize, failure_chance: f64, seed: u64) -> ValidationHarness {
    ValidationHarness::builder()
        .count(count)
        .failure_chance(failure_chance)
        .seed(seed)
        .build()
}
