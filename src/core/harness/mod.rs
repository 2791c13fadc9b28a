//! # Harness Module
//!
//! Batch validation of the matcher against synthetic plates.
//!
//! ## Passes
//! 1. **Self-test** - every valid plate against itself; must score 100
//! 2. **Cross-test** - every valid plate against its mutated twin; must
//!    score below 100
//!
//! A failing self-test points at the matcher. Failing cross-tests are
//! expected at roughly the configured failure chance, since that is how
//! often a twin collides with its source.
//!
//! ## Determinism
//! Plates come from a single seeded generator in a fixed order. Scoring may
//! fan out over rayon, but records are always reported in generation order.

mod executor;
mod types;

pub use executor::{
    HarnessBuilder, HarnessConfig, HarnessResult, ValidationHarness, DEFAULT_TEST_COUNT,
};
pub use types::{Category, CategoryStats, Outcome, Summary, TestRecord};
