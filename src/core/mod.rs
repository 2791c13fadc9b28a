//! # Core Module
//!
//! The presentation-agnostic matching engine.
//!
//! ## Modules
//! - `matcher` - Longest-match search, block decomposition, scores, edit scripts
//! - `plate` - Plate grammar and the valid/invalid plate generator
//! - `harness` - Seeded batch validation of the matcher
//! - `reporter` - Aligned per-symbol reports and batch export

pub mod harness;
pub mod matcher;
pub mod plate;
pub mod reporter;

// Re-export commonly used types
pub use harness::{Category, HarnessConfig, Outcome, Summary, TestRecord, ValidationHarness};
pub use matcher::{compare, MatchBlock, OpTag, Opcode, SequenceMatcher, SimilarityResult};
pub use plate::{Plate, PlateGenerator};
pub use reporter::{AlignedRow, BatchReport};
