//! # Error Module
//!
//! User-friendly error types for the gestalt matcher.
//!
//! ## Design Principles
//! - **Never panic** on user input - return errors instead
//! - **Fail before work** - every error here is a precondition check
//! - **Include context** - the offending value is part of the message

use crate::core::matcher::Opcode;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum GestaltError {
    #[error("Comparison error: {0}")]
    Compare(#[from] CompareError),

    #[error("Plate error: {0}")]
    Plate(#[from] PlateError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Report error: {0}")]
    Report(#[from] ReportError),
}

/// Which side of a comparison was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputSide {
    Left,
    Right,
    Both,
}

impl InputSide {
    /// Work out which side is empty, if any
    pub fn empty_of(left_len: usize, right_len: usize) -> Option<Self> {
        match (left_len == 0, right_len == 0) {
            (true, true) => Some(InputSide::Both),
            (true, false) => Some(InputSide::Left),
            (false, true) => Some(InputSide::Right),
            (false, false) => None,
        }
    }
}

impl std::fmt::Display for InputSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InputSide::Left => write!(f, "first string is empty"),
            InputSide::Right => write!(f, "second string is empty"),
            InputSide::Both => write!(f, "both strings are empty"),
        }
    }
}

/// Errors raised before a comparison starts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompareError {
    #[error("Both strings must have at least 1 character ({side})")]
    EmptyInput { side: InputSide },
}

/// Errors raised by plate parsing and mutation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlateError {
    #[error("Cannot mutate a zero-length plate")]
    EmptyPlate,

    #[error("Not a valid plate: {plate:?} (expected 2 letters, 2 digits, 2 letters, 1-4 digits)")]
    InvalidFormat { plate: String },
}

/// Errors in batch configuration
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Invalid failure chance: {value} (must be between 0 and 1)")]
    FailureChanceOutOfRange { value: f64 },

    #[error("Invalid test count: {count} (must be at least 1)")]
    InvalidCount { count: usize },
}

/// Errors that occur while exporting a batch report
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Failed to write report to {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize report: {0}")]
    Serialize(String),

    #[error("Unsupported report extension: {path} (use .json or .csv)")]
    UnsupportedFormat { path: PathBuf },

    #[error("Opcode {opcode} does not fit strings of length {a_len} and {b_len}")]
    OpcodeOutOfRange {
        opcode: Opcode,
        a_len: usize,
        b_len: usize,
    },
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, GestaltError>;
