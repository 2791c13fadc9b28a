//! # Plate Module
//!
//! Synthetic licence plates used as test data for the matcher.
//!
//! ## Grammar
//! `AA 00 AA 0000`: two uppercase letters, two digits, two uppercase
//! letters and a number from 1 to 9999 written without padding,
//! e.g. `MH12AB1234` or `DL01CA7`.

mod generator;

pub use generator::{PlateGenerator, DEFAULT_FAILURE_CHANCE, MUTATION_ALPHABET};

use crate::error::PlateError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

fn grammar() -> &'static Regex {
    static GRAMMAR: OnceLock<Regex> = OnceLock::new();
    GRAMMAR.get_or_init(|| {
        Regex::new(r"^[A-Z]{2}[0-9]{2}[A-Z]{2}[1-9][0-9]{0,3}$")
            .expect("plate grammar is a valid regex")
    })
}

/// A plate that conforms to the grammar
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Plate(String);

impl Plate {
    /// Validate a string against the plate grammar
    pub fn parse(value: &str) -> Result<Self, PlateError> {
        if is_valid_plate(value) {
            Ok(Plate(value.to_string()))
        } else {
            Err(PlateError::InvalidFormat {
                plate: value.to_string(),
            })
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Build without checking; callers must already satisfy the grammar
    pub(crate) fn from_parts(state: &str, district: &str, series: &str, number: u16) -> Self {
        Plate(format!("{state}{district}{series}{number}"))
    }
}

/// Check a string against the plate grammar
pub fn is_valid_plate(value: &str) -> bool {
    grammar().is_match(value)
}

impl std::fmt::Display for Plate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Plate {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Plate {
    type Err = PlateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Plate::parse(s)
    }
}

impl TryFrom<String> for Plate {
    type Error = PlateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Plate::parse(&value)
    }
}

impl From<Plate> for String {
    fn from(plate: Plate) -> Self {
        plate.0
    }
}
