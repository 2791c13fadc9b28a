//! Records and statistics of a validation batch.

use serde::{Deserialize, Serialize};

/// Which pass a test belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// A valid plate compared against itself
    Valid,
    /// A valid plate compared against its mutated twin
    Invalid,
}

impl Category {
    /// Classify a similarity score for this category.
    ///
    /// Valid plates must score exactly 100; invalid twins must score below it.
    pub fn classify(&self, similarity: f64) -> Outcome {
        let passed = match self {
            Category::Valid => similarity == 100.0,
            Category::Invalid => similarity < 100.0,
        };
        if passed {
            Outcome::Pass
        } else {
            Outcome::Fail
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Category::Valid => write!(f, "Valid"),
            Category::Invalid => write!(f, "Invalid"),
        }
    }
}

/// Result of one test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Outcome {
    Pass,
    Fail,
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Pass => write!(f, "PASS"),
            Outcome::Fail => write!(f, "FAIL"),
        }
    }
}

/// One scored comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestRecord {
    /// 1-based position within its category
    pub index: usize,
    pub category: Category,
    /// The valid plate
    pub left: String,
    /// The plate it was compared against
    pub right: String,
    /// Similarity as a percentage (0-100)
    pub similarity: f64,
    pub outcome: Outcome,
}

/// Pass/fail counts for one category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryStats {
    pub passed: usize,
    pub failed: usize,
}

impl CategoryStats {
    /// Count one outcome
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Pass => self.passed += 1,
            Outcome::Fail => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed
    }

    /// Share of failed tests as a percentage, 0 when nothing ran
    pub fn failure_rate(&self) -> f64 {
        rate(self.failed, self.total())
    }

    /// Share of passed tests as a percentage, 0 when nothing ran
    pub fn pass_rate(&self) -> f64 {
        rate(self.passed, self.total())
    }

    /// Add two sets of counts; order does not matter
    pub fn merge(self, other: CategoryStats) -> CategoryStats {
        CategoryStats {
            passed: self.passed + other.passed,
            failed: self.failed + other.failed,
        }
    }
}

/// Aggregate outcome of a batch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub valid: CategoryStats,
    pub invalid: CategoryStats,
}

impl Summary {
    /// Count one record
    pub fn record(&mut self, record: &TestRecord) {
        self.stats_mut(record.category).record(record.outcome);
    }

    pub fn stats(&self, category: Category) -> CategoryStats {
        match category {
            Category::Valid => self.valid,
            Category::Invalid => self.invalid,
        }
    }

    fn stats_mut(&mut self, category: Category) -> &mut CategoryStats {
        match category {
            Category::Valid => &mut self.valid,
            Category::Invalid => &mut self.invalid,
        }
    }

    /// Both categories combined
    pub fn totals(&self) -> CategoryStats {
        self.valid.merge(self.invalid)
    }

    pub fn total_tests(&self) -> usize {
        self.totals().total()
    }

    pub fn total_passed(&self) -> usize {
        self.totals().passed
    }

    pub fn total_failed(&self) -> usize {
        self.totals().failed
    }

    pub fn failure_rate(&self) -> f64 {
        self.totals().failure_rate()
    }

    pub fn valid_failed(&self) -> usize {
        self.valid.failed
    }

    pub fn invalid_failed(&self) -> usize {
        self.invalid.failed
    }
}

fn rate(count: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 * 100.0 / total as f64
    }
}
