//! Event type definitions for progress reporting.

use crate::core::harness::{Category, CategoryStats, Summary, TestRecord};
use serde::{Deserialize, Serialize};

/// All events emitted by a validation batch
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Event {
    /// Batch-level events
    Harness(HarnessEvent),
    /// Per-test events
    Test(TestEvent),
}

/// Batch-level events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum HarnessEvent {
    /// The batch has started
    Started { pairs: usize, seed: u64 },
    /// Moving to a new phase
    PhaseChanged { phase: HarnessPhase },
    /// The batch finished
    Completed { summary: Summary, duration_ms: u64 },
    /// The batch was rejected before any work was done
    Error { message: String },
}

/// Per-test events
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TestEvent {
    /// One comparison was scored and classified
    Record(TestRecord),
    /// Every test of one category has been reported
    PassCompleted {
        category: Category,
        stats: CategoryStats,
    },
}

/// Phases of a validation batch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HarnessPhase {
    Generating,
    SelfTest,
    CrossTest,
}

impl std::fmt::Display for HarnessPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HarnessPhase::Generating => write!(f, "Generating plates"),
            HarnessPhase::SelfTest => write!(f, "Testing valid plates"),
            HarnessPhase::CrossTest => write!(f, "Testing invalid plates"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::harness::Outcome;

    #[test]
    fn events_are_serializable() {
        let event = Event::Test(TestEvent::Record(TestRecord {
            index: 7,
            category: Category::Invalid,
            left: "MH12AB1234".to_string(),
            right: "MH12AB1235".to_string(),
            similarity: 90.0,
            outcome: Outcome::Pass,
        }));

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: Event = serde_json::from_str(&json).unwrap();

        match deserialized {
            Event::Test(TestEvent::Record(record)) => {
                assert_eq!(record.index, 7);
                assert_eq!(record.right, "MH12AB1235");
            }
            _ => panic!("Wrong event type"),
        }
    }

    #[test]
    fn phase_display_is_human_readable() {
        assert_eq!(HarnessPhase::CrossTest.to_string(), "Testing invalid plates");
    }
}
