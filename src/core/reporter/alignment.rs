//! Per-position alignment of two strings along an edit script.

use crate::core::matcher::Opcode;
use crate::error::ReportError;
use serde::{Deserialize, Serialize};

/// One row of the aligned report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlignedRow {
    /// Symbol from the first string, `None` where it has no counterpart
    pub left: Option<char>,
    /// Symbol from the second string, `None` where it has no counterpart
    pub right: Option<char>,
    /// Both symbols are present and equal
    pub matched: bool,
}

impl AlignedRow {
    fn new(left: Option<char>, right: Option<char>) -> Self {
        Self {
            left,
            right,
            matched: left.is_some() && left == right,
        }
    }
}

/// Walk every opcode's segments side by side, padding the shorter one.
///
/// Fails when an opcode reaches past either string, i.e. the edit script
/// was computed for different inputs.
pub fn alignment_rows(
    a: &str,
    b: &str,
    opcodes: &[Opcode],
) -> Result<Vec<AlignedRow>, ReportError> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut rows = Vec::new();

    for op in opcodes {
        let segments = a.get(op.a_start..op.a_end).zip(b.get(op.b_start..op.b_end));
        let Some((left, right)) = segments else {
            return Err(ReportError::OpcodeOutOfRange {
                opcode: *op,
                a_len: a.len(),
                b_len: b.len(),
            });
        };
        for k in 0..left.len().max(right.len()) {
            rows.push(AlignedRow::new(left.get(k).copied(), right.get(k).copied()));
        }
    }

    Ok(rows)
}
