//! Value types produced by the matcher.

use serde::{Deserialize, Serialize};

/// A run of symbols common to both sequences.
///
/// `a[a_start..a_start + len] == b[b_start..b_start + len]`. A zero-length
/// block only appears as the terminal sentinel of a match set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MatchBlock {
    pub a_start: usize,
    pub b_start: usize,
    pub len: usize,
}

impl MatchBlock {
    pub fn new(a_start: usize, b_start: usize, len: usize) -> Self {
        Self {
            a_start,
            b_start,
            len,
        }
    }

    /// One past the last matched index in `a`
    pub fn a_end(&self) -> usize {
        self.a_start + self.len
    }

    /// One past the last matched index in `b`
    pub fn b_end(&self) -> usize {
        self.b_start + self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// How a segment of `a` turns into a segment of `b`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpTag {
    /// `a[a_start..a_end] == b[b_start..b_end]`
    Equal,
    /// `a[a_start..a_end]` should be replaced by `b[b_start..b_end]`
    Replace,
    /// `a[a_start..a_end]` should be deleted; `b_start == b_end`
    Delete,
    /// `b[b_start..b_end]` should be inserted; `a_start == a_end`
    Insert,
}

impl std::fmt::Display for OpTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpTag::Equal => write!(f, "equal"),
            OpTag::Replace => write!(f, "replace"),
            OpTag::Delete => write!(f, "delete"),
            OpTag::Insert => write!(f, "insert"),
        }
    }
}

/// One step of an edit script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Opcode {
    pub tag: OpTag,
    pub a_start: usize,
    pub a_end: usize,
    pub b_start: usize,
    pub b_end: usize,
}

impl Opcode {
    pub fn new(tag: OpTag, a_start: usize, a_end: usize, b_start: usize, b_end: usize) -> Self {
        Self {
            tag,
            a_start,
            a_end,
            b_start,
            b_end,
        }
    }

    pub fn equal(a_start: usize, a_end: usize, b_start: usize, b_end: usize) -> Self {
        Self::new(OpTag::Equal, a_start, a_end, b_start, b_end)
    }

    pub fn replace(a_start: usize, a_end: usize, b_start: usize, b_end: usize) -> Self {
        Self::new(OpTag::Replace, a_start, a_end, b_start, b_end)
    }

    pub fn delete(a_start: usize, a_end: usize, b_start: usize, b_end: usize) -> Self {
        Self::new(OpTag::Delete, a_start, a_end, b_start, b_end)
    }

    pub fn insert(a_start: usize, a_end: usize, b_start: usize, b_end: usize) -> Self {
        Self::new(OpTag::Insert, a_start, a_end, b_start, b_end)
    }

    /// Length of the `a` range
    pub fn a_len(&self) -> usize {
        self.a_end - self.a_start
    }

    /// Length of the `b` range
    pub fn b_len(&self) -> usize {
        self.b_end - self.b_start
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}({},{},{},{})",
            self.tag, self.a_start, self.a_end, self.b_start, self.b_end
        )
    }
}

/// Outcome of one comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarityResult {
    /// Similarity as a percentage (0-100)
    pub ratio: f64,
    /// Edit script covering both inputs
    pub opcodes: Vec<Opcode>,
}

impl SimilarityResult {
    /// True when the inputs are symbol-for-symbol identical
    pub fn is_identical(&self) -> bool {
        self.opcodes.iter().all(|op| op.tag == OpTag::Equal)
    }
}
