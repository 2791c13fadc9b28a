//! # Matcher Module
//!
//! Gestalt (Ratcliff/Obershelp) sequence matching.
//!
//! ## How It Works
//! 1. Index every symbol of `b` by position
//! 2. Find the longest common run, then recurse left and right of it
//! 3. Merge touching blocks and append a sentinel
//! 4. Score the blocks and derive an edit script from them
//!
//! ## Scores
//! | Score | Meaning                                   |
//! |-------|-------------------------------------------|
//! | 100   | Identical sequences                       |
//! | 90    | One substitution in a 10-symbol plate     |
//! | 0     | Nothing in common                         |

mod blocks;
mod longest;
mod opcodes;
mod ratio;
mod types;

pub use longest::{find_longest_match, SymbolIndex};
pub use types::{MatchBlock, OpTag, Opcode, SimilarityResult};

use crate::error::{CompareError, InputSide};
use std::hash::Hash;
use std::sync::OnceLock;

/// Options for a [`SequenceMatcher`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MatcherConfig {
    /// Drop symbols that make up more than ~1% of a `b` of 200+ symbols
    /// from the index. Off by default; plates are far below the cut-off.
    pub autojunk: bool,
}

impl MatcherConfig {
    pub fn autojunk(mut self, enabled: bool) -> Self {
        self.autojunk = enabled;
        self
    }
}

/// Compares two sequences of symbols.
///
/// The match set is computed on first use and reused by every score and by
/// the edit script.
pub struct SequenceMatcher<'a, T: Eq + Hash> {
    a: &'a [T],
    b: &'a [T],
    index: SymbolIndex<'a, T>,
    blocks: OnceLock<Vec<MatchBlock>>,
}

impl<'a, T: Eq + Hash> SequenceMatcher<'a, T> {
    /// Create a matcher with the default configuration
    pub fn new(a: &'a [T], b: &'a [T]) -> Self {
        Self::with_config(a, b, MatcherConfig::default())
    }

    pub fn with_config(a: &'a [T], b: &'a [T], config: MatcherConfig) -> Self {
        Self {
            a,
            b,
            index: SymbolIndex::build(b, config.autojunk),
            blocks: OnceLock::new(),
        }
    }

    /// Longest matching block inside the given windows
    pub fn find_longest_match(&self, alo: usize, ahi: usize, blo: usize, bhi: usize) -> MatchBlock {
        find_longest_match(self.a, self.b, &self.index, alo, ahi, blo, bhi)
    }

    /// Ordered matching blocks, ending with the `(len_a, len_b, 0)` sentinel
    pub fn matching_blocks(&self) -> &[MatchBlock] {
        self.blocks
            .get_or_init(|| blocks::matching_blocks(self.a, self.b, &self.index))
    }

    /// Edit script covering both sequences
    pub fn opcodes(&self) -> Vec<Opcode> {
        opcodes::opcodes(self.matching_blocks())
    }

    /// Similarity percentage in `[0, 100]`
    pub fn ratio(&self) -> f64 {
        ratio::ratio(self.matching_blocks(), self.a.len(), self.b.len())
    }

    /// Cheap upper bound on [`Self::ratio`]
    pub fn quick_ratio(&self) -> f64 {
        ratio::quick_ratio(self.a, self.b)
    }

    /// Cheaper upper bound on [`Self::quick_ratio`]
    pub fn real_quick_ratio(&self) -> f64 {
        ratio::real_quick_ratio(self.a.len(), self.b.len())
    }

    /// Ratio and edit script together
    pub fn result(&self) -> SimilarityResult {
        SimilarityResult {
            ratio: self.ratio(),
            opcodes: self.opcodes(),
        }
    }
}

/// Compare two strings symbol by symbol.
///
/// Both strings must be non-empty; the score of an empty input carries no
/// information for a plate check.
pub fn compare(a: &str, b: &str) -> Result<SimilarityResult, CompareError> {
    compare_with(a, b, MatcherConfig::default())
}

/// [`compare`] with explicit matcher options
pub fn compare_with(
    a: &str,
    b: &str,
    config: MatcherConfig,
) -> Result<SimilarityResult, CompareError> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if let Some(side) = InputSide::empty_of(a.len(), b.len()) {
        return Err(CompareError::EmptyInput { side });
    }
    Ok(SequenceMatcher::with_config(&a, &b, config).result())
}

/// Similarity percentage of two strings, without the edit script.
///
/// Unlike [`compare`] this accepts empty input and scores it 0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    SequenceMatcher::new(&a, &b).ratio()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compare_identical() {
        let result = compare("KARMAL", "KARMAL").unwrap();
        assert_eq!(result.ratio, 100.0);
        assert_eq!(result.opcodes, vec![Opcode::equal(0, 6, 0, 6)]);
    }

    #[test]
    fn compare_one_substitution() {
        let result = compare("MH12AB1234", "MH12AB1235").unwrap();
        assert_eq!(result.ratio, 90.0);
        assert_eq!(
            result.opcodes,
            vec![Opcode::equal(0, 9, 0, 9), Opcode::replace(9, 10, 9, 10)]
        );
    }

    #[test]
    fn compare_disjoint() {
        let result = compare("ABCD", "WXYZ").unwrap();
        assert_eq!(result.ratio, 0.0);
        assert_eq!(result.opcodes, vec![Opcode::replace(0, 4, 0, 4)]);
    }

    #[test]
    fn compare_rejects_empty_input() {
        assert_eq!(
            compare("", "x"),
            Err(CompareError::EmptyInput {
                side: InputSide::Left
            })
        );
        assert_eq!(
            compare("", ""),
            Err(CompareError::EmptyInput {
                side: InputSide::Both
            })
        );
    }

    #[test]
    fn similarity_scores_empty_as_zero() {
        assert_eq!(similarity("", ""), 0.0);
        assert_eq!(similarity("ab", ""), 0.0);
    }

    #[test]
    fn compare_counts_chars_not_bytes() {
        let result = compare("ÄBC", "ÄBD").unwrap();
        assert!((result.ratio - 200.0 * 2.0 / 6.0).abs() < 1e-9);
        assert_eq!(
            result.opcodes,
            vec![Opcode::equal(0, 2, 0, 2), Opcode::replace(2, 3, 2, 3)]
        );
    }

    #[test]
    fn matcher_works_over_any_hashable_symbol() {
        let a = [1u32, 2, 3, 4];
        let b = [2u32, 3, 4, 5];
        let matcher = SequenceMatcher::new(&a, &b);
        assert_eq!(matcher.ratio(), 75.0);
        assert_eq!(matcher.find_longest_match(0, 4, 0, 4), MatchBlock::new(1, 0, 3));
        assert!(matcher.real_quick_ratio() >= matcher.quick_ratio());
        assert!(matcher.quick_ratio() >= matcher.ratio());
    }

    #[test]
    fn matching_blocks_are_cached() {
        let a: Vec<char> = "abcd".chars().collect();
        let matcher = SequenceMatcher::new(&a, &a);
        let first = matcher.matching_blocks().as_ptr();
        let second = matcher.matching_blocks().as_ptr();
        assert_eq!(first, second);
    }

    #[test]
    fn autojunk_leaves_short_inputs_alone() {
        let config = MatcherConfig::default().autojunk(true);
        let short = compare_with("MH12AB1234", "MH12AB1235", config).unwrap();
        assert_eq!(short.ratio, 90.0);
    }
}
