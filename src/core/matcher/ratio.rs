//! Gestalt similarity scores.
//!
//! All scores are percentages in `[0, 100]`: `200 * matches / (len_a + len_b)`.
//! Two empty inputs score 0.

use super::MatchBlock;
use std::collections::HashMap;
use std::hash::Hash;

/// Score from the number of matched symbols and the two lengths
pub fn percent(matches: usize, len_a: usize, len_b: usize) -> f64 {
    let total = len_a + len_b;
    if total == 0 {
        0.0
    } else {
        200.0 * matches as f64 / total as f64
    }
}

/// Ratcliff/Obershelp ratio from a match set
pub fn ratio(blocks: &[MatchBlock], len_a: usize, len_b: usize) -> f64 {
    let matches = blocks.iter().map(|block| block.len).sum();
    percent(matches, len_a, len_b)
}

/// Upper bound on [`ratio`] from symbol multiplicities alone
pub fn quick_ratio<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    let mut available: HashMap<&T, usize> = HashMap::new();
    for symbol in b {
        *available.entry(symbol).or_default() += 1;
    }

    let mut matches = 0;
    for symbol in a {
        if let Some(count) = available.get_mut(symbol) {
            if *count > 0 {
                *count -= 1;
                matches += 1;
            }
        }
    }
    percent(matches, a.len(), b.len())
}

/// Upper bound on [`quick_ratio`] from the lengths alone
pub fn real_quick_ratio(len_a: usize, len_b: usize) -> f64 {
    percent(len_a.min(len_b), len_a, len_b)
}
