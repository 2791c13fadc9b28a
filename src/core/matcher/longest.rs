//! Longest common contiguous run inside a pair of windows.

use super::MatchBlock;
use std::collections::{HashMap, HashSet};
use std::hash::Hash;

/// Sequences at least this long are eligible for popularity pruning
const AUTOJUNK_MIN_LEN: usize = 200;

/// Maps every symbol of `b` to its ascending positions in `b`.
///
/// With popularity pruning, symbols that make up more than ~1% of a long
/// `b` are left out of the map and recorded in `popular` instead.
#[derive(Debug)]
pub struct SymbolIndex<'a, T: Eq + Hash> {
    positions: HashMap<&'a T, Vec<usize>>,
    popular: HashSet<&'a T>,
}

impl<'a, T: Eq + Hash> SymbolIndex<'a, T> {
    /// Index every symbol of `b`
    pub fn new(b: &'a [T]) -> Self {
        Self::build(b, false)
    }

    /// Index `b`, optionally dropping popular symbols
    pub fn build(b: &'a [T], autojunk: bool) -> Self {
        let mut positions: HashMap<&'a T, Vec<usize>> = HashMap::new();
        for (j, symbol) in b.iter().enumerate() {
            positions.entry(symbol).or_default().push(j);
        }

        let mut popular = HashSet::new();
        let n = b.len();
        if autojunk && n >= AUTOJUNK_MIN_LEN {
            let limit = n / 100 + 1;
            positions.retain(|symbol, idxs| {
                if idxs.len() > limit {
                    popular.insert(*symbol);
                    false
                } else {
                    true
                }
            });
        }

        Self { positions, popular }
    }

    /// Positions of `symbol` in `b`, ascending
    pub fn positions(&self, symbol: &T) -> &[usize] {
        self.positions.get(symbol).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Symbols pruned for being too frequent
    pub fn popular(&self) -> impl Iterator<Item = &&'a T> + '_ {
        self.popular.iter()
    }

    pub fn is_popular(&self, symbol: &T) -> bool {
        self.popular.contains(symbol)
    }
}

/// Find the longest block with `a[alo..ahi]` and `b[blo..bhi]`.
///
/// Ties go to the smallest `a_start`, then the smallest `b_start`. When the
/// windows share nothing the result is `(alo, blo, 0)`.
///
/// Runs in O(|a window| * occurrences) by walking only the indexed
/// positions of each `a` symbol; `run_lengths[j]` holds the length of the
/// longest run ending at `a[i - 1]` and `b[j]`.
pub fn find_longest_match<T: Eq + Hash>(
    a: &[T],
    b: &[T],
    index: &SymbolIndex<'_, T>,
    alo: usize,
    ahi: usize,
    blo: usize,
    bhi: usize,
) -> MatchBlock {
    debug_assert!(alo <= ahi && ahi <= a.len());
    debug_assert!(blo <= bhi && bhi <= b.len());

    let mut best = MatchBlock::new(alo, blo, 0);
    let mut run_lengths: HashMap<usize, usize> = HashMap::new();

    for i in alo..ahi {
        let mut next_lengths = HashMap::new();
        let positions = index.positions(&a[i]);
        let first = positions.partition_point(|&j| j < blo);

        for &j in &positions[first..] {
            if j >= bhi {
                break;
            }
            let k = j
                .checked_sub(1)
                .and_then(|prev| run_lengths.get(&prev))
                .copied()
                .unwrap_or(0)
                + 1;
            next_lengths.insert(j, k);
            if k > best.len {
                best = MatchBlock::new(i + 1 - k, j + 1 - k, k);
            }
        }
        run_lengths = next_lengths;
    }

    // Popular symbols never enter the table, so let them join the edges of
    // the best run. Without pruning the run is already maximal.
    while best.a_start > alo && best.b_start > blo && a[best.a_start - 1] == b[best.b_start - 1] {
        best = MatchBlock::new(best.a_start - 1, best.b_start - 1, best.len + 1);
    }
    while best.a_end() < ahi && best.b_end() < bhi && a[best.a_end()] == b[best.b_end()] {
        best.len += 1;
    }

    best
}
