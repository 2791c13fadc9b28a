//! Recursive decomposition of two sequences into matching blocks.

use super::longest::{find_longest_match, SymbolIndex};
use super::MatchBlock;
use std::hash::Hash;

/// All non-overlapping matching blocks of `a` and `b`, in order.
///
/// Each window is split around its longest match and both sides are pushed
/// back onto a work list, so no accumulator is shared between branches.
/// Blocks that touch in both sequences are merged, and the result always
/// ends with the sentinel `(a.len(), b.len(), 0)`.
pub fn matching_blocks<T: Eq + Hash>(
    a: &[T],
    b: &[T],
    index: &SymbolIndex<'_, T>,
) -> Vec<MatchBlock> {
    let mut pending = vec![(0, a.len(), 0, b.len())];
    let mut found = Vec::new();

    while let Some((alo, ahi, blo, bhi)) = pending.pop() {
        let block = find_longest_match(a, b, index, alo, ahi, blo, bhi);
        if block.is_empty() {
            continue;
        }
        found.push(block);
        if alo < block.a_start && blo < block.b_start {
            pending.push((alo, block.a_start, blo, block.b_start));
        }
        if block.a_end() < ahi && block.b_end() < bhi {
            pending.push((block.a_end(), ahi, block.b_end(), bhi));
        }
    }
    found.sort_unstable_by_key(|block| (block.a_start, block.b_start));

    let mut blocks = merge_adjacent(found);
    blocks.push(MatchBlock::new(a.len(), b.len(), 0));
    blocks
}

/// Collapse blocks that continue each other in both sequences
fn merge_adjacent(sorted: Vec<MatchBlock>) -> Vec<MatchBlock> {
    let mut merged: Vec<MatchBlock> = Vec::with_capacity(sorted.len());
    for block in sorted {
        match merged.last_mut() {
            Some(prev) if prev.a_end() == block.a_start && prev.b_end() == block.b_start => {
                prev.len += block.len;
            }
            _ => merged.push(block),
        }
    }
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(a: &str, b: &str) -> Vec<MatchBlock> {
        let a: Vec<char> = a.chars().collect();
        let b: Vec<char> = b.chars().collect();
        let index = SymbolIndex::new(&b);
        matching_blocks(&a, &b, &index)
    }

    #[test]
    fn identical_inputs_give_one_block() {
        assert_eq!(
            blocks("KARMAL", "KARMAL"),
            vec![MatchBlock::new(0, 0, 6), MatchBlock::new(6, 6, 0)]
        );
    }

    #[test]
    fn single_substitution_at_end() {
        assert_eq!(
            blocks("MH12AB1234", "MH12AB1235"),
            vec![MatchBlock::new(0, 0, 9), MatchBlock::new(10, 10, 0)]
        );
    }

    #[test]
    fn disjoint_inputs_give_only_sentinel() {
        assert_eq!(blocks("ABCD", "WXYZ"), vec![MatchBlock::new(4, 4, 0)]);
    }

    #[test]
    fn recurses_on_both_sides() {
        // "abxcd" vs "abcd": longest is "ab", then "cd" on the right
        assert_eq!(
            blocks("abxcd", "abcd"),
            vec![
                MatchBlock::new(0, 0, 2),
                MatchBlock::new(3, 2, 2),
                MatchBlock::new(5, 4, 0),
            ]
        );
        // Classic example: "abxcd" vs "abcd" mirrored plus prefix noise
        assert_eq!(
            blocks("qabxcd", "abycdf"),
            vec![
                MatchBlock::new(1, 0, 2),
                MatchBlock::new(4, 3, 2),
                MatchBlock::new(6, 6, 0),
            ]
        );
    }

    #[test]
    fn empty_inputs_give_only_sentinel() {
        assert_eq!(blocks("", ""), vec![MatchBlock::new(0, 0, 0)]);
        assert_eq!(blocks("abc", ""), vec![MatchBlock::new(3, 0, 0)]);
    }

    #[test]
    fn merge_joins_contiguous_blocks() {
        let merged = merge_adjacent(vec![
            MatchBlock::new(0, 0, 2),
            MatchBlock::new(2, 2, 3),
            MatchBlock::new(6, 6, 1),
        ]);
        assert_eq!(
            merged,
            vec![MatchBlock::new(0, 0, 5), MatchBlock::new(6, 6, 1)]
        );
    }

    #[test]
    fn blocks_are_strictly_increasing() {
        let result = blocks("private Thread currentThread;", "private volatile Thread currentThread;");
        for pair in result.windows(2) {
            assert!(pair[0].a_end() <= pair[1].a_start);
            assert!(pair[0].b_end() <= pair[1].b_start);
        }
        let matched: usize = result.iter().map(|b| b.len).sum();
        assert_eq!(matched, "private Thread currentThread;".len());
    }
}
