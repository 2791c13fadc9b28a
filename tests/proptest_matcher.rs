//! Property-based tests for the matcher.
//!
//! Validates:
//! 1. Self-identity: any non-empty string scores 100 against itself
//! 2. Coverage: opcodes partition both inputs with no gaps or overlaps
//! 3. Range bound: scores stay within [0, 100]
//! 4. Upper bounds: real_quick_ratio >= quick_ratio >= ratio
//! 5. Match set shape: strictly increasing, non-touching, sentinel-terminated
//! 6. Single mutations of generated plates always score below 100

use proptest::prelude::*;

use gestalt_match::core::matcher::{compare, MatcherConfig, OpTag, SequenceMatcher};
use gestalt_match::core::plate::PlateGenerator;
use rand::rngs::StdRng;
use rand::SeedableRng;

// =============================================================================
// Strategies
// =============================================================================

/// Short strings over a small alphabet so that repeats are common.
fn arb_symbols() -> impl Strategy<Value = String> {
    "[ABC0-2]{0,24}"
}

fn arb_nonempty() -> impl Strategy<Value = String> {
    "[A-Z0-9]{1,24}"
}

fn chars(s: &str) -> Vec<char> {
    s.chars().collect()
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn self_comparison_is_identity(a in arb_nonempty()) {
        let result = compare(&a, &a).unwrap();
        prop_assert_eq!(result.ratio, 100.0);
        prop_assert_eq!(result.opcodes.len(), 1);
        prop_assert_eq!(result.opcodes[0].tag, OpTag::Equal);
    }

    #[test]
    fn opcodes_cover_both_inputs(a in arb_symbols(), b in arb_symbols()) {
        let (a, b) = (chars(&a), chars(&b));
        let ops = SequenceMatcher::new(&a, &b).opcodes();

        let (mut i, mut j) = (0, 0);
        for op in &ops {
            prop_assert_eq!(op.a_start, i);
            prop_assert_eq!(op.b_start, j);
            prop_assert!(op.a_end >= op.a_start);
            prop_assert!(op.b_end >= op.b_start);
            match op.tag {
                OpTag::Equal => {
                    prop_assert_eq!(op.a_len(), op.b_len());
                    prop_assert_eq!(&a[op.a_start..op.a_end], &b[op.b_start..op.b_end]);
                }
                OpTag::Delete => prop_assert_eq!(op.b_len(), 0),
                OpTag::Insert => prop_assert_eq!(op.a_len(), 0),
                OpTag::Replace => prop_assert!(op.a_len() > 0 && op.b_len() > 0),
            }
            i = op.a_end;
            j = op.b_end;
        }
        prop_assert_eq!(i, a.len());
        prop_assert_eq!(j, b.len());
    }

    #[test]
    fn ratio_is_bounded(a in arb_symbols(), b in arb_symbols()) {
        let (a, b) = (chars(&a), chars(&b));
        let ratio = SequenceMatcher::new(&a, &b).ratio();
        prop_assert!((0.0..=100.0).contains(&ratio));
    }

    #[test]
    fn quick_ratios_are_upper_bounds(a in arb_symbols(), b in arb_symbols()) {
        let (a, b) = (chars(&a), chars(&b));
        let matcher = SequenceMatcher::new(&a, &b);
        prop_assert!(matcher.real_quick_ratio() >= matcher.quick_ratio());
        prop_assert!(matcher.quick_ratio() >= matcher.ratio());
    }

    #[test]
    fn matching_blocks_are_ordered_and_maximal(a in arb_symbols(), b in arb_symbols()) {
        let (a, b) = (chars(&a), chars(&b));
        let matcher = SequenceMatcher::new(&a, &b);
        let blocks = matcher.matching_blocks();

        let sentinel = blocks[blocks.len() - 1];
        prop_assert_eq!((sentinel.a_start, sentinel.b_start, sentinel.len), (a.len(), b.len(), 0));

        for block in &blocks[..blocks.len() - 1] {
            prop_assert!(block.len > 0);
            prop_assert_eq!(&a[block.a_start..block.a_end()], &b[block.b_start..block.b_end()]);
        }
        for pair in blocks.windows(2) {
            prop_assert!(pair[0].a_end() <= pair[1].a_start);
            prop_assert!(pair[0].b_end() <= pair[1].b_start);
            // Touching blocks would have been merged
            prop_assert!(
                pair[1].len == 0
                    || pair[0].a_end() != pair[1].a_start
                    || pair[0].b_end() != pair[1].b_start
            );
        }
    }

    #[test]
    fn autojunk_is_inert_on_short_inputs(a in arb_symbols(), b in arb_symbols()) {
        let (a, b) = (chars(&a), chars(&b));
        let plain = SequenceMatcher::new(&a, &b);
        let pruned = SequenceMatcher::with_config(&a, &b, MatcherConfig::default().autojunk(true));
        prop_assert_eq!(plain.matching_blocks(), pruned.matching_blocks());
    }

    #[test]
    fn single_mutation_is_detected(seed in any::<u64>()) {
        let generator = PlateGenerator::new(0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let plate = generator.valid(&mut rng);
        let mutated = generator.invalid(&mut rng, plate.as_str()).unwrap();
        let result = compare(plate.as_str(), &mutated).unwrap();
        prop_assert!(result.ratio < 100.0);
    }
}
