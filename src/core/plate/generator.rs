//! Random valid plates and single-symbol mutations of them.

use super::Plate;
use crate::error::{ConfigError, PlateError};
use rand::Rng;

/// Default probability that a mutation returns its input unchanged
pub const DEFAULT_FAILURE_CHANCE: f64 = 0.05;

/// Symbols a mutation may write into a plate
pub const MUTATION_ALPHABET: &[u8; 36] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Produces valid plates and their "invalid" twins.
///
/// With probability `failure_chance` the twin is an accidental collision:
/// identical to its source. The harness relies on this to exercise its
/// failure reporting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlateGenerator {
    failure_chance: f64,
}

impl PlateGenerator {
    /// Create a generator; `failure_chance` must lie in `[0, 1]`
    pub fn new(failure_chance: f64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&failure_chance) {
            return Err(ConfigError::FailureChanceOutOfRange {
                value: failure_chance,
            });
        }
        Ok(Self { failure_chance })
    }

    pub fn failure_chance(&self) -> f64 {
        self.failure_chance
    }

    /// A random plate that satisfies the grammar
    pub fn valid<R: Rng + ?Sized>(&self, rng: &mut R) -> Plate {
        let state = random_letters(rng, 2);
        let district = random_digits(rng, 2);
        let series = random_letters(rng, 2);
        let number = rng.gen_range(1..=9999u16);
        Plate::from_parts(&state, &district, &series, number)
    }

    /// Change exactly one symbol of `plate`, or return it unchanged with
    /// probability `failure_chance`.
    ///
    /// The position is drawn once; the replacement is redrawn until it
    /// differs from the symbol already there.
    pub fn invalid<R: Rng + ?Sized>(&self, rng: &mut R, plate: &str) -> Result<String, PlateError> {
        let mut symbols: Vec<char> = plate.chars().collect();
        if symbols.is_empty() {
            return Err(PlateError::EmptyPlate);
        }
        if rng.gen_bool(self.failure_chance) {
            return Ok(plate.to_string());
        }

        let position = rng.gen_range(0..symbols.len());
        let original = symbols[position];
        let replacement = loop {
            let candidate = MUTATION_ALPHABET[rng.gen_range(0..MUTATION_ALPHABET.len())] as char;
            if candidate != original {
                break candidate;
            }
        };
        symbols[position] = replacement;
        Ok(symbols.into_iter().collect())
    }
}

impl Default for PlateGenerator {
    fn default() -> Self {
        Self {
            failure_chance: DEFAULT_FAILURE_CHANCE,
        }
    }
}

fn random_letters<R: Rng + ?Sized>(rng: &mut R, count: usize) -> String {
    (0..count).map(|_| rng.gen_range(b'A'..=b'Z') as char).collect()
}

fn random_digits<R: Rng + ?Sized>(rng: &mut R, count: usize) -> String {
    (0..count).map(|_| rng.gen_range(b'0'..=b'9') as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::plate::is_valid_plate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn differing_positions(a: &str, b: &str) -> usize {
        a.chars().zip(b.chars()).filter(|(x, y)| x != y).count()
    }

    #[test]
    fn valid_plates_match_grammar() {
        let generator = PlateGenerator::default();
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..500 {
            let plate = generator.valid(&mut rng);
            assert!(is_valid_plate(plate.as_str()), "{plate}");
            assert!((7..=10).contains(&plate.len()));
        }
    }

    #[test]
    fn mutation_changes_exactly_one_symbol() {
        let generator = PlateGenerator::new(0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let mutated = generator.invalid(&mut rng, "DL01CA9999").unwrap();
            assert_eq!(mutated.chars().count(), 10);
            assert_eq!(differing_positions("DL01CA9999", &mutated), 1);
        }
    }

    #[test]
    fn certain_failure_returns_input() {
        let generator = PlateGenerator::new(1.0).unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(generator.invalid(&mut rng, "KA05MN7").unwrap(), "KA05MN7");
    }

    #[test]
    fn single_symbol_plate_still_changes() {
        let generator = PlateGenerator::new(0.0).unwrap();
        let mut rng = StdRng::seed_from_u64(9);
        let mutated = generator.invalid(&mut rng, "A").unwrap();
        assert_ne!(mutated, "A");
        assert_eq!(mutated.len(), 1);
    }

    #[test]
    fn empty_plate_is_rejected() {
        let generator = PlateGenerator::default();
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(generator.invalid(&mut rng, ""), Err(PlateError::EmptyPlate));
    }

    #[test]
    fn failure_chance_must_be_a_probability() {
        assert!(PlateGenerator::new(-0.1).is_err());
        assert!(PlateGenerator::new(1.01).is_err());
        assert!(PlateGenerator::new(f64::NAN).is_err());
        assert_eq!(PlateGenerator::new(0.25).unwrap().failure_chance(), 0.25);
    }

    #[test]
    fn same_seed_same_plates() {
        let generator = PlateGenerator::default();
        let mut first = StdRng::seed_from_u64(77);
        let mut second = StdRng::seed_from_u64(77);
        for _ in 0..20 {
            assert_eq!(generator.valid(&mut first), generator.valid(&mut second));
        }
    }
}
