//! Validation batch execution.

use super::{Category, Summary, TestRecord};
use crate::core::matcher::similarity;
use crate::core::plate::{Plate, PlateGenerator, DEFAULT_FAILURE_CHANCE};
use crate::error::{ConfigError, GestaltError};
use crate::events::{
    null_sender, Event, EventSender, HarnessEvent, HarnessPhase, TestEvent,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Default number of tests in a batch (half valid, half invalid)
pub const DEFAULT_TEST_COUNT: usize = 1000;

/// Result of a validation batch
#[derive(Debug, Clone)]
pub struct HarnessResult {
    /// Every record, valid pass first, in generation order
    pub records: Vec<TestRecord>,
    pub summary: Summary,
    /// Seed the plates were generated from
    pub seed: u64,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

/// Configuration for a validation batch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HarnessConfig {
    /// Total tests; `count / 2` plate pairs are generated
    pub count: usize,
    /// Probability that an invalid twin collides with its source
    pub failure_chance: f64,
    /// Seed for plate generation
    pub seed: u64,
    /// Score pairs on the rayon pool
    pub parallel: bool,
}

impl HarnessConfig {
    /// Check the configuration before any work is done
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.count == 0 {
            return Err(ConfigError::InvalidCount { count: self.count });
        }
        if !(0.0..=1.0).contains(&self.failure_chance) {
            return Err(ConfigError::FailureChanceOutOfRange {
                value: self.failure_chance,
            });
        }
        Ok(())
    }

    /// Number of valid/invalid pairs this configuration generates
    pub fn pairs(&self) -> usize {
        self.count / 2
    }
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_TEST_COUNT,
            failure_chance: DEFAULT_FAILURE_CHANCE,
            seed: 0,
            parallel: true,
        }
    }
}

/// Builder for harness configuration
pub struct HarnessBuilder {
    config: HarnessConfig,
}

impl HarnessBuilder {
    pub fn new() -> Self {
        Self {
            config: HarnessConfig::default(),
        }
    }

    /// Set the total number of tests
    pub fn count(mut self, count: usize) -> Self {
        self.config.count = count;
        self
    }

    /// Set the accidental-collision probability
    pub fn failure_chance(mut self, failure_chance: f64) -> Self {
        self.config.failure_chance = failure_chance;
        self
    }

    /// Set the generation seed
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = seed;
        self
    }

    /// Score on the rayon pool or on the calling thread
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.config.parallel = parallel;
        self
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: HarnessConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(self) -> ValidationHarness {
        ValidationHarness {
            config: self.config,
        }
    }
}

impl Default for HarnessBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs self-tests and cross-tests over generated plates
pub struct ValidationHarness {
    config: HarnessConfig,
}

impl ValidationHarness {
    pub fn builder() -> HarnessBuilder {
        HarnessBuilder::new()
    }

    pub fn config(&self) -> &HarnessConfig {
        &self.config
    }

    /// Run the batch without a listener
    pub fn run(&self) -> Result<HarnessResult, GestaltError> {
        self.execute(&null_sender(), &mut |_: &TestRecord| {})
    }

    /// Run the batch, handing every record to `observer` in order.
    ///
    /// Sequential runs deliver each record as soon as it is scored; parallel
    /// runs deliver a pass's records once the whole pass has been scored.
    pub fn run_with_observer<F>(&self, mut observer: F) -> Result<HarnessResult, GestaltError>
    where
        F: FnMut(&TestRecord),
    {
        self.execute(&null_sender(), &mut observer)
    }

    /// Run the batch with event reporting
    pub fn run_with_events(&self, events: &EventSender) -> Result<HarnessResult, GestaltError> {
        self.execute(events, &mut |_: &TestRecord| {})
    }

    fn execute(
        &self,
        events: &EventSender,
        observer: &mut dyn FnMut(&TestRecord),
    ) -> Result<HarnessResult, GestaltError> {
        let start_time = Instant::now();

        if let Err(error) = self.config.validate() {
            events.send(Event::Harness(HarnessEvent::Error {
                message: error.to_string(),
            }));
            return Err(error.into());
        }

        let generator = PlateGenerator::new(self.config.failure_chance)?;
        let pairs = self.config.pairs();
        let seed = self.config.seed;

        tracing::info!(
            pairs,
            seed,
            failure_chance = self.config.failure_chance,
            "starting validation batch"
        );
        events.send(Event::Harness(HarnessEvent::Started { pairs, seed }));

        // Phase 1: Generating
        events.send(Event::Harness(HarnessEvent::PhaseChanged {
            phase: HarnessPhase::Generating,
        }));
        let mut rng = StdRng::seed_from_u64(seed);
        let valid: Vec<Plate> = (0..pairs).map(|_| generator.valid(&mut rng)).collect();
        let invalid = valid
            .iter()
            .map(|plate| generator.invalid(&mut rng, plate.as_str()))
            .collect::<Result<Vec<String>, _>>()?;

        let mut records = Vec::with_capacity(pairs * 2);
        let mut summary = Summary::default();

        // Phase 2: valid plates against themselves
        let self_pairs: Vec<(&str, &str)> =
            valid.iter().map(|p| (p.as_str(), p.as_str())).collect();
        self.run_pass(
            Category::Valid,
            HarnessPhase::SelfTest,
            &self_pairs,
            events,
            observer,
            &mut records,
            &mut summary,
        );

        // Phase 3: valid plates against their twins
        let cross_pairs: Vec<(&str, &str)> = valid
            .iter()
            .zip(&invalid)
            .map(|(v, i)| (v.as_str(), i.as_str()))
            .collect();
        self.run_pass(
            Category::Invalid,
            HarnessPhase::CrossTest,
            &cross_pairs,
            events,
            observer,
            &mut records,
            &mut summary,
        );

        let duration_ms = start_time.elapsed().as_millis() as u64;
        tracing::info!(
            passed = summary.total_passed(),
            failed = summary.total_failed(),
            duration_ms,
            "validation batch finished"
        );
        events.send(Event::Harness(HarnessEvent::Completed {
            summary,
            duration_ms,
        }));

        Ok(HarnessResult {
            records,
            summary,
            seed,
            duration_ms,
        })
    }

    #[allow(clippy::too_many_arguments)]
    fn run_pass(
        &self,
        category: Category,
        phase: HarnessPhase,
        pairs: &[(&str, &str)],
        events: &EventSender,
        observer: &mut dyn FnMut(&TestRecord),
        records: &mut Vec<TestRecord>,
        summary: &mut Summary,
    ) {
        events.send(Event::Harness(HarnessEvent::PhaseChanged { phase }));
        tracing::debug!(%category, tests = pairs.len(), "starting pass");

        for (i, ((left, right), score)) in pairs.iter().zip(self.scores(pairs)).enumerate() {
            let record = TestRecord {
                index: i + 1,
                category,
                left: left.to_string(),
                right: right.to_string(),
                similarity: score,
                outcome: category.classify(score),
            };
            if !record.outcome.is_pass() {
                tracing::warn!(
                    %category,
                    left = %record.left,
                    right = %record.right,
                    similarity = record.similarity,
                    "test failed"
                );
            }

            summary.record(&record);
            observer(&record);
            events.send(Event::Test(TestEvent::Record(record.clone())));
            records.push(record);
        }

        let stats = summary.stats(category);
        tracing::debug!(%category, passed = stats.passed, failed = stats.failed, "pass finished");
        events.send(Event::Test(TestEvent::PassCompleted { category, stats }));
    }

    /// Scores in input order.
    ///
    /// Sequential scoring is lazy, so each record is emitted before the next
    /// pair is scored. Parallel scoring finishes the pass first; the indexed
    /// collect keeps input order.
    fn scores<'p>(
        &self,
        pairs: &'p [(&'p str, &'p str)],
    ) -> Box<dyn Iterator<Item = f64> + 'p> {
        if self.config.parallel {
            let scores: Vec<f64> = pairs.par_iter().map(|(a, b)| similarity(a, b)).collect();
            Box::new(scores.into_iter())
        } else {
            Box::new(pairs.iter().map(|(a, b)| similarity(a, b)))
        }
    }
}
