//! Determinism testing utilities.
//!
//! Provides a harness for verifying that the production core produces
//! identical results given identical inputs.
//!
//! # Testing Strategy
//!
//! Save/load round-trips and replay verification require the core to
//! be 100% deterministic. Sources of non-determinism include:
//!
//! - **Floating-point math**: Different CPUs can produce different
//!   results. Speed multipliers use fixed-point arithmetic via
//!   [`ville_core::math::Fixed`] throughout.
//!
//! - **HashMap iteration order**: Rust's default hasher is randomized.
//!   Queues and stockpiles are always walked in sorted key order.
//!
//! - **System randomness**: The core never reads the wall clock or an
//!   unseeded RNG; the host supplies every timestamp.
//!
//! # Test Levels
//!
//! 1. **Unit tests**: Individual operation determinism
//! 2. **Property tests**: Random inputs must still produce deterministic outputs
//! 3. **Integration tests**: Full town scenarios are reproducible
//! 4. **Parallel tests**: Running N towns in parallel all match

use std::thread;

use crate::fixtures::TownFixture;

/// Result of a determinism test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeterminismResult {
    /// Whether all runs produced identical results.
    pub is_deterministic: bool,
    /// Hashes from each run.
    pub hashes: Vec<u64>,
    /// Number of minutes simulated.
    pub minutes: u64,
}

impl DeterminismResult {
    /// Get all unique hashes (should be 1 for a deterministic core).
    #[must_use]
    pub fn unique_hashes(&self) -> Vec<u64> {
        let mut unique: Vec<u64> = self.hashes.clone();
        unique.sort_unstable();
        unique.dedup();
        unique
    }

    /// Assert that the run was deterministic, with a detailed error message.
    ///
    /// # Panics
    ///
    /// Panics if the runs produced different hashes.
    pub fn assert_deterministic(&self) {
        if !self.is_deterministic {
            let unique = self.unique_hashes();
            panic!(
                "Production core is non-deterministic!\n\
                 Runs: {}\n\
                 Minutes: {}\n\
                 Unique hashes: {} (expected 1)\n\
                 All hashes: {:?}",
                self.hashes.len(),
                self.minutes,
                unique.len(),
                self.hashes
            );
        }
    }
}

/// Run a scenario multiple times and verify determinism.
///
/// # Arguments
///
/// * `runs` - Number of times to run the scenario
/// * `minutes` - Number of game minutes to advance per run
/// * `setup` - Function to create initial state
/// * `step` - Function to advance state by one minute
/// * `hash` - Function to compute state hash
pub fn verify_determinism<S, Setup, Step, HashFn>(
    runs: usize,
    minutes: u64,
    setup: Setup,
    step: Step,
    hash: HashFn,
) -> DeterminismResult
where
    Setup: Fn() -> S,
    Step: Fn(&mut S, i64),
    HashFn: Fn(&S) -> u64,
{
    let mut hashes = Vec::with_capacity(runs);

    for _ in 0..runs {
        let mut state = setup();

        for minute in 0..minutes {
            step(&mut state, i64::try_from(minute).unwrap_or(i64::MAX));
        }

        hashes.push(hash(&state));
    }

    let is_deterministic = hashes.windows(2).all(|w| w[0] == w[1]);

    DeterminismResult {
        is_deterministic,
        hashes,
        minutes,
    }
}

/// Simplified determinism verification for [`TownFixture`] scenarios.
///
/// Runs the scenario twice with identical setup, advancing minute by
/// minute, and verifies the final combined state hashes match exactly.
pub fn verify_town_determinism<F>(setup_fn: F, minutes: u64) -> bool
where
    F: Fn() -> TownFixture,
{
    let result = verify_determinism(
        2,
        minutes,
        &setup_fn,
        |town, minute| {
            town.advance_to(minute);
        },
        TownFixture::state_hash,
    );
    result.is_deterministic
}

/// Run the same scenario on N threads and verify every final hash matches.
///
/// Catches non-determinism that only shows up under scheduler noise,
/// such as accidental reliance on hash-map iteration order.
pub fn verify_parallel_town_determinism<F>(setup_fn: F, minutes: u64, num_towns: usize) -> bool
where
    F: Fn() -> TownFixture + Send + Sync,
{
    let hashes: Vec<u64> = thread::scope(|scope| {
        let handles: Vec<_> = (0..num_towns)
            .map(|_| {
                scope.spawn(|| {
                    let mut town = setup_fn();
                    for minute in 0..minutes {
                        town.advance_to(i64::try_from(minute).unwrap_or(i64::MAX));
                    }
                    town.state_hash()
                })
            })
            .collect();
        handles
            .into_iter()
            .map(|h| h.join().unwrap_or_default())
            .collect()
    });

    hashes.windows(2).all(|w| w[0] == w[1])
}
