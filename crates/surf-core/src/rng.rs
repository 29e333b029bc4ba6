//! Deterministic per-session RNG.
//!
//! # Determinism strategy
//!
//! One `SessionRng` feeds *every* random draw of one session — population
//! generation, wave-schedule generation, and all per-tick decisions — in the
//! fixed order dictated by the tick loop.  Replaying a seed replays the
//! session exactly.
//!
//! Monte-Carlo repetitions each get their own stream via
//! [`SessionRng::for_run`]:
//!
//!   seed = global_seed XOR (run_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive run indices uniformly across the seed space.
//! Runs therefore never share RNG state and can execute on any thread in any
//! order without disturbing each other's results.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Beta, Distribution, Gamma, LogNormal, Normal, Poisson};

use crate::{CoreError, CoreResult};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// The single random draw stream owned by one session.
///
/// The type is `Send` but intentionally not `Sync` — a stream must never be
/// shared between threads.  Independent sessions hold independent streams.
pub struct SessionRng(SmallRng);

impl SessionRng {
    /// Seed a stream directly.
    pub fn new(seed: u64) -> Self {
        SessionRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed the stream for Monte-Carlo run `run` of a batch with `global_seed`.
    pub fn for_run(global_seed: u64, run: u64) -> Self {
        SessionRng::new(global_seed ^ run.wrapping_mul(MIXING_CONSTANT))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }

    /// `true` with probability `p` (clamped to [0, 1]).
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Shuffle a mutable slice in-place (Fisher-Yates).
    #[inline]
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.0);
    }

    // ── Distribution draws ────────────────────────────────────────────────
    //
    // All constructors in `rand_distr` are fallible; parameter errors are
    // surfaced as `CoreError::Distribution` instead of panicking mid-session.

    /// Uniform draw over `[low, high]`.  Errors if the range is inverted.
    pub fn uniform(&mut self, low: f64, high: f64) -> CoreResult<f64> {
        if !(low <= high) {
            return Err(CoreError::Distribution(format!(
                "uniform bounds inverted: [{low}, {high}]"
            )));
        }
        Ok(self.0.gen_range(low..=high))
    }

    /// Normal draw with mean `mean` and standard deviation `std_dev`.
    pub fn normal(&mut self, mean: f64, std_dev: f64) -> CoreResult<f64> {
        let dist = Normal::new(mean, std_dev)
            .map_err(|e| CoreError::Distribution(format!("normal({mean}, {std_dev}): {e}")))?;
        Ok(dist.sample(&mut self.0))
    }

    /// Lognormal draw with location `mu` and shape `sigma`.
    pub fn lognormal(&mut self, mu: f64, sigma: f64) -> CoreResult<f64> {
        let dist = LogNormal::new(mu, sigma)
            .map_err(|e| CoreError::Distribution(format!("lognormal({mu}, {sigma}): {e}")))?;
        Ok(dist.sample(&mut self.0))
    }

    /// Gamma draw with the given shape and scale.
    pub fn gamma(&mut self, shape: f64, scale: f64) -> CoreResult<f64> {
        let dist = Gamma::new(shape, scale)
            .map_err(|e| CoreError::Distribution(format!("gamma({shape}, {scale}): {e}")))?;
        Ok(dist.sample(&mut self.0))
    }

    /// Beta draw with the given shape parameters.  Result lies in [0, 1].
    pub fn beta(&mut self, alpha: f64, beta: f64) -> CoreResult<f64> {
        let dist = Beta::new(alpha, beta)
            .map_err(|e| CoreError::Distribution(format!("beta({alpha}, {beta}): {e}")))?;
        Ok(dist.sample(&mut self.0))
    }

    /// Poisson draw with mean `lambda`.
    pub fn poisson(&mut self, lambda: f64) -> CoreResult<u64> {
        let dist = Poisson::new(lambda)
            .map_err(|e| CoreError::Distribution(format!("poisson({lambda}): {e}")))?;
        let sample: f64 = dist.sample(&mut self.0);
        Ok(sample as u64)
    }
}
