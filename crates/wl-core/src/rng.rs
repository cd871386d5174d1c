//! Explicit random streams.
//!
//! Every stochastic stage of a trial (cancellation, DNA, discharge, arrival
//! counts) draws from that trial's [`TrialRng`], passed in by `&mut`.  A
//! trial's stream depends only on the run seed and the trial index:
//!
//!   seed = global_seed XOR (trial * MIXING_CONSTANT)
//!
//! so trials can execute on any thread, in any order, and a run with more
//! trials reproduces the rows of a run with fewer.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::TrialId;

/// 64-bit fractional golden-ratio constant; spreads consecutive trial
/// indices across the seed space.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// The random stream owned by one trial.  `!Sync`.
pub struct TrialRng(SmallRng);

impl TrialRng {
    pub fn new(global_seed: u64, trial: TrialId) -> Self {
        Self::from_seed(global_seed ^ (trial.0 as u64).wrapping_mul(MIXING_CONSTANT))
    }

    pub fn from_seed(seed: u64) -> Self {
        TrialRng(SmallRng::seed_from_u64(seed))
    }

    /// For `rand_distr` sampling (`rng.inner().sample(dist)`).
    #[inline]
    pub fn inner(&mut self) -> &mut SmallRng {
        &mut self.0
    }

    /// One Bernoulli draw.  Rates are validated upstream; the clamp only
    /// keeps `rand` from panicking on float noise at the edges.
    #[inline]
    pub fn gen_bool(&mut self, p: f64) -> bool {
        self.0.gen_bool(p.clamp(0.0, 1.0))
    }

    /// Uniform pick from `slice`, `None` when it is empty.
    #[inline]
    pub fn choose<'a, T>(&mut self, slice: &'a [T]) -> Option<&'a T> {
        use rand::seq::SliceRandom;
        slice.choose(&mut self.0)
    }
}

/// Stream for work outside any trial, such as generating a synthetic
/// initial backlog.  Single-threaded use only.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Independent stream derived from this one and `offset`.
    pub fn child(&mut self, offset: u64) -> SimRng {
        let seed = self.0.r#gen::<u64>() ^ offset.wrapping_mul(MIXING_CONSTANT);
        SimRng::new(seed)
    }

    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
