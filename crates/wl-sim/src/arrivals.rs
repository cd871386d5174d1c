//! Arrival processes: how many new referrals join the list each step.

use rand::Rng;
use rand_distr::Poisson;
use wl_core::{ArrivalConfig, Step, TrialRng, WlError, WlResult};

/// A stochastic source of per-step arrival counts.
///
/// Implementations must be `Send + Sync` so that one process can be shared
/// read-only by trials running on different threads; all mutable randomness
/// comes from the trial's own [`TrialRng`].
///
/// Counts are signed so that the runner can reject a misbehaving process
/// with `InvalidInput` instead of silently wrapping.
pub trait ArrivalProcess: Send + Sync {
    /// Number of arrivals at `step`.
    fn sample(&self, step: Step, rng: &mut TrialRng) -> WlResult<i64>;

    /// Fail-fast check over a run of `time_steps` steps.  Called by the
    /// runner builder before any trial starts.
    fn validate(&self, _time_steps: u32) -> WlResult<()> {
        Ok(())
    }
}

// ── Poisson ───────────────────────────────────────────────────────────────────

/// Poisson arrivals whose mean grows linearly with the step:
/// `λ(step) = mean_rate + growth_rate * step`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PoissonArrivals {
    pub mean_rate:   f64,
    pub growth_rate: f64,
}

impl PoissonArrivals {
    pub fn new(mean_rate: f64, growth_rate: f64) -> Self {
        Self { mean_rate, growth_rate }
    }

    fn config(&self) -> ArrivalConfig {
        ArrivalConfig::Poisson { mean_rate: self.mean_rate, growth_rate: self.growth_rate }
    }

    #[inline]
    pub fn mean_at(&self, step: Step) -> f64 {
        self.mean_rate + self.growth_rate * step.0 as f64
    }
}

impl ArrivalProcess for PoissonArrivals {
    fn sample(&self, step: Step, rng: &mut TrialRng) -> WlResult<i64> {
        let mean = self.mean_at(step);
        if mean == 0.0 {
            return Ok(0);
        }
        let dist = Poisson::new(mean).map_err(|e| {
            WlError::input(format!("Poisson mean {mean} at step {} is unusable: {e}", step.0))
        })?;
        let draw: f64 = rng.inner().sample(dist);
        Ok(draw as i64)
    }

    fn validate(&self, time_steps: u32) -> WlResult<()> {
        self.config().validate(time_steps)
    }
}

// ── Empirical ─────────────────────────────────────────────────────────────────

/// Uniform resampling from historical per-step arrival counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmpiricalArrivals {
    pub history: Vec<i64>,
}

impl EmpiricalArrivals {
    pub fn new(history: Vec<i64>) -> Self {
        Self { history }
    }
}

impl ArrivalProcess for EmpiricalArrivals {
    fn sample(&self, step: Step, rng: &mut TrialRng) -> WlResult<i64> {
        rng.choose(&self.history)
            .copied()
            .ok_or_else(|| WlError::input(format!("no arrival history to sample at step {}", step.0)))
    }

    fn validate(&self, time_steps: u32) -> WlResult<()> {
        ArrivalConfig::Empirical { history: self.history.clone() }.validate(time_steps)
    }
}

// ── ArrivalModel ──────────────────────────────────────────────────────────────

/// The configured arrival process, chosen explicitly by [`ArrivalConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum ArrivalModel {
    Poisson(PoissonArrivals),
    Empirical(EmpiricalArrivals),
}

impl From<&ArrivalConfig> for ArrivalModel {
    fn from(config: &ArrivalConfig) -> Self {
        match config {
            ArrivalConfig::Poisson { mean_rate, growth_rate } => {
                ArrivalModel::Poisson(PoissonArrivals::new(*mean_rate, *growth_rate))
            }
            ArrivalConfig::Empirical { history } => {
                ArrivalModel::Empirical(EmpiricalArrivals::new(history.clone()))
            }
        }
    }
}

impl ArrivalProcess for ArrivalModel {
    fn sample(&self, step: Step, rng: &mut TrialRng) -> WlResult<i64> {
        match self {
            ArrivalModel::Poisson(p)   => p.sample(step, rng),
            ArrivalModel::Empirical(e) => e.sample(step, rng),
        }
    }

    fn validate(&self, time_steps: u32) -> WlResult<()> {
        match self {
            ArrivalModel::Poisson(p)   => p.validate(time_steps),
            ArrivalModel::Empirical(e) => e.validate(time_steps),
        }
    }
}
