//! Run configuration.
//!
//! Everything a run needs is plain data held in [`SimConfig`].  Applications
//! typically build one in code or (with the `serde` feature) load it from a
//! JSON file, then hand it to the runner.  [`SimConfig::validate`] performs
//! every fail-fast check so that no simulation work starts on bad input.

use crate::{Step, WlError, WlResult};

// ── ServiceRates ──────────────────────────────────────────────────────────────

/// Per-step probabilities governing one service's patient outcomes.
///
/// Fixed for the lifetime of a waiting list.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ServiceRates {
    /// Probability that a patient selected for treatment does not attend.
    pub dna_rate: f64,

    /// Of the patients that DNA, the probability that they are discharged
    /// rather than returned to the waiting list.
    pub proportion_dna_discharged: f64,

    /// Probability that any waiting patient cancels in a given step.
    pub cancellation_rate: f64,
}

impl ServiceRates {
    /// All rates zero: every selected patient is treated, nobody cancels.
    pub const ZERO: ServiceRates = ServiceRates {
        dna_rate:                  0.0,
        proportion_dna_discharged: 0.0,
        cancellation_rate:         0.0,
    };

    /// Each rate must be a finite probability in `[0, 1]`.
    pub fn validate(&self) -> WlResult<()> {
        for (name, value) in [
            ("dna_rate", self.dna_rate),
            ("proportion_dna_discharged", self.proportion_dna_discharged),
            ("cancellation_rate", self.cancellation_rate),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(WlError::config(format!(
                    "{name} must be a probability in [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for ServiceRates {
    fn default() -> Self {
        Self {
            dna_rate:                  0.05,
            proportion_dna_discharged: 0.05,
            cancellation_rate:         0.01,
        }
    }
}

// ── ArrivalConfig ─────────────────────────────────────────────────────────────

/// Which stochastic process generates the number of new referrals per step.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "model", rename_all = "snake_case"))]
pub enum ArrivalConfig {
    /// Poisson arrivals with mean `mean_rate + growth_rate * step`.
    Poisson {
        mean_rate:   f64,
        #[cfg_attr(feature = "serde", serde(default))]
        growth_rate: f64,
    },

    /// Uniform resampling from historical per-step arrival counts.
    Empirical { history: Vec<i64> },
}

impl ArrivalConfig {
    /// Constant-mean Poisson arrivals.
    pub fn poisson(mean_rate: f64) -> Self {
        ArrivalConfig::Poisson { mean_rate, growth_rate: 0.0 }
    }

    /// Poisson mean at `step`, or `None` for the empirical model.
    pub fn poisson_mean(&self, step: Step) -> Option<f64> {
        match self {
            ArrivalConfig::Poisson { mean_rate, growth_rate } => {
                Some(mean_rate + growth_rate * step.0 as f64)
            }
            ArrivalConfig::Empirical { .. } => None,
        }
    }

    /// Check the model is well-formed over a run of `time_steps` steps.
    ///
    /// The Poisson mean is linear in the step, so checking the first and
    /// last step covers every step in between.
    pub fn validate(&self, time_steps: u32) -> WlResult<()> {
        match self {
            ArrivalConfig::Poisson { mean_rate, growth_rate } => {
                if !mean_rate.is_finite() || *mean_rate < 0.0 {
                    return Err(WlError::config(format!(
                        "mean arrival rate must be finite and non-negative, got {mean_rate}"
                    )));
                }
                if !growth_rate.is_finite() {
                    return Err(WlError::config(format!(
                        "linear growth rate must be finite, got {growth_rate}"
                    )));
                }
                for step in [Step::FIRST, Step(time_steps.max(1))] {
                    let mean = self.poisson_mean(step).unwrap_or_default();
                    if mean < 0.0 {
                        return Err(WlError::config(format!(
                            "Poisson mean becomes negative ({mean}) at step {}",
                            step.0
                        )));
                    }
                }
                Ok(())
            }
            ArrivalConfig::Empirical { history } => {
                if history.is_empty() {
                    return Err(WlError::config("empirical arrival history is empty"));
                }
                if let Some(bad) = history.iter().find(|&&n| n < 0) {
                    return Err(WlError::config(format!(
                        "empirical arrival history contains a negative count ({bad})"
                    )));
                }
                Ok(())
            }
        }
    }
}

impl Default for ArrivalConfig {
    fn default() -> Self {
        ArrivalConfig::poisson(10.0)
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// the runner.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Number of independent trials.  Must be > 0.
    pub num_trials: u32,

    /// Steps per trial.  Must be > 0.
    pub time_steps: u32,

    /// Master RNG seed.  The same seed always produces identical results.
    pub seed: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    /// Ignored without the `parallel` feature of `wl-sim`.
    pub num_threads: Option<usize>,

    /// Waiting times of the patients already on the list at step 0.
    pub initial_queue: Vec<u32>,

    /// Treatment slots per step; entry `k` applies to step `k + 1`.
    /// Must hold at least `time_steps` entries.
    pub capacity_schedule: Vec<u32>,

    pub arrivals: ArrivalConfig,

    pub rates: ServiceRates,
}

impl SimConfig {
    /// Every fail-fast check for a run.  Returns the first problem found.
    pub fn validate(&self) -> WlResult<()> {
        Self::validate_shape(
            self.num_trials,
            self.time_steps,
            self.capacity_schedule.len(),
            self.num_threads,
        )?;
        self.rates.validate()?;
        self.arrivals.validate(self.time_steps)
    }

    /// Checks on the dimensions of a run, shared with programmatic builders
    /// that do not go through a `SimConfig`.
    pub fn validate_shape(
        num_trials:   u32,
        time_steps:   u32,
        schedule_len: usize,
        num_threads:  Option<usize>,
    ) -> WlResult<()> {
        if num_trials == 0 {
            return Err(WlError::config("num_trials must be greater than zero"));
        }
        if time_steps == 0 {
            return Err(WlError::config("time_steps must be greater than zero"));
        }
        if schedule_len < time_steps as usize {
            return Err(WlError::config(format!(
                "capacity schedule has {schedule_len} entries but {time_steps} time steps were requested"
            )));
        }
        if num_threads == Some(0) {
            return Err(WlError::config("num_threads must be greater than zero when set"));
        }
        Ok(())
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_trials:        50,
            time_steps:        52,
            seed:              42,
            num_threads:       None,
            initial_queue:     Vec::new(),
            capacity_schedule: vec![10; 52],
            arrivals:          ArrivalConfig::default(),
            rates:             ServiceRates::default(),
        }
    }
}
