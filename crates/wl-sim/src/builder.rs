//! Fluent builder for constructing a [`Runner`].

use wl_core::{ServiceRates, SimConfig};

use crate::{ArrivalModel, ArrivalProcess, Runner, SimResult};

/// Fluent builder for [`Runner<A>`].
///
/// # Required inputs
///
/// - `num_trials`, `time_steps` — both must be > 0
/// - `capacity_schedule` — at least `time_steps` entries
/// - `A: ArrivalProcess` — e.g. [`ArrivalModel`] or a custom process
///
/// # Optional inputs (have defaults)
///
/// | Method               | Default                      |
/// |----------------------|------------------------------|
/// | `.initial_queue(v)`  | Empty list                   |
/// | `.rates(r)`          | `ServiceRates::default()`    |
/// | `.seed(s)`           | `42`                         |
/// | `.num_threads(n)`    | All logical cores            |
///
/// Every check runs in [`build`](Self::build), so a `Runner` that exists can
/// only fail mid-run on a bad value from its arrival process.
pub struct RunnerBuilder<A: ArrivalProcess> {
    num_trials:        u32,
    time_steps:        u32,
    capacity_schedule: Vec<u32>,
    arrivals:          A,
    initial_queue:     Vec<u32>,
    rates:             ServiceRates,
    seed:              u64,
    num_threads:       Option<usize>,
}

impl<A: ArrivalProcess> RunnerBuilder<A> {
    /// Create a builder with all required inputs.
    pub fn new(
        num_trials:        u32,
        time_steps:        u32,
        capacity_schedule: Vec<u32>,
        arrivals:          A,
    ) -> Self {
        Self {
            num_trials,
            time_steps,
            capacity_schedule,
            arrivals,
            initial_queue: Vec::new(),
            rates:         ServiceRates::default(),
            seed:          42,
            num_threads:   None,
        }
    }

    /// Waiting times of the patients on the list before step 1.
    pub fn initial_queue(mut self, waiting_times: Vec<u32>) -> Self {
        self.initial_queue = waiting_times;
        self
    }

    pub fn rates(mut self, rates: ServiceRates) -> Self {
        self.rates = rates;
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Rayon worker count.  Ignored without the `parallel` feature.
    pub fn num_threads(mut self, threads: usize) -> Self {
        self.num_threads = Some(threads);
        self
    }

    /// Validate inputs and return a ready-to-run [`Runner`].
    pub fn build(self) -> SimResult<Runner<A>> {
        SimConfig::validate_shape(
            self.num_trials,
            self.time_steps,
            self.capacity_schedule.len(),
            self.num_threads,
        )?;
        self.rates.validate()?;
        self.arrivals.validate(self.time_steps)?;

        Ok(Runner {
            num_trials:        self.num_trials,
            time_steps:        self.time_steps,
            capacity_schedule: self.capacity_schedule,
            arrivals:          self.arrivals,
            initial_queue:     self.initial_queue,
            rates:             self.rates,
            seed:              self.seed,
            num_threads:       self.num_threads,
        })
    }
}

impl RunnerBuilder<ArrivalModel> {
    /// Pre-populate a builder from a [`SimConfig`].
    pub fn from_config(config: &SimConfig) -> Self {
        let mut builder = Self::new(
            config.num_trials,
            config.time_steps,
            config.capacity_schedule.clone(),
            ArrivalModel::from(&config.arrivals),
        )
        .initial_queue(config.initial_queue.clone())
        .rates(config.rates)
        .seed(config.seed);
        builder.num_threads = config.num_threads;
        builder
    }
}
