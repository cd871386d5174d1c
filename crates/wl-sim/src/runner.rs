//! The `Runner` and its trial loop.

use wl_core::{ServiceRates, SimConfig, Step, TrialId, TrialRng, WlError};
use wl_queue::WaitingList;

use crate::observer::StepLog;
use crate::{
    ArrivalModel, ArrivalProcess, ResultRecord, ResultSet, RunObserver, RunnerBuilder, SimResult,
};

/// One finished trial awaiting replay: its step reports and tagged rows.
type BufferedTrial = (TrialId, StepLog, Vec<ResultRecord>);

/// Drives `num_trials` independent trials of `time_steps` steps each.
///
/// Each trial owns a fresh [`WaitingList`] built from its own copy of the
/// initial queue and a [`TrialRng`] derived from `(seed, trial)`, so trials
/// share nothing mutable and may run in any order.
///
/// Create via [`RunnerBuilder`].
pub struct Runner<A: ArrivalProcess> {
    pub(crate) num_trials:        u32,
    pub(crate) time_steps:        u32,
    pub(crate) capacity_schedule: Vec<u32>,
    pub(crate) arrivals:          A,
    pub(crate) initial_queue:     Vec<u32>,
    pub(crate) rates:             ServiceRates,
    pub(crate) seed:              u64,
    pub(crate) num_threads:       Option<usize>,
}

impl Runner<ArrivalModel> {
    /// Validate `config` and build a runner from it.
    pub fn from_config(config: &SimConfig) -> SimResult<Self> {
        RunnerBuilder::from_config(config).build()
    }
}

impl<A: ArrivalProcess> Runner<A> {
    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn num_trials(&self) -> u32 {
        self.num_trials
    }

    #[inline]
    pub fn time_steps(&self) -> u32 {
        self.time_steps
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    #[inline]
    pub fn num_threads(&self) -> Option<usize> {
        self.num_threads
    }

    #[inline]
    pub fn arrivals(&self) -> &A {
        &self.arrivals
    }

    // ── Public API ────────────────────────────────────────────────────────

    /// Run every trial and return the combined rows.
    ///
    /// Trials run into private buffers first.  Only once every trial has
    /// succeeded are the buffers replayed to `observer`, in trial then step
    /// order, and merged into the result set.  On error the observer sees
    /// nothing and no rows are returned.
    pub fn run<O: RunObserver>(&self, observer: &mut O) -> SimResult<ResultSet> {
        let mut results = ResultSet::new();

        for (trial, log, records) in self.run_all_trials()? {
            observer.on_trial_start(trial);
            for (step, report) in &log.reports {
                observer.on_step_end(trial, *step, report);
            }
            observer.on_trial_end(trial, &records);
            results.append(records);
        }

        observer.on_run_end(&results);
        Ok(results)
    }

    /// Run one trial from a fresh list and return its tagged rows.
    ///
    /// Steps run strictly in order; step `k + 1` starts from step `k`'s end
    /// state.
    pub fn run_trial<O: RunObserver>(
        &self,
        trial:    TrialId,
        observer: &mut O,
    ) -> SimResult<Vec<ResultRecord>> {
        let mut rng  = TrialRng::new(self.seed, trial);
        let mut list = WaitingList::new(&self.initial_queue, self.rates)?;
        let mut records = Vec::new();

        for step in Step::range(self.time_steps) {
            let sampled  = self.arrivals.sample(step, &mut rng)?;
            let arrivals = u32::try_from(sampled).map_err(|_| {
                WlError::input(format!(
                    "arrival process produced {sampled} arrivals at step {} of {trial}",
                    step.0
                ))
            })?;
            let capacity = self.capacity_schedule[step.schedule_index()];

            let report = list.step(arrivals, capacity, &mut rng);
            observer.on_step_end(trial, step, &report);

            records.extend(
                list.patients()
                    .iter()
                    .map(|p| ResultRecord::snapshot(p, step, trial)),
            );
        }

        Ok(records)
    }

    fn run_buffered(&self, trial: TrialId) -> SimResult<BufferedTrial> {
        let mut log = StepLog::default();
        let records = self.run_trial(trial, &mut log)?;
        Ok((trial, log, records))
    }

    #[cfg(not(feature = "parallel"))]
    fn run_all_trials(&self) -> SimResult<Vec<BufferedTrial>> {
        (0..self.num_trials)
            .map(|t| self.run_buffered(TrialId(t)))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn run_all_trials(&self) -> SimResult<Vec<BufferedTrial>> {
        use rayon::prelude::*;

        let mut pool = rayon::ThreadPoolBuilder::new();
        if let Some(threads) = self.num_threads {
            pool = pool.num_threads(threads);
        }
        let pool = pool.build()?;

        // `collect` into a Result keeps trial order and stops at the first error.
        pool.install(|| {
            (0..self.num_trials)
                .into_par_iter()
                .map(|t| self.run_buffered(TrialId(t)))
                .collect()
        })
    }
}
