//! Run observer trait for progress reporting and data collection.

use wl_core::{Step, TrialId};
use wl_queue::StepReport;

use crate::{ResultRecord, ResultSet};

/// Callbacks invoked by [`Runner::run`][crate::Runner::run] at key points of
/// a run.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// Calls always arrive in trial order and, within a trial, in step order,
/// whether or not trials were executed in parallel.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter;
///
/// impl RunObserver for ProgressPrinter {
///     fn on_trial_end(&mut self, trial: TrialId, records: &[ResultRecord]) {
///         println!("{trial}: {} rows", records.len());
///     }
/// }
/// ```
pub trait RunObserver {
    /// Called before the first step of each trial.
    fn on_trial_start(&mut self, _trial: TrialId) {}

    /// Called after each step with the counts of what happened in it.
    fn on_step_end(&mut self, _trial: TrialId, _step: Step, _report: &StepReport) {}

    /// Called once a trial's rows are complete and tagged.
    fn on_trial_end(&mut self, _trial: TrialId, _records: &[ResultRecord]) {}

    /// Called once after every trial has finished successfully.
    fn on_run_end(&mut self, _results: &ResultSet) {}
}

/// A [`RunObserver`] that does nothing.
pub struct NoopObserver;

impl RunObserver for NoopObserver {}

/// Buffers one trial's step reports until every trial has succeeded.
#[derive(Default)]
pub(crate) struct StepLog {
    pub(crate) reports: Vec<(Step, StepReport)>,
}

impl RunObserver for StepLog {
    fn on_step_end(&mut self, _trial: TrialId, step: Step, report: &StepReport) {
        self.reports.push((step, *report));
    }
}
