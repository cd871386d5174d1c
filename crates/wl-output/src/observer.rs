//! `RunOutputObserver<W>` — bridges `RunObserver` to an `OutputWriter`.

use wl_core::{Step, TrialId};
use wl_queue::StepReport;
use wl_sim::{ResultRecord, ResultSet, RunObserver};

use crate::row::StepSummaryRow;
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`RunObserver`] that streams result rows and step summaries to any
/// [`OutputWriter`] backend as each trial completes.
///
/// Errors from the writer are stored internally because `RunObserver`
/// methods have no return value.  After `runner.run()` returns, check for
/// errors with [`take_error`][Self::take_error].
pub struct RunOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> RunOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `runner.run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> RunObserver for RunOutputObserver<W> {
    fn on_step_end(&mut self, trial: TrialId, step: Step, report: &StepReport) {
        let row = StepSummaryRow::new(trial, step, report);
        let result = self.writer.write_step_summary(&row);
        self.store_err(result);
    }

    fn on_trial_end(&mut self, _trial: TrialId, records: &[ResultRecord]) {
        if !records.is_empty() {
            let result = self.writer.write_records(records);
            self.store_err(result);
        }
    }

    fn on_run_end(&mut self, _results: &ResultSet) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
