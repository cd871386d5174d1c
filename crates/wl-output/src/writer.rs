//! The `OutputWriter` trait implemented by backend writers.

use wl_sim::ResultRecord;

use crate::{OutputResult, StepSummaryRow};

/// Trait implemented by output backends.
///
/// Errors are stored by [`RunOutputObserver`][crate::RunOutputObserver] and
/// retrieved with `take_error` after the run.
pub trait OutputWriter {
    /// Write a batch of per-patient result rows.
    fn write_records(&mut self, rows: &[ResultRecord]) -> OutputResult<()>;

    /// Write one step summary row.
    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
