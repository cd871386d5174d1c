//! Plain data row types written by output backends.

use wl_core::{Step, TrialId};
use wl_queue::StepReport;

/// Flow counts for one step of one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepSummaryRow {
    pub trial:        u32,
    pub step:         u32,
    pub arrivals:     u32,
    pub cancelled:    u32,
    pub treated:      u32,
    pub discharged:   u32,
    pub dna_rejoined: u32,
    pub waiting:      u32,
}

impl StepSummaryRow {
    pub fn new(trial: TrialId, step: Step, report: &StepReport) -> Self {
        Self {
            trial:        trial.0,
            step:         step.0,
            arrivals:     report.arrivals,
            cancelled:    report.cancelled,
            treated:      report.treated,
            discharged:   report.discharged,
            dna_rejoined: report.dna_rejoined,
            waiting:      report.waiting,
        }
    }
}
