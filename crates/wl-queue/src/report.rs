//! Per-step outcome summaries.

use wl_core::PatientId;

/// Result of the DNA stage for one step's selected patients.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DnaOutcome {
    /// Attended their appointment.
    pub treated: Vec<PatientId>,
    /// Did not attend and were discharged.
    pub discharged: Vec<PatientId>,
    /// Did not attend and stay on the list; the slot is lost.
    pub rejoined: Vec<PatientId>,
}

/// Counts describing one call to [`WaitingList::step`][crate::WaitingList::step].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepReport {
    pub arrivals:     u32,
    pub cancelled:    u32,
    pub selected:     u32,
    pub treated:      u32,
    pub discharged:   u32,
    pub dna_rejoined: u32,
    /// Patients still on the list after the step.
    pub waiting:      u32,
}

impl StepReport {
    /// Patients who left the list this step for any reason.
    #[inline]
    pub fn removed(&self) -> u32 {
        self.cancelled + self.treated + self.discharged
    }
}
