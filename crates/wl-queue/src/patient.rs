//! Per-patient state.

use wl_core::PatientId;

/// One patient on (or just leaving) the waiting list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Patient {
    pub id: PatientId,

    /// Steps spent on the list since referral (or since the initial queue
    /// snapshot for pre-loaded patients).
    pub waiting_time: u32,

    /// Set when the patient is treated, discharged, or cancels.  A completed
    /// patient takes no further part in the step and is removed at its end.
    pub completed: bool,
}

impl Patient {
    /// A patient still waiting, with `waiting_time` steps already accrued.
    #[inline]
    pub fn waiting(id: PatientId, waiting_time: u32) -> Self {
        Self { id, waiting_time, completed: false }
    }
}
