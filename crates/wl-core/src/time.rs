//! Simulation time model.
//!
//! Time is a discrete step counter.  One step is one planning period
//! (conventionally a week).  Step 0 is the initial queue snapshot; the first
//! simulated period is step 1, so a run of `T` steps covers `1..=T`.

use std::fmt;

/// A discrete simulation step.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Step(pub u32);

impl Step {
    pub const FIRST: Step = Step(1);

    /// Iterate over the simulated steps of a run of `time_steps` periods.
    pub fn range(time_steps: u32) -> impl Iterator<Item = Step> {
        (1..=time_steps).map(Step)
    }

    /// Zero-based position of this step in a per-step schedule.
    ///
    /// # Panics
    /// Panics in debug mode if called on `Step(0)`.
    #[inline]
    pub fn schedule_index(self) -> usize {
        (self.0 - 1) as usize
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "S{}", self.0)
    }
}
