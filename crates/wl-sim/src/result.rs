//! Per-patient result rows and the aggregated result set.

use wl_core::{PatientId, Step, TrialId};
use wl_queue::Patient;

/// One patient still waiting at the end of `step` in `trial`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultRecord {
    pub patient_id:   PatientId,
    pub waiting_time: u32,
    pub step:         Step,
    pub trial:        TrialId,
}

impl ResultRecord {
    #[inline]
    pub fn snapshot(patient: &Patient, step: Step, trial: TrialId) -> Self {
        Self {
            patient_id:   patient.id,
            waiting_time: patient.waiting_time,
            step,
            trial,
        }
    }
}

/// All rows of a run, trial-major then step-major.
///
/// Rows are append-only; once a run returns, the set is read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultSet {
    records: Vec<ResultRecord>,
}

impl ResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn append(&mut self, mut rows: Vec<ResultRecord>) {
        self.records.append(&mut rows);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[inline]
    pub fn records(&self) -> &[ResultRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ResultRecord> {
        self.records.iter()
    }

    /// The contiguous block of rows belonging to `trial`.
    pub fn for_trial(&self, trial: TrialId) -> &[ResultRecord] {
        let start = self.records.partition_point(|r| r.trial < trial);
        let end   = self.records.partition_point(|r| r.trial <= trial);
        &self.records[start..end]
    }

    /// Waiting-list size at the end of `step` in `trial`.
    pub fn list_size(&self, trial: TrialId, step: Step) -> usize {
        self.for_trial(trial).iter().filter(|r| r.step == step).count()
    }

    /// Waiting-list size at `step` averaged over `num_trials` trials.
    ///
    /// Trials whose list is empty at `step` have no rows but still count
    /// towards the mean, which is why the trial count is passed in.
    pub fn mean_list_size(&self, step: Step, num_trials: u32) -> f64 {
        if num_trials == 0 {
            return 0.0;
        }
        let rows = self.records.iter().filter(|r| r.step == step).count();
        rows as f64 / num_trials as f64
    }
}

impl<'a> IntoIterator for &'a ResultSet {
    type Item = &'a ResultRecord;
    type IntoIter = std::slice::Iter<'a, ResultRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
