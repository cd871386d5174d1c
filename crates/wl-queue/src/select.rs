//! Longest-wait-first treatment selection.

use crate::Patient;

/// Choose who gets the `capacity` treatment slots this step.
///
/// Returns exactly `min(capacity, pool.len())` patients: those with the
/// largest waiting times, in ascending waiting-time order.  The sort is
/// stable, so among equal waiting times the patients appearing later in
/// `pool` are preferred.  A capacity larger than the pool selects everyone.
pub fn select_for_treatment(pool: &[Patient], capacity: usize) -> Vec<Patient> {
    let mut sorted = pool.to_vec();
    sorted.sort_by_key(|p| p.waiting_time);
    let skip = sorted.len().saturating_sub(capacity);
    sorted.split_off(skip)
}
