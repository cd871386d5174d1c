//! Unit tests for wl-queue.

use wl_core::{PatientId, ServiceRates, TrialRng};

use crate::{Patient, WaitingList, select_for_treatment};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn rng() -> TrialRng {
    TrialRng::from_seed(42)
}

/// Ten patients with ids 0..9 and waiting time equal to their id.
fn ramp_list(rates: ServiceRates) -> WaitingList {
    let queue: Vec<u32> = (0..10).collect();
    WaitingList::new(&queue, rates).unwrap()
}

fn ids(patients: &[Patient]) -> Vec<u64> {
    patients.iter().map(|p| p.id.0).collect()
}

// ── Construction ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod construction_tests {
    use super::*;

    #[test]
    fn empty_list() {
        let list = WaitingList::empty(ServiceRates::default()).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.next_id(), PatientId(0));
        assert_eq!(list.rates(), ServiceRates::default());
    }

    #[test]
    fn initial_queue_gets_sequential_ids() {
        let list = WaitingList::new(&[3, 0, 7], ServiceRates::ZERO).unwrap();
        assert_eq!(ids(list.patients()), vec![0, 1, 2]);
        assert_eq!(list.get(PatientId(2)).unwrap().waiting_time, 7);
        assert!(list.patients().iter().all(|p| !p.completed));
        assert_eq!(list.next_id(), PatientId(3));
    }

    #[test]
    fn invalid_rates_rejected() {
        let rates = ServiceRates { dna_rate: 1.2, ..ServiceRates::ZERO };
        assert!(WaitingList::new(&[1, 2], rates).is_err());
    }

    #[test]
    fn add_patient_continues_counter() {
        let mut list = WaitingList::new(&[5, 5], ServiceRates::ZERO).unwrap();
        assert_eq!(list.add_patient(0), PatientId(2));
        assert_eq!(list.add_patient(4), PatientId(3));
        assert_eq!(list.len(), 4);
        assert_eq!(list.get(PatientId(3)).unwrap().waiting_time, 4);
        assert_eq!(list.next_id(), PatientId(4));
    }
}

// ── Selection ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod select_tests {
    use super::*;

    #[test]
    fn picks_longest_waiting() {
        let list = ramp_list(ServiceRates::ZERO);
        let selected = select_for_treatment(list.patients(), 5);
        assert_eq!(selected.len(), 5);
        assert_eq!(selected[0].id, PatientId(5));
        assert_eq!(selected[4].id, PatientId(9));
        let waits: Vec<u32> = selected.iter().map(|p| p.waiting_time).collect();
        assert_eq!(waits, vec![5, 6, 7, 8, 9]);
    }

    #[test]
    fn selected_dominate_unselected() {
        let pool: Vec<Patient> = [4, 1, 9, 4, 0, 7, 2, 9, 3]
            .iter()
            .enumerate()
            .map(|(i, &w)| Patient::waiting(PatientId(i as u64), w))
            .collect();
        let selected = select_for_treatment(&pool, 4);
        assert_eq!(selected.len(), 4);
        let min_selected = selected.iter().map(|p| p.waiting_time).min().unwrap();
        let max_rest = pool
            .iter()
            .filter(|p| !selected.contains(p))
            .map(|p| p.waiting_time)
            .max()
            .unwrap();
        assert!(min_selected >= max_rest);
    }

    #[test]
    fn ties_prefer_later_entries() {
        let pool: Vec<Patient> = (0..4).map(|i| Patient::waiting(PatientId(i), 3)).collect();
        let selected = select_for_treatment(&pool, 2);
        assert_eq!(ids(&selected), vec![2, 3]);
    }

    #[test]
    fn capacity_above_pool_selects_all() {
        let list = ramp_list(ServiceRates::ZERO);
        assert_eq!(select_for_treatment(list.patients(), 50).len(), 10);
    }

    #[test]
    fn zero_capacity_selects_none() {
        let list = ramp_list(ServiceRates::ZERO);
        assert!(select_for_treatment(list.patients(), 0).is_empty());
        assert!(select_for_treatment(&[], 3).is_empty());
    }
}

// ── Stages ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod stage_tests {
    use super::*;

    #[test]
    fn cancellations_at_rate_one_complete_everyone() {
        let rates = ServiceRates { cancellation_rate: 1.0, ..ServiceRates::ZERO };
        let mut list = ramp_list(rates);
        let cancelled = list.apply_cancellations(&mut rng());
        assert_eq!(cancelled.len(), 10);
        assert!(list.patients().iter().all(|p| p.completed));
    }

    #[test]
    fn cancellations_at_rate_zero_complete_nobody() {
        let mut list = ramp_list(ServiceRates::ZERO);
        assert!(list.apply_cancellations(&mut rng()).is_empty());
    }

    #[test]
    fn dna_rate_zero_treats_everyone_selected() {
        let mut list = ramp_list(ServiceRates::ZERO);
        let out = list.apply_dna(&[PatientId(8), PatientId(9)], &mut rng());
        assert_eq!(out.treated, vec![PatientId(8), PatientId(9)]);
        assert!(out.discharged.is_empty());
        assert!(out.rejoined.is_empty());
        assert!(list.get(PatientId(8)).unwrap().completed);
        assert!(!list.get(PatientId(7)).unwrap().completed);
    }

    #[test]
    fn dna_without_discharge_rejoins() {
        let rates = ServiceRates { dna_rate: 1.0, ..ServiceRates::ZERO };
        let mut list = ramp_list(rates);
        let out = list.apply_dna(&[PatientId(9)], &mut rng());
        assert!(out.treated.is_empty());
        assert_eq!(out.rejoined, vec![PatientId(9)]);
        assert!(!list.get(PatientId(9)).unwrap().completed);
    }

    #[test]
    fn dna_with_discharge_completes() {
        let rates = ServiceRates {
            dna_rate:                  1.0,
            proportion_dna_discharged: 1.0,
            cancellation_rate:         0.0,
        };
        let mut list = ramp_list(rates);
        let out = list.apply_dna(&[PatientId(3)], &mut rng());
        assert_eq!(out.discharged, vec![PatientId(3)]);
        assert!(list.get(PatientId(3)).unwrap().completed);
    }

    #[test]
    fn aging_skips_completed() {
        let mut list = ramp_list(ServiceRates::ZERO);
        list.apply_dna(&[PatientId(0)], &mut rng());
        list.age_waiting_times();
        assert_eq!(list.get(PatientId(0)).unwrap().waiting_time, 0);
        assert_eq!(list.get(PatientId(1)).unwrap().waiting_time, 2);
        assert_eq!(list.remove_completed(), 1);
        assert!(list.get(PatientId(0)).is_none());
    }
}

// ── Full step ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod step_tests {
    use super::*;

    #[test]
    fn treats_longest_waiting_and_ages_the_rest() {
        let mut list = ramp_list(ServiceRates::ZERO);
        let report = list.step(0, 5, &mut rng());
        assert_eq!(report.treated, 5);
        assert_eq!(report.waiting, 5);
        assert_eq!(ids(list.patients()), vec![0, 1, 2, 3, 4]);
        let waits: Vec<u32> = list.patients().iter().map(|p| p.waiting_time).collect();
        assert_eq!(waits, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn arrivals_join_at_zero_and_are_aged() {
        let mut list = WaitingList::empty(ServiceRates::ZERO).unwrap();
        let report = list.step(3, 0, &mut rng());
        assert_eq!(report.arrivals, 3);
        assert_eq!(ids(list.patients()), vec![0, 1, 2]);
        assert!(list.patients().iter().all(|p| p.waiting_time == 1));
    }

    #[test]
    fn new_arrivals_can_be_treated_same_step() {
        let mut list = WaitingList::empty(ServiceRates::ZERO).unwrap();
        let report = list.step(1, 1, &mut rng());
        assert_eq!(report.treated, 1);
        assert!(list.is_empty());
    }

    #[test]
    fn snapshot_never_contains_completed() {
        let rates = ServiceRates {
            dna_rate:                  0.3,
            proportion_dna_discharged: 0.5,
            cancellation_rate:         0.1,
        };
        let mut list = ramp_list(rates);
        let mut r = rng();
        for _ in 0..20 {
            list.step(4, 3, &mut r);
            assert!(list.patients().iter().all(|p| !p.completed));
        }
    }

    #[test]
    fn survivors_age_by_exactly_one() {
        let rates = ServiceRates {
            dna_rate:                  0.5,
            proportion_dna_discharged: 0.5,
            cancellation_rate:         0.2,
        };
        let mut list = ramp_list(rates);
        let mut r = rng();
        for _ in 0..10 {
            let before: Vec<Patient> = list.patients().to_vec();
            list.step(2, 2, &mut r);
            for p in list.patients() {
                if let Some(old) = before.iter().find(|b| b.id == p.id) {
                    assert_eq!(p.waiting_time, old.waiting_time + 1);
                } else {
                    assert_eq!(p.waiting_time, 1, "new arrival aged once");
                }
            }
        }
    }

    #[test]
    fn zero_capacity_never_invokes_dna() {
        let rates = ServiceRates {
            dna_rate:                  1.0,
            proportion_dna_discharged: 1.0,
            cancellation_rate:         0.0,
        };
        let mut list = ramp_list(rates);
        let report = list.step(0, 0, &mut rng());
        assert_eq!(report.selected, 0);
        assert_eq!(report.discharged, 0);
        assert_eq!(report.waiting, 10);
        assert_eq!(list.get(PatientId(9)).unwrap().waiting_time, 10);
    }

    #[test]
    fn zero_capacity_still_cancels() {
        let rates = ServiceRates { cancellation_rate: 1.0, ..ServiceRates::ZERO };
        let mut list = ramp_list(rates);
        let report = list.step(0, 0, &mut rng());
        assert_eq!(report.cancelled, 10);
        assert!(list.is_empty());
    }

    #[test]
    fn cancelled_patients_are_never_treated() {
        let rates = ServiceRates { cancellation_rate: 1.0, ..ServiceRates::ZERO };
        let mut list = ramp_list(rates);
        let report = list.step(0, 10, &mut rng());
        assert_eq!(report.selected, 0);
        assert_eq!(report.treated, 0);
        assert_eq!(report.removed(), 10);
    }

    #[test]
    fn dna_rejoiners_are_aged_and_kept() {
        let rates = ServiceRates { dna_rate: 1.0, ..ServiceRates::ZERO };
        let mut list = ramp_list(rates);
        let report = list.step(0, 3, &mut rng());
        assert_eq!(report.dna_rejoined, 3);
        assert_eq!(report.waiting, 10);
        assert_eq!(list.get(PatientId(9)).unwrap().waiting_time, 10);
    }

    #[test]
    fn identical_inputs_identical_transitions() {
        let queue: Vec<u32> = (0..25).map(|i| i % 7).collect();
        let mut a = WaitingList::new(&queue, ServiceRates::ZERO).unwrap();
        let mut b = WaitingList::new(&queue, ServiceRates::ZERO).unwrap();
        let mut ra = TrialRng::from_seed(7);
        let mut rb = TrialRng::from_seed(7);
        for step in 0..12 {
            let ra_report = a.step(step % 4, 3, &mut ra);
            let rb_report = b.step(step % 4, 3, &mut rb);
            assert_eq!(ra_report, rb_report);
            assert_eq!(a.patients(), b.patients());
        }
    }

    #[test]
    fn ids_stay_sorted_and_unique() {
        let rates = ServiceRates {
            dna_rate:                  0.2,
            proportion_dna_discharged: 0.2,
            cancellation_rate:         0.05,
        };
        let mut list = ramp_list(rates);
        let mut r = rng();
        for _ in 0..30 {
            list.step(3, 3, &mut r);
            assert!(list.patients().windows(2).all(|w| w[0].id < w[1].id));
        }
    }
}
