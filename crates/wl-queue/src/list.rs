//! The `WaitingList` — one service's population and its step transition.

use wl_core::{PatientId, ServiceRates, TrialRng, WlResult};

use crate::{DnaOutcome, Patient, StepReport, select_for_treatment};

/// One service's waiting list.
///
/// `population` is kept in ascending `PatientId` order: the initial queue
/// occupies ids `0..n`, arrivals are appended with increasing ids, and
/// removal preserves order.  Lookups by id are therefore binary searches.
///
/// Between steps every patient in the population has `completed == false`.
#[derive(Debug, Clone)]
pub struct WaitingList {
    population: Vec<Patient>,
    /// Id handed to the next arrival.
    next_id:    PatientId,
    rates:      ServiceRates,
}

impl WaitingList {
    /// Build a list from the waiting times of the patients already queued.
    ///
    /// The queue is copied, so lists built from the same slice never share
    /// patient state.
    ///
    /// # Errors
    ///
    /// `InvalidConfiguration` if any rate is not a probability.
    pub fn new(initial_queue: &[u32], rates: ServiceRates) -> WlResult<Self> {
        rates.validate()?;
        let population: Vec<Patient> = initial_queue
            .iter()
            .enumerate()
            .map(|(i, &waiting_time)| Patient::waiting(PatientId(i as u64), waiting_time))
            .collect();
        Ok(Self {
            next_id: PatientId(population.len() as u64),
            population,
            rates,
        })
    }

    /// An empty list.
    pub fn empty(rates: ServiceRates) -> WlResult<Self> {
        Self::new(&[], rates)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn patients(&self) -> &[Patient] {
        &self.population
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.population.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.population.is_empty()
    }

    #[inline]
    pub fn rates(&self) -> ServiceRates {
        self.rates
    }

    /// Id the next arrival will receive.
    #[inline]
    pub fn next_id(&self) -> PatientId {
        self.next_id
    }

    pub fn get(&self, id: PatientId) -> Option<&Patient> {
        self.position(id).map(|i| &self.population[i])
    }

    fn position(&self, id: PatientId) -> Option<usize> {
        self.population.binary_search_by_key(&id, |p| p.id).ok()
    }

    /// Copies of the patients still eligible for treatment this step.
    fn waiting_pool(&self) -> Vec<Patient> {
        self.population.iter().filter(|p| !p.completed).copied().collect()
    }

    fn complete(&mut self, ids: &[PatientId]) {
        for &id in ids {
            if let Some(i) = self.position(id) {
                self.population[i].completed = true;
            }
        }
    }

    // ── Transition stages ─────────────────────────────────────────────────

    /// Append a new patient with `waiting_time` and return its id.
    pub fn add_patient(&mut self, waiting_time: u32) -> PatientId {
        let id = self.next_id;
        self.population.push(Patient::waiting(id, waiting_time));
        self.next_id = id.next();
        id
    }

    /// Draw a cancellation for every waiting patient.
    ///
    /// Cancelled patients are marked completed at once, which removes them
    /// from this step's treatment selection.
    pub fn apply_cancellations(&mut self, rng: &mut TrialRng) -> Vec<PatientId> {
        let rate = self.rates.cancellation_rate;
        let mut cancelled = Vec::new();
        for patient in self.population.iter_mut().filter(|p| !p.completed) {
            if rng.gen_bool(rate) {
                patient.completed = true;
                cancelled.push(patient.id);
            }
        }
        cancelled
    }

    /// Resolve attendance for the patients selected this step.
    ///
    /// Every selected patient gets a DNA draw; every patient who DNAs then
    /// gets a separate discharge draw.  Treated and discharged patients are
    /// marked completed.  Rejoining patients are left untouched and keep
    /// waiting.
    pub fn apply_dna(&mut self, selected: &[PatientId], rng: &mut TrialRng) -> DnaOutcome {
        let mut outcome = DnaOutcome::default();
        if selected.is_empty() {
            return outcome;
        }

        let mut dna = Vec::new();
        for &id in selected {
            if rng.gen_bool(self.rates.dna_rate) {
                dna.push(id);
            } else {
                outcome.treated.push(id);
            }
        }
        for id in dna {
            if rng.gen_bool(self.rates.proportion_dna_discharged) {
                outcome.discharged.push(id);
            } else {
                outcome.rejoined.push(id);
            }
        }

        self.complete(&outcome.treated);
        self.complete(&outcome.discharged);
        outcome
    }

    /// One more step on the list for everybody not completed this step.
    pub fn age_waiting_times(&mut self) {
        for patient in self.population.iter_mut().filter(|p| !p.completed) {
            patient.waiting_time += 1;
        }
    }

    /// Drop completed patients.  Returns how many left.
    pub fn remove_completed(&mut self) -> usize {
        let before = self.population.len();
        self.population.retain(|p| !p.completed);
        before - self.population.len()
    }

    // ── Step ──────────────────────────────────────────────────────────────

    /// Advance the list by one step.
    ///
    /// Stage order is fixed: arrivals, cancellations, selection, DNA, aging,
    /// removal.  See the crate docs for why the order matters.
    pub fn step(&mut self, new_arrivals: u32, capacity: u32, rng: &mut TrialRng) -> StepReport {
        for _ in 0..new_arrivals {
            self.add_patient(0);
        }

        let cancelled = self.apply_cancellations(rng);

        let selected: Vec<PatientId> =
            select_for_treatment(&self.waiting_pool(), capacity as usize)
                .iter()
                .map(|p| p.id)
                .collect();

        let dna = self.apply_dna(&selected, rng);

        self.age_waiting_times();
        self.remove_completed();

        StepReport {
            arrivals:     new_arrivals,
            cancelled:    cancelled.len() as u32,
            selected:     selected.len() as u32,
            treated:      dna.treated.len() as u32,
            discharged:   dna.discharged.len() as u32,
            dna_rejoined: dna.rejoined.len() as u32,
            waiting:      self.population.len() as u32,
        }
    }
}
