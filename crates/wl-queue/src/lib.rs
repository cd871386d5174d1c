//! `wl-queue` — one service's waiting list and its per-step transition.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                          |
//! |-------------|-------------------------------------------------------------------|
//! | [`patient`] | `Patient` — id, waiting time, completion flag                     |
//! | [`select`]  | `select_for_treatment` — longest-wait-first priority selection    |
//! | [`list`]    | `WaitingList` — population, id counter, rates, `step()`           |
//! | [`report`]  | `StepReport`, `DnaOutcome` — what happened during one step        |
//!
//! # Step transition
//!
//! ```text
//! step(new_arrivals, capacity, rng):
//!   ① Arrivals       — append `new_arrivals` patients at waiting time 0.
//!   ② Cancellations  — Bernoulli(cancellation_rate) per waiting patient;
//!                      cancelled patients are completed immediately.
//!   ③ Selection      — the `capacity` longest-waiting non-completed patients.
//!   ④ DNA            — Bernoulli(dna_rate) per selected patient, then
//!                      Bernoulli(proportion_dna_discharged) per DNA:
//!                        attended            → treated    (completed)
//!                        DNA + discharged    → discharged (completed)
//!                        DNA + not discharged → rejoins the list
//!   ⑤ Aging          — waiting_time += 1 for every non-completed patient.
//!   ⑥ Removal        — completed patients leave the population.
//! ```
//!
//! ② must precede ③ so a cancelled patient is never treated in the same step,
//! and ⑤ must follow ④ so patients leaving the list keep their final waiting
//! time.

pub mod list;
pub mod patient;
pub mod report;
pub mod select;

#[cfg(test)]
mod tests;

pub use list::WaitingList;
pub use patient::Patient;
pub use report::{DnaOutcome, StepReport};
pub use select::select_for_treatment;
