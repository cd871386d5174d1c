//! `wl-sim` — Monte Carlo driver for the rust_wl waiting-list forecaster.
//!
//! # Trial loop
//!
//! ```text
//! for trial in 0..num_trials:                 (parallel with `parallel`)
//!   rng  = TrialRng::new(seed, trial)
//!   list = WaitingList::new(initial_queue, rates)
//!   for step in 1..=time_steps:
//!     ① Arrivals  — ArrivalProcess::sample(step, rng); negative → InvalidInput
//!     ② Step      — list.step(arrivals, capacity_schedule[step - 1], rng)
//!     ③ Snapshot  — one ResultRecord per patient still waiting
//!   tag the trial's records and append them to the ResultSet
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs trials on Rayon's thread pool.                    |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wl_core::{ArrivalConfig, ServiceRates};
//! use wl_sim::{ArrivalModel, NoopObserver, RunnerBuilder};
//!
//! let arrivals = ArrivalModel::from(&ArrivalConfig::poisson(12.0));
//! let runner = RunnerBuilder::new(500, 52, vec![11; 52], arrivals)
//!     .initial_queue(backlog)
//!     .rates(ServiceRates::default())
//!     .seed(7)
//!     .build()?;
//! let results = runner.run(&mut NoopObserver)?;
//! ```

pub mod arrivals;
pub mod builder;
pub mod error;
pub mod observer;
pub mod result;
pub mod runner;


pub use arrivals::{ArrivalModel, ArrivalProcess, EmpiricalArrivals, PoissonArrivals};
pub use builder::RunnerBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, RunObserver};
pub use result::{ResultRecord, ResultSet};
pub use runner::Runner;
