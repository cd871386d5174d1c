//! `wl-core` — foundational types for the `rust_wl` waiting-list forecaster.
//!
//! This crate is a dependency of every other `wl-*` crate.  It has no `wl-*`
//! dependencies and minimal external ones (only `rand` and `thiserror`, plus
//! optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PatientId`, `TrialId`                                |
//! | [`time`]        | `Step`                                                |
//! | [`rng`]         | `TrialRng` (per-trial), `SimRng` (global)             |
//! | [`config`]      | `ServiceRates`, `ArrivalConfig`, `SimConfig`          |
//! | [`error`]       | `WlError`, `WlResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |
//!           | Required to load a `SimConfig` from JSON.                  |

pub mod config;
pub mod error;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{ArrivalConfig, ServiceRates, SimConfig};
pub use error::{WlError, WlResult};
pub use ids::{PatientId, TrialId};
pub use rng::{SimRng, TrialRng};
pub use time::Step;
