//! `wl-output` — result writers for the rust_wl forecaster.
//!
//! | Backend | Files created                               |
//! |---------|---------------------------------------------|
//! | CSV     | `records.csv`, `step_summaries.csv`         |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`RunOutputObserver`], which implements `wl_sim::RunObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use wl_output::{CsvWriter, RunOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = RunOutputObserver::new(writer);
//! runner.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RunOutputObserver;
pub use row::StepSummaryRow;
pub use writer::OutputWriter;
