//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `records.csv` — `patient_id,waiting_time,step,trial`
//! - `step_summaries.csv` — per-step flow counts

use std::fs::File;
use std::path::Path;

use csv::Writer;
use wl_sim::ResultRecord;

use crate::writer::OutputWriter;
use crate::{OutputResult, StepSummaryRow};

pub const RECORD_HEADERS: [&str; 4] = ["patient_id", "waiting_time", "step", "trial"];

pub const SUMMARY_HEADERS: [&str; 8] = [
    "trial", "step", "arrivals", "cancelled", "treated", "discharged", "dna_rejoined", "waiting",
];

/// Writes run output to two CSV files.
pub struct CsvWriter {
    records:   Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut records = Writer::from_path(dir.join("records.csv"))?;
        records.write_record(RECORD_HEADERS)?;

        let mut summaries = Writer::from_path(dir.join("step_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADERS)?;

        Ok(Self {
            records,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_records(&mut self, rows: &[ResultRecord]) -> OutputResult<()> {
        for row in rows {
            self.records.write_record(&[
                row.patient_id.0.to_string(),
                row.waiting_time.to_string(),
                row.step.0.to_string(),
                row.trial.0.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.trial.to_string(),
            row.step.to_string(),
            row.arrivals.to_string(),
            row.cancelled.to_string(),
            row.treated.to_string(),
            row.discharged.to_string(),
            row.dna_rejoined.to_string(),
            row.waiting.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.records.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
