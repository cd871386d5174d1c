//! forecast — waiting-list Monte Carlo forecast from the command line.
//!
//! ```text
//! forecast [CONFIG.json] [OUTPUT_DIR]
//! ```
//!
//! Without a config file a synthetic service is simulated: a 300-patient
//! backlog, referrals averaging 25 a week and growing slowly, and 24 slots a
//! week for a year.  Rows go to `OUTPUT_DIR/records.csv` and
//! `OUTPUT_DIR/step_summaries.csv` (default `output/forecast`).

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};

use wl_core::{ArrivalConfig, ServiceRates, SimConfig, SimRng, Step, TrialId};
use wl_output::{CsvWriter, OutputWriter, RunOutputObserver};
use wl_queue::StepReport;
use wl_sim::{ResultRecord, ResultSet, RunObserver, Runner};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:           u64 = 42;
const TRIALS:         u32 = 200;
const WEEKS:          u32 = 52;
const BACKLOG:        usize = 300;
const MAX_BACKLOG_WAIT: u32 = 40;
const WEEKLY_SLOTS:   u32 = 24;
const DEFAULT_OUTPUT: &str = "output/forecast";

// ── Config ────────────────────────────────────────────────────────────────────

fn synthetic_config() -> SimConfig {
    let mut rng = SimRng::new(SEED).child(1);
    let initial_queue = (0..BACKLOG)
        .map(|_| rng.gen_range(0..MAX_BACKLOG_WAIT))
        .collect();

    SimConfig {
        num_trials:        TRIALS,
        time_steps:        WEEKS,
        seed:              SEED,
        num_threads:       None,
        initial_queue,
        capacity_schedule: vec![WEEKLY_SLOTS; WEEKS as usize],
        arrivals:          ArrivalConfig::Poisson { mean_rate: 25.0, growth_rate: 0.05 },
        rates:             ServiceRates::default(),
    }
}

fn load_config(path: &Path) -> Result<SimConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

// ── Observer wrapper to report progress ──────────────────────────────────────

struct ProgressObserver<W: OutputWriter> {
    inner:      RunOutputObserver<W>,
    num_trials: u32,
    treated:    u64,
    cancelled:  u64,
    discharged: u64,
}

impl<W: OutputWriter> ProgressObserver<W> {
    fn new(inner: RunOutputObserver<W>, num_trials: u32) -> Self {
        Self { inner, num_trials, treated: 0, cancelled: 0, discharged: 0 }
    }
}

impl<W: OutputWriter> RunObserver for ProgressObserver<W> {
    fn on_trial_start(&mut self, trial: TrialId) {
        self.inner.on_trial_start(trial);
    }

    fn on_step_end(&mut self, trial: TrialId, step: Step, report: &StepReport) {
        self.treated    += report.treated as u64;
        self.cancelled  += report.cancelled as u64;
        self.discharged += report.discharged as u64;
        self.inner.on_step_end(trial, step, report);
    }

    fn on_trial_end(&mut self, trial: TrialId, records: &[ResultRecord]) {
        let done = trial.0 + 1;
        if done % 25 == 0 || done == self.num_trials {
            println!("  trial {done:>5}/{}  ({} rows)", self.num_trials, records.len());
        }
        self.inner.on_trial_end(trial, records);
    }

    fn on_run_end(&mut self, results: &ResultSet) {
        self.inner.on_run_end(results);
    }
}

// ── Summary ───────────────────────────────────────────────────────────────────

fn mean_wait(results: &ResultSet, step: Step) -> f64 {
    let (sum, n) = results
        .iter()
        .filter(|r| r.step == step)
        .fold((0u64, 0u64), |(s, n), r| (s + r.waiting_time as u64, n + 1));
    if n == 0 { 0.0 } else { sum as f64 / n as f64 }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) => load_config(Path::new(&path))?,
        None => synthetic_config(),
    };
    let output_dir = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_string()));

    println!("=== forecast — waiting-list Monte Carlo ===");
    println!(
        "Trials: {}  |  Steps: {}  |  Seed: {}  |  Initial list: {}",
        config.num_trials,
        config.time_steps,
        config.seed,
        config.initial_queue.len()
    );
    println!();

    // 1. Validate everything before any work starts.
    let runner = Runner::from_config(&config)?;

    // 2. Set up output.
    std::fs::create_dir_all(&output_dir)?;
    let writer = CsvWriter::new(&output_dir)?;
    let mut obs = ProgressObserver::new(RunOutputObserver::new(writer), config.num_trials);

    // 3. Run.
    let t0 = Instant::now();
    let results = runner.run(&mut obs)?;
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    println!();
    println!("Run complete in {:.3} s", elapsed.as_secs_f64());
    println!("  records.csv        : {} rows", results.len());
    println!("  output directory   : {}", output_dir.display());
    let trials = config.num_trials as f64;
    println!(
        "  per trial          : {:.1} treated, {:.1} cancelled, {:.1} DNA-discharged",
        obs.treated as f64 / trials,
        obs.cancelled as f64 / trials,
        obs.discharged as f64 / trials,
    );
    println!();

    println!("{:<8} {:>14} {:>12}", "Step", "Mean list", "Mean wait");
    println!("{}", "-".repeat(36));
    for step in Step::range(config.time_steps).filter(|s| s.0 % 4 == 0 || s.0 == config.time_steps) {
        println!(
            "{:<8} {:>14.1} {:>12.1}",
            step.0,
            results.mean_list_size(step, config.num_trials),
            mean_wait(&results, step),
        );
    }

    Ok(())
}
