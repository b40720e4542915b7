//! The intensity sweep driver.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use rand::rngs::SmallRng;
use thiserror::Error;
use tracing::info;

use crate::mesh::{TraceError, save_mesh};
use crate::runner::{PopnetRunner, RunError};
use crate::traffic::{TrafficOpts, TrafficPattern};

use super::record::TrialRecord;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Trace(#[from] TraceError),

    #[error(transparent)]
    Run(#[from] RunError),
}

/// Where a sweep reads and writes its artifacts.
#[derive(Debug, Clone)]
pub struct SweepOpts {
    /// Intensities to sweep, in order.
    pub speeds: Vec<u32>,
    /// Directory holding one trace directory per pattern.
    pub nets_dir: PathBuf,
    /// Directory for per-pattern result logs.
    pub result_dir: PathBuf,
}

/// The reference intensity sweep: 1, 26, 51, ... 226.
pub fn default_speeds() -> Vec<u32> {
    (1u32..250).step_by(25).collect()
}

/// Run one pattern across all intensities.
///
/// Two lines are appended to `<result_dir>/<pattern>.txt` after every trial
/// and flushed immediately, so partial progress survives a crash. The result
/// file is truncated at the start of the sweep.
pub fn run_sweep(
    pattern: TrafficPattern,
    n: usize,
    payload_flits: u32,
    sweep: &SweepOpts,
    runner: &PopnetRunner,
    rng: &mut SmallRng,
) -> Result<Vec<TrialRecord>, BenchError> {
    fs::create_dir_all(&sweep.nets_dir)?;
    fs::create_dir_all(&sweep.result_dir)?;

    let name = pattern.name();
    let trace_dir = sweep.nets_dir.join(name);
    let trace_prefix = trace_dir.join(name);
    let log_path = sweep.result_dir.join(format!("{name}.txt"));
    let mut log = BufWriter::new(File::create(&log_path)?);

    let total = sweep.speeds.len();
    let mut records = Vec::with_capacity(total);
    for (trial, &speed) in sweep.speeds.iter().enumerate() {
        info!(pattern = name, speed, trial = trial + 1, total, "running trial");

        let opts = TrafficOpts {
            n,
            speed,
            payload_flits,
        };
        let mesh = pattern.build(&opts, rng);
        save_mesh(&mesh, &trace_dir, true)?;

        let result = runner.run(n, &trace_prefix)?;
        let record = TrialRecord::new(speed, result);
        writeln!(log, "{}", record.summary_line())?;
        writeln!(log, "{}", record.hot_line())?;
        log.flush()?;
        records.push(record);
    }

    info!(pattern = name, trials = total, "sweep done");
    Ok(records)
}
