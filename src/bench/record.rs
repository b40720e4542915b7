//! Result-log records.

use crate::runner::{HotMatrix, TrialResult};

/// One completed trial: the swept intensity plus the parsed simulator output.
#[derive(Debug, Clone)]
pub struct TrialRecord {
    pub speed: u32,
    pub finished: u64,
    pub avg_delay: f64,
    pub hot: HotMatrix,
}

impl TrialRecord {
    pub fn new(speed: u32, result: TrialResult) -> Self {
        Self {
            speed,
            finished: result.finished,
            avg_delay: result.avg_delay,
            hot: result.hot,
        }
    }

    /// First log line of a trial: `speed finished avg_delay`.
    pub fn summary_line(&self) -> String {
        format!("{} {} {}", self.speed, self.finished, self.avg_delay)
    }

    /// Second log line: the flattened hotspot counts, row-major.
    pub fn hot_line(&self) -> String {
        self.hot
            .as_slice()
            .iter()
            .map(u64::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}
