//! Parsing of the simulator's textual output.

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ParseError {
    #[error("missing `finished:` / `average Delay:` summary in simulator stdout")]
    MissingSummary,

    #[error("bad summary value {value:?}")]
    BadSummaryValue { value: String },

    #[error("malformed hotspot line {line:?}")]
    BadHotLine { line: String },

    #[error("route ({x}, {y}) outside {n}x{n} mesh")]
    RouteOutOfBounds { x: usize, y: usize, n: usize },

    #[error("route ({x}, {y}) reported more than once")]
    DuplicateRoute { x: usize, y: usize },
}

/// Per-node traversal counts for one trial, flat-indexed `x * n + y`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HotMatrix {
    n: usize,
    counts: Vec<u64>,
}

impl HotMatrix {
    pub fn new(n: usize) -> Self {
        Self {
            n,
            counts: vec![0; n * n],
        }
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn get(&self, x: usize, y: usize) -> u64 {
        self.counts[x * self.n + y]
    }

    /// Record one `x y count` triple; every coordinate at most once.
    pub fn record(&mut self, x: usize, y: usize, count: u64) -> Result<(), ParseError> {
        if x >= self.n || y >= self.n {
            return Err(ParseError::RouteOutOfBounds { x, y, n: self.n });
        }
        let slot = &mut self.counts[x * self.n + y];
        if *slot != 0 {
            return Err(ParseError::DuplicateRoute { x, y });
        }
        *slot = count;
        Ok(())
    }

    pub fn max(&self) -> u64 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// The flattened counts, row-major.
    pub fn as_slice(&self) -> &[u64] {
        &self.counts
    }
}

/// One parsed simulator run.
#[derive(Debug, Clone)]
pub struct TrialResult {
    pub finished: u64,
    pub avg_delay: f64,
    pub hot: HotMatrix,
}

/// Compiled pattern for the simulator's stdout summary block.
#[derive(Debug)]
pub struct OutputParser {
    summary_re: Regex,
}

impl OutputParser {
    pub fn new() -> Self {
        Self {
            summary_re: Regex::new(r"finished:\s*(\d+)\s*\naverage Delay:\s*(\S+)").unwrap(),
        }
    }

    /// Parse one run. The last summary block on stdout wins; stderr carries
    /// `x y count` triples, one per line.
    pub fn parse(&self, n: usize, stdout: &str, stderr: &str) -> Result<TrialResult, ParseError> {
        let caps = self
            .summary_re
            .captures_iter(stdout)
            .last()
            .ok_or(ParseError::MissingSummary)?;
        let finished: u64 = caps[1].parse().map_err(|_| ParseError::BadSummaryValue {
            value: caps[1].to_string(),
        })?;
        let avg_delay: f64 = caps[2].parse().map_err(|_| ParseError::BadSummaryValue {
            value: caps[2].to_string(),
        })?;

        let mut hot = HotMatrix::new(n);
        for line in stderr.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let bad = || ParseError::BadHotLine {
                line: line.to_string(),
            };
            let mut fields = line.split_whitespace();
            let x: usize = fields.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
            let y: usize = fields.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
            let count: u64 = fields.next().ok_or_else(bad)?.parse().map_err(|_| bad())?;
            if fields.next().is_some() {
                return Err(bad());
            }
            hot.record(x, y, count)?;
        }

        Ok(TrialResult {
            finished,
            avg_delay,
            hot,
        })
    }
}

impl Default for OutputParser {
    fn default() -> Self {
        Self::new()
    }
}
