//! 基准驱动
//!
//! 对每个流量模式按强度序列扫描：生成、落盘、仿真、解析、追加结果日志。

mod config;
mod record;
mod sweep;

pub use config::{BenchConfig, ConfigError};
pub use record::TrialRecord;
pub use sweep::{BenchError, SweepOpts, default_speeds, run_sweep};
