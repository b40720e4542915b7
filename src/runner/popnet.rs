//! popnet 子进程驱动
//!
//! 以固定参数集启动外部仿真器，阻塞等待其结束并解析输出。

use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use thiserror::Error;
use tracing::{debug, info};

use super::config::SimOpts;
use super::output::{OutputParser, ParseError, TrialResult};

#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to launch simulator {path:?}: {source}")]
    Launch {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("simulator exited with {status}: {stderr_tail}")]
    SimulatorFailed {
        status: ExitStatus,
        stderr_tail: String,
    },

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// 驱动一次完整的仿真：启动子进程、等待结束、解析 stdout/stderr
#[derive(Debug)]
pub struct PopnetRunner {
    opts: SimOpts,
    parser: OutputParser,
}

impl PopnetRunner {
    pub fn new(opts: SimOpts) -> Self {
        Self {
            opts,
            parser: OutputParser::new(),
        }
    }

    pub fn opts(&self) -> &SimOpts {
        &self.opts
    }

    /// 跑一个 trial；`trace_prefix` 指向 trace 目录中的合并文件
    #[tracing::instrument(skip(self), fields(popnet = %self.opts.popnet.display()))]
    pub fn run(&self, n: usize, trace_prefix: &Path) -> Result<TrialResult, RunError> {
        let args = self.opts.to_args(n, trace_prefix);
        debug!(?args, "🚀 启动 popnet");

        let output = Command::new(&self.opts.popnet)
            .args(&args)
            .output()
            .map_err(|source| RunError::Launch {
                path: self.opts.popnet.clone(),
                source,
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RunError::SimulatorFailed {
                status: output.status,
                stderr_tail: tail(&stderr, 512),
            });
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let stderr = String::from_utf8_lossy(&output.stderr);
        let result = self.parser.parse(n, &stdout, &stderr)?;

        info!(
            finished = result.finished,
            avg_delay = result.avg_delay,
            "✅ 仿真完成"
        );
        Ok(result)
    }
}

fn tail(s: &str, max_chars: usize) -> String {
    let trimmed = s.trim_end();
    let total = trimmed.chars().count();
    if total <= max_chars {
        trimmed.to_string()
    } else {
        trimmed.chars().skip(total - max_chars).collect()
    }
}
