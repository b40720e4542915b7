use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Routing algorithm selector passed to the simulator as `-R`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RoutingAlg {
    DimensionOrder,
    Adaptive,
}

impl RoutingAlg {
    fn flag(self) -> &'static str {
        match self {
            Self::DimensionOrder => "0",
            Self::Adaptive => "1",
        }
    }
}

/// Fixed parameter set for one simulator invocation.
///
/// Field defaults mirror the reference benchmark setup; any subset can be
/// overridden from a JSON config file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimOpts {
    /// Path to the popnet binary.
    pub popnet: PathBuf,
    /// Cube dimension (`-c`); 2 for a 2-D mesh.
    pub cube_dim: u32,
    /// Virtual channels per physical port (`-V`).
    pub vcs: u32,
    /// Input buffer size in flits (`-B`).
    pub in_buf: u32,
    /// Output buffer size in flits (`-O`).
    pub out_buf: u32,
    /// Flit size (`-F`).
    pub flit_size: u32,
    /// Link length (`-L`).
    pub link_length: u32,
    /// Simulated cycles (`-T`).
    pub sim_cycles: u64,
    /// Simulator-internal RNG seed (`-r`).
    pub rng_seed: u64,
    /// Routing algorithm (`-R`).
    pub routing: RoutingAlg,
}

impl Default for SimOpts {
    fn default() -> Self {
        Self {
            popnet: PathBuf::from("./popnet"),
            cube_dim: 2,
            vcs: 3,
            in_buf: 12,
            out_buf: 12,
            flit_size: 4,
            link_length: 1000,
            sim_cycles: 1000,
            rng_seed: 1,
            routing: RoutingAlg::DimensionOrder,
        }
    }
}

impl SimOpts {
    /// Argument vector for one trial: `-A` is the mesh dimension, `-I` the
    /// trace file prefix.
    pub fn to_args(&self, n: usize, trace_prefix: &Path) -> Vec<String> {
        vec![
            "-A".into(),
            n.to_string(),
            "-c".into(),
            self.cube_dim.to_string(),
            "-V".into(),
            self.vcs.to_string(),
            "-B".into(),
            self.in_buf.to_string(),
            "-O".into(),
            self.out_buf.to_string(),
            "-F".into(),
            self.flit_size.to_string(),
            "-L".into(),
            self.link_length.to_string(),
            "-T".into(),
            self.sim_cycles.to_string(),
            "-r".into(),
            self.rng_seed.to_string(),
            "-I".into(),
            trace_prefix.display().to_string(),
            "-R".into(),
            self.routing.flag().into(),
        ]
    }
}
