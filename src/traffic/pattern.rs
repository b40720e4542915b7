//! Traffic-pattern identifiers and name-based dispatch.

use rand::rngs::SmallRng;

use super::generate::{TrafficOpts, build_base, build_butterfly, build_reverse, build_some_most};
use crate::mesh::Mesh;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficPattern {
    /// Uniform random destination, excluding self.
    Base,
    /// Fixed reversal permutation `i -> n*n - 1 - i`.
    Reverse,
    /// Bit-reversal permutation; requires `n*n` to be a power of two.
    Butterfly,
    /// 80% of packets to node (0, 0), the rest uniform over the remainder.
    SomeMost,
}

impl TrafficPattern {
    pub const ALL: [TrafficPattern; 4] = [
        Self::Base,
        Self::Reverse,
        Self::Butterfly,
        Self::SomeMost,
    ];

    pub fn parse(raw: &str) -> Result<Self, String> {
        let normalized = raw.trim().to_lowercase();
        let compact: String = normalized
            .chars()
            .filter(|ch| *ch != '_' && *ch != '-')
            .collect();
        match compact.as_str() {
            "base" | "uniform" => Ok(Self::Base),
            "reverse" => Ok(Self::Reverse),
            "butterfly" | "bitreverse" => Ok(Self::Butterfly),
            "somemost" | "hotspot" => Ok(Self::SomeMost),
            _ => Err(format!("unknown traffic pattern: {raw}")),
        }
    }

    /// Canonical name, used for trace directories, result logs and plots.
    pub fn name(self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Reverse => "reverse",
            Self::Butterfly => "butterfly",
            Self::SomeMost => "some_most",
        }
    }

    /// Build a fully populated mesh for this pattern.
    ///
    /// The deterministic patterns ignore the RNG.
    pub fn build(self, opts: &TrafficOpts, rng: &mut SmallRng) -> Mesh {
        match self {
            Self::Base => build_base(opts, rng),
            Self::Reverse => build_reverse(opts),
            Self::Butterfly => build_butterfly(opts),
            Self::SomeMost => build_some_most(opts, rng),
        }
    }
}
