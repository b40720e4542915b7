//! 流量模式
//!
//! 四种综合流量模式的生成器，以及按名字分发的模式枚举。

mod generate;
mod pattern;

pub use generate::{
    TrafficOpts, bit_reverse, build_base, build_butterfly, build_reverse, build_some_most,
};
pub use pattern::TrafficPattern;

/// 默认每包负载长度（flit 数）
pub const DEFAULT_PAYLOAD_FLITS: u32 = 5;
