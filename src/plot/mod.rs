//! 结果绘图（SVG）
//!
//! 扫描结束后的两张图：吞吐/时延双轴折线图与热点热力图。

mod efficiency;
mod heatmap;

pub use efficiency::render_efficiency;
pub use heatmap::render_hotspot;
