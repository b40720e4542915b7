//! 网格流量模块
//!
//! 此模块包含 N×N mesh 流量建模的核心组件：节点坐标、数据包、按源节点
//! 组织的 mesh 容器，以及 popnet trace 文件的读写。

// 子模块声明
mod coord;
mod mesh;
mod packet;
mod trace;

// 重新导出公共接口
pub use coord::Coord;
pub use mesh::Mesh;
pub use packet::Packet;
pub use trace::{TraceError, read_trace, save_mesh};
