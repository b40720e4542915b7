//! 数据包类型
//!
//! 定义注入 mesh 的单个数据包（发射时间、源、目的、长度）。

use super::Coord;

/// 一个待注入的数据包；创建后不可变
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Packet {
    /// 发射时间，取值范围 [0, 1)
    pub time: f64,
    pub src: Coord,
    pub dst: Coord,
    /// 负载长度（flit 数）
    pub length: u32,
}

impl Packet {
    pub fn new(time: f64, src: Coord, dst: Coord, length: u32) -> Self {
        assert!(
            time.is_finite() && (0.0..1.0).contains(&time),
            "emission time {time} outside [0, 1)"
        );
        Self {
            time,
            src,
            dst,
            length,
        }
    }

    /// trace 文件中的一行：`time src_x src_y dst_x dst_y length`
    pub fn trace_line(&self) -> String {
        format!(
            "{} {} {} {} {} {}",
            self.time, self.src.x, self.src.y, self.dst.x, self.dst.y, self.length
        )
    }
}
