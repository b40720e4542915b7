//! mesh 容器
//!
//! 按源节点保存各自注入的数据包队列（保持插入顺序）。

use super::{Coord, Packet};

/// N×N mesh：每个源节点一条按插入顺序排列的数据包队列
#[derive(Debug, Clone)]
pub struct Mesh {
    n: usize,
    queues: Vec<Vec<Packet>>,
}

impl Mesh {
    pub fn new(n: usize) -> Self {
        assert!(n > 0, "mesh size must be positive");
        Self {
            n,
            queues: vec![Vec::new(); n * n],
        }
    }

    /// mesh 边长 N
    pub fn n(&self) -> usize {
        self.n
    }

    /// 节点总数（N²）
    pub fn nodes(&self) -> usize {
        self.n * self.n
    }

    /// 注入一个数据包；两端坐标都必须落在 mesh 内
    pub fn add(&mut self, time: f64, src: Coord, dst: Coord, length: u32) {
        assert!(
            dst.in_bounds(self.n),
            "dst ({}, {}) outside {n}x{n} mesh",
            dst.x,
            dst.y,
            n = self.n
        );
        let idx = src.index(self.n);
        self.queues[idx].push(Packet::new(time, src, dst, length));
    }

    /// 某个源节点的队列（插入顺序）
    pub fn packets_from(&self, src: Coord) -> &[Packet] {
        &self.queues[src.index(self.n)]
    }

    pub fn total_packets(&self) -> usize {
        self.queues.iter().map(Vec::len).sum()
    }

    /// 全部数据包（按源节点下标、再按插入顺序）
    pub fn all_packets(&self) -> impl Iterator<Item = &Packet> + '_ {
        self.queues.iter().flatten()
    }
}
