//! 综合流量生成

use rand::Rng;
use rand::rngs::SmallRng;

use crate::mesh::{Coord, Mesh};

/// 一次生成的参数：mesh 边长、注入强度（每节点每时间步一包）、包长
#[derive(Debug, Clone)]
pub struct TrafficOpts {
    pub n: usize,
    pub speed: u32,
    pub payload_flits: u32,
}

impl TrafficOpts {
    fn nodes(&self) -> usize {
        self.n * self.n
    }

    /// 总包数 = speed · n²，同时也是发射时间的分母
    fn total(&self) -> usize {
        self.speed as usize * self.nodes()
    }
}

// i -> random [0, n*n), excluding i
pub fn build_base(opts: &TrafficOpts, rng: &mut SmallRng) -> Mesh {
    let nodes = opts.nodes();
    assert!(nodes > 1, "random traffic needs more than one node");

    let mut mesh = Mesh::new(opts.n);
    let total = opts.total() as f64;
    for t in 0..opts.speed as usize {
        for i in 0..nodes {
            let mut j = i;
            while j == i {
                j = rng.gen_range(0..nodes);
            }
            push(&mut mesh, opts, t as f64 / total, i, j);
        }
    }
    mesh
}

// i -> n*n - 1 - i
pub fn build_reverse(opts: &TrafficOpts) -> Mesh {
    let nodes = opts.nodes();
    let mut mesh = Mesh::new(opts.n);
    let total = opts.total() as f64;
    for t in 0..opts.speed as usize {
        for i in 0..nodes {
            push(&mut mesh, opts, t as f64 / total, i, nodes - 1 - i);
        }
    }
    mesh
}

// i -> bit-reversal of i over log2(n*n) bits
pub fn build_butterfly(opts: &TrafficOpts) -> Mesh {
    let nodes = opts.nodes();
    assert!(
        nodes.is_power_of_two(),
        "butterfly traffic requires n*n to be a power of two, got {nodes}"
    );
    let bits = nodes.trailing_zeros();

    let mut mesh = Mesh::new(opts.n);
    let total = opts.total() as f64;
    for t in 0..opts.speed as usize {
        for i in 0..nodes {
            push(&mut mesh, opts, t as f64 / total, i, bit_reverse(i, bits));
        }
    }
    mesh
}

// i -> 80% node 0, else random [1, n*n)
pub fn build_some_most(opts: &TrafficOpts, rng: &mut SmallRng) -> Mesh {
    let nodes = opts.nodes();
    assert!(nodes > 1, "hotspot traffic needs more than one node");

    let mut mesh = Mesh::new(opts.n);
    let total = opts.total() as f64;
    for t in 0..opts.speed as usize {
        for i in 0..nodes {
            let j = if rng.gen_bool(0.8) {
                0
            } else {
                rng.gen_range(1..nodes)
            };
            push(&mut mesh, opts, t as f64 / total, i, j);
        }
    }
    mesh
}

/// 低 `bits` 位按位反转；在其定义域上是对合
pub fn bit_reverse(i: usize, bits: u32) -> usize {
    let mut rest = i;
    let mut out = 0;
    for _ in 0..bits {
        out = (out << 1) | (rest & 1);
        rest >>= 1;
    }
    out
}

fn push(mesh: &mut Mesh, opts: &TrafficOpts, time: f64, i: usize, j: usize) {
    mesh.add(
        time,
        Coord::from_index(i, opts.n),
        Coord::from_index(j, opts.n),
        opts.payload_flits,
    );
}
