//! trace 文件读写
//!
//! 把 mesh 序列化成 popnet 的输入目录：每个源节点一个文件，外加一个
//! 全量合并文件，行内均按发射时间排序。

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

use super::{Coord, Mesh, Packet};

#[derive(Debug, Error)]
pub enum TraceError {
    #[error("trace directory has no usable file name: {0:?}")]
    BadPath(PathBuf),

    #[error("directory exists: {0:?} (pass overwrite to replace it)")]
    DirExists(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{path:?}:{line}: malformed trace line")]
    Malformed { path: PathBuf, line: usize },
}

/// 把 mesh 写到 `dir`：每个源节点一个 `<name>.<x>.<y>` 文件，合并文件
/// `<name>`，其中 `<name>` 是 `dir` 的最后一段。
pub fn save_mesh(mesh: &Mesh, dir: &Path, overwrite: bool) -> Result<(), TraceError> {
    let name = dir
        .file_name()
        .and_then(|s| s.to_str())
        .ok_or_else(|| TraceError::BadPath(dir.to_path_buf()))?
        .to_owned();

    if dir.is_dir() {
        if !overwrite {
            return Err(TraceError::DirExists(dir.to_path_buf()));
        }
        fs::remove_dir_all(dir)?;
    }
    fs::create_dir(dir)?;

    let n = mesh.n();
    for x in 0..n {
        for y in 0..n {
            let path = dir.join(format!("{name}.{x}.{y}"));
            write_sorted(&path, mesh.packets_from(Coord::new(x, y)).to_vec())?;
        }
    }
    write_sorted(&dir.join(name), mesh.all_packets().copied().collect())?;

    debug!(dir = %dir.display(), packets = mesh.total_packets(), "trace 目录已写入");
    Ok(())
}

fn write_sorted(path: &Path, mut pkts: Vec<Packet>) -> Result<(), TraceError> {
    // 稳定排序：同一时间步内保持插入顺序
    pkts.sort_by(|a, b| a.time.total_cmp(&b.time));
    let mut w = BufWriter::new(File::create(path)?);
    for pkt in &pkts {
        writeln!(w, "{}", pkt.trace_line())?;
    }
    w.flush()?;
    Ok(())
}

/// 读回一个 trace 文件（测试与校验用）
pub fn read_trace(path: &Path) -> Result<Vec<Packet>, TraceError> {
    let raw = fs::read_to_string(path)?;
    let mut pkts = Vec::new();
    for (no, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let malformed = || TraceError::Malformed {
            path: path.to_path_buf(),
            line: no + 1,
        };
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(malformed());
        }
        let time: f64 = fields[0].parse().map_err(|_| malformed())?;
        if !time.is_finite() || !(0.0..1.0).contains(&time) {
            return Err(malformed());
        }
        let mut coords = [0usize; 4];
        for (slot, field) in coords.iter_mut().zip(&fields[1..5]) {
            *slot = field.parse().map_err(|_| malformed())?;
        }
        let length: u32 = fields[5].parse().map_err(|_| malformed())?;
        pkts.push(Packet {
            time,
            src: Coord::new(coords[0], coords[1]),
            dst: Coord::new(coords[2], coords[3]),
            length,
        });
    }
    Ok(pkts)
}
