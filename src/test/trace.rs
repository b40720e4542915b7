use std::fs;

use tempfile::TempDir;

use crate::mesh::{Coord, Mesh, TraceError, read_trace, save_mesh};

fn tmp() -> TempDir {
    tempfile::tempdir().expect("create temp dir")
}

fn sample_mesh() -> Mesh {
    let mut mesh = Mesh::new(2);
    mesh.add(0.5, Coord::new(0, 0), Coord::new(1, 1), 5);
    mesh.add(0.25, Coord::new(0, 0), Coord::new(0, 1), 5);
    mesh.add(0.0, Coord::new(1, 1), Coord::new(0, 0), 7);
    mesh
}

#[test]
fn save_writes_per_node_and_combined_files() {
    let dir = tmp();
    let trace = dir.path().join("demo");
    save_mesh(&sample_mesh(), &trace, false).unwrap();

    for x in 0..2 {
        for y in 0..2 {
            assert!(trace.join(format!("demo.{x}.{y}")).exists());
        }
    }
    assert!(trace.join("demo").exists());
}

#[test]
fn per_node_files_are_time_sorted_and_single_source() {
    let dir = tmp();
    let trace = dir.path().join("demo");
    save_mesh(&sample_mesh(), &trace, false).unwrap();

    let pkts = read_trace(&trace.join("demo.0.0")).unwrap();
    assert_eq!(pkts.len(), 2);
    assert_eq!(pkts[0].time, 0.25);
    assert_eq!(pkts[1].time, 0.5);
    assert!(pkts.iter().all(|p| p.src == Coord::new(0, 0)));

    let empty = read_trace(&trace.join("demo.0.1")).unwrap();
    assert!(empty.is_empty());
}

#[test]
fn combined_file_round_trips_the_packet_multiset() {
    let dir = tmp();
    let trace = dir.path().join("demo");
    let mesh = sample_mesh();
    save_mesh(&mesh, &trace, false).unwrap();

    let got = read_trace(&trace.join("demo")).unwrap();
    let mut want: Vec<_> = mesh.all_packets().copied().collect();
    want.sort_by(|a, b| a.time.total_cmp(&b.time));
    assert_eq!(got, want);
}

#[test]
fn save_refuses_existing_dir_without_overwrite() {
    let dir = tmp();
    let trace = dir.path().join("demo");
    save_mesh(&sample_mesh(), &trace, false).unwrap();

    let err = save_mesh(&sample_mesh(), &trace, false).unwrap_err();
    assert!(matches!(err, TraceError::DirExists(_)));
}

#[test]
fn overwrite_replaces_prior_contents() {
    let dir = tmp();
    let trace = dir.path().join("demo");
    save_mesh(&sample_mesh(), &trace, false).unwrap();
    fs::write(trace.join("stale"), "leftover").unwrap();

    let mut second = Mesh::new(2);
    second.add(0.125, Coord::new(1, 0), Coord::new(0, 1), 3);
    save_mesh(&second, &trace, true).unwrap();

    assert!(!trace.join("stale").exists());
    let got = read_trace(&trace.join("demo")).unwrap();
    assert_eq!(got.len(), 1);
    assert_eq!(got[0].time, 0.125);
    assert_eq!(got[0].length, 3);
}

#[test]
fn read_trace_rejects_malformed_lines() {
    let dir = tmp();
    let path = dir.path().join("bad");
    fs::write(&path, "0.5 0 0 1 1\n").unwrap();
    let err = read_trace(&path).unwrap_err();
    assert!(matches!(err, TraceError::Malformed { line: 1, .. }));

    fs::write(&path, "1.5 0 0 1 1 5\n").unwrap();
    assert!(read_trace(&path).is_err());

    fs::write(&path, "x 0 0 1 1 5\n").unwrap();
    assert!(read_trace(&path).is_err());
}
