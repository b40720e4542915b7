use std::fs;
use std::path::PathBuf;
use std::process::Command;
use std::time::{SystemTime, UNIX_EPOCH};

fn unique_temp_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("time went backwards")
        .as_nanos();
    let dir = std::env::temp_dir().join(format!(
        "popbench-rs-{prefix}-{}-{nanos}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).expect("create temp dir");
    dir
}

fn gen_traffic(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_gen_traffic"))
        .args(args)
        .output()
        .expect("run gen_traffic")
}

#[test]
fn writes_per_node_files_and_combined_file() {
    let dir = unique_temp_dir("gen-basic");
    let out = dir.join("base");
    let output = gen_traffic(&[
        "--pattern",
        "base",
        "--n",
        "4",
        "--speed",
        "3",
        "--seed",
        "1",
        "--out",
        out.to_str().unwrap(),
    ]);
    assert!(
        output.status.success(),
        "gen_traffic failed: stderr={}",
        String::from_utf8_lossy(&output.stderr)
    );

    for x in 0..4 {
        for y in 0..4 {
            assert!(
                out.join(format!("base.{x}.{y}")).exists(),
                "missing base.{x}.{y}"
            );
        }
    }

    let combined = fs::read_to_string(out.join("base")).expect("read combined trace");
    let lines: Vec<&str> = combined.lines().collect();
    assert_eq!(lines.len(), 3 * 16, "speed * n * n packets");
    for line in &lines {
        assert_eq!(line.split_whitespace().count(), 6, "bad line: {line}");
    }

    // combined file is sorted by emission time
    let times: Vec<f64> = lines
        .iter()
        .map(|l| l.split_whitespace().next().unwrap().parse().unwrap())
        .collect();
    assert!(times.windows(2).all(|w| w[0] <= w[1]));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn refuses_existing_directory_without_overwrite() {
    let dir = unique_temp_dir("gen-overwrite");
    let out = dir.join("reverse");
    let out_str = out.to_str().unwrap();
    let args = [
        "--pattern", "reverse", "--n", "4", "--speed", "1", "--out", out_str,
    ];
    let first = gen_traffic(&args);
    assert!(
        first.status.success(),
        "first run failed: {}",
        String::from_utf8_lossy(&first.stderr)
    );

    let second = gen_traffic(&args);
    assert!(
        !second.status.success(),
        "expected non-zero exit on existing directory"
    );
    let stderr = String::from_utf8_lossy(&second.stderr);
    assert!(stderr.contains("directory exists"), "stderr: {stderr}");

    let mut with_overwrite = args.to_vec();
    with_overwrite.push("--overwrite");
    let third = gen_traffic(&with_overwrite);
    assert!(
        third.status.success(),
        "overwrite run failed: {}",
        String::from_utf8_lossy(&third.stderr)
    );

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn same_seed_reproduces_the_same_trace() {
    let dir = unique_temp_dir("gen-seed");
    let a = dir.join("a");
    let b = dir.join("b");
    for out in [&a, &b] {
        let output = gen_traffic(&[
            "--pattern",
            "some_most",
            "--n",
            "4",
            "--speed",
            "5",
            "--seed",
            "99",
            "--out",
            out.to_str().unwrap(),
        ]);
        assert!(
            output.status.success(),
            "gen_traffic failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    let trace_a = fs::read_to_string(a.join("a")).expect("read trace a");
    let trace_b = fs::read_to_string(b.join("b")).expect("read trace b");
    assert_eq!(trace_a, trace_b);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn unknown_pattern_exits_nonzero() {
    let dir = unique_temp_dir("gen-unknown");
    let out = dir.join("x");
    let output = gen_traffic(&[
        "--pattern",
        "mystery",
        "--speed",
        "1",
        "--out",
        out.to_str().unwrap(),
    ]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("unknown traffic pattern"),
        "stderr: {stderr}"
    );

    let _ = fs::remove_dir_all(&dir);
}
