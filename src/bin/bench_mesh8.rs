use clap::Parser;
use popbench_rs::bench::{BenchConfig, SweepOpts, default_speeds, run_sweep};
use popbench_rs::plot::{render_efficiency, render_hotspot};
use popbench_rs::runner::PopnetRunner;
use popbench_rs::traffic::{DEFAULT_PAYLOAD_FLITS, TrafficPattern};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::path::PathBuf;

const N: usize = 8;

#[derive(Debug, Parser)]
#[command(
    name = "bench-mesh8",
    about = "Sweep synthetic traffic patterns over an 8x8 mesh through popnet and plot the results"
)]
struct Args {
    /// Path to the popnet simulator binary (overrides the config file)
    #[arg(long)]
    popnet: Option<PathBuf>,

    /// Optional JSON config (simulator parameters, speeds, payload, seed)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Comma-separated traffic patterns; defaults to all four
    #[arg(long)]
    patterns: Option<String>,

    /// Directory for generated trace files
    #[arg(long, default_value = "./nets")]
    nets_dir: PathBuf,

    /// Directory for per-pattern result logs and plots
    #[arg(long, default_value = "./result")]
    result_dir: PathBuf,

    /// RNG seed for the randomized patterns (overrides the config file)
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => BenchConfig::load(path).unwrap_or_else(|err| panic!("{err}")),
        None => BenchConfig::default(),
    };

    let mut sim = config.sim.clone();
    if let Some(popnet) = args.popnet {
        sim.popnet = popnet;
    }

    let patterns = parse_patterns(args.patterns.as_deref());
    let sweep = SweepOpts {
        speeds: config.speeds.clone().unwrap_or_else(default_speeds),
        nets_dir: args.nets_dir,
        result_dir: args.result_dir,
    };
    let payload = config.payload_flits.unwrap_or(DEFAULT_PAYLOAD_FLITS);
    let mut rng = match args.seed.or(config.seed) {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let runner = PopnetRunner::new(sim);
    for pattern in patterns {
        let name = pattern.name();
        let records = run_sweep(pattern, N, payload, &sweep, &runner, &mut rng)
            .unwrap_or_else(|err| panic!("bench {name} failed: {err}"));
        let last = records.last().expect("sweep produced no trials");

        let eff_path = sweep.result_dir.join(format!("{name}_efficiency.svg"));
        render_efficiency(&records, &format!("{name} on {N}x{N} mesh"), &eff_path)
            .unwrap_or_else(|err| panic!("render {name} efficiency chart: {err}"));

        let hot_path = sweep.result_dir.join(format!("{name}_hotspot.svg"));
        render_hotspot(&last.hot, &format!("{name} hotspots"), &hot_path)
            .unwrap_or_else(|err| panic!("render {name} hotspot heatmap: {err}"));

        println!(
            "{name}: {} trials, last finished={} avg_delay={}, plots at {} and {}",
            records.len(),
            last.finished,
            last.avg_delay,
            eff_path.display(),
            hot_path.display()
        );
    }
}

fn parse_patterns(raw: Option<&str>) -> Vec<TrafficPattern> {
    match raw {
        None => TrafficPattern::ALL.to_vec(),
        Some(list) => list
            .split(',')
            .filter(|tok| !tok.trim().is_empty())
            .map(|tok| TrafficPattern::parse(tok).unwrap_or_else(|err| panic!("{err}")))
            .collect(),
    }
}
