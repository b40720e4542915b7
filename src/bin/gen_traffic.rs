use clap::Parser;
use popbench_rs::mesh::save_mesh;
use popbench_rs::traffic::{DEFAULT_PAYLOAD_FLITS, TrafficOpts, TrafficPattern};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "gen-traffic",
    about = "Generate a popnet packet-trace directory without running the simulator"
)]
struct Args {
    /// Traffic pattern: base, reverse, butterfly or some_most
    #[arg(long)]
    pattern: String,

    /// Mesh dimension N (N x N nodes)
    #[arg(long, default_value_t = 4)]
    n: usize,

    /// Packets per node per time step
    #[arg(long)]
    speed: u32,

    /// Payload length in flits
    #[arg(long, default_value_t = DEFAULT_PAYLOAD_FLITS)]
    payload: u32,

    /// Output trace directory (its file name becomes the trace prefix)
    #[arg(long)]
    out: PathBuf,

    /// Replace the output directory if it already exists
    #[arg(long)]
    overwrite: bool,

    /// RNG seed for the randomized patterns
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
    let pattern = TrafficPattern::parse(&args.pattern).unwrap_or_else(|err| panic!("{err}"));
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let opts = TrafficOpts {
        n: args.n,
        speed: args.speed,
        payload_flits: args.payload,
    };
    let mesh = pattern.build(&opts, &mut rng);
    save_mesh(&mesh, &args.out, args.overwrite).unwrap_or_else(|err| panic!("save trace: {err}"));

    println!(
        "wrote {} packets for pattern {} to {}",
        mesh.total_packets(),
        pattern.name(),
        args.out.display()
    );
}
