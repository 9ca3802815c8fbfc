use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::{error, info};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;
use sumo_route::{NetworkDescription, RoadGraph, RouteGenerator, RoutingConfig};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Computes routes through a SUMO road network.",
    long_about = None
)]
struct CliArgs {
    /// The network description (JSON).
    #[arg(short, long, value_name = "FILE")]
    network: PathBuf,
    /// The routing configuration (JSON).
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Computes the route between two junctions.
    Route { from: String, to: String },
    /// Generates routes between random junctions.
    Random {
        #[arg(long, default_value_t = 1)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
    },
    /// Lists the groups of mutually reachable junctions.
    Components,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    match run(CliArgs::parse()) {
        Ok(output) => {
            println!("{:#}", output);
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: CliArgs) -> Result<serde_json::Value, Box<dyn std::error::Error>> {
    let config = match &args.config {
        Some(path) => RoutingConfig::from_file(path)?,
        None => RoutingConfig::default(),
    };
    let network = NetworkDescription::from_file(&args.network)?;
    let graph = RoadGraph::from_network(&network, config.convention());
    info!(
        "Loaded {} junctions and {} streets from {}",
        network.junctions.len(),
        network.streets.len(),
        args.network.display()
    );

    let output = match args.command {
        Command::Route { from, to } => {
            let route = graph.compute_route(&from, &to)?;
            json!({ "status": route.status(), "route": route })
        }
        Command::Random { count, seed } => {
            let rng = StdRng::seed_from_u64(seed);
            let routes = RouteGenerator::new(&graph, rng, config.max_attempts)
                .take(count)
                .collect::<Vec<_>>();
            if routes.len() < count {
                info!("Only {} of {} routes could be generated", routes.len(), count);
            }
            json!(routes)
        }
        Command::Components => json!(graph.connected_components()),
    };
    Ok(output)
}
