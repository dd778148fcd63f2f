use clap::Parser;
use color_eyre::Result;
use env_logger::Env;
use log::info;
use std::path::PathBuf;

use vnet_topogen::config::{Direction, TopologyKind};
use vnet_topogen::config_loader::{self, CliOverrides};
use vnet_topogen::orchestrator;

/// Generate RIOT network topologies to be consumed by desvirt/vnet
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of rows in the grid/mesh from 1 to 26 [default: 2]
    #[arg(long = "r", value_parser = clap::value_parser!(u8).range(1..=26))]
    rows: Option<u8>,

    /// Number of cols in the grid/mesh [default: 2]
    #[arg(long = "c")]
    cols: Option<usize>,

    /// Number of nodes in the network (not used with --t grid/mesh) [default: 4]
    #[arg(long = "s")]
    size: Option<usize>,

    /// The topology to create for this network [default: ring]
    #[arg(long = "t", value_enum)]
    topology: Option<TopologyKind>,

    /// Uni or bi-directional links (not used with --t grid, mesh, complete, or star) [default: bi]
    #[arg(long = "d", value_enum)]
    direction: Option<Direction>,

    /// Percentage of broadcast loss given as a string [default: "0.0"]
    #[arg(long = "b")]
    broadcast_loss: Option<String>,

    /// Percentage of packet loss given as a string [default: "0.0"]
    #[arg(long = "l")]
    packet_loss: Option<String>,

    /// Address of a compiled RIOT project .elf file to run on all the nodes
    #[arg(long = "e")]
    binary: Option<String>,

    /// YAML configuration file; explicit flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output directory for the generated files [default: .]
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Also write a JSON manifest of the generated graph
    #[arg(long)]
    manifest: bool,
}

impl Args {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            rows: self.rows,
            cols: self.cols,
            size: self.size,
            kind: self.topology,
            direction: self.direction,
            broadcast_loss: self.broadcast_loss.clone(),
            packet_loss: self.packet_loss.clone(),
            binary: self.binary.clone(),
            output_dir: self.output_dir.clone(),
            manifest: self.manifest,
        }
    }
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments; invalid values exit here with usage
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Starting vnet-topogen");
    if let Some(path) = &args.config {
        info!("Configuration file: {:?}", path);
    }

    let config = config_loader::resolve_config(args.config.as_deref(), &args.overrides())?;
    let written = orchestrator::run(&config)?;

    for path in written.paths() {
        println!("Created {}", path.display());
    }

    Ok(())
}
