//! # Zeebe Bridge CLI
//!
//! Command-line front end that forwards a single workflow operation to the
//! precompiled Zeebe client library: parse, load configuration, bind the
//! library, call, exit.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use zeebe_bridge::{dispatch, BridgeClient, BridgeConfig, BridgeResult, Operation};

#[derive(Parser)]
#[command(name = "zeebe-bridge")]
#[command(about = "Forward workflow operations to the native Zeebe client library")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Cli {
    /// Operation to forward (subscribe, deployWorkflow, startWorkflowInstance)
    #[arg(value_name = "OPERATION", value_parser = Operation::parse)]
    operation: Operation,

    /// Configuration file path (default: ./zeebe-bridge.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Verbose output level (use multiple times for more verbosity)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let _subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .try_init();

    match run(&cli) {
        Ok(()) => process::exit(0),
        Err(e) => {
            error!("{e}");
            process::exit(1);
        }
    }
}

fn run(cli: &Cli) -> BridgeResult<()> {
    // An explicit --config path takes priority over discovery
    let config = match &cli.config {
        Some(path) => BridgeConfig::load_from_file(path)?,
        None => BridgeConfig::load()?,
    };

    info!(
        broker = config.broker_address(),
        topic = config.default_topic(),
        operation = %cli.operation,
        "zeebe-bridge starting"
    );

    let client = BridgeClient::connect(config)?;

    if let Some(response) = dispatch(&client, cli.operation)? {
        println!("{response}");
    }

    Ok(())
}
