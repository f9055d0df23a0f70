//! order-analytics-cli binary entry point

use anyhow::Result;
use clap::Parser;
use order_analytics_sdk::cli::commands::report::handle_report;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Aggregate statistics over a customer order dataset
#[derive(Debug, Parser)]
#[command(name = "order-analytics-cli", version, about)]
struct Cli {
    /// Dataset file to load ("-" for stdin); defaults to the built-in
    /// sample dataset
    #[arg(short, long)]
    input: Option<String>,

    /// Dataset format: json or yaml
    #[arg(short, long, default_value = "json")]
    format: String,

    /// Customer id for the per-customer statistics
    #[arg(short, long, default_value_t = 1)]
    customer: u32,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logger(verbose: bool) {
    let filter = if verbose {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("order_analytics_sdk=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("order_analytics_sdk=info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    handle_report(&cli.format, cli.input.as_deref(), cli.customer)?;
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    init_logger(cli.verbose);
    tracing::info!("Starting order-analytics-cli");

    if let Err(e) = run(&cli) {
        tracing::error!("Report failed: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
