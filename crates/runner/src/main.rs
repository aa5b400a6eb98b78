//! sweep - what would a market order cost across every venue?
//!
//! Usage:
//!   sweep --quantity 16 --product BTCUSD --add-kraken-exchange

use clap::Parser;
use log::error;
use rust_decimal::Decimal;
use std::path::PathBuf;
use std::process::ExitCode;
use sweep_execution::MarketOrderSimulator;
use sweep_gateway::{load_config, load_default_config};
use sweep_runner::{QuotePipeline, RunnerError, render_quote};

#[derive(Parser, Debug)]
#[command(name = "sweep", version)]
#[command(about = "Price a market buy and sell against the combined order books of several venues")]
struct Args {
    /// Quantity to buy and to sell
    #[arg(long, default_value = "16")]
    quantity: Decimal,

    /// Product symbol (e.g. BTCUSD)
    #[arg(long, default_value = "BTCUSD")]
    product: String,

    /// Include Kraken alongside the default venues
    #[arg(long)]
    add_kraken_exchange: bool,

    /// Venue configuration JSON (defaults to the built-in venues)
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args).await {
        Ok(lines) => {
            for line in lines {
                println!("{}", line);
            }
            ExitCode::SUCCESS
        }
        Err(e @ RunnerError::UnsupportedProduct { .. }) => {
            println!("{}", e);
            ExitCode::FAILURE
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(args: &Args) -> Result<Vec<String>, RunnerError> {
    let config = match &args.config {
        Some(path) => load_config(path),
        None => load_default_config(),
    }
    .map_err(sweep_gateway::GatewayError::from)?;

    let pipeline = QuotePipeline::from_config(
        &config,
        args.add_kraken_exchange,
        MarketOrderSimulator::default(),
    )?;

    let quote = pipeline.quote(&args.product, args.quantity).await?;
    Ok(render_quote(&quote))
}
