use anyhow::Context;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use trading_common::data::types::parse_asset_list;
use trading_core::{
    api::{router, AppState},
    config::Settings,
    exchange::CoinbaseSpot,
    simulation::{SimulationConfig, SimulationRunner, TokioClock},
};

#[derive(Parser)]
#[command(name = "trading-core")]
#[command(about = "Paper trading simulator driven by live spot prices")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the simulation over HTTP
    Serve,
    /// Run one simulation and print the report as JSON
    Simulate {
        /// Comma separated assets, e.g. BTC,ETH
        #[arg(short, long)]
        assets: Option<String>,
        #[arg(short, long)]
        iterations: Option<usize>,
        /// Holding period per trade in milliseconds
        #[arg(long)]
        hold_ms: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut settings = Settings::new().context("failed to load settings")?;
    let source = Arc::new(CoinbaseSpot::from_settings(&settings.price_source)?);

    match Cli::parse().command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let state = AppState::new(source, Arc::new(TokioClock), settings.simulation.clone());
            let addr = format!("0.0.0.0:{}", settings.api.port);
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {}", addr))?;

            info!("Simulation API listening on {}", addr);
            axum::serve(listener, router(state))
                .with_graceful_shutdown(async {
                    if let Err(e) = tokio::signal::ctrl_c().await {
                        error!("Failed to listen for shutdown signal: {}", e);
                    }
                    info!("Shutting down server...");
                })
                .await?;
            info!("Server shutdown complete");
        }

        Commands::Simulate {
            assets,
            iterations,
            hold_ms,
        } => {
            if let Some(hold_ms) = hold_ms {
                settings.simulation.hold_millis = hold_ms;
            }
            let assets = match assets {
                Some(raw) => parse_asset_list(&raw)?,
                None => settings.simulation.asset_symbols()?,
            };
            let iterations = iterations.unwrap_or(settings.simulation.iterations);

            let mut runner = SimulationRunner::new(
                source,
                Arc::new(TokioClock),
                SimulationConfig::from_settings(&settings.simulation),
            );
            let report = runner.run(&assets, iterations).await?;

            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
