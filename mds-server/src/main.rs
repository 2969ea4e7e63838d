//! MDS Gateway Server
//!
//! A pure Rust HTTP server that:
//! - Accepts flat member and changeset operations on /MDS/*
//! - Translates each into exactly one Master Data Services call
//! - Relays the remote response (or failure) as JSON
//!
//! Access via: http://localhost:8080/MDS/SayHello

use anyhow::Result;
use clap::Parser;
use tracing::info;

mod api;
mod cli;
mod config_commands;
mod router;
mod server_utils;
mod state;

#[cfg(test)]
mod test_helpers;

use cli::{Cli, Commands};
use mds_core::modules::{config as core_config, logger};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config_path = cli.config.as_deref();

    match cli.command {
        Some(Commands::Config(cmd)) => config_commands::handle_config_command(cmd, config_path),
        Some(Commands::SayHello) => {
            println!("{}", mds_core::HELLO_GREETING);
            Ok(())
        }
        Some(Commands::Serve { port }) => run_server(config_path, port, &cli.log_level).await,
        None => run_server(config_path, None, &cli.log_level).await,
    }
}

async fn run_server(
    config_path: Option<&std::path::Path>,
    port: Option<u16>,
    log_level: &str,
) -> Result<()> {
    logger::init_logger(log_level)?;

    let mut config = core_config::load_config(config_path)?;
    if let Some(port) = port {
        config.server.port = port;
        core_config::validate_config(&config)?;
    }

    info!("🚀 MDS Gateway v{} starting...", env!("CARGO_PKG_VERSION"));

    let state = AppState::from_config(config)?;
    let listener = server_utils::create_listener(&state.config().server).await?;
    let addr = listener.local_addr()?;

    info!("🌐 Server listening on http://{}", addr);
    info!("🔀 MDS operations at http://{}/MDS/", addr);

    let app = router::build_router(state);

    axum::serve(listener, app).with_graceful_shutdown(server_utils::shutdown_signal()).await?;

    info!("✅ Server shut down cleanly");
    Ok(())
}
