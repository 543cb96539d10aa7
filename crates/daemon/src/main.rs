//! MediaQ server - Main Entry Point
//!
//! Runs the chat bot (when a token is configured) and the HTTP queue API
//! against one shared store until Ctrl+C.

mod config;
mod logging;
mod store;
mod telemetry;

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

use config::Config;
use mediaq_api_http::HttpServer;
use mediaq_bot::{BotPoller, CommandDispatcher, TelegramClient};
use mediaq_core::application::{shutdown_channel, QueueService};
use mediaq_core::port::UuidProvider;

const VERSION: &str = env!("CARGO_PKG_VERSION");
const SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Configuration and logging
    let config = Config::parse();
    let _log_guard = logging::init(config.log_format)?;

    info!("MediaQ server v{} starting...", VERSION);

    if let Some(warning) = config.pepper_warning() {
        warn!("{}", warning);
    }
    let deriver = config.identity_deriver();

    // 2. Store
    let store = store::open_store(&config.store_url).await?;
    let service = Arc::new(QueueService::new(store, Arc::new(UuidProvider)));

    if config.debug {
        warn!("Debug mode: wiping every queue");
        service
            .reset_store()
            .await
            .context("Failed to clear store")?;
    }

    let (shutdown_tx, shutdown_rx) = shutdown_channel();

    // 3. Bot
    let bot_handle = match config.telegram_token() {
        Some(token) => {
            let client = TelegramClient::new(token).context("Failed to build bot client")?;
            let poller = BotPoller::new(
                Arc::new(client),
                CommandDispatcher::new(deriver, service.clone()),
            );
            Some(tokio::spawn(poller.run(shutdown_rx.clone())))
        }
        None => {
            warn!("No TELEGRAM_TOKEN provided, bot disabled");
            None
        }
    };

    // 4. HTTP API
    let server = HttpServer::new(config.http(), service);
    let listener = server
        .bind()
        .await
        .with_context(|| format!("Failed to bind {}", config.http().addr()))?;
    let server_handle = tokio::spawn(server.serve(listener, shutdown_rx));

    info!("System ready. Press Ctrl+C to shutdown");

    // 5. Wait for shutdown signal
    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received. Exiting gracefully...");
    shutdown_tx.shutdown();

    match tokio::time::timeout(SHUTDOWN_GRACE, server_handle).await {
        Ok(Ok(Err(e))) => tracing::error!(error = ?e, "HTTP server failed"),
        Err(_) => warn!("HTTP server did not stop in time"),
        _ => {}
    }
    if let Some(handle) = bot_handle {
        if tokio::time::timeout(SHUTDOWN_GRACE, handle).await.is_err() {
            warn!("Bot poller did not stop in time");
        }
    }

    telemetry::shutdown();
    info!("Shutdown complete.");

    Ok(())
}
