//! Auction Closer - An auction service with automatic expiration
//!
//! Serves the auction API and runs the background closer against the same store.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use auction_closer::api::{create_router, AppState};
use auction_closer::auction::{AuctionRepository, InMemoryAuctionRepository};
use auction_closer::config::Config;
use auction_closer::tasks::AuctionCloser;

/// Main entry point for the auction service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Create the auction repository
/// 4. Start the background auction closer
/// 5. Create Axum router with all endpoints
/// 6. Start HTTP server on configured port
/// 7. On SIGINT/SIGTERM, cancel the closer and wait for it to exit
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auction_closer=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting auction service");

    let config = Config::from_env();
    info!(
        "Configuration loaded: auction_lifetime={}, check_interval={}, port={}",
        humantime::format_duration(config.closer.auction_lifetime),
        humantime::format_duration(config.closer.check_interval),
        config.server_port
    );

    let repository: Arc<dyn AuctionRepository> = Arc::new(InMemoryAuctionRepository::new());

    let shutdown = CancellationToken::new();
    let closer = Arc::new(AuctionCloser::new(repository.clone(), config.closer));
    closer
        .start(shutdown.child_token())
        .context("Failed to start auction closer")?;

    let app = create_router(AppState::new(repository, closer.clone()));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await
        .context("Server error")?;

    // The closer saw the cancellation; wait for any in-flight cycle to finish
    closer.stop().await;
    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM), then cancels `shutdown`.
async fn shutdown_signal(shutdown: CancellationToken) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    shutdown.cancel();
}
