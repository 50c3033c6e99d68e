//! SalesDash HTTP server
//!
//! Serves the transactions listing and month analytics under `/api`, backed
//! by either the SQLite or the in-memory record store.

pub mod config;
pub mod error;
pub mod extract;
pub mod request_id;
pub mod routes;
pub mod state;

use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal::ctrl_c;
#[cfg(unix)]
use tokio::signal::unix::{signal, SignalKind};
use tracing::{info, warn};

pub use config::{ConfigError, ServerConfig, StoreBackend};
pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;

/// Open the store, optionally reseed, and serve until shutdown
///
/// # Errors
///
/// Fails when the store cannot be opened or the address cannot be bound. A
/// failed startup reseed is logged and the server starts with whatever the
/// store already holds.
pub async fn start_server(config: ServerConfig) -> anyhow::Result<()> {
    info!("Initializing state...");
    let state = Arc::new(AppState::from_config(&config).context("failed to open record store")?);

    if config.seed_on_startup {
        match state.reseed().await {
            Ok(records) => info!(records, source = state.seed_url(), "startup reseed complete"),
            Err(e) => warn!(
                err_code = e.code(),
                error = %e,
                "startup reseed failed; serving existing data"
            ),
        }
    }

    let app = build_router(state);

    info!("Binding to {}", config.addr);
    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("failed to bind {}", config.addr))?;
    info!("Server running on {}", config.addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = ctrl_c().await {
            warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
        info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!(error = %e, "failed to install signal handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
