//! Pokédex - A Pokémon list service with a TTL page cache
//!
//! Serves PokéAPI pages, search and letter summaries to a browser UI.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pokedex::api::create_router;
use pokedex::cache::{FileStorage, MemoryStorage, SlotStorage};
use pokedex::client::PokeApiClient;
use pokedex::{spawn_cleanup_task, AppState, Config};

/// Main entry point for the Pokédex service.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the PokéAPI client and the page cache
/// 4. Restore the persisted page, if still fresh
/// 5. Start background cleanup task
/// 6. Start HTTP server on configured port
/// 7. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pokedex=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Pokédex service");

    let config = Config::from_env();
    info!(
        "Configuration loaded: api={}, page_size={}, cache_ttl={}s, max_cached_pages={}, port={}",
        config.api_base_url,
        config.page_size,
        config.cache_ttl,
        config.max_cached_pages,
        config.server_port
    );

    let client = PokeApiClient::from_config(&config).context("failed to build PokéAPI client")?;

    let storage: Arc<dyn SlotStorage> = match &config.cache_dir {
        Some(dir) => {
            info!("Persisting page cache slot under {}", dir.display());
            Arc::new(FileStorage::new(dir.clone()))
        }
        None => Arc::new(MemoryStorage::new()),
    };

    let state = AppState::from_config(&config, Arc::new(client), storage);

    match state.cache().write().await.restore() {
        Ok(Some(key)) => info!("Restored persisted page ({})", key),
        Ok(None) => info!("No fresh persisted page to restore"),
        Err(err) => warn!("Ignoring persisted page: {}", err),
    }

    let cleanup_handle = spawn_cleanup_task(
        state.cache(),
        Duration::from_secs(config.cleanup_interval),
    );
    info!("Background cleanup task started");

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(cleanup_handle))
        .await
        .context("server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the cleanup task and allows graceful shutdown.
async fn shutdown_signal(cleanup_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                warn!("Failed to install SIGTERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
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

    cleanup_handle.abort();
    warn!("Cleanup task aborted");
}
