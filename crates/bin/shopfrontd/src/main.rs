//! # shopfrontd — shopfront API daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load `.env`, the config file and environment overrides
//! - Initialise `tracing`
//! - Initialize the `SQLite` connection pool and run migrations
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT) and close the pool
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use shopfront_adapter_http_axum::router;
use shopfront_adapter_http_axum::state::AppState;
use shopfront_adapter_storage_sqlite_sqlx::{SqliteProductRepository, SqliteShopInfoRepository};
use shopfront_app::services::product_service::ProductService;
use shopfront_app::services::shop_info_service::ShopInfoService;

use crate::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    let config = Config::load().context("failed to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .init();

    match dotenv {
        Ok(path) => tracing::debug!(path = %path.display(), "loaded .env file"),
        Err(err) if err.not_found() => {}
        Err(err) => tracing::warn!(error = %err, "ignoring unreadable .env file"),
    }

    // Database
    let db = shopfront_adapter_storage_sqlite_sqlx::Config {
        database_url: config.database_url().to_string(),
    }
    .build()
    .await
    .context("failed to initialise database")?;
    tracing::info!("database ready");
    let pool = db.pool().clone();

    // Services
    let product_service = ProductService::new(SqliteProductRepository::new(pool.clone()));
    let shop_info_service = ShopInfoService::new(SqliteShopInfoRepository::new(pool));

    // HTTP
    let state = AppState::new(product_service, shop_info_service);
    let app = router::build(state, config.server.static_dir.as_deref());

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("failed to bind {bind_addr}"))?;
    tracing::info!(%bind_addr, "shopfrontd listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    db.close().await;
    tracing::info!("shutdown complete");

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("shutdown signal received, draining connections");
}
