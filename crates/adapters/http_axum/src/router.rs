//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::routing::get;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use shopfront_app::ports::{ProductRepository, ShopInfoRepository};

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests API routes under `/api`. When `static_dir` is given, any request
/// no route matches is served from that directory, and paths with no file
/// behind them get its `index.html` so client-side routes survive a reload.
/// Includes a permissive [`CorsLayer`] and a [`TraceLayer`] that logs each
/// HTTP request/response at the `DEBUG` level using the `tracing` ecosystem.
pub fn build<PR, SR>(state: AppState<PR, SR>, static_dir: Option<&Path>) -> Router
where
    PR: ProductRepository + Send + Sync + 'static,
    SR: ShopInfoRepository + Send + Sync + 'static,
{
    let router = Router::new()
        .route("/health", get(health_check))
        .nest("/api", crate::api::routes())
        .with_state(state);

    let router = match static_dir {
        Some(dir) => router.fallback_service(
            ServeDir::new(dir).fallback(ServeFile::new(dir.join("index.html"))),
        ),
        None => router,
    };

    router
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn health_check() -> &'static str {
    "OK"
}
