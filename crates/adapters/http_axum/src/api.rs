//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod products;
#[allow(clippy::missing_errors_doc)]
pub mod shop;

use axum::Router;
use axum::routing::get;

use shopfront_app::ports::{ProductRepository, ShopInfoRepository};

use crate::state::AppState;

/// Build the `/api` sub-router.
pub fn routes<PR, SR>() -> Router<AppState<PR, SR>>
where
    PR: ProductRepository + Send + Sync + 'static,
    SR: ShopInfoRepository + Send + Sync + 'static,
{
    Router::new()
        // Products
        .route(
            "/products",
            get(products::list::<PR, SR>).post(products::create::<PR, SR>),
        )
        .route(
            "/products/{id}",
            get(products::get::<PR, SR>).put(products::update::<PR, SR>),
        )
        // Shop info
        .route("/shop", get(shop::get::<PR, SR>).post(shop::save::<PR, SR>))
}
