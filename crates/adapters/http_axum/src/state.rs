//! Shared application state for axum handlers.

use std::sync::Arc;

use shopfront_app::ports::{ProductRepository, ShopInfoRepository};
use shopfront_app::services::product_service::ProductService;
use shopfront_app::services::shop_info_service::ShopInfoService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone` — only the `Arc` wrappers are cloned.
pub struct AppState<PR, SR> {
    /// Product catalog service.
    pub product_service: Arc<ProductService<PR>>,
    /// Shop info service.
    pub shop_info_service: Arc<ShopInfoService<SR>>,
}

impl<PR, SR> Clone for AppState<PR, SR> {
    fn clone(&self) -> Self {
        Self {
            product_service: Arc::clone(&self.product_service),
            shop_info_service: Arc::clone(&self.shop_info_service),
        }
    }
}

impl<PR, SR> AppState<PR, SR>
where
    PR: ProductRepository + Send + Sync + 'static,
    SR: ShopInfoRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(product_service: ProductService<PR>, shop_info_service: ShopInfoService<SR>) -> Self {
        Self {
            product_service: Arc::new(product_service),
            shop_info_service: Arc::new(shop_info_service),
        }
    }
}
