//! Product repository port — persistence for catalog products.

use std::future::Future;

use shopfront_domain::error::ShopfrontError;
use shopfront_domain::id::ProductId;
use shopfront_domain::product::Product;

/// Repository for persisting and querying [`Product`]s.
pub trait ProductRepository {
    /// Store a new product.
    fn create(&self, product: Product)
    -> impl Future<Output = Result<Product, ShopfrontError>> + Send;

    /// Get a product by its unique identifier.
    fn get_by_id(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Option<Product>, ShopfrontError>> + Send;

    /// Get all products in insertion order.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Product>, ShopfrontError>> + Send;

    /// Overwrite the descriptive fields of the product sharing `product.id`.
    ///
    /// Keeps the stored `created_at` and returns the stored record, or `None`
    /// when no product has that id.
    fn update(
        &self,
        product: Product,
    ) -> impl Future<Output = Result<Option<Product>, ShopfrontError>> + Send;
}
