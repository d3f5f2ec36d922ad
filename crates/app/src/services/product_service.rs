//! Product service — use-cases for managing the catalog.

use shopfront_domain::error::{NotFoundError, ShopfrontError};
use shopfront_domain::id::ProductId;
use shopfront_domain::product::Product;

use crate::ports::ProductRepository;

/// Application service for product operations.
pub struct ProductService<R> {
    repo: R,
}

impl<R: ProductRepository> ProductService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Store a new product after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`ShopfrontError::Validation`] if invariants fail, or a
    /// storage error propagated from the repository.
    #[tracing::instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn create_product(&self, product: Product) -> Result<Product, ShopfrontError> {
        product.validate()?;
        self.repo.create(product).await
    }

    /// Look up a product by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`ShopfrontError::NotFound`] when no product with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn get_product(&self, id: ProductId) -> Result<Product, ShopfrontError> {
        self.repo
            .get_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    /// List all products.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_products(&self) -> Result<Vec<Product>, ShopfrontError> {
        self.repo.get_all().await
    }

    /// Replace every descriptive field of an existing product.
    ///
    /// # Errors
    ///
    /// Returns [`ShopfrontError::Validation`] if invariants fail,
    /// [`ShopfrontError::NotFound`] when no product has `product.id`, or a
    /// storage error from the repository.
    #[tracing::instrument(skip(self, product), fields(product_id = %product.id))]
    pub async fn update_product(&self, product: Product) -> Result<Product, ShopfrontError> {
        product.validate()?;
        let id = product.id;
        self.repo
            .update(product)
            .await?
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: ProductId) -> ShopfrontError {
    NotFoundError {
        entity: "Product",
        id: id.to_string(),
    }
    .into()
}
