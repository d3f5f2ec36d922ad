//! `SQLite` implementation of [`ProductRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use shopfront_app::ports::ProductRepository;
use shopfront_domain::error::ShopfrontError;
use shopfront_domain::id::ProductId;
use shopfront_domain::product::Product;

use crate::columns;
use crate::error::StorageError;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(Product);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<Product> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Self(Product {
            id: columns::id(&id)?,
            title: row.try_get("title")?,
            image: row.try_get("image")?,
            price: row.try_get("price")?,
            category: row.try_get("category")?,
            created_at: columns::timestamp(&created_at)?,
            updated_at: columns::timestamp(&updated_at)?,
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO products (id, title, image, price, category, created_at, updated_at)
    VALUES (?, ?, ?, ?, ?, ?, ?)
";

const SELECT_BY_ID: &str = "SELECT * FROM products WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM products ORDER BY rowid";

const UPDATE: &str = r"
    UPDATE products
    SET title = ?, image = ?, price = ?, category = ?, updated_at = ?
    WHERE id = ?
    RETURNING *
";

/// `SQLite`-backed product repository.
pub struct SqliteProductRepository {
    pool: SqlitePool,
}

impl SqliteProductRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for SqliteProductRepository {
    fn create(
        &self,
        product: Product,
    ) -> impl Future<Output = Result<Product, ShopfrontError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(INSERT)
                .bind(product.id.to_string())
                .bind(&product.title)
                .bind(&product.image)
                .bind(product.price)
                .bind(&product.category)
                .bind(product.created_at.to_rfc3339())
                .bind(product.updated_at.to_rfc3339())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(product)
        }
    }

    fn get_by_id(
        &self,
        id: ProductId,
    ) -> impl Future<Output = Result<Option<Product>, ShopfrontError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Product>, ShopfrontError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }

    fn update(
        &self,
        product: Product,
    ) -> impl Future<Output = Result<Option<Product>, ShopfrontError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(UPDATE)
                .bind(&product.title)
                .bind(&product.image)
                .bind(product.price)
                .bind(&product.category)
                .bind(product.updated_at.to_rfc3339())
                .bind(product.id.to_string())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }
}
