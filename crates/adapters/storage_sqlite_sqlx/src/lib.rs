//! # shopfront-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `shopfront-app::ports`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (using sqlx embedded migrations)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `shopfront-app` (for port traits) and `shopfront-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

mod columns;
mod error;
mod pool;
mod product_repo;
mod shop_info_repo;

pub use error::StorageError;
pub use pool::{Config, Database};
pub use product_repo::SqliteProductRepository;
pub use shop_info_repo::SqliteShopInfoRepository;
