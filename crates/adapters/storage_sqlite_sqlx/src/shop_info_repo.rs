//! `SQLite` implementation of [`ShopInfoRepository`].
//!
//! The record lives in the single `slot = 1` row of `shop_info`, so the
//! upsert is one `INSERT … ON CONFLICT` statement rather than a read
//! followed by a write.

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use shopfront_app::ports::ShopInfoRepository;
use shopfront_domain::error::ShopfrontError;
use shopfront_domain::shop_info::ShopInfo;

use crate::columns;
use crate::error::StorageError;

struct Wrapper(ShopInfo);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<ShopInfo> {
        value.map(|w| w.0)
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: String = row.try_get("id")?;
        let created_at: String = row.try_get("created_at")?;
        let updated_at: String = row.try_get("updated_at")?;

        Ok(Self(ShopInfo {
            id: columns::id(&id)?,
            shop_name: row.try_get("shop_name")?,
            address: row.try_get("address")?,
            phone: row.try_get("phone")?,
            whatsapp: row.try_get("whatsapp")?,
            created_at: columns::timestamp(&created_at)?,
            updated_at: columns::timestamp(&updated_at)?,
        }))
    }
}

const SELECT: &str = "SELECT * FROM shop_info WHERE slot = 1";

const UPSERT: &str = r"
    INSERT INTO shop_info (slot, id, shop_name, address, phone, whatsapp, created_at, updated_at)
    VALUES (1, ?, ?, ?, ?, ?, ?, ?)
    ON CONFLICT (slot) DO UPDATE SET
        shop_name = excluded.shop_name,
        address = excluded.address,
        phone = excluded.phone,
        whatsapp = excluded.whatsapp,
        updated_at = excluded.updated_at
    RETURNING *
";

/// `SQLite`-backed shop info repository.
pub struct SqliteShopInfoRepository {
    pool: SqlitePool,
}

impl SqliteShopInfoRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ShopInfoRepository for SqliteShopInfoRepository {
    fn get(&self) -> impl Future<Output = Result<Option<ShopInfo>, ShopfrontError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(Wrapper::maybe(row))
        }
    }

    fn upsert(
        &self,
        info: ShopInfo,
    ) -> impl Future<Output = Result<ShopInfo, ShopfrontError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Wrapper = sqlx::query_as(UPSERT)
                .bind(info.id.to_string())
                .bind(&info.shop_name)
                .bind(&info.address)
                .bind(&info.phone)
                .bind(&info.whatsapp)
                .bind(info.created_at.to_rfc3339())
                .bind(info.updated_at.to_rfc3339())
                .fetch_one(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn setup() -> (SqliteShopInfoRepository, SqlitePool) {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        let pool = db.pool().clone();
        (SqliteShopInfoRepository::new(pool.clone()), pool)
    }

    async fn row_count(pool: &SqlitePool) -> i64 {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM shop_info")
            .fetch_one(pool)
            .await
            .unwrap();
        count
    }

    #[tokio::test]
    async fn should_return_none_before_first_write() {
        let (repo, _) = setup().await;
        assert!(repo.get().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_create_record_on_first_upsert() {
        let (repo, pool) = setup().await;
        let info = ShopInfo::builder()
            .shop_name("Crockery House")
            .address("Main Bazaar")
            .phone("042-1234567")
            .whatsapp("+92 300 1234567")
            .build();

        let saved = repo.upsert(info.clone()).await.unwrap();
        assert_eq!(saved, info);
        assert_eq!(repo.get().await.unwrap(), Some(info));
        assert_eq!(row_count(&pool).await, 1);
    }

    #[tokio::test]
    async fn should_update_in_place_on_second_upsert() {
        let (repo, pool) = setup().await;
        let first = repo
            .upsert(
                ShopInfo::builder()
                    .shop_name("Old Name")
                    .address("Old Address")
                    .build(),
            )
            .await
            .unwrap();

        let second = ShopInfo::builder()
            .shop_name("New Name")
            .whatsapp("0300")
            .build();
        let saved = repo.upsert(second.clone()).await.unwrap();

        assert_eq!(saved.id, first.id);
        assert_eq!(saved.created_at, first.created_at);
        assert_eq!(saved.updated_at, second.updated_at);
        assert_eq!(saved.shop_name.as_deref(), Some("New Name"));
        assert!(saved.address.is_none());
        assert_eq!(saved.whatsapp.as_deref(), Some("0300"));

        assert_eq!(repo.get().await.unwrap(), Some(saved));
        assert_eq!(row_count(&pool).await, 1);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn should_keep_one_record_when_first_writes_run_concurrently() {
        let (repo, pool) = setup().await;
        let repo = std::sync::Arc::new(repo);

        let handles: Vec<_> = (0..16)
            .map(|n| {
                let repo = std::sync::Arc::clone(&repo);
                tokio::spawn(async move {
                    repo.upsert(ShopInfo::builder().shop_name(format!("Shop {n}")).build())
                        .await
                        .unwrap()
                })
            })
            .collect();

        let mut saved = Vec::new();
        for handle in handles {
            saved.push(handle.await.unwrap());
        }

        let first_id = saved[0].id;
        assert!(saved.iter().all(|info| info.id == first_id));
        assert_eq!(row_count(&pool).await, 1);
        assert_eq!(repo.get().await.unwrap().map(|info| info.id), Some(first_id));
    }
}
