//! Shop info service — read and write the singleton shop record.

use shopfront_domain::error::ShopfrontError;
use shopfront_domain::shop_info::ShopInfo;

use crate::ports::ShopInfoRepository;

/// Application service for the shop info record.
pub struct ShopInfoService<R> {
    repo: R,
}

impl<R: ShopInfoRepository> ShopInfoService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Return the shop info, or `None` before the first write.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn get_shop_info(&self) -> Result<Option<ShopInfo>, ShopfrontError> {
        self.repo.get().await
    }

    /// Create or overwrite the shop info.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self, info))]
    pub async fn save_shop_info(&self, info: ShopInfo) -> Result<ShopInfo, ShopfrontError> {
        let saved = self.repo.upsert(info).await?;
        tracing::debug!(shop_info_id = %saved.id, "shop info saved");
        Ok(saved)
    }
}
