//! Shop info repository port — persistence for the singleton shop record.

use std::future::Future;

use shopfront_domain::error::ShopfrontError;
use shopfront_domain::shop_info::ShopInfo;

/// Repository for the single [`ShopInfo`] record.
pub trait ShopInfoRepository {
    /// Get the shop info, or `None` if it was never written.
    fn get(&self) -> impl Future<Output = Result<Option<ShopInfo>, ShopfrontError>> + Send;

    /// Create the record if absent, otherwise overwrite its fields.
    ///
    /// Must be atomic: concurrent callers never end up with two records.
    /// The stored id and `created_at` win over the ones carried by `info`
    /// when a record already exists.
    fn upsert(&self, info: ShopInfo)
    -> impl Future<Output = Result<ShopInfo, ShopfrontError>> + Send;
}
