use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::asset::MarketSnapshot;
use crate::models::settings::PageSize;

/// Source of market snapshots.
///
/// Screens only ever talk to this trait, so tests can swap in canned or
/// failing sources and the HTTP provider can be replaced without touching
/// the controllers.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait MarketDataSource: Send + Sync {
    /// Human-readable name of this source (for logs/errors).
    fn name(&self) -> &str;

    /// Fetch the first page of the USD market listing, ordered by market
    /// cap descending. One round-trip, no retry, no caching.
    async fn fetch_market(&self, page_size: PageSize) -> Result<MarketSnapshot, CoreError>;
}
