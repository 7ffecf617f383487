use tracing::debug;

use crate::errors::CoreError;
use crate::models::asset::AssetSnapshot;

/// Resolves coin ids against a fetched snapshot.
///
/// Pure business logic, no I/O. A miss is an ordinary outcome (the coin may
/// simply sit outside the fetched page window), so the primary lookup
/// returns `Option`.
pub struct LookupService;

impl LookupService {
    pub fn new() -> Self {
        Self
    }

    /// Linear scan for the row whose id equals `id` exactly.
    pub fn find_by_id<'a>(&self, assets: &'a [AssetSnapshot], id: &str) -> Option<&'a AssetSnapshot> {
        assets.iter().find(|a| a.id == id)
    }

    /// Same as [`find_by_id`](Self::find_by_id), but a miss becomes
    /// `CoreError::NotFound` for callers that must report it.
    pub fn require_by_id<'a>(
        &self,
        assets: &'a [AssetSnapshot],
        id: &str,
    ) -> Result<&'a AssetSnapshot, CoreError> {
        self.find_by_id(assets, id).ok_or_else(|| {
            debug!(coin_id = id, searched = assets.len(), "Coin not in snapshot");
            CoreError::NotFound(id.to_string())
        })
    }
}

impl Default for LookupService {
    fn default() -> Self {
        Self::new()
    }
}
