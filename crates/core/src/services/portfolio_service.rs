use tracing::info;

use crate::models::portfolio::{Portfolio, PortfolioEntry};

/// Manages the session portfolio.
///
/// Append-only: there is no remove or edit. Entries arrive already
/// validated by [`PortfolioEntry::new`].
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Add an entry to the end of the portfolio. Same-coin entries are kept
    /// as separate rows.
    pub fn append(&self, portfolio: &mut Portfolio, entry: PortfolioEntry) {
        info!(
            coin_id = entry.asset_id(),
            quantity = %entry.quantity(),
            price = %entry.price_at_add(),
            "Added portfolio entry"
        );
        portfolio.entries.push(entry);
    }

    /// All entries in insertion order.
    pub fn list<'a>(&self, portfolio: &'a Portfolio) -> &'a [PortfolioEntry] {
        &portfolio.entries
    }

    pub fn len(&self, portfolio: &Portfolio) -> usize {
        portfolio.entries.len()
    }

    pub fn is_empty(&self, portfolio: &Portfolio) -> bool {
        portfolio.entries.is_empty()
    }
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
