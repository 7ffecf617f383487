use rust_decimal::{Decimal, RoundingStrategy};

use crate::errors::CoreError;
use crate::models::portfolio::PortfolioEntry;

/// Values portfolio entries in USD.
///
/// All arithmetic is exact decimal, so totals don't depend on entry order.
/// Rounding to cents happens only in [`format_usd`](Self::format_usd).
pub struct ValuationService;

impl ValuationService {
    pub fn new() -> Self {
        Self
    }

    /// `quantity * price_at_add`. [`PortfolioEntry::new`] only admits entries
    /// whose product fits in a `Decimal`.
    pub fn entry_value(&self, entry: &PortfolioEntry) -> Decimal {
        entry.quantity() * entry.price_at_add()
    }

    /// Sum of [`entry_value`](Self::entry_value) over all entries; zero when empty.
    /// Fails with `Validation` if the sum leaves the `Decimal` range.
    pub fn total_value(&self, entries: &[PortfolioEntry]) -> Result<Decimal, CoreError> {
        entries.iter().try_fold(Decimal::ZERO, |total, entry| {
            self.checked_add(total, entry)
        })
    }

    /// `total + entry_value(entry)`, or `Validation` on overflow.
    pub fn checked_add(&self, total: Decimal, entry: &PortfolioEntry) -> Result<Decimal, CoreError> {
        total.checked_add(self.entry_value(entry)).ok_or_else(|| {
            CoreError::Validation(format!(
                "Portfolio total is too large to add {} {}",
                entry.quantity(),
                entry.asset_id()
            ))
        })
    }

    /// Display form with exactly two fractional digits, e.g. `$25000.00`.
    pub fn format_usd(&self, value: Decimal) -> String {
        let rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        format!("${rounded:.2}")
    }
}

impl Default for ValuationService {
    fn default() -> Self {
        Self::new()
    }
}
