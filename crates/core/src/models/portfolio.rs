use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::errors::CoreError;

/// A single user-added (coin, quantity, price-at-add) record.
///
/// Fields are private: the only way in is [`PortfolioEntry::new`], which
/// enforces `quantity > 0` and a value that fits in a `Decimal`. Nothing
/// hands out `&mut` access, so the recorded price stays frozen.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioEntry {
    /// Row key. Two entries for the same coin are distinct rows.
    id: Uuid,

    /// Soft reference into the snapshot the price was taken from.
    asset_id: String,

    /// Display name captured at add time
    name: String,

    quantity: Decimal,

    /// USD price at the moment the entry was added. Never live-updated.
    price_at_add: Decimal,
}

impl PortfolioEntry {
    pub fn new(
        asset_id: impl Into<String>,
        name: impl Into<String>,
        quantity: Decimal,
        price_at_add: Decimal,
    ) -> Result<Self, CoreError> {
        if quantity <= Decimal::ZERO {
            return Err(CoreError::Validation(format!(
                "Quantity must be positive, got {quantity}"
            )));
        }
        if price_at_add.is_sign_negative() {
            return Err(CoreError::Validation(format!(
                "Price cannot be negative, got {price_at_add}"
            )));
        }
        if quantity.checked_mul(price_at_add).is_none() {
            return Err(CoreError::Validation(format!(
                "Value of {quantity} at {price_at_add} is too large"
            )));
        }
        Ok(Self {
            id: Uuid::new_v4(),
            asset_id: asset_id.into(),
            name: name.into(),
            quantity,
            price_at_add,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn asset_id(&self) -> &str {
        &self.asset_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    pub fn price_at_add(&self) -> Decimal {
        self.price_at_add
    }
}

/// Session-only portfolio: entries in insertion order, which is also
/// display order. No deduplication by coin.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Portfolio {
    pub(crate) entries: Vec<PortfolioEntry>,
}

impl Portfolio {
    pub fn new() -> Self {
        Self::default()
    }
}
