use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One row of the upstream `coins/markets` listing at fetch time.
///
/// The schema is strict: a row missing a required field (or carrying the
/// wrong type) fails deserialization of the whole payload, which surfaces as
/// `CoreError::MalformedPayload`. Fields the upstream may legitimately send
/// as `null` are `Option`s.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetSnapshot {
    /// Upstream identifier, unique within a snapshot (e.g., "bitcoin")
    pub id: String,

    /// Lowercase ticker as sent upstream (e.g., "btc")
    pub symbol: String,

    /// Display name (e.g., "Bitcoin")
    pub name: String,

    /// Logo URI
    pub image: String,

    /// Current price in USD
    pub current_price: f64,

    pub market_cap: f64,

    /// Rank by market cap, 1-based. `None` for unranked assets.
    pub market_cap_rank: Option<u32>,

    pub fully_diluted_valuation: Option<f64>,

    pub total_volume: f64,

    pub high_24h: Option<f64>,
    pub low_24h: Option<f64>,
    pub price_change_24h: Option<f64>,
    pub price_change_percentage_24h: Option<f64>,
    pub market_cap_change_24h: Option<f64>,
    pub market_cap_change_percentage_24h: Option<f64>,

    pub circulating_supply: f64,
    pub total_supply: Option<f64>,
    pub max_supply: Option<f64>,

    /// All-time high price and when it happened
    pub ath: f64,
    pub ath_change_percentage: f64,
    pub ath_date: DateTime<Utc>,

    /// All-time low price and when it happened
    pub atl: f64,
    pub atl_change_percentage: f64,
    pub atl_date: DateTime<Utc>,

    pub last_updated: DateTime<Utc>,
}

impl AssetSnapshot {
    /// Ticker uppercased for display ("btc" → "BTC").
    pub fn display_symbol(&self) -> String {
        self.symbol.to_uppercase()
    }
}

/// One fetched batch of market data, in upstream order (market cap descending).
///
/// Replaced wholesale on every fetch; never patched in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    pub assets: Vec<AssetSnapshot>,
    pub fetched_at: DateTime<Utc>,
}

impl MarketSnapshot {
    pub fn new(assets: Vec<AssetSnapshot>) -> Self {
        Self {
            assets,
            fetched_at: Utc::now(),
        }
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

/// Entry for the coin picker on the portfolio screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickerOption {
    /// Shown to the user (coin name)
    pub label: String,
    /// Submitted back as the selected coin id
    pub value: String,
}

impl From<&AssetSnapshot> for PickerOption {
    fn from(asset: &AssetSnapshot) -> Self {
        Self {
            label: asset.name.clone(),
            value: asset.id.clone(),
        }
    }
}
