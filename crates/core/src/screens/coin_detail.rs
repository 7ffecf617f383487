use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::format::{format_grouped, format_percent, format_price, format_usd_grouped};
use crate::models::asset::AssetSnapshot;
use crate::models::settings::PageSize;
use crate::providers::traits::MarketDataSource;
use crate::services::lookup_service::LookupService;

use super::session::ScreenSession;
use super::state::{LoadState, StateCell};

/// Placeholder for a 24h figure the upstream left null.
const UNAVAILABLE: &str = "n/a";

/// One labelled line of the detail card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailField {
    pub label: &'static str,
    pub value: String,
}

impl DetailField {
    fn new(label: &'static str, value: impl Into<String>) -> Self {
        Self {
            label,
            value: value.into(),
        }
    }
}

/// Detail screen for a single coin, entered with the coin id from the list.
///
/// The coin is looked up in a 100-row snapshot; an id outside that window
/// ends in `Failed` with a not-found message.
pub struct CoinDetailScreen {
    source: Arc<dyn MarketDataSource>,
    coin_id: String,
    page_size: PageSize,
    lookup: LookupService,
    session: ScreenSession,
    state: StateCell<AssetSnapshot>,
}

impl CoinDetailScreen {
    pub fn new(source: Arc<dyn MarketDataSource>, coin_id: impl Into<String>) -> Self {
        Self {
            source,
            coin_id: coin_id.into(),
            page_size: PageSize::FULL,
            lookup: LookupService::new(),
            session: ScreenSession::new(),
            state: StateCell::new(),
        }
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn coin_id(&self) -> &str {
        &self.coin_id
    }

    pub async fn mount(&self) {
        let ticket = self.session.begin();
        self.state.set(LoadState::Loading);

        let result = match self.source.fetch_market(self.page_size).await {
            Ok(snapshot) => self
                .lookup
                .require_by_id(&snapshot.assets, &self.coin_id)
                .cloned(),
            Err(e) => Err(e),
        };

        if !self.session.is_current(&ticket) {
            debug!(coin_id = %self.coin_id, "Discarding coin detail result for a torn-down screen");
            return;
        }
        if let Err(e) = &result {
            warn!(coin_id = %self.coin_id, error = %e, "Coin detail unavailable");
        }
        self.state.set(LoadState::from_result(result));
    }

    pub fn unmount(&self) {
        self.session.end();
    }

    pub fn state(&self) -> LoadState<AssetSnapshot> {
        self.state.get()
    }

    /// Card lines for the loaded coin, or `None` until the screen is `Ready`.
    pub fn detail_fields(&self) -> Option<Vec<DetailField>> {
        self.state.get().data().map(detail_fields)
    }
}

fn price_or_unavailable(value: Option<f64>) -> String {
    value.map(format_price).unwrap_or_else(|| UNAVAILABLE.to_string())
}

fn percent_or_unavailable(value: Option<f64>) -> String {
    value.map(format_percent).unwrap_or_else(|| UNAVAILABLE.to_string())
}

/// Build the detail card for `asset`. Fully diluted valuation, total supply
/// and max supply are omitted when the upstream has no value for them.
pub fn detail_fields(asset: &AssetSnapshot) -> Vec<DetailField> {
    let mut fields = vec![
        DetailField::new("Current Price", format_price(asset.current_price)),
        DetailField::new("Market Cap", format_usd_grouped(asset.market_cap)),
        DetailField::new(
            "Market Cap Rank",
            asset
                .market_cap_rank
                .map(|r| format!("#{r}"))
                .unwrap_or_else(|| "Unranked".to_string()),
        ),
    ];
    if let Some(fdv) = asset.fully_diluted_valuation {
        fields.push(DetailField::new("Fully Diluted Valuation", format_usd_grouped(fdv)));
    }
    fields.extend([
        DetailField::new("Total Volume", format_usd_grouped(asset.total_volume)),
        DetailField::new("High 24h", price_or_unavailable(asset.high_24h)),
        DetailField::new("Low 24h", price_or_unavailable(asset.low_24h)),
        DetailField::new("Price Change 24h", price_or_unavailable(asset.price_change_24h)),
        DetailField::new(
            "Price Change Percentage 24h",
            percent_or_unavailable(asset.price_change_percentage_24h),
        ),
        DetailField::new(
            "Market Cap Change 24h",
            asset
                .market_cap_change_24h
                .map(format_usd_grouped)
                .unwrap_or_else(|| UNAVAILABLE.to_string()),
        ),
        DetailField::new(
            "Market Cap Change Percentage 24h",
            percent_or_unavailable(asset.market_cap_change_percentage_24h),
        ),
        DetailField::new("Circulating Supply", format_grouped(asset.circulating_supply)),
    ]);
    if let Some(total) = asset.total_supply {
        fields.push(DetailField::new("Total Supply", format_grouped(total)));
    }
    if let Some(max) = asset.max_supply {
        fields.push(DetailField::new("Max Supply", format_grouped(max)));
    }
    fields.extend([
        DetailField::new("All-Time High", format_price(asset.ath)),
        DetailField::new(
            "All-Time High Change Percentage",
            format_percent(asset.ath_change_percentage),
        ),
        DetailField::new("All-Time High Date", asset.ath_date.format("%Y-%m-%d").to_string()),
        DetailField::new("All-Time Low", format_price(asset.atl)),
        DetailField::new(
            "All-Time Low Change Percentage",
            format_percent(asset.atl_change_percentage),
        ),
        DetailField::new("All-Time Low Date", asset.atl_date.format("%Y-%m-%d").to_string()),
        DetailField::new(
            "Last Updated",
            asset.last_updated.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        ),
    ]);
    fields
}
