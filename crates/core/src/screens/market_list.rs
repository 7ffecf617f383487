use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, warn};

use crate::models::asset::AssetSnapshot;
use crate::models::settings::PageSize;
use crate::providers::traits::MarketDataSource;

use super::navigation::Route;
use super::session::ScreenSession;
use super::state::{LoadState, StateCell};

/// What the main list shows per coin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketRow {
    pub id: String,
    pub name: String,
    pub image: String,
    pub current_price: f64,
    pub market_cap_change_percentage_24h: Option<f64>,
}

impl From<&AssetSnapshot> for MarketRow {
    fn from(asset: &AssetSnapshot) -> Self {
        Self {
            id: asset.id.clone(),
            name: asset.name.clone(),
            image: asset.image.clone(),
            current_price: asset.current_price,
            market_cap_change_percentage_24h: asset.market_cap_change_percentage_24h,
        }
    }
}

/// Main screen: the top coins by market cap.
pub struct MarketListScreen {
    source: Arc<dyn MarketDataSource>,
    page_size: PageSize,
    session: ScreenSession,
    state: StateCell<Vec<MarketRow>>,
}

impl MarketListScreen {
    pub fn new(source: Arc<dyn MarketDataSource>) -> Self {
        Self {
            source,
            page_size: PageSize::LIST,
            session: ScreenSession::new(),
            state: StateCell::new(),
        }
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Activate the screen: enter `Loading`, fetch once, then settle in
    /// `Ready` or `Failed`. A result that arrives after [`unmount`](Self::unmount)
    /// or a newer `mount` is dropped.
    pub async fn mount(&self) {
        let ticket = self.session.begin();
        self.state.set(LoadState::Loading);

        let result = self
            .source
            .fetch_market(self.page_size)
            .await
            .map(|snapshot| snapshot.assets.iter().map(MarketRow::from).collect::<Vec<_>>());

        if !self.session.is_current(&ticket) {
            debug!("Discarding market list result for a torn-down screen");
            return;
        }
        if let Err(e) = &result {
            warn!(source = self.source.name(), error = %e, "Market list fetch failed");
        }
        self.state.set(LoadState::from_result(result));
    }

    pub fn unmount(&self) {
        self.session.end();
    }

    pub fn state(&self) -> LoadState<Vec<MarketRow>> {
        self.state.get()
    }

    pub fn page_size(&self) -> PageSize {
        self.page_size
    }

    /// Tapping a row opens its detail screen.
    pub fn open_coin(&self, coin_id: impl Into<String>) -> Route {
        Route::Coin {
            coin_id: coin_id.into(),
        }
    }

    /// The header button.
    pub fn open_portfolio(&self) -> Route {
        Route::Portfolio
    }
}
