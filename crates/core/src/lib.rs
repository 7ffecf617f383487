pub mod errors;
pub mod format;
pub mod models;
pub mod providers;
pub mod screens;
pub mod services;

use std::sync::Arc;

use models::settings::ClientConfig;
use providers::coingecko::CoinGeckoProvider;
use providers::traits::MarketDataSource;
use screens::{
    auth::AuthScreen, coin_detail::CoinDetailScreen, market_list::MarketListScreen,
    navigation::Route, portfolio::PortfolioScreen,
};
use tracing::debug;

use errors::CoreError;

/// A freshly built screen controller for a [`Route`].
///
/// Screens own all of their state; dropping one drops its data (including
/// the portfolio).
pub enum Screen {
    Auth(AuthScreen),
    MarketList(MarketListScreen),
    CoinDetail(CoinDetailScreen),
    Portfolio(PortfolioScreen),
}

impl Screen {
    /// Activate the screen. Auth screens have nothing to load.
    pub async fn mount(&self) {
        match self {
            Screen::Auth(_) => {}
            Screen::MarketList(s) => s.mount().await,
            Screen::CoinDetail(s) => s.mount().await,
            Screen::Portfolio(s) => s.mount().await,
        }
    }

    /// Tear the screen down. In-flight results are dropped when they land.
    pub fn unmount(&self) {
        match self {
            Screen::Auth(_) => {}
            Screen::MarketList(s) => s.unmount(),
            Screen::CoinDetail(s) => s.unmount(),
            Screen::Portfolio(s) => s.unmount(),
        }
    }
}

/// Main entry point for the Cryptofolio core library.
/// Holds the market data source and builds screen controllers on demand.
#[must_use]
#[derive(Clone)]
pub struct Cryptofolio {
    source: Arc<dyn MarketDataSource>,
}

impl std::fmt::Debug for Cryptofolio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cryptofolio")
            .field("source", &self.source.name())
            .finish()
    }
}

impl Cryptofolio {
    /// Talk to the public CoinGecko API with default settings.
    pub fn new() -> Self {
        Self::with_source(Arc::new(CoinGeckoProvider::new()))
    }

    /// Talk to CoinGecko with explicit client settings.
    pub fn from_config(config: &ClientConfig) -> Result<Self, CoreError> {
        let provider = CoinGeckoProvider::from_config(config)?;
        Ok(Self::with_source(Arc::new(provider)))
    }

    /// Use any market data source (mocks, alternate providers).
    pub fn with_source(source: Arc<dyn MarketDataSource>) -> Self {
        Self { source }
    }

    pub fn source(&self) -> Arc<dyn MarketDataSource> {
        Arc::clone(&self.source)
    }

    // ── Screens ─────────────────────────────────────────────────────

    pub fn login_screen(&self) -> AuthScreen {
        AuthScreen::login()
    }

    pub fn register_screen(&self) -> AuthScreen {
        AuthScreen::register()
    }

    pub fn market_list_screen(&self) -> MarketListScreen {
        MarketListScreen::new(self.source())
    }

    pub fn coin_detail_screen(&self, coin_id: impl Into<String>) -> CoinDetailScreen {
        CoinDetailScreen::new(self.source(), coin_id)
    }

    pub fn portfolio_screen(&self) -> PortfolioScreen {
        PortfolioScreen::new(self.source())
    }

    /// Build the controller a navigator should show for `route`.
    pub fn open(&self, route: &Route) -> Screen {
        debug!(%route, "Opening screen");
        match route {
            Route::Login => Screen::Auth(self.login_screen()),
            Route::Register => Screen::Auth(self.register_screen()),
            Route::Main => Screen::MarketList(self.market_list_screen()),
            Route::Coin { coin_id } => Screen::CoinDetail(self.coin_detail_screen(coin_id.clone())),
            Route::Portfolio => Screen::Portfolio(self.portfolio_screen()),
        }
    }
}

impl Default for Cryptofolio {
    fn default() -> Self {
        Self::new()
    }
}
