use async_trait::async_trait;
use reqwest::Client;
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::errors::CoreError;
use crate::models::asset::{AssetSnapshot, MarketSnapshot};
use crate::models::settings::{ClientConfig, PageSize};
use super::traits::MarketDataSource;

const VS_CURRENCY: &str = "usd";
const ORDER: &str = "market_cap_desc";
const PAGE: &str = "1";
const LOCALE: &str = "en";

/// Longest slice of an error body kept in a `Transport` message.
const MAX_ERROR_BODY: usize = 200;

/// CoinGecko `coins/markets` provider.
///
/// - **Free**: No API key required.
/// - **Endpoint**: `/coins/markets?vs_currency=usd&order=market_cap_desc&per_page=N&page=1&sparkline=false&locale=en`
/// - **Data**: price, market cap, volume, supply, ATH/ATL for the top N coins.
///
/// The payload is decoded into [`AssetSnapshot`] rows as a whole; a single
/// malformed row fails the fetch.
pub struct CoinGeckoProvider {
    client: Client,
    base_url: String,
}

impl CoinGeckoProvider {
    /// Provider against the public API with default settings.
    pub fn new() -> Self {
        let config = ClientConfig::default();
        Self {
            client: build_client(&config).unwrap_or_else(|_| Client::new()),
            base_url: config.base_url,
        }
    }

    /// Provider built from explicit settings. The config is validated first.
    pub fn from_config(config: &ClientConfig) -> Result<Self, CoreError> {
        config.validate()?;
        Ok(Self {
            client: build_client(config)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Point the provider at a different API root (mock servers, proxies).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl Default for CoinGeckoProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn build_client(config: &ClientConfig) -> Result<Client, CoreError> {
    let builder = Client::builder();
    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.clone());
    #[cfg(target_arch = "wasm32")]
    let _ = config;
    builder
        .build()
        .map_err(|e| CoreError::Config(format!("Failed to build HTTP client: {e}")))
}

fn truncate_body(body: &str) -> &str {
    match body.char_indices().nth(MAX_ERROR_BODY) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl MarketDataSource for CoinGeckoProvider {
    fn name(&self) -> &str {
        "CoinGecko"
    }

    async fn fetch_market(&self, page_size: PageSize) -> Result<MarketSnapshot, CoreError> {
        let url = format!("{}/coins/markets", self.base_url);
        let per_page = page_size.get().to_string();
        debug!(provider = self.name(), per_page = page_size.get(), "Fetching market snapshot");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("vs_currency", VS_CURRENCY),
                ("order", ORDER),
                ("per_page", per_page.as_str()),
                ("page", PAGE),
                ("sparkline", "false"),
                ("locale", LOCALE),
            ])
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(provider = self.name(), %status, "Market request rejected");
            return Err(CoreError::Transport(format!(
                "CoinGecko returned {status}: {}",
                truncate_body(&body)
            )));
        }

        // Read as text first so a bad body is reported as a schema problem
        // rather than a transport one.
        let body = response.text().await?;
        let assets: Vec<AssetSnapshot> = serde_json::from_str(&body).map_err(|e| {
            warn!(provider = self.name(), error = %e, "Market payload did not match schema");
            CoreError::MalformedPayload(format!("CoinGecko coins/markets: {e}"))
        })?;

        info!(provider = self.name(), count = assets.len(), "Fetched market snapshot");
        Ok(MarketSnapshot::new(assets))
    }
}
