use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

pub const DEFAULT_BASE_URL: &str = "https://api.coingecko.com/api/v3";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_USER_AGENT: &str = concat!("cryptofolio-core/", env!("CARGO_PKG_VERSION"));

/// Number of rows requested from `coins/markets`.
///
/// The main list only shows the top few coins; the detail and portfolio
/// screens need the wider window so lookups by id have a chance to hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageSize(pub u32);

impl PageSize {
    pub const LIST: PageSize = PageSize(10);
    pub const FULL: PageSize = PageSize(100);

    pub fn get(self) -> u32 {
        self.0
    }
}

impl Default for PageSize {
    fn default() -> Self {
        Self::FULL
    }
}

/// HTTP client settings for the market data provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API root, without trailing slash (e.g., "https://api.coingecko.com/api/v3").
    pub base_url: String,

    /// Whole-request timeout. Ignored on wasm32 where the browser owns timeouts.
    pub timeout_secs: u64,

    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

impl ClientConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Reject settings that can't produce a working client.
    pub fn validate(&self) -> Result<(), CoreError> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(CoreError::Config("base_url must not be empty".into()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(CoreError::Config(format!(
                "base_url '{url}' must start with http:// or https://"
            )));
        }
        if self.timeout_secs == 0 {
            return Err(CoreError::Config("timeout_secs must be greater than zero".into()));
        }
        Ok(())
    }
}
