use thiserror::Error;

/// Unified error type for the entire cryptofolio-core library.
/// Every public fallible function returns `Result<T, CoreError>`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    // ── API / Network ───────────────────────────────────────────────
    /// Network unreachable, timeout, or a non-2xx status from the upstream.
    #[error("Network error: {0}")]
    Transport(String),

    /// The upstream answered, but the body didn't match the expected schema.
    #[error("Malformed market data: {0}")]
    MalformedPayload(String),

    // ── Business Logic ──────────────────────────────────────────────
    #[error("Coin not found: {0}")]
    NotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    // ── Configuration ───────────────────────────────────────────────
    #[error("Invalid configuration: {0}")]
    Config(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::MalformedPayload(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // reqwest errors carry the full request URL; keep the path, drop the query.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        if e.is_decode() {
            CoreError::MalformedPayload(sanitized)
        } else {
            CoreError::Transport(sanitized)
        }
    }
}
