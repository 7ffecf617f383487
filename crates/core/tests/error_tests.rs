// ═══════════════════════════════════════════════════════════════════
// Error Tests — CoreError variants, Display formatting, From impls
// ═══════════════════════════════════════════════════════════════════

use cryptofolio_core::errors::CoreError;

// ── Display formatting ──────────────────────────────────────────────

mod display {
    use super::*;

    #[test]
    fn transport() {
        let err = CoreError::Transport("connection refused".into());
        assert_eq!(err.to_string(), "Network error: connection refused");
    }

    #[test]
    fn transport_empty_message() {
        let err = CoreError::Transport(String::new());
        assert_eq!(err.to_string(), "Network error: ");
    }

    #[test]
    fn malformed_payload() {
        let err = CoreError::MalformedPayload("missing field `id`".into());
        assert_eq!(err.to_string(), "Malformed market data: missing field `id`");
    }

    #[test]
    fn not_found() {
        let err = CoreError::NotFound("dogecoin".into());
        assert_eq!(err.to_string(), "Coin not found: dogecoin");
    }

    #[test]
    fn validation() {
        let err = CoreError::Validation("Amount must be positive, got 0".into());
        assert_eq!(
            err.to_string(),
            "Validation failed: Amount must be positive, got 0"
        );
    }

    #[test]
    fn config() {
        let err = CoreError::Config("base_url must not be empty".into());
        assert_eq!(
            err.to_string(),
            "Invalid configuration: base_url must not be empty"
        );
    }
}

// ── From impls ──────────────────────────────────────────────────────

mod conversions {
    use super::*;

    #[test]
    fn serde_json_error_becomes_malformed_payload() {
        let json_err = serde_json::from_str::<Vec<u32>>("{not json").unwrap_err();
        let err: CoreError = json_err.into();
        assert!(matches!(err, CoreError::MalformedPayload(_)));
        assert!(err.to_string().starts_with("Malformed market data: "));
    }

    #[test]
    fn serde_json_shape_mismatch_becomes_malformed_payload() {
        let json_err = serde_json::from_str::<Vec<u32>>(r#"{"id": 1}"#).unwrap_err();
        let err = CoreError::from(json_err);
        assert!(matches!(err, CoreError::MalformedPayload(_)));
    }

    #[tokio::test]
    async fn reqwest_connect_error_becomes_transport_with_query_redacted() {
        // Port 9 (discard) on localhost is not expected to accept connections.
        let result = reqwest::Client::new()
            .get("http://127.0.0.1:9/coins/markets?vs_currency=usd&secret=abc")
            .send()
            .await;
        let err = CoreError::from(result.unwrap_err());
        match err {
            CoreError::Transport(msg) => {
                assert!(!msg.contains("secret=abc"), "query leaked: {msg}");
            }
            other => panic!("expected Transport, got {other:?}"),
        }
    }
}

// ── Trait behavior ──────────────────────────────────────────────────

mod traits {
    use super::*;

    #[test]
    fn errors_are_cloneable_and_comparable() {
        let err = CoreError::NotFound("bitcoin".into());
        assert_eq!(err.clone(), err);
        assert_ne!(err, CoreError::NotFound("ethereum".into()));
    }

    #[test]
    fn implements_std_error() {
        fn takes_error(_: &dyn std::error::Error) {}
        takes_error(&CoreError::Transport("x".into()));
    }
}
