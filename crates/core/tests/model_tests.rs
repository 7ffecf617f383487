// ═══════════════════════════════════════════════════════════════════
// Model Tests — AssetSnapshot schema, PortfolioEntry invariants,
// ClientConfig, PageSize
// ═══════════════════════════════════════════════════════════════════

use rust_decimal::Decimal;
use serde_json::json;

use cryptofolio_core::errors::CoreError;
use cryptofolio_core::models::asset::{AssetSnapshot, MarketSnapshot, PickerOption};
use cryptofolio_core::models::portfolio::{Portfolio, PortfolioEntry};
use cryptofolio_core::models::settings::{ClientConfig, PageSize, DEFAULT_BASE_URL};

fn bitcoin_json() -> serde_json::Value {
    json!({
        "id": "bitcoin",
        "symbol": "btc",
        "name": "Bitcoin",
        "image": "https://assets.coingecko.com/coins/images/1/large/bitcoin.png",
        "current_price": 50000.0,
        "market_cap": 980000000000.0,
        "market_cap_rank": 1,
        "fully_diluted_valuation": 1050000000000.0,
        "total_volume": 25000000000.0,
        "high_24h": 51000.0,
        "low_24h": 49000.0,
        "price_change_24h": 500.0,
        "price_change_percentage_24h": 1.01,
        "market_cap_change_24h": 9000000000.0,
        "market_cap_change_percentage_24h": 0.93,
        "circulating_supply": 19600000.0,
        "total_supply": 21000000.0,
        "max_supply": 21000000.0,
        "ath": 69045.0,
        "ath_change_percentage": -27.6,
        "ath_date": "2021-11-10T14:24:11.849Z",
        "atl": 67.81,
        "atl_change_percentage": 73600.2,
        "atl_date": "2013-07-06T00:00:00.000Z",
        "roi": null,
        "last_updated": "2024-03-01T12:00:00.000Z"
    })
}

// ═══════════════════════════════════════════════════════════════════
// AssetSnapshot
// ═══════════════════════════════════════════════════════════════════

mod asset_snapshot {
    use super::*;

    #[test]
    fn deserializes_full_row() {
        let asset: AssetSnapshot = serde_json::from_value(bitcoin_json()).unwrap();
        assert_eq!(asset.id, "bitcoin");
        assert_eq!(asset.name, "Bitcoin");
        assert_eq!(asset.current_price, 50000.0);
        assert_eq!(asset.market_cap_rank, Some(1));
        assert_eq!(asset.max_supply, Some(21000000.0));
        assert_eq!(asset.ath_date.format("%Y-%m-%d").to_string(), "2021-11-10");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        // "roi" is sent upstream but not modelled.
        assert!(serde_json::from_value::<AssetSnapshot>(bitcoin_json()).is_ok());
    }

    #[test]
    fn nullable_fields_accept_null() {
        let mut row = bitcoin_json();
        row["max_supply"] = json!(null);
        row["total_supply"] = json!(null);
        row["fully_diluted_valuation"] = json!(null);
        row["market_cap_rank"] = json!(null);
        row["high_24h"] = json!(null);
        let asset: AssetSnapshot = serde_json::from_value(row).unwrap();
        assert!(asset.max_supply.is_none());
        assert!(asset.total_supply.is_none());
        assert!(asset.fully_diluted_valuation.is_none());
        assert!(asset.market_cap_rank.is_none());
        assert!(asset.high_24h.is_none());
    }

    #[test]
    fn missing_required_field_is_rejected() {
        let mut row = bitcoin_json();
        row.as_object_mut().unwrap().remove("current_price");
        let err: CoreError = serde_json::from_value::<AssetSnapshot>(row).unwrap_err().into();
        assert!(matches!(err, CoreError::MalformedPayload(_)));
    }

    #[test]
    fn wrong_type_is_rejected() {
        let mut row = bitcoin_json();
        row["current_price"] = json!("50000");
        assert!(serde_json::from_value::<AssetSnapshot>(row).is_err());
    }

    #[test]
    fn display_symbol_is_uppercase() {
        let asset: AssetSnapshot = serde_json::from_value(bitcoin_json()).unwrap();
        assert_eq!(asset.display_symbol(), "BTC");
    }

    #[test]
    fn picker_option_uses_name_and_id() {
        let asset: AssetSnapshot = serde_json::from_value(bitcoin_json()).unwrap();
        let option = PickerOption::from(&asset);
        assert_eq!(option.label, "Bitcoin");
        assert_eq!(option.value, "bitcoin");
    }

    #[test]
    fn market_snapshot_len() {
        let asset: AssetSnapshot = serde_json::from_value(bitcoin_json()).unwrap();
        let snapshot = MarketSnapshot::new(vec![asset.clone(), asset]);
        assert_eq!(snapshot.len(), 2);
        assert!(!snapshot.is_empty());
        assert!(MarketSnapshot::new(vec![]).is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════
// PortfolioEntry
// ═══════════════════════════════════════════════════════════════════

mod portfolio_entry {
    use super::*;

    #[test]
    fn new_keeps_fields() {
        let entry = PortfolioEntry::new("bitcoin", "Bitcoin", Decimal::new(5, 1), Decimal::from(50000)).unwrap();
        assert_eq!(entry.asset_id(), "bitcoin");
        assert_eq!(entry.name(), "Bitcoin");
        assert_eq!(entry.quantity(), Decimal::new(5, 1));
        assert_eq!(entry.price_at_add(), Decimal::from(50000));
    }

    #[test]
    fn zero_quantity_rejected() {
        let err = PortfolioEntry::new("bitcoin", "Bitcoin", Decimal::ZERO, Decimal::from(1)).unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[test]
    fn negative_quantity_rejected() {
        let result = PortfolioEntry::new("bitcoin", "Bitcoin", Decimal::from(-1), Decimal::from(1));
        assert!(result.is_err());
    }

    #[test]
    fn negative_price_rejected() {
        let result = PortfolioEntry::new("bitcoin", "Bitcoin", Decimal::ONE, Decimal::from(-1));
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn value_outside_decimal_range_rejected() {
        let result = PortfolioEntry::new(
            "bitcoin",
            "Bitcoin",
            Decimal::MAX,
            Decimal::from(50000),
        );
        assert!(matches!(result, Err(CoreError::Validation(_))));
    }

    #[test]
    fn zero_price_allowed() {
        assert!(PortfolioEntry::new("dead-coin", "Dead", Decimal::ONE, Decimal::ZERO).is_ok());
    }

    #[test]
    fn same_coin_entries_get_distinct_ids() {
        let a = PortfolioEntry::new("bitcoin", "Bitcoin", Decimal::ONE, Decimal::ONE).unwrap();
        let b = PortfolioEntry::new("bitcoin", "Bitcoin", Decimal::ONE, Decimal::ONE).unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn new_portfolio_is_empty() {
        assert_eq!(Portfolio::new(), Portfolio::default());
    }
}

// ═══════════════════════════════════════════════════════════════════
// Settings
// ═══════════════════════════════════════════════════════════════════

mod settings {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.user_agent.starts_with("cryptofolio-core/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn with_base_url_strips_trailing_slash() {
        let config = ClientConfig::default().with_base_url("http://localhost:8080/api/v3/");
        assert_eq!(config.base_url, "http://localhost:8080/api/v3");
    }

    #[test]
    fn empty_base_url_rejected() {
        let config = ClientConfig::default().with_base_url("");
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn non_http_base_url_rejected() {
        let config = ClientConfig::default().with_base_url("ftp://example.com");
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = ClientConfig::default().with_timeout_secs(0);
        assert!(matches!(config.validate(), Err(CoreError::Config(_))));
    }

    #[test]
    fn config_roundtrips_through_json() {
        let config = ClientConfig::default().with_user_agent("test-agent");
        let json = serde_json::to_string(&config).unwrap();
        let back: ClientConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn page_sizes() {
        assert_eq!(PageSize::LIST.get(), 10);
        assert_eq!(PageSize::FULL.get(), 100);
        assert_eq!(PageSize::default(), PageSize::FULL);
    }
}
