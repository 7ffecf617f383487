use std::str::FromStr;
use std::sync::{Arc, Mutex};

use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::errors::CoreError;
use crate::models::asset::{AssetSnapshot, PickerOption};
use crate::models::portfolio::{Portfolio, PortfolioEntry};
use crate::models::settings::PageSize;
use crate::providers::traits::MarketDataSource;
use crate::services::lookup_service::LookupService;
use crate::services::portfolio_service::PortfolioService;
use crate::services::valuation_service::ValuationService;

use super::session::ScreenSession;
use super::state::{LoadState, StateCell};

/// Result of pressing "Add to Portfolio".
#[derive(Debug, Clone, PartialEq)]
pub enum AddOutcome {
    /// Entry appended; carries the new row id.
    Added(Uuid),
    /// Coin or amount left empty; nothing happened.
    Ignored,
    /// A previous add is still in flight.
    Busy,
    /// Screen was torn down (or re-entered) before the fetch came back.
    Discarded,
    /// Validation, network or lookup failure; the portfolio is unchanged.
    Failed(String),
}

/// One row of the holdings list, value computed from the frozen price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioRow {
    pub id: Uuid,
    pub name: String,
    pub quantity: Decimal,
    pub price_at_add: Decimal,
    pub value: Decimal,
    /// `value` rounded for display, e.g. `$25000.00`
    pub formatted_value: String,
}

#[derive(Debug, Default)]
struct AddForm {
    selected_coin_id: Option<String>,
    amount_input: String,
}

/// Portfolio calculator screen.
///
/// Two concerns run independently: loading the coin picker options and the
/// add action. Each has its own [`LoadState`], and a failure in one leaves
/// the other usable. The portfolio itself lives only as long as this
/// controller.
pub struct PortfolioScreen {
    source: Arc<dyn MarketDataSource>,
    page_size: PageSize,
    lookup: LookupService,
    portfolio_service: PortfolioService,
    valuation: ValuationService,
    session: ScreenSession,
    options: StateCell<Vec<PickerOption>>,
    add: StateCell<()>,
    form: Mutex<AddForm>,
    portfolio: Mutex<Portfolio>,
}

impl PortfolioScreen {
    pub fn new(source: Arc<dyn MarketDataSource>) -> Self {
        Self {
            source,
            page_size: PageSize::FULL,
            lookup: LookupService::new(),
            portfolio_service: PortfolioService::new(),
            valuation: ValuationService::new(),
            session: ScreenSession::new(),
            options: StateCell::new(),
            add: StateCell::new(),
            form: Mutex::new(AddForm::default()),
            portfolio: Mutex::new(Portfolio::new()),
        }
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    // ── Lifecycle ───────────────────────────────────────────────────

    /// Activate the screen and load the picker options.
    ///
    /// The add state goes back to `Idle`, except when an add from an earlier
    /// activation is still fetching: it stays `Loading` until that add lands
    /// and is discarded, so at most one add request is ever in flight.
    pub async fn mount(&self) {
        let ticket = self.session.begin();
        self.add.reset_if_settled();
        self.options.set(LoadState::Loading);

        let result = self.source.fetch_market(self.page_size).await.map(|snapshot| {
            snapshot
                .assets
                .iter()
                .map(PickerOption::from)
                .collect::<Vec<_>>()
        });

        if !self.session.is_current(&ticket) {
            debug!("Discarding picker options for a torn-down screen");
            return;
        }
        if let Err(e) = &result {
            warn!(source = self.source.name(), error = %e, "Picker options fetch failed");
        }
        self.options.set(LoadState::from_result(result));
    }

    pub fn unmount(&self) {
        self.session.end();
    }

    pub fn options_state(&self) -> LoadState<Vec<PickerOption>> {
        self.options.get()
    }

    pub fn add_state(&self) -> LoadState<()> {
        self.add.get()
    }

    // ── Form ────────────────────────────────────────────────────────

    pub fn select_coin(&self, coin_id: Option<String>) {
        self.lock_form().selected_coin_id = coin_id.filter(|id| !id.is_empty());
    }

    pub fn set_amount(&self, amount: impl Into<String>) {
        self.lock_form().amount_input = amount.into();
    }

    pub fn selected_coin(&self) -> Option<String> {
        self.lock_form().selected_coin_id.clone()
    }

    pub fn amount_input(&self) -> String {
        self.lock_form().amount_input.clone()
    }

    // ── Add action ──────────────────────────────────────────────────

    /// Re-fetch the market, freeze the selected coin's current price, and
    /// append a new entry. On any failure the portfolio is left as it was.
    pub async fn add_to_portfolio(&self) -> AddOutcome {
        let (coin_id, amount_input) = {
            let form = self.lock_form();
            match &form.selected_coin_id {
                Some(id) if !form.amount_input.trim().is_empty() => {
                    (id.clone(), form.amount_input.trim().to_string())
                }
                _ => return AddOutcome::Ignored,
            }
        };

        let Some(ticket) = self.session.current() else {
            return AddOutcome::Discarded;
        };
        if !self.add.try_start() {
            return AddOutcome::Busy;
        }

        let quantity = match parse_quantity(&amount_input) {
            Ok(q) => q,
            Err(e) => return self.fail_add(e),
        };

        let fetched = self.source.fetch_market(self.page_size).await;

        if !self.session.is_current(&ticket) {
            debug!(coin_id = %coin_id, "Discarding add-to-portfolio result for a torn-down screen");
            self.add.set(LoadState::Idle);
            return AddOutcome::Discarded;
        }

        let entry = fetched.and_then(|snapshot| {
            let asset = self.lookup.require_by_id(&snapshot.assets, &coin_id)?;
            entry_from_snapshot(asset, quantity)
        });

        let appended = entry.and_then(|entry| {
            let mut portfolio = self.lock_portfolio();
            let total = self
                .valuation
                .total_value(self.portfolio_service.list(&portfolio))?;
            self.valuation.checked_add(total, &entry)?;
            let id = entry.id();
            self.portfolio_service.append(&mut portfolio, entry);
            Ok(id)
        });

        match appended {
            Ok(id) => {
                {
                    let mut form = self.lock_form();
                    form.selected_coin_id = None;
                    form.amount_input.clear();
                }
                self.add.set(LoadState::Ready(()));
                AddOutcome::Added(id)
            }
            Err(e) => self.fail_add(e),
        }
    }

    // ── Holdings & Value ────────────────────────────────────────────

    pub fn entries(&self) -> Vec<PortfolioEntry> {
        self.portfolio_service
            .list(&self.lock_portfolio())
            .to_vec()
    }

    pub fn rows(&self) -> Vec<PortfolioRow> {
        let portfolio = self.lock_portfolio();
        self.portfolio_service
            .list(&portfolio)
            .iter()
            .map(|entry| {
                let value = self.valuation.entry_value(entry);
                PortfolioRow {
                    id: entry.id(),
                    name: entry.name().to_string(),
                    quantity: entry.quantity(),
                    price_at_add: entry.price_at_add(),
                    value,
                    formatted_value: self.valuation.format_usd(value),
                }
            })
            .collect()
    }

    /// Sum of all entry values. Adds that would push the total out of the
    /// `Decimal` range are refused, so this only fails for a portfolio that
    /// was never built through [`add_to_portfolio`](Self::add_to_portfolio).
    pub fn total_value(&self) -> Result<Decimal, CoreError> {
        let portfolio = self.lock_portfolio();
        self.valuation
            .total_value(self.portfolio_service.list(&portfolio))
    }

    /// Total for the footer, e.g. `$25000.00`.
    pub fn formatted_total(&self) -> Result<String, CoreError> {
        Ok(self.valuation.format_usd(self.total_value()?))
    }

    // ── Internal ────────────────────────────────────────────────────

    fn fail_add(&self, error: CoreError) -> AddOutcome {
        warn!(error = %error, "Add to portfolio failed");
        let message = error.to_string();
        self.add.set(LoadState::Failed(message.clone()));
        AddOutcome::Failed(message)
    }

    fn lock_form(&self) -> std::sync::MutexGuard<'_, AddForm> {
        self.form.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn lock_portfolio(&self) -> std::sync::MutexGuard<'_, Portfolio> {
        self.portfolio.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Parse the amount field. Must be a positive decimal.
pub fn parse_quantity(input: &str) -> Result<Decimal, CoreError> {
    let trimmed = input.trim();
    let quantity = Decimal::from_str(trimmed)
        .map_err(|_| CoreError::Validation(format!("Invalid amount '{trimmed}'")))?;
    if quantity <= Decimal::ZERO {
        return Err(CoreError::Validation(format!(
            "Amount must be positive, got {trimmed}"
        )));
    }
    Ok(quantity)
}

fn entry_from_snapshot(asset: &AssetSnapshot, quantity: Decimal) -> Result<PortfolioEntry, CoreError> {
    let price = Decimal::from_f64(asset.current_price).ok_or_else(|| {
        CoreError::MalformedPayload(format!(
            "Price {} for {} is not representable",
            asset.current_price, asset.id
        ))
    })?;
    PortfolioEntry::new(&asset.id, &asset.name, quantity, price)
}
