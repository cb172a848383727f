use chrono::Utc;
use uuid::Uuid;

use crate::errors::CoreError;
use crate::ids::IdSource;
use crate::models::alert::{Alert, NewAlert};
use crate::models::holding::{Holding, HoldingPatch, NewHolding};
use crate::models::settings::SettingsPatch;
use crate::models::state::{StateExport, StoreState};
use crate::models::trade::{NewTrade, TradeRecord};
use crate::models::watchlist::{canonical_symbol, WatchlistItem};

/// Mutation semantics for the five persisted collections.
///
/// Pure business logic over `&mut StoreState` — no I/O. The facade
/// funnels every mutation through here and handles persistence.
pub struct StoreService;

impl StoreService {
    pub fn new() -> Self {
        Self
    }

    // ── Watchlist ───────────────────────────────────────────────────

    /// Add a symbol to the watchlist. No-op if the canonical symbol is
    /// already present. Returns whether the list changed.
    pub fn add_to_watchlist(&self, state: &mut StoreState, symbol: &str) -> bool {
        let canonical = canonical_symbol(symbol);
        if state.watchlist.iter().any(|item| item.symbol == canonical) {
            return false;
        }
        state.watchlist.push(WatchlistItem {
            symbol: canonical,
            added_at: Utc::now(),
        });
        true
    }

    /// Remove all watchlist entries matching the symbol. No error if
    /// absent. Returns whether the list changed.
    pub fn remove_from_watchlist(&self, state: &mut StoreState, symbol: &str) -> bool {
        let canonical = canonical_symbol(symbol);
        let before = state.watchlist.len();
        state.watchlist.retain(|item| item.symbol != canonical);
        state.watchlist.len() != before
    }

    // ── Portfolio ───────────────────────────────────────────────────

    /// Add a holding with a freshly assigned id. Validates shares and
    /// prices before appending.
    pub fn add_holding(
        &self,
        state: &mut StoreState,
        ids: &dyn IdSource,
        new: NewHolding,
    ) -> Result<Uuid, CoreError> {
        validate_shares(new.shares)?;
        validate_price("Average price", new.avg_price)?;
        validate_price("Current price", new.current_price)?;

        let id = ids.next_id();
        state.portfolio.push(Holding {
            id,
            symbol: canonical_symbol(new.symbol),
            shares: new.shares,
            avg_price: new.avg_price,
            current_price: new.current_price,
        });
        Ok(id)
    }

    /// Remove a holding by id. No-op if absent; returns whether the
    /// portfolio changed.
    pub fn remove_holding(&self, state: &mut StoreState, id: Uuid) -> bool {
        let before = state.portfolio.len();
        state.portfolio.retain(|h| h.id != id);
        state.portfolio.len() != before
    }

    /// Merge a partial patch into the matching holding. No-op if the
    /// id is absent. A patch that would zero out or negate the share
    /// count is rejected.
    pub fn update_holding(
        &self,
        state: &mut StoreState,
        id: Uuid,
        patch: HoldingPatch,
    ) -> Result<bool, CoreError> {
        let Some(holding) = state.portfolio.iter_mut().find(|h| h.id == id) else {
            return Ok(false);
        };

        if let Some(shares) = patch.shares {
            validate_shares(shares)?;
        }
        if let Some(avg_price) = patch.avg_price {
            validate_price("Average price", avg_price)?;
        }
        if let Some(current_price) = patch.current_price {
            validate_price("Current price", current_price)?;
        }

        if let Some(shares) = patch.shares {
            holding.shares = shares;
        }
        if let Some(avg_price) = patch.avg_price {
            holding.avg_price = avg_price;
        }
        if let Some(current_price) = patch.current_price {
            holding.current_price = current_price;
        }
        Ok(true)
    }

    // ── Alerts ──────────────────────────────────────────────────────

    /// Add an alert with a freshly assigned id. The alert is armed
    /// (`active = true`) regardless of caller input.
    pub fn add_alert(
        &self,
        state: &mut StoreState,
        ids: &dyn IdSource,
        new: NewAlert,
    ) -> Result<Uuid, CoreError> {
        if new.target_price <= 0.0 || !new.target_price.is_finite() {
            return Err(CoreError::ValidationError(format!(
                "Alert target price must be positive, got {}",
                new.target_price
            )));
        }

        let id = ids.next_id();
        state.alerts.push(Alert {
            id,
            symbol: canonical_symbol(new.symbol),
            target_price: new.target_price,
            condition: new.condition,
            active: true,
            created_at: Utc::now(),
        });
        Ok(id)
    }

    /// Remove an alert by id. No-op if absent.
    pub fn remove_alert(&self, state: &mut StoreState, id: Uuid) -> bool {
        let before = state.alerts.len();
        state.alerts.retain(|a| a.id != id);
        state.alerts.len() != before
    }

    /// Flip an alert's active flag. No-op if absent.
    pub fn toggle_alert(&self, state: &mut StoreState, id: Uuid) -> bool {
        match state.alerts.iter_mut().find(|a| a.id == id) {
            Some(alert) => {
                alert.active = !alert.active;
                true
            }
            None => false,
        }
    }

    // ── Settings ────────────────────────────────────────────────────

    /// Shallow-merge a patch into the single settings object. Fields
    /// left `None` are untouched. Interval validity is enforced by the
    /// `RefreshInterval` type itself.
    pub fn update_settings(&self, state: &mut StoreState, patch: SettingsPatch) {
        if let Some(api_url) = patch.api_url {
            state.settings.api_url = api_url;
        }
        if let Some(notifications) = patch.notifications {
            state.settings.notifications = notifications;
        }
        if let Some(dark_mode) = patch.dark_mode {
            state.settings.dark_mode = dark_mode;
        }
        if let Some(refresh_interval) = patch.refresh_interval {
            state.settings.refresh_interval = refresh_interval;
        }
    }

    // ── Trade history ───────────────────────────────────────────────

    /// Log a trade with a freshly assigned id. **Prepends**: the trade
    /// collection is newest-first, unlike the append-only collections.
    pub fn record_trade(
        &self,
        state: &mut StoreState,
        ids: &dyn IdSource,
        new: NewTrade,
    ) -> Result<Uuid, CoreError> {
        validate_shares(new.shares)?;
        validate_price("Trade price", new.price)?;

        let id = ids.next_id();
        state.trade_history.insert(
            0,
            TradeRecord {
                id,
                symbol: canonical_symbol(new.symbol),
                kind: new.kind,
                shares: new.shares,
                price: new.price,
                executed_at: new.executed_at,
            },
        );
        Ok(id)
    }

    /// Empty the trade history.
    pub fn clear_trade_history(&self, state: &mut StoreState) -> bool {
        if state.trade_history.is_empty() {
            return false;
        }
        state.trade_history.clear();
        true
    }

    // ── Export / Reset ──────────────────────────────────────────────

    /// Snapshot all five collections for a user-initiated backup.
    /// Pure read — the state is untouched.
    #[must_use]
    pub fn export_snapshot(&self, state: &StoreState) -> StateExport {
        StateExport {
            watchlist: state.watchlist.clone(),
            portfolio: state.portfolio.clone(),
            alerts: state.alerts.clone(),
            settings: state.settings.clone(),
            trade_history: state.trade_history.clone(),
            exported_at: Utc::now(),
        }
    }

    /// Destroy all state and reinitialize to defaults. Confirmation is
    /// the caller's concern.
    pub fn reset_all(&self, state: &mut StoreState) {
        *state = StoreState::default();
    }
}

impl Default for StoreService {
    fn default() -> Self {
        Self::new()
    }
}

fn validate_shares(shares: f64) -> Result<(), CoreError> {
    if shares <= 0.0 || !shares.is_finite() {
        return Err(CoreError::ValidationError(format!(
            "Share count must be positive, got {shares}"
        )));
    }
    Ok(())
}

fn validate_price(what: &str, price: f64) -> Result<(), CoreError> {
    if price < 0.0 || !price.is_finite() {
        return Err(CoreError::ValidationError(format!(
            "{what} must be non-negative, got {price}"
        )));
    }
    Ok(())
}
