pub mod errors;
pub mod gateway;
pub mod ids;
pub mod models;
pub mod services;
pub mod storage;

use std::path::{Path, PathBuf};

use uuid::Uuid;

use errors::CoreError;
use gateway::traits::{AnalysisGateway, Period};
use ids::{IdSource, RandomIds};
use models::alert::{Alert, NewAlert};
use models::analysis::AnalysisSnapshot;
use models::holding::{Holding, HoldingPatch, NewHolding};
use models::settings::{Settings, SettingsPatch};
use models::state::{StateExport, StoreState};
use models::trade::{NewTrade, TradeRecord};
use models::valuation::PortfolioValuation;
use models::verdict::Verdict;
use models::watchlist::WatchlistItem;
use services::analysis_service::AnalysisService;
use services::recommendation_service::RecommendationService;
use services::store_service::StoreService;
use services::valuation_service::ValuationService;
use storage::manager::StorageManager;

/// Main entry point for the Stock Mentor core library.
///
/// Owns the persisted domain state (watchlist, portfolio, alerts,
/// settings, trade history) and the services that operate on it. All
/// mutation funnels through `&mut self`, so a store instance has
/// exactly one writer; readers get snapshot slices.
///
/// Two persistence modes, chosen at construction:
/// - **file mode** ([`StockMentor::open`]): every mutation writes the
///   durable file before returning, so the store on disk is never
///   behind what a caller has observed in memory;
/// - **bytes mode** ([`StockMentor::create_new`] /
///   [`StockMentor::load_from_bytes`]): the host owns file I/O, and a
///   dirty flag tracks unsaved changes (for WASM or embedded hosts).
#[must_use]
pub struct StockMentor {
    state: StoreState,
    store_service: StoreService,
    recommendation_service: RecommendationService,
    valuation_service: ValuationService,
    analysis_service: AnalysisService,
    ids: Box<dyn IdSource>,
    path: Option<PathBuf>,
    /// Tracks whether any mutation has occurred since the last save/load
    /// (meaningful in bytes mode; file mode saves eagerly).
    dirty: bool,
}

impl std::fmt::Debug for StockMentor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StockMentor")
            .field("watchlist", &self.state.watchlist.len())
            .field("portfolio", &self.state.portfolio.len())
            .field("alerts", &self.state.alerts.len())
            .field("trades", &self.state.trade_history.len())
            .field("settings", &self.state.settings)
            .field("dirty", &self.dirty)
            .finish()
    }
}

impl StockMentor {
    /// Create a brand new empty store with default settings (bytes mode).
    pub fn create_new() -> Self {
        Self::build(StoreState::default(), Box::new(RandomIds), None)
    }

    /// Create a store with a caller-supplied id source. Used by tests
    /// that need deterministic ids.
    pub fn create_with_ids(ids: Box<dyn IdSource>) -> Self {
        Self::build(StoreState::default(), ids, None)
    }

    /// Open a store backed by a file on disk (file mode).
    ///
    /// Rehydrates existing state if the file is present, otherwise
    /// starts from defaults and writes the initial file. From then on,
    /// every mutation persists before returning.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CoreError> {
        let path = path.into();
        let state = if path.exists() {
            StorageManager::load_from_file(&path)?
        } else {
            let state = StoreState::default();
            StorageManager::save_to_file(&state, &path)?;
            state
        };
        Ok(Self::build(state, Box::new(RandomIds), Some(path)))
    }

    /// Load an existing store from raw bytes (bytes mode).
    pub fn load_from_bytes(data: &[u8]) -> Result<Self, CoreError> {
        let state = StorageManager::load_from_bytes(data)?;
        Ok(Self::build(state, Box::new(RandomIds), None))
    }

    /// Save the current store to raw bytes. Clears the unsaved-changes
    /// flag on success.
    pub fn save_to_bytes(&mut self) -> Result<Vec<u8>, CoreError> {
        let bytes = StorageManager::save_to_bytes(&self.state)?;
        self.dirty = false;
        Ok(bytes)
    }

    /// Path of the backing file, if the store was opened in file mode.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Returns `true` if the store has been modified since the last
    /// save or load. Always `false` in file mode, which saves eagerly.
    #[must_use]
    pub fn has_unsaved_changes(&self) -> bool {
        self.dirty
    }

    // ── Watchlist ───────────────────────────────────────────────────

    /// Add a symbol to the watchlist. No-op (and no durable write) if
    /// the canonical symbol is already present.
    pub fn add_to_watchlist(&mut self, symbol: &str) -> Result<(), CoreError> {
        if self.store_service.add_to_watchlist(&mut self.state, symbol) {
            self.persist()?;
        }
        Ok(())
    }

    /// Remove a symbol from the watchlist. No error if absent.
    pub fn remove_from_watchlist(&mut self, symbol: &str) -> Result<(), CoreError> {
        if self
            .store_service
            .remove_from_watchlist(&mut self.state, symbol)
        {
            self.persist()?;
        }
        Ok(())
    }

    /// Current watchlist, in insertion order.
    #[must_use]
    pub fn watchlist(&self) -> &[WatchlistItem] {
        &self.state.watchlist
    }

    /// Whether a symbol is currently on the watchlist.
    #[must_use]
    pub fn is_watching(&self, symbol: &str) -> bool {
        let canonical = models::watchlist::canonical_symbol(symbol);
        self.state.watchlist.iter().any(|w| w.symbol == canonical)
    }

    // ── Portfolio ───────────────────────────────────────────────────

    /// Add a holding to the simulated portfolio. Returns the assigned id.
    pub fn add_holding(&mut self, new: NewHolding) -> Result<Uuid, CoreError> {
        let id = self
            .store_service
            .add_holding(&mut self.state, self.ids.as_ref(), new)?;
        self.persist()?;
        Ok(id)
    }

    /// Remove a holding by id. No-op if absent.
    pub fn remove_holding(&mut self, id: Uuid) -> Result<(), CoreError> {
        if self.store_service.remove_holding(&mut self.state, id) {
            self.persist()?;
        }
        Ok(())
    }

    /// Patch a holding (e.g., refresh its current price). No-op if the
    /// id is absent.
    pub fn update_holding(&mut self, id: Uuid, patch: HoldingPatch) -> Result<(), CoreError> {
        if self
            .store_service
            .update_holding(&mut self.state, id, patch)?
        {
            self.persist()?;
        }
        Ok(())
    }

    /// Current holdings, in insertion order.
    #[must_use]
    pub fn holdings(&self) -> &[Holding] {
        &self.state.portfolio
    }

    /// Get a single holding by id.
    #[must_use]
    pub fn get_holding(&self, id: Uuid) -> Option<&Holding> {
        self.state.portfolio.iter().find(|h| h.id == id)
    }

    /// Valuation of the current portfolio: totals and per-holding
    /// breakdown.
    #[must_use]
    pub fn portfolio_valuation(&self) -> PortfolioValuation {
        self.valuation_service.summarize(&self.state.portfolio)
    }

    // ── Alerts ──────────────────────────────────────────────────────

    /// Create a price alert. The alert is always armed on creation,
    /// regardless of caller input. Returns the assigned id.
    pub fn add_alert(&mut self, new: NewAlert) -> Result<Uuid, CoreError> {
        let id = self
            .store_service
            .add_alert(&mut self.state, self.ids.as_ref(), new)?;
        self.persist()?;
        Ok(id)
    }

    /// Delete an alert by id. No-op if absent. Confirmation before a
    /// destructive delete is a UI concern.
    pub fn remove_alert(&mut self, id: Uuid) -> Result<(), CoreError> {
        if self.store_service.remove_alert(&mut self.state, id) {
            self.persist()?;
        }
        Ok(())
    }

    /// Flip an alert between armed and disarmed. No-op if absent.
    pub fn toggle_alert(&mut self, id: Uuid) -> Result<(), CoreError> {
        if self.store_service.toggle_alert(&mut self.state, id) {
            self.persist()?;
        }
        Ok(())
    }

    /// Current alerts, in insertion order.
    #[must_use]
    pub fn alerts(&self) -> &[Alert] {
        &self.state.alerts
    }

    // ── Settings ────────────────────────────────────────────────────

    /// Shallow-merge a patch into the settings. Fields left `None` are
    /// untouched.
    pub fn update_settings(&mut self, patch: SettingsPatch) -> Result<(), CoreError> {
        self.store_service.update_settings(&mut self.state, patch);
        self.persist()
    }

    /// Current settings.
    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.state.settings
    }

    // ── Trade history ───────────────────────────────────────────────

    /// Log a simulated trade. The history is newest-first, so the
    /// record lands at the front. Returns the assigned id.
    pub fn record_trade(&mut self, new: NewTrade) -> Result<Uuid, CoreError> {
        let id = self
            .store_service
            .record_trade(&mut self.state, self.ids.as_ref(), new)?;
        self.persist()?;
        Ok(id)
    }

    /// Empty the trade history.
    pub fn clear_trade_history(&mut self) -> Result<(), CoreError> {
        if self.store_service.clear_trade_history(&mut self.state) {
            self.persist()?;
        }
        Ok(())
    }

    /// Logged trades, newest first.
    #[must_use]
    pub fn trade_history(&self) -> &[TradeRecord] {
        &self.state.trade_history
    }

    // ── Export / Reset ──────────────────────────────────────────────

    /// Snapshot all five collections plus an export timestamp, for
    /// user-initiated backup. Pure read.
    #[must_use]
    pub fn export_snapshot(&self) -> StateExport {
        self.store_service.export_snapshot(&self.state)
    }

    /// Export the backup snapshot as pretty-printed JSON. The
    /// settings' `api_url` and `refresh_interval` round-trip verbatim.
    pub fn export_to_json(&self) -> Result<String, CoreError> {
        serde_json::to_string_pretty(&self.export_snapshot())
            .map_err(|e| CoreError::Serialization(format!("Failed to serialize export: {e}")))
    }

    /// Destroy all state and reinitialize to defaults. The caller is
    /// expected to have confirmed with the user first.
    pub fn reset_all(&mut self) -> Result<(), CoreError> {
        self.store_service.reset_all(&mut self.state);
        self.persist()
    }

    // ── Analysis & Recommendation ───────────────────────────────────

    /// Fetch all six analysis feeds for a symbol concurrently and join
    /// them all-or-nothing: the first failing feed fails the whole
    /// snapshot, with no partial results.
    pub async fn fetch_analysis(
        &self,
        gateway: &dyn AnalysisGateway,
        symbol: &str,
        period: Period,
    ) -> Result<AnalysisSnapshot, CoreError> {
        self.analysis_service
            .fetch_snapshot(gateway, symbol, period)
            .await
    }

    /// Classify a 0–100 comprehensive score into a five-tier verdict.
    #[must_use]
    pub fn classify(&self, overall_score: f64) -> Verdict {
        self.recommendation_service.classify(overall_score)
    }

    /// Verdict for a fetched analysis snapshot.
    #[must_use]
    pub fn verdict_for(&self, snapshot: &AnalysisSnapshot) -> Verdict {
        self.classify(snapshot.comprehensive.overall_score)
    }

    /// Plain-language rationale for a fetched analysis snapshot.
    #[must_use]
    pub fn explanation_for(&self, snapshot: &AnalysisSnapshot) -> String {
        self.recommendation_service.explain(
            snapshot.comprehensive.overall_score,
            &snapshot.technical,
            &snapshot.prediction,
            &snapshot.news,
        )
    }

    // ── Internal ────────────────────────────────────────────────────

    /// Make the durable store consistent with memory. In file mode
    /// this writes (atomically) before returning; in bytes mode it
    /// marks the state dirty for the host to save.
    fn persist(&mut self) -> Result<(), CoreError> {
        match &self.path {
            Some(path) => StorageManager::save_to_file(&self.state, path),
            None => {
                self.dirty = true;
                Ok(())
            }
        }
    }

    fn build(state: StoreState, ids: Box<dyn IdSource>, path: Option<PathBuf>) -> Self {
        Self {
            state,
            store_service: StoreService::new(),
            recommendation_service: RecommendationService::new(),
            valuation_service: ValuationService::new(),
            analysis_service: AnalysisService::new(),
            ids,
            path,
            dirty: false,
        }
    }
}
