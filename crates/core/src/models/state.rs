use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::alert::Alert;
use super::holding::Holding;
use super::settings::Settings;
use super::trade::TradeRecord;
use super::watchlist::WatchlistItem;

/// The main data container. Everything in here gets serialized and
/// saved to the durable store file, and rehydrated at startup.
///
/// Contains the five persisted collections: watchlist, portfolio,
/// alerts, settings, and trade history.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StoreState {
    /// Tracked symbols
    pub watchlist: Vec<WatchlistItem>,

    /// Simulated portfolio positions
    pub portfolio: Vec<Holding>,

    /// Price alerts
    pub alerts: Vec<Alert>,

    /// User settings
    pub settings: Settings,

    /// Logged trades, newest first
    pub trade_history: Vec<TradeRecord>,
}

/// User-initiated backup of the full store, plus when it was taken.
/// Pure read: producing one never mutates the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateExport {
    pub watchlist: Vec<WatchlistItem>,
    pub portfolio: Vec<Holding>,
    pub alerts: Vec<Alert>,
    pub settings: Settings,
    pub trade_history: Vec<TradeRecord>,

    /// When the export was taken
    pub exported_at: DateTime<Utc>,
}
