use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single tracked symbol on the user's watchlist.
///
/// Items are never mutated in place: a symbol is either on the list
/// (with the timestamp of when it was added) or it is not.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistItem {
    /// Canonical ticker symbol, uppercased (e.g., "AAPL", "7203.T")
    pub symbol: String,

    /// When the symbol was added to the watchlist
    pub added_at: DateTime<Utc>,
}

impl WatchlistItem {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: canonical_symbol(symbol),
            added_at: Utc::now(),
        }
    }
}

/// Canonicalize a ticker symbol: trim whitespace and uppercase.
/// All store lookups use the canonical form, so "aapl " and "AAPL"
/// refer to the same instrument.
pub fn canonical_symbol(symbol: impl Into<String>) -> String {
    symbol.into().trim().to_uppercase()
}
