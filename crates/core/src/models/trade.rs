use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Side of a simulated trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradeKind {
    Buy,
    Sell,
}

impl std::fmt::Display for TradeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeKind::Buy => write!(f, "buy"),
            TradeKind::Sell => write!(f, "sell"),
        }
    }
}

/// A logged simulated trade. Records are immutable once created; the
/// history collection is only ever prepended to or cleared in bulk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    /// Unique identifier
    pub id: Uuid,

    /// Canonical ticker symbol
    pub symbol: String,

    /// Buy or sell
    pub kind: TradeKind,

    /// Number of shares traded
    pub shares: f64,

    /// Price per share at execution
    pub price: f64,

    /// When the trade was executed
    pub executed_at: DateTime<Utc>,
}

/// Fields for logging a new trade. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTrade {
    pub symbol: String,
    pub kind: TradeKind,
    pub shares: f64,
    pub price: f64,
    pub executed_at: DateTime<Utc>,
}
