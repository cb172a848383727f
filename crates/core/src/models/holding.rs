use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A simulated portfolio position.
///
/// **Important**: `current_price` is not self-updating. The caller
/// refreshes it with a [`HoldingPatch`] whenever a fresh quote arrives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holding {
    /// Unique identifier
    pub id: Uuid,

    /// Canonical ticker symbol
    pub symbol: String,

    /// Number of shares held (always positive)
    pub shares: f64,

    /// Average purchase price per share
    pub avg_price: f64,

    /// Last known market price per share, refreshed by the caller
    pub current_price: f64,
}

impl Holding {
    /// Cost basis of this position: shares × average purchase price.
    #[must_use]
    pub fn cost_basis(&self) -> f64 {
        self.shares * self.avg_price
    }

    /// Mark-to-market value: shares × last known market price.
    #[must_use]
    pub fn market_value(&self) -> f64 {
        self.shares * self.current_price
    }
}

/// Fields for creating a new holding. The store assigns the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewHolding {
    pub symbol: String,
    pub shares: f64,
    pub avg_price: f64,
    pub current_price: f64,
}

/// Partial update for an existing holding. `None` fields are left as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HoldingPatch {
    pub shares: Option<f64>,
    pub avg_price: Option<f64>,
    pub current_price: Option<f64>,
}
