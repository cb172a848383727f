use serde::Serialize;
use uuid::Uuid;

/// Valuation of the whole simulated portfolio.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioValuation {
    /// Total at cost: Σ shares × average purchase price.
    ///
    /// This is a cost-basis total, not mark-to-market — a deliberate
    /// contract inherited from the system this core reimplements.
    pub total_value: f64,

    /// Σ shares × (current price − average purchase price)
    pub total_gain: f64,

    /// total_gain / total_value × 100, or 0 when total_value is 0
    pub total_gain_percent: f64,

    /// Per-holding breakdown, in portfolio order
    pub holdings: Vec<HoldingValuation>,
}

/// Valuation of a single holding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldingValuation {
    pub id: Uuid,
    pub symbol: String,
    pub shares: f64,

    /// shares × current price
    pub market_value: f64,

    /// shares × average purchase price
    pub cost_basis: f64,

    /// market_value − cost_basis
    pub gain: f64,

    /// gain / cost_basis × 100; `None` when the cost basis is 0,
    /// where the percentage is undefined
    pub gain_percent: Option<f64>,
}
