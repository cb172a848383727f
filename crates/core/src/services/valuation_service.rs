use crate::models::holding::Holding;
use crate::models::valuation::{HoldingValuation, PortfolioValuation};

/// Arithmetic over portfolio holdings: totals, gain/loss, and the
/// per-holding breakdown.
///
/// Pure functions with no side effects; quotes arrive already attached
/// to the holdings by the caller.
pub struct ValuationService;

impl ValuationService {
    pub fn new() -> Self {
        Self
    }

    /// Total portfolio value **at cost**: Σ shares × average purchase
    /// price. This deliberately uses the cost basis, not the current
    /// price — a preserved contract, not an oversight.
    #[must_use]
    pub fn total_value(&self, holdings: &[Holding]) -> f64 {
        holdings.iter().map(Holding::cost_basis).sum()
    }

    /// Total unrealized gain: Σ shares × (current − average price).
    #[must_use]
    pub fn total_gain(&self, holdings: &[Holding]) -> f64 {
        holdings
            .iter()
            .map(|h| h.market_value() - h.cost_basis())
            .sum()
    }

    /// Total gain as a percentage of the cost-basis total. Defined as
    /// 0 for an empty or zero-cost portfolio — never NaN or infinite.
    #[must_use]
    pub fn total_gain_percent(&self, holdings: &[Holding]) -> f64 {
        let total_value = self.total_value(holdings);
        if total_value == 0.0 {
            0.0
        } else {
            self.total_gain(holdings) / total_value * 100.0
        }
    }

    /// Full valuation with per-holding breakdown, in portfolio order.
    #[must_use]
    pub fn summarize(&self, holdings: &[Holding]) -> PortfolioValuation {
        let breakdown = holdings.iter().map(|h| self.value_holding(h)).collect();

        PortfolioValuation {
            total_value: self.total_value(holdings),
            total_gain: self.total_gain(holdings),
            total_gain_percent: self.total_gain_percent(holdings),
            holdings: breakdown,
        }
    }

    /// Valuation of a single holding. The gain percentage uses the
    /// holding's own cost basis as denominator and is `None` when that
    /// basis is 0.
    #[must_use]
    pub fn value_holding(&self, holding: &Holding) -> HoldingValuation {
        let cost_basis = holding.cost_basis();
        let market_value = holding.market_value();
        let gain = market_value - cost_basis;
        let gain_percent = if cost_basis == 0.0 {
            None
        } else {
            Some(gain / cost_basis * 100.0)
        };

        HoldingValuation {
            id: holding.id,
            symbol: holding.symbol.clone(),
            shares: holding.shares,
            market_value,
            cost_basis,
            gain,
            gain_percent,
        }
    }
}

impl Default for ValuationService {
    fn default() -> Self {
        Self::new()
    }
}
