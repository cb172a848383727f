use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::analysis::{
    ComprehensiveAnalysis, HistoricalData, NewsReport, Prediction, StockInfo, TechnicalAnalysis,
};

/// Analysis horizon, from a fixed set of codes the analysis service
/// understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Period {
    OneMonth,
    ThreeMonths,
    SixMonths,
    OneYear,
}

impl Period {
    /// Wire code sent to the analysis service.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Period::OneMonth => "1mo",
            Period::ThreeMonths => "3mo",
            Period::SixMonths => "6mo",
            Period::OneYear => "1y",
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Contract to the remote analysis service.
///
/// The core only consumes this contract; the service itself (technical
/// analysis, prediction model, news sentiment, comprehensive scoring)
/// is an external collaborator. All calls are symbol-scoped
/// request/response, and each failure surfaces as a distinct
/// recoverable error — never a silent default.
#[async_trait]
pub trait AnalysisGateway: Send + Sync {
    /// Basic quote and fundamentals.
    async fn stock_info(&self, symbol: &str) -> Result<StockInfo, CoreError>;

    /// Ordered daily price series over the given horizon.
    async fn historical_data(
        &self,
        symbol: &str,
        period: Period,
    ) -> Result<HistoricalData, CoreError>;

    /// Technical indicators, trend, and buy/sell signals.
    async fn technical_analysis(
        &self,
        symbol: &str,
        period: Period,
    ) -> Result<TechnicalAnalysis, CoreError>;

    /// Price-prediction model output.
    async fn prediction(&self, symbol: &str, period: Period) -> Result<Prediction, CoreError>;

    /// News headlines with sentiment classification.
    async fn news(&self, symbol: &str) -> Result<NewsReport, CoreError>;

    /// Pre-combined 0–100 score across all feeds.
    async fn comprehensive_analysis(
        &self,
        symbol: &str,
        period: Period,
    ) -> Result<ComprehensiveAnalysis, CoreError>;
}
