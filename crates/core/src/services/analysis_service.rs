use crate::errors::CoreError;
use crate::gateway::traits::{AnalysisGateway, Period};
use crate::models::analysis::AnalysisSnapshot;

/// Fetches all analysis feeds for one symbol and joins them into an
/// [`AnalysisSnapshot`].
///
/// The join is all-or-nothing: every feed is requested concurrently
/// and the snapshot only exists once all six resolve. The first
/// failure fails the whole join — no partial results, no retry, no
/// timeout at this layer. A caller that loses interest simply drops
/// the future; in-flight requests are not actively cancelled.
pub struct AnalysisService;

impl AnalysisService {
    pub fn new() -> Self {
        Self
    }

    /// Fetch quote, history, technical, prediction, news, and
    /// comprehensive feeds concurrently, failing fast on the first
    /// error.
    pub async fn fetch_snapshot(
        &self,
        gateway: &dyn AnalysisGateway,
        symbol: &str,
        period: Period,
    ) -> Result<AnalysisSnapshot, CoreError> {
        let (info, historical, technical, prediction, news, comprehensive) = tokio::try_join!(
            gateway.stock_info(symbol),
            gateway.historical_data(symbol, period),
            gateway.technical_analysis(symbol, period),
            gateway.prediction(symbol, period),
            gateway.news(symbol),
            gateway.comprehensive_analysis(symbol, period),
        )?;

        Ok(AnalysisSnapshot {
            info,
            historical,
            technical,
            prediction,
            news,
            comprehensive,
        })
    }
}

impl Default for AnalysisService {
    fn default() -> Self {
        Self::new()
    }
}
