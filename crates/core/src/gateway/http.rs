use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::CoreError;
use crate::models::analysis::{
    ComprehensiveAnalysis, HistoricalData, NewsReport, Prediction, StockInfo, TechnicalAnalysis,
};

use super::traits::{AnalysisGateway, Period};

/// HTTP implementation of [`AnalysisGateway`].
///
/// Talks to the analysis backend's JSON endpoints under
/// `{base_url}/api/stock/...`. Each endpoint is a symbol-scoped POST
/// with a small JSON body; responses map directly onto the typed
/// payloads in `models::analysis`.
pub struct HttpAnalysisGateway {
    client: Client,
    base_url: String,
}

impl HttpAnalysisGateway {
    /// Create a gateway against the given base URL (e.g., the
    /// `api_url` from settings). Trailing slashes are tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// POST a JSON body to an endpoint and parse the JSON response.
    async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, CoreError> {
        let url = format!("{}/api/stock/{endpoint}", self.base_url);

        let resp = self.client.post(&url).json(body).send().await?;
        let status = resp.status();

        if status.is_success() {
            resp.json::<T>().await.map_err(|e| CoreError::Api {
                endpoint: endpoint.to_string(),
                message: format!("Failed to parse response: {e}"),
            })
        } else if status == StatusCode::NOT_FOUND {
            Err(CoreError::SymbolNotFound(body_symbol(body)))
        } else {
            let message = resp.text().await.unwrap_or_default();
            Err(CoreError::Api {
                endpoint: endpoint.to_string(),
                message: format!("HTTP {status}: {message}"),
            })
        }
    }
}

/// Pull the symbol back out of a request body for error reporting.
fn body_symbol<B: Serialize>(body: &B) -> String {
    serde_json::to_value(body)
        .ok()
        .and_then(|v| v.get("symbol").and_then(|s| s.as_str()).map(String::from))
        .unwrap_or_default()
}

// ── Request bodies ──────────────────────────────────────────────────

#[derive(Serialize)]
struct SymbolRequest<'a> {
    symbol: &'a str,
}

#[derive(Serialize)]
struct AnalysisRequest<'a> {
    symbol: &'a str,
    period: &'a str,
}

#[async_trait]
impl AnalysisGateway for HttpAnalysisGateway {
    async fn stock_info(&self, symbol: &str) -> Result<StockInfo, CoreError> {
        self.post("info", &SymbolRequest { symbol }).await
    }

    async fn historical_data(
        &self,
        symbol: &str,
        period: Period,
    ) -> Result<HistoricalData, CoreError> {
        self.post(
            "historical",
            &AnalysisRequest {
                symbol,
                period: period.code(),
            },
        )
        .await
    }

    async fn technical_analysis(
        &self,
        symbol: &str,
        period: Period,
    ) -> Result<TechnicalAnalysis, CoreError> {
        self.post(
            "technical-analysis",
            &AnalysisRequest {
                symbol,
                period: period.code(),
            },
        )
        .await
    }

    async fn prediction(&self, symbol: &str, period: Period) -> Result<Prediction, CoreError> {
        self.post(
            "prediction",
            &AnalysisRequest {
                symbol,
                period: period.code(),
            },
        )
        .await
    }

    async fn news(&self, symbol: &str) -> Result<NewsReport, CoreError> {
        self.post("news", &SymbolRequest { symbol }).await
    }

    async fn comprehensive_analysis(
        &self,
        symbol: &str,
        period: Period,
    ) -> Result<ComprehensiveAnalysis, CoreError> {
        self.post(
            "comprehensive-analysis",
            &AnalysisRequest {
                symbol,
                period: period.code(),
            },
        )
        .await
    }
}
