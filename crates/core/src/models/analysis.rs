use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Basic quote and fundamentals for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockInfo {
    pub symbol: String,
    pub name: String,
    pub current_price: f64,
    pub previous_close: f64,
    pub open: f64,
    pub day_high: f64,
    pub day_low: f64,
    pub volume: u64,
    pub market_cap: f64,
    #[serde(default)]
    pub pe_ratio: Option<f64>,
    #[serde(rename = "52week_high")]
    pub week52_high: f64,
    #[serde(rename = "52week_low", default)]
    pub week52_low: f64,
}

impl StockInfo {
    /// Absolute change since the previous close.
    #[must_use]
    pub fn day_change(&self) -> f64 {
        self.current_price - self.previous_close
    }

    /// Percentage change since the previous close, 0 when the previous
    /// close is 0.
    #[must_use]
    pub fn day_change_percent(&self) -> f64 {
        if self.previous_close == 0.0 {
            0.0
        } else {
            self.day_change() / self.previous_close * 100.0
        }
    }
}

/// One daily bar in a historical price series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    pub date: NaiveDate,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// Ordered historical price series for one symbol and horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalData {
    pub symbol: String,
    pub period: String,
    pub data: Vec<Candle>,
}

/// Whether a technical signal argues for buying or selling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignalKind {
    Buy,
    Sell,
}

/// One technical signal emitted by the analysis service
/// (e.g., RSI oversold, MACD golden cross).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalSignal {
    #[serde(rename = "type")]
    pub kind: SignalKind,
    pub indicator: String,
    pub reason: String,
    #[serde(default)]
    pub value: Option<f64>,
}

/// Latest indicator values. Any indicator can be absent when the
/// series is too short to compute it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Indicators {
    #[serde(rename = "SMA_20", default)]
    pub sma_20: Option<f64>,
    #[serde(rename = "SMA_50", default)]
    pub sma_50: Option<f64>,
    #[serde(rename = "EMA_12", default)]
    pub ema_12: Option<f64>,
    #[serde(rename = "EMA_26", default)]
    pub ema_26: Option<f64>,
    #[serde(rename = "RSI", default)]
    pub rsi: Option<f64>,
    #[serde(rename = "MACD", default)]
    pub macd: Option<f64>,
    #[serde(rename = "MACD_signal", default)]
    pub macd_signal: Option<f64>,
    #[serde(rename = "BB_upper", default)]
    pub bb_upper: Option<f64>,
    #[serde(rename = "BB_middle", default)]
    pub bb_middle: Option<f64>,
    #[serde(rename = "BB_lower", default)]
    pub bb_lower: Option<f64>,
    #[serde(rename = "Stoch_K", default)]
    pub stoch_k: Option<f64>,
    #[serde(rename = "Stoch_D", default)]
    pub stoch_d: Option<f64>,
}

/// Technical analysis result for one symbol and horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalAnalysis {
    pub symbol: String,
    pub trend: String,
    pub indicators: Indicators,
    pub signals: Vec<TechnicalSignal>,
    pub current_price: f64,
}

impl TechnicalAnalysis {
    /// Number of buy-type signals.
    #[must_use]
    pub fn buy_signal_count(&self) -> usize {
        self.signals
            .iter()
            .filter(|s| s.kind == SignalKind::Buy)
            .count()
    }

    /// Number of sell-type signals.
    #[must_use]
    pub fn sell_signal_count(&self) -> usize {
        self.signals
            .iter()
            .filter(|s| s.kind == SignalKind::Sell)
            .count()
    }
}

/// Price-prediction model output for one symbol and horizon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub symbol: String,
    pub current_price: f64,
    /// One predicted price per future day, in order
    pub predicted_prices: Vec<f64>,
    pub average_prediction: f64,
    pub price_change_percent: f64,
    pub recommendation: String,
    /// Model confidence in [0, 100]
    pub confidence: f64,
    pub note: String,
}

/// Aggregate sentiment category for a news batch or a single article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// One news article with its sentiment classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub link: String,
    pub publisher: String,
    pub sentiment: Sentiment,
    pub sentiment_score: f64,
}

/// News sentiment result for one symbol.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsReport {
    pub symbol: String,
    pub news: Vec<NewsArticle>,
    pub overall_sentiment: Sentiment,
    pub average_sentiment_score: f64,
}

/// Pre-combined score across technical, prediction, and news feeds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComprehensiveAnalysis {
    pub symbol: String,
    /// Combined score in [0, 100]
    pub overall_score: f64,
    pub overall_recommendation: String,
    #[serde(default)]
    pub summary: String,
}

/// All analysis feeds for one symbol, joined from one fetch cycle.
///
/// Ephemeral: never persisted, consistent only within the cycle that
/// produced it, and discarded when the caller loses interest. The only
/// link back to the persisted store is the symbol string itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSnapshot {
    pub info: StockInfo,
    pub historical: HistoricalData,
    pub technical: TechnicalAnalysis,
    pub prediction: Prediction,
    pub news: NewsReport,
    pub comprehensive: ComprehensiveAnalysis,
}
