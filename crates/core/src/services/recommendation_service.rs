use crate::models::analysis::{NewsReport, Prediction, Sentiment, TechnicalAnalysis};
use crate::models::verdict::{Tier, Verdict};

/// Prediction change (in percent) beyond which the model's forecast
/// counts as a reason for the narrative.
const PREDICTION_THRESHOLD_PCT: f64 = 2.0;

/// Maps analysis results onto a five-tier verdict and a plain-language
/// rationale a beginner can read.
///
/// Pure and deterministic: no I/O, no state, identical inputs always
/// produce identical output. Scores outside [0, 100] are clamped
/// rather than rejected, so both functions are total.
pub struct RecommendationService;

impl RecommendationService {
    pub fn new() -> Self {
        Self
    }

    /// Classify a 0–100 comprehensive score into a verdict tier.
    ///
    /// Bands are inclusive on their lower bound and scanned top-down;
    /// exactly one matches for every finite score.
    #[must_use]
    pub fn classify(&self, overall_score: f64) -> Verdict {
        let score = clamp_score(overall_score);

        if score >= 80.0 {
            Verdict {
                tier: Tier::VeryPositive,
                label: "strong buy",
                icon: "🚀",
            }
        } else if score >= 65.0 {
            Verdict {
                tier: Tier::Positive,
                label: "buy",
                icon: "📈",
            }
        } else if score >= 45.0 {
            Verdict {
                tier: Tier::Neutral,
                label: "hold / watch",
                icon: "👀",
            }
        } else if score >= 30.0 {
            Verdict {
                tier: Tier::Negative,
                label: "possible sell",
                icon: "📉",
            }
        } else {
            Verdict {
                tier: Tier::VeryNegative,
                label: "strong sell",
                icon: "⚠️",
            }
        }
    }

    /// Build the beginner-facing explanation: a base sentence keyed by
    /// the score, plus the reasons that qualify, always in the order
    /// signals → prediction → news.
    #[must_use]
    pub fn explain(
        &self,
        overall_score: f64,
        technical: &TechnicalAnalysis,
        prediction: &Prediction,
        news: &NewsReport,
    ) -> String {
        let mut explanation = base_sentence(clamp_score(overall_score)).to_string();

        let mut reasons: Vec<&str> = Vec::new();

        // 1. Technical signals: only when one side outnumbers the other.
        let buys = technical.buy_signal_count();
        let sells = technical.sell_signal_count();
        if buys > sells {
            reasons.push("multiple technical signals point upward");
        } else if sells > buys {
            reasons.push("multiple technical signals point downward");
        }

        // 2. Prediction: only beyond the ±2% threshold.
        if prediction.price_change_percent > PREDICTION_THRESHOLD_PCT {
            reasons.push("the prediction model expects the price to rise");
        } else if prediction.price_change_percent < -PREDICTION_THRESHOLD_PCT {
            reasons.push("the prediction model expects the price to fall");
        }

        // 3. News: only when the overall sentiment is not neutral.
        match news.overall_sentiment {
            Sentiment::Positive => reasons.push("recent news coverage is favorable"),
            Sentiment::Negative => reasons.push("recent news coverage is unfavorable"),
            Sentiment::Neutral => {}
        }

        if !reasons.is_empty() {
            explanation.push_str("\n\nReasons: ");
            explanation.push_str(&reasons.join(", "));
        }

        explanation
    }
}

impl Default for RecommendationService {
    fn default() -> Self {
        Self::new()
    }
}

/// Out-of-range scores are clamped so the engine stays total.
/// NaN falls through to the most negative band.
fn clamp_score(score: f64) -> f64 {
    score.clamp(0.0, 100.0)
}

/// Base sentence for the narrative. The prose uses wider lean-positive
/// and lean-negative bands (70/55/45/30) than the five verdict tiers,
/// to soften the middle of the range.
fn base_sentence(score: f64) -> &'static str {
    if score >= 70.0 {
        "This stock is showing signs of upward momentum. Several independent analyses \
         agree the price is likely to rise."
    } else if score >= 55.0 {
        "This stock is leaning toward a buying opportunity, but it is not a sure thing, \
         so decide carefully."
    } else if score >= 45.0 {
        "This stock is hard to call right now. It may be better to wait and watch \
         before deciding."
    } else if score >= 30.0 {
        "This stock is showing early signs of decline. The price may fall, so stay \
         cautious."
    } else {
        "This stock is judged likely to fall. It may be time to consider selling."
    }
}
