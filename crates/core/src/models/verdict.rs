use serde::Serialize;

/// One of the five discrete verdict bands derived from a 0–100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tier {
    VeryPositive,
    Positive,
    Neutral,
    Negative,
    VeryNegative,
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Tier::VeryPositive => write!(f, "very-positive"),
            Tier::Positive => write!(f, "positive"),
            Tier::Neutral => write!(f, "neutral"),
            Tier::Negative => write!(f, "negative"),
            Tier::VeryNegative => write!(f, "very-negative"),
        }
    }
}

/// Presentation-ready verdict: tier plus the label and icon the UI
/// shows next to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub tier: Tier,
    pub label: &'static str,
    pub icon: &'static str,
}
