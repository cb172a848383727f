use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Direction a price alert fires in, relative to its target price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertCondition {
    /// Fires when the live price rises above the target
    Above,
    /// Fires when the live price falls below the target
    Below,
}

impl std::fmt::Display for AlertCondition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AlertCondition::Above => write!(f, "above"),
            AlertCondition::Below => write!(f, "below"),
        }
    }
}

/// A user-defined price alert.
///
/// The store only records alerts and their active flag; evaluating them
/// against live prices is the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    /// Unique identifier
    pub id: Uuid,

    /// Canonical ticker symbol the alert watches
    pub symbol: String,

    /// Price level the alert triggers at (always positive)
    pub target_price: f64,

    /// Whether the alert fires above or below the target
    pub condition: AlertCondition,

    /// Whether the alert is currently armed. Always `true` on creation.
    pub active: bool,

    /// When the alert was created
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a new alert. The store assigns the id and
/// forces `active = true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAlert {
    pub symbol: String,
    pub target_price: f64,
    pub condition: AlertCondition,
}
