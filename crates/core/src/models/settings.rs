use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// How often the UI refreshes quotes, from a fixed set of intervals.
///
/// Modeled as an enum so an out-of-set interval is unrepresentable in
/// [`Settings`]; raw milliseconds enter only through
/// [`RefreshInterval::from_millis`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub enum RefreshInterval {
    /// 30 seconds
    ThirtySeconds,
    /// 1 minute (default)
    OneMinute,
    /// 5 minutes
    FiveMinutes,
    /// 15 minutes
    FifteenMinutes,
}

impl RefreshInterval {
    /// The interval in milliseconds, as stored and exported.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        match self {
            RefreshInterval::ThirtySeconds => 30_000,
            RefreshInterval::OneMinute => 60_000,
            RefreshInterval::FiveMinutes => 300_000,
            RefreshInterval::FifteenMinutes => 900_000,
        }
    }

    /// Parse a raw millisecond value. Rejects anything outside the
    /// fixed set {30000, 60000, 300000, 900000}.
    pub fn from_millis(millis: u64) -> Result<Self, CoreError> {
        match millis {
            30_000 => Ok(RefreshInterval::ThirtySeconds),
            60_000 => Ok(RefreshInterval::OneMinute),
            300_000 => Ok(RefreshInterval::FiveMinutes),
            900_000 => Ok(RefreshInterval::FifteenMinutes),
            other => Err(CoreError::ValidationError(format!(
                "Invalid refresh interval {other} ms: expected one of 30000, 60000, 300000, 900000"
            ))),
        }
    }
}

impl TryFrom<u64> for RefreshInterval {
    type Error = CoreError;

    fn try_from(millis: u64) -> Result<Self, Self::Error> {
        Self::from_millis(millis)
    }
}

impl From<RefreshInterval> for u64 {
    fn from(interval: RefreshInterval) -> Self {
        interval.as_millis()
    }
}

/// User-configurable settings. Exactly one settings object exists per
/// store; it is merge-patched, never destroyed (reset = defaults).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the analysis service the gateway talks to
    pub api_url: String,

    /// Whether price-alert notifications are enabled
    pub notifications: bool,

    /// Whether the UI renders in dark mode
    pub dark_mode: bool,

    /// Quote refresh cadence
    pub refresh_interval: RefreshInterval,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:8000".to_string(),
            notifications: true,
            dark_mode: false,
            refresh_interval: RefreshInterval::OneMinute,
        }
    }
}

/// Partial update for [`Settings`]. `None` fields are left as-is.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SettingsPatch {
    pub api_url: Option<String>,
    pub notifications: Option<bool>,
    pub dark_mode: Option<bool>,
    pub refresh_interval: Option<RefreshInterval>,
}
