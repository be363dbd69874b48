use serde::{Deserialize, Serialize};

use crate::config::Config;

/// Which rule set applies to a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvaluationMode {
    Intraday,
    LongTerm,
}

impl EvaluationMode {
    /// Parse from string.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "intraday" | "day" => Some(Self::Intraday),
            "long_term" | "longterm" | "long-term" | "position" => Some(Self::LongTerm),
            _ => None,
        }
    }

    /// Get display name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Intraday => "Intraday",
            Self::LongTerm => "Long Term",
        }
    }

    /// How often a caller should feed fresh series in this mode.
    pub fn refresh_secs(&self, config: &Config) -> u64 {
        match self {
            Self::Intraday => config.intraday_refresh_secs,
            Self::LongTerm => config.long_term_refresh_secs,
        }
    }
}

/// Market session status as seen by the clock.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketStatus {
    pub intraday_active: bool,
    pub mode: EvaluationMode,
    pub refresh_secs: u64,
    /// Exchange-local time, RFC 3339.
    pub local_time: String,
}
