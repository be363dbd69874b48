use serde::{Deserialize, Serialize};

/// Point-in-time bundle of indicator values for one evaluation cycle.
///
/// Intraday fields (`rsi`, `vwap`, `ema9`, `ema21`, volume stats) come from the
/// intraday series; trend fields (`ema50`, `ema200`, MACD, levels) come from
/// the daily series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorSnapshot {
    pub price: f64,
    /// Prior session close. `None` when there was no prior session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_close: Option<f64>,
    pub volume: f64,
    pub average_volume5: f64,
    pub rsi: f64,
    pub vwap: f64,
    pub ema9: f64,
    pub ema21: f64,
    pub ema50: f64,
    pub ema200: f64,
    pub macd_line: f64,
    pub macd_signal: f64,
    /// Distinct local minima, ascending.
    pub support_levels: Vec<f64>,
    /// Distinct local maxima, ascending.
    pub resistance_levels: Vec<f64>,
}

impl IndicatorSnapshot {
    /// Percentage change of `price` against the previous close.
    pub fn change_pct(&self) -> Option<f64> {
        self.previous_close
            .filter(|close| *close != 0.0)
            .map(|close| (self.price - close) / close * 100.0)
    }

    /// Highest support strictly below the current price.
    pub fn nearest_support(&self) -> Option<f64> {
        self.support_levels
            .iter()
            .copied()
            .filter(|level| *level < self.price)
            .fold(None, |best: Option<f64>, level| {
                Some(best.map_or(level, |b| b.max(level)))
            })
    }

    /// Lowest resistance strictly above the current price.
    pub fn nearest_resistance(&self) -> Option<f64> {
        self.resistance_levels
            .iter()
            .copied()
            .filter(|level| *level > self.price)
            .fold(None, |best: Option<f64>, level| {
                Some(best.map_or(level, |b| b.min(level)))
            })
    }
}
