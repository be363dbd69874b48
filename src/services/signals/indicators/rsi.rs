//! Relative Strength Index (RSI) indicator.

/// Value returned when there is not enough history.
pub const NEUTRAL_RSI: f64 = 50.0;

/// RSI (Relative Strength Index) indicator.
///
/// Measures momentum by comparing the magnitude of gains to losses over the
/// first `period` samples of the series (a fixed window anchored at the start,
/// not a trailing one). Values range from 0-100:
/// - Below 35: oversold territory for the intraday rules
/// - Above 65: overbought territory for the intraday rules
#[derive(Debug, Clone, Copy)]
pub struct Rsi {
    period: usize,
}

impl Default for Rsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Calculate RSI over the first `period` samples.
    ///
    /// Deltas are taken between consecutive samples inside the window and
    /// averaged over the full period. Returns [`NEUTRAL_RSI`] when the series
    /// is shorter than the period. A window with no losses saturates at 100.
    pub fn calculate(&self, prices: &[f64]) -> f64 {
        if self.period == 0 || prices.len() < self.period {
            return NEUTRAL_RSI;
        }

        let mut gains = 0.0;
        let mut losses = 0.0;

        for pair in prices[..self.period].windows(2) {
            let change = pair[1] - pair[0];
            if !change.is_finite() {
                continue;
            }
            if change >= 0.0 {
                gains += change;
            } else {
                losses -= change;
            }
        }

        let avg_gain = gains / self.period as f64;
        let avg_loss = losses / self.period as f64;

        if avg_loss == 0.0 {
            return 100.0;
        }

        let rs = avg_gain / avg_loss;
        100.0 - (100.0 / (1.0 + rs))
    }
}
