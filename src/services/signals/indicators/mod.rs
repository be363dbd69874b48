//! Technical indicator implementations.
//!
//! Pure functions over bare price (and parallel volume) slices. Nothing here
//! knows about trading rules.

pub mod ema;
pub mod levels;
pub mod macd;
pub mod rsi;
pub mod volume;
pub mod vwap;

pub use ema::Ema;
pub use levels::{local_extrema, resistance_levels, support_levels, Extremum};
pub use macd::{Macd, MacdValues};
pub use rsi::{Rsi, NEUTRAL_RSI};
pub use volume::{trailing_average, SHORT_VOLUME_WINDOW};
pub use vwap::Vwap;

/// 14-period RSI over the first 14 samples.
pub fn rsi14(prices: &[f64]) -> f64 {
    Rsi::default().calculate(prices)
}

/// Final EMA value for `period`.
pub fn ema(prices: &[f64], period: usize) -> f64 {
    Ema::new(period).calculate(prices)
}

/// Running EMA values for chart display.
pub fn ema_series(prices: &[f64], period: usize) -> Vec<f64> {
    Ema::new(period).series(prices)
}

/// MACD(12, 26, 9) line and signal.
pub fn macd(prices: &[f64]) -> MacdValues {
    Macd::default().calculate(prices)
}

/// VWAP over the whole series, `None` when total volume is zero.
pub fn vwap(prices: &[f64], volumes: &[f64]) -> Option<f64> {
    Vwap.calculate(prices, volumes)
}
