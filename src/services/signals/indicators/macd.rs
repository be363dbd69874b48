//! MACD (Moving Average Convergence Divergence) indicator.

use super::ema::Ema;

/// MACD line and its signal line.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MacdValues {
    pub line: f64,
    pub signal: f64,
}

impl MacdValues {
    pub fn histogram(&self) -> f64 {
        self.line - self.signal
    }
}

/// MACD indicator.
///
/// Shows the relationship between two EMAs:
/// - MACD Line = EMA(12) - EMA(26)
/// - Signal Line = EMA(9) of MACD Line
///
/// Both EMAs are seeded with the first price and run over the full series;
/// MACD values are collected once the slow EMA has seen a full period.
#[derive(Debug, Clone, Copy)]
pub struct Macd {
    fast: Ema,
    slow: Ema,
    signal: Ema,
}

impl Default for Macd {
    fn default() -> Self {
        Self::new(12, 26, 9)
    }
}

impl Macd {
    pub fn new(fast_period: usize, slow_period: usize, signal_period: usize) -> Self {
        Self {
            fast: Ema::new(fast_period),
            slow: Ema::new(slow_period),
            signal: Ema::new(signal_period),
        }
    }

    /// Minimum number of samples before any MACD value is produced.
    pub fn min_periods(&self) -> usize {
        self.slow.period()
    }

    /// MACD value at every sample from index `slow_period - 1` onwards.
    pub fn line_series(&self, prices: &[f64]) -> Vec<f64> {
        if self.min_periods() == 0 || prices.len() < self.min_periods() {
            return Vec::new();
        }

        let seed = prices[0];
        if !seed.is_finite() {
            return Vec::new();
        }

        let start = self.min_periods() - 1;
        let mut fast = seed;
        let mut slow = seed;
        let mut values = Vec::with_capacity(prices.len() - start);

        for (i, &price) in prices.iter().enumerate().skip(1) {
            if !price.is_finite() {
                continue;
            }
            fast = self.fast.step(fast, price);
            slow = self.slow.step(slow, price);

            if i >= start {
                values.push(fast - slow);
            }
        }

        values
    }

    /// Latest MACD line and signal line. Returns zeros when the series is
    /// shorter than the slow period.
    pub fn calculate(&self, prices: &[f64]) -> MacdValues {
        let line_series = self.line_series(prices);

        let Some(&line) = line_series.last() else {
            return MacdValues::default();
        };

        MacdValues {
            line,
            signal: self.signal.calculate(&line_series),
        }
    }
}
