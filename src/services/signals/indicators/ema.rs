//! Exponential Moving Average (EMA) indicator.

/// EMA (Exponential Moving Average) indicator.
///
/// Seeded with the first sample rather than an SMA, smoothing constant
/// `k = 2 / (period + 1)`. Non-finite samples are skipped and the running
/// value carries forward unchanged.
#[derive(Debug, Clone, Copy)]
pub struct Ema {
    period: usize,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    pub fn period(&self) -> usize {
        self.period
    }

    /// Smoothing constant for this period.
    pub fn multiplier(&self) -> f64 {
        2.0 / (self.period as f64 + 1.0)
    }

    /// Fold one sample into a running EMA value.
    ///
    /// Written as `prev + (price - prev) * k` so a constant series stays exact.
    pub fn step(&self, previous: f64, price: f64) -> f64 {
        (price - previous) * self.multiplier() + previous
    }

    /// Final EMA value over the whole series. Returns 0.0 when the series has
    /// no finite samples.
    pub fn calculate(&self, prices: &[f64]) -> f64 {
        self.series(prices).last().copied().unwrap_or(0.0)
    }

    /// Running EMA value at every sample from the seed onwards.
    pub fn series(&self, prices: &[f64]) -> Vec<f64> {
        let mut samples = prices.iter().copied().skip_while(|p| !p.is_finite());

        let Some(seed) = samples.next() else {
            return Vec::new();
        };

        let mut ema = seed;
        let mut values = Vec::with_capacity(prices.len());
        values.push(ema);

        for price in samples {
            if price.is_finite() {
                ema = self.step(ema, price);
            }
            values.push(ema);
        }

        values
    }
}
