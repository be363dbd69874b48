//! Volume Weighted Average Price (VWAP) indicator.

/// VWAP (Volume Weighted Average Price) indicator.
///
/// Average price weighted by volume over the entire series:
/// VWAP = Sum(Price * Volume) / Sum(Volume)
///
/// Signals:
/// - Price above VWAP = bullish
/// - Price below VWAP = bearish
#[derive(Debug, Clone, Copy, Default)]
pub struct Vwap;

impl Vwap {
    /// Calculate VWAP over index-aligned prices and volumes.
    ///
    /// Samples with a non-finite price or an invalid volume are skipped.
    /// Returns `None` when the remaining volume sums to zero.
    pub fn calculate(&self, prices: &[f64], volumes: &[f64]) -> Option<f64> {
        let mut cum_pv = 0.0;
        let mut cum_vol = 0.0;

        for (&price, &volume) in prices.iter().zip(volumes) {
            if !price.is_finite() || !volume.is_finite() || volume < 0.0 {
                continue;
            }
            cum_pv += price * volume;
            cum_vol += volume;
        }

        if cum_vol > 0.0 {
            Some(cum_pv / cum_vol)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vwap_weighted_average() {
        let vwap = Vwap.calculate(&[100.0, 110.0], &[1.0, 3.0]).unwrap();
        assert!((vwap - 107.5).abs() < 1e-9);
    }

    #[test]
    fn test_vwap_zero_volume() {
        assert!(Vwap.calculate(&[100.0, 101.0], &[0.0, 0.0]).is_none());
        assert!(Vwap.calculate(&[], &[]).is_none());
    }

    #[test]
    fn test_vwap_within_price_range() {
        let prices: Vec<f64> = (0..40).map(|i| 95.0 + ((i * 13) % 11) as f64).collect();
        let volumes: Vec<f64> = (0..40).map(|i| 1000.0 + ((i * 7) % 5) as f64 * 250.0).collect();
        let vwap = Vwap.calculate(&prices, &volumes).unwrap();

        let min = prices.iter().copied().fold(f64::INFINITY, f64::min);
        let max = prices.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        assert!(vwap >= min && vwap <= max, "vwap {} outside [{}, {}]", vwap, min, max);
    }

    #[test]
    fn test_vwap_ignores_invalid_samples() {
        let vwap = Vwap
            .calculate(&[100.0, f64::NAN, 200.0], &[1.0, 50.0, 1.0])
            .unwrap();
        assert!((vwap - 150.0).abs() < 1e-9);
    }
}
