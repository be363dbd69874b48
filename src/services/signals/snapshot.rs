//! Builds an [`IndicatorSnapshot`] from an intraday and a daily series.

use tracing::debug;

use crate::error::EngineError;
use crate::services::signals::indicators::{
    self, resistance_levels, support_levels, trailing_average, SHORT_VOLUME_WINDOW,
};
use crate::types::{IndicatorSnapshot, PriceVolumeSeries, Quote};

/// Build a snapshot using the last intraday price as the current price.
///
/// Falls back to the last daily price, then 0, when the intraday series is
/// empty. No previous close is recorded.
pub fn build_snapshot(
    intraday: &PriceVolumeSeries,
    long_term: &PriceVolumeSeries,
) -> Result<IndicatorSnapshot, EngineError> {
    let price = intraday
        .last_price()
        .or_else(|| long_term.last_price())
        .unwrap_or(0.0);

    build_snapshot_with_quote(Quote::new(price, None), intraday, long_term)
}

/// Build a snapshot anchored on a live quote.
///
/// Both series must be gap-free and index-aligned; anything else is rejected
/// rather than coerced. Short series never fail: each indicator falls back to
/// its neutral value.
pub fn build_snapshot_with_quote(
    quote: Quote,
    intraday: &PriceVolumeSeries,
    long_term: &PriceVolumeSeries,
) -> Result<IndicatorSnapshot, EngineError> {
    intraday.validate()?;
    long_term.validate()?;

    if !quote.price.is_finite() {
        return Err(EngineError::NonFinitePrice { index: 0 });
    }

    debug!(
        intraday_len = intraday.len(),
        long_term_len = long_term.len(),
        price = quote.price,
        "Building indicator snapshot"
    );

    let prices = &intraday.prices;
    let daily = &long_term.prices;

    // Zero volume leaves VWAP undefined; pin it to price so neither side of
    // the VWAP comparison fires.
    let vwap = indicators::vwap(prices, &intraday.volumes).unwrap_or(quote.price);
    let macd = indicators::macd(daily);

    Ok(IndicatorSnapshot {
        price: quote.price,
        previous_close: quote
            .previous_close
            .filter(|close| close.is_finite() && *close != 0.0),
        volume: intraday.last_volume().unwrap_or(0.0),
        average_volume5: trailing_average(&intraday.volumes, SHORT_VOLUME_WINDOW),
        rsi: indicators::rsi14(prices),
        vwap,
        ema9: indicators::ema(prices, 9),
        ema21: indicators::ema(prices, 21),
        ema50: indicators::ema(daily, 50),
        ema200: indicators::ema(daily, 200),
        macd_line: macd.line,
        macd_signal: macd.signal,
        support_levels: support_levels(daily),
        resistance_levels: resistance_levels(daily),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::signals::indicators::NEUTRAL_RSI;

    fn series(count: usize, start: f64, step: f64) -> PriceVolumeSeries {
        PriceVolumeSeries::new(
            (0..count).map(|i| start + i as f64 * step).collect(),
            (0..count).map(|i| 1000.0 + (i % 4) as f64 * 100.0).collect(),
        )
    }

    #[test]
    fn test_build_snapshot_basic_fields() {
        let intraday = series(78, 100.0, 0.1);
        let daily = series(250, 80.0, 0.2);
        let snap = build_snapshot(&intraday, &daily).unwrap();

        assert_eq!(snap.price, intraday.last_price().unwrap());
        assert_eq!(snap.volume, intraday.last_volume().unwrap());
        assert!(snap.previous_close.is_none());
        assert!(snap.ema9 > snap.ema21);
        assert!(snap.ema50 > snap.ema200);
        assert!(snap.macd_line > 0.0);
    }

    #[test]
    fn test_build_snapshot_average_volume_last_five() {
        let intraday = PriceVolumeSeries::new(
            vec![1.0; 7],
            vec![1.0, 1.0, 10.0, 20.0, 30.0, 40.0, 50.0],
        );
        let snap = build_snapshot(&intraday, &PriceVolumeSeries::default()).unwrap();
        assert_eq!(snap.average_volume5, 30.0);
        assert_eq!(snap.volume, 50.0);
    }

    #[test]
    fn test_build_snapshot_average_volume_fewer_than_five() {
        let intraday = PriceVolumeSeries::new(vec![1.0, 2.0], vec![10.0, 30.0]);
        let snap = build_snapshot(&intraday, &PriceVolumeSeries::default()).unwrap();
        assert_eq!(snap.average_volume5, 20.0);
    }

    #[test]
    fn test_build_snapshot_empty_series_fallbacks() {
        let empty = PriceVolumeSeries::default();
        let snap = build_snapshot(&empty, &empty).unwrap();

        assert_eq!(snap.price, 0.0);
        assert_eq!(snap.volume, 0.0);
        assert_eq!(snap.average_volume5, 0.0);
        assert_eq!(snap.rsi, NEUTRAL_RSI);
        assert_eq!(snap.macd_line, 0.0);
        assert_eq!(snap.macd_signal, 0.0);
        assert!(snap.support_levels.is_empty());
        assert!(snap.vwap.is_finite());
    }

    #[test]
    fn test_build_snapshot_zero_volume_vwap_pins_to_price() {
        let intraday = PriceVolumeSeries::new(vec![100.0, 101.0, 102.0], vec![0.0; 3]);
        let snap = build_snapshot(&intraday, &PriceVolumeSeries::default()).unwrap();
        assert_eq!(snap.vwap, snap.price);
    }

    #[test]
    fn test_build_snapshot_rejects_mismatched_lengths() {
        let bad = PriceVolumeSeries::new(vec![1.0, 2.0], vec![1.0]);
        let good = series(10, 1.0, 1.0);

        assert_eq!(
            build_snapshot(&bad, &good),
            Err(EngineError::SeriesLengthMismatch {
                prices: 2,
                volumes: 1
            })
        );
        assert!(build_snapshot(&good, &bad).is_err());
    }

    #[test]
    fn test_build_snapshot_with_quote() {
        let intraday = series(30, 100.0, 0.5);
        let daily = series(60, 90.0, 0.3);
        let snap =
            build_snapshot_with_quote(Quote::new(120.0, Some(110.0)), &intraday, &daily).unwrap();

        assert_eq!(snap.price, 120.0);
        assert_eq!(snap.previous_close, Some(110.0));
    }

    #[test]
    fn test_build_snapshot_zero_previous_close_is_absent() {
        let intraday = series(5, 100.0, 1.0);
        let snap = build_snapshot_with_quote(
            Quote::new(100.0, Some(0.0)),
            &intraday,
            &PriceVolumeSeries::default(),
        )
        .unwrap();
        assert!(snap.previous_close.is_none());
    }

    #[test]
    fn test_build_snapshot_rejects_non_finite_quote() {
        let empty = PriceVolumeSeries::default();
        assert!(build_snapshot_with_quote(Quote::new(f64::NAN, None), &empty, &empty).is_err());
    }

    #[test]
    fn test_build_snapshot_is_deterministic() {
        let intraday = series(78, 100.0, -0.07);
        let daily = series(250, 80.0, 0.13);
        let first = build_snapshot(&intraday, &daily).unwrap();
        let second = build_snapshot(&intraday, &daily).unwrap();

        assert_eq!(first.rsi.to_bits(), second.rsi.to_bits());
        assert_eq!(first.macd_signal.to_bits(), second.macd_signal.to_bits());
        assert_eq!(first, second);
    }
}
