//! Unit tests for types module

use hawkeye::types::*;
use hawkeye::EngineError;

#[test]
fn test_signal_type_display() {
    assert_eq!(format!("{}", SignalType::Buy), "BUY");
    assert_eq!(format!("{}", SignalType::Sell), "SELL");
    assert_eq!(format!("{}", SignalType::Hold), "HOLD");
}

#[test]
fn test_signal_type_serialization() {
    let json = serde_json::to_string(&SignalType::Sell).unwrap();
    assert_eq!(json, "\"SELL\"");

    let parsed: SignalType = serde_json::from_str("\"BUY\"").unwrap();
    assert_eq!(parsed, SignalType::Buy);
}

#[test]
fn test_actionable_signal_wire_format() {
    let signal = Signal::new(
        SignalType::Buy,
        105.0,
        ExitLevels {
            target: 105.84,
            stop_loss: 104.58,
        },
        vec!["RSI below 35".to_string()],
    );

    let json = serde_json::to_value(&signal).unwrap();
    assert_eq!(json["signalType"], "BUY");
    assert_eq!(json["entryPrice"], 105.0);
    assert_eq!(json["target"], 105.84);
    assert_eq!(json["stopLoss"], 104.58);
    assert_eq!(json["reason"][0], "RSI below 35");
}

#[test]
fn test_signal_new_drops_exits_for_hold() {
    let signal = Signal::new(
        SignalType::Hold,
        50.0,
        ExitLevels {
            target: 51.0,
            stop_loss: 49.0,
        },
        vec![],
    );

    assert!(signal.target().is_none());
    assert!(signal.stop_loss().is_none());
    assert!(!signal.is_actionable());

    let json = serde_json::to_value(&signal).unwrap();
    assert!(json.get("target").is_none());
    assert!(json.get("stopLoss").is_none());
}

#[test]
fn test_evaluation_mode_round_trip_names() {
    let parsed: EvaluationMode = serde_json::from_str("\"long_term\"").unwrap();
    assert_eq!(parsed, EvaluationMode::LongTerm);
    assert_eq!(EvaluationMode::from_str("Intraday"), Some(EvaluationMode::Intraday));
    assert_eq!(EvaluationMode::Intraday.name(), "Intraday");
    assert_eq!(EvaluationMode::LongTerm.name(), "Long Term");
}

#[test]
fn test_series_from_samples_keeps_alignment() {
    let series = PriceVolumeSeries::from_samples(vec![
        (Some(10.0), Some(100.0)),
        (None, Some(50.0)),
        (Some(11.0), None),
        (Some(f64::NAN), Some(10.0)),
        (Some(12.0), Some(-1.0)),
        (Some(13.0), Some(0.0)),
    ]);

    assert_eq!(series.prices, vec![10.0, 13.0]);
    assert_eq!(series.volumes, vec![100.0, 0.0]);
    assert!(series.validate().is_ok());
}

#[test]
fn test_series_validate_errors() {
    let mismatched = PriceVolumeSeries::new(vec![1.0, 2.0], vec![1.0]);
    assert_eq!(
        mismatched.validate(),
        Err(EngineError::SeriesLengthMismatch {
            prices: 2,
            volumes: 1
        })
    );

    let bad_price = PriceVolumeSeries::new(vec![1.0, f64::INFINITY], vec![1.0, 1.0]);
    assert_eq!(
        bad_price.validate(),
        Err(EngineError::NonFinitePrice { index: 1 })
    );

    let bad_volume = PriceVolumeSeries::new(vec![1.0, 2.0], vec![-5.0, 1.0]);
    assert_eq!(
        bad_volume.validate(),
        Err(EngineError::InvalidVolume { index: 0 })
    );
}

#[test]
fn test_series_deserialize_camel_case() {
    let series: PriceVolumeSeries =
        serde_json::from_str(r#"{"prices": [1.5, 2.5], "volumes": [10, 20]}"#).unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series.last_price(), Some(2.5));
    assert_eq!(series.last_volume(), Some(20.0));
}

#[test]
fn test_snapshot_nearest_levels_and_change() {
    let snapshot = IndicatorSnapshot {
        price: 110.0,
        previous_close: Some(100.0),
        volume: 0.0,
        average_volume5: 0.0,
        rsi: 50.0,
        vwap: 110.0,
        ema9: 0.0,
        ema21: 0.0,
        ema50: 0.0,
        ema200: 0.0,
        macd_line: 0.0,
        macd_signal: 0.0,
        support_levels: vec![95.0, 105.0, 110.0],
        resistance_levels: vec![108.0, 115.0, 120.0],
    };

    assert_eq!(snapshot.nearest_support(), Some(105.0));
    assert_eq!(snapshot.nearest_resistance(), Some(115.0));
    let change = snapshot.change_pct().unwrap();
    assert!((change - 10.0).abs() < 1e-9);
}

#[test]
fn test_snapshot_omits_missing_previous_close() {
    let snapshot = IndicatorSnapshot {
        price: 1.0,
        previous_close: None,
        volume: 0.0,
        average_volume5: 0.0,
        rsi: 50.0,
        vwap: 1.0,
        ema9: 0.0,
        ema21: 0.0,
        ema50: 0.0,
        ema200: 0.0,
        macd_line: 0.0,
        macd_signal: 0.0,
        support_levels: vec![],
        resistance_levels: vec![],
    };

    let json = serde_json::to_value(&snapshot).unwrap();
    assert!(json.get("previousClose").is_none());
    assert_eq!(json["averageVolume5"], 0.0);
    assert!(snapshot.change_pct().is_none());
}
