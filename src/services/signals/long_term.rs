//! Long-term rule set: EMA(50/200) trend plus MACD confirmation.

use tracing::debug;

use super::rules::{to_fixed, ExitPolicy};
use crate::types::{IndicatorSnapshot, Signal, SignalType};

/// Currency prefix used when none is configured.
pub const DEFAULT_CURRENCY: &str = "₹";

/// 2% target, 1% stop.
pub const LONG_TERM_EXITS: ExitPolicy = ExitPolicy {
    buy_target: 1.02,
    buy_stop: 0.99,
    sell_target: 0.98,
    sell_stop: 1.01,
};

/// EMA separation (percent) beyond which a trend counts as strong.
const STRONG_TREND_PCT: f64 = 5.0;
/// EMA separation (percent) below which the averages are consolidating.
const CONSOLIDATION_PCT: f64 = 1.0;
/// MACD spread below which momentum is sideways.
const SIDEWAYS_SPREAD: f64 = 0.1;

/// Percentage separation of EMA(50) from EMA(200). Zero when EMA(200) is zero.
pub fn ema_diff_pct(snapshot: &IndicatorSnapshot) -> f64 {
    if snapshot.ema200 == 0.0 {
        return 0.0;
    }
    (snapshot.ema50 - snapshot.ema200) / snapshot.ema200 * 100.0
}

/// Classify a snapshot with the long-term rules, using the default currency
/// prefix for price levels.
pub fn evaluate_long_term(snapshot: &IndicatorSnapshot) -> Signal {
    evaluate_long_term_with_currency(snapshot, DEFAULT_CURRENCY)
}

/// Classify a snapshot with the long-term rules.
pub fn evaluate_long_term_with_currency(snapshot: &IndicatorSnapshot, currency: &str) -> Signal {
    let ema_diff = ema_diff_pct(snapshot);
    let macd_diff = snapshot.macd_line - snapshot.macd_signal;
    let mut reasons: Vec<String> = Vec::new();

    let signal_type = if snapshot.ema50 > snapshot.ema200
        && snapshot.macd_line > snapshot.macd_signal
    {
        reasons.push(format!("50 EMA above 200 EMA ({}% difference)", to_fixed(ema_diff, 2)));
        reasons.push(format!("MACD bullish ({} spread)", to_fixed(macd_diff, 3)));
        if ema_diff > STRONG_TREND_PCT {
            reasons.push("Strong upward trend".to_string());
        }
        SignalType::Buy
    } else if snapshot.ema50 < snapshot.ema200 && snapshot.macd_line < snapshot.macd_signal {
        reasons.push(format!("50 EMA below 200 EMA ({}% difference)", to_fixed(ema_diff.abs(), 2)));
        reasons.push(format!("MACD bearish ({} spread)", to_fixed(macd_diff.abs(), 3)));
        if ema_diff < -STRONG_TREND_PCT {
            reasons.push("Strong downward trend".to_string());
        }
        SignalType::Sell
    } else {
        if ema_diff.abs() < CONSOLIDATION_PCT {
            reasons.push("EMAs in consolidation phase".to_string());
        }
        if macd_diff.abs() < SIDEWAYS_SPREAD {
            reasons.push("MACD showing sideways movement".to_string());
        }
        reasons.push("Neutral trend - await clear signal".to_string());
        SignalType::Hold
    };

    if let Some(support) = snapshot.nearest_support() {
        reasons.push(format!("Nearest support: {}{}", currency, support));
    }
    if let Some(resistance) = snapshot.nearest_resistance() {
        reasons.push(format!("Nearest resistance: {}{}", currency, resistance));
    }

    debug!(
        signal = %signal_type,
        ema_diff,
        macd_diff,
        reasons = reasons.len(),
        "Long-term evaluation"
    );

    let exits = LONG_TERM_EXITS.levels(signal_type, snapshot.price);
    Signal::new(signal_type, snapshot.price, exits, reasons)
}
