//! Intraday rule set: momentum, VWAP and volume-spike conditions.

use tracing::debug;

use super::rules::{all_hold, triggered_reasons, ExitPolicy, Rule};
use crate::types::{IndicatorSnapshot, Signal, SignalType};

/// Volume must exceed the 5-sample average by this factor to count as a spike.
pub const VOLUME_SPIKE_FACTOR: f64 = 1.8;

/// 0.8% target, 0.4% stop.
pub const INTRADAY_EXITS: ExitPolicy = ExitPolicy {
    buy_target: 1.008,
    buy_stop: 0.996,
    sell_target: 0.992,
    sell_stop: 1.004,
};

fn rsi_oversold(s: &IndicatorSnapshot) -> bool {
    s.rsi < 35.0
}

fn above_vwap(s: &IndicatorSnapshot) -> bool {
    s.price > s.vwap
}

fn volume_spike(s: &IndicatorSnapshot) -> bool {
    s.volume > s.average_volume5 * VOLUME_SPIKE_FACTOR
}

fn fast_above_slow(s: &IndicatorSnapshot) -> bool {
    s.ema9 > s.ema21
}

fn rsi_overbought(s: &IndicatorSnapshot) -> bool {
    s.rsi > 65.0
}

fn below_vwap(s: &IndicatorSnapshot) -> bool {
    s.price < s.vwap
}

fn fast_below_slow(s: &IndicatorSnapshot) -> bool {
    s.ema9 < s.ema21
}

/// All must hold for a BUY.
pub const BUY_RULES: [Rule; 4] = [
    Rule::new("RSI below 35", rsi_oversold),
    Rule::new("Price above VWAP", above_vwap),
    Rule::new("Volume > 1.8× 5-min average", volume_spike),
    Rule::new("EMA(9) above EMA(21)", fast_above_slow),
];

/// Any one triggers a SELL.
pub const SELL_RULES: [Rule; 3] = [
    Rule::new("RSI above 65", rsi_overbought),
    Rule::new("Price below VWAP", below_vwap),
    Rule::new("EMA(9) below EMA(21)", fast_below_slow),
];

/// Classify a snapshot with the intraday rules.
///
/// The SELL check runs after the BUY check and wins whenever any SELL rule
/// fires; its reasons are appended after the BUY reasons.
pub fn evaluate_intraday(snapshot: &IndicatorSnapshot) -> Signal {
    let mut signal_type = SignalType::Hold;
    let mut reasons: Vec<String> = Vec::new();

    if all_hold(&BUY_RULES, snapshot) {
        signal_type = SignalType::Buy;
        reasons.extend(BUY_RULES.iter().map(|rule| rule.reason.to_string()));
    }

    let sell_reasons = triggered_reasons(&SELL_RULES, snapshot);
    if !sell_reasons.is_empty() {
        signal_type = SignalType::Sell;
        reasons.extend(sell_reasons.into_iter().map(String::from));
    }

    debug!(
        signal = %signal_type,
        reasons = reasons.len(),
        "Intraday evaluation"
    );

    let exits = INTRADAY_EXITS.levels(signal_type, snapshot.price);
    Signal::new(signal_type, snapshot.price, exits, reasons)
}
