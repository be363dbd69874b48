//! Shared building blocks for the rule evaluators.

use crate::types::{ExitLevels, IndicatorSnapshot, SignalType};

/// One named condition over a snapshot.
#[derive(Clone, Copy)]
pub struct Rule {
    pub predicate: fn(&IndicatorSnapshot) -> bool,
    pub reason: &'static str,
}

impl Rule {
    pub const fn new(reason: &'static str, predicate: fn(&IndicatorSnapshot) -> bool) -> Self {
        Self { predicate, reason }
    }

    pub fn holds(&self, snapshot: &IndicatorSnapshot) -> bool {
        (self.predicate)(snapshot)
    }
}

/// True when every rule holds.
pub fn all_hold(rules: &[Rule], snapshot: &IndicatorSnapshot) -> bool {
    rules.iter().all(|rule| rule.holds(snapshot))
}

/// Reasons of the rules that hold, in rule order.
pub fn triggered_reasons(rules: &[Rule], snapshot: &IndicatorSnapshot) -> Vec<&'static str> {
    rules
        .iter()
        .filter(|rule| rule.holds(snapshot))
        .map(|rule| rule.reason)
        .collect()
}

/// Target and stop-loss multipliers for each direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExitPolicy {
    pub buy_target: f64,
    pub buy_stop: f64,
    pub sell_target: f64,
    pub sell_stop: f64,
}

impl ExitPolicy {
    /// Exit levels for `signal_type` at `price`, rounded to cents.
    pub fn levels(&self, signal_type: SignalType, price: f64) -> ExitLevels {
        let (target, stop) = match signal_type {
            SignalType::Buy => (self.buy_target, self.buy_stop),
            _ => (self.sell_target, self.sell_stop),
        };

        ExitLevels {
            target: round_cents(price * target),
            stop_loss: round_cents(price * stop),
        }
    }
}

/// Round to two decimal places from the exact binary value.
pub fn round_cents(value: f64) -> f64 {
    to_fixed(value, 2).parse().unwrap_or(value)
}

/// Format with `digits` decimals, rounding the exact binary value and
/// breaking exact ties away from zero.
pub fn to_fixed(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    // Normalize -0.0 so it never prints with a sign.
    let value = if value == 0.0 { 0.0 } else { value };

    // A tie at `digits` decimals is exactly j / 2^(digits + 1) with j odd.
    let scaled = value * 2f64.powi(digits as i32 + 1);
    if scaled.fract() == 0.0 && scaled % 2.0 != 0.0 {
        let pow = 10f64.powi(digits as i32);
        return format!("{:.*}", digits, (value * pow).round() / pow);
    }

    format!("{:.*}", digits, value)
}
