//! Trading signals service module.
//!
//! Provides technical indicator calculations, snapshot assembly and the
//! intraday and long-term rule evaluators.

pub mod indicators;
pub mod intraday;
pub mod long_term;
pub mod rules;
pub mod snapshot;

pub use intraday::evaluate_intraday;
pub use long_term::{evaluate_long_term, evaluate_long_term_with_currency};
pub use snapshot::{build_snapshot, build_snapshot_with_quote};

use crate::config::Config;
use crate::types::{EvaluationMode, IndicatorSnapshot, Signal};

/// Rule evaluator bound to display settings.
#[derive(Debug, Clone)]
pub struct SignalEngine {
    currency_symbol: String,
}

impl Default for SignalEngine {
    fn default() -> Self {
        Self {
            currency_symbol: long_term::DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl SignalEngine {
    pub fn new(config: &Config) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
        }
    }

    /// Evaluate a snapshot with the rule set for `mode`.
    pub fn evaluate(&self, mode: EvaluationMode, snapshot: &IndicatorSnapshot) -> Signal {
        match mode {
            EvaluationMode::Intraday => evaluate_intraday(snapshot),
            EvaluationMode::LongTerm => {
                evaluate_long_term_with_currency(snapshot, &self.currency_symbol)
            }
        }
    }
}

/// Evaluate with the default engine.
pub fn evaluate(mode: EvaluationMode, snapshot: &IndicatorSnapshot) -> Signal {
    SignalEngine::default().evaluate(mode, snapshot)
}

/// Whether `current` deserves a fresh alert given the last alerted signal.
///
/// HOLD never alerts; otherwise alert when the direction changed.
pub fn should_alert(previous: Option<&Signal>, current: &Signal) -> bool {
    current.is_actionable()
        && previous.map_or(true, |last| last.signal_type != current.signal_type)
}
