use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete trading recommendation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SignalType {
    Buy,
    Sell,
    Hold,
}

impl SignalType {
    pub fn label(&self) -> &'static str {
        match self {
            SignalType::Buy => "BUY",
            SignalType::Sell => "SELL",
            SignalType::Hold => "HOLD",
        }
    }
}

impl fmt::Display for SignalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Exit levels attached to an actionable signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExitLevels {
    pub target: f64,
    pub stop_loss: f64,
}

/// Output of a signal evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Signal {
    pub signal_type: SignalType,
    pub price: f64,
    pub entry_price: f64,
    /// Present exactly when the signal is not HOLD.
    #[serde(flatten)]
    pub exits: Option<ExitLevels>,
    /// Triggering and contextual conditions, in evaluation order.
    #[serde(rename = "reason")]
    pub reasons: Vec<String>,
}

impl Signal {
    /// Build a signal, attaching exits only for BUY/SELL.
    pub fn new(
        signal_type: SignalType,
        price: f64,
        exits: ExitLevels,
        reasons: Vec<String>,
    ) -> Self {
        if signal_type == SignalType::Hold {
            return Self::hold(price, reasons);
        }

        Self {
            signal_type,
            price,
            entry_price: price,
            exits: Some(exits),
            reasons,
        }
    }

    /// A HOLD signal, which never carries exits.
    pub fn hold(price: f64, reasons: Vec<String>) -> Self {
        Self {
            signal_type: SignalType::Hold,
            price,
            entry_price: price,
            exits: None,
            reasons,
        }
    }

    pub fn target(&self) -> Option<f64> {
        self.exits.map(|e| e.target)
    }

    pub fn stop_loss(&self) -> Option<f64> {
        self.exits.map(|e| e.stop_loss)
    }

    pub fn is_actionable(&self) -> bool {
        self.signal_type != SignalType::Hold
    }
}
