use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Parallel price/volume samples in chronological order.
///
/// Index `i` of `prices` and `volumes` describe the same sample. Callers hand
/// the engine series with gaps already removed; [`PriceVolumeSeries::validate`]
/// enforces that precondition.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceVolumeSeries {
    pub prices: Vec<f64>,
    pub volumes: Vec<f64>,
}

impl PriceVolumeSeries {
    pub fn new(prices: Vec<f64>, volumes: Vec<f64>) -> Self {
        Self { prices, volumes }
    }

    /// Build a series from raw samples that may contain gaps.
    ///
    /// A sample is kept only when both its price and volume are present and
    /// usable, so the two sides stay index-aligned.
    pub fn from_samples<I>(samples: I) -> Self
    where
        I: IntoIterator<Item = (Option<f64>, Option<f64>)>,
    {
        let (prices, volumes) = samples
            .into_iter()
            .filter_map(|(price, volume)| match (price, volume) {
                (Some(p), Some(v)) if p.is_finite() && v.is_finite() && v >= 0.0 => Some((p, v)),
                _ => None,
            })
            .unzip();

        Self { prices, volumes }
    }

    /// Check the series is index-aligned and free of invalid samples.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.prices.len() != self.volumes.len() {
            return Err(EngineError::SeriesLengthMismatch {
                prices: self.prices.len(),
                volumes: self.volumes.len(),
            });
        }

        if let Some(index) = self.prices.iter().position(|p| !p.is_finite()) {
            return Err(EngineError::NonFinitePrice { index });
        }

        if let Some(index) = self
            .volumes
            .iter()
            .position(|v| !v.is_finite() || *v < 0.0)
        {
            return Err(EngineError::InvalidVolume { index });
        }

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Most recent price, if any.
    pub fn last_price(&self) -> Option<f64> {
        self.prices.last().copied()
    }

    /// Most recent volume, if any.
    pub fn last_volume(&self) -> Option<f64> {
        self.volumes.last().copied()
    }
}

/// Live quote accompanying a series: the latest traded price and the prior
/// session's close.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub previous_close: Option<f64>,
}

impl Quote {
    pub fn new(price: f64, previous_close: Option<f64>) -> Self {
        Self {
            price,
            previous_close,
        }
    }
}
