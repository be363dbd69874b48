//! Decoder for Yahoo Finance chart payloads.
//!
//! The acquisition layer hands over raw `v8/finance/chart` JSON; this module
//! turns it into a live [`Quote`] and a gap-free [`PriceVolumeSeries`].

use serde::Deserialize;
use tracing::debug;

use crate::error::EngineError;
use crate::types::{PriceVolumeSeries, Quote};

/// Yahoo Finance chart response.
#[derive(Debug, Clone, Deserialize)]
pub struct YahooChartResponse {
    chart: YahooChart,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooChart {
    result: Option<Vec<YahooResult>>,
    error: Option<YahooError>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooError {
    code: String,
    description: String,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooResult {
    meta: YahooMeta,
    indicators: YahooIndicators,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct YahooMeta {
    #[serde(default)]
    symbol: Option<String>,
    regular_market_price: Option<f64>,
    previous_close: Option<f64>,
    chart_previous_close: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooIndicators {
    quote: Vec<YahooQuote>,
}

#[derive(Debug, Clone, Deserialize)]
struct YahooQuote {
    close: Option<Vec<Option<f64>>>,
    volume: Option<Vec<Option<f64>>>,
}

/// Decoded chart: live quote plus cleaned series.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartFeed {
    pub symbol: Option<String>,
    pub quote: Quote,
    pub series: PriceVolumeSeries,
}

impl YahooChartResponse {
    /// Parse a raw JSON payload.
    pub fn from_json(raw: &str) -> Result<Self, EngineError> {
        serde_json::from_str(raw).map_err(|e| EngineError::Feed(e.to_string()))
    }

    /// Extract the quote and a gap-free series.
    ///
    /// Samples missing either close or volume are dropped together. The quote
    /// price defaults to the last close when the payload has no market price.
    pub fn into_feed(self) -> Result<ChartFeed, EngineError> {
        let (meta, series) = self.decode()?;
        let symbol = meta.symbol;
        let price = meta
            .regular_market_price
            .or_else(|| series.last_price())
            .ok_or_else(|| {
                EngineError::EmptyFeed(symbol.clone().unwrap_or_else(|| "unknown".to_string()))
            })?;

        Ok(ChartFeed {
            symbol,
            quote: Quote::new(price, meta.previous_close.or(meta.chart_previous_close)),
            series,
        })
    }

    /// Extract only the gap-free series. A payload with no usable samples
    /// yields an empty series rather than an error.
    pub fn into_series(self) -> Result<PriceVolumeSeries, EngineError> {
        self.decode().map(|(_, series)| series)
    }

    fn decode(self) -> Result<(YahooMeta, PriceVolumeSeries), EngineError> {
        if let Some(error) = self.chart.error {
            return Err(EngineError::Feed(format!(
                "{}: {}",
                error.code, error.description
            )));
        }

        let result = self
            .chart
            .result
            .and_then(|results| results.into_iter().next())
            .ok_or_else(|| EngineError::Feed("No chart result in response".to_string()))?;

        let quote = result
            .indicators
            .quote
            .into_iter()
            .next()
            .ok_or_else(|| EngineError::Feed("No quote data in response".to_string()))?;

        let closes = quote.close.unwrap_or_default();
        let volumes = quote.volume.unwrap_or_default();
        let raw_len = closes.len();

        let series = PriceVolumeSeries::from_samples(
            closes
                .into_iter()
                .zip(volumes.into_iter().chain(std::iter::repeat(None))),
        );

        debug!(
            symbol = result.meta.symbol.as_deref().unwrap_or("unknown"),
            raw = raw_len,
            kept = series.len(),
            "Decoded chart feed"
        );

        Ok((result.meta, series))
    }
}
