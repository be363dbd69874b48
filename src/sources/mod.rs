//! Decoders for upstream market data payloads.

pub mod yahoo;

pub use yahoo::{ChartFeed, YahooChartResponse};
