//! Hawkeye - technical indicator and trading signal engine for equities.
//!
//! Turns an intraday and a daily price/volume series into an
//! [`IndicatorSnapshot`](types::IndicatorSnapshot) and classifies it into a
//! BUY/SELL/HOLD [`Signal`](types::Signal).

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod sources;
pub mod types;

use config::Config;
use services::{MarketClock, SignalEngine};
use std::sync::Arc;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub clock: MarketClock,
    pub engine: Arc<SignalEngine>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            clock: MarketClock::from_config(&config),
            engine: Arc::new(SignalEngine::new(&config)),
            config: Arc::new(config),
        }
    }

    /// Build the HTTP application for this state.
    pub fn into_router(self) -> axum::Router {
        api::router().with_state(self)
    }
}

// Re-export commonly used types
pub use error::{AppError, EngineError};
pub use types::*;
