//! Signal API endpoints.

use axum::{extract::State, routing::post, Json, Router};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{AppError, Result};
use crate::services::signals::build_snapshot_with_quote;
use crate::services::signals::indicators::ema_series;
use crate::sources::YahooChartResponse;
use crate::types::{EvaluationMode, IndicatorSnapshot, PriceVolumeSeries, Quote, Signal};
use crate::AppState;

/// API response wrapper.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub data: T,
}

impl<T> ApiResponse<T> {
    fn new(data: T) -> Self {
        Self { data }
    }
}

/// Request body carrying pre-cleaned series.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EvaluateRequest {
    pub intraday: PriceVolumeSeries,
    pub long_term: PriceVolumeSeries,
    #[serde(default)]
    pub quote: Option<Quote>,
    /// "intraday" or "long_term"; defaults to the market clock's choice.
    #[serde(default)]
    pub mode: Option<String>,
}

/// Request body carrying raw chart payloads.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRequest {
    pub intraday: YahooChartResponse,
    pub long_term: YahooChartResponse,
    #[serde(default)]
    pub mode: Option<String>,
}

/// Running intraday EMAs for drawing alongside the price chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartOverlays {
    pub ema9: Vec<f64>,
    pub ema21: Vec<f64>,
}

impl ChartOverlays {
    fn from_prices(prices: &[f64]) -> Self {
        Self {
            ema9: ema_series(prices, 9),
            ema21: ema_series(prices, 21),
        }
    }
}

/// Snapshot plus the signal derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub mode: EvaluationMode,
    pub snapshot: IndicatorSnapshot,
    pub signal: Signal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overlays: Option<ChartOverlays>,
}

/// Create the signals router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/evaluate", post(evaluate_series))
        .route("/chart", post(evaluate_chart))
}

fn resolve_mode(state: &AppState, requested: Option<&str>) -> Result<EvaluationMode> {
    match requested {
        Some(raw) => EvaluationMode::from_str(raw).ok_or_else(|| {
            warn!("Rejected unknown evaluation mode {}", raw);
            AppError::BadRequest(format!("Unknown mode: {}", raw))
        }),
        None => Ok(state.clock.mode_at(chrono::Utc::now())),
    }
}

fn run(
    state: &AppState,
    mode: EvaluationMode,
    quote: Quote,
    intraday: &PriceVolumeSeries,
    long_term: &PriceVolumeSeries,
) -> Result<Evaluation> {
    let snapshot = build_snapshot_with_quote(quote, intraday, long_term).map_err(|e| {
        warn!("Rejected series: {}", e);
        e
    })?;
    let signal = state.engine.evaluate(mode, &snapshot);

    Ok(Evaluation {
        mode,
        snapshot,
        signal,
        overlays: None,
    })
}

/// Evaluate already-cleaned price/volume series.
async fn evaluate_series(
    State(state): State<AppState>,
    Json(request): Json<EvaluateRequest>,
) -> Result<Json<ApiResponse<Evaluation>>> {
    let mode = resolve_mode(&state, request.mode.as_deref())?;

    let quote = match request.quote {
        Some(quote) => quote,
        None => {
            let price = request
                .intraday
                .last_price()
                .or_else(|| request.long_term.last_price())
                .unwrap_or(0.0);
            Quote::new(price, None)
        }
    };

    let evaluation = run(&state, mode, quote, &request.intraday, &request.long_term)?;
    Ok(Json(ApiResponse::new(evaluation)))
}

/// Decode raw chart payloads and evaluate them.
async fn evaluate_chart(
    State(state): State<AppState>,
    Json(request): Json<ChartRequest>,
) -> Result<Json<ApiResponse<Evaluation>>> {
    let mode = resolve_mode(&state, request.mode.as_deref())?;

    let intraday = request.intraday.into_feed()?;
    // Only the intraday payload supplies the quote.
    let long_term = request.long_term.into_series()?;

    let mut evaluation = run(&state, mode, intraday.quote, &intraday.series, &long_term)?;
    evaluation.overlays = Some(ChartOverlays::from_prices(&intraday.series.prices));
    Ok(Json(ApiResponse::new(evaluation)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn state() -> AppState {
        AppState::new(Config {
            host: "127.0.0.1".to_string(),
            port: 0,
            market_offset: crate::config::parse_utc_offset("+05:30").unwrap(),
            intraday_refresh_secs: 300,
            long_term_refresh_secs: 3600,
            currency_symbol: "₹".to_string(),
        })
    }

    #[test]
    fn test_resolve_mode_explicit() {
        let state = state();
        assert_eq!(
            resolve_mode(&state, Some("long_term")).unwrap(),
            EvaluationMode::LongTerm
        );
        assert!(matches!(
            resolve_mode(&state, Some("hourly")),
            Err(AppError::BadRequest(_))
        ));
    }

    #[tokio::test]
    async fn test_evaluate_series_handler() {
        let request = EvaluateRequest {
            intraday: PriceVolumeSeries::new(vec![100.0, 101.0, 99.0], vec![10.0, 10.0, 10.0]),
            long_term: PriceVolumeSeries::default(),
            quote: None,
            mode: Some("intraday".to_string()),
        };

        let Json(response) = evaluate_series(State(state()), Json(request)).await.unwrap();
        assert_eq!(response.data.mode, EvaluationMode::Intraday);
        assert_eq!(response.data.snapshot.price, 99.0);
    }

    #[tokio::test]
    async fn test_evaluate_series_rejects_mismatch() {
        let request = EvaluateRequest {
            intraday: PriceVolumeSeries::new(vec![100.0, 101.0], vec![10.0]),
            long_term: PriceVolumeSeries::default(),
            quote: None,
            mode: Some("intraday".to_string()),
        };

        let result = evaluate_series(State(state()), Json(request)).await;
        assert!(matches!(result, Err(AppError::Engine(_))));
    }
}
