use hawkeye::config::Config;
use hawkeye::AppState;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hawkeye=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!(
        "Starting Hawkeye on {}:{} (market offset {})",
        config.host, config.port, config.market_offset
    );

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(config);

    let status = state.clock.status_at(chrono::Utc::now(), &state.config);
    info!(
        "Market mode: {} (refresh every {}s)",
        status.mode.name(),
        status.refresh_secs
    );

    // Build CORS layer
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = state
        .into_router()
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Hawkeye listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
