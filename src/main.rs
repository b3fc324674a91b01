use growstox::config::Config;
use growstox::sources::YahooFinanceClient;
use growstox::{app, AppState};
use std::sync::Arc;
use std::time::Duration;
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
                .unwrap_or_else(|_| "growstox=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env();
    info!("Starting GrowStox server on {}:{}", config.host, config.port);
    info!(
        "Forecasting {} days from {} of history, next-day predictor uses {}",
        config.forecast.default_horizon,
        config.forecast.forecast_period,
        config.forecast.predictor_period
    );

    let yahoo = YahooFinanceClient::new(
        config.yahoo_base_url.clone(),
        Duration::from_secs(config.yahoo_timeout_secs),
    )?;

    let addr = format!("{}:{}", config.host, config.port);
    let state = AppState::new(config, Arc::new(yahoo));

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("GrowStox server listening on {}", addr);

    axum::serve(listener, app(state)).await?;

    Ok(())
}
