//! GrowStox - stock price forecasting and comparison dashboard server

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod sources;
pub mod types;

use axum::Router;
use config::Config;
use services::{ComparisonService, HistoryService, PredictionService};
use sources::PriceHistoryProvider;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
///
/// Holds only immutable configuration and service handles; nothing here
/// changes between requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub predictions: Arc<PredictionService>,
    pub comparison: Arc<ComparisonService>,
    pub provider_name: &'static str,
}

impl AppState {
    /// Wire the services around a history provider.
    pub fn new(config: Config, provider: Arc<dyn PriceHistoryProvider>) -> Self {
        let provider_name = provider.name();
        let history = Arc::new(HistoryService::new(provider));
        let predictions = Arc::new(PredictionService::new(
            history.clone(),
            config.forecast.clone(),
        ));
        let comparison = Arc::new(ComparisonService::new(history, config.compare.clone()));

        Self {
            config: Arc::new(config),
            predictions,
            comparison,
            provider_name,
        }
    }
}

/// Build the full HTTP application.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Re-export commonly used types
pub use services::{forecast, predict_next, ForecastError};
pub use types::*;
