pub mod compare;
pub mod dashboard;
pub mod forecast;
pub mod health;
pub mod newsletter;

use crate::AppState;
use axum::Router;
use serde::Serialize;

/// API response wrapper matching frontend expectations.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub meta: ApiMeta,
}

#[derive(Debug, Serialize)]
pub struct ApiMeta {
    pub cached: bool,
}

impl<T> ApiResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            data,
            meta: ApiMeta { cached: false },
        }
    }
}

/// Create the API router.
pub fn router() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .merge(dashboard::router())
        .nest("/api/forecast", forecast::forecast_router())
        .nest("/api/predict", forecast::predict_router())
        .nest("/api/compare", compare::router())
        .nest("/api/newsletter", newsletter::router())
}
