//! Forecast API endpoints.

use super::ApiResponse;
use crate::error::Result;
use crate::types::{ForecastReport, PredictionReport};
use crate::AppState;
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

/// Query parameters for the forecast endpoint.
#[derive(Debug, Deserialize)]
pub struct ForecastQuery {
    /// Days to forecast; the configured default when absent.
    pub horizon: Option<usize>,
}

/// GET /api/forecast/:symbol
async fn get_forecast(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
    query: std::result::Result<Query<ForecastQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<ForecastReport>>> {
    let Query(query) = query?;
    let report = state.predictions.forecast(&symbol, query.horizon).await?;
    Ok(Json(ApiResponse::new(report)))
}

/// GET /api/predict/:symbol
async fn get_prediction(
    State(state): State<AppState>,
    Path(symbol): Path<String>,
) -> Result<Json<ApiResponse<PredictionReport>>> {
    let report = state.predictions.predict_next(&symbol).await?;
    Ok(Json(ApiResponse::new(report)))
}

/// Create the multi-day forecast router.
pub fn forecast_router() -> Router<AppState> {
    Router::new().route("/:symbol", get(get_forecast))
}

/// Create the next-day predictor router.
pub fn predict_router() -> Router<AppState> {
    Router::new().route("/:symbol", get(get_prediction))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_query_defaults() {
        let query: ForecastQuery = serde_urlencoded::from_str("").unwrap();
        assert!(query.horizon.is_none());
    }

    #[test]
    fn test_forecast_query_with_horizon() {
        let query: ForecastQuery = serde_urlencoded::from_str("horizon=10").unwrap();
        assert_eq!(query.horizon, Some(10));
    }

    #[test]
    fn test_forecast_query_rejects_negative() {
        assert!(serde_urlencoded::from_str::<ForecastQuery>("horizon=-1").is_err());
    }
}
