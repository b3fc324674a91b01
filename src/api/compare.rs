//! Stock comparison API endpoints.

use super::ApiResponse;
use crate::error::Result;
use crate::types::{ComparisonReport, StockOption, STOCK_OPTIONS};
use crate::AppState;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use chrono::NaiveDate;
use serde::Deserialize;

/// Query parameters for the comparison endpoint.
#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    /// Comma-separated tickers or menu labels.
    #[serde(default)]
    pub symbols: String,
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl CompareQuery {
    /// Non-empty entries of the `symbols` list.
    pub fn selections(&self) -> Vec<String> {
        self.symbols
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

/// GET /api/compare
async fn get_comparison(
    State(state): State<AppState>,
    query: std::result::Result<Query<CompareQuery>, QueryRejection>,
) -> Result<Json<ApiResponse<ComparisonReport>>> {
    let Query(query) = query?;
    let today = chrono::Utc::now().date_naive();
    let report = state
        .comparison
        .compare(&query.selections(), query.start, query.end, today)
        .await?;
    Ok(Json(ApiResponse::new(report)))
}

/// GET /api/compare/options
async fn get_options() -> Json<ApiResponse<&'static [StockOption]>> {
    Json(ApiResponse::new(STOCK_OPTIONS))
}

/// Create the comparison router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_comparison))
        .route("/options", get(get_options))
}
