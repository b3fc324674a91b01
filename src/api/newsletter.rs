use super::ApiResponse;
use crate::types::Newsletter;
use crate::AppState;
use axum::{routing::get, Json, Router};

/// GET /api/newsletter
async fn get_newsletter() -> Json<ApiResponse<Newsletter>> {
    Json(ApiResponse::new(Newsletter::current()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(get_newsletter))
}
