//! The browser dashboard page.

use crate::AppState;
use axum::{response::Html, routing::get, Router};

const DASHBOARD_HTML: &str = include_str!("../../static/index.html");

/// GET /
async fn index() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(index))
}
