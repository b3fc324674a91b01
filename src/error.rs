use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::services::forecaster::ForecastError;

/// Application error types.
#[derive(Error, Debug)]
pub enum AppError {
    /// The provider returned no usable history for the request.
    #[error("{0}")]
    DataUnavailable(String),

    /// Comparison selection outside the 1 to 3 menu entries allowed.
    #[error("{0}")]
    InvalidSelection(String),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<ForecastError> for AppError {
    fn from(err: ForecastError) -> Self {
        match err {
            ForecastError::DataUnavailable { .. } => AppError::DataUnavailable(err.to_string()),
            ForecastError::InvalidHorizon => AppError::BadRequest(err.to_string()),
        }
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::DataUnavailable(_) => StatusCode::NOT_FOUND,
            AppError::InvalidSelection(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::DataUnavailable("x".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::InvalidSelection("x".into()).status(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(AppError::BadRequest("x".into()).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_forecast_error_conversion() {
        let err: AppError = ForecastError::InvalidHorizon.into();
        assert!(matches!(err, AppError::BadRequest(_)));

        let err: AppError = ForecastError::DataUnavailable {
            required: 2,
            found: 0,
        }
        .into();
        assert!(matches!(err, AppError::DataUnavailable(_)));
    }

    #[tokio::test]
    async fn test_error_response_body() {
        let response = AppError::InvalidSelection("Please select between 1 to 3 stocks.".into())
            .into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Please select between 1 to 3 stocks.");
        assert_eq!(body["status"], 422);
    }
}
