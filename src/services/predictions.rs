//! Multi-day forecast and next-day prediction use cases.

use crate::config::ForecastConfig;
use crate::error::{AppError, Result};
use crate::services::forecaster;
use crate::services::history::{normalize_symbol, HistoryService};
use crate::types::{
    format_usd, ForecastReport, HistoryWindow, PricePoint, PriceSeries, PredictionReport,
};
use std::sync::Arc;
use tracing::info;

const FORECAST_NO_DATA: &str = "No data found. Please check the symbol.";
const PREDICTOR_NO_DATA: &str = "Data not available for that ticker.";

/// The last close of a series the forecaster has already accepted.
fn last_close(series: &PriceSeries) -> Result<PricePoint> {
    series
        .last()
        .copied()
        .ok_or_else(|| AppError::DataUnavailable(FORECAST_NO_DATA.to_string()))
}

/// Runs the forecaster on freshly fetched history, one model per request.
pub struct PredictionService {
    history: Arc<HistoryService>,
    config: ForecastConfig,
}

impl PredictionService {
    pub fn new(history: Arc<HistoryService>, config: ForecastConfig) -> Self {
        Self { history, config }
    }

    /// Forecast `horizon` days (default from config) from a year of history.
    pub async fn forecast(&self, symbol: &str, horizon: Option<usize>) -> Result<ForecastReport> {
        let symbol = normalize_symbol(symbol)?;
        let horizon = horizon.unwrap_or(self.config.default_horizon);
        if horizon > self.config.max_horizon {
            return Err(AppError::BadRequest(format!(
                "forecast horizon must be at most {}",
                self.config.max_horizon
            )));
        }

        let period = self.config.forecast_period;
        let series = self
            .history
            .load(&symbol, HistoryWindow::period(period))
            .await
            .map_err(|_| AppError::DataUnavailable(FORECAST_NO_DATA.to_string()))?;

        let result = forecaster::forecast(&series, horizon)?;
        info!(
            "Forecast {} days for {} from {} closes",
            horizon,
            symbol,
            series.len()
        );

        Ok(ForecastReport::new(&symbol, period, last_close(&series)?, result))
    }

    /// Predict tomorrow's close from the shorter predictor lookback.
    pub async fn predict_next(&self, symbol: &str) -> Result<PredictionReport> {
        let symbol = normalize_symbol(symbol)?;
        let period = self.config.predictor_period;
        let series = self
            .history
            .load(&symbol, HistoryWindow::period(period))
            .await
            .map_err(|_| AppError::DataUnavailable(PREDICTOR_NO_DATA.to_string()))?;

        let result = forecaster::forecast(&series, 1)?;
        let predicted_price = result
            .predictions
            .first()
            .copied()
            .ok_or(forecaster::ForecastError::InvalidHorizon)?;
        let last = last_close(&series)?;
        info!("Predicted next close for {}: {:.2}", symbol, predicted_price);

        Ok(PredictionReport {
            symbol,
            period,
            last_close: last,
            predicted_price,
            display: format_usd(predicted_price),
            model: result.model,
            trend: series.tail(self.config.trend_points).to_vec(),
            marker: PricePoint::new(last.date, predicted_price),
        })
    }
}
