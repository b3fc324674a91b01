//! Self-feeding linear forecaster.
//!
//! Fits `close[t+1] ≈ slope * close[t] + intercept` by ordinary least
//! squares over every consecutive pair of one series, then rolls the line
//! forward from the last close, feeding each prediction back in as the next
//! input. Errors compound across the horizon; nothing is clamped.

use crate::types::{ForecastResult, PriceSeries, RegressionModel};
use thiserror::Error;
use tracing::debug;

/// Fewest (close, next close) pairs a fit is attempted on.
pub const MIN_TRAINING_PAIRS: usize = 2;

/// Why a forecast could not be produced.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ForecastError {
    #[error("not enough price history: need {required} training pairs, found {found}")]
    DataUnavailable { required: usize, found: usize },

    #[error("forecast horizon must be at least 1")]
    InvalidHorizon,
}

/// Number of training pairs a series yields (one per consecutive day).
pub fn training_pairs(series: &PriceSeries) -> usize {
    series.len().saturating_sub(1)
}

/// Fit the next-day regression on `series`.
pub fn fit(series: &PriceSeries) -> Result<RegressionModel, ForecastError> {
    let found = training_pairs(series);
    if found < MIN_TRAINING_PAIRS {
        return Err(ForecastError::DataUnavailable {
            required: MIN_TRAINING_PAIRS,
            found,
        });
    }

    let closes = series.closes();
    let (inputs, targets) = (&closes[..found], &closes[1..]);
    Ok(fit_pairs(inputs, targets))
}

/// Closed-form single-feature OLS. `inputs` and `targets` have equal, non-zero length.
fn fit_pairs(inputs: &[f64], targets: &[f64]) -> RegressionModel {
    let n = inputs.len() as f64;
    let mean_x = inputs.iter().sum::<f64>() / n;
    let mean_y = targets.iter().sum::<f64>() / n;

    let all_equal = inputs.windows(2).all(|w| w[0] == w[1]);
    let sxx: f64 = inputs.iter().map(|x| (x - mean_x).powi(2)).sum();

    if all_equal || sxx <= 0.0 {
        debug!(pairs = inputs.len(), "flat input series, using zero-slope fit");
        return RegressionModel {
            slope: 0.0,
            intercept: mean_y,
            training_pairs: inputs.len(),
            degenerate: true,
        };
    }

    let sxy: f64 = inputs
        .iter()
        .zip(targets)
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum();
    let slope = sxy / sxx;

    RegressionModel {
        slope,
        intercept: mean_y - slope * mean_x,
        training_pairs: inputs.len(),
        degenerate: false,
    }
}

/// Forecast `horizon` days past the end of `series`.
pub fn forecast(series: &PriceSeries, horizon: usize) -> Result<ForecastResult, ForecastError> {
    if horizon == 0 {
        return Err(ForecastError::InvalidHorizon);
    }

    let model = fit(series)?;
    let last = series.last().map(|p| p.close).ok_or(ForecastError::DataUnavailable {
        required: MIN_TRAINING_PAIRS,
        found: 0,
    })?;

    let predictions = model.rollout(last, horizon);
    debug!(
        slope = model.slope,
        intercept = model.intercept,
        horizon,
        "forecast rolled out"
    );

    Ok(ForecastResult { model, predictions })
}

/// Predict the close one day past the end of `series`.
pub fn predict_next(series: &PriceSeries) -> Result<f64, ForecastError> {
    let result = forecast(series, 1)?;
    result
        .predictions
        .first()
        .copied()
        .ok_or(ForecastError::InvalidHorizon)
}
