//! Property tests for the self-feeding forecaster

use growstox::services::forecaster::{fit, training_pairs, MIN_TRAINING_PAIRS};
use growstox::{forecast, predict_next, ForecastError, PriceSeries};

const EPS: f64 = 1e-9;

fn series(closes: &[f64]) -> PriceSeries {
    PriceSeries::from_closes(closes).unwrap()
}

/// A noisy but deterministic price walk.
fn walk(len: usize) -> Vec<f64> {
    let mut price = 100.0;
    (0..len)
        .map(|i| {
            price += ((i * 7919) % 13) as f64 - 6.0;
            price
        })
        .collect()
}

#[test]
fn test_horizon_length_for_many_series() {
    for len in 3..40 {
        let s = series(&walk(len));
        for horizon in [1, 2, 5, 10] {
            let result = forecast(&s, horizon).unwrap();
            assert_eq!(result.predictions.len(), horizon, "len={} horizon={}", len, horizon);
        }
    }
}

#[test]
fn test_single_step_matches_predict_next() {
    for len in 3..40 {
        let s = series(&walk(len));
        assert_eq!(forecast(&s, 1).unwrap().predictions[0], predict_next(&s).unwrap());
    }
}

#[test]
fn test_repeat_calls_identical() {
    let s = series(&walk(250));
    let first = forecast(&s, 5).unwrap();
    let second = forecast(&s, 5).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_constant_series_forecasts_mean() {
    let result = forecast(&series(&[10.0, 10.0, 10.0, 10.0]), 5).unwrap();
    assert_eq!(result.model.slope, 0.0);
    assert!(result.model.degenerate);
    assert_eq!(result.predictions, vec![10.0; 5]);
}

#[test]
fn test_linear_series_compounds() {
    let result = forecast(&series(&[1.0, 2.0, 3.0, 4.0, 5.0]), 5).unwrap();
    assert!((result.model.slope - 1.0).abs() < EPS);
    assert!((result.model.intercept - 1.0).abs() < EPS);
    for (actual, expected) in result.predictions.iter().zip([6.0, 7.0, 8.0, 9.0, 10.0]) {
        assert!((actual - expected).abs() < EPS);
    }
}

#[test]
fn test_each_step_applies_model_to_previous() {
    let s = series(&walk(60));
    let result = forecast(&s, 5).unwrap();

    let mut current = s.last().unwrap().close;
    for prediction in &result.predictions {
        let expected = result.model.slope * current + result.model.intercept;
        assert_eq!(*prediction, expected);
        current = *prediction;
    }
}

#[test]
fn test_empty_series_is_data_unavailable() {
    assert_eq!(
        forecast(&PriceSeries::empty(), 5).unwrap_err(),
        ForecastError::DataUnavailable {
            required: MIN_TRAINING_PAIRS,
            found: 0
        }
    );
    assert!(matches!(
        predict_next(&PriceSeries::empty()),
        Err(ForecastError::DataUnavailable { .. })
    ));
}

#[test]
fn test_two_points_is_not_enough() {
    let s = series(&[100.0, 101.0]);
    assert_eq!(training_pairs(&s), 1);
    assert!(matches!(
        forecast(&s, 5),
        Err(ForecastError::DataUnavailable { found: 1, .. })
    ));
}

#[test]
fn test_outlier_dominates_fit() {
    // An unadjusted split-like jump is kept as-is.
    let model = fit(&series(&[100.0, 101.0, 102.0, 25.5, 26.0, 26.5])).unwrap();
    assert!(model.slope < 0.95);
    assert_eq!(model.training_pairs, 5);
}
