use super::{ChartSpec, LookbackPeriod, PricePoint};
use serde::{Deserialize, Serialize};

/// Fitted line `next_close ≈ slope * close + intercept`.
///
/// Built fresh for every request from a single symbol's history and
/// discarded afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegressionModel {
    pub slope: f64,
    pub intercept: f64,
    /// Number of (close, next close) pairs the line was fit on.
    pub training_pairs: usize,
    /// True when every training input was identical and the zero-slope fallback was used.
    pub degenerate: bool,
}

impl RegressionModel {
    /// Predict the next close from `close`.
    pub fn predict(&self, close: f64) -> f64 {
        self.slope * close + self.intercept
    }

    /// Feed the model its own output `horizon` times, starting from `start`.
    ///
    /// No damping or bounds: predictions may drift negative or grow without limit.
    pub fn rollout(&self, start: f64, horizon: usize) -> Vec<f64> {
        let mut predictions = Vec::with_capacity(horizon);
        let mut current = start;
        for _ in 0..horizon {
            let next = self.predict(current);
            predictions.push(next);
            current = next;
        }
        predictions
    }
}

/// Ordered predictions for days 1..=horizon, with the model that produced them.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastResult {
    pub model: RegressionModel,
    pub predictions: Vec<f64>,
}

impl ForecastResult {
    pub fn horizon(&self) -> usize {
        self.predictions.len()
    }
}

/// Format a price the way the dashboard shows it: `$123.45`.
pub fn format_usd(price: f64) -> String {
    format!("${:.2}", price)
}

/// One row of the forecast table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastPoint {
    /// 1-based day offset from the last known close.
    pub day: usize,
    pub price: f64,
    pub display: String,
}

/// Multi-day forecast payload.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastReport {
    pub symbol: String,
    pub period: LookbackPeriod,
    pub last_close: PricePoint,
    pub model: RegressionModel,
    pub points: Vec<ForecastPoint>,
    pub chart: ChartSpec,
}

impl ForecastReport {
    pub fn new(
        symbol: &str,
        period: LookbackPeriod,
        last_close: PricePoint,
        result: ForecastResult,
    ) -> Self {
        let points = result
            .predictions
            .iter()
            .enumerate()
            .map(|(i, &price)| ForecastPoint {
                day: i + 1,
                price,
                display: format_usd(price),
            })
            .collect();

        Self {
            symbol: symbol.to_string(),
            period,
            last_close,
            model: result.model,
            points,
            chart: ChartSpec::forecast(symbol, &result.predictions),
        }
    }
}

/// Next-day prediction with the recent trend it is overlaid on.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionReport {
    pub symbol: String,
    pub period: LookbackPeriod,
    pub last_close: PricePoint,
    pub predicted_price: f64,
    pub display: String,
    pub model: RegressionModel,
    /// Most recent actual closes, oldest first.
    pub trend: Vec<PricePoint>,
    /// The prediction, plotted at the date of the last actual close.
    pub marker: PricePoint,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn model(slope: f64, intercept: f64) -> RegressionModel {
        RegressionModel {
            slope,
            intercept,
            training_pairs: 4,
            degenerate: false,
        }
    }

    // =========================================================================
    // RegressionModel Tests
    // =========================================================================

    #[test]
    fn test_predict_applies_line() {
        assert_eq!(model(2.0, 1.0).predict(3.0), 7.0);
        assert_eq!(model(0.0, 10.0).predict(123.0), 10.0);
    }

    #[test]
    fn test_rollout_feeds_output_back_in() {
        let predictions = model(2.0, 0.0).rollout(1.0, 4);
        assert_eq!(predictions, vec![2.0, 4.0, 8.0, 16.0]);
    }

    #[test]
    fn test_rollout_does_not_clamp_negative() {
        let predictions = model(1.0, -3.0).rollout(5.0, 3);
        assert_eq!(predictions, vec![2.0, -1.0, -4.0]);
    }

    #[test]
    fn test_rollout_zero_horizon_is_empty() {
        assert!(model(1.0, 1.0).rollout(5.0, 0).is_empty());
    }

    // =========================================================================
    // Formatting Tests
    // =========================================================================

    #[test]
    fn test_format_usd_two_decimals() {
        assert_eq!(format_usd(189.456), "$189.46");
        assert_eq!(format_usd(6.0), "$6.00");
        assert_eq!(format_usd(-1.5), "$-1.50");
    }

    #[test]
    fn test_forecast_report_rows() {
        let last = PricePoint::new(NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(), 5.0);
        let result = ForecastResult {
            model: model(1.0, 1.0),
            predictions: vec![6.0, 7.0],
        };
        let report = ForecastReport::new("AAPL", LookbackPeriod::OneYear, last, result);

        assert_eq!(report.points.len(), 2);
        assert_eq!(report.points[0].day, 1);
        assert_eq!(report.points[1].display, "$7.00");
        assert_eq!(report.chart.points.len(), 2);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["period"], "1y");
        assert_eq!(json["lastClose"]["date"], "2024-05-10");
        assert_eq!(json["model"]["trainingPairs"], 4);
    }
}
