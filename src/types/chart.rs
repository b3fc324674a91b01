use serde::{Deserialize, Serialize};

/// How a chart series is stroked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    Dashed,
}

/// Marker drawn at each data point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerStyle {
    Circle,
}

/// A single (x, y) point on a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

/// Everything the charting surface needs to draw one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub line_style: LineStyle,
    pub marker: MarkerStyle,
    pub color: String,
    pub points: Vec<ChartPoint>,
}

impl ChartSpec {
    /// Chart for a forecast horizon: x runs 1..=n over the given prices,
    /// drawn as a dashed green line with circle markers.
    pub fn forecast(symbol: &str, prices: &[f64]) -> Self {
        let points = prices
            .iter()
            .enumerate()
            .map(|(i, &y)| ChartPoint {
                x: (i + 1) as f64,
                y,
            })
            .collect();

        Self {
            title: format!("{}-Day Forecast for {}", prices.len(), symbol),
            x_label: "Day".to_string(),
            y_label: "Predicted Price".to_string(),
            line_style: LineStyle::Dashed,
            marker: MarkerStyle::Circle,
            color: "green".to_string(),
            points,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forecast_chart_numbers_days_from_one() {
        let chart = ChartSpec::forecast("AAPL", &[6.0, 7.0, 8.0]);
        let xs: Vec<f64> = chart.points.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![1.0, 2.0, 3.0]);
        assert_eq!(chart.points[2].y, 8.0);
        assert_eq!(chart.title, "3-Day Forecast for AAPL");
        assert_eq!(chart.line_style, LineStyle::Dashed);
        assert_eq!(chart.marker, MarkerStyle::Circle);
    }

    #[test]
    fn test_chart_spec_serialization() {
        let chart = ChartSpec::forecast("TSLA", &[250.0]);
        let json = serde_json::to_value(&chart).unwrap();
        assert_eq!(json["lineStyle"], "dashed");
        assert_eq!(json["marker"], "circle");
        assert_eq!(json["xLabel"], "Day");
        assert_eq!(json["points"][0]["x"], 1.0);
    }
}
