use crate::types::LookbackPeriod;
use chrono::NaiveDate;
use std::env;

/// Forecasting knobs shared by the dashboard tabs.
#[derive(Debug, Clone)]
pub struct ForecastConfig {
    /// Days forecast by the multi-day tab when no horizon is requested.
    pub default_horizon: usize,
    /// Largest horizon a caller may request.
    pub max_horizon: usize,
    /// Lookback used to train the multi-day forecast.
    pub forecast_period: LookbackPeriod,
    /// Lookback used to train the next-day predictor.
    pub predictor_period: LookbackPeriod,
    /// Actual closes shown under the next-day prediction.
    pub trend_points: usize,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            default_horizon: 5,
            max_horizon: 30,
            forecast_period: LookbackPeriod::OneYear,
            predictor_period: LookbackPeriod::SixMonths,
            trend_points: 50,
        }
    }
}

/// Stock comparison settings.
#[derive(Debug, Clone)]
pub struct CompareConfig {
    /// Start date used when the request gives none.
    pub default_start: NaiveDate,
    /// Most recent rows shown in each summary table.
    pub table_rows: usize,
}

impl Default for CompareConfig {
    fn default() -> Self {
        Self {
            default_start: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap_or_default(),
            table_rows: 5,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Yahoo Finance API base URL.
    pub yahoo_base_url: String,
    /// Yahoo Finance request timeout (seconds).
    pub yahoo_timeout_secs: u64,
    /// Forecasting settings.
    pub forecast: ForecastConfig,
    /// Comparison settings.
    pub compare: CompareConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3001,
            yahoo_base_url: "https://query1.finance.yahoo.com".to_string(),
            yahoo_timeout_secs: 30,
            forecast: ForecastConfig::default(),
            compare: CompareConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup. Missing or
    /// unparseable values fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port: u16 = lookup("PORT")
            .and_then(|p| p.parse().ok())
            .unwrap_or(defaults.port);

        let max_horizon: usize = lookup("MAX_FORECAST_HORIZON")
            .and_then(|v| v.parse().ok())
            .filter(|h| *h > 0)
            .unwrap_or(defaults.forecast.max_horizon);
        // The default must itself be a horizon the forecast endpoint accepts.
        let default_horizon = lookup("FORECAST_HORIZON")
            .and_then(|v| v.parse().ok())
            .filter(|h| *h > 0 && *h <= max_horizon)
            .unwrap_or_else(|| defaults.forecast.default_horizon.min(max_horizon));

        let forecast = ForecastConfig {
            default_horizon,
            max_horizon,
            forecast_period: lookup("FORECAST_PERIOD")
                .and_then(|v| LookbackPeriod::from_str(&v))
                .unwrap_or(defaults.forecast.forecast_period),
            predictor_period: lookup("PREDICTOR_PERIOD")
                .and_then(|v| LookbackPeriod::from_str(&v))
                .unwrap_or(defaults.forecast.predictor_period),
            trend_points: lookup("TREND_POINTS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.forecast.trend_points),
        };

        let compare = CompareConfig {
            default_start: lookup("COMPARE_DEFAULT_START")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.compare.default_start),
            table_rows: lookup("COMPARE_TABLE_ROWS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.compare.table_rows),
        };

        Self {
            host,
            port,
            yahoo_base_url: lookup("YAHOO_BASE_URL").unwrap_or(defaults.yahoo_base_url),
            yahoo_timeout_secs: lookup("YAHOO_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.yahoo_timeout_secs),
            forecast,
            compare,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(|_| None);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3001);
        assert_eq!(config.yahoo_timeout_secs, 30);
        assert_eq!(config.forecast.default_horizon, 5);
        assert_eq!(config.forecast.forecast_period, LookbackPeriod::OneYear);
        assert_eq!(config.forecast.predictor_period, LookbackPeriod::SixMonths);
        assert_eq!(config.forecast.trend_points, 50);
        assert_eq!(
            config.compare.default_start,
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
        );
        assert_eq!(config.compare.table_rows, 5);
    }

    #[test]
    fn test_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "8080"),
            ("FORECAST_HORIZON", "7"),
            ("PREDICTOR_PERIOD", "3mo"),
            ("COMPARE_DEFAULT_START", "2022-06-01"),
            ("YAHOO_BASE_URL", "http://localhost:9000"),
        ]));
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.forecast.default_horizon, 7);
        assert_eq!(config.forecast.predictor_period, LookbackPeriod::ThreeMonths);
        assert_eq!(
            config.compare.default_start,
            NaiveDate::from_ymd_opt(2022, 6, 1).unwrap()
        );
        assert_eq!(config.yahoo_base_url, "http://localhost:9000");
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = Config::from_lookup(lookup_from(&[
            ("PORT", "not-a-port"),
            ("FORECAST_HORIZON", "0"),
            ("FORECAST_PERIOD", "forever"),
            ("COMPARE_DEFAULT_START", "01/01/2023"),
        ]));
        assert_eq!(config.port, 3001);
        assert_eq!(config.forecast.default_horizon, 5);
        assert_eq!(config.forecast.forecast_period, LookbackPeriod::OneYear);
        assert_eq!(
            config.compare.default_start,
            NaiveDate::from_ymd_opt(2023, 1, 1).unwrap()
        );
    }

    #[test]
    fn test_default_horizon_above_max_falls_back() {
        let config = Config::from_lookup(lookup_from(&[("FORECAST_HORIZON", "40")]));
        assert_eq!(config.forecast.max_horizon, 30);
        assert_eq!(config.forecast.default_horizon, 5);
    }

    #[test]
    fn test_default_horizon_capped_by_small_max() {
        let config = Config::from_lookup(lookup_from(&[("MAX_FORECAST_HORIZON", "3")]));
        assert_eq!(config.forecast.max_horizon, 3);
        assert_eq!(config.forecast.default_horizon, 3);

        let config = Config::from_lookup(lookup_from(&[
            ("FORECAST_HORIZON", "10"),
            ("MAX_FORECAST_HORIZON", "12"),
        ]));
        assert_eq!(config.forecast.default_horizon, 10);
    }
}
