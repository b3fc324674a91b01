//! Yahoo Finance API client for historical stock data.
//!
//! Uses the unofficial v8 chart endpoint with daily bars. Bars with a
//! missing or non-positive close are skipped, and bar timestamps are shifted
//! by the exchange's GMT offset before taking the trading date.

use super::PriceHistoryProvider;
use crate::types::{HistoryWindow, PricePoint, PriceSeries};
use chrono::{DateTime, NaiveDate, NaiveTime};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

/// Yahoo Finance chart response.
#[derive(Debug, Deserialize)]
struct YahooChartResponse {
    chart: YahooChart,
}

#[derive(Debug, Deserialize)]
struct YahooChart {
    result: Option<Vec<YahooResult>>,
    error: Option<YahooError>,
}

#[derive(Debug, Deserialize)]
struct YahooError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct YahooResult {
    meta: YahooMeta,
    timestamp: Option<Vec<i64>>,
    indicators: YahooIndicators,
}

#[derive(Debug, Deserialize)]
struct YahooMeta {
    /// Exchange offset from UTC in seconds.
    #[serde(default)]
    gmtoffset: i64,
}

#[derive(Debug, Deserialize)]
struct YahooIndicators {
    quote: Vec<YahooQuote>,
}

#[derive(Debug, Deserialize)]
struct YahooQuote {
    close: Option<Vec<Option<f64>>>,
}

/// Share class letters Yahoo writes with a hyphen (BRK-B, not BRK.B).
const SHARE_CLASSES: [&str; 2] = ["A", "B"];

/// Normalize symbol for Yahoo Finance API.
/// Share classes on a letter-only base get a hyphen; exchange suffixes such
/// as `.NS`, `.L` or `.T` are left dotted.
fn normalize_yahoo_symbol(symbol: &str) -> String {
    let upper = symbol.trim().to_uppercase();
    match upper.rsplit_once('.') {
        Some((base, suffix))
            if SHARE_CLASSES.contains(&suffix)
                && !base.is_empty()
                && base.chars().all(|c| c.is_ascii_alphabetic()) =>
        {
            format!("{}-{}", base, suffix)
        }
        _ => upper,
    }
}

/// Unix timestamp (seconds) of midnight UTC on `date`.
fn midnight_utc(date: NaiveDate) -> i64 {
    date.and_time(NaiveTime::MIN).and_utc().timestamp()
}

/// Query parameters selecting `window` with daily bars.
fn window_params(window: &HistoryWindow) -> Vec<(&'static str, String)> {
    let mut params = match window {
        HistoryWindow::Period { period } => vec![("range", period.as_str().to_string())],
        HistoryWindow::Range { start, end } => vec![
            ("period1", midnight_utc(*start).to_string()),
            ("period2", midnight_utc(*end).to_string()),
        ],
    };
    params.push(("interval", "1d".to_string()));
    params.push(("includePrePost", "false".to_string()));
    params
}

/// Extract dated closes from a chart response.
fn parse_chart(data: YahooChartResponse) -> Result<Vec<PricePoint>, String> {
    if let Some(error) = data.chart.error {
        return Err(format!(
            "Yahoo API error: {} - {}",
            error.code, error.description
        ));
    }

    let result = data
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| "No results in response".to_string())?;

    // A valid symbol with no bars in range has no timestamp array.
    let timestamps = result.timestamp.unwrap_or_default();
    let closes = result
        .indicators
        .quote
        .into_iter()
        .next()
        .and_then(|q| q.close)
        .unwrap_or_default();

    let offset = result.meta.gmtoffset;
    let mut points: Vec<PricePoint> = Vec::with_capacity(timestamps.len());
    for (i, &timestamp) in timestamps.iter().enumerate() {
        let close = match closes.get(i).copied().flatten() {
            Some(c) if c.is_finite() && c > 0.0 => c,
            _ => continue,
        };
        let date = match DateTime::from_timestamp(timestamp + offset, 0) {
            Some(dt) => dt.date_naive(),
            None => continue,
        };

        match points.last_mut() {
            // Yahoo repeats the live session as a second bar for today; keep the latest.
            Some(last) if last.date == date => last.close = close,
            Some(last) if last.date > date => continue,
            _ => points.push(PricePoint::new(date, close)),
        }
    }

    Ok(points)
}

/// Yahoo Finance API client.
pub struct YahooFinanceClient {
    client: Client,
    base_url: String,
}

impl YahooFinanceClient {
    /// Create a new Yahoo Finance client against `base_url`.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Fetch daily closes for a symbol.
    async fn get_daily_closes(
        &self,
        symbol: &str,
        window: &HistoryWindow,
    ) -> Result<Vec<PricePoint>, String> {
        let url = format!(
            "{}/v8/finance/chart/{}",
            self.base_url,
            normalize_yahoo_symbol(symbol)
        );

        debug!("Fetching Yahoo Finance data: {} ({})", url, window);

        let response = self
            .client
            .get(&url)
            .query(&window_params(window))
            .send()
            .await
            .map_err(|e| format!("Request failed: {}", e))?;

        if !response.status().is_success() {
            return Err(format!("API error: {}", response.status()));
        }

        let data: YahooChartResponse = response
            .json()
            .await
            .map_err(|e| format!("Parse error: {}", e))?;

        parse_chart(data)
    }
}

#[axum::async_trait]
impl PriceHistoryProvider for YahooFinanceClient {
    fn name(&self) -> &'static str {
        "yahoo"
    }

    async fn fetch(&self, symbol: &str, window: &HistoryWindow) -> PriceSeries {
        let points = match self.get_daily_closes(symbol, window).await {
            Ok(points) => points,
            Err(e) => {
                warn!("Yahoo history for {} unavailable: {}", symbol, e);
                return PriceSeries::empty();
            }
        };

        match PriceSeries::new(points) {
            Ok(series) => {
                debug!("Yahoo returned {} closes for {}", series.len(), symbol);
                series
            }
            Err(e) => {
                warn!("Yahoo history for {} rejected: {}", symbol, e);
                PriceSeries::empty()
            }
        }
    }
}
