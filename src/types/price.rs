use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// One trading day's closing price.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    pub date: NaiveDate,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: NaiveDate, close: f64) -> Self {
        Self { date, close }
    }
}

/// Reasons a set of points cannot form a [`PriceSeries`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SeriesError {
    #[error("dates must be strictly increasing: {next} follows {previous}")]
    OutOfOrder { previous: NaiveDate, next: NaiveDate },

    #[error("closing price on {date} must be positive, got {close}")]
    NonPositiveClose { date: NaiveDate, close: f64 },

    #[error("synthetic date out of range at index {0}")]
    DateOverflow(usize),
}

/// Ordered daily closing prices for a single symbol.
///
/// Dates are strictly increasing and every close is a finite positive
/// number. A series is immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PriceSeries {
    points: Vec<PricePoint>,
}

impl PriceSeries {
    /// Validate and wrap a list of points.
    pub fn new(points: Vec<PricePoint>) -> Result<Self, SeriesError> {
        for point in &points {
            if !(point.close.is_finite() && point.close > 0.0) {
                return Err(SeriesError::NonPositiveClose {
                    date: point.date,
                    close: point.close,
                });
            }
        }

        if let Some(pair) = points.windows(2).find(|w| w[1].date <= w[0].date) {
            return Err(SeriesError::OutOfOrder {
                previous: pair[0].date,
                next: pair[1].date,
            });
        }

        Ok(Self { points })
    }

    /// Build a series from bare closes, dated on consecutive days from 1970-01-01.
    pub fn from_closes(closes: &[f64]) -> Result<Self, SeriesError> {
        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).ok_or(SeriesError::DateOverflow(0))?;
        let points = closes
            .iter()
            .enumerate()
            .map(|(i, &close)| {
                epoch
                    .checked_add_days(Days::new(i as u64))
                    .map(|date| PricePoint::new(date, close))
                    .ok_or(SeriesError::DateOverflow(i))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(points)
    }

    /// A series with no points, the provider's "no data" answer.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[PricePoint] {
        &self.points
    }

    /// Closing prices in date order.
    pub fn closes(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.close).collect()
    }

    pub fn last(&self) -> Option<&PricePoint> {
        self.points.last()
    }

    /// The last `n` points (or all of them if the series is shorter).
    pub fn tail(&self, n: usize) -> &[PricePoint] {
        let start = self.points.len().saturating_sub(n);
        &self.points[start..]
    }
}

/// Named lookback windows understood by the history provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LookbackPeriod {
    #[serde(rename = "1mo")]
    OneMonth,
    #[serde(rename = "3mo")]
    ThreeMonths,
    #[serde(rename = "6mo")]
    SixMonths,
    #[serde(rename = "1y")]
    OneYear,
    #[serde(rename = "2y")]
    TwoYears,
    #[serde(rename = "5y")]
    FiveYears,
}

impl LookbackPeriod {
    /// Parse a period from its short form ("6mo", "1y", ...).
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "1mo" => Some(LookbackPeriod::OneMonth),
            "3mo" => Some(LookbackPeriod::ThreeMonths),
            "6mo" => Some(LookbackPeriod::SixMonths),
            "1y" => Some(LookbackPeriod::OneYear),
            "2y" => Some(LookbackPeriod::TwoYears),
            "5y" => Some(LookbackPeriod::FiveYears),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LookbackPeriod::OneMonth => "1mo",
            LookbackPeriod::ThreeMonths => "3mo",
            LookbackPeriod::SixMonths => "6mo",
            LookbackPeriod::OneYear => "1y",
            LookbackPeriod::TwoYears => "2y",
            LookbackPeriod::FiveYears => "5y",
        }
    }
}

impl fmt::Display for LookbackPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The time window requested from a history provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum HistoryWindow {
    /// Trailing window ending today.
    Period { period: LookbackPeriod },
    /// Explicit dates, `start` inclusive and `end` exclusive.
    Range { start: NaiveDate, end: NaiveDate },
}

impl HistoryWindow {
    pub fn period(period: LookbackPeriod) -> Self {
        HistoryWindow::Period { period }
    }

    pub fn range(start: NaiveDate, end: NaiveDate) -> Self {
        HistoryWindow::Range { start, end }
    }

    /// Whether `date` falls inside an explicit range. Trailing periods accept every date.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match self {
            HistoryWindow::Period { .. } => true,
            HistoryWindow::Range { start, end } => date >= *start && date < *end,
        }
    }
}

impl fmt::Display for HistoryWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HistoryWindow::Period { period } => write!(f, "{}", period),
            HistoryWindow::Range { start, end } => write!(f, "{}..{}", start, end),
        }
    }
}
