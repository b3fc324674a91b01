//! Side-by-side closing price comparison of up to three menu stocks.

use crate::config::CompareConfig;
use crate::error::{AppError, Result};
use crate::services::history::HistoryService;
use crate::types::{
    find_stock_option, ComparisonReport, ComparisonSeries, HistoryWindow, StockOption,
    SummaryTable,
};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info};

/// Most stocks one comparison may include.
pub const MAX_SELECTIONS: usize = 3;

const SELECTION_MESSAGE: &str = "Please select between 1 to 3 stocks.";

/// Resolve raw selections against the menu, dropping duplicates.
///
/// Fails without side effects when a selection is not on the menu or the
/// number of distinct selections is outside 1..=3.
pub fn resolve_selection(selections: &[String]) -> Result<Vec<&'static StockOption>> {
    let mut resolved: Vec<&'static StockOption> = Vec::with_capacity(selections.len());
    for raw in selections {
        let option = find_stock_option(raw).ok_or_else(|| {
            AppError::InvalidSelection(format!("{} is not in the comparison menu.", raw.trim()))
        })?;
        if !resolved.iter().any(|o| o.symbol == option.symbol) {
            resolved.push(option);
        }
    }

    if resolved.is_empty() || resolved.len() > MAX_SELECTIONS {
        return Err(AppError::InvalidSelection(SELECTION_MESSAGE.to_string()));
    }
    Ok(resolved)
}

/// Builds comparison charts and tables from per-symbol history fetches.
pub struct ComparisonService {
    history: Arc<HistoryService>,
    config: CompareConfig,
}

impl ComparisonService {
    pub fn new(history: Arc<HistoryService>, config: CompareConfig) -> Self {
        Self { history, config }
    }

    /// Compare `selections` between `start` (inclusive) and `end` (exclusive).
    ///
    /// Missing dates default to the configured start and `today`. A symbol
    /// with no data becomes a warning rather than failing the comparison.
    pub async fn compare(
        &self,
        selections: &[String],
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<ComparisonReport> {
        let options = resolve_selection(selections)?;

        let start = start.unwrap_or(self.config.default_start);
        let end = end.unwrap_or(today);
        if start >= end {
            return Err(AppError::BadRequest(format!(
                "start date {} must be before end date {}",
                start, end
            )));
        }

        let window = HistoryWindow::range(start, end);
        let mut series = Vec::with_capacity(options.len());
        let mut tables = Vec::with_capacity(options.len());
        let mut warnings = Vec::new();

        for option in options {
            match self.history.load(option.symbol, window).await {
                Ok(history) => {
                    debug!("{} has {} closes in {}", option.symbol, history.len(), window);
                    tables.push(SummaryTable {
                        symbol: option.symbol.to_string(),
                        label: option.label.to_string(),
                        rows: history.tail(self.config.table_rows).to_vec(),
                    });
                    series.push(ComparisonSeries {
                        symbol: option.symbol.to_string(),
                        label: option.label.to_string(),
                        points: history.points().to_vec(),
                    });
                }
                Err(_) => warnings.push(format!("No data for {}", option.label)),
            }
        }

        info!(
            "Compared {} stocks over {} ({} without data)",
            series.len() + warnings.len(),
            window,
            warnings.len()
        );

        Ok(ComparisonReport {
            title: "Stock Closing Price Comparison".to_string(),
            start,
            end,
            series,
            tables,
            warnings,
        })
    }
}
