//! In-memory history provider for tests and offline runs.

use super::PriceHistoryProvider;
use crate::types::{HistoryWindow, PriceSeries};
use std::collections::HashMap;
use std::sync::Mutex;

/// Serves fixed series keyed by upper-cased symbol and records every request.
#[derive(Default)]
pub struct InMemoryHistoryProvider {
    series: HashMap<String, PriceSeries>,
    requests: Mutex<Vec<(String, HistoryWindow)>>,
}

impl InMemoryHistoryProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the history returned for `symbol`.
    pub fn with_series(mut self, symbol: &str, series: PriceSeries) -> Self {
        self.series.insert(symbol.to_uppercase(), series);
        self
    }

    /// Number of fetches served so far.
    pub fn call_count(&self) -> usize {
        self.requests().len()
    }

    /// Every (symbol, window) fetched, in order.
    pub fn requests(&self) -> Vec<(String, HistoryWindow)> {
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[axum::async_trait]
impl PriceHistoryProvider for InMemoryHistoryProvider {
    fn name(&self) -> &'static str {
        "memory"
    }

    async fn fetch(&self, symbol: &str, window: &HistoryWindow) -> PriceSeries {
        let key = symbol.to_uppercase();
        self.requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push((key.clone(), *window));

        let Some(series) = self.series.get(&key) else {
            return PriceSeries::empty();
        };

        let points = series
            .points()
            .iter()
            .filter(|p| window.contains(p.date))
            .copied()
            .collect();

        // A filtered subset of a valid series is still valid.
        PriceSeries::new(points).unwrap_or_default()
    }
}
