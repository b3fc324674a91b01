//! Price history providers.
//!
//! A provider answers every request with a [`PriceSeries`]. An unknown
//! symbol, an empty window, or a failed upstream call all come back as an
//! empty series; providers never surface errors of their own.

pub mod memory;
pub mod yahoo;

pub use memory::InMemoryHistoryProvider;
pub use yahoo::YahooFinanceClient;

use crate::types::{HistoryWindow, PriceSeries};

/// Source of daily closing prices.
#[axum::async_trait]
pub trait PriceHistoryProvider: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Fetch daily closes for `symbol` within `window`. Empty means no data.
    async fn fetch(&self, symbol: &str, window: &HistoryWindow) -> PriceSeries;
}
