//! Boundary between the dashboard and its price history provider.
//!
//! Providers signal "no data" with an empty series. This service turns
//! that into an explicit error so nothing downstream inspects emptiness.

use crate::error::{AppError, Result};
use crate::sources::PriceHistoryProvider;
use crate::types::{HistoryWindow, PriceSeries};
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// The provider had nothing for this symbol and window.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("no price history for {symbol} ({window})")]
pub struct NoHistory {
    pub symbol: String,
    pub window: HistoryWindow,
}

/// Trim and upper-case a user-entered ticker.
pub fn normalize_symbol(raw: &str) -> Result<String> {
    let symbol = raw.trim().to_uppercase();
    if symbol.is_empty() {
        return Err(AppError::BadRequest("Please enter a stock symbol.".to_string()));
    }
    Ok(symbol)
}

/// Fetches price history and classifies the outcome.
pub struct HistoryService {
    provider: Arc<dyn PriceHistoryProvider>,
}

impl HistoryService {
    pub fn new(provider: Arc<dyn PriceHistoryProvider>) -> Self {
        Self { provider }
    }

    /// Load the series for `symbol`, or [`NoHistory`] if the provider returned nothing.
    pub async fn load(
        &self,
        symbol: &str,
        window: HistoryWindow,
    ) -> std::result::Result<PriceSeries, NoHistory> {
        let series = self.provider.fetch(symbol, &window).await;

        if series.is_empty() {
            warn!(
                "{} returned no history for {} ({})",
                self.provider.name(),
                symbol,
                window
            );
            return Err(NoHistory {
                symbol: symbol.to_string(),
                window,
            });
        }

        info!(
            "Loaded {} closes for {} ({}) from {}",
            series.len(),
            symbol,
            window,
            self.provider.name()
        );
        Ok(series)
    }
}
