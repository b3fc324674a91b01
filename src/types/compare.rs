use super::PricePoint;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A ticker offered in the comparison menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StockOption {
    pub label: &'static str,
    pub symbol: &'static str,
}

/// The fixed comparison menu, in display order.
pub const STOCK_OPTIONS: &[StockOption] = &[
    StockOption { label: "Apple (AAPL)", symbol: "AAPL" },
    StockOption { label: "Tesla (TSLA)", symbol: "TSLA" },
    StockOption { label: "Amazon (AMZN)", symbol: "AMZN" },
    StockOption { label: "Google (GOOGL)", symbol: "GOOGL" },
    StockOption { label: "Microsoft (MSFT)", symbol: "MSFT" },
    StockOption { label: "Infosys (INFY.NS)", symbol: "INFY.NS" },
    StockOption { label: "Reliance (RELIANCE.NS)", symbol: "RELIANCE.NS" },
    StockOption { label: "TCS (TCS.NS)", symbol: "TCS.NS" },
];

/// Look up a menu entry by ticker (case-insensitive) or by its exact label.
pub fn find_stock_option(selection: &str) -> Option<&'static StockOption> {
    let selection = selection.trim();
    STOCK_OPTIONS
        .iter()
        .find(|o| o.symbol.eq_ignore_ascii_case(selection) || o.label == selection)
}

/// Closing-price line for one compared symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonSeries {
    pub symbol: String,
    pub label: String,
    pub points: Vec<PricePoint>,
}

/// Latest rows for one compared symbol.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryTable {
    pub symbol: String,
    pub label: String,
    pub rows: Vec<PricePoint>,
}

/// Comparison payload: one series and one table per symbol that returned data.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonReport {
    pub title: String,
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub series: Vec<ComparisonSeries>,
    pub tables: Vec<SummaryTable>,
    /// Symbols that returned no data, as user-facing messages.
    pub warnings: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_has_eight_entries() {
        assert_eq!(STOCK_OPTIONS.len(), 8);
        assert_eq!(STOCK_OPTIONS[0].symbol, "AAPL");
        assert_eq!(STOCK_OPTIONS[7].label, "TCS (TCS.NS)");
    }

    #[test]
    fn test_find_by_symbol_case_insensitive() {
        assert_eq!(find_stock_option("tsla").map(|o| o.symbol), Some("TSLA"));
        assert_eq!(find_stock_option(" infy.ns ").map(|o| o.symbol), Some("INFY.NS"));
    }

    #[test]
    fn test_find_by_label() {
        let option = find_stock_option("Reliance (RELIANCE.NS)").unwrap();
        assert_eq!(option.symbol, "RELIANCE.NS");
    }

    #[test]
    fn test_find_unknown() {
        assert!(find_stock_option("NVDA").is_none());
        assert!(find_stock_option("").is_none());
    }
}
