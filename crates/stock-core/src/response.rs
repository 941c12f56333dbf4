//! Response envelope from the stock data endpoint

use crate::{MetricRecord, RawPoint, Series, SeriesIndex, Symbol};
use serde::{Deserialize, Serialize};

/// `POST /get_stock_data` response body
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StockResponse {
    pub stocks: Vec<RawPoint>,
    pub metrics: Vec<MetricRecord>,
}

/// A position where the metrics row does not describe the chart series with
/// the same index.
#[derive(Debug, Clone, PartialEq)]
pub struct AlignmentMismatch {
    pub index: SeriesIndex,
    pub series: Option<Symbol>,
    pub metric: Option<String>,
}

impl std::fmt::Display for AlignmentMismatch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let series = self.series.as_ref().map_or("<none>", |s| s.as_str());
        let metric = self.metric.as_deref().unwrap_or("<none>");
        write!(f, "index {}: series {} vs metrics row {}", self.index, series, metric)
    }
}

/// Compare series order against metrics order, position by position.
///
/// Rows are linked to series purely by index, so any mismatch means a
/// highlighted row will point at another symbol's line.
pub fn alignment_mismatches(series: &[Series], metrics: &[MetricRecord]) -> Vec<AlignmentMismatch> {
    let len = series.len().max(metrics.len());

    (0..len)
        .filter_map(|i| {
            let s = series.get(i).map(|s| s.symbol.clone());
            let m = metrics.get(i).map(|m| m.symbol.clone());
            let aligned = match (&s, &m) {
                (Some(s), Some(m)) => s.as_str().trim() == m.trim(),
                _ => false,
            };
            (!aligned).then_some(AlignmentMismatch {
                index: i,
                series: s,
                metric: m,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{group_by_symbol, normalize};

    const BODY: &str = r#"{
        "stocks": [
            {"Date": "2024-01-01", "Close": "10", "Symbol": "AAPL"},
            {"Date": "2024-01-01", "Close": "20", "Symbol": "MSFT"},
            {"Date": "2024-01-02", "Close": "11", "Symbol": "AAPL"}
        ],
        "metrics": [
            {"symbol": "AAPL", "market_cap": 1, "pe_ratio": 2, "price_to_book": 3, "industry": "a", "sector": "b"},
            {"symbol": "MSFT", "market_cap": 4, "pe_ratio": 5, "price_to_book": 6, "industry": "c", "sector": "d"}
        ]
    }"#;

    #[test]
    fn test_decode_response() {
        let resp: StockResponse = serde_json::from_str(BODY).unwrap();
        assert_eq!(resp.stocks.len(), 3);
        assert_eq!(resp.metrics.len(), 2);
    }

    #[test]
    fn test_missing_metrics_is_an_error() {
        let body = r#"{"stocks": []}"#;
        assert!(serde_json::from_str::<StockResponse>(body).is_err());

        let body = r#"{"stocks": [], "metrics": {"symbol": "X"}}"#;
        assert!(serde_json::from_str::<StockResponse>(body).is_err());
    }

    #[test]
    fn test_aligned() {
        let resp: StockResponse = serde_json::from_str(BODY).unwrap();
        let series = group_by_symbol(&normalize(&resp.stocks));
        assert!(alignment_mismatches(&series, &resp.metrics).is_empty());
    }

    #[test]
    fn test_misaligned_when_symbol_has_no_prices() {
        let resp: StockResponse = serde_json::from_str(BODY).unwrap();
        let series = group_by_symbol(&normalize(&resp.stocks));
        let mut metrics = resp.metrics.clone();
        metrics.insert(0, MetricRecord::new("DELISTED"));

        let mismatches = alignment_mismatches(&series, &metrics);
        assert_eq!(mismatches.len(), 3);
        assert_eq!(mismatches[0].index, 0);
        assert_eq!(mismatches[2].series, None);
        assert_eq!(mismatches[2].metric.as_deref(), Some("MSFT"));
        assert_eq!(
            mismatches[0].to_string(),
            "index 0: series AAPL vs metrics row DELISTED"
        );
    }
}
