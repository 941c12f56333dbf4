//! # stock-core
//!
//! Core domain types for the Stock Insight dashboard.
//!
//! Raw server records are normalized into typed [`Point`]s, grouped into
//! [`Series`] keyed by a stable [`SeriesIndex`], and paired with per-company
//! [`MetricRecord`]s.

pub mod metrics;
pub mod point;
pub mod response;
pub mod series;

pub use metrics::*;
pub use point::*;
pub use response::*;
pub use series::*;

use serde::{Deserialize, Serialize};

// ============================================================================
// CORE VALUE TYPES
// ============================================================================

/// Ticker symbol (e.g., "AAPL", "MSFT")
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(pub String);

impl Symbol {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Symbol {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Symbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

// ============================================================================
// HIGHLIGHT CONSTANTS
// ============================================================================

/// Stroke and marker sizes shared by chart-side and table-side highlighting.
pub mod style {
    pub const BASE_LINE_WIDTH: f64 = 1.5;
    pub const ACTIVE_LINE_WIDTH: f64 = 3.0;
    pub const BASE_MARKER_RADIUS: f64 = 3.0;
    pub const ACTIVE_MARKER_RADIUS: f64 = 6.0;

    /// Tooltip placement relative to the pointer (page coordinates)
    pub const TOOLTIP_OFFSET_X: f64 = 5.0;
    pub const TOOLTIP_OFFSET_Y: f64 = -28.0;
    pub const TOOLTIP_OPACITY: f64 = 0.9;
    pub const TOOLTIP_FADE_IN_MS: u32 = 200;
    pub const TOOLTIP_FADE_OUT_MS: u32 = 500;
}

// ============================================================================
// COLOR CONSTANTS
// ============================================================================

pub mod colors {
    /// Categorical palette (d3 Category10)
    pub const CATEGORY10: [&str; 10] = [
        "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd",
        "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
    ];

    pub const AXIS: &str = "#000000";
    pub const TOOLTIP_BG: &str = "#f5f5dc";
    pub const ERROR: &str = "#d62728";

    /// Palette color for a series index; indices past the palette cycle.
    pub fn series_color(index: usize) -> &'static str {
        CATEGORY10[index % CATEGORY10.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_cycles() {
        assert_eq!(colors::series_color(0), "#1f77b4");
        assert_eq!(colors::series_color(9), "#17becf");
        assert_eq!(colors::series_color(10), colors::series_color(0));
        assert_eq!(colors::series_color(23), colors::series_color(3));
    }

    #[test]
    fn test_palette_is_distinct() {
        let mut seen = colors::CATEGORY10.to_vec();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn test_symbol_serde_transparent() {
        let sym: Symbol = serde_json::from_str("\"AAPL\"").unwrap();
        assert_eq!(sym, Symbol::new("AAPL"));
        assert_eq!(sym.to_string(), "AAPL");
    }
}
