//! Company metrics records and generic value comparison for table sorting

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Metric cell value: number, text or null (fields the source had no data for)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MetricValue {
    Number(f64),
    Text(String),
    #[default]
    Null,
}

impl MetricValue {
    /// Ordering rank across kinds: null < number < text
    fn kind_rank(&self) -> u8 {
        match self {
            Self::Null => 0,
            Self::Number(_) => 1,
            Self::Text(_) => 2,
        }
    }

    /// Generic ascending comparison.
    ///
    /// Numbers compare numerically, text lexicographically; mixed kinds are
    /// ordered by [`kind_rank`](Self::kind_rank).
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Number(a), Self::Number(b)) => a.total_cmp(b),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            _ => self.kind_rank().cmp(&other.kind_rank()),
        }
    }

    /// Cell text: numbers as sent, null as empty
    pub fn display(&self) -> String {
        match self {
            Self::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => format!("{}", *n as i64),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
            Self::Null => String::new(),
        }
    }
}

impl From<f64> for MetricValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for MetricValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// Per-company metrics, one per requested symbol
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    pub symbol: String,
    #[serde(default)]
    pub market_cap: MetricValue,
    #[serde(default)]
    pub pe_ratio: MetricValue,
    #[serde(default)]
    pub price_to_book: MetricValue,
    #[serde(default)]
    pub industry: MetricValue,
    #[serde(default)]
    pub sector: MetricValue,
}

impl MetricRecord {
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            ..Default::default()
        }
    }

    pub fn with(mut self, column: MetricColumn, value: impl Into<MetricValue>) -> Self {
        let value = value.into();
        match column {
            MetricColumn::Symbol => self.symbol = value.display(),
            MetricColumn::MarketCap => self.market_cap = value,
            MetricColumn::PeRatio => self.pe_ratio = value,
            MetricColumn::PriceToBook => self.price_to_book = value,
            MetricColumn::Industry => self.industry = value,
            MetricColumn::Sector => self.sector = value,
        }
        self
    }

    /// Value of a column
    pub fn value(&self, column: MetricColumn) -> MetricValue {
        match column {
            MetricColumn::Symbol => MetricValue::Text(self.symbol.clone()),
            MetricColumn::MarketCap => self.market_cap.clone(),
            MetricColumn::PeRatio => self.pe_ratio.clone(),
            MetricColumn::PriceToBook => self.price_to_book.clone(),
            MetricColumn::Industry => self.industry.clone(),
            MetricColumn::Sector => self.sector.clone(),
        }
    }
}

/// Metrics table column, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricColumn {
    Symbol,
    MarketCap,
    PeRatio,
    PriceToBook,
    Industry,
    Sector,
}

impl MetricColumn {
    pub const COUNT: usize = 6;

    /// Header label (matches the record's field name)
    pub fn key(&self) -> &'static str {
        match self {
            Self::Symbol => "symbol",
            Self::MarketCap => "market_cap",
            Self::PeRatio => "pe_ratio",
            Self::PriceToBook => "price_to_book",
            Self::Industry => "industry",
            Self::Sector => "sector",
        }
    }

    /// Position in [`all`](Self::all)
    pub fn position(&self) -> usize {
        match self {
            Self::Symbol => 0,
            Self::MarketCap => 1,
            Self::PeRatio => 2,
            Self::PriceToBook => 3,
            Self::Industry => 4,
            Self::Sector => 5,
        }
    }

    pub fn all() -> &'static [Self] {
        &[
            Self::Symbol, Self::MarketCap, Self::PeRatio,
            Self::PriceToBook, Self::Industry, Self::Sector,
        ]
    }
}

impl std::fmt::Display for MetricColumn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}
