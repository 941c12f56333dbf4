//! Raw price records and the normalizer that turns them into typed points

use crate::Symbol;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// RAW RECORDS
// ============================================================================

/// Untyped scalar as sent by the server: text, number or null.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawValue {
    Text(String),
    Number(f64),
    #[default]
    Null,
}

impl RawValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

/// Server price record. Extra columns (Open, High, Volume, ...) are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawPoint {
    #[serde(rename = "Date", default)]
    pub date: RawValue,
    #[serde(rename = "Close", default)]
    pub close: RawValue,
    #[serde(rename = "Symbol", default)]
    pub symbol: Symbol,
}

impl RawPoint {
    pub fn new(date: impl Into<RawValue>, close: impl Into<RawValue>, symbol: impl Into<Symbol>) -> Self {
        Self {
            date: date.into(),
            close: close.into(),
            symbol: symbol.into(),
        }
    }
}

/// Why a raw record was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("missing date")]
    MissingDate,
    #[error("invalid date: {0}")]
    InvalidDate(String),
    #[error("missing close")]
    MissingClose,
    #[error("invalid close: {0}")]
    InvalidClose(String),
}

// ============================================================================
// TYPED POINTS
// ============================================================================

/// Validated price point: a real calendar date and a finite close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub date: NaiveDate,
    pub close: f64,
    pub symbol: Symbol,
}

impl Point {
    pub fn new(date: NaiveDate, close: f64, symbol: impl Into<Symbol>) -> Self {
        Self {
            date,
            close,
            symbol: symbol.into(),
        }
    }

    /// ISO calendar date (YYYY-MM-DD)
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Unix timestamp (ms) of midnight UTC on the point's date
    pub fn timestamp_ms(&self) -> i64 {
        date_to_millis(self.date)
    }
}

impl TryFrom<&RawPoint> for Point {
    type Error = ParseError;

    fn try_from(raw: &RawPoint) -> Result<Self, Self::Error> {
        let date = match &raw.date {
            RawValue::Text(s) => parse_date(s)?,
            RawValue::Number(n) => return Err(ParseError::InvalidDate(n.to_string())),
            RawValue::Null => return Err(ParseError::MissingDate),
        };
        let close = match &raw.close {
            RawValue::Text(s) => parse_close(s)?,
            RawValue::Number(n) if n.is_finite() => *n,
            RawValue::Number(n) => return Err(ParseError::InvalidClose(n.to_string())),
            RawValue::Null => return Err(ParseError::MissingClose),
        };
        Ok(Self::new(date, close, raw.symbol.clone()))
    }
}

/// Midnight UTC of `date` in milliseconds
pub fn date_to_millis(date: NaiveDate) -> i64 {
    date.and_hms_opt(0, 0, 0)
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or_default()
}

/// Parse a calendar date.
///
/// Accepts `YYYY-MM-DD`, the same followed by a `T` or space separated time
/// (the time part is discarded), and RFC 2822 dates as produced by HTTP
/// style JSON encoders.
pub fn parse_date(s: &str) -> Result<NaiveDate, ParseError> {
    let s = s.trim();
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(date);
    }

    if s.len() > 10 && matches!(s.as_bytes()[10], b'T' | b' ') {
        if let Some(Ok(date)) = s.get(..10).map(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d")) {
            return Ok(date);
        }
    }

    DateTime::parse_from_rfc2822(s)
        .map(|dt| dt.date_naive())
        .map_err(|_| ParseError::InvalidDate(s.to_string()))
}

/// Parse a close price; rejects NaN and infinities.
pub fn parse_close(s: &str) -> Result<f64, ParseError> {
    match s.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(ParseError::InvalidClose(s.to_string())),
    }
}

/// Convert raw records into typed points, dropping invalid ones.
///
/// Output order follows input order. Rejections are logged at debug level
/// and never retried.
pub fn normalize(raw: &[RawPoint]) -> Vec<Point> {
    let points: Vec<Point> = raw
        .iter()
        .enumerate()
        .filter_map(|(i, record)| match Point::try_from(record) {
            Ok(point) => Some(point),
            Err(e) => {
                tracing::debug!("Dropping record {} ({}): {}", i, record.symbol, e);
                None
            }
        })
        .collect();

    if points.len() < raw.len() {
        tracing::debug!("Normalized {} of {} records", points.len(), raw.len());
    }

    points
}
