//! Per-symbol series grouping

use crate::{colors, Point, Symbol};
use chrono::NaiveDate;
use std::collections::HashMap;

/// Stable per-symbol index, assigned in first-seen order.
///
/// Joins chart elements (`line-<i>`, `dot-<i>`) with table rows (`row-<i>`).
pub type SeriesIndex = usize;

/// Ordered price points for one symbol
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub index: SeriesIndex,
    pub symbol: Symbol,
    /// Points in original response order
    pub points: Vec<Point>,
}

impl Series {
    pub fn new(index: SeriesIndex, symbol: Symbol) -> Self {
        Self {
            index,
            symbol,
            points: Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Palette color for this series
    pub fn color(&self) -> &'static str {
        colors::series_color(self.index)
    }

    /// Points ordered by date (stable for equal dates)
    pub fn by_date(&self) -> Vec<&Point> {
        let mut sorted: Vec<&Point> = self.points.iter().collect();
        sorted.sort_by_key(|p| p.date);
        sorted
    }

    pub fn line_class(&self) -> String {
        format!("line-{}", self.index)
    }

    pub fn dot_class(&self) -> String {
        format!("dot-{}", self.index)
    }
}

/// Group points by symbol, preserving the order symbols are first seen.
pub fn group_by_symbol(points: &[Point]) -> Vec<Series> {
    let mut lookup: HashMap<&Symbol, SeriesIndex> = HashMap::new();
    let mut series: Vec<Series> = Vec::new();

    for point in points {
        let index = *lookup.entry(&point.symbol).or_insert_with(|| {
            series.push(Series::new(series.len(), point.symbol.clone()));
            series.len() - 1
        });
        series[index].points.push(point.clone());
    }

    series
}

/// Earliest and latest date across all points
pub fn date_extent(points: &[Point]) -> Option<(NaiveDate, NaiveDate)> {
    let min = points.iter().map(|p| p.date).min()?;
    let max = points.iter().map(|p| p.date).max()?;
    Some((min, max))
}

/// Largest close across all points
pub fn close_max(points: &[Point]) -> Option<f64> {
    points.iter().map(|p| p.close).reduce(f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(date: &str, close: f64, symbol: &str) -> Point {
        Point::new(crate::parse_date(date).unwrap(), close, symbol)
    }

    #[test]
    fn test_first_seen_order() {
        let points = vec![
            pt("2024-01-01", 1.0, "A"),
            pt("2024-01-01", 2.0, "B"),
            pt("2024-01-02", 3.0, "A"),
            pt("2024-01-01", 4.0, "C"),
        ];

        let series = group_by_symbol(&points);
        let order: Vec<(&str, usize)> = series.iter().map(|s| (s.symbol.as_str(), s.index)).collect();
        assert_eq!(order, vec![("A", 0), ("B", 1), ("C", 2)]);
        assert_eq!(series[0].len(), 2);
        assert_eq!(series[0].points[1].close, 3.0);
    }

    #[test]
    fn test_by_date_sorts_within_series() {
        let points = vec![
            pt("2024-01-03", 3.0, "A"),
            pt("2024-01-01", 1.0, "A"),
            pt("2024-01-02", 2.0, "A"),
        ];
        let series = group_by_symbol(&points);
        let closes: Vec<f64> = series[0].by_date().iter().map(|p| p.close).collect();
        assert_eq!(closes, vec![1.0, 2.0, 3.0]);
        // response order is kept on the series itself
        assert_eq!(series[0].points[0].close, 3.0);
    }

    #[test]
    fn test_classes_and_colors() {
        let series = group_by_symbol(&[pt("2024-01-01", 1.0, "A"), pt("2024-01-01", 1.0, "B")]);
        assert_eq!(series[1].line_class(), "line-1");
        assert_eq!(series[1].dot_class(), "dot-1");
        assert_eq!(series[1].color(), colors::CATEGORY10[1]);
    }

    #[test]
    fn test_extents() {
        assert!(date_extent(&[]).is_none());
        assert!(close_max(&[]).is_none());

        let points = vec![
            pt("2024-02-01", 5.0, "A"),
            pt("2024-01-15", 9.5, "B"),
            pt("2024-03-01", 2.0, "A"),
        ];
        let (min, max) = date_extent(&points).unwrap();
        assert_eq!(min.to_string(), "2024-01-15");
        assert_eq!(max.to_string(), "2024-03-01");
        assert_eq!(close_max(&points), Some(9.5));
    }
}
