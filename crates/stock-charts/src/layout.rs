//! Pixel layout for the multi-series price chart
//!
//! All geometry is computed here, up front, from the normalized points. The
//! view layer only reads the result, which keeps the chart testable without
//! a DOM.

use crate::{
    axis::{time_ticks, value_ticks, AxisTick},
    chartkit::{LinearScale, MonotoneXPath, PathGenerator, Scale, TimeScale},
    ChartDimensions, ChartMargin,
};
use stock_core::{
    close_max, date_extent, group_by_symbol, normalize, style, Point, RawPoint, SeriesIndex, Symbol,
};

/// Price chart configuration
#[derive(Debug, Clone, PartialEq)]
pub struct ChartConfig {
    pub width: f64,
    pub height: f64,
    pub margin: ChartMargin,
    pub x_ticks: usize,
    pub y_ticks: usize,
    pub line_width: f64,
    pub active_line_width: f64,
    pub marker_radius: f64,
    pub active_marker_radius: f64,
    pub show_axis_labels: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 400.0,
            margin: ChartMargin::standard(),
            x_ticks: 8,
            y_ticks: 10,
            line_width: style::BASE_LINE_WIDTH,
            active_line_width: style::ACTIVE_LINE_WIDTH,
            marker_radius: style::BASE_MARKER_RADIUS,
            active_marker_radius: style::ACTIVE_MARKER_RADIUS,
            show_axis_labels: true,
        }
    }
}

impl ChartConfig {
    pub fn dimensions(&self) -> ChartDimensions {
        ChartDimensions::new(self.width, self.height).with_margin(self.margin)
    }
}

/// One point marker, in plot-area pixels
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerLayout {
    pub cx: f64,
    pub cy: f64,
    pub point: Point,
}

/// Line path and markers of one series
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesLayout {
    pub index: SeriesIndex,
    pub symbol: Symbol,
    pub color: &'static str,
    pub path: String,
    /// Markers in response order
    pub markers: Vec<MarkerLayout>,
}

impl SeriesLayout {
    pub fn line_class(&self) -> String {
        format!("line-{}", self.index)
    }

    pub fn dot_class(&self) -> String {
        format!("dot-{}", self.index)
    }
}

/// Complete chart geometry for one render cycle
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub dims: ChartDimensions,
    pub x_scale: TimeScale,
    pub y_scale: LinearScale,
    pub series: Vec<SeriesLayout>,
}

impl ChartLayout {
    /// Lay out normalized points on shared axes.
    ///
    /// Returns `None` when there is nothing to draw.
    pub fn build(points: &[Point], dims: ChartDimensions) -> Option<Self> {
        let (first, last) = date_extent(points)?;
        let max_close = close_max(points)?;

        // one domain for all series so they stay comparable
        let x_scale = TimeScale::new()
            .domain_dates(first, last)
            .range(0.0, dims.inner_width());
        let y_scale = LinearScale::new()
            .domain(0.0, max_close)
            .range(dims.inner_height(), 0.0);

        let series: Vec<SeriesLayout> = group_by_symbol(points)
            .into_iter()
            .map(|s| {
                let line: Vec<(f64, f64)> = s
                    .by_date()
                    .into_iter()
                    .map(|p| (x_scale.scale_date(p.date), y_scale.scale(p.close)))
                    .collect();

                let markers = s
                    .points
                    .iter()
                    .map(|p| MarkerLayout {
                        cx: x_scale.scale_date(p.date),
                        cy: y_scale.scale(p.close),
                        point: p.clone(),
                    })
                    .collect();

                SeriesLayout {
                    index: s.index,
                    color: s.color(),
                    path: MonotoneXPath.generate(&line),
                    symbol: s.symbol,
                    markers,
                }
            })
            .collect();

        tracing::debug!(
            "Chart layout: {} points in {} series, {} to {}, max close {}",
            points.len(),
            series.len(),
            first,
            last,
            max_close
        );

        Some(Self {
            dims,
            x_scale,
            y_scale,
            series,
        })
    }

    /// Normalize raw records, then lay them out
    pub fn from_raw(raw: &[RawPoint], dims: ChartDimensions) -> Option<Self> {
        Self::build(&normalize(raw), dims)
    }

    pub fn x_ticks(&self, count: usize) -> Vec<AxisTick> {
        time_ticks(&self.x_scale, count)
    }

    pub fn y_ticks(&self, count: usize) -> Vec<AxisTick> {
        value_ticks(&self.y_scale, count)
    }

    pub fn marker_count(&self) -> usize {
        self.series.iter().map(|s| s.markers.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use stock_core::colors;

    fn pt(date: &str, close: f64, symbol: &str) -> Point {
        Point::new(stock_core::parse_date(date).unwrap(), close, symbol)
    }

    #[test]
    fn test_nothing_to_draw() {
        let dims = ChartDimensions::default();
        assert!(ChartLayout::build(&[], dims).is_none());

        let raw = vec![
            RawPoint::new("bad", "1", "X"),
            RawPoint::new("2024-01-01", "bad", "X"),
        ];
        assert!(ChartLayout::from_raw(&raw, dims).is_none());
    }

    #[test]
    fn test_shared_domain_covers_union() {
        let points = vec![
            pt("2024-01-05", 50.0, "A"),
            pt("2024-01-10", 80.0, "A"),
            pt("2024-01-01", 20.0, "B"),
            pt("2024-01-08", 120.0, "B"),
        ];
        let layout = ChartLayout::build(&points, ChartDimensions::default()).unwrap();

        let (x0, x1) = layout.x_scale.domain_bounds();
        assert_eq!(x0, stock_core::date_to_millis(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        assert_eq!(x1, stock_core::date_to_millis(NaiveDate::from_ymd_opt(2024, 1, 10).unwrap()));
        assert_eq!(layout.y_scale.domain_bounds(), (0.0, 120.0));
        assert_eq!(layout.x_scale.range_bounds(), (0.0, 730.0));
        assert_eq!(layout.y_scale.range_bounds(), (350.0, 0.0));
    }

    #[test]
    fn test_marker_positions() {
        let points = vec![
            pt("2024-01-01", 0.0, "A"),
            pt("2024-01-11", 100.0, "A"),
        ];
        let layout = ChartLayout::build(&points, ChartDimensions::default()).unwrap();
        let markers = &layout.series[0].markers;

        assert_eq!((markers[0].cx, markers[0].cy), (0.0, 350.0));
        assert_eq!((markers[1].cx, markers[1].cy), (730.0, 0.0));
    }

    #[test]
    fn test_series_index_color_and_classes() {
        let points = vec![
            pt("2024-01-01", 1.0, "A"),
            pt("2024-01-01", 2.0, "B"),
            pt("2024-01-02", 3.0, "A"),
            pt("2024-01-01", 4.0, "C"),
        ];
        let layout = ChartLayout::build(&points, ChartDimensions::default()).unwrap();

        assert_eq!(layout.series.len(), 3);
        assert_eq!(layout.series[2].symbol.as_str(), "C");
        assert_eq!(layout.series[2].color, colors::CATEGORY10[2]);
        assert_eq!(layout.series[2].line_class(), "line-2");
        assert_eq!(layout.series[2].dot_class(), "dot-2");
        assert_eq!(layout.marker_count(), 4);
    }

    #[test]
    fn test_line_follows_date_order() {
        let points = vec![
            pt("2024-01-03", 30.0, "A"),
            pt("2024-01-01", 10.0, "A"),
            pt("2024-01-02", 20.0, "A"),
        ];
        let layout = ChartLayout::build(&points, ChartDimensions::default()).unwrap();
        let series = &layout.series[0];

        // path starts at the earliest date even though it came last-but-one
        assert!(series.path.starts_with("M0.00,"));
        assert_eq!(series.path.matches('C').count(), 2);
        // markers keep response order
        assert_eq!(series.markers[0].point.close, 30.0);
    }

    #[test]
    fn test_single_point() {
        let layout = ChartLayout::build(&[pt("2024-01-01", 5.0, "A")], ChartDimensions::default()).unwrap();
        let marker = &layout.series[0].markers[0];
        assert_eq!(marker.cx, 365.0);
        assert_eq!(marker.cy, 0.0);
        assert_eq!(layout.series[0].path, "M365.00,0.00");
    }

    #[test]
    fn test_default_config() {
        let config = ChartConfig::default();
        assert_eq!(config.dimensions(), ChartDimensions::default());
        assert_eq!(config.line_width, 1.5);
        assert_eq!(config.active_marker_radius, 6.0);
    }
}
