//! # chartkit
//!
//! Core chart primitives: scales, path builders, formatters.
//! Implements Strategy pattern for flexible scale and rendering behaviors.

use chrono::{DateTime, Datelike, Days, Months, NaiveDate};
use std::fmt::Write;

const DAY_MS: i64 = 86_400_000;

// ============================================================================
// STRATEGY PATTERN: Scale Trait
// ============================================================================

/// Strategy trait for scales (maps domain values to range values)
pub trait Scale: Send + Sync {
    /// Scale a value from domain to range
    fn scale(&self, value: f64) -> f64;
}

// ============================================================================
// LINEAR SCALE
// ============================================================================

/// Linear scale (D3-style continuous scale)
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new() -> Self {
        Self {
            domain: (0.0, 1.0),
            range: (0.0, 1.0),
        }
    }

    pub fn domain(mut self, min: f64, max: f64) -> Self {
        self.domain = (min, max);
        self
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    /// Get domain bounds
    pub fn domain_bounds(&self) -> (f64, f64) {
        self.domain
    }

    /// Get range bounds
    pub fn range_bounds(&self) -> (f64, f64) {
        self.range
    }

    /// Generate "nice" tick values (rounded to clean numbers)
    pub fn nice_ticks(&self, count: usize) -> Vec<f64> {
        let (min, max) = self.domain;
        let range = max - min;

        if range == 0.0 || count == 0 {
            return vec![min];
        }

        let rough_step = range.abs() / count as f64;
        let magnitude = 10.0_f64.powf(rough_step.log10().floor());
        let residual = rough_step / magnitude;

        let nice_step = if residual <= 1.0 {
            magnitude
        } else if residual <= 2.0 {
            2.0 * magnitude
        } else if residual <= 5.0 {
            5.0 * magnitude
        } else {
            10.0 * magnitude
        };

        let (lo, hi) = (min.min(max), min.max(max));
        let first = (lo / nice_step).ceil() as i64;
        let last = (hi / nice_step).floor() as i64;

        // multiply rather than accumulate so ticks stay exact multiples
        (first..=last).map(|k| k as f64 * nice_step).collect()
    }
}

impl Default for LinearScale {
    fn default() -> Self {
        Self::new()
    }
}

impl Scale for LinearScale {
    fn scale(&self, value: f64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if (d_max - d_min).abs() < f64::EPSILON {
            return (r_min + r_max) / 2.0;
        }

        let normalized = (value - d_min) / (d_max - d_min);
        r_min + normalized * (r_max - r_min)
    }
}

// ============================================================================
// TIME SCALE
// ============================================================================

/// Time scale (maps timestamps to pixel positions)
#[derive(Debug, Clone, PartialEq)]
pub struct TimeScale {
    domain: (i64, i64), // Unix timestamps in milliseconds
    range: (f64, f64),
}

impl TimeScale {
    pub fn new() -> Self {
        Self {
            domain: (0, 1),
            range: (0.0, 1.0),
        }
    }

    pub fn domain(mut self, min: i64, max: i64) -> Self {
        self.domain = (min, max);
        self
    }

    /// Domain from calendar dates (midnight UTC)
    pub fn domain_dates(self, min: NaiveDate, max: NaiveDate) -> Self {
        self.domain(stock_core::date_to_millis(min), stock_core::date_to_millis(max))
    }

    pub fn range(mut self, min: f64, max: f64) -> Self {
        self.range = (min, max);
        self
    }

    pub fn domain_bounds(&self) -> (i64, i64) {
        self.domain
    }

    pub fn range_bounds(&self) -> (f64, f64) {
        self.range
    }

    /// Scale timestamp to pixel position
    pub fn scale(&self, timestamp: i64) -> f64 {
        let (d_min, d_max) = self.domain;
        let (r_min, r_max) = self.range;

        if d_max == d_min {
            return (r_min + r_max) / 2.0;
        }

        let normalized = (timestamp - d_min) as f64 / (d_max - d_min) as f64;
        r_min + normalized * (r_max - r_min)
    }

    /// Scale a calendar date to pixel position
    pub fn scale_date(&self, date: NaiveDate) -> f64 {
        self.scale(stock_core::date_to_millis(date))
    }

    /// Number of whole days spanned by the domain
    pub fn span_days(&self) -> i64 {
        (self.domain.1 - self.domain.0).abs() / DAY_MS
    }

    /// Calendar-aligned tick dates (roughly `count` of them).
    ///
    /// Short spans tick every 1, 2, 7 or 14 days starting at the first date;
    /// longer spans tick on the first of every 1, 3, 6 or 12 months.
    pub fn date_ticks(&self, count: usize) -> Vec<NaiveDate> {
        let (Some(min), Some(max)) = (millis_to_date(self.domain.0), millis_to_date(self.domain.1)) else {
            return Vec::new();
        };
        let (min, max) = (min.min(max), min.max(max));

        let span = (max - min).num_days();
        if count == 0 {
            return Vec::new();
        }
        if span == 0 {
            return vec![min];
        }

        let target = span as f64 / count as f64;
        let mut ticks = Vec::new();

        if target <= 14.0 {
            let step = [1u64, 2, 7, 14]
                .into_iter()
                .find(|&s| s as f64 >= target)
                .unwrap_or(14);

            let mut tick = Some(min);
            while let Some(date) = tick.filter(|d| *d <= max) {
                ticks.push(date);
                tick = date.checked_add_days(Days::new(step));
            }
        } else {
            let step = [1u32, 3, 6, 12]
                .into_iter()
                .find(|&m| m as f64 * 30.44 >= target)
                .unwrap_or_else(|| 12 * (target / 365.25).ceil() as u32);

            let mut tick = min.with_day(1).and_then(|first| {
                if first < min {
                    first.checked_add_months(Months::new(1))
                } else {
                    Some(first)
                }
            });
            while let Some(date) = tick.filter(|d| *d <= max) {
                ticks.push(date);
                tick = date.checked_add_months(Months::new(step));
            }
        }

        ticks
    }
}

impl Default for TimeScale {
    fn default() -> Self {
        Self::new()
    }
}

fn millis_to_date(ms: i64) -> Option<NaiveDate> {
    DateTime::from_timestamp_millis(ms).map(|dt| dt.date_naive())
}

// ============================================================================
// STRATEGY PATTERN: Path Generator Trait
// ============================================================================

/// Strategy trait for path generation
pub trait PathGenerator: Send + Sync {
    fn generate(&self, points: &[(f64, f64)]) -> String;
}

/// Straight-segment line path generator
#[derive(Debug, Clone, Default)]
pub struct LinePath;

impl PathGenerator for LinePath {
    fn generate(&self, points: &[(f64, f64)]) -> String {
        let Some((&(x, y), rest)) = points.split_first() else {
            return String::new();
        };

        let mut builder = PathBuilder::new().move_to(x, y);
        for &(x, y) in rest {
            builder = builder.line_to(x, y);
        }
        builder.build()
    }
}

/// One cubic Bezier segment of a smoothed curve
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    pub from: (f64, f64),
    pub c1: (f64, f64),
    pub c2: (f64, f64),
    pub to: (f64, f64),
}

/// Monotone cubic interpolation along x (d3 `curveMonotoneX`).
///
/// Tangents follow Steffen's method, so the curve never overshoots the
/// y-values of the two points bounding a segment. Points must be ordered by
/// x; equal x values produce a flat tangent.
#[derive(Debug, Clone, Default)]
pub struct MonotoneXPath;

impl MonotoneXPath {
    /// Tangent (dy/dx) at every point; empty for fewer than 3 points.
    pub fn tangents(points: &[(f64, f64)]) -> Vec<f64> {
        let n = points.len();
        if n < 3 {
            return Vec::new();
        }

        let widths: Vec<f64> = points.windows(2).map(|w| w[1].0 - w[0].0).collect();
        let slopes: Vec<f64> = points
            .windows(2)
            .zip(&widths)
            .map(|(w, &h)| if h != 0.0 { (w[1].1 - w[0].1) / h } else { 0.0 })
            .collect();

        let mut tangents = vec![0.0; n];
        for k in 1..n - 1 {
            let (h0, h1) = (widths[k - 1], widths[k]);
            let (s0, s1) = (slopes[k - 1], slopes[k]);
            let p = if h0 + h1 != 0.0 { (s0 * h1 + s1 * h0) / (h0 + h1) } else { 0.0 };
            let m = (sign(s0) + sign(s1)) * s0.abs().min(s1.abs()).min(0.5 * p.abs());
            tangents[k] = if m.is_finite() { m } else { 0.0 };
        }

        tangents[0] = end_tangent(widths[0], slopes[0], tangents[1]);
        tangents[n - 1] = end_tangent(widths[n - 2], slopes[n - 2], tangents[n - 2]);
        tangents
    }

    /// Bezier segments between consecutive points (for 3+ points)
    pub fn segments(points: &[(f64, f64)]) -> Vec<CubicSegment> {
        let tangents = Self::tangents(points);
        if tangents.is_empty() {
            return Vec::new();
        }

        points
            .windows(2)
            .enumerate()
            .map(|(k, w)| {
                let ((x0, y0), (x1, y1)) = (w[0], w[1]);
                let dx = (x1 - x0) / 3.0;
                CubicSegment {
                    from: (x0, y0),
                    c1: (x0 + dx, y0 + dx * tangents[k]),
                    c2: (x1 - dx, y1 - dx * tangents[k + 1]),
                    to: (x1, y1),
                }
            })
            .collect()
    }
}

impl PathGenerator for MonotoneXPath {
    fn generate(&self, points: &[(f64, f64)]) -> String {
        // two points or fewer: nothing to smooth
        if points.len() < 3 {
            return LinePath.generate(points);
        }

        let (x, y) = points[0];
        let builder = Self::segments(points)
            .into_iter()
            .fold(PathBuilder::new().move_to(x, y), |b, seg| {
                b.cubic_to(seg.c1.0, seg.c1.1, seg.c2.0, seg.c2.1, seg.to.0, seg.to.1)
            });
        builder.build()
    }
}

fn sign(x: f64) -> f64 {
    if x < 0.0 { -1.0 } else { 1.0 }
}

/// Endpoint tangent from the secant and the neighbouring interior tangent
fn end_tangent(width: f64, slope: f64, neighbour: f64) -> f64 {
    if width != 0.0 {
        (3.0 * slope - neighbour) / 2.0
    } else {
        neighbour
    }
}

// ============================================================================
// PATH BUILDER (fluent API)
// ============================================================================

/// SVG path builder with fluent API
#[derive(Debug, Clone, Default)]
pub struct PathBuilder {
    commands: String,
}

impl PathBuilder {
    pub fn new() -> Self {
        Self {
            commands: String::with_capacity(256),
        }
    }

    pub fn move_to(mut self, x: f64, y: f64) -> Self {
        let _ = write!(self.commands, "M{:.2},{:.2}", x, y);
        self
    }

    pub fn line_to(mut self, x: f64, y: f64) -> Self {
        let _ = write!(self.commands, "L{:.2},{:.2}", x, y);
        self
    }

    pub fn horizontal_to(mut self, x: f64) -> Self {
        let _ = write!(self.commands, "H{:.2}", x);
        self
    }

    pub fn vertical_to(mut self, y: f64) -> Self {
        let _ = write!(self.commands, "V{:.2}", y);
        self
    }

    pub fn cubic_to(mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> Self {
        let _ = write!(
            self.commands,
            "C{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            x1, y1, x2, y2, x, y
        );
        self
    }

    pub fn build(self) -> String {
        self.commands
    }
}

// ============================================================================
// FORMATTERS
// ============================================================================

/// Format large numbers with K/M/B suffixes
pub fn format_large_number(num: f64) -> String {
    let abs = num.abs();
    let sign = if num < 0.0 { "-" } else { "" };

    if abs >= 1_000_000_000.0 {
        format!("{}{:.2}B", sign, abs / 1_000_000_000.0)
    } else if abs >= 1_000_000.0 {
        format!("{}{:.2}M", sign, abs / 1_000_000.0)
    } else if abs >= 1_000.0 {
        format!("{}{:.2}K", sign, abs / 1_000.0)
    } else {
        format!("{}{:.2}", sign, abs)
    }
}

/// Format a value-axis tick label
pub fn format_tick_value(value: f64) -> String {
    if value.abs() >= 10_000.0 {
        format_large_number(value)
    } else if value.fract().abs() < 1e-9 {
        format!("{:.0}", value)
    } else {
        let s = format!("{:.2}", value);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Format a time-axis tick label; coarser for long spans
pub fn format_date_tick(date: NaiveDate, span_days: i64) -> String {
    if span_days > 180 {
        date.format("%b %Y").to_string()
    } else {
        date.format("%b %d").to_string()
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_linear_scale() {
        let scale = LinearScale::new()
            .domain(0.0, 100.0)
            .range(0.0, 500.0);

        assert_eq!(scale.scale(0.0), 0.0);
        assert_eq!(scale.scale(50.0), 250.0);
        assert_eq!(scale.scale(100.0), 500.0);
    }

    #[test]
    fn test_linear_scale_inverted_range() {
        let scale = LinearScale::new()
            .domain(0.0, 20.0)
            .range(350.0, 0.0);

        assert_eq!(scale.scale(0.0), 350.0);
        assert_eq!(scale.scale(20.0), 0.0);
        assert_eq!(scale.scale(10.0), 175.0);
    }

    #[test]
    fn test_linear_scale_degenerate_domain() {
        let scale = LinearScale::new().domain(0.0, 0.0).range(350.0, 0.0);
        assert_eq!(scale.scale(0.0), 175.0);
    }

    #[test]
    fn test_nice_ticks() {
        let scale = LinearScale::new().domain(0.0, 187.0);
        let ticks = scale.nice_ticks(10);
        assert_eq!(ticks.first(), Some(&0.0));
        assert_eq!(ticks.last(), Some(&180.0));
        assert!(ticks.windows(2).all(|w| (w[1] - w[0] - 20.0).abs() < 1e-9));
    }

    #[test]
    fn test_time_scale() {
        let scale = TimeScale::new()
            .domain_dates(ymd(2024, 1, 1), ymd(2024, 1, 11))
            .range(0.0, 730.0);

        assert_eq!(scale.scale_date(ymd(2024, 1, 1)), 0.0);
        assert_eq!(scale.scale_date(ymd(2024, 1, 11)), 730.0);
        assert_eq!(scale.scale_date(ymd(2024, 1, 6)), 365.0);
        assert_eq!(scale.span_days(), 10);
    }

    #[test]
    fn test_time_scale_single_date() {
        let scale = TimeScale::new()
            .domain_dates(ymd(2024, 1, 1), ymd(2024, 1, 1))
            .range(0.0, 730.0);
        assert_eq!(scale.scale_date(ymd(2024, 1, 1)), 365.0);
        assert_eq!(scale.date_ticks(8), vec![ymd(2024, 1, 1)]);
    }

    #[test]
    fn test_daily_and_weekly_ticks() {
        let scale = TimeScale::new().domain_dates(ymd(2024, 1, 1), ymd(2024, 1, 8));
        let ticks = scale.date_ticks(8);
        assert_eq!(ticks.len(), 8);
        assert_eq!(ticks[7], ymd(2024, 1, 8));

        let scale = TimeScale::new().domain_dates(ymd(2024, 1, 1), ymd(2024, 2, 15));
        let ticks = scale.date_ticks(8);
        assert!(ticks.windows(2).all(|w| (w[1] - w[0]).num_days() == 7));
        assert!(ticks.len() <= 8);
    }

    #[test]
    fn test_monthly_ticks_start_on_first() {
        let scale = TimeScale::new().domain_dates(ymd(2023, 1, 15), ymd(2024, 1, 15));
        let ticks = scale.date_ticks(6);
        assert!(!ticks.is_empty());
        assert!(ticks.iter().all(|d| d.day() == 1));
        assert_eq!(ticks[0], ymd(2023, 2, 1));
        assert!(ticks.iter().all(|d| *d >= ymd(2023, 1, 15) && *d <= ymd(2024, 1, 15)));
    }

    #[test]
    fn test_path_builder() {
        let path = PathBuilder::new()
            .move_to(0.0, 0.0)
            .line_to(100.0, 100.0)
            .horizontal_to(150.0)
            .vertical_to(20.0)
            .build();

        assert_eq!(path, "M0.00,0.00L100.00,100.00H150.00V20.00");
    }

    #[test]
    fn test_line_path_generator() {
        let generator = LinePath;
        let path = generator.generate(&[(0.0, 0.0), (50.0, 50.0), (100.0, 0.0)]);

        assert!(path.starts_with("M0.00,0.00"));
        assert!(path.contains("L50.00,50.00"));
        assert_eq!(generator.generate(&[]), "");
    }

    #[test]
    fn test_monotone_short_inputs() {
        assert_eq!(MonotoneXPath.generate(&[]), "");
        assert_eq!(MonotoneXPath.generate(&[(1.0, 2.0)]), "M1.00,2.00");
        assert_eq!(
            MonotoneXPath.generate(&[(0.0, 0.0), (10.0, 5.0)]),
            "M0.00,0.00L10.00,5.00"
        );
    }

    #[test]
    fn test_monotone_path_shape() {
        let path = MonotoneXPath.generate(&[(0.0, 10.0), (10.0, 0.0), (20.0, 5.0), (30.0, 5.0)]);
        assert!(path.starts_with("M0.00,10.00C"));
        assert_eq!(path.matches('C').count(), 3);
        assert!(path.ends_with("30.00,5.00"));
    }

    #[test]
    fn test_monotone_never_overshoots() {
        let points = [
            (0.0, 100.0),
            (10.0, 20.0),
            (15.0, 300.0),
            (40.0, 290.0),
            (41.0, 10.0),
            (60.0, 10.0),
            (90.0, 250.0),
        ];

        for seg in MonotoneXPath::segments(&points) {
            let lo = seg.from.1.min(seg.to.1) - 1e-9;
            let hi = seg.from.1.max(seg.to.1) + 1e-9;
            // the curve stays inside the hull of its control points
            assert!(seg.c1.1 >= lo && seg.c1.1 <= hi, "{:?}", seg);
            assert!(seg.c2.1 >= lo && seg.c2.1 <= hi, "{:?}", seg);
            assert!(seg.c1.0 >= seg.from.0 && seg.c2.0 <= seg.to.0);
        }
    }

    #[test]
    fn test_monotone_flat_at_local_extrema() {
        let tangents = MonotoneXPath::tangents(&[(0.0, 0.0), (1.0, 5.0), (2.0, 0.0)]);
        assert_eq!(tangents[1], 0.0);
    }

    #[test]
    fn test_monotone_duplicate_x() {
        let tangents = MonotoneXPath::tangents(&[(0.0, 0.0), (0.0, 5.0), (1.0, 6.0)]);
        assert!(tangents.iter().all(|t| t.is_finite()));
    }

    #[test]
    fn test_format_large_number() {
        assert_eq!(format_large_number(1_500_000.0), "1.50M");
        assert_eq!(format_large_number(2_500.0), "2.50K");
        assert_eq!(format_large_number(500.0), "500.00");
    }

    #[test]
    fn test_format_tick_value() {
        assert_eq!(format_tick_value(0.0), "0");
        assert_eq!(format_tick_value(180.0), "180");
        assert_eq!(format_tick_value(0.5), "0.5");
        assert_eq!(format_tick_value(25_000.0), "25.00K");
    }

    #[test]
    fn test_format_date_tick() {
        assert_eq!(format_date_tick(ymd(2024, 3, 5), 30), "Mar 05");
        assert_eq!(format_date_tick(ymd(2024, 3, 1), 400), "Mar 2024");
    }
}
