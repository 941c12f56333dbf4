//! # stock-charts
//!
//! D3.js-style SVG charting library built with Leptos.
//!
//! ## Architecture
//!
//! Uses Strategy pattern for:
//! - Scale computation (linear, time)
//! - Path generation (straight line, monotone cubic)
//!
//! ## Modules
//!
//! - `chartkit` - Core primitives: scales, paths, formatters
//! - `axis` - Tick generation and axis components
//! - `layout` - Pixel layout of a multi-series price chart

pub mod axis;
pub mod chartkit;
pub mod layout;

pub use axis::*;
pub use chartkit::*;
pub use layout::*;

// Re-export colors from stock-core for convenience
pub use stock_core::colors;

/// Chart margin configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartMargin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl ChartMargin {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }

    pub const fn uniform(margin: f64) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    /// Standard price chart margins (room for a left value axis)
    pub const fn standard() -> Self {
        Self::new(20.0, 30.0, 30.0, 40.0)
    }
}

impl Default for ChartMargin {
    fn default() -> Self {
        Self::standard()
    }
}

/// Chart dimensions with margin handling
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartDimensions {
    pub width: f64,
    pub height: f64,
    pub margin: ChartMargin,
}

impl ChartDimensions {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            margin: ChartMargin::default(),
        }
    }

    pub fn with_margin(mut self, margin: ChartMargin) -> Self {
        self.margin = margin;
        self
    }

    /// Inner width (excluding margins)
    pub fn inner_width(&self) -> f64 {
        (self.width - self.margin.left - self.margin.right).max(0.0)
    }

    /// Inner height (excluding margins)
    pub fn inner_height(&self) -> f64 {
        (self.height - self.margin.top - self.margin.bottom).max(0.0)
    }

    /// SVG transform for inner chart area
    pub fn inner_transform(&self) -> String {
        format!("translate({},{})", self.margin.left, self.margin.top)
    }

    /// ViewBox string for SVG
    pub fn viewbox(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }
}

impl Default for ChartDimensions {
    fn default() -> Self {
        Self::new(800.0, 400.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_plot_area() {
        let dims = ChartDimensions::default();
        assert_eq!(dims.inner_width(), 730.0);
        assert_eq!(dims.inner_height(), 350.0);
        assert_eq!(dims.inner_transform(), "translate(40,20)");
        assert_eq!(dims.viewbox(), "0 0 800 400");
    }

    #[test]
    fn test_margins_never_go_negative() {
        let dims = ChartDimensions::new(10.0, 10.0).with_margin(ChartMargin::uniform(20.0));
        assert_eq!(dims.inner_width(), 0.0);
        assert_eq!(dims.inner_height(), 0.0);
    }
}
