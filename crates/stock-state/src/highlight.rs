//! Cross-highlighting between chart series and metrics table rows
//!
//! Hover handlers on both sides feed [`HighlightEvent`]s through
//! [`HighlightState::reduce`]; the view asks the resulting state for stroke
//! widths and marker radii.

use stock_core::{style, SeriesIndex};

/// A single marker: series index and position within that series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MarkerKey {
    pub series: SeriesIndex,
    pub point: usize,
}

impl MarkerKey {
    pub fn new(series: SeriesIndex, point: usize) -> Self {
        Self { series, point }
    }
}

/// Pointer events that change highlighting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightEvent {
    MarkerEnter(MarkerKey),
    MarkerLeave(MarkerKey),
    RowEnter(SeriesIndex),
    RowLeave(SeriesIndex),
    Reset,
}

/// Which marker and which table row are currently hovered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighlightState {
    pub marker: Option<MarkerKey>,
    pub row: Option<SeriesIndex>,
}

impl HighlightState {
    /// Apply one event. Leave events only clear what they entered.
    pub fn reduce(self, event: HighlightEvent) -> Self {
        match event {
            HighlightEvent::MarkerEnter(key) => Self {
                marker: Some(key),
                ..self
            },
            HighlightEvent::MarkerLeave(key) if self.marker == Some(key) => Self {
                marker: None,
                ..self
            },
            HighlightEvent::RowEnter(index) => Self {
                row: Some(index),
                ..self
            },
            HighlightEvent::RowLeave(index) if self.row == Some(index) => Self {
                row: None,
                ..self
            },
            HighlightEvent::MarkerLeave(_) | HighlightEvent::RowLeave(_) => self,
            HighlightEvent::Reset => Self::default(),
        }
    }

    /// Whether the line of `series` is emphasized
    pub fn is_line_active(&self, series: SeriesIndex) -> bool {
        self.row == Some(series) || self.marker.is_some_and(|m| m.series == series)
    }

    /// Whether a marker is enlarged: it is hovered, or its series' row is
    pub fn is_marker_active(&self, key: MarkerKey) -> bool {
        self.row == Some(key.series) || self.marker == Some(key)
    }

    pub fn line_width(&self, series: SeriesIndex) -> f64 {
        if self.is_line_active(series) {
            style::ACTIVE_LINE_WIDTH
        } else {
            style::BASE_LINE_WIDTH
        }
    }

    pub fn marker_radius(&self, key: MarkerKey) -> f64 {
        if self.is_marker_active(key) {
            style::ACTIVE_MARKER_RADIUS
        } else {
            style::BASE_MARKER_RADIUS
        }
    }

    pub fn is_idle(&self) -> bool {
        self.marker.is_none() && self.row.is_none()
    }
}
