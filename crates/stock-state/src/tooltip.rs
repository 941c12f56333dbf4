//! Shared tooltip state
//!
//! There is exactly one tooltip per page. Its state lives in a signal owned by
//! [`TooltipHandle`]; the view mounts a single element at the app root and any
//! chart shows or hides it through the handle.

use leptos::prelude::*;
use stock_core::{colors, style, Point};

/// Tooltip placement relative to the pointer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TooltipConfig {
    pub offset_x: f64,
    pub offset_y: f64,
    pub opacity: f64,
    pub fade_in_ms: u32,
    pub fade_out_ms: u32,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            offset_x: style::TOOLTIP_OFFSET_X,
            offset_y: style::TOOLTIP_OFFSET_Y,
            opacity: style::TOOLTIP_OPACITY,
            fade_in_ms: style::TOOLTIP_FADE_IN_MS,
            fade_out_ms: style::TOOLTIP_FADE_OUT_MS,
        }
    }
}

/// Lines shown inside the tooltip
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TooltipContent {
    pub lines: Vec<String>,
}

impl TooltipContent {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// Symbol, date and close of a hovered point
    pub fn from_point(point: &Point) -> Self {
        Self::new(vec![
            format!("Symbol: {}", point.symbol),
            format!("Date: {}", point.date_str()),
            format!("Close: {}", point.close),
        ])
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TooltipState {
    pub content: TooltipContent,
    /// Page coordinates of the tooltip's top-left corner
    pub left: f64,
    pub top: f64,
    pub visible: bool,
    pub config: TooltipConfig,
}

impl TooltipState {
    pub fn new(config: TooltipConfig) -> Self {
        Self {
            content: TooltipContent::default(),
            left: 0.0,
            top: 0.0,
            visible: false,
            config,
        }
    }

    /// Show `content` near the pointer at page position (`x`, `y`)
    pub fn show(self, content: TooltipContent, x: f64, y: f64) -> Self {
        Self {
            left: x + self.config.offset_x,
            top: y + self.config.offset_y,
            content,
            visible: true,
            ..self
        }
    }

    /// Start fading out. Content and position stay so the fade is not blank.
    pub fn hide(self) -> Self {
        Self {
            visible: false,
            ..self
        }
    }

    pub fn opacity(&self) -> f64 {
        if self.visible {
            self.config.opacity
        } else {
            0.0
        }
    }

    /// Duration of the opacity transition toward the current target
    pub fn transition_ms(&self) -> u32 {
        if self.visible {
            self.config.fade_in_ms
        } else {
            self.config.fade_out_ms
        }
    }

    /// Inline style for the tooltip element
    pub fn css(&self) -> String {
        format!(
            "position: absolute; left: {}px; top: {}px; opacity: {}; transition: opacity {}ms; background: {}; pointer-events: none;",
            self.left,
            self.top,
            self.opacity(),
            self.transition_ms(),
            colors::TOOLTIP_BG
        )
    }
}

impl Default for TooltipState {
    fn default() -> Self {
        Self::new(TooltipConfig::default())
    }
}

/// Copyable handle to the page's single tooltip
#[derive(Debug, Clone, Copy)]
pub struct TooltipHandle(RwSignal<TooltipState>);

impl TooltipHandle {
    pub fn new(config: TooltipConfig) -> Self {
        Self(RwSignal::new(TooltipState::new(config)))
    }

    pub fn show(&self, content: TooltipContent, x: f64, y: f64) {
        self.0.update(|state| *state = state.clone().show(content, x, y));
    }

    pub fn hide(&self) {
        self.0.update(|state| *state = state.clone().hide());
    }

    pub fn state(&self) -> RwSignal<TooltipState> {
        self.0
    }
}

impl Default for TooltipHandle {
    fn default() -> Self {
        Self::new(TooltipConfig::default())
    }
}

/// Provide the tooltip once. Later calls in the same tree return the
/// existing handle instead of creating a second tooltip.
pub fn provide_tooltip(config: TooltipConfig) -> TooltipHandle {
    if let Some(existing) = use_context::<TooltipHandle>() {
        return existing;
    }
    let handle = TooltipHandle::new(config);
    provide_context(handle);
    handle
}

pub fn use_tooltip() -> TooltipHandle {
    expect_context::<TooltipHandle>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn aapl(date: &str) -> Point {
        Point::new(stock_core::parse_date(date).unwrap(), 187.44, "AAPL")
    }

    #[test]
    fn test_content_from_point() {
        let content = TooltipContent::from_point(&aapl("2024-03-05"));
        assert_eq!(
            content.lines,
            vec!["Symbol: AAPL", "Date: 2024-03-05", "Close: 187.44"]
        );
    }

    #[test]
    fn test_initially_transparent() {
        let state = TooltipState::default();
        assert!(!state.visible);
        assert_eq!(state.opacity(), 0.0);
    }

    #[test]
    fn test_show_offsets_and_fades_in() {
        let state = TooltipState::default().show(TooltipContent::new(vec!["x".into()]), 100.0, 200.0);
        assert_eq!((state.left, state.top), (105.0, 172.0));
        assert_eq!(state.opacity(), 0.9);
        assert_eq!(state.transition_ms(), 200);
        assert!(state.css().contains("left: 105px"));
    }

    #[test]
    fn test_hide_fades_out_and_keeps_content() {
        let shown = TooltipState::default().show(TooltipContent::new(vec!["x".into()]), 10.0, 50.0);
        let hidden = shown.clone().hide();
        assert_eq!(hidden.opacity(), 0.0);
        assert_eq!(hidden.transition_ms(), 500);
        assert_eq!(hidden.content, shown.content);
        assert_eq!((hidden.left, hidden.top), (shown.left, shown.top));
    }

    #[test]
    fn test_provide_tooltip_is_shared() {
        let owner = Owner::new();
        owner.with(|| {
            let first = provide_tooltip(TooltipConfig::default());
            first.show(TooltipContent::new(vec!["AAPL".into()]), 10.0, 20.0);

            let second = provide_tooltip(TooltipConfig {
                offset_x: 50.0,
                ..TooltipConfig::default()
            });
            let state = second.state().get_untracked();
            assert!(state.visible);
            assert_eq!(state.content.lines, vec!["AAPL"]);
            assert_eq!(state.config, TooltipConfig::default());

            second.hide();
            assert!(!use_tooltip().state().get_untracked().visible);
            assert!(!first.state().get_untracked().visible);
        });
    }

    #[test]
    fn test_repeated_show_replaces_content() {
        let state = TooltipState::default()
            .show(TooltipContent::new(vec!["a".into()]), 0.0, 0.0)
            .hide()
            .show(TooltipContent::new(vec!["b".into()]), 1.0, 1.0);
        assert_eq!(state.content.lines, vec!["b"]);
        assert!(state.visible);
    }
}
