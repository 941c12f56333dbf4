//! # stock-state
//!
//! Reactive state management for the Stock Insight dashboard.
//!
//! Interaction logic (highlighting, table sorting, tooltip) is written as
//! pure `(state, event) -> state` reducers; [`AppState`] wraps their results
//! in Leptos signals for the view layer.

pub mod dashboard;
pub mod highlight;
pub mod table;
pub mod tooltip;

pub use dashboard::*;
pub use highlight::*;
pub use table::*;
pub use tooltip::*;

use leptos::prelude::*;
use stock_core::StockResponse;

// ============================================================================
// APPLICATION STATE
// ============================================================================

/// Global application state with reactive signals
#[derive(Clone)]
pub struct AppState {
    /// Points and metrics of the latest response
    pub dashboard: DashboardState,
    /// Cross-highlight between chart and table
    pub highlight: RwSignal<HighlightState>,
    /// Metrics table sort state
    pub table: RwSignal<TableState>,
    /// The page's single tooltip
    pub tooltip: TooltipHandle,
    /// Last fetch failure, shown in the status line
    pub error: RwSignal<Option<String>>,
    /// A request is in flight
    pub loading: RwSignal<bool>,
}

impl AppState {
    pub fn new(tooltip: TooltipHandle) -> Self {
        Self {
            dashboard: DashboardState::new(),
            highlight: RwSignal::new(HighlightState::default()),
            table: RwSignal::new(TableState::default()),
            tooltip,
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
        }
    }

    // ========================================================================
    // Responses
    // ========================================================================

    /// Replace chart and table content with a new response.
    ///
    /// Interaction state from the previous cycle is discarded.
    pub fn apply_response(&self, response: StockResponse) -> ApplySummary {
        self.tooltip.hide();
        self.highlight.set(HighlightState::default());
        self.table.set(TableState::new(response.metrics.len()));
        let summary = self.dashboard.replace(response);
        self.error.set(None);

        tracing::info!(
            "Rendered {} of {} points in {} series, {} metrics rows",
            summary.kept,
            summary.received,
            summary.series,
            summary.metrics
        );
        summary
    }

    // ========================================================================
    // Error Handling
    // ========================================================================

    /// Set error message
    pub fn set_error(&self, msg: impl Into<String>) {
        self.error.set(Some(msg.into()));
    }

    // ========================================================================
    // Loading State
    // ========================================================================

    pub fn set_loading(&self, loading: bool) {
        self.loading.set(loading);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(TooltipHandle::default())
    }
}

// ============================================================================
// CONTEXT HELPERS
// ============================================================================

/// Provide app state (and the shared tooltip) to the component tree
pub fn provide_app_state() -> AppState {
    let tooltip = provide_tooltip(TooltipConfig::default());
    let state = AppState::new(tooltip);
    provide_context(state.clone());
    state
}

/// Use app state from context
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}
