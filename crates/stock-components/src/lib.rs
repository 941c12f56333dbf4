//! # stock-components
//!
//! Leptos UI components for the Stock Insight dashboard.

pub mod dashboard;
pub mod metrics_table;
pub mod price_chart;
pub mod stock_form;
pub mod tooltip;

pub use dashboard::*;
pub use metrics_table::*;
pub use price_chart::*;
pub use stock_form::*;
pub use tooltip::*;
