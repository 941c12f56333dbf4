//! Reactive data state for one dashboard render cycle

use leptos::prelude::*;
use stock_core::{alignment_mismatches, group_by_symbol, normalize, MetricRecord, Point, StockResponse};

/// Summary of applying one response
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplySummary {
    pub received: usize,
    pub kept: usize,
    pub series: usize,
    pub metrics: usize,
    pub misaligned: usize,
}

impl ApplySummary {
    pub fn dropped(&self) -> usize {
        self.received - self.kept
    }
}

/// Normalized points and metrics of the latest response
#[derive(Clone)]
pub struct DashboardState {
    /// Normalized price points (invalid records already dropped)
    pub points: RwSignal<Vec<Point>>,
    /// Metrics rows in response order
    pub metrics: RwSignal<Vec<MetricRecord>>,
    /// Incremented on every applied response
    pub cycle: RwSignal<u64>,
}

impl DashboardState {
    pub fn new() -> Self {
        Self {
            points: RwSignal::new(Vec::new()),
            metrics: RwSignal::new(Vec::new()),
            cycle: RwSignal::new(0),
        }
    }

    /// Replace all data with a fresh response
    pub fn replace(&self, response: StockResponse) -> ApplySummary {
        let points = normalize(&response.stocks);
        let summary = summarize_points(&points, &response);
        self.points.set(points);
        self.metrics.set(response.metrics);
        self.cycle.update(|c| *c += 1);
        summary
    }
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

/// Normalize and check a response without touching any signal
pub fn summarize(response: &StockResponse) -> ApplySummary {
    summarize_points(&normalize(&response.stocks), response)
}

fn summarize_points(points: &[Point], response: &StockResponse) -> ApplySummary {
    let series = group_by_symbol(points);
    let mismatches = alignment_mismatches(&series, &response.metrics);

    for mismatch in &mismatches {
        tracing::warn!("Metrics row not aligned with chart series, {}", mismatch);
    }

    ApplySummary {
        received: response.stocks.len(),
        kept: points.len(),
        series: series.len(),
        metrics: response.metrics.len(),
        misaligned: mismatches.len(),
    }
}
