//! Main dashboard layout component

use leptos::prelude::*;
use stock_core::colors;
use stock_state::use_app_state;

use crate::{MetricsTable, PriceChart, StockForm};

#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_app_state();

    view! {
        <div class="dashboard">
            <header class="dash-header">
                <span class="dash-title">"Stock Insight"</span>
                <StockForm />
            </header>

            <main class="dash-main">
                <section class="panel chart-container">
                    <div class="panel-header">
                        <span class="panel-title">"Close Price"</span>
                    </div>
                    <div id="chart" class="panel-content">
                        <PriceChart
                            points=state.dashboard.points
                            highlight=state.highlight
                            tooltip=state.tooltip
                        />
                    </div>
                </section>

                <section class="panel metrics-container">
                    <div class="panel-header">
                        <span class="panel-title">"Company Metrics"</span>
                    </div>
                    <div id="metrics" class="panel-content">
                        <MetricsTable
                            dashboard=state.dashboard.clone()
                            table=state.table
                            highlight=state.highlight
                        />
                    </div>
                </section>
            </main>

            <footer class="dash-footer">
                <StatusBar />
            </footer>
        </div>
    }
}

#[component]
fn StatusBar() -> impl IntoView {
    let state = use_app_state();
    let loading = state.loading;
    let error = state.error;
    let cycle = state.dashboard.cycle;

    view! {
        <div class="status-bar">
            <div class="sb-state">
                <span class="sb-label">"Status:"</span>
                <span class="sb-value">
                    {move || {
                        if loading.get() {
                            "Loading".to_string()
                        } else if cycle.get() == 0 {
                            "Idle".to_string()
                        } else {
                            format!("Loaded ({})", cycle.get())
                        }
                    }}
                </span>
            </div>

            {move || {
                error.get().map(|e| {
                    view! {
                        <div class="sb-error" style=format!("color: {}", colors::ERROR)>
                            <span class="error-icon">"⚠"</span>
                            <span class="error-msg">{e}</span>
                        </div>
                    }
                })
            }}
        </div>
    }
}
