//! Sortable company metrics table, cross-highlighted with the price chart

use leptos::prelude::*;
use stock_core::{colors, MetricColumn, MetricRecord};
use stock_state::{DashboardState, HighlightEvent, HighlightState, SortDirection, TableState};

#[derive(Debug, Clone)]
pub struct MetricsTableConfig {
    pub columns: Vec<MetricColumn>,
    /// Show an arrow next to the most recently sorted header
    pub show_sort_indicator: bool,
}

impl Default for MetricsTableConfig {
    fn default() -> Self {
        Self {
            columns: MetricColumn::all().to_vec(),
            show_sort_indicator: true,
        }
    }
}

#[component]
pub fn MetricsTable(
    #[prop(into)] dashboard: DashboardState,
    table: RwSignal<TableState>,
    highlight: RwSignal<HighlightState>,
    #[prop(optional)] config: Option<MetricsTableConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let columns = config.columns.clone();
    let show_indicator = config.show_sort_indicator;

    let metrics = dashboard.metrics;
    let cycle = dashboard.cycle;

    // (cycle, original index, record) in display order
    let visible_rows = move || {
        let cycle = cycle.get();
        let order = table.with(|t| t.rows().to_vec());
        metrics.with(|m| {
            order
                .into_iter()
                .filter_map(|i| m.get(i).cloned().map(|record| (cycle, i, record)))
                .collect::<Vec<_>>()
        })
    };

    let header_columns = columns.clone();

    view! {
        <table class="metrics-table">
            <thead>
                <tr>
                    {header_columns.into_iter().map(|column| {
                        let direction = move || table.with(|t| t.direction_of(column));
                        let on_click = move |_| {
                            metrics.with_untracked(|m| {
                                table.update(|t| *t = t.clone().click(column, m));
                            });
                        };
                        view! {
                            <th
                                class=move || match direction() {
                                    Some(SortDirection::Ascending) => "sortable asc",
                                    Some(SortDirection::Descending) => "sortable desc",
                                    None => "sortable",
                                }
                                on:click=on_click
                            >
                                {column.key()}
                                {move || {
                                    if show_indicator {
                                        direction().map(|d| format!(" {}", d.indicator()))
                                    } else {
                                        None
                                    }
                                }}
                            </th>
                        }
                    }).collect_view()}
                </tr>
            </thead>
            <tbody>
                <For
                    each=visible_rows
                    key=|(cycle, index, _)| (*cycle, *index)
                    children=move |(_, index, record)| {
                        view! {
                            <MetricsRow
                                index=index
                                record=record
                                columns=columns.clone()
                                highlight=highlight
                            />
                        }
                    }
                />
            </tbody>
        </table>
    }
}

#[component]
fn MetricsRow(
    index: usize,
    record: MetricRecord,
    columns: Vec<MetricColumn>,
    highlight: RwSignal<HighlightState>,
) -> impl IntoView {
    let color = colors::series_color(index);

    view! {
        <tr
            class=format!("row-{}", index)
            style=format!("color: {}", color)
            on:mouseenter=move |_| highlight.update(|h| *h = h.reduce(HighlightEvent::RowEnter(index)))
            on:mouseleave=move |_| highlight.update(|h| *h = h.reduce(HighlightEvent::RowLeave(index)))
        >
            {columns.into_iter().map(|column| {
                view! { <td class=column.key()>{record.value(column).display()}</td> }
            }).collect_view()}
        </tr>
    }
}
