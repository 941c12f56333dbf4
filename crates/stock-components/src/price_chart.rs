//! Multi-series price chart with hover highlighting and tooltip

use leptos::prelude::*;
use stock_charts::{BottomAxis, ChartConfig, ChartLayout, LeftAxis, SeriesLayout};
use stock_core::Point;
use stock_state::{HighlightEvent, HighlightState, MarkerKey, TooltipContent, TooltipHandle};

/// Price chart: one smoothed line and one marker set per symbol, on shared
/// date and close axes
#[component]
pub fn PriceChart(
    #[prop(into)] points: Signal<Vec<Point>>,
    highlight: RwSignal<HighlightState>,
    tooltip: TooltipHandle,
    #[prop(optional)] config: Option<ChartConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let dims = config.dimensions();
    let x_count = config.x_ticks;
    let y_count = config.y_ticks;
    let show_labels = config.show_axis_labels;

    let chart_state = move || points.with(|p| ChartLayout::build(p, dims));

    view! {
        <svg
            class="price-chart"
            width=dims.width
            height=dims.height
            viewBox=dims.viewbox()
        >
            {move || {
                let config = config.clone();
                chart_state().map(|layout| {
                    let inner_w = layout.dims.inner_width();
                    let inner_h = layout.dims.inner_height();
                    let x_ticks = layout.x_ticks(x_count);
                    let y_ticks = layout.y_ticks(y_count);

                    view! {
                        <g transform=layout.dims.inner_transform()>
                            <BottomAxis
                                ticks=x_ticks
                                width=inner_w
                                height=inner_h
                                margin_bottom=layout.dims.margin.bottom
                                label=show_labels.then(|| "Date".to_string())
                            />
                            <LeftAxis
                                ticks=y_ticks
                                height=inner_h
                                margin_left=layout.dims.margin.left
                                label=show_labels.then(|| "Close Price".to_string())
                            />
                            {layout.series.into_iter().map(|series| {
                                view! {
                                    <SeriesMarks
                                        series=series
                                        highlight=highlight
                                        tooltip=tooltip
                                        config=config.clone()
                                    />
                                }
                            }).collect_view()}
                        </g>
                    }
                })
            }}
        </svg>
    }
}

#[component]
fn SeriesMarks(
    series: SeriesLayout,
    highlight: RwSignal<HighlightState>,
    tooltip: TooltipHandle,
    config: ChartConfig,
) -> impl IntoView {
    let index = series.index;
    let color = series.color;
    let line_class = series.line_class();
    let dot_class = series.dot_class();
    let (base_width, active_width) = (config.line_width, config.active_line_width);
    let (base_r, active_r) = (config.marker_radius, config.active_marker_radius);

    let stroke_width = move || {
        if highlight.with(|h| h.is_line_active(index)) {
            active_width
        } else {
            base_width
        }
    };

    let markers = series
        .markers
        .into_iter()
        .enumerate()
        .map(|(j, marker)| {
            let key = MarkerKey::new(index, j);
            let content = TooltipContent::from_point(&marker.point);
            let radius = move || {
                if highlight.with(|h| h.is_marker_active(key)) {
                    active_r
                } else {
                    base_r
                }
            };

            view! {
                <circle
                    class=dot_class.clone()
                    cx=marker.cx
                    cy=marker.cy
                    r=radius
                    fill=color
                    on:mouseover=move |ev| {
                        highlight.update(|h| *h = h.reduce(HighlightEvent::MarkerEnter(key)));
                        tooltip.show(content.clone(), ev.page_x() as f64, ev.page_y() as f64);
                    }
                    on:mouseout=move |_| {
                        highlight.update(|h| *h = h.reduce(HighlightEvent::MarkerLeave(key)));
                        tooltip.hide();
                    }
                />
            }
        })
        .collect_view();

    view! {
        <g class="series">
            <path
                class=line_class
                d=series.path
                fill="none"
                stroke=color
                stroke-width=stroke_width
            />
            {markers}
        </g>
    }
}
