//! Axis tick generation and SVG axis components

use crate::{
    chartkit::{format_date_tick, format_tick_value, LinearScale, PathBuilder, Scale, TimeScale},
    colors,
};
use leptos::prelude::*;

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

/// A positioned tick label (offset is along the axis, in pixels)
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub offset: f64,
    pub label: String,
}

/// Ticks for a horizontal date axis
pub fn time_ticks(scale: &TimeScale, count: usize) -> Vec<AxisTick> {
    let span = scale.span_days();
    scale
        .date_ticks(count)
        .into_iter()
        .map(|date| AxisTick {
            offset: scale.scale_date(date),
            label: format_date_tick(date, span),
        })
        .collect()
}

/// Ticks for a vertical value axis
pub fn value_ticks(scale: &LinearScale, count: usize) -> Vec<AxisTick> {
    scale
        .nice_ticks(count)
        .into_iter()
        .map(|value| AxisTick {
            offset: scale.scale(value),
            label: format_tick_value(value),
        })
        .collect()
}

/// Bottom (date) axis, drawn at the bottom edge of the plot area
#[component]
pub fn BottomAxis(
    ticks: Vec<AxisTick>,
    width: f64,
    height: f64,
    /// Distance available below the axis for the caption
    margin_bottom: f64,
    #[prop(default = None)] label: Option<String>,
) -> impl IntoView {
    let domain = PathBuilder::new()
        .move_to(0.0, TICK_SIZE)
        .vertical_to(0.0)
        .horizontal_to(width)
        .vertical_to(TICK_SIZE)
        .build();

    view! {
        <g class="axis axis-x" transform=format!("translate(0,{})", height) font-size="10" font-family="sans-serif">
            <path class="domain" d=domain fill="none" stroke=colors::AXIS />
            {ticks.into_iter().map(|tick| {
                view! {
                    <g class="tick" transform=format!("translate({},0)", tick.offset)>
                        <line y2=TICK_SIZE stroke=colors::AXIS />
                        <text
                            y={TICK_SIZE + TICK_PADDING}
                            dy="0.71em"
                            text-anchor="middle"
                            fill=colors::AXIS
                        >
                            {tick.label}
                        </text>
                    </g>
                }
            }).collect_view()}
            {label.map(|text| view! {
                <text
                    class="axis-label"
                    fill=colors::AXIS
                    x={width / 2.0}
                    y={margin_bottom - 5.0}
                    text-anchor="middle"
                >
                    {text}
                </text>
            })}
        </g>
    }
}

/// Left (value) axis, drawn at the left edge of the plot area
#[component]
pub fn LeftAxis(
    ticks: Vec<AxisTick>,
    height: f64,
    /// Distance available left of the axis for the caption
    margin_left: f64,
    #[prop(default = None)] label: Option<String>,
) -> impl IntoView {
    let domain = PathBuilder::new()
        .move_to(-TICK_SIZE, height)
        .horizontal_to(0.0)
        .vertical_to(0.0)
        .horizontal_to(-TICK_SIZE)
        .build();

    view! {
        <g class="axis axis-y" font-size="10" font-family="sans-serif">
            <path class="domain" d=domain fill="none" stroke=colors::AXIS />
            {ticks.into_iter().map(|tick| {
                view! {
                    <g class="tick" transform=format!("translate(0,{})", tick.offset)>
                        <line x2={-TICK_SIZE} stroke=colors::AXIS />
                        <text
                            x={-(TICK_SIZE + TICK_PADDING)}
                            dy="0.32em"
                            text-anchor="end"
                            fill=colors::AXIS
                        >
                            {tick.label}
                        </text>
                    </g>
                }
            }).collect_view()}
            {label.map(|text| view! {
                <text
                    class="axis-label"
                    fill=colors::AXIS
                    transform="rotate(-90)"
                    y={-margin_left + 10.0}
                    dy="0.71em"
                    text-anchor="end"
                >
                    {text}
                </text>
            })}
        </g>
    }
}
