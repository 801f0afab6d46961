use leptos::prelude::*;

use super::geometry::{nice_axis, point_position, LinearScale};
use super::{ChartPoint, LINE_COLOR};
use crate::shared::format::format_currency_short;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 340.0;
const MARGIN_LEFT: f64 = 64.0;
const MARGIN_RIGHT: f64 = 20.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 84.0;

/// Линейный график с маркерами; подписи оси X повернуты на 45 градусов
#[component]
pub fn LineChart(
    points: Vec<ChartPoint>,
    #[prop(optional)] color: Option<&'static str>,
) -> impl IntoView {
    let color = color.unwrap_or(LINE_COLOR);

    if points.is_empty() {
        return view! { <div class="chart chart--empty">"No data"</div> }.into_any();
    }

    let plot_width = WIDTH - MARGIN_LEFT - MARGIN_RIGHT;
    let plot_bottom = HEIGHT - MARGIN_BOTTOM;

    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let axis = nice_axis(&values, 5);
    let y = LinearScale::new((axis.min, axis.max), (plot_bottom, MARGIN_TOP));
    let count = points.len();

    let coords: Vec<(f64, f64)> = points
        .iter()
        .enumerate()
        .map(|(i, p)| (point_position(i, count, MARGIN_LEFT, plot_width), y.map(p.value)))
        .collect();

    let polyline = coords
        .iter()
        .map(|(cx, cy)| format!("{:.2},{:.2}", cx, cy))
        .collect::<Vec<_>>()
        .join(" ");

    let grid = axis
        .ticks
        .iter()
        .map(|tick| {
            let ty = format!("{:.2}", y.map(*tick));
            view! {
                <g class="chart__grid">
                    <line x1=MARGIN_LEFT.to_string() x2=(WIDTH - MARGIN_RIGHT).to_string()
                        y1=ty.clone() y2=ty.clone() stroke="#e5e7eb" />
                    <text x=(MARGIN_LEFT - 8.0).to_string() y=ty text-anchor="end"
                        dominant-baseline="middle" font-size="11" fill="#6b7280">
                        {format_currency_short(*tick)}
                    </text>
                </g>
            }
        })
        .collect_view();

    let markers = points
        .into_iter()
        .zip(coords)
        .map(|(point, (cx, cy))| {
            let label_y = plot_bottom + 14.0;
            let transform = format!("rotate(-45 {:.2} {:.2})", cx, label_y);
            view! {
                <g>
                    <circle cx=format!("{:.2}", cx) cy=format!("{:.2}", cy) r="4" fill=color>
                        <title>{point.tooltip}</title>
                    </circle>
                    <text x=format!("{:.2}", cx) y=format!("{:.2}", label_y) transform=transform
                        text-anchor="end" font-size="11" fill="#374151">
                        {point.label}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! {
        <svg class="chart chart--line" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
            preserveAspectRatio="xMidYMid meet">
            {grid}
            <line x1=MARGIN_LEFT.to_string() x2=MARGIN_LEFT.to_string()
                y1=MARGIN_TOP.to_string() y2=plot_bottom.to_string() stroke="#9ca3af" />
            <polyline points=polyline fill="none" stroke=color stroke-width="2" />
            {markers}
        </svg>
    }
    .into_any()
}
