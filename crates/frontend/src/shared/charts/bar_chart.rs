use leptos::prelude::*;

use super::geometry::{band, nice_axis, LinearScale};
use super::{palette_color, ChartPoint};
use crate::shared::format::{format_currency, format_currency_short};

const WIDTH: f64 = 560.0;
const HEIGHT: f64 = 320.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarOrientation {
    /// Категории по оси Y, значения по оси X
    Horizontal,
    /// Категории по оси X
    Vertical,
}

/// Столбчатая диаграмма с подписью значения у конца столбца.
/// Цвет столбца берется из палитры по его позиции.
#[component]
pub fn BarChart(
    points: Vec<ChartPoint>,
    orientation: BarOrientation,
    palette: &'static [&'static str],
) -> impl IntoView {
    if points.is_empty() {
        return view! { <div class="chart chart--empty">"No data"</div> }.into_any();
    }

    let content = match orientation {
        BarOrientation::Horizontal => horizontal_bars(points, palette),
        BarOrientation::Vertical => vertical_bars(points, palette),
    };

    view! {
        <svg class="chart chart--bar" viewBox=format!("0 0 {} {}", WIDTH, HEIGHT)
            preserveAspectRatio="xMidYMid meet">
            {content}
        </svg>
    }
    .into_any()
}

fn horizontal_bars(points: Vec<ChartPoint>, palette: &'static [&'static str]) -> AnyView {
    let (left, right, top, bottom) = (96.0, 72.0, 12.0, 28.0);
    let plot_height = HEIGHT - top - bottom;

    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let axis = nice_axis(&values, 4);
    let x = LinearScale::new((axis.min, axis.max), (left, WIDTH - right));
    let zero = x.map(0.0);
    let count = points.len();

    let ticks = axis
        .ticks
        .iter()
        .map(|tick| {
            let tx = format!("{:.2}", x.map(*tick));
            view! {
                <g class="chart__grid">
                    <line x1=tx.clone() x2=tx.clone() y1=top.to_string()
                        y2=(HEIGHT - bottom).to_string() stroke="#e5e7eb" />
                    <text x=tx y=(HEIGHT - bottom + 16.0).to_string() text-anchor="middle"
                        font-size="11" fill="#6b7280">
                        {format_currency_short(*tick)}
                    </text>
                </g>
            }
        })
        .collect_view();

    let bars = points
        .into_iter()
        .enumerate()
        .map(|(i, point)| {
            let (by, bh) = band(i, count, top, plot_height);
            let end = x.map(point.value);
            let (bx, bw) = if end >= zero { (zero, end - zero) } else { (end, zero - end) };
            let center_y = format!("{:.2}", by + bh / 2.0);
            let (value_x, anchor) = if point.value >= 0.0 {
                (end + 4.0, "start")
            } else {
                (end - 4.0, "end")
            };

            view! {
                <g>
                    <rect x=format!("{:.2}", bx) y=format!("{:.2}", by)
                        width=format!("{:.2}", bw) height=format!("{:.2}", bh)
                        fill=palette_color(palette, i, count)>
                        <title>{point.tooltip}</title>
                    </rect>
                    <text x=(left - 6.0).to_string() y=center_y.clone() text-anchor="end"
                        dominant-baseline="middle" font-size="11" fill="#374151">
                        {point.label}
                    </text>
                    <text x=format!("{:.2}", value_x) y=center_y text-anchor=anchor
                        dominant-baseline="middle" font-size="11" fill="#111827">
                        {format_currency(point.value)}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! { <g>{ticks}{bars}</g> }.into_any()
}

fn vertical_bars(points: Vec<ChartPoint>, palette: &'static [&'static str]) -> AnyView {
    let (left, right, top, bottom) = (64.0, 12.0, 24.0, 84.0);
    let plot_width = WIDTH - left - right;

    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let axis = nice_axis(&values, 4);
    let y = LinearScale::new((axis.min, axis.max), (HEIGHT - bottom, top));
    let zero = y.map(0.0);
    let count = points.len();

    let ticks = axis
        .ticks
        .iter()
        .map(|tick| {
            let ty = format!("{:.2}", y.map(*tick));
            view! {
                <g class="chart__grid">
                    <line x1=left.to_string() x2=(WIDTH - right).to_string()
                        y1=ty.clone() y2=ty.clone() stroke="#e5e7eb" />
                    <text x=(left - 8.0).to_string() y=ty text-anchor="end"
                        dominant-baseline="middle" font-size="11" fill="#6b7280">
                        {format_currency_short(*tick)}
                    </text>
                </g>
            }
        })
        .collect_view();

    let bars = points
        .into_iter()
        .enumerate()
        .map(|(i, point)| {
            let (bx, bw) = band(i, count, left, plot_width);
            let end = y.map(point.value);
            let (by, bh) = if end <= zero { (end, zero - end) } else { (zero, end - zero) };
            let center_x = bx + bw / 2.0;
            let value_y = if point.value >= 0.0 { end - 4.0 } else { end + 12.0 };
            let label_y = HEIGHT - bottom + 14.0;
            let transform = format!("rotate(-45 {:.2} {:.2})", center_x, label_y);

            view! {
                <g>
                    <rect x=format!("{:.2}", bx) y=format!("{:.2}", by)
                        width=format!("{:.2}", bw) height=format!("{:.2}", bh)
                        fill=palette_color(palette, i, count)>
                        <title>{point.tooltip}</title>
                    </rect>
                    <text x=format!("{:.2}", center_x) y=format!("{:.2}", value_y)
                        text-anchor="middle" font-size="10" fill="#111827">
                        {format_currency_short(point.value)}
                    </text>
                    <text x=format!("{:.2}", center_x) y=format!("{:.2}", label_y)
                        transform=transform text-anchor="end" font-size="11" fill="#374151">
                        {point.label}
                    </text>
                </g>
            }
        })
        .collect_view();

    view! { <g>{ticks}{bars}</g> }.into_any()
}
