use leptos::prelude::*;

use super::geometry::{pie_slices, polar, pull_offset, slice_path};
use super::{ChartPoint, CATEGORICAL};
use crate::shared::format::format_percent;

const SIZE: f64 = 300.0;
const RADIUS: f64 = 110.0;
/// Первый (наибольший) сектор выдвигается на 10% радиуса
const PULL: f64 = 0.1;
/// Сектора меньше этой доли остаются без подписи
const MIN_LABEL_FRACTION: f64 = 0.04;

/// Круговая диаграмма с подписями "метка + процент" внутри секторов
#[component]
pub fn PieChart(points: Vec<ChartPoint>) -> impl IntoView {
    let values: Vec<f64> = points.iter().map(|p| p.value).collect();
    let slices = pie_slices(&values);

    if slices.iter().all(|s| s.fraction <= 0.0) {
        return view! { <div class="chart chart--empty">"No data"</div> }.into_any();
    }

    let center = SIZE / 2.0;

    let wedges = points
        .into_iter()
        .zip(slices)
        .enumerate()
        .map(|(i, (point, slice))| {
            let (dx, dy) = if i == 0 {
                pull_offset(&slice, RADIUS * PULL)
            } else {
                (0.0, 0.0)
            };
            let (cx, cy) = (center + dx, center + dy);
            let path = slice_path(cx, cy, RADIUS, &slice);
            let color = CATEGORICAL[i % CATEGORICAL.len()];

            let label = (slice.fraction >= MIN_LABEL_FRACTION).then(|| {
                let (lx, ly) = polar(cx, cy, RADIUS * 0.68, slice.mid());
                view! {
                    <text x=format!("{:.2}", lx) y=format!("{:.2}", ly) text-anchor="middle"
                        font-size="10" fill="#ffffff" pointer-events="none">
                        <tspan x=format!("{:.2}", lx) dy="-0.2em">{point.label.clone()}</tspan>
                        <tspan x=format!("{:.2}", lx) dy="1.2em">{format_percent(slice.fraction)}</tspan>
                    </text>
                }
            });

            view! {
                <g>
                    <path d=path fill=color stroke="#ffffff" stroke-width="1">
                        <title>{point.tooltip}</title>
                    </path>
                    {label}
                </g>
            }
        })
        .collect_view();

    view! {
        <svg class="chart chart--pie" viewBox=format!("0 0 {} {}", SIZE, SIZE)
            preserveAspectRatio="xMidYMid meet">
            {wedges}
        </svg>
    }
    .into_any()
}
