use contracts::projections::p910_ecommerce_sales::DatasetSummary;
use leptos::prelude::*;

use crate::shared::format::format_number_with_decimals;

fn count(value: usize) -> String {
    format_number_with_decimals(value as f64, 0)
}

/// Строка с количеством строк на каждом шаге очистки
#[component]
pub fn SummaryBar(summary: DatasetSummary) -> impl IntoView {
    let loaded_at = summary.loaded_at.format("%Y-%m-%d %H:%M:%S UTC").to_string();
    let dropped = summary.dropped_missing + summary.dropped_unspecified_country;

    view! {
        <div class="d410-summary">
            <div class="d410-summary__item">
                <span class="d410-summary__label">"Raw rows"</span>
                <span class="d410-summary__value">{count(summary.raw_rows)}</span>
            </div>
            <div class="d410-summary__item" title=format!(
                "{} with missing CustomerID/Description, {} with Unspecified country",
                summary.dropped_missing, summary.dropped_unspecified_country
            )>
                <span class="d410-summary__label">"Dropped"</span>
                <span class="d410-summary__value">{count(dropped)}</span>
            </div>
            <div class="d410-summary__item">
                <span class="d410-summary__label">"Cleaned rows"</span>
                <span class="d410-summary__value">{count(summary.cleaned_rows)}</span>
            </div>
            <div class="d410-summary__item">
                <span class="d410-summary__label">"Cancelled"</span>
                <span class="d410-summary__value">{count(summary.cancelled_rows)}</span>
            </div>
            <div class="d410-summary__item">
                <span class="d410-summary__label">"Sales rows"</span>
                <span class="d410-summary__value">{count(summary.sales_rows)}</span>
            </div>
            <div class="d410-summary__source" title=summary.source.clone()>
                {format!("Loaded {} from {}", loaded_at, summary.source)}
            </div>
        </div>
    }
}
