use contracts::dashboards::d410_ecommerce_overview::OverviewResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::raw_data_panel::RawDataPanel;
use super::summary_bar::SummaryBar;
use crate::dashboards::d410_ecommerce_overview::{api, chart_data};
use crate::shared::charts::{
    BarChart, BarOrientation, LineChart, PieChart, PLASMA, VIRIDIS,
};
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};

/// E-commerce overview dashboard (D410)
#[component]
pub fn EcommerceOverviewDashboard() -> impl IntoView {
    let (data, set_data) = signal(None::<OverviewResponse>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);
    let (reload, set_reload) = signal(0u32);

    let load_overview = move || {
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::get_overview().await {
                Ok(response) => set_data.set(Some(response)),
                Err(e) => {
                    log::error!("D410: Failed to load overview: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    };

    // Load data on mount
    Effect::new(move |_| load_overview());

    let on_refresh = move |_| {
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::refresh_dataset().await {
                Ok(summary) => {
                    log::info!("D410: Dataset reloaded, {} sales rows", summary.sales_rows);
                    set_reload.update(|v| *v += 1);
                    load_overview();
                }
                Err(e) => {
                    // сервер оставил прежний набор, графики не трогаем
                    log::error!("D410: Dataset reload failed: {}", e);
                    set_error.set(Some(format!("Reload failed, showing previous data: {}", e)));
                    set_loading.set(false);
                }
            }
        });
    };

    view! {
        <PageFrame page_id="d410_ecommerce_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <h1 class="page__title">"Ecommerce Dataset Dashboard"</h1>
                <div class="page__actions">
                    {move || loading.get().then(|| view! { <Spinner size=SpinnerSize::Small /> })}
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || loading.get())
                        on_click=on_refresh
                    >
                        "Reload dataset"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                {move || data.get().map(|d| view! { <SummaryBar summary=d.dataset /> })}

                <RawDataPanel reload=reload />

                {move || match data.get() {
                    Some(d) => view! { <OverviewCharts data=d /> }.into_any(),
                    None if loading.get() => view! {
                        <div class="d410-loading"><Spinner /></div>
                    }.into_any(),
                    None => view! { <></> }.into_any(),
                }}
            </div>
        </PageFrame>
    }
}

/// Две колонки: слева динамика и доли товаров, справа разрезы по дням, странам и часам
#[component]
fn OverviewCharts(data: OverviewResponse) -> impl IntoView {
    view! {
        <div class="d410-grid">
            <div class="d410-grid__column">
                <section class="d410-card">
                    <h3 class="d410-card__title">"Total Revenue Over Time"</h3>
                    <LineChart points=chart_data::revenue_over_time(&data.revenue_over_time) />
                </section>
                <div class="d410-grid__pair">
                    <section class="d410-card">
                        <h4 class="d410-card__title">
                            {format!("Top {} Products by Revenue", data.top_products_by_revenue.len())}
                        </h4>
                        <PieChart points=chart_data::products_by_revenue(&data.top_products_by_revenue) />
                    </section>
                    <section class="d410-card">
                        <h4 class="d410-card__title">
                            {format!("Top {} Sales by Product", data.top_products_by_quantity.len())}
                        </h4>
                        <PieChart points=chart_data::products_by_quantity(&data.top_products_by_quantity) />
                    </section>
                </div>
            </div>

            <div class="d410-grid__column">
                <section class="d410-card">
                    <h3 class="d410-card__title">"Total Revenue by Day of the Week"</h3>
                    <BarChart
                        points=chart_data::revenue_by_weekday(&data.revenue_by_weekday)
                        orientation=BarOrientation::Horizontal
                        palette=PLASMA
                    />
                </section>
                <section class="d410-card">
                    <h3 class="d410-card__title">
                        {format!("Top {} Total Revenue by Country", data.top_countries_by_revenue.len())}
                    </h3>
                    <BarChart
                        points=chart_data::revenue_by_country(&data.top_countries_by_revenue)
                        orientation=BarOrientation::Vertical
                        palette=VIRIDIS
                    />
                </section>
                <section class="d410-card">
                    <h3 class="d410-card__title">"Revenue by Hour of Day"</h3>
                    <BarChart
                        points=chart_data::revenue_by_hour(&data.revenue_by_hour)
                        orientation=BarOrientation::Vertical
                        palette=PLASMA
                    />
                </section>
            </div>
        </div>
    }
}
