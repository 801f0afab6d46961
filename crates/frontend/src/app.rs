use crate::dashboards::EcommerceOverviewDashboard;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <main class="app">
            <EcommerceOverviewDashboard />
        </main>
    }
}
