use contracts::projections::p910_ecommerce_sales::TransactionPage;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::dashboards::d410_ecommerce_overview::api;
use crate::shared::format::{format_currency_exact, format_number_with_decimals};

const PAGE_SIZE: usize = 50;

/// Сворачиваемая таблица очищенных транзакций (включая отмененные).
/// Данные запрашиваются только когда панель раскрыта.
#[component]
pub fn RawDataPanel(
    /// Увеличивается после перезагрузки набора данных
    reload: ReadSignal<u32>,
) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let (offset, set_offset) = signal(0usize);
    let (page, set_page) = signal(None::<TransactionPage>);
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(None::<String>);

    // После перезагрузки набора возвращаемся на первую страницу; это же запускает запрос
    Effect::new(move |_| {
        let _ = reload.get();
        set_offset.set(0);
    });

    Effect::new(move |_| {
        if !expanded.get() {
            return;
        }
        let current_offset = offset.get();
        set_loading.set(true);
        set_error.set(None);

        spawn_local(async move {
            match api::get_transactions(current_offset, PAGE_SIZE).await {
                Ok(data) => set_page.set(Some(data)),
                Err(e) => {
                    log::error!("D410: Failed to load transactions: {}", e);
                    set_error.set(Some(e));
                }
            }
            set_loading.set(false);
        });
    });

    let page_info = move || {
        page.get()
            .map(|p| {
                if p.total == 0 {
                    "No rows".to_string()
                } else {
                    let first = p.offset.min(p.total) + 1;
                    let last = (p.offset + p.items.len()).min(p.total);
                    format!(
                        "Rows {}-{} of {}",
                        format_number_with_decimals(first as f64, 0),
                        format_number_with_decimals(last as f64, 0),
                        format_number_with_decimals(p.total as f64, 0)
                    )
                }
            })
            .unwrap_or_default()
    };

    let has_prev = move || offset.get() > 0;
    let has_next = move || {
        page.get()
            .map(|p| p.offset + p.items.len() < p.total)
            .unwrap_or(false)
    };

    let rows = move || {
        page.get()
            .map(|p| {
                p.items
                    .into_iter()
                    .map(|t| {
                        let row_class = if t.is_cancelled {
                            "d410-raw__row d410-raw__row--cancelled"
                        } else {
                            "d410-raw__row"
                        };
                        view! {
                            <tr class=row_class>
                                <td>{t.invoice_no}</td>
                                <td>{t.stock_code}</td>
                                <td>{t.description}</td>
                                <td class="num">{t.quantity}</td>
                                <td>{t.invoice_date}</td>
                                <td class="num">{format_currency_exact(t.unit_price)}</td>
                                <td class="num">{t.customer_id}</td>
                                <td>{t.country}</td>
                                <td class="num">{format_currency_exact(t.revenue)}</td>
                                <td>{t.period}</td>
                                <td>{t.day}</td>
                                <td class="num">{t.hour}</td>
                            </tr>
                        }
                    })
                    .collect_view()
            })
    };

    view! {
        <div class="d410-raw">
            <div class="d410-raw__header">
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| set_expanded.update(|v| *v = !*v)
                >
                    {move || if expanded.get() { "Hide raw data" } else { "Show raw data" }}
                </Button>
            </div>

            <Show when=move || expanded.get()>
                <div class="d410-raw__body">
                    {move || error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

                    <div class="d410-raw__pager">
                        <Button
                            size=ButtonSize::Small
                            disabled=Signal::derive(move || !has_prev() || loading.get())
                            on_click=move |_| set_offset.update(|o| *o = o.saturating_sub(PAGE_SIZE))
                        >
                            "Prev"
                        </Button>
                        <span class="d410-raw__info">{page_info}</span>
                        <Button
                            size=ButtonSize::Small
                            disabled=Signal::derive(move || !has_next() || loading.get())
                            on_click=move |_| set_offset.update(|o| *o += PAGE_SIZE)
                        >
                            "Next"
                        </Button>
                        {move || loading.get().then(|| view! { <Spinner size=SpinnerSize::Small /> })}
                    </div>

                    <div class="table-container">
                        <table class="table d410-raw__table">
                            <thead>
                                <tr>
                                    <th>"InvoiceNo"</th>
                                    <th>"StockCode"</th>
                                    <th>"Description"</th>
                                    <th>"Quantity"</th>
                                    <th>"InvoiceDate"</th>
                                    <th>"UnitPrice"</th>
                                    <th>"CustomerID"</th>
                                    <th>"Country"</th>
                                    <th>"Revenue"</th>
                                    <th>"Period"</th>
                                    <th>"Day"</th>
                                    <th>"Hour"</th>
                                </tr>
                            </thead>
                            <tbody>{rows}</tbody>
                        </table>
                    </div>
                </div>
            </Show>
        </div>
    }
}
