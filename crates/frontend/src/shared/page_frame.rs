//! PageFrame: корневая обертка страницы.
//!
//! Корневой элемент получает `id` вида `"{entity}--{category}"` и
//! атрибут `data-page-category`, чтобы страницу можно было найти по DOM.

use leptos::prelude::*;

/// Аналитическая страница с графиками
pub const PAGE_CAT_DASHBOARD: &str = "dashboard";

/// `{entity}--{category}`, обе части непустые
pub fn is_valid_page_id(id: &str) -> bool {
    match id.split_once("--") {
        Some((entity, category)) => !entity.is_empty() && !category.is_empty(),
        None => false,
    }
}

#[component]
pub fn PageFrame(
    /// HTML id, например `"d410_ecommerce_overview--dashboard"`
    page_id: &'static str,
    /// Одна из констант PAGE_CAT_*
    category: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    if !is_valid_page_id(page_id) {
        log::warn!("PageFrame: page id '{}' is not '{{entity}}--{{category}}'", page_id);
    }

    let base_class = match category {
        PAGE_CAT_DASHBOARD => "page page--dashboard",
        _ => "page",
    };

    let full_class = if class.is_empty() {
        base_class.to_string()
    } else {
        format!("{base_class} {class}")
    };

    view! {
        <div id=page_id class=full_class data-page-category=category>
            {children()}
        </div>
    }
}
