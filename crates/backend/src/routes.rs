use axum::{
    routing::{get, post},
    Router,
};

use crate::api::handlers;

/// Конфигурация всех роутов приложения
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        // P910 E-commerce sales (cleaned dataset)
        .route(
            "/api/p910/transactions",
            get(handlers::p910_ecommerce_sales::list_transactions),
        )
        .route(
            "/api/p910/summary",
            get(handlers::p910_ecommerce_sales::get_summary),
        )
        .route(
            "/api/p910/refresh",
            post(handlers::p910_ecommerce_sales::refresh),
        )
        // D410 E-commerce overview dashboard
        .route(
            "/api/d410/overview",
            get(handlers::d410_ecommerce_overview::get_overview),
        )
}
