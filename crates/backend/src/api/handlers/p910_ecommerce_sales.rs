use axum::{extract::Query, http::StatusCode, Json};
use contracts::projections::p910_ecommerce_sales::{
    DatasetSummary, TransactionPage, TransactionPageRequest,
};

use crate::projections::p910_ecommerce_sales::service;

/// GET /api/p910/transactions?offset=0&limit=100
pub async fn list_transactions(
    Query(params): Query<TransactionPageRequest>,
) -> Result<Json<TransactionPage>, StatusCode> {
    if let Some(limit) = params.limit {
        if limit > service::MAX_PAGE_SIZE {
            tracing::warn!(
                "P910: Invalid limit {} (too large), using max {}",
                limit,
                service::MAX_PAGE_SIZE
            );
        }
    }

    match service::list_transactions(params.offset, params.limit).await {
        Ok(page) => Ok(Json(page)),
        Err(e) => {
            tracing::error!("P910: Failed to list transactions: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// GET /api/p910/summary
pub async fn get_summary() -> Result<Json<DatasetSummary>, StatusCode> {
    match service::get_dataset().await {
        Ok(dataset) => Ok(Json(dataset.summary())),
        Err(e) => {
            tracing::error!("P910: Failed to load dataset: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// POST /api/p910/refresh
pub async fn refresh() -> Result<Json<DatasetSummary>, StatusCode> {
    tracing::info!("P910: Dataset refresh requested");

    match service::refresh_dataset().await {
        Ok(dataset) => {
            let summary = dataset.summary();
            tracing::info!(
                "P910: Dataset refreshed, {} cleaned rows",
                summary.cleaned_rows
            );
            Ok(Json(summary))
        }
        Err(e) => {
            tracing::error!("P910: Dataset refresh failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
