use axum::{extract::Query, http::StatusCode, Json};
use contracts::dashboards::d410_ecommerce_overview::{OverviewRequest, OverviewResponse};

use crate::dashboards::d410_ecommerce_overview::service::{self, MAX_TOP_LIMIT};

/// GET /api/d410/overview?top=10
pub async fn get_overview(
    Query(request): Query<OverviewRequest>,
) -> Result<Json<OverviewResponse>, StatusCode> {
    if let Some(top) = request.top {
        if top == 0 || top > MAX_TOP_LIMIT {
            tracing::warn!("D410 Dashboard: Invalid top={} (allowed 1..={})", top, MAX_TOP_LIMIT);
            return Err(StatusCode::BAD_REQUEST);
        }
    }

    tracing::info!("D410 Dashboard: Getting overview, top={:?}", request.top);

    match service::get_overview(request).await {
        Ok(response) => {
            tracing::info!(
                "D410 Dashboard: Returning overview over {} sales rows ({} months, {} countries)",
                response.dataset.sales_rows,
                response.revenue_over_time.len(),
                response.top_countries_by_revenue.len()
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D410 Dashboard: Failed to build overview: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}
