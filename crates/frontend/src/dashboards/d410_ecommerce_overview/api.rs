use contracts::dashboards::d410_ecommerce_overview::OverviewResponse;
use contracts::projections::p910_ecommerce_sales::{DatasetSummary, TransactionPage};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::shared::api_utils::api_url;

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Получить все графики дашборда (топ-N по умолчанию на сервере)
pub async fn get_overview() -> Result<OverviewResponse, String> {
    let url = api_url("/api/d410/overview");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    parse_json(response).await
}

/// Страница очищенной таблицы транзакций
pub async fn get_transactions(offset: usize, limit: usize) -> Result<TransactionPage, String> {
    let url = api_url(&format!(
        "/api/p910/transactions?offset={}&limit={}",
        offset, limit
    ));

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    parse_json(response).await
}

/// Перечитать CSV на сервере. При ошибке сервер продолжает отдавать старые данные.
pub async fn refresh_dataset() -> Result<DatasetSummary, String> {
    let url = api_url("/api/p910/refresh");

    let response = Request::post(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    parse_json(response).await
}
