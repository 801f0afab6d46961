use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Строка очищенной таблицы транзакций (P910) для панели "сырые данные"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionDto {
    pub invoice_no: String,
    pub stock_code: String,
    pub description: String,
    pub quantity: i64,
    /// Timestamp in format "YYYY-MM-DD HH:MM:SS"
    pub invoice_date: String,
    pub unit_price: f64,
    pub customer_id: i64,
    pub country: String,

    // Derived fields
    pub revenue: f64,
    pub year: i32,
    pub month: String,
    /// "Month-Year" label, e.g. "March-2011"
    pub period: String,
    pub day: String,
    pub hour: u32,
    /// Invoice is a cancellation (excluded from the sales subset)
    pub is_cancelled: bool,
}

/// Запрос страницы очищенной таблицы
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TransactionPageRequest {
    #[serde(default)]
    pub offset: Option<usize>,
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Страница очищенной таблицы
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionPage {
    pub items: Vec<TransactionDto>,
    pub offset: usize,
    pub limit: usize,
    /// Total number of cleaned rows
    pub total: usize,
}

/// Сводка по загруженному набору данных
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    /// Where the CSV came from (URL or file path)
    pub source: String,
    pub loaded_at: DateTime<Utc>,
    /// Rows in the raw CSV
    pub raw_rows: usize,
    /// Rows dropped because CustomerID or Description was empty
    pub dropped_missing: usize,
    /// Rows dropped because Country was "Unspecified"
    pub dropped_unspecified_country: usize,
    /// Rows left after cleaning
    pub cleaned_rows: usize,
    /// Cleaned rows belonging to cancelled invoices
    pub cancelled_rows: usize,
    /// Rows in the sales subset
    pub sales_rows: usize,
}
