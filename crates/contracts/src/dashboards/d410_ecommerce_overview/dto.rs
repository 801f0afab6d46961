use serde::{Deserialize, Serialize};

use crate::projections::p910_ecommerce_sales::DatasetSummary;

/// Request for the e-commerce overview dashboard
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OverviewRequest {
    /// How many rows the top-N charts keep (default 10)
    #[serde(default)]
    pub top: Option<usize>,
}

/// Response for the e-commerce overview dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OverviewResponse {
    pub dataset: DatasetSummary,
    /// Revenue per "Month-Year", in calendar order
    pub revenue_over_time: Vec<PeriodRevenue>,
    /// Top products by revenue, descending
    pub top_products_by_revenue: Vec<ProductMetric>,
    /// Top products by sold quantity, descending
    pub top_products_by_quantity: Vec<ProductMetric>,
    /// Revenue per weekday, Monday first
    pub revenue_by_weekday: Vec<WeekdayRevenue>,
    /// Top countries by revenue, descending
    pub top_countries_by_revenue: Vec<CountryRevenue>,
    /// Revenue per hour of day, ascending
    pub revenue_by_hour: Vec<HourRevenue>,
}

/// Выручка за месяц
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeriodRevenue {
    /// e.g. "December-2010"
    pub label: String,
    pub year: i32,
    /// 1..=12
    pub month: u32,
    pub revenue: f64,
}

/// Показатель по товару (выручка или количество)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductMetric {
    pub stock_code: String,
    pub description: String,
    pub value: f64,
}

/// Выручка по дню недели
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayRevenue {
    /// English day name, e.g. "Monday"
    pub day: String,
    pub revenue: f64,
}

/// Выручка по стране
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryRevenue {
    pub country: String,
    pub revenue: f64,
}

/// Выручка по часу суток
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourRevenue {
    /// 0..=23
    pub hour: u32,
    pub revenue: f64,
}
