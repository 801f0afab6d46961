//! DTO -> точки графиков с подписями и текстом подсказок

use contracts::dashboards::d410_ecommerce_overview::{
    CountryRevenue, HourRevenue, PeriodRevenue, ProductMetric, WeekdayRevenue,
};

use crate::shared::charts::ChartPoint;
use crate::shared::format::{format_currency_exact, format_number_with_decimals};

pub fn revenue_over_time(items: &[PeriodRevenue]) -> Vec<ChartPoint> {
    items
        .iter()
        .map(|p| ChartPoint {
            label: p.label.clone(),
            value: p.revenue,
            tooltip: format!("{}: {}", p.label, format_currency_exact(p.revenue)),
        })
        .collect()
}

/// Label is the stock code; description goes to the tooltip
pub fn products_by_revenue(items: &[ProductMetric]) -> Vec<ChartPoint> {
    items
        .iter()
        .map(|p| ChartPoint {
            label: p.stock_code.clone(),
            value: p.value,
            tooltip: format!(
                "{} ({}): {}",
                p.stock_code,
                p.description,
                format_currency_exact(p.value)
            ),
        })
        .collect()
}

pub fn products_by_quantity(items: &[ProductMetric]) -> Vec<ChartPoint> {
    items
        .iter()
        .map(|p| ChartPoint {
            label: p.stock_code.clone(),
            value: p.value,
            tooltip: format!(
                "{} ({}): {} units",
                p.stock_code,
                p.description,
                format_number_with_decimals(p.value, 0)
            ),
        })
        .collect()
}

pub fn revenue_by_weekday(items: &[WeekdayRevenue]) -> Vec<ChartPoint> {
    items
        .iter()
        .map(|d| ChartPoint {
            label: d.day.clone(),
            value: d.revenue,
            tooltip: format!("{}: {}", d.day, format_currency_exact(d.revenue)),
        })
        .collect()
}

pub fn revenue_by_country(items: &[CountryRevenue]) -> Vec<ChartPoint> {
    items
        .iter()
        .map(|c| ChartPoint {
            label: c.country.clone(),
            value: c.revenue,
            tooltip: format!("{}: {}", c.country, format_currency_exact(c.revenue)),
        })
        .collect()
}

pub fn revenue_by_hour(items: &[HourRevenue]) -> Vec<ChartPoint> {
    items
        .iter()
        .map(|h| {
            let label = format!("{:02}:00", h.hour);
            ChartPoint {
                tooltip: format!("{}: {}", label, format_currency_exact(h.revenue)),
                label,
                value: h.revenue,
            }
        })
        .collect()
}
