//! Агрегации для дашборда D410.
//!
//! Все функции чистые и работают только на чтение по подмножеству продаж.
//! Группы накапливаются в порядке первого появления ключа, сортировка
//! стабильная: при равных суммах сохраняется этот порядок.

use chrono::Weekday;
use contracts::dashboards::d410_ecommerce_overview::{
    CountryRevenue, HourRevenue, PeriodRevenue, ProductMetric, WeekdayRevenue,
};
use std::collections::HashMap;
use std::hash::Hash;
use std::ops::AddAssign;

use crate::projections::p910_ecommerce_sales::enrich::{period_label, weekday_name, Transaction};
use crate::shared::format::round2;

/// Default size of the top-N charts
pub const TOP_LIMIT: usize = 10;

/// Sum `value` per key, keeping keys in first-encounter order
fn group_sum<K, V, I>(items: I) -> Vec<(K, V)>
where
    K: Eq + Hash + Clone,
    V: Copy + Default + AddAssign,
    I: IntoIterator<Item = (K, V)>,
{
    let mut positions: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, V)> = Vec::new();

    for (key, value) in items {
        match positions.get(&key) {
            Some(&i) => groups[i].1 += value,
            None => {
                positions.insert(key.clone(), groups.len());
                groups.push((key, value));
            }
        }
    }

    groups
}

/// Descending by metric, ties keep their current order, at most `limit` rows
fn top_desc<K>(mut groups: Vec<(K, f64)>, limit: usize) -> Vec<(K, f64)> {
    groups.sort_by(|a, b| b.1.total_cmp(&a.1));
    groups.truncate(limit);
    groups
}

/// 1. Выручка по месяцам ("Month-Year") в календарном порядке
pub fn revenue_over_time(sales: &[Transaction]) -> Vec<PeriodRevenue> {
    let mut groups = group_sum(sales.iter().map(|t| ((t.year, t.month), t.revenue)));
    groups.sort_by_key(|((year, month), _)| (*year, month.number_from_month()));

    groups
        .into_iter()
        .map(|((year, month), revenue)| PeriodRevenue {
            label: period_label(month, year),
            year,
            month: month.number_from_month(),
            revenue: round2(revenue),
        })
        .collect()
}

/// 2. Топ товаров по выручке
pub fn top_products_by_revenue(sales: &[Transaction], limit: usize) -> Vec<ProductMetric> {
    let groups: Vec<_> = group_sum(sales.iter().map(|t| (product_key(t), t.revenue)))
        .into_iter()
        .map(|(key, revenue)| (key, round2(revenue)))
        .collect();

    top_desc(groups, limit)
        .into_iter()
        .map(|((stock_code, description), value)| ProductMetric {
            stock_code,
            description,
            value,
        })
        .collect()
}

/// 3. Топ товаров по количеству
pub fn top_products_by_quantity(sales: &[Transaction], limit: usize) -> Vec<ProductMetric> {
    let groups: Vec<_> = group_sum(sales.iter().map(|t| (product_key(t), t.base.quantity)))
        .into_iter()
        .map(|(key, quantity)| (key, quantity as f64))
        .collect();

    top_desc(groups, limit)
        .into_iter()
        .map(|((stock_code, description), value)| ProductMetric {
            stock_code,
            description,
            value,
        })
        .collect()
}

fn product_key(t: &Transaction) -> (String, String) {
    (t.base.stock_code.clone(), t.base.description.clone())
}

/// 4. Выручка по дням недели, с понедельника по воскресенье
pub fn revenue_by_weekday(sales: &[Transaction]) -> Vec<WeekdayRevenue> {
    let mut groups = group_sum(sales.iter().map(|t| (t.weekday, t.revenue)));
    groups.sort_by_key(|(day, _)| weekday_rank(*day));

    groups
        .into_iter()
        .map(|(day, revenue)| WeekdayRevenue {
            day: weekday_name(day).to_string(),
            revenue: round2(revenue),
        })
        .collect()
}

/// Monday = 0 … Sunday = 6
pub fn weekday_rank(day: Weekday) -> u32 {
    day.num_days_from_monday()
}

/// 5. Топ стран по выручке
pub fn top_countries_by_revenue(sales: &[Transaction], limit: usize) -> Vec<CountryRevenue> {
    let groups: Vec<_> = group_sum(sales.iter().map(|t| (t.base.country.clone(), t.revenue)))
        .into_iter()
        .map(|(country, revenue)| (country, round2(revenue)))
        .collect();

    top_desc(groups, limit)
        .into_iter()
        .map(|(country, revenue)| CountryRevenue { country, revenue })
        .collect()
}

/// 6. Выручка по часам суток
pub fn revenue_by_hour(sales: &[Transaction]) -> Vec<HourRevenue> {
    let mut groups = group_sum(sales.iter().map(|t| (t.hour, t.revenue)));
    groups.sort_by_key(|(hour, _)| *hour);

    groups
        .into_iter()
        .map(|(hour, revenue)| HourRevenue {
            hour,
            revenue: round2(revenue),
        })
        .collect()
}
