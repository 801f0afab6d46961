use chrono::{NaiveDate, NaiveDateTime};

use super::error::DatasetError;
use super::parser::{RawTransaction, COL_CUSTOMER_ID, COL_QUANTITY, COL_UNIT_PRICE};

/// Country value the cleaner drops
pub const UNSPECIFIED_COUNTRY: &str = "Unspecified";

/// Formats accepted for InvoiceDate, tried in order
const DATETIME_FORMATS: &[&str] = &[
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
];

/// Date-only formats, interpreted as midnight
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y"];

/// Строка после очистки: все обязательные поля заполнены, типы приведены
#[derive(Debug, Clone, PartialEq)]
pub struct CleanTransaction {
    /// Line number in the source file
    pub line: u64,
    pub invoice_no: String,
    pub stock_code: String,
    pub description: String,
    pub quantity: i64,
    pub invoice_date: NaiveDateTime,
    pub unit_price: f64,
    pub customer_id: i64,
    pub country: String,
}

/// Сколько строк отброшено каждым правилом
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleaningStats {
    pub raw_rows: usize,
    /// CustomerID or Description empty
    pub dropped_missing: usize,
    /// Country == "Unspecified"
    pub dropped_unspecified_country: usize,
}

impl CleaningStats {
    pub fn cleaned_rows(&self) -> usize {
        self.raw_rows - self.dropped_missing - self.dropped_unspecified_country
    }
}

/// Очистка сырых строк.
///
/// 1. Отбрасываем строки без CustomerID или Description.
/// 2. Отбрасываем строки с Country == "Unspecified".
/// 3. Приводим InvoiceDate к дате-времени, CustomerID и Quantity к целому,
///    UnitPrice к числу.
///
/// Приведение типов идёт только по оставшимся строкам; ошибка приведения фатальна.
pub fn clean(
    rows: Vec<RawTransaction>,
) -> Result<(Vec<CleanTransaction>, CleaningStats), DatasetError> {
    let mut stats = CleaningStats {
        raw_rows: rows.len(),
        ..Default::default()
    };

    let mut cleaned = Vec::with_capacity(rows.len());
    for row in rows {
        let (Some(customer_id), Some(description)) = (row.customer_id, row.description) else {
            stats.dropped_missing += 1;
            continue;
        };

        if row.country == UNSPECIFIED_COUNTRY {
            stats.dropped_unspecified_country += 1;
            continue;
        }

        let invoice_date =
            parse_invoice_date(&row.invoice_date).ok_or_else(|| DatasetError::InvalidTimestamp {
                line: row.line,
                value: row.invoice_date.clone(),
            })?;

        let customer_id =
            parse_customer_id(&customer_id).ok_or_else(|| DatasetError::InvalidField {
                line: row.line,
                column: COL_CUSTOMER_ID,
                value: customer_id.clone(),
            })?;

        let quantity = row
            .quantity
            .trim()
            .parse::<i64>()
            .map_err(|_| DatasetError::InvalidField {
                line: row.line,
                column: COL_QUANTITY,
                value: row.quantity.clone(),
            })?;

        let unit_price = parse_unit_price(&row.unit_price).ok_or_else(|| {
            DatasetError::InvalidField {
                line: row.line,
                column: COL_UNIT_PRICE,
                value: row.unit_price.clone(),
            }
        })?;

        cleaned.push(CleanTransaction {
            line: row.line,
            invoice_no: row.invoice_no,
            stock_code: row.stock_code,
            description,
            quantity,
            invoice_date,
            unit_price,
            customer_id,
            country: row.country,
        });
    }

    tracing::info!(
        "Cleaning: {} raw rows, {} without customer/description, {} with unspecified country, {} kept",
        stats.raw_rows,
        stats.dropped_missing,
        stats.dropped_unspecified_country,
        cleaned.len()
    );

    Ok((cleaned, stats))
}

/// Parse InvoiceDate in any of the supported layouts
pub fn parse_invoice_date(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|fmt| NaiveDate::parse_from_str(value, fmt).ok())
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Finite decimal price
fn parse_unit_price(value: &str) -> Option<f64> {
    value.trim().parse::<f64>().ok().filter(|p| p.is_finite())
}

/// CustomerID comes as "17850" or "17850.0"; anything fractional is rejected
fn parse_customer_id(value: &str) -> Option<i64> {
    let value = value.trim();
    if let Ok(id) = value.parse::<i64>() {
        return Some(id);
    }

    let float = value.parse::<f64>().ok()?;
    if float.is_finite() && float.fract() == 0.0 && float.abs() < i64::MAX as f64 {
        Some(float as i64)
    } else {
        None
    }
}
