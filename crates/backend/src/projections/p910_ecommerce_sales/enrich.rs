use chrono::{Datelike, Month, Timelike, Weekday};
use contracts::projections::p910_ecommerce_sales::TransactionDto;

use super::cleaner::CleanTransaction;
use super::error::DatasetError;

/// Marks a cancelled (credited) invoice when present anywhere in InvoiceNo
pub const CANCELLATION_MARKER: char = 'C';

/// Очищенная строка с производными полями
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    pub base: CleanTransaction,
    /// |UnitPrice * Quantity|
    pub revenue: f64,
    pub year: i32,
    pub month: Month,
    /// "Month-Year", e.g. "March-2011"
    pub period: String,
    pub weekday: Weekday,
    pub hour: u32,
}

impl Transaction {
    pub fn is_cancelled(&self) -> bool {
        self.base.invoice_no.contains(CANCELLATION_MARKER)
    }

    pub fn to_dto(&self) -> TransactionDto {
        TransactionDto {
            invoice_no: self.base.invoice_no.clone(),
            stock_code: self.base.stock_code.clone(),
            description: self.base.description.clone(),
            quantity: self.base.quantity,
            invoice_date: self
                .base
                .invoice_date
                .format("%Y-%m-%d %H:%M:%S")
                .to_string(),
            unit_price: self.base.unit_price,
            customer_id: self.base.customer_id,
            country: self.base.country.clone(),
            revenue: self.revenue,
            year: self.year,
            month: self.month.name().to_string(),
            period: self.period.clone(),
            day: weekday_name(self.weekday).to_string(),
            hour: self.hour,
            is_cancelled: self.is_cancelled(),
        }
    }
}

/// Добавляет выручку и календарные поля
pub fn enrich(rows: Vec<CleanTransaction>) -> Result<Vec<Transaction>, DatasetError> {
    rows.into_iter().map(enrich_one).collect()
}

fn enrich_one(base: CleanTransaction) -> Result<Transaction, DatasetError> {
    let ts = base.invoice_date;
    let revenue = (base.unit_price * base.quantity as f64).abs();
    let month = month_of(ts.month()).ok_or_else(|| DatasetError::InvalidTimestamp {
        line: base.line,
        value: ts.to_string(),
    })?;

    Ok(Transaction {
        revenue,
        year: ts.year(),
        month,
        period: period_label(month, ts.year()),
        weekday: ts.weekday(),
        hour: ts.hour(),
        base,
    })
}

/// Выделяет продажи: строки, чей InvoiceNo не содержит маркер отмены
pub fn sales_only(rows: &[Transaction]) -> Vec<Transaction> {
    rows.iter().filter(|t| !t.is_cancelled()).cloned().collect()
}

/// "March-2011"
pub fn period_label(month: Month, year: i32) -> String {
    format!("{}-{}", month.name(), year)
}

/// Full English day name
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Month from its 1-based number, `None` outside 1..=12
pub fn month_of(number: u32) -> Option<Month> {
    let number = u8::try_from(number).ok()?;
    Month::try_from(number).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn clean_row(invoice_no: &str, quantity: i64, unit_price: f64, date: &str) -> CleanTransaction {
        CleanTransaction {
            line: 2,
            invoice_no: invoice_no.to_string(),
            stock_code: "22728".to_string(),
            description: "ALARM CLOCK".to_string(),
            quantity,
            invoice_date: NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .unwrap()
                .and_hms_opt(14, 30, 0)
                .unwrap(),
            unit_price,
            customer_id: 1,
            country: "United Kingdom".to_string(),
        }
    }

    #[test]
    fn test_enrich_derives_calendar_fields() {
        let rows = enrich(vec![clean_row("500001", 5, 2.0, "2011-03-15")]).unwrap();
        let t = &rows[0];

        assert_eq!(t.revenue, 10.0);
        assert_eq!(t.year, 2011);
        assert_eq!(t.month, Month::March);
        assert_eq!(t.period, "March-2011");
        assert_eq!(t.weekday, Weekday::Tue);
        assert_eq!(t.hour, 14);
    }

    #[test]
    fn test_revenue_is_absolute() {
        let rows = enrich(vec![
            clean_row("C500002", -3, 4.0, "2011-01-06"),
            clean_row("500003", 2, -1.5, "2011-01-06"),
        ])
        .unwrap();
        assert_eq!(rows[0].revenue, 12.0);
        assert_eq!(rows[1].revenue, 3.0);
        assert!(rows.iter().all(|t| t.revenue >= 0.0));
    }

    #[test]
    fn test_sales_only_drops_cancelled_invoices() {
        let rows = enrich(vec![
            clean_row("500001", 5, 2.0, "2011-01-05"),
            clean_row("C500002", -3, 4.0, "2011-01-06"),
            clean_row("A5C0003", 1, 1.0, "2011-01-06"),
        ])
        .unwrap();

        let sales = sales_only(&rows);
        assert_eq!(sales.len(), 1);
        assert_eq!(sales[0].base.invoice_no, "500001");
        assert!(sales.iter().all(|t| !t.base.invoice_no.contains(CANCELLATION_MARKER)));
        assert!(sales.len() <= rows.len());
    }

    #[test]
    fn test_to_dto() {
        let rows = enrich(vec![clean_row("500001", 5, 2.0, "2011-01-05")]).unwrap();
        let dto = rows[0].to_dto();
        assert_eq!(dto.invoice_date, "2011-01-05 14:30:00");
        assert_eq!(dto.month, "January");
        assert_eq!(dto.period, "January-2011");
        assert_eq!(dto.day, "Wednesday");
        assert_eq!(dto.revenue, 10.0);
        assert!(!dto.is_cancelled);

        let rows = enrich(vec![clean_row("C500002", -3, 4.0, "2011-01-06")]).unwrap();
        assert!(rows[0].to_dto().is_cancelled);
    }

    #[test]
    fn test_month_of_rejects_out_of_range() {
        assert_eq!(month_of(1), Some(Month::January));
        assert_eq!(month_of(12), Some(Month::December));
        assert_eq!(month_of(0), None);
        assert_eq!(month_of(13), None);
        assert_eq!(month_of(300), None);
    }
}
