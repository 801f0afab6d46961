use csv::StringRecord;

use super::error::DatasetError;

pub const COL_INVOICE_NO: &str = "InvoiceNo";
pub const COL_STOCK_CODE: &str = "StockCode";
pub const COL_DESCRIPTION: &str = "Description";
pub const COL_QUANTITY: &str = "Quantity";
pub const COL_INVOICE_DATE: &str = "InvoiceDate";
pub const COL_UNIT_PRICE: &str = "UnitPrice";
pub const COL_CUSTOMER_ID: &str = "CustomerID";
pub const COL_COUNTRY: &str = "Country";

/// Строка CSV как есть, до очистки.
///
/// `description` и `customer_id` могут отсутствовать. Числовые поля,
/// `invoice_date` и `customer_id` остаются строками до приведения типов в cleaner:
/// строка, которую cleaner отбросит, не должна ломать загрузку.
#[derive(Debug, Clone, PartialEq)]
pub struct RawTransaction {
    /// Line number in the source file, for error messages
    pub line: u64,
    pub invoice_no: String,
    pub stock_code: String,
    pub description: Option<String>,
    pub quantity: String,
    pub invoice_date: String,
    pub unit_price: String,
    pub customer_id: Option<String>,
    pub country: String,
}

/// Column positions resolved from the header row
struct ColumnIndex {
    invoice_no: usize,
    stock_code: usize,
    description: usize,
    quantity: usize,
    invoice_date: usize,
    unit_price: usize,
    customer_id: usize,
    country: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self, DatasetError> {
        let find = |name: &'static str| -> Result<usize, DatasetError> {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
                .ok_or(DatasetError::MissingColumn(name))
        };

        Ok(Self {
            invoice_no: find(COL_INVOICE_NO)?,
            stock_code: find(COL_STOCK_CODE)?,
            description: find(COL_DESCRIPTION)?,
            quantity: find(COL_QUANTITY)?,
            invoice_date: find(COL_INVOICE_DATE)?,
            unit_price: find(COL_UNIT_PRICE)?,
            customer_id: find(COL_CUSTOMER_ID)?,
            country: find(COL_COUNTRY)?,
        })
    }
}

/// Разбор CSV в строки [`RawTransaction`].
///
/// Битая запись или отсутствующая колонка фатальны. Значения ячеек здесь
/// не проверяются.
pub fn parse_csv(csv_text: &str) -> Result<Vec<RawTransaction>, DatasetError> {
    // Strip UTF-8 BOM if present
    let text = csv_text.trim_start_matches('\u{FEFF}');

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();
    let index = ColumnIndex::from_headers(&headers)?;

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        let text_field = |i: usize| record.get(i).unwrap_or_default().to_string();
        let optional_field = |i: usize| {
            record
                .get(i)
                // only an empty cell is missing, whitespace is a value
                .filter(|v| !v.is_empty())
                .map(|v| v.to_string())
        };

        rows.push(RawTransaction {
            line,
            invoice_no: text_field(index.invoice_no),
            stock_code: text_field(index.stock_code),
            description: optional_field(index.description),
            quantity: text_field(index.quantity),
            invoice_date: text_field(index.invoice_date),
            unit_price: text_field(index.unit_price),
            customer_id: optional_field(index.customer_id),
            country: text_field(index.country),
        });
    }

    tracing::debug!("Parsed {} CSV records", rows.len());
    Ok(rows)
}
