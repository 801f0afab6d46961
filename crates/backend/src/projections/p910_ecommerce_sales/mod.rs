//! P910 E-commerce sales
//!
//! Загрузка CSV с транзакциями интернет-магазина, очистка, вычисление
//! производных полей и выделение продаж (без отменённых инвойсов).
//! Результат кешируется на время жизни процесса.

pub mod cleaner;
pub mod enrich;
pub mod error;
pub mod parser;
pub mod service;
pub mod source;

pub use error::DatasetError;
