use anyhow::Result;
use chrono::{DateTime, Utc};
use contracts::projections::p910_ecommerce_sales::{DatasetSummary, TransactionPage};
use once_cell::sync::{Lazy, OnceCell};
use std::sync::Arc;
use tokio::sync::Mutex;

use super::cleaner::{self, CleaningStats};
use super::enrich::{self, Transaction};
use super::error::DatasetError;
use super::parser;
use super::source::{DatasetSource, FileCsvSource, HttpCsvSource};
use crate::shared::config::Config;
use crate::shared::format::format_number;

pub const DEFAULT_PAGE_SIZE: usize = 100;
pub const MAX_PAGE_SIZE: usize = 1000;

/// Загруженный и подготовленный набор данных.
///
/// `transactions`: очищенная таблица с производными полями (порядок файла),
/// `sales`: подмножество без отменённых инвойсов, считается один раз при загрузке.
#[derive(Debug)]
pub struct Dataset {
    pub source: String,
    pub loaded_at: DateTime<Utc>,
    pub stats: CleaningStats,
    pub transactions: Vec<Transaction>,
    pub sales: Vec<Transaction>,
}

impl Dataset {
    /// Run the whole pipeline over CSV text: parse → clean → enrich → sales filter
    pub fn build(source: String, csv_text: &str) -> Result<Self, DatasetError> {
        let raw = parser::parse_csv(csv_text)?;
        let (cleaned, stats) = cleaner::clean(raw)?;
        let transactions = enrich::enrich(cleaned)?;
        let sales = enrich::sales_only(&transactions);

        Ok(Self {
            source,
            loaded_at: Utc::now(),
            stats,
            transactions,
            sales,
        })
    }

    pub fn summary(&self) -> DatasetSummary {
        DatasetSummary {
            source: self.source.clone(),
            loaded_at: self.loaded_at,
            raw_rows: self.stats.raw_rows,
            dropped_missing: self.stats.dropped_missing,
            dropped_unspecified_country: self.stats.dropped_unspecified_country,
            cleaned_rows: self.transactions.len(),
            cancelled_rows: self.transactions.len() - self.sales.len(),
            sales_rows: self.sales.len(),
        }
    }

    /// Slice of the cleaned table for the raw data view
    pub fn page(&self, offset: usize, limit: usize) -> TransactionPage {
        let limit = limit.clamp(1, MAX_PAGE_SIZE);
        let items = self
            .transactions
            .iter()
            .skip(offset)
            .take(limit)
            .map(Transaction::to_dto)
            .collect();

        TransactionPage {
            items,
            offset,
            limit,
            total: self.transactions.len(),
        }
    }
}

/// Fetch and prepare the dataset from `source`
pub async fn load(source: &dyn DatasetSource) -> Result<Dataset, DatasetError> {
    let started = std::time::Instant::now();
    let text = source.fetch().await?;
    let dataset = Dataset::build(source.describe(), &text)?;

    tracing::info!(
        "Dataset loaded from {} in {}ms: {} cleaned rows, {} sales rows",
        dataset.source,
        started.elapsed().as_millis(),
        format_number(dataset.transactions.len()),
        format_number(dataset.sales.len())
    );

    Ok(dataset)
}

/// Кеш набора данных с однократной загрузкой.
///
/// Загрузка идёт под мьютексом: одновременные первые запросы ждут одну и ту же
/// загрузку, повторного скачивания нет. Неудачная загрузка ничего не кеширует.
pub struct DatasetCache {
    slot: Mutex<Option<Arc<Dataset>>>,
}

impl DatasetCache {
    pub fn new() -> Self {
        Self {
            slot: Mutex::new(None),
        }
    }

    pub async fn get_or_load(&self, source: &dyn DatasetSource) -> Result<Arc<Dataset>, DatasetError> {
        let mut slot = self.slot.lock().await;
        if let Some(dataset) = slot.as_ref() {
            return Ok(Arc::clone(dataset));
        }

        let dataset = Arc::new(load(source).await?);
        *slot = Some(Arc::clone(&dataset));
        Ok(dataset)
    }

    /// Reload from `source`. The previous dataset stays cached if the reload fails.
    pub async fn refresh(&self, source: &dyn DatasetSource) -> Result<Arc<Dataset>, DatasetError> {
        let mut slot = self.slot.lock().await;
        match load(source).await {
            Ok(dataset) => {
                let dataset = Arc::new(dataset);
                *slot = Some(Arc::clone(&dataset));
                Ok(dataset)
            }
            Err(e) => {
                if slot.is_some() {
                    tracing::warn!("Dataset refresh failed, keeping previous dataset: {}", e);
                }
                Err(e)
            }
        }
    }

    pub async fn invalidate(&self) {
        *self.slot.lock().await = None;
    }
}

impl Default for DatasetCache {
    fn default() -> Self {
        Self::new()
    }
}

static DATASET_SOURCE: OnceCell<Box<dyn DatasetSource>> = OnceCell::new();
static DATASET_CACHE: Lazy<DatasetCache> = Lazy::new(DatasetCache::new);

/// Pick the dataset source from configuration. Must be called once at startup.
pub fn initialize(config: &Config) -> Result<()> {
    let source: Box<dyn DatasetSource> = match &config.dataset.path {
        Some(path) => Box::new(FileCsvSource::new(path)),
        None => Box::new(HttpCsvSource::new(config.dataset.url.clone())),
    };

    tracing::info!("Dataset source: {}", source.describe());

    DATASET_SOURCE
        .set(source)
        .map_err(|_| anyhow::anyhow!("Dataset source is already initialized"))
}

fn get_source() -> Result<&'static dyn DatasetSource> {
    DATASET_SOURCE
        .get()
        .map(|s| s.as_ref())
        .ok_or_else(|| anyhow::anyhow!("Dataset source is not initialized"))
}

/// Cached dataset, loading it on first use
pub async fn get_dataset() -> Result<Arc<Dataset>> {
    let source = get_source()?;
    Ok(DATASET_CACHE.get_or_load(source).await?)
}

/// Force a reload of the cached dataset
pub async fn refresh_dataset() -> Result<Arc<Dataset>> {
    let source = get_source()?;
    Ok(DATASET_CACHE.refresh(source).await?)
}

/// Страница очищенной таблицы
pub async fn list_transactions(offset: Option<usize>, limit: Option<usize>) -> Result<TransactionPage> {
    let dataset = get_dataset().await?;
    Ok(dataset.page(offset.unwrap_or(0), limit.unwrap_or(DEFAULT_PAGE_SIZE)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projections::p910_ecommerce_sales::source::StaticCsvSource;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    const HEADER: &str =
        "InvoiceNo,StockCode,Description,Quantity,InvoiceDate,UnitPrice,CustomerID,Country";

    fn sample_csv() -> String {
        [
            HEADER,
            "500001,A1,A,5,2011-01-05,2.00,1,UK",
            "C500002,B1,B,-3,2011-01-06,4.00,2,UK",
            "500003,C1,,1,2011-01-06,1.00,3,UK",
            "500004,D1,D,1,2011-01-06,1.00,,UK",
            "500005,E1,E,1,2011-01-06,1.00,5,Unspecified",
        ]
        .join("\n")
    }

    /// Counts fetches; yields so that concurrent callers interleave
    struct CountingSource {
        fetches: AtomicUsize,
        csv: String,
    }

    #[async_trait]
    impl DatasetSource for CountingSource {
        fn describe(&self) -> String {
            "counting".to_string()
        }

        async fn fetch(&self) -> Result<String, DatasetError> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            tokio::task::yield_now().await;
            Ok(self.csv.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl DatasetSource for FailingSource {
        fn describe(&self) -> String {
            "failing".to_string()
        }

        async fn fetch(&self) -> Result<String, DatasetError> {
            Err(DatasetError::HttpStatus {
                url: "failing".to_string(),
                status: 404,
            })
        }
    }

    #[test]
    fn test_build_runs_whole_pipeline() {
        let dataset = Dataset::build("memory".to_string(), &sample_csv()).unwrap();

        assert_eq!(dataset.transactions.len(), 2);
        assert_eq!(dataset.sales.len(), 1);
        assert_eq!(dataset.sales[0].base.invoice_no, "500001");
        assert_eq!(dataset.sales[0].revenue, 10.0);

        let summary = dataset.summary();
        assert_eq!(summary.raw_rows, 5);
        assert_eq!(summary.dropped_missing, 2);
        assert_eq!(summary.dropped_unspecified_country, 1);
        assert_eq!(summary.cleaned_rows, 2);
        assert_eq!(summary.cancelled_rows, 1);
        assert_eq!(summary.sales_rows, 1);
    }

    #[test]
    fn test_build_ignores_blank_numbers_in_dropped_rows() {
        let csv = [HEADER, "500001,A1,A,5,2011-01-05,2.00,1,UK", "500002,B1,B,,2011-01-06,4.00,,UK"]
            .join("\n");
        let dataset = Dataset::build("memory".to_string(), &csv).unwrap();

        assert_eq!(dataset.transactions.len(), 1);
        assert_eq!(dataset.summary().dropped_missing, 1);
    }

    #[test]
    fn test_page_bounds() {
        let dataset = Dataset::build("memory".to_string(), &sample_csv()).unwrap();

        let page = dataset.page(0, 1);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total, 2);
        assert_eq!(page.items[0].invoice_no, "500001");

        let page = dataset.page(1, 0);
        assert_eq!(page.limit, 1);
        assert_eq!(page.items[0].invoice_no, "C500002");

        let page = dataset.page(10, 5000);
        assert!(page.items.is_empty());
        assert_eq!(page.limit, MAX_PAGE_SIZE);
    }

    #[tokio::test]
    async fn test_cache_returns_same_dataset() {
        let cache = DatasetCache::new();
        let source = StaticCsvSource(sample_csv());

        let first = cache.get_or_load(&source).await.unwrap();
        let second = cache.get_or_load(&source).await.unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_first_requests_fetch_once() {
        let cache = Arc::new(DatasetCache::new());
        let source = Arc::new(CountingSource {
            fetches: AtomicUsize::new(0),
            csv: sample_csv(),
        });

        let mut handles = Vec::new();
        for _ in 0..8 {
            let cache = Arc::clone(&cache);
            let source = Arc::clone(&source);
            handles.push(tokio::spawn(async move {
                cache.get_or_load(source.as_ref()).await.map(|d| d.sales.len())
            }));
        }
        for handle in handles {
            assert_eq!(handle.await.unwrap().unwrap(), 1);
        }

        assert_eq!(source.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_load_is_not_cached() {
        let cache = DatasetCache::new();
        assert!(cache.get_or_load(&FailingSource).await.is_err());

        let dataset = cache
            .get_or_load(&StaticCsvSource(sample_csv()))
            .await
            .unwrap();
        assert_eq!(dataset.transactions.len(), 2);
    }

    #[tokio::test]
    async fn test_refresh_keeps_previous_on_failure() {
        let cache = DatasetCache::new();
        let source = StaticCsvSource(sample_csv());
        let first = cache.get_or_load(&source).await.unwrap();

        assert!(cache.refresh(&FailingSource).await.is_err());
        let still = cache.get_or_load(&source).await.unwrap();
        assert!(Arc::ptr_eq(&first, &still));

        let refreshed = cache.refresh(&source).await.unwrap();
        assert!(!Arc::ptr_eq(&first, &refreshed));
    }

    #[tokio::test]
    async fn test_invalidate_forces_reload() {
        let cache = DatasetCache::new();
        let source = CountingSource {
            fetches: AtomicUsize::new(0),
            csv: sample_csv(),
        };

        cache.get_or_load(&source).await.unwrap();
        cache.invalidate().await;
        cache.get_or_load(&source).await.unwrap();
        assert_eq!(source.fetches.load(Ordering::SeqCst), 2);
    }
}
