use async_trait::async_trait;
use std::path::PathBuf;

use super::error::DatasetError;

/// Откуда берётся CSV с транзакциями
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Human readable location (URL or path), used in logs and in the dataset summary
    fn describe(&self) -> String;

    /// Fetch the whole CSV as text
    async fn fetch(&self) -> Result<String, DatasetError>;
}

/// CSV по HTTP(S)
pub struct HttpCsvSource {
    url: String,
    client: reqwest::Client,
}

impl HttpCsvSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DatasetSource for HttpCsvSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    async fn fetch(&self) -> Result<String, DatasetError> {
        tracing::info!("Fetching dataset from {}", self.url);

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|source| DatasetError::Fetch {
                url: self.url.clone(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DatasetError::HttpStatus {
                url: self.url.clone(),
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|source| DatasetError::Fetch {
                url: self.url.clone(),
                source,
            })?;

        tracing::info!("Downloaded {} bytes", bytes.len());

        // The public dataset is not clean UTF-8 everywhere
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// CSV из локального файла
pub struct FileCsvSource {
    path: PathBuf,
}

impl FileCsvSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl DatasetSource for FileCsvSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    async fn fetch(&self) -> Result<String, DatasetError> {
        tracing::info!("Reading dataset from {}", self.path.display());

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| DatasetError::Io {
                path: self.path.display().to_string(),
                source,
            })?;

        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// In-memory CSV, for tests
#[cfg(test)]
pub struct StaticCsvSource(pub String);

#[cfg(test)]
#[async_trait]
impl DatasetSource for StaticCsvSource {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    async fn fetch(&self) -> Result<String, DatasetError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{http::StatusCode, routing::get, Router};
    use tokio::net::TcpListener;

    /// Serve `router` on an ephemeral local port, return its base URL
    async fn serve(router: Router) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_http_source_non_success_status_is_error() {
        let base = serve(Router::new().route(
            "/data.csv",
            get(|| async { (StatusCode::NOT_FOUND, "missing") }),
        ))
        .await;

        let source = HttpCsvSource::new(format!("{}/data.csv", base));
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, DatasetError::HttpStatus { status: 404, .. }));
    }

    #[tokio::test]
    async fn test_http_source_replaces_invalid_utf8() {
        let base = serve(Router::new().route(
            "/data.csv",
            get(|| async { b"InvoiceNo\n\xff1\n".to_vec() }),
        ))
        .await;

        let source = HttpCsvSource::new(format!("{}/data.csv", base));
        let text = source.fetch().await.unwrap();
        assert_eq!(text, "InvoiceNo\n\u{FFFD}1\n");
        assert_eq!(source.describe(), format!("{}/data.csv", base));
    }

    #[tokio::test]
    async fn test_file_source_replaces_invalid_utf8() {
        let path = std::env::temp_dir().join("p910_file_source_lossy_test.csv");
        std::fs::write(&path, b"InvoiceNo\n\xff1\n").unwrap();

        let text = FileCsvSource::new(&path).fetch().await.unwrap();
        assert!(text.contains('\u{FFFD}'));
        assert!(text.starts_with("InvoiceNo\n"));

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_file_source_reads_csv() {
        let path = std::env::temp_dir().join("p910_file_source_test.csv");
        std::fs::write(&path, "InvoiceNo,StockCode\n1,A\n").unwrap();

        let source = FileCsvSource::new(&path);
        let text = source.fetch().await.unwrap();
        assert!(text.starts_with("InvoiceNo,StockCode"));
        assert_eq!(source.describe(), path.display().to_string());

        std::fs::remove_file(&path).ok();
    }

    #[tokio::test]
    async fn test_file_source_missing_file_is_io_error() {
        let source = FileCsvSource::new("/definitely/not/here/data.csv");
        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, DatasetError::Io { .. }));
    }
}
