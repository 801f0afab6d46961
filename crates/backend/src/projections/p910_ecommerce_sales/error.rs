use thiserror::Error;

/// Ошибки загрузки и разбора набора данных
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("Failed to fetch dataset from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Dataset request to {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Failed to read dataset file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("Line {line}: invalid value {value:?} in column {column}")]
    InvalidField {
        line: u64,
        column: &'static str,
        value: String,
    },

    #[error("Line {line}: unrecognized invoice timestamp {value:?}")]
    InvalidTimestamp { line: u64, value: String },
}
