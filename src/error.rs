use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatewayError {
    #[error("missing required parameters: {}", .0.join(", "))]
    ValidationError(Vec<&'static str>),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Amount error: {0}")]
    AmountError(String),
    #[error("Decimal error: {0}")]
    DecimalError(#[from] rust_decimal::Error),
    #[error("URL error: {0}")]
    UrlError(#[from] url::ParseError),
    #[error("Transport error: {0}")]
    TransportError(String),
}

pub type Result<T> = std::result::Result<T, GatewayError>;
