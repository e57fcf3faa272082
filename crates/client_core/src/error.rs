use shared::error::ApiRejection;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("request to {endpoint} failed: {source}")]
    Transport {
        endpoint: String,
        source: reqwest::Error,
    },
    #[error("invalid payload from {endpoint}: {source}")]
    Decode {
        endpoint: String,
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum PurchaseError {
    #[error("purchase request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("invalid purchase response payload: {0}")]
    Decode(#[from] serde_json::Error),
    #[error(transparent)]
    Rejected(#[from] ApiRejection),
}

#[derive(Debug, Error)]
pub enum WalletError {
    #[error("wallet provider unreachable: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("wallet provider refused request ({code}): {message}")]
    Rpc { code: i64, message: String },
    #[error("wallet provider returned no accounts")]
    NoAccounts,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field} '{value}': {source}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        source: url::ParseError,
    },
    #[error("{field} must use http or https, got '{scheme}'")]
    UnsupportedScheme { field: &'static str, scheme: String },
}
