use thiserror::Error;

/// Failures inside the relay pipeline
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("could not decode incoming update: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("request failed: {0}")]
    Request(#[source] reqwest::Error),

    #[error("could not read response body: {0}")]
    ResponseRead(#[source] reqwest::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("TOKEN must be set")]
    MissingToken,

    #[error("{key} has invalid value {value:?}")]
    InvalidValue { key: &'static str, value: String },
}
