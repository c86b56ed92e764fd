use thiserror::Error;

#[derive(Debug, Error)]
pub enum TwoTableError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Request failed: {0}")]
    Request(String),

    /// Non-success response. Carries the server's `detail` message or a default.
    #[error("{0}")]
    Server(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<TwoTableError> for String {
    fn from(err: TwoTableError) -> Self {
        err.to_string()
    }
}

impl From<toml::de::Error> for TwoTableError {
    fn from(err: toml::de::Error) -> Self {
        TwoTableError::Config(err.to_string())
    }
}
