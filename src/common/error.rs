use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON deserialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Source unavailable: {message}")]
    SourceUnavailable { message: String },

    #[error("Schema error: {0}")]
    Schema(String),

    #[error("Missing required column: {0}")]
    MissingColumn(String),

    #[error("Invalid value in column {column} at row {row}: {message}")]
    InvalidCell {
        column: String,
        row: usize,
        message: String,
    },
}

impl StatsError {
    pub fn source_unavailable(message: impl Into<String>) -> Self {
        StatsError::SourceUnavailable {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
