use thiserror::Error;

/// Nbview error types
#[derive(Error, Debug)]
pub enum NbviewError {
    #[error("Invalid notebook format: {0}")]
    InvalidFormat(String),

    #[error("Input error: {0}")]
    Input(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

/// Result type for nbview operations
pub type Result<T> = std::result::Result<T, NbviewError>;
