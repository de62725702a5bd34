use thiserror::Error;

#[derive(Error, Debug)]
pub enum BaitScanError {
    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("path does not exist: {0}")]
    PathNotFound(String),

    #[error("input parse error: {0}")]
    InputParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("config schema error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, BaitScanError>;
