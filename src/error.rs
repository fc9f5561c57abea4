use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreenhouseError {
    #[error("Plant not found: {0}")]
    NotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, GreenhouseError>;
