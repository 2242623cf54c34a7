use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayermapError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid map shape: {0}")]
    InvalidShape(String),
    #[error("Invalid entry for \"{specifier}\" in {location}: {reason}")]
    InvalidEntry {
        location: String,
        specifier: String,
        reason: String,
    },
    #[error("Composition requires at least one map")]
    EmptyComposition,
}

pub type Result<T> = std::result::Result<T, LayermapError>;
