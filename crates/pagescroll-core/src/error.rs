use thiserror::Error;

use crate::viewport::ElementId;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Scroll target not found: {0}")]
    TargetNotFound(ElementId),

    #[error("Invalid scroll duration: {0}ms (must be greater than zero)")]
    InvalidDuration(u64),

    #[error("Invalid scroll speed: {0}px/s (must be a positive number)")]
    InvalidSpeed(f64),

    #[error("Unknown easing: {0}")]
    UnknownEasing(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
