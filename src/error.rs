// src/error.rs
use thiserror::Error;
use wrapflow_layout::LayoutError;

/// Errors raised while loading and laying out a scene document.
#[derive(Error, Debug)]
pub enum WrapflowError {
    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
