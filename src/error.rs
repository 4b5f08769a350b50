use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("image file not found: {}", .0.display())]
    MissingFile(PathBuf),

    #[error("index {index} out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("no metadata for synset '{0}'")]
    MissingMetadata(String),

    #[error("unsupported embedding type '{0}'")]
    UnsupportedEmbedding(String),

    #[error("bitmap of {len} values does not fit {width}x{height}")]
    MalformedBitmap { width: u32, height: u32, len: usize },

    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode thumbnail: {0}")]
    Encode(#[from] image::ImageError),
}

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("unexpected value for {field}: {detail}")]
    UnexpectedValue { field: String, detail: String },

    #[error("column '{0}' not found")]
    MissingColumn(String),
}

impl DataError {
    pub(crate) fn unexpected(field: impl Into<String>, detail: impl Into<String>) -> Self {
        DataError::UnexpectedValue {
            field: field.into(),
            detail: detail.into(),
        }
    }
}
