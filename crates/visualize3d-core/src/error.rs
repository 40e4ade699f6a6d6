//! Error types for visualize3d.

use thiserror::Error;

/// The main error type for visualize3d operations.
#[derive(Error, Debug)]
pub enum VizError {
    /// Data size mismatch (row width, or per-point arrays of the wrong length).
    #[error("data size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },

    /// An operation that needs at least one point was given none.
    #[error("point data is empty")]
    EmptyData,

    /// Downsampling stride of zero.
    #[error("downsample stride must be at least 1")]
    InvalidStride,

    /// A label is missing from the supplied label map.
    #[error("label {0} not found in label map")]
    LabelNotFound(i64),

    /// A video registered for an object does not match the plot at the same position.
    #[error(
        "video/plot mismatch for object '{object_id}' in category '{category}' at position {index}: \
         plot id '{plot_id}' vs video id '{video_id}'"
    )]
    VideoMismatch {
        category: String,
        object_id: String,
        index: usize,
        plot_id: String,
        video_id: String,
    },

    /// A video has no plot at its position.
    #[error("video '{video_id}' for object '{object_id}' in category '{category}' has no matching plot")]
    UnpairedVideo {
        category: String,
        object_id: String,
        video_id: String,
    },

    /// An object id that cannot be used as a page file name.
    #[error("object id '{object_id}' in category '{category}' is not a valid page name: {reason}")]
    InvalidId {
        category: String,
        object_id: String,
        reason: &'static str,
    },

    /// A configuration value is out of range.
    #[error("invalid option: {0}")]
    InvalidOption(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for visualize3d operations.
pub type Result<T> = std::result::Result<T, VizError>;
