//! Error types for rendering and delivery.

use thiserror::Error;

/// Rendering failures.
///
/// None of these reach a client as a raw error: the engine turns them into
/// an error [`Bundle`](crate::Bundle) at the boundary of the operation that
/// failed.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum RenderError {
    /// The value offers no text, bytes or stream the fallback renderer can
    /// read. Carries the value's type name.
    #[error("unsupported type, cannot render: {0}")]
    UnsupportedType(String),

    /// Image or structured-data encoding failed.
    #[error("encode failed: {0}")]
    Encode(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Draining a stream or reading a file failed.
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::Encode(Box::new(err))
    }
}

impl From<image::ImageError> for RenderError {
    fn from(err: image::ImageError) -> Self {
        RenderError::Encode(Box::new(err))
    }
}

/// Delivery failures reported by a [`Sink`](crate::Sink).
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SinkError {
    /// No transport is wired in yet.
    #[error("cannot display: {0}")]
    Unavailable(String),

    /// The transport accepted the bundle but could not deliver it.
    #[error("delivery failed: {0}")]
    Delivery(String),

    /// Catch-all.
    #[error("{0}")]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}
