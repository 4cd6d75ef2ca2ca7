//! Error handling for span construction and icon resolution

/// Errors surfaced while building or resolving emoticon spans.
#[derive(Debug, thiserror::Error)]
pub enum SpanError {
    #[error("Invalid span size: {0}")]
    InvalidSize(f32),

    #[error("No icon registered for emoticon {0:?}")]
    IconNotFound(String),

    #[error("Icon image has zero pixel dimensions")]
    EmptyImage,
}
