//! Inline emoticon icon spans for styled text
//!
//! This crate provides the span type a styled-text host uses to inline small
//! bitmap icons (emoticons) in a run of text:
//! - Measurement that reserves a vertical envelope centered on the line's
//!   visual midpoint rather than the baseline
//! - Positioned drawing through a renderer-agnostic paint scene
//! - An icon registry resolving emoticon keys to images

pub mod drawable;
pub mod error;
pub mod geometry;
pub mod registry;
pub mod scene;
pub mod span;
pub mod types;

// Re-exported so hosts can implement [`PaintScene`] and construct icon
// images against the same versions this crate was built with.
pub use kurbo;
pub use peniko;

pub use drawable::IconDrawable;
pub use error::SpanError;
pub use registry::EmoticonRegistry;
pub use scene::{PaintScene, RecordingScene, SceneCommand};
pub use span::{EmoticonSpan, InlineSpan};
pub use types::{FontMetrics, SpanMetrics};
