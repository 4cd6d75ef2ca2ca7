//! Line and span metric types shared by measurement and drawing

use serde::{Deserialize, Serialize};

/// Signed font metrics for the line of text a span is embedded in.
///
/// Both fields are distances from the baseline: `ascent` is negative (the
/// top of typical glyphs sits above the baseline) and `descent` is positive.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FontMetrics {
    pub ascent: f32,
    pub descent: f32,
}

impl FontMetrics {
    /// Create metrics from signed baseline-relative distances.
    pub fn new(ascent: f32, descent: f32) -> Self {
        Self { ascent, descent }
    }

    /// Total glyph height of the line.
    pub fn height(&self) -> f32 {
        self.descent - self.ascent
    }

    /// Vertical midpoint of the line in baseline-relative coordinates.
    pub fn center_y(&self) -> f32 {
        self.ascent + self.height() / 2.0
    }
}

/// Integer vertical envelope a span reports back to the layout engine.
///
/// Values are baseline-relative like [`FontMetrics`] and truncated toward
/// zero. `top`/`ascent` and `bottom`/`descent` are kept as separate fields
/// because layout engines distinguish them for multi-line spacing, even
/// though this crate always assigns them pairwise equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpanMetrics {
    pub top: i32,
    pub ascent: i32,
    pub descent: i32,
    pub bottom: i32,
}

impl SpanMetrics {
    /// Height of the reserved envelope.
    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}
