//! Baseline-centering math for inline icon glyphs
//!
//! Pure functions over [`FontMetrics`] and a declared icon size. The glyph's
//! envelope is symmetric around the line's visual midpoint rather than
//! sitting on the baseline, which keeps icons level with surrounding
//! lowercase and uppercase text.

use crate::types::{FontMetrics, SpanMetrics};

/// Floating-point vertical envelope `[center - size/2, center + size/2]`
/// for a `size`-tall glyph on `line`, in baseline-relative coordinates.
pub fn centered_envelope(line: FontMetrics, size: f32) -> (f32, f32) {
    let center = line.center_y();
    (center - size / 2.0, center + size / 2.0)
}

/// Integer envelope reported to the layout engine.
///
/// Conversion truncates toward zero rather than rounding. Host layout
/// engines were tuned against the truncated values, so this stays as-is.
pub fn span_metrics(line: FontMetrics, size: f32) -> SpanMetrics {
    let (top, bottom) = centered_envelope(line, size);
    let top = top as i32;
    let bottom = bottom as i32;
    SpanMetrics {
        top,
        ascent: top,
        descent: bottom,
        bottom,
    }
}

/// Horizontal space the glyph consumes during line layout.
pub fn advance_width(size: f32) -> i32 {
    size as i32
}

/// Screen-space top edge of a `size`-tall glyph centered on a line whose
/// baseline sits at `baseline_y`.
pub fn draw_top(line: FontMetrics, baseline_y: f32, size: f32) -> f32 {
    let center_y = baseline_y + line.descent - line.height() / 2.0;
    center_y - size / 2.0
}
