//! The inline span contract and the emoticon icon span

use std::sync::Arc;

use kurbo::{Affine, Rect};
use peniko::{BlendMode, Image, Mix};

use crate::drawable::IconDrawable;
use crate::error::SpanError;
use crate::geometry;
use crate::scene::PaintScene;
use crate::types::{FontMetrics, SpanMetrics};

/// Callback contract between a styled-text host and an inline glyph.
///
/// The host asks two questions per layout and draw pass: how much space does
/// this glyph need relative to the current line's font metrics, and paint
/// yourself at this baseline position.
pub trait InlineSpan {
    /// Report the advance width of the span. When the host requests it,
    /// fill `out` with the vertical envelope the layout engine should
    /// reserve; hosts skip the envelope on width-only passes.
    fn measure(&self, line: FontMetrics, out: Option<&mut SpanMetrics>) -> i32;

    /// Paint the span with its left edge at `x` and the line baseline at
    /// `baseline_y`, both in screen coordinates.
    fn draw(
        &self,
        scene: &mut dyn PaintScene,
        x: f32,
        baseline_y: f32,
        line: FontMetrics,
    ) -> Result<(), SpanError>;

    /// The drawable the span paints, sized to its layout box.
    fn drawable(&self) -> &IconDrawable;
}

/// Inline span that paints a square emoticon icon vertically centered
/// against the surrounding line's font metrics.
///
/// The envelope it reports is symmetric around the line's visual midpoint,
/// not the baseline, so icons sit level with surrounding lowercase and
/// uppercase text instead of resting on the baseline like a normal glyph.
/// Immutable after construction; all per-call state (metrics, scene,
/// positions) arrives as arguments.
#[derive(Debug, Clone)]
pub struct EmoticonSpan {
    size: f32,
    drawable: IconDrawable,
}

impl EmoticonSpan {
    /// Build a span drawing `image` into a `size` x `size` box.
    ///
    /// Negative and non-finite sizes are rejected. A zero size is legal and
    /// degenerates to an invisible zero-advance glyph.
    pub fn new(image: Arc<Image>, size: f32) -> Result<Self, SpanError> {
        if !size.is_finite() || size < 0.0 {
            return Err(SpanError::InvalidSize(size));
        }
        if size == 0.0 {
            log::warn!("emoticon span constructed with zero size; it will not be visible");
        }

        let mut drawable = IconDrawable::new(image);
        drawable.set_bounds(Rect::new(0.0, 0.0, size as f64, size as f64));
        Ok(Self { size, drawable })
    }

    /// Side length of the square icon box.
    pub fn size(&self) -> f32 {
        self.size
    }
}

impl InlineSpan for EmoticonSpan {
    fn measure(&self, line: FontMetrics, out: Option<&mut SpanMetrics>) -> i32 {
        if let Some(out) = out {
            *out = geometry::span_metrics(line, self.size);
        }
        geometry::advance_width(self.size)
    }

    fn draw(
        &self,
        scene: &mut dyn PaintScene,
        x: f32,
        baseline_y: f32,
        line: FontMetrics,
    ) -> Result<(), SpanError> {
        let top = geometry::draw_top(line, baseline_y, self.size);
        let transform = Affine::translate((x as f64, top as f64));
        let clip = Rect::new(0.0, 0.0, self.size as f64, self.size as f64);

        log::trace!(
            "drawing emoticon span: x={x}, baseline_y={baseline_y}, top={top}, size={}",
            self.size
        );

        // No fallible work happens between push and pop; the layer is
        // always balanced and the scene returns to its pre-call state.
        scene.push_layer(BlendMode::from(Mix::Clip), 1.0, transform, &clip);
        self.drawable.draw(scene, transform);
        scene.pop_layer();

        Ok(())
    }

    fn drawable(&self) -> &IconDrawable {
        &self.drawable
    }
}
