//! Bitmap-backed icon drawable

use std::sync::Arc;

use kurbo::{Affine, Rect};
use peniko::Image;

use crate::scene::PaintScene;

/// An icon image together with the box it is painted into.
///
/// The pixel data is shared and immutable; the bounds are owned by each
/// drawable. Spans with different sizes can therefore share one
/// `Arc<Image>` without interfering with each other's layout.
#[derive(Debug, Clone)]
pub struct IconDrawable {
    image: Arc<Image>,
    bounds: Rect,
}

impl IconDrawable {
    /// Create a drawable whose bounds match the image's pixel size.
    pub fn new(image: Arc<Image>) -> Self {
        let bounds = Rect::new(0.0, 0.0, image.width as f64, image.height as f64);
        Self { image, bounds }
    }

    /// The underlying shared image.
    pub fn image(&self) -> &Arc<Image> {
        &self.image
    }

    /// The box the image is scaled into when drawn.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Assign the box the image is scaled into. Idempotent: re-assigning the
    /// same bounds changes nothing observable.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Paint the image scaled from its pixel size into the bounds, placed
    /// under `transform`. Degenerate images and empty bounds draw nothing.
    pub fn draw(&self, scene: &mut dyn PaintScene, transform: Affine) {
        if self.image.width == 0 || self.image.height == 0 {
            log::warn!("skipping draw of icon image with zero pixel dimensions");
            return;
        }
        if self.bounds.width() <= 0.0 || self.bounds.height() <= 0.0 {
            return;
        }

        let x_scale = self.bounds.width() / self.image.width as f64;
        let y_scale = self.bounds.height() / self.image.height as f64;
        let transform = transform
            .pre_translate(self.bounds.origin().to_vec2())
            .pre_scale_non_uniform(x_scale, y_scale);

        scene.draw_image(&self.image, transform);
    }
}
