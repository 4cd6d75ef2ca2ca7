//! Renderer-agnostic paint surface spans draw into

use kurbo::{Affine, Rect};
use peniko::{BlendMode, Image};

/// Drawing surface a span paints into.
///
/// Transforms are supplied per call and layers are explicitly scoped, so a
/// well-behaved span leaves no residual transform or clip state on the
/// surface after drawing.
pub trait PaintScene {
    /// Push a blend/clip layer. Drawing between this call and the matching
    /// [`pop_layer`](PaintScene::pop_layer) is clipped to `clip` under
    /// `transform`.
    fn push_layer(&mut self, blend: BlendMode, alpha: f32, transform: Affine, clip: &Rect);

    /// Pop the most recently pushed layer.
    fn pop_layer(&mut self);

    /// Draw `image` with its pixel box mapped through `transform`.
    fn draw_image(&mut self, image: &Image, transform: Affine);
}

/// A single recorded drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum SceneCommand {
    PushLayer {
        blend: BlendMode,
        alpha: f32,
        transform: Affine,
        clip: Rect,
    },
    PopLayer,
    DrawImage {
        width: u32,
        height: u32,
        transform: Affine,
    },
}

/// [`PaintScene`] implementation that records commands instead of
/// rasterizing. Lets hosts (and this crate's tests) assert exactly what a
/// span painted without standing up a real renderer.
#[derive(Debug, Default)]
pub struct RecordingScene {
    commands: Vec<SceneCommand>,
}

impl RecordingScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// The commands recorded so far, in draw order.
    pub fn commands(&self) -> &[SceneCommand] {
        &self.commands
    }

    /// Layers pushed minus layers popped. Zero after any well-behaved draw.
    pub fn open_layers(&self) -> i64 {
        self.commands
            .iter()
            .map(|command| match command {
                SceneCommand::PushLayer { .. } => 1,
                SceneCommand::PopLayer => -1,
                SceneCommand::DrawImage { .. } => 0,
            })
            .sum()
    }

    /// Forget all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl PaintScene for RecordingScene {
    fn push_layer(&mut self, blend: BlendMode, alpha: f32, transform: Affine, clip: &Rect) {
        self.commands.push(SceneCommand::PushLayer {
            blend,
            alpha,
            transform,
            clip: *clip,
        });
    }

    fn pop_layer(&mut self) {
        self.commands.push(SceneCommand::PopLayer);
    }

    fn draw_image(&mut self, image: &Image, transform: Affine) {
        self.commands.push(SceneCommand::DrawImage {
            width: image.width,
            height: image.height,
            transform,
        });
    }
}
