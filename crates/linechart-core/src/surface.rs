// File: crates/linechart-core/src/surface.rs
// Summary: DrawSurface trait (2D immediate-mode primitives) and backend error type.

use thiserror::Error;

use crate::types::Color;

/// Stroke parameters for the current path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StrokeStyle {
    pub color: Color,
    pub width: f32,
    /// `Some([on, off])` dashes the stroke; `None` draws it solid.
    pub dash: Option<[f32; 2]>,
}

impl StrokeStyle {
    pub const fn solid(color: Color, width: f32) -> Self {
        Self { color, width, dash: None }
    }

    pub const fn dashed(color: Color, width: f32, on: f32, off: f32) -> Self {
        Self { color, width, dash: Some([on, off]) }
    }
}

/// The drawing primitives the widget needs from its host surface.
///
/// Path building is stateful: `begin_path` starts a fresh path which
/// `move_to`/`line_to` extend and `stroke` flushes. Drawing calls are
/// infallible; fallible backend operations (creation, encoding) surface
/// through `SurfaceError` on the backend's own API.
pub trait DrawSurface {
    /// Current backing size in pixels.
    fn pixel_size(&self) -> (f32, f32);
    /// Recreate the backing store at the given pixel size.
    fn set_pixel_size(&mut self, width: f32, height: f32);
    /// Fill the whole surface with one color.
    fn clear(&mut self, color: Color);
    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color);
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f32, y: f32);
    fn line_to(&mut self, x: f32, y: f32);
    fn stroke(&mut self, style: &StrokeStyle);
    fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color);
}

#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("failed to create drawing surface ({width}x{height})")]
    Create { width: i32, height: i32 },
    #[error("PNG encode failed")]
    Encode,
    #[error("pixel readback failed")]
    ReadPixels,
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
