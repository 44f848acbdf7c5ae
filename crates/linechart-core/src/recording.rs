// File: crates/linechart-core/src/recording.rs
// Summary: Headless DrawSurface that records draw commands for tests and benches.

use crate::surface::{DrawSurface, StrokeStyle};
use crate::types::Color;

/// One recorded drawing primitive.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    SetPixelSize { width: f32, height: f32 },
    Clear { color: Color },
    FillRect { x: f32, y: f32, width: f32, height: f32, color: Color },
    BeginPath,
    MoveTo { x: f32, y: f32 },
    LineTo { x: f32, y: f32 },
    Stroke { style: StrokeStyle },
    FillText { text: String, x: f32, y: f32, size: f32, color: Color },
}

/// Records every primitive instead of rasterizing. Lets view/gesture/render
/// behavior be asserted deterministically without a live backend.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    width: f32,
    height: f32,
    commands: Vec<DrawCommand>,
}

impl RecordingSurface {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height, commands: Vec::new() }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Drop everything recorded so far, keeping the size.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Commands recorded since the most recent `Clear`, inclusive.
    /// A full repaint always starts with one.
    pub fn last_frame(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear { .. }))
            .unwrap_or(0);
        &self.commands[start..]
    }
}

impl DrawSurface for RecordingSurface {
    fn pixel_size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn set_pixel_size(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        self.commands.push(DrawCommand::SetPixelSize { width, height });
    }

    fn clear(&mut self, color: Color) {
        self.commands.push(DrawCommand::Clear { color });
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        self.commands.push(DrawCommand::FillRect { x, y, width, height, color });
    }

    fn begin_path(&mut self) {
        self.commands.push(DrawCommand::BeginPath);
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn stroke(&mut self, style: &StrokeStyle) {
        self.commands.push(DrawCommand::Stroke { style: *style });
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        self.commands.push(DrawCommand::FillText { text: text.to_string(), x, y, size, color });
    }
}
