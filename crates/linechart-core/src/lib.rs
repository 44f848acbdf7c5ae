// File: crates/linechart-core/src/lib.rs
// Summary: Core library entry point; exports public API for the chart widget.

pub mod axis;
pub mod chart;
pub mod grid;
pub mod interaction;
pub mod recording;
pub mod surface;
pub mod theme;
pub mod types;
pub mod view;

pub use chart::Chart;
pub use interaction::{wheel_gesture, InteractionState, TouchPoint};
pub use recording::{DrawCommand, RecordingSurface};
pub use surface::{DrawSurface, StrokeStyle, SurfaceError};
pub use theme::Theme;
pub use types::{Color, Sample, MAX_ZOOM, MIN_ZOOM, SCALE_RESOLUTION, STEP};
pub use view::{Gesture, ViewTransform, ZoomAxis, ZoomDirection};
