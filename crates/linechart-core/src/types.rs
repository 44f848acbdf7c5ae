// File: crates/linechart-core/src/types.rs
// Summary: Shared types and constants (sample model, projection constants, colors).

/// One `(timestamp, value)` data point. Timestamps are epoch milliseconds.
/// Samples are immutable once handed to the widget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub timestamp: i64,
    pub value: f64,
}

impl Sample {
    pub const fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Horizontal pixels between consecutive samples at zoom 1.
pub const STEP: f32 = 50.0;
/// Vertical reference line for value projection.
pub const BASELINE: f32 = 200.0;
/// Backing-pixel oversampling factor relative to layout size.
pub const SCALE_RESOLUTION: f32 = 2.0;
/// Zoom bounds. Any zoom mutation clamps into this range.
pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 10.0;
/// Multiplicative step applied per wheel notch or pinch sample (3%).
pub const ZOOM_STEP: f32 = 0.03;
/// Target grid line counts at zoom 1.
pub const H_GRID_LINES: f32 = 11.0;
pub const V_GRID_LINES: f32 = 8.0;
/// Interpolation factor keeping grid density continuous across zoom changes.
pub const GRID_SMOOTHING: f32 = 0.1;

/// RGBA color, 8 bits per channel. Backend crates convert as needed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn from_argb(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}
