// File: crates/linechart-core/src/view.rs
// First-class view state: zoom/offset transform mutated through pure gesture reducers.

use crate::types::{BASELINE, MAX_ZOOM, MIN_ZOOM, STEP, ZOOM_STEP};

/// Axis selector for zoom gestures.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomAxis {
    Horizontal,
    Vertical,
}

/// Direction of a multiplicative zoom step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

/// A single view mutation. Input handlers translate raw events into
/// gestures; `ViewTransform::apply` is the only place view state changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Gesture {
    /// Additive pan delta in surface pixels.
    Pan { dx: f32, dy: f32 },
    /// One wheel notch / pinch sample on the chosen axis.
    ZoomStep { axis: ZoomAxis, direction: ZoomDirection },
    /// Programmatic zoom to an absolute level (clamped).
    SetZoom { axis: ZoomAxis, level: f32 },
    /// Surface resize: both zooms reset to the clamped baseline.
    /// Offsets are preserved.
    Resize { baseline: f32 },
}

/// Additive-offset / multiplicative-zoom affine transform from sample
/// space to surface pixels. Persists across redraws and dataset swaps.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewTransform {
    pub zoom_x: f32,
    pub zoom_y: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self { zoom_x: 1.0, zoom_y: 1.0, offset_x: 0.0, offset_y: 0.0 }
    }
}

impl ViewTransform {
    /// Fold one gesture into a new transform. Pure; the receiver is unchanged.
    /// Invariant: zoom_x and zoom_y stay within [MIN_ZOOM, MAX_ZOOM].
    pub fn apply(self, gesture: Gesture) -> Self {
        match gesture {
            Gesture::Pan { dx, dy } => Self {
                offset_x: self.offset_x + dx,
                offset_y: self.offset_y + dy,
                ..self
            },
            Gesture::ZoomStep { axis, direction } => {
                let factor = match direction {
                    ZoomDirection::In => 1.0 + ZOOM_STEP,
                    ZoomDirection::Out => 1.0 - ZOOM_STEP,
                };
                match axis {
                    ZoomAxis::Horizontal => Self { zoom_x: clamp_zoom(self.zoom_x * factor), ..self },
                    ZoomAxis::Vertical => Self { zoom_y: clamp_zoom(self.zoom_y * factor), ..self },
                }
            }
            Gesture::SetZoom { axis, level } => match axis {
                ZoomAxis::Horizontal => Self { zoom_x: clamp_zoom(level), ..self },
                ZoomAxis::Vertical => Self { zoom_y: clamp_zoom(level), ..self },
            },
            Gesture::Resize { baseline } => Self {
                zoom_x: clamp_zoom(baseline),
                zoom_y: clamp_zoom(baseline),
                ..self
            },
        }
    }

    /// Screen X for the sample at `index`.
    #[inline]
    pub fn sample_x(&self, index: usize) -> f32 {
        (index as f32 * STEP + STEP + self.offset_x) * self.zoom_x
    }

    /// Screen Y for a sample value.
    #[inline]
    pub fn value_y(&self, value: f64) -> f32 {
        (BASELINE - value as f32 + self.offset_y) * self.zoom_y
    }
}

#[inline]
pub fn clamp_zoom(zoom: f32) -> f32 {
    zoom.clamp(MIN_ZOOM, MAX_ZOOM)
}
