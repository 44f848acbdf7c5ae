// File: crates/linechart-core/src/axis.rs
// Summary: Axis origin and label derivation (HH:mm:ss timestamps, 2-decimal values).

use chrono::DateTime;

use crate::grid::linspace;
use crate::types::Sample;
use crate::view::ViewTransform;

/// Number of value labels along the Y axis.
pub const Y_LABEL_STEPS: usize = 6;

/// Pixel offsets of labels from the axis origin lines.
pub const X_LABEL_OFFSET: f32 = 24.0;
pub const Y_LABEL_OFFSET: f32 = 44.0;

/// Where the axis lines cross, in surface pixels. The vertical axis sits
/// one STEP left of the first sample; the horizontal axis at the minimum
/// sample value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisOrigin {
    pub x: f32,
    pub y: f32,
}

pub fn axis_origin(view: &ViewTransform, min_value: f64) -> AxisOrigin {
    AxisOrigin { x: view.offset_x * view.zoom_x, y: view.value_y(min_value) }
}

/// Min/max of sample values. A degenerate range (empty handled by the
/// caller; single value or flat data) is widened so label math stays finite.
pub fn value_range(samples: &[Sample]) -> Option<(f64, f64)> {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for s in samples {
        min = min.min(s.value);
        max = max.max(s.value);
    }
    if !min.is_finite() || !max.is_finite() {
        return None;
    }
    if (max - min).abs() < 1e-9 {
        max = min + 1.0;
    }
    Some((min, max))
}

/// `HH:mm:ss` rendering of an epoch-millisecond timestamp (UTC).
pub fn format_time(timestamp: i64) -> String {
    match DateTime::from_timestamp_millis(timestamp) {
        Some(dt) => dt.format("%H:%M:%S").to_string(),
        None => "--:--:--".to_string(),
    }
}

pub fn format_value(value: f64) -> String {
    format!("{value:.2}")
}

/// One label per sample, positioned through the canonical transform.
pub fn x_labels(samples: &[Sample], view: &ViewTransform) -> Vec<(f32, String)> {
    samples
        .iter()
        .enumerate()
        .map(|(i, s)| (view.sample_x(i), format_time(s.timestamp)))
        .collect()
}

/// Value labels spread across the data range, positioned through the
/// canonical transform.
pub fn y_labels(min: f64, max: f64, view: &ViewTransform) -> Vec<(f32, String)> {
    linspace(min, max, Y_LABEL_STEPS)
        .into_iter()
        .map(|v| (view.value_y(v), format_value(v)))
        .collect()
}
