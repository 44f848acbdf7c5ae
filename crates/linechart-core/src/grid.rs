// File: crates/linechart-core/src/grid.rs
// Summary: Grid density adaptation and tick layout helpers.

use crate::types::{GRID_SMOOTHING, MAX_ZOOM, MIN_ZOOM};

/// Spacing between grid lines along one axis.
///
/// `base = extent / target_lines` is the spacing at zoom 1. The zoomed
/// spacing `base / zoom` is interpolated toward `base` by GRID_SMOOTHING so
/// density never pops as zoom crosses a threshold. For any in-range zoom the
/// result stays within [base / MAX_ZOOM, base / MIN_ZOOM].
pub fn grid_spacing(extent: f32, target_lines: f32, zoom: f32) -> f32 {
    let base = extent / target_lines.max(1.0);
    let zoomed = base / zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    zoomed + (base - zoomed) * GRID_SMOOTHING
}

/// Grid line positions covering [0, extent] at the given spacing.
pub fn grid_lines(extent: f32, spacing: f32) -> Vec<f32> {
    if spacing <= 0.0 || extent <= 0.0 {
        return Vec::new();
    }
    let mut lines = Vec::new();
    let mut pos = 0.0f32;
    while pos <= extent {
        lines.push(pos);
        pos += spacing;
    }
    lines
}

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}
