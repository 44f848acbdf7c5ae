// File: crates/linechart-core/tests/grid.rs
// Purpose: Grid spacing bounds and continuity across the zoom range.

use linechart_core::grid::{grid_lines, grid_spacing, linspace};
use linechart_core::{MAX_ZOOM, MIN_ZOOM};

#[test]
fn spacing_stays_within_bounds_across_zoom_range() {
    let extent = 1024.0_f32;
    let target = 8.0_f32;
    let base = extent / target;
    let lower = base / MAX_ZOOM;
    let upper = base / MIN_ZOOM;

    let mut zoom = MIN_ZOOM;
    while zoom <= MAX_ZOOM {
        let spacing = grid_spacing(extent, target, zoom);
        assert!(
            spacing >= lower - 1e-3 && spacing <= upper + 1e-3,
            "spacing {spacing} out of [{lower}, {upper}] at zoom {zoom}"
        );
        zoom += 0.05;
    }
}

#[test]
fn spacing_clamps_out_of_range_zoom() {
    let extent = 800.0;
    let target = 11.0;
    assert_eq!(
        grid_spacing(extent, target, 0.0),
        grid_spacing(extent, target, MIN_ZOOM)
    );
    assert_eq!(
        grid_spacing(extent, target, 1e9),
        grid_spacing(extent, target, MAX_ZOOM)
    );
}

#[test]
fn spacing_changes_continuously() {
    // No visual popping: small zoom changes move spacing by a small amount.
    let extent = 640.0;
    let target = 11.0;
    let mut zoom = MIN_ZOOM;
    let mut prev = grid_spacing(extent, target, zoom);
    while zoom < MAX_ZOOM {
        zoom += 0.01;
        let next = grid_spacing(extent, target, zoom);
        assert!((next - prev).abs() < 5.0, "spacing jumped at zoom {zoom}");
        prev = next;
    }
}

#[test]
fn grid_lines_cover_extent() {
    let lines = grid_lines(100.0, 25.0);
    assert_eq!(lines, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    assert!(grid_lines(100.0, 0.0).is_empty());
    assert!(grid_lines(0.0, 10.0).is_empty());
}

#[test]
fn linspace_endpoints() {
    let steps = linspace(0.0, 10.0, 6);
    assert_eq!(steps.len(), 6);
    assert_eq!(steps[0], 0.0);
    assert_eq!(steps[5], 10.0);
}
