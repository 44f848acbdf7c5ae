// File: crates/linechart-core/tests/view.rs
// Purpose: Validate gesture reducers (clamping, pan additivity) and the
// canonical projection against the known six-sample fixture.

use linechart_core::types::{BASELINE, STEP, ZOOM_STEP};
use linechart_core::view::{Gesture, ViewTransform, ZoomAxis, ZoomDirection};
use linechart_core::{MAX_ZOOM, MIN_ZOOM, SCALE_RESOLUTION};

#[test]
fn set_zoom_clamps_to_bounds() {
    let view = ViewTransform::default();

    let low = view.apply(Gesture::SetZoom { axis: ZoomAxis::Horizontal, level: 0.0 });
    assert_eq!(low.zoom_x, MIN_ZOOM);

    let high = view.apply(Gesture::SetZoom { axis: ZoomAxis::Vertical, level: 999.0 });
    assert_eq!(high.zoom_y, MAX_ZOOM);

    let mid = view.apply(Gesture::SetZoom { axis: ZoomAxis::Horizontal, level: 2.5 });
    assert_eq!(mid.zoom_x, 2.5);
}

#[test]
fn zoom_steps_stay_in_bounds() {
    let mut view = ViewTransform::default();
    for _ in 0..1_000 {
        view = view.apply(Gesture::ZoomStep {
            axis: ZoomAxis::Horizontal,
            direction: ZoomDirection::In,
        });
        assert!(view.zoom_x <= MAX_ZOOM);
    }
    assert_eq!(view.zoom_x, MAX_ZOOM);

    for _ in 0..1_000 {
        view = view.apply(Gesture::ZoomStep {
            axis: ZoomAxis::Horizontal,
            direction: ZoomDirection::Out,
        });
        assert!(view.zoom_x >= MIN_ZOOM);
    }
    assert_eq!(view.zoom_x, MIN_ZOOM);
}

#[test]
fn zoom_step_is_multiplicative() {
    let view = ViewTransform::default().apply(Gesture::ZoomStep {
        axis: ZoomAxis::Vertical,
        direction: ZoomDirection::In,
    });
    assert!((view.zoom_y - (1.0 + ZOOM_STEP)).abs() < 1e-6);
    // Other axis untouched.
    assert_eq!(view.zoom_x, 1.0);
}

#[test]
fn pan_is_additive() {
    let view = ViewTransform::default();
    let two_steps = view
        .apply(Gesture::Pan { dx: 12.5, dy: -3.0 })
        .apply(Gesture::Pan { dx: -2.5, dy: 8.0 });
    let one_step = view.apply(Gesture::Pan { dx: 10.0, dy: 5.0 });
    assert_eq!(two_steps.offset_x, one_step.offset_x);
    assert_eq!(two_steps.offset_y, one_step.offset_y);
}

#[test]
fn pan_does_not_touch_zoom() {
    let view = ViewTransform { zoom_x: 2.0, zoom_y: 3.0, offset_x: 0.0, offset_y: 0.0 };
    let panned = view.apply(Gesture::Pan { dx: 5.0, dy: 5.0 });
    assert_eq!(panned.zoom_x, 2.0);
    assert_eq!(panned.zoom_y, 3.0);
}

#[test]
fn resize_resets_zoom_to_baseline_and_keeps_offsets() {
    let view = ViewTransform { zoom_x: 7.0, zoom_y: 0.6, offset_x: 40.0, offset_y: -12.0 };
    let resized = view.apply(Gesture::Resize { baseline: SCALE_RESOLUTION });
    assert_eq!(resized.zoom_x, SCALE_RESOLUTION);
    assert_eq!(resized.zoom_y, SCALE_RESOLUTION);
    assert_eq!(resized.offset_x, 40.0);
    assert_eq!(resized.offset_y, -12.0);
}

#[test]
fn projection_fixture_six_samples() {
    // Values 26,30,35,40,50,88 at default view project to X = i*50 + 50.
    let view = ViewTransform::default();
    let expected = [50.0_f32, 100.0, 150.0, 200.0, 250.0, 300.0];
    for (i, want) in expected.iter().enumerate() {
        assert_eq!(view.sample_x(i), *want);
    }
}

#[test]
fn projection_respects_offset_and_zoom() {
    let view = ViewTransform { zoom_x: 2.0, zoom_y: 2.0, offset_x: 10.0, offset_y: -5.0 };
    // x = (0*STEP + STEP + 10) * 2
    assert_eq!(view.sample_x(0), (STEP + 10.0) * 2.0);
    // y = (BASELINE - 30 - 5) * 2
    assert_eq!(view.value_y(30.0), (BASELINE - 30.0 - 5.0) * 2.0);
}
