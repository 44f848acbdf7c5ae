// File: crates/linechart-core/tests/interaction.rs
// Purpose: Validate the pointer/touch/wheel state machine transitions.

use linechart_core::interaction::{wheel_gesture, InteractionState, TouchPoint};
use linechart_core::view::{Gesture, ZoomAxis, ZoomDirection};

#[test]
fn drag_accumulates_from_last_position() {
    let mut state = InteractionState::default();
    state.pointer_down(100.0, 100.0);

    let first = state.pointer_move(110.0, 95.0);
    assert_eq!(first, Some(Gesture::Pan { dx: 10.0, dy: -5.0 }));

    // Delta is relative to the previous move, not the original anchor.
    let second = state.pointer_move(112.0, 95.0);
    assert_eq!(second, Some(Gesture::Pan { dx: 2.0, dy: 0.0 }));

    state.pointer_up();
    assert_eq!(state, InteractionState::Idle);
    assert_eq!(state.pointer_move(200.0, 200.0), None);
}

#[test]
fn idle_move_emits_no_gesture() {
    let mut state = InteractionState::default();
    assert_eq!(state.pointer_move(5.0, 5.0), None);
    assert_eq!(state, InteractionState::Idle);
}

#[test]
fn pinch_spread_horizontal_zooms_in() {
    let mut state = InteractionState::default();
    let start = [TouchPoint::new(1, 100.0, 100.0), TouchPoint::new(2, 200.0, 100.0)];
    state.touch_start(&start);

    // Fingers spread apart horizontally.
    let moved = [TouchPoint::new(1, 80.0, 100.0), TouchPoint::new(2, 220.0, 100.0)];
    let gesture = state.touch_move(&moved);
    assert_eq!(
        gesture,
        Some(Gesture::ZoomStep { axis: ZoomAxis::Horizontal, direction: ZoomDirection::In })
    );
}

#[test]
fn pinch_contract_vertical_zooms_out() {
    let mut state = InteractionState::default();
    let start = [TouchPoint::new(1, 100.0, 50.0), TouchPoint::new(2, 100.0, 250.0)];
    state.touch_start(&start);

    let moved = [TouchPoint::new(1, 100.0, 90.0), TouchPoint::new(2, 100.0, 210.0)];
    let gesture = state.touch_move(&moved);
    assert_eq!(
        gesture,
        Some(Gesture::ZoomStep { axis: ZoomAxis::Vertical, direction: ZoomDirection::Out })
    );
}

#[test]
fn pinch_tracks_incremental_separation() {
    let mut state = InteractionState::default();
    state.touch_start(&[TouchPoint::new(1, 0.0, 0.0), TouchPoint::new(2, 100.0, 0.0)]);

    // First move widens the gap.
    let widened = [TouchPoint::new(1, 0.0, 0.0), TouchPoint::new(2, 120.0, 0.0)];
    assert_eq!(
        state.touch_move(&widened),
        Some(Gesture::ZoomStep { axis: ZoomAxis::Horizontal, direction: ZoomDirection::In })
    );

    // Second move narrows it relative to the PREVIOUS sample.
    let narrowed = [TouchPoint::new(1, 0.0, 0.0), TouchPoint::new(2, 110.0, 0.0)];
    assert_eq!(
        state.touch_move(&narrowed),
        Some(Gesture::ZoomStep { axis: ZoomAxis::Horizontal, direction: ZoomDirection::Out })
    );
}

#[test]
fn pinch_ends_when_one_touch_remains() {
    let mut state = InteractionState::default();
    state.touch_start(&[TouchPoint::new(1, 0.0, 0.0), TouchPoint::new(2, 100.0, 0.0)]);
    assert!(matches!(state, InteractionState::Pinching { .. }));

    state.touch_end(&[TouchPoint::new(1, 0.0, 0.0)]);
    assert_eq!(state, InteractionState::Idle);
}

#[test]
fn single_touch_does_not_start_pinch() {
    let mut state = InteractionState::default();
    state.touch_start(&[TouchPoint::new(1, 10.0, 10.0)]);
    assert_eq!(state, InteractionState::Idle);
    assert_eq!(state.touch_move(&[TouchPoint::new(1, 20.0, 20.0)]), None);
}

#[test]
fn wheel_axis_picked_by_larger_delta() {
    assert_eq!(
        wheel_gesture(-10.0, 2.0),
        Some(Gesture::ZoomStep { axis: ZoomAxis::Horizontal, direction: ZoomDirection::In })
    );
    assert_eq!(
        wheel_gesture(1.0, 30.0),
        Some(Gesture::ZoomStep { axis: ZoomAxis::Vertical, direction: ZoomDirection::Out })
    );
    assert_eq!(wheel_gesture(0.0, 0.0), None);
}
