// File: crates/linechart-core/src/interaction.rs
// Summary: Pointer/touch/wheel state machine folding raw host events into gestures.

use crate::view::{Gesture, ZoomAxis, ZoomDirection};

/// One active touch point in surface pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchPoint {
    pub id: u64,
    pub x: f32,
    pub y: f32,
}

impl TouchPoint {
    pub const fn new(id: u64, x: f32, y: f32) -> Self {
        Self { id, x, y }
    }
}

/// Transient interaction state. Cursor position is tracked separately by
/// the widget so the crosshair updates regardless of the active gesture.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum InteractionState {
    #[default]
    Idle,
    /// Dragging anchored to the last observed pointer position; pan deltas
    /// accumulate move-by-move, not from the original anchor.
    Dragging { last_x: f32, last_y: f32 },
    /// Two tracked touch points for pinch zoom.
    Pinching { first: TouchPoint, second: TouchPoint },
}

impl InteractionState {
    pub fn pointer_down(&mut self, x: f32, y: f32) {
        *self = InteractionState::Dragging { last_x: x, last_y: y };
    }

    /// Returns a pan gesture while dragging; `None` while idle (the widget
    /// still repaints for the crosshair).
    pub fn pointer_move(&mut self, x: f32, y: f32) -> Option<Gesture> {
        match *self {
            InteractionState::Dragging { last_x, last_y } => {
                let gesture = Gesture::Pan { dx: x - last_x, dy: y - last_y };
                *self = InteractionState::Dragging { last_x: x, last_y: y };
                Some(gesture)
            }
            _ => None,
        }
    }

    pub fn pointer_up(&mut self) {
        *self = InteractionState::Idle;
    }

    pub fn touch_start(&mut self, touches: &[TouchPoint]) {
        if touches.len() >= 2 {
            *self = InteractionState::Pinching { first: touches[0], second: touches[1] };
        }
    }

    /// Compare the change in inter-point horizontal vs vertical separation
    /// since the previous sample; the larger change picks the zoom axis,
    /// its sign the direction.
    pub fn touch_move(&mut self, touches: &[TouchPoint]) -> Option<Gesture> {
        let InteractionState::Pinching { first, second } = *self else {
            // A second finger may land after the move stream started.
            self.touch_start(touches);
            return None;
        };
        if touches.len() < 2 {
            *self = InteractionState::Idle;
            return None;
        }

        let cur_first = find_touch(touches, first.id).unwrap_or(touches[0]);
        let cur_second = find_touch(touches, second.id).unwrap_or(touches[1]);

        let prev_dx = (first.x - second.x).abs();
        let prev_dy = (first.y - second.y).abs();
        let cur_dx = (cur_first.x - cur_second.x).abs();
        let cur_dy = (cur_first.y - cur_second.y).abs();
        let delta_x = cur_dx - prev_dx;
        let delta_y = cur_dy - prev_dy;

        *self = InteractionState::Pinching { first: cur_first, second: cur_second };

        let (axis, delta) = if delta_x.abs() >= delta_y.abs() {
            (ZoomAxis::Horizontal, delta_x)
        } else {
            (ZoomAxis::Vertical, delta_y)
        };
        if delta == 0.0 {
            return None;
        }
        let direction = if delta > 0.0 { ZoomDirection::In } else { ZoomDirection::Out };
        Some(Gesture::ZoomStep { axis, direction })
    }

    /// Pinch ends as soon as fewer than two touch points remain.
    pub fn touch_end(&mut self, touches: &[TouchPoint]) {
        if touches.len() < 2 {
            *self = InteractionState::Idle;
        } else {
            *self = InteractionState::Pinching { first: touches[0], second: touches[1] };
        }
    }
}

fn find_touch(touches: &[TouchPoint], id: u64) -> Option<TouchPoint> {
    touches.iter().copied().find(|t| t.id == id)
}

/// Map wheel deltas to a zoom gesture. The axis with the larger absolute
/// delta wins; negative delta (wheel up / left) zooms in.
pub fn wheel_gesture(dx: f32, dy: f32) -> Option<Gesture> {
    if dx == 0.0 && dy == 0.0 {
        return None;
    }
    let (axis, delta) = if dx.abs() > dy.abs() {
        (ZoomAxis::Horizontal, dx)
    } else {
        (ZoomAxis::Vertical, dy)
    };
    let direction = if delta < 0.0 { ZoomDirection::In } else { ZoomDirection::Out };
    Some(Gesture::ZoomStep { axis, direction })
}
