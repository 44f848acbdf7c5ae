// File: crates/linechart-core/src/chart.rs
// Summary: The Chart widget: owns surface, dataset, view transform and interaction
// state; repaints layer by layer on every mutation.

use crate::axis::{self, X_LABEL_OFFSET, Y_LABEL_OFFSET};
use crate::grid::{grid_lines, grid_spacing};
use crate::interaction::{wheel_gesture, InteractionState, TouchPoint};
use crate::surface::{DrawSurface, StrokeStyle};
use crate::theme::Theme;
use crate::types::{Sample, H_GRID_LINES, SCALE_RESOLUTION, V_GRID_LINES};
use crate::view::{Gesture, ViewTransform, ZoomAxis};

const AXIS_STROKE_WIDTH: f32 = 1.5;
const GRID_STROKE_WIDTH: f32 = 1.0;
const LINE_STROKE_WIDTH: f32 = 2.0;
const CROSSHAIR_DASH: f32 = 4.0;
const LABEL_FONT_SIZE: f32 = 14.0;
const READOUT_FONT_SIZE: f32 = 12.0;
const READOUT_OFFSET: f32 = 8.0;

/// Interactive single-series line chart over a host-provided drawing surface.
///
/// Event delivery is host-driven: the host forwards pointer/touch/wheel/
/// resize events to the methods below, each of which folds the event into
/// the view transform and synchronously repaints the full surface. Dropping
/// the widget (or calling `into_surface`) releases the surface; there are no
/// hidden listener registrations to tear down.
pub struct Chart<S: DrawSurface> {
    surface: S,
    samples: Vec<Sample>,
    view: ViewTransform,
    interaction: InteractionState,
    cursor: Option<(f32, f32)>,
    theme: Theme,
}

impl<S: DrawSurface> Chart<S> {
    /// Bind to a surface and size it to the parent container's layout size
    /// times the oversampling factor. Paints the background immediately.
    pub fn new(surface: S, parent_width: f32, parent_height: f32) -> Self {
        Self::with_theme(surface, parent_width, parent_height, Theme::dark())
    }

    pub fn with_theme(mut surface: S, parent_width: f32, parent_height: f32, theme: Theme) -> Self {
        let (width, height) = (
            parent_width * SCALE_RESOLUTION,
            parent_height * SCALE_RESOLUTION,
        );
        surface.set_pixel_size(width, height);
        surface.fill_rect(0.0, 0.0, width, height, theme.background);
        Self {
            surface,
            samples: Vec::new(),
            view: ViewTransform::default(),
            interaction: InteractionState::Idle,
            cursor: None,
            theme,
        }
    }

    /// Replace the dataset wholesale and repaint. The view transform is
    /// intentionally NOT reset, so zoom/pan survive data refreshes.
    pub fn render(&mut self, samples: &[Sample]) {
        self.samples = samples.to_vec();
        self.repaint();
    }

    pub fn view(&self) -> ViewTransform {
        self.view
    }

    pub fn interaction(&self) -> InteractionState {
        self.interaction
    }

    pub fn cursor(&self) -> Option<(f32, f32)> {
        self.cursor
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Explicit teardown: hand the surface back to the host.
    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Programmatic horizontal zoom (clamped), e.g. from host UI controls.
    pub fn set_zoom_x(&mut self, level: f32) {
        self.apply(Gesture::SetZoom { axis: ZoomAxis::Horizontal, level });
    }

    /// Programmatic vertical zoom (clamped).
    pub fn set_zoom_y(&mut self, level: f32) {
        self.apply(Gesture::SetZoom { axis: ZoomAxis::Vertical, level });
    }

    pub fn pointer_down(&mut self, x: f32, y: f32) {
        self.interaction.pointer_down(x, y);
    }

    /// Every pointer move repaints: while dragging it also pans, while idle
    /// it still refreshes the crosshair.
    pub fn pointer_move(&mut self, x: f32, y: f32) {
        self.cursor = Some((x, y));
        if let Some(gesture) = self.interaction.pointer_move(x, y) {
            self.view = self.view.apply(gesture);
        }
        self.repaint();
    }

    pub fn pointer_up(&mut self) {
        self.interaction.pointer_up();
    }

    pub fn touch_start(&mut self, touches: &[TouchPoint]) {
        self.interaction.touch_start(touches);
    }

    pub fn touch_move(&mut self, touches: &[TouchPoint]) {
        if let Some(gesture) = self.interaction.touch_move(touches) {
            self.apply(gesture);
        }
    }

    pub fn touch_end(&mut self, touches: &[TouchPoint]) {
        self.interaction.touch_end(touches);
    }

    /// Wheel zoom; the host suppresses default scrolling before forwarding.
    pub fn wheel(&mut self, dx: f32, dy: f32) {
        if let Some(gesture) = wheel_gesture(dx, dy) {
            self.apply(gesture);
        }
    }

    /// Re-derive surface pixel size from the parent container and reset both
    /// zooms to the oversampling baseline. Accumulated zoom does not survive
    /// a resize; pan offsets do.
    pub fn resize(&mut self, parent_width: f32, parent_height: f32) {
        if parent_width <= 0.0 || parent_height <= 0.0 {
            return;
        }
        self.surface
            .set_pixel_size(parent_width * SCALE_RESOLUTION, parent_height * SCALE_RESOLUTION);
        self.apply(Gesture::Resize { baseline: SCALE_RESOLUTION });
    }

    fn apply(&mut self, gesture: Gesture) {
        self.view = self.view.apply(gesture);
        self.repaint();
    }

    /// Full synchronous repaint in fixed layer order:
    /// background, axes, grid, crosshair, polyline, labels.
    fn repaint(&mut self) {
        self.surface.clear(self.theme.background);

        // No dataset yet: background plus crosshair only.
        let Some((min_value, max_value)) = axis::value_range(&self.samples) else {
            self.draw_crosshair();
            return;
        };

        self.draw_axes(min_value);
        self.draw_grid();
        self.draw_crosshair();
        self.draw_polyline();
        self.draw_labels(min_value, max_value);
    }

    fn draw_axes(&mut self, min_value: f64) {
        let (width, height) = self.surface.pixel_size();
        let origin = axis::axis_origin(&self.view, min_value);
        self.surface.begin_path();
        self.surface.move_to(origin.x, 0.0);
        self.surface.line_to(origin.x, height);
        self.surface.move_to(0.0, origin.y);
        self.surface.line_to(width, origin.y);
        self.surface
            .stroke(&StrokeStyle::solid(self.theme.axis_line, AXIS_STROKE_WIDTH));
    }

    fn draw_grid(&mut self) {
        let (width, height) = self.surface.pixel_size();
        let spacing_x = grid_spacing(width, V_GRID_LINES, self.view.zoom_x);
        let spacing_y = grid_spacing(height, H_GRID_LINES, self.view.zoom_y);

        self.surface.begin_path();
        for x in grid_lines(width, spacing_x) {
            self.surface.move_to(x, 0.0);
            self.surface.line_to(x, height);
        }
        for y in grid_lines(height, spacing_y) {
            self.surface.move_to(0.0, y);
            self.surface.line_to(width, y);
        }
        self.surface
            .stroke(&StrokeStyle::solid(self.theme.grid, GRID_STROKE_WIDTH));
    }

    fn draw_crosshair(&mut self) {
        let Some((cx, cy)) = self.cursor else { return };
        let (width, height) = self.surface.pixel_size();

        self.surface.begin_path();
        self.surface.move_to(0.0, cy);
        self.surface.line_to(width, cy);
        self.surface.move_to(cx, 0.0);
        self.surface.line_to(cx, height);
        self.surface.stroke(&StrokeStyle::dashed(
            self.theme.crosshair,
            GRID_STROKE_WIDTH,
            CROSSHAIR_DASH,
            CROSSHAIR_DASH,
        ));

        // Pixel-space readout next to the intersection.
        let readout = format!("({cx:.0}, {cy:.0})");
        self.surface.fill_text(
            &readout,
            cx + READOUT_OFFSET,
            cy - READOUT_OFFSET,
            READOUT_FONT_SIZE,
            self.theme.axis_label,
        );
    }

    fn draw_polyline(&mut self) {
        let Some(first) = self.samples.first() else { return };

        self.surface.begin_path();
        let x0 = self.view.sample_x(0);
        let y0 = self.view.value_y(first.value);
        self.surface.move_to(x0, y0);
        if self.samples.len() == 1 {
            // Sole sample doubles as anchor and position.
            self.surface.line_to(x0, y0);
        } else {
            for (i, sample) in self.samples.iter().enumerate().skip(1) {
                self.surface
                    .line_to(self.view.sample_x(i), self.view.value_y(sample.value));
            }
        }
        self.surface
            .stroke(&StrokeStyle::solid(self.theme.line_stroke, LINE_STROKE_WIDTH));
    }

    fn draw_labels(&mut self, min_value: f64, max_value: f64) {
        let origin = axis::axis_origin(&self.view, min_value);
        for (x, text) in axis::x_labels(&self.samples, &self.view) {
            self.surface.fill_text(
                &text,
                x,
                origin.y + X_LABEL_OFFSET,
                LABEL_FONT_SIZE,
                self.theme.axis_label,
            );
        }
        for (y, text) in axis::y_labels(min_value, max_value, &self.view) {
            self.surface.fill_text(
                &text,
                origin.x - Y_LABEL_OFFSET,
                y,
                LABEL_FONT_SIZE,
                self.theme.axis_label,
            );
        }
    }
}
