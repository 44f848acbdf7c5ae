// File: crates/linechart-window-demo/src/main.rs
// Summary: Windowed interactive demo; forwards winit pointer/touch/wheel/resize
// events to the widget and blits frames via softbuffer.

use std::num::NonZeroU32;

use anyhow::{Context, Result};
use linechart_core::types::Sample;
use linechart_core::{Chart, TouchPoint, SCALE_RESOLUTION};
use linechart_render_skia::SkiaSurface;
use winit::event::{
    ElementState, Event, MouseButton, MouseScrollDelta, TouchPhase, VirtualKeyCode, WindowEvent,
};
use winit::event_loop::{ControlFlow, EventLoop};
use winit::window::WindowBuilder;

fn main() -> Result<()> {
    let samples = build_samples(240);

    let event_loop = EventLoop::new();
    let window = WindowBuilder::new()
        .with_title("linechart — window demo")
        .with_inner_size(winit::dpi::LogicalSize::new(1024.0, 640.0))
        .build(&event_loop)
        .context("build window")?;

    let context = unsafe { softbuffer::Context::new(&window) }
        .map_err(|e| anyhow::anyhow!("softbuffer context: {e:?}"))?;
    let mut frame_surface = unsafe { softbuffer::Surface::new(&context, &window) }
        .map_err(|e| anyhow::anyhow!("softbuffer surface: {e:?}"))?;

    // Parent layout size is the window size divided by the oversampling
    // factor, so backing pixels match window pixels one to one.
    let size = window.inner_size();
    let skia = SkiaSurface::new(size.width as i32, size.height as i32).context("skia surface")?;
    // Optional theme name argument, e.g. `light`.
    let theme = linechart_core::theme::find(&std::env::args().nth(1).unwrap_or_default());
    let mut chart = Chart::with_theme(
        skia,
        size.width as f32 / SCALE_RESOLUTION,
        size.height as f32 / SCALE_RESOLUTION,
        theme,
    );
    chart.render(&samples);

    let mut cursor = (0.0f32, 0.0f32);
    let mut touches: Vec<TouchPoint> = Vec::new();

    event_loop.run(move |event, _, cf| {
        *cf = ControlFlow::Wait;
        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => {
                    *cf = ControlFlow::Exit;
                }
                WindowEvent::Resized(new_size) => {
                    chart.resize(
                        new_size.width as f32 / SCALE_RESOLUTION,
                        new_size.height as f32 / SCALE_RESOLUTION,
                    );
                }
                WindowEvent::CursorMoved { position, .. } => {
                    cursor = (position.x as f32, position.y as f32);
                    chart.pointer_move(cursor.0, cursor.1);
                    window.request_redraw();
                }
                WindowEvent::MouseInput { state, button, .. } => {
                    if button == MouseButton::Left {
                        match state {
                            ElementState::Pressed => chart.pointer_down(cursor.0, cursor.1),
                            ElementState::Released => chart.pointer_up(),
                        }
                    }
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    // Wheel up / left zooms in (negative widget delta).
                    let (dx, dy) = match delta {
                        MouseScrollDelta::LineDelta(x, y) => (-x, -y),
                        MouseScrollDelta::PixelDelta(p) => {
                            (-(p.x as f32) / 40.0, -(p.y as f32) / 40.0)
                        }
                    };
                    chart.wheel(dx, dy);
                    window.request_redraw();
                }
                WindowEvent::Touch(touch) => {
                    let point = TouchPoint::new(
                        touch.id,
                        touch.location.x as f32,
                        touch.location.y as f32,
                    );
                    match touch.phase {
                        TouchPhase::Started => {
                            touches.retain(|t| t.id != point.id);
                            touches.push(point);
                            chart.touch_start(&touches);
                        }
                        TouchPhase::Moved => {
                            if let Some(t) = touches.iter_mut().find(|t| t.id == point.id) {
                                *t = point;
                            }
                            chart.touch_move(&touches);
                            window.request_redraw();
                        }
                        TouchPhase::Ended | TouchPhase::Cancelled => {
                            touches.retain(|t| t.id != point.id);
                            chart.touch_end(&touches);
                        }
                    }
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if input.state == ElementState::Pressed {
                        // Programmatic zoom setters, as a host UI would drive them.
                        match input.virtual_keycode {
                            Some(VirtualKeyCode::Up) => {
                                chart.set_zoom_y(chart.view().zoom_y + 0.25)
                            }
                            Some(VirtualKeyCode::Down) => {
                                chart.set_zoom_y(chart.view().zoom_y - 0.25)
                            }
                            Some(VirtualKeyCode::Right) => {
                                chart.set_zoom_x(chart.view().zoom_x + 0.25)
                            }
                            Some(VirtualKeyCode::Left) => {
                                chart.set_zoom_x(chart.view().zoom_x - 0.25)
                            }
                            Some(VirtualKeyCode::R) => {
                                chart.set_zoom_x(1.0);
                                chart.set_zoom_y(1.0);
                            }
                            _ => {}
                        }
                        window.request_redraw();
                    }
                }
                _ => {}
            },
            Event::MainEventsCleared => {
                window.request_redraw();
            }
            Event::RedrawRequested(_) => {
                if let Err(e) = blit(&mut chart, &mut frame_surface) {
                    eprintln!("blit error: {e}");
                }
            }
            _ => {}
        }
    });
}

fn blit(chart: &mut Chart<SkiaSurface>, frame_surface: &mut softbuffer::Surface) -> Result<()> {
    let (rgba, w, h) = chart.surface_mut().rgba8()?;
    let width = NonZeroU32::new(w.max(1) as u32).context("frame width")?;
    let height = NonZeroU32::new(h.max(1) as u32).context("frame height")?;
    frame_surface
        .resize(width, height)
        .map_err(|e| anyhow::anyhow!("resize frame: {e:?}"))?;
    let mut frame = frame_surface
        .buffer_mut()
        .map_err(|e| anyhow::anyhow!("frame: {e:?}"))?;
    let max_px = frame.len().min(rgba.len() / 4);
    for (i, px) in rgba.chunks_exact(4).take(max_px).enumerate() {
        let r = px[0] as u32;
        let g = px[1] as u32;
        let b = px[2] as u32;
        let a = px[3] as u32;
        frame[i] = (a << 24) | (r << 16) | (g << 8) | b;
    }
    frame
        .present()
        .map_err(|e| anyhow::anyhow!("present: {e:?}"))?;
    Ok(())
}

fn build_samples(n: usize) -> Vec<Sample> {
    (0..n)
        .map(|i| {
            let v = (i as f64 / 12.0).sin() * 30.0 + 60.0 + (i as f64 * 0.1);
            Sample::new(i as i64 * 1_000, v)
        })
        .collect()
}
