// File: crates/linechart-render-skia/src/lib.rs
// Summary: Skia-backed DrawSurface over a CPU raster surface, with PNG export
// and RGBA8 readback for window blitting.

use linechart_core::surface::{DrawSurface, StrokeStyle, SurfaceError};
use linechart_core::types::Color;
use skia_safe as skia;

fn to_skia(color: Color) -> skia::Color {
    skia::Color::from_argb(color.a, color.r, color.g, color.b)
}

/// CPU raster drawing surface. The widget drives it through `DrawSurface`;
/// hosts read frames back via `png_bytes`/`write_png`/`rgba8`.
pub struct SkiaSurface {
    surface: skia::Surface,
    path: skia::Path,
}

impl SkiaSurface {
    pub fn new(width: i32, height: i32) -> Result<Self, SurfaceError> {
        let surface = skia::surfaces::raster_n32_premul((width.max(1), height.max(1)))
            .ok_or(SurfaceError::Create { width, height })?;
        Ok(Self { surface, path: skia::Path::new() })
    }

    /// Encode the current frame as PNG.
    pub fn png_bytes(&mut self) -> Result<Vec<u8>, SurfaceError> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(SurfaceError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }

    /// Encode the current frame as PNG and write it to `path`, creating
    /// parent directories as needed.
    pub fn write_png(&mut self, path: impl AsRef<std::path::Path>) -> Result<(), SurfaceError> {
        let bytes = self.png_bytes()?;
        if let Some(parent) = path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, bytes)?;
        Ok(())
    }

    /// Read the current frame back as tightly packed RGBA8 rows.
    /// Returns `(pixels, width, height)`.
    pub fn rgba8(&mut self) -> Result<(Vec<u8>, i32, i32), SurfaceError> {
        let width = self.surface.width();
        let height = self.surface.height();
        let info = skia::ImageInfo::new(
            (width, height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Premul,
            None,
        );
        let row_bytes = width as usize * 4;
        let mut pixels = vec![0u8; row_bytes * height as usize];
        let ok = self
            .surface
            .read_pixels(&info, &mut pixels, row_bytes, (0, 0));
        if !ok {
            return Err(SurfaceError::ReadPixels);
        }
        Ok((pixels, width, height))
    }
}

impl DrawSurface for SkiaSurface {
    fn pixel_size(&self) -> (f32, f32) {
        (self.surface.width() as f32, self.surface.height() as f32)
    }

    fn set_pixel_size(&mut self, width: f32, height: f32) {
        let w = (width.round() as i32).max(1);
        let h = (height.round() as i32).max(1);
        if let Some(surface) = skia::surfaces::raster_n32_premul((w, h)) {
            self.surface = surface;
            self.path = skia::Path::new();
        }
    }

    fn clear(&mut self, color: Color) {
        self.surface.canvas().clear(to_skia(color));
    }

    fn fill_rect(&mut self, x: f32, y: f32, width: f32, height: f32, color: Color) {
        let mut paint = skia::Paint::default();
        paint.set_color(to_skia(color));
        paint.set_anti_alias(true);
        let rect = skia::Rect::from_xywh(x, y, width, height);
        self.surface.canvas().draw_rect(rect, &paint);
    }

    fn begin_path(&mut self) {
        self.path = skia::Path::new();
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.path.move_to((x, y));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.path.line_to((x, y));
    }

    fn stroke(&mut self, style: &StrokeStyle) {
        let mut paint = skia::Paint::default();
        paint.set_anti_alias(true);
        paint.set_style(skia::paint::Style::Stroke);
        paint.set_stroke_width(style.width);
        paint.set_color(to_skia(style.color));
        if let Some([on, off]) = style.dash {
            paint.set_path_effect(skia::PathEffect::dash(&[on, off], 0.0));
        }
        self.surface.canvas().draw_path(&self.path, &paint);
    }

    fn fill_text(&mut self, text: &str, x: f32, y: f32, size: f32, color: Color) {
        let mut paint = skia::Paint::default();
        paint.set_color(to_skia(color));
        paint.set_anti_alias(true);
        let mut font = skia::Font::default();
        font.set_size(size);
        self.surface.canvas().draw_str(text, (x, y), &font, &paint);
    }
}
