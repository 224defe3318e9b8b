//! Software fill of the blob into a tiny-skia pixmap, used for PNG export
//! where no browser canvas is available.

use base64::{Engine as _, engine::general_purpose};
use image::{DynamicImage, ImageOutputFormat, Rgba, RgbaImage};
use kurbo::Point;
use std::io::Cursor;
use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Transform};
use crate::color;
use crate::error::{BlobError, Result};
use crate::render::DrawSurface;

/// Largest surface we will allocate, in pixels (8192 x 8192).
pub const MAX_RASTER_PIXELS: u64 = 8192 * 8192;

pub struct PixelSurface {
    pixmap: Pixmap,
    builder: PathBuilder,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> Result<Self> {
        let pixels = width as u64 * height as u64;
        if pixels == 0 || pixels > MAX_RASTER_PIXELS {
            return Err(BlobError::Encode(format!(
                "{}x{} surface is outside the raster limit of {} pixels",
                width, height, MAX_RASTER_PIXELS
            )));
        }
        let pixmap = Pixmap::new(width, height)
            .ok_or_else(|| BlobError::Encode(format!("cannot allocate a {}x{} pixmap", width, height)))?;
        Ok(PixelSurface { pixmap, builder: PathBuilder::new() })
    }

    /// Canvas-sized surface; fractional sizes round up. Sizes that do not fit
    /// the raster limit fail before anything is allocated.
    pub fn for_canvas(width: f64, height: f64) -> Result<Self> {
        let (w, h) = (width.ceil(), height.ceil());
        if !(w >= 1.0 && h >= 1.0 && w * h <= MAX_RASTER_PIXELS as f64) {
            return Err(BlobError::Encode(format!(
                "{}x{} canvas is outside the raster limit of {} pixels",
                width, height, MAX_RASTER_PIXELS
            )));
        }
        Self::new(w as u32, h as u32)
    }

    pub fn width(&self) -> u32 { self.pixmap.width() }
    pub fn height(&self) -> u32 { self.pixmap.height() }

    /// Straight-alpha copy of the pixmap.
    pub fn to_image(&self) -> RgbaImage {
        let width = self.pixmap.width();
        let pixels = self.pixmap.pixels();
        RgbaImage::from_fn(width, self.pixmap.height(), |x, y| {
            let c = pixels[(y * width + x) as usize].demultiply();
            Rgba([c.red(), c.green(), c.blue(), c.alpha()])
        })
    }

    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let dyn_img = DynamicImage::ImageRgba8(self.to_image());
        let mut png_bytes: Vec<u8> = Vec::new();
        dyn_img
            .write_to(&mut Cursor::new(&mut png_bytes), ImageOutputFormat::Png)
            .map_err(|e| BlobError::Encode(e.to_string()))?;
        Ok(png_bytes)
    }

    pub fn png_data_url(&self) -> Result<String> {
        let b64 = general_purpose::STANDARD.encode(self.encode_png()?);
        Ok(format!("data:image/png;base64,{}", b64))
    }
}

impl DrawSurface for PixelSurface {
    fn clear(&mut self) {
        self.pixmap.fill(Color::TRANSPARENT);
        self.builder = PathBuilder::new();
    }
    fn begin_path(&mut self) { self.builder = PathBuilder::new(); }
    fn move_to(&mut self, p: Point) { self.builder.move_to(p.x as f32, p.y as f32); }
    fn curve_to(&mut self, cp1: Point, cp2: Point, to: Point) {
        self.builder.cubic_to(cp1.x as f32, cp1.y as f32, cp2.x as f32, cp2.y as f32, to.x as f32, to.y as f32);
    }
    fn close_path(&mut self) { self.builder.close(); }
    fn fill(&mut self, fill_color: &str) -> Result<()> {
        let [r, g, b, a] = color::parse_hex(fill_color)?;
        let builder = std::mem::replace(&mut self.builder, PathBuilder::new());
        // an empty or degenerate path has nothing to paint
        let Some(path) = builder.finish() else {
            log::debug!("skipping fill of an empty path");
            return Ok(());
        };
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = true;
        self.pixmap.fill_path(&path, &paint, FillRule::Winding, Transform::identity(), None);
        Ok(())
    }
}
