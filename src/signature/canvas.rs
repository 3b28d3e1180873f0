//! Backing raster for the signature surface.
//!
//! The surface is rendered at twice its logical (displayed) resolution so
//! strokes stay sharp on high-density displays. All drawing input arrives in
//! logical surface-local coordinates; this module applies the backing scale
//! to both the coordinates and the stroke width, so ink thickness is constant
//! in logical units no matter the backing resolution.

use anyhow::{Context, Result};
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

/// Backing-to-logical resolution ratio.
pub const BACKING_SCALE: u32 = 2;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);
const INK: Rgba<u8> = Rgba([17, 17, 17, 255]);

/// A white drawing surface with round-capped ink strokes.
///
/// # Fields
/// * `image` - RGBA backing buffer at `BACKING_SCALE` times the logical size
/// * `stroke_width` - Ink thickness in logical units
pub struct Canvas {
    image: RgbaImage,
    stroke_width: f32,
}

impl Canvas {
    /// Creates a blank canvas for a surface of `width` x `height` logical
    /// pixels with the given stroke width (logical units).
    pub fn new(width: u32, height: u32, stroke_width: f32) -> Self {
        let image = RgbaImage::from_pixel(
            width.max(1) * BACKING_SCALE,
            height.max(1) * BACKING_SCALE,
            BACKGROUND,
        );
        Canvas {
            image,
            stroke_width,
        }
    }

    /// Backing buffer width in device pixels.
    pub fn backing_width(&self) -> u32 {
        self.image.width()
    }

    /// Backing buffer height in device pixels.
    pub fn backing_height(&self) -> u32 {
        self.image.height()
    }

    /// Repaints the whole surface with the background color.
    pub fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            *pixel = BACKGROUND;
        }
    }

    /// Draws a round-capped line segment between two points given in logical
    /// surface-local coordinates. A zero-length segment leaves a dot.
    pub fn draw_segment(&mut self, from: (f32, f32), to: (f32, f32)) {
        let scale = BACKING_SCALE as f32;
        let (x0, y0) = (from.0 * scale, from.1 * scale);
        let (x1, y1) = (to.0 * scale, to.1 * scale);
        let radius = (self.stroke_width * scale / 2.0).max(1.0);

        let (dx, dy) = (x1 - x0, y1 - y0);
        let length = (dx * dx + dy * dy).sqrt();

        // Stamp overlapping discs along the segment; half-radius spacing
        // keeps the edge smooth without revisiting many pixels
        let steps = ((length / (radius / 2.0)).ceil() as u32).max(1);
        for step in 0..=steps {
            let t = step as f32 / steps as f32;
            self.stamp_disc(x0 + dx * t, y0 + dy * t, radius);
        }
    }

    /// Fills a disc of `radius` device pixels centered at (`cx`, `cy`),
    /// clipped to the backing buffer.
    fn stamp_disc(&mut self, cx: f32, cy: f32, radius: f32) {
        let min_x = (cx - radius).floor().max(0.0) as u32;
        let min_y = (cy - radius).floor().max(0.0) as u32;
        let max_x = ((cx + radius).ceil() as i64).min(self.image.width() as i64 - 1);
        let max_y = ((cy + radius).ceil() as i64).min(self.image.height() as i64 - 1);
        if max_x < min_x as i64 || max_y < min_y as i64 {
            return;
        }

        let r2 = radius * radius;
        for y in min_y..=max_y as u32 {
            for x in min_x..=max_x as u32 {
                let (px, py) = (x as f32 + 0.5 - cx, y as f32 + 0.5 - cy);
                if px * px + py * py <= r2 {
                    self.image.put_pixel(x, y, INK);
                }
            }
        }
    }

    /// Returns true if any ink pixel differs from the background. Used by
    /// tests to check that drawn segments actually landed on the raster.
    pub fn has_visible_ink(&self) -> bool {
        self.image.pixels().any(|p| *p != BACKGROUND)
    }

    /// Encodes the current surface content as a lossless PNG.
    ///
    /// # Returns
    /// * `Result<Vec<u8>>` - The encoded image bytes
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut bytes = Vec::new();
        self.image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .context("Failed to encode signature snapshot as PNG")?;
        Ok(bytes)
    }
}
