// Author: Dustin Pilgrim
// License: MIT

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use boxdraw_core::{Canvas, RectF};

/// Largest surface `PixelCanvas::new` will allocate (256 MiB of ARGB).
pub const MAX_PIXELS: usize = 64 * 1024 * 1024;

/// ARGB (0xAARRGGBB) software surface.
#[derive(Debug, Clone)]
pub struct PixelCanvas {
    width: i32,
    height: i32,
    pixels: Vec<u32>,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Result<Self, String> {
        let w = i32::try_from(width).map_err(|_| format!("width {width} too large"))?;
        let h = i32::try_from(height).map_err(|_| format!("height {height} too large"))?;
        if w == 0 || h == 0 {
            return Err(format!("surface must be non-empty, got {width}x{height}"));
        }

        let count = (width as usize)
            .checked_mul(height as usize)
            .filter(|&n| n <= MAX_PIXELS)
            .ok_or_else(|| {
                format!("surface {width}x{height} exceeds {MAX_PIXELS} pixels")
            })?;

        Ok(Self {
            width: w,
            height: h,
            pixels: vec![0; count],
        })
    }

    pub fn width(&self) -> u32 {
        self.width as u32
    }

    pub fn height(&self) -> u32 {
        self.height as u32
    }

    #[cfg(test)]
    pub fn pixel(&self, x: u32, y: u32) -> Option<u32> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        self.pixels.get(y as usize * self.width as usize + x as usize).copied()
    }

    pub fn to_rgba_image(&self) -> RgbaImage {
        ImageBuffer::from_fn(self.width(), self.height(), |x, y| {
            let argb = self.pixels[y as usize * self.width as usize + x as usize];
            Rgba([
                ((argb >> 16) & 0xFF) as u8,
                ((argb >> 8) & 0xFF) as u8,
                (argb & 0xFF) as u8,
                ((argb >> 24) & 0xFF) as u8,
            ])
        })
    }

    pub fn save_png(&self, path: &Path) -> Result<(), String> {
        self.to_rgba_image()
            .save(path)
            .map_err(|e| format!("save {}: {e}", path.display()))
    }

    fn blend_span(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, argb: u32) {
        let x0 = x0.max(0);
        let y0 = y0.max(0);
        let x1 = x1.min(self.width);
        let y1 = y1.min(self.height);
        if x1 <= x0 || y1 <= y0 {
            return;
        }

        let alpha = ((argb >> 24) & 0xFF) as u8;
        let bw = self.width as usize;

        for yy in y0..y1 {
            let row = yy as usize * bw;
            let start = row + x0 as usize;
            let end = row + x1 as usize;
            for px in &mut self.pixels[start..end] {
                blend_over(px, argb, alpha);
            }
        }
    }
}

impl Canvas for PixelCanvas {
    /// Replaces every pixel, alpha included.
    fn draw_paint(&mut self, argb: u32) {
        self.pixels.fill(argb);
    }

    /// Edges are rounded to whole pixels; right/bottom are exclusive.
    fn draw_rect(&mut self, rect: RectF, argb: u32) {
        self.blend_span(
            rect.left.round() as i32,
            rect.top.round() as i32,
            rect.right.round() as i32,
            rect.bottom.round() as i32,
            argb,
        );
    }
}

/// Source-over blend of `src` (ARGB, alpha `src_a`) onto `dst`.
fn blend_over(dst: &mut u32, src: u32, src_a: u8) {
    if src_a == 0 {
        return;
    }
    if src_a == 255 {
        *dst = src;
        return;
    }

    let da = (*dst >> 24) & 0xFF;
    let dr = (*dst >> 16) & 0xFF;
    let dg = (*dst >> 8) & 0xFF;
    let db = *dst & 0xFF;

    let sa = src_a as u32;
    let sr = (src >> 16) & 0xFF;
    let sg = (src >> 8) & 0xFF;
    let sb = src & 0xFF;

    let inv = 255 - sa;

    let oa = (sa + (da * inv + 127) / 255).min(255);
    let or = (sr * sa + dr * inv + 127) / 255;
    let og = (sg * sa + dg * inv + 127) / 255;
    let ob = (sb * sa + db * inv + 127) / 255;

    *dst = (oa << 24) | (or << 16) | (og << 8) | ob;
}
