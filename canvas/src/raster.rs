//! Software RGBA raster.
//!
//! Backs [`crate::surface::MemorySurface`], the headless surface used for tests
//! and off-screen work. Rasterization is deliberately simple: a pixel is covered
//! when its center lies inside the stroked shape, with no anti-aliasing, so
//! results are exact and easy to assert on.

#[cfg(test)]
#[path = "raster_test.rs"]
mod raster_test;

use crate::color::Rgb;
use crate::coords::{Point, Size};

/// One RGBA pixel, non-premultiplied.
pub type Rgba = [u8; 4];

/// A fully transparent pixel; the content of a freshly cleared buffer.
pub const TRANSPARENT: Rgba = [0, 0, 0, 0];

/// A row-major RGBA pixel buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Rgba>,
}

impl Raster {
    /// A transparent raster of the given size.
    #[must_use]
    pub fn new(size: Size) -> Self {
        Self {
            width: size.width,
            height: size.height,
            pixels: vec![TRANSPARENT; pixel_count(size)],
        }
    }

    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The pixel at `(x, y)`, or `None` outside the buffer.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba> {
        self.index(x, y).and_then(|i| self.pixels.get(i).copied())
    }

    /// Overwrite one pixel. Out-of-range coordinates are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, rgba: Rgba) {
        if let Some(slot) = self.index(x, y).and_then(|i| self.pixels.get_mut(i)) {
            *slot = rgba;
        }
    }

    /// Reset every pixel to transparent.
    pub fn clear(&mut self) {
        self.pixels.fill(TRANSPARENT);
    }

    /// Paint every pixel with an opaque color.
    pub fn fill(&mut self, color: Rgb) {
        self.pixels.fill(color.to_rgba());
    }

    /// Number of pixels equal to `rgba`.
    #[must_use]
    pub fn count(&self, rgba: Rgba) -> usize {
        self.pixels.iter().filter(|p| **p == rgba).count()
    }

    /// Copy `src` 1:1 with its top-left corner at `(dx, dy)`, clipping to this raster.
    pub fn blit(&mut self, src: &Raster, dx: i64, dy: i64) {
        for sy in 0..src.height {
            let ty = i64::from(sy) + dy;
            for sx in 0..src.width {
                let tx = i64::from(sx) + dx;
                let (Ok(tx), Ok(ty)) = (u32::try_from(tx), u32::try_from(ty)) else {
                    continue;
                };
                if let Some(rgba) = src.pixel(sx, sy) {
                    self.set_pixel(tx, ty, rgba);
                }
            }
        }
    }

    /// Stroke a straight segment with round caps.
    ///
    /// Covers every pixel whose center lies within `width / 2` of the segment.
    /// A zero-length segment paints a dot.
    pub fn stroke_segment(&mut self, from: Point, to: Point, width: f64, color: Rgb) {
        if self.pixels.is_empty() || width.is_nan() || width <= 0.0 {
            return;
        }
        let radius = width / 2.0;
        let Some((x0, x1)) = pixel_span(from.x.min(to.x) - radius, from.x.max(to.x) + radius, self.width) else {
            return;
        };
        let Some((y0, y1)) = pixel_span(from.y.min(to.y) - radius, from.y.max(to.y) + radius, self.height) else {
            return;
        };
        let rgba = color.to_rgba();
        let radius_sq = radius * radius;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let center = Point::new(f64::from(x) + 0.5, f64::from(y) + 0.5);
                if distance_sq_to_segment(center, from, to) <= radius_sq {
                    self.set_pixel(x, y, rgba);
                }
            }
        }
    }

    /// Fill an axis-aligned rectangle, clipped to the raster.
    pub fn fill_rect(&mut self, left: f64, top: f64, width: f64, height: f64, color: Rgb) {
        if width.is_nan() || height.is_nan() || width <= 0.0 || height <= 0.0 {
            return;
        }
        let Some((x0, x1)) = pixel_span(left, left + width - 1.0, self.width) else {
            return;
        };
        let Some((y0, y1)) = pixel_span(top, top + height - 1.0, self.height) else {
            return;
        };
        let rgba = color.to_rgba();
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.set_pixel(x, y, rgba);
            }
        }
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(y as usize * self.width as usize + x as usize)
    }
}

fn pixel_count(size: Size) -> usize {
    usize::try_from(u64::from(size.width) * u64::from(size.height)).unwrap_or(0)
}

/// Inclusive range of pixel indices covering `[lo, hi]`, clipped to `0..limit`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn pixel_span(lo: f64, hi: f64, limit: u32) -> Option<(u32, u32)> {
    if limit == 0 || !lo.is_finite() || !hi.is_finite() {
        return None;
    }
    let max = f64::from(limit - 1);
    let lo = lo.floor().max(0.0);
    let hi = hi.ceil().min(max);
    if lo > hi {
        return None;
    }
    Some((lo as u32, hi as u32))
}

fn distance_sq_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let (abx, aby) = (b.x - a.x, b.y - a.y);
    let len_sq = abx * abx + aby * aby;
    let t = if len_sq > 0.0 {
        (((p.x - a.x) * abx + (p.y - a.y) * aby) / len_sq).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let (dx, dy) = (p.x - (a.x + t * abx), p.y - (a.y + t * aby));
    dx * dx + dy * dy
}
