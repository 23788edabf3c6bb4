//! Owned RGBA pixel surface.

use palette::Srgba;
use std::io::{self, Write};

use super::raster::{fill_spans, thick_line};
use super::{Paint, Painter};
use crate::color::{blend_over, Color};
use crate::geometry::{Point, Polygon};

/// Owned RGBA pixel buffer.
///
/// Internal format is 4 bytes per pixel in straight (not pre-multiplied)
/// **RGBA** order. Every write composites source-over.
pub struct Canvas {
    pub data: Vec<u8>,
    pub width: usize,
    pub height: usize,
}

impl Canvas {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: vec![0u8; width * height * 4],
            width,
            height,
        }
    }

    /// Overwrite every pixel with `color`.
    pub fn fill(&mut self, color: Color) {
        let (r, g, b) = color.rgb();
        let len = self.width * self.height * 4;
        for px in self.data[..len].chunks_exact_mut(4) {
            px.copy_from_slice(&[r, g, b, color.alpha()]);
        }
    }

    /// Blend `color` onto the pixel at (x, y); out-of-bounds writes are dropped.
    #[inline]
    pub fn put_pixel(&mut self, x: isize, y: isize, color: Color) {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return;
        }
        let idx = (y as usize * self.width + x as usize) * 4;
        let dst = [self.data[idx], self.data[idx + 1], self.data[idx + 2], self.data[idx + 3]];
        self.data[idx..idx + 4].copy_from_slice(&blend_over(color, dst));
    }

    /// Read the RGBA values at (x, y).
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> (u8, u8, u8, u8) {
        let idx = (y * self.width + x) * 4;
        if x < self.width && idx + 3 < self.data.len() {
            (self.data[idx], self.data[idx + 1], self.data[idx + 2], self.data[idx + 3])
        } else {
            (0, 0, 0, 0)
        }
    }

    /// Encode as binary PPM (P6), compositing over `background`.
    pub fn write_ppm<W: Write>(&self, out: &mut W, background: Color) -> io::Result<()> {
        let (br, bg, bb) = background.rgb();

        write!(out, "P6\n{} {}\n255\n", self.width, self.height)?;
        let mut row = Vec::with_capacity(self.width * 3);
        for y in 0..self.height {
            row.clear();
            for x in 0..self.width {
                let (r, g, b, a) = self.get_pixel(x, y);
                let src = Color::from_srgba(Srgba::new(r, g, b, a));
                let [r, g, b, _] = blend_over(src, [br, bg, bb, 255]);
                row.extend_from_slice(&[r, g, b]);
            }
            out.write_all(&row)?;
        }
        Ok(())
    }
}

impl Painter for Canvas {
    fn draw_polygon(&mut self, polygon: &Polygon, paint: &Paint) {
        if paint.style.fills() {
            fill_spans(polygon, (self.width, self.height), |y, x0, x1| {
                for x in x0..x1 {
                    self.put_pixel(x, y, paint.color);
                }
            });
        }
        if paint.style.strokes() {
            for (from, to) in polygon.edges() {
                self.draw_line(from, to, paint);
            }
        }
    }

    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint) {
        let surface = (self.width, self.height);
        thick_line(from, to, paint.width(), surface, |x, y| self.put_pixel(x, y, paint.color));
    }
}
