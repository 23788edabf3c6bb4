use ratatui::prelude::*;

use super::raster::{fill_spans, thick_line};
use super::{Paint, Painter};
use crate::color::Color as Argb;
use crate::geometry::{Point, Polygon};

/// Braille dot positions within a 2x4 cell:
/// (0,0)=0x01 (1,0)=0x08
/// (0,1)=0x02 (1,1)=0x10
/// (0,2)=0x04 (1,2)=0x20
/// (0,3)=0x40 (1,3)=0x80
pub const DOT_MAP: [[u8; 4]; 2] = [
    [0x01, 0x02, 0x04, 0x40],
    [0x08, 0x10, 0x20, 0x80],
];

/// A painter for sub-character braille rendering.
/// Each terminal character cell maps to a 2x4 grid of braille dots and
/// carries the color of the last primitive drawn into it.
pub struct BrailleCanvas {
    pub grid: Vec<bool>,
    pub grid_w: usize,
    pub grid_h: usize,
    colors: Vec<Option<(u8, u8, u8)>>,
    char_w: usize,
    char_h: usize,
}

impl BrailleCanvas {
    /// Create a new braille canvas for the given character dimensions.
    pub fn new(char_w: usize, char_h: usize) -> Self {
        let grid_w = char_w * 2;
        let grid_h = char_h * 4;
        Self {
            grid: vec![false; grid_w * grid_h],
            grid_w,
            grid_h,
            colors: vec![None; char_w * char_h],
            char_w,
            char_h,
        }
    }

    /// Set a single dot on the braille grid (bounds-checked).
    #[inline]
    pub fn set(&mut self, gx: isize, gy: isize, color: Argb) {
        if gx < 0 || gy < 0 {
            return;
        }
        let (gx, gy) = (gx as usize, gy as usize);
        if gx < self.grid_w && gy < self.grid_h {
            self.grid[gy * self.grid_w + gx] = true;
            self.colors[(gy / 4) * self.char_w + gx / 2] = Some(color.rgb());
        }
    }

    pub fn is_set(&self, gx: usize, gy: usize) -> bool {
        gx < self.grid_w && gy < self.grid_h && self.grid[gy * self.grid_w + gx]
    }

    /// Encode the braille grid to characters and write them to the frame buffer.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        for cy in 0..self.char_h.min(area.height as usize) {
            for cx in 0..self.char_w.min(area.width as usize) {
                let mut braille: u8 = 0;

                for (dx, col) in DOT_MAP.iter().enumerate() {
                    for (dy, &bit) in col.iter().enumerate() {
                        if self.is_set(cx * 2 + dx, cy * 4 + dy) {
                            braille |= bit;
                        }
                    }
                }

                if braille == 0 {
                    continue;
                }
                if let Some((r, g, b)) = self.colors[cy * self.char_w + cx] {
                    let ch = char::from_u32(0x2800 + braille as u32).unwrap_or(' ');
                    let cell = frame
                        .buffer_mut()
                        .cell_mut((area.x + cx as u16, area.y + cy as u16));
                    if let Some(cell) = cell {
                        cell.set_char(ch);
                        cell.set_fg(Color::Rgb(r, g, b));
                    }
                }
            }
        }
    }
}

impl Painter for BrailleCanvas {
    fn draw_polygon(&mut self, polygon: &Polygon, paint: &Paint) {
        if paint.style.fills() {
            // Translucent fills use every other dot so the grid shows through
            let sparse = paint.color.alpha() < u8::MAX;
            fill_spans(polygon, (self.grid_w, self.grid_h), |y, x0, x1| {
                for x in x0..x1 {
                    if !sparse || (x + y) % 2 == 0 {
                        self.set(x, y, paint.color);
                    }
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
        // Dots are coarse; widths collapse to a single dot line
        let surface = (self.grid_w, self.grid_h);
        thick_line(from, to, 1.0, surface, |x, y| self.set(x, y, paint.color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::PaintStyle;

    #[test]
    fn test_set_tracks_cell_color() {
        let mut canvas = BrailleCanvas::new(2, 1);
        canvas.set(3, 2, Argb::from_argb(0xFF10_2030));
        assert!(canvas.is_set(3, 2));
        assert_eq!(canvas.colors[1], Some((0x10, 0x20, 0x30)));
        assert_eq!(canvas.colors[0], None);
        canvas.set(-1, 0, Argb::from_argb(0xFF00_0000));
        canvas.set(4, 0, Argb::from_argb(0xFF00_0000));
        assert_eq!(canvas.grid.iter().filter(|&&d| d).count(), 1);
    }

    #[test]
    fn test_translucent_fill_is_sparse() {
        let mut canvas = BrailleCanvas::new(4, 2);
        let square: Polygon = [
            Point::new(0.0, 0.0),
            Point::new(8.0, 0.0),
            Point::new(8.0, 8.0),
            Point::new(0.0, 8.0),
        ]
        .into_iter()
        .collect();
        let paint = Paint {
            color: Argb::from_argb(0x80F6_5801),
            style: PaintStyle::Fill,
            stroke_width: None,
        };
        canvas.draw_polygon(&square, &paint);
        assert_eq!(canvas.grid.iter().filter(|&&d| d).count(), 32);
    }
}
