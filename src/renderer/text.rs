//! Bitmap font text rendering for the pixel canvas.
//!
//! Score labels are drawn with an 8×8 bitmap font scaled by an integer
//! factor. Only the characters a numeric label needs are present.

use super::Canvas;
use crate::color::Color;
use crate::geometry::Size;

pub const GLYPH_SIZE: usize = 8;

/// Simple 8x8 bitmap font for basic text rendering.
/// Each character is represented as 8 bytes, one per row.
fn get_char_bitmap(ch: char) -> Option<[u8; 8]> {
    Some(match ch {
        '0' => [0x3C, 0x42, 0x46, 0x5A, 0x62, 0x42, 0x3C, 0x00],
        '1' => [0x08, 0x18, 0x28, 0x08, 0x08, 0x08, 0x3E, 0x00],
        '2' => [0x3C, 0x42, 0x02, 0x0C, 0x30, 0x40, 0x7E, 0x00],
        '3' => [0x3C, 0x42, 0x02, 0x1C, 0x02, 0x42, 0x3C, 0x00],
        '4' => [0x04, 0x0C, 0x14, 0x24, 0x7E, 0x04, 0x04, 0x00],
        '5' => [0x7E, 0x40, 0x7C, 0x02, 0x02, 0x42, 0x3C, 0x00],
        '6' => [0x1C, 0x20, 0x40, 0x7C, 0x42, 0x42, 0x3C, 0x00],
        '7' => [0x7E, 0x02, 0x04, 0x08, 0x10, 0x10, 0x10, 0x00],
        '8' => [0x3C, 0x42, 0x42, 0x3C, 0x42, 0x42, 0x3C, 0x00],
        '9' => [0x3C, 0x42, 0x42, 0x3E, 0x02, 0x04, 0x38, 0x00],
        ' ' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00],
        '-' => [0x00, 0x00, 0x00, 0x7E, 0x00, 0x00, 0x00, 0x00],
        '.' => [0x00, 0x00, 0x00, 0x00, 0x00, 0x18, 0x18, 0x00],
        '/' => [0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x00, 0x00],
        '%' => [0x62, 0x64, 0x08, 0x10, 0x26, 0x46, 0x00, 0x00],
        _ => return None,
    })
}

/// Pixel size of `text` at the given integer scale.
pub fn label_size(text: &str, scale: usize) -> Size {
    let scale = scale.max(1);
    Size::new(
        (text.chars().count() * GLYPH_SIZE * scale) as i32,
        (GLYPH_SIZE * scale) as i32,
    )
}

/// Draw `text` with its top-left corner at (x, y). Unknown characters leave
/// a blank cell.
pub fn draw_label(canvas: &mut Canvas, x: i32, y: i32, text: &str, color: Color, scale: usize) {
    let scale = scale.max(1);
    for (i, ch) in text.chars().enumerate() {
        let char_x = x as isize + (i * GLYPH_SIZE * scale) as isize;
        render_char(canvas, char_x, y as isize, ch, color, scale);
    }
}

fn render_char(canvas: &mut Canvas, x: isize, y: isize, ch: char, color: Color, scale: usize) {
    let bitmap = match get_char_bitmap(ch) {
        Some(b) => b,
        None => return,
    };

    for (row_idx, &row) in bitmap.iter().enumerate() {
        for col in 0..GLYPH_SIZE {
            if (row >> (7 - col)) & 1 == 1 {
                for sy in 0..scale {
                    for sx in 0..scale {
                        let px = x + (col * scale + sx) as isize;
                        let py = y + (row_idx * scale + sy) as isize;
                        canvas.put_pixel(px, py, color);
                    }
                }
            }
        }
    }
}
