//! Rasterization shared by the pixel and braille canvases.

use crate::geometry::{Point, Polygon};

/// Walk a line with Bresenham's algorithm, calling `plot` for each cell.
pub fn bresenham_line(x0: isize, y0: isize, x1: isize, y1: isize, mut plot: impl FnMut(isize, isize)) {
    let mut x0 = x0;
    let mut y0 = y0;

    let dx = (x1 - x0).abs();
    let dy = -(y1 - y0).abs();
    let sx: isize = if x0 < x1 { 1 } else { -1 };
    let sy: isize = if y0 < y1 { 1 } else { -1 };
    let mut err = dx + dy;

    loop {
        plot(x0, y0);

        if x0 == x1 && y0 == y1 {
            break;
        }

        let e2 = 2 * err;
        if e2 >= dy {
            err += dy;
            x0 += sx;
        }
        if e2 <= dx {
            err += dx;
            y0 += sy;
        }
    }
}

/// Clip the segment to the rectangle `[min_x, max_x] x [min_y, max_y]`
/// (Liang-Barsky). Returns `None` when nothing of it is inside or an end
/// point is not finite.
///
/// The walk starts from the end point nearer the origin, so a segment with
/// one far-off end keeps full precision where it crosses the rectangle.
pub fn clip_segment(
    from: Point,
    to: Point,
    (min_x, min_y): (f32, f32),
    (max_x, max_y): (f32, f32),
) -> Option<(Point, Point)> {
    if !(from.x.is_finite() && from.y.is_finite() && to.x.is_finite() && to.y.is_finite()) {
        return None;
    }
    let magnitude = |p: Point| p.x.abs().max(p.y.abs());
    let swapped = magnitude(to) < magnitude(from);
    let (origin, end) = if swapped { (to, from) } else { (from, to) };

    let dx = end.x - origin.x;
    let dy = end.y - origin.y;
    let mut t0 = 0.0f32;
    let mut t1 = 1.0f32;

    for (p, q) in [
        (-dx, origin.x - min_x),
        (dx, max_x - origin.x),
        (-dy, origin.y - min_y),
        (dy, max_y - origin.y),
    ] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            t0 = t0.max(r);
        } else {
            t1 = t1.min(r);
        }
        if t0 > t1 {
            return None;
        }
    }

    let at = |t: f32| {
        Point::new(
            (origin.x + t * dx).clamp(min_x, max_x),
            (origin.y + t * dy).clamp(min_y, max_y),
        )
    };
    let (a, b) = (at(t0), at(t1));
    Some(if swapped { (b, a) } else { (a, b) })
}

/// Line with a square brush `width` cells wide on a `cols` x `rows` surface.
/// The segment is clipped first, so only cells near the surface are walked.
pub fn thick_line(
    from: Point,
    to: Point,
    width: f32,
    (cols, rows): (usize, usize),
    mut plot: impl FnMut(isize, isize),
) {
    // A brush wider than twice the surface covers it from any point on it
    let widest = (cols.max(rows) * 2 + 1) as f32;
    let brush = width.round().clamp(1.0, widest) as isize;
    let lo = -(brush - 1) / 2;
    let hi = brush / 2;

    let pad = brush as f32 + 1.0;
    let Some((from, to)) = clip_segment(from, to, (-pad, -pad), (cols as f32 + pad, rows as f32 + pad))
    else {
        return;
    };

    bresenham_line(
        from.x.floor() as isize,
        from.y.floor() as isize,
        to.x.floor() as isize,
        to.y.floor() as isize,
        |x, y| {
            for by in lo..=hi {
                for bx in lo..=hi {
                    plot(x + bx, y + by);
                }
            }
        },
    );
}

/// Even-odd scanline fill, sampling at cell centers. Calls `span(y, x_start,
/// x_end)` with `x_end` exclusive, only for rows in `0..rows` and columns in
/// `0..cols`.
pub fn fill_spans(
    polygon: &Polygon,
    (cols, rows): (usize, usize),
    mut span: impl FnMut(isize, isize, isize),
) {
    if polygon.len() < 3 || rows == 0 || cols == 0 {
        return;
    }
    if polygon.vertices.iter().any(|p| !(p.x.is_finite() && p.y.is_finite())) {
        return;
    }

    let (min_y, max_y) = polygon
        .vertices
        .iter()
        .fold((f32::MAX, f32::MIN), |(lo, hi), p| (lo.min(p.y), hi.max(p.y)));
    let first_row = (min_y.floor().max(0.0) as isize).min(rows as isize);
    let last_row = (max_y.ceil().min(rows as f32 - 1.0) as isize).max(-1);
    let max_col = cols as f32;

    let mut crossings: Vec<f32> = Vec::with_capacity(polygon.len());
    for row in first_row..=last_row {
        let yc = row as f32 + 0.5;
        crossings.clear();
        for (a, b) in polygon.edges() {
            if (a.y <= yc && yc < b.y) || (b.y <= yc && yc < a.y) {
                // Ratio first so far-off vertices don't overflow the product
                let t = (yc - a.y) / (b.y - a.y);
                crossings.push(a.x + t * (b.x - a.x));
            }
        }
        crossings.sort_by(|a, b| a.total_cmp(b));
        for pair in crossings.chunks_exact(2) {
            let start = (pair[0] - 0.5).ceil().clamp(0.0, max_col) as isize;
            let end = (pair[1] - 0.5).ceil().clamp(0.0, max_col) as isize;
            if end > start {
                span(row, start, end);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bresenham_endpoints_and_count() {
        let mut cells = Vec::new();
        bresenham_line(0, 0, 4, 2, |x, y| cells.push((x, y)));
        assert_eq!(cells.first(), Some(&(0, 0)));
        assert_eq!(cells.last(), Some(&(4, 2)));
        assert_eq!(cells.len(), 5);
    }

    #[test]
    fn test_thick_line_covers_brush() {
        let mut cells = Vec::new();
        thick_line(Point::new(2.0, 2.0), Point::new(2.0, 2.0), 3.0, (10, 10), |x, y| cells.push((x, y)));
        assert_eq!(cells.len(), 9);
        assert!(cells.contains(&(1, 1)) && cells.contains(&(3, 3)));
    }

    #[test]
    fn test_fill_square() {
        let square: Polygon = [
            Point::new(1.0, 1.0),
            Point::new(5.0, 1.0),
            Point::new(5.0, 4.0),
            Point::new(1.0, 4.0),
        ]
        .into_iter()
        .collect();

        let mut spans = Vec::new();
        fill_spans(&square, (10, 10), |y, x0, x1| spans.push((y, x0, x1)));
        assert_eq!(spans, vec![(1, 1, 5), (2, 1, 5), (3, 1, 5)]);
    }

    #[test]
    fn test_fill_clips_rows() {
        let tall: Polygon = [Point::new(0.0, -5.0), Point::new(2.0, -5.0), Point::new(2.0, 50.0)]
            .into_iter()
            .collect();
        let mut rows = Vec::new();
        fill_spans(&tall, (4, 4), |y, _, _| rows.push(y));
        assert!(rows.iter().all(|&y| (0..4).contains(&y)));
    }

    #[test]
    fn test_clip_segment() {
        let min = (0.0, 0.0);
        let max = (10.0, 10.0);

        let (a, b) = clip_segment(Point::new(5.0, -1e30), Point::new(5.0, 5.0), min, max).unwrap();
        assert_eq!(b, Point::new(5.0, 5.0));
        assert!(a.y.abs() < 1.0, "clipped start {:?}", a);

        let inside = clip_segment(Point::new(1.0, 1.0), Point::new(9.0, 2.0), min, max);
        assert_eq!(inside, Some((Point::new(1.0, 1.0), Point::new(9.0, 2.0))));

        assert_eq!(clip_segment(Point::new(-5.0, 20.0), Point::new(20.0, 20.0), min, max), None);
        assert_eq!(clip_segment(Point::new(f32::NAN, 0.0), Point::new(1.0, 1.0), min, max), None);
    }

    #[test]
    fn test_far_line_walks_only_near_surface() {
        let mut count = 0usize;
        thick_line(Point::new(5.0, 5.0), Point::new(1e30, 5.0), 1.0, (10, 10), |x, y| {
            assert!((-3..14).contains(&x) && y == 5);
            count += 1;
        });
        assert!(count > 0 && count < 20);
    }

    #[test]
    fn test_fill_clamps_columns() {
        let wide: Polygon = [Point::new(-1e30, 0.0), Point::new(1e30, 0.0), Point::new(0.0, 3.0)]
            .into_iter()
            .collect();
        let mut spans = Vec::new();
        fill_spans(&wide, (8, 8), |y, x0, x1| spans.push((y, x0, x1)));
        assert!(!spans.is_empty());
        assert!(spans.iter().all(|&(_, x0, x1)| x0 >= 0 && x1 <= 8));
    }

    #[test]
    fn test_huge_brush_is_capped() {
        let mut count = 0usize;
        thick_line(Point::new(1.0, 1.0), Point::new(1.0, 1.0), 1e9, (2, 2), |_, _| count += 1);
        assert_eq!(count, 25);
    }
}
