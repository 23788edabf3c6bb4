//! Drawing seam between chart geometry and concrete surfaces.
//!
//! Geometry is turned into draw calls on a [`Painter`]. Two painters ship
//! with the crate: the RGBA pixel [`Canvas`] and the terminal
//! [`BrailleCanvas`].

pub mod braille;
pub mod canvas;
pub mod raster;
pub mod text;

pub use braille::BrailleCanvas;
pub use canvas::Canvas;

use crate::color::{Color, DEFAULT_LINE_COLOR, DEFAULT_SCORE_COLOR, DEFAULT_SCORE_STROKE_COLOR};
use crate::geometry::{Point, Polygon, RadarGeometry};

/// Stroke width used when a paint leaves it unset.
pub const HAIRLINE_WIDTH: f32 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintStyle {
    Stroke,
    Fill,
    FillAndStroke,
}

impl PaintStyle {
    pub fn fills(&self) -> bool {
        matches!(self, PaintStyle::Fill | PaintStyle::FillAndStroke)
    }

    pub fn strokes(&self) -> bool {
        matches!(self, PaintStyle::Stroke | PaintStyle::FillAndStroke)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paint {
    pub color: Color,
    pub style: PaintStyle,
    /// `None` means the surface's default (hairline) width.
    pub stroke_width: Option<f32>,
}

impl Paint {
    pub fn stroke(color: Color, stroke_width: Option<f32>) -> Self {
        Self { color, style: PaintStyle::Stroke, stroke_width }
    }

    pub fn width(&self) -> f32 {
        self.stroke_width.unwrap_or(HAIRLINE_WIDTH)
    }
}

/// A surface that can draw the two primitives a chart is made of.
pub trait Painter {
    fn draw_polygon(&mut self, polygon: &Polygon, paint: &Paint);

    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint);
}

/// Shifts every draw call by a fixed offset before forwarding it.
pub struct Translate<'a, P: Painter> {
    pub inner: &'a mut P,
    pub dx: f32,
    pub dy: f32,
}

impl<P: Painter> Translate<'_, P> {
    fn shift(&self, p: Point) -> Point {
        Point::new(p.x + self.dx, p.y + self.dy)
    }
}

impl<P: Painter> Painter for Translate<'_, P> {
    fn draw_polygon(&mut self, polygon: &Polygon, paint: &Paint) {
        let shifted: Polygon = polygon.vertices.iter().map(|&p| self.shift(p)).collect();
        self.inner.draw_polygon(&shifted, paint);
    }

    fn draw_line(&mut self, from: Point, to: Point, paint: &Paint) {
        let (from, to) = (self.shift(from), self.shift(to));
        self.inner.draw_line(from, to, paint);
    }
}

/// Colors and widths of a radar chart.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartStyle {
    pub line_color: Color,
    pub line_width: Option<f32>,
    pub score_color: Color,
    pub score_stroke_color: Color,
    pub score_stroke_width: Option<f32>,
    pub disable_score_stroke: bool,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            line_color: DEFAULT_LINE_COLOR,
            line_width: None,
            score_color: DEFAULT_SCORE_COLOR,
            score_stroke_color: DEFAULT_SCORE_STROKE_COLOR,
            score_stroke_width: None,
            disable_score_stroke: false,
        }
    }
}

impl ChartStyle {
    pub fn line_paint(&self) -> Paint {
        Paint::stroke(self.line_color, self.line_width)
    }

    pub fn score_paint(&self) -> Paint {
        Paint { color: self.score_color, style: PaintStyle::FillAndStroke, stroke_width: None }
    }

    pub fn score_stroke_paint(&self) -> Option<Paint> {
        (!self.disable_score_stroke)
            .then(|| Paint::stroke(self.score_stroke_color, self.score_stroke_width))
    }
}

/// Draw a chart: grid rings, spokes, score fill, then score outline.
pub fn render_chart<P: Painter + ?Sized>(painter: &mut P, geometry: &RadarGeometry, style: &ChartStyle) {
    let line = style.line_paint();
    for ring in &geometry.rings {
        painter.draw_polygon(ring, &line);
    }
    for spoke in &geometry.spokes {
        painter.draw_line(spoke.from, spoke.to, &line);
    }

    let Some(score) = &geometry.score else {
        return;
    };
    painter.draw_polygon(score, &style.score_paint());
    if let Some(stroke) = style.score_stroke_paint() {
        painter.draw_polygon(score, &stroke);
    }
}
