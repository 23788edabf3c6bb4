//! Shared geometry for both chart components.
//!
//! Angles are in degrees, measured clockwise from straight up (north).
//! Coordinates are view-local with y growing downward.

pub mod circular;
pub mod radar;

pub use circular::{place_items, Sector};
pub use radar::{RadarConfig, RadarGeometry};

/// A point in view-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// A line from one point to another, used for the spokes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub from: Point,
    pub to: Point,
}

/// Closed polygon. The last vertex connects back to the first implicitly.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    pub vertices: Vec<Point>,
}

impl Polygon {
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over the polygon's edges, including the closing edge.
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }
}

impl FromIterator<Point> for Polygon {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self { vertices: iter.into_iter().collect() }
    }
}

/// Natural size of an item, as reported by an external measurement pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Integer pixel rectangle, edges inclusive of `left`/`top`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Rect {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

/// Center and radius of the circle a component draws into.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CircleFrame {
    pub center_x: f32,
    pub center_y: f32,
    pub radius: f32,
}

impl CircleFrame {
    pub fn new(center_x: f32, center_y: f32, radius: f32) -> Self {
        Self { center_x, center_y, radius }
    }

    /// Largest circle centered in a drawing area of the given pixel size.
    pub fn from_area(width: u32, height: u32) -> Self {
        Self {
            center_x: width as f32 / 2.0,
            center_y: height as f32 / 2.0,
            radius: width.min(height) as f32 / 2.0,
        }
    }

    pub fn center(&self) -> Point {
        Point::new(self.center_x, self.center_y)
    }

    /// Point at `radius` from the center along `angle` degrees.
    #[inline]
    pub fn project(&self, angle: f32, radius: f32) -> Point {
        let radians = angle.to_radians();
        Point::new(
            self.center_x + radians.sin() * radius,
            self.center_y - radians.cos() * radius,
        )
    }
}

/// Evenly spaced slot angles for `count` items.
///
/// Even counts are rotated by half a step so the shape is left-right
/// symmetric instead of having a vertex straight up.
pub fn slot_angles(count: usize) -> Vec<f32> {
    if count == 0 {
        return Vec::new();
    }
    let average = 360.0 / count as f32;
    let offset = if count % 2 == 0 { average / 2.0 } else { 0.0 };
    (0..count).map(|i| offset + i as f32 * average).collect()
}
