//! Placement of measured items evenly around the outside of a circle.
//!
//! Each item is anchored at its slot's point on the circumference and then
//! pushed outward by an offset that depends on which compass sector the slot
//! falls in, so the whole item clears the circle by `spacing` pixels.

use tracing::debug;

use super::{slot_angles, CircleFrame, Rect, Size};
use crate::error::{GeometryError, Result};

/// One of the eight 45 degree compass sectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sector {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

/// Inclusive degree ranges, checked in this order. Boundary angles belong to
/// the first sector listed that contains them.
const SECTOR_RANGES: [(Sector, f32, f32); 7] = [
    (Sector::NorthEast, 22.5, 67.5),
    (Sector::East, 67.5, 112.5),
    (Sector::SouthEast, 112.5, 157.5),
    (Sector::South, 157.5, 202.5),
    (Sector::SouthWest, 202.5, 247.5),
    (Sector::West, 247.5, 292.5),
    (Sector::NorthWest, 292.5, 337.5),
];

impl Sector {
    /// Classify an angle in degrees. Angles outside `[0, 360)` are rejected.
    pub fn classify(angle: f32) -> Result<Self> {
        if !(0.0..360.0).contains(&angle) {
            return Err(GeometryError::AngleOutOfRange(angle));
        }
        // North wraps around zero so it gets its own check
        if angle >= 337.5 || angle <= 22.5 {
            return Ok(Sector::North);
        }
        SECTOR_RANGES
            .iter()
            .find(|(_, low, high)| (*low..=*high).contains(&angle))
            .map(|(sector, _, _)| *sector)
            .ok_or(GeometryError::AngleOutOfRange(angle))
    }

    /// Offset from the anchor point to the item's top-left corner.
    pub fn offset(&self, size: Size, spacing: f32) -> (f32, f32) {
        let width = size.width as f32;
        let height = size.height as f32;
        // Halves stay fractional; the rect is truncated once in place_items
        match self {
            Sector::North => (-width / 2.0, -height - spacing),
            Sector::NorthEast => (spacing, -height / 2.0 - spacing),
            Sector::East => (spacing, -height / 2.0),
            Sector::SouthEast => (spacing, spacing),
            Sector::South => (-width / 2.0, spacing),
            Sector::SouthWest => (-width - spacing, spacing),
            Sector::West => (-width - spacing, -height / 2.0),
            Sector::NorthWest => (-width - spacing, -height / 2.0 - spacing),
        }
    }
}

/// Placement rectangles for `sizes`, one per item, in slot order.
pub fn place_items(sizes: &[Size], frame: &CircleFrame, spacing: f32) -> Result<Vec<Rect>> {
    let angles = slot_angles(sizes.len());
    let placements = sizes
        .iter()
        .zip(angles)
        .map(|(&size, angle)| {
            let anchor = frame.project(angle, frame.radius);
            let (dx, dy) = Sector::classify(angle)?.offset(size, spacing);
            let left = anchor.x + dx;
            let top = anchor.y + dy;
            Ok(Rect {
                left: left as i32,
                top: top as i32,
                right: (left + size.width as f32) as i32,
                bottom: (top + size.height as f32) as i32,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    debug!(items = sizes.len(), radius = frame.radius, spacing, "placed items around circle");
    Ok(placements)
}
