use tracing::debug;

use super::ChildLayout;
use crate::attributes::{self, Attributes, Dimension};
use crate::error::Result;
use crate::geometry::{place_items, CircleFrame, Rect, Size};

/// Gap between the circle and its children when none is configured.
pub const DEFAULT_SPACING: Dimension = Dimension::Dp(8.0);

/// Lays children out evenly around the outside of the largest circle that
/// fits its area. Children extend past the area's bounds, so the host must
/// leave room around it.
#[derive(Debug, Clone, Default)]
pub struct CircularLayout {
    spacing: i32,
    children: Vec<Size>,
    frame: CircleFrame,
    layout_requested: bool,
}

impl CircularLayout {
    pub fn new(density: f32) -> Self {
        Self {
            spacing: DEFAULT_SPACING.resolve_px(density),
            ..Self::default()
        }
    }

    pub fn from_attributes(attrs: &Attributes, density: f32) -> Result<Self> {
        attrs.check_known(&[attributes::SPACING])?;
        let mut layout = Self::new(density);
        if let Some(spacing) = attrs.dimension(attributes::SPACING)? {
            layout.set_spacing(spacing.resolve_px(density));
        }
        Ok(layout)
    }

    pub fn spacing(&self) -> i32 {
        self.spacing
    }

    pub fn frame(&self) -> CircleFrame {
        self.frame
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub fn set_spacing(&mut self, spacing: i32) {
        self.spacing = spacing;
        self.layout_requested = true;
    }

    pub fn add_child(&mut self, size: Size) {
        self.children.push(size);
        self.layout_requested = true;
    }

    pub fn set_children(&mut self, children: Vec<Size>) {
        self.children = children;
        self.layout_requested = true;
    }

    pub fn on_size_changed(&mut self, width: u32, height: u32) {
        self.frame = CircleFrame::from_area(width, height);
        self.layout_requested = true;
    }

    /// Returns whether a relayout was requested since the last call.
    pub fn take_layout_request(&mut self) -> bool {
        std::mem::take(&mut self.layout_requested)
    }

    /// Placement rectangles for the current children, in insertion order.
    pub fn layout(&self) -> Result<Vec<Rect>> {
        if self.children.is_empty() {
            return Ok(Vec::new());
        }
        let rects = self.place(&self.children)?;
        debug!(children = rects.len(), spacing = self.spacing, "circular layout pass");
        Ok(rects)
    }
}

impl ChildLayout for CircularLayout {
    fn place(&self, children: &[Size]) -> Result<Vec<Rect>> {
        place_items(children, &self.frame, self.spacing as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GeometryError;

    #[test]
    fn test_default_spacing_follows_density() {
        assert_eq!(CircularLayout::new(1.0).spacing(), 8);
        assert_eq!(CircularLayout::new(2.0).spacing(), 16);
        assert_eq!(CircularLayout::new(1.33).spacing(), 11);
    }

    #[test]
    fn test_empty_layout_is_noop() {
        let mut layout = CircularLayout::new(1.0);
        layout.on_size_changed(100, 100);
        assert!(layout.layout().unwrap().is_empty());
    }

    #[test]
    fn test_four_children_in_diagonal_sectors() {
        let mut layout = CircularLayout::new(1.0);
        layout.on_size_changed(200, 200);
        layout.set_children(vec![Size::new(10, 10); 4]);

        let rects = layout.layout().unwrap();
        assert_eq!(rects.len(), 4);
        // 45 degrees: north-east, right of and above the anchor
        let anchor_x = 100.0 + 45f32.to_radians().sin() * 100.0;
        let anchor_y = 100.0 - 45f32.to_radians().cos() * 100.0;
        assert_eq!(rects[0].left, (anchor_x + 8.0) as i32);
        assert_eq!(rects[0].top, (anchor_y - 5.0 - 8.0) as i32);
        // 315 degrees: north-west, left of the anchor
        assert!(rects[3].right <= 100 - 70);
    }

    #[test]
    fn test_add_child_requests_layout() {
        let mut layout = CircularLayout::new(1.0);
        layout.take_layout_request();
        layout.add_child(Size::new(4, 4));
        assert!(layout.take_layout_request());
        assert_eq!(layout.child_count(), 1);
    }

    #[test]
    fn test_from_attributes() {
        let attrs = Attributes::new().with(attributes::SPACING, "4dp");
        assert_eq!(CircularLayout::from_attributes(&attrs, 3.0).unwrap().spacing(), 12);

        let attrs = Attributes::new().with(attributes::SPACING, "wide");
        assert!(matches!(
            CircularLayout::from_attributes(&attrs, 1.0),
            Err(GeometryError::InvalidAttribute { .. })
        ));
    }
}
