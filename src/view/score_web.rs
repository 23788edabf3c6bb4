use tracing::debug;

use crate::attributes::{self, Attributes};
use crate::error::{GeometryError, Result};
use crate::geometry::{CircleFrame, RadarConfig, RadarGeometry};
use crate::renderer::{render_chart, ChartStyle, Painter};

const KNOWN_ATTRIBUTES: &[&str] = &[
    attributes::ANGLE_COUNT,
    attributes::HIERARCHY_COUNT,
    attributes::MAX_SCORE,
    attributes::LINE_COLOR,
    attributes::LINE_WIDTH,
    attributes::SCORE_COLOR,
    attributes::SCORE_STROKE_COLOR,
    attributes::SCORE_STROKE_WIDTH,
    attributes::DISABLE_SCORE_STROKE,
];

/// Radar score chart widget.
#[derive(Debug, Clone, Default)]
pub struct ScoreWebView {
    config: RadarConfig,
    style: ChartStyle,
    frame: CircleFrame,
    geometry: RadarGeometry,
    redraw_requested: bool,
}

impl ScoreWebView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a declarative attribute set. Dimensions are resolved with
    /// `density` pixels per dp. With `preview` set the chart is filled with
    /// sample scores.
    pub fn from_attributes(attrs: &Attributes, density: f32, preview: bool) -> Result<Self> {
        attrs.check_known(KNOWN_ATTRIBUTES)?;
        let mut view = Self::new();

        if let Some(count) = attrs.int(attributes::ANGLE_COUNT)? {
            let count = usize::try_from(count).map_err(|_| GeometryError::InvalidAngleCount(count))?;
            view.set_angle_count(count)?;
        }
        if let Some(count) = attrs.int(attributes::HIERARCHY_COUNT)? {
            let count =
                usize::try_from(count).map_err(|_| GeometryError::InvalidHierarchyCount(count))?;
            view.set_hierarchy_count(count)?;
        }
        if let Some(max) = attrs.float(attributes::MAX_SCORE)? {
            view.set_max_score(max)?;
        }

        let mut style = ChartStyle::default();
        if let Some(color) = attrs.color(attributes::LINE_COLOR)? {
            style.line_color = color;
        }
        if let Some(width) = attrs.dimension(attributes::LINE_WIDTH)? {
            style.line_width = positive(width.resolve(density));
        }
        if let Some(color) = attrs.color(attributes::SCORE_COLOR)? {
            style.score_color = color;
        }
        if let Some(color) = attrs.color(attributes::SCORE_STROKE_COLOR)? {
            style.score_stroke_color = color;
        }
        if let Some(width) = attrs.dimension(attributes::SCORE_STROKE_WIDTH)? {
            style.score_stroke_width = positive(width.resolve(density));
        }
        if let Some(disable) = attrs.boolean(attributes::DISABLE_SCORE_STROKE)? {
            style.disable_score_stroke = disable;
        }
        view.set_style(style);

        if preview {
            view.config.fill_preview_scores();
            view.recompute()?;
        }
        Ok(view)
    }

    pub fn config(&self) -> &RadarConfig {
        &self.config
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    pub fn frame(&self) -> CircleFrame {
        self.frame
    }

    pub fn geometry(&self) -> &RadarGeometry {
        &self.geometry
    }

    /// The drawing area changed size.
    pub fn on_size_changed(&mut self, width: u32, height: u32) -> Result<()> {
        self.frame = CircleFrame::from_area(width, height);
        self.recompute()
    }

    pub fn set_angle_count(&mut self, angle_count: usize) -> Result<()> {
        self.update(|config| config.set_angle_count(angle_count))
    }

    pub fn set_hierarchy_count(&mut self, hierarchy_count: usize) -> Result<()> {
        self.update(|config| config.set_hierarchy_count(hierarchy_count))
    }

    pub fn set_max_score(&mut self, max_score: f32) -> Result<()> {
        self.update(|config| config.set_max_score(max_score))
    }

    pub fn set_scores(&mut self, max_score: f32, scores: Vec<f32>) -> Result<()> {
        self.update(|config| config.set_scores(max_score, scores))
    }

    pub fn set_style(&mut self, style: ChartStyle) {
        self.style = style;
        self.redraw_requested = true;
    }

    /// Returns whether a redraw was requested since the last call.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.redraw_requested)
    }

    pub fn draw<P: Painter + ?Sized>(&self, painter: &mut P) {
        render_chart(painter, &self.geometry, &self.style);
    }

    /// Apply `change` to a copy of the config and commit only if the new
    /// geometry computes.
    fn update(&mut self, change: impl FnOnce(&mut RadarConfig) -> Result<()>) -> Result<()> {
        let mut config = self.config.clone();
        change(&mut config)?;
        let geometry = RadarGeometry::compute(&config, &self.frame)?;
        self.config = config;
        self.geometry = geometry;
        self.redraw_requested = true;
        Ok(())
    }

    fn recompute(&mut self) -> Result<()> {
        self.geometry = RadarGeometry::compute(&self.config, &self.frame)?;
        self.redraw_requested = true;
        debug!(radius = self.frame.radius, "score web recomputed");
        Ok(())
    }
}

/// Negative or zero widths mean "use the surface default".
fn positive(width: f32) -> Option<f32> {
    (width > 0.0).then_some(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use approx::assert_relative_eq;

    #[test]
    fn test_size_change_rederives_frame() {
        let mut view = ScoreWebView::new();
        view.on_size_changed(200, 100).unwrap();
        assert_eq!(view.frame(), CircleFrame::new(100.0, 50.0, 50.0));
        assert_eq!(view.geometry().rings.len(), 5);
        assert_eq!(view.geometry().spokes.len(), 5);
    }

    #[test]
    fn test_set_scores_redraws_with_new_angle_count() {
        let mut view = ScoreWebView::new();
        view.on_size_changed(100, 100).unwrap();
        view.take_redraw_request();

        view.set_scores(10.0, vec![5.0, 5.0, 5.0, 5.0]).unwrap();
        assert!(view.take_redraw_request());
        assert!(!view.take_redraw_request());
        assert_eq!(view.config().angle_count(), 4);

        let score = view.geometry().score.as_ref().unwrap();
        for vertex in &score.vertices {
            assert_relative_eq!(vertex.distance(view.frame().center()), 25.0, epsilon = 1e-3);
        }
    }

    #[test]
    fn test_rejected_angle_count_keeps_scores_drawable() {
        let mut view = ScoreWebView::new();
        view.on_size_changed(100, 100).unwrap();
        view.set_scores(10.0, vec![1.0, 2.0, 3.0]).unwrap();
        let before = view.geometry().clone();

        assert!(view.set_angle_count(6).is_err());
        assert_eq!(view.config().angle_count(), 3);
        assert_eq!(view.geometry(), &before);
    }

    #[test]
    fn test_from_attributes_applies_options() {
        let attrs = Attributes::new()
            .with(attributes::ANGLE_COUNT, 6)
            .with(attributes::HIERARCHY_COUNT, 3)
            .with(attributes::MAX_SCORE, 5.0)
            .with(attributes::LINE_COLOR, "#FF333333")
            .with(attributes::LINE_WIDTH, "2dp")
            .with(attributes::SCORE_STROKE_WIDTH, -1)
            .with(attributes::DISABLE_SCORE_STROKE, true);

        let view = ScoreWebView::from_attributes(&attrs, 1.5, false).unwrap();
        assert_eq!(view.config().angle_count(), 6);
        assert_eq!(view.config().hierarchy_count(), 3);
        assert_eq!(view.config().max_score(), 5.0);
        assert_eq!(view.style().line_color, Color::from_argb(0xFF33_3333));
        assert_eq!(view.style().line_width, Some(3.0));
        assert_eq!(view.style().score_stroke_width, None);
        assert!(view.style().disable_score_stroke);
        assert!(view.config().scores().is_none());
    }

    #[test]
    fn test_from_attributes_rejects_bad_counts() {
        let attrs = Attributes::new().with(attributes::ANGLE_COUNT, 2);
        assert_eq!(
            ScoreWebView::from_attributes(&attrs, 1.0, false).unwrap_err(),
            GeometryError::InvalidAngleCount(2)
        );

        let attrs = Attributes::new().with(attributes::HIERARCHY_COUNT, -3);
        assert_eq!(
            ScoreWebView::from_attributes(&attrs, 1.0, false).unwrap_err(),
            GeometryError::InvalidHierarchyCount(-3)
        );

        let attrs = Attributes::new().with(attributes::MAX_SCORE, 0);
        assert_eq!(
            ScoreWebView::from_attributes(&attrs, 1.0, false).unwrap_err(),
            GeometryError::InvalidMaxScore(0.0)
        );
    }

    #[test]
    fn test_preview_fills_sample_scores() {
        let view = ScoreWebView::from_attributes(&Attributes::new(), 1.0, true).unwrap();
        assert_eq!(view.config().scores().unwrap(), &[7.0, 8.0, 5.0, 5.0, 8.0]);
        assert!(view.geometry().score.is_some());
    }
}
