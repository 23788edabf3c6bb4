//! Radar ("spider-web") chart geometry: grid rings, spokes and the score
//! polygon.

use tracing::debug;

use super::{slot_angles, CircleFrame, Polygon, Segment};
use crate::error::{GeometryError, Result};

pub const DEFAULT_ANGLE_COUNT: usize = 5;
pub const DEFAULT_HIERARCHY_COUNT: usize = 5;
pub const DEFAULT_MAX_SCORE: f32 = 10.0;

/// Scores used for edit-mode previews, cycled to fill the angle count.
pub const PREVIEW_SCORES: [f32; 5] = [7.0, 8.0, 5.0, 5.0, 8.0];

/// Validated radar chart configuration.
///
/// Fields are private so every change goes through a validating setter; a
/// rejected value leaves the previous configuration in place.
#[derive(Debug, Clone, PartialEq)]
pub struct RadarConfig {
    angle_count: usize,
    hierarchy_count: usize,
    max_score: f32,
    scores: Option<Vec<f32>>,
}

impl Default for RadarConfig {
    fn default() -> Self {
        Self {
            angle_count: DEFAULT_ANGLE_COUNT,
            hierarchy_count: DEFAULT_HIERARCHY_COUNT,
            max_score: DEFAULT_MAX_SCORE,
            scores: None,
        }
    }
}

impl RadarConfig {
    pub fn angle_count(&self) -> usize {
        self.angle_count
    }

    pub fn hierarchy_count(&self) -> usize {
        self.hierarchy_count
    }

    pub fn max_score(&self) -> f32 {
        self.max_score
    }

    pub fn scores(&self) -> Option<&[f32]> {
        self.scores.as_deref()
    }

    pub fn set_angle_count(&mut self, angle_count: usize) -> Result<()> {
        if angle_count <= 2 {
            return Err(GeometryError::InvalidAngleCount(angle_count as i64));
        }
        self.angle_count = angle_count;
        Ok(())
    }

    pub fn set_hierarchy_count(&mut self, hierarchy_count: usize) -> Result<()> {
        if hierarchy_count == 0 {
            return Err(GeometryError::InvalidHierarchyCount(0));
        }
        self.hierarchy_count = hierarchy_count;
        Ok(())
    }

    pub fn set_max_score(&mut self, max_score: f32) -> Result<()> {
        if max_score.is_nan() || max_score <= 0.0 {
            return Err(GeometryError::InvalidMaxScore(max_score));
        }
        self.max_score = max_score;
        Ok(())
    }

    /// Set the scores and their max. The angle count follows the score count.
    pub fn set_scores(&mut self, max_score: f32, scores: Vec<f32>) -> Result<()> {
        if scores.is_empty() {
            return Err(GeometryError::EmptyScores);
        }
        self.set_max_score(max_score)?;
        self.angle_count = scores.len();
        self.scores = Some(scores);
        Ok(())
    }

    /// Fill the chart with sample scores, as shown in layout previews.
    pub fn fill_preview_scores(&mut self) {
        let scores = PREVIEW_SCORES.iter().copied().cycle().take(self.angle_count).collect();
        self.max_score = DEFAULT_MAX_SCORE;
        self.scores = Some(scores);
    }
}

/// Drawable geometry for one radar chart.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RadarGeometry {
    /// One polygon per hierarchy level, innermost first.
    pub rings: Vec<Polygon>,
    /// Center-to-rim lines, one per angle.
    pub spokes: Vec<Segment>,
    /// Score shape; absent when no scores are configured.
    pub score: Option<Polygon>,
}

impl RadarGeometry {
    pub fn compute(config: &RadarConfig, frame: &CircleFrame) -> Result<Self> {
        let angles = slot_angles(config.angle_count);

        let ring_step = frame.radius / config.hierarchy_count as f32;
        let rings = (1..=config.hierarchy_count)
            .map(|level| ring_polygon(frame, &angles, ring_step * level as f32))
            .collect();

        let center = frame.center();
        let spokes = angles
            .iter()
            .map(|&angle| Segment { from: center, to: frame.project(angle, frame.radius) })
            .collect();

        let score = match config.scores.as_deref() {
            None | Some([]) => None,
            Some(scores) => Some(score_polygon(frame, &angles, scores, config.max_score)?),
        };

        debug!(
            angles = config.angle_count,
            hierarchy = config.hierarchy_count,
            radius = frame.radius,
            has_score = score.is_some(),
            "computed radar geometry"
        );

        Ok(Self { rings, spokes, score })
    }
}

fn ring_polygon(frame: &CircleFrame, angles: &[f32], radius: f32) -> Polygon {
    angles.iter().map(|&angle| frame.project(angle, radius)).collect()
}

fn score_polygon(
    frame: &CircleFrame,
    angles: &[f32],
    scores: &[f32],
    max_score: f32,
) -> Result<Polygon> {
    if scores.len() != angles.len() {
        return Err(GeometryError::ScoreCountMismatch {
            expected: angles.len(),
            actual: scores.len(),
        });
    }
    Ok(angles
        .iter()
        .zip(scores)
        .map(|(&angle, &score)| frame.project(angle, score / max_score * frame.radius))
        .collect())
}
