pub mod image;
pub mod terminal;

use anyhow::Result;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use spiderweb::geometry::{Rect, Size};
use spiderweb::view::{CircularLayout, ScoreWebView};

use crate::config::Config;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Terminal,
    Image,
}

/// A chart plus one score label per corner, laid out around it.
pub struct Scene {
    pub web: ScoreWebView,
    pub labels: CircularLayout,
    pub texts: Vec<String>,
    /// Room reserved on every side for the labels
    pub margin: u32,
}

impl Scene {
    pub fn from_config(config: &Config) -> Result<Self> {
        let density = config.display.density;
        let chart = &config.chart;

        let mut web = ScoreWebView::from_attributes(&chart.to_attributes(), density, chart.scores.is_none())?;
        if let Some(scores) = &chart.scores {
            web.set_scores(chart.max_score, scores.clone())?;
        }
        let labels = CircularLayout::from_attributes(&config.layout.to_attributes(), density)?;

        let texts = web
            .config()
            .scores()
            .unwrap_or_default()
            .iter()
            .map(|&score| score_label(score))
            .collect();

        Ok(Self { web, labels, texts, margin: 0 })
    }

    /// Size both views to `width` x `height` minus the label margin. Label
    /// sizes are in the same units as the area.
    pub fn resize(&mut self, width: u32, height: u32, label_size: impl Fn(&str) -> Size) -> Result<()> {
        let sizes: Vec<Size> = self.texts.iter().map(|text| label_size(text)).collect();
        let largest = sizes.iter().map(|s| s.width.max(s.height)).max().unwrap_or(0);
        self.margin = (largest + self.labels.spacing()).max(0) as u32;

        let inner_w = width.saturating_sub(self.margin * 2);
        let inner_h = height.saturating_sub(self.margin * 2);
        self.web.on_size_changed(inner_w, inner_h)?;
        self.labels.on_size_changed(inner_w, inner_h);
        self.labels.set_children(sizes);
        Ok(())
    }

    /// Label rectangles shifted into area coordinates.
    pub fn label_rects(&self) -> Result<Vec<Rect>> {
        let m = self.margin as i32;
        Ok(self
            .labels
            .layout()?
            .into_iter()
            .map(|r| Rect { left: r.left + m, top: r.top + m, right: r.right + m, bottom: r.bottom + m })
            .collect())
    }
}

/// Format a score the way a float prints by default: always one decimal
/// for whole numbers.
pub fn score_label(score: f32) -> String {
    if score.fract() == 0.0 {
        format!("{:.1}", score)
    } else {
        format!("{}", score)
    }
}
