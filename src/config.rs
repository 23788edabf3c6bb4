use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::warn;

use spiderweb::attributes::{self, Attributes, Dimension};
use spiderweb::color::{Color, DEFAULT_LINE_COLOR, DEFAULT_SCORE_COLOR, DEFAULT_SCORE_STROKE_COLOR};
use spiderweb::geometry::radar::{DEFAULT_ANGLE_COUNT, DEFAULT_HIERARCHY_COUNT, DEFAULT_MAX_SCORE};
use spiderweb::view::circular_layout::DEFAULT_SPACING;

use crate::display::DisplayMode;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub chart: ChartConfig,
    #[serde(default)]
    pub layout: LayoutConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub mode: DisplayMode,
    /// Pixels per density-independent unit
    pub density: f32,
    /// Image size in pixels (image mode only)
    pub width: u32,
    pub height: u32,
    pub output: PathBuf,
    /// Integer scale of the label font (image mode only)
    pub label_scale: usize,
    pub label_color: Color,
    pub background_color: Color,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            mode: DisplayMode::Terminal,
            density: 1.0,
            width: 480,
            height: 480,
            output: PathBuf::from("spiderweb.ppm"),
            label_scale: 2,
            label_color: Color::from_argb(0xFF33_3333),
            background_color: Color::from_argb(0xFFFF_FFFF),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub angle_count: usize,
    pub hierarchy_count: usize,
    pub max_score: f32,
    /// When absent, sample scores are shown
    pub scores: Option<Vec<f32>>,
    pub line_color: Color,
    pub line_width: Option<f32>,
    pub score_color: Color,
    pub score_stroke_color: Color,
    pub score_stroke_width: Option<f32>,
    pub disable_score_stroke: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            angle_count: DEFAULT_ANGLE_COUNT,
            hierarchy_count: DEFAULT_HIERARCHY_COUNT,
            max_score: DEFAULT_MAX_SCORE,
            scores: None,
            line_color: DEFAULT_LINE_COLOR,
            line_width: None,
            score_color: DEFAULT_SCORE_COLOR,
            score_stroke_color: DEFAULT_SCORE_STROKE_COLOR,
            score_stroke_width: None,
            disable_score_stroke: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub spacing: Dimension,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self { spacing: DEFAULT_SPACING }
    }
}

impl ChartConfig {
    /// Chart options as a widget attribute set. Scores are not attributes;
    /// they are applied through the view's setter.
    pub fn to_attributes(&self) -> Attributes {
        let mut attrs = Attributes::new();
        attrs
            .set(attributes::ANGLE_COUNT, self.angle_count)
            .set(attributes::HIERARCHY_COUNT, self.hierarchy_count)
            .set(attributes::MAX_SCORE, self.max_score)
            .set(attributes::LINE_COLOR, self.line_color)
            .set(attributes::SCORE_COLOR, self.score_color)
            .set(attributes::SCORE_STROKE_COLOR, self.score_stroke_color)
            .set(attributes::DISABLE_SCORE_STROKE, self.disable_score_stroke);
        if let Some(width) = self.line_width {
            attrs.set(attributes::LINE_WIDTH, Dimension::Px(width));
        }
        if let Some(width) = self.score_stroke_width {
            attrs.set(attributes::SCORE_STROKE_WIDTH, Dimension::Px(width));
        }
        attrs
    }
}

impl LayoutConfig {
    pub fn to_attributes(&self) -> Attributes {
        Attributes::new().with(attributes::SPACING, self.spacing)
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the default XDG config path (~/.config/spiderweb/config.toml)
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("spiderweb").join("config.toml"))
    }

    /// Load config from the default XDG path if it exists
    /// Returns None if file doesn't exist, logs warning on parse errors
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            return None;
        }
        match Self::load(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                warn!("Failed to parse config at {}: {}. Using defaults.", path.display(), e);
                None
            }
        }
    }

    /// Initialize default config file at XDG path, returns the path
    pub fn init_default_config() -> Result<PathBuf> {
        let path = Self::default_path()
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, Self::generate_config_template())?;

        Ok(path)
    }

    /// Generate a commented TOML config template
    pub fn generate_config_template() -> String {
        r##"# Spiderweb Configuration

[display]
# Display mode: "terminal" or "image"
mode = "terminal"
# Pixels per dp, used to resolve "dp" dimensions
density = 1.0
# Image size in pixels (image mode only)
width = 480
height = 480
# Output file, binary PPM (image mode only)
output = "spiderweb.ppm"
# Label font scale and colors (image mode only)
label_scale = 2
label_color = "#FF333333"
background_color = "#FFFFFFFF"

[chart]
# Number of corners; overridden by the number of scores when set
angle_count = 5
# Number of grid rings
hierarchy_count = 5
# Score that reaches the outer ring
max_score = 10.0
# Scores, one per corner (omit to show sample scores)
# scores = [7.0, 8.0, 5.0, 5.0, 8.0]
# Colors are "#RRGGBB" or "#AARRGGBB"
line_color = "#FF000000"
score_color = "#80F65801"
score_stroke_color = "#FFF65801"
# Stroke widths in pixels (omit for a hairline)
# line_width = 1.0
# score_stroke_width = 2.0
disable_score_stroke = false

[layout]
# Gap between the chart and its labels: "8dp", "12px" or a bare pixel count
spacing = "8dp"
"##
        .to_string()
    }

    /// Merge CLI arguments into config (CLI takes priority)
    pub fn merge_args(&mut self, args: &crate::Args) {
        if let Some(mode) = args.mode {
            self.display.mode = mode;
        }
        if let Some(density) = args.density {
            self.display.density = density;
        }
        if let Some(width) = args.width {
            self.display.width = width;
        }
        if let Some(height) = args.height {
            self.display.height = height;
        }
        if let Some(ref output) = args.output {
            self.display.output = output.clone();
        }

        if let Some(ref scores) = args.scores {
            self.chart.scores = Some(scores.clone());
        }
        if let Some(max) = args.max_score {
            self.chart.max_score = max;
        }
        if let Some(count) = args.angles {
            self.chart.angle_count = count;
        }
        if let Some(count) = args.hierarchy {
            self.chart.hierarchy_count = count;
        }
        if args.disable_score_stroke {
            self.chart.disable_score_stroke = true;
        }

        if let Some(spacing) = args.spacing {
            self.layout.spacing = spacing;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_parses_to_defaults() {
        let config: Config = toml::from_str(&Config::generate_config_template()).unwrap();
        let defaults = Config::default();
        assert_eq!(config.chart.angle_count, defaults.chart.angle_count);
        assert_eq!(config.chart.score_color, defaults.chart.score_color);
        assert_eq!(config.layout.spacing, defaults.layout.spacing);
        assert_eq!(config.display.output, defaults.display.output);
        assert!(config.chart.scores.is_none());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            r##"
            [chart]
            scores = [1.0, 2.0, 3.0]
            line_width = 2.5

            [layout]
            spacing = "12px"
            "##,
        )
        .unwrap();

        assert_eq!(config.chart.scores, Some(vec![1.0, 2.0, 3.0]));
        assert_eq!(config.chart.hierarchy_count, DEFAULT_HIERARCHY_COUNT);
        assert_eq!(config.layout.spacing, Dimension::Px(12.0));
        assert_eq!(config.display.mode, DisplayMode::Terminal);

        let attrs = config.chart.to_attributes();
        assert_eq!(attrs.dimension(attributes::LINE_WIDTH), Ok(Some(Dimension::Px(2.5))));
        assert_eq!(attrs.get(attributes::SCORE_STROKE_WIDTH), None);
    }

    #[test]
    fn test_bad_color_is_rejected() {
        let result: Result<Config, _> = toml::from_str("[chart]\nline_color = \"black\"\n");
        assert!(result.is_err());
    }
}
