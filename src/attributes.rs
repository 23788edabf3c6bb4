//! Declarative construction-time attributes (`name -> value`).

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{GeometryError, Result};

pub const ANGLE_COUNT: &str = "angleCount";
pub const HIERARCHY_COUNT: &str = "hierarchyCount";
pub const MAX_SCORE: &str = "maxScore";
pub const LINE_COLOR: &str = "lineColor";
pub const LINE_WIDTH: &str = "lineWidth";
pub const SCORE_COLOR: &str = "scoreColor";
pub const SCORE_STROKE_COLOR: &str = "scoreStrokeColor";
pub const SCORE_STROKE_WIDTH: &str = "scoreStrokeWidth";
pub const DISABLE_SCORE_STROKE: &str = "disableScoreStroke";
pub const SPACING: &str = "spacing";

/// A length in physical pixels or density-independent units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Dimension {
    Px(f32),
    Dp(f32),
}

impl Dimension {
    /// Resolve to pixels for the given display density (pixels per dp).
    pub fn resolve(&self, density: f32) -> f32 {
        match self {
            Dimension::Px(px) => *px,
            Dimension::Dp(dp) => dp * density,
        }
    }

    /// Resolve to whole pixels, rounding dp values half up.
    pub fn resolve_px(&self, density: f32) -> i32 {
        match self {
            Dimension::Px(px) => *px as i32,
            Dimension::Dp(dp) => (dp * density + 0.5) as i32,
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dimension::Px(px) => write!(f, "{}px", px),
            Dimension::Dp(dp) => write!(f, "{}dp", dp),
        }
    }
}

impl FromStr for Dimension {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        let (num, is_dp) = if let Some(n) = s.strip_suffix("dp") {
            (n, true)
        } else if let Some(n) = s.strip_suffix("dip") {
            (n, true)
        } else {
            (s.strip_suffix("px").unwrap_or(s), false)
        };
        let value: f32 = num.trim().parse().map_err(|_| format!("not a valid number: {}", num))?;
        Ok(if is_dp { Dimension::Dp(value) } else { Dimension::Px(value) })
    }
}

impl Serialize for Dimension {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Dimension {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Dimension::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Attribute set handed to a component at construction time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Attributes {
    values: BTreeMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl ToString) -> &mut Self {
        self.values.insert(name.into(), value.to_string());
        self
    }

    pub fn with(mut self, name: impl Into<String>, value: impl ToString) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Fail on the first attribute not in `known`.
    pub fn check_known(&self, known: &[&str]) -> Result<()> {
        match self.names().find(|name| !known.contains(name)) {
            Some(name) => Err(GeometryError::UnknownAttribute(name.to_string())),
            None => Ok(()),
        }
    }

    pub fn int(&self, name: &str) -> Result<Option<i64>> {
        self.parsed(name, |v| v.parse().ok())
    }

    pub fn float(&self, name: &str) -> Result<Option<f32>> {
        self.parsed(name, |v| v.parse().ok())
    }

    pub fn boolean(&self, name: &str) -> Result<Option<bool>> {
        self.parsed(name, |v| v.parse().ok())
    }

    pub fn color(&self, name: &str) -> Result<Option<Color>> {
        self.parsed(name, Color::from_hex)
    }

    pub fn dimension(&self, name: &str) -> Result<Option<Dimension>> {
        self.parsed(name, |v| v.parse().ok())
    }

    fn parsed<T>(&self, name: &str, parse: impl Fn(&str) -> Option<T>) -> Result<Option<T>> {
        match self.get(name) {
            None => Ok(None),
            Some(value) => parse(value.trim()).map(Some).ok_or_else(|| {
                GeometryError::InvalidAttribute { name: name.to_string(), value: value.to_string() }
            }),
        }
    }
}

impl<K: Into<String>, V: ToString> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Attributes::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}
