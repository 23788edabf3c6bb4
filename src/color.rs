use palette::rgb::channels::Argb;
use palette::Srgba;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Opaque black, the default grid line color.
pub const DEFAULT_LINE_COLOR: Color = Color::from_argb(0xFF00_0000);
/// Translucent orange fill for the score shape.
pub const DEFAULT_SCORE_COLOR: Color = Color::from_argb(0x80F6_5801);
/// Opaque orange outline for the score shape.
pub const DEFAULT_SCORE_STROKE_COLOR: Color = Color::from_argb(0xFFF6_5801);

/// Straight (non pre-multiplied) ARGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    pub const fn from_argb(argb: u32) -> Self {
        Self(argb)
    }

    pub fn to_srgba(self) -> Srgba<u8> {
        Srgba::from_u32::<Argb>(self.0)
    }

    pub fn from_srgba(color: Srgba<u8>) -> Self {
        Self(color.into_u32::<Argb>())
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        let c = self.to_srgba();
        (c.red, c.green, c.blue)
    }

    pub fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Parse from hex string like "#80F65801" (ARGB) or "#F65801" (opaque RGB)
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim().trim_start_matches('#');
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        match hex.len() {
            6 => u32::from_str_radix(hex, 16).ok().map(|rgb| Self(0xFF00_0000 | rgb)),
            8 => u32::from_str_radix(hex, 16).ok().map(Self),
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08X}", self.0)
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s).ok_or_else(|| format!("Invalid color '{}': expected #RRGGBB or #AARRGGBB", s))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Composite `src` over the straight RGBA pixel `dst` (source-over).
pub fn blend_over(src: Color, dst: [u8; 4]) -> [u8; 4] {
    let s: Srgba<f32> = src.to_srgba().into_format();
    let d: Srgba<f32> = Srgba::new(dst[0], dst[1], dst[2], dst[3]).into_format();

    let out_alpha = s.alpha + d.alpha * (1.0 - s.alpha);
    if out_alpha <= 0.0 {
        return [0, 0, 0, 0];
    }
    let mix = |sc: f32, dc: f32| (sc * s.alpha + dc * d.alpha * (1.0 - s.alpha)) / out_alpha;

    let out = Srgba::new(mix(s.red, d.red), mix(s.green, d.green), mix(s.blue, d.blue), out_alpha);
    let out: Srgba<u8> = out.into_format();
    [out.red, out.green, out.blue, out.alpha]
}
