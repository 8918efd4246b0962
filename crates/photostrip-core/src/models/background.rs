//! Canvas colors, backgrounds and the theme presets that select them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StripError;

/// 8-bit RGBA color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
    pub const BLACK: Color = Color::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 0xff }
    }

    /// Parse `#rrggbb` or `#rrggbbaa` (leading `#` optional).
    pub fn from_hex(s: &str) -> Result<Self, StripError> {
        let hex = s.trim().trim_start_matches('#');
        if !matches!(hex.len(), 6 | 8) || !hex.is_ascii() {
            return Err(StripError::invalid_argument(format!(
                "Invalid color: {}",
                s
            )));
        }

        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16)
                .map_err(|_| StripError::invalid_argument(format!("Invalid color: {}", s)))
        };

        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: if hex.len() == 8 { channel(6)? } else { 0xff },
        })
    }

    pub fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Linear interpolation between two colors, `t` clamped to `0.0..=1.0`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Color {
            r: mix(self.r, other.r),
            g: mix(self.g, other.g),
            b: mix(self.b, other.b),
            a: mix(self.a, other.a),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)?;
        if self.a != 0xff {
            write!(f, "{:02x}", self.a)?;
        }
        Ok(())
    }
}

/// How the whole canvas is filled before anything else is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BackgroundSpec {
    Solid(Color),
    /// Top row is `top`, bottom row is `bottom`.
    VerticalGradient { top: Color, bottom: Color },
}

impl BackgroundSpec {
    /// Color of canvas row `y` on a canvas `height` pixels tall.
    pub fn color_at_row(&self, y: u32, height: u32) -> Color {
        match *self {
            BackgroundSpec::Solid(color) => color,
            BackgroundSpec::VerticalGradient { top, bottom } => {
                if height <= 1 {
                    return top;
                }
                top.lerp(bottom, y as f32 / (height - 1) as f32)
            }
        }
    }
}

impl Default for BackgroundSpec {
    fn default() -> Self {
        BackgroundSpec::Solid(Color::WHITE)
    }
}

/// Visual theme picked on the configuration panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Classic,
    #[default]
    Minimal,
    Modern,
    Vintage,
    Neon,
    Retro,
}

const RETRO_LIGHT: Color = Color::rgb(0xfe, 0xf7, 0xcd);
const RETRO_AMBER: Color = Color::rgb(0xfb, 0xbf, 0x24);
const RETRO_BROWN: Color = Color::rgb(0x92, 0x40, 0x0e);

impl Theme {
    pub const ALL: [Theme; 6] = [
        Theme::Classic,
        Theme::Minimal,
        Theme::Modern,
        Theme::Vintage,
        Theme::Neon,
        Theme::Retro,
    ];

    pub fn background(self) -> BackgroundSpec {
        match self {
            Theme::Retro => BackgroundSpec::VerticalGradient {
                top: RETRO_LIGHT,
                bottom: RETRO_AMBER,
            },
            _ => BackgroundSpec::Solid(Color::WHITE),
        }
    }

    pub fn border_color(self) -> Color {
        match self {
            Theme::Retro => RETRO_BROWN,
            _ => Color::BLACK,
        }
    }

    pub fn text_color(self) -> Color {
        match self {
            Theme::Retro => RETRO_BROWN,
            _ => Color::BLACK,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Classic => "classic",
            Theme::Minimal => "minimal",
            Theme::Modern => "modern",
            Theme::Vintage => "vintage",
            Theme::Neon => "neon",
            Theme::Retro => "retro",
        }
    }
}

impl FromStr for Theme {
    type Err = StripError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "classic" => Ok(Theme::Classic),
            "minimal" | "minimalistic" => Ok(Theme::Minimal),
            "modern" => Ok(Theme::Modern),
            "vintage" => Ok(Theme::Vintage),
            "neon" => Ok(Theme::Neon),
            "retro" => Ok(Theme::Retro),
            _ => Err(StripError::invalid_argument(format!("Unknown theme: {}", s))),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
