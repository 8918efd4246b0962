//! Configuration module
//!
//! Defaults for strip rendering, overridable through `PHOTOSTRIP_*` environment
//! variables (a `.env` file is loaded first when present).

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::constants::{
    CLASSIC_BORDER, CLASSIC_GAP, CLASSIC_ITEM_SIZE, CLASSIC_PADDING, DEFAULT_JPEG_QUALITY,
    DEFAULT_SQUARE_SIZE,
};
use crate::models::background::Theme;
use crate::models::layout::LayoutSpec;

#[derive(Clone, Debug, PartialEq)]
pub struct StripConfig {
    /// Side of the square each source photo is cropped to.
    pub square_size: u32,
    pub item_size: u32,
    pub border_width: u32,
    pub padding: u32,
    pub gap: u32,
    pub theme: Theme,
    /// Font used for header text. Without it the header band stays blank.
    pub font_path: Option<PathBuf>,
    pub jpeg_quality: u8,
    /// Apply EXIF orientation when decoding sources.
    pub autorotate: bool,
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            square_size: DEFAULT_SQUARE_SIZE,
            item_size: CLASSIC_ITEM_SIZE,
            border_width: CLASSIC_BORDER,
            padding: CLASSIC_PADDING,
            gap: CLASSIC_GAP,
            theme: Theme::default(),
            font_path: None,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            autorotate: true,
        }
    }
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}

impl StripConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let theme = match env::var("PHOTOSTRIP_THEME") {
            Ok(name) => name
                .parse::<Theme>()
                .map_err(|e| anyhow::anyhow!("PHOTOSTRIP_THEME: {}", e))?,
            Err(_) => defaults.theme,
        };

        let font_path = env::var("PHOTOSTRIP_FONT_PATH")
            .ok()
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        let autorotate = env::var("PHOTOSTRIP_AUTOROTATE")
            .map(|v| !matches!(v.trim().to_lowercase().as_str(), "false" | "0" | "no" | "off"))
            .unwrap_or(defaults.autorotate);

        let config = Self {
            square_size: env_parse("PHOTOSTRIP_SQUARE_SIZE", defaults.square_size),
            item_size: env_parse("PHOTOSTRIP_ITEM_SIZE", defaults.item_size),
            border_width: env_parse("PHOTOSTRIP_BORDER", defaults.border_width),
            padding: env_parse("PHOTOSTRIP_PADDING", defaults.padding),
            gap: env_parse("PHOTOSTRIP_GAP", defaults.gap),
            theme,
            font_path,
            jpeg_quality: env_parse("PHOTOSTRIP_JPEG_QUALITY", defaults.jpeg_quality),
            autorotate,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.square_size == 0 {
            return Err(anyhow::anyhow!("PHOTOSTRIP_SQUARE_SIZE must be positive"));
        }
        if self.item_size == 0 {
            return Err(anyhow::anyhow!("PHOTOSTRIP_ITEM_SIZE must be positive"));
        }
        if !(1..=100).contains(&self.jpeg_quality) {
            return Err(anyhow::anyhow!(
                "PHOTOSTRIP_JPEG_QUALITY must be between 1 and 100, got {}",
                self.jpeg_quality
            ));
        }
        Ok(())
    }

    /// Single-column layout built from the configured metrics.
    pub fn column_layout(&self) -> LayoutSpec {
        LayoutSpec::column(self.item_size, self.border_width, self.padding, self.gap)
    }
}
