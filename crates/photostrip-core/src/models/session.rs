//! Booth session state
//!
//! The wizard a booth UI walks through: configure, capture, view the strip.
//! The session is owned by the caller; the cropper and compositor never see it.

use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use thiserror::Error;

use crate::constants::{DEFAULT_PHOTO_COUNT, MAX_PHOTO_COUNT, MIN_PHOTO_COUNT};
use crate::models::background::Theme;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Panel {
    Config,
    Capture,
    Strip,
}

impl Display for Panel {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Panel::Config => write!(f, "config"),
            Panel::Capture => write!(f, "capture"),
            Panel::Strip => write!(f, "strip"),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CaptureMode {
    Camera,
    #[default]
    Upload,
}

impl FromStr for CaptureMode {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "camera" | "webcam" => Ok(CaptureMode::Camera),
            "upload" => Ok(CaptureMode::Upload),
            _ => Err(SessionError::InvalidConfig(format!(
                "Invalid capture mode: {}",
                s
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct BoothConfig {
    pub photo_count: usize,
    pub mode: CaptureMode,
    pub theme: Theme,
}

impl Default for BoothConfig {
    fn default() -> Self {
        Self {
            photo_count: DEFAULT_PHOTO_COUNT,
            mode: CaptureMode::Upload,
            theme: Theme::default(),
        }
    }
}

impl BoothConfig {
    pub fn validate(&self) -> Result<(), SessionError> {
        if !(MIN_PHOTO_COUNT..=MAX_PHOTO_COUNT).contains(&self.photo_count) {
            return Err(SessionError::InvalidConfig(format!(
                "Photo count must be between {} and {}, got {}",
                MIN_PHOTO_COUNT, MAX_PHOTO_COUNT, self.photo_count
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Operation not available on the {actual} panel (expected {expected})")]
    WrongPanel { expected: Panel, actual: Panel },

    #[error("Maximum of {0} photos reached")]
    CapacityReached(usize),

    #[error("Need exactly {expected} photos, have {actual}")]
    NotEnoughPhotos { expected: usize, actual: usize },

    #[error("No photo at position {0}")]
    NoSuchPhoto(usize),
}

/// Caller-owned wizard state. `P` is whatever the UI stores per photo
/// (encoded bytes, a decoded image, a handle).
#[derive(Debug, Clone)]
pub struct BoothSession<P> {
    panel: Panel,
    config: BoothConfig,
    photos: Vec<P>,
}

impl<P> Default for BoothSession<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P> BoothSession<P> {
    pub fn new() -> Self {
        Self {
            panel: Panel::Config,
            config: BoothConfig::default(),
            photos: Vec::new(),
        }
    }

    pub fn panel(&self) -> Panel {
        self.panel
    }

    pub fn config(&self) -> &BoothConfig {
        &self.config
    }

    pub fn photos(&self) -> &[P] {
        &self.photos
    }

    pub fn remaining(&self) -> usize {
        self.config.photo_count.saturating_sub(self.photos.len())
    }

    pub fn is_full(&self) -> bool {
        self.remaining() == 0
    }

    fn expect_panel(&self, expected: Panel) -> Result<(), SessionError> {
        if self.panel != expected {
            return Err(SessionError::WrongPanel {
                expected,
                actual: self.panel,
            });
        }
        Ok(())
    }

    /// Accept a configuration and start capturing. Any previous photos are dropped.
    pub fn submit_config(&mut self, config: BoothConfig) -> Result<(), SessionError> {
        self.expect_panel(Panel::Config)?;
        config.validate()?;
        self.config = config;
        self.photos.clear();
        self.panel = Panel::Capture;
        Ok(())
    }

    pub fn add_photo(&mut self, photo: P) -> Result<(), SessionError> {
        self.expect_panel(Panel::Capture)?;
        if self.is_full() {
            return Err(SessionError::CapacityReached(self.config.photo_count));
        }
        self.photos.push(photo);
        Ok(())
    }

    /// Add a batch of uploads, keeping only as many as still fit.
    /// Returns the number of photos that were dropped.
    pub fn add_uploads<I>(&mut self, uploads: I) -> Result<usize, SessionError>
    where
        I: IntoIterator<Item = P>,
    {
        self.expect_panel(Panel::Capture)?;
        let mut dropped = 0;
        for photo in uploads {
            if self.is_full() {
                dropped += 1;
            } else {
                self.photos.push(photo);
            }
        }
        if dropped > 0 {
            tracing::debug!(
                dropped,
                photo_count = self.config.photo_count,
                "Dropped uploads beyond configured photo count"
            );
        }
        Ok(dropped)
    }

    /// Swap in a re-cropped version of an existing photo.
    pub fn replace_photo(&mut self, index: usize, photo: P) -> Result<P, SessionError> {
        self.expect_panel(Panel::Capture)?;
        let slot = self
            .photos
            .get_mut(index)
            .ok_or(SessionError::NoSuchPhoto(index))?;
        Ok(std::mem::replace(slot, photo))
    }

    pub fn remove_photo(&mut self, index: usize) -> Result<P, SessionError> {
        self.expect_panel(Panel::Capture)?;
        if index >= self.photos.len() {
            return Err(SessionError::NoSuchPhoto(index));
        }
        Ok(self.photos.remove(index))
    }

    /// Move on to the strip panel once every slot is filled.
    pub fn finish_capture(&mut self) -> Result<(), SessionError> {
        self.expect_panel(Panel::Capture)?;
        if self.photos.len() != self.config.photo_count {
            return Err(SessionError::NotEnoughPhotos {
                expected: self.config.photo_count,
                actual: self.photos.len(),
            });
        }
        self.panel = Panel::Strip;
        Ok(())
    }

    /// Step back one panel. Photos are kept.
    pub fn back(&mut self) {
        self.panel = match self.panel {
            Panel::Config | Panel::Capture => Panel::Config,
            Panel::Strip => Panel::Capture,
        };
    }

    pub fn start_over(&mut self) {
        *self = Self::new();
    }

    /// Hand out the ordered photos for compositing. Only valid on the strip panel.
    pub fn strip_photos(&self) -> Result<&[P], SessionError> {
        self.expect_panel(Panel::Strip)?;
        Ok(&self.photos)
    }
}
