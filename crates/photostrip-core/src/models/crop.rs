use serde::{Deserialize, Serialize};

use crate::error::{StripError, StripResult};

/// Caller-chosen crop region in source pixel coordinates.
///
/// Coordinates are signed so that an interactive crop widget dragged past the
/// image edge can be reported as-is and rejected by [`CropRectangle::validate_within`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRectangle {
    pub x: i64,
    pub y: i64,
    pub width: i64,
    pub height: i64,
}

impl CropRectangle {
    pub fn new(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Parse `x,y,width,height`.
    pub fn parse(s: &str) -> StripResult<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            return Err(StripError::invalid_argument(
                "Invalid crop rectangle format. Expected: x,y,width,height",
            ));
        }

        let mut values = [0i64; 4];
        for (value, part) in values.iter_mut().zip(&parts) {
            *value = part.parse::<i64>().map_err(|_| {
                StripError::invalid_argument(format!("Invalid crop coordinate: {}", part))
            })?;
        }

        Ok(Self::new(values[0], values[1], values[2], values[3]))
    }

    /// Reject rectangles that are empty or not fully inside a `width x height` source.
    /// Out-of-bounds rectangles are never clamped.
    pub fn validate_within(&self, width: u32, height: u32) -> StripResult<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(StripError::invalid_argument(format!(
                "Crop rectangle must have a positive size, got {}x{}",
                self.width, self.height
            )));
        }
        if self.x < 0 || self.y < 0 {
            return Err(StripError::invalid_argument(format!(
                "Crop origin ({}, {}) is outside the image",
                self.x, self.y
            )));
        }

        let right = self.x.saturating_add(self.width);
        let bottom = self.y.saturating_add(self.height);
        if right > width as i64 || bottom > height as i64 {
            return Err(StripError::invalid_argument(format!(
                "Crop rectangle {}x{} at ({}, {}) exceeds image dimensions ({}, {})",
                self.width, self.height, self.x, self.y, width, height
            )));
        }
        Ok(())
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }
}
