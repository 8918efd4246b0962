//! Source image metadata

use serde::{Deserialize, Serialize};

/// What a caller can learn about a source photo without decoding its pixels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageMetadata {
    pub width: u32,
    pub height: u32,
    pub format: String,
    pub size_bytes: Option<u64>,
    pub exif_orientation: Option<u8>,
}

impl ImageMetadata {
    /// Dimensions as displayed, i.e. after applying the EXIF orientation.
    pub fn oriented_dimensions(&self) -> (u32, u32) {
        match self.exif_orientation {
            Some(5..=8) => (self.height, self.width),
            _ => (self.width, self.height),
        }
    }
}
