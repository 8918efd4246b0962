//! Shared constants for strip geometry and booth defaults.

/// Side of the square every photo is normalized to.
pub const DEFAULT_SQUARE_SIZE: u32 = 400;

// Plain upload strip
pub const CLASSIC_ITEM_SIZE: u32 = 400;
pub const CLASSIC_BORDER: u32 = 1;
pub const CLASSIC_PADDING: u32 = 20;
pub const CLASSIC_GAP: u32 = 10;

// Themed strip with title band
pub const THEMED_ITEM_WIDTH: u32 = 360;
pub const THEMED_ITEM_HEIGHT: u32 = 300;
pub const THEMED_SPACING: u32 = 20;
pub const THEMED_HEADER_HEIGHT: u32 = 80;
pub const RETRO_BORDER: u32 = 5;
/// Photo count that switches the themed strip to a two-column grid.
pub const GRID_PHOTO_COUNT: usize = 6;

// Header text
pub const DEFAULT_HEADER_TITLE: &str = "FUNKY PHOTOBOOTH";
pub const HEADER_TITLE_SCALE: f32 = 24.0;
pub const HEADER_DATE_SCALE: f32 = 14.0;

// Booth session
pub const MIN_PHOTO_COUNT: usize = 1;
pub const MAX_PHOTO_COUNT: usize = 6;
pub const DEFAULT_PHOTO_COUNT: usize = 4;

pub const DEFAULT_JPEG_QUALITY: u8 = 90;
