//! Photostrip Core Library
//!
//! Domain models, error types and configuration shared by the image pipeline
//! and its callers. Nothing here touches pixels.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;

// Re-export commonly used types
pub use config::StripConfig;
pub use error::{ErrorMetadata, LogLevel, StripError, StripResult};
pub use models::{
    BackgroundSpec, BoothConfig, BoothSession, CaptureMode, Color, CropRectangle, ItemPlacement,
    LayoutSpec, Panel, SessionError, Theme,
};
