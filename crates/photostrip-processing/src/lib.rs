//! Photostrip image pipeline
//!
//! Turns uploaded photos and camera frames into square crops and composites
//! ordered sequences of them into a single encoded photostrip.

pub mod compression;
pub mod image;
pub mod metadata;

pub use compression::{CompositeResult, EncodeOptions, EncodedImage, ImageCompressor, OutputFormat};
pub use crate::image::{
    DecodeOptions, HeaderSpec, ImageDecoder, SquareCropper, StripCompositor, StripStyle,
};
pub use metadata::ImageMetadata;
