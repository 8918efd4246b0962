//! Image processing module
//!
//! - Decoding with EXIF orientation (decoder, orientation)
//! - Square cropping (cropper, resize)
//! - Strip compositing (compositor, canvas, header)

pub mod canvas;
pub mod compositor;
pub mod cropper;
pub mod decoder;
pub mod header;
pub mod orientation;
pub mod resize;

pub use compositor::{StripCompositor, StripStyle};
pub use cropper::SquareCropper;
pub use decoder::{DecodeOptions, ImageDecoder};
pub use header::HeaderSpec;
pub use orientation::ImageOrientation;
pub use resize::ImageResize;
