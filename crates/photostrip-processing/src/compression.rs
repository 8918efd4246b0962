//! Output encoding for cropped photos and finished strips.

use bytes::Bytes;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, GenericImageView, ImageFormat};
use photostrip_core::constants::DEFAULT_JPEG_QUALITY;
use photostrip_core::{StripError, StripResult};
use std::fmt;
use std::io::Cursor;
use std::str::FromStr;

/// Output format for encoded images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Png,
    Jpeg,
    WebP,
}

impl OutputFormat {
    pub fn parse(s: &str) -> StripResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpeg" | "jpg" => Ok(OutputFormat::Jpeg),
            "webp" => Ok(OutputFormat::WebP),
            "pdf" => Err(StripError::encoding(
                "PDF output is produced by wrapping the PNG strip; request png instead",
            )),
            _ => Err(StripError::encoding(format!("Unsupported output format: {}", s))),
        }
    }

    /// Pick a format from a file name, e.g. the CLI output path.
    pub fn from_extension(ext: &str) -> StripResult<Self> {
        Self::parse(ext)
    }

    pub fn to_mime_type(self) -> &'static str {
        match self {
            OutputFormat::Png => "image/png",
            OutputFormat::Jpeg => "image/jpeg",
            OutputFormat::WebP => "image/webp",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
            OutputFormat::WebP => "webp",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = StripError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Format plus the knobs that only some formats use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    pub format: OutputFormat,
    /// JPEG quality, 1-100. Ignored by lossless formats.
    pub jpeg_quality: u8,
}

impl EncodeOptions {
    pub fn png() -> Self {
        OutputFormat::Png.into()
    }

    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality;
        self
    }
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self::png()
    }
}

impl From<OutputFormat> for EncodeOptions {
    fn from(format: OutputFormat) -> Self {
        Self {
            format,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
        }
    }
}

/// Encoded image bytes tagged with their MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub data: Bytes,
    pub content_type: &'static str,
    pub width: u32,
    pub height: u32,
}

/// A finished strip as handed back to the caller.
pub type CompositeResult = EncodedImage;

/// Main compression service
pub struct ImageCompressor;

impl ImageCompressor {
    /// Encode image in the requested format
    pub fn compress(img: &DynamicImage, options: EncodeOptions) -> StripResult<EncodedImage> {
        let (width, height) = img.dimensions();
        let data = match options.format {
            OutputFormat::Png => Self::compress_png(img)?,
            OutputFormat::Jpeg => Self::compress_jpeg(img, options.jpeg_quality)?,
            OutputFormat::WebP => Self::compress_webp(img)?,
        };

        tracing::debug!(
            format = %options.format,
            width,
            height,
            size_bytes = data.len(),
            "Encoded image"
        );

        Ok(EncodedImage {
            data,
            content_type: options.format.to_mime_type(),
            width,
            height,
        })
    }

    fn compress_png(img: &DynamicImage) -> StripResult<Bytes> {
        let (width, height) = img.dimensions();
        let mut buffer = Vec::with_capacity((width as usize) * (height as usize));
        let mut cursor = Cursor::new(&mut buffer);

        img.write_to(&mut cursor, ImageFormat::Png)
            .map_err(|e| StripError::encoding(format!("PNG encoding failed: {}", e)))?;

        Ok(Bytes::from(buffer))
    }

    /// JPEG has no alpha channel; the image is flattened to RGB first.
    fn compress_jpeg(img: &DynamicImage, quality: u8) -> StripResult<Bytes> {
        if !(1..=100).contains(&quality) {
            return Err(StripError::encoding(format!(
                "JPEG quality must be between 1 and 100, got {}",
                quality
            )));
        }

        let rgb_img = img.to_rgb8();
        let mut buffer = Vec::new();

        JpegEncoder::new_with_quality(&mut buffer, quality)
            .encode_image(&rgb_img)
            .map_err(|e| StripError::encoding(format!("JPEG encoding failed: {}", e)))?;

        Ok(Bytes::from(buffer))
    }

    /// Lossless WebP from RGBA.
    fn compress_webp(img: &DynamicImage) -> StripResult<Bytes> {
        let rgba_img = DynamicImage::ImageRgba8(img.to_rgba8());
        let mut buffer = Vec::new();
        let mut cursor = Cursor::new(&mut buffer);

        rgba_img
            .write_to(&mut cursor, ImageFormat::WebP)
            .map_err(|e| StripError::encoding(format!("WebP encoding failed: {}", e)))?;

        Ok(Bytes::from(buffer))
    }
}
