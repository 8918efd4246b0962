//! Strip compositing
//!
//! Lays an ordered sequence of photos onto one canvas according to a
//! [`LayoutSpec`], then encodes it. Rendering order is fixed: background,
//! header, then for each photo its frame and the photo itself. Photos are drawn
//! in the order given, whatever order they were decoded in.

use bytes::Bytes;
use image::{DynamicImage, GenericImageView, RgbaImage};
use photostrip_core::{BackgroundSpec, Color, LayoutSpec, StripError, StripResult, Theme};

use crate::compression::{CompositeResult, EncodeOptions, ImageCompressor};
use crate::image::canvas::Canvas;
use crate::image::decoder::{DecodeOptions, ImageDecoder};
use crate::image::header::HeaderSpec;
use crate::image::resize::ImageResize;

/// Everything about a strip's look that is not geometry.
#[derive(Debug, Clone)]
pub struct StripStyle {
    pub background: BackgroundSpec,
    pub border_color: Color,
    pub header: Option<HeaderSpec>,
}

impl StripStyle {
    pub fn from_theme(theme: Theme) -> Self {
        Self {
            background: theme.background(),
            border_color: theme.border_color(),
            header: None,
        }
    }

    /// Theme colors plus a default header in the theme's text color.
    pub fn themed_with_header(theme: Theme) -> Self {
        Self::from_theme(theme).with_header(HeaderSpec::new(theme.text_color()))
    }

    pub fn with_header(mut self, header: HeaderSpec) -> Self {
        self.header = Some(header);
        self
    }
}

impl Default for StripStyle {
    fn default() -> Self {
        Self {
            background: BackgroundSpec::default(),
            border_color: Color::BLACK,
            header: None,
        }
    }
}

pub struct StripCompositor;

impl StripCompositor {
    /// Draw `images` onto a fresh canvas. Nothing is allocated for an empty input.
    pub fn render(
        images: &[DynamicImage],
        layout: &LayoutSpec,
        style: &StripStyle,
    ) -> StripResult<RgbaImage> {
        if images.is_empty() {
            return Err(StripError::EmptyInput);
        }

        let (width, height) = layout.canvas_size(images.len())?;
        tracing::debug!(
            count = images.len(),
            width,
            height,
            columns = layout.column_count(),
            "Laying out strip"
        );

        let mut canvas = Canvas::filled(width, height, &style.background);

        if let Some(header) = style.header.as_ref() {
            if layout.header_height > 0 {
                header.draw(&mut canvas, layout.header_height);
            } else {
                tracing::debug!("Layout reserves no header band; skipping header");
            }
        }

        let placements = layout.placements(images.len())?;
        for (image, placement) in images.iter().zip(placements) {
            let item = if image.dimensions() == (placement.width, placement.height) {
                image.to_rgba8()
            } else {
                ImageResize::resize_exact(image.clone(), placement.width, placement.height)
                    .to_rgba8()
            };

            Canvas::draw_frame(
                &mut canvas,
                placement.x,
                placement.y,
                placement.width,
                placement.height,
                layout.border_width,
                style.border_color,
            );
            Canvas::draw_item(&mut canvas, &item, placement.x, placement.y);
        }

        Ok(canvas)
    }

    /// Render and encode a strip from decoded photos.
    pub fn composite(
        images: &[DynamicImage],
        layout: &LayoutSpec,
        style: &StripStyle,
        encode: EncodeOptions,
    ) -> StripResult<CompositeResult> {
        let canvas = Self::render(images, layout, style)?;
        let result = ImageCompressor::compress(&DynamicImage::ImageRgba8(canvas), encode)?;

        tracing::info!(
            count = images.len(),
            width = result.width,
            height = result.height,
            content_type = result.content_type,
            size_bytes = result.data.len(),
            "Composited photostrip"
        );

        Ok(result)
    }

    /// Decode encoded photos in order and composite them. The first photo that
    /// fails to decode aborts the strip with its index.
    pub fn composite_bytes<T: AsRef<[u8]>>(
        sources: &[T],
        layout: &LayoutSpec,
        style: &StripStyle,
        decode: DecodeOptions,
        encode: EncodeOptions,
    ) -> StripResult<CompositeResult> {
        if sources.is_empty() {
            return Err(StripError::EmptyInput);
        }
        let images = ImageDecoder::decode_all(sources, decode)?;
        Self::composite(&images, layout, style, encode)
    }

    /// Async variant: photos are decoded concurrently on the blocking pool, then
    /// drawn in the caller's order. Reports the lowest failing index.
    pub async fn composite_encoded(
        sources: Vec<Bytes>,
        layout: LayoutSpec,
        style: StripStyle,
        decode: DecodeOptions,
        encode: EncodeOptions,
    ) -> StripResult<CompositeResult> {
        if sources.is_empty() {
            return Err(StripError::EmptyInput);
        }
        let images = ImageDecoder::decode_all_concurrent(sources, decode).await?;

        tokio::task::spawn_blocking(move || Self::composite(&images, &layout, &style, encode))
            .await
            .map_err(|e| StripError::encoding(format!("composite task failed: {}", e)))?
    }
}
