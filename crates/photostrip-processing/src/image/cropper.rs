//! Square cropping
//!
//! Every photo that goes into a strip is first normalized to a square: either the
//! centered square of the source (automatic) or a caller-chosen rectangle from
//! the manual crop dialog. Both resample the region to an exact output size.
//!
//! Rectangles that reach outside the source are rejected with
//! `StripError::InvalidArgument`; they are never clamped.

use image::{imageops, DynamicImage, GenericImageView};
use photostrip_core::{CropRectangle, StripError, StripResult};

use crate::compression::{EncodeOptions, EncodedImage, ImageCompressor};
use crate::image::decoder::{DecodeOptions, ImageDecoder};
use crate::image::resize::ImageResize;

pub struct SquareCropper;

impl SquareCropper {
    /// Centered square region of a `width` x `height` source.
    ///
    /// Landscape sources keep their full height, everything else (square included)
    /// keeps its full width. Offsets round down.
    pub fn center_square(width: u32, height: u32) -> CropRectangle {
        if width > height {
            let x0 = (width - height) / 2;
            CropRectangle::new(x0 as i64, 0, height as i64, height as i64)
        } else {
            let y0 = (height - width) / 2;
            CropRectangle::new(0, y0 as i64, width as i64, width as i64)
        }
    }

    /// Crop the centered square of `source` and resample it to `target_size`.
    pub fn crop_to_square(source: &DynamicImage, target_size: u32) -> StripResult<DynamicImage> {
        Self::check_size(target_size)?;

        let (width, height) = source.dimensions();
        let region = Self::center_square(width, height);
        tracing::debug!(
            source_width = width,
            source_height = height,
            x = region.x,
            y = region.y,
            side = region.width,
            target_size,
            "Center-cropping to square"
        );

        Ok(Self::extract(source, &region, target_size))
    }

    /// Crop a caller-supplied rectangle and resample it to `output_size` square.
    ///
    /// The rectangle is not required to be square; a non-square region is stretched.
    pub fn crop_to_rectangle(
        source: &DynamicImage,
        rect: &CropRectangle,
        output_size: u32,
    ) -> StripResult<DynamicImage> {
        Self::check_size(output_size)?;

        let (width, height) = source.dimensions();
        rect.validate_within(width, height)?;
        if !rect.is_square() {
            tracing::debug!(
                width = rect.width,
                height = rect.height,
                "Manual crop rectangle is not square"
            );
        }

        Ok(Self::extract(source, rect, output_size))
    }

    /// Decode, center-crop and encode in one call.
    pub fn crop_bytes_to_square(
        data: &[u8],
        target_size: u32,
        decode: DecodeOptions,
        encode: EncodeOptions,
    ) -> StripResult<EncodedImage> {
        Self::check_size(target_size)?;
        let source = ImageDecoder::decode(data, decode)?;
        let square = Self::crop_to_square(&source, target_size)?;
        ImageCompressor::compress(&square, encode)
    }

    /// Decode, crop a caller-supplied rectangle and encode in one call.
    pub fn crop_bytes_to_rectangle(
        data: &[u8],
        rect: &CropRectangle,
        output_size: u32,
        decode: DecodeOptions,
        encode: EncodeOptions,
    ) -> StripResult<EncodedImage> {
        Self::check_size(output_size)?;
        let source = ImageDecoder::decode(data, decode)?;
        let square = Self::crop_to_rectangle(&source, rect, output_size)?;
        ImageCompressor::compress(&square, encode)
    }

    fn check_size(size: u32) -> StripResult<()> {
        if size == 0 {
            return Err(StripError::invalid_argument(
                "Target size must be a positive integer",
            ));
        }
        Ok(())
    }

    /// `region` must already be inside `source`.
    fn extract(source: &DynamicImage, region: &CropRectangle, size: u32) -> DynamicImage {
        let cropped = imageops::crop_imm(
            source,
            region.x as u32,
            region.y as u32,
            region.width as u32,
            region.height as u32,
        )
        .to_image();

        ImageResize::resize_exact(DynamicImage::ImageRgba8(cropped), size, size)
    }
}
