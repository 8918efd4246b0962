//! Source decoding - bytes to pixels, metadata inspection and EXIF orientation

use bytes::Bytes;
use image::{DynamicImage, ImageReader};
use photostrip_core::{StripError, StripResult};
use std::io::Cursor;
use tokio::task::JoinSet;

use crate::image::orientation::ImageOrientation;
use crate::metadata::ImageMetadata;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Rotate/flip according to the EXIF orientation tag, like a browser does.
    pub autorotate: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self { autorotate: true }
    }
}

pub struct ImageDecoder;

impl ImageDecoder {
    /// Decode an uploaded file or camera frame.
    pub fn decode(data: &[u8], options: DecodeOptions) -> StripResult<DynamicImage> {
        if data.is_empty() {
            return Err(StripError::decode("empty image data"));
        }

        let reader = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| StripError::decode(e.to_string()))?;
        if reader.format().is_none() {
            return Err(StripError::decode("unrecognized image format"));
        }

        let img = reader
            .decode()
            .map_err(|e| StripError::decode(e.to_string()))?;

        if !options.autorotate {
            return Ok(img);
        }

        let orientation = Self::read_exif_orientation(data);
        Ok(ImageOrientation::apply_exif_orientation(img, orientation))
    }

    /// Read format and dimensions from the header without decoding pixel data.
    pub fn inspect(data: &[u8]) -> StripResult<ImageMetadata> {
        let reader = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| StripError::decode(e.to_string()))?;
        let format = reader
            .format()
            .map(|f| format!("{:?}", f))
            .ok_or_else(|| StripError::decode("unrecognized image format"))?;
        let (width, height) = reader
            .into_dimensions()
            .map_err(|e| StripError::decode(e.to_string()))?;

        let exif_orientation = Self::read_exif_orientation(data);

        Ok(ImageMetadata {
            width,
            height,
            format,
            size_bytes: Some(data.len() as u64),
            exif_orientation: if exif_orientation != 1 {
                Some(exif_orientation)
            } else {
                None
            },
        })
    }

    /// Read EXIF orientation tag from image data.
    ///
    /// Returns orientation value (1-8) or 1 (normal) if the container has no EXIF
    /// block or the tag is missing or out of range.
    pub fn read_exif_orientation(data: &[u8]) -> u8 {
        let exif = match exif::Reader::new().read_from_container(&mut Cursor::new(data)) {
            Ok(exif) => exif,
            Err(_) => return 1,
        };

        exif.get_field(exif::Tag::Orientation, exif::In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .and_then(|value| u8::try_from(value).ok())
            .filter(|value| (1..=8).contains(value))
            .unwrap_or(1)
    }

    /// Decode every source, failing on the first (lowest-index) unreadable one.
    pub fn decode_all<T: AsRef<[u8]>>(
        sources: &[T],
        options: DecodeOptions,
    ) -> StripResult<Vec<DynamicImage>> {
        sources
            .iter()
            .enumerate()
            .map(|(index, data)| {
                Self::decode(data.as_ref(), options).map_err(|e| e.at_index(index))
            })
            .collect()
    }

    /// Decode sources concurrently on the blocking pool. The result keeps the
    /// caller's order; when several sources fail, the lowest index is reported.
    pub async fn decode_all_concurrent(
        sources: Vec<Bytes>,
        options: DecodeOptions,
    ) -> StripResult<Vec<DynamicImage>> {
        let count = sources.len();
        let mut tasks = JoinSet::new();
        for (index, data) in sources.into_iter().enumerate() {
            // Image decode is CPU-bound; run off the async pool to avoid blocking other tasks.
            tasks.spawn_blocking(move || (index, Self::decode(&data, options)));
        }

        let mut decoded: Vec<Option<DynamicImage>> = (0..count).map(|_| None).collect();
        let mut failure: Option<(usize, StripError)> = None;

        while let Some(joined) = tasks.join_next().await {
            let (index, result) = joined
                .map_err(|e| StripError::decode(format!("decode task failed: {}", e)))?;
            match result {
                Ok(img) => decoded[index] = Some(img),
                Err(err) => {
                    if failure.as_ref().map_or(true, |(first, _)| index < *first) {
                        failure = Some((index, err.at_index(index)));
                    }
                }
            }
        }

        if let Some((index, err)) = failure {
            tracing::warn!(index, error = %err, "Source image failed to decode");
            return Err(err);
        }

        decoded
            .into_iter()
            .enumerate()
            .map(|(index, img)| {
                img.ok_or_else(|| StripError::decode("image was not decoded").at_index(index))
            })
            .collect()
    }
}
