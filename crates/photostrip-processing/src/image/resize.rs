use image::{imageops::FilterType, DynamicImage, GenericImageView};

/// Image resize operations
pub struct ImageResize;

impl ImageResize {
    /// Select appropriate filter type based on resize ratio
    pub fn select_filter(
        orig_width: u32,
        orig_height: u32,
        new_width: u32,
        new_height: u32,
    ) -> FilterType {
        let width_ratio = orig_width as f32 / new_width as f32;
        let height_ratio = orig_height as f32 / new_height as f32;
        let max_ratio = width_ratio.max(height_ratio);

        if max_ratio > 2.0 {
            FilterType::Triangle
        } else if max_ratio > 1.5 {
            FilterType::CatmullRom
        } else {
            FilterType::Lanczos3
        }
    }

    /// Resize image to exact dimensions, ignoring aspect ratio.
    ///
    /// An image already at the target size is returned as-is so that a same-size
    /// crop stays pixel-identical.
    pub fn resize_exact(img: DynamicImage, width: u32, height: u32) -> DynamicImage {
        let (orig_width, orig_height) = img.dimensions();
        if (orig_width, orig_height) == (width, height) {
            return img;
        }

        let filter = Self::select_filter(orig_width, orig_height, width, height);
        tracing::debug!(
            from_width = orig_width,
            from_height = orig_height,
            width,
            height,
            filter = ?filter,
            "Resampling image"
        );
        img.resize_exact(width, height, filter)
    }
}
