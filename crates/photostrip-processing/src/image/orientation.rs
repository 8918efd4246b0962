use image::{imageops, DynamicImage};

/// Image orientation operations (rotation and flipping)
pub struct ImageOrientation;

impl ImageOrientation {
    /// Rotation and flip needed to display an image with the given EXIF orientation
    /// upright. Returns (rotate_angle, flip_horizontal); the flip is applied after the rotation.
    pub fn orientation_transforms(orientation: u8) -> (Option<u16>, bool) {
        match orientation {
            2 => (None, true),
            3 => (Some(180), false),
            4 => (Some(180), true),
            5 => (Some(90), true),
            6 => (Some(90), false),
            7 => (Some(270), true),
            8 => (Some(270), false),
            _ => (None, false),
        }
    }

    /// Apply EXIF orientation correction to an image
    pub fn apply_exif_orientation(mut img: DynamicImage, orientation: u8) -> DynamicImage {
        let (rotate, flip_h) = Self::orientation_transforms(orientation);
        if rotate.is_none() && !flip_h {
            return img;
        }

        tracing::debug!(
            orientation,
            rotate = ?rotate,
            flip_horizontal = flip_h,
            "Applying EXIF orientation"
        );

        if let Some(angle) = rotate {
            img = Self::rotate_by_angle(img, angle);
        }
        if flip_h {
            img = DynamicImage::ImageRgba8(imageops::flip_horizontal(&img.to_rgba8()));
        }
        img
    }

    /// Rotate image by 90, 180 or 270 degrees clockwise. Other angles are a no-op.
    pub fn rotate_by_angle(img: DynamicImage, angle: u16) -> DynamicImage {
        match angle {
            90 => DynamicImage::ImageRgba8(imageops::rotate90(&img.to_rgba8())),
            180 => DynamicImage::ImageRgba8(imageops::rotate180(&img.to_rgba8())),
            270 => DynamicImage::ImageRgba8(imageops::rotate270(&img.to_rgba8())),
            _ => img,
        }
    }
}
