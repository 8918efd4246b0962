use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

pub const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);
pub const GREEN: Rgba<u8> = Rgba([0, 255, 0, 255]);
pub const BLUE: Rgba<u8> = Rgba([0, 0, 255, 255]);

fn encode(img: &RgbaImage, format: ImageFormat) -> Vec<u8> {
    let mut buffer = Vec::new();
    let dynamic = if format == ImageFormat::Jpeg {
        DynamicImage::ImageRgb8(DynamicImage::ImageRgba8(img.clone()).to_rgb8())
    } else {
        DynamicImage::ImageRgba8(img.clone())
    };
    dynamic
        .write_to(&mut Cursor::new(&mut buffer), format)
        .expect("Failed to encode fixture");
    buffer
}

/// Solid-color PNG
pub fn create_test_png(width: u32, height: u32, color: Rgba<u8>) -> Vec<u8> {
    encode(&RgbaImage::from_pixel(width, height, color), ImageFormat::Png)
}

/// Solid-color JPEG
pub fn create_test_jpeg(width: u32, height: u32, color: Rgba<u8>) -> Vec<u8> {
    encode(&RgbaImage::from_pixel(width, height, color), ImageFormat::Jpeg)
}

/// Landscape PNG whose centered square is `center` and whose side margins are `edge`.
pub fn create_landscape_png(width: u32, height: u32, edge: Rgba<u8>, center: Rgba<u8>) -> Vec<u8> {
    let margin = (width - height) / 2;
    let img = RgbaImage::from_fn(width, height, |x, _| {
        if x < margin || x >= margin + height {
            edge
        } else {
            center
        }
    });
    encode(&img, ImageFormat::Png)
}

/// Portrait PNG whose centered square is `center` and whose top/bottom margins are `edge`.
pub fn create_portrait_png(width: u32, height: u32, edge: Rgba<u8>, center: Rgba<u8>) -> Vec<u8> {
    let margin = (height - width) / 2;
    let img = RgbaImage::from_fn(width, height, |_, y| {
        if y < margin || y >= margin + width {
            edge
        } else {
            center
        }
    });
    encode(&img, ImageFormat::Png)
}

/// JPEG carrying an EXIF block with the given orientation tag.
pub fn create_jpeg_with_orientation(width: u32, height: u32, orientation: u16) -> Vec<u8> {
    let jpeg = create_test_jpeg(width, height, RED);

    // Big-endian TIFF with a single IFD0 entry: Orientation (0x0112), SHORT, count 1.
    let mut tiff = Vec::new();
    tiff.extend_from_slice(b"MM\x00\x2a\x00\x00\x00\x08");
    tiff.extend_from_slice(&1u16.to_be_bytes());
    tiff.extend_from_slice(&0x0112u16.to_be_bytes());
    tiff.extend_from_slice(&3u16.to_be_bytes());
    tiff.extend_from_slice(&1u32.to_be_bytes());
    tiff.extend_from_slice(&orientation.to_be_bytes());
    tiff.extend_from_slice(&[0, 0]);
    tiff.extend_from_slice(&0u32.to_be_bytes());

    let mut app1 = Vec::new();
    app1.extend_from_slice(&[0xff, 0xe1]);
    app1.extend_from_slice(&((2 + 6 + tiff.len()) as u16).to_be_bytes());
    app1.extend_from_slice(b"Exif\x00\x00");
    app1.extend_from_slice(&tiff);

    // Insert right after SOI.
    let mut out = Vec::with_capacity(jpeg.len() + app1.len());
    out.extend_from_slice(&jpeg[..2]);
    out.extend_from_slice(&app1);
    out.extend_from_slice(&jpeg[2..]);
    out
}

/// Bytes that no decoder recognizes.
pub fn create_corrupt_image() -> Vec<u8> {
    b"this is not an image at all".to_vec()
}
