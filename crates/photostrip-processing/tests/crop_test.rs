mod helpers;

use helpers::fixtures::{
    create_corrupt_image, create_jpeg_with_orientation, create_landscape_png,
    create_portrait_png, create_test_png, BLUE, GREEN, RED,
};
use image::GenericImageView;
use photostrip_core::{CropRectangle, StripError};
use photostrip_processing::{
    DecodeOptions, EncodeOptions, ImageDecoder, OutputFormat, SquareCropper,
};

fn decode(data: &[u8]) -> image::DynamicImage {
    image::load_from_memory(data).expect("Failed to decode output")
}

#[test]
fn test_landscape_keeps_centered_square() {
    let source = create_landscape_png(640, 480, RED, GREEN);
    let encoded = SquareCropper::crop_bytes_to_square(
        &source,
        480,
        DecodeOptions::default(),
        EncodeOptions::png(),
    )
    .unwrap();

    assert_eq!((encoded.width, encoded.height), (480, 480));
    let square = decode(&encoded.data).to_rgba8();
    assert!(square.pixels().all(|p| *p == GREEN));
}

#[test]
fn test_portrait_keeps_centered_square() {
    let source = create_portrait_png(300, 500, RED, BLUE);
    let encoded = SquareCropper::crop_bytes_to_square(
        &source,
        300,
        DecodeOptions::default(),
        EncodeOptions::png(),
    )
    .unwrap();

    let square = decode(&encoded.data).to_rgba8();
    assert_eq!(square.dimensions(), (300, 300));
    assert!(square.pixels().all(|p| *p == BLUE));
}

#[test]
fn test_output_is_exact_target_size() {
    for (w, h) in [(1920, 1080), (1080, 1920), (333, 333), (7, 3)] {
        let source = create_test_png(w, h, RED);
        let encoded = SquareCropper::crop_bytes_to_square(
            &source,
            400,
            DecodeOptions::default(),
            EncodeOptions::png(),
        )
        .unwrap();
        assert_eq!(decode(&encoded.data).dimensions(), (400, 400), "{}x{}", w, h);
    }
}

#[test]
fn test_jpeg_output() {
    let source = create_test_png(50, 40, RED);
    let encoded = SquareCropper::crop_bytes_to_square(
        &source,
        32,
        DecodeOptions::default(),
        OutputFormat::Jpeg.into(),
    )
    .unwrap();
    assert_eq!(encoded.content_type, "image/jpeg");
    assert_eq!(decode(&encoded.data).dimensions(), (32, 32));
}

#[test]
fn test_corrupt_source_is_decode_error() {
    let result = SquareCropper::crop_bytes_to_square(
        &create_corrupt_image(),
        400,
        DecodeOptions::default(),
        EncodeOptions::png(),
    );
    assert!(matches!(result, Err(StripError::Decode { index: None, .. })));
}

#[test]
fn test_manual_crop_within_bounds() {
    let source = create_landscape_png(300, 100, RED, GREEN);
    let rect = CropRectangle::parse("100,0,100,100").unwrap();
    let encoded = SquareCropper::crop_bytes_to_rectangle(
        &source,
        &rect,
        50,
        DecodeOptions::default(),
        EncodeOptions::png(),
    )
    .unwrap();
    let square = decode(&encoded.data).to_rgba8();
    assert_eq!(square.dimensions(), (50, 50));
    assert!(square.pixels().all(|p| *p == GREEN));
}

#[test]
fn test_manual_crop_past_edge_is_rejected() {
    let source = create_test_png(300, 100, RED);
    let rect = CropRectangle::new(250, 0, 100, 100);
    let result = SquareCropper::crop_bytes_to_rectangle(
        &source,
        &rect,
        100,
        DecodeOptions::default(),
        EncodeOptions::png(),
    );
    assert!(matches!(result, Err(StripError::InvalidArgument(_))));
}

#[test]
fn test_exif_rotation_applied_before_crop() {
    let source = create_jpeg_with_orientation(40, 20, 6);
    assert_eq!(ImageDecoder::read_exif_orientation(&source), 6);

    let metadata = ImageDecoder::inspect(&source).unwrap();
    assert_eq!((metadata.width, metadata.height), (40, 20));
    assert_eq!(metadata.exif_orientation, Some(6));
    assert_eq!(metadata.oriented_dimensions(), (20, 40));

    let upright = ImageDecoder::decode(&source, DecodeOptions::default()).unwrap();
    assert_eq!(upright.dimensions(), (20, 40));

    let raw = ImageDecoder::decode(&source, DecodeOptions { autorotate: false }).unwrap();
    assert_eq!(raw.dimensions(), (40, 20));
}
