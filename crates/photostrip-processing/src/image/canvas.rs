use image::{imageops, Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;
use photostrip_core::{BackgroundSpec, Color};

/// Drawing primitives for the strip canvas.
pub struct Canvas;

impl Canvas {
    /// New canvas filled with `background`, one color per row.
    pub fn filled(width: u32, height: u32, background: &BackgroundSpec) -> RgbaImage {
        let mut canvas = RgbaImage::new(width, height);
        for (y, row) in canvas.enumerate_rows_mut() {
            let color = Rgba(background.color_at_row(y, height).to_rgba());
            for (_, _, pixel) in row {
                *pixel = color;
            }
        }
        canvas
    }

    /// Filled frame `border` pixels wider than the `width` x `height` item at
    /// `(x, y)` on every side, clipped to the canvas. Drawn before the item so the
    /// item covers its middle.
    pub fn draw_frame(
        canvas: &mut RgbaImage,
        x: u32,
        y: u32,
        width: u32,
        height: u32,
        border: u32,
        color: Color,
    ) {
        if border == 0 {
            return;
        }
        let border = border as i64;
        let left = (x as i64 - border).max(0);
        let top = (y as i64 - border).max(0);
        let right = (x as i64 + width as i64 + border).min(canvas.width() as i64);
        let bottom = (y as i64 + height as i64 + border).min(canvas.height() as i64);
        if left >= right || top >= bottom {
            return;
        }

        let (Ok(left), Ok(top), Ok(w), Ok(h)) = (
            i32::try_from(left),
            i32::try_from(top),
            u32::try_from(right - left),
            u32::try_from(bottom - top),
        ) else {
            tracing::warn!(x, y, "Frame outside drawable range; skipped");
            return;
        };
        draw_filled_rect_mut(canvas, Rect::at(left, top).of_size(w, h), Rgba(color.to_rgba()));
    }

    /// Alpha-blend `item` onto the canvas with its top-left corner at `(x, y)`.
    pub fn draw_item(canvas: &mut RgbaImage, item: &RgbaImage, x: u32, y: u32) {
        imageops::overlay(canvas, item, x as i64, y as i64);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_gradient_rows() {
        let background = BackgroundSpec::VerticalGradient {
            top: Color::BLACK,
            bottom: Color::WHITE,
        };
        let canvas = Canvas::filled(4, 3, &background);
        assert_eq!(canvas.get_pixel(0, 0), &Rgba([0, 0, 0, 255]));
        assert_eq!(canvas.get_pixel(3, 1), &Rgba([128, 128, 128, 255]));
        assert_eq!(canvas.get_pixel(2, 2), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_frame_surrounds_item() {
        let mut canvas = Canvas::filled(10, 10, &BackgroundSpec::default());
        Canvas::draw_frame(&mut canvas, 3, 3, 4, 4, 1, Color::BLACK);
        let item = RgbaImage::from_pixel(4, 4, Rgba([0, 255, 0, 255]));
        Canvas::draw_item(&mut canvas, &item, 3, 3);

        assert_eq!(canvas.get_pixel(2, 2), &Rgba([0, 0, 0, 255]));
        assert_eq!(canvas.get_pixel(7, 7), &Rgba([0, 0, 0, 255]));
        assert_eq!(canvas.get_pixel(3, 3), &Rgba([0, 255, 0, 255]));
        assert_eq!(canvas.get_pixel(1, 1), &Rgba([255, 255, 255, 255]));
        assert_eq!(canvas.get_pixel(8, 8), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_frame_clipped_to_canvas() {
        let mut canvas = Canvas::filled(6, 5, &BackgroundSpec::default());
        Canvas::draw_frame(&mut canvas, 2, 2, 2, 2, u32::MAX, Color::BLACK);
        assert!(canvas.pixels().all(|p| *p == Rgba([0, 0, 0, 255])));

        let mut canvas = Canvas::filled(6, 5, &BackgroundSpec::default());
        Canvas::draw_frame(&mut canvas, 0, 0, 2, 2, 1, Color::BLACK);
        assert_eq!(canvas.get_pixel(2, 2), &Rgba([0, 0, 0, 255]));
        assert_eq!(canvas.get_pixel(3, 3), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_zero_border_draws_nothing() {
        let mut canvas = Canvas::filled(4, 4, &BackgroundSpec::default());
        Canvas::draw_frame(&mut canvas, 1, 1, 2, 2, 0, Color::BLACK);
        assert!(canvas.pixels().all(|p| *p == Rgba([255, 255, 255, 255])));
    }
}
