//! Title band drawn across the top of themed strips.

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_text_mut, text_size};
use photostrip_core::constants::{DEFAULT_HEADER_TITLE, HEADER_DATE_SCALE, HEADER_TITLE_SCALE};
use photostrip_core::{Color, StripError, StripResult};
use std::path::Path;

#[derive(Clone)]
pub struct HeaderSpec {
    pub title: String,
    pub date_line: String,
    pub color: Color,
    /// Without a font the header band is reserved but left blank.
    pub font: Option<FontArc>,
}

impl std::fmt::Debug for HeaderSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HeaderSpec")
            .field("title", &self.title)
            .field("date_line", &self.date_line)
            .field("color", &self.color)
            .field("has_font", &self.font.is_some())
            .finish()
    }
}

impl HeaderSpec {
    /// Default title and today's date in local time.
    pub fn new(color: Color) -> Self {
        Self {
            title: DEFAULT_HEADER_TITLE.to_string(),
            date_line: Self::today(),
            color,
            font: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_date_line(mut self, date_line: impl Into<String>) -> Self {
        self.date_line = date_line.into();
        self
    }

    pub fn with_font(mut self, font: FontArc) -> Self {
        self.font = Some(font);
        self
    }

    /// e.g. "10/19/2026"
    pub fn today() -> String {
        chrono::Local::now().format("%-m/%-d/%Y").to_string()
    }

    pub fn load_font(data: Vec<u8>) -> StripResult<FontArc> {
        FontArc::try_from_vec(data)
            .map_err(|e| StripError::invalid_argument(format!("Invalid font data: {}", e)))
    }

    pub fn load_font_file(path: &Path) -> StripResult<FontArc> {
        let data = std::fs::read(path).map_err(|e| {
            StripError::invalid_argument(format!("Cannot read font {}: {}", path.display(), e))
        })?;
        Self::load_font(data)
    }

    /// Draw title and date centered within the top `band_height` rows of `canvas`.
    /// Title baseline sits at half the band, the date line at 13/16 of it.
    pub fn draw(&self, canvas: &mut RgbaImage, band_height: u32) {
        let Some(font) = self.font.as_ref() else {
            tracing::warn!("No header font configured; header band left blank");
            return;
        };

        let color = Rgba(self.color.to_rgba());
        let canvas_width = canvas.width();
        let lines = [
            (self.title.as_str(), HEADER_TITLE_SCALE, band_height / 2),
            (self.date_line.as_str(), HEADER_DATE_SCALE, band_height * 13 / 16),
        ];

        for (text, scale, baseline) in lines {
            if text.is_empty() {
                continue;
            }
            let scale = PxScale::from(scale);
            let (text_width, _) = text_size(scale, font, text);
            // draw_text_mut takes the top of the line box, one ascent above the baseline.
            let ascent = font.as_scaled(scale).ascent();
            let x = (canvas_width as i32 - text_width as i32) / 2;
            let y = baseline as i32 - ascent.round() as i32;
            draw_text_mut(canvas, color, x, y, scale, font, text);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let header = HeaderSpec::new(Color::BLACK);
        assert_eq!(header.title, "FUNKY PHOTOBOOTH");
        assert!(!header.date_line.is_empty());
        assert!(header.font.is_none());
    }

    #[test]
    fn test_builder() {
        let header = HeaderSpec::new(Color::WHITE)
            .with_title("PARTY")
            .with_date_line("1/1/2030");
        assert_eq!(header.title, "PARTY");
        assert_eq!(header.date_line, "1/1/2030");
    }

    #[test]
    fn test_invalid_font() {
        assert!(matches!(
            HeaderSpec::load_font(b"not a font".to_vec()),
            Err(StripError::InvalidArgument(_))
        ));
        assert!(matches!(
            HeaderSpec::load_font_file(Path::new("/nonexistent/font.ttf")),
            Err(StripError::InvalidArgument(_))
        ));
    }

    const FONT: &[u8] = include_bytes!("../../tests/fixtures/DejaVuSans-Bold.ttf");

    fn ink_rows(canvas: &RgbaImage) -> Vec<u32> {
        let background = Rgba([255, 255, 255, 255]);
        (0..canvas.height())
            .filter(|&y| (0..canvas.width()).any(|x| *canvas.get_pixel(x, y) != background))
            .collect()
    }

    #[test]
    fn test_draw_lines_on_baselines() {
        let font = HeaderSpec::load_font(FONT.to_vec()).unwrap();
        let header = HeaderSpec::new(Color::BLACK)
            .with_date_line("1/1/2030")
            .with_font(font);
        let mut canvas = RgbaImage::from_pixel(400, 100, Rgba([255, 255, 255, 255]));
        header.draw(&mut canvas, 80);

        let rows = ink_rows(&canvas);
        // Title caps sit just above y = 40, the date just above y = 65.
        assert!(rows.iter().any(|y| (15..=41).contains(y)));
        assert!(rows.iter().any(|y| (50..=70).contains(y)));
        assert!(!rows.iter().any(|y| (43..50).contains(y)));
        assert!(rows.iter().all(|&y| y < 80));
        assert!(rows.iter().all(|&y| y > 10));
    }

    #[test]
    fn test_draw_centers_title() {
        let font = HeaderSpec::load_font(FONT.to_vec()).unwrap();
        let header = HeaderSpec::new(Color::BLACK)
            .with_date_line("")
            .with_font(font);
        let mut canvas = RgbaImage::from_pixel(400, 80, Rgba([255, 255, 255, 255]));
        header.draw(&mut canvas, 80);

        let background = Rgba([255, 255, 255, 255]);
        let columns: Vec<u32> = (0..canvas.width())
            .filter(|&x| (0..canvas.height()).any(|y| *canvas.get_pixel(x, y) != background))
            .collect();
        let (first, last) = (columns[0], columns[columns.len() - 1]);
        let middle = (first + last) / 2;
        assert!((194..=206).contains(&middle), "title centered at {}", middle);
        assert!(last - first > 100);
    }

    #[test]
    fn test_draw_without_font_leaves_canvas() {
        let mut canvas = RgbaImage::from_pixel(20, 10, Rgba([1, 2, 3, 255]));
        HeaderSpec::new(Color::BLACK).draw(&mut canvas, 10);
        assert!(canvas.pixels().all(|p| *p == Rgba([1, 2, 3, 255])));
    }
}
