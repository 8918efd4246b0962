//! Strip layout geometry
//!
//! Two arrangements share one `LayoutSpec`:
//! - single column (`columns` unset or 1): every item is framed by `border_width`,
//!   the stack is surrounded by `padding` and separated by `gap`;
//! - grid (`columns > 1`): each column is a cell `item_width + 2 * padding` wide,
//!   cells are separated by `column_gap`, rows by `gap`. Column `c` starts
//!   `c * (cell_width + column_gap / 2)` from the left padding.
//!
//! Both reserve `header_height` pixels at the top of the canvas. Grid frames, and
//! column frames with `frame_in_padding` set, are drawn into the padding and never
//! change the geometry; such a frame may not be wider than the padding.
//!
//! All arithmetic is done in `u64`; anything that does not fit a `u32` canvas is
//! rejected with `InvalidArgument`.

use serde::{Deserialize, Serialize};

use crate::constants::{
    CLASSIC_BORDER, CLASSIC_GAP, CLASSIC_ITEM_SIZE, CLASSIC_PADDING, GRID_PHOTO_COUNT,
    RETRO_BORDER, THEMED_HEADER_HEIGHT, THEMED_ITEM_HEIGHT, THEMED_ITEM_WIDTH, THEMED_SPACING,
};
use crate::error::{StripError, StripResult};
use crate::models::background::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutSpec {
    pub item_width: u32,
    pub item_height: u32,
    pub border_width: u32,
    pub padding: u32,
    /// Vertical space between consecutive items (and grid rows).
    pub gap: u32,
    /// Horizontal space between grid cells. Ignored in single-column mode.
    pub column_gap: u32,
    pub header_height: u32,
    pub columns: Option<u32>,
    /// Draw single-column frames into the padding instead of growing each slot.
    #[serde(default)]
    pub frame_in_padding: bool,
}

/// Where one item lands on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemPlacement {
    pub index: usize,
    pub row: u32,
    pub col: u32,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl LayoutSpec {
    /// Single column of square items with no header.
    pub fn column(item_size: u32, border_width: u32, padding: u32, gap: u32) -> Self {
        Self {
            item_width: item_size,
            item_height: item_size,
            border_width,
            padding,
            gap,
            column_gap: 0,
            header_height: 0,
            columns: None,
            frame_in_padding: false,
        }
    }

    /// Grid of `columns` cells per row with a header band on top.
    pub fn grid(
        columns: u32,
        item_width: u32,
        item_height: u32,
        padding: u32,
        gap: u32,
        column_gap: u32,
        header_height: u32,
    ) -> Self {
        Self {
            item_width,
            item_height,
            border_width: 0,
            padding,
            gap,
            column_gap,
            header_height,
            columns: Some(columns),
            frame_in_padding: true,
        }
    }

    pub fn with_border(mut self, border_width: u32) -> Self {
        self.border_width = border_width;
        self
    }

    pub fn with_header(mut self, header_height: u32) -> Self {
        self.header_height = header_height;
        self
    }

    /// The plain upload strip: 400px squares, 1px frame, 20px padding, 10px gaps.
    pub fn classic() -> Self {
        Self::column(CLASSIC_ITEM_SIZE, CLASSIC_BORDER, CLASSIC_PADDING, CLASSIC_GAP)
    }

    /// The themed strip with a title band. Six photos go into two columns of three,
    /// anything else is a single column 400px wide. Only the retro theme frames its
    /// photos, and the frame sits in the padding so every theme has the same size.
    pub fn themed(photo_count: usize, theme: Theme) -> Self {
        let border = if theme == Theme::Retro { RETRO_BORDER } else { 0 };

        if photo_count == GRID_PHOTO_COUNT {
            return Self::grid(
                2,
                THEMED_ITEM_WIDTH,
                THEMED_ITEM_HEIGHT,
                THEMED_SPACING,
                THEMED_SPACING,
                THEMED_SPACING,
                THEMED_HEADER_HEIGHT,
            )
            .with_border(border);
        }

        Self {
            item_width: THEMED_ITEM_WIDTH,
            item_height: THEMED_ITEM_HEIGHT,
            border_width: border,
            padding: THEMED_SPACING,
            gap: THEMED_SPACING,
            column_gap: 0,
            header_height: THEMED_HEADER_HEIGHT,
            columns: None,
            frame_in_padding: true,
        }
    }

    pub fn column_count(&self) -> u32 {
        self.columns.unwrap_or(1).max(1)
    }

    pub fn is_grid(&self) -> bool {
        self.column_count() > 1
    }

    /// Width of a grid cell including its side padding.
    pub fn cell_width(&self) -> u64 {
        self.item_width as u64 + 2 * self.padding as u64
    }

    /// Frame width that counts toward slot geometry.
    fn slot_border(&self) -> u64 {
        if self.is_grid() || self.frame_in_padding {
            0
        } else {
            self.border_width as u64
        }
    }

    pub fn validate(&self) -> StripResult<()> {
        if self.item_width == 0 || self.item_height == 0 {
            return Err(StripError::invalid_argument(format!(
                "Item size must be positive, got {}x{}",
                self.item_width, self.item_height
            )));
        }
        if self.columns == Some(0) {
            return Err(StripError::invalid_argument("Column count must be positive"));
        }
        if (self.is_grid() || self.frame_in_padding) && self.border_width > self.padding {
            return Err(StripError::invalid_argument(format!(
                "Frame width {} exceeds padding {}",
                self.border_width, self.padding
            )));
        }
        Ok(())
    }

    /// Number of rows needed for `count` items.
    pub fn rows(&self, count: usize) -> u32 {
        let columns = self.column_count() as usize;
        count.div_ceil(columns) as u32
    }

    /// Row-major grid cell of item `index`.
    pub fn cell_of(&self, index: usize) -> (u32, u32) {
        let columns = self.column_count() as usize;
        ((index / columns) as u32, (index % columns) as u32)
    }

    /// Output canvas dimensions for `count` items.
    pub fn canvas_size(&self, count: usize) -> StripResult<(u32, u32)> {
        if count == 0 {
            return Err(StripError::EmptyInput);
        }
        self.validate()?;

        let n = count as u64;
        let header = self.header_height as u64;
        let border = self.slot_border();
        let padding = self.padding as u64;
        let gap = self.gap as u64;
        let item_w = self.item_width as u64;
        let item_h = self.item_height as u64;

        let (width, height) = if self.is_grid() {
            let columns = self.column_count() as u64;
            let rows = self.rows(count) as u64;
            let width = columns * self.cell_width() + (columns - 1) * self.column_gap as u64;
            let height = header + rows * (item_h + gap) + gap;
            (width, height)
        } else {
            let width = item_w + 2 * border + 2 * padding;
            let height = header + 2 * padding + n * (item_h + 2 * border) + (n - 1) * gap;
            (width, height)
        };

        Ok((to_dimension(width)?, to_dimension(height)?))
    }

    /// Top-left corner and drawn size of item `index`, excluding its frame.
    pub fn placement(&self, index: usize) -> StripResult<ItemPlacement> {
        let (row, col) = self.cell_of(index);
        let header = self.header_height as u64;
        let padding = self.padding as u64;
        let gap = self.gap as u64;
        let item_h = self.item_height as u64;

        let (x, y) = if self.is_grid() {
            let stride = self.cell_width() + self.column_gap as u64 / 2;
            let x = padding + col as u64 * stride;
            let y = header + gap + row as u64 * (item_h + gap);
            (x, y)
        } else {
            let border = self.slot_border();
            let pitch = item_h + 2 * border + gap;
            let x = padding + border;
            let y = header + padding + index as u64 * pitch + border;
            (x, y)
        };

        Ok(ItemPlacement {
            index,
            row,
            col,
            x: to_coordinate(x)?,
            y: to_coordinate(y)?,
            width: self.item_width,
            height: self.item_height,
        })
    }

    pub fn placements(&self, count: usize) -> StripResult<Vec<ItemPlacement>> {
        (0..count).map(|i| self.placement(i)).collect()
    }
}

impl Default for LayoutSpec {
    fn default() -> Self {
        Self::classic()
    }
}

fn to_coordinate(value: u64) -> StripResult<u32> {
    u32::try_from(value)
        .map_err(|_| StripError::invalid_argument(format!("Item position out of range: {}", value)))
}

fn to_dimension(value: u64) -> StripResult<u32> {
    u32::try_from(value)
        .ok()
        .filter(|v| *v > 0)
        .ok_or_else(|| StripError::invalid_argument(format!("Canvas dimension out of range: {}", value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_canvas_size() {
        let layout = LayoutSpec::column(400, 1, 20, 10);
        assert_eq!(layout.canvas_size(4).unwrap(), (442, 1678));
        assert_eq!(layout.canvas_size(1).unwrap(), (442, 442));
    }

    #[test]
    fn test_classic_canvas_formula() {
        let layout = LayoutSpec::classic();
        for n in 1..=8usize {
            let (w, h) = layout.canvas_size(n).unwrap();
            assert_eq!(w, 442);
            assert_eq!(h as usize, 40 + n * 402 + (n - 1) * 10);
        }
    }

    #[test]
    fn test_empty_canvas_rejected() {
        assert_eq!(
            LayoutSpec::classic().canvas_size(0),
            Err(StripError::EmptyInput)
        );
    }

    #[test]
    fn test_classic_placements() {
        let layout = LayoutSpec::classic();
        let first = layout.placement(0).unwrap();
        assert_eq!((first.x, first.y), (21, 21));
        let third = layout.placement(2).unwrap();
        assert_eq!((third.x, third.y), (21, 21 + 2 * 412));
        assert_eq!((third.width, third.height), (400, 400));
    }

    #[test]
    fn test_grid_cells_row_major() {
        let layout = LayoutSpec::themed(6, Theme::Minimal);
        assert!(layout.is_grid());
        assert_eq!(layout.cell_of(3), (1, 1));
        assert_eq!(layout.cell_of(4), (2, 0));
        assert_eq!(layout.rows(6), 3);
        assert_eq!(layout.rows(5), 3);
    }

    #[test]
    fn test_themed_grid_canvas() {
        let layout = LayoutSpec::themed(6, Theme::Retro);
        assert_eq!(layout.canvas_size(6).unwrap(), (820, 1060));
        let p = layout.placement(3).unwrap();
        assert_eq!((p.row, p.col), (1, 1));
        assert_eq!((p.x, p.y), (430, 420));
        assert_eq!(layout.placement(0).unwrap().x, 20);
        assert_eq!((p.width, p.height), (360, 300));
        assert_eq!(layout.border_width, 5);
    }

    #[test]
    fn test_themed_single_column_canvas() {
        let layout = LayoutSpec::themed(4, Theme::Minimal);
        assert!(!layout.is_grid());
        assert_eq!(layout.canvas_size(4).unwrap(), (400, 80 + 320 * 4 + 20));
        assert_eq!(layout.placement(1).unwrap().y, 80 + 20 + 320);
    }

    #[test]
    fn test_retro_column_frame_stays_in_padding() {
        let retro = LayoutSpec::themed(4, Theme::Retro);
        assert_eq!(retro.border_width, 5);
        assert_eq!(retro.canvas_size(4).unwrap(), (400, 1380));
        let first = retro.placement(0).unwrap();
        assert_eq!((first.x, first.y), (20, 100));
        assert_eq!(retro.placement(3).unwrap().y, 100 + 3 * 320);

        let minimal = LayoutSpec::themed(4, Theme::Minimal);
        assert_eq!(minimal.canvas_size(4), retro.canvas_size(4));
    }

    #[test]
    fn test_frame_wider_than_padding_rejected() {
        let grid = LayoutSpec::grid(2, 4, 4, 2, 2, 2, 0).with_border(3_000_000_000);
        assert!(matches!(
            grid.canvas_size(2),
            Err(StripError::InvalidArgument(_))
        ));

        let column = LayoutSpec {
            frame_in_padding: true,
            ..LayoutSpec::column(4, 3, 2, 0)
        };
        assert!(column.validate().is_err());

        // A frame that grows the slot has no padding bound.
        assert!(LayoutSpec::column(4, 3, 2, 0).validate().is_ok());
    }

    #[test]
    fn test_placement_out_of_range() {
        let layout = LayoutSpec::column(u32::MAX, 0, 0, 0);
        assert!(matches!(
            layout.placement(2),
            Err(StripError::InvalidArgument(_))
        ));
        assert!(layout.placements(3).is_err());
    }

    #[test]
    fn test_zero_item_size_rejected() {
        let layout = LayoutSpec::column(0, 1, 20, 10);
        assert!(matches!(
            layout.canvas_size(2),
            Err(StripError::InvalidArgument(_))
        ));
        let layout = LayoutSpec {
            columns: Some(0),
            ..LayoutSpec::classic()
        };
        assert!(layout.validate().is_err());
    }

    #[test]
    fn test_oversized_canvas_rejected() {
        let layout = LayoutSpec::column(u32::MAX / 2, 0, 0, 0);
        assert!(matches!(
            layout.canvas_size(4),
            Err(StripError::InvalidArgument(_))
        ));
    }
}
