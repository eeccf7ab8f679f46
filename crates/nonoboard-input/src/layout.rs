#![forbid(unsafe_code)]

//! Screen-space to cell-space mapping.
//!
//! The canvas reserves a guide area for clue text: as many columns to the
//! left of the board as the longest row clue, and as many rows above it as
//! the longest column clue, with the whole frame inset by half a cell. The
//! mapping inverts that drawing scheme: subtract the canvas origin and the
//! half-cell inset, divide by the per-cell pixel size, then subtract the
//! guide margins.
//!
//! The raw result is signed (a pointer left of the board maps to a
//! negative cell X) and validity is judged per axis, so a drag that leaves
//! the canvas on one edge keeps tracking the other axis.
//!
//! Margins are re-read from the board's current clues on every resolution
//! because draw-mode clues (and with them the guide area) grow as the
//! picture grows.

use nonoboard_core::{Board, CellPos};

/// Pixel geometry of the canvas, supplied by the host.
///
/// Used only for coordinate mapping; the model never stores pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutConfig {
    /// Canvas-space X of the drawing area's top-left corner, in pixels.
    pub origin_x: f32,

    /// Canvas-space Y of the drawing area's top-left corner, in pixels.
    pub origin_y: f32,

    /// Edge length of one cell, in pixels. Must be positive; a
    /// non-positive size maps every position off the board.
    pub cell_size: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            origin_x: 0.0,
            origin_y: 0.0,
            cell_size: 16.0,
        }
    }
}

/// A resolved mapping for one event: pixel geometry plus the board's
/// current guide margins and dimensions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoardLayout {
    config: LayoutConfig,
    guide_columns: u16,
    guide_rows: u16,
    board_width: u16,
    board_height: u16,
}

impl BoardLayout {
    /// Resolve the mapping against the board's current clues.
    #[must_use]
    pub fn resolve(config: LayoutConfig, board: &Board) -> Self {
        Self {
            config,
            guide_columns: board.clues().max_row_clue_len(),
            guide_rows: board.clues().max_column_clue_len(),
            board_width: board.width(),
            board_height: board.height(),
        }
    }

    /// Guide columns reserved left of the board.
    #[inline]
    #[must_use]
    pub const fn guide_columns(&self) -> u16 {
        self.guide_columns
    }

    /// Guide rows reserved above the board.
    #[inline]
    #[must_use]
    pub const fn guide_rows(&self) -> u16 {
        self.guide_rows
    }

    /// Raw signed cell coordinates for a screen position.
    ///
    /// No bounds are applied: positions outside the board map to
    /// coordinates outside `0..width` / `0..height` on the offending axis.
    #[must_use]
    pub fn raw_cell_at(&self, x: f32, y: f32) -> (i32, i32) {
        if self.config.cell_size <= 0.0 {
            // Degenerate geometry maps everything off the board.
            return (i32::MIN, i32::MIN);
        }
        let half = self.config.cell_size / 2.0;
        let gx = (x - self.config.origin_x - half) / self.config.cell_size;
        let gy = (y - self.config.origin_y - half) / self.config.cell_size;
        (
            (gx.floor() as i32).saturating_sub(i32::from(self.guide_columns)),
            (gy.floor() as i32).saturating_sub(i32::from(self.guide_rows)),
        )
    }

    /// Whether a raw cell X lands on the board.
    #[inline]
    #[must_use]
    pub fn valid_x(&self, cell_x: i32) -> bool {
        cell_x >= 0 && cell_x < i32::from(self.board_width)
    }

    /// Whether a raw cell Y lands on the board.
    #[inline]
    #[must_use]
    pub fn valid_y(&self, cell_y: i32) -> bool {
        cell_y >= 0 && cell_y < i32::from(self.board_height)
    }

    /// In-bounds board cell for a screen position, if any.
    #[must_use]
    pub fn cell_at(&self, x: f32, y: f32) -> Option<CellPos> {
        let (cx, cy) = self.raw_cell_at(x, y);
        (self.valid_x(cx) && self.valid_y(cy)).then(|| CellPos::new(cx as u16, cy as u16))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nonoboard_core::{BoardMode, CellState};

    const CELL: f32 = 16.0;

    fn blank_layout(width: u16, height: u16) -> BoardLayout {
        // Play mode keeps clues blank until generation, so margins are 0.
        let board = Board::new(width, height, BoardMode::Play).unwrap();
        BoardLayout::resolve(LayoutConfig::default(), &board)
    }

    /// Pixel at the center of a board cell under the given margins.
    fn center(cell: u16, guides: u16) -> f32 {
        (f32::from(cell) + f32::from(guides)) * CELL + CELL
    }

    #[test]
    fn maps_cell_centers_without_margins() {
        let layout = blank_layout(5, 5);
        assert_eq!(layout.cell_at(center(0, 0), center(0, 0)), Some(CellPos::new(0, 0)));
        assert_eq!(layout.cell_at(center(4, 0), center(2, 0)), Some(CellPos::new(4, 2)));
    }

    #[test]
    fn positions_before_the_inset_are_off_board() {
        let layout = blank_layout(5, 5);
        // Inside the half-cell inset, before cell (0,0) starts.
        let (cx, cy) = layout.raw_cell_at(4.0, 4.0);
        assert!(cx < 0 && cy < 0);
        assert_eq!(layout.cell_at(4.0, 4.0), None);
    }

    #[test]
    fn positions_past_the_last_cell_are_off_board() {
        let layout = blank_layout(3, 3);
        assert_eq!(layout.cell_at(center(3, 0), center(1, 0)), None);
        assert_eq!(layout.cell_at(center(1, 0), center(3, 0)), None);
    }

    #[test]
    fn validity_is_judged_per_axis() {
        let layout = blank_layout(3, 3);
        let (cx, cy) = layout.raw_cell_at(center(1, 0), center(7, 0));
        assert!(layout.valid_x(cx));
        assert!(!layout.valid_y(cy));
    }

    #[test]
    fn guide_margins_shift_the_mapping() {
        // One filled cell gives both axes a single-run clue, so each guide
        // margin grows from 0 to 1 and the whole mapping shifts by a cell.
        let mut board = Board::new(5, 5, BoardMode::Draw).unwrap();
        board.apply_single(0, 0, CellState::Filled).unwrap();
        let layout = BoardLayout::resolve(LayoutConfig::default(), &board);
        assert_eq!(layout.guide_columns(), 1);
        assert_eq!(layout.guide_rows(), 1);

        // The same pixel that used to be cell (1,1) now maps one cell back.
        assert_eq!(layout.cell_at(center(1, 1), center(1, 1)), Some(CellPos::new(1, 1)));
        let unshifted = blank_layout(5, 5);
        assert_eq!(
            unshifted.cell_at(center(1, 1), center(1, 1)),
            Some(CellPos::new(2, 2))
        );
    }

    #[test]
    fn origin_offset_applies() {
        let board = Board::new(4, 4, BoardMode::Play).unwrap();
        let config = LayoutConfig {
            origin_x: 100.0,
            origin_y: 40.0,
            cell_size: CELL,
        };
        let layout = BoardLayout::resolve(config, &board);
        assert_eq!(
            layout.cell_at(100.0 + center(2, 0), 40.0 + center(3, 0)),
            Some(CellPos::new(2, 3))
        );
        assert_eq!(layout.cell_at(center(2, 0), center(3, 0)), None);
    }

    #[test]
    fn degenerate_cell_size_maps_nothing() {
        let board = Board::new(4, 4, BoardMode::Play).unwrap();
        let config = LayoutConfig {
            origin_x: 0.0,
            origin_y: 0.0,
            cell_size: 0.0,
        };
        let layout = BoardLayout::resolve(config, &board);
        assert_eq!(layout.cell_at(8.0, 8.0), None);
        assert_eq!(layout.raw_cell_at(8.0, 8.0), (i32::MIN, i32::MIN));
    }

    #[test]
    fn far_positions_do_not_overflow() {
        let layout = blank_layout(3, 3);
        let (cx, cy) = layout.raw_cell_at(f32::MAX, f32::MIN);
        assert!(!layout.valid_x(cx));
        assert!(!layout.valid_y(cy));
    }
}
