#![forbid(unsafe_code)]

//! Fixed-size binary cell grid with row-major addressing.
//!
//! A [`Grid`] is created with a fixed size at puzzle start and never
//! resized; a new puzzle gets a new grid. Cells live in one `Vec` addressed
//! `index = y * width + x`.
//!
//! # Invariants
//!
//! 1. `cells.len() == width * height` at all times.
//! 2. Both dimensions are non-zero (enforced at construction).
//!
//! # Bounds policy
//!
//! Reads are lenient and writes are strict: [`Grid::get`] answers `Empty`
//! for any out-of-range address so that probing near the edge never fails,
//! while [`Grid::set`] returns [`GridError::OutOfBounds`] because a stray
//! single-cell write is a caller bug. Range writes ([`Grid::set_rect`])
//! clamp the rectangle to the grid and silently drop the rest, which keeps
//! drag rectangles that overshoot an edge harmless.

use rand::Rng;
use thiserror::Error;

use crate::cell::CellState;
use crate::geometry::CellRect;

/// Errors from grid construction and strict writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    /// A grid dimension was zero.
    #[error("invalid grid size {width}x{height}: dimensions must be non-zero")]
    InvalidSize { width: u16, height: u16 },

    /// A single-cell write addressed a cell outside the grid.
    #[error("cell ({x}, {y}) is outside the grid")]
    OutOfBounds { x: u16, y: u16 },

    /// A flat-index write addressed a cell outside the grid.
    #[error("cell index {index} is outside the grid")]
    IndexOutOfBounds { index: usize },
}

/// A fixed-size grid of binary cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    cells: Vec<CellState>,
}

impl Grid {
    /// Create a grid with every cell `Empty`.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSize`] if either dimension is zero. A
    /// degenerate empty grid is never constructed.
    pub fn new(width: u16, height: u16) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidSize { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![CellState::Empty; width as usize * height as usize],
        })
    }

    /// Cells per row.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells.
    #[inline]
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Bounds rectangle covering the whole grid.
    #[inline]
    #[must_use]
    pub const fn bounds(&self) -> CellRect {
        CellRect::from_size(self.width, self.height)
    }

    /// Row-major index for an in-bounds cell.
    #[inline]
    #[must_use]
    pub fn index_of(&self, x: u16, y: u16) -> Option<usize> {
        (x < self.width && y < self.height)
            .then(|| y as usize * self.width as usize + x as usize)
    }

    /// Coordinates for a row-major index, if it addresses a cell.
    #[inline]
    #[must_use]
    pub fn coords_of(&self, index: usize) -> Option<(u16, u16)> {
        (index < self.cells.len()).then(|| {
            let width = self.width as usize;
            ((index % width) as u16, (index / width) as u16)
        })
    }

    /// Lenient read: any address outside the grid reads as `Empty`.
    #[inline]
    #[must_use]
    pub fn get(&self, x: u16, y: u16) -> CellState {
        self.index_of(x, y).map_or(CellState::Empty, |i| self.cells[i])
    }

    /// Lenient read by row-major index.
    #[inline]
    #[must_use]
    pub fn get_index(&self, index: usize) -> CellState {
        self.cells.get(index).copied().unwrap_or_default()
    }

    /// Strict single-cell write.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the address is outside the
    /// grid. Callers on the pointer path validate first, so the error never
    /// fires there.
    pub fn set(&mut self, x: u16, y: u16, state: CellState) -> Result<(), GridError> {
        let i = self.index_of(x, y).ok_or(GridError::OutOfBounds { x, y })?;
        self.cells[i] = state;
        Ok(())
    }

    /// Flip one cell, returning the new state.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the address is outside the grid.
    pub fn toggle(&mut self, x: u16, y: u16) -> Result<CellState, GridError> {
        let i = self.index_of(x, y).ok_or(GridError::OutOfBounds { x, y })?;
        let next = self.cells[i].toggled();
        self.cells[i] = next;
        Ok(next)
    }

    /// Clamped range write.
    ///
    /// The rectangle is intersected with the grid bounds and every
    /// remaining cell is set to `state`; out-of-range portions are
    /// silently dropped.
    pub fn set_rect(&mut self, rect: CellRect, state: CellState) {
        let clipped = rect.intersection(&self.bounds());
        for pos in clipped.cells() {
            let i = pos.y as usize * self.width as usize + pos.x as usize;
            self.cells[i] = state;
        }
    }

    /// Replace every cell with an independent biased coin flip.
    ///
    /// Each cell becomes `Filled` with probability `fill_probability`
    /// (clamped to `[0, 1]`, NaN treated as 0), else `Empty`.
    pub fn fill_random<R: Rng + ?Sized>(&mut self, rng: &mut R, fill_probability: f64) {
        let p = if fill_probability.is_nan() {
            0.0
        } else {
            fill_probability.clamp(0.0, 1.0)
        };
        for cell in &mut self.cells {
            *cell = CellState::from(rng.random_bool(p));
        }
    }

    /// Reset every cell to `Empty`.
    pub fn clear(&mut self) {
        self.cells.fill(CellState::Empty);
    }

    /// All cells in row-major order.
    #[inline]
    #[must_use]
    pub fn cells(&self) -> &[CellState] {
        &self.cells
    }

    /// One row of cells, or `None` out of range.
    #[must_use]
    pub fn row(&self, y: u16) -> Option<&[CellState]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }
}
