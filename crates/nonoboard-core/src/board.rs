#![forbid(unsafe_code)]

//! Board facade: the committed-mutation surface over grid, clues, and log.
//!
//! [`Board`] ties the three model pieces together and is the single
//! ownership point for committed mutations. The input layer calls
//! [`Board::apply_single`] and [`Board::apply_range`]; the host calls
//! [`Board::generate`]; a renderer reads everything else back.
//!
//! # Modes
//!
//! - [`BoardMode::Draw`]: the board starts blank and the clues follow the
//!   working cells: every committed edit re-derives them, so the guides
//!   always describe what is currently drawn.
//! - [`BoardMode::Play`]: the clues are derived once when a puzzle is
//!   generated and then frozen; the player's edits never move them.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::cell::CellState;
use crate::changelog::{CellChange, ChangeLog};
use crate::clue::Clues;
use crate::geometry::CellRect;
use crate::grid::{Grid, GridError};

/// How clues track committed edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoardMode {
    /// Clues follow the working cells.
    #[default]
    Draw,

    /// Clues are frozen at generation time.
    Play,
}

/// A puzzle board: the grid, its clues, and the edit log.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    clues: Clues,
    log: ChangeLog,
    mode: BoardMode,
}

impl Board {
    /// Create a blank board.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::InvalidSize`] if either dimension is zero.
    pub fn new(width: u16, height: u16, mode: BoardMode) -> Result<Self, GridError> {
        let grid = Grid::new(width, height)?;
        Ok(Self {
            clues: Clues::blank(width, height),
            grid,
            log: ChangeLog::new(),
            mode,
        })
    }

    /// Generate a fresh random puzzle and derive its clues.
    ///
    /// Every cell is filled independently with probability
    /// `fill_probability`. Uses an OS-seeded [`SmallRng`];
    /// [`Board::generate_with`] takes a caller-supplied source for
    /// deterministic tests.
    pub fn generate(&mut self, fill_probability: f64) {
        let mut rng = SmallRng::from_os_rng();
        self.generate_with(&mut rng, fill_probability);
    }

    /// Generate a puzzle from the given random source.
    pub fn generate_with<R: Rng + ?Sized>(&mut self, rng: &mut R, fill_probability: f64) {
        self.grid.fill_random(rng, fill_probability);
        self.clues = Clues::derive(&self.grid);
        #[cfg(feature = "tracing")]
        tracing::debug!(
            width = self.grid.width(),
            height = self.grid.height(),
            fill_probability,
            "generated puzzle"
        );
    }

    /// Commit one cell write and record it as a single log entry.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::OutOfBounds`] if the address is outside the
    /// grid; nothing is written or logged in that case.
    pub fn apply_single(&mut self, x: u16, y: u16, value: CellState) -> Result<(), GridError> {
        let index = self.grid.index_of(x, y).ok_or(GridError::OutOfBounds { x, y })?;
        let old = self.grid.get(x, y);
        self.grid.set(x, y, value)?;
        self.log.record_single(CellChange::new(index, old, value));
        #[cfg(feature = "tracing")]
        tracing::debug!(x, y, ?old, ?value, "committed single edit");
        self.refresh_clues();
        Ok(())
    }

    /// Commit one cell write addressed by row-major index.
    ///
    /// The flat-index form mirrors the change log's addressing, so a
    /// future undo can replay entries without converting back to
    /// coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::IndexOutOfBounds`] if the index addresses no
    /// cell.
    pub fn apply_single_index(&mut self, index: usize, value: CellState) -> Result<(), GridError> {
        let (x, y) = self
            .grid
            .coords_of(index)
            .ok_or(GridError::IndexOutOfBounds { index })?;
        self.apply_single(x, y, value)
    }

    /// Commit a rectangle write and record the full region diff as one group.
    ///
    /// The rectangle is clamped to the grid. Every cell inside the clamped
    /// region gets one record, including cells whose value does not change:
    /// the group is a snapshot diff of the region, not a minimal diff. A
    /// rectangle that misses the grid entirely writes and logs nothing.
    pub fn apply_range(&mut self, rect: CellRect, value: CellState) {
        let clipped = rect.intersection(&self.grid.bounds());
        let mut changes = Vec::with_capacity(clipped.area() as usize);
        for pos in clipped.cells() {
            if let Some(index) = self.grid.index_of(pos.x, pos.y) {
                changes.push(CellChange::new(index, self.grid.get(pos.x, pos.y), value));
            }
        }
        self.grid.set_rect(clipped, value);
        #[cfg(feature = "tracing")]
        tracing::debug!(?clipped, cells = changes.len(), ?value, "committed range edit");
        self.log.record_group(changes);
        self.refresh_clues();
    }

    fn refresh_clues(&mut self) {
        if self.mode == BoardMode::Draw {
            self.clues = Clues::derive(&self.grid);
        }
    }

    /// The cell grid.
    #[inline]
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The current clues.
    #[inline]
    #[must_use]
    pub fn clues(&self) -> &Clues {
        &self.clues
    }

    /// The edit log.
    #[inline]
    #[must_use]
    pub fn change_log(&self) -> &ChangeLog {
        &self.log
    }

    /// The clue-tracking mode.
    #[inline]
    #[must_use]
    pub const fn mode(&self) -> BoardMode {
        self.mode
    }

    /// Cells per row.
    #[inline]
    #[must_use]
    pub const fn width(&self) -> u16 {
        self.grid.width()
    }

    /// Number of rows.
    #[inline]
    #[must_use]
    pub const fn height(&self) -> u16 {
        self.grid.height()
    }
}
