#![forbid(unsafe_code)]

//! Puzzle model: cells, grids, clue derivation, and the edit log.
//!
//! # Role in nonoboard
//! `nonoboard-core` is the model layer. It owns the committed state of a
//! puzzle (the cell grid, the run-length clues derived from it, and the
//! append-only change log) and exposes the only committed-mutation entry
//! points.
//!
//! # Primary responsibilities
//! - **Grid**: fixed-size binary cell storage with row-major addressing.
//! - **Clues**: run-length row/column guides derived from cell state.
//! - **ChangeLog**: per-gesture history of every committed edit.
//! - **Board**: the facade tying the three together for hosts and renderers.
//!
//! # How it fits in the system
//! The input layer (`nonoboard-input`) turns pointer gestures into calls to
//! [`Board::apply_single`] and [`Board::apply_range`]; a renderer reads the
//! grid and clues back. The model depends on neither input nor rendering.

pub mod board;
pub mod cell;
pub mod changelog;
pub mod clue;
pub mod geometry;
pub mod grid;

pub use board::{Board, BoardMode};
pub use cell::CellState;
pub use changelog::{CellChange, ChangeEntry, ChangeLog};
pub use clue::Clues;
pub use geometry::{CellPos, CellRect};
pub use grid::{Grid, GridError};
