#![forbid(unsafe_code)]

//! Paint gesture recognition over a board.
//!
//! [`BoardSession`] is a stateful processor that converts raw pointer
//! events into committed board edits.
//!
//! # State Machine
//!
//! Two states, Idle and Dragging; committing happens synchronously inside
//! the pointer-up handler:
//!
//! - **Idle → Dragging** on pointer-down over a board cell. The paint value
//!   is fixed at grab time: fill if the grabbed cell was empty, erase if it
//!   was filled. A pointer-down outside the board is ignored.
//! - **Dragging → Dragging** on pointer-move, throttled to one admitted
//!   update per window. The cursor updates per axis: an in-range X is taken
//!   even when Y has left the board, and vice versa.
//! - **Dragging → Idle** on pointer-up. A gesture that never left its
//!   origin cell and released on that same cell commits a single toggle;
//!   anything else commits a range fill over the bounding rectangle of
//!   origin and cursor, clamped to the board. Gesture state is discarded on
//!   both branches.
//!
//! # Invariants
//!
//! 1. A gesture performs one consistent operation (fill-only or erase-only)
//!    decided by the starting cell, regardless of what the drag crosses.
//! 2. Single toggle and range fill never both commit for one gesture.
//! 3. A pointer that never lands on the board commits nothing and logs
//!    nothing.
//! 4. After pointer-up or [`cancel`](BoardSession::cancel), the session is
//!    Idle and preview queries answer from committed state only.
//!
//! # Failure Modes
//!
//! There are none to surface: out-of-range positions are ignored or
//! clamped, a release without an active gesture is a no-op, and nothing
//! here performs I/O.

use std::time::Instant;

use nonoboard_core::{Board, CellPos, CellRect, CellState};

use crate::event::{PointerEvent, PointerEventKind};
use crate::layout::{BoardLayout, LayoutConfig};
use crate::throttle::MoveThrottle;

/// Tracks an active paint gesture.
#[derive(Debug, Clone, Copy)]
struct DragState {
    origin: CellPos,
    cursor: CellPos,
    paint: CellState,
}

/// Owns a board and interprets pointer gestures into committed edits.
///
/// One session is one logical actor: it is the sole writer of its board,
/// and all gesture state lives on the instance, so independent boards get
/// independent sessions.
#[derive(Debug)]
pub struct BoardSession {
    board: Board,
    layout: LayoutConfig,
    throttle: MoveThrottle,
    drag: Option<DragState>,
}

impl BoardSession {
    /// Create a session over a board with the given pixel geometry.
    #[must_use]
    pub fn new(board: Board, layout: LayoutConfig) -> Self {
        Self {
            board,
            layout,
            throttle: MoveThrottle::default(),
            drag: None,
        }
    }

    /// Replace the move throttle (a different window, or zero for tests).
    #[must_use]
    pub fn with_throttle(mut self, throttle: MoveThrottle) -> Self {
        self.throttle = throttle;
        self
    }

    /// Process one pointer event observed at `now`.
    pub fn handle(&mut self, event: &PointerEvent, now: Instant) {
        match event.kind {
            PointerEventKind::Down => self.on_down(event.x, event.y),
            PointerEventKind::Move => self.on_move(event.x, event.y, now),
            PointerEventKind::Up => self.on_up(event.x, event.y),
        }
    }

    fn resolve_layout(&self) -> BoardLayout {
        BoardLayout::resolve(self.layout, &self.board)
    }

    fn on_down(&mut self, x: f32, y: f32) {
        let layout = self.resolve_layout();
        let Some(cell) = layout.cell_at(x, y) else {
            // Stray press outside the board: stay Idle.
            return;
        };
        let paint = self.board.grid().get(cell.x, cell.y).toggled();
        self.drag = Some(DragState {
            origin: cell,
            cursor: cell,
            paint,
        });
        self.throttle.reset();
        #[cfg(feature = "tracing")]
        tracing::trace!(x = cell.x, y = cell.y, ?paint, "gesture started");
    }

    fn on_move(&mut self, x: f32, y: f32, now: Instant) {
        if self.drag.is_none() {
            // Hover with no gesture in progress.
            return;
        }
        if !self.throttle.admit(now) {
            // Dropped; the release handler re-reads the pointer, so a
            // missed move never corrupts the gesture.
            return;
        }
        let layout = self.resolve_layout();
        let (raw_x, raw_y) = layout.raw_cell_at(x, y);
        if let Some(drag) = &mut self.drag {
            if layout.valid_x(raw_x) {
                drag.cursor.x = raw_x as u16;
            }
            if layout.valid_y(raw_y) {
                drag.cursor.y = raw_y as u16;
            }
        }
    }

    fn on_up(&mut self, x: f32, y: f32) {
        let Some(drag) = self.drag.take() else {
            // Release with no gesture (press started off-board).
            return;
        };
        let layout = self.resolve_layout();
        let released = layout.cell_at(x, y);

        if drag.origin == drag.cursor && released == Some(drag.origin) {
            // A true single-point gesture: flip the grabbed cell. The paint
            // value is the toggle of the value grabbed, and no commit can
            // have happened mid-gesture, so setting it is the flip.
            //
            // The origin was validated at pointer-down and the board never
            // resizes, so the write cannot miss.
            let _ = self
                .board
                .apply_single(drag.origin.x, drag.origin.y, drag.paint);
            #[cfg(feature = "tracing")]
            tracing::trace!(x = drag.origin.x, y = drag.origin.y, "committed single toggle");
        } else {
            let rect = CellRect::bounding(drag.origin, drag.cursor);
            self.board.apply_range(rect, drag.paint);
            #[cfg(feature = "tracing")]
            tracing::trace!(?rect, paint = ?drag.paint, "committed range fill");
        }
    }

    /// Abort any active gesture without committing or logging.
    ///
    /// Hosts call this on focus loss or pointer capture loss, the same
    /// situations that cancel a drag anywhere else.
    pub fn cancel(&mut self) {
        #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
        let aborted = self.drag.take().is_some();
        #[cfg(feature = "tracing")]
        if aborted {
            tracing::trace!("gesture cancelled");
        }
    }

    /// Whether a paint gesture is in progress.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// How a cell should currently be drawn.
    ///
    /// During an active gesture, cells inside the pending rectangle report
    /// the gesture's paint value, so a renderer previews the edit before
    /// release, for erasing as well as filling. Everywhere else (and with
    /// no gesture) this answers committed state.
    #[must_use]
    pub fn is_cell_filled(&self, x: u16, y: u16) -> bool {
        if let Some(drag) = &self.drag {
            let pending = CellRect::bounding(drag.origin, drag.cursor);
            if pending.contains(x, y) {
                return drag.paint.is_filled();
            }
        }
        self.board.grid().get(x, y).is_filled()
    }

    /// Generate a fresh puzzle, discarding any active gesture.
    pub fn generate(&mut self, fill_probability: f64) {
        self.cancel();
        self.board.generate(fill_probability);
    }

    /// The board under edit.
    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access for host-level operations (seeded generation,
    /// programmatic edits). Committed-mutation discipline still holds: the
    /// board only exposes its logging entry points.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// The pixel geometry used for mapping.
    #[inline]
    #[must_use]
    pub const fn layout_config(&self) -> LayoutConfig {
        self.layout
    }

    /// Replace the pixel geometry (canvas moved or zoomed).
    pub fn set_layout_config(&mut self, layout: LayoutConfig) {
        self.layout = layout;
    }
}
