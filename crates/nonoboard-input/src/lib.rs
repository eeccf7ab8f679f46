#![forbid(unsafe_code)]

//! Pointer input: coordinate mapping, move throttling, and paint gestures.
//!
//! # Role in nonoboard
//! `nonoboard-input` is the interaction layer. It consumes screen-space
//! pointer events, maps them onto board cells (guide margins included),
//! and drives the model's committed-mutation entry points.
//!
//! # Primary responsibilities
//! - **PointerEvent**: canonical pointer-down/move/up events.
//! - **BoardLayout**: screen→cell mapping with clue-margin offsets.
//! - **MoveThrottle**: drop-and-keep-latest rate limiting for moves.
//! - **BoardSession**: the Idle/Dragging state machine, single-toggle vs
//!   range-fill discrimination, and drag preview for renderers.
//!
//! # How it fits in the system
//! An input source (canvas, terminal, test harness) feeds
//! [`BoardSession::handle`] with events and timestamps; the session calls
//! into `nonoboard-core`'s board to commit edits; a renderer reads cells,
//! clues, and [`BoardSession::is_cell_filled`] back to draw, preview
//! included. Everything is synchronous and single-actor: every event is
//! fully handled before the next is processed.

pub mod event;
pub mod layout;
pub mod session;
pub mod throttle;

pub use event::{PointerEvent, PointerEventKind};
pub use layout::{BoardLayout, LayoutConfig};
pub use session::BoardSession;
pub use throttle::{DEFAULT_MOVE_INTERVAL, MoveThrottle};
