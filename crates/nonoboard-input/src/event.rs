#![forbid(unsafe_code)]

//! Canonical pointer events.
//!
//! # Design Notes
//!
//! - Positions are pixels relative to the canvas top-left corner and may
//!   fall outside the canvas; the session maps and validates them per axis.
//! - The observation timestamp travels separately: callers pass an
//!   `Instant` alongside the event (see [`BoardSession::handle`]), which
//!   keeps event values trivially constructible in tests.
//!
//! [`BoardSession::handle`]: crate::session::BoardSession::handle

/// What the pointer did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEventKind {
    /// Primary button pressed.
    Down,

    /// Pointer moved. Delivered with or without the button held; the
    /// session only reacts while a gesture is active.
    Move,

    /// Primary button released.
    Up,
}

/// A pointer event carrying a screen-space position.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    pub x: f32,
    pub y: f32,
}

impl PointerEvent {
    /// Create a pointer event.
    #[must_use]
    pub const fn new(kind: PointerEventKind, x: f32, y: f32) -> Self {
        Self { kind, x, y }
    }

    /// A press at the given position.
    #[must_use]
    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, x, y)
    }

    /// A move to the given position.
    #[must_use]
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, x, y)
    }

    /// A release at the given position.
    #[must_use]
    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, x, y)
    }
}
