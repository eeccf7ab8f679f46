#![forbid(unsafe_code)]

//! Append-only record of committed cell edits.
//!
//! Every committed mutation lands here, grouped per user gesture: a single
//! toggle appends a [`ChangeEntry::Single`], a drag-range edit appends one
//! [`ChangeEntry::Group`] holding a record per touched cell. Range groups
//! are a full snapshot diff of the region: cells whose value did not
//! change are recorded too.
//!
//! The log is pure history: entries are never mutated, reordered, or
//! removed, and it grows for the puzzle's lifetime (in-memory only). That
//! shape is what a future undo/redo needs to replay inverse edits per
//! entry; undo itself is not implemented here.

use crate::cell::CellState;

/// One cell edit: which cell, what it was, what it became.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellChange {
    /// Row-major cell index.
    pub index: usize,
    /// Value before the edit.
    pub old: CellState,
    /// Value after the edit.
    pub new: CellState,
}

impl CellChange {
    /// Create a change record.
    #[inline]
    #[must_use]
    pub const fn new(index: usize, old: CellState, new: CellState) -> Self {
        Self { index, old, new }
    }

    /// Whether the edit actually changed the cell.
    #[inline]
    #[must_use]
    pub const fn is_effective(&self) -> bool {
        self.old.as_bit() != self.new.as_bit()
    }
}

/// One committed gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeEntry {
    /// A single-cell edit.
    Single(CellChange),

    /// An atomic batch from one range gesture, in region scan order.
    Group(Vec<CellChange>),
}

impl ChangeEntry {
    /// The records in this entry.
    #[must_use]
    pub fn changes(&self) -> &[CellChange] {
        match self {
            Self::Single(change) => std::slice::from_ref(change),
            Self::Group(changes) => changes,
        }
    }
}

/// Append-only, ordered log of committed edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeLog {
    entries: Vec<ChangeEntry>,
}

impl ChangeLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one single-cell edit.
    pub fn record_single(&mut self, change: CellChange) {
        self.entries.push(ChangeEntry::Single(change));
    }

    /// Append one gesture's batch as an atomic group.
    ///
    /// An empty batch is dropped: a gesture that touched no cells is a
    /// no-op release and leaves no trace in the log.
    pub fn record_group(&mut self, changes: Vec<CellChange>) {
        if !changes.is_empty() {
            self.entries.push(ChangeEntry::Group(changes));
        }
    }

    /// Number of entries (gestures), not individual cell records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether anything has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[ChangeEntry] {
        &self.entries
    }

    /// The most recent entry, if any.
    #[must_use]
    pub fn last(&self) -> Option<&ChangeEntry> {
        self.entries.last()
    }
}
