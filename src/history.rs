//! Linear undo/redo over whole-canvas snapshots.
//!
//! Every completed gesture produces a new [`Snapshot`]; the history keeps them in
//! a single chain with a cursor marking the visible one. Committing after an undo
//! discards everything past the cursor, so there is never more than one redo path.

use crate::draw::Snapshot;
use log::debug;
use parking_lot::Mutex;
use std::sync::Arc;

/// Snapshot chain with a cursor.
///
/// `snapshots[0]` is always the empty canvas and `cursor` always indexes a
/// valid entry.
#[derive(Debug, Clone)]
pub struct History {
    snapshots: Vec<Snapshot>,
    cursor: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// History holding only the empty canvas.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::empty()],
            cursor: 0,
        }
    }

    /// Drops every snapshot after the cursor, appends `snapshot` and makes it visible.
    pub fn commit(&mut self, snapshot: Snapshot) {
        let discarded = self.snapshots.len() - self.cursor - 1;
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(snapshot);
        self.cursor += 1;

        debug!(
            "History commit: cursor {} of {} ({} redo entries discarded)",
            self.cursor,
            self.snapshots.len(),
            discarded
        );
    }

    /// Steps back one snapshot. Returns the now-visible snapshot, or `None` at the start.
    pub fn undo(&mut self) -> Option<&Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        debug!("Undo: cursor {}", self.cursor);
        Some(&self.snapshots[self.cursor])
    }

    /// Steps forward one snapshot. Returns the now-visible snapshot, or `None` at the end.
    pub fn redo(&mut self) -> Option<&Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        debug!("Redo: cursor {}", self.cursor);
        Some(&self.snapshots[self.cursor])
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Commits an empty canvas; the strokes stay reachable through undo.
    pub fn clear(&mut self) {
        self.commit(Snapshot::empty());
    }

    /// The visible snapshot.
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.cursor]
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Number of snapshots, including the initial empty one.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: the initial empty snapshot is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

/// Cloneable handle to one [`History`] behind a mutex.
///
/// Hosts that render on one thread and take input on another share the same
/// chain through this handle.
#[derive(Debug, Clone, Default)]
pub struct SharedHistory {
    inner: Arc<Mutex<History>>,
}

impl SharedHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commit(&self, snapshot: Snapshot) {
        self.inner.lock().commit(snapshot);
    }

    /// Appends `stroke` to the visible snapshot and commits the result in one step.
    pub fn commit_stroke(&self, stroke: crate::draw::Stroke) {
        let mut history = self.inner.lock();
        let next = history.current().with_stroke(stroke);
        history.commit(next);
    }

    pub fn undo(&self) -> Option<Snapshot> {
        self.inner.lock().undo().cloned()
    }

    pub fn redo(&self) -> Option<Snapshot> {
        self.inner.lock().redo().cloned()
    }

    pub fn can_undo(&self) -> bool {
        self.inner.lock().can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.inner.lock().can_redo()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Copy of the visible snapshot. Strokes are reference-counted, so this is cheap.
    pub fn current(&self) -> Snapshot {
        self.inner.lock().current().clone()
    }

    /// Runs `f` with the history locked.
    pub fn with<R>(&self, f: impl FnOnce(&History) -> R) -> R {
        f(&self.inner.lock())
    }
}
