//! Undo/redo log.
//!
//! Every mutating operation records one [`UndoRecord`]: the exact text it removed and added
//! (with the coordinates of both spans) and owned snapshots of the selection/cursor state
//! before and after. Replaying a record only touches text; colorization of the affected lines
//! is recomputed rather than restored.
//!
//! Recorded columns are measured with the tab size in force when the record was added. Replay
//! converts them to the current tab size through the glyph index, against the document state
//! each coordinate was taken from.

use crate::layout::rebase_column;
use crate::{Coordinates, TextEditor};

/// Snapshot of selection and cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EditorState {
    /// Normalized selection start.
    pub selection_start: Coordinates,
    /// Normalized selection end.
    pub selection_end: Coordinates,
    /// Cursor position.
    pub cursor: Coordinates,
}

/// One invertible edit.
///
/// A pure insert has empty `removed`, a pure delete has empty `added`; a replace (typing over a
/// selection, paste, overwrite mode, block indent) has both.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UndoRecord {
    /// Text inserted by the edit.
    pub added: String,
    /// Where `added` starts.
    pub added_start: Coordinates,
    /// Where `added` ends.
    pub added_end: Coordinates,
    /// Text removed by the edit.
    pub removed: String,
    /// Where `removed` started.
    pub removed_start: Coordinates,
    /// Where `removed` ended.
    pub removed_end: Coordinates,
    /// State before the edit.
    pub before: EditorState,
    /// State after the edit.
    pub after: EditorState,
    /// Tab size the columns above are measured with. Set by [`TextEditor::add_undo`].
    pub tab_size: usize,
}

impl UndoRecord {
    /// Start a record that captures `before`.
    pub fn new(before: EditorState) -> Self {
        Self {
            before,
            ..Self::default()
        }
    }

    /// Returns `true` if the record changes no text.
    pub fn is_noop(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Ordered records plus a cursor splitting applied records (`< index`) from redoable ones.
#[derive(Debug, Clone, Default)]
pub struct UndoLog {
    records: Vec<UndoRecord>,
    index: usize,
}

impl UndoLog {
    /// An empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, discarding any redo tail.
    pub fn push(&mut self, record: UndoRecord) {
        self.records.truncate(self.index);
        self.records.push(record);
        self.index = self.records.len();
    }

    /// Returns `true` if a record can be undone.
    pub fn can_undo(&self) -> bool {
        self.index > 0
    }

    /// Returns `true` if a record can be redone.
    pub fn can_redo(&self) -> bool {
        self.index < self.records.len()
    }

    /// Number of applied records.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Total number of records, applied or not.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if nothing was ever recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in order.
    pub fn records(&self) -> &[UndoRecord] {
        &self.records
    }

    /// Move the cursor back one record and return it.
    pub fn step_back(&mut self) -> Option<UndoRecord> {
        if !self.can_undo() {
            return None;
        }
        self.index -= 1;
        Some(self.records[self.index].clone())
    }

    /// Return the next redoable record and move the cursor past it.
    pub fn step_forward(&mut self) -> Option<UndoRecord> {
        let record = self.records.get(self.index)?.clone();
        self.index += 1;
        Some(record)
    }

    /// Drop every record.
    pub fn clear(&mut self) {
        self.records.clear();
        self.index = 0;
    }
}

impl TextEditor {
    /// Append a record to the undo log, discarding the redo tail.
    ///
    /// The record's columns are taken to be measured with the current tab size.
    pub fn add_undo(&mut self, mut record: UndoRecord) {
        record.tab_size = self.tab_size();
        self.undo_log.push(record);
    }

    /// The undo log.
    pub fn undo_log(&self) -> &UndoLog {
        &self.undo_log
    }

    /// Returns `true` if there is something to undo (and the editor is writable).
    pub fn can_undo(&self) -> bool {
        !self.options.read_only && self.undo_log.can_undo()
    }

    /// Returns `true` if there is something to redo (and the editor is writable).
    pub fn can_redo(&self) -> bool {
        !self.options.read_only && self.undo_log.can_redo()
    }

    /// Undo up to `steps` records.
    pub fn undo(&mut self, steps: usize) {
        for _ in 0..steps {
            if !self.can_undo() {
                break;
            }
            let Some(record) = self.undo_log.step_back() else {
                break;
            };
            tracing::trace!(index = self.undo_log.index(), "undo");
            self.revert(&record);
        }
    }

    /// Redo up to `steps` records.
    pub fn redo(&mut self, steps: usize) {
        for _ in 0..steps {
            if !self.can_redo() {
                break;
            }
            let Some(record) = self.undo_log.step_forward() else {
                break;
            };
            tracing::trace!(index = self.undo_log.index(), "redo");
            self.reapply(&record);
        }
    }

    fn revert(&mut self, record: &UndoRecord) {
        let from = record.tab_size;
        if !record.added.is_empty() {
            let start = self.rebase(record.added_start, from);
            let end = self.rebase(record.added_end, from);
            self.delete_range(start, end);
        }
        if !record.removed.is_empty() {
            let start = self.rebase(record.removed_start, from);
            self.insert_text_at(start, &record.removed);
        }
        self.restore_state(record.before, from);
    }

    fn reapply(&mut self, record: &UndoRecord) {
        let from = record.tab_size;
        if !record.removed.is_empty() {
            let start = self.rebase(record.removed_start, from);
            let end = self.rebase(record.removed_end, from);
            self.delete_range(start, end);
        }
        if !record.added.is_empty() {
            let start = self.rebase(record.added_start, from);
            self.insert_text_at(start, &record.added);
        }
        self.restore_state(record.after, from);
    }

    /// Convert a recorded coordinate to the current tab size.
    fn rebase(&self, at: Coordinates, recorded_tab_size: usize) -> Coordinates {
        let tab_size = self.tab_size();
        if recorded_tab_size == 0 || recorded_tab_size == tab_size {
            return at;
        }
        match self.lines.get(at.line) {
            Some(line) => Coordinates::new(
                at.line,
                rebase_column(&line.glyphs, at.column, recorded_tab_size, tab_size),
            ),
            None => at,
        }
    }

    fn restore_state(&mut self, state: EditorState, recorded_tab_size: usize) {
        let state = EditorState {
            selection_start: self.rebase(state.selection_start, recorded_tab_size),
            selection_end: self.rebase(state.selection_end, recorded_tab_size),
            cursor: self.rebase(state.cursor, recorded_tab_size),
        };
        self.state = state;
        self.interactive_start = state.selection_start;
        self.interactive_end = state.selection_end;
        self.cursor_position_changed = true;
        self.ensure_cursor_visible();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str) -> UndoRecord {
        UndoRecord {
            added: text.to_string(),
            ..UndoRecord::default()
        }
    }

    #[test]
    fn test_push_truncates_redo_tail() {
        let mut log = UndoLog::new();
        log.push(record("a"));
        log.push(record("b"));
        assert_eq!(log.step_back().map(|r| r.added), Some("b".to_string()));
        assert!(log.can_redo());

        log.push(record("c"));
        assert!(!log.can_redo());
        assert_eq!(log.len(), 2);
        assert_eq!(log.records()[1].added, "c");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut log = UndoLog::new();
        assert!(log.step_back().is_none());
        assert!(log.step_forward().is_none());

        log.push(record("a"));
        assert!(log.step_back().is_some());
        assert!(!log.can_undo());
        assert!(log.step_forward().is_some());
        assert_eq!(log.index(), 1);

        log.clear();
        assert!(log.is_empty());
        assert!(record("").is_noop());
    }
}
