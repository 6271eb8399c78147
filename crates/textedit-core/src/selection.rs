//! Cursor, selection and movement.
//!
//! The selection is stored normalized (`start <= end`). Interactive operations track an
//! anchor/active pair (`interactive_start`, `interactive_end`) separately so that extending a
//! selection with Shift keeps the side that did not move.

use crate::layout::{character_index, column_of, next_grapheme, prev_grapheme};
use crate::{Coordinates, TextEditor};

/// How [`TextEditor::set_selection`] expands its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// Endpoints are used as given.
    #[default]
    Normal,
    /// Endpoints snap outward to word boundaries.
    Word,
    /// Whole lines, including the trailing line break.
    Line,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CharClass {
    Word,
    Whitespace,
    Punctuation,
}

fn class_of(ch: char) -> CharClass {
    if ch.is_alphanumeric() || ch == '_' {
        CharClass::Word
    } else if ch.is_whitespace() {
        CharClass::Whitespace
    } else {
        CharClass::Punctuation
    }
}

impl TextEditor {
    /// Cursor position, clamped into the document.
    pub fn cursor_position(&self) -> Coordinates {
        self.sanitize(self.state.cursor)
    }

    /// Move the cursor without touching the selection.
    pub fn set_cursor_position(&mut self, at: Coordinates) {
        let at = self.sanitize(at);
        if self.state.cursor != at {
            self.state.cursor = at;
            self.cursor_position_changed = true;
            self.ensure_cursor_visible();
        }
    }

    /// Normalized selection start.
    pub fn selection_start(&self) -> Coordinates {
        self.state.selection_start
    }

    /// Normalized selection end.
    pub fn selection_end(&self) -> Coordinates {
        self.state.selection_end
    }

    /// Mode of the last interactive selection.
    pub fn selection_mode(&self) -> SelectionMode {
        self.selection_mode
    }

    /// Returns `true` if the selection is non-empty.
    pub fn has_selection(&self) -> bool {
        self.state.selection_end > self.state.selection_start
    }

    /// Set the selection start, swapping endpoints if needed.
    pub fn set_selection_start(&mut self, at: Coordinates) {
        self.state.selection_start = self.sanitize(at);
        if self.state.selection_start > self.state.selection_end {
            std::mem::swap(&mut self.state.selection_start, &mut self.state.selection_end);
        }
    }

    /// Set the selection end, swapping endpoints if needed.
    pub fn set_selection_end(&mut self, at: Coordinates) {
        self.state.selection_end = self.sanitize(at);
        if self.state.selection_start > self.state.selection_end {
            std::mem::swap(&mut self.state.selection_start, &mut self.state.selection_end);
        }
    }

    /// Select between two coordinates (either order), expanded according to `mode`.
    pub fn set_selection(&mut self, a: Coordinates, b: Coordinates, mode: SelectionMode) {
        let old = (self.state.selection_start, self.state.selection_end);
        let (mut start, mut end) = crate::editor::ordered(self.sanitize(a), self.sanitize(b));

        match mode {
            SelectionMode::Normal => {}
            SelectionMode::Word => {
                start = self.word_start(start);
                if !self.is_on_word_boundary(end) {
                    end = self.word_end(self.word_start(end));
                }
            }
            SelectionMode::Line => {
                start.column = 0;
                end = if end.line + 1 < self.lines.len() {
                    Coordinates::new(end.line + 1, 0)
                } else {
                    Coordinates::new(end.line, self.line_max_column(end.line))
                };
            }
        }

        self.state.selection_start = start;
        self.state.selection_end = end;
        if (start, end) != old {
            self.cursor_position_changed = true;
        }
    }

    /// Select the word around the cursor.
    pub fn select_word_under_cursor(&mut self) {
        let at = self.cursor_position();
        let (start, end) = (self.word_start(at), self.word_end(at));
        self.set_selection(start, end, SelectionMode::Normal);
        self.interactive_start = start;
        self.interactive_end = end;
    }

    /// Select the whole document.
    pub fn select_all(&mut self) {
        let end = Coordinates::new(self.lines.len(), 0);
        self.set_selection(Coordinates::origin(), end, SelectionMode::Normal);
        self.interactive_start = self.state.selection_start;
        self.interactive_end = self.state.selection_end;
    }

    /// Collapse selection and anchor onto `at` and move the cursor there.
    pub(crate) fn collapse_to(&mut self, at: Coordinates) {
        self.state.cursor = at;
        self.state.selection_start = at;
        self.state.selection_end = at;
        self.interactive_start = at;
        self.interactive_end = at;
        self.cursor_position_changed = true;
    }

    // ----- words -----

    /// Start of the word (or run of punctuation) at `at`. Whitespace before the position is
    /// skipped first.
    pub fn word_start(&self, at: Coordinates) -> Coordinates {
        let Some(line) = self.lines.get(at.line) else {
            return at;
        };
        let glyphs = &line.glyphs;
        let tab_size = self.tab_size();
        let mut index = character_index(glyphs, at.column, tab_size);
        if index >= glyphs.len() {
            return at;
        }
        while index > 0 && glyphs[index].ch.is_whitespace() {
            index -= 1;
        }
        let class = class_of(glyphs[index].ch);
        while index > 0 && class_of(glyphs[index - 1].ch) == class {
            index -= 1;
        }
        Coordinates::new(at.line, column_of(glyphs, index, tab_size))
    }

    /// End of the run of same-class characters starting at `at`.
    pub fn word_end(&self, at: Coordinates) -> Coordinates {
        let Some(line) = self.lines.get(at.line) else {
            return at;
        };
        let glyphs = &line.glyphs;
        let tab_size = self.tab_size();
        let mut index = character_index(glyphs, at.column, tab_size);
        if index >= glyphs.len() {
            return at;
        }
        let class = class_of(glyphs[index].ch);
        while index < glyphs.len() && class_of(glyphs[index].ch) == class {
            index += 1;
        }
        Coordinates::new(at.line, column_of(glyphs, index, tab_size))
    }

    /// Start of the next word after `at`, crossing line ends. Stays put at the end of the
    /// document.
    pub fn next_word(&self, at: Coordinates) -> Coordinates {
        let mut at = self.sanitize(at);
        let tab_size = self.tab_size();
        let mut index = self.character_index(at);
        let mut skipping_word = self.lines[at.line]
            .glyphs
            .get(index)
            .is_some_and(|g| class_of(g.ch) == CharClass::Word);

        loop {
            let glyphs = &self.lines[at.line].glyphs;
            if index >= glyphs.len() {
                if at.line + 1 >= self.lines.len() {
                    return Coordinates::new(at.line, column_of(glyphs, glyphs.len(), tab_size));
                }
                at = Coordinates::new(at.line + 1, 0);
                index = 0;
                skipping_word = false;
                continue;
            }
            let is_word = class_of(glyphs[index].ch) == CharClass::Word;
            if is_word && !skipping_word {
                return Coordinates::new(at.line, column_of(glyphs, index, tab_size));
            }
            if !is_word {
                skipping_word = false;
            }
            index = next_grapheme(glyphs, index);
        }
    }

    /// Returns `true` if `at` lies between two characters of different classes, or at either
    /// end of a line.
    pub fn is_on_word_boundary(&self, at: Coordinates) -> bool {
        let Some(line) = self.lines.get(at.line) else {
            return true;
        };
        if at.column == 0 {
            return true;
        }
        let glyphs = &line.glyphs;
        let index = character_index(glyphs, at.column, self.tab_size());
        if index >= glyphs.len() {
            return true;
        }
        class_of(glyphs[index].ch) != class_of(glyphs[index - 1].ch)
    }

    /// The word containing `at`.
    pub fn word_at(&self, at: Coordinates) -> String {
        let start = self.word_start(at);
        let end = self.word_end(at);
        self.text_range(start, end)
    }

    /// The word under the cursor.
    pub fn word_under_cursor(&self) -> String {
        self.word_at(self.cursor_position())
    }

    // ----- movement -----

    /// Update the anchor/active pair after the cursor moved away from `old`.
    fn track_interactive(&mut self, old: Coordinates, select: bool) {
        let cursor = self.state.cursor;
        if !select {
            self.interactive_start = cursor;
            self.interactive_end = cursor;
        } else if old == self.interactive_start {
            self.interactive_start = cursor;
        } else if old == self.interactive_end {
            self.interactive_end = cursor;
        } else {
            self.interactive_start = cursor;
            self.interactive_end = old;
        }
    }

    fn finish_move(&mut self, old: Coordinates, select: bool, mode: SelectionMode) {
        self.track_interactive(old, select);
        self.set_selection(self.interactive_start, self.interactive_end, mode);
        if self.state.cursor != old {
            self.cursor_position_changed = true;
        }
        self.ensure_cursor_visible();
    }

    /// Move up `amount` lines, keeping the column.
    pub fn move_up(&mut self, amount: usize, select: bool) {
        let old = self.state.cursor;
        self.state.cursor.line = old.line.saturating_sub(amount);
        if self.state.cursor != old {
            self.finish_move(old, select, SelectionMode::Normal);
        }
    }

    /// Move down `amount` lines, keeping the column.
    pub fn move_down(&mut self, amount: usize, select: bool) {
        let old = self.state.cursor;
        let last = self.lines.len().saturating_sub(1);
        self.state.cursor.line = old.line.saturating_add(amount).min(last);
        if self.state.cursor != old {
            self.finish_move(old, select, SelectionMode::Normal);
        }
    }

    /// Move left `amount` graphemes (or words), wrapping to the previous line.
    pub fn move_left(&mut self, amount: usize, select: bool, word_mode: bool) {
        let old = self.state.cursor;
        let mut cursor = self.cursor_position();
        for _ in 0..amount {
            let index = self.character_index(cursor);
            if index == 0 {
                if cursor.line == 0 {
                    break;
                }
                let line = cursor.line - 1;
                cursor = Coordinates::new(line, self.line_max_column(line));
            } else {
                let prev = prev_grapheme(&self.lines[cursor.line].glyphs, index);
                cursor = Coordinates::new(cursor.line, self.column_of(cursor.line, prev));
            }
            if word_mode {
                cursor = self.word_start(cursor);
            }
        }
        self.state.cursor = cursor;
        self.finish_move(old, select, word_selection(select, word_mode));
    }

    /// Move right `amount` graphemes (or words), wrapping to the next line.
    pub fn move_right(&mut self, amount: usize, select: bool, word_mode: bool) {
        let old = self.state.cursor;
        let mut cursor = self.cursor_position();
        for _ in 0..amount {
            let glyphs = &self.lines[cursor.line].glyphs;
            let index = character_index(glyphs, cursor.column, self.tab_size());
            if index >= glyphs.len() {
                if cursor.line + 1 >= self.lines.len() {
                    break;
                }
                cursor = Coordinates::new(cursor.line + 1, 0);
            } else if word_mode {
                cursor = self.next_word(cursor);
            } else {
                let next = next_grapheme(glyphs, index);
                cursor = Coordinates::new(cursor.line, self.column_of(cursor.line, next));
            }
        }
        self.state.cursor = cursor;
        self.finish_move(old, select, word_selection(select, word_mode));
    }

    /// Move to the start of the document.
    pub fn move_top(&mut self, select: bool) {
        let old = self.state.cursor;
        self.state.cursor = Coordinates::origin();
        if self.state.cursor != old {
            self.finish_move(old, select, SelectionMode::Normal);
        }
    }

    /// Move to column 0 of the last line.
    pub fn move_bottom(&mut self, select: bool) {
        let old = self.state.cursor;
        self.state.cursor = Coordinates::new(self.lines.len().saturating_sub(1), 0);
        if self.state.cursor != old {
            self.finish_move(old, select, SelectionMode::Normal);
        }
    }

    /// Move to column 0 of the current line.
    pub fn move_home(&mut self, select: bool) {
        let old = self.state.cursor;
        self.state.cursor = Coordinates::new(old.line, 0);
        if self.state.cursor != old {
            self.finish_move(old, select, SelectionMode::Normal);
        }
    }

    /// Move to the end of the current line.
    pub fn move_end(&mut self, select: bool) {
        let old = self.state.cursor;
        let line = self.cursor_position().line;
        self.state.cursor = Coordinates::new(line, self.line_max_column(line));
        if self.state.cursor != old {
            self.finish_move(old, select, SelectionMode::Normal);
        }
    }
}

fn word_selection(select: bool, word_mode: bool) -> SelectionMode {
    if select && word_mode {
        SelectionMode::Word
    } else {
        SelectionMode::Normal
    }
}
