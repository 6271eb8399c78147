//! Text mutation.
//!
//! [`TextEditor::insert_text_at`] and [`TextEditor::delete_range`] are the only primitives that
//! touch the line buffer; they keep the dirty range and annotations in step but record no
//! undo. Every interactive operation built on top of them records exactly one [`UndoRecord`].

use crate::buffer::{Glyph, Line};
use crate::editor::ordered;
use crate::input::Clipboard;
use crate::layout::{character_index, column_of, next_grapheme, prev_grapheme};
use crate::text::{leading_blanks, strip_carriage_returns};
use crate::undo::UndoRecord;
use crate::{Coordinates, TextEditor};

impl TextEditor {
    /// Insert `text` at `at` and return the coordinate just past it.
    ///
    /// `'\r'` is dropped; each `'\n'` splits the line. The number of lines added is
    /// `end.line - at.line` for the returned `end` (with `at` sanitized). Records no undo.
    pub fn insert_text_at(&mut self, at: Coordinates, text: &str) -> Coordinates {
        let at = self.sanitize(at);
        let text = strip_carriage_returns(text);
        let tab_size = self.tab_size();
        let first = at.line;
        let index = character_index(&self.lines[first].glyphs, at.column, tab_size);

        let mut segments = text.split('\n');
        let head = segments.next().unwrap_or_default();
        let mut new_lines: Vec<Line> = segments.map(Line::from_text).collect();

        let tail = self.lines[first].glyphs.split_off(index);
        self.lines[first].glyphs.extend(head.chars().map(Glyph::new));

        let added = new_lines.len();
        let end = if let Some(mut last) = new_lines.pop() {
            let end_index = last.glyphs.len();
            last.glyphs.extend(tail);
            let end_column = column_of(&last.glyphs, end_index, tab_size);
            new_lines.push(last);
            let rest = self.lines.split_off(first + 1);
            self.lines.extend(new_lines);
            self.lines.extend(rest);
            self.on_lines_inserted(first + 1, added);
            Coordinates::new(first + added, end_column)
        } else {
            let glyphs = &mut self.lines[first].glyphs;
            let end_index = glyphs.len();
            glyphs.extend(tail);
            Coordinates::new(first, column_of(glyphs, end_index, tab_size))
        };

        self.colorizer.mark_dirty(first..first + added + 1);
        self.text_changed = true;
        end
    }

    /// Delete the text between two coordinates (either order). Records no undo.
    ///
    /// Lines fully inside the range are removed and the end line's remainder joins the start
    /// line. Annotations on removed lines are dropped.
    pub fn delete_range(&mut self, a: Coordinates, b: Coordinates) {
        let (start, end) = ordered(self.sanitize(a), self.sanitize(b));
        if start == end {
            return;
        }
        let tab_size = self.tab_size();
        let start_index = character_index(&self.lines[start.line].glyphs, start.column, tab_size);
        let end_index = character_index(&self.lines[end.line].glyphs, end.column, tab_size);

        if start.line == end.line {
            let glyphs = &mut self.lines[start.line].glyphs;
            glyphs.drain(start_index..end_index.max(start_index));
        } else {
            let tail = self.lines[end.line].glyphs.split_off(end_index);
            let glyphs = &mut self.lines[start.line].glyphs;
            glyphs.truncate(start_index);
            glyphs.extend(tail);
            self.lines.drain(start.line + 1..=end.line);
            self.on_lines_removed(start.line + 1..end.line + 1);
        }

        self.colorizer.mark_dirty(start.line..start.line + 1);
        self.text_changed = true;
    }

    /// Insert `text` at the cursor, replacing the selection. One undo record.
    pub fn insert_text(&mut self, text: &str) {
        if self.options.read_only {
            return;
        }
        let text = strip_carriage_returns(text);
        if text.is_empty() {
            return;
        }
        let mut record = UndoRecord::new(self.state);
        self.take_selection_into(&mut record);

        let at = self.cursor_position();
        let end = self.insert_text_at(at, &text);
        record.added = text;
        record.added_start = at;
        record.added_end = end;
        self.collapse_to(end);
        self.finish_edit(record);
    }

    /// Type one character at the cursor.
    ///
    /// `'\n'` starts a new line (auto-indented when the language asks for it). `'\t'` over a
    /// multi-line selection, or one starting at column 0, indents the selected lines (outdents
    /// with `shift`). In overwrite mode the character replaces the next grapheme.
    pub fn enter_character(&mut self, ch: char, shift: bool) {
        if self.options.read_only {
            return;
        }
        let mut record = UndoRecord::new(self.state);

        if self.has_selection() {
            let start = self.state.selection_start;
            let end = self.state.selection_end;
            if ch == '\t' && (start.column == 0 || start.line != end.line) {
                self.indent_selection(shift, record);
                return;
            }
        }
        let replaced_selection = self.take_selection_into(&mut record);

        let at = self.cursor_position();
        let added = if ch == '\n' {
            let mut added = String::from("\n");
            if self.language.auto_indentation() {
                let line = &self.lines[at.line];
                let before = line.text_between(0, self.character_index(at));
                added.push_str(leading_blanks(&before));
                if before.trim_end().ends_with('{') {
                    added.push('\t');
                }
            }
            added
        } else {
            if self.overwrite && !replaced_selection {
                let glyphs = &self.lines[at.line].glyphs;
                let index = character_index(glyphs, at.column, self.tab_size());
                if index < glyphs.len() {
                    let from = Coordinates::new(at.line, column_of(glyphs, index, self.tab_size()));
                    let next = next_grapheme(glyphs, index);
                    let to = Coordinates::new(at.line, column_of(glyphs, next, self.tab_size()));
                    record.removed = self.text_range(from, to);
                    record.removed_start = from;
                    record.removed_end = to;
                    self.delete_range(from, to);
                }
            }
            ch.to_string()
        };

        let at = self.cursor_position();
        let end = self.insert_text_at(at, &added);
        record.added = added;
        record.added_start = at;
        record.added_end = end;
        self.collapse_to(end);
        self.finish_edit(record);
    }

    /// Delete the selection, or the grapheme (or line break) before the cursor.
    ///
    /// With auto-indentation, inside leading whitespace that ends in a space, deletes back to
    /// the previous tab stop.
    pub fn backspace(&mut self) {
        if self.options.read_only {
            return;
        }
        let mut record = UndoRecord::new(self.state);
        if !self.take_selection_into(&mut record) {
            let at = self.cursor_position();
            let (from, to) = if at.column == 0 {
                if at.line == 0 {
                    return;
                }
                let prev = at.line - 1;
                (Coordinates::new(prev, self.line_max_column(prev)), at)
            } else {
                let tab_size = self.tab_size();
                let glyphs = &self.lines[at.line].glyphs;
                let index = character_index(glyphs, at.column, tab_size);
                let column = column_of(glyphs, index, tab_size);
                let mut from = prev_grapheme(glyphs, index);
                if self.language.auto_indentation()
                    && glyphs[..index].iter().all(Glyph::is_blank)
                    && glyphs[index - 1].ch == ' '
                {
                    let stop = (column - 1) / tab_size * tab_size;
                    from = index;
                    while from > 0
                        && glyphs[from - 1].ch == ' '
                        && column_of(glyphs, from - 1, tab_size) >= stop
                    {
                        from -= 1;
                    }
                }
                (
                    Coordinates::new(at.line, column_of(glyphs, from, tab_size)),
                    Coordinates::new(at.line, column),
                )
            };
            record.removed = self.text_range(from, to);
            record.removed_start = from;
            record.removed_end = to;
            self.delete_range(from, to);
            self.collapse_to(from);
        }
        self.finish_edit(record);
    }

    /// Delete the selection, or the grapheme (or line break) after the cursor.
    pub fn delete(&mut self) {
        if self.options.read_only {
            return;
        }
        let mut record = UndoRecord::new(self.state);
        if !self.take_selection_into(&mut record) {
            let at = self.cursor_position();
            let tab_size = self.tab_size();
            let glyphs = &self.lines[at.line].glyphs;
            let index = character_index(glyphs, at.column, tab_size);
            let (from, to) = if index >= glyphs.len() {
                if at.line + 1 >= self.lines.len() {
                    return;
                }
                (at, Coordinates::new(at.line + 1, 0))
            } else {
                let next = next_grapheme(glyphs, index);
                (
                    Coordinates::new(at.line, column_of(glyphs, index, tab_size)),
                    Coordinates::new(at.line, column_of(glyphs, next, tab_size)),
                )
            };
            record.removed = self.text_range(from, to);
            record.removed_start = from;
            record.removed_end = to;
            self.delete_range(from, to);
            self.collapse_to(from);
        }
        self.finish_edit(record);
    }

    /// Copy the selection, or the current line when nothing is selected.
    pub fn copy(&self, clipboard: &mut dyn Clipboard) {
        let text = if self.has_selection() {
            self.selected_text()
        } else {
            self.current_line_text()
        };
        clipboard.set_text(&text);
    }

    /// Copy and delete the selection. Read-only editors only copy.
    pub fn cut(&mut self, clipboard: &mut dyn Clipboard) {
        if self.options.read_only {
            self.copy(clipboard);
            return;
        }
        if !self.has_selection() {
            return;
        }
        self.copy(clipboard);
        let mut record = UndoRecord::new(self.state);
        self.take_selection_into(&mut record);
        self.finish_edit(record);
    }

    /// Replace the selection with the clipboard's text.
    pub fn paste(&mut self, clipboard: &mut dyn Clipboard) {
        if let Some(text) = clipboard.text() {
            self.insert_text(&text);
        }
    }

    /// Delete the selection without recording undo.
    pub fn delete_selection(&mut self) {
        if !self.has_selection() {
            return;
        }
        let start = self.state.selection_start;
        self.delete_range(start, self.state.selection_end);
        self.collapse_to(start);
    }

    /// Delete the selection, noting what was removed in `record`. Returns `false` when there
    /// was nothing selected.
    fn take_selection_into(&mut self, record: &mut UndoRecord) -> bool {
        if !self.has_selection() {
            return false;
        }
        record.removed = self.selected_text();
        record.removed_start = self.state.selection_start;
        record.removed_end = self.state.selection_end;
        self.delete_selection();
        true
    }

    fn finish_edit(&mut self, mut record: UndoRecord) {
        if record.is_noop() {
            return;
        }
        record.after = self.state;
        self.add_undo(record);
        self.ensure_cursor_visible();
    }

    /// Indent (or outdent) every line the selection touches.
    fn indent_selection(&mut self, outdent: bool, mut record: UndoRecord) {
        let selection_end = self.state.selection_end;
        let mut start = self.state.selection_start;
        let mut end = selection_end;
        start.column = 0;
        if end.column == 0 && end.line > start.line {
            end.line -= 1;
        }
        end.column = self.line_max_column(end.line);

        record.removed = self.text_range(start, end);
        record.removed_start = start;
        record.removed_end = end;

        let tab_size = self.tab_size();
        let mut modified = false;
        for line in &mut self.lines[start.line..=end.line] {
            let glyphs = &mut line.glyphs;
            if !outdent {
                glyphs.insert(0, Glyph::new('\t'));
                modified = true;
            } else if glyphs.first().is_some_and(|g| g.ch == '\t') {
                glyphs.remove(0);
                modified = true;
            } else {
                let spaces = glyphs.iter().take(tab_size).take_while(|g| g.ch == ' ').count();
                if spaces > 0 {
                    glyphs.drain(..spaces);
                    modified = true;
                }
            }
        }
        if !modified {
            return;
        }
        self.colorizer.mark_dirty(start.line..end.line + 1);
        self.text_changed = true;

        let new_end = Coordinates::new(end.line, self.line_max_column(end.line));
        record.added = self.text_range(start, new_end);
        record.added_start = start;
        record.added_end = new_end;

        let selected_to = if selection_end.column == 0 {
            selection_end
        } else {
            new_end
        };
        self.state.selection_start = start;
        self.state.selection_end = selected_to;
        self.state.cursor = selected_to;
        self.interactive_start = start;
        self.interactive_end = selected_to;
        self.cursor_position_changed = true;
        self.finish_edit(record);
    }
}
