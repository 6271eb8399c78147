//! Frame output.
//!
//! [`TextEditor::render`] consumes one frame of host input and produces a [`Frame`]: the visible
//! lines as colored cells plus everything a host needs to draw the gutter, selection, line
//! highlights and cursor. The editor never draws anything itself.

use crate::input::{Clipboard, FrameInput};
use crate::layout::{cell_width_at, character_index};
use crate::palette::Palette;
use crate::{Coordinates, TextEditor};
use textedit_lang::PaletteIndex;

/// Pixels between the gutter and the text.
pub const LEFT_MARGIN: f32 = 10.0;

/// Host-chosen framing for one render call.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameRequest {
    /// Window/widget title.
    pub title: String,
    /// Pixel size of the editor area. A zero height shows every line.
    pub size: (f32, f32),
    /// Draw a border around the editor.
    pub border: bool,
}

impl Default for FrameRequest {
    fn default() -> Self {
        Self {
            title: String::from("TextEditor"),
            size: (640.0, 480.0),
            border: false,
        }
    }
}

/// Marker drawn over visible whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WhitespaceMarker {
    /// A centered dot.
    Space,
    /// An arrow spanning the tab's cells.
    Tab,
}

/// One drawn glyph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    /// The character.
    pub ch: char,
    /// Visual column the cell starts at.
    pub column: usize,
    /// Cells covered (tabs expand to the next stop).
    pub width: usize,
    /// Packed color.
    pub color: u32,
    /// Whitespace marker, when whitespace is shown.
    pub whitespace: Option<WhitespaceMarker>,
}

/// One visible line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameLine {
    /// Zero-based line index.
    pub line: usize,
    /// Gutter label (one-based, right-aligned).
    pub number: String,
    /// Glyph cells in visual order.
    pub cells: Vec<Cell>,
    /// Selected column span `[start, end)`. A line break inside the selection adds one column.
    pub selection: Option<(usize, usize)>,
    /// Whole-line fills in draw order, tagged with the palette slot they come from.
    pub highlights: Vec<(PaletteIndex, u32)>,
    /// Error message attached to this line.
    pub error: Option<String>,
}

/// Cursor drawing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CursorState {
    /// Cursor coordinate.
    pub position: Coordinates,
    /// The blink phase shows the cursor this frame.
    pub visible: bool,
    /// In overwrite mode, the width in cells of the glyph being covered.
    pub overwrite_width: Option<usize>,
    /// Packed color.
    pub color: u32,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    /// Title from the request.
    pub title: String,
    /// Size from the request.
    pub size: (f32, f32),
    /// Border flag from the request.
    pub border: bool,
    /// Background color.
    pub background: u32,
    /// Line number color.
    pub line_number_color: u32,
    /// Selection fill color.
    pub selection_color: u32,
    /// Width of the gutter in character cells.
    pub gutter_columns: usize,
    /// Pixel x where text begins.
    pub text_start: f32,
    /// Pixel height of one line.
    pub line_height: f32,
    /// Lines in the document.
    pub total_lines: usize,
    /// Visible lines, top to bottom.
    pub lines: Vec<FrameLine>,
    /// Cursor, when the editor has focus.
    pub cursor: Option<CursorState>,
}

impl Frame {
    /// The frame line for document line `line`, if visible.
    pub fn line(&self, line: usize) -> Option<&FrameLine> {
        self.lines.iter().find(|l| l.line == line)
    }
}

impl TextEditor {
    /// Width of the line-number gutter in character cells.
    pub fn gutter_columns(&self) -> usize {
        format!(" {} ", self.lines.len()).len()
    }

    /// Pixel x at which text starts, for a character cell `char_width` pixels wide.
    pub fn text_start(&self, char_width: f32) -> f32 {
        self.gutter_columns() as f32 * char_width + LEFT_MARGIN
    }

    /// Process one frame of input and describe what to draw.
    ///
    /// Change flags are reset first, then keyboard and mouse input are applied (when enabled),
    /// pending colorization runs, and the cursor is scrolled into view if requested.
    pub fn render(
        &mut self,
        request: &FrameRequest,
        input: &FrameInput,
        clipboard: &mut dyn Clipboard,
    ) -> Frame {
        self.now = input.time;
        self.text_changed = false;
        self.cursor_position_changed = false;

        let line_height = input.char_advance.1 * self.options.line_spacing;
        self.page_lines = if request.size.1 > 0.0 && line_height > 0.0 {
            ((request.size.1 / line_height).floor() as usize).max(1)
        } else {
            self.lines.len()
        };

        if self.options.handle_keyboard_inputs {
            self.handle_keyboard_inputs(input, clipboard);
        }
        if self.options.handle_mouse_inputs {
            self.handle_mouse_inputs(input);
        }
        self.colorize_pending();
        if self.scroll_to_cursor {
            self.apply_scroll_to_cursor();
        }
        if self.text_changed || self.cursor_position_changed {
            self.blink_start = self.now;
        }

        let palette = self.palette.with_alpha(input.alpha);
        let first = self.scroll_line.min(self.lines.len().saturating_sub(1));
        let last = (first + self.page_lines + 1).min(self.lines.len());
        let lines = (first..last)
            .map(|line| self.frame_line(line, &palette, input.focused))
            .collect();

        Frame {
            title: request.title.clone(),
            size: request.size,
            border: request.border,
            background: palette[PaletteIndex::Background],
            line_number_color: palette[PaletteIndex::LineNumber],
            selection_color: palette[PaletteIndex::Selection],
            gutter_columns: self.gutter_columns(),
            text_start: self.text_start(input.char_advance.0),
            line_height,
            total_lines: self.lines.len(),
            lines,
            cursor: input.focused.then(|| self.cursor_state(&palette)),
        }
    }

    fn frame_line(&self, line: usize, palette: &Palette, focused: bool) -> FrameLine {
        let tab_size = self.tab_size();
        let glyphs = &self.lines[line].glyphs;

        let mut cells = Vec::with_capacity(glyphs.len());
        let mut column = 0;
        for glyph in glyphs {
            let width = cell_width_at(glyph.ch, column, tab_size);
            let whitespace = match glyph.ch {
                ' ' if self.options.show_whitespace => Some(WhitespaceMarker::Space),
                '\t' if self.options.show_whitespace => Some(WhitespaceMarker::Tab),
                _ => None,
            };
            let color = if self.options.colorizer_enabled {
                palette.glyph_color(glyph)
            } else {
                palette[PaletteIndex::Default]
            };
            cells.push(Cell {
                ch: glyph.ch,
                column,
                width,
                color,
                whitespace,
            });
            column += width;
        }

        let mut highlights = Vec::new();
        if self.breakpoints.contains_key(&line) {
            highlights.push((PaletteIndex::Breakpoint, palette[PaletteIndex::Breakpoint]));
        }
        let error = self.error_markers.get(&line).cloned();
        if error.is_some() {
            highlights.push((PaletteIndex::ErrorMarker, palette[PaletteIndex::ErrorMarker]));
        }
        if self.cursor_position().line == line && !self.has_selection() {
            let fill = if focused {
                PaletteIndex::CurrentLineFill
            } else {
                PaletteIndex::CurrentLineFillInactive
            };
            highlights.push((fill, palette[fill]));
            highlights.push((PaletteIndex::CurrentLineEdge, palette[PaletteIndex::CurrentLineEdge]));
        }

        FrameLine {
            line,
            number: format!("{:>width$} ", line + 1, width = self.gutter_columns() - 2),
            cells,
            selection: self.selection_span(line, column),
            highlights,
            error,
        }
    }

    fn selection_span(&self, line: usize, line_width: usize) -> Option<(usize, usize)> {
        let start = self.state.selection_start;
        let end = self.state.selection_end;
        if line < start.line || line > end.line {
            return None;
        }
        let from = if start.line < line { 0 } else { start.column };
        let to = if end.line > line { line_width + 1 } else { end.column };
        (from < to).then_some((from, to))
    }

    fn cursor_state(&self, palette: &Palette) -> CursorState {
        let position = self.cursor_position();
        let period = self.options.cursor_blink_period;
        let visible = if period > 0.0 {
            (self.now - self.blink_start).rem_euclid(period) >= period / 2.0
        } else {
            true
        };

        let overwrite_width = if self.overwrite {
            let glyphs = &self.lines[position.line].glyphs;
            let index = character_index(glyphs, position.column, self.tab_size());
            glyphs
                .get(index)
                .map(|g| cell_width_at(g.ch, position.column, self.tab_size()))
        } else {
            None
        };

        CursorState {
            position,
            visible,
            overwrite_width,
            color: palette[PaletteIndex::Cursor],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::MemoryClipboard;

    #[test]
    fn test_selection_span_covers_line_break() {
        let mut editor = TextEditor::new();
        editor.set_text("ab\ncd");
        editor.set_selection(Coordinates::new(0, 1), Coordinates::new(1, 1), Default::default());
        let frame = editor.render(
            &FrameRequest::default(),
            &FrameInput::default(),
            &mut MemoryClipboard::default(),
        );
        assert_eq!(frame.line(0).and_then(|l| l.selection), Some((1, 3)));
        assert_eq!(frame.line(1).and_then(|l| l.selection), Some((0, 1)));
    }

    #[test]
    fn test_gutter_tracks_line_count() {
        let mut editor = TextEditor::new();
        editor.set_text_lines(&["x"; 120]);
        assert_eq!(editor.gutter_columns(), 5);
        assert_eq!(editor.text_start(8.0), 50.0);
    }
}
