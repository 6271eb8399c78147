//! Coordinate model: raw glyph index <-> tab-aware visual column.
//!
//! Widths follow UAX #11 (wide CJK glyphs take two columns); `'\t'` advances to the next
//! multiple of the tab size. Storage and editing work in glyph indices, cursor movement and
//! selection work in columns, and the two are only converted here.

use crate::buffer::Glyph;
use crate::{Coordinates, TextEditor};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthChar;

/// Tab size used when none is configured.
pub const DEFAULT_TAB_SIZE: usize = 4;

/// Largest accepted tab size.
pub const MAX_TAB_SIZE: usize = 32;

/// Visual width of a character (UAX #11). Control characters count as one column.
pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(1)
}

/// Width of `ch` when it starts at visual column `column`.
pub fn cell_width_at(ch: char, column: usize, tab_size: usize) -> usize {
    if ch == '\t' {
        next_tab_stop(column, tab_size) - column
    } else {
        char_width(ch)
    }
}

/// The first tab stop strictly after `column`.
pub fn next_tab_stop(column: usize, tab_size: usize) -> usize {
    let tab_size = tab_size.max(1);
    (column / tab_size) * tab_size + tab_size
}

/// Visual column at which glyph `index` starts. Indices past the end give the line width.
pub fn column_of(glyphs: &[Glyph], index: usize, tab_size: usize) -> usize {
    glyphs
        .iter()
        .take(index)
        .fold(0, |column, g| column + cell_width_at(g.ch, column, tab_size))
}

/// Raw index of the first glyph that starts at or after `column`.
///
/// A column inside a tab or a wide glyph rounds up to the following glyph. Zero-width glyphs
/// (combining marks) stay attached to the glyph before them.
pub fn character_index(glyphs: &[Glyph], column: usize, tab_size: usize) -> usize {
    let mut x = 0;
    let mut index = 0;
    while index < glyphs.len() {
        let width = cell_width_at(glyphs[index].ch, x, tab_size);
        if x >= column && (index == 0 || width > 0) {
            break;
        }
        x += width;
        index += 1;
    }
    index
}

/// Re-express `column`, measured with tab size `from`, in columns of tab size `to`.
///
/// The glyph index is what stays fixed; a column inside a tab snaps to the glyph after it.
pub fn rebase_column(glyphs: &[Glyph], column: usize, from: usize, to: usize) -> usize {
    if from == to {
        return column;
    }
    column_of(glyphs, character_index(glyphs, column, from), to)
}

/// Visual width of the whole line.
pub fn line_width(glyphs: &[Glyph], tab_size: usize) -> usize {
    column_of(glyphs, glyphs.len(), tab_size)
}

/// Glyph indices that begin a grapheme cluster, plus `glyphs.len()`.
fn grapheme_starts(glyphs: &[Glyph]) -> Vec<usize> {
    let text: String = glyphs.iter().map(|g| g.ch).collect();
    let mut starts = Vec::with_capacity(glyphs.len() + 1);
    let mut char_index = 0;
    for grapheme in text.graphemes(true) {
        starts.push(char_index);
        char_index += grapheme.chars().count();
    }
    starts.push(char_index);
    starts
}

/// Index of the next grapheme boundary after `index`.
pub(crate) fn next_grapheme(glyphs: &[Glyph], index: usize) -> usize {
    if index >= glyphs.len() {
        return glyphs.len();
    }
    if glyphs[index..].iter().all(|g| g.ch.is_ascii()) {
        return index + 1;
    }
    grapheme_starts(glyphs)
        .into_iter()
        .find(|&start| start > index)
        .unwrap_or(glyphs.len())
}

/// Index of the previous grapheme boundary before `index`.
pub(crate) fn prev_grapheme(glyphs: &[Glyph], index: usize) -> usize {
    if index == 0 {
        return 0;
    }
    let index = index.min(glyphs.len());
    if glyphs[..index].iter().all(|g| g.ch.is_ascii()) {
        return index - 1;
    }
    grapheme_starts(glyphs)
        .into_iter()
        .rev()
        .find(|&start| start < index)
        .unwrap_or(0)
}

impl TextEditor {
    /// Raw glyph index for a coordinate. Lines past the end give 0.
    pub fn character_index(&self, at: Coordinates) -> usize {
        self.lines
            .get(at.line)
            .map_or(0, |line| character_index(&line.glyphs, at.column, self.tab_size()))
    }

    /// Visual column of glyph `index` on `line`.
    pub fn column_of(&self, line: usize, index: usize) -> usize {
        self.lines
            .get(line)
            .map_or(0, |l| column_of(&l.glyphs, index, self.tab_size()))
    }

    /// Visual width of `line` (the largest valid column on it).
    pub fn line_max_column(&self, line: usize) -> usize {
        self.lines
            .get(line)
            .map_or(0, |l| line_width(&l.glyphs, self.tab_size()))
    }

    /// Number of glyphs on `line`.
    pub fn line_character_count(&self, line: usize) -> usize {
        self.lines.get(line).map_or(0, |l| l.len())
    }

    /// Clamp a coordinate into the document.
    ///
    /// A line past the end maps to the end of the last line; otherwise the column is clamped
    /// to the line's width.
    pub fn sanitize(&self, at: Coordinates) -> Coordinates {
        if at.line >= self.lines.len() {
            let last = self.lines.len().saturating_sub(1);
            let clamped = Coordinates::new(last, self.line_max_column(last));
            tracing::trace!(from = %at, to = %clamped, "clamped coordinate past end of document");
            return clamped;
        }
        Coordinates::new(at.line, at.column.min(self.line_max_column(at.line)))
    }

    /// Step one grapheme forward, wrapping to the next line's column 0 at end of line.
    ///
    /// No-op at the end of the document.
    pub fn advance(&self, at: Coordinates) -> Coordinates {
        let at = self.sanitize(at);
        let glyphs = &self.lines[at.line].glyphs;
        let index = character_index(glyphs, at.column, self.tab_size());
        if index < glyphs.len() {
            let next = next_grapheme(glyphs, index);
            Coordinates::new(at.line, column_of(glyphs, next, self.tab_size()))
        } else if at.line + 1 < self.lines.len() {
            Coordinates::new(at.line + 1, 0)
        } else {
            at
        }
    }
}
