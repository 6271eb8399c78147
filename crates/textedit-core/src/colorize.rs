//! Incremental colorizer.
//!
//! Edits accumulate a dirty line range. On the next render (or an explicit
//! [`TextEditor::colorize_pending`]) the range is processed once, line by line, threading the
//! cross-line [`ScanState`] forward. Past the end of the dirty range, processing continues only
//! while a line's entering state differs from the one it was last colorized with.

use crate::TextEditor;
use crate::buffer::{Glyph, Line};
use std::ops::Range;
use textedit_lang::{LanguageDefinition, PaletteIndex};

/// Colorizer state carried from the end of one line into the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScanState {
    /// Inside a block comment.
    pub in_block_comment: bool,
    /// Inside a single-line comment continued by a trailing backslash.
    pub in_line_comment: bool,
    /// Inside a preprocessor directive continued by a trailing backslash.
    pub in_preprocessor: bool,
}

/// State a line was entered with and left with, the last time it was colorized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LineScan {
    pub(crate) entry: ScanState,
    pub(crate) exit: ScanState,
}

/// Dirty-range bookkeeping.
#[derive(Debug, Clone, Default)]
pub(crate) struct Colorizer {
    dirty: Option<Range<usize>>,
    last: Option<Range<usize>>,
}

impl Colorizer {
    /// Add `range` to the pending dirty range.
    pub(crate) fn mark_dirty(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        self.dirty = Some(match self.dirty.take() {
            Some(d) => d.start.min(range.start)..d.end.max(range.end),
            None => range,
        });
    }

    /// `count` lines were inserted before line `at`.
    pub(crate) fn lines_inserted(&mut self, at: usize, count: usize) {
        if let Some(d) = &mut self.dirty {
            if d.start >= at {
                d.start += count;
            }
            if d.end > at {
                d.end += count;
            }
        }
    }

    /// Lines `[range.start, range.end)` were removed.
    pub(crate) fn lines_removed(&mut self, range: Range<usize>) {
        let count = range.len();
        let shift = |line: usize| {
            if line >= range.end {
                line - count
            } else {
                line.min(range.start)
            }
        };
        if let Some(d) = self.dirty.take() {
            let start = shift(d.start);
            // Keep the line the removed run merged into.
            let end = shift(d.end).max(start + 1);
            self.dirty = Some(start..end);
        }
    }

    pub(crate) fn pending(&self) -> Option<Range<usize>> {
        self.dirty.clone()
    }

    /// Recolor the pending range. Returns the lines actually processed.
    pub(crate) fn flush(
        &mut self,
        lines: &mut [Line],
        language: &LanguageDefinition,
    ) -> Option<Range<usize>> {
        let dirty = self.dirty.take()?;
        let end = dirty.end.min(lines.len());
        let mut start = dirty.start.min(end);
        // Lines never colorized before have no exit state to continue from.
        while start > 0 && lines[start - 1].scan.is_none() {
            start -= 1;
        }
        if start >= end {
            return None;
        }

        let mut state = if start == 0 {
            ScanState::default()
        } else {
            lines[start - 1]
                .scan
                .map(|scan| scan.exit)
                .unwrap_or_default()
        };

        let mut line = start;
        while line < lines.len() {
            if line >= end && lines[line].scan.map(|scan| scan.entry) == Some(state) {
                break;
            }
            let exit = colorize_line(&mut lines[line].glyphs, state, language);
            lines[line].scan = Some(LineScan { entry: state, exit });
            state = exit;
            line += 1;
        }

        tracing::trace!(
            dirty_start = dirty.start,
            dirty_end = dirty.end,
            first = start,
            stop = line,
            "colorized range"
        );
        self.last = Some(start..line);
        self.last.clone()
    }

    pub(crate) fn last(&self) -> Option<Range<usize>> {
        self.last.clone()
    }
}

/// Assign categories and state flags to one line.
///
/// Left to right: block-comment bodies run until the end marker; blanks keep the default
/// category; the preprocessor sigil opens a directive when it is the first non-blank; comment
/// markers are checked before the token strategy (block start before the line marker); then
/// the language's strategy runs. Characters no rule claims become punctuation (ASCII
/// punctuation) or default.
pub fn colorize_line(
    glyphs: &mut [Glyph],
    entry: ScanState,
    language: &LanguageDefinition,
) -> ScanState {
    let text: String = glyphs.iter().map(|g| g.ch).collect();
    let mut offsets: Vec<usize> = text.char_indices().map(|(offset, _)| offset).collect();
    offsets.push(text.len());
    let index_of = |byte: usize| offsets.partition_point(|&o| o < byte);

    let comments = language.comments();
    let block = comments.block_tokens();
    let line_marker = comments.line_token();
    let preproc_char = language.preproc_char();

    let mut state = entry;
    let mut seen_non_blank = entry.in_preprocessor || entry.in_line_comment;

    let mut i = 0;
    while i < glyphs.len() {
        let rest = &text[offsets[i]..];

        if state.in_block_comment {
            if let Some((_, block_end)) = block
                && rest.starts_with(block_end)
            {
                let n = block_end.chars().count();
                paint(&mut glyphs[i..i + n], PaletteIndex::MultiLineComment, state);
                state.in_block_comment = false;
                i += n;
                continue;
            }
            paint(&mut glyphs[i..=i], PaletteIndex::MultiLineComment, state);
            i += 1;
            continue;
        }

        if state.in_line_comment {
            paint(&mut glyphs[i..], PaletteIndex::Comment, state);
            break;
        }

        let ch = glyphs[i].ch;
        if ch.is_whitespace() {
            paint(&mut glyphs[i..=i], PaletteIndex::Default, state);
            i += 1;
            continue;
        }

        let mut is_sigil = false;
        if !seen_non_blank {
            seen_non_blank = true;
            if preproc_char == Some(ch) {
                state.in_preprocessor = true;
                is_sigil = true;
            }
        }

        if let Some((block_start, _)) = block
            && rest.starts_with(block_start)
        {
            state.in_block_comment = true;
            let n = block_start.chars().count();
            paint(&mut glyphs[i..i + n], PaletteIndex::MultiLineComment, state);
            i += n;
            continue;
        }

        if let Some(marker) = line_marker
            && rest.starts_with(marker)
        {
            state.in_line_comment = true;
            continue;
        }

        if let Some(token) = language.match_token(rest).filter(|t| !t.is_empty()) {
            let len = glyphs.len();
            let token_start = index_of(offsets[i] + token.start).min(len);
            let token_end = index_of(offsets[i] + token.end)
                .max(token_start + 1)
                .min(len);
            paint(&mut glyphs[i..token_start], PaletteIndex::Default, state);

            let category = if token.category == PaletteIndex::Identifier {
                let word = &text[offsets[token_start]..offsets[token_end]];
                language.classify_identifier(word, state.in_preprocessor)
            } else {
                token.category
            };
            paint(&mut glyphs[token_start..token_end], category, state);
            i = token_end;
            continue;
        }

        let category = if is_sigil {
            PaletteIndex::Preprocessor
        } else if ch.is_ascii_punctuation() {
            PaletteIndex::Punctuation
        } else {
            PaletteIndex::Default
        };
        paint(&mut glyphs[i..=i], category, state);
        i += 1;
    }

    let continues = glyphs.last().is_some_and(|g| g.ch == '\\');
    ScanState {
        in_block_comment: state.in_block_comment,
        in_line_comment: state.in_line_comment && continues,
        in_preprocessor: state.in_preprocessor && continues,
    }
}

fn paint(glyphs: &mut [Glyph], category: PaletteIndex, state: ScanState) {
    for g in glyphs {
        g.category = category;
        g.in_comment = state.in_line_comment;
        g.in_multi_line_comment = state.in_block_comment;
        g.in_preprocessor = state.in_preprocessor;
    }
}

impl TextEditor {
    /// Recolor everything edited since the last render. Returns the lines processed.
    ///
    /// Rendering does this automatically; hosts that inspect glyph categories without
    /// rendering can call it directly. Does nothing while the colorizer is disabled.
    pub fn colorize_pending(&mut self) -> Option<Range<usize>> {
        if !self.options.colorizer_enabled {
            return None;
        }
        self.colorizer.flush(&mut self.lines, &self.language)
    }

    /// Schedule a full recolorization.
    pub fn colorize_all(&mut self) {
        tracing::debug!(lines = self.lines.len(), "full recolorization requested");
        self.colorizer.mark_dirty(0..self.lines.len());
    }

    /// The line range the colorizer is waiting to process, if any.
    pub fn pending_colorize_range(&self) -> Option<Range<usize>> {
        self.colorizer.pending()
    }

    /// The lines processed by the most recent colorization pass.
    pub fn last_colorized(&self) -> Option<Range<usize>> {
        self.colorizer.last()
    }
}
