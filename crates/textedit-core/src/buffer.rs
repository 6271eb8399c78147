//! Line/glyph buffer.
//!
//! The document is a `Vec<Line>` that always holds at least one line. A line is an ordered
//! run of [`Glyph`]s with no stored terminator; the glyph index is the raw character index
//! used by every editing operation.

use crate::colorize::LineScan;
use textedit_lang::PaletteIndex;

/// One stored character plus its display category and colorizer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    /// The character.
    pub ch: char,
    /// Display category assigned by the colorizer.
    pub category: PaletteIndex,
    /// Inside a single-line comment.
    pub in_comment: bool,
    /// Inside a block comment.
    pub in_multi_line_comment: bool,
    /// Inside a preprocessor directive.
    pub in_preprocessor: bool,
}

impl Glyph {
    /// A glyph with the default category and no colorizer state.
    pub fn new(ch: char) -> Self {
        Self::with_category(ch, PaletteIndex::Default)
    }

    /// A glyph with an explicit category.
    pub fn with_category(ch: char, category: PaletteIndex) -> Self {
        Self {
            ch,
            category,
            in_comment: false,
            in_multi_line_comment: false,
            in_preprocessor: false,
        }
    }

    /// `true` for spaces and tabs.
    pub fn is_blank(&self) -> bool {
        self.ch == ' ' || self.ch == '\t'
    }
}

/// A document line.
#[derive(Debug, Clone, Default)]
pub struct Line {
    pub(crate) glyphs: Vec<Glyph>,
    /// Entry/exit colorizer state recorded the last time this line was colorized.
    pub(crate) scan: Option<LineScan>,
}

impl Line {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_glyphs(glyphs: Vec<Glyph>) -> Self {
        Self { glyphs, scan: None }
    }

    /// Build an uncolorized line from text that contains no line break.
    pub(crate) fn from_text(text: &str) -> Self {
        Self::from_glyphs(text.chars().map(Glyph::new).collect())
    }

    /// Glyphs in visual order.
    pub fn glyphs(&self) -> &[Glyph] {
        &self.glyphs
    }

    /// Number of glyphs.
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Returns `true` if the line holds no glyphs.
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// The line's text.
    pub fn text(&self) -> String {
        self.glyphs.iter().map(|g| g.ch).collect()
    }

    /// Text of the glyphs in `[start, end)`, clamped to the line.
    pub fn text_between(&self, start: usize, end: usize) -> String {
        let end = end.min(self.glyphs.len());
        let start = start.min(end);
        self.glyphs[start..end].iter().map(|g| g.ch).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_text_round_trip() {
        let line = Line::from_text("a\tβ");
        assert_eq!(line.len(), 3);
        assert_eq!(line.text(), "a\tβ");
        assert_eq!(line.text_between(1, 10), "\tβ");
        assert_eq!(line.text_between(5, 2), "");
        assert!(line.glyphs()[1].is_blank());
        assert_eq!(line.glyphs()[2].category, PaletteIndex::Default);
    }
}
