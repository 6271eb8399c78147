/// Display category of a glyph, and index into an editor palette.
///
/// The first twelve entries are token categories assigned by the colorizer. The remaining
/// entries only exist as palette slots for editor chrome (background, cursor, gutter, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum PaletteIndex {
    /// Plain text.
    #[default]
    Default,
    /// Language keyword.
    Keyword,
    /// Numeric literal.
    Number,
    /// String literal.
    String,
    /// Character literal.
    CharLiteral,
    /// Operators and delimiters.
    Punctuation,
    /// Preprocessor directive.
    Preprocessor,
    /// Identifier with no special meaning.
    Identifier,
    /// Identifier found in the language's known-identifier table.
    KnownIdentifier,
    /// Identifier found in the language's preprocessor-identifier table.
    PreprocIdentifier,
    /// Single-line comment.
    Comment,
    /// Block comment.
    MultiLineComment,
    /// Editor background.
    Background,
    /// Text cursor.
    Cursor,
    /// Selection fill.
    Selection,
    /// Background of lines carrying an error marker.
    ErrorMarker,
    /// Background of lines carrying a breakpoint.
    Breakpoint,
    /// Gutter line numbers.
    LineNumber,
    /// Current line fill while the editor is focused.
    CurrentLineFill,
    /// Current line fill while the editor is not focused.
    CurrentLineFillInactive,
    /// Current line outline.
    CurrentLineEdge,
}

impl PaletteIndex {
    /// Number of palette slots.
    pub const COUNT: usize = 21;

    /// Every palette slot, in index order.
    pub const ALL: [PaletteIndex; Self::COUNT] = [
        Self::Default,
        Self::Keyword,
        Self::Number,
        Self::String,
        Self::CharLiteral,
        Self::Punctuation,
        Self::Preprocessor,
        Self::Identifier,
        Self::KnownIdentifier,
        Self::PreprocIdentifier,
        Self::Comment,
        Self::MultiLineComment,
        Self::Background,
        Self::Cursor,
        Self::Selection,
        Self::ErrorMarker,
        Self::Breakpoint,
        Self::LineNumber,
        Self::CurrentLineFill,
        Self::CurrentLineFillInactive,
        Self::CurrentLineEdge,
    ];

    /// Position of this slot inside a palette array.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns `true` for categories the colorizer can assign to a glyph.
    pub const fn is_token_category(self) -> bool {
        (self as usize) <= (Self::MultiLineComment as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_in_index_order() {
        for (i, idx) in PaletteIndex::ALL.iter().enumerate() {
            assert_eq!(idx.index(), i);
        }
        assert!(PaletteIndex::MultiLineComment.is_token_category());
        assert!(!PaletteIndex::Background.is_token_category());
    }
}
