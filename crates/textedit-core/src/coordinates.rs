//! Document coordinates.

use std::cmp::Ordering;
use std::fmt;

/// A position in the document: zero-based line and tab-aware visual column.
///
/// The column is *visual*: a tab advances to the next multiple of the tab size and wide
/// characters occupy two columns. Use [`TextEditor::character_index`](crate::TextEditor::character_index)
/// to convert to a raw glyph index.
///
/// Ordering is lexicographic on `(line, column)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinates {
    /// Zero-based line.
    pub line: usize,
    /// Zero-based visual column.
    pub column: usize,
}

impl Coordinates {
    /// Create a coordinate.
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// `(0, 0)`.
    pub const fn origin() -> Self {
        Self::new(0, 0)
    }
}

impl Ord for Coordinates {
    fn cmp(&self, other: &Self) -> Ordering {
        self.line
            .cmp(&other.line)
            .then_with(|| self.column.cmp(&other.column))
    }
}

impl PartialOrd for Coordinates {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<(usize, usize)> for Coordinates {
    fn from((line, column): (usize, usize)) -> Self {
        Self::new(line, column)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_line_then_column() {
        let a = Coordinates::new(0, 10);
        let b = Coordinates::new(1, 0);
        let c = Coordinates::new(1, 3);
        assert!(a < b);
        assert!(b < c);
        assert_eq!(a.max(c), c);
        assert_eq!(Coordinates::from((2, 5)), Coordinates::new(2, 5));
        assert_eq!(Coordinates::new(0, 4).to_string(), "1:5");
    }
}
