//! Pluggable tokenizer strategy.
//!
//! A [`Tokenize`] implementation is handed the remainder of a line (starting at the
//! colorizer's current position) and either recognizes one token at the front of it or declines.

use crate::PaletteIndex;

/// A token recognized at the front of an input slice.
///
/// `start` and `end` are byte offsets into the slice passed to [`Tokenize::try_match`]. A
/// tokenizer may skip leading blanks, so `start` can be greater than zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenMatch {
    /// Inclusive byte offset of the token.
    pub start: usize,
    /// Exclusive byte offset of the token.
    pub end: usize,
    /// Category to assign to every character of the token.
    pub category: PaletteIndex,
}

impl TokenMatch {
    /// Create a token spanning `[start, end)`.
    pub fn new(start: usize, end: usize, category: PaletteIndex) -> Self {
        Self {
            start,
            end,
            category,
        }
    }

    /// Returns `true` if the token covers no input.
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// Custom tokenizer used in place of regex token rules.
///
/// Implementations must be pure: the same input always yields the same answer.
pub trait Tokenize: Send + Sync {
    /// Recognize one token at the front of `input`, or return `None` to decline.
    fn try_match(&self, input: &str) -> Option<TokenMatch>;
}

impl<F> Tokenize for F
where
    F: Fn(&str) -> Option<TokenMatch> + Send + Sync,
{
    fn try_match(&self, input: &str) -> Option<TokenMatch> {
        self(input)
    }
}

/// Hand-written tokenizer for C-family languages.
///
/// Recognizes, in order: double-quoted strings (with `\"` escapes), character literals,
/// identifiers, numbers (decimal, float with exponent and `f` suffix, hex, binary, integer
/// size suffixes) and single punctuation characters. Leading blanks are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct CStyleTokenizer;

impl Tokenize for CStyleTokenizer {
    fn try_match(&self, input: &str) -> Option<TokenMatch> {
        let bytes = input.as_bytes();
        let start = bytes
            .iter()
            .position(|b| !matches!(b, b' ' | b'\t'))
            .unwrap_or(bytes.len());
        if start == bytes.len() {
            return None;
        }
        let rest = &bytes[start..];

        let (len, category) = if let Some(len) = c_string(rest) {
            (len, PaletteIndex::String)
        } else if let Some(len) = c_char_literal(rest) {
            (len, PaletteIndex::CharLiteral)
        } else if let Some(len) = c_identifier(rest) {
            (len, PaletteIndex::Identifier)
        } else if let Some(len) = c_number(rest) {
            (len, PaletteIndex::Number)
        } else if let Some(len) = c_punctuation(rest) {
            (len, PaletteIndex::Punctuation)
        } else {
            return None;
        };

        Some(TokenMatch::new(start, start + len, category))
    }
}

fn c_string(input: &[u8]) -> Option<usize> {
    if input.first() != Some(&b'"') {
        return None;
    }
    let mut p = 1;
    while p < input.len() {
        if input[p] == b'"' {
            return Some(p + 1);
        }
        if input[p] == b'\\' && input.get(p + 1) == Some(&b'"') {
            p += 1;
        }
        p += 1;
    }
    None
}

fn c_char_literal(input: &[u8]) -> Option<usize> {
    if input.first() != Some(&b'\'') {
        return None;
    }
    let mut p = 1;
    if input.get(p) == Some(&b'\\') {
        p += 1;
    }
    if p < input.len() {
        p += 1;
    }
    (input.get(p) == Some(&b'\'')).then_some(p + 1)
}

fn c_identifier(input: &[u8]) -> Option<usize> {
    let first = *input.first()?;
    if !(first.is_ascii_alphabetic() || first == b'_') {
        return None;
    }
    let len = input
        .iter()
        .position(|b| !(b.is_ascii_alphanumeric() || *b == b'_'))
        .unwrap_or(input.len());
    Some(len)
}

fn c_number(input: &[u8]) -> Option<usize> {
    let first = *input.first()?;
    let starts_with_digit = first.is_ascii_digit();
    if !starts_with_digit && first != b'+' && first != b'-' {
        return None;
    }

    let mut p = 1;
    let mut has_digits = starts_with_digit;
    while p < input.len() && input[p].is_ascii_digit() {
        has_digits = true;
        p += 1;
    }
    if !has_digits {
        return None;
    }

    let mut is_float = false;
    let mut is_hex = false;
    let mut is_binary = false;
    match input.get(p) {
        Some(b'.') => {
            is_float = true;
            p += 1;
            while p < input.len() && input[p].is_ascii_digit() {
                p += 1;
            }
        }
        Some(b'x' | b'X') => {
            is_hex = true;
            p += 1;
            while p < input.len() && input[p].is_ascii_hexdigit() {
                p += 1;
            }
        }
        Some(b'b' | b'B') => {
            is_binary = true;
            p += 1;
            while p < input.len() && matches!(input[p], b'0' | b'1') {
                p += 1;
            }
        }
        _ => {}
    }

    if !is_hex && !is_binary {
        if matches!(input.get(p), Some(b'e' | b'E')) {
            is_float = true;
            p += 1;
            if matches!(input.get(p), Some(b'+' | b'-')) {
                p += 1;
            }
            let exponent_start = p;
            while p < input.len() && input[p].is_ascii_digit() {
                p += 1;
            }
            if p == exponent_start {
                return None;
            }
        }
        if input.get(p) == Some(&b'f') {
            p += 1;
        }
    }

    if !is_float {
        while p < input.len() && matches!(input[p], b'u' | b'U' | b'l' | b'L') {
            p += 1;
        }
    }

    Some(p)
}

fn c_punctuation(input: &[u8]) -> Option<usize> {
    match input.first()? {
        b'[' | b']' | b'{' | b'}' | b'!' | b'%' | b'^' | b'&' | b'*' | b'(' | b')' | b'-'
        | b'+' | b'=' | b'~' | b'|' | b'<' | b'>' | b'?' | b':' | b'/' | b';' | b',' | b'.' => {
            Some(1)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn category_of(input: &str) -> Option<(usize, usize, PaletteIndex)> {
        CStyleTokenizer
            .try_match(input)
            .map(|m| (m.start, m.end, m.category))
    }

    #[test]
    fn test_c_style_strings_and_chars() {
        assert_eq!(
            category_of(r#""a\"b" rest"#),
            Some((0, 6, PaletteIndex::String))
        );
        assert_eq!(category_of("'x'"), Some((0, 3, PaletteIndex::CharLiteral)));
        assert_eq!(category_of(r"'\n'"), Some((0, 4, PaletteIndex::CharLiteral)));
        // An unterminated string is not a token.
        assert_eq!(category_of("\"open"), None);
    }

    #[test]
    fn test_c_style_numbers() {
        assert_eq!(category_of("42;"), Some((0, 2, PaletteIndex::Number)));
        assert_eq!(category_of("1.5e-3f"), Some((0, 7, PaletteIndex::Number)));
        assert_eq!(category_of("0x1Fu"), Some((0, 5, PaletteIndex::Number)));
        assert_eq!(category_of("10UL"), Some((0, 4, PaletteIndex::Number)));
        assert_eq!(category_of("-7"), Some((0, 2, PaletteIndex::Number)));
        // A lone sign is punctuation.
        assert_eq!(category_of("- x"), Some((0, 1, PaletteIndex::Punctuation)));
        // An exponent without digits rejects the whole number.
        assert_eq!(category_of("1e"), None);
    }

    #[test]
    fn test_c_style_skips_leading_blanks() {
        assert_eq!(
            category_of("  \tfoo_1 bar"),
            Some((3, 8, PaletteIndex::Identifier))
        );
        assert_eq!(category_of("   "), None);
    }

    #[test]
    fn test_closure_is_a_tokenizer() {
        let upper = |input: &str| {
            let len = input
                .bytes()
                .position(|b| !b.is_ascii_uppercase())
                .unwrap_or(input.len());
            (len > 0).then(|| TokenMatch::new(0, len, PaletteIndex::Keyword))
        };
        assert_eq!(
            upper.try_match("ABc"),
            Some(TokenMatch::new(0, 2, PaletteIndex::Keyword))
        );
        assert_eq!(upper.try_match("abc"), None);
    }
}
