#![warn(missing_docs)]
//! `textedit-lang` - data-driven language definitions for the `textedit` colorizer.
//!
//! A [`LanguageDefinition`] is an immutable bundle describing how to tokenize and highlight one
//! programming language: keywords, known identifiers, comment markers, the preprocessor sigil,
//! and a token strategy (an ordered list of regex rules, or a custom [`Tokenize`] callback).
//!
//! Definitions are built once and shared by reference (`Arc`) between any number of editors.
//! The built-in tables ([`LanguageDefinition::cpp`], [`LanguageDefinition::lua`], ...) are
//! lazily-initialized process-wide constants.
//!
//! ```rust
//! use textedit_lang::{LanguageDefinition, PaletteIndex};
//!
//! let lang = LanguageDefinition::lua();
//! assert!(lang.is_keyword("function"));
//!
//! let token = lang.match_token("local x").unwrap();
//! assert_eq!(token.end, 5);
//! assert_eq!(lang.classify_identifier("local", false), PaletteIndex::Keyword);
//! ```

mod category;
mod definition;
mod error;
mod languages;
mod tokenize;

pub use category::PaletteIndex;
pub use definition::{
    Identifier, LanguageBuilder, LanguageDefinition, Location, TokenRule, TokenStrategy,
};
pub use error::LanguageError;
pub use tokenize::{CStyleTokenizer, TokenMatch, Tokenize};

/// Comment tokens/config for a given language.
///
/// The colorizer recognizes these markers as plain string prefixes, before any token rule runs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentConfig {
    /// Line comment token (e.g. `//`, `--`).
    pub line: Option<String>,
    /// Block comment start token (e.g. `/*`).
    pub block_start: Option<String>,
    /// Block comment end token (e.g. `*/`).
    pub block_end: Option<String>,
}

impl CommentConfig {
    /// Create a config that supports only line comments.
    pub fn line(token: impl Into<String>) -> Self {
        Self {
            line: Some(token.into()),
            block_start: None,
            block_end: None,
        }
    }

    /// Create a config that supports only block comments.
    pub fn block(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            line: None,
            block_start: Some(start.into()),
            block_end: Some(end.into()),
        }
    }

    /// Create a config that supports both line and block comments.
    pub fn line_and_block(
        line: impl Into<String>,
        block_start: impl Into<String>,
        block_end: impl Into<String>,
    ) -> Self {
        Self {
            line: Some(line.into()),
            block_start: Some(block_start.into()),
            block_end: Some(block_end.into()),
        }
    }

    /// C-family comments: `//`, `/*` and `*/`.
    pub fn c_style() -> Self {
        Self::line_and_block("//", "/*", "*/")
    }

    /// Returns `true` if a line comment token is configured.
    pub fn has_line(&self) -> bool {
        self.line.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Returns `true` if both block comment tokens are configured.
    pub fn has_block(&self) -> bool {
        self.block_start.as_deref().is_some_and(|s| !s.is_empty())
            && self.block_end.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// The line comment token, if configured and non-empty.
    pub fn line_token(&self) -> Option<&str> {
        self.line.as_deref().filter(|s| !s.is_empty())
    }

    /// The `(start, end)` block comment tokens, if both are configured.
    pub fn block_tokens(&self) -> Option<(&str, &str)> {
        if !self.has_block() {
            return None;
        }
        Some((self.block_start.as_deref()?, self.block_end.as_deref()?))
    }
}
