use crate::error::LanguageError;
use crate::tokenize::{TokenMatch, Tokenize};
use crate::{CommentConfig, PaletteIndex};
use regex::Regex;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

/// A source location attached to a known identifier (zero-based line and column).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// Zero-based line.
    pub line: usize,
    /// Zero-based column.
    pub column: usize,
}

/// A known identifier: its declaration text and, optionally, where it is declared.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Identifier {
    /// Where the identifier is declared, if known.
    pub location: Option<Location>,
    /// Declaration text shown to the user (e.g. `"Built-in function"`).
    pub declaration: String,
}

impl Identifier {
    /// Create an identifier with a declaration and no location.
    pub fn new(declaration: impl Into<String>) -> Self {
        Self {
            location: None,
            declaration: declaration.into(),
        }
    }

    /// Attach a declaration location.
    pub fn with_location(mut self, line: usize, column: usize) -> Self {
        self.location = Some(Location { line, column });
        self
    }
}

/// A single regex token rule.
///
/// The pattern is anchored at the current position: a rule only matches a prefix of the input.
#[derive(Debug, Clone)]
pub struct TokenRule {
    pattern: String,
    regex: Regex,
    category: PaletteIndex,
}

impl TokenRule {
    /// Compile a rule from an unanchored pattern.
    pub fn new(pattern: &str, category: PaletteIndex) -> Result<Self, LanguageError> {
        let regex = Regex::new(&format!("^(?:{pattern})")).map_err(|source| {
            LanguageError::InvalidTokenRule {
                pattern: pattern.to_string(),
                source,
            }
        })?;
        Ok(Self {
            pattern: pattern.to_string(),
            regex,
            category,
        })
    }

    /// The pattern as written by the table author.
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Category assigned to matched text.
    pub fn category(&self) -> PaletteIndex {
        self.category
    }

    /// Length in bytes of the non-empty prefix of `input` this rule matches.
    pub fn match_len(&self, input: &str) -> Option<usize> {
        self.regex
            .find(input)
            .map(|m| m.end())
            .filter(|len| *len > 0)
    }
}

/// How a language turns text into tokens.
#[derive(Clone)]
pub enum TokenStrategy {
    /// Ordered regex rules; the first rule that matches wins, regardless of match length.
    Rules(Vec<TokenRule>),
    /// A custom tokenizer callback.
    Custom(Arc<dyn Tokenize>),
}

impl fmt::Debug for TokenStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rules(rules) => f.debug_tuple("Rules").field(rules).finish(),
            Self::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl TokenStrategy {
    /// Recognize one token at the front of `input`.
    pub fn match_token(&self, input: &str) -> Option<TokenMatch> {
        match self {
            Self::Rules(rules) => rules.iter().find_map(|rule| {
                rule.match_len(input)
                    .map(|len| TokenMatch::new(0, len, rule.category()))
            }),
            Self::Custom(tokenizer) => tokenizer.try_match(input).filter(|m| !m.is_empty()),
        }
    }
}

/// An immutable description of how to tokenize and highlight one language.
///
/// Build with [`LanguageDefinition::builder`]; share with `Arc`.
#[derive(Debug, Clone)]
pub struct LanguageDefinition {
    name: String,
    keywords: HashSet<String>,
    identifiers: HashMap<String, Identifier>,
    preproc_identifiers: HashMap<String, Identifier>,
    comments: CommentConfig,
    preproc_char: Option<char>,
    auto_indentation: bool,
    strategy: TokenStrategy,
    case_sensitive: bool,
}

impl LanguageDefinition {
    /// Start building a definition named `name`.
    pub fn builder(name: impl Into<String>) -> LanguageBuilder {
        LanguageBuilder::new(name)
    }

    /// Language name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Comment markers.
    pub fn comments(&self) -> &CommentConfig {
        &self.comments
    }

    /// Character that opens a preprocessor directive when it is the first non-blank on a line.
    pub fn preproc_char(&self) -> Option<char> {
        self.preproc_char
    }

    /// Whether a new line copies the previous line's indentation.
    pub fn auto_indentation(&self) -> bool {
        self.auto_indentation
    }

    /// Whether keyword and identifier lookups are case-sensitive.
    pub fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// The token strategy.
    pub fn strategy(&self) -> &TokenStrategy {
        &self.strategy
    }

    /// Number of keywords.
    pub fn keyword_count(&self) -> usize {
        self.keywords.len()
    }

    /// Returns `true` if `word` is a keyword.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(self.fold(word).as_ref())
    }

    /// Look up a known identifier.
    pub fn identifier(&self, word: &str) -> Option<&Identifier> {
        self.identifiers.get(self.fold(word).as_ref())
    }

    /// Look up a known preprocessor identifier.
    pub fn preproc_identifier(&self, word: &str) -> Option<&Identifier> {
        self.preproc_identifiers.get(self.fold(word).as_ref())
    }

    /// Recognize one token at the front of `input`.
    pub fn match_token(&self, input: &str) -> Option<TokenMatch> {
        self.strategy.match_token(input)
    }

    /// Upgrade an identifier token to its display category.
    ///
    /// Outside preprocessor directives keywords win over known identifiers, which win over
    /// preprocessor identifiers. Inside a directive only preprocessor identifiers are upgraded.
    pub fn classify_identifier(&self, word: &str, in_preprocessor: bool) -> PaletteIndex {
        let key = self.fold(word);
        let key = key.as_ref();
        if in_preprocessor {
            if self.preproc_identifiers.contains_key(key) {
                return PaletteIndex::PreprocIdentifier;
            }
            return PaletteIndex::Identifier;
        }
        if self.keywords.contains(key) {
            PaletteIndex::Keyword
        } else if self.identifiers.contains_key(key) {
            PaletteIndex::KnownIdentifier
        } else if self.preproc_identifiers.contains_key(key) {
            PaletteIndex::PreprocIdentifier
        } else {
            PaletteIndex::Identifier
        }
    }

    fn fold<'a>(&self, word: &'a str) -> std::borrow::Cow<'a, str> {
        if self.case_sensitive {
            std::borrow::Cow::Borrowed(word)
        } else {
            std::borrow::Cow::Owned(word.to_uppercase())
        }
    }
}

/// Builder for [`LanguageDefinition`].
pub struct LanguageBuilder {
    name: String,
    keywords: Vec<String>,
    identifiers: Vec<(String, Identifier)>,
    preproc_identifiers: Vec<(String, Identifier)>,
    comments: CommentConfig,
    preproc_char: Option<char>,
    auto_indentation: bool,
    rules: Vec<(String, PaletteIndex)>,
    tokenizer: Option<Arc<dyn Tokenize>>,
    case_sensitive: bool,
}

impl LanguageBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keywords: Vec::new(),
            identifiers: Vec::new(),
            preproc_identifiers: Vec::new(),
            comments: CommentConfig::default(),
            preproc_char: Some('#'),
            auto_indentation: true,
            rules: Vec::new(),
            tokenizer: None,
            case_sensitive: true,
        }
    }

    /// Add keywords.
    pub fn keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords.extend(keywords.into_iter().map(Into::into));
        self
    }

    /// Add known identifiers that all share one declaration text.
    pub fn identifiers<I, S>(mut self, names: I, declaration: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.identifiers.extend(
            names
                .into_iter()
                .map(|name| (name.into(), Identifier::new(declaration))),
        );
        self
    }

    /// Add one known identifier.
    pub fn identifier(mut self, name: impl Into<String>, identifier: Identifier) -> Self {
        self.identifiers.push((name.into(), identifier));
        self
    }

    /// Add known preprocessor identifiers that all share one declaration text.
    pub fn preproc_identifiers<I, S>(mut self, names: I, declaration: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.preproc_identifiers.extend(
            names
                .into_iter()
                .map(|name| (name.into(), Identifier::new(declaration))),
        );
        self
    }

    /// Set comment markers.
    pub fn comments(mut self, comments: CommentConfig) -> Self {
        self.comments = comments;
        self
    }

    /// Set (or clear) the preprocessor sigil. Defaults to `#`.
    pub fn preproc_char(mut self, preproc_char: Option<char>) -> Self {
        self.preproc_char = preproc_char;
        self
    }

    /// Enable or disable auto-indentation. Defaults to enabled.
    pub fn auto_indentation(mut self, enabled: bool) -> Self {
        self.auto_indentation = enabled;
        self
    }

    /// Set case sensitivity of keyword/identifier lookup. Defaults to case-sensitive.
    pub fn case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    /// Append a token rule. Earlier rules take priority.
    pub fn token_rule(mut self, pattern: impl Into<String>, category: PaletteIndex) -> Self {
        self.rules.push((pattern.into(), category));
        self
    }

    /// Use a custom tokenizer instead of token rules.
    pub fn tokenizer(mut self, tokenizer: impl Tokenize + 'static) -> Self {
        self.tokenizer = Some(Arc::new(tokenizer));
        self
    }

    /// Compile rules and freeze the definition.
    pub fn build(self) -> Result<LanguageDefinition, LanguageError> {
        if self.comments.block_start.as_deref().is_some_and(|s| !s.is_empty())
            && !self.comments.has_block()
        {
            return Err(LanguageError::UnbalancedBlockComment(
                self.comments.block_start.unwrap_or_default(),
            ));
        }

        let strategy = match self.tokenizer {
            Some(_) if !self.rules.is_empty() => {
                return Err(LanguageError::ConflictingStrategies(self.name));
            }
            Some(tokenizer) => TokenStrategy::Custom(tokenizer),
            None => TokenStrategy::Rules(
                self.rules
                    .iter()
                    .map(|(pattern, category)| TokenRule::new(pattern, *category))
                    .collect::<Result<Vec<_>, _>>()?,
            ),
        };

        let case_sensitive = self.case_sensitive;
        let fold = |s: String| {
            if case_sensitive {
                s
            } else {
                s.to_uppercase()
            }
        };

        Ok(LanguageDefinition {
            name: self.name,
            keywords: self.keywords.into_iter().map(fold).collect(),
            identifiers: self
                .identifiers
                .into_iter()
                .map(|(k, v)| (fold(k), v))
                .collect(),
            preproc_identifiers: self
                .preproc_identifiers
                .into_iter()
                .map(|(k, v)| (fold(k), v))
                .collect(),
            comments: self.comments,
            preproc_char: self.preproc_char,
            auto_indentation: self.auto_indentation,
            strategy,
            case_sensitive,
        })
    }
}
