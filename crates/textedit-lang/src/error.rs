use thiserror::Error;

#[derive(Debug, Error)]
/// Errors produced while building a [`LanguageDefinition`](crate::LanguageDefinition).
pub enum LanguageError {
    #[error("token rule '{pattern}' failed to compile: {source}")]
    /// A token rule pattern is not a valid regex.
    InvalidTokenRule {
        /// The rule pattern as written by the table author.
        pattern: String,
        /// The regex compiler error.
        #[source]
        source: regex::Error,
    },

    #[error("block comment start '{0}' has no matching end marker")]
    /// A block comment start marker was configured without an end marker.
    UnbalancedBlockComment(String),

    #[error("language '{0}' sets both token rules and a custom tokenizer")]
    /// A definition may use regex rules or a custom tokenizer, not both.
    ConflictingStrategies(String),
}
