//! Built-in language tables.
//!
//! Each factory returns a process-wide, lazily-built definition. Callers hold an `Arc` and
//! inject it into an editor explicitly; nothing here is looked up by name at runtime.

mod c_family;
mod lua;
mod sql;

use crate::{LanguageBuilder, LanguageDefinition, PaletteIndex};
use std::sync::{Arc, LazyLock};

static CPP: LazyLock<Arc<LanguageDefinition>> = LazyLock::new(|| shared(c_family::cpp()));
static C: LazyLock<Arc<LanguageDefinition>> = LazyLock::new(|| shared(c_family::c()));
static HLSL: LazyLock<Arc<LanguageDefinition>> = LazyLock::new(|| shared(c_family::hlsl()));
static GLSL: LazyLock<Arc<LanguageDefinition>> = LazyLock::new(|| shared(c_family::glsl()));
static ANGEL_SCRIPT: LazyLock<Arc<LanguageDefinition>> =
    LazyLock::new(|| shared(c_family::angel_script()));
static SQL: LazyLock<Arc<LanguageDefinition>> = LazyLock::new(|| shared(sql::sql()));
static LUA: LazyLock<Arc<LanguageDefinition>> = LazyLock::new(|| shared(lua::lua()));
static PLAIN_TEXT: LazyLock<Arc<LanguageDefinition>> =
    LazyLock::new(|| shared(LanguageDefinition::builder("Plain text").preproc_char(None)));

fn shared(builder: LanguageBuilder) -> Arc<LanguageDefinition> {
    Arc::new(
        builder
            .build()
            .expect("built-in language tables contain valid rules"),
    )
}

impl LanguageDefinition {
    /// C++ with the hand-written C-style tokenizer.
    pub fn cpp() -> Arc<Self> {
        Arc::clone(&CPP)
    }

    /// C (C11 keywords), regex rules.
    pub fn c() -> Arc<Self> {
        Arc::clone(&C)
    }

    /// HLSL shading language, regex rules.
    pub fn hlsl() -> Arc<Self> {
        Arc::clone(&HLSL)
    }

    /// GLSL shading language, regex rules.
    pub fn glsl() -> Arc<Self> {
        Arc::clone(&GLSL)
    }

    /// SQL. Keyword and identifier lookup is case-insensitive.
    pub fn sql() -> Arc<Self> {
        Arc::clone(&SQL)
    }

    /// AngelScript, regex rules.
    pub fn angel_script() -> Arc<Self> {
        Arc::clone(&ANGEL_SCRIPT)
    }

    /// Lua: `--` line comments, `--[[ ... ]]` block comments.
    pub fn lua() -> Arc<Self> {
        Arc::clone(&LUA)
    }

    /// No tokens, no comments: every glyph keeps the default category.
    pub fn plain_text() -> Arc<Self> {
        Arc::clone(&PLAIN_TEXT)
    }

    /// Every built-in definition, in a stable order.
    pub fn builtin() -> Vec<Arc<Self>> {
        vec![
            Self::cpp(),
            Self::c(),
            Self::hlsl(),
            Self::glsl(),
            Self::sql(),
            Self::angel_script(),
            Self::lua(),
            Self::plain_text(),
        ]
    }
}

const STRING_RULE: &str = r#"L?"(\\.|[^"])*""#;
const CHAR_RULE: &str = r"'\\?[^']'";
const FLOAT_RULE: &str = r"[+-]?([0-9]+([.][0-9]*)?|[.][0-9]+)([eE][+-]?[0-9]+)?[fF]?";
const INTEGER_RULE: &str = r"[+-]?[0-9]+[Uu]?[lL]?[lL]?";
const OCTAL_RULE: &str = r"0[0-7]+[Uu]?[lL]?[lL]?";
const HEX_RULE: &str = r"0[xX][0-9a-fA-F]+[uU]?[lL]?[lL]?";
const IDENTIFIER_RULE: &str = r"[a-zA-Z_][a-zA-Z0-9_]*";
const PUNCTUATION_RULE: &str = r"[\[\]{}!%^&*()\-+=~|<>?/;,.]";

/// The rule list shared by the regex-driven C-family tables.
///
/// The first matching rule wins, so `0x1F` lexes as the number `0` followed by the
/// identifier `x1F`.
fn c_like_rules(builder: LanguageBuilder) -> LanguageBuilder {
    builder
        .token_rule(r"[ \t]*#[ \t]*[a-zA-Z_]+", PaletteIndex::Preprocessor)
        .token_rule(STRING_RULE, PaletteIndex::String)
        .token_rule(CHAR_RULE, PaletteIndex::CharLiteral)
        .token_rule(FLOAT_RULE, PaletteIndex::Number)
        .token_rule(INTEGER_RULE, PaletteIndex::Number)
        .token_rule(OCTAL_RULE, PaletteIndex::Number)
        .token_rule(HEX_RULE, PaletteIndex::Number)
        .token_rule(IDENTIFIER_RULE, PaletteIndex::Identifier)
        .token_rule(PUNCTUATION_RULE, PaletteIndex::Punctuation)
}
