use std::sync::Arc;
use textedit_lang::{LanguageDefinition, PaletteIndex, TokenStrategy};

fn token(lang: &LanguageDefinition, input: &str) -> Option<(usize, usize, PaletteIndex)> {
    lang.match_token(input).map(|m| (m.start, m.end, m.category))
}

#[test]
fn test_builtin_tables_build_and_are_shared() {
    let all = LanguageDefinition::builtin();
    assert_eq!(all.len(), 8);

    // Factories hand out the same table every time.
    assert!(Arc::ptr_eq(&LanguageDefinition::cpp(), &LanguageDefinition::cpp()));
    assert!(Arc::ptr_eq(&LanguageDefinition::lua(), &LanguageDefinition::lua()));

    let names: Vec<&str> = all.iter().map(|l| l.name()).collect();
    assert_eq!(
        names,
        vec!["C++", "C", "HLSL", "GLSL", "SQL", "AngelScript", "Lua", "Plain text"]
    );
}

#[test]
fn test_cpp_uses_custom_tokenizer() {
    let cpp = LanguageDefinition::cpp();
    assert!(matches!(cpp.strategy(), TokenStrategy::Custom(_)));
    assert!(cpp.is_keyword("constexpr"));
    assert_eq!(
        cpp.identifier("printf").map(|i| i.declaration.as_str()),
        Some("Built-in function")
    );
    assert_eq!(cpp.preproc_char(), Some('#'));
    assert!(cpp.auto_indentation());
    assert_eq!(token(&cpp, "0x1F;"), Some((0, 4, PaletteIndex::Number)));
}

#[test]
fn test_c_rule_order_is_first_match() {
    let c = LanguageDefinition::c();
    assert!(matches!(c.strategy(), TokenStrategy::Rules(_)));
    assert_eq!(token(&c, "#include <x>"), Some((0, 8, PaletteIndex::Preprocessor)));
    assert_eq!(token(&c, r#""s\"t" x"#), Some((0, 6, PaletteIndex::String)));
    assert_eq!(token(&c, "'a'"), Some((0, 3, PaletteIndex::CharLiteral)));
    assert_eq!(token(&c, "3.25f)"), Some((0, 5, PaletteIndex::Number)));
    // The float rule precedes the hex rule, so only the leading zero is a number.
    assert_eq!(token(&c, "0x1F"), Some((0, 1, PaletteIndex::Number)));
    assert_eq!(token(&c, "_Bool b"), Some((0, 5, PaletteIndex::Identifier)));
    assert_eq!(token(&c, "{"), Some((0, 1, PaletteIndex::Punctuation)));
    assert_eq!(token(&c, "@"), None);
    assert!(c.is_keyword("_Static_assert"));
}

#[test]
fn test_shader_languages() {
    let hlsl = LanguageDefinition::hlsl();
    assert!(hlsl.is_keyword("float4x4"));
    assert_eq!(
        hlsl.classify_identifier("saturate", false),
        PaletteIndex::KnownIdentifier
    );

    let glsl = LanguageDefinition::glsl();
    assert!(glsl.is_keyword("vec3"));
    assert_eq!(glsl.classify_identifier("mix", false), PaletteIndex::KnownIdentifier);
    assert_eq!(glsl.classify_identifier("myVar", false), PaletteIndex::Identifier);
}

#[test]
fn test_sql_is_case_insensitive() {
    let sql = LanguageDefinition::sql();
    assert!(!sql.case_sensitive());
    assert!(sql.is_keyword("select"));
    assert!(sql.is_keyword("Select"));
    assert_eq!(
        sql.classify_identifier("count", false),
        PaletteIndex::KnownIdentifier
    );
    assert_eq!(sql.preproc_char(), None);
    assert!(!sql.auto_indentation());
    assert_eq!(sql.comments().line_token(), Some("--"));
    assert_eq!(token(&sql, "'it' x"), Some((0, 4, PaletteIndex::String)));
}

#[test]
fn test_lua_comment_markers() {
    let lua = LanguageDefinition::lua();
    assert_eq!(lua.comments().line_token(), Some("--"));
    assert_eq!(lua.comments().block_tokens(), Some(("--[[", "]]")));
    assert_eq!(lua.preproc_char(), None);
    assert!(lua.is_keyword("elseif"));
    assert_eq!(token(&lua, "0xFF"), Some((0, 4, PaletteIndex::Number)));
    assert_eq!(token(&lua, "'single'"), Some((0, 8, PaletteIndex::String)));
}

#[test]
fn test_angel_script_and_plain_text() {
    let angel = LanguageDefinition::angel_script();
    assert!(angel.is_keyword("funcdef"));
    assert!(angel.is_keyword("this"));

    let plain = LanguageDefinition::plain_text();
    assert_eq!(plain.keyword_count(), 0);
    assert_eq!(plain.match_token("anything"), None);
    assert!(!plain.comments().has_line());
    assert_eq!(plain.preproc_char(), None);
}
