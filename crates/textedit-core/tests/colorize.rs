use std::sync::Arc;
use textedit_core::lang::{CommentConfig, LanguageDefinition, PaletteIndex, TokenMatch};
use textedit_core::{Coordinates, Glyph, TextEditor};

fn document(lines: usize) -> String {
    (0..lines)
        .map(|i| format!("int value_{i} = {i};"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn categories(editor: &TextEditor, line: usize) -> Vec<PaletteIndex> {
    editor
        .line(line)
        .map(|l| l.glyphs().iter().map(|g| g.category).collect())
        .unwrap_or_default()
}

fn glyph(editor: &TextEditor, line: usize, index: usize) -> Glyph {
    editor.line(line).unwrap().glyphs()[index]
}

#[test]
fn test_cpp_line_categories() {
    let mut editor = TextEditor::new();
    editor.set_text("int x = 42; // c");
    assert_eq!(editor.colorize_pending(), Some(0..1));

    use PaletteIndex::*;
    assert_eq!(
        categories(&editor, 0),
        vec![
            Keyword, Keyword, Keyword, Default, Identifier, Default, Punctuation, Default, Number,
            Number, Punctuation, Default, Comment, Comment, Comment, Comment,
        ]
    );
    assert!(glyph(&editor, 0, 15).in_comment);
    assert!(!glyph(&editor, 0, 10).in_comment);
}

#[test]
fn test_known_identifiers_and_strings() {
    let mut editor = TextEditor::new();
    editor.set_text("printf(\"%d\", 'c');");
    editor.colorize_pending();
    let cats = categories(&editor, 0);
    assert_eq!(cats[0], PaletteIndex::KnownIdentifier);
    assert_eq!(cats[7], PaletteIndex::String);
    assert_eq!(cats[13], PaletteIndex::CharLiteral);
}

#[test]
fn test_single_line_edit_recolors_only_that_line() {
    let mut editor = TextEditor::new();
    editor.set_text(&document(100));
    assert_eq!(editor.colorize_pending(), Some(0..100));
    let before_49 = editor.line(49).unwrap().glyphs().to_vec();
    let before_51 = editor.line(51).unwrap().glyphs().to_vec();

    editor.set_cursor_position(Coordinates::new(50, 4));
    editor.insert_text("renamed_");
    assert_eq!(editor.pending_colorize_range(), Some(50..51));
    assert_eq!(editor.colorize_pending(), Some(50..51));
    assert_eq!(editor.last_colorized(), Some(50..51));

    assert_eq!(editor.line(49).unwrap().glyphs(), &before_49[..]);
    assert_eq!(editor.line(51).unwrap().glyphs(), &before_51[..]);
    assert_eq!(categories(&editor, 50)[4], PaletteIndex::Identifier);

    // Nothing pending afterwards.
    assert_eq!(editor.colorize_pending(), None);
}

#[test]
fn test_opening_block_comment_propagates_until_state_converges() {
    let mut editor = TextEditor::new();
    editor.set_text(&document(30));
    editor.colorize_pending();

    editor.set_cursor_position(Coordinates::new(10, 0));
    editor.insert_text("/*");
    assert_eq!(editor.colorize_pending(), Some(10..30));
    assert!(glyph(&editor, 29, 0).in_multi_line_comment);
    assert_eq!(categories(&editor, 29)[0], PaletteIndex::MultiLineComment);

    editor.set_cursor_position(Coordinates::new(20, 0));
    editor.insert_text("*/");
    assert_eq!(editor.colorize_pending(), Some(20..30));
    assert!(glyph(&editor, 19, 0).in_multi_line_comment);
    assert!(!glyph(&editor, 21, 0).in_multi_line_comment);
    assert_eq!(categories(&editor, 21)[0], PaletteIndex::Keyword);

    // Lines past 20 already carry the uncommented entry state.
    editor.undo(2);
    assert_eq!(editor.colorize_pending(), Some(10..21));
    assert!(!glyph(&editor, 15, 0).in_multi_line_comment);
    assert_eq!(categories(&editor, 15)[0], PaletteIndex::Keyword);
}

#[test]
fn test_line_insert_shifts_pending_range() {
    let mut editor = TextEditor::new();
    editor.set_text(&document(10));
    editor.colorize_pending();

    editor.set_cursor_position(Coordinates::new(5, 0));
    editor.insert_text("a\nb\n");
    assert_eq!(editor.pending_colorize_range(), Some(5..8));
    assert_eq!(editor.colorize_pending(), Some(5..8));
}

#[test]
fn test_preprocessor_continuation() {
    let mut editor = TextEditor::new();
    editor.set_text("#define X \\\n  1 + 2\nint y;");
    editor.colorize_pending();

    assert_eq!(categories(&editor, 0)[0], PaletteIndex::Preprocessor);
    assert!(glyph(&editor, 0, 1).in_preprocessor);
    assert!(glyph(&editor, 1, 2).in_preprocessor);
    assert_eq!(categories(&editor, 1)[2], PaletteIndex::Number);
    assert!(!glyph(&editor, 2, 0).in_preprocessor);
    assert_eq!(categories(&editor, 2)[0], PaletteIndex::Keyword);
}

#[test]
fn test_language_switch_recolors_everything() {
    let mut editor = TextEditor::new();
    editor.set_text("local x = 1\n-- note\nend");
    editor.colorize_pending();
    assert_eq!(categories(&editor, 0)[0], PaletteIndex::Identifier);

    editor.set_language_definition(LanguageDefinition::lua());
    assert_eq!(editor.colorize_pending(), Some(0..3));
    assert_eq!(categories(&editor, 0)[0], PaletteIndex::Keyword);
    assert!(glyph(&editor, 1, 3).in_comment);
    assert_eq!(categories(&editor, 2)[0], PaletteIndex::Keyword);
}

#[test]
fn test_disabled_colorizer_skips_work() {
    let mut editor = TextEditor::new();
    editor.set_colorizer_enabled(false);
    editor.set_text("int x;");
    assert_eq!(editor.colorize_pending(), None);
    assert_eq!(categories(&editor, 0)[0], PaletteIndex::Default);
    let g = glyph(&editor, 0, 0);
    assert_eq!(
        editor.glyph_color(&g),
        editor.palette().color(PaletteIndex::Default)
    );

    editor.set_colorizer_enabled(true);
    assert_eq!(editor.colorize_pending(), Some(0..1));
    assert_eq!(categories(&editor, 0)[0], PaletteIndex::Keyword);
}

#[test]
fn test_custom_tokenizer_language() {
    let caps = LanguageDefinition::builder("caps")
        .comments(CommentConfig::line("#"))
        .preproc_char(None)
        .tokenizer(|input: &str| {
            let len = input
                .bytes()
                .position(|b| !b.is_ascii_uppercase())
                .unwrap_or(input.len());
            (len > 0).then(|| TokenMatch::new(0, len, PaletteIndex::Keyword))
        })
        .build()
        .unwrap();

    let mut editor = TextEditor::new();
    editor.set_language_definition(Arc::new(caps));
    editor.set_text("AB cd # x");
    editor.colorize_pending();

    use PaletteIndex::*;
    assert_eq!(
        categories(&editor, 0),
        vec![Keyword, Keyword, Default, Default, Default, Default, Comment, Comment, Comment]
    );
}
