use std::sync::Arc;
use textedit_core::lang::{CommentConfig, LanguageDefinition};
use textedit_core::{Clipboard, Coordinates, MemoryClipboard, SelectionMode, TextEditor};

fn editor_with(text: &str) -> TextEditor {
    let mut editor = TextEditor::new();
    editor.set_text(text);
    editor
}

fn at(line: usize, column: usize) -> Coordinates {
    Coordinates::new(line, column)
}

#[test]
fn test_newline_copies_indent_and_opens_block() {
    let mut editor = editor_with("  if (x) {");
    editor.set_cursor_position(at(0, 10));
    editor.enter_character('\n', false);
    assert_eq!(editor.text(), "  if (x) {\n  \t");
    assert_eq!(editor.cursor_position(), at(1, 4));

    editor.undo(1);
    assert_eq!(editor.text(), "  if (x) {");
    assert_eq!(editor.cursor_position(), at(0, 10));

    // Redo reproduces the indentation too.
    editor.redo(1);
    assert_eq!(editor.text(), "  if (x) {\n  \t");
    assert_eq!(editor.cursor_position(), at(1, 4));
}

#[test]
fn test_typed_brace_then_enter_indents_one_level() {
    let bare = LanguageDefinition::builder("bare")
        .comments(CommentConfig::default())
        .auto_indentation(true)
        .build()
        .unwrap();
    let mut editor = TextEditor::new();
    editor.set_language_definition(Arc::new(bare));
    assert_eq!(editor.line_count(), 1);

    for ch in "if(x){".chars() {
        editor.enter_character(ch, false);
    }
    editor.enter_character('\n', false);
    assert_eq!(editor.text_lines(), vec!["if(x){", "\t"]);
    assert_eq!(editor.cursor_position(), at(1, 4));

    // The next block nests one level deeper than its opening line.
    for ch in "y(){".chars() {
        editor.enter_character(ch, false);
    }
    editor.enter_character('\n', false);
    assert_eq!(editor.text_lines(), vec!["if(x){", "\ty(){", "\t\t"]);
    assert_eq!(editor.undo_log().len(), 12);
}

#[test]
fn test_newline_indent_only_uses_text_before_cursor() {
    let mut editor = editor_with("    ab");
    editor.set_cursor_position(at(0, 2));
    editor.enter_character('\n', false);
    assert_eq!(editor.text_lines(), vec!["  ", "    ab"]);
}

#[test]
fn test_newline_without_auto_indent() {
    let mut editor = editor_with("  select {");
    editor.set_language_definition(LanguageDefinition::sql());
    editor.set_cursor_position(at(0, 10));
    editor.enter_character('\n', false);
    assert_eq!(editor.text_lines(), vec!["  select {", ""]);
}

#[test]
fn test_backspace_joins_lines() {
    let mut editor = editor_with("ab\ncd");
    editor.set_cursor_position(at(1, 0));
    editor.backspace();
    assert_eq!(editor.text(), "abcd");
    assert_eq!(editor.cursor_position(), at(0, 2));

    editor.undo(1);
    assert_eq!(editor.text(), "ab\ncd");
    assert_eq!(editor.cursor_position(), at(1, 0));
}

#[test]
fn test_backspace_at_origin_is_noop() {
    let mut editor = editor_with("abc");
    editor.backspace();
    assert_eq!(editor.text(), "abc");
    assert!(!editor.can_undo());
}

#[test]
fn test_backspace_in_indentation_goes_to_previous_tab_stop() {
    let mut editor = editor_with("      x");
    editor.set_cursor_position(at(0, 6));
    editor.backspace();
    assert_eq!(editor.text(), "    x");
    assert_eq!(editor.cursor_position(), at(0, 4));
    editor.backspace();
    assert_eq!(editor.text(), "x");

    // Outside leading whitespace only one character goes.
    let mut editor = editor_with("x    ");
    editor.set_cursor_position(at(0, 5));
    editor.backspace();
    assert_eq!(editor.text(), "x   ");
}

#[test]
fn test_backspace_removes_whole_grapheme() {
    let mut editor = editor_with("ae\u{301}z");
    editor.set_cursor_position(at(0, 2));
    editor.backspace();
    assert_eq!(editor.text(), "az");
    assert_eq!(editor.cursor_position(), at(0, 1));
}

#[test]
fn test_delete_forward() {
    let mut editor = editor_with("ab\ncd");
    editor.set_cursor_position(at(0, 2));
    editor.delete();
    assert_eq!(editor.text(), "abcd");
    assert_eq!(editor.cursor_position(), at(0, 2));

    editor.delete();
    assert_eq!(editor.text(), "abd");

    editor.set_cursor_position(at(0, 3));
    let records = editor.undo_log().len();
    editor.delete();
    assert_eq!(editor.text(), "abd");
    assert_eq!(editor.undo_log().len(), records);
}

#[test]
fn test_typing_over_selection_is_one_replace_record() {
    let mut editor = editor_with("hello world");
    editor.set_selection(at(0, 6), at(0, 11), SelectionMode::Normal);
    editor.enter_character('X', false);
    assert_eq!(editor.text(), "hello X");

    let record = editor.undo_log().records().last().cloned().unwrap();
    assert_eq!(record.removed, "world");
    assert_eq!(record.added, "X");

    editor.undo(1);
    assert_eq!(editor.text(), "hello world");
    assert_eq!(editor.selected_text(), "world");
}

#[test]
fn test_tab_on_single_line_selection_replaces_it() {
    let mut editor = editor_with("abc");
    editor.set_selection(at(0, 1), at(0, 2), SelectionMode::Normal);
    editor.enter_character('\t', false);
    assert_eq!(editor.text(), "a\tc");
}

#[test]
fn test_block_indent_and_outdent() {
    let mut editor = editor_with("a\nb\nc");
    editor.set_selection(at(0, 0), at(2, 0), SelectionMode::Normal);
    editor.enter_character('\t', false);
    assert_eq!(editor.text(), "\ta\n\tb\nc");
    assert_eq!(editor.selection_start(), at(0, 0));
    assert_eq!(editor.selection_end(), at(2, 0));

    editor.enter_character('\t', true);
    assert_eq!(editor.text(), "a\nb\nc");

    editor.undo(1);
    assert_eq!(editor.text(), "\ta\n\tb\nc");
    editor.undo(1);
    assert_eq!(editor.text(), "a\nb\nc");
    assert_eq!(editor.selected_text(), "a\nb\n");
}

#[test]
fn test_outdent_removes_up_to_one_tab_of_spaces() {
    let mut editor = editor_with("      x\ny");
    editor.set_selection(at(0, 0), at(1, 1), SelectionMode::Normal);
    editor.enter_character('\t', true);
    assert_eq!(editor.text(), "  x\ny");

    // Nothing left to outdent on either line: no record.
    let mut flat = editor_with("x\ny");
    flat.set_selection(at(0, 0), at(1, 1), SelectionMode::Normal);
    flat.enter_character('\t', true);
    assert_eq!(flat.text(), "x\ny");
    assert!(!flat.can_undo());
}

#[test]
fn test_overwrite_at_end_of_line_appends() {
    let mut editor = editor_with("ab");
    editor.set_overwrite(true);
    editor.set_cursor_position(at(0, 2));
    editor.enter_character('c', false);
    assert_eq!(editor.text(), "abc");
}

#[test]
fn test_read_only_rejects_edits() {
    let mut editor = editor_with("abc");
    editor.set_read_only(true);
    editor.set_cursor_position(at(0, 1));
    editor.enter_character('x', false);
    editor.backspace();
    editor.delete();
    editor.insert_text("zzz");
    editor.paste(&mut MemoryClipboard::with_text("p"));
    assert_eq!(editor.text(), "abc");
    assert!(!editor.can_undo());
}

#[test]
fn test_copy_without_selection_copies_line() {
    let editor = {
        let mut e = editor_with("first\nsecond");
        e.set_cursor_position(at(1, 3));
        e
    };
    let mut clipboard = MemoryClipboard::default();
    editor.copy(&mut clipboard);
    assert_eq!(clipboard.text().as_deref(), Some("second"));
}

#[test]
fn test_cut_and_paste_replace_selection() {
    let mut editor = editor_with("one two three");
    let mut clipboard = MemoryClipboard::default();
    editor.set_selection(at(0, 4), at(0, 8), SelectionMode::Normal);
    editor.cut(&mut clipboard);
    assert_eq!(editor.text(), "one three");
    assert_eq!(clipboard.text().as_deref(), Some("two "));

    editor.set_selection(at(0, 0), at(0, 3), SelectionMode::Normal);
    editor.paste(&mut clipboard);
    assert_eq!(editor.text(), "two  three");
    assert_eq!(editor.cursor_position(), at(0, 4));

    let record = editor.undo_log().records().last().cloned().unwrap();
    assert_eq!(record.removed, "one");
    assert_eq!(record.added, "two ");

    editor.undo(2);
    assert_eq!(editor.text(), "one two three");
}

#[test]
fn test_insert_text_strips_carriage_returns() {
    let mut editor = editor_with("");
    editor.insert_text("a\r\nb");
    assert_eq!(editor.text_lines(), vec!["a", "b"]);
    assert_eq!(editor.cursor_position(), at(1, 1));
}

#[test]
fn test_text_range_accepts_either_order() {
    let editor = editor_with("abc\ndef\nghi");
    assert_eq!(editor.text_range(at(2, 1), at(0, 2)), "c\ndef\ng");
    assert_eq!(editor.text_range(at(0, 2), at(2, 1)), "c\ndef\ng");
    assert_eq!(editor.text_range(at(1, 1), at(1, 1)), "");
}

#[test]
fn test_delete_range_merges_lines() {
    let mut editor = editor_with("abc\ndef\nghi");
    editor.delete_range(at(0, 1), at(2, 2));
    assert_eq!(editor.text(), "ai");
    assert_eq!(editor.line_count(), 1);
}
