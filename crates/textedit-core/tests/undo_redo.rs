//! Undo/redo behavior, including a randomized consistency run.
//!
//! Random edits are applied to a document while snapshotting text and editor state before
//! every recorded edit; undoing everything must walk back through those snapshots exactly, and
//! redoing everything must land on the final document again.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use textedit_core::{Coordinates, EditorState, SelectionMode, TextEditor};

fn editor_with(text: &str) -> TextEditor {
    let mut editor = TextEditor::new();
    editor.set_text(text);
    editor
}

fn at(line: usize, column: usize) -> Coordinates {
    Coordinates::new(line, column)
}

#[test]
fn test_undo_inverse_and_redo() {
    let mut editor = editor_with("fn main() {}");
    editor.set_cursor_position(at(0, 11));
    editor.enter_character('\n', false);
    editor.insert_text("let x = 1;");
    editor.set_selection(at(0, 3), at(0, 7), SelectionMode::Normal);
    editor.backspace();
    let edited = editor.text();
    let edited_state = editor.editor_state();

    assert!(editor.can_undo());
    editor.undo(3);
    assert_eq!(editor.text(), "fn main() {}");
    assert_eq!(editor.cursor_position(), at(0, 11));
    assert!(!editor.can_undo());

    editor.redo(3);
    assert_eq!(editor.text(), edited);
    assert_eq!(editor.editor_state(), edited_state);
    assert!(!editor.can_redo());
}

#[test]
fn test_undo_then_redo_is_noop() {
    let mut editor = editor_with("abc");
    editor.set_cursor_position(at(0, 3));
    editor.insert_text("def");
    let text = editor.text();
    let state = editor.editor_state();

    editor.undo(1);
    editor.redo(1);
    assert_eq!(editor.text(), text);
    assert_eq!(editor.editor_state(), state);
}

#[test]
fn test_new_edit_truncates_redo() {
    let mut editor = editor_with("");
    editor.insert_text("a");
    editor.insert_text("b");
    editor.undo(1);
    assert!(editor.can_redo());

    editor.insert_text("c");
    assert!(!editor.can_redo());
    assert_eq!(editor.text(), "ac");
    assert_eq!(editor.undo_log().len(), 2);
}

#[test]
fn test_undo_restores_selection() {
    let mut editor = editor_with("select me");
    editor.set_selection(at(0, 7), at(0, 9), SelectionMode::Normal);
    editor.delete();
    assert_eq!(editor.text(), "select ");
    assert!(!editor.has_selection());

    editor.undo(1);
    assert_eq!(editor.selected_text(), "me");
}

#[test]
fn test_steps_beyond_log_are_ignored() {
    let mut editor = editor_with("x");
    editor.undo(5);
    editor.redo(5);
    assert_eq!(editor.text(), "x");

    editor.insert_text("y");
    editor.undo(10);
    assert_eq!(editor.text(), "x");
    editor.redo(10);
    assert_eq!(editor.text(), "yx");
}

#[test]
fn test_read_only_blocks_undo() {
    let mut editor = editor_with("");
    editor.insert_text("abc");
    editor.set_read_only(true);
    assert!(!editor.can_undo());
    editor.undo(1);
    assert_eq!(editor.text(), "abc");

    editor.set_read_only(false);
    editor.undo(1);
    assert_eq!(editor.text(), "");
}

#[test]
fn test_set_text_clears_history() {
    let mut editor = editor_with("");
    editor.insert_text("abc");
    editor.set_text("new");
    assert!(!editor.can_undo());
    assert!(editor.undo_log().is_empty());
}

#[test]
fn test_undo_after_tab_size_change() {
    let mut editor = editor_with("\t");
    editor.set_cursor_position(at(0, 4));
    editor.insert_text("x");
    editor.set_tab_size(8);

    editor.undo(1);
    assert_eq!(editor.text(), "\t");
    assert_eq!(editor.cursor_position(), at(0, 8));
    editor.redo(1);
    assert_eq!(editor.text(), "\tx");
    assert_eq!(editor.cursor_position(), at(0, 9));

    let mut editor = editor_with("\tab");
    editor.set_cursor_position(at(0, 5));
    editor.backspace();
    assert_eq!(editor.text(), "\tb");
    editor.set_tab_size(2);

    editor.undo(1);
    assert_eq!(editor.text(), "\tab");
    assert_eq!(editor.cursor_position(), at(0, 3));
    editor.redo(1);
    assert_eq!(editor.text(), "\tb");
    assert_eq!(editor.cursor_position(), at(0, 2));
}

#[test]
fn test_records_from_different_tab_sizes_replay_in_order() {
    let mut editor = editor_with("\tint;");
    editor.set_selection(at(0, 4), at(0, 7), SelectionMode::Normal);
    editor.set_cursor_position(at(0, 7));
    editor.insert_text("char");
    editor.set_tab_size(2);
    editor.set_cursor_position(at(0, 6));
    editor.insert_text("*");
    assert_eq!(editor.text(), "\tchar*;");

    editor.set_tab_size(8);
    editor.undo(2);
    assert_eq!(editor.text(), "\tint;");
    assert_eq!(editor.selected_text(), "int");

    editor.redo(2);
    assert_eq!(editor.text(), "\tchar*;");
}

const ALPHABET: &[char] = &['a', 'b', '_', ' ', '{', '}', '\t', '\n', 'é', '中', ';'];

fn random_text(rng: &mut StdRng) -> String {
    let len = rng.gen_range(1..6);
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

fn random_coordinate(editor: &TextEditor, rng: &mut StdRng) -> Coordinates {
    let line = rng.gen_range(0..editor.line_count());
    let column = rng.gen_range(0..=editor.line_max_column(line) + 1);
    Coordinates::new(line, column)
}

fn random_edit(editor: &mut TextEditor, rng: &mut StdRng) -> (String, EditorState, usize) {
    let op = rng.gen_range(0..8);
    if op < 4 {
        let cursor = random_coordinate(editor, rng);
        editor.set_selection(cursor, cursor, SelectionMode::Normal);
        editor.set_cursor_position(cursor);
    } else {
        let a = random_coordinate(editor, rng);
        let b = random_coordinate(editor, rng);
        editor.set_selection(a, b, SelectionMode::Normal);
        editor.set_cursor_position(editor.selection_end());
    }

    let snapshot = (editor.text(), editor.editor_state(), editor.undo_log().len());
    match op {
        0 | 4 => {
            let text = random_text(rng);
            editor.insert_text(&text);
        }
        1 | 5 => editor.backspace(),
        2 => editor.delete(),
        3 | 6 => {
            let ch = ALPHABET[rng.gen_range(0..ALPHABET.len())];
            editor.enter_character(ch, rng.gen_bool(0.3));
        }
        _ => {
            let overwrite = !editor.is_overwrite();
            editor.set_overwrite(overwrite);
            editor.enter_character('x', false);
        }
    }
    snapshot
}

#[test]
fn test_randomized_undo_redo_consistency() {
    let mut rng = StdRng::seed_from_u64(0x7e57_ed17);

    for _round in 0..20 {
        let mut editor = editor_with("int main() {\n\treturn 0;\n}\n");
        let mut snapshots: Vec<(String, EditorState)> = Vec::new();
        let mut final_state = editor.editor_state();

        for _ in 0..60 {
            let (text, state, records) = random_edit(&mut editor, &mut rng);
            if editor.undo_log().len() > records {
                snapshots.push((text, state));
                final_state = editor.editor_state();
            } else {
                assert_eq!(editor.text(), text, "an unrecorded edit changed the text");
            }
        }

        let final_text = editor.text();

        while let Some((text, state)) = snapshots.pop() {
            editor.undo(1);
            assert_eq!(editor.text(), text);
            assert_eq!(editor.editor_state(), state);
        }
        assert!(!editor.can_undo());

        while editor.can_redo() {
            editor.redo(1);
        }
        assert_eq!(editor.text(), final_text);
        assert_eq!(editor.editor_state(), final_state);
    }
}
