//! Host input: keys, mouse, clipboard.
//!
//! The host translates its windowing events into a [`FrameInput`] once per frame. Everything
//! here is plain data; the editor never talks to a windowing system itself.

use crate::layout::cell_width_at;
use crate::selection::SelectionMode;
use crate::{Coordinates, TextEditor};

/// System clipboard access supplied by the host.
pub trait Clipboard {
    /// Current clipboard text, if any.
    fn text(&self) -> Option<String>;
    /// Replace the clipboard text.
    fn set_text(&mut self, text: &str);
}

/// An in-process clipboard, for tests and hosts without a system clipboard.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    /// A clipboard pre-filled with `text`.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            contents: Some(text.into()),
        }
    }
}

impl Clipboard for MemoryClipboard {
    fn text(&self) -> Option<String> {
        self.contents.clone()
    }

    fn set_text(&mut self, text: &str) {
        self.contents = Some(text.to_string());
    }
}

/// Held modifier keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    /// Control (Command on macOS hosts that swap them).
    pub ctrl: bool,
    /// Shift.
    pub shift: bool,
    /// Alt / Option.
    pub alt: bool,
}

impl Modifiers {
    /// No modifiers.
    pub const NONE: Self = Self {
        ctrl: false,
        shift: false,
        alt: false,
    };
    /// Control only.
    pub const CTRL: Self = Self {
        ctrl: true,
        shift: false,
        alt: false,
    };
    /// Shift only.
    pub const SHIFT: Self = Self {
        ctrl: false,
        shift: true,
        alt: false,
    };
    /// Alt only.
    pub const ALT: Self = Self {
        ctrl: false,
        shift: false,
        alt: true,
    };
    /// Control and Shift.
    pub const CTRL_SHIFT: Self = Self {
        ctrl: true,
        shift: true,
        alt: false,
    };
}

/// Keys the editor reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    /// Arrow up.
    Up,
    /// Arrow down.
    Down,
    /// Arrow left.
    Left,
    /// Arrow right.
    Right,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Home.
    Home,
    /// End.
    End,
    /// Insert.
    Insert,
    /// Forward delete.
    Delete,
    /// Backspace.
    Backspace,
    /// Enter / Return.
    Enter,
    /// Tab.
    Tab,
    /// A letter key, for shortcuts. Case is ignored.
    Char(char),
}

/// One key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key.
    pub key: Key,
    /// Modifiers held when it was pressed.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A key press with explicit modifiers.
    pub fn new(key: Key, modifiers: Modifiers) -> Self {
        Self { key, modifiers }
    }

    /// A key press without modifiers.
    pub fn plain(key: Key) -> Self {
        Self::new(key, Modifiers::NONE)
    }
}

/// Left mouse button state for one frame, in editor-local pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MouseState {
    /// Pointer position relative to the editor's top-left corner.
    pub position: (f32, f32),
    /// The button was pressed this frame.
    pub clicked: bool,
    /// The button is held.
    pub down: bool,
    /// The pointer moved while the button was held.
    pub dragging: bool,
}

/// Everything the host reports for one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameInput {
    /// Host clock in seconds.
    pub time: f64,
    /// The editor has keyboard focus.
    pub focused: bool,
    /// The pointer is over the editor.
    pub hovered: bool,
    /// Width and height of one character cell in pixels.
    pub char_advance: (f32, f32),
    /// Global alpha applied to the palette.
    pub alpha: f32,
    /// Modifiers currently held.
    pub modifiers: Modifiers,
    /// Key presses, in order.
    pub keys: Vec<KeyEvent>,
    /// Typed characters, in order.
    pub chars: Vec<char>,
    /// Mouse state.
    pub mouse: MouseState,
}

impl Default for FrameInput {
    fn default() -> Self {
        Self {
            time: 0.0,
            focused: true,
            hovered: true,
            char_advance: (8.0, 16.0),
            alpha: 1.0,
            modifiers: Modifiers::NONE,
            keys: Vec::new(),
            chars: Vec::new(),
            mouse: MouseState::default(),
        }
    }
}

fn is_shortcut(key: Key, letter: char) -> bool {
    matches!(key, Key::Char(ch) if ch.eq_ignore_ascii_case(&letter))
}

impl TextEditor {
    /// Apply every key press and typed character in `input`.
    pub fn handle_keyboard_inputs(&mut self, input: &FrameInput, clipboard: &mut dyn Clipboard) {
        if !input.focused {
            return;
        }
        for event in &input.keys {
            self.handle_key_event(*event, clipboard);
        }
        if self.options.read_only {
            return;
        }
        for &ch in &input.chars {
            if ch == '\n' || (ch >= ' ' && ch != '\u{7f}') {
                self.enter_character(ch, input.modifiers.shift);
            }
        }
    }

    /// Apply one key press. Returns `false` if no binding matched.
    pub fn handle_key_event(&mut self, event: KeyEvent, clipboard: &mut dyn Clipboard) -> bool {
        let Modifiers { ctrl, shift, alt } = event.modifiers;
        let writable = !self.options.read_only;
        let page = self.page_size().saturating_sub(4).max(1);
        let key = event.key;

        if writable && ctrl && !shift && !alt && is_shortcut(key, 'z') {
            self.undo(1);
        } else if writable && !ctrl && !shift && alt && key == Key::Backspace {
            self.undo(1);
        } else if writable && ctrl && !shift && !alt && is_shortcut(key, 'y') {
            self.redo(1);
        } else if !ctrl && !alt && key == Key::Up {
            self.move_up(1, shift);
        } else if !ctrl && !alt && key == Key::Down {
            self.move_down(1, shift);
        } else if !alt && key == Key::Left {
            self.move_left(1, shift, ctrl);
        } else if !alt && key == Key::Right {
            self.move_right(1, shift, ctrl);
        } else if !alt && key == Key::PageUp {
            self.move_up(page, shift);
        } else if !alt && key == Key::PageDown {
            self.move_down(page, shift);
        } else if ctrl && !alt && key == Key::Home {
            self.move_top(shift);
        } else if ctrl && !alt && key == Key::End {
            self.move_bottom(shift);
        } else if !ctrl && !alt && key == Key::Home {
            self.move_home(shift);
        } else if !ctrl && !alt && key == Key::End {
            self.move_end(shift);
        } else if writable && !ctrl && !shift && !alt && key == Key::Delete {
            self.delete();
        } else if writable && !ctrl && !shift && !alt && key == Key::Backspace {
            self.backspace();
        } else if !ctrl && !shift && !alt && key == Key::Insert {
            self.overwrite = !self.overwrite;
        } else if ctrl && !shift && !alt && (key == Key::Insert || is_shortcut(key, 'c')) {
            self.copy(clipboard);
        } else if writable && !ctrl && shift && !alt && key == Key::Insert {
            self.paste(clipboard);
        } else if writable && ctrl && !shift && !alt && is_shortcut(key, 'v') {
            self.paste(clipboard);
        } else if ctrl && !shift && !alt && is_shortcut(key, 'x') {
            self.cut(clipboard);
        } else if !ctrl && shift && !alt && key == Key::Delete {
            self.cut(clipboard);
        } else if ctrl && !shift && !alt && is_shortcut(key, 'a') {
            self.select_all();
        } else if writable && !ctrl && !shift && !alt && key == Key::Enter {
            self.enter_character('\n', false);
        } else if writable && !ctrl && !alt && key == Key::Tab {
            self.enter_character('\t', shift);
        } else {
            return false;
        }
        true
    }

    /// Apply clicks and drags in `input`.
    ///
    /// A click places the cursor (Ctrl selects the word); a second click within
    /// `double_click_time` selects the word, a third the line. Dragging extends the selection in
    /// the current mode. Ignored while Shift or Alt is held.
    pub fn handle_mouse_inputs(&mut self, input: &FrameInput) {
        if !input.hovered {
            return;
        }
        let Modifiers { ctrl, shift, alt } = input.modifiers;
        if shift || alt {
            return;
        }
        let mouse = input.mouse;

        if mouse.clicked {
            let at = self.screen_to_coordinates(mouse.position, input.char_advance);
            let repeated = self
                .last_click
                .is_some_and(|t| input.time - t <= self.options.double_click_time);
            self.click_count = if repeated { self.click_count.saturating_add(1) } else { 1 };

            match self.click_count {
                1 => {
                    self.place_interactive(at);
                    self.selection_mode = if ctrl { SelectionMode::Word } else { SelectionMode::Normal };
                    self.last_click = Some(input.time);
                }
                2 => {
                    if !ctrl {
                        self.place_interactive(at);
                        self.selection_mode = if self.selection_mode == SelectionMode::Line {
                            SelectionMode::Normal
                        } else {
                            SelectionMode::Word
                        };
                    }
                    self.last_click = Some(input.time);
                }
                _ => {
                    if !ctrl {
                        self.place_interactive(at);
                        self.selection_mode = SelectionMode::Line;
                    }
                    self.last_click = None;
                    self.click_count = 0;
                }
            }
            self.set_selection(self.interactive_start, self.interactive_end, self.selection_mode);
            self.cursor_position_changed = true;
        } else if mouse.dragging && mouse.down {
            let at = self.screen_to_coordinates(mouse.position, input.char_advance);
            self.state.cursor = at;
            self.interactive_end = at;
            self.set_selection(self.interactive_start, self.interactive_end, self.selection_mode);
            self.cursor_position_changed = true;
        }
    }

    fn place_interactive(&mut self, at: Coordinates) {
        self.state.cursor = at;
        self.interactive_start = at;
        self.interactive_end = at;
    }

    /// Map an editor-local pixel position to the nearest valid coordinate.
    ///
    /// Rows count from the first visible line. A click past the midpoint of a cell lands after
    /// it.
    pub fn screen_to_coordinates(&self, position: (f32, f32), char_advance: (f32, f32)) -> Coordinates {
        let line_height = char_advance.1 * self.options.line_spacing;
        let row = if line_height > 0.0 {
            (position.1 / line_height).floor().max(0.0) as usize
        } else {
            0
        };
        let line = self.scroll_line + row;
        let x = position.0 - self.text_start(char_advance.0);

        let tab_size = self.tab_size();
        let mut column = 0;
        if let Some(l) = self.lines.get(line) {
            for glyph in &l.glyphs {
                let width = cell_width_at(glyph.ch, column, tab_size);
                let left = column as f32 * char_advance.0;
                if left + width as f32 * char_advance.0 * 0.5 > x {
                    break;
                }
                column += width;
            }
        }
        self.sanitize(Coordinates::new(line, column))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcuts_are_case_insensitive() {
        let mut editor = TextEditor::new();
        editor.set_text("abc");
        let mut clipboard = MemoryClipboard::default();
        assert!(editor.handle_key_event(KeyEvent::new(Key::Char('A'), Modifiers::CTRL), &mut clipboard));
        assert_eq!(editor.selected_text(), "abc");
        assert!(!editor.handle_key_event(KeyEvent::new(Key::Char('q'), Modifiers::CTRL), &mut clipboard));
    }

    #[test]
    fn test_control_characters_are_not_typed() {
        let mut editor = TextEditor::new();
        let input = FrameInput {
            chars: vec!['a', '\u{1b}', '\u{7f}', '\n', 'b'],
            ..FrameInput::default()
        };
        editor.handle_keyboard_inputs(&input, &mut MemoryClipboard::default());
        assert_eq!(editor.text(), "a\nb");
    }
}
