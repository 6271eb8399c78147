//! The editor instance: document, configuration, annotations and text access.

use crate::buffer::{Glyph, Line};
use crate::colorize::Colorizer;
use crate::layout::{DEFAULT_TAB_SIZE, MAX_TAB_SIZE, rebase_column};
use crate::palette::Palette;
use crate::selection::SelectionMode;
use crate::text::split_lines_preserve_trailing;
use crate::undo::{EditorState, UndoLog};
use crate::Coordinates;
use std::collections::BTreeMap;
use std::ops::Range;
use std::sync::Arc;
use textedit_lang::LanguageDefinition;

/// Editor configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorOptions {
    /// Columns per tab stop, clamped to `1..=32`.
    pub tab_size: usize,
    /// Reject every edit.
    pub read_only: bool,
    /// Emit whitespace markers for spaces and tabs.
    pub show_whitespace: bool,
    /// Run the colorizer. When off every glyph renders in the default color.
    pub colorizer_enabled: bool,
    /// Process keyboard events during [`TextEditor::render`].
    pub handle_keyboard_inputs: bool,
    /// Process mouse events during [`TextEditor::render`].
    pub handle_mouse_inputs: bool,
    /// Line height multiplier applied to the host's character height.
    pub line_spacing: f32,
    /// Longest gap between clicks (seconds) that still counts as a double/triple click.
    pub double_click_time: f64,
    /// Full cursor blink cycle in seconds; the cursor shows during the second half.
    pub cursor_blink_period: f64,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            tab_size: DEFAULT_TAB_SIZE,
            read_only: false,
            show_whitespace: true,
            colorizer_enabled: true,
            handle_keyboard_inputs: true,
            handle_mouse_inputs: true,
            line_spacing: 1.0,
            double_click_time: 0.30,
            cursor_blink_period: 0.8,
        }
    }
}

/// A breakpoint annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoint {
    /// Zero-based line.
    pub line: usize,
    /// Whether the breakpoint is active.
    pub enabled: bool,
    /// Optional condition expression.
    pub condition: Option<String>,
}

impl Breakpoint {
    /// An enabled, unconditional breakpoint.
    pub fn new(line: usize) -> Self {
        Self {
            line,
            enabled: true,
            condition: None,
        }
    }
}

/// Line number -> error message.
pub type ErrorMarkers = BTreeMap<usize, String>;

/// An embeddable source-code editor.
///
/// Owns the document, the undo log and the colorizer state. The active
/// [`LanguageDefinition`] is shared (`Arc`) and never mutated.
///
/// # Example
///
/// ```rust
/// use textedit_core::{Coordinates, TextEditor};
///
/// let mut editor = TextEditor::new();
/// editor.set_text("abc\ndef");
/// editor.delete_range(Coordinates::new(0, 1), Coordinates::new(1, 2));
/// assert_eq!(editor.text(), "af");
/// ```
#[derive(Debug, Clone)]
pub struct TextEditor {
    pub(crate) lines: Vec<Line>,
    pub(crate) options: EditorOptions,
    pub(crate) language: Arc<LanguageDefinition>,
    pub(crate) palette: Palette,
    pub(crate) state: EditorState,
    pub(crate) interactive_start: Coordinates,
    pub(crate) interactive_end: Coordinates,
    pub(crate) selection_mode: SelectionMode,
    pub(crate) undo_log: UndoLog,
    pub(crate) colorizer: Colorizer,
    pub(crate) overwrite: bool,
    pub(crate) text_changed: bool,
    pub(crate) cursor_position_changed: bool,
    pub(crate) breakpoints: BTreeMap<usize, Breakpoint>,
    pub(crate) error_markers: ErrorMarkers,
    pub(crate) scroll_line: usize,
    pub(crate) page_lines: usize,
    pub(crate) scroll_to_cursor: bool,
    pub(crate) last_click: Option<f64>,
    pub(crate) click_count: u8,
    pub(crate) blink_start: f64,
    pub(crate) now: f64,
}

impl Default for TextEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextEditor {
    /// An empty editor (one empty line) with default options and the C++ language.
    pub fn new() -> Self {
        Self::with_options(EditorOptions::default())
    }

    /// An empty editor with explicit options.
    pub fn with_options(mut options: EditorOptions) -> Self {
        options.tab_size = options.tab_size.clamp(1, MAX_TAB_SIZE);
        Self {
            lines: vec![Line::new()],
            options,
            language: LanguageDefinition::cpp(),
            palette: Palette::dark(),
            state: EditorState::default(),
            interactive_start: Coordinates::origin(),
            interactive_end: Coordinates::origin(),
            selection_mode: SelectionMode::Normal,
            undo_log: UndoLog::new(),
            colorizer: Colorizer::default(),
            overwrite: false,
            text_changed: false,
            cursor_position_changed: false,
            breakpoints: BTreeMap::new(),
            error_markers: ErrorMarkers::new(),
            scroll_line: 0,
            page_lines: 0,
            scroll_to_cursor: false,
            last_click: None,
            click_count: 0,
            blink_start: 0.0,
            now: 0.0,
        }
    }

    /// Current options.
    pub fn options(&self) -> &EditorOptions {
        &self.options
    }

    // ----- language and palette -----

    /// Switch languages and schedule a full recolorization.
    pub fn set_language_definition(&mut self, language: Arc<LanguageDefinition>) {
        tracing::debug!(language = language.name(), "language definition changed");
        self.language = language;
        self.colorize_all();
    }

    /// The active language.
    pub fn language_definition(&self) -> &Arc<LanguageDefinition> {
        &self.language
    }

    /// Replace the base palette.
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }

    /// The base palette (before the host's global alpha is applied).
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Color of one glyph under the current palette and colorizer setting.
    pub fn glyph_color(&self, glyph: &Glyph) -> u32 {
        if !self.options.colorizer_enabled {
            return self.palette.color(textedit_lang::PaletteIndex::Default);
        }
        self.palette.glyph_color(glyph)
    }

    // ----- configuration setters -----

    /// Change the tab size (clamped to `1..=32`). Cursor and selection keep their glyph index.
    pub fn set_tab_size(&mut self, tab_size: usize) {
        let tab_size = tab_size.clamp(1, MAX_TAB_SIZE);
        if tab_size == self.options.tab_size {
            return;
        }
        let old = self.options.tab_size;
        let resnap = |lines: &[Line], at: Coordinates| match lines.get(at.line) {
            Some(line) => Coordinates::new(
                at.line,
                rebase_column(&line.glyphs, at.column, old, tab_size),
            ),
            None => at,
        };
        self.state.cursor = resnap(&self.lines, self.state.cursor);
        self.state.selection_start = resnap(&self.lines, self.state.selection_start);
        self.state.selection_end = resnap(&self.lines, self.state.selection_end);
        self.interactive_start = resnap(&self.lines, self.interactive_start);
        self.interactive_end = resnap(&self.lines, self.interactive_end);
        self.options.tab_size = tab_size;
    }

    /// Columns per tab stop.
    pub fn tab_size(&self) -> usize {
        self.options.tab_size
    }

    /// Enable or disable editing.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.options.read_only = read_only;
    }

    /// Returns `true` if edits are rejected.
    pub fn is_read_only(&self) -> bool {
        self.options.read_only
    }

    /// Show or hide whitespace markers.
    pub fn set_show_whitespace(&mut self, show: bool) {
        self.options.show_whitespace = show;
    }

    /// Returns `true` if whitespace markers are emitted.
    pub fn is_showing_whitespace(&self) -> bool {
        self.options.show_whitespace
    }

    /// Enable or disable the colorizer. Enabling schedules a full recolorization.
    pub fn set_colorizer_enabled(&mut self, enabled: bool) {
        if enabled && !self.options.colorizer_enabled {
            self.colorize_all();
        }
        self.options.colorizer_enabled = enabled;
    }

    /// Returns `true` if the colorizer runs.
    pub fn is_colorizer_enabled(&self) -> bool {
        self.options.colorizer_enabled
    }

    /// Let [`render`](Self::render) process keyboard input.
    pub fn set_handle_keyboard_inputs(&mut self, enabled: bool) {
        self.options.handle_keyboard_inputs = enabled;
    }

    /// Let [`render`](Self::render) process mouse input.
    pub fn set_handle_mouse_inputs(&mut self, enabled: bool) {
        self.options.handle_mouse_inputs = enabled;
    }

    /// Set the line height multiplier.
    pub fn set_line_spacing(&mut self, spacing: f32) {
        self.options.line_spacing = spacing.max(0.1);
    }

    /// Returns `true` in overwrite mode.
    pub fn is_overwrite(&self) -> bool {
        self.overwrite
    }

    /// Enter or leave overwrite mode.
    pub fn set_overwrite(&mut self, overwrite: bool) {
        self.overwrite = overwrite;
    }

    // ----- text access -----

    /// Replace the whole document.
    ///
    /// `'\r'` is dropped, lines split on `'\n'` (a trailing break yields a trailing empty line).
    /// Clears the undo log and resets cursor and selection to the origin.
    pub fn set_text(&mut self, text: &str) {
        self.lines = split_lines_preserve_trailing(text)
            .iter()
            .map(|line| Line::from_text(line))
            .collect();
        tracing::debug!(lines = self.lines.len(), "text replaced");
        self.reset_after_replace();
    }

    /// Replace the whole document with `lines`.
    pub fn set_text_lines<S: AsRef<str>>(&mut self, lines: &[S]) {
        let joined = lines
            .iter()
            .map(|line| line.as_ref())
            .collect::<Vec<_>>()
            .join("\n");
        self.set_text(&joined);
    }

    fn reset_after_replace(&mut self) {
        if self.lines.is_empty() {
            self.lines.push(Line::new());
        }
        self.undo_log.clear();
        self.state = EditorState::default();
        self.interactive_start = Coordinates::origin();
        self.interactive_end = Coordinates::origin();
        self.selection_mode = SelectionMode::Normal;
        self.scroll_line = 0;
        self.text_changed = true;
        self.cursor_position_changed = true;
        self.colorize_all();
    }

    /// The whole document, lines joined with `'\n'`.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(Line::text)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Every line's text.
    pub fn text_lines(&self) -> Vec<String> {
        self.lines.iter().map(Line::text).collect()
    }

    /// Text between two coordinates, in either order, lines joined with `'\n'`.
    pub fn text_range(&self, a: Coordinates, b: Coordinates) -> String {
        let (start, end) = ordered(self.sanitize(a), self.sanitize(b));
        let start_index = self.character_index(start);
        let end_index = self.character_index(end);

        if start.line == end.line {
            return self.lines[start.line].text_between(start_index, end_index);
        }

        let mut out = self.lines[start.line].text_between(start_index, usize::MAX);
        for line in &self.lines[start.line + 1..end.line] {
            out.push('\n');
            out.push_str(&line.text());
        }
        out.push('\n');
        out.push_str(&self.lines[end.line].text_between(0, end_index));
        out
    }

    /// Text of the current selection.
    pub fn selected_text(&self) -> String {
        self.text_range(self.state.selection_start, self.state.selection_end)
    }

    /// Text of the line holding the cursor.
    pub fn current_line_text(&self) -> String {
        let line = self.cursor_position().line;
        self.lines.get(line).map(Line::text).unwrap_or_default()
    }

    /// Number of lines (always at least one).
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// One line, if it exists.
    pub fn line(&self, line: usize) -> Option<&Line> {
        self.lines.get(line)
    }

    /// All lines.
    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// The text changed since the last rendered frame began.
    pub fn is_text_changed(&self) -> bool {
        self.text_changed
    }

    /// The cursor moved since the last rendered frame began.
    pub fn is_cursor_position_changed(&self) -> bool {
        self.cursor_position_changed
    }

    /// Snapshot of selection and cursor.
    pub fn editor_state(&self) -> EditorState {
        self.state
    }

    // ----- annotations -----

    /// Replace every error marker.
    pub fn set_error_markers(&mut self, markers: ErrorMarkers) {
        self.error_markers = markers;
    }

    /// Current error markers.
    pub fn error_markers(&self) -> &ErrorMarkers {
        &self.error_markers
    }

    /// Replace every breakpoint.
    pub fn set_breakpoints<I>(&mut self, breakpoints: I)
    where
        I: IntoIterator<Item = Breakpoint>,
    {
        self.breakpoints = breakpoints.into_iter().map(|bp| (bp.line, bp)).collect();
    }

    /// Add or replace the breakpoint on `breakpoint.line`.
    pub fn add_breakpoint(&mut self, breakpoint: Breakpoint) {
        self.breakpoints.insert(breakpoint.line, breakpoint);
    }

    /// Remove the breakpoint on `line`.
    pub fn remove_breakpoint(&mut self, line: usize) -> Option<Breakpoint> {
        self.breakpoints.remove(&line)
    }

    /// Breakpoints ordered by line.
    pub fn breakpoints(&self) -> impl Iterator<Item = &Breakpoint> {
        self.breakpoints.values()
    }

    /// `count` lines were inserted so that the first new line is `at`.
    pub(crate) fn on_lines_inserted(&mut self, at: usize, count: usize) {
        if count == 0 {
            return;
        }
        self.colorizer.lines_inserted(at, count);
        self.error_markers = std::mem::take(&mut self.error_markers)
            .into_iter()
            .map(|(line, msg)| (if line >= at { line + count } else { line }, msg))
            .collect();
        self.breakpoints = std::mem::take(&mut self.breakpoints)
            .into_values()
            .map(|mut bp| {
                if bp.line >= at {
                    bp.line += count;
                }
                (bp.line, bp)
            })
            .collect();
    }

    /// Lines in `range` were removed.
    pub(crate) fn on_lines_removed(&mut self, range: Range<usize>) {
        if range.is_empty() {
            return;
        }
        self.colorizer.lines_removed(range.clone());
        let count = range.len();
        self.error_markers = std::mem::take(&mut self.error_markers)
            .into_iter()
            .filter(|(line, _)| !range.contains(line))
            .map(|(line, msg)| (if line >= range.end { line - count } else { line }, msg))
            .collect();
        self.breakpoints = std::mem::take(&mut self.breakpoints)
            .into_values()
            .filter(|bp| !range.contains(&bp.line))
            .map(|mut bp| {
                if bp.line >= range.end {
                    bp.line -= count;
                }
                (bp.line, bp)
            })
            .collect();
    }

    // ----- scrolling -----

    /// First visible line.
    pub fn scroll_line(&self) -> usize {
        self.scroll_line
    }

    /// Scroll so that `line` is the first visible line.
    pub fn set_scroll_line(&mut self, line: usize) {
        self.scroll_line = line.min(self.lines.len().saturating_sub(1));
    }

    /// Lines that fit in the last rendered frame (0 before the first render).
    pub fn page_size(&self) -> usize {
        self.page_lines
    }

    /// Scroll so the cursor line is visible, now if the page size is known, else on the next
    /// render.
    pub fn ensure_cursor_visible(&mut self) {
        self.scroll_to_cursor = true;
        if self.page_lines > 0 {
            self.apply_scroll_to_cursor();
        }
    }

    pub(crate) fn apply_scroll_to_cursor(&mut self) {
        self.scroll_to_cursor = false;
        let line = self.cursor_position().line;
        let page = self.page_lines.max(1);
        if line < self.scroll_line {
            self.scroll_line = line;
        } else if line >= self.scroll_line + page {
            self.scroll_line = line + 1 - page;
        }
    }
}

pub(crate) fn ordered(a: Coordinates, b: Coordinates) -> (Coordinates, Coordinates) {
    if a <= b { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_annotations_follow_line_edits() {
        let mut editor = TextEditor::new();
        editor.set_text("a\nb\nc\nd");
        editor.add_breakpoint(Breakpoint::new(2));
        editor.set_error_markers(ErrorMarkers::from([(3, "bad".to_string())]));

        editor.on_lines_inserted(1, 2);
        assert_eq!(editor.breakpoints().map(|b| b.line).collect::<Vec<_>>(), vec![4]);
        assert!(editor.error_markers().contains_key(&5));

        editor.on_lines_removed(3..5);
        assert_eq!(editor.breakpoints().count(), 0);
        assert_eq!(editor.error_markers().keys().copied().collect::<Vec<_>>(), vec![3]);
    }

    #[test]
    fn test_tab_size_is_clamped_and_resnaps_cursor() {
        let mut editor = TextEditor::with_options(EditorOptions {
            tab_size: 99,
            ..EditorOptions::default()
        });
        assert_eq!(editor.tab_size(), MAX_TAB_SIZE);

        editor.set_tab_size(4);
        editor.set_text("\tx");
        editor.set_cursor_position(Coordinates::new(0, 5));
        editor.set_tab_size(8);
        assert_eq!(editor.cursor_position(), Coordinates::new(0, 9));
        editor.set_tab_size(0);
        assert_eq!(editor.tab_size(), 1);
        assert_eq!(editor.cursor_position(), Coordinates::new(0, 2));
    }
}
