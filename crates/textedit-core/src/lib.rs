#![warn(missing_docs)]
//! Textedit Core - Embeddable Source Code Editing Engine
//!
//! # Overview
//!
//! `textedit-core` owns a document as a list of lines of colored glyphs and implements
//! everything an editing widget needs between host input and drawing: cursor and selection
//! semantics, undoable editing, incremental syntax colorization driven by a
//! [`LanguageDefinition`](lang::LanguageDefinition), tab-aware column mapping and
//! annotation bookkeeping (breakpoints, error markers).
//!
//! It never draws. Once per frame the host passes its input as a [`FrameInput`] and receives a
//! [`Frame`] describing the visible lines, gutter, highlights and cursor.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Input & Frame Output (render)              │  ← Host boundary
//! ├─────────────────────────────────────────────┤
//! │  Editing & Undo Log                         │  ← Mutation
//! ├─────────────────────────────────────────────┤
//! │  Cursor & Selection                         │  ← Interaction
//! ├─────────────────────────────────────────────┤
//! │  Incremental Colorizer                      │  ← Highlighting
//! ├─────────────────────────────────────────────┤
//! │  Layout (glyph index <-> visual column)     │  ← Coordinates
//! ├─────────────────────────────────────────────┤
//! │  Line/Glyph Buffer                          │  ← Storage
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use textedit_core::lang::LanguageDefinition;
//! use textedit_core::{Coordinates, FrameInput, FrameRequest, MemoryClipboard, TextEditor};
//!
//! let mut editor = TextEditor::new();
//! editor.set_language_definition(LanguageDefinition::lua());
//! editor.set_text("local x = 1\nprint(x)");
//!
//! editor.set_cursor_position(Coordinates::new(1, 7));
//! editor.insert_text(" + 1");
//! assert_eq!(editor.text_lines()[1], "print(x + 1)");
//!
//! editor.undo(1);
//! assert_eq!(editor.text_lines()[1], "print(x)");
//!
//! let frame = editor.render(
//!     &FrameRequest::default(),
//!     &FrameInput::default(),
//!     &mut MemoryClipboard::default(),
//! );
//! assert_eq!(frame.lines.len(), 2);
//! ```
//!
//! # Module Description
//!
//! - [`buffer`] - Lines of glyphs
//! - [`layout`] - Tab and wide-glyph aware column mapping
//! - [`colorize`] - Incremental colorizer
//! - [`undo`] - Undo records and log
//! - [`palette`] - Color palettes
//! - [`input`] - Keys, mouse, clipboard
//! - [`snapshot`] - Frame output
//!
//! # Unicode Support
//!
//! - Wide (CJK) glyphs occupy two columns
//! - Cursor movement and deletion step over whole grapheme clusters

pub mod buffer;
pub mod colorize;
mod coordinates;
mod edit;
mod editor;
pub mod input;
pub mod layout;
pub mod palette;
mod selection;
pub mod snapshot;
mod text;
pub mod undo;

/// Language definitions (re-export of `textedit-lang`).
pub use textedit_lang as lang;

pub use buffer::{Glyph, Line};
pub use colorize::{ScanState, colorize_line};
pub use coordinates::Coordinates;
pub use editor::{Breakpoint, EditorOptions, ErrorMarkers, TextEditor};
pub use input::{Clipboard, FrameInput, Key, KeyEvent, MemoryClipboard, Modifiers, MouseState};
pub use palette::Palette;
pub use selection::SelectionMode;
pub use snapshot::{Cell, CursorState, Frame, FrameLine, FrameRequest, WhitespaceMarker};
pub use undo::{EditorState, UndoLog, UndoRecord};
