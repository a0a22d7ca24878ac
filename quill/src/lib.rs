// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # quill
//!
//! A text editing engine that backs an interactive editor. It owns the in-memory text,
//! the caret and selection, and the undo/redo history. Painting glyphs, running the
//! window event loop, and syntax colorization live elsewhere; this crate only deals
//! with state.
//!
//! # Table of contents
//!
//! <!-- TOC -->
//! - [Storage: the gap buffer](#storage-the-gap-buffer)
//! - [The text model](#the-text-model)
//! - [Caret, sticky column, and selection](#caret-sticky-column-and-selection)
//! - [Undo and redo](#undo-and-redo)
//! - [Driving the engine](#driving-the-engine)
//! <!-- /TOC -->
//!
//! # Storage: the gap buffer
//!
//! Every row of text and the list of rows itself are stored in a [`GapBuffer`]. The
//! buffer keeps an empty region (the gap) at the position of the last edit, so typing
//! and deleting next to the caret are O(1). Moving the gap costs one element shift per
//! position moved.
//!
//! ```text
//! logical:  h e l l o
//! storage: [h e l|_ _ _|l o]
//!                 ╰─┬─╯
//!                  gap: front_index=3, back_index=6
//! ```
//!
//! # The text model
//!
//! A [`TextFile`] is a gap buffer of [`Line`]s. Lines removed by joins and range
//! deletes go into a [`LinePool`] and come back out (emptied) the next time a line is
//! needed, so split/join heavy editing does not churn the allocator. Line terminators
//! are never stored; loading splits on `'\n'`.
//!
//! # Caret, sticky column, and selection
//!
//! The [`Cursor`] carries a `save_col` so that moving vertically through a short line
//! and back lands on the original column. The [`Selection`] is an anchor plus the
//! current cursor, ordered on demand into a [`SelectionRange`].
//!
//! # Undo and redo
//!
//! Each edit is recorded as a [`FileCommand`] on a bounded [`CommandStack`]. Single
//! character edits that chain (typing forward, backspacing, deleting in place) merge
//! into one command until a space or a caret jump breaks the chain. Undo replays the
//! structural inverse of a command; redo replays the inverse of the inverse.
//!
//! # Driving the engine
//!
//! ```
//! use quill::{EditorBuffer, EditorEngine, EditorEvent, TextFile, TestClipboard,
//!             apply_editor_event};
//!
//! let mut buffer = EditorBuffer::new(TextFile::from_bytes(b"hello"));
//! let mut engine = EditorEngine::default();
//! let mut clipboard = TestClipboard::default();
//!
//! buffer.cursor = quill::cursor(0, 5);
//! for event in [EditorEvent::InsertChar(b'!'), EditorEvent::Undo] {
//!     apply_editor_event(&mut buffer, &mut engine, event, &mut clipboard).unwrap();
//! }
//! assert_eq!(buffer.file.to_bytes(), b"hello".to_vec());
//! ```

// Enforce strict error handling in production library code only. Tests are allowed to
// use .unwrap() (workspace `Cargo.toml` config allows it).
#![cfg_attr(not(test), deny(clippy::unwrap_in_result))]

// Attach.
pub mod core;
pub mod editor;

// Re-export.
pub use core::*;
pub use editor::*;
