// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Caret movement. Every function here takes a [`SelectMode`], so the same code path
//! serves plain arrows and their shift-selecting variants.
//!
//! Horizontal moves reset the sticky column, vertical moves honor it (see
//! [`crate::Cursor`]). After a move the selection is updated, an in-progress typing
//! run is closed for undo purposes, and the view is scrolled to the caret.

use super::{SelectMode, scroll_editor_content};
use crate::{Cursor, EditorBuffer, EditorEngine, SEPARATORS};

/// Bytes that end a word for [`token_left`] and [`token_right`].
#[must_use]
pub fn is_separator(byte: u8) -> bool { SEPARATORS.contains(&byte) }

pub fn left(buffer: &mut EditorBuffer, engine: &EditorEngine, sel_mod: SelectMode) {
    let before = buffer.cursor;
    step_left(buffer);
    finish_move(buffer, engine, before, sel_mod);
}

pub fn right(buffer: &mut EditorBuffer, engine: &EditorEngine, sel_mod: SelectMode) {
    let before = buffer.cursor;
    step_right(buffer);
    finish_move(buffer, engine, before, sel_mod);
}

pub fn up(buffer: &mut EditorBuffer, engine: &EditorEngine, sel_mod: SelectMode) {
    let before = buffer.cursor;
    move_to_line(buffer, buffer.cursor.line.saturating_sub(1));
    finish_move(buffer, engine, before, sel_mod);
}

pub fn down(buffer: &mut EditorBuffer, engine: &EditorEngine, sel_mod: SelectMode) {
    let before = buffer.cursor;
    move_to_line(buffer, buffer.cursor.line + 1);
    finish_move(buffer, engine, before, sel_mod);
}

pub fn page_up(buffer: &mut EditorBuffer, engine: &EditorEngine, sel_mod: SelectMode) {
    let before = buffer.cursor;
    let step = scroll_editor_content::page_step(engine);
    move_to_line(buffer, buffer.cursor.line.saturating_sub(step));
    finish_move(buffer, engine, before, sel_mod);
}

pub fn page_down(buffer: &mut EditorBuffer, engine: &EditorEngine, sel_mod: SelectMode) {
    let before = buffer.cursor;
    let step = scroll_editor_content::page_step(engine);
    move_to_line(buffer, buffer.cursor.line.saturating_add(step));
    finish_move(buffer, engine, before, sel_mod);
}

pub fn home(buffer: &mut EditorBuffer, engine: &EditorEngine, sel_mod: SelectMode) {
    let before = buffer.cursor;
    buffer.cursor.set_col(0);
    finish_move(buffer, engine, before, sel_mod);
}

pub fn end(buffer: &mut EditorBuffer, engine: &EditorEngine, sel_mod: SelectMode) {
    let before = buffer.cursor;
    let line_len = buffer.current_line_len();
    buffer.cursor.set_col(line_len);
    finish_move(buffer, engine, before, sel_mod);
}

/// Skip the separators right before the caret, then the word before those. At the
/// start of a line this is a plain [`left`].
pub fn token_left(buffer: &mut EditorBuffer, engine: &EditorEngine, sel_mod: SelectMode) {
    let before = buffer.cursor;
    let line = buffer.file.line_at(buffer.cursor.line);
    let mut col = buffer.cursor.col;

    if col == 0 {
        step_left(buffer);
    } else {
        while col > 0 && is_separator(line.byte_at(col - 1)) {
            col -= 1;
        }
        while col > 0 && !is_separator(line.byte_at(col - 1)) {
            col -= 1;
        }
        buffer.cursor.set_col(col);
    }

    finish_move(buffer, engine, before, sel_mod);
}

/// Skip the separators right after the caret, then the word after those. At the end
/// of a line this is a plain [`right`].
pub fn token_right(buffer: &mut EditorBuffer, engine: &EditorEngine, sel_mod: SelectMode) {
    let before = buffer.cursor;
    let line = buffer.file.line_at(buffer.cursor.line);
    let line_len = line.len();
    let mut col = buffer.cursor.col;

    if col == line_len {
        step_right(buffer);
    } else {
        while col < line_len && is_separator(line.byte_at(col)) {
            col += 1;
        }
        while col < line_len && !is_separator(line.byte_at(col)) {
            col += 1;
        }
        buffer.cursor.set_col(col);
    }

    finish_move(buffer, engine, before, sel_mod);
}

fn step_left(buffer: &mut EditorBuffer) {
    let Cursor { line, col, .. } = buffer.cursor;
    if col > 0 {
        buffer.cursor.set_col(col - 1);
    } else if line > 0 {
        let prev_len = buffer.file.line_len(line - 1);
        buffer.cursor.line = line - 1;
        buffer.cursor.set_col(prev_len);
    }
}

fn step_right(buffer: &mut EditorBuffer) {
    let Cursor { line, col, .. } = buffer.cursor;
    if col < buffer.current_line_len() {
        buffer.cursor.set_col(col + 1);
    } else if line + 1 < buffer.line_count() {
        buffer.cursor.line = line + 1;
        buffer.cursor.set_col(0);
    }
}

/// Clamp `line` to the document and apply the sticky column.
fn move_to_line(buffer: &mut EditorBuffer, line: usize) {
    let line = line.min(buffer.last_line_index());
    let line_len = buffer.file.line_len(line);
    buffer.cursor.set_line_sticky(line, line_len);
}

fn finish_move(
    buffer: &mut EditorBuffer,
    engine: &EditorEngine,
    before: Cursor,
    sel_mod: SelectMode,
) {
    buffer.selection.update(before, sel_mod);
    if !before.same_pos(&buffer.cursor) {
        buffer.file.history.break_coalescing();
    }
    scroll_editor_content::validate_scroll(buffer, engine);
}
