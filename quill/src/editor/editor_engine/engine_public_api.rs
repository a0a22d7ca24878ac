// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Functions that implement the public (re-exported in `mod.rs`) editing API of the
//! engine. Each one records what it does in the file's history, then re-validates the
//! scroll offset. See [`mod@super::content_mut`] for the raw mutations underneath, and
//! [`mod@super::caret_mut`] for movement.
//!
//! With [`crate::EditMode::ReadOnly`] every function here that would change the text
//! returns [`EditorError::ReadOnly`] and leaves the buffer alone.

use super::{content_mut, scroll_editor_content};
use crate::{ClipboardService, CommandKind, Cursor, DEBUG_QUILL_CLIPBOARD, EditorBuffer,
            EditorEngine, EditorError, Granularity, Viewport, cursor, replay_redo,
            replay_undo};

/// Type `byte` at the caret, replacing the selection if there is one. `'\n'` is the
/// same as [`insert_new_line`].
///
/// # Errors
///
/// [`EditorError::ReadOnly`] if the engine doesn't allow edits.
pub fn insert_char(
    buffer: &mut EditorBuffer,
    engine: &EditorEngine,
    byte: u8,
) -> Result<(), EditorError> {
    if byte == b'\n' {
        return insert_new_line(buffer, engine);
    }
    check_writable(engine)?;

    remove_selected(buffer);
    let start = buffer.cursor;
    record_edit(
        buffer,
        CommandKind::Insert,
        start,
        &[byte],
        Granularity::Char,
        |buffer| {
            content_mut::insert_byte(buffer, byte);
            buffer.cursor
        },
    );

    scroll_editor_content::validate_scroll(buffer, engine);
    Ok(())
}

/// Split the line at the caret, replacing the selection if there is one.
///
/// # Errors
///
/// [`EditorError::ReadOnly`] if the engine doesn't allow edits.
pub fn insert_new_line(
    buffer: &mut EditorBuffer,
    engine: &EditorEngine,
) -> Result<(), EditorError> {
    check_writable(engine)?;

    remove_selected(buffer);
    let start = buffer.cursor;
    record_edit(
        buffer,
        CommandKind::SplitLine,
        start,
        b"\n",
        Granularity::Char,
        |buffer| {
            content_mut::split_line(buffer, start.line, start.col);
            buffer.cursor
        },
    );

    scroll_editor_content::validate_scroll(buffer, engine);
    Ok(())
}

/// Insert `text` at the caret as one undo step, replacing the selection if there is
/// one. `'\n'` in `text` splits lines.
///
/// # Errors
///
/// [`EditorError::ReadOnly`] if the engine doesn't allow edits.
pub fn insert_str(
    buffer: &mut EditorBuffer,
    engine: &EditorEngine,
    text: &[u8],
) -> Result<(), EditorError> {
    check_writable(engine)?;

    remove_selected(buffer);
    if !text.is_empty() {
        let start = buffer.cursor;
        record_edit(
            buffer,
            CommandKind::Insert,
            start,
            text,
            Granularity::Block,
            |buffer| content_mut::insert_range(buffer, text, start),
        );
    }

    scroll_editor_content::validate_scroll(buffer, engine);
    Ok(())
}

/// Remove the byte before the caret, or join this line onto the previous one when the
/// caret is at the start of a line. With a selection, only the selection is removed.
///
/// # Errors
///
/// [`EditorError::ReadOnly`] if the engine doesn't allow edits.
pub fn backspace(buffer: &mut EditorBuffer, engine: &EditorEngine) -> Result<(), EditorError> {
    check_writable(engine)?;

    if !remove_selected(buffer) {
        let Cursor { line, col, .. } = buffer.cursor;
        if col > 0 {
            let text = [buffer.file.byte_at(line, col - 1)];
            record_edit(
                buffer,
                CommandKind::Remove,
                cursor(line, col - 1),
                &text,
                Granularity::Char,
                |buffer| {
                    content_mut::remove_left(buffer);
                    cursor(line, col)
                },
            );
        } else if line > 0 {
            let prev_len = buffer.file.line_len(line - 1);
            record_edit(
                buffer,
                CommandKind::JoinLines,
                cursor(line - 1, prev_len),
                b"\n",
                Granularity::Char,
                |buffer| {
                    content_mut::remove_left(buffer);
                    cursor(line, 0)
                },
            );
        }
    }

    scroll_editor_content::validate_scroll(buffer, engine);
    Ok(())
}

/// Remove the byte under the caret, or pull the next line up when the caret is at the
/// end of a line. With a selection, only the selection is removed.
///
/// # Errors
///
/// [`EditorError::ReadOnly`] if the engine doesn't allow edits.
pub fn delete(buffer: &mut EditorBuffer, engine: &EditorEngine) -> Result<(), EditorError> {
    check_writable(engine)?;

    if !remove_selected(buffer) {
        let Cursor { line, col, .. } = buffer.cursor;
        let line_len = buffer.file.line_len(line);
        if col < line_len {
            let text = [buffer.file.byte_at(line, col)];
            record_edit(
                buffer,
                CommandKind::Remove,
                cursor(line, col),
                &text,
                Granularity::Char,
                |buffer| {
                    content_mut::remove_right(buffer);
                    cursor(line, col + 1)
                },
            );
        } else if line + 1 < buffer.line_count() {
            record_edit(
                buffer,
                CommandKind::JoinLines,
                cursor(line, col),
                b"\n",
                Granularity::Char,
                |buffer| {
                    content_mut::remove_right(buffer);
                    cursor(line + 1, 0)
                },
            );
        }
    }

    scroll_editor_content::validate_scroll(buffer, engine);
    Ok(())
}

/// Remove the selected text as one undo step. Does nothing without a selection.
///
/// # Errors
///
/// [`EditorError::ReadOnly`] if the engine doesn't allow edits.
pub fn delete_selection(
    buffer: &mut EditorBuffer,
    engine: &EditorEngine,
) -> Result<(), EditorError> {
    check_writable(engine)?;
    remove_selected(buffer);
    scroll_editor_content::validate_scroll(buffer, engine);
    Ok(())
}

/// Put the selected text on the clipboard. A clipboard failure is logged and otherwise
/// ignored.
pub fn copy_selection(buffer: &EditorBuffer, clipboard: &mut impl ClipboardService) {
    let Some(range) = buffer.get_selection_range() else {
        return;
    };
    let content = content_mut::get_range(&buffer.file, range.start, range.end);

    DEBUG_QUILL_CLIPBOARD.then(|| {
        // % is Display, ? is Debug.
        tracing::debug!(
            message = "copy_selection",
            range_start = %range.start,
            range_end = %range.end,
            content = %String::from_utf8_lossy(&content)
        );
    });

    if let Err(error) = clipboard.try_to_put_content_into_clipboard(content) {
        DEBUG_QUILL_CLIPBOARD.then(|| {
            tracing::debug!(
                message = "copy_selection -> failed to copy selected text to clipboard",
                error = ?error,
            );
        });
    }
}

/// [`copy_selection`], then [`delete_selection`].
///
/// # Errors
///
/// [`EditorError::ReadOnly`] if the engine doesn't allow edits. Nothing is copied in
/// that case either.
pub fn cut_selection(
    buffer: &mut EditorBuffer,
    engine: &EditorEngine,
    clipboard: &mut impl ClipboardService,
) -> Result<(), EditorError> {
    check_writable(engine)?;
    copy_selection(buffer, clipboard);
    delete_selection(buffer, engine)
}

/// Insert the clipboard's content at the caret as one undo step, replacing the
/// selection if there is one. An empty or unreadable clipboard does nothing.
///
/// # Errors
///
/// [`EditorError::ReadOnly`] if the engine doesn't allow edits.
pub fn paste(
    buffer: &mut EditorBuffer,
    engine: &EditorEngine,
    clipboard: &mut impl ClipboardService,
) -> Result<(), EditorError> {
    check_writable(engine)?;

    match clipboard.try_to_get_content_from_clipboard() {
        Ok(content) if content.is_empty() => Ok(()),
        Ok(content) => {
            DEBUG_QUILL_CLIPBOARD.then(|| {
                tracing::debug!(
                    message = "paste",
                    at = %buffer.cursor,
                    content = %String::from_utf8_lossy(&content)
                );
            });
            insert_str(buffer, engine, &content)
        }
        Err(error) => {
            DEBUG_QUILL_CLIPBOARD.then(|| {
                tracing::debug!(
                    message = "paste -> failed to read clipboard",
                    error = ?error,
                );
            });
            Ok(())
        }
    }
}

/// Undo the newest edit. Nothing to undo is not an error.
///
/// # Errors
///
/// - [`EditorError::ReadOnly`] if the engine doesn't allow edits.
/// - [`EditorError::HistoryCorrupted`] if the history doesn't match the text.
pub fn undo(buffer: &mut EditorBuffer, engine: &EditorEngine) -> Result<(), EditorError> {
    check_writable(engine)?;
    replay_undo(buffer)?;
    scroll_editor_content::validate_scroll(buffer, engine);
    Ok(())
}

/// Redo the most recently undone edit. Nothing to redo is not an error.
///
/// # Errors
///
/// - [`EditorError::ReadOnly`] if the engine doesn't allow edits.
/// - [`EditorError::HistoryCorrupted`] if the history doesn't match the text.
pub fn redo(buffer: &mut EditorBuffer, engine: &EditorEngine) -> Result<(), EditorError> {
    check_writable(engine)?;
    replay_redo(buffer)?;
    scroll_editor_content::validate_scroll(buffer, engine);
    Ok(())
}

/// Select from the start of the document to its end, leaving the caret at the end.
pub fn select_all(buffer: &mut EditorBuffer, engine: &EditorEngine) {
    let before = buffer.cursor;
    buffer.selection.anchor = cursor(0, 0);
    buffer.selection.active = true;
    buffer.cursor = buffer.end_of_document();
    if !before.same_pos(&buffer.cursor) {
        buffer.file.history.break_coalescing();
    }
    scroll_editor_content::validate_scroll(buffer, engine);
}

pub fn clear_selection(buffer: &mut EditorBuffer) { buffer.selection.clear(); }

/// Apply a new viewport size, and scroll so the caret stays visible.
pub fn resize(buffer: &mut EditorBuffer, engine: &mut EditorEngine, viewport: Viewport) {
    engine.viewport = viewport;
    scroll_editor_content::validate_scroll(buffer, engine);
}

fn check_writable(engine: &EditorEngine) -> Result<(), EditorError> {
    if engine.is_read_only() {
        Err(EditorError::ReadOnly)
    } else {
        Ok(())
    }
}

/// Bracket `edit` with an open / close pair on the history. `edit` returns the end of
/// the command's range.
fn record_edit(
    buffer: &mut EditorBuffer,
    kind: CommandKind,
    start: Cursor,
    text: &[u8],
    granularity: Granularity,
    edit: impl FnOnce(&mut EditorBuffer) -> Cursor,
) {
    let saved_cursor = buffer.cursor;
    buffer
        .file
        .history
        .open(kind, start, saved_cursor, text, granularity);
    let end = edit(buffer);
    buffer.file.history.close(end);
}

/// Remove the selection as a [`Granularity::Block`] command. Returns whether there was
/// anything to remove.
fn remove_selected(buffer: &mut EditorBuffer) -> bool {
    let Some(range) = buffer.get_selection_range() else {
        buffer.selection.clear();
        return false;
    };
    let text = content_mut::get_range(&buffer.file, range.start, range.end);
    record_edit(
        buffer,
        CommandKind::Remove,
        range.start,
        &text,
        Granularity::Block,
        |buffer| {
            content_mut::remove_range(buffer, range.start, range.end);
            range.end
        },
    );
    buffer.selection.clear();
    true
}
