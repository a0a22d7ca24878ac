// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! # Undo/Redo Algorithm
//!
//! Every edit is recorded as a [`FileCommand`] describing *what* changed, rather than
//! a snapshot of the whole document.
//!
//! ## Recording (open / close)
//!
//! 1. Before touching the text, the caller [`EditorHistory::open`]s a command with its
//!    kind, start, text and the caret as it is now.
//! 2. The edit runs.
//! 3. The caller [`EditorHistory::close`]s the command with its end. If the command
//!    continues the previous keystroke (see below) it is merged into the top of the
//!    undo stack. Otherwise it is pushed, and the redo stack is cleared.
//!
//! ## Coalescing
//!
//! Two single keystroke commands of the same kind merge when their ranges chain:
//! - typing: the new insert starts where the top one ends.
//! - backspace: the new removal ends where the top one starts.
//! - forward delete: the new removal starts where the top one starts.
//!
//! Typing a space, moving the caret, or undoing / redoing breaks the chain. So typing
//! `"hello world"` is undone in two steps, `" world"` then `"hello"`. A newline is a
//! [`CommandKind::SplitLine`], which never merges.
//!
//! ## Undoing ([`replay_undo`]) and redoing ([`replay_redo`])
//!
//! 1. Pop a command. An empty stack is a no-op.
//! 2. Apply the structural inverse through [`crate::editor_engine::content_mut`].
//! 3. Push the inverted command onto the other stack, remembering the caret from before
//!    step 2, and move the caret to the popped command's saved cursor.

use crate::{CommandKind, CommandStack, CommandText, Cursor, DEBUG_QUILL_HISTORY,
            EditorBuffer, EditorError, FileCommand, Granularity, call_if_true,
            editor_engine::content_mut};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorHistory {
    pub undo_stack: CommandStack,
    pub redo_stack: CommandStack,
    open_command: Option<FileCommand>,
    /// Cleared by anything that should stop the next keystroke from merging into the
    /// top of the undo stack.
    chain_intact: bool,
}

impl EditorHistory {
    /// Start recording an edit. `end` is filled in by [`Self::close`].
    ///
    /// # Panics
    ///
    /// If a command is already open.
    #[track_caller]
    pub fn open(
        &mut self,
        kind: CommandKind,
        start: Cursor,
        saved_cursor: Cursor,
        text: &[u8],
        granularity: Granularity,
    ) {
        assert!(
            self.open_command.is_none(),
            "Can't open a {kind} command while another command is open"
        );
        self.open_command = Some(FileCommand {
            kind,
            start,
            end: start,
            text: CommandText::from_slice(text),
            saved_cursor,
            granularity,
        });
    }

    /// Finish recording the open edit.
    ///
    /// # Panics
    ///
    /// If no command is open.
    #[track_caller]
    pub fn close(&mut self, end: Cursor) {
        let Some(mut command) = self.open_command.take() else {
            panic!("Can't close a command when none is open");
        };
        command.end = end;

        if self.chain_intact
            && let Some(top) = self.undo_stack.top_mut()
            && try_coalesce(top, &command)
        {
            call_if_true!(DEBUG_QUILL_HISTORY, {
                tracing::debug!(
                    message = "EditorHistory::close -> coalesced",
                    kind = %top.kind,
                    text = %String::from_utf8_lossy(&top.text)
                );
            });
        } else {
            call_if_true!(DEBUG_QUILL_HISTORY, {
                tracing::debug!(
                    message = "EditorHistory::close -> pushed",
                    kind = %command.kind,
                    start = %command.start,
                    end = %command.end,
                    undo_len = %(self.undo_stack.len() + 1)
                );
            });
            self.undo_stack.push(command);
            self.redo_stack.clear();
        }

        self.chain_intact = true;
    }

    #[must_use]
    pub fn is_open(&self) -> bool { self.open_command.is_some() }

    /// The next keystroke starts a new undo step.
    pub fn break_coalescing(&mut self) { self.chain_intact = false; }

    #[must_use]
    pub fn can_undo(&self) -> bool { !self.undo_stack.is_empty() }

    #[must_use]
    pub fn can_redo(&self) -> bool { !self.redo_stack.is_empty() }

    pub fn clear(&mut self) {
        self.undo_stack.clear();
        self.redo_stack.clear();
        self.open_command = None;
        self.chain_intact = false;
    }
}

/// Merge `new` into `top` if they are consecutive keystrokes. Returns whether it did.
fn try_coalesce(top: &mut FileCommand, new: &FileCommand) -> bool {
    let mergeable = top.granularity == Granularity::Char
        && new.granularity == Granularity::Char
        && top.kind == new.kind
        && new.text.as_slice() != b" ";
    if !mergeable {
        return false;
    }

    match new.kind {
        // Typing forward.
        CommandKind::Insert if top.end.same_pos(&new.start) => {
            top.text.extend_from_slice(&new.text);
            top.end = new.end;
            true
        }
        // Backspace: the new byte was just before the old range.
        CommandKind::Remove if new.end.same_pos(&top.start) => {
            top.text.insert_from_slice(0, &new.text);
            top.start = new.start;
            true
        }
        // Delete in place: the new byte was just after the old range. Single keystroke
        // removes never span lines, so the range grows along one line.
        CommandKind::Remove if new.start.same_pos(&top.start) => {
            top.text.extend_from_slice(&new.text);
            let grown_col = top.end.col + (new.end.col - new.start.col);
            top.end.set_col(grown_col);
            true
        }
        _ => false,
    }
}

/// Undo the newest command. Returns whether there was one.
///
/// # Errors
///
/// [`EditorError::HistoryCorrupted`] if replaying the command doesn't land where the
/// command says it should.
pub fn replay_undo(buffer: &mut EditorBuffer) -> Result<bool, EditorError> {
    let Some(command) = buffer.file.history.undo_stack.pop() else {
        return Ok(false);
    };
    let inverse = replay_inverse(buffer, command)?;
    buffer.file.history.redo_stack.push(inverse);

    call_if_true!(DEBUG_QUILL_HISTORY, {
        tracing::debug!(
            message = "undo",
            undo_len = %buffer.file.history.undo_stack.len(),
            redo_len = %buffer.file.history.redo_stack.len(),
            cursor = %buffer.cursor
        );
    });

    Ok(true)
}

/// Redo the most recently undone command. Returns whether there was one.
///
/// # Errors
///
/// [`EditorError::HistoryCorrupted`] if replaying the command doesn't land where the
/// command says it should.
pub fn replay_redo(buffer: &mut EditorBuffer) -> Result<bool, EditorError> {
    let Some(command) = buffer.file.history.redo_stack.pop() else {
        return Ok(false);
    };
    let inverse = replay_inverse(buffer, command)?;
    buffer.file.history.undo_stack.push(inverse);

    call_if_true!(DEBUG_QUILL_HISTORY, {
        tracing::debug!(
            message = "redo",
            undo_len = %buffer.file.history.undo_stack.len(),
            redo_len = %buffer.file.history.redo_stack.len(),
            cursor = %buffer.cursor
        );
    });

    Ok(true)
}

/// Apply the inverse of `command` to the buffer, and return the inverted command for
/// the other stack.
fn replay_inverse(
    buffer: &mut EditorBuffer,
    command: FileCommand,
) -> Result<FileCommand, EditorError> {
    let cursor_before = buffer.cursor;
    let FileCommand { start, end, .. } = command;

    match command.kind {
        CommandKind::Insert => content_mut::remove_range(buffer, start, end),
        CommandKind::Remove => {
            let actual = content_mut::insert_range(buffer, &command.text, start);
            if !actual.same_pos(&end) {
                return Err(EditorError::HistoryCorrupted {
                    expected: end,
                    actual,
                });
            }
        }
        CommandKind::SplitLine => {
            content_mut::join_lines(buffer, start.line, end.line, start.col);
        }
        CommandKind::JoinLines => content_mut::split_line(buffer, start.line, start.col),
    }

    buffer.cursor = command.saved_cursor;
    buffer.selection.clear();
    buffer.file.history.break_coalescing();

    Ok(command.inverted(cursor_before))
}
