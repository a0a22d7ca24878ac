// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{ClipboardService, EditorBuffer, EditorEngine, EditorError, SelectMode, Viewport,
            editor_engine::{caret_mut, engine_public_api}};

/// Events that can be applied to the [`EditorEngine`] to modify an [`EditorBuffer`].
///
/// The host app translates its key presses and window events into these. Anything that
/// edits text goes through the history, anything else only moves the caret, the
/// selection, or the scroll offset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorEvent {
    InsertChar(u8),
    InsertString(String),
    InsertNewLine,
    Delete,
    Backspace,
    Home,
    End,
    PageDown,
    PageUp,
    TokenLeft,
    TokenRight,
    MoveCaret(CaretDirection),
    Resize(Viewport),
    Select(SelectionAction),
    Copy,
    Paste,
    Cut,
    Undo,
    Redo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionAction {
    OneCharLeft,
    OneCharRight,
    OneLineUp,
    OneLineDown,
    PageUp,
    PageDown,
    Home,
    End,
    All,
    Esc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaretDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Apply one event.
///
/// # Errors
///
/// - [`EditorError::ReadOnly`] for an edit on a read only engine. Navigation, selection
///   and copy still work.
/// - [`EditorError::HistoryCorrupted`] from undo / redo.
pub fn apply_editor_event(
    buffer: &mut EditorBuffer,
    engine: &mut EditorEngine,
    event: EditorEvent,
    clipboard: &mut impl ClipboardService,
) -> Result<(), EditorError> {
    match event {
        EditorEvent::InsertChar(byte) => {
            engine_public_api::insert_char(buffer, engine, byte)?;
        }
        EditorEvent::InsertString(chunk) => {
            engine_public_api::insert_str(buffer, engine, chunk.as_bytes())?;
        }
        EditorEvent::InsertNewLine => engine_public_api::insert_new_line(buffer, engine)?,
        EditorEvent::Delete => engine_public_api::delete(buffer, engine)?,
        EditorEvent::Backspace => engine_public_api::backspace(buffer, engine)?,
        EditorEvent::Undo => engine_public_api::undo(buffer, engine)?,
        EditorEvent::Redo => engine_public_api::redo(buffer, engine)?,

        EditorEvent::MoveCaret(direction) => match direction {
            CaretDirection::Left => caret_mut::left(buffer, engine, SelectMode::Disabled),
            CaretDirection::Right => caret_mut::right(buffer, engine, SelectMode::Disabled),
            CaretDirection::Up => caret_mut::up(buffer, engine, SelectMode::Disabled),
            CaretDirection::Down => caret_mut::down(buffer, engine, SelectMode::Disabled),
        },
        EditorEvent::TokenLeft => caret_mut::token_left(buffer, engine, SelectMode::Disabled),
        EditorEvent::TokenRight => {
            caret_mut::token_right(buffer, engine, SelectMode::Disabled);
        }
        EditorEvent::Home => caret_mut::home(buffer, engine, SelectMode::Disabled),
        EditorEvent::End => caret_mut::end(buffer, engine, SelectMode::Disabled),
        EditorEvent::PageDown => caret_mut::page_down(buffer, engine, SelectMode::Disabled),
        EditorEvent::PageUp => caret_mut::page_up(buffer, engine, SelectMode::Disabled),

        EditorEvent::Select(selection_action) => match selection_action {
            SelectionAction::OneCharLeft => {
                caret_mut::left(buffer, engine, SelectMode::Enabled);
            }
            SelectionAction::OneCharRight => {
                caret_mut::right(buffer, engine, SelectMode::Enabled);
            }
            SelectionAction::OneLineUp => caret_mut::up(buffer, engine, SelectMode::Enabled),
            SelectionAction::OneLineDown => {
                caret_mut::down(buffer, engine, SelectMode::Enabled);
            }
            SelectionAction::PageUp => {
                caret_mut::page_up(buffer, engine, SelectMode::Enabled);
            }
            SelectionAction::PageDown => {
                caret_mut::page_down(buffer, engine, SelectMode::Enabled);
            }
            SelectionAction::Home => caret_mut::home(buffer, engine, SelectMode::Enabled),
            SelectionAction::End => caret_mut::end(buffer, engine, SelectMode::Enabled),
            SelectionAction::All => engine_public_api::select_all(buffer, engine),
            SelectionAction::Esc => engine_public_api::clear_selection(buffer),
        },

        EditorEvent::Copy => engine_public_api::copy_selection(buffer, clipboard),
        EditorEvent::Cut => engine_public_api::cut_selection(buffer, engine, clipboard)?,
        EditorEvent::Paste => engine_public_api::paste(buffer, engine, clipboard)?,

        EditorEvent::Resize(viewport) => engine_public_api::resize(buffer, engine, viewport),
    }

    Ok(())
}

/// Apply `events` in order, stopping at the first error.
///
/// # Errors
///
/// See [`apply_editor_event`].
pub fn apply_editor_events(
    buffer: &mut EditorBuffer,
    engine: &mut EditorEngine,
    events: impl IntoIterator<Item = EditorEvent>,
    clipboard: &mut impl ClipboardService,
) -> Result<(), EditorError> {
    for event in events {
        apply_editor_event(buffer, engine, event, clipboard)?;
    }
    Ok(())
}
