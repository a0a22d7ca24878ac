// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use smallvec::SmallVec;

use crate::{Cursor, DEFAULT_COMMAND_TEXT_SIZE};

/// Bytes inserted or removed by a command. This is an owned copy, never a view into
/// the live lines.
pub type CommandText = SmallVec<[u8; DEFAULT_COMMAND_TEXT_SIZE]>;

/// The four structural edits. Each one's inverse is another one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
#[cfg_attr(test, derive(strum_macros::EnumIter))]
pub enum CommandKind {
    Insert,
    Remove,
    JoinLines,
    SplitLine,
}

/// Only [`Granularity::Char`] commands take part in coalescing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum_macros::Display)]
pub enum Granularity {
    /// One keystroke: a typed byte, a backspace, a delete.
    Char,
    /// Paste, cut, deleting a selection.
    Block,
}

/// One undoable edit.
///
/// `start..end` is the document range the command covers. For [`CommandKind::Insert`]
/// and [`CommandKind::SplitLine`] that is where the new text sits after the edit. For
/// [`CommandKind::Remove`] and [`CommandKind::JoinLines`] it's where the removed text
/// sat before the edit. Since the range is the same on both sides of an edit, inverting
/// a command only swaps its kind.
///
/// | kind        | range                 | text          |
/// |-------------|-----------------------|---------------|
/// | `Insert`    | the inserted text     | inserted text |
/// | `Remove`    | the removed text      | removed text  |
/// | `SplitLine` | `(l, c)..(l + 1, 0)`  | `"\n"`        |
/// | `JoinLines` | `(l, c)..(l + 1, 0)`  | `"\n"`        |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCommand {
    pub kind: CommandKind,
    pub start: Cursor,
    pub end: Cursor,
    pub text: CommandText,
    /// The caret before the edit. Undo puts it back here.
    pub saved_cursor: Cursor,
    pub granularity: Granularity,
}

impl CommandKind {
    #[must_use]
    pub fn inverse(self) -> Self {
        match self {
            CommandKind::Insert => CommandKind::Remove,
            CommandKind::Remove => CommandKind::Insert,
            CommandKind::JoinLines => CommandKind::SplitLine,
            CommandKind::SplitLine => CommandKind::JoinLines,
        }
    }
}

impl FileCommand {
    /// The command that undoes this one. `saved_cursor` is the caret at the time the
    /// inverse is applied, so undoing the inverse (a redo) restores it.
    #[must_use]
    pub fn inverted(self, saved_cursor: Cursor) -> Self {
        Self {
            kind: self.kind.inverse(),
            saved_cursor,
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::{assert_eq2, cursor};

    #[test]
    fn test_inverse_is_an_involution() {
        for kind in CommandKind::iter() {
            assert_ne!(kind.inverse(), kind);
            assert_eq2!(kind.inverse().inverse(), kind);
        }
    }

    #[test]
    fn test_inverted_keeps_range_and_text() {
        let command = FileCommand {
            kind: CommandKind::Insert,
            start: cursor(0, 1),
            end: cursor(0, 3),
            text: CommandText::from_slice(b"ab"),
            saved_cursor: cursor(0, 1),
            granularity: Granularity::Char,
        };
        let inverse = command.clone().inverted(cursor(0, 3));
        assert_eq2!(inverse.kind, CommandKind::Remove);
        assert_eq2!((inverse.start, inverse.end), (command.start, command.end));
        assert_eq2!(inverse.text, command.text);
        assert_eq2!(inverse.saved_cursor, cursor(0, 3));
        assert_eq2!(inverse.kind.to_string(), "Remove");
    }
}
