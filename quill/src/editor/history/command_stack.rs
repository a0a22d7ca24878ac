// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{FileCommand, MAX_UNDO_REDO_SIZE, RingBuffer as _, RingBufferHeap};

/// A bounded stack of [`FileCommand`]s. Pushing onto a full stack evicts the oldest
/// command. Popping an empty stack yields [None].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandStack {
    commands: RingBufferHeap<FileCommand, MAX_UNDO_REDO_SIZE>,
}

impl CommandStack {
    pub fn push(&mut self, command: FileCommand) { self.commands.push(command); }

    pub fn pop(&mut self) -> Option<FileCommand> { self.commands.pop() }

    #[must_use]
    pub fn top(&self) -> Option<&FileCommand> { self.commands.last() }

    pub fn top_mut(&mut self) -> Option<&mut FileCommand> { self.commands.last_mut() }

    #[must_use]
    pub fn len(&self) -> usize { self.commands.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    pub fn clear(&mut self) { self.commands.clear(); }

    /// Oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &FileCommand> + '_ { self.commands.iter() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CommandKind, CommandText, Granularity, assert_eq2, cursor};

    fn command(col: usize) -> FileCommand {
        FileCommand {
            kind: CommandKind::Insert,
            start: cursor(0, col),
            end: cursor(0, col + 1),
            text: CommandText::from_slice(b"x"),
            saved_cursor: cursor(0, col),
            granularity: Granularity::Char,
        }
    }

    #[test]
    fn test_push_pop_top() {
        let mut stack = CommandStack::default();
        assert_eq2!(stack.pop(), None);
        stack.push(command(0));
        stack.push(command(1));
        assert_eq2!(stack.top(), Some(&command(1)));
        assert_eq2!(stack.pop(), Some(command(1)));
        assert_eq2!(stack.len(), 1);
    }

    #[test]
    fn test_overflow_evicts_oldest() {
        let mut stack = CommandStack::default();
        for it in 0..MAX_UNDO_REDO_SIZE + 10 {
            stack.push(command(it));
        }
        assert_eq2!(stack.len(), MAX_UNDO_REDO_SIZE);
        assert_eq2!(stack.iter().next(), Some(&command(10)));
        assert_eq2!(stack.top(), Some(&command(MAX_UNDO_REDO_SIZE + 9)));
    }
}
