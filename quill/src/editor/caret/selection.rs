// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Cursor, SelectMode, ordered};

/// The selection is the span between `anchor` and the buffer's current cursor. Only the
/// anchor is stored, the other end moves with the caret.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    pub anchor: Cursor,
    pub active: bool,
}

/// A selection in document order. `end` is exclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionRange {
    pub start: Cursor,
    pub end: Cursor,
}

impl Selection {
    /// Called after every caret movement with the cursor from before the move.
    /// - [`SelectMode::Enabled`]: anchor at `before` if no selection is active yet.
    /// - [`SelectMode::Disabled`]: drop the selection.
    pub fn update(&mut self, before: Cursor, sel_mod: SelectMode) {
        match sel_mod {
            SelectMode::Enabled => {
                if !self.active {
                    self.anchor = before;
                    self.active = true;
                }
            }
            SelectMode::Disabled => self.active = false,
        }
    }

    pub fn clear(&mut self) { self.active = false; }

    /// Ordered range between the anchor and `current`. [None] if the selection is off
    /// or spans nothing.
    #[must_use]
    pub fn range(&self, current: Cursor) -> Option<SelectionRange> {
        if !self.active || self.anchor.same_pos(&current) {
            return None;
        }
        let (start, end) = ordered(self.anchor, current);
        Some(SelectionRange { start, end })
    }

    #[must_use]
    pub fn contains(&self, current: Cursor, line: usize, col: usize) -> bool {
        self.range(current)
            .is_some_and(|range| range.contains(line, col))
    }
}

impl SelectionRange {
    /// ```text
    /// start ▼
    /// ░░░░░░█████████
    /// ███████████████   lines strictly inside are fully selected
    /// █████░░░░░░░░░░
    ///      ▲ end (exclusive)
    /// ```
    #[must_use]
    pub fn contains(&self, line: usize, col: usize) -> bool {
        let (start, end) = (self.start, self.end);
        if line < start.line || line > end.line {
            false
        } else if start.line == end.line {
            start.col <= col && col < end.col
        } else if line == start.line {
            col >= start.col
        } else if line == end.line {
            col < end.col
        } else {
            true
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.start.same_pos(&self.end) }
}
