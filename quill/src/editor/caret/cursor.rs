// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::fmt::{Display, Formatter, Result};

/// Caret position in a [`crate::TextFile`], in bytes.
///
/// `save_col` is the "sticky" column. Horizontal moves set it to `col`. Vertical moves
/// leave it alone and use it to pick `col` on the target line, so moving through a
/// short line and back lands where the caret started.
///
/// Positions are compared with [`Cursor::pos`], which leaves out `save_col`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Cursor {
    pub line: usize,
    pub col: usize,
    pub save_col: usize,
}

/// Shorthand for a [`Cursor`] whose sticky column matches its column.
#[must_use]
pub fn cursor(line: usize, col: usize) -> Cursor {
    Cursor {
        line,
        col,
        save_col: col,
    }
}

impl Cursor {
    /// `(line, col)`. Tuples order lexicographically, which is document order.
    #[must_use]
    pub fn pos(&self) -> (usize, usize) { (self.line, self.col) }

    #[must_use]
    pub fn same_pos(&self, other: &Cursor) -> bool { self.pos() == other.pos() }

    #[must_use]
    pub fn is_before(&self, other: &Cursor) -> bool { self.pos() < other.pos() }

    /// Move horizontally, updating the sticky column.
    pub fn set_col(&mut self, col: usize) {
        self.col = col;
        self.save_col = col;
    }

    /// Move to `line`, picking the column from the sticky column clamped to
    /// `line_len`.
    pub fn set_line_sticky(&mut self, line: usize, line_len: usize) {
        self.line = line;
        self.col = self.save_col.min(line_len);
    }
}

/// The two cursors in document order.
#[must_use]
pub fn ordered(a: Cursor, b: Cursor) -> (Cursor, Cursor) {
    if b.is_before(&a) { (b, a) } else { (a, b) }
}

impl Display for Cursor {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "{}:{}", self.line, self.col)
    }
}
