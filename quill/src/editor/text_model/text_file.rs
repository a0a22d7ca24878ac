// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::path::Path;

use miette::{Context, IntoDiagnostic};

use crate::{Cursor, EditorHistory, GapBuffer, Line, LinePool};

/// A loaded document. It owns every [`Line`], both the live ones (in row order) and the
/// retired ones waiting in the [`LinePool`], along with the undo / redo history and the
/// cursor to restore when the editor switches back to it.
#[derive(Debug, Clone, Default)]
pub struct TextFile {
    lines: GapBuffer<Line>,
    line_pool: LinePool,
    pub saved_cursor: Cursor,
    pub history: EditorHistory,
}

impl TextFile {
    /// Split `bytes` on `'\n'`. The separators are dropped. An empty input has no lines
    /// at all, and a trailing `'\n'` produces a trailing empty line, so
    /// [`Self::to_bytes`] gives back exactly `bytes`.
    #[must_use]
    pub fn from_bytes(bytes: &[u8]) -> Self {
        let mut it = Self::default();
        if bytes.is_empty() {
            return it;
        }
        it.lines = bytes.split(|byte| *byte == b'\n').map(Line::from_bytes).collect();
        it
    }

    /// # Errors
    ///
    /// If the file can't be read.
    pub fn try_load_from_path(path: impl AsRef<Path>) -> miette::Result<Self> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .into_diagnostic()
            .wrap_err_with(|| format!("Can't load {}", path.display()))?;
        Ok(Self::from_bytes(&bytes))
    }

    #[must_use]
    pub fn line_count(&self) -> usize { self.lines.len() }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.lines.is_empty() }

    #[must_use]
    pub fn get_line(&self, index: usize) -> Option<&Line> { self.lines.get(index) }

    /// # Panics
    ///
    /// If `index >= line_count()`.
    #[must_use]
    #[track_caller]
    pub fn line_at(&self, index: usize) -> &Line { &self.lines[index] }

    /// # Panics
    ///
    /// If `index >= line_count()`.
    #[track_caller]
    pub fn line_at_mut(&mut self, index: usize) -> &mut Line {
        let line_count = self.line_count();
        match self.lines.get_mut(index) {
            Some(line) => line,
            None => panic!("Line {index} is out of range for a file of {line_count} lines"),
        }
    }

    /// Length of the line at `index`.
    ///
    /// # Panics
    ///
    /// If `index >= line_count()`.
    #[must_use]
    #[track_caller]
    pub fn line_len(&self, index: usize) -> usize { self.line_at(index).len() }

    /// # Panics
    ///
    /// If `line` or `col` is out of range.
    #[must_use]
    #[track_caller]
    pub fn byte_at(&self, line: usize, col: usize) -> u8 { self.line_at(line).byte_at(col) }

    /// Insert an empty line (recycled when possible) so that it becomes line `index`.
    ///
    /// # Panics
    ///
    /// If `index > line_count()`.
    #[track_caller]
    pub fn insert_line_at(&mut self, index: usize) {
        let line = self.line_pool.acquire();
        self.lines.insert_at(index, line);
    }

    /// Remove line `index`, retiring it to the pool.
    ///
    /// # Panics
    ///
    /// If `index >= line_count()`.
    #[track_caller]
    pub fn remove_line_at(&mut self, index: usize) {
        let line = self.detach_line_at(index);
        self.line_pool.release(line);
    }

    /// Take line `index` out of the row order. It is the caller's to reattach or
    /// [`Self::retire_line`].
    ///
    /// # Panics
    ///
    /// If `index >= line_count()`.
    #[track_caller]
    pub fn detach_line_at(&mut self, index: usize) -> Line { self.lines.remove_at(index) }

    /// # Panics
    ///
    /// If `index > line_count()`.
    #[track_caller]
    pub fn attach_line_at(&mut self, index: usize, line: Line) {
        self.lines.insert_at(index, line);
    }

    /// Hand out an empty line from the pool without attaching it.
    pub fn acquire_line(&mut self) -> Line { self.line_pool.acquire() }

    pub fn retire_line(&mut self, line: Line) { self.line_pool.release(line); }

    pub fn lines(&self) -> impl DoubleEndedIterator<Item = &Line> + '_ { self.lines.iter() }

    /// Lines joined with `'\n'`.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut acc = Vec::new();
        for (index, line) in self.lines().enumerate() {
            if index > 0 {
                acc.push(b'\n');
            }
            acc.extend(line.iter());
        }
        acc
    }

    /// Lines sitting in the pool.
    #[must_use]
    pub fn recycled_line_count(&self) -> usize { self.line_pool.len() }
}
