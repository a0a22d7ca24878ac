// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{Cursor, DEFAULT_PAGE_SCROLL_FACTOR, DEFAULT_VIEWPORT_COL_COUNT,
            DEFAULT_VIEWPORT_LINE_COUNT, Selection, SelectionRange, TextFile,
            scroll_editor_content};

/// Everything that changes while editing a single document: the text (with its
/// history), the caret, the selection anchor, and how far the view is scrolled.
///
/// The file always has at least one line once it is in a buffer, so the caret always
/// has somewhere to be.
#[derive(Debug, Clone)]
pub struct EditorBuffer {
    pub file: TextFile,
    pub cursor: Cursor,
    pub selection: Selection,
    pub scr_ofs: ScrOfs,
}

/// First visible line and column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrOfs {
    pub line: usize,
    pub col: usize,
}

/// Size of the visible window in character cells, as reported by the presentation
/// layer. Only paging and scrolling look at it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub visible_line_count: usize,
    pub visible_col_count: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            visible_line_count: DEFAULT_VIEWPORT_LINE_COUNT,
            visible_col_count: DEFAULT_VIEWPORT_COL_COUNT,
        }
    }
}

/// Holds data related to rendering in between render calls. This is not stored in the
/// [`EditorBuffer`] struct, so one engine can drive any number of buffers.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EditorEngine {
    pub config_options: EditorEngineConfig,
    pub viewport: Viewport,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorEngineConfig {
    pub edit_mode: EditMode,
    /// Fraction of [`Viewport::visible_line_count`] that a page move covers.
    pub page_scroll_factor: f64,
}

impl Default for EditorEngineConfig {
    fn default() -> Self {
        Self {
            edit_mode: EditMode::ReadWrite,
            page_scroll_factor: DEFAULT_PAGE_SCROLL_FACTOR,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EditMode {
    ReadOnly,
    #[default]
    ReadWrite,
}

impl EditorEngine {
    #[must_use]
    pub fn new(config_options: EditorEngineConfig, viewport: Viewport) -> Self {
        Self {
            config_options,
            viewport,
        }
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport { self.viewport }

    #[must_use]
    pub fn is_read_only(&self) -> bool {
        matches!(self.config_options.edit_mode, EditMode::ReadOnly)
    }
}

impl Default for EditorBuffer {
    fn default() -> Self { Self::new(TextFile::default()) }
}

impl EditorBuffer {
    /// The caret starts at the file's saved cursor.
    #[must_use]
    pub fn new(file: TextFile) -> Self {
        let mut it = Self {
            cursor: file.saved_cursor,
            file,
            selection: Selection::default(),
            scr_ofs: ScrOfs::default(),
        };
        it.ensure_first_line();
        it.clamp_cursor();
        it
    }

    /// Make `file` the active document, and return the one it replaces. The caret is
    /// saved into the outgoing file and restored from the incoming one.
    pub fn switch_file(&mut self, engine: &EditorEngine, file: TextFile) -> TextFile {
        self.file.saved_cursor = self.cursor;
        let outgoing = std::mem::replace(&mut self.file, file);

        self.ensure_first_line();
        self.cursor = self.file.saved_cursor;
        self.clamp_cursor();
        self.selection.clear();
        self.scr_ofs = ScrOfs::default();
        scroll_editor_content::validate_scroll(self, engine);

        outgoing
    }

    #[must_use]
    pub fn line_count(&self) -> usize { self.file.line_count() }

    #[must_use]
    pub fn last_line_index(&self) -> usize { self.line_count().saturating_sub(1) }

    /// Length of the line the caret is on.
    #[must_use]
    pub fn current_line_len(&self) -> usize { self.file.line_len(self.cursor.line) }

    /// The active selection in document order, if it spans anything.
    #[must_use]
    pub fn get_selection_range(&self) -> Option<SelectionRange> {
        self.selection.range(self.cursor)
    }

    /// Caret just past the last byte of the document.
    #[must_use]
    pub fn end_of_document(&self) -> Cursor {
        let line = self.last_line_index();
        crate::cursor(line, self.file.line_len(line))
    }

    fn ensure_first_line(&mut self) {
        if self.file.is_empty() {
            self.file.insert_line_at(0);
        }
    }

    fn clamp_cursor(&mut self) {
        self.cursor.line = self.cursor.line.min(self.last_line_index());
        self.cursor.col = self.cursor.col.min(self.current_line_len());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, cursor};

    #[test]
    fn test_new_buffer_always_has_a_line() {
        let buffer = EditorBuffer::new(TextFile::from_bytes(b""));
        assert_eq2!(buffer.line_count(), 1);
        assert_eq2!(buffer.cursor, cursor(0, 0));
    }

    #[test]
    fn test_new_buffer_clamps_saved_cursor() {
        let mut file = TextFile::from_bytes(b"ab\ncd");
        file.saved_cursor = cursor(5, 5);
        let buffer = EditorBuffer::new(file);
        assert_eq2!(buffer.cursor.pos(), (1, 2));
    }

    #[test]
    fn test_switch_file_saves_and_restores_cursor() {
        let engine = EditorEngine::default();
        let mut buffer = EditorBuffer::new(TextFile::from_bytes(b"first\nfile"));
        buffer.cursor = cursor(1, 3);

        let mut second = TextFile::from_bytes(b"second");
        second.saved_cursor = cursor(0, 4);
        let first = buffer.switch_file(&engine, second);
        assert_eq2!(first.saved_cursor, cursor(1, 3));
        assert_eq2!(buffer.cursor, cursor(0, 4));

        buffer.cursor = cursor(0, 1);
        let second = buffer.switch_file(&engine, first);
        assert_eq2!(second.saved_cursor, cursor(0, 1));
        assert_eq2!(buffer.cursor, cursor(1, 3));
        assert_eq2!(buffer.file.to_bytes(), b"first\nfile".to_vec());
    }

    #[test]
    fn test_default_config() {
        let engine = EditorEngine::default();
        assert!(!engine.is_read_only());
        assert_eq2!(engine.config_options.page_scroll_factor, 0.7);
        assert_eq2!(engine.viewport(), Viewport::default());
    }
}
