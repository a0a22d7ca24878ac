// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Capacity of a [`crate::GapBuffer`] on its first allocation. Growth doubles from here.
pub const DEFAULT_GAP_BUFFER_CAPACITY: usize = 8;

/// Depth of each of the undo and redo stacks. Older commands are evicted.
pub const MAX_UNDO_REDO_SIZE: usize = 256;

/// Fraction of the visible lines that page up / page down move by.
pub const DEFAULT_PAGE_SCROLL_FACTOR: f64 = 0.7;

/// Bytes that end a token for word-wise caret jumps.
pub const SEPARATORS: &[u8] = b",;.-_>() /\\";

/// Used when no [`crate::Viewport`] has been supplied yet.
pub const DEFAULT_VIEWPORT_LINE_COUNT: usize = 24;
pub const DEFAULT_VIEWPORT_COL_COUNT: usize = 80;

/// Inline capacity of a recorded command's text before it spills to the heap. Most
/// commands hold a single byte or a short typed word.
pub const DEFAULT_COMMAND_TEXT_SIZE: usize = 16;

pub const DEBUG_QUILL_HISTORY: bool = false;
pub const DEBUG_QUILL_LINE_POOL: bool = false;
pub const DEBUG_QUILL_CLIPBOARD: bool = false;
