// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Result and error types shared by the whole crate.
//!
//! - [`CommonResult`] is the catch-all return type for fallible functions that talk to
//!   the outside world (loading files, installing the logger). It is a
//!   [`miette::Result`], so any error that implements [`std::error::Error`] can be
//!   propagated into it with `?` (or `.into_diagnostic()` for foreign errors).
//! - [`EditorError`] and [`GapBufferError`] are the typed errors that the engine itself
//!   returns. They carry [`miette::Diagnostic`] codes and help text.

use miette::Diagnostic;

use crate::Cursor;

/// Type alias to make it easy to work with [`miette::Result`] and [`miette::Report`].
///
/// # Example
///
/// ```
/// use miette::IntoDiagnostic;
/// use quill::{CommonResult, TextFile};
///
/// fn line_count(bytes: &[u8]) -> CommonResult<usize> {
///     let text = std::str::from_utf8(bytes).into_diagnostic()?;
///     Ok(TextFile::from_bytes(text.as_bytes()).line_count())
/// }
///
/// assert!(line_count(b"\xff").is_err());
/// assert_eq!(line_count(b"a\nb").unwrap(), 2);
/// ```
pub type CommonResult<T> = miette::Result<T>;

/// Errors from the gap buffer primitive. Callers inside the engine keep indices in
/// bounds, so these only surface through the `try_*` API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum GapBufferError {
    #[error("Gap position {index} is out of range for a buffer of length {len}")]
    #[diagnostic(
        code(quill::gap_buffer::out_of_range),
        help("The gap can be moved to any index in 0..=len")
    )]
    OutOfRange { index: usize, len: usize },
}

/// Errors returned by the public editing API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Diagnostic)]
pub enum EditorError {
    /// Replaying a recorded command did not land the caret where the command says it
    /// should. The history no longer describes the buffer.
    #[error(
        "Undo history is out of sync with the buffer: replay ended at {actual:?}, \
         expected {expected:?}"
    )]
    #[diagnostic(
        code(quill::history::corrupted),
        help("A command was recorded with the wrong range, or the buffer was edited \
              without recording a command")
    )]
    HistoryCorrupted { expected: Cursor, actual: Cursor },

    /// The engine is configured as read only.
    #[error("The editor is read only")]
    #[diagnostic(
        code(quill::editor::read_only),
        help("Set `EditorEngineConfig::edit_mode` to `EditMode::ReadWrite`")
    )]
    ReadOnly,
}
