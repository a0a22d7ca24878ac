// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use std::error::Error;

pub type ClipboardResult<T> = Result<T, Box<dyn Error + Send + Sync + 'static>>;

/// Abstraction over the system clipboard, supplied by the host app. The engine only
/// moves plain bytes in and out, with `'\n'` between lines.
pub trait ClipboardService {
    /// # Errors
    ///
    /// If the clipboard can't be written to.
    fn try_to_put_content_into_clipboard(&mut self, content: Vec<u8>)
    -> ClipboardResult<()>;

    /// # Errors
    ///
    /// If the clipboard can't be read from.
    fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<Vec<u8>>;
}

/// In memory clipboard, for tests and headless drivers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestClipboard {
    pub content: Vec<u8>,
}

impl ClipboardService for TestClipboard {
    fn try_to_put_content_into_clipboard(
        &mut self,
        content: Vec<u8>,
    ) -> ClipboardResult<()> {
        self.content = content;
        Ok(())
    }

    fn try_to_get_content_from_clipboard(&mut self) -> ClipboardResult<Vec<u8>> {
        Ok(self.content.clone())
    }
}
