// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod caret_mut;
pub mod content_mut;
pub mod engine_public_api;
pub mod engine_struct;
pub mod scroll_editor_content;
pub mod select_mode;

// Re-export.
pub use engine_public_api::*;
pub use engine_struct::*;
pub use scroll_editor_content::should_scroll;
pub use select_mode::*;
