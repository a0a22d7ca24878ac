// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod caret;
pub mod clipboard;
pub mod editor_engine;
pub mod editor_event;
pub mod global_constants;
pub mod history;
pub mod text_model;

#[cfg(test)]
pub mod editor_test_fixtures;

// Re-export.
pub use caret::*;
pub use clipboard::*;
pub use editor_engine::*;
pub use editor_event::*;
pub use global_constants::*;
pub use history::*;
pub use text_model::*;
