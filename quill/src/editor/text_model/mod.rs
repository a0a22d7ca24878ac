// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod line;
pub mod line_pool;
pub mod text_file;

// Re-export.
pub use line::*;
pub use line_pool::*;
pub use text_file::*;
