// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod cursor;
pub mod selection;

// Re-export.
pub use cursor::*;
pub use selection::*;
