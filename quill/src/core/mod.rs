// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach.
pub mod common;
pub mod decl_macros;
pub mod gap_buffer;
pub mod log;
#[cfg(test)]
pub mod test_fixtures;

// Re-export.
pub use common::*;
pub use gap_buffer::*;
pub use log::*;
