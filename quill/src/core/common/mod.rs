// Copyright (c) 2022-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod common_result_and_error;
pub mod ring_buffer;
pub mod ring_buffer_heap;

// Re-export.
pub use common_result_and_error::*;
pub use ring_buffer::*;
pub use ring_buffer_heap::*;
