// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

// Attach sources.
pub mod command_stack;
pub mod file_command;
pub mod history_impl;

// Re-export.
pub use command_stack::*;
pub use file_command::*;
pub use history_impl::*;
