// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Logging setup. The engine itself only emits [`tracing`] events, gated by the
//! `DEBUG_QUILL_*` flags in [`crate::global_constants`]. A host app (or the
//! `quill_replay` binary) decides where they go by installing a subscriber with
//! [`try_initialize_logging_global`].

// Attach sources.
pub mod rolling_file_appender_impl;
pub mod tracing_config;
pub mod tracing_init;

// Re-export.
pub use tracing_config::*;
pub use tracing_init::*;
