// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Whether a caret movement extends the selection (shift held) or drops it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectMode {
    Enabled,
    Disabled,
}
