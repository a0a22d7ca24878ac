// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{EditorBuffer, EditorEngine, EditorEngineConfig, TextFile, Viewport,
            assert_eq2};

/// A buffer holding `lines`, caret at the origin.
pub fn make_buffer(lines: &[&str]) -> EditorBuffer {
    EditorBuffer::new(TextFile::from_bytes(lines.join("\n").as_bytes()))
}

/// An engine with a small 10 x 20 viewport, so scrolling is easy to trigger.
pub fn make_engine() -> EditorEngine {
    EditorEngine::new(
        EditorEngineConfig::default(),
        Viewport {
            visible_line_count: 10,
            visible_col_count: 20,
        },
    )
}

pub fn buffer_lines(buffer: &EditorBuffer) -> Vec<String> {
    buffer.file.lines().map(ToString::to_string).collect()
}

#[track_caller]
pub fn assert_buffer_content(buffer: &EditorBuffer, expected: &[&str]) {
    assert_eq2!(buffer_lines(buffer), expected);
}
