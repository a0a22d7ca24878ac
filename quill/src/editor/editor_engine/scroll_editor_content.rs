// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Keep the caret inside the visible window. The scroll offset only changes when the
//! caret leaves the window, and then by the smallest amount that brings it back.

use crate::{Cursor, EditorBuffer, EditorEngine, ScrOfs, Viewport};

/// Pure scroll decision. Returns the new offset and whether it differs from
/// `scr_ofs`. Deciding what to repaint is up to the caller.
///
/// The caret may sit one past the last byte of a line, so columns are checked the same
/// way as lines.
#[must_use]
pub fn should_scroll(cursor: Cursor, scr_ofs: ScrOfs, viewport: Viewport) -> (ScrOfs, bool) {
    let new_scr_ofs = ScrOfs {
        line: scroll_axis(cursor.line, scr_ofs.line, viewport.visible_line_count),
        col: scroll_axis(cursor.col, scr_ofs.col, viewport.visible_col_count),
    };
    (new_scr_ofs, new_scr_ofs != scr_ofs)
}

fn scroll_axis(position: usize, offset: usize, visible: usize) -> usize {
    let visible = visible.max(1);
    if position < offset {
        position
    } else if position >= offset + visible {
        position + 1 - visible
    } else {
        offset
    }
}

/// Run [`should_scroll`] for the buffer's caret and store the result. Returns whether
/// the view scrolled.
pub fn validate_scroll(buffer: &mut EditorBuffer, engine: &EditorEngine) -> bool {
    let (scr_ofs, scrolled) = should_scroll(buffer.cursor, buffer.scr_ofs, engine.viewport);
    buffer.scr_ofs = scr_ofs;
    scrolled
}

/// How many lines page up / page down move: `max(1, floor(visible * factor))`.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn page_step(engine: &EditorEngine) -> usize {
    let visible = engine.viewport.visible_line_count as f64;
    let step = (visible * engine.config_options.page_scroll_factor).floor();
    // `max` also maps NaN to 1.
    step.max(1.0) as usize
}
