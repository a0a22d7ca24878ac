// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Raw text mutations. Nothing here records history or touches the selection, that is
//! [`super::engine_public_api`]'s job, and undo / redo replay through these directly.
//!
//! Every function leaves the caret where the edit ends. Out of range positions are
//! caller bugs and panic.

use crate::{Cursor, EditorBuffer, TextFile, cursor, ordered};

/// Insert `byte` at the caret and step past it. `byte` must not be `'\n'`, see
/// [`split_line`].
pub fn insert_byte(buffer: &mut EditorBuffer, byte: u8) {
    let Cursor { line, col, .. } = buffer.cursor;
    buffer.file.line_at_mut(line).insert_at(col, byte);
    buffer.cursor.set_col(col + 1);
}

/// A new line is inserted at `line` holding the bytes before `col`. The original line,
/// now at `line + 1`, keeps the rest. The caret goes to the start of the second half.
///
/// ```text
/// ["abc"], split_line(0, 1) -> ["a", "bc"], caret (1, 0)
/// ```
pub fn split_line(buffer: &mut EditorBuffer, line: usize, col: usize) {
    let mut prefix = buffer.file.acquire_line();
    buffer.file.line_at(line).copy_into(&mut prefix, col);
    buffer.file.line_at_mut(line).remove_from_front_through(col);
    buffer.file.attach_line_at(line, prefix);
    buffer.cursor = cursor(line + 1, 0);
}

/// Move all of `line_b` into `line_a` at `col`, then retire `line_b`. The caret goes to
/// the seam.
///
/// ```text
/// ["a", "bc"], join_lines(0, 1, 1) -> ["abc"], caret (0, 1)
/// ```
///
/// # Panics
///
/// If `line_b` isn't the line right after `line_a`.
pub fn join_lines(buffer: &mut EditorBuffer, line_a: usize, line_b: usize, col: usize) {
    assert!(
        line_b == line_a + 1,
        "Can only join adjacent lines, got {line_a} and {line_b}"
    );
    let source = buffer.file.detach_line_at(line_b);
    source.copy_into_at(buffer.file.line_at_mut(line_a), source.len(), col);
    buffer.file.retire_line(source);
    buffer.cursor = cursor(line_a, col);
}

/// Backspace. At the start of a line this joins it onto the previous one.
pub fn remove_left(buffer: &mut EditorBuffer) {
    let Cursor { line, col, .. } = buffer.cursor;
    if col == 0 {
        if line > 0 {
            let prev_len = buffer.file.line_len(line - 1);
            join_lines(buffer, line - 1, line, prev_len);
        }
    } else {
        buffer.file.line_at_mut(line).remove_at(col - 1);
        buffer.cursor.set_col(col - 1);
    }
}

/// Forward delete. At the end of a line this pulls the next line up.
pub fn remove_right(buffer: &mut EditorBuffer) {
    let Cursor { line, col, .. } = buffer.cursor;
    if col == buffer.file.line_len(line) {
        if line + 1 < buffer.line_count() {
            join_lines(buffer, line, line + 1, col);
        }
    } else {
        buffer.file.line_at_mut(line).remove_at(col);
        buffer.cursor.set_col(col);
    }
}

/// Remove `[start, end)`, in either order. Lines strictly between the two ends go back
/// to the pool, and what's left of the last line is appended to the first. The caret
/// goes to the start.
///
/// ```text
/// ["abc", "def"], remove_range((0, 1), (1, 1)) -> ["aef"], caret (0, 1)
/// ```
pub fn remove_range(buffer: &mut EditorBuffer, start: Cursor, end: Cursor) {
    let (start, end) = ordered(start, end);

    if start.line == end.line {
        buffer
            .file
            .line_at_mut(start.line)
            .remove_range(start.col, end.col);
    } else {
        buffer.file.line_at_mut(start.line).truncate(start.col);

        let mut last = buffer.file.detach_line_at(end.line);
        last.remove_from_front_through(end.col);
        last.copy_into(buffer.file.line_at_mut(start.line), last.len());
        buffer.file.retire_line(last);

        for _ in start.line + 1..end.line {
            buffer.file.remove_line_at(start.line + 1);
        }
    }

    buffer.cursor = cursor(start.line, start.col);
}

/// Type `text` starting at `start`. `'\n'` splits the line. Returns where the caret
/// ends up, which is also left in the buffer.
pub fn insert_range(buffer: &mut EditorBuffer, text: &[u8], start: Cursor) -> Cursor {
    buffer.cursor = cursor(start.line, start.col);
    for byte in text {
        if *byte == b'\n' {
            split_line(buffer, buffer.cursor.line, buffer.cursor.col);
        } else {
            insert_byte(buffer, *byte);
        }
    }
    buffer.cursor
}

/// The bytes in `[start, end)` (in either order), lines joined with `'\n'`. Feeding
/// the result to [`insert_range`] at `start` recreates the range.
#[must_use]
pub fn get_range(file: &TextFile, start: Cursor, end: Cursor) -> Vec<u8> {
    let (start, end) = ordered(start, end);
    let mut acc = Vec::new();
    for line_index in start.line..=end.line {
        let line = file.line_at(line_index);
        let from = if line_index == start.line { start.col } else { 0 };
        let to = if line_index == end.line { end.col } else { line.len() };
        acc.extend(line.iter().skip(from).take(to.saturating_sub(from)));
        if line_index != end.line {
            acc.push(b'\n');
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2,
                editor_test_fixtures::{assert_buffer_content, make_buffer}};

    #[test]
    fn test_split_line() {
        let mut buffer = make_buffer(&["abc"]);
        split_line(&mut buffer, 0, 1);
        assert_buffer_content(&buffer, &["a", "bc"]);
        assert_eq2!(buffer.cursor, cursor(1, 0));
    }

    #[test]
    fn test_split_line_at_edges() {
        let mut buffer = make_buffer(&["abc"]);
        split_line(&mut buffer, 0, 3);
        assert_buffer_content(&buffer, &["abc", ""]);
        split_line(&mut buffer, 0, 0);
        assert_buffer_content(&buffer, &["", "abc", ""]);
        assert_eq2!(buffer.cursor, cursor(1, 0));
    }

    #[test]
    fn test_join_lines() {
        let mut buffer = make_buffer(&["a", "bc"]);
        join_lines(&mut buffer, 0, 1, 1);
        assert_buffer_content(&buffer, &["abc"]);
        assert_eq2!(buffer.cursor, cursor(0, 1));
        assert_eq2!(buffer.file.recycled_line_count(), 1);
    }

    #[test]
    fn test_split_then_join_recycles_lines() {
        let mut buffer = make_buffer(&["hello world"]);
        for _ in 0..5 {
            split_line(&mut buffer, 0, 5);
            join_lines(&mut buffer, 0, 1, 5);
        }
        assert_buffer_content(&buffer, &["hello world"]);
        // One line is in circulation between the file and the pool.
        assert_eq2!(buffer.file.recycled_line_count(), 1);
    }

    #[test]
    fn test_remove_left_and_right() {
        let mut buffer = make_buffer(&["ab", "cd"]);
        buffer.cursor = cursor(1, 0);
        remove_left(&mut buffer);
        assert_buffer_content(&buffer, &["abcd"]);
        assert_eq2!(buffer.cursor, cursor(0, 2));

        remove_left(&mut buffer);
        assert_buffer_content(&buffer, &["acd"]);
        assert_eq2!(buffer.cursor, cursor(0, 1));

        remove_right(&mut buffer);
        assert_buffer_content(&buffer, &["ad"]);
        assert_eq2!(buffer.cursor, cursor(0, 1));
    }

    #[test]
    fn test_remove_at_document_edges_is_a_no_op() {
        let mut buffer = make_buffer(&["ab", "cd"]);
        remove_left(&mut buffer);
        buffer.cursor = cursor(1, 2);
        remove_right(&mut buffer);
        assert_buffer_content(&buffer, &["ab", "cd"]);
    }

    #[test]
    fn test_remove_right_at_end_of_line_joins() {
        let mut buffer = make_buffer(&["ab", "cd"]);
        buffer.cursor = cursor(0, 2);
        remove_right(&mut buffer);
        assert_buffer_content(&buffer, &["abcd"]);
        assert_eq2!(buffer.cursor, cursor(0, 2));
    }

    #[test]
    fn test_remove_range_multi_line() {
        let mut buffer = make_buffer(&["abc", "def"]);
        remove_range(&mut buffer, cursor(0, 1), cursor(1, 1));
        assert_buffer_content(&buffer, &["aef"]);
        assert_eq2!(buffer.cursor, cursor(0, 1));
    }

    #[test]
    fn test_remove_range_drops_middle_lines_and_normalizes() {
        let mut buffer = make_buffer(&["0123", "middle", "more", "4567", "tail"]);
        remove_range(&mut buffer, cursor(3, 2), cursor(0, 2));
        assert_buffer_content(&buffer, &["0167", "tail"]);
        assert_eq2!(buffer.cursor, cursor(0, 2));
    }

    #[test]
    fn test_remove_range_single_line() {
        let mut buffer = make_buffer(&["hello world"]);
        remove_range(&mut buffer, cursor(0, 5), cursor(0, 11));
        assert_buffer_content(&buffer, &["hello"]);
    }

    #[test]
    fn test_get_range_and_insert_range_are_inverses() {
        let buffer = make_buffer(&["abc", "def", "ghi"]);
        let text = get_range(&buffer.file, cursor(0, 1), cursor(2, 2));
        assert_eq2!(text, b"bc\ndef\ngh".to_vec());

        let mut other = make_buffer(&["ai"]);
        let end = insert_range(&mut other, &text, cursor(0, 1));
        assert_buffer_content(&other, &["abc", "def", "ghi"]);
        assert_eq2!(end, cursor(2, 2));
    }

    #[test]
    fn test_get_range_whole_lines() {
        let buffer = make_buffer(&["abc", "", "d"]);
        assert_eq2!(
            get_range(&buffer.file, cursor(0, 0), cursor(2, 1)),
            b"abc\n\nd".to_vec()
        );
        assert_eq2!(get_range(&buffer.file, cursor(1, 0), cursor(1, 0)), Vec::<u8>::new());
    }
}
