// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use quill::{CaretDirection, Cursor, EditorBuffer, EditorEngine, EditorEngineConfig,
            EditorEvent, SelectionAction, TestClipboard, TextFile, Viewport,
            apply_editor_event, assert_eq2, cursor, editor_engine::content_mut};
use rand::{SeedableRng, rngs::StdRng};
use test_case::test_case;

pub mod fixtures {
    use rand::{Rng, rngs::StdRng};

    use super::*;

    pub fn new_buffer(text: &str) -> EditorBuffer {
        EditorBuffer::new(TextFile::from_bytes(text.as_bytes()))
    }

    pub fn new_engine() -> EditorEngine {
        EditorEngine::new(
            EditorEngineConfig::default(),
            Viewport {
                visible_line_count: 6,
                visible_col_count: 12,
            },
        )
    }

    pub fn content(buffer: &EditorBuffer) -> String {
        String::from_utf8_lossy(&buffer.file.to_bytes()).into_owned()
    }

    /// A random event. Edits are weighted above movement so the scripts build up text.
    pub fn random_event(rng: &mut StdRng) -> EditorEvent {
        const TYPED: &[u8] = b"abc xyz-\n";
        match rng.random_range(0..20) {
            0..=6 => EditorEvent::InsertChar(TYPED[rng.random_range(0..TYPED.len())]),
            7 | 8 => EditorEvent::Backspace,
            9 => EditorEvent::Delete,
            10 => EditorEvent::InsertString("pq\nr".into()),
            11 => EditorEvent::MoveCaret(CaretDirection::Left),
            12 => EditorEvent::MoveCaret(CaretDirection::Up),
            13 => EditorEvent::MoveCaret(CaretDirection::Down),
            14 => EditorEvent::TokenLeft,
            15 => EditorEvent::Select(SelectionAction::OneCharLeft),
            16 => EditorEvent::Select(SelectionAction::OneLineUp),
            17 => EditorEvent::Cut,
            18 => EditorEvent::Paste,
            _ => EditorEvent::Home,
        }
    }

    pub fn apply(
        buffer: &mut EditorBuffer,
        engine: &mut EditorEngine,
        clipboard: &mut TestClipboard,
        event: EditorEvent,
    ) {
        apply_editor_event(buffer, engine, event, clipboard).unwrap();
    }
}

use fixtures::*;

#[test_case(1; "seed 1")]
#[test_case(42; "seed 42")]
#[test_case(0xdead_beef; "seed deadbeef")]
#[test_case(7_777_777; "seed 7777777")]
fn test_undo_all_then_redo_all_is_identity(seed: u64) {
    let initial = "first line\nsecond, line\n\nlast";
    let mut buffer = new_buffer(initial);
    let mut engine = new_engine();
    let mut clipboard = TestClipboard::default();
    let mut rng = StdRng::seed_from_u64(seed);

    for _ in 0..120 {
        let event = random_event(&mut rng);
        apply(&mut buffer, &mut engine, &mut clipboard, event);
    }

    let after_edits: (String, Cursor) = (content(&buffer), buffer.cursor);
    let step_count = buffer.file.history.undo_stack.len();

    for _ in 0..step_count {
        apply(&mut buffer, &mut engine, &mut clipboard, EditorEvent::Undo);
    }
    assert_eq2!(content(&buffer), initial);
    assert!(!buffer.file.history.can_undo());

    for _ in 0..step_count {
        apply(&mut buffer, &mut engine, &mut clipboard, EditorEvent::Redo);
    }
    assert_eq2!((content(&buffer), buffer.cursor), after_edits);
    assert!(!buffer.file.history.can_redo());
}

#[test]
fn test_typing_two_words_is_two_undo_steps() {
    let mut buffer = new_buffer("");
    let mut engine = new_engine();
    let mut clipboard = TestClipboard::default();

    for byte in b"ab cd" {
        apply(&mut buffer, &mut engine, &mut clipboard, EditorEvent::InsertChar(*byte));
    }
    assert_eq2!(buffer.file.history.undo_stack.len(), 2);

    apply(&mut buffer, &mut engine, &mut clipboard, EditorEvent::Undo);
    assert_eq2!(content(&buffer), "ab");
    apply(&mut buffer, &mut engine, &mut clipboard, EditorEvent::Undo);
    assert_eq2!(content(&buffer), "");
}

#[test]
fn test_caret_move_there_and_back_breaks_the_chain() {
    let mut buffer = new_buffer("");
    let mut engine = new_engine();
    let mut clipboard = TestClipboard::default();

    for event in [
        EditorEvent::InsertChar(b'a'),
        EditorEvent::InsertChar(b'b'),
        EditorEvent::MoveCaret(CaretDirection::Left),
        EditorEvent::MoveCaret(CaretDirection::Right),
        EditorEvent::InsertChar(b'c'),
    ] {
        apply(&mut buffer, &mut engine, &mut clipboard, event);
    }
    assert_eq2!(content(&buffer), "abc");
    assert_eq2!(buffer.file.history.undo_stack.len(), 2);

    apply(&mut buffer, &mut engine, &mut clipboard, EditorEvent::Undo);
    assert_eq2!(content(&buffer), "ab");
}

#[test]
fn test_cursor_set_by_host_breaks_the_chain() {
    let mut buffer = new_buffer("");
    let mut engine = new_engine();
    let mut clipboard = TestClipboard::default();

    for byte in b"ab" {
        apply(&mut buffer, &mut engine, &mut clipboard, EditorEvent::InsertChar(*byte));
    }
    buffer.cursor = cursor(0, 0);
    apply(&mut buffer, &mut engine, &mut clipboard, EditorEvent::InsertChar(b'c'));
    assert_eq2!(content(&buffer), "cab");
    assert_eq2!(buffer.file.history.undo_stack.len(), 2);

    apply(&mut buffer, &mut engine, &mut clipboard, EditorEvent::Undo);
    assert_eq2!(content(&buffer), "ab");
    assert_eq2!(buffer.cursor, cursor(0, 0));
}

#[test]
fn test_newline_is_its_own_step_between_words() {
    // Each newline is its own step, but the words on either side stay whole.
    let mut buffer = new_buffer("");
    let mut engine = new_engine();
    let mut clipboard = TestClipboard::default();

    for byte in b"ab\ncd" {
        apply(&mut buffer, &mut engine, &mut clipboard, EditorEvent::InsertChar(*byte));
    }
    let texts: Vec<Vec<u8>> = buffer
        .file
        .history
        .undo_stack
        .iter()
        .map(|it| it.text.to_vec())
        .collect();
    assert_eq2!(texts, vec![b"ab".to_vec(), b"\n".to_vec(), b"cd".to_vec()]);
}

#[test]
fn test_sticky_column_both_directions() {
    let mut buffer = new_buffer("hello world\nab\nsomething long");
    let mut engine = new_engine();
    let mut clipboard = TestClipboard::default();

    buffer.cursor = cursor(0, 5);
    apply(&mut buffer, &mut engine, &mut clipboard, EditorEvent::MoveCaret(CaretDirection::Down));
    assert_eq2!(buffer.cursor.pos(), (1, 2));
    apply(&mut buffer, &mut engine, &mut clipboard, EditorEvent::MoveCaret(CaretDirection::Up));
    assert_eq2!(buffer.cursor.pos(), (0, 5));

    buffer.cursor = cursor(2, 5);
    apply(&mut buffer, &mut engine, &mut clipboard, EditorEvent::MoveCaret(CaretDirection::Up));
    assert_eq2!(buffer.cursor.pos(), (1, 2));
    apply(&mut buffer, &mut engine, &mut clipboard, EditorEvent::MoveCaret(CaretDirection::Down));
    assert_eq2!(buffer.cursor.pos(), (2, 5));
}

#[test]
fn test_raw_split_join_and_remove_range() {
    let mut buffer = new_buffer("abc");
    content_mut::split_line(&mut buffer, 0, 1);
    assert_eq2!(content(&buffer), "a\nbc");
    assert_eq2!(buffer.cursor, cursor(1, 0));

    content_mut::join_lines(&mut buffer, 0, 1, 1);
    assert_eq2!(content(&buffer), "abc");
    assert_eq2!(buffer.cursor, cursor(0, 1));

    let mut buffer = new_buffer("abc\ndef");
    content_mut::remove_range(&mut buffer, cursor(0, 1), cursor(1, 1));
    assert_eq2!(content(&buffer), "aef");
    assert_eq2!(buffer.cursor, cursor(0, 1));
}

#[test_case(b""; "empty")]
#[test_case(b"\n"; "lone newline")]
#[test_case(b"one line"; "one line")]
#[test_case(b"a\n\nb\n"; "blank and trailing lines")]
#[test_case(b"tabs\tand \xff bytes\r\n"; "raw bytes")]
fn test_load_round_trip(bytes: &[u8]) {
    assert_eq2!(TextFile::from_bytes(bytes).to_bytes(), bytes.to_vec());
}

#[test]
fn test_switch_file_restores_each_cursor() {
    let mut buffer = new_buffer("first\nfile");
    let engine = new_engine();
    buffer.cursor = cursor(1, 2);

    let first = buffer.switch_file(&engine, TextFile::from_bytes(b"second file"));
    assert_eq2!(first.saved_cursor, cursor(1, 2));
    assert_eq2!(buffer.cursor, cursor(0, 0));

    buffer.cursor = cursor(0, 6);
    let second = buffer.switch_file(&engine, first);
    assert_eq2!(second.saved_cursor, cursor(0, 6));
    assert_eq2!(buffer.cursor, cursor(1, 2));
    assert_eq2!(content(&buffer), "first\nfile");
}

#[test]
fn test_selection_survives_scrolling_down() {
    let text = (0..20).map(|it| format!("line {it}")).collect::<Vec<_>>().join("\n");
    let mut buffer = new_buffer(&text);
    let mut engine = new_engine();
    let mut clipboard = TestClipboard::default();

    buffer.cursor = cursor(2, 1);
    for _ in 0..10 {
        apply(
            &mut buffer,
            &mut engine,
            &mut clipboard,
            EditorEvent::Select(SelectionAction::OneLineDown),
        );
    }

    assert_eq2!(buffer.cursor.pos(), (12, 1));
    assert!(buffer.scr_ofs.line > 0);
    assert!(buffer.selection.active);
    assert_eq2!(buffer.selection.anchor, cursor(2, 1));
    assert!(buffer.selection.contains(buffer.cursor, 7, 0));
    assert!(!buffer.selection.contains(buffer.cursor, 12, 1));
}
