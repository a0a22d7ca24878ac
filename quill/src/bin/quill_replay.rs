// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Headless driver for the engine. Loads a file, types some text at a position one
//! keystroke at a time, optionally undoes a number of steps, and prints the result to
//! stdout.
//!
//! ```text
//! quill_replay notes.txt --line 2 --col 4 --text 'hello world' --undo 1
//! ```

use std::{io::Write as _, path::PathBuf};

use clap::Parser;
use miette::IntoDiagnostic as _;
use quill::{CommonResult, EditorBuffer, EditorEngine, EditorEvent, TestClipboard,
            TextFile, TracingConfig, WriterConfig, apply_editor_event, cursor, throws,
            try_initialize_logging_global};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    arg_required_else_help = true // A file is required, if none passed, show help.
)]
struct Cli {
    /// Path to the file to load
    path: PathBuf,
    #[arg(long = "text", short = 't', default_value = "", help = "Text to type, one byte per keystroke")]
    text: String,
    #[arg(long = "line", short = 'l', default_value_t = 0, help = "Line to type at")]
    line: usize,
    #[arg(long = "col", short = 'c', default_value_t = 0, help = "Column to type at")]
    col: usize,
    #[arg(long = "undo", short = 'u', default_value_t = 0, help = "Undo steps to replay")]
    undo_count: usize,
    #[arg(long = "log-file", help = "Write debug logs to this file")]
    log_file: Option<String>,
}

fn main() -> CommonResult<()> {
    throws!({
        let cli = Cli::parse();

        let tracing_config = match cli.log_file.clone() {
            Some(path) => TracingConfig::new_file(Some(path)),
            None => TracingConfig {
                writer_config: WriterConfig::None,
                level: tracing::Level::INFO,
            },
        };
        try_initialize_logging_global(tracing_config)?;

        let mut buffer = EditorBuffer::new(TextFile::try_load_from_path(&cli.path)?);
        let mut engine = EditorEngine::default();
        let mut clipboard = TestClipboard::default();

        let line = cli.line.min(buffer.last_line_index());
        let col = cli.col.min(buffer.file.line_len(line));
        buffer.cursor = cursor(line, col);

        for byte in cli.text.bytes() {
            apply_editor_event(
                &mut buffer,
                &mut engine,
                EditorEvent::InsertChar(byte),
                &mut clipboard,
            )?;
        }

        for _ in 0..cli.undo_count {
            apply_editor_event(&mut buffer, &mut engine, EditorEvent::Undo, &mut clipboard)?;
        }

        tracing::info!(
            message = "quill_replay -> done",
            path = %cli.path.display(),
            cursor = %buffer.cursor,
            undo_len = %buffer.file.history.undo_stack.len(),
            redo_len = %buffer.file.history.redo_stack.len()
        );

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(&buffer.file.to_bytes()).into_diagnostic()?;
        stdout.flush().into_diagnostic()?;
    });
}
