// Copyright (c) 2024-2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use miette::IntoDiagnostic;
use tracing::dispatcher;
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, Registry, fmt::writer::BoxMakeWriter,
                         layer::SubscriberExt, registry::LookupSpan,
                         util::SubscriberInitExt};

use super::{DisplayPreference, TracingConfig, WriterConfig, rolling_file_appender_impl};

/// Every `fmt` layer starts from this, so display and file output look alike.
macro_rules! create_fmt {
    () => {
        tracing_subscriber::fmt::layer()
            .compact()
            .with_thread_ids(false)
            .with_thread_names(false)
    };
}

pub type DynLayer<S> = dyn Layer<S> + Send + Sync + 'static;

/// Install the global subscriber described by `options`. This can only happen once per
/// process, so it is for binaries like `quill_replay`, not for tests (see
/// [`TracingConfig::install_thread_local`]).
///
/// [`WriterConfig::None`] installs nothing, and logging stays off.
///
/// # Errors
///
/// If the log file can't be created, or a global subscriber is already installed.
pub fn try_initialize_logging_global(options: impl Into<TracingConfig>) -> miette::Result<()> {
    let tracing_config: TracingConfig = options.into();
    if tracing_config.writer_config == WriterConfig::None {
        return Ok(());
    }
    tracing_config.install_global()
}

impl TracingConfig {
    /// # Errors
    ///
    /// See [`try_initialize_logging_global`].
    pub fn install_global(self) -> miette::Result<()> {
        tracing_subscriber::registry()
            .with(try_create_layers(self)?)
            .try_init()
            .into_diagnostic()
    }

    /// Install a subscriber for the current thread only, until the guard is dropped.
    ///
    /// # Errors
    ///
    /// If the log file can't be created.
    pub fn install_thread_local(self) -> miette::Result<dispatcher::DefaultGuard> {
        let subscriber = tracing_subscriber::registry().with(try_create_layers(self)?);
        Ok(tracing::subscriber::set_default(subscriber))
    }
}

/// The level filter, followed by a display layer and a file layer when `tracing_config`
/// asks for them. Nothing is installed.
///
/// # Errors
///
/// If the log file can't be created.
pub fn try_create_layers(
    tracing_config: TracingConfig,
) -> miette::Result<Vec<Box<DynLayer<Registry>>>> {
    let level_filter = tracing_config.get_level_filter();
    let writer_config = tracing_config.get_writer_config();

    let mut layers: Vec<Box<DynLayer<Registry>>> = vec![Box::new(level_filter)];
    layers.extend(try_create_display_layer(level_filter, writer_config.clone())?);
    layers.extend(try_create_file_layer(level_filter, writer_config)?);
    Ok(layers)
}

/// A layer writing to stdout or stderr, or [None] if `writer_config` has no display.
///
/// # Errors
///
/// Never, today. The signature matches [`try_create_file_layer`].
#[allow(clippy::unnecessary_wraps)]
pub fn try_create_display_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let Some(display_preference) = writer_config.display_preference() else {
        return Ok(None);
    };

    let writer = match display_preference {
        DisplayPreference::Stdout => BoxMakeWriter::new(std::io::stdout),
        DisplayPreference::Stderr => BoxMakeWriter::new(std::io::stderr),
    };

    Ok(Some(Box::new(
        create_fmt!().with_writer(writer).with_filter(level_filter),
    )))
}

/// A layer appending to the log file, or [None] if `writer_config` has no file. The
/// file is created right away.
///
/// # Errors
///
/// If the path has no parent folder or no file name.
pub fn try_create_file_layer<S>(
    level_filter: LevelFilter,
    writer_config: WriterConfig,
) -> miette::Result<Option<Box<DynLayer<S>>>>
where
    S: tracing_core::Subscriber,
    for<'a> S: LookupSpan<'a>,
{
    let Some(file_path) = writer_config.file_path() else {
        return Ok(None);
    };

    let appender = rolling_file_appender_impl::try_create(file_path)?;

    Ok(Some(Box::new(
        create_fmt!()
            .with_ansi(false)
            .with_writer(appender)
            .with_filter(level_filter),
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_eq2, test_fixtures::try_create_temp_dir};

    fn log_file_in(dir: &std::path::Path, name: &str) -> String {
        dir.join(name).to_string_lossy().into_owned()
    }

    #[test]
    fn test_display_layer_only_for_display_configs() {
        let display: Option<Box<DynLayer<Registry>>> = try_create_display_layer(
            LevelFilter::DEBUG,
            WriterConfig::Display(DisplayPreference::Stdout),
        )
        .unwrap();
        assert!(display.is_some());

        let none: Option<Box<DynLayer<Registry>>> =
            try_create_display_layer(LevelFilter::DEBUG, WriterConfig::File("x.log".into()))
                .unwrap();
        assert!(none.is_none());
    }

    #[test]
    fn test_file_layer_creates_the_file() {
        let dir = try_create_temp_dir().unwrap();
        let file_path = log_file_in(&dir, "quill_file_layer.log");

        let layer: Option<Box<DynLayer<Registry>>> = try_create_file_layer(
            LevelFilter::DEBUG,
            WriterConfig::File(file_path.clone()),
        )
        .unwrap();

        assert!(layer.is_some());
        assert!(std::path::Path::new(&file_path).exists());
    }

    #[test]
    fn test_display_and_file_gives_three_layers() {
        let dir = try_create_temp_dir().unwrap();
        let file_path = log_file_in(&dir, "quill_both.log");

        let layers = try_create_layers(TracingConfig {
            writer_config: WriterConfig::DisplayAndFile(
                DisplayPreference::Stderr,
                file_path.clone(),
            ),
            level: tracing::Level::DEBUG,
        })
        .unwrap();

        // Level filter, display, file.
        assert_eq2!(layers.len(), 3);
        assert!(std::path::Path::new(&file_path).exists());
    }

    #[test]
    fn test_thread_local_subscriber_writes_to_file() {
        let dir = try_create_temp_dir().unwrap();
        let file_path = log_file_in(&dir, "quill_thread_local.log");

        let guard = TracingConfig::new_file(Some(file_path.clone()))
            .install_thread_local()
            .unwrap();
        tracing::debug!(message = "hello from the test");
        drop(guard);

        let content = std::fs::read_to_string(&file_path).unwrap();
        assert!(content.contains("hello from the test"));
    }

    #[test]
    fn test_writer_none_installs_nothing() {
        let config = TracingConfig {
            writer_config: WriterConfig::None,
            level: tracing::Level::INFO,
        };
        assert!(try_initialize_logging_global(config).is_ok());
    }
}
