//! Tracing setup for the terminal host.
//!
//! The subscriber is installed before config files are read so their
//! warnings are not lost. Output starts on stderr and is redirected once
//! the log destination is known, because the UI owns the terminal.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing::Subscriber;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::{self, format::Format};
use tracing_subscriber::prelude::*;
use tracing_subscriber::registry::Registry;
use tracing_subscriber::{EnvFilter, reload};

type OutputLayer = fmt::Layer<Registry, fmt::format::DefaultFields, Format, BoxMakeWriter>;

/// Handle for redirecting log output after startup.
pub struct LogOutput {
    handle: reload::Handle<OutputLayer, Registry>,
}

impl LogOutput {
    /// Send further output to `log_file`, or discard it when `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file cannot be created.
    pub fn redirect(&self, log_file: Option<&Path>) -> Result<()> {
        let writer = open_writer(log_file)?;
        self.handle
            .modify(|layer| *layer.writer_mut() = writer)
            .context("Failed to redirect log output")
    }
}

/// Default filter: `RUST_LOG` plus a WARN directive.
pub fn default_filter() -> EnvFilter {
    EnvFilter::from_default_env().add_directive(tracing::Level::WARN.into())
}

/// Build a subscriber writing to `initial`, with a handle to redirect it.
pub fn subscriber(
    initial: BoxMakeWriter,
    filter: EnvFilter,
) -> (impl Subscriber + Send + Sync + 'static, LogOutput) {
    let layer: OutputLayer = fmt::layer().with_ansi(false).with_writer(initial);
    let (layer, handle) = reload::Layer::new(layer);
    let subscriber = tracing_subscriber::registry().with(layer).with(filter);
    (subscriber, LogOutput { handle })
}

/// Install the global subscriber, writing to stderr until redirected.
pub fn init() -> LogOutput {
    let (subscriber, output) = subscriber(BoxMakeWriter::new(std::io::stderr), default_filter());
    subscriber.init();
    output
}

fn open_writer(log_file: Option<&Path>) -> Result<BoxMakeWriter> {
    let Some(path) = log_file else {
        return Ok(BoxMakeWriter::new(std::io::sink));
    };
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    Ok(BoxMakeWriter::new(Mutex::new(file)))
}
