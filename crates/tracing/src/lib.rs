//! Tracing setup for the Intcode toolkit.
//!
//! Logs can be written to stdout, to journald, and to a size-rotated log file. Each destination
//! is a separate layer with its own format and filter.
//!
//! ```no_run
//! use intcode_tracing::{IntcodeTracer, LayerInfo, Tracer};
//!
//! let _guard = IntcodeTracer::new().with_stdout(LayerInfo::default()).init();
//! ```

// re-export tracing crates.
pub use tracing;
pub use tracing_subscriber;

pub use formatter::LogFormat;
pub use layers::{FileInfo, FileWorkerGuard};

mod formatter;
mod layers;

use crate::layers::Layers;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Tracer for application logging.
///
/// Manages the configuration and initialization of logging layers, including standard output,
/// optional journald, and optional file logging.
#[derive(Debug, Clone)]
pub struct IntcodeTracer {
    stdout: LayerInfo,
    journald: Option<String>,
    file: Option<(LayerInfo, FileInfo)>,
}

impl IntcodeTracer {
    /// Constructs a new `IntcodeTracer` with default settings.
    ///
    /// Initializes with default stdout layer configuration. Journald and file layers are not
    /// set by default.
    pub fn new() -> Self {
        Self { stdout: LayerInfo::default(), journald: None, file: None }
    }

    /// Sets a custom configuration for the stdout layer.
    pub fn with_stdout(mut self, config: LayerInfo) -> Self {
        self.stdout = config;
        self
    }

    /// Sets the journald layer filter.
    pub fn with_journald(mut self, filter: String) -> Self {
        self.journald = Some(filter);
        self
    }

    /// Sets the file layer configuration and associated file info.
    pub fn with_file(mut self, config: LayerInfo, file_info: FileInfo) -> Self {
        self.file = Some((config, file_info));
        self
    }
}

impl Default for IntcodeTracer {
    fn default() -> Self {
        Self::new()
    }
}

/// Configuration for a logging layer.
#[derive(Debug, Clone)]
pub struct LayerInfo {
    format: LogFormat,
    default_directive: String,
    filters: String,
    color: Option<String>,
}

impl LayerInfo {
    /// Constructs a new `LayerInfo`.
    ///
    /// * `format` - Specifies the format for log messages.
    /// * `default_directive` - Directive for filtering log messages.
    /// * `filters` - Additional comma-separated filtering parameters.
    /// * `color` - Optional color configuration for the log messages.
    pub const fn new(
        format: LogFormat,
        default_directive: String,
        filters: String,
        color: Option<String>,
    ) -> Self {
        Self { format, default_directive, filters, color }
    }
}

impl Default for LayerInfo {
    /// Terminal format, INFO level, no extra filters, colors always on.
    fn default() -> Self {
        Self {
            format: LogFormat::Terminal,
            default_directive: LevelFilter::INFO.to_string(),
            filters: String::new(),
            color: Some("always".to_string()),
        }
    }
}

/// A trait for initializing the configured tracing layers.
pub trait Tracer {
    /// Initialize the logging configuration.
    ///
    /// Returns the guard of the file writer, if file logging is enabled. Logs written to the
    /// file are flushed when the guard is dropped.
    fn init(self) -> eyre::Result<Option<FileWorkerGuard>>;
}

impl Tracer for IntcodeTracer {
    fn init(self) -> eyre::Result<Option<FileWorkerGuard>> {
        let mut layers = Layers::new();

        layers.stdout(
            self.stdout.format,
            self.stdout.default_directive.parse()?,
            &self.stdout.filters,
            self.stdout.color,
        )?;

        if let Some(filter) = self.journald {
            layers.journald(&filter)?;
        }

        let file_guard = match self.file {
            Some((config, file_info)) => Some(layers.file(config.format, &config.filters, file_info)?),
            None => None,
        };

        // the global subscriber may already be set, e.g. in tests
        let _ = tracing_subscriber::registry().with(layers.into_inner()).try_init();
        Ok(file_guard)
    }
}

/// Initializes a tracing subscriber for tests.
///
/// The filter is configurable via `RUST_LOG`. This will not panic if a global subscriber is
/// already set.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layer_info() {
        let layer = LayerInfo::default();
        assert_eq!(layer.format, LogFormat::Terminal);
        assert_eq!(layer.default_directive, "info");
        assert!(layer.filters.is_empty());
        assert_eq!(layer.color.as_deref(), Some("always"));
    }

    #[test]
    fn test_tracer_builders() {
        let tracer = IntcodeTracer::new()
            .with_stdout(LayerInfo::new(LogFormat::Json, "debug".to_string(), String::new(), None))
            .with_journald("error".to_string());

        assert_eq!(tracer.stdout.format, LogFormat::Json);
        assert_eq!(tracer.journald.as_deref(), Some("error"));
        assert!(tracer.file.is_none());
    }
}
