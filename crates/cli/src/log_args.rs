//! clap [Args](clap::Args) for logging configuration.

use clap::{ArgAction, Args, ValueEnum};
use intcode_tracing::{
    tracing_subscriber::filter::Directive, FileInfo, FileWorkerGuard, IntcodeTracer, LayerInfo,
    LogFormat, Tracer,
};
use std::{
    fmt::{self, Display},
    io::{self, IsTerminal},
    path::PathBuf,
};
use tracing::{level_filters::LevelFilter, Level};

/// The log configuration.
#[derive(Debug, Args)]
#[clap(next_help_heading = "LOGGING")]
pub(crate) struct LogArgs {
    /// The format to use for logs written to stdout.
    #[clap(long = "log.stdout.format", value_name = "FORMAT", global = true, default_value_t = LogFormat::Terminal)]
    pub(crate) log_stdout_format: LogFormat,

    /// The filter to use for logs written to stdout.
    #[clap(long = "log.stdout.filter", value_name = "FILTER", global = true, default_value = "")]
    pub(crate) log_stdout_filter: String,

    /// The directory to write rotating log files to. File logging is off when unset.
    #[clap(long = "log.file.directory", value_name = "PATH", global = true)]
    pub(crate) log_file_directory: Option<PathBuf>,

    /// The format to use for logs written to the log file.
    #[clap(long = "log.file.format", value_name = "FORMAT", global = true, default_value_t = LogFormat::Terminal)]
    pub(crate) log_file_format: LogFormat,

    /// The filter to use for logs written to the log file.
    #[clap(long = "log.file.filter", value_name = "FILTER", global = true, default_value = "debug")]
    pub(crate) log_file_filter: String,

    /// The maximum size (in MB) of one log file.
    #[clap(long = "log.file.max-size", value_name = "SIZE", global = true, default_value_t = 200)]
    pub(crate) log_file_max_size: u64,

    /// The maximum amount of log files that will be stored. If set to 0, background file
    /// logging is disabled.
    #[clap(long = "log.file.max-files", value_name = "COUNT", global = true, default_value_t = 5)]
    pub(crate) log_file_max_files: usize,

    /// Write logs to journald.
    #[clap(long = "log.journald", global = true)]
    pub(crate) journald: bool,

    /// The filter to use for logs written to journald.
    #[clap(
        long = "log.journald.filter",
        value_name = "FILTER",
        global = true,
        default_value = "error"
    )]
    pub(crate) journald_filter: String,

    /// Sets whether or not the formatter emits ANSI terminal escape codes for colors and other
    /// text formatting.
    #[clap(
        long,
        value_name = "COLOR",
        global = true,
        default_value_t = ColorMode::Always
    )]
    pub(crate) color: ColorMode,

    /// The verbosity settings for the tracer.
    #[clap(flatten)]
    pub(crate) verbosity: Verbosity,
}

impl LogArgs {
    /// Creates a [LayerInfo] instance.
    fn layer(&self, format: LogFormat, filter: String, use_color: bool) -> LayerInfo {
        LayerInfo::new(
            format,
            self.verbosity.directive().to_string(),
            filter,
            use_color.then(|| self.color.resolve().to_string()),
        )
    }

    /// Initializes tracing with the configured options from cli args.
    pub(crate) fn init_tracing(&self) -> eyre::Result<Option<FileWorkerGuard>> {
        let mut tracer = IntcodeTracer::new();

        let stdout = self.layer(self.log_stdout_format, self.log_stdout_filter.clone(), true);
        tracer = tracer.with_stdout(stdout);

        if self.journald {
            tracer = tracer.with_journald(self.journald_filter.clone());
        }

        if let Some(directory) = &self.log_file_directory {
            if self.log_file_max_files > 0 {
                let info = FileInfo::new(
                    directory.clone(),
                    self.log_file_max_size * 1024 * 1024,
                    self.log_file_max_files,
                );
                let file = self.layer(self.log_file_format, self.log_file_filter.clone(), false);
                tracer = tracer.with_file(file, info);
            }
        }

        let guard = tracer.init()?;
        Ok(guard)
    }
}

/// When the stdout log layer emits ANSI colors.
#[derive(Debug, Copy, Clone, ValueEnum, Eq, PartialEq)]
pub(crate) enum ColorMode {
    Always,
    /// Only when stdout is a terminal
    Auto,
    Never,
}

impl ColorMode {
    /// Settles `auto` into `always` or `never`.
    fn resolve(self) -> ColorMode {
        match self {
            ColorMode::Auto if io::stdout().is_terminal() => ColorMode::Always,
            ColorMode::Auto => ColorMode::Never,
            mode => mode,
        }
    }
}

impl Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_possible_value() {
            Some(value) => f.write_str(value.get_name()),
            None => Ok(()),
        }
    }
}

/// Log levels selected by repeating `-v`, quietest first.
const VERBOSITY_LEVELS: [Level; 4] = [Level::WARN, Level::INFO, Level::DEBUG, Level::TRACE];

/// How much the cli logs.
#[derive(Debug, Copy, Clone, Args)]
#[clap(next_help_heading = "DISPLAY")]
pub(crate) struct Verbosity {
    /// Raise the log level. Warnings and errors are shown by default.
    ///
    /// -v     Warnings & Errors
    /// -vv    Info
    /// -vvv   Debug
    /// -vvvv  Every executed step, when built with step tracing
    #[clap(short, long, action = ArgAction::Count, global = true, default_value_t = 1, verbatim_doc_comment)]
    verbosity: u8,

    /// Turn logging off entirely.
    #[clap(long, alias = "silent", short = 'q', global = true)]
    quiet: bool,
}

impl Verbosity {
    /// The default [Directive] for the stdout layer.
    pub(crate) fn directive(&self) -> Directive {
        if self.quiet {
            return LevelFilter::OFF.into();
        }

        let index = usize::from(self.verbosity.saturating_sub(1)).min(VERBOSITY_LEVELS.len() - 1);
        VERBOSITY_LEVELS[index].into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Debug, Parser)]
    struct Command {
        #[clap(flatten)]
        logs: LogArgs,
    }

    #[test]
    fn test_verbosity_directive() {
        let command = Command::parse_from(["intcode", "-vvv"]);
        assert_eq!(
            command.logs.verbosity.directive().to_string(),
            Directive::from(Level::DEBUG).to_string()
        );

        let command = Command::parse_from(["intcode"]);
        assert_eq!(
            command.logs.verbosity.directive().to_string(),
            Directive::from(Level::WARN).to_string()
        );

        let command = Command::parse_from(["intcode", "-q"]);
        assert_eq!(
            command.logs.verbosity.directive().to_string(),
            Directive::from(LevelFilter::OFF).to_string()
        );
    }

    #[test]
    fn test_verbosity_saturates_at_trace() {
        let command = Command::parse_from(["intcode", "-vvvvvvv"]);
        assert_eq!(
            command.logs.verbosity.directive().to_string(),
            Directive::from(Level::TRACE).to_string()
        );
    }

    #[test]
    fn test_color_mode() {
        let command = Command::parse_from(["intcode", "--color", "never"]);
        assert_eq!(command.logs.color, ColorMode::Never);
        assert_eq!(command.logs.color.to_string(), "never");
        assert!(Command::try_parse_from(["intcode", "--color", "sometimes"]).is_err());

        assert_eq!(ColorMode::Always.resolve(), ColorMode::Always);
        assert_ne!(ColorMode::Auto.resolve(), ColorMode::Auto);
    }
}
