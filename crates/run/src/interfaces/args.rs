use clap::Parser;
use derive_builder::Builder;

/// Arguments for the `run` command
#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Runs an Intcode program",
    override_usage = "intcode run <TARGET> [OPTIONS]"
)]
pub struct RunArgs {
    /// The program to run, either a file or an inline comma-separated program.
    #[clap(required = true)]
    pub target: String,

    /// Comma-separated values to queue as input before the program starts.
    #[clap(long, short, default_value = "", hide_default_value = true)]
    pub input: String,

    /// Render outputs in 0..=127 as characters instead of integers.
    #[clap(long, short)]
    pub ascii: bool,

    /// Lines of text to queue as ASCII input, each followed by a newline. May be repeated.
    #[clap(long = "ascii-input", value_name = "LINE")]
    pub ascii_input: Vec<String>,

    /// Read more input from stdin whenever the program waits for it.
    #[clap(long = "interactive", short = 'I')]
    pub interactive: bool,

    /// The number of words the machine's memory may grow to. Defaults to the configured limit.
    #[clap(long = "memory-limit", short = 'm', value_name = "WORDS")]
    pub memory_limit: Option<usize>,

    /// The file to write outputs to, or 'print' to print to the console
    #[clap(long = "output", short = 'o', default_value = "print", hide_default_value = true)]
    pub output: String,
}

impl RunArgsBuilder {
    /// Creates a builder with every field set to its default.
    pub fn new() -> Self {
        Self {
            target: Some(String::new()),
            input: Some(String::new()),
            ascii: Some(false),
            ascii_input: Some(Vec::new()),
            interactive: Some(false),
            memory_limit: Some(None),
            output: Some(String::from("print")),
        }
    }
}
