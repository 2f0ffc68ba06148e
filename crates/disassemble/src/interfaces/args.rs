use clap::Parser;
use derive_builder::Builder;

/// Arguments for the `disassemble` command
#[derive(Debug, Clone, Parser, Builder)]
#[clap(
    about = "Disassembles an Intcode program to assembly",
    override_usage = "intcode disassemble <TARGET> [OPTIONS]"
)]
pub struct DisassemblerArgs {
    /// The target to disassemble, either a file or an inline comma-separated program.
    #[clap(required = true)]
    pub target: String,

    /// Whether to use base-10 for the address column.
    #[clap(long = "decimal", short = 'd')]
    pub decimal_counter: bool,

    /// Name of the output file.
    #[clap(long, short, default_value = "", hide_default_value = true)]
    pub name: String,

    /// The output directory to write the output to or 'print' to print to the console
    #[clap(long = "output", short = 'o', default_value = "output", hide_default_value = true)]
    pub output: String,
}

impl DisassemblerArgsBuilder {
    /// Creates a builder with every field set to its default.
    pub fn new() -> Self {
        Self {
            target: Some(String::new()),
            decimal_counter: Some(false),
            name: Some(String::new()),
            output: Some(String::new()),
        }
    }
}
