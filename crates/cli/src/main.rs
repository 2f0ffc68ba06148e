pub(crate) mod error;
pub(crate) mod log_args;
pub(crate) mod output;

use std::io::{self, Write};

use error::Error;
use log_args::LogArgs;
use output::{build_output_path, run_summary, wrote_message, TeeWriter};
use tracing::{info, warn};

use clap::{Parser, Subcommand};

use intcode_common::{
    constants::DEFAULT_ASSEMBLY_FILENAME,
    utils::io::file::write_file,
};
use intcode_config::{config, ConfigArgs, Configuration};
use intcode_core::{
    intcode_disassembler::{disassemble, DisassemblerArgs},
    intcode_runner::{run, RunArgs},
    intcode_vm::core::vm::Status,
};

#[derive(Debug, Parser)]
#[clap(name = "intcode", version)]
pub(crate) struct Arguments {
    #[clap(subcommand)]
    pub(crate) sub: Subcommands,

    #[clap(flatten)]
    logs: LogArgs,
}

#[derive(Debug, Subcommand)]
#[clap(about = "A resumable Intcode machine with a runner and a disassembler.")]
pub(crate) enum Subcommands {
    #[clap(name = "run", about = "Run an Intcode program")]
    Run(RunArgs),

    #[clap(name = "disassemble", about = "Disassemble an Intcode program to assembly")]
    Disassemble(DisassemblerArgs),

    #[clap(name = "config", about = "Display and edit the current configuration")]
    Config(ConfigArgs),
}

fn main() -> Result<(), Error> {
    let args = Arguments::parse();

    // setup logging; the guard flushes the log file when dropped
    let _guard = args.logs.init_tracing();

    let configuration = Configuration::load()
        .map_err(|e| Error::Generic(format!("failed to load configuration: {}", e)))?;
    match args.sub {
        Subcommands::Run(mut cmd) => {
            // fall back to the configured values
            if cmd.memory_limit.is_none() {
                cmd.memory_limit = Some(configuration.memory_limit);
            }
            if !cmd.ascii {
                cmd.ascii = configuration.ascii;
            }

            let stdin = io::stdin();
            let result = if cmd.output == "print" {
                let stdout = io::stdout();
                run(cmd, stdin.lock(), stdout.lock())?
            } else {
                let path = cmd.output.clone();
                let mut buffer = Vec::new();

                // echo outputs in interactive mode so they appear alongside the input prompts
                let result = if cmd.interactive {
                    let stdout = io::stdout();
                    run(cmd, stdin.lock(), TeeWriter::new(&mut buffer, stdout.lock()))?
                } else {
                    run(cmd, stdin.lock(), &mut buffer)?
                };

                write_file(&path, &String::from_utf8_lossy(&buffer))
                    .map_err(|e| Error::Generic(format!("failed to write outputs: {}", e)))?;
                info!("{}", wrote_message("outputs", &path));
                result
            };

            io::stdout().flush()?;
            match result.status {
                Status::BlockedOnInput => warn!("{}", run_summary(&result)),
                _ => info!("{}", run_summary(&result)),
            }
        }

        Subcommands::Disassemble(cmd) => {
            // if the user has passed an output filename, override the default filename
            let mut filename: String = DEFAULT_ASSEMBLY_FILENAME.to_string();
            let given_name = cmd.name.as_str();

            if !given_name.is_empty() {
                filename = format!("{}-{}", given_name, filename);
            }

            let assembly = disassemble(cmd.clone())?;

            if cmd.output == "print" {
                print!("{}", assembly);
            } else {
                let output_path = build_output_path(&cmd.output, &filename)
                    .map_err(|e| Error::Generic(format!("failed to build output path: {}", e)))?;

                write_file(&output_path, &assembly)
                    .map_err(|e| Error::Generic(format!("failed to write assembly: {}", e)))?;
                info!("{}", wrote_message("assembly", &output_path));
            }
        }

        Subcommands::Config(cmd) => {
            config(cmd).map_err(|e| Error::Generic(format!("failed to configure: {}", e)))?;
        }
    }

    Ok(())
}
