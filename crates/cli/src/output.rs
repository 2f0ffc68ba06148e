use std::{env, io::{self, Write}};

use colored::Colorize;
use eyre::{eyre, Result};
use intcode_common::utils::io::file::short_path;
use intcode_core::{intcode_runner::RunResult, intcode_vm::core::vm::Status};

/// build a standardized output path for the given parameters. follows the following cases:
/// - if `output` is the default value (`output`), return `{cwd}/output/{filename}`
/// - if `output` is specified, return `{output}/{filename}`
pub(crate) fn build_output_path(output: &str, filename: &str) -> Result<String> {
    // if output is the default value, build a path based on the working directory
    if output == "output" {
        let cwd = env::current_dir()?
            .into_os_string()
            .into_string()
            .map_err(|_| eyre!("Unable to get current working directory"))?;

        return Ok(format!("{}/output/{}", cwd, filename));
    }

    // output is specified, return the path
    Ok(format!("{}/{}", output, filename))
}

/// A one-line, colored summary of a finished run.
pub(crate) fn run_summary(result: &RunResult) -> String {
    let status = match result.status {
        Status::Halted => result.status.to_string().green(),
        Status::BlockedOnInput => result.status.to_string().yellow(),
        Status::Running => result.status.to_string().normal(),
    };

    format!(
        "{} after {} instructions, {} output{}",
        status.bold(),
        result.cycles,
        result.outputs.len(),
        if result.outputs.len() == 1 { "" } else { "s" }
    )
}

/// A short, colored note that `path` was written.
pub(crate) fn wrote_message(what: &str, path: &str) -> String {
    format!("wrote {} to {}", what, short_path(path).bold())
}

/// A writer that copies everything written to it into two writers.
#[derive(Debug)]
pub(crate) struct TeeWriter<A, B> {
    first: A,
    second: B,
}

impl<A: Write, B: Write> TeeWriter<A, B> {
    pub(crate) fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<A: Write, B: Write> Write for TeeWriter<A, B> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.first.write_all(buf)?;
        self.second.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.first.flush()?;
        self.second.flush()
    }
}
