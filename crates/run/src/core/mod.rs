use std::{
    io::{BufRead, Write},
    time::Instant,
};

use crate::{error::Error, interfaces::RunArgs};
use intcode_common::utils::{
    strings::{render_output, split_values},
    target::read_target,
    time::{format_duration, per_second},
};
use intcode_vm::core::{
    constants::DEFAULT_MEMORY_LIMIT,
    program::Program,
    types::Word,
    vm::{Machine, Status},
};
use tracing::{debug, info, warn};

/// The result of a [`run`] invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    /// Every value the program emitted, in order.
    pub outputs: Vec<Word>,

    /// How the machine ended: halted, or still waiting for input.
    pub status: Status,

    /// The number of instructions executed.
    pub cycles: u64,
}

/// Runs the program named by `args`, streaming outputs to `writer`.
///
/// Input given with `--input` and `--ascii-input` is queued before the first instruction. When
/// the machine blocks on input in interactive mode, a line is read from `reader` and queued:
/// as text in ASCII mode, otherwise as comma or whitespace separated integers. End of input
/// ends the session with the machine still blocked.
///
/// ```
/// use std::io::Cursor;
/// use intcode_runner::{run, RunArgsBuilder};
///
/// let args = RunArgsBuilder::new()
///     .target("3,0,4,0,99".to_string())
///     .input("42".to_string())
///     .build()
///     .expect("failed to build args");
///
/// let mut output = Vec::new();
/// let result = run(args, Cursor::new(""), &mut output).expect("failed to run");
/// assert_eq!(String::from_utf8(output).expect("utf8"), "42\n");
/// assert!(result.status.to_string() == "halted");
/// ```
pub fn run<R, W>(args: RunArgs, mut reader: R, mut writer: W) -> Result<RunResult, Error>
where
    R: BufRead,
    W: Write,
{
    let start_time = Instant::now();

    // load the program from the target
    let source = read_target(&args.target)?;
    let program = Program::parse(&source).map_err(intcode_vm::Error::from)?;
    let mut machine =
        Machine::with_memory_limit(&program, args.memory_limit.unwrap_or(DEFAULT_MEMORY_LIMIT));

    // seed the input queue
    machine.push_inputs(parse_values(&args.input)?);
    for line in &args.ascii_input {
        machine.push_ascii(line);
    }
    debug!("queued {} input values", machine.pending_input().len());

    let mut outputs = Vec::new();
    loop {
        for output in machine.run() {
            let value = output?;
            writer.write_all(render_output(value, args.ascii).as_bytes())?;
            outputs.push(value);
        }
        writer.flush()?;

        if machine.is_halted() {
            break;
        }

        if !args.interactive {
            warn!("program is waiting for input at address {}", machine.ip());
            break;
        }

        // read the next line of input, skipping lines that hold no values
        let mut line = String::new();
        if reader.read_line(&mut line)? == 0 {
            warn!("input closed while the program is waiting for input");
            break;
        }
        let line = line.trim_end_matches(['\n', '\r']);
        if args.ascii {
            machine.push_ascii(line);
        } else {
            machine.push_inputs(parse_values(line)?);
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        "program {} after {} instructions ({})",
        machine.status(),
        machine.cycles(),
        format_duration(elapsed)
    );
    debug!("executed {:.0} instructions per second", per_second(machine.cycles(), elapsed));

    Ok(RunResult { outputs, status: machine.status(), cycles: machine.cycles() })
}

/// Parse a comma or whitespace separated list of integers.
fn parse_values(s: &str) -> Result<Vec<Word>, Error> {
    split_values(s)
        .into_iter()
        .map(|value| {
            Word::from_dec_str(value).map_err(|_| Error::InvalidInput(value.to_string()))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use intcode_vm::core::types::{word, words};

    use crate::RunArgsBuilder;

    use super::*;

    const ACCUMULATOR: &str = "3,30,4,30,3,31,1,30,31,30,4,30,3,31,1,30,31,30,4,30,99";

    fn run_with(args: RunArgs, stdin: &str) -> (RunResult, String) {
        intcode_tracing::init_test_tracing();

        let mut output = Vec::new();
        let result = run(args, Cursor::new(stdin.to_string()), &mut output).expect("failed to run");
        (result, String::from_utf8(output).expect("output is not utf8"))
    }

    #[test]
    fn test_run_queued_input() {
        let args = RunArgsBuilder::new()
            .target(ACCUMULATOR.to_string())
            .input("1, 2 3".to_string())
            .build()
            .expect("failed to build args");

        let (result, output) = run_with(args, "");
        assert_eq!(output, "1\n3\n6\n");
        assert_eq!(result.outputs, words(&[1, 3, 6]));
        assert_eq!(result.status, Status::Halted);
    }

    #[test]
    fn test_run_stops_when_blocked() {
        let args = RunArgsBuilder::new()
            .target(ACCUMULATOR.to_string())
            .input("5".to_string())
            .build()
            .expect("failed to build args");

        let (result, output) = run_with(args, "7\n");
        assert_eq!(output, "5\n");
        assert_eq!(result.status, Status::BlockedOnInput);
    }

    #[test]
    fn test_run_interactive() {
        let args = RunArgsBuilder::new()
            .target(ACCUMULATOR.to_string())
            .interactive(true)
            .build()
            .expect("failed to build args");

        let (result, output) = run_with(args, "1\n\n2,3\n");
        assert_eq!(output, "1\n3\n6\n");
        assert_eq!(result.status, Status::Halted);
    }

    #[test]
    fn test_run_interactive_eof() {
        let args = RunArgsBuilder::new()
            .target(ACCUMULATOR.to_string())
            .interactive(true)
            .build()
            .expect("failed to build args");

        let (result, output) = run_with(args, "10\n");
        assert_eq!(output, "10\n");
        assert_eq!(result.status, Status::BlockedOnInput);
    }

    #[test]
    fn test_run_ascii() {
        // echo three characters, then print a large value
        let args = RunArgsBuilder::new()
            .target("3,0,4,0,3,0,4,0,3,0,4,0,104,1000,99".to_string())
            .ascii(true)
            .ascii_input(vec!["ok".to_string()])
            .build()
            .expect("failed to build args");

        let (result, output) = run_with(args, "");
        assert_eq!(output, "ok\n1000\n");
        assert_eq!(result.outputs.last(), Some(&word(1000)));
    }

    #[test]
    fn test_run_interactive_ascii() {
        let args = RunArgsBuilder::new()
            .target("3,0,4,0,3,0,4,0,99".to_string())
            .ascii(true)
            .interactive(true)
            .build()
            .expect("failed to build args");

        let (result, output) = run_with(args, "a\n");
        assert_eq!(output, "a\n");
        assert_eq!(result.status, Status::Halted);
    }

    #[test]
    fn test_run_memory_limit() {
        let args = RunArgsBuilder::new()
            .target("1101,1,1,100,99".to_string())
            .memory_limit(Some(16))
            .build()
            .expect("failed to build args");

        let result = run(args, Cursor::new(""), Vec::new());
        assert!(matches!(
            result,
            Err(Error::Machine(intcode_vm::Error::MemoryLimitExceeded { limit: 16, .. }))
        ));
    }

    #[test]
    fn test_run_invalid_input() {
        let args = RunArgsBuilder::new()
            .target("3,0,99".to_string())
            .input("1,x".to_string())
            .build()
            .expect("failed to build args");

        let result = run(args, Cursor::new(""), Vec::new());
        assert!(matches!(result, Err(Error::InvalidInput(value)) if value == "x"));
    }

    #[test]
    fn test_run_from_file() {
        let path = "/tmp/intcode_runner_program.txt";
        std::fs::write(path, "104,1125899906842624,99\n").expect("failed to write program");

        let args = RunArgsBuilder::new()
            .target(path.to_string())
            .build()
            .expect("failed to build args");

        let (_, output) = run_with(args, "");
        assert_eq!(output, "1125899906842624\n");
    }
}
