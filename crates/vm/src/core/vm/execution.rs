use std::{
    fmt::{self, Display},
    iter::FusedIterator,
};

use crate::{
    core::{opcodes::opcode_name, types::Word},
    error::Error,
};

use super::core::Machine;

/// [`Status`] is the execution status of a [`Machine`].
///
/// A machine moves `Running → BlockedOnInput → Running → … → Halted`. `Halted` is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Status {
    /// The machine can execute its next instruction.
    #[default]
    Running,

    /// The machine is parked on an `IN` instruction with an empty input queue. The instruction
    /// pointer still addresses that instruction, which is retried once input is supplied.
    BlockedOnInput,

    /// The machine executed `HALT`. Further run calls do nothing.
    Halted,
}

impl Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Running => write!(f, "running"),
            Status::BlockedOnInput => write!(f, "blocked on input"),
            Status::Halted => write!(f, "halted"),
        }
    }
}

/// [`Event`] is a suspension point reported by [`Machine::resume`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// An `OUT` instruction produced this value. Resuming continues after that instruction.
    Output(Word),

    /// The machine needs input before it can continue.
    BlockedOnInput,

    /// The machine has halted.
    Halted,
}

/// [`Instruction`] is a single executed Intcode instruction. It is returned by
/// [`Machine::step`], and carries what the instruction read, wrote, and emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// The address of the instruction word.
    pub instruction: usize,

    /// The opcode executed.
    pub opcode: u8,

    /// The resolved values of the instruction's read operands, in parameter order.
    pub inputs: Vec<Word>,

    /// The address written and the value stored there, if the instruction wrote memory.
    pub write: Option<(usize, Word)>,

    /// The value emitted, if the instruction was an `OUT`.
    pub output: Option<Word>,

    /// The instruction pointer after execution.
    pub next: usize,
}

impl Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inputs = self.inputs.iter().map(|value| value.to_string()).collect::<Vec<String>>();
        write!(f, "{:>6} {} [{}]", self.instruction, opcode_name(self.opcode), inputs.join(", "))?;
        if let Some((address, value)) = &self.write {
            write!(f, " -> [{address}] = {value}")?;
        }
        if let Some(value) = &self.output {
            write!(f, " -> out {value}")?;
        }
        Ok(())
    }
}

/// [`ExecutionResult`] is the result of running a machine until it halts or blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    /// The values emitted during this run, in program order.
    pub outputs: Vec<Word>,

    /// Why the run ended: [`Status::Halted`] or [`Status::BlockedOnInput`].
    pub status: Status,

    /// The total number of instructions the machine has executed.
    pub cycles: u64,
}

/// [`Outputs`] is the lazy output sequence produced by one [`Machine::run`] invocation.
///
/// Each element corresponds to exactly one `OUT` instruction; execution only advances as
/// elements are requested. The sequence ends when the machine halts or blocks on input, and the
/// caller tells the two apart with [`Machine::status`]. A fatal error is yielded once as `Err`,
/// after which the sequence ends.
#[derive(Debug)]
pub struct Outputs<'a> {
    machine: &'a mut Machine,
    finished: bool,
}

impl<'a> Outputs<'a> {
    pub(crate) fn new(machine: &'a mut Machine) -> Self {
        Outputs { machine, finished: false }
    }
}

impl Iterator for Outputs<'_> {
    type Item = Result<Word, Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        match self.machine.resume() {
            Ok(Event::Output(value)) => Some(Ok(value)),
            Ok(Event::BlockedOnInput | Event::Halted) => {
                self.finished = true;
                None
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for Outputs<'_> {}

#[cfg(test)]
mod tests {
    use crate::core::{
        opcodes,
        types::{word, words},
    };

    use super::*;

    #[test]
    fn test_instruction_display() {
        let instruction = Instruction {
            instruction: 0,
            opcode: opcodes::ADD,
            inputs: words(&[2, 3]),
            write: Some((5, word(5))),
            output: None,
            next: 4,
        };
        assert_eq!(instruction.to_string(), "     0 ADD [2, 3] -> [5] = 5");

        let instruction = Instruction {
            instruction: 12,
            opcode: opcodes::OUT,
            inputs: words(&[-7]),
            write: None,
            output: Some(word(-7)),
            next: 14,
        };
        assert_eq!(instruction.to_string(), "    12 OUT [-7] -> out -7");
    }

    #[test]
    fn test_outputs_fused_after_error() {
        let mut machine = Machine::from_words(&words(&[50]));
        let mut outputs = machine.run();

        assert!(matches!(outputs.next(), Some(Err(_))));
        assert!(outputs.next().is_none());
        assert!(outputs.next().is_none());
    }
}
