#[cfg(feature = "step-tracing")]
use std::time::Instant;

use tracing::trace;

use crate::{
    core::{
        constants::DEFAULT_MEMORY_LIMIT,
        input::InputQueue,
        memory::Memory,
        opcodes::{self, Decoded, Mode},
        program::Program,
        types::Word,
    },
    error::Error,
};

use super::{
    execution::{Event, ExecutionResult, Instruction, Outputs, Status},
    handlers,
};

/// The [`Machine`] struct represents an Intcode machine instance. \
/// It contains the machine's [`Memory`], its [`InputQueue`], and the registers needed to
/// resume execution exactly where it was suspended.
///
/// Cloning a machine deep-copies all of its state; the clone and the original share nothing and
/// can be driven independently, which is how exploratory drivers try several futures from one
/// state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Machine {
    /// The machine's memory, holding the program and any data it writes.
    pub(crate) memory: Memory,

    /// Values supplied by the driver but not yet consumed.
    pub(crate) input: InputQueue,

    /// The instruction pointer: the address of the next instruction to decode.
    pub(crate) instruction: usize,

    /// The relative base register.
    pub(crate) relative_base: Word,

    /// The current execution status.
    pub(crate) status: Status,

    /// Counter for instructions executed.
    pub(crate) cycles: u64,

    /// The time when execution started (only available with step-tracing feature).
    #[cfg(feature = "step-tracing")]
    pub(crate) start_time: Instant,
}

impl Machine {
    /// Creates a new [`Machine`] with `program` loaded at address 0.
    ///
    /// ```
    /// use intcode_vm::core::{program::Program, vm::{Machine, Status}};
    ///
    /// let program = Program::parse("1,0,0,0,99").expect("valid program");
    /// let machine = Machine::new(&program);
    /// assert_eq!(machine.status(), Status::Running);
    /// assert_eq!(machine.ip(), 0);
    /// ```
    pub fn new(program: &Program) -> Machine {
        Machine::with_memory_limit(program, DEFAULT_MEMORY_LIMIT)
    }

    /// Creates a new [`Machine`] whose memory may grow to at most `limit` words.
    pub fn with_memory_limit(program: &Program, limit: usize) -> Machine {
        Machine::from_memory(Memory::from_words(program.words(), limit))
    }

    /// Creates a new [`Machine`] from raw program words.
    ///
    /// ```
    /// use intcode_vm::core::{types::{word, words}, vm::Machine};
    ///
    /// let mut machine = Machine::from_words(&words(&[1002, 4, 3, 4, 33]));
    /// machine.execute().expect("execution failed");
    /// assert_eq!(machine.read(4), word(99));
    /// ```
    pub fn from_words(words: &[Word]) -> Machine {
        Machine::from_memory(Memory::from_words(words, DEFAULT_MEMORY_LIMIT))
    }

    /// Parses `source` and creates a new [`Machine`] from it.
    pub fn parse(source: &str) -> Result<Machine, Error> {
        Ok(Machine::new(&Program::parse(source)?))
    }

    fn from_memory(memory: Memory) -> Machine {
        Machine {
            memory,
            input: InputQueue::new(),
            instruction: 0,
            relative_base: Word::ZERO,
            status: Status::Running,
            cycles: 0,
            #[cfg(feature = "step-tracing")]
            start_time: Instant::now(),
        }
    }

    /// The current execution status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Whether the machine has halted.
    pub fn is_halted(&self) -> bool {
        self.status == Status::Halted
    }

    /// Whether the machine is waiting for input.
    pub fn is_blocked(&self) -> bool {
        self.status == Status::BlockedOnInput
    }

    /// The instruction pointer.
    pub fn ip(&self) -> usize {
        self.instruction
    }

    /// The relative base register.
    pub fn relative_base(&self) -> Word {
        self.relative_base
    }

    /// The machine's memory.
    pub fn memory(&self) -> &Memory {
        &self.memory
    }

    /// Read the word at `address`. Addresses past the end of memory read as zero.
    pub fn read(&self, address: usize) -> Word {
        self.memory.read(address)
    }

    /// The number of instructions executed so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// The values supplied but not yet consumed.
    pub fn pending_input(&self) -> &InputQueue {
        &self.input
    }

    /// Append a value to the input queue. A machine blocked on input becomes runnable again.
    ///
    /// ```
    /// use intcode_vm::core::{types::word, vm::{Machine, Status}};
    ///
    /// let mut machine = Machine::parse("3,0,99").expect("valid program");
    /// machine.execute().expect("execution failed");
    /// assert_eq!(machine.status(), Status::BlockedOnInput);
    ///
    /// machine.push_input(word(7));
    /// assert_eq!(machine.status(), Status::Running);
    /// ```
    pub fn push_input(&mut self, value: Word) {
        self.input.push(value);
        self.unblock();
    }

    /// Append several values to the input queue, in order.
    pub fn push_inputs<I: IntoIterator<Item = Word>>(&mut self, values: I) {
        self.input.extend(values);
        self.unblock();
    }

    /// Append `line` as ASCII codes followed by a newline (10).
    pub fn push_ascii(&mut self, line: &str) {
        self.input.push_ascii(line);
        self.unblock();
    }

    fn unblock(&mut self) {
        if self.status == Status::BlockedOnInput && !self.input.is_empty() {
            self.status = Status::Running;
        }
    }

    /// Produce an independent copy of this machine for exploring an alternative future.
    ///
    /// ```
    /// use intcode_vm::core::{types::word, vm::Machine};
    ///
    /// let mut machine = Machine::parse("3,0,4,0,99").expect("valid program");
    /// let mut fork = machine.fork();
    ///
    /// machine.push_input(word(1));
    /// fork.push_input(word(2));
    /// assert_eq!(machine.execute().expect("execution failed").outputs, vec![word(1)]);
    /// assert_eq!(fork.execute().expect("execution failed").outputs, vec![word(2)]);
    /// ```
    pub fn fork(&self) -> Machine {
        self.clone()
    }

    /// Converts a resolved address into a memory index, rejecting negative addresses.
    pub(crate) fn address(&self, address: Word) -> Result<usize, Error> {
        if address.is_negative() {
            return Err(Error::MemoryFault { ip: self.instruction, address });
        }

        usize::try_from(address).map_err(|_| Error::MemoryLimitExceeded {
            ip: self.instruction,
            address,
            limit: self.memory.limit(),
        })
    }

    /// The raw word of the 1-indexed `parameter` of the current instruction.
    fn parameter(&self, parameter: usize) -> Word {
        self.memory.read(self.instruction.saturating_add(parameter))
    }

    fn relative(&self, decoded: &Decoded, offset: Word) -> Result<Word, Error> {
        self.relative_base
            .checked_add(offset)
            .ok_or(Error::Overflow { ip: self.instruction, opcode: decoded.opcode })
    }

    /// Resolve the 1-indexed `parameter` of `decoded` as a value to read.
    pub(crate) fn read_operand(&self, decoded: &Decoded, parameter: usize) -> Result<Word, Error> {
        let raw = self.parameter(parameter);
        match decoded.mode(parameter) {
            Mode::Immediate => Ok(raw),
            Mode::Position => Ok(self.memory.read(self.address(raw)?)),
            Mode::Relative => Ok(self.memory.read(self.address(self.relative(decoded, raw)?)?)),
        }
    }

    /// Resolve the 1-indexed `parameter` of `decoded` as an address to write.
    ///
    /// The target is fully validated here so that a faulting instruction never mutates state.
    pub(crate) fn write_target(&self, decoded: &Decoded, parameter: usize) -> Result<usize, Error> {
        let raw = self.parameter(parameter);
        let target = match decoded.mode(parameter) {
            Mode::Position => raw,
            Mode::Relative => self.relative(decoded, raw)?,
            Mode::Immediate => {
                return Err(Error::InvalidWriteMode {
                    ip: self.instruction,
                    opcode: decoded.opcode,
                    parameter,
                })
            }
        };

        let address = self.address(target)?;
        if !self.memory.in_bounds(address) {
            return Err(Error::MemoryLimitExceeded {
                ip: self.instruction,
                address: target,
                limit: self.memory.limit(),
            });
        }
        Ok(address)
    }

    /// Store `value` at the validated `target`, advance past `decoded`, and record the
    /// instruction.
    pub(crate) fn store_and_advance(
        &mut self,
        decoded: &Decoded,
        inputs: Vec<Word>,
        target: usize,
        value: Word,
    ) -> Instruction {
        self.memory.store(target, value);
        let mut instruction = self.advance(decoded, inputs);
        instruction.write = Some((target, value));
        instruction
    }

    /// Advance past `decoded` and record the instruction.
    pub(crate) fn advance(&mut self, decoded: &Decoded, inputs: Vec<Word>) -> Instruction {
        let address = self.instruction;
        self.instruction = self.instruction.saturating_add(decoded.info.width());
        Instruction {
            instruction: address,
            opcode: decoded.opcode,
            inputs,
            write: None,
            output: None,
            next: self.instruction,
        }
    }

    /// Decodes and executes the instruction at the instruction pointer. Returns `None` if the
    /// instruction is an `IN` with nothing to read.
    fn _step(&mut self) -> Result<Option<Instruction>, Error> {
        let word = self.memory.read(self.instruction);
        let decoded = Decoded::decode(self.instruction, word)?;

        #[cfg(feature = "step-tracing")]
        let start_time = Instant::now();

        let instruction = match decoded.opcode {
            opcodes::ADD => handlers::arithmetic::add(self, &decoded)?,
            opcodes::MUL => handlers::arithmetic::mul(self, &decoded)?,
            opcodes::IN => match handlers::io::input(self, &decoded)? {
                Some(instruction) => instruction,
                None => return Ok(None),
            },
            opcodes::OUT => handlers::io::output(self, &decoded)?,
            opcodes::JNZ => handlers::control::jump_if_true(self, &decoded)?,
            opcodes::JZ => handlers::control::jump_if_false(self, &decoded)?,
            opcodes::LT => handlers::comparison::lt(self, &decoded)?,
            opcodes::EQ => handlers::comparison::eq(self, &decoded)?,
            opcodes::ARB => handlers::control::adjust_base(self, &decoded)?,
            opcodes::HALT => handlers::control::halt(self, &decoded),
            _ => return Err(Error::InvalidOpcode { ip: self.instruction, word }),
        };
        self.cycles += 1;

        // if step-tracing feature is enabled, print the executed operation
        #[cfg(feature = "step-tracing")]
        trace!(
            instruction = %instruction,
            opcode = decoded.name(),
            cycles = self.cycles,
            elapsed = ?Instant::now().duration_since(start_time),
            ops_per_sec = (self.cycles as f64 / self.start_time.elapsed().as_secs_f64()),
            "executed instruction"
        );

        Ok(Some(instruction))
    }

    /// Executes the next instruction and returns a record of it.
    ///
    /// Returns `Ok(None)` without changing anything but the status when no instruction could
    /// run: the machine has halted, or it reached an `IN` with an empty input queue.
    ///
    /// ```
    /// use intcode_vm::core::{opcodes, vm::{Machine, Status}};
    ///
    /// let mut machine = Machine::parse("1101,2,3,5,99").expect("valid program");
    /// let instruction = machine.step().expect("step failed").expect("instruction executed");
    /// assert_eq!(instruction.opcode, opcodes::ADD);
    /// assert_eq!(machine.ip(), 4);
    ///
    /// machine.step().expect("step failed");
    /// assert_eq!(machine.status(), Status::Halted);
    /// assert!(machine.step().expect("step failed").is_none());
    /// ```
    pub fn step(&mut self) -> Result<Option<Instruction>, Error> {
        if self.status == Status::Halted {
            return Ok(None);
        }

        let instruction = self._step()?;
        if instruction.is_some() && self.status == Status::BlockedOnInput {
            self.status = Status::Running;
        }
        Ok(instruction)
    }

    /// Runs until the next suspension point: an output, a block on input, or a halt.
    ///
    /// This is the poll-style counterpart of [`Machine::run`]. A halted machine reports
    /// [`Event::Halted`] immediately, and a blocked machine with no pending input reports
    /// [`Event::BlockedOnInput`] without executing anything.
    ///
    /// ```
    /// use intcode_vm::core::{types::word, vm::{Event, Machine}};
    ///
    /// let mut machine = Machine::parse("104,7,3,0,99").expect("valid program");
    /// assert_eq!(machine.resume().expect("resume failed"), Event::Output(word(7)));
    /// assert_eq!(machine.resume().expect("resume failed"), Event::BlockedOnInput);
    /// machine.push_input(word(1));
    /// assert_eq!(machine.resume().expect("resume failed"), Event::Halted);
    /// ```
    pub fn resume(&mut self) -> Result<Event, Error> {
        loop {
            match self.step()? {
                Some(Instruction { output: Some(value), .. }) => return Ok(Event::Output(value)),
                Some(_) => {}
                None => {
                    return Ok(match self.status {
                        Status::Halted => Event::Halted,
                        _ => {
                            trace!(ip = self.instruction, "blocked on input");
                            Event::BlockedOnInput
                        }
                    })
                }
            }
        }
    }

    /// Runs the machine, returning a lazy sequence of its outputs.
    ///
    /// The sequence ends when the machine halts or blocks on input; check [`Machine::status`]
    /// afterwards to tell which. Calling `run` on a halted machine yields nothing.
    ///
    /// ```
    /// use intcode_vm::core::{types::{word, words}, vm::{Machine, Status}};
    ///
    /// let mut machine = Machine::parse("3,9,8,9,10,9,4,9,99,-1,8").expect("valid program");
    /// assert_eq!(machine.run().count(), 0);
    /// assert_eq!(machine.status(), Status::BlockedOnInput);
    ///
    /// machine.push_input(word(8));
    /// let outputs = machine.run().collect::<Result<Vec<_>, _>>().expect("run failed");
    /// assert_eq!(outputs, words(&[1]));
    /// assert_eq!(machine.status(), Status::Halted);
    /// ```
    pub fn run(&mut self) -> Outputs<'_> {
        Outputs::new(self)
    }

    /// Executes until the machine halts or blocks on input, collecting every output.
    ///
    /// ```
    /// use intcode_vm::core::{types::word, vm::{Machine, Status}};
    ///
    /// let mut machine = Machine::parse("1,0,0,0,99").expect("valid program");
    /// let result = machine.execute().expect("execution failed");
    /// assert_eq!(result.status, Status::Halted);
    /// assert_eq!(machine.read(0), word(2));
    /// ```
    pub fn execute(&mut self) -> Result<ExecutionResult, Error> {
        let outputs = self.run().collect::<Result<Vec<Word>, Error>>()?;

        Ok(ExecutionResult { outputs, status: self.status, cycles: self.cycles })
    }

    /// View the next `n` events without executing them on this machine.
    ///
    /// A clone is run instead; stops early at a block or halt.
    ///
    /// ```
    /// use intcode_vm::core::{types::word, vm::{Event, Machine}};
    ///
    /// let machine = Machine::parse("104,1,104,2,99").expect("valid program");
    /// let events = machine.peek(5).expect("peek failed");
    /// assert_eq!(events, vec![Event::Output(word(1)), Event::Output(word(2)), Event::Halted]);
    /// assert_eq!(machine.ip(), 0);
    /// ```
    pub fn peek(&self, n: usize) -> Result<Vec<Event>, Error> {
        let mut machine = self.clone();
        let mut events = Vec::with_capacity(n);

        for _ in 0..n {
            let event = machine.resume()?;
            events.push(event);
            if !matches!(event, Event::Output(_)) {
                break;
            }
        }

        Ok(events)
    }
}
