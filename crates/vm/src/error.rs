//! Error types for the Intcode machine

use crate::core::{opcodes::opcode_name, program::ProgramError, types::Word};

/// Fatal conditions raised while decoding or executing an Intcode program.
///
/// Every variant aborts the current run invocation and leaves the machine exactly as it was
/// before the faulting instruction was decoded. A machine waiting for input is *not* an error;
/// see [`Status::BlockedOnInput`](crate::core::vm::Status::BlockedOnInput).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The instruction word does not hold a known opcode.
    #[error("invalid opcode in word {word} at address {ip}")]
    InvalidOpcode {
        /// Address of the instruction word
        ip: usize,
        /// The raw instruction word
        word: Word,
    },

    /// A parameter mode digit is not 0, 1, or 2.
    #[error("invalid mode {mode} for parameter {parameter} of word {word} at address {ip}")]
    InvalidMode {
        /// Address of the instruction word
        ip: usize,
        /// The raw instruction word
        word: Word,
        /// The 1-indexed parameter carrying the bad digit
        parameter: usize,
        /// The offending digit
        mode: u64,
    },

    /// A write target parameter was decoded in immediate mode.
    #[error(
        "parameter {parameter} of {} at address {ip} is a write target and cannot be immediate",
        name(.opcode)
    )]
    InvalidWriteMode {
        /// Address of the instruction word
        ip: usize,
        /// The decoded opcode
        opcode: u8,
        /// The 1-indexed write parameter
        parameter: usize,
    },

    /// An operand or jump target resolved to a negative address.
    #[error("memory fault: negative address {address} resolved at {ip}")]
    MemoryFault {
        /// Address of the instruction word
        ip: usize,
        /// The resolved address
        address: Word,
    },

    /// A write target lies beyond the memory growth limit.
    #[error("address {address} resolved at {ip} exceeds the memory limit of {limit} words")]
    MemoryLimitExceeded {
        /// Address of the instruction word
        ip: usize,
        /// The resolved address
        address: Word,
        /// The memory growth limit, in words
        limit: usize,
    },

    /// An arithmetic result does not fit in a [`Word`].
    #[error("arithmetic overflow in {} at address {ip}", name(.opcode))]
    Overflow {
        /// Address of the instruction word
        ip: usize,
        /// The opcode that overflowed
        opcode: u8,
    },

    /// The program text could not be parsed.
    #[error("invalid program: {0}")]
    Program(#[from] ProgramError),
}

fn name(opcode: &u8) -> &'static str {
    opcode_name(*opcode)
}

impl Error {
    /// The address of the faulting instruction, if the error was raised during execution.
    pub fn ip(&self) -> Option<usize> {
        match self {
            Error::InvalidOpcode { ip, .. } |
            Error::InvalidMode { ip, .. } |
            Error::InvalidWriteMode { ip, .. } |
            Error::MemoryFault { ip, .. } |
            Error::MemoryLimitExceeded { ip, .. } |
            Error::Overflow { ip, .. } => Some(*ip),
            Error::Program(_) => None,
        }
    }
}
