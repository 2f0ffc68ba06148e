//! The Disassembler module converts Intcode programs into human-readable assembly listings.
//!
//! Each word is decoded as an instruction where possible; words that do not decode, such as
//! data following a `HALT`, are listed as `DATA`.

/// Error types for the disassembler module
pub mod error;

mod core;
mod interfaces;

// re-export the public interface
pub use core::disassemble;
pub use error::Error;
pub use interfaces::{DisassemblerArgs, DisassemblerArgsBuilder};
