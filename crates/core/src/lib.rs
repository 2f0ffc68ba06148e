//! The Core module serves as the central integration point for the Intcode toolkit,
//! providing access to the machine and the tools built on top of it.
//!
//! This module re-exports the public interfaces of all the tool-specific crates,
//! making it easier to use them in other projects.

// Re-export all tool-specific modules
pub use intcode_disassembler;
pub use intcode_runner;
pub use intcode_vm;
