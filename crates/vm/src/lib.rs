//! Intcode virtual machine
//!
//! This crate provides a resumable Intcode machine: memory, instruction decoding, and a
//! poll-style execution loop that suspends on output, on input starvation, and on halt.

/// Core machine implementation, including memory, input, opcodes, and the execution loop
pub mod core;

/// Error types for the machine
pub mod error;

pub use error::Error;
