//! The Runner module drives an Intcode machine from the command line.
//!
//! It loads a program, seeds the machine's input queue, and streams outputs to a writer. In
//! interactive mode, input is read from a reader whenever the machine blocks.

/// Error types for the runner module
pub mod error;

mod core;
mod interfaces;

// re-export the public interface
pub use core::{run, RunResult};
pub use error::Error;
pub use interfaces::{RunArgs, RunArgsBuilder};
