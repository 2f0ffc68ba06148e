//! The Intcode machine and its execution logic,
//! organized into submodules for better maintainability.

mod core;
mod execution;

/// Opcode handlers organized by category.
pub mod handlers;

pub use self::core::Machine;
pub use execution::{Event, ExecutionResult, Instruction, Outputs, Status};
