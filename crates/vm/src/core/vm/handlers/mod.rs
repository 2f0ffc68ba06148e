//! Intcode opcode handlers organized by category.
//!
//! Each submodule contains handler functions for related opcodes. Handlers resolve every operand
//! before mutating the machine, so an instruction that faults leaves no trace.

/// Arithmetic operations: ADD, MUL
pub mod arithmetic;

/// Comparison operations: LT, EQ
pub mod comparison;

/// Control flow: JNZ, JZ, ARB, HALT
pub mod control;

/// Input and output: IN, OUT
pub mod io;
