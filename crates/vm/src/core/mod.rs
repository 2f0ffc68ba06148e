/// Constants used throughout the machine implementation
pub mod constants;

/// Pending input values
pub mod input;

/// Memory implementation for machine memory management
pub mod memory;

/// Opcode definitions and instruction decoding
pub mod opcodes;

/// Program text parsing
pub mod program;

/// Common types and utilities for the machine
pub mod types;

/// Core virtual machine implementation
pub mod vm;
