//! Common utilities and constants used across the Intcode workspace.
//!
//! This crate provides shared functionality for the Intcode toolkit, including file IO,
//! program target resolution, and helpers for the ASCII output protocol.

/// Constants used throughout the Intcode codebase.
pub mod constants;

/// General utility functions and types for common tasks.
pub mod utils;
