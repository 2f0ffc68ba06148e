/// Input/output utilities for file manipulation.
pub mod io;

/// String manipulation and formatting utilities.
pub mod strings;

/// Resolving command line targets into program text.
pub mod target;

/// Time manipulation and formatting utilities.
pub mod time;
