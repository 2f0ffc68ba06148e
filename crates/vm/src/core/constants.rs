/// The default number of words a machine's memory may grow to (4 Mi words).
pub const DEFAULT_MEMORY_LIMIT: usize = 1 << 22;

/// The most parameters any Intcode instruction takes.
pub const MAX_PARAMETERS: usize = 3;

/// The ASCII code pushed after each line of text by ASCII-protocol drivers.
pub const NEWLINE: i64 = 10;
