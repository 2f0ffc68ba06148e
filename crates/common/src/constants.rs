use fancy_regex::Regex;
use lazy_static::lazy_static;

/// The file name the disassembler writes to when no name is given.
pub const DEFAULT_ASSEMBLY_FILENAME: &str = "disassembled.asm";

lazy_static! {
    /// The following regex is used to detect an inline program: comma-separated base-10 integers
    pub static ref PROGRAM_REGEX: Regex =
        Regex::new(r"^\s*-?\d+(?:\s*,\s*-?\d+)*\s*$").expect("failed to compile regex");

    /// The following regex is used to split a list of values on commas and whitespace
    pub static ref VALUE_SEPARATOR_REGEX: Regex =
        Regex::new(r"[,\s]+").expect("failed to compile regex");
}
