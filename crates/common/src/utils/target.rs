use eyre::{eyre, Result};
use tracing::debug;

use crate::{constants::PROGRAM_REGEX, utils::io::file::read_file};

/// Resolve a command line target into program text.
///
/// A target that is itself a comma-separated list of integers is returned as-is; anything else
/// is treated as a path to a file holding the program.
///
/// ```
/// use intcode_common::utils::target::read_target;
///
/// let source = read_target("1,0,0,0,99").expect("inline program");
/// assert_eq!(source, "1,0,0,0,99");
/// ```
pub fn read_target(target: &str) -> Result<String> {
    if PROGRAM_REGEX.is_match(target).unwrap_or(false) {
        debug!("target is an inline program");
        return Ok(target.to_string());
    }

    debug!("reading program from '{}'", target);
    read_file(target).map_err(|e| eyre!("failed to read program from '{}': {}", target, e))
}
