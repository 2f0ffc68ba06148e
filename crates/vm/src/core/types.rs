use alloy::primitives::I256;

/// A single Intcode value.
///
/// Intcode does not define an integer width, so words are 256-bit signed integers. Puzzle
/// programs stay well inside the signed 64-bit range, which leaves plenty of headroom for
/// intermediate products before [`Error::Overflow`](crate::Error::Overflow) is raised.
pub type Word = I256;

/// Converts a native integer into a [`Word`].
///
/// ```
/// use intcode_vm::core::types::word;
///
/// assert_eq!(word(-7).to_string(), "-7");
/// ```
#[inline]
pub fn word(value: i64) -> Word {
    Word::unchecked_from(value)
}

/// Converts a slice of native integers into [`Word`]s.
///
/// ```
/// use intcode_vm::core::types::{word, words};
///
/// assert_eq!(words(&[1, 0, 99]), vec![word(1), word(0), word(99)]);
/// ```
pub fn words(values: &[i64]) -> Vec<Word> {
    values.iter().map(|value| word(*value)).collect()
}
