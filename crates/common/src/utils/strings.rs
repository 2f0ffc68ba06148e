use std::fmt::Display;

use crate::constants::VALUE_SEPARATOR_REGEX;

/// The largest value rendered as a character by [`render_output`].
const MAX_ASCII: u8 = 127;

/// Render a single machine output.
///
/// In ASCII mode values in `0..=127` are rendered as the character with that code; anything
/// else, and every value outside ASCII mode, is rendered as a decimal integer on its own line.
///
/// ```
/// use intcode_common::utils::strings::render_output;
///
/// assert_eq!(render_output(72i64, true), "H");
/// assert_eq!(render_output(10i64, true), "\n");
/// assert_eq!(render_output(19349722i64, true), "19349722\n");
/// assert_eq!(render_output(72i64, false), "72\n");
/// ```
pub fn render_output<T>(value: T, ascii: bool) -> String
where
    T: Copy + Display,
    u8: TryFrom<T>,
{
    if ascii {
        if let Ok(code) = u8::try_from(value) {
            if code <= MAX_ASCII {
                return char::from(code).to_string();
            }
        }
    }

    format!("{value}\n")
}

/// Split a list of values separated by commas and/or whitespace, dropping empty pieces.
///
/// ```
/// use intcode_common::utils::strings::split_values;
///
/// assert_eq!(split_values("1, 2 3,,4\n"), vec!["1", "2", "3", "4"]);
/// assert!(split_values("  ").is_empty());
/// ```
pub fn split_values(s: &str) -> Vec<&str> {
    let mut values = Vec::new();
    let mut start = 0;

    for separator in VALUE_SEPARATOR_REGEX.find_iter(s).flatten() {
        values.push(&s[start..separator.start()]);
        start = separator.end();
    }
    values.push(&s[start..]);

    values.into_iter().filter(|value| !value.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_output_negative_in_ascii_mode() {
        assert_eq!(render_output(-1i64, true), "-1\n");
    }

    #[test]
    fn test_render_output_boundary() {
        assert_eq!(render_output(127i64, true), "\u{7f}");
        assert_eq!(render_output(128i64, true), "128\n");
    }

    #[test]
    fn test_split_values_single() {
        assert_eq!(split_values("42"), vec!["42"]);
    }
}
