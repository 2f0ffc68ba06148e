use std::{
    fmt::{self, Display},
    str::FromStr,
};

use tracing::debug;

use super::types::Word;

/// Errors raised while parsing the comma-separated program encoding.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgramError {
    /// The program text contains no values.
    #[error("program is empty")]
    Empty,

    /// A value is not a base-10 integer.
    #[error("value {index} ('{token}') is not a base-10 integer")]
    InvalidValue {
        /// 0-indexed position of the value in the program
        index: usize,
        /// The offending text
        token: String,
    },
}

/// An Intcode program: the initial contents of memory, starting at address 0.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Program {
    words: Vec<Word>,
}

impl Program {
    /// Parses a program from its text encoding: a single line of comma-separated base-10
    /// integers. Surrounding whitespace, whitespace around values, and a trailing newline are
    /// ignored.
    ///
    /// ```
    /// use intcode_vm::core::{program::Program, types::words};
    ///
    /// let program = Program::parse("1,9,10,3,2,3,11,0,99,30,40,50\n").expect("valid program");
    /// assert_eq!(program.words(), &words(&[1, 9, 10, 3, 2, 3, 11, 0, 99, 30, 40, 50])[..]);
    /// ```
    pub fn parse(text: &str) -> Result<Program, ProgramError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ProgramError::Empty);
        }

        let words = text
            .split(',')
            .enumerate()
            .map(|(index, token)| {
                let token = token.trim();
                let invalid = || ProgramError::InvalidValue { index, token: token.to_string() };
                if token.is_empty() {
                    return Err(invalid());
                }
                Word::from_dec_str(token).map_err(|_| invalid())
            })
            .collect::<Result<Vec<Word>, ProgramError>>()?;

        debug!("parsed program of {} words", words.len());
        Ok(Program { words })
    }

    /// Creates a program from already-decoded words.
    pub fn from_words(words: Vec<Word>) -> Program {
        Program { words }
    }

    /// The program's words, in address order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// The number of words in the program.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the program has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl FromStr for Program {
    type Err = ProgramError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Program::parse(s)
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let encoded = self.words.iter().map(|word| word.to_string()).collect::<Vec<String>>();
        write!(f, "{}", encoded.join(","))
    }
}

impl From<Vec<Word>> for Program {
    fn from(words: Vec<Word>) -> Self {
        Program::from_words(words)
    }
}

#[cfg(test)]
mod tests {
    use crate::core::types::words;

    use super::*;

    #[test]
    fn test_parse_simple() {
        let program = Program::parse("1,0,0,0,99").expect("failed to parse program");
        assert_eq!(program.words(), &words(&[1, 0, 0, 0, 99])[..]);
        assert_eq!(program.len(), 5);
    }

    #[test]
    fn test_parse_negative_and_whitespace() {
        let program = Program::parse("  1101, 100 ,-1,4,0\n").expect("failed to parse program");
        assert_eq!(program.words(), &words(&[1101, 100, -1, 4, 0])[..]);
    }

    #[test]
    fn test_parse_large_values() {
        let program = Program::parse("104,1125899906842624,99").expect("failed to parse program");
        assert_eq!(program.words()[1].to_string(), "1125899906842624");
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(Program::parse(""), Err(ProgramError::Empty));
        assert_eq!(Program::parse(" \n"), Err(ProgramError::Empty));
    }

    #[test]
    fn test_parse_invalid_value() {
        assert_eq!(
            Program::parse("1,2,x,4"),
            Err(ProgramError::InvalidValue { index: 2, token: "x".to_string() })
        );
        assert_eq!(
            Program::parse("1,,99"),
            Err(ProgramError::InvalidValue { index: 1, token: String::new() })
        );
    }

    #[test]
    fn test_display_reencodes() {
        let text = "109,1,204,-1,1001,100,1,100,1008,100,16,101,1006,101,0,99";
        let program = text.parse::<Program>().expect("failed to parse program");
        assert_eq!(program.to_string(), text);
    }
}
