use std::fmt::{self, Display};

use crate::{
    core::{constants::MAX_PARAMETERS, types::Word},
    error::Error,
};

use super::OpCodeInfo;

/// The addressing mode of a single instruction parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mode {
    /// The parameter is the address of the operand.
    #[default]
    Position,

    /// The parameter is the operand itself. Never valid for a write target.
    Immediate,

    /// The parameter is an offset from the relative base to the operand's address.
    Relative,
}

impl TryFrom<u64> for Mode {
    type Error = u64;

    fn try_from(digit: u64) -> Result<Self, Self::Error> {
        match digit {
            0 => Ok(Mode::Position),
            1 => Ok(Mode::Immediate),
            2 => Ok(Mode::Relative),
            _ => Err(digit),
        }
    }
}

impl Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Position => write!(f, "position"),
            Mode::Immediate => write!(f, "immediate"),
            Mode::Relative => write!(f, "relative"),
        }
    }
}

/// A decoded instruction word: the opcode, its static info, and one [`Mode`] per parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decoded {
    /// The opcode, i.e. the two low-order digits of the instruction word.
    pub opcode: u8,

    /// Static information about the opcode.
    pub info: OpCodeInfo,

    /// The addressing mode of each parameter. Unused slots are [`Mode::Position`].
    pub modes: [Mode; MAX_PARAMETERS],
}

impl Decoded {
    /// Decodes the instruction word `word`, found at address `ip`.
    ///
    /// Mode digits are read least-significant-first from `word / 100`, one per parameter the
    /// opcode takes; missing digits are `0`. Decoding fails if the opcode is unknown, a mode
    /// digit is not 0, 1, or 2, or a write target is in immediate mode.
    ///
    /// ```
    /// use intcode_vm::core::{
    ///     opcodes::{Decoded, Mode, MUL},
    ///     types::word,
    /// };
    ///
    /// let decoded = Decoded::decode(0, word(1002)).expect("valid instruction");
    /// assert_eq!(decoded.opcode, MUL);
    /// assert_eq!(decoded.mode(1), Mode::Position);
    /// assert_eq!(decoded.mode(2), Mode::Immediate);
    /// assert_eq!(decoded.mode(3), Mode::Position);
    /// ```
    pub fn decode(ip: usize, word: Word) -> Result<Decoded, Error> {
        // negative or oversized words can never hold a valid opcode
        let raw = u64::try_from(word).map_err(|_| Error::InvalidOpcode { ip, word })?;
        let opcode = (raw % 100) as u8;
        let info = OpCodeInfo::lookup(opcode).ok_or(Error::InvalidOpcode { ip, word })?;

        let mut digits = raw / 100;
        let mut modes = [Mode::Position; MAX_PARAMETERS];
        for (index, mode) in modes.iter_mut().enumerate().take(info.parameters() as usize) {
            *mode = Mode::try_from(digits % 10).map_err(|digit| Error::InvalidMode {
                ip,
                word,
                parameter: index + 1,
                mode: digit,
            })?;
            digits /= 10;
        }

        if let Some(parameter) = info.write_parameter() {
            if modes[parameter - 1] == Mode::Immediate {
                return Err(Error::InvalidWriteMode { ip, opcode, parameter });
            }
        }

        Ok(Decoded { opcode, info, modes })
    }

    /// The mode of the 1-indexed `parameter`.
    #[inline]
    pub fn mode(&self, parameter: usize) -> Mode {
        self.modes.get(parameter.wrapping_sub(1)).copied().unwrap_or_default()
    }

    /// The name of the decoded opcode.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.info.name()
    }
}

#[cfg(test)]
mod tests {
    use crate::core::{opcodes, types::word};

    use super::*;

    #[test]
    fn test_decode_no_modes() {
        let decoded = Decoded::decode(0, word(1)).expect("failed to decode");
        assert_eq!(decoded.opcode, opcodes::ADD);
        assert_eq!(decoded.modes, [Mode::Position; 3]);
    }

    #[test]
    fn test_decode_all_modes() {
        let decoded = Decoded::decode(0, word(21107)).expect("failed to decode");
        assert_eq!(decoded.opcode, opcodes::LT);
        assert_eq!(decoded.modes, [Mode::Immediate, Mode::Immediate, Mode::Relative]);
    }

    #[test]
    fn test_decode_halt() {
        let decoded = Decoded::decode(0, word(99)).expect("failed to decode");
        assert_eq!(decoded.opcode, opcodes::HALT);
        assert!(decoded.info.terminating());
    }

    #[test]
    fn test_decode_relative_input() {
        let decoded = Decoded::decode(0, word(203)).expect("failed to decode");
        assert_eq!(decoded.opcode, opcodes::IN);
        assert_eq!(decoded.mode(1), Mode::Relative);
    }

    #[test]
    fn test_decode_unknown_opcode() {
        assert_eq!(Decoded::decode(7, word(50)), Err(Error::InvalidOpcode { ip: 7, word: word(50) }));
        assert_eq!(Decoded::decode(0, word(0)), Err(Error::InvalidOpcode { ip: 0, word: word(0) }));
    }

    #[test]
    fn test_decode_negative_word() {
        assert_eq!(
            Decoded::decode(3, word(-1)),
            Err(Error::InvalidOpcode { ip: 3, word: word(-1) })
        );
    }

    #[test]
    fn test_decode_invalid_mode_digit() {
        assert_eq!(
            Decoded::decode(0, word(1301)),
            Err(Error::InvalidMode { ip: 0, word: word(1301), parameter: 1, mode: 3 })
        );
        assert_eq!(
            Decoded::decode(4, word(3101)),
            Err(Error::InvalidMode { ip: 4, word: word(3101), parameter: 2, mode: 3 })
        );
        assert_eq!(
            Decoded::decode(0, word(90001)),
            Err(Error::InvalidMode { ip: 0, word: word(90001), parameter: 3, mode: 9 })
        );
    }

    #[test]
    fn test_decode_immediate_write_target() {
        assert_eq!(
            Decoded::decode(0, word(11101)),
            Err(Error::InvalidWriteMode { ip: 0, opcode: opcodes::ADD, parameter: 3 })
        );
        assert_eq!(
            Decoded::decode(0, word(103)),
            Err(Error::InvalidWriteMode { ip: 0, opcode: opcodes::IN, parameter: 1 })
        );
    }

    #[test]
    fn test_decode_immediate_read_is_fine() {
        let decoded = Decoded::decode(0, word(104)).expect("failed to decode");
        assert_eq!(decoded.mode(1), Mode::Immediate);
    }
}
