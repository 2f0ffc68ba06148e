use crate::{
    core::{
        opcodes::Decoded,
        types::{word, Word},
    },
    error::Error,
};

use super::super::{core::Machine, execution::Instruction};

fn compare(
    machine: &mut Machine,
    decoded: &Decoded,
    predicate: impl FnOnce(&Word, &Word) -> bool,
) -> Result<Instruction, Error> {
    let a = machine.read_operand(decoded, 1)?;
    let b = machine.read_operand(decoded, 2)?;
    let target = machine.write_target(decoded, 3)?;
    let result = word(predicate(&a, &b) as i64);

    Ok(machine.store_and_advance(decoded, vec![a, b], target, result))
}

/// LT - Less than comparison
pub fn lt(machine: &mut Machine, decoded: &Decoded) -> Result<Instruction, Error> {
    compare(machine, decoded, |a, b| a < b)
}

/// EQ - Equality comparison
pub fn eq(machine: &mut Machine, decoded: &Decoded) -> Result<Instruction, Error> {
    compare(machine, decoded, |a, b| a == b)
}

#[cfg(test)]
mod tests {
    use crate::core::types::words;

    use super::*;

    #[test]
    fn test_lt_signed() {
        let mut machine = Machine::from_words(&words(&[1107, -5, 3, 4]));
        let decoded = Decoded::decode(0, word(1107)).expect("failed to decode");
        lt(&mut machine, &decoded).expect("lt failed");

        assert_eq!(machine.read(4), word(1));
    }

    #[test]
    fn test_lt_equal_is_false() {
        let mut machine = Machine::from_words(&words(&[1107, 3, 3, 0]));
        let decoded = Decoded::decode(0, word(1107)).expect("failed to decode");
        lt(&mut machine, &decoded).expect("lt failed");

        assert_eq!(machine.read(0), word(0));
    }

    #[test]
    fn test_eq() {
        let mut machine = Machine::from_words(&words(&[1108, 8, 8, 5, 99, -1]));
        let decoded = Decoded::decode(0, word(1108)).expect("failed to decode");
        let instruction = eq(&mut machine, &decoded).expect("eq failed");

        assert_eq!(instruction.write, Some((5, word(1))));
        assert_eq!(instruction.next, 4);
    }
}
