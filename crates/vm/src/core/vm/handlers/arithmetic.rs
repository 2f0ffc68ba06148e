use crate::{
    core::{opcodes::Decoded, types::Word},
    error::Error,
};

use super::super::{core::Machine, execution::Instruction};

/// Applies `op` to the first two operands and stores the result through the third.
fn binary(
    machine: &mut Machine,
    decoded: &Decoded,
    op: impl FnOnce(Word, Word) -> Option<Word>,
) -> Result<Instruction, Error> {
    let a = machine.read_operand(decoded, 1)?;
    let b = machine.read_operand(decoded, 2)?;
    let target = machine.write_target(decoded, 3)?;
    let result =
        op(a, b).ok_or(Error::Overflow { ip: machine.instruction, opcode: decoded.opcode })?;

    Ok(machine.store_and_advance(decoded, vec![a, b], target, result))
}

/// ADD - Addition operation
pub fn add(machine: &mut Machine, decoded: &Decoded) -> Result<Instruction, Error> {
    binary(machine, decoded, |a, b| a.checked_add(b))
}

/// MUL - Multiplication operation
pub fn mul(machine: &mut Machine, decoded: &Decoded) -> Result<Instruction, Error> {
    binary(machine, decoded, |a, b| a.checked_mul(b))
}
