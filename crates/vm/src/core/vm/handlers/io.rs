use tracing::trace;

use crate::{core::opcodes::Decoded, error::Error};

use super::super::{
    core::Machine,
    execution::{Instruction, Status},
};

/// IN - Consume the next input value and store it through the operand.
///
/// With an empty queue the machine blocks instead: nothing is consumed, the instruction pointer
/// stays on this instruction, and `Ok(None)` is returned.
pub fn input(machine: &mut Machine, decoded: &Decoded) -> Result<Option<Instruction>, Error> {
    let target = machine.write_target(decoded, 1)?;

    let value = match machine.input.pop() {
        Some(value) => value,
        None => {
            machine.status = Status::BlockedOnInput;
            return Ok(None);
        }
    };

    trace!(ip = machine.instruction, value = %value, "consumed input");
    Ok(Some(machine.store_and_advance(decoded, Vec::new(), target, value)))
}

/// OUT - Emit the operand
pub fn output(machine: &mut Machine, decoded: &Decoded) -> Result<Instruction, Error> {
    let value = machine.read_operand(decoded, 1)?;
    let mut instruction = machine.advance(decoded, vec![value]);
    instruction.output = Some(value);
    Ok(instruction)
}
