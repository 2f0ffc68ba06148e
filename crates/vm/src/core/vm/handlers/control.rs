use tracing::debug;

use crate::{
    core::{opcodes::Decoded, types::Word},
    error::Error,
};

use super::super::{
    core::Machine,
    execution::{Instruction, Status},
};

/// Sets the instruction pointer to the second operand when `taken`, otherwise advances.
fn branch(
    machine: &mut Machine,
    decoded: &Decoded,
    taken: impl FnOnce(&Word) -> bool,
) -> Result<Instruction, Error> {
    let condition = machine.read_operand(decoded, 1)?;
    let destination = machine.read_operand(decoded, 2)?;

    if taken(&condition) {
        // validate before anything moves
        let target = machine.address(destination)?;
        let mut instruction = machine.advance(decoded, vec![condition, destination]);
        machine.instruction = target;
        instruction.next = target;
        return Ok(instruction);
    }

    Ok(machine.advance(decoded, vec![condition, destination]))
}

/// JNZ - Jump if the first operand is non-zero
pub fn jump_if_true(machine: &mut Machine, decoded: &Decoded) -> Result<Instruction, Error> {
    branch(machine, decoded, |condition| !condition.is_zero())
}

/// JZ - Jump if the first operand is zero
pub fn jump_if_false(machine: &mut Machine, decoded: &Decoded) -> Result<Instruction, Error> {
    branch(machine, decoded, |condition| condition.is_zero())
}

/// ARB - Add the operand to the relative base
pub fn adjust_base(machine: &mut Machine, decoded: &Decoded) -> Result<Instruction, Error> {
    let offset = machine.read_operand(decoded, 1)?;
    let base = machine
        .relative_base
        .checked_add(offset)
        .ok_or(Error::Overflow { ip: machine.instruction, opcode: decoded.opcode })?;

    machine.relative_base = base;
    Ok(machine.advance(decoded, vec![offset]))
}

/// HALT - Halts execution. The instruction pointer stays on the HALT instruction.
pub fn halt(machine: &mut Machine, decoded: &Decoded) -> Instruction {
    debug!(ip = machine.instruction, cycles = machine.cycles, "machine halted");
    machine.status = Status::Halted;
    Instruction {
        instruction: machine.instruction,
        opcode: decoded.opcode,
        inputs: Vec::new(),
        write: None,
        output: None,
        next: machine.instruction,
    }
}

#[cfg(test)]
mod tests {
    use crate::core::types::{word, words};

    use super::*;

    #[test]
    fn test_jump_taken() {
        let mut machine = Machine::from_words(&words(&[1105, 1, 9]));
        let decoded = Decoded::decode(0, word(1105)).expect("failed to decode");
        let instruction = jump_if_true(&mut machine, &decoded).expect("jump failed");

        assert_eq!(machine.ip(), 9);
        assert_eq!(instruction.next, 9);
    }

    #[test]
    fn test_jump_not_taken() {
        let mut machine = Machine::from_words(&words(&[1106, 7, 9]));
        let decoded = Decoded::decode(0, word(1106)).expect("failed to decode");
        jump_if_false(&mut machine, &decoded).expect("jump failed");

        assert_eq!(machine.ip(), 3);
    }

    #[test]
    fn test_jump_negative_target() {
        let mut machine = Machine::from_words(&words(&[1106, 0, -4]));
        let decoded = Decoded::decode(0, word(1106)).expect("failed to decode");

        assert_eq!(
            jump_if_false(&mut machine, &decoded),
            Err(Error::MemoryFault { ip: 0, address: word(-4) })
        );
        assert_eq!(machine.ip(), 0);
    }

    #[test]
    fn test_adjust_base_accumulates() {
        let mut machine = Machine::from_words(&words(&[109, 19, 109, -7]));
        let decoded = Decoded::decode(0, word(109)).expect("failed to decode");
        adjust_base(&mut machine, &decoded).expect("arb failed");
        adjust_base(&mut machine, &decoded).expect("arb failed");

        assert_eq!(machine.relative_base(), word(12));
        assert_eq!(machine.ip(), 4);
    }

    #[test]
    fn test_halt_keeps_ip() {
        let mut machine = Machine::from_words(&words(&[99]));
        let decoded = Decoded::decode(0, word(99)).expect("failed to decode");
        halt(&mut machine, &decoded);

        assert_eq!(machine.status(), Status::Halted);
        assert_eq!(machine.ip(), 0);
    }
}
