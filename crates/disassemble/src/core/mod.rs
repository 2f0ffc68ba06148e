use std::time::Instant;

use crate::{error::Error, interfaces::DisassemblerArgs};
use intcode_common::utils::target::read_target;
use intcode_vm::core::{
    opcodes::{Decoded, Mode},
    program::Program,
    types::Word,
};
use tracing::{debug, info};

/// Disassembles an Intcode program into readable assembly instructions
///
/// Every word is decoded as an instruction where possible. Operands are rendered as `[addr]` in
/// position mode, as the bare value in immediate mode, and as `[rb+off]` in relative mode. Words
/// that are not valid instructions, or whose parameters would run past the end of the program,
/// are rendered as `DATA value` and occupy a single word.
///
/// ```
/// use intcode_disassembler::{disassemble, DisassemblerArgsBuilder};
///
/// let args = DisassemblerArgsBuilder::new()
///     .target("1002,4,3,4,33".to_string())
///     .decimal_counter(true)
///     .build()
///     .expect("failed to build args");
///
/// let assembly = disassemble(args).expect("failed to disassemble");
/// assert_eq!(assembly, "0 MUL [4], 3, [4]\n4 DATA 33\n");
/// ```
pub fn disassemble(args: DisassemblerArgs) -> Result<String, Error> {
    let start_time = Instant::now();

    // get the program from the target
    let source = read_target(&args.target)?;
    let program = Program::parse(&source).map_err(intcode_vm::Error::from)?;
    let words = program.words();

    let mut address = 0;
    let mut asm = String::new();
    while address < words.len() {
        let counter =
            if args.decimal_counter { address.to_string() } else { format!("{:06x}", address) };

        let (text, width) = match decode(words, address) {
            Some((decoded, operands)) => {
                if operands.is_empty() {
                    (decoded.name().to_string(), decoded.info.width())
                } else {
                    (format!("{} {}", decoded.name(), operands.join(", ")), decoded.info.width())
                }
            }
            None => (format!("DATA {}", words[address]), 1),
        };

        asm.push_str(&format!("{counter} {text}\n"));
        address += width;
    }

    info!("disassembled {} words successfully", words.len());
    debug!("disassembly took {:?}", start_time.elapsed());
    Ok(asm)
}

/// Decode the instruction at `address`, along with its rendered operands. Returns `None` if the
/// word is not an instruction or its parameters do not fit in the program.
fn decode(words: &[Word], address: usize) -> Option<(Decoded, Vec<String>)> {
    let decoded = Decoded::decode(address, words[address]).ok()?;
    let parameters = words.get(address + 1..address + decoded.info.width())?;

    let operands = parameters
        .iter()
        .enumerate()
        .map(|(index, parameter)| match decoded.mode(index + 1) {
            Mode::Position => format!("[{parameter}]"),
            Mode::Immediate => parameter.to_string(),
            Mode::Relative if parameter.is_negative() => format!("[rb{parameter}]"),
            Mode::Relative => format!("[rb+{parameter}]"),
        })
        .collect();

    Some((decoded, operands))
}

#[cfg(test)]
mod tests {
    use crate::DisassemblerArgsBuilder;

    use super::*;

    fn listing(target: &str, decimal_counter: bool) -> String {
        let args = DisassemblerArgsBuilder::new()
            .target(target.to_string())
            .decimal_counter(decimal_counter)
            .build()
            .expect("failed to build args");

        disassemble(args).expect("failed to disassemble")
    }

    #[test]
    fn test_disassemble_nominal() {
        let expected = String::from("000000 ADD [9], [10], [3]\n000004 MUL [3], [11], [0]\n000008 HALT\n000009 DATA 30\n00000a DATA 40\n00000b DATA 50\n");

        assert_eq!(listing("1,9,10,3,2,3,11,0,99,30,40,50", false), expected);
    }

    #[test]
    fn test_disassemble_decimal_counter() {
        let expected = String::from("0 ADD [9], [10], [3]\n4 MUL [3], [11], [0]\n8 HALT\n9 DATA 30\n10 DATA 40\n11 DATA 50\n");

        assert_eq!(listing("1,9,10,3,2,3,11,0,99,30,40,50", true), expected);
    }

    #[test]
    fn test_disassemble_relative_operands() {
        let expected = String::from(
            "0 ARB 1\n2 OUT [rb-1]\n4 ADD [100], 1, [100]\n8 EQ [100], 16, [rb+101]\n12 HALT\n",
        );

        assert_eq!(listing("109,1,204,-1,1001,100,1,100,21008,100,16,101,99", true), expected);
    }

    #[test]
    fn test_disassemble_truncated_instruction() {
        // the final ADD is missing its write parameter
        assert_eq!(listing("104,7,1101,1,2", true), "0 OUT 7\n2 DATA 1101\n3 DATA 1\n4 DATA 2\n");
    }

    #[test]
    fn test_disassemble_invalid_modes_are_data() {
        assert_eq!(listing("11101,1,1,0", true), "0 DATA 11101\n1 DATA 1\n2 DATA 1\n3 DATA 0\n");
    }

    #[test]
    fn test_disassemble_invalid_program() {
        let args = DisassemblerArgsBuilder::new()
            .target("/nonexistent/program.txt".to_string())
            .build()
            .expect("failed to build args");

        assert!(disassemble(args).is_err());
    }
}
