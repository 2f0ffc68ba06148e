//! Intcode opcodes and related utilities.
//!
//! This module provides functionality for working with Intcode opcodes, including:
//! - Opcode information (names, parameter counts, write targets, control flow effects)
//! - Addressing modes and instruction word decoding

/// Addressing modes and instruction word decoding.
pub mod decode;
pub use decode::*;

/// Information about opcode, such as name, parameter count, and which parameter it writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct OpCodeInfo {
    /// Name
    name: &'static str,
    /// Number of parameters following the instruction word.
    parameters: u8,
    /// If the last parameter is a write target.
    writes: bool,
    /// If the opcode may set the instruction pointer directly.
    jumps: bool,
    /// If the opcode stops execution. aka HALT
    terminating: bool,
}

impl OpCodeInfo {
    /// Creates a new opcode info with the given name and default values.
    pub const fn new(name: &'static str) -> Self {
        Self { name, parameters: 0, writes: false, jumps: false, terminating: false }
    }

    /// Returns the name of the opcode.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the number of parameters.
    #[inline]
    pub const fn parameters(&self) -> u8 {
        self.parameters
    }

    /// Returns the number of words the instruction occupies, including the instruction word.
    #[inline]
    pub const fn width(&self) -> usize {
        1 + self.parameters as usize
    }

    /// Returns the 1-indexed parameter the opcode writes to, if any.
    #[inline]
    pub const fn write_parameter(&self) -> Option<usize> {
        if self.writes {
            Some(self.parameters as usize)
        } else {
            None
        }
    }

    /// Returns whether the opcode may jump.
    #[inline]
    pub const fn jumps(&self) -> bool {
        self.jumps
    }

    /// Returns whether the opcode is terminating.
    #[inline]
    pub const fn terminating(&self) -> bool {
        self.terminating
    }

    /// Look up the info for `opcode`, if it is part of the instruction set.
    ///
    /// ```
    /// use intcode_vm::core::opcodes::{OpCodeInfo, ADD};
    ///
    /// let info = OpCodeInfo::lookup(ADD).expect("ADD is a valid opcode");
    /// assert_eq!(info.name(), "ADD");
    /// assert_eq!(info.width(), 4);
    /// assert!(OpCodeInfo::lookup(50).is_none());
    /// ```
    #[inline]
    pub fn lookup(opcode: u8) -> Option<Self> {
        OPCODE_INFO_TABLE.get(opcode as usize).copied().flatten()
    }
}

/// Sets the number of parameters.
#[inline]
pub const fn parameters(mut op: OpCodeInfo, count: u8) -> OpCodeInfo {
    op.parameters = count;
    op
}

/// Marks the last parameter as a write target.
#[inline]
pub const fn writes(mut op: OpCodeInfo) -> OpCodeInfo {
    op.writes = true;
    op
}

/// Sets the jumps flag to true.
#[inline]
pub const fn jumps(mut op: OpCodeInfo) -> OpCodeInfo {
    op.jumps = true;
    op
}

/// Sets the terminating flag to true.
#[inline]
pub const fn terminating(mut op: OpCodeInfo) -> OpCodeInfo {
    op.terminating = true;
    op
}

/// Opcodes are the two low-order decimal digits of an instruction word.
const OPCODE_SPACE: usize = 100;

macro_rules! opcodes {
    ($($val:literal => $name:ident => $($modifier:ident $(( $($modifier_arg:expr),* ))?),*);* $(;)?) => {
        // create a constant for each opcode
        $(
            #[doc = concat!("The `", stringify!($val), "` (\"", stringify!($name),"\") opcode.")]
            pub const $name: u8 = $val;
        )*

        /// Maps each opcode to its info.
        pub const OPCODE_INFO_TABLE: [Option<OpCodeInfo>; OPCODE_SPACE] = {
            let mut map = [None; OPCODE_SPACE];
            let mut prev: u8 = 0;
            $(
                let val: u8 = $val;
                assert!(val > prev, "opcodes must be sorted in ascending order");
                prev = val;
                let info = OpCodeInfo::new(
                    stringify!($name)
                );
                $(
                let info = $modifier(info, $($($modifier_arg),*)?);
                )*
                map[$val] = Some(info);
            )*
            let _ = prev;
            map
        };

        /// Maps each opcode to its name. (So we dont need to load [`OpCodeInfo`] to get the name)
        pub const OPCODE_NAME_TABLE: [&'static str; OPCODE_SPACE] = {
            let mut map = ["unknown"; OPCODE_SPACE];
            $(
                map[$val] = stringify!($name);
            )*
            map
        };
    }
}

/// Get the name of an opcode.
///
/// ```
/// use intcode_vm::core::opcodes::opcode_name;
///
/// assert_eq!(opcode_name(9), "ARB");
/// assert_eq!(opcode_name(42), "unknown");
/// ```
#[inline]
pub fn opcode_name(opcode: u8) -> &'static str {
    OPCODE_NAME_TABLE.get(opcode as usize).copied().unwrap_or("unknown")
}

opcodes! {
    1 => ADD => parameters(3), writes;
    2 => MUL => parameters(3), writes;
    3 => IN => parameters(1), writes;
    4 => OUT => parameters(1);
    5 => JNZ => parameters(2), jumps;
    6 => JZ => parameters(2), jumps;
    7 => LT => parameters(3), writes;
    8 => EQ => parameters(3), writes;
    9 => ARB => parameters(1);

    99 => HALT => terminating;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_instruction_set() {
        let defined = (0..OPCODE_SPACE as u8)
            .filter(|opcode| OpCodeInfo::lookup(*opcode).is_some())
            .collect::<Vec<u8>>();
        assert_eq!(defined, vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 99]);
    }

    #[test]
    fn test_widths() {
        let widths = [ADD, MUL, IN, OUT, JNZ, JZ, LT, EQ, ARB, HALT]
            .iter()
            .map(|opcode| OpCodeInfo::lookup(*opcode).map(|info| info.width()))
            .collect::<Vec<Option<usize>>>();
        assert_eq!(
            widths,
            vec![Some(4), Some(4), Some(2), Some(2), Some(3), Some(3), Some(4), Some(4), Some(2), Some(1)]
        );
    }

    #[test]
    fn test_write_parameters() {
        assert_eq!(OpCodeInfo::lookup(ADD).and_then(|i| i.write_parameter()), Some(3));
        assert_eq!(OpCodeInfo::lookup(IN).and_then(|i| i.write_parameter()), Some(1));
        assert_eq!(OpCodeInfo::lookup(OUT).and_then(|i| i.write_parameter()), None);
        assert_eq!(OpCodeInfo::lookup(JZ).and_then(|i| i.write_parameter()), None);
    }

    #[test]
    fn test_flags() {
        assert!(OpCodeInfo::lookup(JNZ).is_some_and(|i| i.jumps()));
        assert!(OpCodeInfo::lookup(HALT).is_some_and(|i| i.terminating()));
        assert!(!OpCodeInfo::lookup(ARB).is_some_and(|i| i.jumps() || i.terminating()));
    }
}
