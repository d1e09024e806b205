use std::fmt;

use strum_macros::{Display, EnumIter};

const ZERO_FLAG_BYTE_POSITION: u8 = 7;
const SUBTRACT_FLAG_BYTE_POSITION: u8 = 6;
const HALF_CARRY_FLAG_BYTE_POSITION: u8 = 5;
const CARRY_FLAG_BYTE_POSITION: u8 = 4;

/// Bits 0-3 of F are hardwired to zero on real hardware.
pub const FLAG_BITS_MASK: u8 = 0xF0;

/// A single condition flag in the F register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Flag {
    Zero,
    Subtract,
    HalfCarry,
    Carry,
}

impl Flag {
    pub const fn bit_position(self) -> u8 {
        match self {
            Flag::Zero => ZERO_FLAG_BYTE_POSITION,
            Flag::Subtract => SUBTRACT_FLAG_BYTE_POSITION,
            Flag::HalfCarry => HALF_CARRY_FLAG_BYTE_POSITION,
            Flag::Carry => CARRY_FLAG_BYTE_POSITION,
        }
    }

    pub const fn mask(self) -> u8 {
        1 << self.bit_position()
    }
}

/// Decoded view of the F register. Only the upper nibble has meaning.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Flags {
    /// This bit is set when the result of a math op is zero or two values match when using the CP
    /// instruction.
    pub zero: bool,

    /// This bit is set if a subtraction was performed in the last math operation.
    pub subtract: bool,

    /// This bit is set if a carry occurred from the lower nibble in the last math operation.
    pub half_carry: bool,

    /// This bit is set if a carry occurred from the last math operation or if register A is the
    /// smaller value when executing the CP instruction.
    pub carry: bool,
}

impl Flags {
    pub fn get(&self, flag: Flag) -> bool {
        match flag {
            Flag::Zero => self.zero,
            Flag::Subtract => self.subtract,
            Flag::HalfCarry => self.half_carry,
            Flag::Carry => self.carry,
        }
    }

    pub fn set(&mut self, flag: Flag, value: bool) {
        match flag {
            Flag::Zero => self.zero = value,
            Flag::Subtract => self.subtract = value,
            Flag::HalfCarry => self.half_carry = value,
            Flag::Carry => self.carry = value,
        }
    }
}

impl std::convert::From<Flags> for u8 {
    fn from(flags: Flags) -> u8 {
        u8::from(flags.zero) << ZERO_FLAG_BYTE_POSITION
            | u8::from(flags.subtract) << SUBTRACT_FLAG_BYTE_POSITION
            | u8::from(flags.half_carry) << HALF_CARRY_FLAG_BYTE_POSITION
            | u8::from(flags.carry) << CARRY_FLAG_BYTE_POSITION
    }
}

impl std::convert::From<u8> for Flags {
    fn from(byte: u8) -> Self {
        let zero = ((byte >> ZERO_FLAG_BYTE_POSITION) & 0b1) == 1;
        let subtract = ((byte >> SUBTRACT_FLAG_BYTE_POSITION) & 0b1) == 1;
        let half_carry = ((byte >> HALF_CARRY_FLAG_BYTE_POSITION) & 0b1) == 1;
        let carry = ((byte >> CARRY_FLAG_BYTE_POSITION) & 0b1) == 1;

        Self {
            zero,
            subtract,
            half_carry,
            carry,
        }
    }
}

/// Renders as `ZNHC`, with `-` in place of each cleared flag.
impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = |set: bool, c: char| if set { c } else { '-' };
        write!(
            f,
            "{}{}{}{}",
            symbol(self.zero, 'Z'),
            symbol(self.subtract, 'N'),
            symbol(self.half_carry, 'H'),
            symbol(self.carry, 'C'),
        )
    }
}
