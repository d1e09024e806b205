use std::convert::TryFrom;
use std::fmt;

use log::{debug, trace};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

use crate::cpu::flags::{Flag, Flags, FLAG_BITS_MASK};
use crate::error::{Error, Result};

/// The eight 8-bit CPU registers. Does not include the 16-bit SP and PC registers.
/// Some registers can be paired up and treated as 16-bit registers.
///
/// F is kept as a raw byte. Use [`Registers::flags`] for the decoded view.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Registers {
    pub a: u8,
    pub b: u8,
    pub c: u8,
    pub d: u8,
    pub e: u8,
    pub f: u8,
    pub h: u8,
    pub l: u8,
}

/// One of the eight 8-bit cells. The discriminant is the snapshot index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum Register {
    A,
    B,
    C,
    D,
    E,
    F,
    H,
    L,
}

/// A pair of 8-bit cells addressed as one 16-bit value, high byte first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display)]
pub enum WordRegister {
    AF,
    BC,
    DE,
    HL,
}

impl Register {
    /// Looks up a cell by name, ignoring ASCII case.
    pub fn parse(name: &str) -> Result<Self> {
        Register::iter()
            .find(|reg| reg.to_string().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                debug!("rejected register identifier {:?}", name);
                Error::from_identifier(name)
            })
    }
}

impl TryFrom<u8> for Register {
    type Error = Error;

    fn try_from(index: u8) -> Result<Self> {
        Register::iter().nth(index as usize).ok_or_else(|| {
            debug!("rejected register index {}", index);
            Error::InvalidRegisterIndex(index)
        })
    }
}

impl WordRegister {
    /// Looks up a register pair by name, ignoring ASCII case.
    pub fn parse(name: &str) -> Result<Self> {
        WordRegister::iter()
            .find(|reg| reg.to_string().eq_ignore_ascii_case(name))
            .ok_or_else(|| {
                debug!("rejected register pair identifier {:?}", name);
                Error::from_identifier(name)
            })
    }

    /// The (high, low) cells making up this pair.
    pub fn halves(self) -> (Register, Register) {
        match self {
            WordRegister::AF => (Register::A, Register::F),
            WordRegister::BC => (Register::B, Register::C),
            WordRegister::DE => (Register::D, Register::E),
            WordRegister::HL => (Register::H, Register::L),
        }
    }
}

/// Macro to generate a function that gets the value in a join register.
macro_rules! get_joint_register {
    ($name:ident, $first:ident, $second:ident) => {
        #[doc = concat!("Gets the joint register ", stringify!($first), stringify!($second), ".")]
        pub fn $name(&self) -> u16 {
            u16::from_be_bytes([self.$first, self.$second])
        }
    };
}

/// Macro to generate a function that sets the value in a join register.
macro_rules! set_joint_register {
    ($name:ident, $first:ident, $second:ident) => {
        #[doc = concat!("Sets the joint register ", stringify!($first), stringify!($second), ".")]
        pub fn $name(&mut self, value: u16) {
            let [high, low] = value.to_be_bytes();
            self.$first = high;
            self.$second = low;
        }
    };
}

impl Registers {
    // AF
    get_joint_register!(get_af, a, f);
    set_joint_register!(set_af, a, f);

    // BC
    get_joint_register!(get_bc, b, c);
    set_joint_register!(set_bc, b, c);

    // DE
    get_joint_register!(get_de, d, e);
    set_joint_register!(set_de, d, e);

    // HL
    get_joint_register!(get_hl, h, l);
    set_joint_register!(set_hl, h, l);
}

impl Registers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register state on a DMG once the boot ROM has handed over to the cartridge.
    pub fn post_boot() -> Self {
        let mut registers = Self::new();
        registers.set_af(0x01B0);
        registers.set_bc(0x0013);
        registers.set_de(0x00D8);
        registers.set_hl(0x014D);
        registers
    }

    /// Builds a register file from raw cells in A, B, C, D, E, F, H, L order.
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        let [a, b, c, d, e, f, h, l] = bytes;
        Self {
            a,
            b,
            c,
            d,
            e,
            f,
            h,
            l,
        }
    }

    /// Raw cells in A, B, C, D, E, F, H, L order, F included verbatim.
    pub fn to_bytes(&self) -> [u8; 8] {
        [
            self.a, self.b, self.c, self.d, self.e, self.f, self.h, self.l,
        ]
    }

    pub fn get(&self, reg: Register) -> u8 {
        match reg {
            Register::A => self.a,
            Register::B => self.b,
            Register::C => self.c,
            Register::D => self.d,
            Register::E => self.e,
            Register::F => self.f,
            Register::H => self.h,
            Register::L => self.l,
        }
    }

    pub fn set(&mut self, reg: Register, value: u8) {
        trace!("set {} to {:#04x}", reg, value);
        match reg {
            Register::A => self.a = value,
            Register::B => self.b = value,
            Register::C => self.c = value,
            Register::D => self.d = value,
            Register::E => self.e = value,
            Register::F => self.f = value,
            Register::H => self.h = value,
            Register::L => self.l = value,
        }
    }

    pub fn get_word(&self, word_reg: WordRegister) -> u16 {
        match word_reg {
            WordRegister::AF => self.get_af(),
            WordRegister::BC => self.get_bc(),
            WordRegister::DE => self.get_de(),
            WordRegister::HL => self.get_hl(),
        }
    }

    pub fn set_word(&mut self, word_reg: WordRegister, value: u16) {
        trace!("set {} to {:#06x}", word_reg, value);
        match word_reg {
            WordRegister::AF => self.set_af(value),
            WordRegister::BC => self.set_bc(value),
            WordRegister::DE => self.set_de(value),
            WordRegister::HL => self.set_hl(value),
        }
    }

    pub fn read_by_name(&self, name: &str) -> Result<u8> {
        Ok(self.get(Register::parse(name)?))
    }

    /// Leaves every cell untouched when `name` is not a register.
    pub fn write_by_name(&mut self, name: &str, value: u8) -> Result<()> {
        let reg = Register::parse(name)?;
        self.set(reg, value);
        Ok(())
    }

    pub fn read_pair_by_name(&self, name: &str) -> Result<u16> {
        Ok(self.get_word(WordRegister::parse(name)?))
    }

    /// Leaves every cell untouched when `name` is not a register pair.
    pub fn write_pair_by_name(&mut self, name: &str, value: u16) -> Result<()> {
        let word_reg = WordRegister::parse(name)?;
        self.set_word(word_reg, value);
        Ok(())
    }

    pub fn flags(&self) -> Flags {
        Flags::from(self.f)
    }

    /// Overwrites F from `flags`. The low nibble always ends up cleared.
    pub fn set_flags(&mut self, flags: Flags) {
        self.f = u8::from(flags);
        trace!("set flags {} (F = {:#04x})", flags, self.f);
    }

    pub fn flag(&self, flag: Flag) -> bool {
        self.f & flag.mask() != 0
    }

    /// Changes a single flag bit. The rest of the upper nibble is kept and the
    /// lower nibble is cleared.
    pub fn set_flag(&mut self, flag: Flag, value: bool) {
        let f = self.f & FLAG_BITS_MASK & !flag.mask();
        self.f = if value { f | flag.mask() } else { f };
    }
}

impl fmt::Display for Registers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AF: {:#06x} BC: {:#06x} DE: {:#06x} HL: {:#06x}",
            self.get_af(),
            self.get_bc(),
            self.get_de(),
            self.get_hl()
        )
    }
}
