mod common;

use gb_registers::{Error, Flag, Flags, Register, Registers, WordRegister};
use strum::IntoEnumIterator;

fn cell_indices(word_reg: WordRegister) -> [usize; 2] {
    let (high, low) = word_reg.halves();
    [high as usize, low as usize]
}

#[test]
fn test_pair_write_then_read_all_values() {
    common::init_logger();

    for word_reg in WordRegister::iter() {
        let mut registers = common::distinct_registers();
        for high in 0..=u8::MAX {
            for low in 0..=u8::MAX {
                let before = registers;
                let value = (high as u16) << 8 | low as u16;
                registers.set_word(word_reg, value);

                assert_eq!(value, registers.get_word(word_reg));
                common::assert_untouched(&before, &registers, &cell_indices(word_reg));
            }
        }
    }
}

#[test]
fn test_decode_encode_clears_low_nibble_of_f() {
    let mut registers = Registers::new();
    for f in 0..=u8::MAX {
        registers.f = f;
        let flags = registers.flags();
        registers.set_flags(flags);
        assert_eq!(f & 0b1111_0000, registers.f);
    }
}

#[test]
fn test_set_flags_then_get_flags_round_trips() {
    let mut registers = common::distinct_registers();
    for bits in 0..16u8 {
        let flags = Flags {
            zero: bits & 0b1000 != 0,
            subtract: bits & 0b0100 != 0,
            half_carry: bits & 0b0010 != 0,
            carry: bits & 0b0001 != 0,
        };
        registers.set_flags(flags);
        assert_eq!(flags, registers.flags());
    }
}

#[test]
fn test_cells_are_independent() {
    let before = common::distinct_registers();

    let mut registers = before;
    registers.a = 0xFF;
    common::assert_untouched(&before, &registers, &[Register::A as usize]);

    let mut registers = before;
    registers.set_word(WordRegister::BC, 0x1234);
    assert_eq!(0x12, registers.b);
    assert_eq!(0x34, registers.c);
    common::assert_untouched(&before, &registers, &[Register::B as usize, Register::C as usize]);
}

#[test]
fn test_concrete_pair_scenario() {
    let mut registers = Registers::new();
    registers.a = 0x12;
    registers.f = 0x00;
    assert_eq!(0x1200, registers.get_word(WordRegister::AF));

    registers.set_word(WordRegister::HL, 0xBEEF);
    assert_eq!(0xBE, registers.h);
    assert_eq!(0xEF, registers.l);
    assert_eq!(0xBEEF, registers.get_word(WordRegister::HL));
}

#[test]
fn test_concrete_flags_scenario() {
    let flags = Flags {
        zero: true,
        subtract: false,
        half_carry: true,
        carry: false,
    };
    let mut registers = Registers::new();
    registers.set_flags(flags);
    assert_eq!(0xA0, registers.f);
    assert_eq!(flags, registers.flags());
    assert!(registers.flag(Flag::Zero));
    assert!(!registers.flag(Flag::Carry));
}

#[test]
fn test_invalid_pair_name_does_not_mutate() {
    common::init_logger();

    let mut registers = common::distinct_registers();
    let before = registers;

    for name in ["SP", "PC", "AB", "A", "", "hl "] {
        assert_eq!(
            Err(Error::InvalidRegisterIdentifier(name.to_string())),
            registers.write_pair_by_name(name, 0xFFFF)
        );
        assert_eq!(
            Err(Error::InvalidRegisterIdentifier(name.to_string())),
            registers.read_pair_by_name(name)
        );
    }
    assert_eq!(before, registers);
}

#[test]
fn test_invalid_cell_name_does_not_mutate() {
    let mut registers = common::distinct_registers();
    let before = registers;

    assert!(registers.write_by_name("X", 0x99).is_err());
    assert!(registers.read_by_name("SP").is_err());
    assert_eq!(before, registers);
}

#[test]
fn test_named_access() {
    let mut registers = Registers::new();
    registers.write_pair_by_name("de", 0xC0DE).unwrap();
    assert_eq!(0xC0, registers.d);
    assert_eq!(0xDE, registers.e);
    assert_eq!(Ok(0xC0DE), registers.read_pair_by_name("DE"));

    registers.write_by_name("f", 0x0F).unwrap();
    assert_eq!(Ok(0x0F), registers.read_by_name("F"));
    assert_eq!(Ok(0x000F), registers.read_pair_by_name("AF"));
}

#[test]
fn test_snapshot_round_trip_keeps_raw_f() {
    let mut registers = Registers::post_boot();
    registers.f = 0xB7;
    let restored = Registers::from_bytes(registers.to_bytes());
    assert_eq!(registers, restored);
    assert_eq!(0xB7, restored.f);
}
