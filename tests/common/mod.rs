use gb_registers::Registers;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A register file where every cell holds a distinct, recognizable value.
pub fn distinct_registers() -> Registers {
    Registers::from_bytes([0x0A, 0x0B, 0x0C, 0x0D, 0x0E, 0x0F, 0x11, 0x22])
}

/// Asserts every cell except those in `changed` still matches `before`.
pub fn assert_untouched(before: &Registers, after: &Registers, changed: &[usize]) {
    for (index, (old, new)) in before
        .to_bytes()
        .iter()
        .zip(after.to_bytes().iter())
        .enumerate()
    {
        if !changed.contains(&index) {
            assert_eq!(old, new, "cell {} changed", index);
        }
    }
}
