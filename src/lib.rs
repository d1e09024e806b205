mod error;

pub mod cpu;

pub use cpu::{Flag, Flags, Register, Registers, WordRegister};
pub use error::{Error, Result};
