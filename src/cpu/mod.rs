mod flags;
mod register;

pub use flags::{Flag, Flags};
pub use register::{Register, Registers, WordRegister};
