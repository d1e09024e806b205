use std::error::Error as StdError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A register or register pair name that does not exist on the SM83.
    InvalidRegisterIdentifier(String),
    /// A cell index outside of 0..=7.
    InvalidRegisterIndex(u8),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> core::result::Result<(), std::fmt::Error> {
        match self {
            Error::InvalidRegisterIdentifier(name) => {
                write!(f, "InvalidRegisterIdentifier: {:?}", name)
            }
            Error::InvalidRegisterIndex(index) => {
                write!(f, "InvalidRegisterIndex: {} (expected 0..=7)", index)
            }
        }
    }
}

impl StdError for Error {}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn from_identifier(name: &str) -> Self {
        Error::InvalidRegisterIdentifier(String::from(name))
    }
}
