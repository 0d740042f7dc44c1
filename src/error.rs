use std::{error, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The identifier used as a seed was all zero.
    InvalidSeed,
    /// A requested output length fell outside of `1..=MAX_GENERATE_LEN`.
    OutOfRange(usize),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidSeed => write!(f, "invalid seed: identifier is zero"),
            Error::OutOfRange(x) => write!(f, "length {x} out of range"),
        }
    }
}

impl error::Error for Error {}
