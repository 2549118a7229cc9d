//! Error types for the MULTI2 library.

use std::fmt;

/// Errors produced by the MULTI2 library.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Multi2Error {
    /// Key is not exactly [`KEY_SIZE`](crate::KEY_SIZE) bytes long.
    /// Carries the length that was supplied.
    InvalidKeySize(usize),
    /// A block buffer is not exactly [`BLOCK_SIZE`](crate::BLOCK_SIZE)
    /// bytes long. Carries the length that was supplied.
    InvalidBlockSize(usize),
}

impl fmt::Display for Multi2Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Multi2Error::InvalidKeySize(len) => {
                write!(f, "multi2: invalid key size {}", len)
            }
            Multi2Error::InvalidBlockSize(len) => {
                write!(f, "multi2: invalid block size {}", len)
            }
        }
    }
}

impl std::error::Error for Multi2Error {}
