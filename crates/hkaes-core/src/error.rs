//! Error type shared by the cipher engine.

use thiserror::Error;

/// Errors raised while building or driving a cipher.
#[derive(Debug, Error)]
pub enum Error {
    /// Key size is not one of 128, 192 or 256 bits.
    #[error("unsupported AES variant {0:?} (expected 128, 192 or 256)")]
    UnsupportedVariant(String),

    /// A round key was requested past the end of the key schedule.
    #[error("round index {round} out of range (cipher has {rounds} rounds)")]
    InvalidRoundIndex {
        /// Requested round.
        round: usize,
        /// Number of rounds `Nr` of the schedule.
        rounds: usize,
    },

    /// An integer does not fit in a GF(2^8) element.
    #[error("{0} is not a GF(2^8) element (expected 0..=255)")]
    InvalidFieldElement(u64),

    /// A raw key does not match the variant's key length.
    #[error("invalid key length: expected {expected} bytes, got {actual}")]
    InvalidKeyLength {
        /// Key length required by the variant.
        expected: usize,
        /// Length that was supplied.
        actual: usize,
    },

    /// The plaintext reader failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for cipher operations.
pub type Result<T> = std::result::Result<T, Error>;
