//! SHA-256 digest used by `hkaes` to turn an arbitrary root secret into AES key material.
//!
//! The cipher only relies on the [`Digest256`] contract: a deterministic, pure
//! function from bytes to 32 raw bytes. [`Sha256`] is the implementation shipped
//! here; anything else honouring the contract can be swapped in.
//!
//! Like the rest of the workspace this is written for clarity, not speed, and it
//! is not hardened against side channels.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod sha256;

pub use crate::sha256::{Sha256, BLOCK_LEN, DIGEST_LEN};

/// A fixed-width 256-bit digest function.
///
/// Implementations must be deterministic: equal inputs always produce equal
/// outputs, with no hidden state carried between calls.
pub trait Digest256 {
    /// Hashes `data` into 32 raw bytes.
    fn digest(data: &[u8]) -> [u8; 32];
}
