//! AES-128/192/256 built from first principles, keyed through SHA-256.
//!
//! This crate derives everything from the field arithmetic up and provides:
//! - GF(2^8) multiplication and inversion.
//! - An S-box computed from the field inverse and the Rijndael affine map.
//! - The four round transformations and the key schedule for all key sizes.
//! - A cipher driver that hashes an arbitrary root secret into the AES key and
//!   encrypts a byte stream block by block, padding only a short final chunk.
//!
//! Blocks are encrypted independently (ECB-like). The implementation aims for
//! clarity and testability rather than constant-time guarantees; it should not
//! be treated as side-channel hardened, and the single unsalted hash is not a
//! substitute for a real key-derivation function.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod config;
mod error;
pub mod gf;
mod key;
pub mod round;
mod sbox;
mod schedule;
mod stream;

pub use crate::block::{Block, BLOCK_LEN};
pub use crate::cipher::{encrypt_block, Cipher};
pub use crate::config::CipherConfig;
pub use crate::error::{Error, Result};
pub use crate::gf::Gf256;
pub use crate::key::{ExpandedKey, Variant};
pub use crate::sbox::{sbox, table as sbox_table};
pub use crate::schedule::{expand_key, rcon};
pub use crate::stream::{pad_tail, BlockStream};
pub use hkaes_sha256::{Digest256, Sha256};
