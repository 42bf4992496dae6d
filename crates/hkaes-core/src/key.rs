//! Cipher variants and expanded key material.

use core::fmt;
use core::str::FromStr;

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::{Block, BLOCK_LEN};
use crate::error::{Error, Result};

/// AES key size, fixing `Nk`, `Nr` and the derived key length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u16", into = "u16")
)]
pub enum Variant {
    /// 128-bit key, 10 rounds.
    Aes128,
    /// 192-bit key, 12 rounds.
    Aes192,
    /// 256-bit key, 14 rounds.
    #[default]
    Aes256,
}

impl Variant {
    /// All supported variants, smallest key first.
    pub const ALL: [Variant; 3] = [Variant::Aes128, Variant::Aes192, Variant::Aes256];

    /// Key length in 32-bit words (`Nk`).
    pub const fn nk(self) -> usize {
        match self {
            Variant::Aes128 => 4,
            Variant::Aes192 => 6,
            Variant::Aes256 => 8,
        }
    }

    /// Number of rounds (`Nr`).
    pub const fn nr(self) -> usize {
        match self {
            Variant::Aes128 => 10,
            Variant::Aes192 => 12,
            Variant::Aes256 => 14,
        }
    }

    /// Key length in bytes.
    pub const fn key_len(self) -> usize {
        self.nk() * 4
    }

    /// Key length in bits.
    pub const fn bits(self) -> u16 {
        (self.key_len() * 8) as u16
    }

    /// Number of words in the expanded key, `4 * (Nr + 1)`.
    pub const fn schedule_words(self) -> usize {
        4 * (self.nr() + 1)
    }
}

impl TryFrom<u16> for Variant {
    type Error = Error;

    fn try_from(bits: u16) -> Result<Self> {
        match bits {
            128 => Ok(Variant::Aes128),
            192 => Ok(Variant::Aes192),
            256 => Ok(Variant::Aes256),
            other => Err(Error::UnsupportedVariant(other.to_string())),
        }
    }
}

impl From<Variant> for u16 {
    fn from(variant: Variant) -> Self {
        variant.bits()
    }
}

impl FromStr for Variant {
    type Err = Error;

    /// Accepts `"256"`, `"aes256"` or `"AES-256"` style selectors.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let lower = trimmed.to_ascii_lowercase();
        let digits = lower
            .strip_prefix("aes")
            .map(|rest| rest.trim_start_matches('-'))
            .unwrap_or(lower.as_str());
        digits
            .parse::<u16>()
            .map_err(|_| Error::UnsupportedVariant(trimmed.to_string()))
            .and_then(Variant::try_from)
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AES-{}", self.bits())
    }
}

/// Expanded key schedule: `Nr + 1` round keys laid out back to back.
///
/// Immutable once built; the bytes are wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct ExpandedKey {
    #[zeroize(skip)]
    variant: Variant,
    bytes: Vec<u8>,
}

impl ExpandedKey {
    pub(crate) fn new(variant: Variant, bytes: Vec<u8>) -> Self {
        debug_assert_eq!(bytes.len(), BLOCK_LEN * (variant.nr() + 1));
        Self { variant, bytes }
    }

    /// Variant the schedule was expanded for.
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Number of rounds `Nr`; valid round indices are `0..=Nr`.
    pub fn rounds(&self) -> usize {
        self.variant.nr()
    }

    /// The flattened schedule, `16 * (Nr + 1)` bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// The schedule as 4-byte words, in order.
    pub fn words(&self) -> impl Iterator<Item = [u8; 4]> + '_ {
        self.bytes
            .chunks_exact(4)
            .map(|w| [w[0], w[1], w[2], w[3]])
    }

    /// Returns the 16-byte round key for `round`.
    pub fn round_key(&self, round: usize) -> Result<&Block> {
        let out_of_range = || Error::InvalidRoundIndex {
            round,
            rounds: self.rounds(),
        };
        if round > self.rounds() {
            return Err(out_of_range());
        }
        let start = round * BLOCK_LEN;
        <&Block>::try_from(&self.bytes[start..start + BLOCK_LEN]).map_err(|_| out_of_range())
    }
}

impl fmt::Debug for ExpandedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExpandedKey")
            .field("variant", &self.variant)
            .finish_non_exhaustive()
    }
}
