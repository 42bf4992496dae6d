//! Cipher construction settings.

use crate::key::Variant;

/// Settings used by [`Cipher::with_config`](crate::Cipher::with_config).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct CipherConfig {
    /// Key size; AES-256 unless configured otherwise.
    pub variant: Variant,
}

impl CipherConfig {
    /// Configuration for an explicit variant.
    pub const fn new(variant: Variant) -> Self {
        Self { variant }
    }
}

impl From<Variant> for CipherConfig {
    fn from(variant: Variant) -> Self {
        Self::new(variant)
    }
}
