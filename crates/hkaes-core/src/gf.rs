//! Arithmetic in GF(2^8) modulo the AES polynomial x^8 + x^4 + x^3 + x + 1.

use core::fmt;
use core::ops::{Add, Mul};

use crate::error::{Error, Result};

/// The irreducible polynomial as a 9-bit pattern.
pub const AES_POLY: u16 = 0x11b;

/// Multiplies two field elements.
///
/// Shift-and-reduce over the eight bits of `b`: the running multiple of `a`
/// is reduced by [`AES_POLY`] whenever it overflows into bit 8, and folded into
/// the product when the current bit of `b` is set.
pub fn mul(a: u8, b: u8) -> u8 {
    let mut a = u16::from(a);
    let mut b = b;
    let mut product = 0u16;
    for _ in 0..8 {
        if a & 0x100 != 0 {
            a ^= AES_POLY;
        }
        if b & 1 != 0 {
            product ^= a;
        }
        b >>= 1;
        a <<= 1;
    }
    // Every term folded in was reduced below 0x100 first.
    product as u8
}

/// Multiplicative inverse, with `inverse(0) == 0` by AES convention.
///
/// Exhaustive search over the field. Only meant for building the S-box.
pub fn inverse(a: u8) -> u8 {
    if a == 0 {
        return 0;
    }
    (1..=u8::MAX).find(|&b| mul(a, b) == 1).unwrap_or(0)
}

/// A GF(2^8) element.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Gf256(pub u8);

impl Gf256 {
    /// Additive identity.
    pub const ZERO: Self = Self(0);
    /// Multiplicative identity.
    pub const ONE: Self = Self(1);

    /// Returns the multiplicative inverse (zero maps to zero).
    pub fn inverse(self) -> Self {
        Self(inverse(self.0))
    }

    /// Raw byte value.
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl From<u8> for Gf256 {
    fn from(value: u8) -> Self {
        Self(value)
    }
}

impl From<Gf256> for u8 {
    fn from(value: Gf256) -> Self {
        value.0
    }
}

impl TryFrom<u64> for Gf256 {
    type Error = Error;

    fn try_from(value: u64) -> Result<Self> {
        u8::try_from(value)
            .map(Self)
            .map_err(|_| Error::InvalidFieldElement(value))
    }
}

impl TryFrom<u32> for Gf256 {
    type Error = Error;

    fn try_from(value: u32) -> Result<Self> {
        Self::try_from(u64::from(value))
    }
}

impl TryFrom<usize> for Gf256 {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self> {
        Self::try_from(value as u64)
    }
}

impl Add for Gf256 {
    type Output = Self;

    #[allow(clippy::suspicious_arithmetic_impl)]
    fn add(self, rhs: Self) -> Self {
        Self(self.0 ^ rhs.0)
    }
}

impl Mul for Gf256 {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(mul(self.0, rhs.0))
    }
}

impl fmt::LowerHex for Gf256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}
