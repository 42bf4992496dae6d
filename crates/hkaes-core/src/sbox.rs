//! Rijndael S-box, derived at first use from the field inverse and the affine map.

use std::sync::LazyLock;

use crate::gf::inverse;

/// Seed row of the circulant bit-mixing matrix.
const AFFINE_ROW: u8 = 0b1111_0001;
/// Additive constant of the affine map.
const AFFINE_CONST: u8 = 0x63;

static SBOX: LazyLock<[u8; 256]> = LazyLock::new(build);

/// Affine transform over GF(2) applied to the inverse of `b`.
///
/// Output bit `i` is the parity of `row_i & inverse(b)`, where `row_i` is
/// [`AFFINE_ROW`] rotated left `i` times.
fn substitute(b: u8) -> u8 {
    let inv = inverse(b);
    let mut row = AFFINE_ROW;
    let mut out = 0u8;
    for bit in 0..8 {
        let parity = ((row & inv).count_ones() & 1) as u8;
        out |= parity << bit;
        row = row.rotate_left(1);
    }
    out ^ AFFINE_CONST
}

fn build() -> [u8; 256] {
    log::debug!("building S-box");
    let mut table = [0u8; 256];
    for (b, entry) in table.iter_mut().enumerate() {
        *entry = substitute(b as u8);
    }
    table
}

/// Returns the S-box image of `byte`.
#[inline]
pub fn sbox(byte: u8) -> u8 {
    SBOX[byte as usize]
}

/// The full substitution table.
pub fn table() -> &'static [u8; 256] {
    &SBOX
}
