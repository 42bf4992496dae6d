//! Block representation helpers.

/// Block size in bytes.
pub const BLOCK_LEN: usize = 16;

/// AES block of 16 bytes, column-major: byte `row + 4 * column`.
pub type Block = [u8; BLOCK_LEN];

/// XORs two blocks, writing the result into `dst`.
#[inline]
pub fn xor_in_place(dst: &mut Block, rhs: &Block) {
    for (d, r) in dst.iter_mut().zip(rhs.iter()) {
        *d ^= *r;
    }
}

/// Index of the state byte at (`row`, `column`).
#[inline]
pub const fn state_index(row: usize, column: usize) -> usize {
    row + 4 * column
}
