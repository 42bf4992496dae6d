//! AES round transformations.

use crate::block::{state_index, xor_in_place, Block};
use crate::gf::mul;
use crate::sbox::sbox;

/// First row of the MixColumns matrix; row `i` is this row rotated right by `i`.
const MIX_ROW: [u8; 4] = [0x02, 0x03, 0x01, 0x01];

/// Applies SubBytes to the state in place.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Performs ShiftRows in place: row `r` is rotated left by `r` columns.
#[inline]
pub fn shift_rows(state: &mut Block) {
    let src = *state;
    for row in 1..4 {
        for column in 0..4 {
            state[state_index(row, column)] = src[state_index(row, (column + row) % 4)];
        }
    }
}

fn mix_single_column(col: &mut [u8; 4]) {
    let input = *col;
    for (row, out) in col.iter_mut().enumerate() {
        *out = input
            .iter()
            .enumerate()
            .fold(0u8, |acc, (j, &byte)| acc ^ mul(byte, MIX_ROW[(j + 4 - row) % 4]));
    }
}

/// MixColumns over all four columns.
#[inline]
pub fn mix_columns(state: &mut Block) {
    for col in 0..4 {
        let idx = col * 4;
        let mut column = [state[idx], state[idx + 1], state[idx + 2], state[idx + 3]];
        mix_single_column(&mut column);
        state[idx..idx + 4].copy_from_slice(&column);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn block(hex_str: &str) -> Block {
        let bytes = hex::decode(hex_str).unwrap();
        bytes.try_into().unwrap()
    }

    // Inverse MixColumns matrix, used only to show the forward map loses nothing.
    fn inv_mix_columns(state: &mut Block) {
        const INV_ROW: [u8; 4] = [0x0e, 0x0b, 0x0d, 0x09];
        for column in state.chunks_exact_mut(4) {
            let input = [column[0], column[1], column[2], column[3]];
            for (row, out) in column.iter_mut().enumerate() {
                *out = (0..4).fold(0u8, |acc, j| acc ^ mul(input[j], INV_ROW[(j + 4 - row) % 4]));
            }
        }
    }

    #[test]
    fn shift_rows_matches_fips_197_round_one() {
        // FIPS-197 Appendix B, round 1: after SubBytes -> after ShiftRows.
        let mut state = block("d42711aee0bf98f1b8b45de51e415230");
        shift_rows(&mut state);
        assert_eq!(state, block("d4bf5d30e0b452aeb84111f11e2798e5"));
    }

    #[test]
    fn shift_rows_keeps_first_row() {
        let mut state: Block = core::array::from_fn(|i| i as u8);
        shift_rows(&mut state);
        for column in 0..4 {
            assert_eq!(state[state_index(0, column)], (4 * column) as u8);
        }
        assert_eq!(state[state_index(1, 0)], 5);
        assert_eq!(state[state_index(3, 0)], 15);
    }

    #[test]
    fn shift_rows_four_times_is_identity() {
        let mut rng = ChaCha20Rng::from_seed([21u8; 32]);
        for _ in 0..64 {
            let mut state = [0u8; 16];
            rng.fill_bytes(&mut state);
            let original = state;
            for _ in 0..4 {
                shift_rows(&mut state);
            }
            assert_eq!(state, original);
        }
    }

    #[test]
    fn mix_columns_matches_fips_197() {
        let mut state = block("d4bf5d30e0b452aeb84111f11e2798e5");
        mix_columns(&mut state);
        assert_eq!(state, block("046681e5e0cb199a48f8d37a2806264c"));

        let mut state = block("db135345f20a225c01010101c6c6c6c6");
        mix_columns(&mut state);
        assert_eq!(state, block("8e4da1bc9fdc589d01010101c6c6c6c6"));
    }

    #[test]
    fn sub_bytes_uses_sbox() {
        let mut state = [0u8; 16];
        sub_bytes(&mut state);
        assert_eq!(state, [0x63; 16]);
    }

    #[test]
    fn add_round_key_twice_cancels() {
        let key = block("000102030405060708090a0b0c0d0e0f");
        let original = block("00112233445566778899aabbccddeeff");
        let mut state = original;
        add_round_key(&mut state, &key);
        assert_eq!(state, block("00102030405060708090a0b0c0d0e0f0"));
        add_round_key(&mut state, &key);
        assert_eq!(state, original);
    }

    proptest! {
        #[test]
        fn mix_columns_is_invertible(bytes in any::<[u8; 16]>()) {
            let mut state = bytes;
            mix_columns(&mut state);
            inv_mix_columns(&mut state);
            prop_assert_eq!(state, bytes);
        }

        #[test]
        fn mix_columns_is_injective(a in any::<[u8; 16]>(), b in any::<[u8; 16]>()) {
            prop_assume!(a != b);
            let (mut ma, mut mb) = (a, b);
            mix_columns(&mut ma);
            mix_columns(&mut mb);
            prop_assert_ne!(ma, mb);
        }
    }
}
