//! Key expansion for all three AES variants.

use zeroize::Zeroize;

use crate::error::{Error, Result};
use crate::key::{ExpandedKey, Variant};
use crate::sbox::sbox;

/// Round constant for key-schedule group `group` (1-based).
///
/// Computed as `2^(group - 1) mod 256`. This agrees with FIPS-197 for groups
/// 1..=8 and yields zero afterwards, where FIPS-197 continues with the field
/// doubling sequence (`0x1b`, `0x36`). Only AES-128 reaches group 9.
pub fn rcon(group: usize) -> [u8; 4] {
    let exponent = group.saturating_sub(1);
    let lead = u32::try_from(exponent)
        .ok()
        .and_then(|e| 1u8.checked_shl(e))
        .unwrap_or(0);
    [lead, 0, 0, 0]
}

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    u32::from_be_bytes(word.to_be_bytes().map(sbox))
}

/// Expands a `variant.key_len()`-byte key into `Nr + 1` round keys.
pub fn expand_key(key: &[u8], variant: Variant) -> Result<ExpandedKey> {
    if key.len() != variant.key_len() {
        return Err(Error::InvalidKeyLength {
            expected: variant.key_len(),
            actual: key.len(),
        });
    }

    let nk = variant.nk();
    let total = variant.schedule_words();
    let mut w: Vec<u32> = Vec::with_capacity(total);
    w.extend(
        key.chunks_exact(4)
            .map(|chunk| u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]])),
    );

    for i in nk..total {
        let mut temp = w[i - 1];
        if i % nk == 0 {
            temp = sub_word(rot_word(temp)) ^ u32::from_be_bytes(rcon(i / nk));
        } else if nk > 6 && i % nk == 4 {
            temp = sub_word(temp);
        }
        w.push(w[i - nk] ^ temp);
    }

    let bytes: Vec<u8> = w.iter().flat_map(|word| word.to_be_bytes()).collect();
    w.zeroize();

    log::debug!("expanded {variant} key schedule: {total} words");
    Ok(ExpandedKey::new(variant, bytes))
}
