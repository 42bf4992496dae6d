//! Block encryption and the hash-keyed cipher driver.

use std::io::Read;

use hkaes_sha256::{Digest256, Sha256};
use zeroize::Zeroizing;

use crate::block::Block;
use crate::config::CipherConfig;
use crate::error::Result;
use crate::key::{ExpandedKey, Variant};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
use crate::schedule::expand_key;
use crate::stream::BlockStream;

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &ExpandedKey) -> Result<Block> {
    let rounds = round_keys.rounds();
    let mut state = *block;

    add_round_key(&mut state, round_keys.round_key(0)?);

    for round in 1..rounds {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.round_key(round)?);
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.round_key(rounds)?);

    Ok(state)
}

/// AES encryptor whose key is derived from an arbitrary-length root secret.
///
/// The root secret is digested once, the leading `key_len` bytes of the digest
/// are expanded, and the schedule is then fixed for the life of the cipher.
/// Hashing a passphrase once, without salt or iterations, is not a real KDF.
#[derive(Clone, Debug)]
pub struct Cipher {
    round_keys: ExpandedKey,
}

impl Cipher {
    /// Derives the key from `root_key` with SHA-256.
    pub fn new(root_key: &[u8], variant: Variant) -> Result<Self> {
        Self::with_digest::<Sha256>(root_key, variant)
    }

    /// Derives the key with any [`Digest256`] implementation.
    pub fn with_digest<D: Digest256>(root_key: &[u8], variant: Variant) -> Result<Self> {
        let digest = Zeroizing::new(D::digest(root_key));
        log::debug!("deriving {variant} key from {}-byte root secret", root_key.len());
        Self::from_raw_key(&digest[..variant.key_len()], variant)
    }

    /// Builds a cipher from a variant given as a bit count (128, 192 or 256).
    pub fn from_bits(root_key: &[u8], bits: u16) -> Result<Self> {
        Self::new(root_key, Variant::try_from(bits)?)
    }

    /// Builds a cipher from explicit settings.
    pub fn with_config(root_key: &[u8], config: CipherConfig) -> Result<Self> {
        Self::new(root_key, config.variant)
    }

    /// Uses `key` directly as the AES key, skipping the digest step.
    ///
    /// `key` must be exactly `variant.key_len()` bytes long.
    pub fn from_raw_key(key: &[u8], variant: Variant) -> Result<Self> {
        let round_keys = expand_key(key, variant)?;
        Ok(Self { round_keys })
    }

    /// Variant selected at construction.
    pub fn variant(&self) -> Variant {
        self.round_keys.variant()
    }

    /// The expanded key schedule.
    pub fn round_keys(&self) -> &ExpandedKey {
        &self.round_keys
    }

    /// Encrypts one block.
    pub fn encrypt_block(&self, block: &Block) -> Result<Block> {
        encrypt_block(block, &self.round_keys)
    }

    /// Returns a lazy iterator producing one ciphertext block per 16-byte input chunk.
    pub fn encrypt_stream<R: Read>(&self, reader: R) -> BlockStream<'_, R> {
        BlockStream::new(self, reader)
    }

    /// Encrypts `data` and concatenates the ciphertext blocks.
    pub fn encrypt_vec(&self, data: &[u8]) -> Result<Vec<u8>> {
        self.encrypt_stream(data)
            .try_fold(Vec::with_capacity(data.len() + 16), |mut out, block| {
                out.extend_from_slice(&block?);
                Ok(out)
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    const PLAIN: &str = "00112233445566778899aabbccddeeff";

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn block(hex_str: &str) -> Block {
        hex::decode(hex_str).unwrap().try_into().unwrap()
    }

    fn raw_cipher(variant: Variant) -> Cipher {
        let key: Vec<u8> = (0..variant.key_len() as u8).collect();
        Cipher::from_raw_key(&key, variant).unwrap()
    }

    struct Sha2Reference;

    impl Digest256 for Sha2Reference {
        fn digest(data: &[u8]) -> [u8; 32] {
            use sha2::Digest as _;
            sha2::Sha256::digest(data).into()
        }
    }

    struct ZeroDigest;

    impl Digest256 for ZeroDigest {
        fn digest(_: &[u8]) -> [u8; 32] {
            [0u8; 32]
        }
    }

    #[test]
    fn aes192_matches_fips_197_vector() {
        init_logging();
        let ct = raw_cipher(Variant::Aes192).encrypt_block(&block(PLAIN)).unwrap();
        assert_eq!(hex::encode(ct), "dda97ca4864cdfe06eaf70a0ec0d7191");
    }

    #[test]
    fn aes256_matches_fips_197_vector() {
        let ct = raw_cipher(Variant::Aes256).encrypt_block(&block(PLAIN)).unwrap();
        assert_eq!(hex::encode(ct), "8ea2b7ca516745bfeafc49904b496089");
    }

    #[test]
    fn aes128_deviates_from_fips_197_through_rcon() {
        // FIPS-197 C.1 gives 69c4e0d86a7b0430d8cdb78070b4c55a; the last two
        // round keys differ because Rcon(9) and Rcon(10) are zero here.
        let ct = raw_cipher(Variant::Aes128).encrypt_block(&block(PLAIN)).unwrap();
        assert_eq!(hex::encode(ct), "1ac4e070cb7b049814cdb7281bb4c5f2");
    }

    #[test]
    fn unsupported_bit_count_is_rejected() {
        assert!(matches!(
            Cipher::from_bits(b"test-key", 512),
            Err(Error::UnsupportedVariant(ref s)) if s == "512"
        ));
        assert_eq!(
            Cipher::from_bits(b"test-key", 128).unwrap().variant(),
            Variant::Aes128
        );
    }

    #[test]
    fn raw_key_length_is_checked() {
        assert!(matches!(
            Cipher::from_raw_key(&[0u8; 20], Variant::Aes192),
            Err(Error::InvalidKeyLength {
                expected: 24,
                actual: 20
            })
        ));
    }

    #[test]
    fn derived_key_is_digest_prefix() {
        let digest = Sha256::digest(b"test-key");
        for variant in Variant::ALL {
            let derived = Cipher::new(b"test-key", variant).unwrap();
            let direct = Cipher::from_raw_key(&digest[..variant.key_len()], variant).unwrap();
            assert_eq!(derived.round_keys(), direct.round_keys());
        }
    }

    #[test]
    fn digest_implementations_are_interchangeable() {
        let ours = Cipher::new(b"root secret", Variant::Aes192).unwrap();
        let reference = Cipher::with_digest::<Sha2Reference>(b"root secret", Variant::Aes192).unwrap();
        assert_eq!(ours.round_keys(), reference.round_keys());

        let zeros = Cipher::with_digest::<ZeroDigest>(b"root secret", Variant::Aes192).unwrap();
        let zero_key = Cipher::from_raw_key(&[0u8; 24], Variant::Aes192).unwrap();
        assert_eq!(zeros.round_keys(), zero_key.round_keys());
        assert_ne!(zeros.round_keys(), ours.round_keys());
    }

    #[test]
    fn config_defaults_to_aes256() {
        let configured = Cipher::with_config(b"k", CipherConfig::default()).unwrap();
        assert_eq!(configured.variant(), Variant::Aes256);
        assert_eq!(configured.round_keys().as_bytes().len(), 240);
    }

    #[test]
    fn one_bit_key_change_changes_every_block() {
        let mut rng = ChaCha20Rng::from_seed([42u8; 32]);
        let data: Vec<u8> = (0..64).map(|_| rng.gen()).collect();
        let root = b"avalanche root key".to_vec();
        for variant in Variant::ALL {
            let base = Cipher::new(&root, variant).unwrap().encrypt_vec(&data).unwrap();
            for bit in [0usize, 7, 42, 143] {
                let mut flipped = root.clone();
                flipped[bit / 8] ^= 1 << (bit % 8);
                let other = Cipher::new(&flipped, variant).unwrap().encrypt_vec(&data).unwrap();
                for (a, b) in base.chunks_exact(16).zip(other.chunks_exact(16)) {
                    assert_ne!(a, b, "{variant}: bit {bit} left a block unchanged");
                }
            }
        }
    }

    #[test]
    fn cipher_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Cipher>();
    }
}
