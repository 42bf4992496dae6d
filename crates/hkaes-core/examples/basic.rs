//! Encrypts a short message with a passphrase-derived AES-256 key.

use hkaes_core::{Cipher, CipherConfig};

fn main() -> hkaes_core::Result<()> {
    let cipher = Cipher::with_config(b"test-key", CipherConfig::default())?;

    let message = b"first block herea short tail";
    for (index, block) in cipher.encrypt_stream(&message[..]).enumerate() {
        let block = block?;
        let hex: String = block.iter().map(|b| format!("{b:02x}")).collect();
        println!("block {index}: {hex}");
    }

    let empty = cipher.encrypt_vec(b"")?;
    assert_eq!(empty.len(), 16);
    println!("{} key, empty input -> {} byte(s)", cipher.variant(), empty.len());
    Ok(())
}
