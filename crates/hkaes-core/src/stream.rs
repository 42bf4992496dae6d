//! Lazy block-by-block encryption of a byte stream.

use std::io::{ErrorKind, Read};
use std::iter::FusedIterator;

use crate::block::{Block, BLOCK_LEN};
use crate::cipher::Cipher;
use crate::error::Result;

/// Fills the bytes after `len` with the pad length, PKCS#7 style.
///
/// A full chunk (`len >= 16`) is returned unchanged: only a short tail is
/// padded, so block-aligned input never grows an extra block.
pub fn pad_tail(chunk: &Block, len: usize) -> Block {
    let mut block = *chunk;
    if len < BLOCK_LEN {
        let pad = (BLOCK_LEN - len) as u8;
        block[len..].fill(pad);
    }
    block
}

/// Pull-based iterator of ciphertext blocks, one per 16-byte input chunk.
///
/// Owns the reader until dropped or handed back with [`into_inner`](Self::into_inner).
/// Once it returns `None` or an error it stays exhausted; encrypting again
/// requires a new stream over a fresh reader.
#[derive(Debug)]
pub struct BlockStream<'a, R> {
    cipher: &'a Cipher,
    reader: R,
    emitted: u64,
    done: bool,
}

impl<'a, R: Read> BlockStream<'a, R> {
    pub(crate) fn new(cipher: &'a Cipher, reader: R) -> Self {
        Self {
            cipher,
            reader,
            emitted: 0,
            done: false,
        }
    }

    /// Number of ciphertext blocks produced so far.
    pub fn blocks_emitted(&self) -> u64 {
        self.emitted
    }

    /// Stops the stream and returns the underlying reader.
    pub fn into_inner(self) -> R {
        self.reader
    }

    /// Reads until `buf` is full or the reader hits end of input.
    fn read_chunk(&mut self, buf: &mut Block) -> std::io::Result<usize> {
        let mut filled = 0;
        while filled < BLOCK_LEN {
            match self.reader.read(&mut buf[filled..]) {
                Ok(0) => break,
                Ok(n) => filled += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
        Ok(filled)
    }
}

impl<R: Read> Iterator for BlockStream<'_, R> {
    type Item = Result<Block>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let mut chunk = [0u8; BLOCK_LEN];
        let filled = match self.read_chunk(&mut chunk) {
            Ok(filled) => filled,
            Err(err) => {
                self.done = true;
                return Some(Err(err.into()));
            }
        };

        let block = match filled {
            BLOCK_LEN => chunk,
            // Aligned input: no trailing pad block.
            0 if self.emitted > 0 => {
                self.done = true;
                return None;
            }
            short => {
                log::trace!("padding final chunk of {short} bytes");
                self.done = true;
                pad_tail(&chunk, short)
            }
        };

        let result = self.cipher.encrypt_block(&block);
        if result.is_err() {
            self.done = true;
        }
        self.emitted += 1;
        log::trace!("emitted block {}", self.emitted);
        Some(result)
    }
}

impl<R: Read> FusedIterator for BlockStream<'_, R> {}
