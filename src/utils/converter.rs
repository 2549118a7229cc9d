//! Byte-to-word conversion utilities.
//!
//! MULTI2 keys and blocks are big-endian sequences of 32-bit words: the
//! first byte of each group of four occupies the most significant position.

use crate::error::Multi2Error;

/// Decodes big-endian bytes into 32-bit words without allocating.
///
/// # Parameters
/// - `input`: Byte slice; its length must be exactly `4 * output.len()`.
/// - `output`: Destination words.
///
/// # Errors
/// Returns [`Multi2Error::InvalidBlockSize`] carrying `input.len()` if the
/// lengths do not match.
pub(crate) fn byte_to_word(input: &[u8], output: &mut [u32]) -> Result<(), Multi2Error> {
    if input.len() != output.len() * 4 {
        return Err(Multi2Error::InvalidBlockSize(input.len()));
    }
    for (word, chunk) in output.iter_mut().zip(input.chunks_exact(4)) {
        *word = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    Ok(())
}

/// Encodes 32-bit words as big-endian bytes.
///
/// Writes `4 * input.len()` bytes to the front of `output`; any extra
/// capacity is left untouched.
pub(crate) fn word_to_byte(input: &[u32], output: &mut [u8]) {
    for (chunk, word) in output.chunks_exact_mut(4).zip(input) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
}

/// Loads an 8-byte block into the `(P0, P1)` working register.
#[inline(always)]
pub(crate) fn load_block(block: &[u8; 8]) -> [u32; 2] {
    [
        u32::from_be_bytes([block[0], block[1], block[2], block[3]]),
        u32::from_be_bytes([block[4], block[5], block[6], block[7]]),
    ]
}

/// Stores the `(P0, P1)` working register as an 8-byte block.
#[inline(always)]
pub(crate) fn store_block(reg: &[u32; 2]) -> [u8; 8] {
    let mut block = [0u8; 8];
    word_to_byte(reg, &mut block);
    block
}
