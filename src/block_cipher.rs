//! Block cipher contract for composing MULTI2 under a chaining mode.

use crate::error::Multi2Error;
use crate::multi2::{Multi2, BLOCK_SIZE};
use crate::primitives::Register;
use crate::utils::converter::{byte_to_word, word_to_byte};

/// A fixed-size block transformation keyed at construction.
///
/// Implementations process exactly one block per call. Buffers of any other
/// size are rejected with [`Multi2Error::InvalidBlockSize`] and `dst` is
/// left unmodified.
///
/// # Examples
///
/// ```
/// use multi2::{BlockCipher, Multi2};
///
/// let cipher = Multi2::new(&[0x42; 40]).unwrap();
/// let block: &dyn BlockCipher = &cipher;
///
/// let mut ct = [0u8; 8];
/// block.encrypt(&mut ct, b"abcdefgh").unwrap();
/// let mut pt = [0u8; 8];
/// block.decrypt(&mut pt, &ct).unwrap();
/// assert_eq!(&pt, b"abcdefgh");
///
/// assert!(block.encrypt(&mut ct, b"short").is_err());
/// ```
pub trait BlockCipher {
    /// Returns the block size in bytes.
    fn block_size(&self) -> usize;

    /// Encrypts the block in `src` into `dst`.
    fn encrypt(&self, dst: &mut [u8], src: &[u8]) -> Result<(), Multi2Error>;

    /// Decrypts the block in `src` into `dst`.
    fn decrypt(&self, dst: &mut [u8], src: &[u8]) -> Result<(), Multi2Error>;
}

impl BlockCipher for Multi2 {
    fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    fn encrypt(&self, dst: &mut [u8], src: &[u8]) -> Result<(), Multi2Error> {
        let mut reg = load_checked(dst, src)?;
        self.encrypt_register(&mut reg);
        word_to_byte(&reg, dst);
        Ok(())
    }

    fn decrypt(&self, dst: &mut [u8], src: &[u8]) -> Result<(), Multi2Error> {
        let mut reg = load_checked(dst, src)?;
        self.decrypt_register(&mut reg);
        word_to_byte(&reg, dst);
        Ok(())
    }
}

/// Checks both buffer sizes and loads `src` into a working register.
fn load_checked(dst: &[u8], src: &[u8]) -> Result<Register, Multi2Error> {
    if dst.len() != BLOCK_SIZE {
        return Err(Multi2Error::InvalidBlockSize(dst.len()));
    }
    let mut reg = [0u32; 2];
    byte_to_word(src, &mut reg)?;
    Ok(reg)
}
