//! MULTI2: 64-bit block cipher with a 320-bit key.
//!
//! Holds the round-key table derived once at construction together with the
//! configured round count. Both are immutable afterwards, so a single
//! instance can serve any number of threads without locking.

use std::fmt;

use crate::error::Multi2Error;
use crate::key_schedule::{expand, split_key};
use crate::primitives::{KeyWindow, Register};
use crate::rounds::{decrypt_rounds, encrypt_rounds};
use crate::utils::converter::{load_block, store_block};

/// Block size in bytes.
pub const BLOCK_SIZE: usize = 8;

/// Key size in bytes: eight 32-bit subkeys followed by two 32-bit seed words.
pub const KEY_SIZE: usize = 40;

/// Round count used when none (or zero) is requested.
pub const DEFAULT_ROUNDS: u32 = 128;

/// MULTI2 block cipher instance.
///
/// # Architecture
///
/// ```text
/// key (40 bytes) ─► SK[0..7], DK[0..1] ─► key schedule (9 rounds) ─► UK[0..7]
/// block (8 bytes) ─► (P0, P1) ─► N rounds of PI1..PI4 over UK ─► block
/// ```
///
/// The raw key is dropped after the schedule runs; only `UK` and the round
/// count are kept.
#[derive(Clone)]
pub struct Multi2 {
    round_keys: [KeyWindow; 2],
    rounds: u32,
}

impl Multi2 {
    /// Creates a cipher with the default 128 rounds.
    ///
    /// # Errors
    /// Returns [`Multi2Error::InvalidKeySize`] if `key` is not 40 bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use multi2::{Multi2, Multi2Error};
    ///
    /// let cipher = Multi2::new(&[0u8; 40]).unwrap();
    /// assert_eq!(cipher.rounds(), 128);
    ///
    /// assert_eq!(Multi2::new(&[0u8; 16]).unwrap_err(), Multi2Error::InvalidKeySize(16));
    /// ```
    pub fn new(key: &[u8]) -> Result<Self, Multi2Error> {
        Self::with_rounds(key, DEFAULT_ROUNDS)
    }

    /// Creates a cipher with a custom round count.
    ///
    /// # Parameters
    /// - `key`: 40 bytes of key material.
    /// - `rounds`: Number of round primitives to apply per block. `0`
    ///   selects the default of 128; any other value is used as given.
    ///
    /// # Errors
    /// Returns [`Multi2Error::InvalidKeySize`] if `key` is not 40 bytes.
    ///
    /// # Examples
    ///
    /// ```
    /// use multi2::Multi2;
    ///
    /// let key = [7u8; 40];
    /// let cipher = Multi2::with_rounds(&key, 9).unwrap();
    ///
    /// let block = *b"8 bytes!";
    /// let sealed = cipher.encrypt_block(&block);
    /// assert_eq!(cipher.decrypt_block(&sealed), block);
    /// ```
    pub fn with_rounds(key: &[u8], rounds: u32) -> Result<Self, Multi2Error> {
        let key: &[u8; KEY_SIZE] = key.try_into().map_err(|_| {
            tracing::debug!(len = key.len(), "rejecting multi2 key of invalid size");
            Multi2Error::InvalidKeySize(key.len())
        })?;
        Ok(Self::from_key(key, rounds))
    }

    /// Creates a cipher from a key of the correct size. Cannot fail.
    ///
    /// `rounds` follows the same rule as [`with_rounds`](Self::with_rounds).
    pub fn from_key(key: &[u8; KEY_SIZE], rounds: u32) -> Self {
        let rounds = if rounds == 0 { DEFAULT_ROUNDS } else { rounds };
        let (sk, dk) = split_key(key);
        let round_keys = expand(&sk, dk);
        tracing::debug!(rounds, "multi2 key schedule complete");
        Multi2 { round_keys, rounds }
    }

    /// Returns the block size in bytes (always 8).
    pub fn block_size(&self) -> usize {
        BLOCK_SIZE
    }

    /// Returns the configured round count.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Returns a copy of the round-key table `UK[0..7]`.
    pub fn round_keys(&self) -> [u32; 8] {
        let [lo, hi] = self.round_keys;
        [lo[0], lo[1], lo[2], lo[3], hi[0], hi[1], hi[2], hi[3]]
    }

    /// Encrypts one 8-byte block.
    ///
    /// # Examples
    ///
    /// ```
    /// use multi2::Multi2;
    ///
    /// let mut key = [0u8; 40];
    /// key[32..].copy_from_slice(&[0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF]);
    /// let cipher = Multi2::new(&key).unwrap();
    ///
    /// let ct = cipher.encrypt_block(&[0, 0, 0, 0, 0, 0, 0, 1]);
    /// assert_eq!(ct, [0xF8, 0x94, 0x40, 0x84, 0x5E, 0x11, 0xCF, 0x89]);
    /// ```
    pub fn encrypt_block(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let mut reg = load_block(block);
        self.encrypt_register(&mut reg);
        store_block(&reg)
    }

    /// Decrypts one 8-byte block.
    ///
    /// Inverts [`encrypt_block`](Self::encrypt_block) for the same key and
    /// round count.
    pub fn decrypt_block(&self, block: &[u8; BLOCK_SIZE]) -> [u8; BLOCK_SIZE] {
        let mut reg = load_block(block);
        self.decrypt_register(&mut reg);
        store_block(&reg)
    }

    #[inline]
    pub(crate) fn encrypt_register(&self, reg: &mut Register) {
        encrypt_rounds(reg, self.rounds, &self.round_keys, |_, _| {});
    }

    #[inline]
    pub(crate) fn decrypt_register(&self, reg: &mut Register) {
        decrypt_rounds(reg, self.rounds, &self.round_keys);
    }
}

impl fmt::Debug for Multi2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Multi2")
            .field("rounds", &self.rounds)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_key() -> [u8; KEY_SIZE] {
        let mut key = [0u8; KEY_SIZE];
        key[32..].copy_from_slice(&[0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF]);
        key
    }

    #[test]
    fn test_new_uses_default_rounds() {
        let cipher = Multi2::new(&reference_key()).unwrap();
        assert_eq!(cipher.rounds(), DEFAULT_ROUNDS);
        assert_eq!(cipher.block_size(), BLOCK_SIZE);
    }

    #[test]
    fn test_zero_rounds_normalized() {
        let cipher = Multi2::with_rounds(&reference_key(), 0).unwrap();
        assert_eq!(cipher.rounds(), 128);
    }

    #[test]
    fn test_custom_rounds_kept() {
        for rounds in [1u32, 3, 9, 1000, u32::MAX] {
            let cipher = Multi2::from_key(&reference_key(), rounds);
            assert_eq!(cipher.rounds(), rounds);
        }
    }

    #[test]
    fn test_invalid_key_sizes() {
        for len in [0usize, 1, 8, 16, 32, 39, 41, 64] {
            let key = vec![0u8; len];
            assert_eq!(
                Multi2::new(&key).unwrap_err(),
                Multi2Error::InvalidKeySize(len)
            );
        }
    }

    #[test]
    fn test_round_keys_flattened_in_order() {
        let cipher = Multi2::new(&reference_key()).unwrap();
        assert_eq!(
            cipher.round_keys(),
            [
                0x0123_4576,
                0x2928_681C,
                0xCCE9_4DFB,
                0xE5C1_25E7,
                0x699D_2715,
                0x2465_8B4A,
                0xDC66_9F66,
                0xF803_142C,
            ]
        );
    }

    #[test]
    fn test_reference_vectors() {
        let cipher = Multi2::new(&reference_key()).unwrap();
        let pt1 = [0, 0, 0, 0, 0, 0, 0, 1];
        let ct1 = [0xF8, 0x94, 0x40, 0x84, 0x5E, 0x11, 0xCF, 0x89];
        let pt2 = [0, 0, 0, 0, 0, 0, 0, 2];
        let ct2 = [0x6E, 0xFA, 0x3A, 0x6F, 0xA8, 0x60, 0xF2, 0xA6];
        assert_eq!(cipher.encrypt_block(&pt1), ct1);
        assert_eq!(cipher.decrypt_block(&ct1), pt1);
        assert_eq!(cipher.encrypt_block(&pt2), ct2);
        assert_eq!(cipher.decrypt_block(&ct2), pt2);
    }

    #[test]
    fn test_debug_hides_round_keys() {
        let cipher = Multi2::new(&reference_key()).unwrap();
        let shown = format!("{:?}", cipher);
        assert_eq!(shown, "Multi2 { rounds: 128, .. }");
    }

    #[test]
    fn test_clone_is_equivalent() {
        let cipher = Multi2::with_rounds(&reference_key(), 9).unwrap();
        let copy = cipher.clone();
        let block = *b"abcdefgh";
        assert_eq!(cipher.encrypt_block(&block), copy.encrypt_block(&block));
        assert_eq!(cipher.round_keys(), copy.round_keys());
    }
}
