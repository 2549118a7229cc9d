//! MULTI2 block cipher.
//!
//! MULTI2 is a Feistel-style cipher operating on 64-bit blocks (two `u32`
//! words) under a 320-bit key. The key carries eight 32-bit subkeys and two
//! 32-bit seed words; the round count is configurable and defaults to 128.
//!
//! This crate implements the single-block primitive only. Chaining modes,
//! padding and key derivation belong to the caller, either through the
//! [`BlockCipher`] trait or, with the `cipher` feature, the RustCrypto
//! traits.
//!
//! # Architecture
//!
//! ```text
//! primitives  (PI1..PI4 over the (P0, P1) working register)
//!     ↑
//! rounds      (forward driver / reverse state table)
//!     ↑
//! key_schedule (9 forward rounds over the seed → round-key table)
//!     ↑
//! Multi2      (immutable handle: round keys + round count)
//! ```
//!
//! # Examples
//!
//! Encrypt and decrypt one block with the default 128 rounds:
//!
//! ```
//! use multi2::Multi2;
//!
//! let mut key = [0u8; 40];
//! key[32..].copy_from_slice(&[0x01, 0x23, 0x45, 0x67, 0x89, 0xAB, 0xCD, 0xEF]);
//!
//! let cipher = Multi2::new(&key).unwrap();
//! let plaintext = [0, 0, 0, 0, 0, 0, 0, 1];
//!
//! let ciphertext = cipher.encrypt_block(&plaintext);
//! assert_eq!(ciphertext, [0xF8, 0x94, 0x40, 0x84, 0x5E, 0x11, 0xCF, 0x89]);
//! assert_eq!(cipher.decrypt_block(&ciphertext), plaintext);
//! ```
//!
//! Any non-zero round count is accepted, including ones that stop partway
//! through a group of four:
//!
//! ```
//! use multi2::Multi2;
//!
//! let cipher = Multi2::with_rounds(&[0x5A; 40], 9).unwrap();
//! let block = cipher.encrypt_block(b"partial!");
//! assert_eq!(&cipher.decrypt_block(&block), b"partial!");
//! ```

#![deny(clippy::all)]

pub mod error;

mod block_cipher;
#[cfg(feature = "cipher")]
mod compat;
pub(crate) mod key_schedule;
mod multi2;
pub(crate) mod primitives;
pub(crate) mod rounds;
pub(crate) mod utils;

pub use block_cipher::BlockCipher;
pub use error::Multi2Error;
pub use multi2::{Multi2, BLOCK_SIZE, DEFAULT_ROUNDS, KEY_SIZE};
