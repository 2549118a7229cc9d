//! RustCrypto `cipher` trait implementations.
//!
//! Lets [`Multi2`] drive the block modes from the RustCrypto ecosystem.
//! Keys built through [`KeyInit`] use the default round count; use
//! [`Multi2::from_key`] for anything else.

use cipher::{
    consts::{U1, U40, U8},
    inout::InOut,
    Block, BlockBackend, BlockClosure, BlockDecrypt, BlockEncrypt, BlockSizeUser, Key, KeyInit,
    KeySizeUser, ParBlocksSizeUser,
};

use crate::multi2::{Multi2, BLOCK_SIZE, DEFAULT_ROUNDS, KEY_SIZE};
use crate::utils::converter::{load_block, store_block};

impl KeySizeUser for Multi2 {
    type KeySize = U40;
}

impl KeyInit for Multi2 {
    fn new(key: &Key<Self>) -> Self {
        let mut raw = [0u8; KEY_SIZE];
        raw.copy_from_slice(key);
        Multi2::from_key(&raw, DEFAULT_ROUNDS)
    }
}

impl BlockSizeUser for Multi2 {
    type BlockSize = U8;
}

impl cipher::BlockCipher for Multi2 {}

impl BlockEncrypt for Multi2 {
    fn encrypt_with_backend(&self, f: impl BlockClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut EncBackend(self));
    }
}

impl BlockDecrypt for Multi2 {
    fn decrypt_with_backend(&self, f: impl BlockClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut DecBackend(self));
    }
}

/// Copies a block out of an in/out pair into the working register.
#[inline(always)]
fn read_in(block: &InOut<'_, '_, Block<Multi2>>) -> [u32; 2] {
    let mut bytes = [0u8; BLOCK_SIZE];
    bytes.copy_from_slice(block.get_in());
    load_block(&bytes)
}

struct EncBackend<'a>(&'a Multi2);

impl BlockSizeUser for EncBackend<'_> {
    type BlockSize = U8;
}

impl ParBlocksSizeUser for EncBackend<'_> {
    type ParBlocksSize = U1;
}

impl BlockBackend for EncBackend<'_> {
    #[inline]
    fn proc_block(&mut self, mut block: InOut<'_, '_, Block<Self>>) {
        let mut reg = read_in(&block);
        self.0.encrypt_register(&mut reg);
        block.get_out().copy_from_slice(&store_block(&reg));
    }
}

struct DecBackend<'a>(&'a Multi2);

impl BlockSizeUser for DecBackend<'_> {
    type BlockSize = U8;
}

impl ParBlocksSizeUser for DecBackend<'_> {
    type ParBlocksSize = U1;
}

impl BlockBackend for DecBackend<'_> {
    #[inline]
    fn proc_block(&mut self, mut block: InOut<'_, '_, Block<Self>>) {
        let mut reg = read_in(&block);
        self.0.decrypt_register(&mut reg);
        block.get_out().copy_from_slice(&store_block(&reg));
    }
}
