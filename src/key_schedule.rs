//! MULTI2 key schedule.
//!
//! The 40-byte key splits into eight subkeys `SK` and a two-word seed `DK`.
//! The seed is pushed through nine forward rounds keyed by `SK`; the words
//! written by rounds 2 through 9 become the round-key table `UK`.

use crate::primitives::{KeyWindow, Register, Step};
use crate::rounds::encrypt_rounds;
use crate::utils::converter::load_block;
use crate::KEY_SIZE;

/// Rounds run over the seed register during expansion.
const SCHEDULE_ROUNDS: u32 = 9;

/// Splits a raw key into the subkey windows `SK[0..3]`, `SK[4..7]` and the
/// seed register `(DK[0], DK[1])`, reading every word big-endian.
pub(crate) fn split_key(key: &[u8; KEY_SIZE]) -> ([KeyWindow; 2], Register) {
    let mut sk = [[0u32; 4]; 2];
    for (i, chunk) in key[..32].chunks_exact(4).enumerate() {
        sk[i / 4][i % 4] = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
    }
    let mut dk = [0u8; 8];
    dk.copy_from_slice(&key[32..]);
    (sk, load_block(&dk))
}

/// Derives the round-key table from the subkeys and seed.
///
/// The first round's output is discarded; the following eight are recorded
/// in order and returned as the windows `UK[0..3]`, `UK[4..7]`.
pub(crate) fn expand(sk: &[KeyWindow; 2], dk: Register) -> [KeyWindow; 2] {
    let mut uk = [[0u32; 4]; 2];
    let mut reg = dk;
    let mut round = 0usize;
    encrypt_rounds(&mut reg, SCHEDULE_ROUNDS, sk, |step: Step, reg: &Register| {
        if round > 0 {
            let n = round - 1;
            uk[n / 4][n % 4] = step.output(reg);
        }
        round += 1;
    });
    uk
}
