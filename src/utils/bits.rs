//! Bit rotation utilities for 32-bit words.
//!
//! Rotation amounts are taken modulo 32, so a shift of 0 or 32 leaves the
//! word unchanged. The boundary is handled before shifting because
//! `x >> 32` on a `u32` overflows.

/// Number of bits in a cipher word.
const WORD_BITS: u32 = 32;

/// Rotates a 32-bit word left by `shift` bit positions (circular).
///
/// # Parameters
/// - `value`: The word to rotate.
/// - `shift`: Number of bit positions to rotate, reduced modulo 32.
///
/// # Returns
/// The rotated word.
#[inline(always)]
pub(crate) fn word_left_rotation(value: u32, shift: u32) -> u32 {
    let shift = shift % WORD_BITS;
    if shift == 0 {
        return value;
    }
    (value << shift) | (value >> (WORD_BITS - shift))
}
