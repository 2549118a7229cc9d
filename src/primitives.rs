//! MULTI2 round primitives.
//!
//! Four transformations over the `(P0, P1)` working register. Each one
//! rewrites exactly one half of the register as a function of the other
//! half, so every primitive is its own inverse for a fixed key window.
//! All arithmetic wraps modulo 2^32.

use crate::utils::bits::word_left_rotation as rotl;

/// The `(P0, P1)` working register.
pub(crate) type Register = [u32; 2];

/// A four-word slice of round-key material, `K[0..3]`.
pub(crate) type KeyWindow = [u32; 4];

/// One round primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Step {
    /// `P1 ^= P0`. Consumes no key material.
    Pi1,
    /// Mixes `P1` with `K[0]` into `P0`.
    Pi2,
    /// Mixes `P0` with `K[1]` and `K[2]` into `P1`.
    Pi3,
    /// Mixes `P1` with `K[3]` into `P0`.
    Pi4,
}

/// Forward application order within one group of four rounds.
pub(crate) const CYCLE: [Step; 4] = [Step::Pi1, Step::Pi2, Step::Pi3, Step::Pi4];

impl Step {
    /// Applies the primitive to `reg` in place, reading `key` as needed.
    #[inline(always)]
    pub(crate) fn apply(self, reg: &mut Register, key: &KeyWindow) {
        match self {
            Step::Pi1 => pi1(reg),
            Step::Pi2 => pi2(reg, key),
            Step::Pi3 => pi3(reg, key),
            Step::Pi4 => pi4(reg, key),
        }
    }

    /// Returns the register half this primitive writes.
    #[inline(always)]
    pub(crate) fn output(self, reg: &Register) -> u32 {
        match self {
            Step::Pi1 | Step::Pi3 => reg[1],
            Step::Pi2 | Step::Pi4 => reg[0],
        }
    }
}

#[inline(always)]
fn pi1(reg: &mut Register) {
    reg[1] ^= reg[0];
}

#[inline(always)]
fn pi2(reg: &mut Register, key: &KeyWindow) {
    let mut t = reg[1].wrapping_add(key[0]);
    t = rotl(t, 1).wrapping_add(t).wrapping_sub(1);
    t = rotl(t, 4) ^ t;
    reg[0] ^= t;
}

#[inline(always)]
fn pi3(reg: &mut Register, key: &KeyWindow) {
    let mut t = reg[0].wrapping_add(key[1]);
    t = rotl(t, 2).wrapping_add(t).wrapping_add(1);
    t = rotl(t, 8) ^ t;
    t = t.wrapping_add(key[2]);
    t = rotl(t, 1).wrapping_sub(t);
    t = rotl(t, 16) ^ (reg[0] | t);
    reg[1] ^= t;
}

#[inline(always)]
fn pi4(reg: &mut Register, key: &KeyWindow) {
    let mut t = reg[1].wrapping_add(key[3]);
    t = rotl(t, 2).wrapping_add(t).wrapping_add(1);
    reg[0] ^= t;
}
