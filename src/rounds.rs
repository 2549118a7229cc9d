//! Forward and reverse round drivers.
//!
//! Rounds are applied in groups of four (`PI1, PI2, PI3, PI4`). Successive
//! groups alternate between the two key windows, starting with window 0.
//! Any round count is valid; the forward driver may stop partway through a
//! group, and the reverse driver starts by undoing that partial group.

use crate::primitives::{KeyWindow, Register, Step, CYCLE};

/// Reverse application order within one group.
///
/// Undoing a group of `n` applied primitives runs the last `n` entries.
const UNDO_ORDER: [Step; 4] = [Step::Pi4, Step::Pi3, Step::Pi2, Step::Pi1];

/// Applies `rounds` primitives to `reg`, calling `observe` after each one.
///
/// # Parameters
/// - `reg`: The working register, modified in place.
/// - `rounds`: Number of primitives to apply. Zero applies nothing.
/// - `keys`: The two key windows groups alternate between.
/// - `observe`: Invoked with each applied step and the updated register.
#[inline]
pub(crate) fn encrypt_rounds<F>(
    reg: &mut Register,
    rounds: u32,
    keys: &[KeyWindow; 2],
    mut observe: F,
) where
    F: FnMut(Step, &Register),
{
    if rounds == 0 {
        return;
    }
    let mut applied = 0u32;
    let mut window = 0usize;
    loop {
        for step in CYCLE {
            step.apply(reg, &keys[window]);
            observe(step, &*reg);
            applied += 1;
            if applied == rounds {
                return;
            }
        }
        window ^= 1;
    }
}

/// Undoes `rounds` primitives previously applied by [`encrypt_rounds`]
/// with the same `keys`.
#[inline]
pub(crate) fn decrypt_rounds(reg: &mut Register, rounds: u32, keys: &[KeyWindow; 2]) {
    let mut remaining = rounds;
    let mut window = final_window(rounds);
    while remaining > 0 {
        let steps = undo_steps(remaining);
        for &step in steps {
            step.apply(reg, &keys[window]);
        }
        remaining -= steps.len() as u32;
        window ^= 1;
    }
}

/// Number of primitives the forward driver applied in its last group,
/// given `remaining` rounds still to undo.
///
/// Returns 1..=4 for any non-zero input, 0 when nothing is left.
#[inline(always)]
pub(crate) fn group_len(remaining: u32) -> usize {
    if remaining == 0 {
        return 0;
    }
    ((remaining - 1) % 4 + 1) as usize
}

/// Primitives to run, in order, to undo the last group of `remaining` rounds.
#[inline(always)]
pub(crate) fn undo_steps(remaining: u32) -> &'static [Step] {
    &UNDO_ORDER[UNDO_ORDER.len() - group_len(remaining)..]
}

/// Key window used by the forward driver's last (possibly partial) group.
#[inline(always)]
pub(crate) fn final_window(rounds: u32) -> usize {
    if rounds == 0 {
        return 0;
    }
    (((rounds - 1) / 4) & 1) as usize
}
