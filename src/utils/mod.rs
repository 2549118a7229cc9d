//! Word-level helpers shared by the key schedule and the round drivers.

pub(crate) mod bits;
pub(crate) mod converter;
