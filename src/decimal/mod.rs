// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Decimal string conversion.
//!
//! Both directions are integer-only. Formatting rounds to the nearest
//! representable decimal at the width's digit budget, and parsing rounds to
//! the nearest fixed-point value, so `parse(format(v)) == v` for every
//! normal value of every width.

pub mod format;
pub mod parse;

/// `10^n` for `n <= 38`.
#[inline]
pub(crate) const fn pow10(n: u32) -> u128 {
    let mut p = 1u128;
    let mut i = 0;
    while i < n {
        p *= 10;
        i += 1;
    }
    p
}
