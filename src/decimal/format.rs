// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Fixed-point to decimal.

use core::fmt;

use super::pow10;
use crate::config::{
    DECIMAL_DIGITS_32, DECIMAL_DIGITS_48, DECIMAL_DIGITS_64, FRAC_BITS_32, FRAC_BITS_48,
    FRAC_BITS_64, MAX_DECIMAL_LEN_64,
};
use crate::types::fixed32::Fixed32;
use crate::types::fixed48::Fixed48;
use crate::types::fixed64::Fixed64;

/// Stack buffer holding one rendered value.
pub(crate) struct DecimalBuf {
    bytes: [u8; MAX_DECIMAL_LEN_64],
    len: usize,
}

impl DecimalBuf {
    const fn new() -> Self {
        DecimalBuf {
            bytes: [0; MAX_DECIMAL_LEN_64],
            len: 0,
        }
    }

    #[inline]
    fn push(&mut self, b: u8) {
        if self.len < self.bytes.len() {
            self.bytes[self.len] = b;
            self.len += 1;
        }
    }

    fn push_str(&mut self, s: &str) {
        for &b in s.as_bytes() {
            self.push(b);
        }
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    pub(crate) fn as_str(&self) -> &str {
        // Only ASCII is ever pushed.
        core::str::from_utf8(self.as_bytes()).unwrap_or("")
    }

    /// Copy into `out`, truncating. Returns the untruncated length.
    pub(crate) fn copy_into(&self, out: &mut [u8]) -> usize {
        let n = self.len.min(out.len());
        out[..n].copy_from_slice(&self.bytes[..n]);
        self.len
    }
}

/// Render `±magnitude / 2^frac_bits` with `frac_digits` fractional digits.
pub(crate) fn render(negative: bool, magnitude: u128, frac_bits: u32, frac_digits: u32) -> DecimalBuf {
    let mut out = DecimalBuf::new();

    let mut int_part = magnitude >> frac_bits;
    let frac_part = magnitude & ((1u128 << frac_bits) - 1);

    // Round the binary fraction to the decimal budget, carrying into the
    // integer part when it rounds up to a whole unit.
    let scale = pow10(frac_digits);
    let mut dec = (frac_part * scale + (1u128 << (frac_bits - 1))) >> frac_bits;
    if dec >= scale {
        int_part += 1;
        dec -= scale;
    }

    if negative && (int_part != 0 || dec != 0) {
        out.push(b'-');
    }

    let mut place = 1u128;
    while place <= int_part / 10 {
        place *= 10;
    }
    loop {
        out.push(b'0' + (int_part / place) as u8);
        int_part %= place;
        if place == 1 {
            break;
        }
        place /= 10;
    }

    if dec != 0 {
        out.push(b'.');
        let mut place = scale / 10;
        while dec != 0 {
            out.push(b'0' + (dec / place) as u8);
            dec %= place;
            place /= 10;
        }
    }
    out
}

impl Fixed32 {
    pub(crate) fn to_decimal(self) -> DecimalBuf {
        render(
            self.0 < 0,
            self.0.unsigned_abs() as u128,
            FRAC_BITS_32,
            DECIMAL_DIGITS_32,
        )
    }

    /// Write the decimal form into `out`, truncating if it does not fit.
    /// Returns the full length, like `snprintf` without the terminator.
    pub fn format_into(self, out: &mut [u8]) -> usize {
        self.to_decimal().copy_into(out)
    }
}

impl Fixed64 {
    pub(crate) fn to_decimal(self) -> DecimalBuf {
        render(
            self.0 < 0,
            self.0.unsigned_abs() as u128,
            FRAC_BITS_64,
            DECIMAL_DIGITS_64,
        )
    }

    /// See [`Fixed32::format_into`].
    pub fn format_into(self, out: &mut [u8]) -> usize {
        self.to_decimal().copy_into(out)
    }
}

impl Fixed48 {
    /// Sentinels render as `inf`, `-inf` and `nan`.
    pub(crate) fn to_decimal(self) -> DecimalBuf {
        if self.is_nan() || self.is_infinite() {
            let mut out = DecimalBuf::new();
            out.push_str(match self {
                Fixed48::POSITIVE_INFINITY => "inf",
                Fixed48::NEGATIVE_INFINITY => "-inf",
                _ => "nan",
            });
            return out;
        }
        let wide = self.to_fixed64().0;
        render(wide < 0, wide.unsigned_abs() as u128, FRAC_BITS_48, DECIMAL_DIGITS_48)
    }

    /// See [`Fixed32::format_into`].
    pub fn format_into(self, out: &mut [u8]) -> usize {
        self.to_decimal().copy_into(out)
    }
}

impl fmt::Display for Fixed32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.to_decimal().as_str())
    }
}

impl fmt::Display for Fixed64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.to_decimal().as_str())
    }
}

impl fmt::Display for Fixed48 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.to_decimal().as_str())
    }
}
