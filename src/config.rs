// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Configuration constants.

/// Number of fractional bits of [`Fixed32`](crate::Fixed32) (Q16.16).
pub const FRAC_BITS_32: u32 = 16;

/// Number of fractional bits of [`Fixed64`](crate::Fixed64) (Q32.32).
pub const FRAC_BITS_64: u32 = 32;

/// Number of fractional bits of [`Fixed48`](crate::Fixed48) (Q15.32).
pub const FRAC_BITS_48: u32 = 32;

/// Scaling factor for Q16.16 (1 << FRAC_BITS_32).
pub const SCALE_32: i32 = 1 << FRAC_BITS_32;

/// Scaling factor for Q32.32 (1 << FRAC_BITS_64).
pub const SCALE_64: i64 = 1 << FRAC_BITS_64;

/// Fractional decimal digits emitted when formatting a Fixed32.
pub const DECIMAL_DIGITS_32: u32 = 10;

/// Fractional decimal digits emitted when formatting a Fixed64.
pub const DECIMAL_DIGITS_64: u32 = 19;

/// Fractional decimal digits emitted when formatting a Fixed48.
pub const DECIMAL_DIGITS_48: u32 = 10;

/// Longest decimal rendering of a Fixed32, e.g. `-32767.9999847412`.
pub const MAX_DECIMAL_LEN_32: usize = 1 + 5 + 1 + DECIMAL_DIGITS_32 as usize;

/// Longest decimal rendering of a Fixed64.
pub const MAX_DECIMAL_LEN_64: usize = 1 + 10 + 1 + DECIMAL_DIGITS_64 as usize;

/// Longest decimal rendering of a Fixed48.
pub const MAX_DECIMAL_LEN_48: usize = 1 + 5 + 1 + DECIMAL_DIGITS_48 as usize;
