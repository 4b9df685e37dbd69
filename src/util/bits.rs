// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Leading-zero count, signed shifts, and the s2.30 multiply.

/// One in the s2.30 scratch format.
pub const ONE_30: i32 = 1 << 30;

/// √2 in s2.30.
pub const SQRT2_30: i32 = 1_518_500_250;

/// √2 / 2 in s2.30.
pub const HALF_SQRT2_30: i32 = 759_250_125;

/// Number of leading zero bits. `nlz32(0) == 32`.
#[inline(always)]
pub const fn nlz32(x: u32) -> i32 {
    x.leading_zeros() as i32
}

/// Number of leading zero bits. `nlz64(0) == 64`.
#[inline(always)]
pub const fn nlz64(x: u64) -> i32 {
    x.leading_zeros() as i32
}

/// Arithmetic right shift; a negative `amount` shifts left.
///
/// Right shifts past the width saturate to the sign fill, left shifts past
/// the width produce 0. Bits shifted out on the left are discarded.
#[inline(always)]
pub const fn shr32(value: i32, amount: i32) -> i32 {
    if amount >= 0 {
        value >> if amount > 31 { 31 } else { amount }
    } else {
        let left = amount.unsigned_abs();
        if left >= 32 {
            0
        } else {
            value.wrapping_shl(left)
        }
    }
}

/// 64-bit counterpart of [`shr32`].
#[inline(always)]
pub const fn shr64(value: i64, amount: i32) -> i64 {
    if amount >= 0 {
        value >> if amount > 63 { 63 } else { amount }
    } else {
        let left = amount.unsigned_abs();
        if left >= 64 {
            0
        } else {
            value.wrapping_shl(left)
        }
    }
}

/// Multiply two s2.30 values, truncating toward negative infinity.
#[inline(always)]
pub const fn qmul30(a: i32, b: i32) -> i32 {
    ((a as i64 * b as i64) >> 30) as i32
}

/// Truncated integer square root, one result bit per iteration.
#[inline]
pub const fn isqrt64(n: u64) -> u64 {
    let mut rem = n;
    let mut root = 0u64;
    let mut bit = 1u64 << 62;
    while bit > n {
        bit >>= 2;
    }
    while bit != 0 {
        if rem >= root + bit {
            rem -= root + bit;
            root = (root >> 1) + bit;
        } else {
            root >>= 1;
        }
        bit >>= 2;
    }
    root
}

/// 128-bit counterpart of [`isqrt64`].
#[inline]
pub const fn isqrt128(n: u128) -> u128 {
    let mut rem = n;
    let mut root = 0u128;
    let mut bit = 1u128 << 126;
    while bit > n {
        bit >>= 2;
    }
    while bit != 0 {
        if rem >= root + bit {
            rem -= root + bit;
            root = (root >> 1) + bit;
        } else {
            root >>= 1;
        }
        bit >>= 2;
    }
    root
}
