// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Minimax polynomial kernels on the normalized mantissa.
//!
//! Coefficients are s2.30, lowest degree first. Every family except sine
//! is anchored at the left end of its interval, so `rcp(0) == 1`,
//! `log(0) == 0` and `exp2(0) == 1` hold exactly.

use super::bits::qmul30;

/// Evaluate `c[0] + u*(c[1] + u*(c[2] + ...))` in s2.30.
#[inline(always)]
pub(crate) fn horner<const N: usize>(u: i32, c: &[i32; N]) -> i32 {
    let mut y = qmul30(u, c[N - 1]);
    let mut k = N - 2;
    while k > 0 {
        y = qmul30(u, y.wrapping_add(c[k]));
        k -= 1;
    }
    y.wrapping_add(c[0])
}

const RCP_POLY4: [i32; 5] = [1073741824, -1063617193, 956143404, -611220137, 182096241];
const RCP_POLY6: [i32; 7] = [
    1073741824, -1073204750, 1061941153, -984746175, 744552480, -370035502, 84629573,
];

const SQRT_POLY3: [i32; 4] = [1073741824, 534428981, -116819625, 27255061];
const SQRT_POLY4: [i32; 5] = [1073741824, 536433228, -129371085, 49350389, -11666427];

const RSQRT_POLY3: [i32; 4] = [1073741824, -524116857, 307250408, -98156718];
const RSQRT_POLY5: [i32; 6] = [
    1073741824, -536243188, 392484253, -279608357, 144814704, -35951269,
];

const LOG_POLY5: [i32; 6] = [0, 1073198855, -528173503, 310797142, -146071713, 34520962];
const LOG2_POLY5: [i32; 6] = [0, 1548298667, -761993293, 448385496, -210736936, 49803221];

const EXP2_POLY3: [i32; 4] = [1073741824, 746848875, 242850504, 83909461];
const EXP2_POLY4: [i32; 5] = [1073741824, 744122959, 259250285, 55781183, 14582927];
const EXP2_POLY5: [i32; 6] = [1073741824, 744266800, 257862104, 59953402, 9635049, 2024342];

// Even part of sin(πz/2) / z, evaluated on z².
const SIN_POLY2: [i32; 3] = [1686483147, -690928098, 78333341];
const SIN_POLY3: [i32; 4] = [1686628442, -693557728, 85363180, -4693342];
const SIN_POLY4: [i32; 5] = [1686629706, -693598307, 85566408, -5018839, 162864];

const ATAN_POLY4: [i32; 5] = [0, 1076430417, -14692098, -369388918, 151088904];

/// `1 / (1 + a)`, degree 4.
#[inline]
pub fn rcp_poly4(a: i32) -> i32 {
    horner(a, &RCP_POLY4)
}

/// `1 / (1 + a)`, degree 6.
#[inline]
pub fn rcp_poly6(a: i32) -> i32 {
    horner(a, &RCP_POLY6)
}

/// `sqrt(1 + a)`, degree 3.
#[inline]
pub fn sqrt_poly3(a: i32) -> i32 {
    horner(a, &SQRT_POLY3)
}

/// `sqrt(1 + a)`, degree 4.
#[inline]
pub fn sqrt_poly4(a: i32) -> i32 {
    horner(a, &SQRT_POLY4)
}

/// `1 / sqrt(1 + a)`, degree 3.
#[inline]
pub fn rsqrt_poly3(a: i32) -> i32 {
    horner(a, &RSQRT_POLY3)
}

/// `1 / sqrt(1 + a)`, degree 5.
#[inline]
pub fn rsqrt_poly5(a: i32) -> i32 {
    horner(a, &RSQRT_POLY5)
}

/// `ln(1 + a)`, degree 5.
#[inline]
pub fn log_poly5(a: i32) -> i32 {
    horner(a, &LOG_POLY5)
}

/// `log2(1 + a)`, degree 5.
#[inline]
pub fn log2_poly5(a: i32) -> i32 {
    horner(a, &LOG2_POLY5)
}

/// `2^a` for `a` in `[0, 1)`, degree 3.
#[inline]
pub fn exp2_poly3(a: i32) -> i32 {
    horner(a, &EXP2_POLY3)
}

/// `2^a`, degree 4.
#[inline]
pub fn exp2_poly4(a: i32) -> i32 {
    horner(a, &EXP2_POLY4)
}

/// `2^a`, degree 5.
#[inline]
pub fn exp2_poly5(a: i32) -> i32 {
    horner(a, &EXP2_POLY5)
}

/// `sin(πz/2) / z` where `a = z²`, `z` in `[0, 1]`.
///
/// The caller multiplies by `z` to recover the odd polynomial.
#[inline]
pub fn sin_poly2(a: i32) -> i32 {
    horner(a, &SIN_POLY2)
}

/// See [`sin_poly2`].
#[inline]
pub fn sin_poly3(a: i32) -> i32 {
    horner(a, &SIN_POLY3)
}

/// See [`sin_poly2`].
#[inline]
pub fn sin_poly4(a: i32) -> i32 {
    horner(a, &SIN_POLY4)
}

/// `atan(a)` for `a` in `[0, 1]`, degree 4.
#[inline]
pub fn atan_poly4(a: i32) -> i32 {
    horner(a, &ATAN_POLY4)
}
