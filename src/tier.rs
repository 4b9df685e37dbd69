// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Accuracy tiers.
//!
//! A tier is a zero-sized policy type that picks one kernel per function
//! family. Every catalogue function is generic over `T: Tier`, so the choice
//! is made at the call site and fully inlined:
//!
//! ```
//! use valori_fixed::{Fixed64, Fastest, Precise};
//!
//! let x = Fixed64::from_int(10);
//! let exact = x.log::<Precise>();
//! let rough = x.log::<Fastest>();
//! assert!((exact.to_f64() - rough.to_f64()).abs() < 1e-3);
//! ```
//!
//! All kernels operate on the s2.30 normalized mantissa offset, see
//! [`crate::util`].

use crate::util::{lut, poly};

mod sealed {
    pub trait Sealed {}
}

/// Kernel selection for one accuracy tier.
pub trait Tier: sealed::Sealed + Copy + Default + core::fmt::Debug + 'static {
    /// Short lowercase name, used in reports.
    const NAME: &'static str;

    /// Division uses exact wide-integer division instead of a reciprocal.
    const EXACT_DIVISION: bool;

    /// `1 / (1 + a)`.
    fn rcp(a: i32) -> i32;
    /// `sqrt(1 + a)`.
    fn sqrt(a: i32) -> i32;
    /// `1 / sqrt(1 + a)`.
    fn rsqrt(a: i32) -> i32;
    /// `ln(1 + a)`.
    fn log(a: i32) -> i32;
    /// `log2(1 + a)`.
    fn log2(a: i32) -> i32;
    /// `2^a`.
    fn exp2(a: i32) -> i32;
    /// `sin(πz/2) / z` on `a = z²`.
    fn sin(a: i32) -> i32;
    /// `atan(a)` for `a` in `[0, 1]`.
    fn atan(a: i32) -> i32;
}

/// Highest accuracy: table-driven kernels and exact division.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Precise;

/// Plain polynomials of moderate degree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fast;

/// Lowest-degree polynomials.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fastest;

impl sealed::Sealed for Precise {}
impl sealed::Sealed for Fast {}
impl sealed::Sealed for Fastest {}

impl Tier for Precise {
    const NAME: &'static str = "precise";
    const EXACT_DIVISION: bool = true;

    #[inline(always)]
    fn rcp(a: i32) -> i32 {
        lut::rcp_poly4_lut8(a)
    }
    #[inline(always)]
    fn sqrt(a: i32) -> i32 {
        lut::sqrt_poly3_lut8(a)
    }
    #[inline(always)]
    fn rsqrt(a: i32) -> i32 {
        lut::rsqrt_poly3_lut16(a)
    }
    #[inline(always)]
    fn log(a: i32) -> i32 {
        lut::log_poly5_lut8(a)
    }
    #[inline(always)]
    fn log2(a: i32) -> i32 {
        lut::log2_poly4_lut16(a)
    }
    #[inline(always)]
    fn exp2(a: i32) -> i32 {
        poly::exp2_poly5(a)
    }
    #[inline(always)]
    fn sin(a: i32) -> i32 {
        poly::sin_poly4(a)
    }
    #[inline(always)]
    fn atan(a: i32) -> i32 {
        lut::atan_poly5_lut8(a)
    }
}

impl Tier for Fast {
    const NAME: &'static str = "fast";
    const EXACT_DIVISION: bool = false;

    #[inline(always)]
    fn rcp(a: i32) -> i32 {
        poly::rcp_poly6(a)
    }
    #[inline(always)]
    fn sqrt(a: i32) -> i32 {
        poly::sqrt_poly4(a)
    }
    #[inline(always)]
    fn rsqrt(a: i32) -> i32 {
        poly::rsqrt_poly5(a)
    }
    #[inline(always)]
    fn log(a: i32) -> i32 {
        lut::log_poly3_lut8(a)
    }
    #[inline(always)]
    fn log2(a: i32) -> i32 {
        lut::log2_poly3_lut16(a)
    }
    #[inline(always)]
    fn exp2(a: i32) -> i32 {
        poly::exp2_poly4(a)
    }
    #[inline(always)]
    fn sin(a: i32) -> i32 {
        poly::sin_poly3(a)
    }
    #[inline(always)]
    fn atan(a: i32) -> i32 {
        lut::atan_poly3_lut8(a)
    }
}

impl Tier for Fastest {
    const NAME: &'static str = "fastest";
    const EXACT_DIVISION: bool = false;

    #[inline(always)]
    fn rcp(a: i32) -> i32 {
        poly::rcp_poly4(a)
    }
    #[inline(always)]
    fn sqrt(a: i32) -> i32 {
        poly::sqrt_poly3(a)
    }
    #[inline(always)]
    fn rsqrt(a: i32) -> i32 {
        poly::rsqrt_poly3(a)
    }
    #[inline(always)]
    fn log(a: i32) -> i32 {
        poly::log_poly5(a)
    }
    #[inline(always)]
    fn log2(a: i32) -> i32 {
        poly::log2_poly5(a)
    }
    #[inline(always)]
    fn exp2(a: i32) -> i32 {
        poly::exp2_poly3(a)
    }
    #[inline(always)]
    fn sin(a: i32) -> i32 {
        poly::sin_poly2(a)
    }
    #[inline(always)]
    fn atan(a: i32) -> i32 {
        poly::atan_poly4(a)
    }
}
