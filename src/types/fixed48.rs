// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Packed Q15.32 value type.
//!
//! Layout of the 64-bit storage word:
//!
//! ```text
//!  63   62..47   46..32    31..0
//! sign  zero     integer   fraction
//! ```
//!
//! For normal values bits 47..=62 are zero, so signed comparison of the raw
//! words matches numeric order. Three reserved words with non-zero bits in
//! that range act as opaque infinity and NaN sentinels. They are only ever
//! produced by explicit construction; arithmetic on them is unspecified.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::types::fixed32::Fixed32;
use crate::types::fixed64::Fixed64;

/// Packed 48-bit fixed-point number stored in an `i64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Fixed48(pub i64);

/// Bits kept by packing: sign, integer and fraction.
pub const POSITIVE_MASK: i64 = 0x8000_7FFF_FFFF_FFFFu64 as i64;

/// Bits that must be zero in a normal value.
pub const RESERVED_MASK: i64 = !POSITIVE_MASK;

impl Fixed48 {
    pub const SHIFT: u32 = Fixed64::SHIFT;
    pub const FRACTION_MASK: i64 = Fixed64::FRACTION_MASK;
    pub const INTEGER_MASK: i64 = 0x8000_7FFF_0000_0000u64 as i64;

    pub const ZERO: Fixed48 = Fixed48::from_fixed64(Fixed64::ZERO);
    pub const NEG1: Fixed48 = Fixed48::from_fixed64(Fixed64::NEG1);
    pub const ONE: Fixed48 = Fixed48::from_fixed64(Fixed64::ONE);
    pub const TWO: Fixed48 = Fixed48::from_fixed64(Fixed64::TWO);
    pub const THREE: Fixed48 = Fixed48::from_fixed64(Fixed64::THREE);
    pub const FOUR: Fixed48 = Fixed48::from_fixed64(Fixed64::FOUR);
    pub const HALF: Fixed48 = Fixed48::from_fixed64(Fixed64::HALF);
    pub const PI: Fixed48 = Fixed48::from_fixed64(Fixed64::PI);
    pub const PI2: Fixed48 = Fixed48::from_fixed64(Fixed64::PI2);
    pub const PI_HALF: Fixed48 = Fixed48::from_fixed64(Fixed64::PI_HALF);
    pub const E: Fixed48 = Fixed48::from_fixed64(Fixed64::E);

    pub const MIN: Fixed48 = Fixed48::from_fixed64(Fixed64::MIN);
    pub const MAX: Fixed48 = Fixed48::from_fixed64(Fixed64::MAX);

    pub const MIN_INT: i32 = -(1 << 15);
    pub const MAX_INT: i32 = (1 << 15) - 1;

    pub const POSITIVE_INFINITY: Fixed48 = Fixed48(0x7FF0_0000_0000_0000);
    pub const NEGATIVE_INFINITY: Fixed48 = Fixed48(0xFFF0_0000_0000_0000u64 as i64);
    pub const NAN: Fixed48 = Fixed48(0xFFF8_0000_0000_0000u64 as i64);

    /// Pack a Q32.32 value. Integer bits above the 48-bit range are dropped,
    /// so the result is always a normal value.
    #[inline]
    pub const fn from_fixed64(v: Fixed64) -> Self {
        Fixed48(v.0 & POSITIVE_MASK)
    }

    /// Sign-extend to Q32.32.
    #[inline]
    pub const fn to_fixed64(self) -> Fixed64 {
        let v = self.0;
        Fixed64(((v << 16) | (v & i64::MIN)) >> 16)
    }

    #[inline]
    pub const fn from_fixed32(v: Fixed32) -> Self {
        Self::from_fixed64(Fixed64::from_fixed32(v))
    }

    /// Truncates the low 16 fraction bits.
    #[inline]
    pub const fn to_fixed32(self) -> Fixed32 {
        self.to_fixed64().to_fixed32()
    }

    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Fixed48(raw)
    }

    #[inline]
    pub const fn to_raw(self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn from_int(v: i32) -> Self {
        Self::from_fixed64(Fixed64::from_int(v))
    }

    #[inline]
    pub fn from_f64(v: f64) -> Self {
        Self::from_fixed64(Fixed64::from_f64(v))
    }

    #[inline]
    pub fn from_f32(v: f32) -> Self {
        Self::from_fixed64(Fixed64::from_f32(v))
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.to_fixed64().to_f64()
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        self.to_fixed64().to_f32()
    }

    #[inline]
    pub const fn ceil_to_int(self) -> i32 {
        self.to_fixed64().ceil_to_int()
    }

    #[inline]
    pub const fn floor_to_int(self) -> i32 {
        self.to_fixed64().floor_to_int()
    }

    #[inline]
    pub const fn round_to_int(self) -> i32 {
        self.to_fixed64().round_to_int()
    }

    #[inline]
    pub const fn is_nan(self) -> bool {
        self.0 == Self::NAN.0
    }

    #[inline]
    pub const fn is_infinite(self) -> bool {
        self.0 == Self::POSITIVE_INFINITY.0 || self.0 == Self::NEGATIVE_INFINITY.0
    }

    /// True when the reserved bits are clear.
    #[inline]
    pub const fn is_normal(self) -> bool {
        self.0 & RESERVED_MASK == 0
    }

    /// `pack(-unpack(x))`. Negating the packed word directly would set the
    /// reserved bits.
    #[inline]
    pub const fn wrapping_neg(self) -> Self {
        Self::from_fixed64(self.to_fixed64().wrapping_neg())
    }

    #[inline]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        Self::from_fixed64(self.to_fixed64().wrapping_add(rhs.to_fixed64()))
    }

    #[inline]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        Self::from_fixed64(self.to_fixed64().wrapping_sub(rhs.to_fixed64()))
    }

    #[inline]
    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        Self::from_fixed64(self.to_fixed64().wrapping_mul(rhs.to_fixed64()))
    }
}

impl Add for Fixed48 {
    type Output = Fixed48;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl Sub for Fixed48 {
    type Output = Fixed48;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }
}

impl Mul for Fixed48 {
    type Output = Fixed48;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }
}

impl Div for Fixed48 {
    type Output = Fixed48;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.div_precise(rhs)
    }
}

impl Rem for Fixed48 {
    type Output = Fixed48;
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        self.modulo(rhs)
    }
}

impl Neg for Fixed48 {
    type Output = Fixed48;
    #[inline]
    fn neg(self) -> Self {
        self.wrapping_neg()
    }
}

impl AddAssign for Fixed48 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fixed48 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Fixed48 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Fixed48 {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl RemAssign for Fixed48 {
    #[inline]
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl From<Fixed32> for Fixed48 {
    #[inline]
    fn from(v: Fixed32) -> Self {
        Fixed48::from_fixed32(v)
    }
}

impl From<Fixed48> for Fixed64 {
    #[inline]
    fn from(v: Fixed48) -> Self {
        v.to_fixed64()
    }
}
