// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Q32.32 value type.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::config::{FRAC_BITS_64, SCALE_64};
use crate::types::fixed32::Fixed32;

/// Signed Q32.32 fixed-point number.
///
/// Same operator semantics as [`Fixed32`]: wrapping `+ - *`, exact `/`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Fixed64(pub i64);

impl Fixed64 {
    pub const SHIFT: u32 = FRAC_BITS_64;
    pub const FRACTION_MASK: i64 = SCALE_64 - 1;
    pub const INTEGER_MASK: i64 = !Self::FRACTION_MASK;

    pub const ZERO: Fixed64 = Fixed64(0);
    pub const NEG1: Fixed64 = Fixed64(-SCALE_64);
    pub const ONE: Fixed64 = Fixed64(SCALE_64);
    pub const TWO: Fixed64 = Fixed64(2 * SCALE_64);
    pub const THREE: Fixed64 = Fixed64(3 * SCALE_64);
    pub const FOUR: Fixed64 = Fixed64(4 * SCALE_64);
    pub const HALF: Fixed64 = Fixed64(SCALE_64 >> 1);
    pub const PI: Fixed64 = Fixed64(13_493_037_705);
    pub const PI2: Fixed64 = Fixed64(26_986_075_409);
    pub const PI_HALF: Fixed64 = Fixed64(6_746_518_852);
    pub const E: Fixed64 = Fixed64(11_674_931_555);
    pub const LN2: Fixed64 = Fixed64(2_977_044_471);
    pub const RCP_LN2: Fixed64 = Fixed64(0x1_7154_7652);

    pub const MIN: Fixed64 = Fixed64(i64::MIN);
    pub const MAX: Fixed64 = Fixed64(i64::MAX);

    pub const MIN_INT: i32 = i32::MIN;
    pub const MAX_INT: i32 = i32::MAX;

    #[inline]
    pub const fn from_raw(raw: i64) -> Self {
        Fixed64(raw)
    }

    #[inline]
    pub const fn to_raw(self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn from_int(v: i32) -> Self {
        Fixed64((v as i64) << FRAC_BITS_64)
    }

    #[inline]
    pub fn from_f64(v: f64) -> Self {
        Fixed64((v * 4_294_967_296.0) as i64)
    }

    #[inline]
    pub fn from_f32(v: f32) -> Self {
        Fixed64((v * 4_294_967_296.0f32) as i64)
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 * (1.0 / 4_294_967_296.0)
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 * (1.0f32 / 4_294_967_296.0f32)
    }

    /// Widening conversion, exact.
    #[inline]
    pub const fn from_fixed32(v: Fixed32) -> Self {
        Fixed64((v.0 as i64) << (FRAC_BITS_64 - Fixed32::SHIFT))
    }

    /// Truncates the low fraction bits; the integer part wraps.
    #[inline]
    pub const fn to_fixed32(self) -> Fixed32 {
        Fixed32((self.0 >> (FRAC_BITS_64 - Fixed32::SHIFT)) as i32)
    }

    #[inline]
    pub const fn ceil_to_int(self) -> i32 {
        (self.0.wrapping_add(Self::FRACTION_MASK) >> FRAC_BITS_64) as i32
    }

    #[inline]
    pub const fn floor_to_int(self) -> i32 {
        (self.0 >> FRAC_BITS_64) as i32
    }

    #[inline]
    pub const fn round_to_int(self) -> i32 {
        (self.0.wrapping_add(Self::HALF.0) >> FRAC_BITS_64) as i32
    }

    #[inline]
    pub const fn abs(self) -> Self {
        Fixed64(self.0.wrapping_abs())
    }

    #[inline]
    pub const fn nabs(self) -> Self {
        if self.0 > 0 {
            Fixed64(-self.0)
        } else {
            self
        }
    }

    #[inline]
    pub const fn ceil(self) -> Self {
        Fixed64(self.0.wrapping_add(Self::FRACTION_MASK) & Self::INTEGER_MASK)
    }

    #[inline]
    pub const fn floor(self) -> Self {
        Fixed64(self.0 & Self::INTEGER_MASK)
    }

    #[inline]
    pub const fn round(self) -> Self {
        Fixed64(self.0.wrapping_add(Self::HALF.0) & Self::INTEGER_MASK)
    }

    #[inline]
    pub const fn fract(self) -> Self {
        Fixed64(self.0 & Self::FRACTION_MASK)
    }

    #[inline]
    pub const fn min(self, other: Self) -> Self {
        if self.0 < other.0 {
            self
        } else {
            other
        }
    }

    #[inline]
    pub const fn max(self, other: Self) -> Self {
        if self.0 > other.0 {
            self
        } else {
            other
        }
    }

    #[inline]
    pub const fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    #[inline]
    pub const fn sign(self) -> Self {
        if self.0 == 0 {
            Self::ZERO
        } else if self.0 < 0 {
            Self::NEG1
        } else {
            Self::ONE
        }
    }

    #[inline]
    pub const fn wrapping_add(self, rhs: Self) -> Self {
        Fixed64(self.0.wrapping_add(rhs.0))
    }

    #[inline]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        Fixed64(self.0.wrapping_sub(rhs.0))
    }

    #[inline]
    pub const fn wrapping_neg(self) -> Self {
        Fixed64(self.0.wrapping_neg())
    }

    #[inline]
    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        Fixed64(((self.0 as i128 * rhs.0 as i128) >> FRAC_BITS_64) as i64)
    }

    #[inline]
    pub const fn saturating_mul(self, rhs: Self) -> Self {
        let wide = (self.0 as i128 * rhs.0 as i128) >> FRAC_BITS_64;
        if wide > i64::MAX as i128 {
            Self::MAX
        } else if wide < i64::MIN as i128 {
            Self::MIN
        } else {
            Fixed64(wide as i64)
        }
    }

    #[inline]
    pub const fn modulo(self, rhs: Self) -> Self {
        if rhs.0 == 0 {
            Self::ZERO
        } else {
            Fixed64(self.0.wrapping_rem(rhs.0))
        }
    }
}

impl Add for Fixed64 {
    type Output = Fixed64;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl Sub for Fixed64 {
    type Output = Fixed64;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }
}

impl Mul for Fixed64 {
    type Output = Fixed64;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }
}

impl Div for Fixed64 {
    type Output = Fixed64;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.div_precise(rhs)
    }
}

impl Rem for Fixed64 {
    type Output = Fixed64;
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        self.modulo(rhs)
    }
}

impl Neg for Fixed64 {
    type Output = Fixed64;
    #[inline]
    fn neg(self) -> Self {
        self.wrapping_neg()
    }
}

impl AddAssign for Fixed64 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fixed64 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Fixed64 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Fixed64 {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl RemAssign for Fixed64 {
    #[inline]
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl From<i32> for Fixed64 {
    #[inline]
    fn from(v: i32) -> Self {
        Fixed64::from_int(v)
    }
}

impl From<Fixed32> for Fixed64 {
    #[inline]
    fn from(v: Fixed32) -> Self {
        Fixed64::from_fixed32(v)
    }
}
