// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Q16.16 value type.

use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Rem, RemAssign, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::config::{FRAC_BITS_32, SCALE_32};

/// Signed Q16.16 fixed-point number.
///
/// `+`, `-` and `*` wrap on overflow. `/` is exact truncating division
/// returning 0 for a zero or `MIN` divisor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Default, Hash, Serialize, Deserialize)]
#[serde(transparent)]
#[repr(transparent)]
pub struct Fixed32(pub i32);

impl Fixed32 {
    pub const SHIFT: u32 = FRAC_BITS_32;
    pub const FRACTION_MASK: i32 = SCALE_32 - 1;
    pub const INTEGER_MASK: i32 = !Self::FRACTION_MASK;

    pub const ZERO: Fixed32 = Fixed32(0);
    pub const NEG1: Fixed32 = Fixed32(-SCALE_32);
    pub const ONE: Fixed32 = Fixed32(SCALE_32);
    pub const TWO: Fixed32 = Fixed32(2 * SCALE_32);
    pub const THREE: Fixed32 = Fixed32(3 * SCALE_32);
    pub const FOUR: Fixed32 = Fixed32(4 * SCALE_32);
    pub const HALF: Fixed32 = Fixed32(SCALE_32 >> 1);
    pub const PI: Fixed32 = Fixed32((13_493_037_705i64 >> 16) as i32);
    pub const PI2: Fixed32 = Fixed32((26_986_075_409i64 >> 16) as i32);
    pub const PI_HALF: Fixed32 = Fixed32((6_746_518_852i64 >> 16) as i32);
    pub const E: Fixed32 = Fixed32((11_674_931_555i64 >> 16) as i32);
    pub const LN2: Fixed32 = Fixed32((2_977_044_471i64 >> 16) as i32);
    pub const RCP_LN2: Fixed32 = Fixed32((0x1_7154_7652i64 >> 16) as i32);

    pub const MIN: Fixed32 = Fixed32(i32::MIN);
    pub const MAX: Fixed32 = Fixed32(i32::MAX);

    /// Smallest integer that converts exactly.
    pub const MIN_INT: i32 = i32::MIN >> FRAC_BITS_32;
    /// Largest integer that converts exactly.
    pub const MAX_INT: i32 = i32::MAX >> FRAC_BITS_32;

    #[inline]
    pub const fn from_raw(raw: i32) -> Self {
        Fixed32(raw)
    }

    #[inline]
    pub const fn to_raw(self) -> i32 {
        self.0
    }

    /// Integers outside `MIN_INT..=MAX_INT` wrap.
    #[inline]
    pub const fn from_int(v: i32) -> Self {
        Fixed32(v.wrapping_shl(FRAC_BITS_32))
    }

    /// Truncates toward zero; out-of-range inputs saturate and NaN maps to 0.
    #[inline]
    pub fn from_f64(v: f64) -> Self {
        Fixed32((v * 65536.0) as i32)
    }

    #[inline]
    pub fn from_f32(v: f32) -> Self {
        Fixed32((v * 65536.0f32) as i32)
    }

    #[inline]
    pub fn to_f64(self) -> f64 {
        self.0 as f64 * (1.0 / 65536.0)
    }

    #[inline]
    pub fn to_f32(self) -> f32 {
        self.0 as f32 * (1.0f32 / 65536.0f32)
    }

    #[inline]
    pub const fn ceil_to_int(self) -> i32 {
        self.0.wrapping_add(Self::FRACTION_MASK) >> FRAC_BITS_32
    }

    #[inline]
    pub const fn floor_to_int(self) -> i32 {
        self.0 >> FRAC_BITS_32
    }

    #[inline]
    pub const fn round_to_int(self) -> i32 {
        self.0.wrapping_add(Self::HALF.0) >> FRAC_BITS_32
    }

    /// `MIN.abs()` wraps to `MIN`.
    #[inline]
    pub const fn abs(self) -> Self {
        Fixed32(self.0.wrapping_abs())
    }

    /// `-|x|`, total over the whole range.
    #[inline]
    pub const fn nabs(self) -> Self {
        if self.0 > 0 {
            Fixed32(-self.0)
        } else {
            self
        }
    }

    #[inline]
    pub const fn ceil(self) -> Self {
        Fixed32(self.0.wrapping_add(Self::FRACTION_MASK) & Self::INTEGER_MASK)
    }

    #[inline]
    pub const fn floor(self) -> Self {
        Fixed32(self.0 & Self::INTEGER_MASK)
    }

    /// Rounds half up.
    #[inline]
    pub const fn round(self) -> Self {
        Fixed32(self.0.wrapping_add(Self::HALF.0) & Self::INTEGER_MASK)
    }

    /// `x - floor(x)`, always non-negative.
    #[inline]
    pub const fn fract(self) -> Self {
        Fixed32(self.0 & Self::FRACTION_MASK)
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

    /// `min(max(x, lo), hi)`. Never panics; `hi` wins when `lo > hi`.
    #[inline]
    pub const fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }

    /// `-1.0`, `0` or `1.0`.
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
        Fixed32(self.0.wrapping_add(rhs.0))
    }

    #[inline]
    pub const fn wrapping_sub(self, rhs: Self) -> Self {
        Fixed32(self.0.wrapping_sub(rhs.0))
    }

    #[inline]
    pub const fn wrapping_neg(self) -> Self {
        Fixed32(self.0.wrapping_neg())
    }

    /// Wrapping Q16.16 multiply.
    #[inline]
    pub const fn wrapping_mul(self, rhs: Self) -> Self {
        Fixed32(((self.0 as i64 * rhs.0 as i64) >> FRAC_BITS_32) as i32)
    }

    /// Q16.16 multiply clamped to `MIN..=MAX`.
    #[inline]
    pub const fn saturating_mul(self, rhs: Self) -> Self {
        let wide = (self.0 as i64 * rhs.0 as i64) >> FRAC_BITS_32;
        if wide > i32::MAX as i64 {
            Self::MAX
        } else if wide < i32::MIN as i64 {
            Self::MIN
        } else {
            Fixed32(wide as i32)
        }
    }

    /// Raw remainder with the sign of the dividend. 0 when `rhs` is 0.
    #[inline]
    pub const fn modulo(self, rhs: Self) -> Self {
        if rhs.0 == 0 {
            Self::ZERO
        } else {
            Fixed32(self.0.wrapping_rem(rhs.0))
        }
    }
}

impl Add for Fixed32 {
    type Output = Fixed32;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        self.wrapping_add(rhs)
    }
}

impl Sub for Fixed32 {
    type Output = Fixed32;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        self.wrapping_sub(rhs)
    }
}

impl Mul for Fixed32 {
    type Output = Fixed32;
    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.wrapping_mul(rhs)
    }
}

impl Div for Fixed32 {
    type Output = Fixed32;
    #[inline]
    fn div(self, rhs: Self) -> Self {
        self.div_precise(rhs)
    }
}

impl Rem for Fixed32 {
    type Output = Fixed32;
    #[inline]
    fn rem(self, rhs: Self) -> Self {
        self.modulo(rhs)
    }
}

impl Neg for Fixed32 {
    type Output = Fixed32;
    #[inline]
    fn neg(self) -> Self {
        self.wrapping_neg()
    }
}

impl AddAssign for Fixed32 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Fixed32 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign for Fixed32 {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl DivAssign for Fixed32 {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl RemAssign for Fixed32 {
    #[inline]
    fn rem_assign(&mut self, rhs: Self) {
        *self = *self % rhs;
    }
}

impl From<i16> for Fixed32 {
    #[inline]
    fn from(v: i16) -> Self {
        Fixed32::from_int(v as i32)
    }
}
