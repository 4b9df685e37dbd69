// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Q16.16 function catalogue.

use super::{unit_sin, RCP_TWO_PI};
use crate::tier::Tier;
use crate::types::fixed32::Fixed32;
use crate::types::fixed64::Fixed64;
use crate::util::bits::{HALF_SQRT2_30, ONE_30, SQRT2_30};
use crate::util::{isqrt64, nlz32, qmul30, shr32, shr64};

const TEN: Fixed32 = Fixed32::from_int(10);

impl Fixed32 {
    /// Exact truncating division. 0 for a zero or `MIN` divisor.
    #[inline]
    pub const fn div_precise(self, rhs: Self) -> Self {
        let b = rhs.0;
        if b == 0 || b == i32::MIN {
            return Self::ZERO;
        }
        Fixed32((((self.0 as i64) << 16) / b as i64) as i32)
    }

    /// Division at tier `T`: exact for `Precise`, reciprocal-multiply otherwise.
    #[inline]
    pub fn div<T: Tier>(self, rhs: Self) -> Self {
        if T::EXACT_DIVISION {
            return self.div_precise(rhs);
        }
        let b = rhs.0;
        if b == 0 || b == i32::MIN {
            return Self::ZERO;
        }
        let negative = b < 0;
        let b = b.wrapping_abs();

        // Normalize the divisor into [1.0, 2.0) in s2.30.
        let offset = 29 - nlz32(b as u32);
        let n = shr32(b, offset - 28);
        let res = T::rcp(n - ONE_30);

        let y = qmul30(res, self.0);
        let y = if negative { y.wrapping_neg() } else { y };
        Fixed32(shr32(y, offset - 14))
    }

    /// `1 / x`. 0 for 0 and `MIN`.
    #[inline]
    pub fn rcp<T: Tier>(self) -> Self {
        let x = self.0;
        if x == 0 || x == i32::MIN {
            return Self::ZERO;
        }
        let negative = x < 0;
        let x = x.wrapping_abs();

        let offset = 29 - nlz32(x as u32);
        let n = shr32(x, offset - 28);
        let res = T::rcp(n - ONE_30);
        let res = if negative { -res } else { res };
        Fixed32(shr32(res, offset))
    }

    /// Exact truncated square root by digit extraction. 0 for `x <= 0`.
    #[inline]
    pub const fn sqrt_precise(self) -> Self {
        if self.0 <= 0 {
            return Self::ZERO;
        }
        Fixed32(isqrt64((self.0 as u64) << 16) as i32)
    }

    /// Square root. 0 for `x <= 0`.
    #[inline]
    pub fn sqrt<T: Tier>(self) -> Self {
        let x = self.0;
        if x <= 0 {
            return Self::ZERO;
        }
        let offset = 15 - nlz32(x as u32);
        let n = shr32(x, offset - 14);
        let y = T::sqrt(n - ONE_30);

        // Halving an odd exponent leaves a factor of √2.
        let adjust = if offset & 1 != 0 { SQRT2_30 } else { ONE_30 };
        let half = offset >> 1;
        let yr = (adjust as i64 * y as i64) >> 30;
        Fixed32(shr64(yr, 14 - half) as i32)
    }

    /// `1 / sqrt(x)`. 0 for `x <= 0`.
    #[inline]
    pub fn rsqrt<T: Tier>(self) -> Self {
        let x = self.0;
        if x <= 0 {
            return Self::ZERO;
        }
        let offset = 1 - nlz32(x as u32);
        let n = shr32(x, offset);
        let y = T::rsqrt(n - ONE_30);

        let adjust = if offset & 1 != 0 { HALF_SQRT2_30 } else { ONE_30 };
        let half = offset >> 1;
        Fixed32(shr32(qmul30(adjust, y), half + 21))
    }

    /// `2^x`. `MAX` for `x >= 15`, 0 for `x <= -16`.
    #[inline]
    pub fn exp2<T: Tier>(self) -> Self {
        let x = self.0;
        if x >= 15 * Self::ONE.0 {
            return Self::MAX;
        }
        if x <= -16 * Self::ONE.0 {
            return Self::ZERO;
        }
        let k = (x & Self::FRACTION_MASK) << 14;
        let y = T::exp2(k);
        Fixed32(shr32(y, 14 - (x >> 16)))
    }

    /// `e^x`, saturating like [`Fixed32::exp2`].
    #[inline]
    pub fn exp<T: Tier>(self) -> Self {
        // Scale by 1/ln(2) at Q32.32 so the constant adds no error.
        let scaled = (self.0 as i128 * Fixed64::RCP_LN2.0 as i128) >> 32;
        let scaled = scaled.clamp(i32::MIN as i128, i32::MAX as i128) as i32;
        Fixed32(scaled).exp2::<T>()
    }

    /// Natural logarithm. 0 for `x <= 0`.
    #[inline]
    pub fn log<T: Tier>(self) -> Self {
        let x = self.0;
        if x <= 0 {
            return Self::ZERO;
        }
        let offset = 15 - nlz32(x as u32);
        let n = shr32(x, offset - 14);
        let y = T::log(n - ONE_30);
        let wide = offset as i64 * Fixed64::LN2.0 + ((y as i64) << 2);
        Fixed32((wide >> 16) as i32)
    }

    /// Base-2 logarithm. 0 for `x <= 0`.
    #[inline]
    pub fn log2<T: Tier>(self) -> Self {
        let x = self.0;
        if x <= 0 {
            return Self::ZERO;
        }
        let offset = 15 - nlz32(x as u32);
        let n = shr32(x, offset - 14);
        let y = T::log2(n - ONE_30);
        Fixed32((offset << 16) + (y >> 14))
    }

    /// Base-10 logarithm, `log(x) / log(10)` at tier `T`. 0 for `x <= 0`.
    #[inline]
    pub fn log10<T: Tier>(self) -> Self {
        self.log::<T>().div::<T>(TEN.log::<T>())
    }

    /// `x^e = exp(e * log(x))`. 0 for `x <= 0`.
    #[inline]
    pub fn pow<T: Tier>(self, exponent: Self) -> Self {
        if self.0 <= 0 {
            return Self::ZERO;
        }
        exponent.saturating_mul(self.log::<T>()).exp::<T>()
    }

    #[inline]
    fn turns(self) -> i32 {
        ((RCP_TWO_PI * self.0 as i64) >> 16) as i32
    }

    #[inline]
    pub fn sin<T: Tier>(self) -> Self {
        Fixed32(unit_sin::<T>(self.turns()) >> 14)
    }

    /// Defined as `sin(x + π/2)`, bit for bit.
    #[inline]
    pub fn cos<T: Tier>(self) -> Self {
        self.wrapping_add(Self::PI_HALF).sin::<T>()
    }

    #[inline]
    pub fn tan<T: Tier>(self) -> Self {
        let z = self.turns();
        let s = Fixed32(unit_sin::<T>(z));
        let c = Fixed32(unit_sin::<T>(z.wrapping_add(ONE_30)));
        s.div::<T>(c)
    }

    /// `y / x` in s2.30 for `0 <= y <= x`, `x > 0`.
    #[inline]
    fn atan2_div<T: Tier>(y: i32, x: i32) -> i32 {
        let offset = 1 - nlz32(x as u32);
        let n = shr32(x, offset);
        let oox = T::rcp(n - ONE_30);
        qmul30(shr32(y, offset), oox)
    }

    /// Four-quadrant arctangent of `self / x`, in `[-π, π]`.
    #[inline]
    pub fn atan2<T: Tier>(self, x: Self) -> Self {
        let (y, x) = (self.0, x.0);
        if x == 0 {
            return if y > 0 {
                Self::PI_HALF
            } else if y < 0 {
                Self::PI_HALF.wrapping_neg()
            } else {
                Self::ZERO
            };
        }

        let nx = x.saturating_abs();
        let ny = y.saturating_abs();
        let neg = (x ^ y) >> 31;

        if nx >= ny {
            let z = T::atan(Self::atan2_div::<T>(ny, nx)) >> 14;
            let angle = (neg ^ z).wrapping_sub(neg);
            if x > 0 {
                Fixed32(angle)
            } else if y >= 0 {
                Fixed32(angle + Self::PI.0)
            } else {
                Fixed32(angle - Self::PI.0)
            }
        } else {
            let z = T::atan(Self::atan2_div::<T>(nx, ny)) >> 14;
            let angle = (neg ^ z).wrapping_sub(neg);
            let quarter = if y > 0 { Self::PI_HALF.0 } else { -Self::PI_HALF.0 };
            Fixed32(quarter - angle)
        }
    }

    #[inline]
    pub fn atan<T: Tier>(self) -> Self {
        self.atan2::<T>(Self::ONE)
    }

    /// `sqrt((1 + x)(1 - x))` in Q32.32, computed on the wide engine.
    #[inline]
    fn cathetus<T: Tier>(self) -> Fixed64 {
        let xx = (Self::ONE.0 + self.0) as i64 * (Self::ONE.0 - self.0) as i64;
        Fixed64(xx).sqrt::<T>()
    }

    /// 0 outside `[-1, 1]`.
    #[inline]
    pub fn asin<T: Tier>(self) -> Self {
        if self.0 < -Self::ONE.0 || self.0 > Self::ONE.0 {
            return Self::ZERO;
        }
        let y = self.cathetus::<T>();
        Fixed64::from_fixed32(self).atan2::<T>(y).to_fixed32()
    }

    /// 0 outside `[-1, 1]`.
    #[inline]
    pub fn acos<T: Tier>(self) -> Self {
        if self.0 < -Self::ONE.0 || self.0 > Self::ONE.0 {
            return Self::ZERO;
        }
        let y = self.cathetus::<T>();
        y.atan2::<T>(Fixed64::from_fixed32(self)).to_fixed32()
    }
}
