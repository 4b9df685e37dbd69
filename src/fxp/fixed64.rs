// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Q32.32 function catalogue.
//!
//! Also the wide scratch engine behind the 32-bit inverse trigonometry.

use super::{unit_sin, RCP_TWO_PI_WIDE};
use crate::tier::Tier;
use crate::types::fixed64::Fixed64;
use crate::util::bits::{HALF_SQRT2_30, ONE_30, SQRT2_30};
use crate::util::{isqrt128, nlz64, qmul30, shr64};

const TEN: Fixed64 = Fixed64::from_int(10);

impl Fixed64 {
    /// Exact truncating division. 0 for a zero or `MIN` divisor.
    #[inline]
    pub const fn div_precise(self, rhs: Self) -> Self {
        let b = rhs.0;
        if b == 0 || b == i64::MIN {
            return Self::ZERO;
        }
        Fixed64((((self.0 as i128) << 32) / b as i128) as i64)
    }

    /// Division at tier `T`: exact for `Precise`, reciprocal-multiply otherwise.
    /// 0 for a zero or `MIN` divisor.
    #[inline]
    pub fn div<T: Tier>(self, rhs: Self) -> Self {
        if T::EXACT_DIVISION {
            return self.div_precise(rhs);
        }
        let b = rhs.0;
        if b == 0 || b == i64::MIN {
            return Self::ZERO;
        }
        let negative = b < 0;
        let b = b.wrapping_abs();

        let e = 31 - nlz64(b as u64);
        let n = shr64(b, e + 2) as i32;
        let res = T::rcp(n - ONE_30);

        let product = self.0 as i128 * res as i128;
        let shift = 30 + e;
        let y = if shift >= 0 {
            product >> shift
        } else {
            product << -shift
        };
        let y = y as i64;
        Fixed64(if negative { y.wrapping_neg() } else { y })
    }

    /// `1 / x`. 0 for 0 and `MIN`.
    #[inline]
    pub fn rcp<T: Tier>(self) -> Self {
        let x = self.0;
        if x == 0 || x == i64::MIN {
            return Self::ZERO;
        }
        let negative = x < 0;
        let x = x.wrapping_abs();

        let e = 31 - nlz64(x as u64);
        let n = shr64(x, e + 2) as i32;
        let res = T::rcp(n - ONE_30);
        let r = shr64(res as i64, e - 2);
        Fixed64(if negative { r.wrapping_neg() } else { r })
    }

    /// Exact truncated square root by digit extraction. 0 for `x <= 0`.
    #[inline]
    pub const fn sqrt_precise(self) -> Self {
        if self.0 <= 0 {
            return Self::ZERO;
        }
        Fixed64(isqrt128((self.0 as u128) << 32) as i64)
    }

    /// Square root. 0 for `x <= 0`.
    #[inline]
    pub fn sqrt<T: Tier>(self) -> Self {
        let x = self.0;
        if x <= 0 {
            return Self::ZERO;
        }
        let e = 31 - nlz64(x as u64);
        let n = shr64(x, e + 2) as i32;
        let y = T::sqrt(n - ONE_30);

        let adjust = if e & 1 != 0 { SQRT2_30 } else { ONE_30 };
        let half = e >> 1;
        let yr = (adjust as i64 * y as i64) >> 30;
        Fixed64(shr64(yr, -(half + 2)))
    }

    /// `1 / sqrt(x)`. 0 for `x <= 0`.
    #[inline]
    pub fn rsqrt<T: Tier>(self) -> Self {
        let x = self.0;
        if x <= 0 {
            return Self::ZERO;
        }
        let e = 31 - nlz64(x as u64);
        let n = shr64(x, e + 2) as i32;
        let y = T::rsqrt(n - ONE_30);

        let adjust = if e & 1 != 0 { HALF_SQRT2_30 } else { ONE_30 };
        let half = e >> 1;
        let yr = (adjust as i64 * y as i64) >> 30;
        Fixed64(shr64(yr, half - 2))
    }

    /// `2^x`. `MAX` for `x >= 31`, 0 for `x <= -32`.
    #[inline]
    pub fn exp2<T: Tier>(self) -> Self {
        let x = self.0;
        if x >= 31 * Self::ONE.0 {
            return Self::MAX;
        }
        if x <= -32 * Self::ONE.0 {
            return Self::ZERO;
        }
        let k = ((x & Self::FRACTION_MASK) >> 2) as i32;
        let y = T::exp2(k);
        let int_part = (x >> 32) as i32;
        Fixed64(shr64(y as i64, -int_part - 2))
    }

    /// `e^x`, saturating like [`Fixed64::exp2`].
    #[inline]
    pub fn exp<T: Tier>(self) -> Self {
        self.saturating_mul(Self::RCP_LN2).exp2::<T>()
    }

    /// Natural logarithm. 0 for `x <= 0`.
    #[inline]
    pub fn log<T: Tier>(self) -> Self {
        let x = self.0;
        if x <= 0 {
            return Self::ZERO;
        }
        let e = 31 - nlz64(x as u64);
        let n = shr64(x, e + 2) as i32;
        let y = T::log(n - ONE_30);
        Fixed64(e as i64 * Self::LN2.0 + ((y as i64) << 2))
    }

    /// Base-2 logarithm. 0 for `x <= 0`.
    #[inline]
    pub fn log2<T: Tier>(self) -> Self {
        let x = self.0;
        if x <= 0 {
            return Self::ZERO;
        }
        let e = 31 - nlz64(x as u64);
        let n = shr64(x, e + 2) as i32;
        let y = T::log2(n - ONE_30);
        Fixed64(((e as i64) << 32) + ((y as i64) << 2))
    }

    /// 0 for `x <= 0`.
    #[inline]
    pub fn log10<T: Tier>(self) -> Self {
        self.log::<T>().div::<T>(TEN.log::<T>())
    }

    /// `x^e = exp(e * log(x))`. 0 for `x <= 0`, `MAX` on overflow.
    #[inline]
    pub fn pow<T: Tier>(self, exponent: Self) -> Self {
        if self.0 <= 0 {
            return Self::ZERO;
        }
        exponent.saturating_mul(self.log::<T>()).exp::<T>()
    }

    /// Radians to a Q32 fraction of a turn. Wraps modulo 2π.
    #[inline]
    fn turns(self) -> i32 {
        ((RCP_TWO_PI_WIDE * self.0 as i128) >> 64) as i32
    }

    /// Periodic over the whole range. No domain restriction.
    #[inline]
    pub fn sin<T: Tier>(self) -> Self {
        Fixed64((unit_sin::<T>(self.turns()) as i64) << 2)
    }

    /// Defined as `sin(x + π/2)`, bit for bit.
    #[inline]
    pub fn cos<T: Tier>(self) -> Self {
        self.wrapping_add(Self::PI_HALF).sin::<T>()
    }

    /// `sin / cos` through [`Fixed64::div`]. 0 where the cosine is 0.
    #[inline]
    pub fn tan<T: Tier>(self) -> Self {
        let z = self.turns();
        let s = Fixed64((unit_sin::<T>(z) as i64) << 2);
        let c = Fixed64((unit_sin::<T>(z.wrapping_add(ONE_30)) as i64) << 2);
        s.div::<T>(c)
    }

    #[inline]
    fn atan2_div<T: Tier>(y: i64, x: i64) -> i32 {
        let offset = 33 - nlz64(x as u64);
        let n = shr64(x, offset) as i32;
        let oox = T::rcp(n - ONE_30);
        qmul30(shr64(y, offset) as i32, oox)
    }

    /// Four-quadrant arctangent of `self / x`, in `[-π, π]`. `x == 0` gives
    /// `±π/2` by the sign of `self`, and 0 for the origin.
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
        let neg = (x ^ y) >> 63;

        if nx >= ny {
            let z = (T::atan(Self::atan2_div::<T>(ny, nx)) as i64) << 2;
            let angle = (neg ^ z).wrapping_sub(neg);
            if x > 0 {
                Fixed64(angle)
            } else if y >= 0 {
                Fixed64(angle + Self::PI.0)
            } else {
                Fixed64(angle - Self::PI.0)
            }
        } else {
            let z = (T::atan(Self::atan2_div::<T>(nx, ny)) as i64) << 2;
            let angle = (neg ^ z).wrapping_sub(neg);
            let quarter = if y > 0 { Self::PI_HALF.0 } else { -Self::PI_HALF.0 };
            Fixed64(quarter - angle)
        }
    }

    /// `atan2(x, 1)`.
    #[inline]
    pub fn atan<T: Tier>(self) -> Self {
        self.atan2::<T>(Self::ONE)
    }

    #[inline]
    fn cathetus<T: Tier>(self) -> Self {
        (Self::ONE + self).wrapping_mul(Self::ONE - self).sqrt::<T>()
    }

    /// 0 outside `[-1, 1]`.
    #[inline]
    pub fn asin<T: Tier>(self) -> Self {
        if self.0 < -Self::ONE.0 || self.0 > Self::ONE.0 {
            return Self::ZERO;
        }
        self.atan2::<T>(self.cathetus::<T>())
    }

    /// 0 outside `[-1, 1]`.
    #[inline]
    pub fn acos<T: Tier>(self) -> Self {
        if self.0 < -Self::ONE.0 || self.0 > Self::ONE.0 {
            return Self::ZERO;
        }
        self.cathetus::<T>().atan2::<T>(self)
    }
}
