// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Packed-view delegation.
//!
//! A packed type owns no numeric logic. Each operation unpacks its operands
//! to the wide type, runs the wide operation and packs the result. Packing
//! is closed: whatever the wide engine returns packs to a normal value.
//! The saturating functions (`exp`, `exp2`, `pow`) clamp before packing, and
//! the packed `MIN` is a zero divisor like the wide one.
//!
//! Operations on the [`Fixed48`] infinity and NaN sentinels are unspecified.
//! They are unpacked like any other word and the result carries no meaning.

use crate::tier::Tier;
use crate::types::fixed48::Fixed48;
use crate::types::fixed64::Fixed64;

/// A compact encoding of a wider fixed-point type.
pub trait PackedView: Copy {
    /// The type that carries out the arithmetic.
    type Wide: Copy;

    fn pack(wide: Self::Wide) -> Self;

    fn unpack(self) -> Self::Wide;

    #[inline]
    fn lift(self, op: impl FnOnce(Self::Wide) -> Self::Wide) -> Self {
        Self::pack(op(self.unpack()))
    }

    #[inline]
    fn lift2(self, rhs: Self, op: impl FnOnce(Self::Wide, Self::Wide) -> Self::Wide) -> Self {
        Self::pack(op(self.unpack(), rhs.unpack()))
    }

    #[inline]
    fn lift3(
        self,
        b: Self,
        c: Self,
        op: impl FnOnce(Self::Wide, Self::Wide, Self::Wide) -> Self::Wide,
    ) -> Self {
        Self::pack(op(self.unpack(), b.unpack(), c.unpack()))
    }
}

impl PackedView for Fixed48 {
    type Wide = Fixed64;

    #[inline]
    fn pack(wide: Fixed64) -> Self {
        Fixed48::from_fixed64(wide)
    }

    #[inline]
    fn unpack(self) -> Fixed64 {
        self.to_fixed64()
    }
}

/// Generates `Fixed48` methods that forward to the `Fixed64` method of the
/// same name.
macro_rules! delegate {
    () => {};
    (tiered $name:ident(self); $($rest:tt)*) => {
        #[doc = concat!("Packed [`Fixed64::", stringify!($name), "`].")]
        #[inline]
        pub fn $name<T: Tier>(self) -> Self {
            self.lift(Fixed64::$name::<T>)
        }
        delegate!($($rest)*);
    };
    (tiered $name:ident(self, $b:ident); $($rest:tt)*) => {
        #[doc = concat!("Packed [`Fixed64::", stringify!($name), "`].")]
        #[inline]
        pub fn $name<T: Tier>(self, $b: Self) -> Self {
            self.lift2($b, Fixed64::$name::<T>)
        }
        delegate!($($rest)*);
    };
    (saturating $name:ident(self); $($rest:tt)*) => {
        #[doc = concat!("Packed [`Fixed64::", stringify!($name), "`], clamped to the packed range.")]
        #[inline]
        pub fn $name<T: Tier>(self) -> Self {
            Self::pack_saturating(Fixed64::$name::<T>(self.unpack()))
        }
        delegate!($($rest)*);
    };
    (saturating $name:ident(self, $b:ident); $($rest:tt)*) => {
        #[doc = concat!("Packed [`Fixed64::", stringify!($name), "`], clamped to the packed range.")]
        #[inline]
        pub fn $name<T: Tier>(self, $b: Self) -> Self {
            Self::pack_saturating(Fixed64::$name::<T>(self.unpack(), $b.unpack()))
        }
        delegate!($($rest)*);
    };
    (exact $name:ident(self); $($rest:tt)*) => {
        #[doc = concat!("Packed [`Fixed64::", stringify!($name), "`].")]
        #[inline]
        pub fn $name(self) -> Self {
            self.lift(Fixed64::$name)
        }
        delegate!($($rest)*);
    };
    (exact $name:ident(self, $b:ident); $($rest:tt)*) => {
        #[doc = concat!("Packed [`Fixed64::", stringify!($name), "`].")]
        #[inline]
        pub fn $name(self, $b: Self) -> Self {
            self.lift2($b, Fixed64::$name)
        }
        delegate!($($rest)*);
    };
    (exact $name:ident(self, $b:ident, $c:ident); $($rest:tt)*) => {
        #[doc = concat!("Packed [`Fixed64::", stringify!($name), "`].")]
        #[inline]
        pub fn $name(self, $b: Self, $c: Self) -> Self {
            self.lift3($b, $c, Fixed64::$name)
        }
        delegate!($($rest)*);
    };
}

impl Fixed48 {
    /// Packs a wide result that may lie outside the packed range. Values past
    /// either end become `MIN` or `MAX` instead of losing integer bits.
    #[inline]
    fn pack_saturating(wide: Fixed64) -> Self {
        Self::pack(wide.clamp(Self::MIN.unpack(), Self::MAX.unpack()))
    }

    /// Exact truncating division. 0 for a zero or `MIN` divisor.
    #[inline]
    pub fn div_precise(self, rhs: Self) -> Self {
        if rhs == Self::MIN {
            return Self::ZERO;
        }
        self.lift2(rhs, Fixed64::div_precise)
    }

    /// Division at tier `T`. 0 for a zero or `MIN` divisor.
    #[inline]
    pub fn div<T: Tier>(self, rhs: Self) -> Self {
        if rhs == Self::MIN {
            return Self::ZERO;
        }
        self.lift2(rhs, Fixed64::div::<T>)
    }

    /// `1 / x`. 0 for 0 and `MIN`.
    #[inline]
    pub fn rcp<T: Tier>(self) -> Self {
        if self == Self::MIN {
            return Self::ZERO;
        }
        self.lift(Fixed64::rcp::<T>)
    }

    delegate! {
        exact abs(self);
        exact nabs(self);
        exact ceil(self);
        exact floor(self);
        exact round(self);
        exact fract(self);
        exact sign(self);
        exact min(self, other);
        exact max(self, other);
        exact clamp(self, lo, hi);
        exact modulo(self, rhs);
        exact sqrt_precise(self);

        tiered sqrt(self);
        tiered rsqrt(self);
        saturating exp(self);
        saturating exp2(self);
        tiered log(self);
        tiered log2(self);
        tiered log10(self);
        saturating pow(self, exponent);
        tiered sin(self);
        tiered cos(self);
        tiered tan(self);
        tiered atan(self);
        tiered atan2(self, x);
        tiered asin(self);
        tiered acos(self);
    }
}
