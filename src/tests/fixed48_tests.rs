// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::fxp::packed::PackedView;
use crate::tier::{Fast, Fastest, Precise, Tier};
use crate::types::fixed32::Fixed32;
use crate::types::fixed48::{Fixed48, POSITIVE_MASK, RESERVED_MASK};
use crate::types::fixed64::Fixed64;

#[test]
fn test_packing_layout() {
    assert_eq!(Fixed48::ONE.0, 0x0000_0001_0000_0000);
    assert_eq!(Fixed48::NEG1.0 as u64, 0x8000_7FFF_0000_0000);
    assert_eq!(Fixed48::MIN.0 as u64, 0x8000_0000_0000_0000);
    assert_eq!(Fixed48::MAX.0, 0x0000_7FFF_FFFF_FFFF);
    assert_eq!(Fixed48::MIN.to_fixed64(), Fixed64::from_int(-32768));
    assert_eq!(Fixed48::MAX.floor_to_int(), Fixed48::MAX_INT);
    assert_eq!(Fixed48::MIN.floor_to_int(), Fixed48::MIN_INT);
    assert_eq!(POSITIVE_MASK | RESERVED_MASK, -1);
}

#[test]
fn test_pack_unpack_round_trip() {
    for &v in &[0.0, 1.0, -1.0, 0.5, -0.5, 32767.25, -32768.0, -1e-9, 12345.678] {
        let wide = Fixed64::from_f64(v);
        let packed = Fixed48::from_fixed64(wide);
        assert!(packed.is_normal());
        assert_eq!(packed.to_fixed64(), wide, "{v}");
    }
}

#[test]
fn test_packing_drops_high_integer_bits() {
    // Integer bit 15 is not stored; the sign comes from bit 63.
    let packed = Fixed48::from_fixed64(Fixed64::from_int(40_000));
    assert!(packed.is_normal());
    assert_eq!(packed.to_fixed64(), Fixed64::from_int(40_000 - 32_768));
    let packed = Fixed48::from_fixed64(Fixed64::from_int(-40_000));
    assert!(packed.is_normal());
    assert_eq!(packed.to_fixed64(), Fixed64::from_int(-40_000 + 32_768));
}

#[test]
fn test_sentinels() {
    assert!(Fixed48::NAN.is_nan());
    assert!(!Fixed48::NAN.is_infinite());
    assert!(!Fixed48::NAN.is_normal());
    assert!(Fixed48::POSITIVE_INFINITY.is_infinite());
    assert!(Fixed48::NEGATIVE_INFINITY.is_infinite());
    assert!(!Fixed48::POSITIVE_INFINITY.is_normal());
    assert!(!Fixed48::NEGATIVE_INFINITY.is_nan());
    assert!(!Fixed48::ONE.is_nan());
    assert!(!Fixed48::MIN.is_infinite());
    assert!(!Fixed48::from_raw(0x0001_0000_0000_0000).is_normal());
}

#[test]
fn test_negation_repacks() {
    let one = Fixed48::ONE;
    let neg = -one;
    assert!(neg.is_normal());
    assert_eq!(neg, Fixed48::NEG1);
    assert_eq!(-neg, one);
    assert_eq!(Fixed48::ZERO.wrapping_neg(), Fixed48::ZERO);
    // The raw two's complement negation is not a valid packed word.
    assert!(!Fixed48::from_raw(one.0.wrapping_neg()).is_normal());
}

#[test]
fn test_ordering_follows_value() {
    let values = [-32768.0, -100.5, -1.0, -1e-9, 0.0, 1e-9, 0.5, 99.0, 32767.0];
    for pair in values.windows(2) {
        let a = Fixed48::from_f64(pair[0]);
        let b = Fixed48::from_f64(pair[1]);
        assert!(a < b, "{} < {}", pair[0], pair[1]);
    }
}

#[test]
fn test_arithmetic_via_wide() {
    let a = Fixed48::from_f64(3.25);
    let b = Fixed48::from_f64(-1.5);
    assert_eq!(a + b, Fixed48::from_f64(1.75));
    assert_eq!(a - b, Fixed48::from_f64(4.75));
    assert_eq!(a * b, Fixed48::from_f64(-4.875));
    assert_eq!(a / b, Fixed48::from_fixed64(a.to_fixed64().div_precise(b.to_fixed64())));
    assert_eq!(a % Fixed48::TWO, Fixed48::from_f64(1.25));
    let mut c = a;
    c += b;
    c *= Fixed48::TWO;
    assert_eq!(c, Fixed48::from_f64(3.5));
    // Overflow drops integer bit 15 instead of flipping the sign.
    assert_eq!(Fixed48::MAX + Fixed48::ONE, Fixed48::from_raw(0xFFFF_FFFF));
}

#[test]
fn test_delegation_matches_wide_engine() {
    let inputs = [0.001, 0.3, 1.0, 2.0, 7.5, 100.25, 3000.0];
    for &v in &inputs {
        let x = Fixed48::from_f64(v);
        let w = x.to_fixed64();
        assert_eq!(x.sqrt::<Precise>(), Fixed48::pack(w.sqrt::<Precise>()));
        assert_eq!(x.rsqrt::<Fast>(), Fixed48::pack(w.rsqrt::<Fast>()));
        assert_eq!(x.log::<Fastest>(), Fixed48::pack(w.log::<Fastest>()));
        assert_eq!(x.log2::<Precise>(), Fixed48::pack(w.log2::<Precise>()));
        assert_eq!(x.sin::<Precise>(), Fixed48::pack(w.sin::<Precise>()));
        assert_eq!(x.cos::<Fast>(), Fixed48::pack(w.cos::<Fast>()));
        assert_eq!(x.atan::<Precise>(), Fixed48::pack(w.atan::<Precise>()));
        assert_eq!(x.sqrt_precise(), Fixed48::pack(w.sqrt_precise()));
        assert_eq!(x.round(), Fixed48::pack(w.round()));
        let y = -x;
        assert_eq!(
            y.atan2::<Fast>(x),
            Fixed48::pack(y.unpack().atan2::<Fast>(w))
        );
        assert_eq!(y.div::<Fastest>(x), Fixed48::pack(y.unpack().div::<Fastest>(w)));
    }
}

fn assert_saturates<T: Tier>() {
    let name = T::NAME;
    assert_eq!(Fixed48::from_int(11).exp::<T>(), Fixed48::MAX, "{name}");
    assert_eq!(Fixed48::from_int(20).exp::<T>(), Fixed48::MAX, "{name}");
    assert_eq!(Fixed48::from_int(16).exp2::<T>(), Fixed48::MAX, "{name}");
    assert_eq!(Fixed48::TWO.pow::<T>(Fixed48::from_int(20)), Fixed48::MAX, "{name}");
    assert_eq!(Fixed48::from_int(-40).exp::<T>(), Fixed48::ZERO, "{name}");
    assert_eq!(Fixed48::from_int(-40).exp2::<T>(), Fixed48::ZERO, "{name}");

    // Inside the packed range the wide result is kept as is.
    let ten = Fixed48::from_int(10);
    assert_eq!(ten.exp::<T>(), Fixed48::pack(ten.unpack().exp::<T>()), "{name}");
    assert!(ten.exp::<T>() < Fixed48::MAX, "{name}");
}

#[test]
fn test_overflow_saturates_to_max() {
    assert_saturates::<Precise>();
    assert_saturates::<Fast>();
    assert_saturates::<Fastest>();
}

fn assert_min_divisor_is_zero<T: Tier>() {
    let name = T::NAME;
    assert_eq!(Fixed48::ONE.div::<T>(Fixed48::MIN), Fixed48::ZERO, "{name}");
    assert_eq!(Fixed48::MIN.rcp::<T>(), Fixed48::ZERO, "{name}");
    assert_eq!(Fixed48::ONE.div::<T>(Fixed48::ZERO), Fixed48::ZERO, "{name}");
    assert_eq!(Fixed48::ZERO.rcp::<T>(), Fixed48::ZERO, "{name}");
}

#[test]
fn test_min_divisor_gives_zero() {
    assert_min_divisor_is_zero::<Precise>();
    assert_min_divisor_is_zero::<Fast>();
    assert_min_divisor_is_zero::<Fastest>();
    assert_eq!(Fixed48::ONE.div_precise(Fixed48::MIN), Fixed48::ZERO);
    assert_eq!(Fixed48::from_int(3) / Fixed48::MIN, Fixed48::ZERO);
    // Only the divisor is special.
    assert_eq!(Fixed48::MIN.div::<Precise>(Fixed48::ONE), Fixed48::MIN);
    assert!(Fixed48::from_int(-3).rcp::<Fast>().is_normal());
}

#[test]
fn test_fixed32_bridge() {
    let v = Fixed32::from_f64(-3.75);
    let packed = Fixed48::from_fixed32(v);
    assert_eq!(packed, Fixed48::from_f64(-3.75));
    assert_eq!(packed.to_fixed32(), v);
    assert_eq!(Fixed48::from(v), packed);
    assert_eq!(Fixed64::from(packed), Fixed64::from_fixed32(v));
    assert_eq!(Fixed48::from_fixed32(Fixed32::MIN).to_fixed32(), Fixed32::MIN);
    assert_eq!(Fixed48::from_fixed32(Fixed32::MAX).to_fixed32(), Fixed32::MAX);
}

#[test]
fn test_float_conversions() {
    assert_eq!(Fixed48::from_f64(-2.5).to_f64(), -2.5);
    assert_eq!(Fixed48::from_f32(0.25).to_f32(), 0.25);
    assert_eq!(Fixed48::from_f64(-2.5).round_to_int(), -2);
    assert_eq!(Fixed48::from_f64(-2.5).ceil_to_int(), -2);
}
