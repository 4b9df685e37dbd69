// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
use crate::tier::{Fast, Fastest, Precise, Tier};
use crate::types::fixed32::Fixed32;

const EPSILON: f64 = 1.0 / 65536.0;

fn f(v: f64) -> Fixed32 {
    Fixed32::from_f64(v)
}

#[test]
fn test_concrete_scenarios() {
    assert_eq!(Fixed32::from_int(2).0, 0x0002_0000);
    assert_eq!(Fixed32::from_int(3) * Fixed32::from_int(4), Fixed32::from_int(12));
    assert_eq!(Fixed32::ZERO.atan2::<Precise>(Fixed32::ONE), Fixed32::ZERO);
    assert_eq!(Fixed32::ONE.atan2::<Precise>(Fixed32::ZERO), Fixed32::PI_HALF);
    assert_eq!(Fixed32::NEG1.atan2::<Fast>(Fixed32::ZERO), -Fixed32::PI_HALF);
    assert_eq!(Fixed32::ZERO.atan2::<Fastest>(Fixed32::ZERO), Fixed32::ZERO);
}

#[test]
fn test_constants() {
    assert_eq!(Fixed32::PI.0, 205_887);
    assert_eq!(Fixed32::PI2.0, 411_774);
    assert_eq!(Fixed32::PI_HALF.0, 102_943);
    assert_eq!(Fixed32::E.0, 178_145);
    assert_eq!(Fixed32::NEG1.0, -65_536);
    assert_eq!(Fixed32::HALF.0, 32_768);
    assert_eq!(Fixed32::MIN_INT, -32_768);
    assert_eq!(Fixed32::MAX_INT, 32_767);
    assert_eq!(Fixed32::from_int(Fixed32::MAX_INT).floor_to_int(), Fixed32::MAX_INT);
    assert_eq!(Fixed32::from_int(Fixed32::MIN_INT), Fixed32::MIN);
}

#[test]
fn test_conversions() {
    for &d in &[0.0, 1.0, -2.5, 0.333, -1234.5678, 32767.5, -32768.0] {
        let v = f(d);
        assert!((v.to_f64() - d).abs() <= EPSILON, "{d}");
        assert!((v.to_f32() as f64 - d).abs() <= 1e-2, "{d}");
    }
    assert_eq!(Fixed32::from_f32(-2.5), f(-2.5));
    assert_eq!(f(1.5).ceil_to_int(), 2);
    assert_eq!(f(1.5).floor_to_int(), 1);
    assert_eq!(f(1.5).round_to_int(), 2);
    assert_eq!(f(-1.5).ceil_to_int(), -1);
    assert_eq!(f(-1.5).floor_to_int(), -2);
    assert_eq!(f(-1.5).round_to_int(), -1);
    assert_eq!(f(-1.75).round_to_int(), -2);
}

#[test]
fn test_value_ops() {
    assert_eq!(f(-3.25).abs(), f(3.25));
    assert_eq!(Fixed32::MIN.abs(), Fixed32::MIN);
    assert_eq!(f(3.25).nabs(), f(-3.25));
    assert_eq!(f(-3.25).nabs(), f(-3.25));
    assert_eq!(f(1.25).ceil(), Fixed32::TWO);
    assert_eq!(f(-1.25).ceil(), Fixed32::NEG1);
    assert_eq!(f(-1.25).floor(), -Fixed32::TWO);
    assert_eq!(f(2.5).round(), Fixed32::THREE);
    assert_eq!(f(-2.5).round(), -Fixed32::TWO);
    assert_eq!(f(-1.25).fract(), f(0.75));
    assert_eq!(f(7.0).min(f(-7.0)), f(-7.0));
    assert_eq!(f(7.0).max(f(-7.0)), f(7.0));
    assert_eq!(f(9.0).clamp(Fixed32::ZERO, Fixed32::FOUR), Fixed32::FOUR);
    assert_eq!(f(-9.0).clamp(Fixed32::ZERO, Fixed32::FOUR), Fixed32::ZERO);
    assert_eq!(f(-0.001).sign(), Fixed32::NEG1);
    assert_eq!(Fixed32::ZERO.sign(), Fixed32::ZERO);
    assert_eq!(f(123.0).sign(), Fixed32::ONE);
    assert_eq!(f(5.5).modulo(Fixed32::TWO), f(1.5));
    assert_eq!(f(-5.5) % Fixed32::TWO, f(-1.5));
    assert_eq!(f(5.5).modulo(Fixed32::ZERO), Fixed32::ZERO);
}

#[test]
fn test_arithmetic_wraps() {
    assert_eq!(Fixed32::MAX + Fixed32(1), Fixed32::MIN);
    assert_eq!(Fixed32::MIN - Fixed32(1), Fixed32::MAX);
    assert_eq!(-Fixed32::MIN, Fixed32::MIN);
    assert_eq!(Fixed32::from_int(200) * Fixed32::from_int(200), Fixed32::from_int(40000 - 65536));
    assert_eq!(Fixed32::MAX.saturating_mul(Fixed32::TWO), Fixed32::MAX);
    assert_eq!(Fixed32::MIN.saturating_mul(Fixed32::TWO), Fixed32::MIN);

    let mut acc = Fixed32::ONE;
    acc += Fixed32::HALF;
    acc *= Fixed32::TWO;
    acc -= Fixed32::ONE;
    acc /= Fixed32::FOUR;
    assert_eq!(acc, Fixed32::HALF);
    acc %= Fixed32(0x4000);
    assert_eq!(acc, Fixed32::ZERO);
}

fn domain_policy<T: Tier>() {
    assert_eq!(Fixed32::from_int(-1).sqrt::<T>(), Fixed32::ZERO);
    assert_eq!(Fixed32::from_int(-1).rsqrt::<T>(), Fixed32::ZERO);
    assert_eq!(Fixed32::from_int(5).div::<T>(Fixed32::ZERO), Fixed32::ZERO);
    assert_eq!(Fixed32::from_int(5).div::<T>(Fixed32::MIN), Fixed32::ZERO);
    assert_eq!(Fixed32::ZERO.rcp::<T>(), Fixed32::ZERO);
    assert_eq!(Fixed32::MIN.rcp::<T>(), Fixed32::ZERO);
    assert_eq!(Fixed32::from_int(2).asin::<T>(), Fixed32::ZERO);
    assert_eq!(Fixed32::from_int(-2).acos::<T>(), Fixed32::ZERO);
    assert_eq!(Fixed32::ZERO.log::<T>(), Fixed32::ZERO);
    assert_eq!(Fixed32::NEG1.log2::<T>(), Fixed32::ZERO);
    assert_eq!(Fixed32::ZERO.log10::<T>(), Fixed32::ZERO);
    assert_eq!(Fixed32::NEG1.pow::<T>(Fixed32::TWO), Fixed32::ZERO);
    assert_eq!(Fixed32::from_int(15).exp2::<T>(), Fixed32::MAX);
    assert_eq!(Fixed32::from_int(-16).exp2::<T>(), Fixed32::ZERO);
    assert_eq!(Fixed32::from_int(20).exp::<T>(), Fixed32::MAX);
    assert_eq!(Fixed32::from_int(-20).exp::<T>(), Fixed32::ZERO);
    assert_eq!(Fixed32::MAX.exp::<T>(), Fixed32::MAX);
    assert_eq!(Fixed32::MIN.exp::<T>(), Fixed32::ZERO);
    assert_eq!(Fixed32::from_int(100).pow::<T>(Fixed32::from_int(100)), Fixed32::MAX);
}

#[test]
fn test_domain_policy_all_tiers() {
    domain_policy::<Precise>();
    domain_policy::<Fast>();
    domain_policy::<Fastest>();
}

fn exact_anchors<T: Tier>() {
    assert_eq!(Fixed32::ONE.sqrt::<T>(), Fixed32::ONE);
    assert_eq!(Fixed32::FOUR.sqrt::<T>(), Fixed32::TWO);
    assert_eq!(Fixed32::ONE.rsqrt::<T>(), Fixed32::ONE);
    assert_eq!(Fixed32::FOUR.rsqrt::<T>(), Fixed32::HALF);
    assert_eq!(Fixed32::ONE.rcp::<T>(), Fixed32::ONE);
    assert_eq!(Fixed32::NEG1.rcp::<T>(), Fixed32::NEG1);
    assert_eq!(Fixed32::ONE.log::<T>(), Fixed32::ZERO);
    assert_eq!(Fixed32::from_int(8).log2::<T>(), Fixed32::THREE);
    assert_eq!(Fixed32::ZERO.exp2::<T>(), Fixed32::ONE);
    assert_eq!(Fixed32::THREE.exp2::<T>(), Fixed32::from_int(8));
    assert_eq!(Fixed32::from_int(-2).exp2::<T>(), Fixed32(0x4000));
    assert_eq!(Fixed32::ZERO.exp::<T>(), Fixed32::ONE);
    assert_eq!(Fixed32::ZERO.sin::<T>(), Fixed32::ZERO);
    let x = f(-7.375);
    assert_eq!(x.div::<T>(Fixed32::ONE), x);
    assert_eq!(x.div::<T>(Fixed32::NEG1), -x);
}

#[test]
fn test_exact_anchors_all_tiers() {
    exact_anchors::<Precise>();
    exact_anchors::<Fast>();
    exact_anchors::<Fastest>();
}

#[test]
fn test_precise_division_is_exact() {
    assert_eq!(Fixed32::ONE.div_precise(Fixed32::THREE), Fixed32(21_845));
    assert_eq!(Fixed32::NEG1.div_precise(Fixed32::THREE), Fixed32(-21_845));
    assert_eq!(Fixed32::from_int(7).div::<Precise>(Fixed32::TWO), f(3.5));
    assert_eq!(Fixed32::from_int(7) / Fixed32::TWO, f(3.5));
}

#[test]
fn test_sqrt_precise() {
    assert_eq!(Fixed32::FOUR.sqrt_precise(), Fixed32::TWO);
    assert_eq!(Fixed32::TWO.sqrt_precise(), Fixed32(92_681));
    assert_eq!(Fixed32::MAX.sqrt_precise(), Fixed32(11_863_283));
    assert_eq!(Fixed32::NEG1.sqrt_precise(), Fixed32::ZERO);
    assert_eq!(Fixed32(1).sqrt_precise(), Fixed32(256));
}

#[test]
fn test_cos_is_shifted_sin() {
    let mut x = Fixed32::from_int(-100);
    while x < Fixed32::from_int(100) {
        assert_eq!(x.cos::<Precise>(), (x + Fixed32::PI_HALF).sin::<Precise>());
        assert_eq!(x.cos::<Fast>(), (x + Fixed32::PI_HALF).sin::<Fast>());
        assert_eq!(x.cos::<Fastest>(), (x + Fixed32::PI_HALF).sin::<Fastest>());
        x += f(0.37);
    }
}

#[test]
fn test_sin_periodicity() {
    let mut x = Fixed32::from_int(-20);
    while x < Fixed32::from_int(20) {
        let a = x.sin::<Precise>();
        let b = (x + Fixed32::PI2).sin::<Precise>();
        assert!((a.0 - b.0).abs() <= 3, "x = {x}: {a} vs {b}");
        x += f(0.113);
    }
}

#[test]
fn test_known_values() {
    let close = |v: Fixed32, want: f64, tol: f64| {
        assert!((v.to_f64() - want).abs() <= tol, "{v} vs {want}");
    };
    close(Fixed32::TWO.sqrt::<Precise>(), core::f64::consts::SQRT_2, 2.0 * EPSILON);
    close(Fixed32::E.log::<Precise>(), 1.0, 2.0 * EPSILON);
    close(Fixed32::from_int(1000).log10::<Precise>(), 3.0, 4.0 * EPSILON);
    close(Fixed32::TWO.pow::<Precise>(Fixed32::from_int(10)), 1024.0, 0.1);
    close(Fixed32::PI_HALF.sin::<Precise>(), 1.0, 2.0 * EPSILON);
    close(Fixed32::PI.cos::<Precise>(), -1.0, 2.0 * EPSILON);
    close(f(0.5).tan::<Precise>(), 0.5f64.tan(), 3.0 * EPSILON);
    close(Fixed32::ONE.atan::<Precise>(), core::f64::consts::FRAC_PI_4, 2.0 * EPSILON);
    close(Fixed32::HALF.asin::<Precise>(), core::f64::consts::FRAC_PI_6, 2.0 * EPSILON);
    close(Fixed32::HALF.acos::<Precise>(), core::f64::consts::FRAC_PI_3, 2.0 * EPSILON);
    close(Fixed32::ONE.asin::<Fast>(), core::f64::consts::FRAC_PI_2, 2.0 * EPSILON);
    close(Fixed32::NEG1.acos::<Fast>(), core::f64::consts::PI, 2.0 * EPSILON);
    close((-Fixed32::ONE).atan2::<Precise>(-Fixed32::ONE), -3.0 * core::f64::consts::FRAC_PI_4, 2.0 * EPSILON);
}
