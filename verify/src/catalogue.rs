// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Name-based dispatch over the three value types.

use std::fmt;
use std::str::FromStr;

use valori_fixed::sampling::Domain;
use valori_fixed::{Fixed32, Fixed48, Fixed64, ParseFixedError, Tier};

/// Every function name accepted by `eval`, with its arity.
pub const FUNCTIONS: &[(&str, usize)] = &[
    ("add", 2),
    ("sub", 2),
    ("mul", 2),
    ("abs", 1),
    ("round", 1),
    ("modulo", 2),
    ("div_precise", 2),
    ("sqrt_precise", 1),
    ("div", 2),
    ("rcp", 1),
    ("sqrt", 1),
    ("rsqrt", 1),
    ("exp", 1),
    ("exp2", 1),
    ("log", 1),
    ("log2", 1),
    ("log10", 1),
    ("pow", 2),
    ("sin", 1),
    ("cos", 1),
    ("tan", 1),
    ("atan", 1),
    ("atan2", 2),
    ("asin", 1),
    ("acos", 1),
];

pub fn arity(function: &str) -> Option<usize> {
    FUNCTIONS
        .iter()
        .find(|(name, _)| *name == function)
        .map(|&(_, n)| n)
}

pub trait Catalogue: Copy + fmt::Display + FromStr<Err = ParseFixedError> {
    const WIDTH: &'static str;
    /// Raw units per 1.0.
    const SCALE: f64;
    /// Builds a value from a raw word in the scale of `SCALE`.
    fn from_scaled(raw: i64) -> Self;

    /// This width's sampling intervals.
    fn bounds(domain: &Domain) -> &'static [(f64, f64)];

    /// `MIN` and `MAX` in real units.
    fn range() -> (f64, f64);

    fn to_f64(self) -> f64;

    fn call<T: Tier>(function: &str, args: &[Self]) -> Option<Self>;
}

macro_rules! catalogue {
    ($ty:ident, $width:literal, $scale:expr, $bounds:ident, |$raw:ident| $from:expr) => {
        impl Catalogue for $ty {
            const WIDTH: &'static str = $width;
            const SCALE: f64 = $scale;

            fn from_scaled($raw: i64) -> Self {
                $from
            }

            fn bounds(domain: &Domain) -> &'static [(f64, f64)] {
                domain.$bounds
            }

            fn range() -> (f64, f64) {
                ($ty::MIN.to_f64(), $ty::MAX.to_f64())
            }

            fn to_f64(self) -> f64 {
                $ty::to_f64(self)
            }

            fn call<T: Tier>(function: &str, args: &[Self]) -> Option<Self> {
                let value = match (function, args) {
                    ("add", &[a, b]) => a + b,
                    ("sub", &[a, b]) => a - b,
                    ("mul", &[a, b]) => a * b,
                    ("abs", &[a]) => a.abs(),
                    ("round", &[a]) => a.round(),
                    ("modulo", &[a, b]) => a.modulo(b),
                    ("div_precise", &[a, b]) => a.div_precise(b),
                    ("sqrt_precise", &[a]) => a.sqrt_precise(),
                    ("div", &[a, b]) => a.div::<T>(b),
                    ("rcp", &[a]) => a.rcp::<T>(),
                    ("sqrt", &[a]) => a.sqrt::<T>(),
                    ("rsqrt", &[a]) => a.rsqrt::<T>(),
                    ("exp", &[a]) => a.exp::<T>(),
                    ("exp2", &[a]) => a.exp2::<T>(),
                    ("log", &[a]) => a.log::<T>(),
                    ("log2", &[a]) => a.log2::<T>(),
                    ("log10", &[a]) => a.log10::<T>(),
                    ("pow", &[a, b]) => a.pow::<T>(b),
                    ("sin", &[a]) => a.sin::<T>(),
                    ("cos", &[a]) => a.cos::<T>(),
                    ("tan", &[a]) => a.tan::<T>(),
                    ("atan", &[a]) => a.atan::<T>(),
                    ("atan2", &[a, b]) => a.atan2::<T>(b),
                    ("asin", &[a]) => a.asin::<T>(),
                    ("acos", &[a]) => a.acos::<T>(),
                    _ => return None,
                };
                Some(value)
            }
        }
    };
}

catalogue!(Fixed32, "fixed32", 65_536.0, fixed32, |raw| Fixed32(raw as i32));
catalogue!(Fixed64, "fixed64", 4_294_967_296.0, fixed64, |raw| Fixed64(raw));
catalogue!(Fixed48, "fixed48", 4_294_967_296.0, fixed48, |raw| {
    Fixed48::from_fixed64(Fixed64(raw))
});

/// `f64` counterpart of a catalogue function.
pub fn reference(function: &str, args: &[f64]) -> Option<f64> {
    let value = match (function, args) {
        ("div", &[a, b]) => a / b,
        ("rcp", &[a]) => 1.0 / a,
        ("sqrt", &[a]) => a.sqrt(),
        ("rsqrt", &[a]) => 1.0 / a.sqrt(),
        ("exp", &[a]) => a.exp(),
        ("exp2", &[a]) => a.exp2(),
        ("log", &[a]) => a.ln(),
        ("log2", &[a]) => a.log2(),
        ("log10", &[a]) => a.log10(),
        ("pow", &[a, b]) => a.powf(b),
        ("sin", &[a]) => a.sin(),
        ("cos", &[a]) => a.cos(),
        ("tan", &[a]) => a.tan(),
        ("atan", &[a]) => a.atan(),
        ("atan2", &[a, b]) => a.atan2(b),
        ("asin", &[a]) => a.asin(),
        ("acos", &[a]) => a.acos(),
        _ => return None,
    };
    Some(value)
}
