// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Determinism attestation.
//!
//! Evaluates the whole catalogue of every width on a fixed input grid and
//! hashes the raw outputs with BLAKE3. Two builds agree bit for bit on
//! every sampled output exactly when their digests match, whatever the
//! target architecture.
//!
//! # Hash Input Structure
//! ```text
//! For each width (fixed32, fixed64, fixed48):
//!   width name (ASCII)
//!   For each function (catalogue order):
//!     function name (ASCII)
//!     For each grid point:
//!       output raw word (LE, via codec)
//!   For each grid point:
//!     decimal rendering (ASCII) + 0x00
//! ```

use serde::Serialize;

use crate::codec::FixedCodec;
use crate::tier::{Fast, Fastest, Precise, Tier};
use crate::types::fixed32::Fixed32;
use crate::types::fixed48::Fixed48;
use crate::types::fixed64::Fixed64;

/// Points per grid.
pub const GRID_POINTS: u32 = 1024;

/// Even grid over the whole raw range.
#[inline]
fn spread(i: u32, bits: u32) -> i64 {
    let step = (1i128 << bits) / GRID_POINTS as i128;
    (i as i128 * step - (1i128 << (bits - 1))) as i64 + i as i64
}

/// Even grid over `[-1, 1]` at the given unit.
#[inline]
fn unit(i: u32, one: i64) -> i64 {
    -one + (2 * one * i as i64) / (GRID_POINTS as i64 - 1)
}

fn absorb<V: FixedCodec>(hasher: &mut blake3::Hasher, v: V) {
    let mut buf = [0u8; 8];
    if let Ok(n) = v.write_le(&mut buf) {
        hasher.update(&buf[..n]);
    }
}

macro_rules! absorb_catalogue {
    ($hasher:expr, $ty:ty, $tier:ty, $full:expr, $unit:expr) => {{
        let hasher: &mut blake3::Hasher = $hasher;
        let full: fn(u32) -> $ty = $full;
        let unit: fn(u32) -> $ty = $unit;

        let unary: [(&str, fn($ty) -> $ty); 14] = [
            ("sqrt", <$ty>::sqrt::<$tier>),
            ("sqrt_precise", <$ty>::sqrt_precise),
            ("rsqrt", <$ty>::rsqrt::<$tier>),
            ("rcp", <$ty>::rcp::<$tier>),
            ("exp", <$ty>::exp::<$tier>),
            ("exp2", <$ty>::exp2::<$tier>),
            ("log", <$ty>::log::<$tier>),
            ("log2", <$ty>::log2::<$tier>),
            ("log10", <$ty>::log10::<$tier>),
            ("sin", <$ty>::sin::<$tier>),
            ("cos", <$ty>::cos::<$tier>),
            ("tan", <$ty>::tan::<$tier>),
            ("atan", <$ty>::atan::<$tier>),
            ("round", <$ty>::round),
        ];
        for (name, f) in unary {
            hasher.update(name.as_bytes());
            for i in 0..GRID_POINTS {
                absorb(hasher, f(full(i)));
            }
        }

        let inverse: [(&str, fn($ty) -> $ty); 2] =
            [("asin", <$ty>::asin::<$tier>), ("acos", <$ty>::acos::<$tier>)];
        for (name, f) in inverse {
            hasher.update(name.as_bytes());
            for i in 0..GRID_POINTS {
                absorb(hasher, f(unit(i)));
            }
        }

        let binary: [(&str, fn($ty, $ty) -> $ty); 4] = [
            ("div", <$ty>::div::<$tier>),
            ("div_precise", <$ty>::div_precise),
            ("atan2", <$ty>::atan2::<$tier>),
            ("pow", <$ty>::pow::<$tier>),
        ];
        for (name, f) in binary {
            hasher.update(name.as_bytes());
            for i in 0..GRID_POINTS {
                absorb(hasher, f(full(i), full(GRID_POINTS - 1 - i)));
            }
        }

        let mut text = [0u8; 40];
        for i in 0..GRID_POINTS {
            let n = full(i).format_into(&mut text).min(text.len());
            hasher.update(&text[..n]);
            hasher.update(&[0]);
        }
    }};
}

/// BLAKE3 digest of every catalogue function of every width at tier `T`.
pub fn catalogue_digest<T: Tier>() -> [u8; 32] {
    let mut hasher = blake3::Hasher::new();

    hasher.update(b"fixed32");
    absorb_catalogue!(
        &mut hasher,
        Fixed32,
        T,
        |i| Fixed32(spread(i, 32) as i32),
        |i| Fixed32(unit(i, Fixed32::ONE.0 as i64) as i32)
    );

    hasher.update(b"fixed64");
    absorb_catalogue!(
        &mut hasher,
        Fixed64,
        T,
        |i| Fixed64(spread(i, 64)),
        |i| Fixed64(unit(i, Fixed64::ONE.0))
    );

    hasher.update(b"fixed48");
    absorb_catalogue!(
        &mut hasher,
        Fixed48,
        T,
        |i| Fixed48::from_fixed64(Fixed64(spread(i, 48))),
        |i| Fixed48::from_fixed64(Fixed64(unit(i, Fixed64::ONE.0)))
    );

    *hasher.finalize().as_bytes()
}

/// Digests of all three tiers for one build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeterminismReport {
    pub version: &'static str,
    pub grid_points: u32,
    pub precise: [u8; 32],
    pub fast: [u8; 32],
    pub fastest: [u8; 32],
}

impl DeterminismReport {
    pub fn generate() -> Self {
        DeterminismReport {
            version: env!("CARGO_PKG_VERSION"),
            grid_points: GRID_POINTS,
            precise: catalogue_digest::<Precise>(),
            fast: catalogue_digest::<Fast>(),
            fastest: catalogue_digest::<Fastest>(),
        }
    }
}
