// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Function catalogues.
//!
//! Every transcendental follows the same pipeline: reject the invalid
//! domain with a total answer, normalize the magnitude into `[1, 2)` by a
//! leading-zero count, run the tier kernel on the s2.30 mantissa, then
//! recombine the exponent and rescale to the caller's format.

pub mod fixed32;
pub mod fixed64;
pub mod packed;

use crate::tier::Tier;
use crate::util::qmul30;

/// 2^32 / (2π): maps radians to turns with a quarter turn at `1 << 30`.
pub(crate) const RCP_TWO_PI: i64 = 683_565_276;

/// 2^64 / (2π), for Q32.32 inputs whose integer part reaches far past one turn.
pub(crate) const RCP_TWO_PI_WIDE: i128 = 2_935_890_503_282_001_226;

/// Sine of a turn-scaled angle, s2.30 in and out.
///
/// `z` covers one full turn over the `i32` range, so wraparound is the
/// periodic reduction. Quadrants two and three mirror onto the first.
#[inline]
pub(crate) fn unit_sin<T: Tier>(z: i32) -> i32 {
    let z = if (z ^ (z << 1)) < 0 {
        i32::MIN.wrapping_sub(z)
    } else {
        z
    };
    let zz = qmul30(z, z);
    qmul30(T::sin(zz), z)
}
