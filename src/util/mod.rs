// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Bit primitives and approximation kernels shared by every width.
//!
//! Every kernel takes and returns values in the s2.30 scratch format
//! (`1 << 30` is 1.0). The input is the normalized mantissa offset, so a
//! reciprocal kernel evaluated at `a` approximates `1 / (1 + a)` for
//! `a` in `[0, 1)`.

pub mod bits;
pub mod lut;
pub mod poly;

pub use bits::{isqrt128, isqrt64, nlz32, nlz64, qmul30, shr32, shr64};
