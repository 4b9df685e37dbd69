// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
#![no_std]

//! valori-fixed: deterministic, no_std, integer-only fixed-point math.
//!
//! Three binary widths are provided:
//! - [`Fixed32`]: Q16.16 in an `i32`.
//! - [`Fixed64`]: Q32.32 in an `i64`.
//! - [`Fixed48`]: a packed Q15.32 stored in an `i64`, delegating every
//!   operation to the 64-bit engine.
//!
//! Every transcendental function is parameterized by an accuracy [`Tier`]
//! (`Precise`, `Fast`, `Fastest`), selected statically at the call site:
//!
//! ```
//! use valori_fixed::{Fixed32, Fast, Precise};
//!
//! let two = Fixed32::from_int(2);
//! let root = two.sqrt::<Precise>();
//! assert!((root.to_f64() - core::f64::consts::SQRT_2).abs() < 1e-4);
//! let quick = two.sqrt::<Fast>();
//! assert!((quick.to_f64() - root.to_f64()).abs() < 1e-4);
//! ```

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod codec;
pub mod config;
pub mod decimal;
pub mod digest;
pub mod error;
pub mod fxp;
pub mod sampling;
pub mod tier;
pub mod types;
pub mod util;

pub use error::ParseFixedError;
pub use fxp::packed::PackedView;
pub use tier::{Fast, Fastest, Precise, Tier};
pub use types::fixed32::Fixed32;
pub use types::fixed48::Fixed48;
pub use types::fixed64::Fixed64;

#[cfg(test)]
pub mod tests;
