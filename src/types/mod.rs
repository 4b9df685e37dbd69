// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Fixed-point value types.
//!
//! Each type is a `#[repr(transparent)]` wrapper over its raw two's-complement
//! word. The raw word is the binary layout, serialized as-is.

pub mod fixed32;
pub mod fixed48;
pub mod fixed64;
