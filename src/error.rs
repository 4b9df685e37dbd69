// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Error types.
//!
//! Arithmetic never fails. The fallible surfaces are strict decimal parsing
//! and the binary codec.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseFixedError {
    /// The input was empty.
    #[error("cannot parse fixed-point value from empty string")]
    Empty,
    /// A digit was expected at the given byte offset.
    #[error("invalid digit at byte {position}")]
    InvalidDigit { position: usize },
    /// A valid number was followed by unparsed input.
    #[error("trailing characters at byte {position}")]
    TrailingCharacters { position: usize },
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    #[error("Invalid buffer length: expected {expected}, found {found}")]
    InvalidLength { expected: usize, found: usize },
}

pub type ParseResult<T> = core::result::Result<T, ParseFixedError>;
pub type CodecResult<T> = core::result::Result<T, CodecError>;
