// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Decimal to fixed-point.
//!
//! Grammar: `[+-] digits [. digits] [(e|E) [+-] digits]`, with at least one
//! mantissa digit. An exponent marker without digits is left unconsumed.

use core::str::FromStr;

use super::pow10;
use crate::config::{FRAC_BITS_32, FRAC_BITS_64};
use crate::error::{ParseFixedError, ParseResult};
use crate::types::fixed32::Fixed32;
use crate::types::fixed48::Fixed48;
use crate::types::fixed64::Fixed64;

/// Fraction digits kept; later digits are below every width's resolution.
const MAX_FRAC_DIGITS: u32 = 24;

/// Exponents are clamped here; anything larger saturates or vanishes anyway.
const MAX_EXPONENT: i32 = 64;

/// A scanned decimal: `int + frac / 10^frac_digits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Scanned {
    negative: bool,
    int: u64,
    frac: u128,
    frac_digits: u32,
    end: usize,
}

impl Scanned {
    /// Shift the decimal point `exp` places to the right.
    fn apply_exponent(&mut self, exp: i32) {
        if exp > 0 {
            for _ in 0..exp {
                let digit = if self.frac_digits > 0 {
                    let p = pow10(self.frac_digits - 1);
                    let d = self.frac / p;
                    self.frac %= p;
                    self.frac_digits -= 1;
                    d as u64
                } else {
                    0
                };
                self.int = self.int.saturating_mul(10).saturating_add(digit);
            }
        } else {
            for _ in 0..exp.unsigned_abs() {
                let digit = (self.int % 10) as u128;
                self.int /= 10;
                if self.frac_digits == MAX_FRAC_DIGITS {
                    self.frac /= 10;
                } else {
                    self.frac_digits += 1;
                }
                self.frac += digit * pow10(self.frac_digits - 1);
            }
        }
    }

    /// Magnitude in units of `2^-frac_bits`, rounded to nearest.
    fn magnitude(&self, frac_bits: u32) -> u128 {
        let whole = (self.int as u128) << frac_bits;
        if self.frac_digits == 0 {
            return whole;
        }
        let scale = pow10(self.frac_digits);
        whole + ((self.frac << frac_bits) + scale / 2) / scale
    }
}

fn digits(bytes: &[u8], mut pos: usize, mut each: impl FnMut(u8)) -> usize {
    while let Some(&b) = bytes.get(pos) {
        if !b.is_ascii_digit() {
            break;
        }
        each(b - b'0');
        pos += 1;
    }
    pos
}

/// Scan one number starting at `start`. `Err` carries the offset where a
/// digit was expected.
fn scan(bytes: &[u8], start: usize) -> Result<Scanned, usize> {
    let mut pos = start;
    let negative = match bytes.get(pos) {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };
    let mantissa_start = pos;

    let mut int = 0u64;
    pos = digits(bytes, pos, |d| {
        int = int.saturating_mul(10).saturating_add(d as u64);
    });
    let mut seen = pos > mantissa_start;

    let mut frac = 0u128;
    let mut frac_digits = 0u32;
    if bytes.get(pos) == Some(&b'.') {
        let frac_start = pos + 1;
        pos = digits(bytes, frac_start, |d| {
            if frac_digits < MAX_FRAC_DIGITS {
                frac = frac * 10 + d as u128;
                frac_digits += 1;
            }
        });
        seen |= pos > frac_start;
    }
    if !seen {
        return Err(mantissa_start);
    }

    let mut scanned = Scanned {
        negative,
        int,
        frac,
        frac_digits,
        end: pos,
    };

    if matches!(bytes.get(pos), Some(b'e') | Some(b'E')) {
        let mut epos = pos + 1;
        let exp_negative = match bytes.get(epos) {
            Some(b'-') => {
                epos += 1;
                true
            }
            Some(b'+') => {
                epos += 1;
                false
            }
            _ => false,
        };
        let mut exp = 0i32;
        let exp_end = digits(bytes, epos, |d| {
            exp = (exp * 10 + d as i32).min(MAX_EXPONENT);
        });
        if exp_end > epos {
            scanned.apply_exponent(if exp_negative { -exp } else { exp });
            scanned.end = exp_end;
        }
    }
    Ok(scanned)
}

fn skip_whitespace(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_whitespace()).count()
}

/// Signed raw value clamped to `min..=max`.
fn saturate(s: &Scanned, frac_bits: u32, min: i64, max: i64) -> i64 {
    let mag = s.magnitude(frac_bits);
    if s.negative {
        if mag >= min.unsigned_abs() as u128 {
            min
        } else {
            -(mag as i64)
        }
    } else if mag >= max as u128 {
        max
    } else {
        mag as i64
    }
}

fn strict(s: &str) -> ParseResult<Scanned> {
    let bytes = s.as_bytes();
    if bytes.is_empty() {
        return Err(ParseFixedError::Empty);
    }
    let scanned = scan(bytes, 0).map_err(|position| ParseFixedError::InvalidDigit { position })?;
    if scanned.end != bytes.len() {
        return Err(ParseFixedError::TrailingCharacters {
            position: scanned.end,
        });
    }
    Ok(scanned)
}

fn prefix(s: &str) -> Option<Scanned> {
    let bytes = s.as_bytes();
    scan(bytes, skip_whitespace(bytes)).ok()
}

impl Fixed32 {
    fn from_scanned(s: &Scanned) -> Self {
        Fixed32(saturate(s, FRAC_BITS_32, i32::MIN as i64, i32::MAX as i64) as i32)
    }

    /// Parse the longest numeric prefix after leading whitespace.
    ///
    /// Returns the value and the number of bytes consumed, or `(ZERO, 0)`
    /// when no number is present. Out-of-range values saturate.
    pub fn parse_prefix(s: &str) -> (Self, usize) {
        match prefix(s) {
            Some(scanned) => (Self::from_scanned(&scanned), scanned.end),
            None => (Self::ZERO, 0),
        }
    }
}

impl Fixed64 {
    fn from_scanned(s: &Scanned) -> Self {
        Fixed64(saturate(s, FRAC_BITS_64, i64::MIN, i64::MAX))
    }

    /// See [`Fixed32::parse_prefix`].
    pub fn parse_prefix(s: &str) -> (Self, usize) {
        match prefix(s) {
            Some(scanned) => (Self::from_scanned(&scanned), scanned.end),
            None => (Self::ZERO, 0),
        }
    }
}

impl Fixed48 {
    fn from_scanned(s: &Scanned) -> Self {
        let raw = saturate(
            s,
            FRAC_BITS_64,
            Fixed48::MIN.to_fixed64().0,
            Fixed48::MAX.to_fixed64().0,
        );
        Fixed48::from_fixed64(Fixed64(raw))
    }

    fn sentinel(s: &str) -> Option<(Self, usize)> {
        const NAMES: [(&str, Fixed48); 3] = [
            ("-inf", Fixed48::NEGATIVE_INFINITY),
            ("inf", Fixed48::POSITIVE_INFINITY),
            ("nan", Fixed48::NAN),
        ];
        NAMES.iter().find_map(|&(name, value)| {
            let head = s.get(..name.len())?;
            head.eq_ignore_ascii_case(name).then_some((value, name.len()))
        })
    }

    /// See [`Fixed32::parse_prefix`]. Also accepts `inf`, `-inf` and `nan`.
    pub fn parse_prefix(s: &str) -> (Self, usize) {
        let skip = skip_whitespace(s.as_bytes());
        if let Some((value, len)) = Self::sentinel(&s[skip..]) {
            return (value, skip + len);
        }
        match prefix(s) {
            Some(scanned) => (Self::from_scanned(&scanned), scanned.end),
            None => (Self::ZERO, 0),
        }
    }
}

impl FromStr for Fixed32 {
    type Err = ParseFixedError;

    fn from_str(s: &str) -> ParseResult<Self> {
        strict(s).map(|scanned| Self::from_scanned(&scanned))
    }
}

impl FromStr for Fixed64 {
    type Err = ParseFixedError;

    fn from_str(s: &str) -> ParseResult<Self> {
        strict(s).map(|scanned| Self::from_scanned(&scanned))
    }
}

impl FromStr for Fixed48 {
    type Err = ParseFixedError;

    fn from_str(s: &str) -> ParseResult<Self> {
        if let Some((value, len)) = Self::sentinel(s) {
            if len == s.len() {
                return Ok(value);
            }
        }
        strict(s).map(|scanned| Self::from_scanned(&scanned))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_decimals() {
        assert_eq!("1.5".parse::<Fixed32>(), Ok(Fixed32::from_f64(1.5)));
        assert_eq!("-2".parse::<Fixed32>(), Ok(Fixed32::from_int(-2)));
        assert_eq!("+0.25".parse::<Fixed64>(), Ok(Fixed64::from_f64(0.25)));
        assert_eq!(".5".parse::<Fixed32>(), Ok(Fixed32::HALF));
        assert_eq!("3.".parse::<Fixed32>(), Ok(Fixed32::THREE));
        assert_eq!("300".parse::<Fixed48>(), Ok(Fixed48::from_int(300)));
    }

    #[test]
    fn rounds_to_nearest() {
        // 1/65536 = 0.0000152587890625; half of that rounds up.
        assert_eq!("0.00000762939453125".parse::<Fixed32>(), Ok(Fixed32(1)));
        assert_eq!("0.0000076293945312".parse::<Fixed32>(), Ok(Fixed32(0)));
        assert_eq!("3.14159265358979".parse::<Fixed64>(), Ok(Fixed64(13_493_037_705)));
        // 0.65536 units, which truncation would drop.
        assert_eq!("0.00001".parse::<Fixed32>(), Ok(Fixed32(1)));
    }

    #[test]
    fn exponents_shift_the_point() {
        assert_eq!("1.5e2".parse::<Fixed32>(), Ok(Fixed32::from_int(150)));
        assert_eq!("25E-2".parse::<Fixed32>(), Ok(Fixed32::from_f64(0.25)));
        assert_eq!("1e400".parse::<Fixed32>(), Ok(Fixed32::MAX));
        assert_eq!("1e-400".parse::<Fixed64>(), Ok(Fixed64::ZERO));
        let (v, n) = Fixed32::parse_prefix("7e");
        assert_eq!((v, n), (Fixed32::from_int(7), 1));
        let (v, n) = Fixed32::parse_prefix("7e+x");
        assert_eq!((v, n), (Fixed32::from_int(7), 1));
    }

    #[test]
    fn out_of_range_saturates() {
        assert_eq!("40000".parse::<Fixed32>(), Ok(Fixed32::MAX));
        assert_eq!("-32768".parse::<Fixed32>(), Ok(Fixed32::MIN));
        assert_eq!("-99999999999999999999999".parse::<Fixed32>(), Ok(Fixed32::MIN));
        assert_eq!("-40000".parse::<Fixed48>(), Ok(Fixed48::MIN));
        assert_eq!("1e12".parse::<Fixed64>(), Ok(Fixed64::MAX));
    }

    #[test]
    fn strict_errors() {
        assert_eq!("".parse::<Fixed32>(), Err(ParseFixedError::Empty));
        assert_eq!(
            "-".parse::<Fixed32>(),
            Err(ParseFixedError::InvalidDigit { position: 1 })
        );
        assert_eq!(
            ".".parse::<Fixed32>(),
            Err(ParseFixedError::InvalidDigit { position: 0 })
        );
        assert_eq!(
            " 1".parse::<Fixed32>(),
            Err(ParseFixedError::InvalidDigit { position: 0 })
        );
        assert_eq!(
            "1.5x".parse::<Fixed64>(),
            Err(ParseFixedError::TrailingCharacters { position: 3 })
        );
    }

    #[test]
    fn prefix_is_total() {
        assert_eq!(Fixed32::parse_prefix("  -1.25 rest"), (Fixed32::from_f64(-1.25), 7));
        assert_eq!(Fixed32::parse_prefix("abc"), (Fixed32::ZERO, 0));
        assert_eq!(Fixed64::parse_prefix(""), (Fixed64::ZERO, 0));
        assert_eq!(Fixed48::parse_prefix(" NaN"), (Fixed48::NAN, 4));
        assert_eq!("-inf".parse::<Fixed48>(), Ok(Fixed48::NEGATIVE_INFINITY));
    }
}
