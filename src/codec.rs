// Copyright (c) 2025 Varshith Gudur. Licensed under AGPLv3.
//! Little-endian binary layout.
//!
//! The wire form of every width is its raw two's-complement word. Fixed48
//! occupies a full 8 bytes so the reserved bits and sentinels survive
//! unchanged.

use byteorder::{ByteOrder, LittleEndian};

use crate::error::{CodecError, CodecResult};
use crate::types::fixed32::Fixed32;
use crate::types::fixed48::Fixed48;
use crate::types::fixed64::Fixed64;

pub trait FixedCodec: Copy {
    /// Encoded size in bytes.
    const BYTES: usize;

    /// Write into the front of `out`. Returns the bytes written.
    fn write_le(self, out: &mut [u8]) -> CodecResult<usize>;

    /// Read from the front of `input`.
    fn read_le(input: &[u8]) -> CodecResult<Self>;
}

#[inline]
fn check(len: usize, expected: usize) -> CodecResult<()> {
    if len < expected {
        return Err(CodecError::InvalidLength {
            expected,
            found: len,
        });
    }
    Ok(())
}

impl FixedCodec for Fixed32 {
    const BYTES: usize = 4;

    fn write_le(self, out: &mut [u8]) -> CodecResult<usize> {
        check(out.len(), Self::BYTES)?;
        LittleEndian::write_i32(&mut out[..Self::BYTES], self.0);
        Ok(Self::BYTES)
    }

    fn read_le(input: &[u8]) -> CodecResult<Self> {
        check(input.len(), Self::BYTES)?;
        Ok(Fixed32(LittleEndian::read_i32(&input[..Self::BYTES])))
    }
}

impl FixedCodec for Fixed64 {
    const BYTES: usize = 8;

    fn write_le(self, out: &mut [u8]) -> CodecResult<usize> {
        check(out.len(), Self::BYTES)?;
        LittleEndian::write_i64(&mut out[..Self::BYTES], self.0);
        Ok(Self::BYTES)
    }

    fn read_le(input: &[u8]) -> CodecResult<Self> {
        check(input.len(), Self::BYTES)?;
        Ok(Fixed64(LittleEndian::read_i64(&input[..Self::BYTES])))
    }
}

impl FixedCodec for Fixed48 {
    const BYTES: usize = 8;

    fn write_le(self, out: &mut [u8]) -> CodecResult<usize> {
        check(out.len(), Self::BYTES)?;
        LittleEndian::write_i64(&mut out[..Self::BYTES], self.0);
        Ok(Self::BYTES)
    }

    fn read_le(input: &[u8]) -> CodecResult<Self> {
        check(input.len(), Self::BYTES)?;
        Ok(Fixed48(LittleEndian::read_i64(&input[..Self::BYTES])))
    }
}

/// Encode `values` back to back. Returns the bytes written.
pub fn encode_slice<T: FixedCodec>(values: &[T], out: &mut [u8]) -> CodecResult<usize> {
    let needed = values.len() * T::BYTES;
    check(out.len(), needed)?;
    for (v, chunk) in values.iter().zip(out.chunks_exact_mut(T::BYTES)) {
        v.write_le(chunk)?;
    }
    Ok(needed)
}

/// Decode exactly `out.len()` values from the front of `input`.
pub fn decode_slice<T: FixedCodec>(input: &[u8], out: &mut [T]) -> CodecResult<usize> {
    let needed = out.len() * T::BYTES;
    check(input.len(), needed)?;
    for (slot, chunk) in out.iter_mut().zip(input.chunks_exact(T::BYTES)) {
        *slot = T::read_le(chunk)?;
    }
    Ok(needed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_is_little_endian_raw_word() {
        let mut buf = [0u8; 8];
        assert_eq!(Fixed32::from_int(2).write_le(&mut buf), Ok(4));
        assert_eq!(&buf[..4], &[0x00, 0x00, 0x02, 0x00]);

        assert_eq!(Fixed64::NEG1.write_le(&mut buf), Ok(8));
        assert_eq!(buf, [0, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF]);

        Fixed48::NAN.write_le(&mut buf).unwrap();
        assert_eq!(buf, [0, 0, 0, 0, 0, 0, 0xF8, 0xFF]);
        assert_eq!(Fixed48::read_le(&buf), Ok(Fixed48::NAN));
    }

    #[test]
    fn short_buffers_are_rejected() {
        let mut buf = [0u8; 3];
        assert_eq!(
            Fixed32::ONE.write_le(&mut buf),
            Err(CodecError::InvalidLength { expected: 4, found: 3 })
        );
        assert_eq!(
            Fixed64::read_le(&buf),
            Err(CodecError::InvalidLength { expected: 8, found: 3 })
        );
    }

    #[test]
    fn slices_pack_back_to_back() {
        let values = [Fixed32::ONE, Fixed32::NEG1, Fixed32::PI];
        let mut buf = [0u8; 12];
        assert_eq!(encode_slice(&values, &mut buf), Ok(12));
        let mut back = [Fixed32::ZERO; 3];
        assert_eq!(decode_slice(&buf, &mut back), Ok(12));
        assert_eq!(back, values);

        let mut short = [Fixed32::ZERO; 4];
        assert!(decode_slice(&buf, &mut short).is_err());
    }
}
