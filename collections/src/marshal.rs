//! Binary marshalling.
//!
//! The framing is deliberately plain so that any other process can speak it:
//!
//! - Lengths are `u64` little-endian (8 bytes).
//! - Integers and floats are fixed-width little-endian (floats as IEEE bits).
//! - `bool` is one byte, `0` or `1`.
//! - `char` is its scalar value as a `u32`.
//! - `String` is a length followed by UTF-8 bytes.
//! - `Option<T>` is a tag byte (`0` = `None`, `1` = `Some`) followed by the value.
//! - [`SolidList<T>`] is a length followed by each element in order.
//!
//! Every decode is bounds-checked through [`Reader`]; truncated, malformed or
//! over-long input fails with a [`DecodeError`] and never reads out of bounds.

use alloc::string::String;
use alloc::vec::Vec;

use crate::{DecodeError, SolidList};

/// Symmetric binary encoding for a type.
///
/// `unmarshal_from` must consume exactly the bytes `marshal_into` wrote.
pub trait Marshal: Sized {
    /// Lower bound on the encoded size of any value, in bytes.
    ///
    /// Used to reject a declared element count before allocating for it.
    /// Must never overstate the real size.
    const MIN_WIDTH: usize = 1;

    /// Append the encoding of `self` to `out`.
    fn marshal_into(&self, out: &mut Vec<u8>);

    /// Decode one value, advancing `reader` past it.
    fn unmarshal_from(reader: &mut Reader<'_>) -> Result<Self, DecodeError>;
}

/// Append a length prefix.
pub fn write_len(out: &mut Vec<u8>, len: usize) {
    out.extend_from_slice(&(len as u64).to_le_bytes());
}

// =============================================================================
// Reader
// =============================================================================

/// Bounds-checked cursor over an input buffer.
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    bytes: &'a [u8],
    offset: usize,
}

impl<'a> Reader<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, offset: 0 }
    }

    /// Bytes consumed so far.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.bytes.len() - self.offset
    }

    /// Consume exactly `needed` bytes.
    pub fn take(&mut self, what: &'static str, needed: usize) -> Result<&'a [u8], DecodeError> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(DecodeError::UnexpectedEof {
                what,
                needed,
                remaining,
            });
        }
        let start = self.offset;
        self.offset += needed;
        Ok(&self.bytes[start..self.offset])
    }

    /// Consume exactly `N` bytes into an array.
    pub fn take_array<const N: usize>(&mut self, what: &'static str) -> Result<[u8; N], DecodeError> {
        let mut array = [0u8; N];
        array.copy_from_slice(self.take(what, N)?);
        Ok(array)
    }

    /// Read a length prefix as written by [`write_len`].
    pub fn read_len(&mut self, what: &'static str) -> Result<usize, DecodeError> {
        let declared = u64::from_le_bytes(self.take_array(what)?);
        usize::try_from(declared).map_err(|_| DecodeError::LengthOverflow { declared })
    }

    /// Read an element count and check that `count` values of `T` could
    /// still fit in the remaining input.
    pub fn read_count<T: Marshal>(&mut self, what: &'static str) -> Result<usize, DecodeError> {
        let declared = self.read_len(what)?;
        let remaining = self.remaining();
        match declared.checked_mul(T::MIN_WIDTH) {
            Some(needed) if needed <= remaining => Ok(declared),
            _ => Err(DecodeError::LengthExceedsInput {
                declared,
                remaining,
            }),
        }
    }

    /// Fail unless the whole input has been consumed.
    pub fn finish(&self) -> Result<(), DecodeError> {
        match self.remaining() {
            0 => Ok(()),
            extra => Err(DecodeError::TrailingBytes(extra)),
        }
    }
}

// =============================================================================
// Fixed-width implementations
// =============================================================================

macro_rules! fixed_width {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Marshal for $ty {
                const MIN_WIDTH: usize = size_of::<$ty>();

                fn marshal_into(&self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_le_bytes());
                }

                fn unmarshal_from(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
                    Ok(<$ty>::from_le_bytes(reader.take_array(stringify!($ty))?))
                }
            }
        )*
    };
}

fixed_width!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128, f32, f64);

impl Marshal for bool {
    fn marshal_into(&self, out: &mut Vec<u8>) {
        out.push(u8::from(*self));
    }

    fn unmarshal_from(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        let [byte] = reader.take_array::<1>("bool")?;
        match byte {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(DecodeError::InvalidBool(other)),
        }
    }
}

impl Marshal for char {
    const MIN_WIDTH: usize = 4;

    fn marshal_into(&self, out: &mut Vec<u8>) {
        u32::from(*self).marshal_into(out);
    }

    fn unmarshal_from(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        let scalar = u32::unmarshal_from(reader)?;
        char::from_u32(scalar).ok_or(DecodeError::InvalidChar(scalar))
    }
}

// =============================================================================
// Variable-width implementations
// =============================================================================

impl Marshal for String {
    const MIN_WIDTH: usize = 8;

    fn marshal_into(&self, out: &mut Vec<u8>) {
        write_len(out, self.len());
        out.extend_from_slice(self.as_bytes());
    }

    fn unmarshal_from(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        let len = reader.read_count::<u8>("string length")?;
        let bytes = reader.take("string bytes", len)?;
        core::str::from_utf8(bytes)
            .map(String::from)
            .map_err(|_| DecodeError::InvalidUtf8)
    }
}

impl<T: Marshal> Marshal for Option<T> {
    fn marshal_into(&self, out: &mut Vec<u8>) {
        match self {
            None => out.push(0),
            Some(value) => {
                out.push(1);
                value.marshal_into(out);
            }
        }
    }

    fn unmarshal_from(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        let [tag] = reader.take_array::<1>("option tag")?;
        match tag {
            0 => Ok(None),
            1 => T::unmarshal_from(reader).map(Some),
            other => Err(DecodeError::InvalidOptionTag(other)),
        }
    }
}

impl<T: Marshal> Marshal for SolidList<T> {
    const MIN_WIDTH: usize = 8;

    fn marshal_into(&self, out: &mut Vec<u8>) {
        write_len(out, self.len());
        for item in self.iter() {
            item.marshal_into(out);
        }
    }

    fn unmarshal_from(reader: &mut Reader<'_>) -> Result<Self, DecodeError> {
        let len = reader.read_count::<T>("list length")?;
        let mut items = Vec::with_capacity(len);
        for _ in 0..len {
            items.push(T::unmarshal_from(reader)?);
        }
        Ok(SolidList::from(items))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn take_is_bounds_checked() {
        let mut reader = Reader::new(&[1, 2, 3]);
        assert_eq!(reader.take("head", 2), Ok(&[1u8, 2][..]));
        assert_eq!(reader.offset(), 2);
        assert_eq!(
            reader.take("tail", 2),
            Err(DecodeError::UnexpectedEof {
                what: "tail",
                needed: 2,
                remaining: 1,
            })
        );
        // A failed take consumes nothing.
        assert_eq!(reader.remaining(), 1);
    }

    #[test]
    fn read_count_rejects_counts_the_input_cannot_hold() {
        let mut out = Vec::new();
        write_len(&mut out, 3);
        out.extend_from_slice(&[0; 11]);
        let mut reader = Reader::new(&out);
        assert_eq!(
            reader.read_count::<u32>("count"),
            Err(DecodeError::LengthExceedsInput {
                declared: 3,
                remaining: 11,
            })
        );
    }

    #[test]
    fn read_count_survives_multiplication_overflow() {
        let mut out = Vec::new();
        write_len(&mut out, usize::MAX);
        let mut reader = Reader::new(&out);
        assert!(matches!(
            reader.read_count::<u64>("count"),
            Err(DecodeError::LengthExceedsInput { .. })
        ));
    }

    #[test]
    fn finish_reports_trailing_bytes() {
        let mut reader = Reader::new(&[0, 0]);
        reader.take("one", 1).unwrap();
        assert_eq!(reader.finish(), Err(DecodeError::TrailingBytes(1)));
    }

    #[test]
    fn length_prefix_is_little_endian_u64() {
        let mut out = Vec::new();
        write_len(&mut out, 0x0102);
        assert_eq!(out, [0x02, 0x01, 0, 0, 0, 0, 0, 0]);
    }
}
