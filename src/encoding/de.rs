use super::*;
use byteorder::{ByteOrder, NativeEndian};

/// Read position over an encoded byte string.
///
/// Every read checks the remaining length first, so a truncated input can only
/// ever produce [`DecodeError::Corrupted`].
#[derive(Clone, Debug)]
pub struct Cursor {
    bytes: Bytes,
}

impl Cursor {
    /// Creates a cursor at the start of `bytes`.
    pub fn new(bytes: Bytes) -> Cursor { Cursor { bytes } }

    /// Number of unread bytes.
    #[inline]
    pub fn remaining(&self) -> usize { self.bytes.len() }

    #[inline]
    fn ensure(&self, needed: usize) -> Result<(), DecodeError> {
        if self.remaining() >= needed {
            Ok(())
        } else {
            Err(DecodeError::Corrupted {
                needed,
                remaining: self.remaining(),
            })
        }
    }

    /// Reads the next tag without consuming it.
    #[inline]
    pub fn peek_tag(&self) -> Result<Tag, DecodeError> {
        self.ensure(1)?;
        Tag::from_u8(self.bytes[0])
    }

    /// Consumes `len` bytes. The returned slice shares the input's storage.
    #[inline]
    pub fn take(&mut self, len: usize) -> Result<Bytes, DecodeError> {
        self.ensure(len)?;
        Ok(self.bytes.split_to(len))
    }

    /// Consumes a tag byte.
    #[inline]
    pub fn take_tag(&mut self) -> Result<Tag, DecodeError> {
        let tag = self.peek_tag()?;
        self.take(1)?;
        Ok(tag)
    }

    /// Consumes one byte.
    #[inline]
    pub fn take_u8(&mut self) -> Result<u8, DecodeError> { Ok(self.take(1)?[0]) }

    /// Consumes a native-order `u16`.
    #[inline]
    pub fn take_u16(&mut self) -> Result<u16, DecodeError> {
        let bs = self.take(2)?;
        Ok(NativeEndian::read_u16(&bs))
    }

    /// Consumes a native-order `u32`.
    #[inline]
    pub fn take_u32(&mut self) -> Result<u32, DecodeError> {
        let bs = self.take(4)?;
        Ok(NativeEndian::read_u32(&bs))
    }

    /// Consumes a native-order `u64`.
    #[inline]
    pub fn take_u64(&mut self) -> Result<u64, DecodeError> {
        let bs = self.take(8)?;
        Ok(NativeEndian::read_u64(&bs))
    }

    #[inline]
    fn take_len(&mut self) -> Result<usize, DecodeError> { Ok(self.take_u16()? as usize) }

    /// Reads one complete value, recursing into lists and maps.
    ///
    /// A failure anywhere inside a list or map fails the whole read, and so does
    /// nesting deeper than [`MAX_DEPTH`].
    pub fn read_value(&mut self) -> Result<Value, DecodeError> { self.read_nested(0) }

    fn read_nested(&mut self, depth: usize) -> Result<Value, DecodeError> {
        Ok(match self.take_tag()? {
            Tag::Null => Value::Null,
            Tag::Bool => Value::Bool(self.take_u8()? != 0),
            Tag::Int32 => Value::Int32(self.take_u32()? as i32),
            Tag::UInt32 => Value::UInt32(self.take_u32()?),
            Tag::Int64 => Value::Int64(self.take_u64()? as i64),
            Tag::UInt64 => Value::UInt64(self.take_u64()?),
            Tag::Float => Value::Float(f64::from_bits(self.take_u64()?)),
            Tag::Bytes => {
                let len = self.take_len()?;
                Value::Bytes(self.take(len)?)
            }
            Tag::Text => {
                let len = self.take_len()?;
                let bs = self.take(len)?;
                Value::Text(String::from_utf8(bs.to_vec()).map_err(DecodeError::InvalidText)?)
            }
            Tag::List => {
                let len = self.take_len()?;
                let depth = deeper(depth)?;
                // every element needs at least its tag byte
                let mut out = Vec::with_capacity(len.min(self.remaining()));
                for _ in 0..len {
                    out.push(self.read_nested(depth)?);
                }
                Value::List(out)
            }
            Tag::Map => {
                let len = self.take_len()?;
                let depth = deeper(depth)?;
                let mut pairs = Vec::with_capacity(len.min(self.remaining() / 2));
                for _ in 0..len {
                    let key = self.read_nested(depth)?;
                    let val = self.read_nested(depth)?;
                    pairs.push((key, val));
                }
                // keys may arrive in any order
                Value::Map(ValueMap::from(pairs))
            }
        })
    }
}

#[inline]
fn deeper(depth: usize) -> Result<usize, DecodeError> {
    if depth < MAX_DEPTH {
        Ok(depth + 1)
    } else {
        Err(DecodeError::TooDeep(MAX_DEPTH))
    }
}
