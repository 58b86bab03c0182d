use super::*;
use crate::{buffer::Buffer, int::index_int};

/// A [`Serializer`] that byte-stuffs everything written through it.
///
/// `0xff` becomes `0xff 0xff`, any other byte `b` becomes `b + 1`. The stuffed
/// output never contains `0x00`.
#[derive(Debug)]
pub struct Stuffed<'a, S> {
    out: &'a mut S,
}

impl<'a, S: Serializer> Stuffed<'a, S> {
    /// Wraps `out`.
    pub fn new(out: &'a mut S) -> Self { Stuffed { out } }
}

impl<'a, S: Serializer> Serializer for Stuffed<'a, S> {
    type Out = ();

    #[inline]
    fn put_u8(&mut self, u: u8) -> Result<(), EncodeError> {
        if u == INDEX_ESCAPE {
            self.out.put_slice(&[INDEX_ESCAPE, INDEX_ESCAPE])
        } else {
            self.out.put_u8(u + 1)
        }
    }

    fn put_slice(&mut self, slice: &[u8]) -> Result<(), EncodeError> {
        for &u in slice {
            self.put_u8(u)?;
        }
        Ok(())
    }

    fn finalize(self) {}
}

/// Writes the untagged payload of one tuple element.
///
/// Only byte strings and text are stuffed. Booleans, integers and floats are
/// fixed-width at their position, so their raw bytes order correctly as they are.
pub fn put_index_element<S: Serializer>(out: &mut S, v: &Value) -> Result<(), EncodeError> {
    match v {
        Value::Null => Ok(()),
        Value::Bool(b) => out.put_u8(*b as u8),
        Value::Int32(_) | Value::UInt32(_) | Value::Int64(_) | Value::UInt64(_) => {
            let i = v.as_int().ok_or(EncodeError::Integer)?;
            out.put_slice(&index_int(i)?)
        }
        // TODO: apply the IEEE 754 sign/exponent flip once float columns need ordering
        Value::Float(f) => out.put_slice(&f.to_ne_bytes()),
        Value::Bytes(bs) => put_index_str(out, "bytes", bs),
        Value::Text(s) => put_index_str(out, "text", s.as_bytes()),
        Value::List(_) | Value::Map(_) => Err(EncodeError::NotEncodable("index")),
    }
}

fn put_index_str<S: Serializer>(
    out: &mut S,
    what: &'static str,
    bs: &[u8],
) -> Result<(), EncodeError> {
    if bs.len() > MAX_LEN {
        return Err(EncodeError::TooLong { what, len: bs.len() });
    }
    Stuffed::new(out).put_slice(bs)
}

/// Writes a whole tuple: a separator before each element, and a terminator
/// unless `open`.
pub fn put_index<S: Serializer>(out: &mut S, tuple: &[Value], open: bool) -> Result<(), EncodeError> {
    if tuple.len() > MAX_LEN {
        return Err(EncodeError::TooLong {
            what: "tuple",
            len: tuple.len(),
        });
    }

    for v in tuple {
        out.put_u8(INDEX_SEP)?;
        put_index_element(out, v)?;
    }

    if !open {
        out.put_u8(INDEX_SEP)?;
    }
    Ok(())
}

/// Encodes a tuple of scalars into a key whose unsigned byte-wise order follows
/// the order of the tuples.
///
/// With `open` set the trailing terminator is left off, which makes the result a
/// strict prefix of the closed encoding of any longer tuple starting with the same
/// elements.
///
/// # Arguments
///
/// * `tuple` - The elements; lists and maps are rejected.
/// * `open` - Whether to leave the encoding unterminated.
///
/// # Example
///
/// ```
/// use escode::prelude::*;
///
/// let key = encode_index(&[Value::from(true), Value::from_static(b"\x00\xff")], false).unwrap();
///
/// assert_eq!(&key[..], &[0x00, 0x01, 0x00, 0x01, 0xff, 0xff, 0x00]);
/// ```
pub fn encode_index(tuple: &[Value], open: bool) -> Result<Bytes, EncodeError> {
    let mut buf = Buffer::new()?;
    match put_index(&mut buf, tuple, open) {
        Ok(()) => {
            trace!("index-encoded {} elements into {} bytes", tuple.len(), buf.offset());
            Ok(buf.finalize())
        }
        Err(e) => {
            debug!("index encoding failed: {}", e);
            Err(e)
        }
    }
}

/// The half-open range `[start, end)` holding exactly the closed encodings of
/// tuples that begin with `prefix`.
///
/// # Example
///
/// ```
/// use escode::prelude::*;
///
/// let (start, end) = prefix_range(&[Value::from("user")]).unwrap();
/// let key = encode_index(&[Value::from("user"), Value::from(42)], false).unwrap();
///
/// assert!(start <= key && key < end);
/// ```
pub fn prefix_range(prefix: &[Value]) -> Result<(Bytes, Bytes), EncodeError> {
    let mut buf = Buffer::new()?;
    put_index(&mut buf, prefix, true)?;
    let start = buf.as_slice().to_vec();
    buf.put_u8(INDEX_RANGE_END)?;
    Ok((Bytes::from(start), buf.finalize()))
}
