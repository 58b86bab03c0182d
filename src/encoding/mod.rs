//! # ESCODE binary encoder and decoder
//!
//! Encode and decode functions for [`Value`]s, plus the order-preserving index
//! encoding of scalar tuples.
//!
//! # Example
//!
//! ```
//! use escode::prelude::*;
//!
//! let v = Value::from(vec![Value::from(1), Value::from("one")]);
//!
//! // encode into a fresh buffer
//! let enc = encode(&v).unwrap();
//!
//! // or append to one we already have
//! let out = &mut Vec::<u8>::new();
//! encode_into(&v, out).unwrap();
//!
//! // same bytes either way
//! assert_eq!(&enc[..], &out[..]);
//!
//! // Note: decoding returns a `Result`
//! let dec = decode(&enc).unwrap();
//! assert_eq!(dec, v);
//! ```

use crate::{
    buffer::Buffer,
    errors::{DecodeError, EncodeError},
    int::Narrowed,
    vecmap::ValueMap,
    Value,
};
use bytes::Bytes;
use log::{debug, trace};

pub mod constants;
use constants::*;

pub mod ser;
pub use ser::*;

pub mod de;
pub use de::*;

pub mod index;
pub use index::*;

/// Encodes a value into a new byte string.
///
/// Encoding fails if any byte string, text, list or map inside `t` is longer than
/// [`MAX_LEN`], or if the output buffer cannot grow. No partial output is returned.
///
/// # Example
///
/// ```
/// use escode::prelude::*;
///
/// let enc = encode(&Value::from(true)).unwrap();
/// assert_eq!(&enc[..], &[0x01, 0x01]);
/// ```
pub fn encode<T: Ser + ?Sized>(t: &T) -> Result<Bytes, EncodeError> {
    let mut buf = Buffer::new()?;
    match t.ser(&mut buf) {
        Ok(()) => {
            trace!("encoded {} bytes", buf.offset());
            Ok(buf.finalize())
        }
        Err(e) => {
            debug!("encoding failed: {}", e);
            Err(e)
        }
    }
}

/// Encodes a value, appending it to `out`.
///
/// On failure `out` may hold a partial encoding.
///
/// # Arguments
///
/// * `t` - The value to be encoded.
/// * `out` - Where the encoder output will be stored.
pub fn encode_into<T: Ser + ?Sized, S: Serializer>(t: &T, out: &mut S) -> Result<(), EncodeError> {
    t.ser(out)
}

/// Decodes exactly one value from `bs`.
///
/// # Arguments
///
/// * `bs` - A buffer holding one encoded value and nothing else.
///
/// # Example
///
/// ```
/// use escode::prelude::*;
///
/// assert_eq!(decode(&[0x00]).unwrap(), Value::Null);
///
/// // truncated
/// assert!(decode(&[0x02, 0x01]).is_err());
///
/// // trailing garbage
/// assert!(decode(&[0x00, 0x00]).is_err());
/// ```
pub fn decode(bs: &[u8]) -> Result<Value, DecodeError> {
    if bs.len() > MAX_INPUT {
        return Err(DecodeError::TooLong(bs.len()));
    }
    decode_bytes(Bytes::from(bs))
}

/// Decodes exactly one value from `bs` without copying.
///
/// Byte strings in the result share storage with `bs`.
pub fn decode_bytes(bs: Bytes) -> Result<Value, DecodeError> {
    if bs.len() > MAX_INPUT {
        return Err(DecodeError::TooLong(bs.len()));
    }

    let cursor = &mut Cursor::new(bs);
    let len = cursor.remaining();
    let v = cursor.read_value().map_err(|e| {
        debug!("decoding failed: {}", e);
        e
    })?;

    match cursor.remaining() {
        0 => {
            trace!("decoded {} bytes", len);
            Ok(v)
        }
        n => {
            debug!("{} bytes left after decoding", n);
            Err(DecodeError::TrailingBytes(n))
        }
    }
}
