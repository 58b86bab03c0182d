//! # ESCODE
//!
//! ESCODE is a compact binary encoding for a small set of value kinds, with two
//! independent formats:
//!
//! * the **value encoding**, tag-prefixed and self-describing, for storing and
//!   exchanging [`Value`]s, and
//! * the **index encoding**, untagged and byte-stuffed, for building composite keys
//!   whose unsigned byte-wise order matches the order of the tuples they encode.
//!
//! # Usage
//!
//! ```
//! use escode::prelude::*;
//!
//! let value = Value::from(vec![Value::from(1), Value::from("two"), Value::Null]);
//!
//! // encode
//! let encoded = encode(&value).unwrap();
//!
//! // and then immediately decode
//! let decoded = decode(&encoded).unwrap();
//!
//! assert_eq!(value, decoded);
//! ```
//!
//! Index keys are built from tuples of scalars:
//!
//! ```
//! use escode::prelude::*;
//!
//! let low = encode_index(&[Value::from("user"), Value::from(-5)], false).unwrap();
//! let high = encode_index(&[Value::from("user"), Value::from(3)], false).unwrap();
//!
//! assert!(low < high);
//! ```
//!
//! # Specification
//!
//! ## Value encoding
//!
//! Every value starts with one tag byte:
//!
//! | Tag  | Kind     | Payload                                   |
//! | ---  | ---      | ---                                       |
//! | `0`  | null     | none                                      |
//! | `1`  | boolean  | one byte, `0` or `1`                      |
//! | `2`  | int32    | 4 bytes                                   |
//! | `3`  | uint32   | 4 bytes                                   |
//! | `4`  | int64    | 8 bytes                                   |
//! | `5`  | uint64   | 8 bytes                                   |
//! | `6`  | float64  | 8 bytes                                   |
//! | `7`  | bytes    | 16-bit length, then the bytes             |
//! | `8`  | text     | 16-bit length, then UTF-8 bytes           |
//! | `9`  | list     | 16-bit count, then the elements           |
//! | `10` | map      | 16-bit count, then key, value, key, ...   |
//!
//! Fixed-width fields are written in the host's native byte order, so encoded
//! values are only meant to be read back on a machine of the same endianness.
//! Integers use the narrowest of `int32`, `uint32`, `int64`, `uint64` that holds
//! them (see [`int::narrow`]). Lengths above 65535 are rejected, never truncated.
//!
//! ## Index encoding
//!
//! Each element of the tuple is written as a `0x00` separator followed by its
//! payload, and the tuple is closed by a final `0x00` unless it is *open*.
//! Payloads carry no tag:
//!
//! * null writes nothing,
//! * booleans write `0` or `1`,
//! * integers in the `i32` range write 4 big-endian bytes with the sign bit
//!   flipped, other integers write 8 such bytes,
//! * floats write their 8 native-order bytes,
//! * bytes and text write their raw bytes, stuffed.
//!
//! Stuffing turns `0xff` into `0xff 0xff` and any other byte `b` into `b + 1`,
//! so a string payload never holds a `0x00`. The other payloads are fixed-width
//! at their position in the tuple.

#![warn(
    missing_docs,
    deprecated_in_future,
    unsafe_code,
    unused_labels,
    keyword_idents,
    missing_copy_implementations,
    missing_debug_implementations,
    macro_use_extern_crate,
    unreachable_pub,
    trivial_casts,
    unused_extern_crates,
    unused_import_braces
)]
#![allow(clippy::cast_lossless)]

pub mod buffer;
pub mod encoding;
pub mod errors;
pub mod int;
pub mod prelude;
pub mod rep;
#[macro_use]
mod util;
pub mod vecmap;

use bytes::Bytes;
use encoding::constants::Tag;
use errors::ConversionError;
use int::{narrow, Narrowed};
use std::{
    cmp::Ordering,
    collections::{BTreeMap, HashMap},
    convert::TryFrom,
    hash::BuildHasher,
};
use vecmap::ValueMap;

pub use encoding::{decode, encode, encode_index, prefix_range};

#[derive(Clone, Debug)]
/// [`Value`] and its variants.
///
/// Integers of different widths compare by numeric value, so
/// `Value::Int64(5) == Value::Int32(5)`. Floats compare by IEEE 754 total order,
/// which makes a NaN equal to itself.
///
/// # Example
///
/// ```
/// use escode::prelude::*;
///
/// let b = Value::Bool(true);
///
/// let val = match b {
///     Value::Bool(b) => b,
///     _ => panic!(),
/// };
///
/// assert!(val);
/// assert_eq!(Value::Int64(5), Value::Int32(5));
/// ```
pub enum Value {
    /// Absence of a value.
    Null,
    /// Boolean.
    Bool(bool),
    /// Signed 32-bit integer.
    Int32(i32),
    /// Unsigned 32-bit integer.
    UInt32(u32),
    /// Signed 64-bit integer.
    Int64(i64),
    /// Unsigned 64-bit integer.
    UInt64(u64),
    /// Double-precision float.
    Float(f64),
    /// Byte string, at most 65535 bytes when encoded.
    Bytes(Bytes),
    /// Text, at most 65535 UTF-8 bytes when encoded.
    Text(String),
    /// List, at most 65535 elements when encoded.
    List(Vec<Value>),
    /// Map, at most 65535 entries when encoded.
    Map(ValueMap),
}

impl Value {
    /// Wraps anything convertible to [`Bytes`] as a byte string.
    ///
    /// # Example
    ///
    /// ```
    /// use escode::prelude::*;
    ///
    /// let bs = Value::bytes(vec![0u8, 1, 2]);
    ///
    /// assert_eq!(&bs.to_bytes().unwrap()[..], &[0, 1, 2]);
    /// ```
    pub fn bytes<B: Into<Bytes>>(b: B) -> Value { Value::Bytes(b.into()) }

    /// Converts a bytestring literal to a [`Value`].
    pub fn from_static(bytes: &'static [u8]) -> Value { Value::Bytes(Bytes::from_static(bytes)) }

    /// The numeric value of any integer variant.
    pub fn as_int(&self) -> Option<i128> {
        match self {
            Value::Int32(i) => Some(*i as i128),
            Value::UInt32(u) => Some(*u as i128),
            Value::Int64(i) => Some(*i as i128),
            Value::UInt64(u) => Some(*u as i128),
            _ => None,
        }
    }

    /// The tag this value is written with. Integers report their narrowed tag.
    ///
    /// # Example
    ///
    /// ```
    /// use escode::{encoding::constants::Tag, prelude::*};
    ///
    /// assert_eq!(Value::Int64(1).tag(), Tag::Int32);
    /// assert_eq!(Value::UInt64(1 << 32).tag(), Tag::Int64);
    /// ```
    pub fn tag(&self) -> Tag {
        match self {
            Value::Null => Tag::Null,
            Value::Bool(_) => Tag::Bool,
            Value::Int32(_) | Value::UInt32(_) | Value::Int64(_) | Value::UInt64(_) => self
                .as_int()
                .and_then(|i| narrow(i).ok())
                .map_or(Tag::UInt64, Narrowed::tag),
            Value::Float(_) => Tag::Float,
            Value::Bytes(_) => Tag::Bytes,
            Value::Text(_) => Tag::Text,
            Value::List(_) => Tag::List,
            Value::Map(_) => Tag::Map,
        }
    }

    /// A short name for the kind of this value, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int32(_) | Value::UInt32(_) | Value::Int64(_) | Value::UInt64(_) => "integer",
            Value::Float(_) => "float",
            Value::Bytes(_) => "bytes",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    fn rank(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int32(_) | Value::UInt32(_) | Value::Int64(_) | Value::UInt64(_) => 2,
            Value::Float(_) => 3,
            Value::Bytes(_) => 4,
            Value::Text(_) => 5,
            Value::List(_) => 6,
            Value::Map(_) => 7,
        }
    }

    /// Indicates whether a value is [`Value::Null`].
    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            _ => false,
        }
    }

    /// Tries to convert a value to a [`bool`].
    pub fn to_bool(&self) -> Result<bool, ConversionError> {
        match self {
            Value::Bool(b) => Ok(*b),
            _ => Err(ConversionError::new("bool", self.kind())),
        }
    }

    /// Tries to convert a value to an [`i64`].
    ///
    /// # Example
    ///
    /// ```
    /// use escode::prelude::*;
    ///
    /// assert_eq!(Value::UInt32(7).to_i64().unwrap(), 7);
    /// assert!(Value::UInt64(u64::max_value()).to_i64().is_err());
    /// ```
    pub fn to_i64(&self) -> Result<i64, ConversionError> {
        self.as_int()
            .and_then(|i| i64::try_from(i).ok())
            .ok_or_else(|| ConversionError::new("i64", self.kind()))
    }

    /// Tries to convert a value to a [`u64`].
    pub fn to_u64(&self) -> Result<u64, ConversionError> {
        self.as_int()
            .and_then(|i| u64::try_from(i).ok())
            .ok_or_else(|| ConversionError::new("u64", self.kind()))
    }

    /// Tries to convert a value to an [`f64`].
    pub fn to_f64(&self) -> Result<f64, ConversionError> {
        match self {
            Value::Float(f) => Ok(*f),
            _ => Err(ConversionError::new("float", self.kind())),
        }
    }

    /// Tries to convert a value to [`Bytes`].
    pub fn to_bytes(&self) -> Result<&Bytes, ConversionError> {
        match self {
            Value::Bytes(b) => Ok(b),
            _ => Err(ConversionError::new("bytes", self.kind())),
        }
    }

    /// Tries to convert a value to a [`str`].
    pub fn to_str(&self) -> Result<&str, ConversionError> {
        match self {
            Value::Text(s) => Ok(s),
            _ => Err(ConversionError::new("text", self.kind())),
        }
    }

    /// Tries to view a value as a list.
    pub fn to_list(&self) -> Result<&Vec<Value>, ConversionError> {
        match self {
            Value::List(l) => Ok(l),
            _ => Err(ConversionError::new("list", self.kind())),
        }
    }

    /// Consumes a value, converting it into a vector of values.
    pub fn into_list(self) -> Result<Vec<Value>, ConversionError> {
        match self {
            Value::List(l) => Ok(l),
            other => Err(ConversionError::new("list", other.kind())),
        }
    }

    /// Tries to view a value as a [`ValueMap`].
    pub fn to_map(&self) -> Result<&ValueMap, ConversionError> {
        match self {
            Value::Map(m) => Ok(m),
            _ => Err(ConversionError::new("map", self.kind())),
        }
    }

    /// Consumes a value, converting it into a [`ValueMap`].
    pub fn into_map(self) -> Result<ValueMap, ConversionError> {
        match self {
            Value::Map(m) => Ok(m),
            other => Err(ConversionError::new("map", other.kind())),
        }
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Value) -> Ordering {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            (Value::Bytes(a), Value::Bytes(b)) => a.cmp(b),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::List(a), Value::List(b)) => a.cmp(b),
            (Value::Map(a), Value::Map(b)) => a.cmp(b),
            _ => match (self.as_int(), other.as_int()) {
                (Some(a), Some(b)) => a.cmp(&b),
                _ => self.rank().cmp(&other.rank()),
            },
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Value) -> Option<Ordering> { Some(self.cmp(other)) }
}

impl PartialEq for Value {
    fn eq(&self, other: &Value) -> bool { self.cmp(other) == Ordering::Equal }
}

impl Eq for Value {}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "NULL"),
            Value::Bool(b) => write!(f, "{}", if *b { "TRUE" } else { "FALSE" }),
            Value::Int32(i) => write!(f, "{}", i),
            Value::UInt32(u) => write!(f, "{}", u),
            Value::Int64(i) => write!(f, "{}", i),
            Value::UInt64(u) => write!(f, "{}", u),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Bytes(b) => write!(f, "{}", util::fmt_hex(b)),
            Value::Text(s) => write!(f, "{:?}", s),
            Value::List(l) => {
                write!(f, "[")?;
                for (i, v) in l.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", v)?;
                }
                write!(f, "]")
            }
            Value::Map(m) => {
                write!(f, "{{")?;
                for (i, (k, v)) in m.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Value { Value::Null }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value { Value::Text(s.to_owned()) }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Value { Value::List(v.into_iter().map(T::into).collect()) }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(o: Option<T>) -> Value { o.map_or(Value::Null, T::into) }
}

impl<K: Into<Value>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(m: BTreeMap<K, V>) -> Value {
        Value::Map(m.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<Value>, V: Into<Value>, S: BuildHasher> From<HashMap<K, V, S>> for Value {
    fn from(m: HashMap<K, V, S>) -> Value {
        Value::Map(m.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

from_fn!(Value, bool, Value::Bool);
from_fn!(Value, i32, Value::Int32);
from_fn!(Value, u32, Value::UInt32);
from_fn!(Value, i64, Value::Int64);
from_fn!(Value, u64, Value::UInt64);
from_fn!(Value, f64, Value::Float);
from_fn!(Value, Bytes, Value::Bytes);
from_fn!(Value, String, Value::Text);
from_fn!(Value, ValueMap, Value::Map);

from_as!(Value, i8, i32);
from_as!(Value, i16, i32);
from_as!(Value, u8, u32);
from_as!(Value, u16, u32);
from_as!(Value, f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivial_tests() {
        assert!(Value::Null.is_null());

        assert!(Value::from(5).to_i64().is_ok());

        assert!(Value::from(true).to_bool().unwrap());

        assert_eq!(
            Value::from_static(b"word").to_bytes().unwrap(),
            &Bytes::from_static(b"word")
        );

        assert!(Value::from("word").to_bytes().is_err());
    }

    #[test]
    fn integers_compare_by_value() {
        assert_eq!(Value::UInt64(3), Value::Int32(3));
        assert!(Value::Int32(-1) < Value::UInt32(0));
        assert!(Value::UInt64(u64::max_value()) > Value::Int64(i64::max_value()));
        assert!(Value::Int32(0) != Value::Float(0.0));
    }

    #[test]
    fn floats_total_order() {
        assert_eq!(Value::Float(std::f64::NAN), Value::Float(std::f64::NAN));
        assert!(Value::Float(-0.0) < Value::Float(0.0));
        assert!(Value::Float(-1.0) < Value::Float(0.5));
    }

    #[test]
    fn kinds_order() {
        let ordered = vec![
            Value::Null,
            Value::Bool(false),
            Value::Int64(i64::min_value()),
            Value::Float(-1e300),
            Value::from_static(b""),
            Value::from(""),
            Value::List(vec![]),
            Value::Map(ValueMap::new()),
        ];
        for pair in ordered.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn from_containers() {
        let v: Vec<Option<u8>> = vec![Some(1), None];
        assert_eq!(
            Value::from(v),
            Value::List(vec![Value::UInt32(1), Value::Null])
        );

        let mut hm = HashMap::new();
        hm.insert("k", 1.5f32);
        let m = Value::from(hm).into_map().unwrap();
        assert_eq!(m.get(&Value::from("k")), Some(&Value::Float(1.5)));
    }

    #[test]
    fn display() {
        let mut m = ValueMap::new();
        m.insert(Value::from("a"), Value::from_static(&[0xde, 0xad]));
        let v = Value::from(vec![
            Value::Null,
            Value::from(true),
            Value::from(-3),
            Value::from(1.5),
            Value::Map(m),
        ]);
        assert_eq!(
            v.to_string(),
            "[NULL, TRUE, -3, 1.5, {\"a\": b\"dead\"}]"
        );
    }
}
