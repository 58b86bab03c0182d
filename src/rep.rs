//! Conversions between host types and [`Value`] that can fail.
//!
//! Integers wider than 64 bits and OS strings may not be representable; those
//! conversions report the same [`EncodeError`]s the encoder would. The reverse
//! direction reports a [`ConversionError`] naming the kind that was found.
//!
//! # Example
//!
//! ```
//! use escode::prelude::*;
//!
//! let ok = Value::try_from(1i128 << 40).unwrap();
//! assert_eq!(ok, Value::Int64(1 << 40));
//!
//! assert!(Value::try_from(1u128 << 64).is_err());
//!
//! let back = u64::try_from(ok).unwrap();
//! assert_eq!(back, 1 << 40);
//! ```

use crate::{
    errors::{ConversionError, EncodeError},
    int::{narrow, Narrowed},
    Value,
};
use bytes::Bytes;
use num_bigint::BigInt;
use num_traits::ToPrimitive;
use std::{
    convert::TryFrom,
    ffi::{OsStr, OsString},
};

impl From<Narrowed> for Value {
    fn from(n: Narrowed) -> Value {
        match n {
            Narrowed::I32(i) => Value::Int32(i),
            Narrowed::U32(u) => Value::UInt32(u),
            Narrowed::I64(i) => Value::Int64(i),
            Narrowed::U64(u) => Value::UInt64(u),
        }
    }
}

impl TryFrom<i128> for Value {
    type Error = EncodeError;

    fn try_from(i: i128) -> Result<Value, EncodeError> { narrow(i).map(Value::from) }
}

impl TryFrom<u128> for Value {
    type Error = EncodeError;

    fn try_from(u: u128) -> Result<Value, EncodeError> {
        let i = i128::try_from(u).map_err(|_| EncodeError::Integer)?;
        Value::try_from(i)
    }
}

impl TryFrom<&BigInt> for Value {
    type Error = EncodeError;

    fn try_from(i: &BigInt) -> Result<Value, EncodeError> {
        i.to_i128()
            .ok_or(EncodeError::Integer)
            .and_then(Value::try_from)
    }
}

impl TryFrom<BigInt> for Value {
    type Error = EncodeError;

    fn try_from(i: BigInt) -> Result<Value, EncodeError> { Value::try_from(&i) }
}

impl TryFrom<&OsStr> for Value {
    type Error = EncodeError;

    fn try_from(s: &OsStr) -> Result<Value, EncodeError> {
        s.to_str()
            .map(Value::from)
            .ok_or_else(|| EncodeError::Text(s.to_string_lossy().into_owned()))
    }
}

impl TryFrom<OsString> for Value {
    type Error = EncodeError;

    fn try_from(s: OsString) -> Result<Value, EncodeError> {
        s.into_string()
            .map(Value::Text)
            .map_err(|s| EncodeError::Text(s.to_string_lossy().into_owned()))
    }
}

macro_rules! try_from_value {
    ($typ:ty, $conv:ident) => {
        impl TryFrom<Value> for $typ {
            type Error = ConversionError;

            fn try_from(v: Value) -> Result<$typ, ConversionError> { v.$conv() }
        }
    };
}

try_from_value!(bool, to_bool);
try_from_value!(i64, to_i64);
try_from_value!(u64, to_u64);
try_from_value!(f64, to_f64);
try_from_value!(Vec<Value>, into_list);
try_from_value!(crate::vecmap::ValueMap, into_map);

impl TryFrom<Value> for BigInt {
    type Error = ConversionError;

    fn try_from(v: Value) -> Result<BigInt, ConversionError> {
        v.as_int()
            .map(BigInt::from)
            .ok_or_else(|| ConversionError::new("integer", v.kind()))
    }
}

impl TryFrom<Value> for Bytes {
    type Error = ConversionError;

    fn try_from(v: Value) -> Result<Bytes, ConversionError> {
        match v {
            Value::Bytes(b) => Ok(b),
            other => Err(ConversionError::new("bytes", other.kind())),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = ConversionError;

    fn try_from(v: Value) -> Result<String, ConversionError> {
        match v {
            Value::Text(s) => Ok(s),
            other => Err(ConversionError::new("text", other.kind())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_integers_narrow() {
        assert_eq!(Value::try_from(-1i128).unwrap(), Value::Int32(-1));
        assert_eq!(
            Value::try_from(u64::max_value() as u128).unwrap(),
            Value::UInt64(u64::max_value())
        );
        match Value::try_from(u128::max_value()) {
            Err(EncodeError::Integer) => {}
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn bigints() {
        let big = BigInt::from(u64::max_value());
        assert_eq!(Value::try_from(&big).unwrap(), Value::UInt64(u64::max_value()));

        let too_big = big + 1;
        assert!(Value::try_from(too_big).is_err());

        let too_small = BigInt::from(i64::min_value()) - 1;
        assert!(Value::try_from(too_small).is_err());

        let back = BigInt::try_from(Value::Int32(-9)).unwrap();
        assert_eq!(back, BigInt::from(-9));
    }

    #[cfg(unix)]
    #[test]
    fn os_strings() {
        use std::os::unix::ffi::OsStrExt;

        let good = OsStr::new("path/to/file");
        assert_eq!(Value::try_from(good).unwrap(), Value::from("path/to/file"));

        let bad = OsStr::from_bytes(&[0x66, 0x6f, 0x80]);
        match Value::try_from(bad) {
            Err(EncodeError::Text(_)) => {}
            other => panic!("unexpected {:?}", other),
        }
        assert!(Value::try_from(bad.to_os_string()).is_err());
    }

    #[test]
    fn back_conversions() {
        assert_eq!(String::try_from(Value::from("x")).unwrap(), "x");
        assert!(String::try_from(Value::Null).is_err());
        assert!(bool::try_from(Value::Int32(1)).is_err());
        assert_eq!(f64::try_from(Value::Float(2.5)).unwrap(), 2.5);
        assert_eq!(
            Bytes::try_from(Value::from_static(b"ab")).unwrap(),
            Bytes::from_static(b"ab")
        );
    }
}
