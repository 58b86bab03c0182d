pub use crate::{
    encoding::{decode, decode_bytes, encode, encode_index, encode_into, prefix_range},
    errors::{ConversionError, DecodeError, EncodeError, Error},
    vecmap::{ValueMap, VecMap},
    Value,
};
pub use bytes::Bytes;
pub use num_bigint::BigInt;
pub use std::convert::TryFrom;
