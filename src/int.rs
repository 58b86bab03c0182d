//! Integer width selection.
//!
//! The value encoding stores every integer under the smallest tag that holds
//! it exactly, trying `Int32`, then `UInt32`, then `Int64`, then `UInt64`.
//! The index encoding uses a 4-byte form for the `i32` range and an 8-byte
//! form for the rest of the `i64` range.

use crate::{encoding::constants::Tag, errors::EncodeError};
use smallvec::SmallVec;
use std::convert::TryFrom;

/// An integer narrowed to its wire width.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Narrowed {
    /// Fits `i32`.
    I32(i32),
    /// Fits `u32` but not `i32`.
    U32(u32),
    /// Fits `i64` but neither 32-bit type.
    I64(i64),
    /// Only fits `u64`.
    U64(u64),
}

use Narrowed::*;

impl Narrowed {
    /// The tag this width is written with.
    pub fn tag(self) -> Tag {
        match self {
            I32(_) => Tag::Int32,
            U32(_) => Tag::UInt32,
            I64(_) => Tag::Int64,
            U64(_) => Tag::UInt64,
        }
    }
}

/// Picks the narrowest tag that holds `i` exactly.
///
/// # Example
///
/// ```
/// use escode::int::{narrow, Narrowed};
///
/// assert_eq!(narrow(2_147_483_647).unwrap(), Narrowed::I32(2_147_483_647));
/// assert_eq!(narrow(2_147_483_648).unwrap(), Narrowed::U32(2_147_483_648));
/// assert!(narrow(-(1 << 63) - 1).is_err());
/// ```
pub fn narrow(i: i128) -> Result<Narrowed, EncodeError> {
    if let Ok(n) = i32::try_from(i) {
        Ok(I32(n))
    } else if let Ok(n) = u32::try_from(i) {
        Ok(U32(n))
    } else if let Ok(n) = i64::try_from(i) {
        Ok(I64(n))
    } else if let Ok(n) = u64::try_from(i) {
        Ok(U64(n))
    } else {
        Err(EncodeError::Integer)
    }
}

const FLIP_32: u32 = 0x8000_0000;
const FLIP_64: u64 = 0x8000_0000_0000_0000;

/// The sign-flipped big-endian index form of `i`, written unstuffed.
///
/// Flipping the sign bit moves negative numbers below non-negative ones under
/// unsigned comparison while keeping order within each half.
pub fn index_int(i: i128) -> Result<SmallVec<[u8; 8]>, EncodeError> {
    if let Ok(n) = i32::try_from(i) {
        Ok(SmallVec::from_slice(&((n as u32) ^ FLIP_32).to_be_bytes()))
    } else if let Ok(n) = i64::try_from(i) {
        Ok(SmallVec::from_slice(&((n as u64) ^ FLIP_64).to_be_bytes()))
    } else {
        Err(EncodeError::Integer)
    }
}
