use crate::errors::DecodeError;

/// Tag bytes. These are part of the wire format and must never be renumbered.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Tag {
    /// No payload.
    Null = 0,
    /// One byte, zero or one.
    Bool = 1,
    /// Four bytes, signed.
    Int32 = 2,
    /// Four bytes, unsigned.
    UInt32 = 3,
    /// Eight bytes, signed.
    Int64 = 4,
    /// Eight bytes, unsigned.
    UInt64 = 5,
    /// Eight bytes, IEEE 754 double.
    Float = 6,
    /// 16-bit length, then raw bytes.
    Bytes = 7,
    /// 16-bit length, then UTF-8 bytes.
    Text = 8,
    /// 16-bit count, then that many values.
    List = 9,
    /// 16-bit count, then that many key/value pairs.
    Map = 10,
}

impl Tag {
    /// Reads a tag byte, rejecting anything outside `0..=10`.
    pub fn from_u8(byte: u8) -> Result<Tag, DecodeError> {
        use Tag::*;
        Ok(match byte {
            0 => Null,
            1 => Bool,
            2 => Int32,
            3 => UInt32,
            4 => Int64,
            5 => UInt64,
            6 => Float,
            7 => Bytes,
            8 => Text,
            9 => List,
            10 => Map,
            unknown => return Err(DecodeError::UnknownTag(unknown)),
        })
    }

    /// Fixed payload width in bytes, or `None` for length-prefixed kinds.
    pub fn width(self) -> Option<usize> {
        use Tag::*;
        match self {
            Null => Some(0),
            Bool => Some(1),
            Int32 | UInt32 => Some(4),
            Int64 | UInt64 | Float => Some(8),
            Bytes | Text | List | Map => None,
        }
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> u8 { tag as u8 }
}

/// Largest length a 16-bit length field holds.
pub const MAX_LEN: usize = u16::max_value() as usize;

/// Largest input the decoder accepts.
pub const MAX_INPUT: usize = u32::max_value() as usize;

/// Deepest list or map nesting the decoder follows.
pub const MAX_DEPTH: usize = 512;

/// Index separator and terminator, 0x00
pub const INDEX_SEP: u8 = 0x00;
/// Index escape byte, 0xff
pub const INDEX_ESCAPE: u8 = 0xFF;
/// Byte following the open encoding in a prefix range's exclusive end, 0x01
pub const INDEX_RANGE_END: u8 = 0x01;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_bytes() {
        for byte in 0..=10u8 {
            assert_eq!(u8::from(Tag::from_u8(byte).unwrap()), byte);
        }
    }

    #[test]
    fn unknown_tags_rejected() {
        for byte in 11..=255u8 {
            match Tag::from_u8(byte) {
                Err(DecodeError::UnknownTag(b)) => assert_eq!(b, byte),
                other => panic!("tag {} gave {:?}", byte, other),
            }
        }
    }
}
