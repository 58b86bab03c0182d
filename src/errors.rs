use failure::Fail;
use std::string::FromUtf8Error;

#[derive(Debug, Fail)]
/// An error encountered when a value cannot be encoded.
///
/// Encoding is all-or-nothing: when any of these is returned, no partially
/// written output escapes to the caller.
pub enum EncodeError {
    /// The value (or one of its elements) has a kind the target encoding does
    /// not support.
    #[fail(display = "object is not {} encodable", _0)]
    NotEncodable(&'static str),
    /// The integer does not fit any of the integer tags.
    #[fail(display = "error encoding integer")]
    Integer,
    /// A string, list, map or tuple whose length does not fit the 16-bit
    /// length field.
    #[fail(display = "{} too long to encode ({} > 65535)", what, len)]
    TooLong {
        /// Which kind of value was too long.
        what: &'static str,
        /// The length that was rejected.
        len: usize,
    },
    /// Host text could not be re-encoded as UTF-8.
    #[fail(display = "error encoding text: {}", _0)]
    Text(String),
    /// The output buffer could not grow.
    #[fail(display = "{}", _0)]
    Alloc(#[cause] AllocError),
}

#[derive(Debug, Clone, Copy, Fail)]
#[fail(display = "failed to grow encode buffer to {} bytes", requested)]
/// The allocator refused to grow an encode buffer.
pub struct AllocError {
    /// The capacity that was requested.
    pub requested: usize,
}

impl From<AllocError> for EncodeError {
    fn from(e: AllocError) -> Self { EncodeError::Alloc(e) }
}

#[derive(Debug, Fail)]
/// An error encountered when decoding fails.
pub enum DecodeError {
    /// The input ended before a tag, length or payload could be read.
    #[fail(
        display = "corrupted string: needed {} bytes, {} remaining",
        needed, remaining
    )]
    Corrupted {
        /// How many bytes the read required.
        needed: usize,
        /// How many bytes were left.
        remaining: usize,
    },
    /// The tag byte does not name any kind.
    #[fail(display = "corrupted string: unknown tag {}", _0)]
    UnknownTag(u8),
    /// A text payload was not valid UTF-8.
    #[fail(display = "corrupted string: {}", _0)]
    InvalidText(#[cause] FromUtf8Error),
    /// The input is longer than the decoder accepts.
    #[fail(display = "string too long to decode ({} bytes)", _0)]
    TooLong(usize),
    /// Bytes were left over after a complete value was read.
    #[fail(display = "corrupted string: {} trailing bytes", _0)]
    TrailingBytes(usize),
    /// Lists and maps were nested deeper than the decoder follows.
    #[fail(display = "corrupted string: nested deeper than {} levels", _0)]
    TooDeep(usize),
}

#[derive(Debug, Clone, Fail)]
#[fail(display = "conversion failed: expected {}, found {}", expected, found)]
/// An error encountered when a [`Value`](crate::Value) is not of the
/// requested kind.
pub struct ConversionError {
    /// The kind that was asked for.
    pub expected: &'static str,
    /// The kind that was found.
    pub found: &'static str,
}

impl ConversionError {
    /// Creates a new `ConversionError`.
    pub fn new(expected: &'static str, found: &'static str) -> Self {
        ConversionError { expected, found }
    }
}

#[derive(Debug, Fail)]
/// Any error produced by this crate.
pub enum Error {
    /// See [`EncodeError`].
    #[fail(display = "{}", _0)]
    Encode(#[cause] EncodeError),
    /// See [`DecodeError`].
    #[fail(display = "{}", _0)]
    Decode(#[cause] DecodeError),
    /// See [`ConversionError`].
    #[fail(display = "{}", _0)]
    Conversion(#[cause] ConversionError),
}

impl From<EncodeError> for Error {
    fn from(e: EncodeError) -> Self { Error::Encode(e) }
}

impl From<DecodeError> for Error {
    fn from(e: DecodeError) -> Self { Error::Decode(e) }
}

impl From<ConversionError> for Error {
    fn from(e: ConversionError) -> Self { Error::Conversion(e) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_keep_their_wording() {
        assert_eq!(EncodeError::Integer.to_string(), "error encoding integer");
        assert_eq!(
            EncodeError::NotEncodable("index").to_string(),
            "object is not index encodable"
        );
        assert_eq!(
            EncodeError::TooLong {
                what: "list",
                len: 65536
            }
            .to_string(),
            "list too long to encode (65536 > 65535)"
        );
        assert!(DecodeError::Corrupted {
            needed: 2,
            remaining: 1
        }
        .to_string()
        .starts_with("corrupted string"));
    }

    #[test]
    fn umbrella_keeps_cause() {
        let e: Error = DecodeError::UnknownTag(11).into();
        assert!(e.cause().is_some());
        match e {
            Error::Decode(DecodeError::UnknownTag(11)) => {}
            other => panic!("unexpected {:?}", other),
        }
    }
}
