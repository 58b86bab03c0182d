use super::*;
use crate::{buffer::Buffer, int::narrow, vecmap::VecMap};

/// A byte sink the encoders write into.
pub trait Serializer {
    /// The type of the output value.
    type Out;
    /// Add a byte to the output value.
    fn put_u8(&mut self, u: u8) -> Result<(), EncodeError>;
    /// Add a slice to the output value.
    fn put_slice(&mut self, slice: &[u8]) -> Result<(), EncodeError>;
    /// Return the output value.
    fn finalize(self) -> Self::Out;
}

impl Serializer for Buffer {
    type Out = Bytes;

    fn put_u8(&mut self, u: u8) -> Result<(), EncodeError> { self.push(u).map_err(EncodeError::from) }

    fn put_slice(&mut self, slice: &[u8]) -> Result<(), EncodeError> {
        self.append(slice).map_err(EncodeError::from)
    }

    fn finalize(self) -> Bytes { Buffer::finalize(self) }
}

impl Serializer for Vec<u8> {
    type Out = Self;

    fn put_u8(&mut self, u: u8) -> Result<(), EncodeError> {
        self.push(u);
        Ok(())
    }

    fn put_slice(&mut self, slice: &[u8]) -> Result<(), EncodeError> {
        self.extend_from_slice(slice);
        Ok(())
    }

    fn finalize(self) -> Self::Out { self }
}

/// Value-encoding methods for every [`Serializer`].
pub trait SerializerExt: Serializer {
    /// Add a tag byte.
    fn put_tag(&mut self, tag: Tag) -> Result<(), EncodeError>;
    /// Add [`Value::Null`].
    fn put_null(&mut self) -> Result<(), EncodeError>;
    /// Add a [`bool`].
    fn put_bool(&mut self, b: bool) -> Result<(), EncodeError>;
    /// Add an [`i32`] under the `Int32` tag.
    fn put_i32(&mut self, i: i32) -> Result<(), EncodeError>;
    /// Add a [`u32`] under the `UInt32` tag.
    fn put_u32(&mut self, u: u32) -> Result<(), EncodeError>;
    /// Add an [`i64`] under the `Int64` tag.
    fn put_i64(&mut self, i: i64) -> Result<(), EncodeError>;
    /// Add a [`u64`] under the `UInt64` tag.
    fn put_u64(&mut self, u: u64) -> Result<(), EncodeError>;
    /// Add an integer under the narrowest tag that holds it.
    fn put_int(&mut self, i: i128) -> Result<(), EncodeError>;
    /// Add an [`f64`].
    fn put_f64(&mut self, f: f64) -> Result<(), EncodeError>;
    /// Add a 16-bit length field, rejecting lengths above [`MAX_LEN`].
    ///
    /// # Arguments
    ///
    /// * `what` - Names the value in the error message.
    /// * `len` - The length to write.
    fn put_len(&mut self, what: &'static str, len: usize) -> Result<(), EncodeError>;
    /// Add a byte string.
    fn put_bytes(&mut self, b: &[u8]) -> Result<(), EncodeError>;
    /// Add text.
    fn put_text(&mut self, s: &str) -> Result<(), EncodeError>;
    /// Add a list.
    fn put_list<T: Ser>(&mut self, v: &[T]) -> Result<(), EncodeError>;
    /// Add a map, entries in key order.
    fn put_map<K: Ser + Ord, V: Ser>(&mut self, m: &VecMap<K, V>) -> Result<(), EncodeError>;
}

impl<S: Serializer> SerializerExt for S {
    #[inline]
    fn put_tag(&mut self, tag: Tag) -> Result<(), EncodeError> { self.put_u8(tag.into()) }

    fn put_null(&mut self) -> Result<(), EncodeError> { self.put_tag(Tag::Null) }

    fn put_bool(&mut self, b: bool) -> Result<(), EncodeError> {
        self.put_tag(Tag::Bool)?;
        self.put_u8(b as u8)
    }

    fn put_i32(&mut self, i: i32) -> Result<(), EncodeError> {
        self.put_tag(Tag::Int32)?;
        self.put_slice(&i.to_ne_bytes())
    }

    fn put_u32(&mut self, u: u32) -> Result<(), EncodeError> {
        self.put_tag(Tag::UInt32)?;
        self.put_slice(&u.to_ne_bytes())
    }

    fn put_i64(&mut self, i: i64) -> Result<(), EncodeError> {
        self.put_tag(Tag::Int64)?;
        self.put_slice(&i.to_ne_bytes())
    }

    fn put_u64(&mut self, u: u64) -> Result<(), EncodeError> {
        self.put_tag(Tag::UInt64)?;
        self.put_slice(&u.to_ne_bytes())
    }

    fn put_int(&mut self, i: i128) -> Result<(), EncodeError> {
        match narrow(i)? {
            Narrowed::I32(n) => self.put_i32(n),
            Narrowed::U32(n) => self.put_u32(n),
            Narrowed::I64(n) => self.put_i64(n),
            Narrowed::U64(n) => self.put_u64(n),
        }
    }

    fn put_f64(&mut self, f: f64) -> Result<(), EncodeError> {
        self.put_tag(Tag::Float)?;
        self.put_slice(&f.to_bits().to_ne_bytes())
    }

    #[inline]
    fn put_len(&mut self, what: &'static str, len: usize) -> Result<(), EncodeError> {
        if len > MAX_LEN {
            return Err(EncodeError::TooLong { what, len });
        }
        self.put_slice(&(len as u16).to_ne_bytes())
    }

    fn put_bytes(&mut self, b: &[u8]) -> Result<(), EncodeError> {
        self.put_tag(Tag::Bytes)?;
        self.put_len("bytes", b.len())?;
        self.put_slice(b)
    }

    fn put_text(&mut self, s: &str) -> Result<(), EncodeError> {
        self.put_tag(Tag::Text)?;
        self.put_len("text", s.len())?;
        self.put_slice(s.as_bytes())
    }

    fn put_list<T: Ser>(&mut self, v: &[T]) -> Result<(), EncodeError> {
        self.put_tag(Tag::List)?;
        self.put_len("list", v.len())?;
        for t in v {
            t.ser(self)?;
        }
        Ok(())
    }

    fn put_map<K: Ser + Ord, V: Ser>(&mut self, m: &VecMap<K, V>) -> Result<(), EncodeError> {
        self.put_tag(Tag::Map)?;
        self.put_len("map", m.len())?;
        for (k, v) in m.iter() {
            k.ser(self)?;
            v.ser(self)?;
        }
        Ok(())
    }
}

/// A value that can be serialized.
pub trait Ser {
    /// Writes the value encoding of `self` into `s`.
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), EncodeError>;
}

impl<'a, T: Ser + ?Sized> Ser for &'a T {
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), EncodeError> { (**self).ser(s) }
}

impl Ser for Value {
    fn ser<S: Serializer>(&self, s: &mut S) -> Result<(), EncodeError> {
        match self {
            Value::Null => s.put_null(),
            Value::Bool(b) => s.put_bool(*b),
            Value::Int32(i) => s.put_int(*i as i128),
            Value::UInt32(u) => s.put_int(*u as i128),
            Value::Int64(i) => s.put_int(*i as i128),
            Value::UInt64(u) => s.put_int(*u as i128),
            Value::Float(f) => s.put_f64(*f),
            Value::Bytes(bs) => s.put_bytes(bs),
            Value::Text(t) => s.put_text(t),
            Value::List(l) => s.put_list(l),
            Value::Map(m) => s.put_map(m),
        }
    }
}
