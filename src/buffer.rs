//! Append-only output buffer shared by the value and index encoders.
//!
//! Capacity doubles when an append does not fit, or grows to exactly the
//! required size when doubling is still too small, so `n` appended bytes cost
//! `O(n)` copying in total. A buffer lives for a single encode call and is
//! consumed by [`Buffer::finalize`].

use crate::errors::AllocError;
use bytes::Bytes;
use log::trace;

/// Capacity of a buffer created with [`Buffer::new`].
pub const DEFAULT_CAPACITY: usize = 1024;

#[derive(Debug)]
/// A growable byte accumulator.
///
/// Invariant: `offset() <= size()`, and `size()` never decreases.
pub struct Buffer {
    data: Vec<u8>,
    size: usize,
}

impl Buffer {
    /// Creates a buffer with [`DEFAULT_CAPACITY`] bytes of room.
    ///
    /// # Example
    ///
    /// ```
    /// use escode::buffer::Buffer;
    ///
    /// let mut buf = Buffer::new().unwrap();
    /// buf.append(b"abc").unwrap();
    ///
    /// assert_eq!(&buf.finalize()[..], b"abc");
    /// ```
    pub fn new() -> Result<Buffer, AllocError> { Buffer::with_capacity(DEFAULT_CAPACITY) }

    /// Creates a buffer with room for `size` bytes.
    pub fn with_capacity(size: usize) -> Result<Buffer, AllocError> {
        let mut data = Vec::new();
        data.try_reserve_exact(size)
            .map_err(|_| AllocError { requested: size })?;
        Ok(Buffer { data, size })
    }

    /// Current capacity.
    pub fn size(&self) -> usize { self.size }

    /// Number of bytes written so far.
    pub fn offset(&self) -> usize { self.data.len() }

    /// The bytes written so far.
    pub fn as_slice(&self) -> &[u8] { &self.data }

    /// Copies `bytes` onto the end of the buffer, growing it if needed.
    ///
    /// On failure the buffer is left as it was.
    pub fn append(&mut self, bytes: &[u8]) -> Result<(), AllocError> {
        self.reserve(bytes.len())?;
        self.data.extend_from_slice(bytes);
        Ok(())
    }

    /// Appends a single byte.
    pub fn push(&mut self, byte: u8) -> Result<(), AllocError> {
        self.reserve(1)?;
        self.data.push(byte);
        Ok(())
    }

    /// Converts the written bytes into an immutable byte string of exactly
    /// `offset()` bytes.
    pub fn finalize(self) -> Bytes { Bytes::from(self.data) }

    fn reserve(&mut self, additional: usize) -> Result<(), AllocError> {
        let required = self
            .offset()
            .checked_add(additional)
            .ok_or(AllocError {
                requested: usize::max_value(),
            })?;
        if required <= self.size {
            return Ok(());
        }

        let doubled = self.size.saturating_mul(2);
        let new_size = if doubled < required { required } else { doubled };
        trace!("growing buffer from {} to {} bytes", self.size, new_size);

        self.data
            .try_reserve_exact(new_size - self.offset())
            .map_err(|_| AllocError {
                requested: new_size,
            })?;
        self.size = new_size;
        Ok(())
    }
}
