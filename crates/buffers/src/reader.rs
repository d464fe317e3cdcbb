//! Bounds-checked binary buffer reader with cursor tracking.

use crate::BufferError;

/// A binary buffer reader over a borrowed byte slice.
///
/// The reader maintains a cursor position. Every read validates that enough
/// bytes remain before touching storage; a failed read returns
/// [`BufferError::Depleted`] and leaves the cursor exactly where it was, so
/// retrying the same read after more bytes become available succeeds.
///
/// # Example
///
/// ```
/// use netpack_buffers::Reader;
///
/// let data = [0x01, 0x02, 0x03, 0x04];
/// let mut reader = Reader::new(&data);
///
/// assert_eq!(reader.u8().unwrap(), 0x01);
/// assert_eq!(reader.array::<2>().unwrap(), [0x02, 0x03]);
/// ```
pub struct Reader<'a> {
    data: &'a [u8],
    x: usize,
}

impl<'a> Reader<'a> {
    /// Creates a new reader for the given byte slice.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, x: 0 }
    }

    /// Returns the current cursor position.
    pub fn x(&self) -> usize {
        self.x
    }

    /// Moves the cursor to an absolute position.
    ///
    /// Positions past the end of the buffer are clamped to the end.
    pub fn set_x(&mut self, x: usize) {
        self.x = x.min(self.data.len());
    }

    /// Returns the number of bytes remaining past the cursor.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.x
    }

    /// Returns `true` if the cursor has consumed the whole buffer.
    pub fn is_exhausted(&self) -> bool {
        self.x == self.data.len()
    }

    /// Resets the reader over a new byte slice, cursor back at zero.
    pub fn reset(&mut self, data: &'a [u8]) {
        self.data = data;
        self.x = 0;
    }

    #[inline]
    fn check(&self, needed: usize) -> Result<(), BufferError> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(BufferError::Depleted { needed, remaining });
        }
        Ok(())
    }

    /// Reads a single byte.
    #[inline]
    pub fn u8(&mut self) -> Result<u8, BufferError> {
        self.check(1)?;
        let val = self.data[self.x];
        self.x += 1;
        Ok(val)
    }

    /// Reads a single byte as a signed integer.
    #[inline]
    pub fn i8(&mut self) -> Result<i8, BufferError> {
        Ok(self.u8()? as i8)
    }

    /// Reads exactly `N` bytes into a fixed-size array.
    #[inline]
    pub fn array<const N: usize>(&mut self) -> Result<[u8; N], BufferError> {
        self.check(N)?;
        let mut out = [0u8; N];
        out.copy_from_slice(&self.data[self.x..self.x + N]);
        self.x += N;
        Ok(out)
    }

    /// Returns a subslice of the given size and advances the cursor.
    pub fn buf(&mut self, size: usize) -> Result<&'a [u8], BufferError> {
        self.check(size)?;
        let out = &self.data[self.x..self.x + size];
        self.x += size;
        Ok(out)
    }

    /// Advances the cursor by `length` bytes without reading them.
    pub fn skip(&mut self, length: usize) -> Result<(), BufferError> {
        self.check(length)?;
        self.x += length;
        Ok(())
    }
}
