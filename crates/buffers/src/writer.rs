//! Append-only binary buffer writer.

/// A binary buffer writer over a growable byte region.
///
/// Writes are forward-only: each call appends at the current end of the
/// buffer and the write cursor never rewinds except on [`Writer::reset`] or
/// [`Writer::flush`]. Capacity is grown automatically; previously written
/// bytes and their offsets are never disturbed by growth.
///
/// # Example
///
/// ```
/// use netpack_buffers::Writer;
///
/// let mut writer = Writer::new();
/// writer.u8(0xAB);
/// writer.buf(b"cd");
/// assert_eq!(writer.as_slice(), &[0xAB, b'c', b'd']);
/// ```
pub struct Writer {
    buf: Vec<u8>,
}

impl Default for Writer {
    fn default() -> Self {
        Self::new()
    }
}

impl Writer {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self { buf: Vec::new() }
    }

    /// Creates a writer with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of bytes written so far (the cursor position).
    pub fn len(&self) -> usize {
        self.buf.len()
    }

    /// Returns `true` if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Ensures capacity for at least `additional` more bytes.
    pub fn reserve(&mut self, additional: usize) {
        self.buf.reserve(additional);
    }

    /// Appends a single byte.
    #[inline]
    pub fn u8(&mut self, val: u8) {
        self.buf.push(val);
    }

    /// Appends a raw byte slice.
    #[inline]
    pub fn buf(&mut self, data: &[u8]) {
        self.buf.extend_from_slice(data);
    }

    /// Appends `length` zero bytes and returns the offset where they start.
    ///
    /// Used to reserve space (e.g. a frame header) that is filled in later.
    pub fn skip(&mut self, length: usize) -> usize {
        let offset = self.buf.len();
        self.buf.resize(offset + length, 0);
        offset
    }

    /// Returns the written bytes.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf
    }

    /// Takes the written bytes out of the writer, leaving it empty.
    pub fn flush(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.buf)
    }

    /// Consumes the writer and returns its buffer.
    pub fn into_vec(self) -> Vec<u8> {
        self.buf
    }

    /// Clears the buffer, keeping the allocation for reuse.
    pub fn reset(&mut self) {
        self.buf.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append() {
        let mut w = Writer::new();
        w.u8(0x01);
        w.buf(&[0x02, 0x03]);
        assert_eq!(w.as_slice(), &[0x01, 0x02, 0x03]);
        assert_eq!(w.len(), 3);
    }

    #[test]
    fn test_skip_reserves_zeroed_gap() {
        let mut w = Writer::new();
        let offset = w.skip(4);
        assert_eq!(offset, 0);
        w.u8(0xFF);
        assert_eq!(w.as_slice(), &[0, 0, 0, 0, 0xFF]);
    }

    #[test]
    fn test_growth_preserves_committed_bytes() {
        let mut w = Writer::with_capacity(2);
        w.buf(&[1, 2]);
        for i in 0..1000u32 {
            w.u8(i as u8);
        }
        assert_eq!(&w.as_slice()[..2], &[1, 2]);
        assert_eq!(w.len(), 1002);
    }

    #[test]
    fn test_flush_takes_and_clears() {
        let mut w = Writer::new();
        w.buf(b"abc");
        let data = w.flush();
        assert_eq!(data, b"abc");
        assert!(w.is_empty());
    }

    #[test]
    fn test_reset_keeps_writer_usable() {
        let mut w = Writer::new();
        w.buf(b"abc");
        w.reset();
        assert!(w.is_empty());
        w.u8(7);
        assert_eq!(w.as_slice(), &[7]);
    }
}
