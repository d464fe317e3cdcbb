//! Bounds-checked packet payload decoder.

use netpack_buffers::{BufferError, Reader};

use crate::view::{self, Element};
use crate::{ByteOrder, Complex128, Complex64, Packet, PacketError};

/// Code point returned when a rune read yields an invalid code point.
pub const RUNE_PLACEHOLDER: char = '\u{3084}';

/// Forward-only binary decoder over a packet payload.
///
/// The dual of [`Builder`](crate::Builder): one `read_*` per encoding,
/// advancing a cursor over borrowed bytes. Every read validates remaining
/// length first; a failed read reports [`BufferError::Depleted`] through
/// [`PacketError`] and leaves the cursor unchanged, including the composite
/// string/array reads (a failure after the length prefix rewinds past the
/// prefix too).
///
/// The decomposer borrows the packet's bytes; it owns nothing and is simply
/// dropped once the target value is populated.
pub struct Decomposer<'a> {
    pub reader: Reader<'a>,
    order: ByteOrder,
}

impl<'a> Decomposer<'a> {
    /// Creates a decomposer positioned at the start of the packet payload
    /// (just past the 12-byte header).
    pub fn new(packet: &'a Packet, order: ByteOrder) -> Self {
        Self::from_payload(packet.payload(), order)
    }

    /// Creates a decomposer over raw already-unframed payload bytes.
    pub fn from_payload(payload: &'a [u8], order: ByteOrder) -> Self {
        Self {
            reader: Reader::new(payload),
            order,
        }
    }

    /// The byte-order policy fixed at construction.
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Current cursor offset into the payload.
    pub fn position(&self) -> usize {
        self.reader.x()
    }

    /// Bytes left between the cursor and the end of the payload.
    pub fn remaining(&self) -> usize {
        self.reader.remaining()
    }

    /// `true` once the whole payload has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.reader.is_exhausted()
    }

    // ---------------------------------------------------------------- scalars

    /// Reads a bool; any non-zero byte is `true`.
    pub fn read_bool(&mut self) -> Result<bool, PacketError> {
        Ok(self.reader.u8()? != 0)
    }

    /// Reads a raw byte.
    pub fn read_u8(&mut self) -> Result<u8, PacketError> {
        Ok(self.reader.u8()?)
    }

    /// Reads a signed byte.
    pub fn read_i8(&mut self) -> Result<i8, PacketError> {
        Ok(self.reader.i8()?)
    }

    /// Reads a 16-bit unsigned integer.
    pub fn read_u16(&mut self) -> Result<u16, PacketError> {
        Ok(self.order.u16_from(self.reader.array::<2>()?))
    }

    /// Reads a 16-bit two's-complement integer.
    pub fn read_i16(&mut self) -> Result<i16, PacketError> {
        Ok(self.order.u16_from(self.reader.array::<2>()?) as i16)
    }

    /// Reads a 32-bit unsigned integer.
    pub fn read_u32(&mut self) -> Result<u32, PacketError> {
        Ok(self.order.u32_from(self.reader.array::<4>()?))
    }

    /// Reads a 32-bit two's-complement integer.
    pub fn read_i32(&mut self) -> Result<i32, PacketError> {
        Ok(self.order.u32_from(self.reader.array::<4>()?) as i32)
    }

    /// Reads a 64-bit unsigned integer.
    pub fn read_u64(&mut self) -> Result<u64, PacketError> {
        Ok(self.order.u64_from(self.reader.array::<8>()?))
    }

    /// Reads a 64-bit two's-complement integer.
    pub fn read_i64(&mut self) -> Result<i64, PacketError> {
        Ok(self.order.u64_from(self.reader.array::<8>()?) as i64)
    }

    /// Reads an IEEE-754 single from its bit pattern.
    pub fn read_f32(&mut self) -> Result<f32, PacketError> {
        Ok(f32::from_bits(self.order.u32_from(self.reader.array::<4>()?)))
    }

    /// Reads an IEEE-754 double from its bit pattern.
    pub fn read_f64(&mut self) -> Result<f64, PacketError> {
        Ok(f64::from_bits(self.order.u64_from(self.reader.array::<8>()?)))
    }

    /// Reads a complex number: two singles, real then imaginary.
    pub fn read_complex64(&mut self) -> Result<Complex64, PacketError> {
        let start = self.reader.x();
        let re = self.read_f32()?;
        let im = self.rewind_on_err(start, Self::read_f32)?;
        Ok(Complex64 { re, im })
    }

    /// Reads a complex number: two doubles, real then imaginary.
    pub fn read_complex128(&mut self) -> Result<Complex128, PacketError> {
        let start = self.reader.x();
        let re = self.read_f64()?;
        let im = self.rewind_on_err(start, Self::read_f64)?;
        Ok(Complex128 { re, im })
    }

    /// Reads a rune (32-bit code point).
    ///
    /// An exhausted buffer is a depleted error with the cursor untouched; a
    /// well-framed but invalid code point decodes to [`RUNE_PLACEHOLDER`]
    /// rather than an undefined value.
    pub fn read_char(&mut self) -> Result<char, PacketError> {
        let raw = self.read_u32()?;
        Ok(char::from_u32(raw).unwrap_or(RUNE_PLACEHOLDER))
    }

    // ---------------------------------------------------------------- strings and arrays

    /// Reads a string: 4-byte signed byte-length prefix + UTF-8 bytes.
    pub fn read_str(&mut self) -> Result<String, PacketError> {
        let start = self.reader.x();
        let bytes = self.read_len_prefix(1)?;
        let data = self.reader.buf(bytes)?;
        match std::str::from_utf8(data) {
            Ok(s) => Ok(s.to_owned()),
            Err(_) => {
                self.reader.set_x(start);
                Err(BufferError::InvalidUtf8.into())
            }
        }
    }

    /// Reads exactly `n` raw bytes with no length prefix. The dual of
    /// [`Builder::add_raw`](crate::Builder::add_raw).
    pub fn read_bytes(&mut self, n: usize) -> Result<Vec<u8>, PacketError> {
        Ok(self.reader.buf(n)?.to_vec())
    }

    /// Reads a bool array; each byte decodes as non-zero = `true`.
    pub fn read_bool_array(&mut self) -> Result<Vec<bool>, PacketError> {
        let bytes = self.read_len_prefix(1)?;
        let data = self.reader.buf(bytes)?;
        Ok(data.iter().map(|&b| b != 0).collect())
    }

    /// Reads a byte array: byte-length prefix + raw bytes.
    pub fn read_u8_array(&mut self) -> Result<Vec<u8>, PacketError> {
        let bytes = self.read_len_prefix(1)?;
        Ok(self.reader.buf(bytes)?.to_vec())
    }

    /// Reads a signed byte array.
    pub fn read_i8_array(&mut self) -> Result<Vec<i8>, PacketError> {
        let bytes = self.read_len_prefix(1)?;
        let data = self.reader.buf(bytes)?;
        Ok(data.iter().map(|&b| b as i8).collect())
    }

    /// Reads a u16 array. The length prefix counts bytes, not elements.
    pub fn read_u16_array(&mut self) -> Result<Vec<u16>, PacketError> {
        let bytes = self.read_len_prefix(2)?;
        let mut out = Vec::with_capacity(bytes / 2);
        for _ in 0..bytes / 2 {
            out.push(self.order.u16_from(self.reader.array::<2>()?));
        }
        Ok(out)
    }

    /// Reads an i16 array. The length prefix counts bytes, not elements.
    pub fn read_i16_array(&mut self) -> Result<Vec<i16>, PacketError> {
        let bytes = self.read_len_prefix(2)?;
        let mut out = Vec::with_capacity(bytes / 2);
        for _ in 0..bytes / 2 {
            out.push(self.order.u16_from(self.reader.array::<2>()?) as i16);
        }
        Ok(out)
    }

    /// Reads a u32 array. The length prefix counts bytes, not elements.
    pub fn read_u32_array(&mut self) -> Result<Vec<u32>, PacketError> {
        let bytes = self.read_len_prefix(4)?;
        let mut out = Vec::with_capacity(bytes / 4);
        for _ in 0..bytes / 4 {
            out.push(self.order.u32_from(self.reader.array::<4>()?));
        }
        Ok(out)
    }

    /// Reads an i32 array. The length prefix counts bytes, not elements.
    pub fn read_i32_array(&mut self) -> Result<Vec<i32>, PacketError> {
        let bytes = self.read_len_prefix(4)?;
        let mut out = Vec::with_capacity(bytes / 4);
        for _ in 0..bytes / 4 {
            out.push(self.order.u32_from(self.reader.array::<4>()?) as i32);
        }
        Ok(out)
    }

    /// Reads a u64 array. The length prefix counts bytes, not elements.
    pub fn read_u64_array(&mut self) -> Result<Vec<u64>, PacketError> {
        let bytes = self.read_len_prefix(8)?;
        let mut out = Vec::with_capacity(bytes / 8);
        for _ in 0..bytes / 8 {
            out.push(self.order.u64_from(self.reader.array::<8>()?));
        }
        Ok(out)
    }

    /// Reads an i64 array. The length prefix counts bytes, not elements.
    pub fn read_i64_array(&mut self) -> Result<Vec<i64>, PacketError> {
        let bytes = self.read_len_prefix(8)?;
        let mut out = Vec::with_capacity(bytes / 8);
        for _ in 0..bytes / 8 {
            out.push(self.order.u64_from(self.reader.array::<8>()?) as i64);
        }
        Ok(out)
    }

    /// Reads an f32 array. The length prefix counts bytes, not elements.
    pub fn read_f32_array(&mut self) -> Result<Vec<f32>, PacketError> {
        let bytes = self.read_len_prefix(4)?;
        let mut out = Vec::with_capacity(bytes / 4);
        for _ in 0..bytes / 4 {
            out.push(f32::from_bits(
                self.order.u32_from(self.reader.array::<4>()?),
            ));
        }
        Ok(out)
    }

    /// Reads an f64 array. The length prefix counts bytes, not elements.
    pub fn read_f64_array(&mut self) -> Result<Vec<f64>, PacketError> {
        let bytes = self.read_len_prefix(8)?;
        let mut out = Vec::with_capacity(bytes / 8);
        for _ in 0..bytes / 8 {
            out.push(f64::from_bits(
                self.order.u64_from(self.reader.array::<8>()?),
            ));
        }
        Ok(out)
    }

    /// Reads a complex64 array. The length prefix counts bytes.
    pub fn read_complex64_array(&mut self) -> Result<Vec<Complex64>, PacketError> {
        let bytes = self.read_len_prefix(8)?;
        let mut out = Vec::with_capacity(bytes / 8);
        for _ in 0..bytes / 8 {
            let re = f32::from_bits(
                self.order.u32_from(self.reader.array::<4>()?),
            );
            let im = f32::from_bits(
                self.order.u32_from(self.reader.array::<4>()?),
            );
            out.push(Complex64 { re, im });
        }
        Ok(out)
    }

    /// Reads a complex128 array. The length prefix counts bytes.
    pub fn read_complex128_array(&mut self) -> Result<Vec<Complex128>, PacketError> {
        let bytes = self.read_len_prefix(16)?;
        let mut out = Vec::with_capacity(bytes / 16);
        for _ in 0..bytes / 16 {
            let re = f64::from_bits(
                self.order.u64_from(self.reader.array::<8>()?),
            );
            let im = f64::from_bits(
                self.order.u64_from(self.reader.array::<8>()?),
            );
            out.push(Complex128 { re, im });
        }
        Ok(out)
    }

    /// Reads a rune array. Invalid code points decode to
    /// [`RUNE_PLACEHOLDER`]. The length prefix counts bytes.
    pub fn read_char_array(&mut self) -> Result<Vec<char>, PacketError> {
        let bytes = self.read_len_prefix(4)?;
        let mut out = Vec::with_capacity(bytes / 4);
        for _ in 0..bytes / 4 {
            let raw = self.order.u32_from(self.reader.array::<4>()?);
            out.push(char::from_u32(raw).unwrap_or(RUNE_PLACEHOLDER));
        }
        Ok(out)
    }

    /// Reads an array as a zero-copy view over the payload bytes.
    ///
    /// The returned slice aliases the packet's buffer instead of copying —
    /// see [`view::cast_slice`] for the byte-order, alignment and length
    /// conditions under which the view is permitted. On any failure the
    /// cursor is left unchanged.
    pub fn read_array_view<T: Element>(&mut self) -> Result<&'a [T], PacketError> {
        let start = self.reader.x();
        let bytes = self.read_len_prefix(std::mem::size_of::<T>())?;
        let data = self.reader.buf(bytes)?;
        match view::cast_slice::<T>(data, self.order) {
            Ok(slice) => Ok(slice),
            Err(e) => {
                self.reader.set_x(start);
                Err(e)
            }
        }
    }

    // ---------------------------------------------------------------- helpers

    /// Reads and validates a 4-byte length prefix. Guarantees on success
    /// that the declared byte count is non-negative, a whole number of
    /// elements of `width`, and fully available past the cursor. On failure
    /// the cursor is rewound to before the prefix.
    fn read_len_prefix(&mut self, width: usize) -> Result<usize, PacketError> {
        let start = self.reader.x();
        let length = self.read_i32()?;
        if length < 0 || (length as usize) % width != 0 {
            self.reader.set_x(start);
            return Err(PacketError::InvalidLength {
                length: length as i64,
                width,
            });
        }
        let bytes = length as usize;
        let remaining = self.reader.remaining();
        if bytes > remaining {
            self.reader.set_x(start);
            return Err(BufferError::Depleted {
                needed: bytes,
                remaining,
            }
            .into());
        }
        Ok(bytes)
    }

    fn rewind_on_err<T>(
        &mut self,
        start: usize,
        read: impl FnOnce(&mut Self) -> Result<T, PacketError>,
    ) -> Result<T, PacketError> {
        match read(self) {
            Ok(v) => Ok(v),
            Err(e) => {
                self.reader.set_x(start);
                Err(e)
            }
        }
    }
}
