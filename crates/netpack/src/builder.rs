//! Forward-only packet payload encoder.

use netpack_buffers::Writer;

use crate::packet::HEADER_LEN;
use crate::{ByteOrder, Complex128, Complex64, Packet};

/// Forward-only binary encoder with a growable buffer and cursor.
///
/// The first 12 bytes of the buffer are reserved for the eventual frame
/// header; payload bytes start at offset 12. Each `add_*` call appends the
/// type's canonical encoding at the current cursor and never fails —
/// capacity is grown automatically and committed bytes are never moved.
///
/// [`Builder::build_packet`] freezes the buffer into a [`Packet`] without
/// copying the payload and leaves the builder reset, so one builder can be
/// reused across many encodes to avoid per-message allocation.
pub struct Builder {
    pub writer: Writer,
    order: ByteOrder,
}

impl Builder {
    /// Creates an empty builder with the given byte-order policy.
    pub fn new(order: ByteOrder) -> Self {
        Self::with_capacity(HEADER_LEN, order)
    }

    /// Creates a builder with pre-allocated capacity for the frame.
    pub fn with_capacity(capacity: usize, order: ByteOrder) -> Self {
        let mut writer = Writer::with_capacity(capacity.max(HEADER_LEN));
        writer.skip(HEADER_LEN);
        Self { writer, order }
    }

    /// The byte-order policy fixed at construction.
    pub fn order(&self) -> ByteOrder {
        self.order
    }

    /// Number of payload bytes written so far.
    pub fn payload_len(&self) -> usize {
        self.writer.len() - HEADER_LEN
    }

    /// Discards all written payload bytes, keeping the allocation.
    pub fn reset(&mut self) {
        self.writer.reset();
        self.writer.skip(HEADER_LEN);
    }

    // ---------------------------------------------------------------- scalars

    /// Appends a bool as a single `0x00`/`0x01` byte.
    pub fn add_bool(&mut self, val: bool) {
        self.writer.u8(val as u8);
    }

    /// Appends a raw byte.
    pub fn add_u8(&mut self, val: u8) {
        self.writer.u8(val);
    }

    /// Appends a signed byte.
    pub fn add_i8(&mut self, val: i8) {
        self.writer.u8(val as u8);
    }

    /// Appends a 16-bit unsigned integer.
    pub fn add_u16(&mut self, val: u16) {
        self.writer.buf(&self.order.u16_to(val));
    }

    /// Appends a 16-bit two's-complement integer.
    pub fn add_i16(&mut self, val: i16) {
        self.writer.buf(&self.order.u16_to(val as u16));
    }

    /// Appends a 32-bit unsigned integer.
    pub fn add_u32(&mut self, val: u32) {
        self.writer.buf(&self.order.u32_to(val));
    }

    /// Appends a 32-bit two's-complement integer.
    pub fn add_i32(&mut self, val: i32) {
        self.writer.buf(&self.order.u32_to(val as u32));
    }

    /// Appends a 64-bit unsigned integer.
    pub fn add_u64(&mut self, val: u64) {
        self.writer.buf(&self.order.u64_to(val));
    }

    /// Appends a 64-bit two's-complement integer.
    pub fn add_i64(&mut self, val: i64) {
        self.writer.buf(&self.order.u64_to(val as u64));
    }

    /// Appends an IEEE-754 single bit pattern.
    pub fn add_f32(&mut self, val: f32) {
        self.writer.buf(&self.order.u32_to(val.to_bits()));
    }

    /// Appends an IEEE-754 double bit pattern.
    pub fn add_f64(&mut self, val: f64) {
        self.writer.buf(&self.order.u64_to(val.to_bits()));
    }

    /// Appends a complex number as two singles, real then imaginary.
    pub fn add_complex64(&mut self, val: Complex64) {
        self.add_f32(val.re);
        self.add_f32(val.im);
    }

    /// Appends a complex number as two doubles, real then imaginary.
    pub fn add_complex128(&mut self, val: Complex128) {
        self.add_f64(val.re);
        self.add_f64(val.im);
    }

    /// Appends a code point as a 32-bit integer.
    pub fn add_char(&mut self, val: char) {
        self.add_u32(val as u32);
    }

    // ---------------------------------------------------------------- strings and arrays

    /// Appends a string: 4-byte signed byte-length prefix + UTF-8 bytes.
    pub fn add_str(&mut self, val: &str) {
        let bytes = val.as_bytes();
        self.add_len_prefix(bytes.len());
        self.writer.buf(bytes);
    }

    /// Appends raw bytes with no length prefix. Meant for composing
    /// already-encoded material into the payload.
    pub fn add_raw(&mut self, val: &[u8]) {
        self.writer.buf(val);
    }

    /// Appends a bool array: byte-length prefix + one byte per element.
    pub fn add_bool_array(&mut self, val: &[bool]) {
        self.add_len_prefix(val.len());
        self.writer.reserve(val.len());
        for &v in val {
            self.writer.u8(v as u8);
        }
    }

    /// Appends a byte array: byte-length prefix + raw bytes.
    pub fn add_u8_array(&mut self, val: &[u8]) {
        self.add_len_prefix(val.len());
        self.writer.buf(val);
    }

    /// Appends a signed byte array: byte-length prefix + raw bytes.
    pub fn add_i8_array(&mut self, val: &[i8]) {
        self.add_len_prefix(val.len());
        self.writer.reserve(val.len());
        for &v in val {
            self.writer.u8(v as u8);
        }
    }

    /// Appends a u16 array. The length prefix counts bytes, not elements.
    pub fn add_u16_array(&mut self, val: &[u16]) {
        self.add_len_prefix(val.len() * 2);
        self.writer.reserve(val.len() * 2);
        for &v in val {
            self.writer.buf(&self.order.u16_to(v));
        }
    }

    /// Appends an i16 array. The length prefix counts bytes, not elements.
    pub fn add_i16_array(&mut self, val: &[i16]) {
        self.add_len_prefix(val.len() * 2);
        self.writer.reserve(val.len() * 2);
        for &v in val {
            self.writer.buf(&self.order.u16_to(v as u16));
        }
    }

    /// Appends a u32 array. The length prefix counts bytes, not elements.
    pub fn add_u32_array(&mut self, val: &[u32]) {
        self.add_len_prefix(val.len() * 4);
        self.writer.reserve(val.len() * 4);
        for &v in val {
            self.writer.buf(&self.order.u32_to(v));
        }
    }

    /// Appends an i32 array. The length prefix counts bytes, not elements.
    pub fn add_i32_array(&mut self, val: &[i32]) {
        self.add_len_prefix(val.len() * 4);
        self.writer.reserve(val.len() * 4);
        for &v in val {
            self.writer.buf(&self.order.u32_to(v as u32));
        }
    }

    /// Appends a u64 array. The length prefix counts bytes, not elements.
    pub fn add_u64_array(&mut self, val: &[u64]) {
        self.add_len_prefix(val.len() * 8);
        self.writer.reserve(val.len() * 8);
        for &v in val {
            self.writer.buf(&self.order.u64_to(v));
        }
    }

    /// Appends an i64 array. The length prefix counts bytes, not elements.
    pub fn add_i64_array(&mut self, val: &[i64]) {
        self.add_len_prefix(val.len() * 8);
        self.writer.reserve(val.len() * 8);
        for &v in val {
            self.writer.buf(&self.order.u64_to(v as u64));
        }
    }

    /// Appends an f32 array. The length prefix counts bytes, not elements.
    pub fn add_f32_array(&mut self, val: &[f32]) {
        self.add_len_prefix(val.len() * 4);
        self.writer.reserve(val.len() * 4);
        for &v in val {
            self.writer.buf(&self.order.u32_to(v.to_bits()));
        }
    }

    /// Appends an f64 array. The length prefix counts bytes, not elements.
    pub fn add_f64_array(&mut self, val: &[f64]) {
        self.add_len_prefix(val.len() * 8);
        self.writer.reserve(val.len() * 8);
        for &v in val {
            self.writer.buf(&self.order.u64_to(v.to_bits()));
        }
    }

    /// Appends a complex64 array. The length prefix counts bytes.
    pub fn add_complex64_array(&mut self, val: &[Complex64]) {
        self.add_len_prefix(val.len() * 8);
        self.writer.reserve(val.len() * 8);
        for &v in val {
            self.writer.buf(&self.order.u32_to(v.re.to_bits()));
            self.writer.buf(&self.order.u32_to(v.im.to_bits()));
        }
    }

    /// Appends a complex128 array. The length prefix counts bytes.
    pub fn add_complex128_array(&mut self, val: &[Complex128]) {
        self.add_len_prefix(val.len() * 16);
        self.writer.reserve(val.len() * 16);
        for &v in val {
            self.writer.buf(&self.order.u64_to(v.re.to_bits()));
            self.writer.buf(&self.order.u64_to(v.im.to_bits()));
        }
    }

    /// Appends a code-point array. The length prefix counts bytes.
    pub fn add_char_array(&mut self, val: &[char]) {
        self.add_len_prefix(val.len() * 4);
        self.writer.reserve(val.len() * 4);
        for &v in val {
            self.writer.buf(&self.order.u32_to(v as u32));
        }
    }

    fn add_len_prefix(&mut self, bytes: usize) {
        self.add_i32(bytes as i32);
    }

    // ---------------------------------------------------------------- finalization

    /// Freezes the buffer into a [`Packet`] with the given opcode.
    ///
    /// The opcode and payload length are written into the reserved header
    /// bytes and the buffer is moved into the packet — no payload copy. The
    /// builder is left reset and may be reused for the next message.
    pub fn build_packet(&mut self, opcode: i32) -> Packet {
        let data = self.writer.flush();
        self.writer.skip(HEADER_LEN);
        Packet::from_frame(opcode, data, self.order)
    }

    /// Like [`Builder::build_packet`], but copies the frame into a fresh
    /// packet and leaves the builder's contents intact.
    pub fn snapshot_packet(&self, opcode: i32) -> Packet {
        Packet::from_frame(opcode, self.writer.as_slice().to_vec(), self.order)
    }
}
