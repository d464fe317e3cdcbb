//! The framed packet unit.

use std::io::{self, Read, Write};

use netpack_buffers::BufferError;

use crate::{ByteOrder, PacketError};

/// Size of the frame header: 4-byte opcode + 8-byte payload length.
pub const HEADER_LEN: usize = 12;

/// A framed message: opcode, payload length, and the payload bytes.
///
/// The header is materialized as a prefix of the same buffer the payload
/// lives in, so [`Packet::bytes`] is the canonical flat wire form with no
/// extra assembly:
///
/// ```text
/// [ opcode: 4 bytes ][ payloadLength: 8 bytes ][ payload ]
/// ```
///
/// A packet is immutable once constructed and owns its buffer; it may be
/// read and written to any number of streams from multiple threads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Packet {
    opcode: i32,
    payload_length: i64,
    /// Header followed by exactly `payload_length` payload bytes.
    data: Vec<u8>,
}

impl Packet {
    /// Constructs a packet from already-encoded payload bytes.
    ///
    /// The header is written at the configured byte order.
    pub fn new(opcode: i32, payload: &[u8], order: ByteOrder) -> Packet {
        let mut data = Vec::with_capacity(HEADER_LEN + payload.len());
        data.resize(HEADER_LEN, 0);
        data.extend_from_slice(payload);
        Packet::from_frame(opcode, data, order)
    }

    /// Builds a packet from a buffer that already contains a 12-byte header
    /// gap followed by the payload, patching the header in place.
    pub(crate) fn from_frame(opcode: i32, mut data: Vec<u8>, order: ByteOrder) -> Packet {
        debug_assert!(data.len() >= HEADER_LEN);
        let payload_length = (data.len() - HEADER_LEN) as i64;
        data[..4].copy_from_slice(&order.u32_to(opcode as u32));
        data[4..HEADER_LEN].copy_from_slice(&order.u64_to(payload_length as u64));
        Packet {
            opcode,
            payload_length,
            data,
        }
    }

    /// The packet's opcode.
    pub fn opcode(&self) -> i32 {
        self.opcode
    }

    /// The length of the payload in bytes.
    pub fn payload_length(&self) -> i64 {
        self.payload_length
    }

    /// The payload bytes, borrowed from the packet's buffer.
    pub fn payload(&self) -> &[u8] {
        &self.data[HEADER_LEN..]
    }

    /// An owned copy of the payload bytes.
    pub fn payload_to_vec(&self) -> Vec<u8> {
        self.payload().to_vec()
    }

    /// The canonical flat wire form: header followed by payload.
    pub fn bytes(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the packet and returns its wire-form buffer.
    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Writes the flat wire form to the stream.
    ///
    /// On success returns the total number of bytes written. On failure the
    /// error carries the number of bytes successfully transferred so far.
    pub fn write_to<W: Write>(&self, stream: &mut W) -> Result<u64, PacketError> {
        let mut written: u64 = 0;
        let mut buf = &self.data[..];
        while !buf.is_empty() {
            match stream.write(buf) {
                Ok(0) => {
                    return Err(PacketError::Io {
                        transferred: written,
                        source: io::ErrorKind::WriteZero.into(),
                    })
                }
                Ok(n) => {
                    written += n as u64;
                    buf = &buf[n..];
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    return Err(PacketError::Io {
                        transferred: written,
                        source: e,
                    })
                }
            }
        }
        Ok(written)
    }

    /// Reads one packet from the stream: 4-byte opcode, 8-byte length, then
    /// exactly that many payload bytes.
    ///
    /// On success returns the number of bytes consumed together with the
    /// packet. A short read — including one that ends mid-header — is
    /// reported with the number of bytes successfully consumed so far.
    pub fn read_from<R: Read>(stream: &mut R, order: ByteOrder) -> Result<(u64, Packet), PacketError> {
        let mut header = [0u8; HEADER_LEN];
        let transferred = read_full(stream, &mut header, 0)?;

        let opcode = order.u32_from(header[..4].try_into().expect("4-byte slice")) as i32;
        let payload_length = order.u64_from(header[4..].try_into().expect("8-byte slice")) as i64;
        if payload_length < 0 {
            return Err(PacketError::InvalidLength {
                length: payload_length,
                width: 1,
            });
        }

        let mut data = vec![0u8; HEADER_LEN + payload_length as usize];
        data[..HEADER_LEN].copy_from_slice(&header);
        let transferred = read_full(stream, &mut data[HEADER_LEN..], transferred)?;

        Ok((
            transferred,
            Packet {
                opcode,
                payload_length,
                data,
            },
        ))
    }

    /// Parses a packet from a complete in-memory buffer.
    ///
    /// Bytes past the declared payload length are ignored.
    pub fn from_bytes(data: &[u8], order: ByteOrder) -> Result<Packet, PacketError> {
        if data.len() < HEADER_LEN {
            return Err(BufferError::Depleted {
                needed: HEADER_LEN,
                remaining: data.len(),
            }
            .into());
        }
        let opcode = order.u32_from(data[..4].try_into().expect("4-byte slice")) as i32;
        let payload_length = order.u64_from(data[4..HEADER_LEN].try_into().expect("8-byte slice")) as i64;
        if payload_length < 0 {
            return Err(PacketError::InvalidLength {
                length: payload_length,
                width: 1,
            });
        }
        let total = HEADER_LEN + payload_length as usize;
        if data.len() < total {
            return Err(BufferError::Depleted {
                needed: total - HEADER_LEN,
                remaining: data.len() - HEADER_LEN,
            }
            .into());
        }
        Ok(Packet {
            opcode,
            payload_length,
            data: data[..total].to_vec(),
        })
    }
}

/// Fills `buf` completely, accumulating the transferred count across calls
/// so partial failures report how far the stream got.
fn read_full<R: Read>(
    stream: &mut R,
    buf: &mut [u8],
    mut transferred: u64,
) -> Result<u64, PacketError> {
    let mut filled = 0;
    while filled < buf.len() {
        match stream.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(PacketError::Io {
                    transferred,
                    source: io::ErrorKind::UnexpectedEof.into(),
                })
            }
            Ok(n) => {
                filled += n;
                transferred += n as u64;
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                return Err(PacketError::Io {
                    transferred,
                    source: e,
                })
            }
        }
    }
    Ok(transferred)
}
