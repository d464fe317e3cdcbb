//! Packet codec error type.

use std::io;

use netpack_buffers::BufferError;
use thiserror::Error;

use crate::ByteOrder;

/// Error type for packet encoding, decoding and framing operations.
#[derive(Debug, Error)]
pub enum PacketError {
    /// A read ran out of bytes or hit invalid UTF-8. Recoverable: the
    /// decomposer cursor is left unchanged by the failed read.
    #[error(transparent)]
    Buffer(#[from] BufferError),
    /// A field's classification has no encode/decode mapping. The whole
    /// serialize/deserialize call aborts; nothing further is written.
    #[error("unsupported field type: {0}")]
    UnsupportedType(&'static str),
    /// A length prefix is negative or not a multiple of the element width.
    #[error("invalid length prefix {length} for element width {width}")]
    InvalidLength { length: i64, width: usize },
    /// A zero-copy view was requested for data whose byte order does not
    /// match the host's native order.
    #[error("zero-copy view requires native byte order, got {order:?}")]
    ViewByteOrder { order: ByteOrder },
    /// A zero-copy view would start at an address not aligned for the
    /// element type.
    #[error("zero-copy view misaligned: address {addr:#x} not aligned to {align}")]
    ViewMisaligned { addr: usize, align: usize },
    /// An underlying stream failed during `write_to`/`read_from`.
    /// `transferred` is the number of bytes successfully moved before the
    /// failure, so the caller can decide whether to resume or abort.
    #[error("stream failed after {transferred} bytes")]
    Io {
        transferred: u64,
        #[source]
        source: io::Error,
    },
}

impl PacketError {
    /// Returns `true` for the recoverable ran-out-of-bytes condition.
    pub fn is_depleted(&self) -> bool {
        matches!(self, PacketError::Buffer(BufferError::Depleted { .. }))
    }
}
