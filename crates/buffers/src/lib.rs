//! Binary buffer utilities for netpack.
//!
//! This crate provides the byte-level plumbing underneath the packet codec:
//!
//! - [`Writer`] - Writes binary data to an auto-growing buffer
//! - [`Reader`] - Reads binary data from a byte slice with cursor tracking
//!
//! The writer is append-only and never fails; the reader checks remaining
//! length before every access and reports [`BufferError::Depleted`] without
//! moving its cursor, so a caller can retry the same read once more bytes
//! are available.
//!
//! # Example
//!
//! ```
//! use netpack_buffers::{Reader, Writer};
//!
//! // Write some data
//! let mut writer = Writer::new();
//! writer.u8(0x01);
//! writer.buf(&0x0203u16.to_be_bytes());
//! let data = writer.flush();
//!
//! // Read it back
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.u8().unwrap(), 0x01);
//! assert_eq!(reader.array::<2>().unwrap(), [0x02, 0x03]);
//! ```

mod error;
mod reader;
mod writer;

pub use error::BufferError;
pub use reader::Reader;
pub use writer::Writer;
