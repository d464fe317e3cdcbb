//! Length-framed positional binary packet codec.
//!
//! A message is encoded as a [`Packet`]: a 12-byte header (4-byte opcode,
//! 8-byte payload length) followed by the payload. The payload is the
//! concatenation of per-field encodings in field declaration order, with no
//! separators, names, or type tags — the wire format is positional, so both
//! ends must agree on the field order and types.
//!
//! Three layers:
//!
//! - [`Builder`] / [`Decomposer`] — typed forward-only encode/decode over a
//!   byte region, with an explicit [`ByteOrder`] policy fixed at
//!   construction.
//! - [`Packet`] — the framed unit, with flat-bytes and stream conversions.
//! - Field dispatch — [`serialize`] / [`deserialize`] over the closed
//!   [`Value`] sum type, or the static [`Record`] trait (see
//!   [`wire_record!`]) for callers with a known message shape.
//!
//! # Example
//!
//! ```
//! use netpack::{Builder, ByteOrder, Decomposer};
//!
//! let mut builder = Builder::new(ByteOrder::Big);
//! builder.add_str("Vasya");
//! builder.add_i32(16);
//! builder.add_u8_array(&[32, 25, 78]);
//! let packet = builder.build_packet(32);
//!
//! let mut decomposer = Decomposer::new(&packet, ByteOrder::Big);
//! assert_eq!(decomposer.read_str().unwrap(), "Vasya");
//! assert_eq!(decomposer.read_i32().unwrap(), 16);
//! assert_eq!(decomposer.read_u8_array().unwrap(), vec![32, 25, 78]);
//! ```

mod builder;
mod complex;
mod decomposer;
mod error;
mod order;
mod packet;
mod record;
mod serialize;
mod value;
pub mod view;

pub use builder::Builder;
pub use complex::{Complex128, Complex64};
pub use decomposer::{Decomposer, RUNE_PLACEHOLDER};
pub use error::PacketError;
pub use netpack_buffers::BufferError;
pub use order::ByteOrder;
pub use packet::{Packet, HEADER_LEN};
pub use record::{deserialize_record, serialize_record, Record, WireField};
pub use serialize::{deserialize, serialize};
pub use value::Value;
