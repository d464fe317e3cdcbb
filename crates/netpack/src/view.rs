//! Zero-copy reinterpretation of payload bytes as typed element slices.
//!
//! The copying reads on [`Decomposer`](crate::Decomposer) are the default.
//! The functions here are the opt-in alternative: they hand back a borrowed
//! `&[T]` aliasing the source buffer, with no per-element decode. That is
//! only sound when the source bytes were produced at the host's native byte
//! order, so the conversion validates the order policy, the slice alignment,
//! and the slice length before permitting the view, and fails with a
//! [`PacketError`] otherwise. The returned slice borrows the source buffer;
//! the borrow checker ties its validity to that buffer's lifetime.

use std::mem;

use crate::{ByteOrder, Complex128, Complex64, PacketError};

mod sealed {
    pub trait Sealed {}
}

/// Element types a byte slice may be reinterpreted as.
///
/// Sealed: every implementor is a fixed-width numeric type with no padding
/// whose every bit pattern is a valid value. `bool` and `char` are
/// deliberately absent — their in-memory validity rules make raw
/// reinterpretation unsound, so they only have copying reads.
pub trait Element: sealed::Sealed + Copy + 'static {}

macro_rules! element {
    ($($t:ty),+ $(,)?) => {
        $(
            impl sealed::Sealed for $t {}
            impl Element for $t {}
        )+
    };
}

element!(u8, i8, u16, i16, u32, i32, u64, i64, f32, f64, Complex64, Complex128);

/// Reinterprets `bytes` as a slice of `T` without copying.
///
/// Fails with:
/// - [`PacketError::ViewByteOrder`] if `order` is not the host's native
///   byte order (a view cannot swap bytes);
/// - [`PacketError::InvalidLength`] if the byte length is not a whole
///   number of elements;
/// - [`PacketError::ViewMisaligned`] if the slice does not start at an
///   address aligned for `T`.
pub fn cast_slice<T: Element>(bytes: &[u8], order: ByteOrder) -> Result<&[T], PacketError> {
    if !order.is_native() {
        return Err(PacketError::ViewByteOrder { order });
    }
    let width = mem::size_of::<T>();
    if bytes.len() % width != 0 {
        return Err(PacketError::InvalidLength {
            length: bytes.len() as i64,
            width,
        });
    }
    let addr = bytes.as_ptr() as usize;
    let align = mem::align_of::<T>();
    if addr % align != 0 {
        return Err(PacketError::ViewMisaligned { addr, align });
    }
    let count = bytes.len() / width;
    // SAFETY: the pointer is aligned and spans count * size_of::<T>()
    // initialized bytes; Element implementors accept every bit pattern and
    // carry no padding. The output borrows `bytes`, so the source cannot be
    // freed or mutated while the view is alive.
    Ok(unsafe { std::slice::from_raw_parts(bytes.as_ptr() as *const T, count) })
}
