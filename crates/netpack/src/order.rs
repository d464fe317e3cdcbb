//! Byte-order policy.

/// Multi-byte encoding policy, fixed at construction of a [`Builder`] or
/// [`Decomposer`].
///
/// There is no implicit default: every constructor takes the order
/// explicitly. Callers that want the conventional network order by name can
/// use [`ByteOrder::NETWORK`].
///
/// [`Builder`]: crate::Builder
/// [`Decomposer`]: crate::Decomposer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ByteOrder {
    /// Most significant byte first (network order).
    Big,
    /// Least significant byte first.
    Little,
}

impl ByteOrder {
    /// Network byte order.
    pub const NETWORK: ByteOrder = ByteOrder::Big;

    /// Returns `true` if this order matches the host's native byte order.
    pub fn is_native(self) -> bool {
        match self {
            ByteOrder::Big => cfg!(target_endian = "big"),
            ByteOrder::Little => cfg!(target_endian = "little"),
        }
    }

    #[inline]
    pub(crate) fn u16_to(self, val: u16) -> [u8; 2] {
        match self {
            ByteOrder::Big => val.to_be_bytes(),
            ByteOrder::Little => val.to_le_bytes(),
        }
    }

    #[inline]
    pub(crate) fn u16_from(self, bytes: [u8; 2]) -> u16 {
        match self {
            ByteOrder::Big => u16::from_be_bytes(bytes),
            ByteOrder::Little => u16::from_le_bytes(bytes),
        }
    }

    #[inline]
    pub(crate) fn u32_to(self, val: u32) -> [u8; 4] {
        match self {
            ByteOrder::Big => val.to_be_bytes(),
            ByteOrder::Little => val.to_le_bytes(),
        }
    }

    #[inline]
    pub(crate) fn u32_from(self, bytes: [u8; 4]) -> u32 {
        match self {
            ByteOrder::Big => u32::from_be_bytes(bytes),
            ByteOrder::Little => u32::from_le_bytes(bytes),
        }
    }

    #[inline]
    pub(crate) fn u64_to(self, val: u64) -> [u8; 8] {
        match self {
            ByteOrder::Big => val.to_be_bytes(),
            ByteOrder::Little => val.to_le_bytes(),
        }
    }

    #[inline]
    pub(crate) fn u64_from(self, bytes: [u8; 8]) -> u64 {
        match self {
            ByteOrder::Big => u64::from_be_bytes(bytes),
            ByteOrder::Little => u64::from_le_bytes(bytes),
        }
    }
}
