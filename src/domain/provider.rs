//! Opaque liquidity-provider identity.

use core::fmt;

/// The identity of a caller, used only as the key into the pool's share
/// ledger.
///
/// The pool assigns no structure to the bytes: whatever the hosting
/// environment uses to identify accounts (a public key hash, an address,
/// a session id) is padded or hashed into 32 bytes by the host.
///
/// # Examples
///
/// ```
/// use xyk_pool::domain::ProviderId;
///
/// let alice = ProviderId::from_bytes([1u8; 32]);
/// let bob = ProviderId::from_bytes([2u8; 32]);
/// assert_ne!(alice, bob);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ProviderId([u8; 32]);

impl ProviderId {
    /// Creates a `ProviderId` from raw bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for ProviderId {
    /// Formats as `0x` followed by the first four bytes in hex — enough
    /// to tell providers apart in logs without flooding them.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "0x{:02x}{:02x}{:02x}{:02x}…",
            self.0[0], self.0[1], self.0[2], self.0[3]
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bytes_round_trip() {
        let id = ProviderId::from_bytes([7u8; 32]);
        assert_eq!(id.as_bytes(), &[7u8; 32]);
    }

    #[test]
    fn equality_is_byte_equality() {
        assert_eq!(
            ProviderId::from_bytes([1u8; 32]),
            ProviderId::from_bytes([1u8; 32])
        );
        assert_ne!(
            ProviderId::from_bytes([1u8; 32]),
            ProviderId::from_bytes([2u8; 32])
        );
    }

    #[test]
    fn ordering_enables_map_keys() {
        use std::collections::BTreeMap;
        let mut map = BTreeMap::new();
        map.insert(ProviderId::from_bytes([1u8; 32]), 1u32);
        map.insert(ProviderId::from_bytes([2u8; 32]), 2u32);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn display_is_abbreviated_hex() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0xab;
        bytes[1] = 0xcd;
        let shown = format!("{}", ProviderId::from_bytes(bytes));
        assert!(shown.starts_with("0xabcd"));
    }
}
