//! Chain-app identifiers: fixed-size routing keys derived from chain-id strings.

use core::fmt::{Display, Error as FmtError, Formatter};

use sha1::{Digest, Sha1};

/// Length in bytes of a [`ChainAppId`].
pub const CHAIN_APP_ID_LEN: usize = 4;

/// Identifier of a registered chain application, derived from its chain-id
/// string. Two chain-ids collide only if the leading bytes of their SHA-1
/// digests collide; collisions among configured chains are rejected at
/// registration time.
///
/// The derived `Ord` is byte-wise lexicographic, which is the canonical
/// order used whenever per-chain outputs are concatenated.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChainAppId([u8; CHAIN_APP_ID_LEN]);

impl ChainAppId {
    /// Derives the identifier for the given chain-id string.
    pub fn from_chain_id(chain_id: &str) -> Self {
        let digest = Sha1::digest(chain_id.as_bytes());
        let mut id = [0; CHAIN_APP_ID_LEN];
        id.copy_from_slice(&digest[..CHAIN_APP_ID_LEN]);
        Self(id)
    }

    pub const fn as_bytes(&self) -> &[u8; CHAIN_APP_ID_LEN] {
        &self.0
    }
}

impl From<[u8; CHAIN_APP_ID_LEN]> for ChainAppId {
    fn from(bytes: [u8; CHAIN_APP_ID_LEN]) -> Self {
        Self(bytes)
    }
}

impl Display for ChainAppId {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), FmtError> {
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

/// Sorts identifiers into the canonical aggregation order.
pub fn sort_chain_app_ids(ids: &mut [ChainAppId]) {
    ids.sort_unstable();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn id_derivation_is_stable() {
        // SHA1("KVStore")[0..4]
        assert_eq!(
            ChainAppId::from_chain_id("KVStore"),
            ChainAppId::from([0x81, 0x36, 0xf4, 0xf5])
        );
        // SHA1("sdk-app-2")[0..4]
        assert_eq!(
            ChainAppId::from_chain_id("sdk-app-2"),
            ChainAppId::from([0x0d, 0xff, 0x1a, 0x21])
        );
    }

    #[test]
    fn ids_sort_bytewise() {
        let mut ids = vec![
            ChainAppId::from([0x81, 0x36, 0xf4, 0xf5]),
            ChainAppId::from([0x0d, 0xff, 0x1a, 0x21]),
            ChainAppId::from([0x0d, 0x00, 0xff, 0xff]),
        ];
        sort_chain_app_ids(&mut ids);
        assert_eq!(
            ids,
            vec![
                ChainAppId::from([0x0d, 0x00, 0xff, 0xff]),
                ChainAppId::from([0x0d, 0xff, 0x1a, 0x21]),
                ChainAppId::from([0x81, 0x36, 0xf4, 0xf5]),
            ]
        );
    }

    #[test]
    fn display_is_lowercase_hex() {
        let id = ChainAppId::from([0x0d, 0xff, 0x1a, 0x21]);
        assert_eq!(id.to_string(), "0dff1a21");
    }
}
