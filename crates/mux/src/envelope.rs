//! The routing envelope carried by every multiplexed transaction.
//!
//! A valid transaction opens with 8 bytes: the 4 magic bytes followed by the
//! 4-byte chain-app identifier of the application owning the payload.

use crate::error::Error;
use crate::id::{ChainAppId, CHAIN_APP_ID_LEN};

/// Marker bytes opening every valid multiplexed transaction.
pub const MAGIC: [u8; 4] = [0x23, 0x6d, 0x75, 0x78];

/// Total length of the routing envelope.
pub const HEADER_LEN: usize = MAGIC.len() + CHAIN_APP_ID_LEN;

/// Verifies that `tx` opens with a valid routing envelope.
pub fn check_header(tx: &[u8]) -> Result<(), Error> {
    if tx.len() < HEADER_LEN {
        return Err(Error::invalid_header_length(tx.len()));
    }
    if tx[..MAGIC.len()] != MAGIC {
        return Err(Error::invalid_magic(tx[..MAGIC.len()].to_vec()));
    }
    Ok(())
}

/// Returns the chain-app identifier embedded in the envelope.
///
/// The header must have been validated with [`check_header`] first.
pub fn chain_app_id(tx: &[u8]) -> ChainAppId {
    let mut id = [0; CHAIN_APP_ID_LEN];
    id.copy_from_slice(&tx[MAGIC.len()..HEADER_LEN]);
    ChainAppId::from(id)
}

/// Returns the application payload following the envelope.
pub fn strip(tx: &[u8]) -> &[u8] {
    &tx[HEADER_LEN..]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn header_for(chain_id: &str) -> Vec<u8> {
        let mut header = MAGIC.to_vec();
        header.extend_from_slice(ChainAppId::from_chain_id(chain_id).as_bytes());
        header
    }

    #[test]
    fn check_header_cases() {
        struct Check {
            name: &'static str,
            header: Vec<u8>,
            expect_failure: bool,
        }

        let checks = vec![
            Check {
                name: "good header",
                header: [MAGIC.as_slice(), &[0x01, 0x02, 0x03, 0x04]].concat(),
                expect_failure: false,
            },
            Check {
                name: "header too short",
                header: [MAGIC.as_slice(), &[0x01, 0x02, 0x03]].concat(),
                expect_failure: true,
            },
            Check {
                name: "wrong magic",
                header: vec![0x23, 0xdd, 0x75, 0x78, 0x01, 0x02, 0x03, 0x04],
                expect_failure: true,
            },
            Check {
                name: "empty header",
                header: vec![],
                expect_failure: true,
            },
        ];

        for check in checks {
            let result = check_header(&check.header);
            assert_eq!(
                result.is_err(),
                check.expect_failure,
                "check '{}' returned {:?}",
                check.name,
                result
            );
        }
    }

    #[test]
    fn extracts_embedded_id() {
        let mut tx = header_for("KVStore");
        tx.extend_from_slice(b"k=v");
        check_header(&tx).unwrap();
        assert_eq!(chain_app_id(&tx), ChainAppId::from_chain_id("KVStore"));
    }

    #[test]
    fn strip_returns_exact_payload() {
        let mut tx = header_for("KVStore");
        tx.extend_from_slice(b"k=v");
        assert_eq!(strip(&tx), b"k=v");

        let bare = header_for("KVStore");
        assert_eq!(strip(&bare), b"");
    }
}
