//! Initial application state discovery for registered backends.

use std::path::Path;

use serde_derive::Deserialize;
use serde_json::value::RawValue;
use tracing::debug;

use crate::error::Error;

/// The slice of a genesis document the multiplexer cares about. The
/// application state is kept as raw JSON so the payload reaches the backend
/// byte-exact.
#[derive(Deserialize)]
struct GenesisDoc {
    #[serde(default)]
    app_state: Option<Box<RawValue>>,
}

/// Reads the initial application-state payload for a backend home directory.
///
/// A missing `{home}/config/genesis.json` yields empty state; a present but
/// malformed document is an error (fatal at startup).
pub fn initial_app_state(home: impl AsRef<Path>) -> Result<Vec<u8>, Error> {
    let path = home.as_ref().join("config").join("genesis.json");
    if !path.exists() {
        debug!(path = %path.display(), "no genesis document, starting with empty app state");
        return Ok(Vec::new());
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| Error::genesis_io(path.clone(), e))?;
    let genesis: GenesisDoc =
        serde_json::from_str(&contents).map_err(|e| Error::genesis_decode(path.clone(), e))?;

    Ok(genesis
        .app_state
        .map(|state| state.get().as_bytes().to_vec())
        .unwrap_or_default())
}
