//! Multiplexer configuration.

use std::path::{Path, PathBuf};

use serde_derive::{Deserialize, Serialize};

use crate::error::Error;

/// Default address the host-facing server listens on.
pub const DEFAULT_LISTEN_ADDR: &str = "unix:///tmp/cometmux.sock";

/// Transport flavor used to reach a backend application.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectionType {
    /// Stream socket; Unix-domain or TCP per the address scheme.
    Socket,
}

/// One registered chain application.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct AppConfig {
    /// Transport address of the application, e.g. `unix:///tmp/kvapp.sock`.
    #[serde(rename = "Address")]
    pub address: String,

    #[serde(rename = "ConnectionType")]
    pub connection_type: ConnectionType,

    /// Chain-id the application serves; the routing identifier derives from it.
    #[serde(rename = "ChainID")]
    pub chain_id: String,

    /// Home directory holding the application's `config/genesis.json`.
    #[serde(rename = "Home")]
    pub home: PathBuf,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub listen_addr: String,
    pub apps: Vec<AppConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            listen_addr: DEFAULT_LISTEN_ADDR.to_string(),
            apps: default_apps(),
        }
    }
}

/// The compiled-in application set used when no configuration file is given.
pub fn default_apps() -> Vec<AppConfig> {
    vec![
        AppConfig {
            address: "unix:///tmp/kvapp.sock".to_string(),
            connection_type: ConnectionType::Socket,
            chain_id: "KVStore".to_string(),
            home: PathBuf::from("/tmp/kvstore"),
        },
        AppConfig {
            address: "unix:///tmp/mind.sock".to_string(),
            connection_type: ConnectionType::Socket,
            chain_id: "sdk-app-2".to_string(),
            home: PathBuf::from("/tmp/sdk-app-2"),
        },
    ]
}

/// Attempts to load and parse the configuration file into a `Config` struct.
pub fn load(path: impl AsRef<Path>) -> Result<Config, Error> {
    let config_toml = std::fs::read_to_string(&path)
        .map_err(|e| Error::config_io(path.as_ref().to_path_buf(), e))?;

    let config = toml::from_str::<Config>(&config_toml[..]).map_err(Error::config_decode)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    #[test]
    fn parses_the_documented_surface() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cometmux.toml");
        fs::write(
            &path,
            r#"
            log_level = "debug"

            [[apps]]
            Address        = "unix:///tmp/kvapp.sock"
            ConnectionType = "socket"
            ChainID        = "KVStore"
            Home           = "/tmp/kvstore"

            [[apps]]
            Address        = "unix:///tmp/mind.sock"
            ConnectionType = "socket"
            ChainID        = "sdk-app-2"
            Home           = "/tmp/sdk-app-2"
            "#,
        )
        .unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.listen_addr, DEFAULT_LISTEN_ADDR);
        assert_eq!(config.apps.len(), 2);
        assert_eq!(config.apps[0].chain_id, "KVStore");
        assert_eq!(config.apps[0].connection_type, ConnectionType::Socket);
        assert_eq!(config.apps[1].home, PathBuf::from("/tmp/sdk-app-2"));
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cometmux.toml");
        fs::write(
            &path,
            r#"
            log_level = "info"
            not_a_real_option = 42

            [[apps]]
            Address        = "unix:///tmp/kvapp.sock"
            ConnectionType = "socket"
            ChainID        = "KVStore"
            Home           = "/tmp/kvstore"
            Moniker        = "ignored"
            "#,
        )
        .unwrap();

        let config = load(&path).unwrap();
        assert_eq!(config.apps.len(), 1);
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(load("/definitely/not/there.toml").is_err());
    }

    #[test]
    fn default_config_round_trips_through_toml() {
        let config = Config::default();
        let rendered = toml::to_string(&config).unwrap();
        let reparsed: Config = toml::from_str(&rendered).unwrap();
        assert_eq!(reparsed.apps.len(), config.apps.len());
        assert_eq!(reparsed.listen_addr, config.listen_addr);
    }
}
