//! Registry of [`BackendHandler`]s indexed by their chain-app identifier.

use std::collections::BTreeMap;

use tracing::info;

use crate::chain::client::{BackendClient, SocketClient};
use crate::chain::handler::BackendHandler;
use crate::config::{AppConfig, Config, ConnectionType};
use crate::error::Error;
use crate::genesis;
use crate::id::ChainAppId;

/// Registry of backend handlers, written once at startup and read-only
/// thereafter.
///
/// Iteration follows the canonical identifier order, so every walk over the
/// registry is deterministic.
#[derive(Default)]
pub struct Registry {
    handlers: BTreeMap<ChainAppId, BackendHandler>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the registry from the configuration, registering every
    /// configured application.
    pub fn from_config(config: &Config) -> Result<Self, Error> {
        let mut registry = Self::new();
        for app in &config.apps {
            registry.add(app)?;
        }
        Ok(registry)
    }

    /// Registers a chain application: derives its identifier, creates the
    /// transport client for its connection type, and preloads its initial
    /// application state.
    pub fn add(&mut self, app: &AppConfig) -> Result<(), Error> {
        let client: Box<dyn BackendClient> = match app.connection_type {
            ConnectionType::Socket => Box::new(SocketClient::new(app.address.clone())),
        };
        let init_app_state = genesis::initial_app_state(&app.home)?;
        self.add_handler(BackendHandler::new(
            app.chain_id.clone(),
            client,
            init_app_state,
        ))
    }

    /// Inserts a fully built handler, rejecting duplicate identifiers.
    pub fn add_handler(&mut self, handler: BackendHandler) -> Result<(), Error> {
        let id = handler.id();
        if self.handlers.contains_key(&id) {
            return Err(Error::duplicate_chain_app(
                handler.chain_id().to_string(),
                id,
            ));
        }
        info!(chain.id = %handler.chain_id(), app.id = %id, "registered application handler");
        self.handlers.insert(id, handler);
        Ok(())
    }

    pub fn get(&self, id: &ChainAppId) -> Option<&BackendHandler> {
        self.handlers.get(id)
    }

    pub fn get_by_chain_id(&self, chain_id: &str) -> Option<&BackendHandler> {
        self.handlers
            .values()
            .find(|handler| handler.chain_id() == chain_id)
    }

    /// Handlers in canonical identifier order.
    pub fn handlers(&self) -> impl Iterator<Item = &BackendHandler> {
        self.handlers.values()
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Connects every registered handler to its backend application.
    pub fn connect_all(&self) -> Result<(), Error> {
        for handler in self.handlers.values() {
            handler.connect()?;
        }
        Ok(())
    }
}
