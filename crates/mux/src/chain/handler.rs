//! Per-chain forwarding handler owning the transport client of one backend
//! application.

use tracing::{debug, info, info_span, Span};

use cometmux_proto::tendermint::abci::{
    RequestCheckTx, RequestCommit, RequestFinalizeBlock, RequestInfo, RequestInitChain,
    RequestPrepareProposal, RequestProcessProposal, RequestQuery, ResponseCheckTx, ResponseCommit,
    ResponseFinalizeBlock, ResponseInfo, ResponseInitChain, ResponsePrepareProposal,
    ResponseProcessProposal, ResponseQuery,
};

use crate::chain::client::BackendClient;
use crate::error::Error;
use crate::id::ChainAppId;

/// Handler for one registered chain application.
///
/// Owns the transport client and forwards the Execution Protocol calls the
/// multiplexer core routes to this chain. Created once at startup from the
/// configuration and never destroyed.
pub struct BackendHandler {
    id: ChainAppId,
    chain_id: String,
    client: Box<dyn BackendClient>,
    init_app_state: Vec<u8>,
    span: Span,
}

impl BackendHandler {
    pub fn new(
        chain_id: impl Into<String>,
        client: Box<dyn BackendClient>,
        init_app_state: Vec<u8>,
    ) -> Self {
        let chain_id = chain_id.into();
        let id = ChainAppId::from_chain_id(&chain_id);
        let span = info_span!("app", chain.id = %chain_id, app.id = %id);
        Self {
            id,
            chain_id,
            client,
            init_app_state,
            span,
        }
    }

    pub fn id(&self) -> ChainAppId {
        self.id
    }

    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    /// Starts the transport client unless it is already running.
    pub fn connect(&self) -> Result<(), Error> {
        let _enter = self.span.enter();
        if self.client.is_running() {
            info!("client already running");
            return Ok(());
        }
        self.client.start()?;
        info!("connected");
        Ok(())
    }

    pub fn info(&self, request: RequestInfo) -> Result<ResponseInfo, Error> {
        let _enter = self.span.enter();
        self.client.info(request)
    }

    pub fn query(&self, request: RequestQuery) -> Result<ResponseQuery, Error> {
        let _enter = self.span.enter();
        debug!(path = %request.path, "forwarding query");
        self.client.query(request)
    }

    pub fn check_tx(&self, request: RequestCheckTx) -> Result<ResponseCheckTx, Error> {
        let _enter = self.span.enter();
        debug!(len = request.tx.len(), "forwarding check_tx");
        self.client.check_tx(request)
    }

    /// Forwards an init-chain request rewritten for this chain: the chain-id
    /// and initial application state are the handler's own, everything else
    /// (validators, consensus params, initial height, genesis time) passes
    /// through unchanged.
    pub fn init_chain(&self, request: RequestInitChain) -> Result<ResponseInitChain, Error> {
        let _enter = self.span.enter();
        let mut request = request;
        request.chain_id = self.chain_id.clone();
        request.app_state_bytes = self.init_app_state.clone();
        debug!("forwarding init_chain");
        self.client.init_chain(request)
    }

    pub fn prepare_proposal(
        &self,
        request: RequestPrepareProposal,
    ) -> Result<ResponsePrepareProposal, Error> {
        let _enter = self.span.enter();
        self.client.prepare_proposal(request)
    }

    pub fn process_proposal(
        &self,
        request: RequestProcessProposal,
    ) -> Result<ResponseProcessProposal, Error> {
        let _enter = self.span.enter();
        debug!(txs = request.txs.len(), "forwarding process_proposal");
        self.client.process_proposal(request)
    }

    pub fn finalize_block(
        &self,
        request: RequestFinalizeBlock,
    ) -> Result<ResponseFinalizeBlock, Error> {
        let _enter = self.span.enter();
        debug!(txs = request.txs.len(), "forwarding finalize_block");
        self.client.finalize_block(request)
    }

    pub fn commit(&self, request: RequestCommit) -> Result<ResponseCommit, Error> {
        let _enter = self.span.enter();
        debug!("forwarding commit");
        self.client.commit(request)
    }
}
