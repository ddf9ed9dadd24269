//! Transport clients speaking the Execution Protocol toward one backend
//! chain application.

use std::net::TcpStream;
use std::os::unix::net::UnixStream;
use std::sync::Mutex;

use tracing::debug;

use cometmux_proto::tendermint::abci::{
    request, response, Request, RequestApplySnapshotChunk, RequestCheckTx, RequestCommit,
    RequestEcho, RequestExtendVote, RequestFinalizeBlock, RequestInfo, RequestInitChain,
    RequestListSnapshots, RequestLoadSnapshotChunk, RequestOfferSnapshot, RequestPrepareProposal,
    RequestProcessProposal, RequestQuery, RequestVerifyVoteExtension, Response,
    ResponseApplySnapshotChunk, ResponseCheckTx, ResponseCommit, ResponseEcho, ResponseExtendVote,
    ResponseFinalizeBlock, ResponseInfo, ResponseInitChain, ResponseListSnapshots,
    ResponseLoadSnapshotChunk, ResponseOfferSnapshot, ResponsePrepareProposal,
    ResponseProcessProposal, ResponseQuery, ResponseVerifyVoteExtension,
};

use crate::codec::Framed;
use crate::error::Error;

/// Client surface of the Execution Protocol: the operations the multiplexer
/// invokes against a backend chain application.
pub trait BackendClient: Send + Sync {
    /// Establishes the transport connection. Starting a running client is an
    /// idempotent no-op.
    fn start(&self) -> Result<(), Error>;

    /// Whether the transport connection is up.
    fn is_running(&self) -> bool;

    fn echo(&self, request: RequestEcho) -> Result<ResponseEcho, Error>;
    fn info(&self, request: RequestInfo) -> Result<ResponseInfo, Error>;
    fn query(&self, request: RequestQuery) -> Result<ResponseQuery, Error>;
    fn check_tx(&self, request: RequestCheckTx) -> Result<ResponseCheckTx, Error>;
    fn init_chain(&self, request: RequestInitChain) -> Result<ResponseInitChain, Error>;
    fn prepare_proposal(
        &self,
        request: RequestPrepareProposal,
    ) -> Result<ResponsePrepareProposal, Error>;
    fn process_proposal(
        &self,
        request: RequestProcessProposal,
    ) -> Result<ResponseProcessProposal, Error>;
    fn finalize_block(&self, request: RequestFinalizeBlock)
        -> Result<ResponseFinalizeBlock, Error>;
    fn commit(&self, request: RequestCommit) -> Result<ResponseCommit, Error>;
    fn list_snapshots(&self, request: RequestListSnapshots)
        -> Result<ResponseListSnapshots, Error>;
    fn offer_snapshot(&self, request: RequestOfferSnapshot)
        -> Result<ResponseOfferSnapshot, Error>;
    fn load_snapshot_chunk(
        &self,
        request: RequestLoadSnapshotChunk,
    ) -> Result<ResponseLoadSnapshotChunk, Error>;
    fn apply_snapshot_chunk(
        &self,
        request: RequestApplySnapshotChunk,
    ) -> Result<ResponseApplySnapshotChunk, Error>;
    fn extend_vote(&self, request: RequestExtendVote) -> Result<ResponseExtendVote, Error>;
    fn verify_vote_extension(
        &self,
        request: RequestVerifyVoteExtension,
    ) -> Result<ResponseVerifyVoteExtension, Error>;
}

enum Transport {
    Unix(Framed<UnixStream>),
    Tcp(Framed<TcpStream>),
}

impl Transport {
    fn send(&mut self, request: &Request) -> Result<(), Error> {
        match self {
            Transport::Unix(framed) => framed.send(request),
            Transport::Tcp(framed) => framed.send(request),
        }
    }

    fn receive(&mut self) -> Result<Option<Response>, Error> {
        match self {
            Transport::Unix(framed) => framed.receive(),
            Transport::Tcp(framed) => framed.receive(),
        }
    }
}

enum ClientState {
    /// Created but never started.
    Fresh,
    /// Transport established.
    Running(Transport),
    /// Transport establishment failed.
    Failed,
}

/// Execution Protocol client over a stream socket.
///
/// Addresses use the `unix://<path>` (primary) or `tcp://<host>:<port>`
/// scheme. The transport is dialed once by [`start`](BackendClient::start);
/// the client then serializes requests over the single connection.
pub struct SocketClient {
    address: String,
    state: Mutex<ClientState>,
}

impl SocketClient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            state: Mutex::new(ClientState::Fresh),
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    fn dial(&self) -> Result<Transport, Error> {
        if let Some(path) = self.address.strip_prefix("unix://") {
            let stream = UnixStream::connect(path)
                .map_err(|e| Error::transport(self.address.clone(), e))?;
            Ok(Transport::Unix(Framed::new(stream)))
        } else if let Some(addr) = self.address.strip_prefix("tcp://") {
            let stream =
                TcpStream::connect(addr).map_err(|e| Error::transport(self.address.clone(), e))?;
            stream
                .set_nodelay(true)
                .map_err(|e| Error::transport(self.address.clone(), e))?;
            Ok(Transport::Tcp(Framed::new(stream)))
        } else {
            Err(Error::invalid_address(self.address.clone()))
        }
    }

    /// Performs one request/response round trip over the running transport.
    fn request(&self, request: request::Value) -> Result<response::Value, Error> {
        let mut state = self.state.lock().expect("poisoned lock");
        let transport = match &mut *state {
            ClientState::Running(transport) => transport,
            ClientState::Fresh | ClientState::Failed => {
                return Err(Error::client_not_started(self.address.clone()))
            }
        };

        transport.send(&Request {
            value: Some(request),
        })?;

        let response = transport
            .receive()?
            .ok_or_else(|| Error::connection_closed(self.address.clone()))?;

        match response.value {
            Some(response::Value::Exception(exception)) => {
                Err(Error::backend_exception(exception.error))
            }
            Some(value) => Ok(value),
            None => Err(Error::unexpected_response("empty envelope".to_string())),
        }
    }
}

/// Sends one request variant and matches the response against the expected
/// variant, converting everything else into an error.
macro_rules! perform {
    ($self:expr, $variant:ident, $request:expr) => {
        match $self.request(request::Value::$variant($request))? {
            response::Value::$variant(response) => Ok(response),
            other => Err(Error::unexpected_response(variant_name(&other).to_string())),
        }
    };
}

impl BackendClient for SocketClient {
    fn start(&self) -> Result<(), Error> {
        let mut state = self.state.lock().expect("poisoned lock");
        if let ClientState::Running(_) = *state {
            return Ok(());
        }
        match self.dial() {
            Ok(transport) => {
                debug!(address = %self.address, "transport established");
                *state = ClientState::Running(transport);
                Ok(())
            }
            Err(e) => {
                *state = ClientState::Failed;
                Err(e)
            }
        }
    }

    fn is_running(&self) -> bool {
        matches!(
            *self.state.lock().expect("poisoned lock"),
            ClientState::Running(_)
        )
    }

    fn echo(&self, request: RequestEcho) -> Result<ResponseEcho, Error> {
        perform!(self, Echo, request)
    }

    fn info(&self, request: RequestInfo) -> Result<ResponseInfo, Error> {
        perform!(self, Info, request)
    }

    fn query(&self, request: RequestQuery) -> Result<ResponseQuery, Error> {
        perform!(self, Query, request)
    }

    fn check_tx(&self, request: RequestCheckTx) -> Result<ResponseCheckTx, Error> {
        perform!(self, CheckTx, request)
    }

    fn init_chain(&self, request: RequestInitChain) -> Result<ResponseInitChain, Error> {
        perform!(self, InitChain, request)
    }

    fn prepare_proposal(
        &self,
        request: RequestPrepareProposal,
    ) -> Result<ResponsePrepareProposal, Error> {
        perform!(self, PrepareProposal, request)
    }

    fn process_proposal(
        &self,
        request: RequestProcessProposal,
    ) -> Result<ResponseProcessProposal, Error> {
        perform!(self, ProcessProposal, request)
    }

    fn finalize_block(
        &self,
        request: RequestFinalizeBlock,
    ) -> Result<ResponseFinalizeBlock, Error> {
        perform!(self, FinalizeBlock, request)
    }

    fn commit(&self, request: RequestCommit) -> Result<ResponseCommit, Error> {
        perform!(self, Commit, request)
    }

    fn list_snapshots(
        &self,
        request: RequestListSnapshots,
    ) -> Result<ResponseListSnapshots, Error> {
        perform!(self, ListSnapshots, request)
    }

    fn offer_snapshot(
        &self,
        request: RequestOfferSnapshot,
    ) -> Result<ResponseOfferSnapshot, Error> {
        perform!(self, OfferSnapshot, request)
    }

    fn load_snapshot_chunk(
        &self,
        request: RequestLoadSnapshotChunk,
    ) -> Result<ResponseLoadSnapshotChunk, Error> {
        perform!(self, LoadSnapshotChunk, request)
    }

    fn apply_snapshot_chunk(
        &self,
        request: RequestApplySnapshotChunk,
    ) -> Result<ResponseApplySnapshotChunk, Error> {
        perform!(self, ApplySnapshotChunk, request)
    }

    fn extend_vote(&self, request: RequestExtendVote) -> Result<ResponseExtendVote, Error> {
        perform!(self, ExtendVote, request)
    }

    fn verify_vote_extension(
        &self,
        request: RequestVerifyVoteExtension,
    ) -> Result<ResponseVerifyVoteExtension, Error> {
        perform!(self, VerifyVoteExtension, request)
    }
}

fn variant_name(value: &response::Value) -> &'static str {
    match value {
        response::Value::Exception(_) => "exception",
        response::Value::Echo(_) => "echo",
        response::Value::Flush(_) => "flush",
        response::Value::Info(_) => "info",
        response::Value::InitChain(_) => "init_chain",
        response::Value::Query(_) => "query",
        response::Value::CheckTx(_) => "check_tx",
        response::Value::Commit(_) => "commit",
        response::Value::ListSnapshots(_) => "list_snapshots",
        response::Value::OfferSnapshot(_) => "offer_snapshot",
        response::Value::LoadSnapshotChunk(_) => "load_snapshot_chunk",
        response::Value::ApplySnapshotChunk(_) => "apply_snapshot_chunk",
        response::Value::PrepareProposal(_) => "prepare_proposal",
        response::Value::ProcessProposal(_) => "process_proposal",
        response::Value::ExtendVote(_) => "extend_vote",
        response::Value::VerifyVoteExtension(_) => "verify_vote_extension",
        response::Value::FinalizeBlock(_) => "finalize_block",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calls_on_a_fresh_client_are_rejected() {
        let client = SocketClient::new("unix:///tmp/nowhere.sock");
        assert!(!client.is_running());
        let result = client.echo(RequestEcho::default());
        assert!(result.is_err());
    }

    #[test]
    fn unknown_address_scheme_is_rejected() {
        let client = SocketClient::new("carrier-pigeon://coop");
        let result = client.start();
        assert!(result.is_err());
        assert!(!client.is_running());
    }
}
