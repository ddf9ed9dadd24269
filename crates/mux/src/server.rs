//! Host-facing server: accepts connections from the consensus host and
//! drives an [`Application`] over each of them.

use std::io::{Read, Write};
use std::net::TcpListener;
use std::os::unix::net::UnixListener;
use std::path::Path;
use std::thread;

use tracing::{debug, error, info};

use cometmux_proto::tendermint::abci::{
    request, response, Request, RequestApplySnapshotChunk, RequestCheckTx, RequestCommit,
    RequestExtendVote, RequestFinalizeBlock, RequestInfo, RequestInitChain, RequestListSnapshots,
    RequestLoadSnapshotChunk, RequestOfferSnapshot, RequestPrepareProposal,
    RequestProcessProposal, RequestQuery, RequestVerifyVoteExtension, Response,
    ResponseApplySnapshotChunk, ResponseCheckTx, ResponseCommit, ResponseEcho,
    ResponseException, ResponseExtendVote, ResponseFinalizeBlock, ResponseFlush, ResponseInfo,
    ResponseInitChain, ResponseListSnapshots, ResponseLoadSnapshotChunk, ResponseOfferSnapshot,
    ResponsePrepareProposal, ResponseProcessProposal, ResponseQuery,
    ResponseVerifyVoteExtension,
};

use crate::codec::Framed;
use crate::error::Error;

/// The surface of the Execution Protocol the consensus host calls.
///
/// The server clones the application once per accepted connection (the host
/// opens one per protocol lane) and serializes calls within a connection.
/// An `Err` return fails that call only: it reaches the host as an exception
/// response and the connection keeps serving.
pub trait Application: Send + Sync + Clone + 'static {
    fn info(&self, request: RequestInfo) -> Result<ResponseInfo, Error> {
        let _ = request;
        Ok(Default::default())
    }

    fn query(&self, request: RequestQuery) -> Result<ResponseQuery, Error> {
        let _ = request;
        Ok(Default::default())
    }

    fn check_tx(&self, request: RequestCheckTx) -> Result<ResponseCheckTx, Error> {
        let _ = request;
        Ok(Default::default())
    }

    fn init_chain(&self, request: RequestInitChain) -> Result<ResponseInitChain, Error> {
        let _ = request;
        Ok(Default::default())
    }

    fn prepare_proposal(
        &self,
        request: RequestPrepareProposal,
    ) -> Result<ResponsePrepareProposal, Error> {
        let _ = request;
        Ok(Default::default())
    }

    fn process_proposal(
        &self,
        request: RequestProcessProposal,
    ) -> Result<ResponseProcessProposal, Error> {
        let _ = request;
        Ok(Default::default())
    }

    fn finalize_block(
        &self,
        request: RequestFinalizeBlock,
    ) -> Result<ResponseFinalizeBlock, Error> {
        let _ = request;
        Ok(Default::default())
    }

    fn commit(&self, request: RequestCommit) -> Result<ResponseCommit, Error> {
        let _ = request;
        Ok(Default::default())
    }

    fn list_snapshots(
        &self,
        request: RequestListSnapshots,
    ) -> Result<ResponseListSnapshots, Error> {
        let _ = request;
        Ok(Default::default())
    }

    fn offer_snapshot(
        &self,
        request: RequestOfferSnapshot,
    ) -> Result<ResponseOfferSnapshot, Error> {
        let _ = request;
        Ok(Default::default())
    }

    fn load_snapshot_chunk(
        &self,
        request: RequestLoadSnapshotChunk,
    ) -> Result<ResponseLoadSnapshotChunk, Error> {
        let _ = request;
        Ok(Default::default())
    }

    fn apply_snapshot_chunk(
        &self,
        request: RequestApplySnapshotChunk,
    ) -> Result<ResponseApplySnapshotChunk, Error> {
        let _ = request;
        Ok(Default::default())
    }

    fn extend_vote(&self, request: RequestExtendVote) -> Result<ResponseExtendVote, Error> {
        let _ = request;
        Ok(Default::default())
    }

    fn verify_vote_extension(
        &self,
        request: RequestVerifyVoteExtension,
    ) -> Result<ResponseVerifyVoteExtension, Error> {
        let _ = request;
        Ok(Default::default())
    }
}

enum Listener {
    Unix(UnixListener),
    Tcp(TcpListener),
}

/// Blocking socket server for an [`Application`].
pub struct Server<A> {
    app: A,
    listener: Listener,
    address: String,
}

impl<A: Application> Server<A> {
    /// Binds the server to a `unix://<path>` or `tcp://<host>:<port>` address.
    pub fn bind(address: &str, app: A) -> Result<Self, Error> {
        let listener = if let Some(path) = address.strip_prefix("unix://") {
            let path = Path::new(path);
            if path.exists() {
                // stale socket from a previous run
                std::fs::remove_file(path).map_err(Error::io)?;
            }
            Listener::Unix(
                UnixListener::bind(path).map_err(|e| Error::transport(address.to_string(), e))?,
            )
        } else if let Some(addr) = address.strip_prefix("tcp://") {
            Listener::Tcp(
                TcpListener::bind(addr).map_err(|e| Error::transport(address.to_string(), e))?,
            )
        } else {
            return Err(Error::invalid_address(address.to_string()));
        };

        Ok(Self {
            app,
            listener,
            address: address.to_string(),
        })
    }

    /// Accepts connections forever, serving each on its own thread.
    pub fn listen(self) -> Result<(), Error> {
        info!(address = %self.address, "listening for connections from the consensus host");
        match self.listener {
            Listener::Unix(listener) => loop {
                let (stream, _) = listener.accept().map_err(Error::io)?;
                let app = self.app.clone();
                thread::spawn(move || serve_connection(Framed::new(stream), app));
            },
            Listener::Tcp(listener) => loop {
                let (stream, peer) = listener.accept().map_err(Error::io)?;
                debug!(peer = %peer, "accepted connection");
                let app = self.app.clone();
                thread::spawn(move || serve_connection(Framed::new(stream), app));
            },
        }
    }
}

fn serve_connection<S: Read + Write, A: Application>(mut framed: Framed<S>, app: A) {
    loop {
        let request: Request = match framed.receive() {
            Ok(Some(request)) => request,
            Ok(None) => {
                debug!("connection closed by the host");
                return;
            }
            Err(e) => {
                error!("failed to read request: {}", e);
                return;
            }
        };

        let value = match dispatch(&app, request) {
            Ok(value) => value,
            Err(e) => {
                error!("call failed: {}", e);
                response::Value::Exception(ResponseException {
                    error: e.to_string(),
                })
            }
        };

        let response = Response { value: Some(value) };
        if let Err(e) = framed.send(&response) {
            error!("failed to write response: {}", e);
            return;
        }
    }
}

fn dispatch<A: Application>(app: &A, request: Request) -> Result<response::Value, Error> {
    use request::Value;

    match request.value {
        Some(Value::Echo(echo)) => Ok(response::Value::Echo(ResponseEcho {
            message: echo.message,
        })),
        Some(Value::Flush(_)) => Ok(response::Value::Flush(ResponseFlush {})),
        Some(Value::Info(r)) => app.info(r).map(response::Value::Info),
        Some(Value::InitChain(r)) => app.init_chain(r).map(response::Value::InitChain),
        Some(Value::Query(r)) => app.query(r).map(response::Value::Query),
        Some(Value::CheckTx(r)) => app.check_tx(r).map(response::Value::CheckTx),
        Some(Value::Commit(r)) => app.commit(r).map(response::Value::Commit),
        Some(Value::ListSnapshots(r)) => app.list_snapshots(r).map(response::Value::ListSnapshots),
        Some(Value::OfferSnapshot(r)) => app.offer_snapshot(r).map(response::Value::OfferSnapshot),
        Some(Value::LoadSnapshotChunk(r)) => app
            .load_snapshot_chunk(r)
            .map(response::Value::LoadSnapshotChunk),
        Some(Value::ApplySnapshotChunk(r)) => app
            .apply_snapshot_chunk(r)
            .map(response::Value::ApplySnapshotChunk),
        Some(Value::PrepareProposal(r)) => app
            .prepare_proposal(r)
            .map(response::Value::PrepareProposal),
        Some(Value::ProcessProposal(r)) => app
            .process_proposal(r)
            .map(response::Value::ProcessProposal),
        Some(Value::ExtendVote(r)) => app.extend_vote(r).map(response::Value::ExtendVote),
        Some(Value::VerifyVoteExtension(r)) => app
            .verify_vote_extension(r)
            .map(response::Value::VerifyVoteExtension),
        Some(Value::FinalizeBlock(r)) => app.finalize_block(r).map(response::Value::FinalizeBlock),
        None => Err(Error::malformed_request("empty request envelope".to_string())),
    }
}
