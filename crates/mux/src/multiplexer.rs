//! The block-execution multiplexer core.
//!
//! Implements the host-facing [`Application`] contract by routing every
//! transaction to the backend owning it, fanning block-lifecycle calls out
//! across all registered backends in parallel, and merging the per-chain
//! responses into one deterministic result.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::thread;

use crossbeam_channel::bounded;
use tracing::{debug, error, info, warn};

use cometmux_proto::tendermint::abci::{
    response_apply_snapshot_chunk, response_process_proposal, ExecTxResult,
    RequestApplySnapshotChunk, RequestCheckTx, RequestCommit, RequestExtendVote,
    RequestFinalizeBlock, RequestInfo, RequestInitChain, RequestListSnapshots,
    RequestLoadSnapshotChunk, RequestOfferSnapshot, RequestPrepareProposal,
    RequestProcessProposal, RequestQuery, RequestVerifyVoteExtension,
    ResponseApplySnapshotChunk, ResponseCheckTx, ResponseCommit, ResponseExtendVote,
    ResponseFinalizeBlock, ResponseInfo, ResponseInitChain, ResponseListSnapshots,
    ResponseLoadSnapshotChunk, ResponseOfferSnapshot, ResponsePrepareProposal,
    ResponseProcessProposal, ResponseQuery, ResponseVerifyVoteExtension,
};

use crate::chain::handler::BackendHandler;
use crate::envelope;
use crate::error::Error;
use crate::id::ChainAppId;
use crate::registry::Registry;
use crate::server::Application;

/// Per-call partition of a block: for every registered handler, the
/// transactions routed to it (envelopes stripped) and the positions those
/// transactions held in the host's request.
struct Partition {
    txs: BTreeMap<ChainAppId, Vec<Vec<u8>>>,
    slots: BTreeMap<ChainAppId, Vec<usize>>,
}

/// The multiplexer presented to the consensus host as a single application.
///
/// The registry is write-once at startup and shared read-only with the
/// fan-out tasks, so a clone is just a handle onto the same backend set.
#[derive(Clone)]
pub struct Multiplexer {
    registry: Arc<Registry>,
}

impl Multiplexer {
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Connects to all registered applications.
    pub fn start(&self) -> Result<(), Error> {
        self.registry.connect_all()
    }

    /// Resolves the handler a transaction is routed to by its envelope.
    fn route<'a>(&'a self, tx: &[u8]) -> Result<&'a BackendHandler, Error> {
        envelope::check_header(tx)?;
        let id = envelope::chain_app_id(tx);
        self.registry
            .get(&id)
            .ok_or_else(|| Error::unknown_chain_app(id))
    }

    /// Splits a block's transactions by routing identifier. Every registered
    /// handler is represented, with an empty partition if it owns no
    /// transaction of this block.
    fn partition_txs(&self, txs: &[Vec<u8>]) -> Result<Partition, Error> {
        let mut partition = Partition {
            txs: self
                .registry
                .handlers()
                .map(|handler| (handler.id(), Vec::new()))
                .collect(),
            slots: self
                .registry
                .handlers()
                .map(|handler| (handler.id(), Vec::new()))
                .collect(),
        };

        for (idx, tx) in txs.iter().enumerate() {
            let id = self.route(tx)?.id();
            let entry = partition
                .txs
                .get_mut(&id)
                .expect("partition covers every registered handler");
            entry.push(envelope::strip(tx).to_vec());
            partition
                .slots
                .get_mut(&id)
                .expect("slot map covers every registered handler")
                .push(idx);
        }

        Ok(partition)
    }
}

impl Application for Multiplexer {
    /// Info is queried on every backend; the last successful response is
    /// returned (the host expects a single last-block hash, so no cross-chain
    /// aggregation happens here).
    fn info(&self, request: RequestInfo) -> Result<ResponseInfo, Error> {
        debug!(version = %request.version, "info called");
        let mut response = ResponseInfo::default();
        for handler in self.registry.handlers() {
            response = handler.info(request.clone())?;
        }
        Ok(response)
    }

    /// Relays a query to the application owning the chain-id it carries.
    fn query(&self, request: RequestQuery) -> Result<ResponseQuery, Error> {
        debug!(chain.id = %request.chain_id, path = %request.path, "query called");
        let handler = self
            .registry
            .get_by_chain_id(&request.chain_id)
            .ok_or_else(|| Error::no_handler_for_chain_id(request.chain_id.clone()))?;
        handler.query(request)
    }

    /// Identifies the target application from the transaction envelope and
    /// forwards the stripped transaction.
    fn check_tx(&self, request: RequestCheckTx) -> Result<ResponseCheckTx, Error> {
        debug!(len = request.tx.len(), "check_tx called");
        let handler = self.route(&request.tx)?;
        let payload = envelope::strip(&request.tx).to_vec();
        let mut request = request;
        request.tx = payload;
        handler.check_tx(request)
    }

    /// Initializes every registered chain in parallel. Each handler rewrites
    /// the chain-id and app-state of the request for its own chain; the
    /// per-chain responses are merged in canonical identifier order.
    fn init_chain(&self, request: RequestInitChain) -> Result<ResponseInitChain, Error> {
        debug!(chain.id = %request.chain_id, "init_chain called");

        let count = self.registry.len();
        let (completion, responses) = bounded(count);
        for handler in self.registry.handlers() {
            let registry = Arc::clone(&self.registry);
            let id = handler.id();
            let request = request.clone();
            let completion = completion.clone();
            thread::spawn(move || {
                let handler = registry.get(&id).expect("registry is write-once");
                let _ = completion.send((id, handler.init_chain(request)));
            });
        }
        drop(completion);

        let mut per_chain = BTreeMap::new();
        for _ in 0..count {
            let (id, result) = responses.recv().map_err(Error::channel_recv)?;
            match result {
                Ok(response) => {
                    per_chain.insert(id, response);
                }
                Err(e) => {
                    error!(app.id = %id, "init_chain failed on backend");
                    return Err(e);
                }
            }
        }

        let mut response = ResponseInitChain::default();
        for (_, chain_response) in per_chain {
            response
                .app_hash
                .extend_from_slice(&chain_response.app_hash);
            response.validators.extend(chain_response.validators);
            // consensus parameters should be equal across chain apps
            if chain_response.consensus_params.is_some() {
                response.consensus_params = chain_response.consensus_params;
            }
        }
        Ok(response)
    }

    /// The proposed transaction set passes through unchanged.
    fn prepare_proposal(
        &self,
        request: RequestPrepareProposal,
    ) -> Result<ResponsePrepareProposal, Error> {
        debug!(txs = request.txs.len(), "prepare_proposal called");
        Ok(ResponsePrepareProposal { txs: request.txs })
    }

    /// Partitions the proposed block across the applications owning its
    /// transactions and accepts it only if every one of them accepts.
    fn process_proposal(
        &self,
        request: RequestProcessProposal,
    ) -> Result<ResponseProcessProposal, Error> {
        use response_process_proposal::ProposalStatus;

        debug!(txs = request.txs.len(), height = request.height, "process_proposal called");

        let partition = self.partition_txs(&request.txs)?;
        let active: Vec<_> = partition
            .txs
            .into_iter()
            .filter(|(_, txs)| !txs.is_empty())
            .collect();

        let count = active.len();
        let (completion, responses) = bounded(count);
        for (id, txs) in active {
            let registry = Arc::clone(&self.registry);
            let mut chain_request = request.clone();
            chain_request.txs = txs;
            let completion = completion.clone();
            thread::spawn(move || {
                let handler = registry.get(&id).expect("registry is write-once");
                let _ = completion.send((id, handler.process_proposal(chain_request)));
            });
        }
        drop(completion);

        let mut status = ProposalStatus::Accept as i32;
        for _ in 0..count {
            let (id, result) = responses.recv().map_err(Error::channel_recv)?;
            let chain_response = result.map_err(|e| {
                error!(app.id = %id, "process_proposal failed on backend");
                e
            })?;
            if status == ProposalStatus::Accept as i32
                && chain_response.status != ProposalStatus::Accept as i32
            {
                status = chain_response.status;
            }
        }

        debug!(status, "process_proposal result");
        Ok(ResponseProcessProposal { status })
    }

    /// Executes the decided block. Transactions fan out to the owning
    /// applications (every registered application takes part, even with an
    /// empty partition); per-transaction results return to their original
    /// block positions, and the cross-chain fields concatenate in canonical
    /// identifier order.
    ///
    /// Execution here only prepares the state update; nothing is persisted
    /// until the commit call that follows, so an abort needs no rollback.
    fn finalize_block(&self, request: RequestFinalizeBlock) -> Result<ResponseFinalizeBlock, Error> {
        debug!(txs = request.txs.len(), height = request.height, "finalize_block called");

        let Partition { txs, mut slots } = self.partition_txs(&request.txs)?;

        let count = self.registry.len();
        let (completion, responses) = bounded(count);
        for (id, txs) in txs {
            let registry = Arc::clone(&self.registry);
            let mut chain_request = request.clone();
            chain_request.txs = txs;
            let completion = completion.clone();
            thread::spawn(move || {
                let handler = registry.get(&id).expect("registry is write-once");
                let _ = completion.send((id, handler.finalize_block(chain_request)));
            });
        }
        drop(completion);

        let mut response = ResponseFinalizeBlock {
            tx_results: vec![ExecTxResult::default(); request.txs.len()],
            ..Default::default()
        };

        let mut per_chain = BTreeMap::new();
        for _ in 0..count {
            let (id, result) = responses.recv().map_err(Error::channel_recv)?;
            let chain_response = result.map_err(|e| {
                error!(app.id = %id, "finalize_block failed on backend");
                e
            })?;
            // consensus parameters are assumed equal across chain apps
            if response.consensus_param_updates.is_none() {
                response.consensus_param_updates = chain_response.consensus_param_updates.clone();
            }
            per_chain.insert(id, chain_response);
        }

        for (id, chain_response) in per_chain {
            let chain_slots = slots
                .remove(&id)
                .expect("slot map covers every registered handler");
            if chain_response.tx_results.len() != chain_slots.len() {
                warn!(
                    app.id = %id,
                    expected = chain_slots.len(),
                    got = chain_response.tx_results.len(),
                    "tx_results length does not match partition size"
                );
            }
            let ResponseFinalizeBlock {
                events,
                tx_results,
                validator_updates,
                app_hash,
                ..
            } = chain_response;

            for (idx, tx_result) in tx_results.into_iter().enumerate() {
                if let Some(&slot) = chain_slots.get(idx) {
                    response.tx_results[slot] = tx_result;
                }
            }

            response.app_hash.extend_from_slice(&app_hash);
            response.validator_updates.extend(validator_updates);
            response.events.extend(events);
        }

        Ok(response)
    }

    /// Commits every chain in canonical identifier order. The last retain
    /// height wins; a divergence between chains is logged, not fatal.
    fn commit(&self, request: RequestCommit) -> Result<ResponseCommit, Error> {
        debug!("commit called");
        let mut response: Option<ResponseCommit> = None;
        for handler in self.registry.handlers() {
            let chain_response = handler.commit(request.clone())?;
            if let Some(previous) = &response {
                if previous.retain_height != chain_response.retain_height {
                    info!(
                        chain.id = %handler.chain_id(),
                        height = chain_response.retain_height,
                        prev_height = previous.retain_height,
                        "unexpected retain height divergence"
                    );
                }
            }
            response = Some(chain_response);
        }
        Ok(response.unwrap_or_default())
    }

    // Cross-chain state-sync semantics are undefined; the snapshot surface
    // answers without contacting any backend.

    fn list_snapshots(&self, _request: RequestListSnapshots) -> Result<ResponseListSnapshots, Error> {
        debug!("list_snapshots called");
        Ok(ResponseListSnapshots::default())
    }

    fn offer_snapshot(&self, _request: RequestOfferSnapshot) -> Result<ResponseOfferSnapshot, Error> {
        debug!("offer_snapshot called");
        Ok(ResponseOfferSnapshot::default())
    }

    fn load_snapshot_chunk(
        &self,
        _request: RequestLoadSnapshotChunk,
    ) -> Result<ResponseLoadSnapshotChunk, Error> {
        debug!("load_snapshot_chunk called");
        Ok(ResponseLoadSnapshotChunk::default())
    }

    fn apply_snapshot_chunk(
        &self,
        _request: RequestApplySnapshotChunk,
    ) -> Result<ResponseApplySnapshotChunk, Error> {
        debug!("apply_snapshot_chunk called");
        Ok(ResponseApplySnapshotChunk {
            result: response_apply_snapshot_chunk::Result::Accept as i32,
            ..Default::default()
        })
    }

    fn extend_vote(&self, _request: RequestExtendVote) -> Result<ResponseExtendVote, Error> {
        debug!("extend_vote called");
        Ok(ResponseExtendVote::default())
    }

    fn verify_vote_extension(
        &self,
        _request: RequestVerifyVoteExtension,
    ) -> Result<ResponseVerifyVoteExtension, Error> {
        debug!("verify_vote_extension called");
        Ok(ResponseVerifyVoteExtension::default())
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::sync::Mutex;

    use cometmux_proto::tendermint::abci::{
        Event, EventAttribute, RequestEcho, ResponseEcho, ValidatorUpdate,
    };
    use cometmux_proto::tendermint::crypto::{public_key, PublicKey};
    use cometmux_proto::tendermint::types::{BlockParams, ConsensusParams};

    use crate::chain::client::BackendClient;
    use crate::envelope::MAGIC;

    use super::*;

    #[derive(Default)]
    struct MockState {
        start_calls: AtomicUsize,
        running: AtomicBool,
        check_requests: Mutex<Vec<RequestCheckTx>>,
        init_requests: Mutex<Vec<RequestInitChain>>,
        process_requests: Mutex<Vec<RequestProcessProposal>>,
        finalize_requests: Mutex<Vec<RequestFinalizeBlock>>,
    }

    /// Scriptable stand-in for a backend transport client. Canned responses
    /// are returned for the calls a test cares about; `fail_with` makes every
    /// forwarded call error out.
    #[derive(Clone, Default)]
    struct MockClient {
        state: Arc<MockState>,
        info_response: Option<ResponseInfo>,
        query_response: Option<ResponseQuery>,
        check_response: Option<ResponseCheckTx>,
        init_response: Option<ResponseInitChain>,
        process_response: Option<ResponseProcessProposal>,
        finalize_response: Option<ResponseFinalizeBlock>,
        commit_response: Option<ResponseCommit>,
        fail_with: Option<String>,
    }

    impl MockClient {
        fn failing(message: &str) -> Self {
            Self {
                fail_with: Some(message.to_string()),
                ..Default::default()
            }
        }

        fn fail_if_scripted(&self) -> Result<(), Error> {
            match &self.fail_with {
                Some(message) => Err(Error::backend_exception(message.clone())),
                None => Ok(()),
            }
        }
    }

    impl BackendClient for MockClient {
        fn start(&self) -> Result<(), Error> {
            self.state.start_calls.fetch_add(1, Ordering::SeqCst);
            self.state.running.store(true, Ordering::SeqCst);
            Ok(())
        }

        fn is_running(&self) -> bool {
            self.state.running.load(Ordering::SeqCst)
        }

        fn echo(&self, request: RequestEcho) -> Result<ResponseEcho, Error> {
            Ok(ResponseEcho {
                message: request.message,
            })
        }

        fn info(&self, _request: RequestInfo) -> Result<ResponseInfo, Error> {
            self.fail_if_scripted()?;
            Ok(self.info_response.clone().unwrap_or_default())
        }

        fn query(&self, _request: RequestQuery) -> Result<ResponseQuery, Error> {
            self.fail_if_scripted()?;
            Ok(self.query_response.clone().unwrap_or_default())
        }

        fn check_tx(&self, request: RequestCheckTx) -> Result<ResponseCheckTx, Error> {
            self.fail_if_scripted()?;
            self.state.check_requests.lock().unwrap().push(request);
            Ok(self.check_response.clone().unwrap_or_default())
        }

        fn init_chain(&self, request: RequestInitChain) -> Result<ResponseInitChain, Error> {
            self.fail_if_scripted()?;
            self.state.init_requests.lock().unwrap().push(request);
            Ok(self.init_response.clone().unwrap_or_default())
        }

        fn prepare_proposal(
            &self,
            request: RequestPrepareProposal,
        ) -> Result<ResponsePrepareProposal, Error> {
            self.fail_if_scripted()?;
            Ok(ResponsePrepareProposal { txs: request.txs })
        }

        fn process_proposal(
            &self,
            request: RequestProcessProposal,
        ) -> Result<ResponseProcessProposal, Error> {
            self.fail_if_scripted()?;
            self.state.process_requests.lock().unwrap().push(request);
            Ok(self.process_response.clone().unwrap_or_default())
        }

        fn finalize_block(
            &self,
            request: RequestFinalizeBlock,
        ) -> Result<ResponseFinalizeBlock, Error> {
            self.fail_if_scripted()?;
            self.state.finalize_requests.lock().unwrap().push(request);
            Ok(self.finalize_response.clone().unwrap_or_default())
        }

        fn commit(&self, _request: RequestCommit) -> Result<ResponseCommit, Error> {
            self.fail_if_scripted()?;
            Ok(self.commit_response.clone().unwrap_or_default())
        }

        fn list_snapshots(
            &self,
            _request: RequestListSnapshots,
        ) -> Result<ResponseListSnapshots, Error> {
            self.fail_if_scripted()?;
            Ok(Default::default())
        }

        fn offer_snapshot(
            &self,
            _request: RequestOfferSnapshot,
        ) -> Result<ResponseOfferSnapshot, Error> {
            self.fail_if_scripted()?;
            Ok(Default::default())
        }

        fn load_snapshot_chunk(
            &self,
            _request: RequestLoadSnapshotChunk,
        ) -> Result<ResponseLoadSnapshotChunk, Error> {
            self.fail_if_scripted()?;
            Ok(Default::default())
        }

        fn apply_snapshot_chunk(
            &self,
            _request: RequestApplySnapshotChunk,
        ) -> Result<ResponseApplySnapshotChunk, Error> {
            self.fail_if_scripted()?;
            Ok(Default::default())
        }

        fn extend_vote(&self, _request: RequestExtendVote) -> Result<ResponseExtendVote, Error> {
            self.fail_if_scripted()?;
            Ok(Default::default())
        }

        fn verify_vote_extension(
            &self,
            _request: RequestVerifyVoteExtension,
        ) -> Result<ResponseVerifyVoteExtension, Error> {
            self.fail_if_scripted()?;
            Ok(Default::default())
        }
    }

    fn mux_of(clients: Vec<(&str, MockClient)>) -> Multiplexer {
        let mut registry = Registry::new();
        for (chain_id, client) in clients {
            registry
                .add_handler(BackendHandler::new(chain_id, Box::new(client), Vec::new()))
                .unwrap();
        }
        Multiplexer::new(Arc::new(registry))
    }

    fn tx_for(chain_id: &str, payload: &[u8]) -> Vec<u8> {
        let mut tx = MAGIC.to_vec();
        tx.extend_from_slice(ChainAppId::from_chain_id(chain_id).as_bytes());
        tx.extend_from_slice(payload);
        tx
    }

    fn validator(key: &[u8], power: i64) -> ValidatorUpdate {
        ValidatorUpdate {
            pub_key: Some(PublicKey {
                sum: Some(public_key::Sum::Ed25519(key.to_vec())),
            }),
            power,
        }
    }

    fn event(kind: &str, key: &str, value: &str) -> Event {
        Event {
            r#type: kind.to_string(),
            attributes: vec![EventAttribute {
                key: key.to_string(),
                value: value.to_string(),
                index: false,
            }],
        }
    }

    fn block_params(max_bytes: i64, max_gas: i64) -> ConsensusParams {
        ConsensusParams {
            block: Some(BlockParams { max_bytes, max_gas }),
            ..Default::default()
        }
    }

    fn tx_result(info: &str, gas: i64) -> ExecTxResult {
        ExecTxResult {
            info: info.to_string(),
            gas_wanted: gas,
            gas_used: gas,
            ..Default::default()
        }
    }

    #[test]
    fn route_resolves_registered_chains() {
        let mux = mux_of(vec![("myChain", MockClient::default())]);

        let handler = mux.route(&tx_for("myChain", &[])).unwrap();
        assert_eq!(handler.chain_id(), "myChain");

        // valid header, unregistered chain
        assert!(mux.route(&tx_for("otherChain", &[])).is_err());

        // short header
        let mut short = MAGIC.to_vec();
        short.push(0x12);
        assert!(mux.route(&short).is_err());
    }

    #[test]
    fn check_tx_strips_the_envelope() {
        let client = MockClient::default();
        let state = Arc::clone(&client.state);
        let mux = mux_of(vec![("KVStore", client)]);

        let response = mux.check_tx(RequestCheckTx {
            tx: tx_for("KVStore", b"k=v"),
            ..Default::default()
        });
        assert_eq!(response.unwrap().code, 0);

        let seen = state.check_requests.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].tx, b"k=v");
    }

    #[test]
    fn check_tx_rejects_bad_magic() {
        let client = MockClient::default();
        let state = Arc::clone(&client.state);
        let mux = mux_of(vec![("KVStore", client)]);

        let mut tx = vec![0x23, 0xdd, 0x75, 0x78];
        tx.extend_from_slice(ChainAppId::from_chain_id("KVStore").as_bytes());
        tx.extend_from_slice(b"payload");

        assert!(mux.check_tx(RequestCheckTx { tx, ..Default::default() }).is_err());
        assert!(state.check_requests.lock().unwrap().is_empty());
    }

    #[test]
    fn check_tx_rejects_short_header() {
        let mux = mux_of(vec![("KVStore", MockClient::default())]);
        let mut tx = MAGIC.to_vec();
        tx.push(0x12);
        assert!(mux.check_tx(RequestCheckTx { tx, ..Default::default() }).is_err());
    }

    #[test]
    fn query_routes_by_chain_id() {
        let client = MockClient {
            query_response: Some(ResponseQuery {
                value: b"v".to_vec(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let mux = mux_of(vec![("KVStore", client)]);

        let response = mux
            .query(RequestQuery {
                chain_id: "KVStore".to_string(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(response.value, b"v");
    }

    #[test]
    fn query_to_unknown_chain_fails() {
        let mux = mux_of(vec![("KVStore", MockClient::default())]);
        let err = mux
            .query(RequestQuery {
                chain_id: "nope".to_string(),
                ..Default::default()
            })
            .unwrap_err();
        assert!(err
            .to_string()
            .contains("no application handler found for chain-id 'nope'"));
    }

    #[test]
    fn info_returns_the_last_response() {
        // id("beta") = a295e0bd sorts before id("alpha") = be76331b
        let alpha = MockClient {
            info_response: Some(ResponseInfo {
                data: "alpha".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let beta = MockClient {
            info_response: Some(ResponseInfo {
                data: "beta".to_string(),
                ..Default::default()
            }),
            ..Default::default()
        };
        let mux = mux_of(vec![("alpha", alpha), ("beta", beta)]);

        let response = mux.info(RequestInfo::default()).unwrap();
        assert_eq!(response.data, "alpha");
    }

    #[test]
    fn info_aborts_on_the_first_error() {
        let mux = mux_of(vec![
            ("alpha", MockClient::default()),
            ("beta", MockClient::failing("backend down")),
        ]);
        assert!(mux.info(RequestInfo::default()).is_err());
    }

    #[test]
    fn init_chain_rewrites_the_request_per_chain() {
        let client = MockClient::default();
        let state = Arc::clone(&client.state);

        let mut registry = Registry::new();
        registry
            .add_handler(BackendHandler::new(
                "chain1",
                Box::new(client),
                b"{\"accounts\":[]}".to_vec(),
            ))
            .unwrap();
        let mux = Multiplexer::new(Arc::new(registry));

        mux.init_chain(RequestInitChain {
            chain_id: "initialChain".to_string(),
            app_state_bytes: b"host-state".to_vec(),
            initial_height: 7,
            ..Default::default()
        })
        .unwrap();

        let seen = state.init_requests.lock().unwrap();
        assert_eq!(seen.len(), 1);
        assert_eq!(seen[0].chain_id, "chain1");
        assert_eq!(seen[0].app_state_bytes, b"{\"accounts\":[]}");
        assert_eq!(seen[0].initial_height, 7);
    }

    #[test]
    fn init_chain_merges_in_identifier_order() {
        // id("chain2") = 38acb5e7 sorts before id("chain1") = 720f9ab5
        let chain1 = MockClient {
            init_response: Some(ResponseInitChain {
                consensus_params: Some(block_params(9, 9)),
                validators: vec![validator(&[1, 2, 3], 0)],
                app_hash: vec![0x11],
            }),
            ..Default::default()
        };
        let chain2 = MockClient {
            init_response: Some(ResponseInitChain {
                consensus_params: Some(block_params(1, 4)),
                validators: vec![validator(&[3, 4, 5], 0), validator(&[6, 7, 8], 0)],
                app_hash: vec![0x22],
            }),
            ..Default::default()
        };
        let mux = mux_of(vec![("chain1", chain1), ("chain2", chain2)]);

        let response = mux.init_chain(RequestInitChain::default()).unwrap();

        assert_eq!(response.app_hash, vec![0x22, 0x11]);
        assert_eq!(
            response.validators,
            vec![
                validator(&[3, 4, 5], 0),
                validator(&[6, 7, 8], 0),
                validator(&[1, 2, 3], 0),
            ]
        );
        // last non-nil in identifier order
        assert_eq!(response.consensus_params, Some(block_params(9, 9)));
    }

    #[test]
    fn init_chain_fails_when_one_backend_fails() {
        let chain1 = MockClient {
            init_response: Some(ResponseInitChain {
                app_hash: vec![0xde, 0xad],
                ..Default::default()
            }),
            ..Default::default()
        };
        let mux = mux_of(vec![
            ("chain1", chain1),
            ("chain2", MockClient::failing("error returned from chain 2")),
        ]);
        assert!(mux.init_chain(RequestInitChain::default()).is_err());
    }

    #[test]
    fn init_chain_fails_when_all_backends_fail() {
        let mux = mux_of(vec![
            ("chain1", MockClient::failing("error returned from chain 1")),
            ("chain2", MockClient::failing("error returned from chain 2")),
        ]);
        assert!(mux.init_chain(RequestInitChain::default()).is_err());
    }

    #[test]
    fn prepare_proposal_passes_transactions_through() {
        let mux = mux_of(vec![("KVStore", MockClient::default())]);
        let txs = vec![tx_for("KVStore", b"a"), tx_for("KVStore", b"b")];
        let response = mux
            .prepare_proposal(RequestPrepareProposal {
                txs: txs.clone(),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(response.txs, txs);
    }

    #[test]
    fn process_proposal_accepts_when_all_accept() {
        use response_process_proposal::ProposalStatus;

        let accepting = || MockClient {
            process_response: Some(ResponseProcessProposal {
                status: ProposalStatus::Accept as i32,
            }),
            ..Default::default()
        };
        let mux = mux_of(vec![("alpha", accepting()), ("beta", accepting())]);

        let response = mux
            .process_proposal(RequestProcessProposal {
                txs: vec![tx_for("alpha", b"a0"), tx_for("beta", b"b0")],
                ..Default::default()
            })
            .unwrap();
        assert_eq!(response.status, ProposalStatus::Accept as i32);
    }

    #[test]
    fn process_proposal_rejects_when_any_rejects() {
        use response_process_proposal::ProposalStatus;

        let accepting = MockClient {
            process_response: Some(ResponseProcessProposal {
                status: ProposalStatus::Accept as i32,
            }),
            ..Default::default()
        };
        let rejecting = MockClient {
            process_response: Some(ResponseProcessProposal {
                status: ProposalStatus::Reject as i32,
            }),
            ..Default::default()
        };
        let mux = mux_of(vec![("alpha", accepting), ("beta", rejecting)]);

        let response = mux
            .process_proposal(RequestProcessProposal {
                txs: vec![tx_for("alpha", b"a0"), tx_for("beta", b"b0")],
                ..Default::default()
            })
            .unwrap();
        assert_eq!(response.status, ProposalStatus::Reject as i32);
    }

    #[test]
    fn process_proposal_dispatches_only_owning_chains() {
        let alpha = MockClient::default();
        let beta = MockClient::default();
        let alpha_state = Arc::clone(&alpha.state);
        let beta_state = Arc::clone(&beta.state);
        let mux = mux_of(vec![("alpha", alpha), ("beta", beta)]);

        mux.process_proposal(RequestProcessProposal {
            txs: vec![tx_for("alpha", b"a0"), tx_for("alpha", b"a1")],
            ..Default::default()
        })
        .unwrap();

        let alpha_seen = alpha_state.process_requests.lock().unwrap();
        assert_eq!(alpha_seen.len(), 1);
        assert_eq!(alpha_seen[0].txs, vec![b"a0".to_vec(), b"a1".to_vec()]);
        assert!(beta_state.process_requests.lock().unwrap().is_empty());
    }

    #[test]
    fn process_proposal_fails_on_unroutable_tx() {
        let mux = mux_of(vec![("alpha", MockClient::default())]);
        let result = mux.process_proposal(RequestProcessProposal {
            txs: vec![tx_for("alpha", b"a0"), tx_for("unregistered", b"x")],
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn process_proposal_fails_on_backend_error() {
        let mux = mux_of(vec![("alpha", MockClient::failing("boom"))]);
        let result = mux.process_proposal(RequestProcessProposal {
            txs: vec![tx_for("alpha", b"a0")],
            ..Default::default()
        });
        assert!(result.is_err());
    }

    // Mixed two-chain block: per-transaction results return to their block
    // positions while the cross-chain fields concatenate in identifier order.
    // id("anotherChain") = 1d39ce5d sorts before id("myChain") = 39cadb5d.
    #[test]
    fn finalize_block_restores_host_ordering() {
        let my_chain = MockClient {
            finalize_response: Some(ResponseFinalizeBlock {
                events: vec![
                    event("myChain-Attr1", "k1", "val1"),
                    event("myChain-Attr2", "k2", "val2"),
                ],
                tx_results: (11..=15).map(|gas| tx_result("myChain", gas)).collect(),
                validator_updates: vec![validator(&[1, 2, 3], 50), validator(&[3, 4, 5], 60)],
                consensus_param_updates: Some(block_params(1024, 4000)),
                app_hash: vec![0xff, 0xf1, 0x02, 0x01],
            }),
            ..Default::default()
        };
        let another_chain = MockClient {
            finalize_response: Some(ResponseFinalizeBlock {
                events: vec![event("anotherChain-Attr1", "x1", "y1")],
                tx_results: (21..=25).map(|gas| tx_result("anotherChain", gas)).collect(),
                validator_updates: vec![validator(&[6, 7, 8], 70)],
                consensus_param_updates: Some(block_params(1024, 4000)),
                app_hash: vec![0xa1, 0xb1, 0xc1, 0xd1],
            }),
            ..Default::default()
        };
        let my_state = Arc::clone(&my_chain.state);
        let another_state = Arc::clone(&another_chain.state);
        let mux = mux_of(vec![("myChain", my_chain), ("anotherChain", another_chain)]);

        let response = mux
            .finalize_block(RequestFinalizeBlock {
                txs: vec![
                    tx_for("myChain", b"m0"),
                    tx_for("anotherChain", b"a0"),
                    tx_for("anotherChain", b"a1"),
                    tx_for("myChain", b"m1"),
                    tx_for("myChain", b"m2"),
                    tx_for("myChain", b"m3"),
                    tx_for("anotherChain", b"a2"),
                    tx_for("myChain", b"m4"),
                    tx_for("anotherChain", b"a3"),
                    tx_for("anotherChain", b"a4"),
                ],
                ..Default::default()
            })
            .unwrap();

        let expected_results = vec![
            tx_result("myChain", 11),
            tx_result("anotherChain", 21),
            tx_result("anotherChain", 22),
            tx_result("myChain", 12),
            tx_result("myChain", 13),
            tx_result("myChain", 14),
            tx_result("anotherChain", 23),
            tx_result("myChain", 15),
            tx_result("anotherChain", 24),
            tx_result("anotherChain", 25),
        ];
        assert_eq!(response.tx_results, expected_results);

        assert_eq!(
            response.app_hash,
            vec![0xa1, 0xb1, 0xc1, 0xd1, 0xff, 0xf1, 0x02, 0x01]
        );
        assert_eq!(
            response.events,
            vec![
                event("anotherChain-Attr1", "x1", "y1"),
                event("myChain-Attr1", "k1", "val1"),
                event("myChain-Attr2", "k2", "val2"),
            ]
        );
        assert_eq!(
            response.validator_updates,
            vec![
                validator(&[6, 7, 8], 70),
                validator(&[1, 2, 3], 50),
                validator(&[3, 4, 5], 60),
            ]
        );
        assert_eq!(
            response.consensus_param_updates,
            Some(block_params(1024, 4000))
        );

        // each backend received its own stripped partition, in block order
        let my_seen = my_state.finalize_requests.lock().unwrap();
        assert_eq!(
            my_seen[0].txs,
            vec![
                b"m0".to_vec(),
                b"m1".to_vec(),
                b"m2".to_vec(),
                b"m3".to_vec(),
                b"m4".to_vec()
            ]
        );
        let another_seen = another_state.finalize_requests.lock().unwrap();
        assert_eq!(
            another_seen[0].txs,
            vec![
                b"a0".to_vec(),
                b"a1".to_vec(),
                b"a2".to_vec(),
                b"a3".to_vec(),
                b"a4".to_vec()
            ]
        );
    }

    #[test]
    fn finalize_block_dispatches_empty_partitions() {
        let alpha = MockClient::default();
        let beta = MockClient::default();
        let alpha_state = Arc::clone(&alpha.state);
        let beta_state = Arc::clone(&beta.state);
        let mux = mux_of(vec![("alpha", alpha), ("beta", beta)]);

        mux.finalize_block(RequestFinalizeBlock {
            txs: vec![tx_for("alpha", b"a0")],
            ..Default::default()
        })
        .unwrap();

        assert_eq!(alpha_state.finalize_requests.lock().unwrap().len(), 1);
        let beta_seen = beta_state.finalize_requests.lock().unwrap();
        assert_eq!(beta_seen.len(), 1);
        assert!(beta_seen[0].txs.is_empty());
    }

    #[test]
    fn finalize_block_pads_short_result_sets() {
        let alpha = MockClient {
            finalize_response: Some(ResponseFinalizeBlock {
                tx_results: vec![tx_result("alpha", 1)],
                ..Default::default()
            }),
            ..Default::default()
        };
        let mux = mux_of(vec![("alpha", alpha)]);

        let response = mux
            .finalize_block(RequestFinalizeBlock {
                txs: vec![
                    tx_for("alpha", b"a0"),
                    tx_for("alpha", b"a1"),
                    tx_for("alpha", b"a2"),
                ],
                ..Default::default()
            })
            .unwrap();

        assert_eq!(response.tx_results.len(), 3);
        assert_eq!(response.tx_results[0], tx_result("alpha", 1));
        assert_eq!(response.tx_results[1], ExecTxResult::default());
        assert_eq!(response.tx_results[2], ExecTxResult::default());
    }

    #[test]
    fn finalize_block_fails_on_unroutable_tx() {
        let mux = mux_of(vec![("alpha", MockClient::default())]);
        let result = mux.finalize_block(RequestFinalizeBlock {
            txs: vec![tx_for("unregistered", b"x")],
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn finalize_block_fails_on_backend_error() {
        let mux = mux_of(vec![
            ("alpha", MockClient::default()),
            ("beta", MockClient::failing("halted")),
        ]);
        let result = mux.finalize_block(RequestFinalizeBlock {
            txs: vec![tx_for("alpha", b"a0"), tx_for("beta", b"b0")],
            ..Default::default()
        });
        assert!(result.is_err());
    }

    #[test]
    fn commit_returns_the_last_retain_height() {
        // id("beta") sorts before id("alpha"), so alpha commits last
        let alpha = MockClient {
            commit_response: Some(ResponseCommit { retain_height: 5 }),
            ..Default::default()
        };
        let beta = MockClient {
            commit_response: Some(ResponseCommit { retain_height: 7 }),
            ..Default::default()
        };
        let mux = mux_of(vec![("alpha", alpha), ("beta", beta)]);

        let response = mux.commit(RequestCommit::default()).unwrap();
        assert_eq!(response.retain_height, 5);
    }

    #[test]
    fn commit_aborts_on_backend_error() {
        let mux = mux_of(vec![("alpha", MockClient::failing("commit failed"))]);
        assert!(mux.commit(RequestCommit::default()).is_err());
    }

    #[test]
    fn snapshot_calls_never_reach_backends() {
        use response_apply_snapshot_chunk::Result as ChunkResult;

        // a failing client proves the backend is never consulted
        let mux = mux_of(vec![("alpha", MockClient::failing("must not be called"))]);

        assert!(mux.list_snapshots(RequestListSnapshots::default()).is_ok());
        assert!(mux.offer_snapshot(RequestOfferSnapshot::default()).is_ok());
        assert!(mux
            .load_snapshot_chunk(RequestLoadSnapshotChunk::default())
            .is_ok());
        let applied = mux
            .apply_snapshot_chunk(RequestApplySnapshotChunk::default())
            .unwrap();
        assert_eq!(applied.result, ChunkResult::Accept as i32);

        assert!(mux.extend_vote(RequestExtendVote::default()).is_ok());
        assert!(mux
            .verify_vote_extension(RequestVerifyVoteExtension::default())
            .is_ok());
    }

    #[test]
    fn connect_is_idempotent() {
        let client = MockClient::default();
        let state = Arc::clone(&client.state);
        let mux = mux_of(vec![("alpha", client)]);

        mux.start().unwrap();
        mux.start().unwrap();
        assert_eq!(state.start_calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn duplicate_chain_ids_are_rejected() {
        let mut registry = Registry::new();
        registry
            .add_handler(BackendHandler::new(
                "myChain",
                Box::new(MockClient::default()),
                Vec::new(),
            ))
            .unwrap();
        let result = registry.add_handler(BackendHandler::new(
            "myChain",
            Box::new(MockClient::default()),
            Vec::new(),
        ));
        assert!(result.is_err());
    }

    #[test]
    fn registry_lookup_by_chain_id() {
        let mux = mux_of(vec![
            ("alpha", MockClient::default()),
            ("beta", MockClient::default()),
        ]);
        let registry = mux.registry();

        assert_eq!(registry.len(), 2);
        assert_eq!(
            registry.get_by_chain_id("beta").unwrap().id(),
            ChainAppId::from_chain_id("beta")
        );
        assert!(registry.get_by_chain_id("gamma").is_none());

        // handlers iterate in identifier order: id("beta") < id("alpha")
        let chain_ids: Vec<_> = registry.handlers().map(|h| h.chain_id()).collect();
        assert_eq!(chain_ids, vec!["beta", "alpha"]);
    }
}
