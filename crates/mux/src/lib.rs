//! Block-execution multiplexer between a single consensus host and a set of
//! independent chain applications.
//!
//! The host speaks the Execution Protocol against one application; the
//! multiplexer presents that surface while routing every transaction to the
//! backend owning it, fanning lifecycle calls out across all backends in
//! parallel, and merging the per-chain responses into a single deterministic
//! result the host can hash into consensus state.

pub mod chain;
pub mod codec;
pub mod config;
pub mod envelope;
pub mod error;
pub mod genesis;
pub mod id;
pub mod multiplexer;
pub mod registry;
pub mod server;
