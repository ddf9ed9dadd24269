//! This module defines the various errors raised by the multiplexer.

use std::path::PathBuf;

use flex_error::{define_error, DisplayOnly};

use crate::id::ChainAppId;

define_error! {
    Error {
        InvalidHeaderLength
            { len: usize }
            |e| { format_args!("invalid tx header length: {}", e.len) },

        InvalidMagic
            { header: Vec<u8> }
            |e| { format_args!("invalid tx envelope magic: {:02x?}", e.header) },

        UnknownChainApp
            { id: ChainAppId }
            |e| { format_args!("no application handler registered for chain-app id {}", e.id) },

        NoHandlerForChainId
            { chain_id: String }
            |e| { format_args!("no application handler found for chain-id '{}'", e.chain_id) },

        DuplicateChainApp
            {
                chain_id: String,
                id: ChainAppId,
            }
            |e| {
                format_args!("application handler already registered with id {} (chain-id '{}')", e.id, e.chain_id)
            },

        InvalidAddress
            { address: String }
            |e| { format_args!("invalid transport address '{}'", e.address) },

        Transport
            { address: String }
            [ DisplayOnly<std::io::Error> ]
            |e| { format_args!("transport error for '{}'", e.address) },

        ClientNotStarted
            { address: String }
            |e| { format_args!("transport client for '{}' is not running", e.address) },

        ConnectionClosed
            { address: String }
            |e| { format_args!("connection to '{}' closed unexpectedly", e.address) },

        BackendException
            { message: String }
            |e| { format_args!("backend application returned an exception: {}", e.message) },

        UnexpectedResponse
            { variant: String }
            |e| { format_args!("unexpected response variant from backend: {}", e.variant) },

        MalformedRequest
            { reason: String }
            |e| { format_args!("malformed request from host: {}", e.reason) },

        Io
            [ DisplayOnly<std::io::Error> ]
            |_| { "I/O error" },

        Encode
            [ DisplayOnly<prost::EncodeError> ]
            |_| { "error encoding protobuf" },

        Decode
            [ DisplayOnly<prost::DecodeError> ]
            |_| { "error decoding protobuf" },

        ConfigIo
            { path: PathBuf }
            [ DisplayOnly<std::io::Error> ]
            |e| { format_args!("error reading configuration file {}", e.path.display()) },

        ConfigDecode
            [ DisplayOnly<toml::de::Error> ]
            |_| { "invalid configuration" },

        GenesisIo
            { path: PathBuf }
            [ DisplayOnly<std::io::Error> ]
            |e| { format_args!("error reading genesis document {}", e.path.display()) },

        GenesisDecode
            { path: PathBuf }
            [ DisplayOnly<serde_json::Error> ]
            |e| { format_args!("malformed genesis document {}", e.path.display()) },

        ChannelRecv
            [ DisplayOnly<crossbeam_channel::RecvError> ]
            |_| { "completion channel closed before all responses were collected" },
    }
}
