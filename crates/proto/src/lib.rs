//! cometmux-proto gives the multiplexer and its backend applications access
//! to the protobuf-defined wire types of the Execution Protocol.

// This module setup is necessary because the generated code contains
// "super::" calls for dependencies.

#![deny(warnings, trivial_casts, trivial_numeric_casts, unused_import_braces)]
#![allow(clippy::large_enum_variant)]
#![forbid(unsafe_code)]

pub mod google {
    pub mod protobuf {
        include!("prost/google.protobuf.rs");
    }
}

pub mod tendermint {
    pub mod abci {
        include!("prost/tendermint.abci.rs");
    }
    pub mod crypto {
        include!("prost/tendermint.crypto.rs");
    }
    pub mod types {
        include!("prost/tendermint.types.rs");
    }
}
