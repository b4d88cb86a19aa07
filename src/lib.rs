//! # memcache-wire
//!
//! Wire-level core for memcached binary-protocol clients:
//! - Response frame decoding (binary protocol, response magic `0x81`)
//! - Key-to-shard hash algorithms for routing cache operations
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Transport / Client Layer                    │
//! │            (sockets, reconnects, request builders)           │
//! └───────────┬─────────────────────────────────┬───────────────┘
//!             │ accumulated bytes               │ operation key
//!             ▼                                 ▼
//!     ┌───────────────┐                 ┌───────────────┐
//!     │   protocol    │                 │     hash      │
//!     │ (frame codec) │                 │  (key → u32)  │
//!     └───────┬───────┘                 └───────┬───────┘
//!             │ Response / Incomplete           │ routing hash
//!             ▼                                 ▼
//!       caller retries                   node selection
//!       on Incomplete                    (caller's ring)
//! ```
//!
//! The transport and node-selection layers are deliberately not part of
//! this crate. Decoding is a synchronous, single-pass transformation over
//! a caller-owned buffer; hashing is a set of pure functions. Nothing here
//! performs I/O, blocks, or shares mutable state, so every entry point may
//! be called from any number of threads concurrently.

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;

pub mod hash;
pub mod protocol;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{ProtocolError, Result};
pub use hash::HashAlgorithm;
pub use protocol::{decode_response, encode_response, DecodeResult, Opcode, Response, Status};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of memcache-wire
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
