//! Error types for memcache-wire
//!
//! All decoder failure modes are fatal at the connection level: the stream
//! can no longer be trusted and the transport layer should tear it down.
//! A short read is *not* an error; the decoder reports it as
//! [`DecodeResult::Incomplete`](crate::protocol::DecodeResult) so it stays
//! distinguishable from corruption by type, not by sentinel.

use thiserror::Error;

/// Result type alias using ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Fatal wire-protocol violations detected while decoding a response frame
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    /// First byte of the frame was not the response magic `0x81`
    #[error("bad magic byte: expected 0x81, found {found:#04x}")]
    BadMagic { found: u8 },

    /// The reserved data-type byte at offset 5 must be zero
    #[error("reserved data-type byte must be zero, found {found:#04x}")]
    ReservedFieldNonZero { found: u8 },

    /// Header lengths disagree: extras + key exceed the total body
    #[error(
        "inconsistent lengths: extras ({extras_length}) + key ({key_length}) \
         exceed total body ({total_body_length})"
    )]
    InconsistentLengths {
        key_length: u16,
        extras_length: u8,
        total_body_length: u32,
    },

    /// The key region of the body is not valid UTF-8
    #[error("response key is not valid UTF-8: {0}")]
    BadKeyEncoding(#[from] std::str::Utf8Error),
}
