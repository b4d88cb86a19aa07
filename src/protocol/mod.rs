//! Protocol Module
//!
//! Decoding (and re-encoding) of memcached binary-protocol response frames.
//!
//! ## Response Frame Format
//!
//! A frame is a fixed 24-byte header followed by a body of
//! `total_body_length` bytes, split as `extras || key || value`. All
//! multi-byte integers are big-endian.
//!
//! ```text
//! ┌────────┬──────┬─────────────────────────────────────────┐
//! │ Offset │ Size │ Field                                   │
//! ├────────┼──────┼─────────────────────────────────────────┤
//! │ 0      │ 1    │ magic (0x81 for a response)             │
//! │ 1      │ 1    │ opcode                                  │
//! │ 2      │ 2    │ key length                              │
//! │ 4      │ 1    │ extras length                           │
//! │ 5      │ 1    │ data type (reserved, must be 0x00)      │
//! │ 6      │ 2    │ status                                  │
//! │ 8      │ 4    │ total body length                       │
//! │ 12     │ 4    │ opaque                                  │
//! │ 16     │ 8    │ cas                                     │
//! │ 24     │ ...  │ extras, then key (UTF-8), then value    │
//! └────────┴──────┴─────────────────────────────────────────┘
//! ```
//!
//! Requests (magic `0x80`) are built by the client layer on top of this
//! crate and are not handled here.

mod codec;
mod opcode;
mod response;
mod status;

pub use codec::{decode_response, encode_response, DecodeResult, HEADER_SIZE, RESPONSE_MAGIC};
pub use opcode::Opcode;
pub use response::Response;
pub use status::Status;
