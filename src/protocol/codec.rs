//! Protocol codec
//!
//! Decodes response frames out of a caller-owned accumulation buffer, and
//! re-encodes [`Response`] values back to their wire form.
//!
//! The decoder is built for stream reassembly: the transport appends
//! whatever bytes arrived and calls [`decode_response`] in a loop. A frame
//! is only consumed once it is buffered in full: on
//! [`DecodeResult::Incomplete`] the buffer is left byte-for-byte untouched,
//! so the same unconsumed bytes are re-examined on the next call. Errors
//! mean the stream itself can no longer be trusted and the connection
//! should be torn down.

use bytes::{Buf, BytesMut};

use super::{Opcode, Response, Status};
use crate::error::{ProtocolError, Result};

/// Fixed response header size in bytes
///
/// The minimum-bytes check below must use the full header size; checking
/// any shorter prefix would read past the buffered bytes.
pub const HEADER_SIZE: usize = 24;

/// Magic byte opening every response frame
pub const RESPONSE_MAGIC: u8 = 0x81;

/// Outcome of one decode attempt
///
/// `Incomplete` is an expected, recoverable signal, kept apart from the
/// fatal [`ProtocolError`](crate::error::ProtocolError) cases by type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodeResult {
    /// A full frame was parsed and consumed from the buffer
    Complete(Response),

    /// Not enough bytes buffered yet; nothing was consumed
    Incomplete,
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode one response frame from the front of `buf`
///
/// Returns `Ok(Complete(response))` with the buffer advanced past the
/// frame, `Ok(Incomplete)` with the buffer untouched, or a
/// [`ProtocolError`](crate::error::ProtocolError) for a malformed frame.
pub fn decode_response(buf: &mut BytesMut) -> Result<DecodeResult> {
    if buf.len() < HEADER_SIZE {
        return Ok(DecodeResult::Incomplete);
    }

    // Peek the fixed header without consuming anything. The frame is
    // committed only once the whole body is buffered, so a short buffer
    // can be retried from the same bytes.
    let magic = buf[0];
    if magic != RESPONSE_MAGIC {
        return Err(ProtocolError::BadMagic { found: magic });
    }

    let opcode = buf[1];
    let key_length = u16::from_be_bytes([buf[2], buf[3]]);
    let extras_length = buf[4];

    let data_type = buf[5];
    if data_type != 0x00 {
        return Err(ProtocolError::ReservedFieldNonZero { found: data_type });
    }

    let status = u16::from_be_bytes([buf[6], buf[7]]);
    let total_body_length = u32::from_be_bytes([buf[8], buf[9], buf[10], buf[11]]);

    let frame_length = HEADER_SIZE + total_body_length as usize;
    if buf.len() < frame_length {
        return Ok(DecodeResult::Incomplete);
    }

    // extras + key must fit inside the body; the remainder is the value
    let value_length = total_body_length
        .checked_sub(u32::from(key_length) + u32::from(extras_length))
        .ok_or(ProtocolError::InconsistentLengths {
            key_length,
            extras_length,
            total_body_length,
        })?;

    let opaque = u32::from_be_bytes([buf[12], buf[13], buf[14], buf[15]]);
    let cas = u64::from_be_bytes([
        buf[16], buf[17], buf[18], buf[19], buf[20], buf[21], buf[22], buf[23],
    ]);

    // Commit: consume the header, then carve the body into owned regions.
    buf.advance(HEADER_SIZE);
    let extras = buf.split_to(extras_length as usize).to_vec();
    let key_bytes = buf.split_to(key_length as usize);
    let key = std::str::from_utf8(&key_bytes)?.to_owned();
    let value = buf.split_to(value_length as usize).to_vec();

    let opcode = Opcode::from_code(opcode);
    let status = Status::from_code(status);

    tracing::trace!(
        "Decoded response frame: opcode {:?}, status {:?}, opaque {}, body {} bytes",
        opcode,
        status,
        opaque,
        total_body_length
    );

    Ok(DecodeResult::Complete(Response {
        opcode,
        status,
        opaque,
        cas,
        key,
        extras,
        value,
    }))
}

// =============================================================================
// Encoding
// =============================================================================

/// Encode a response to its wire form
///
/// Exact inverse of [`decode_response`] for well-formed frames:
/// `decode(encode(r)) == r` and `encode(decode(bytes)) == bytes`.
pub fn encode_response(response: &Response) -> Vec<u8> {
    let key = response.key.as_bytes();
    let total_body_length = response.total_body_length();

    let mut frame = Vec::with_capacity(HEADER_SIZE + total_body_length as usize);
    frame.push(RESPONSE_MAGIC);
    frame.push(response.opcode.code());
    frame.extend_from_slice(&(key.len() as u16).to_be_bytes());
    frame.push(response.extras.len() as u8);
    frame.push(0x00); // reserved data type
    frame.extend_from_slice(&response.status.code().to_be_bytes());
    frame.extend_from_slice(&total_body_length.to_be_bytes());
    frame.extend_from_slice(&response.opaque.to_be_bytes());
    frame.extend_from_slice(&response.cas.to_be_bytes());
    frame.extend_from_slice(&response.extras);
    frame.extend_from_slice(key);
    frame.extend_from_slice(&response.value);

    frame
}
