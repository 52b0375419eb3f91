// Framing of wire expressions

use bytes::{Buf, BufMut, BytesMut};
use log::debug;
use thiserror::Error;

use super::Expression;

/// Tag byte opening every expression frame
pub const EXPRESSION_TAG: u8 = b'X';

/// Tag byte plus the length word
const HEADER_SIZE: usize = 5;

/// Largest payload accepted in either direction
pub const MAX_FRAME_SIZE: usize = 64 * 1024 * 1024;

#[derive(Error, Debug)]
pub enum CodecError {
    #[error("Serialization error: {0}")]
    Serialize(#[from] bincode::Error),

    #[error("Unexpected frame tag: {0:#04x}")]
    UnexpectedTag(u8),

    #[error("Invalid frame length: {0}")]
    InvalidLength(i32),

    #[error("Frame too large: {0} bytes")]
    FrameTooLarge(usize),
}

pub type CodecResult<T> = std::result::Result<T, CodecError>;

/// Appends `expr` to `buf` as one frame: tag, big-endian length (counting
/// itself), then the serialized node.
pub fn encode_expression(expr: &Expression, buf: &mut BytesMut) -> CodecResult<()> {
    let payload = bincode::serialize(expr)?;
    if payload.len() > MAX_FRAME_SIZE {
        return Err(CodecError::FrameTooLarge(payload.len()));
    }
    let len = (payload.len() + 4) as i32;

    buf.reserve(HEADER_SIZE + payload.len());
    buf.put_u8(EXPRESSION_TAG);
    buf.put_i32(len);
    buf.put_slice(&payload);

    debug!("encoded expression frame of {} bytes", HEADER_SIZE + payload.len());
    Ok(())
}

/// Takes one frame off the front of `buf`.
///
/// Returns `Ok(None)` without consuming anything when the frame is not
/// complete yet. A header announcing more than [`MAX_FRAME_SIZE`] bytes is
/// rejected before waiting for the payload.
pub fn decode_expression(buf: &mut BytesMut) -> CodecResult<Option<Expression>> {
    if buf.remaining() < HEADER_SIZE {
        return Ok(None);
    }

    let tag = buf[0];
    if tag != EXPRESSION_TAG {
        return Err(CodecError::UnexpectedTag(tag));
    }

    let len = i32::from_be_bytes([buf[1], buf[2], buf[3], buf[4]]);
    if len < 4 {
        return Err(CodecError::InvalidLength(len));
    }
    let payload_len = len as usize - 4;
    if payload_len > MAX_FRAME_SIZE {
        return Err(CodecError::FrameTooLarge(payload_len));
    }
    if buf.len() < HEADER_SIZE + payload_len {
        return Ok(None);
    }

    buf.advance(HEADER_SIZE);
    let payload = buf.split_to(payload_len);
    let expr = bincode::deserialize(&payload)?;
    Ok(Some(expr))
}
