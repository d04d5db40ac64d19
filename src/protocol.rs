//! Wire format for hf transfers.
//!
//! One transfer per TCP connection:
//! `[2 bytes: name length, big-endian u16][name bytes][file content]`.
//! There is no version field, checksum, or content length; the body runs
//! until the peer half-closes or closes the connection.

use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};

/// Fixed buffer size for streaming file content (constant memory for
/// arbitrarily large transfers).
pub const CHUNK_SIZE: usize = 1024 * 1024;

/// Longest destination name the server accepts, in bytes.
pub const MAX_NAME_LEN: usize = 255;

/// Everything that can end one connection early. Framing and validation
/// failures drop the connection without creating a file; I/O failures during
/// the body may leave a partial file behind.
#[derive(Debug, Error)]
pub enum TransferError {
    #[error("connection closed before the name length arrived")]
    TruncatedHeader,
    #[error("connection closed before the full name arrived")]
    TruncatedName,
    #[error("rejected name: {0}")]
    Reject(&'static str),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Builds the header that prefixes a transfer: 2-byte big-endian length,
/// then the name bytes verbatim.
pub fn encode_header(name: &[u8]) -> Result<Vec<u8>, TransferError> {
    if name.len() > u16::MAX as usize {
        return Err(TransferError::Reject("name exceeds length field"));
    }
    let mut hdr = Vec::with_capacity(2 + name.len());
    hdr.extend_from_slice(&(name.len() as u16).to_be_bytes());
    hdr.extend_from_slice(name);
    Ok(hdr)
}

/// Reads the header off the front of a connection. Early EOF inside the
/// length field or the name maps to the matching truncation error; the name
/// bytes are returned unvalidated (zero-length included) for the validator
/// to judge.
pub async fn decode_header<R>(reader: &mut R) -> Result<Vec<u8>, TransferError>
where
    R: AsyncRead + Unpin,
{
    let mut len_buf = [0u8; 2];
    reader.read_exact(&mut len_buf).await.map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            TransferError::TruncatedHeader
        } else {
            TransferError::Io(e)
        }
    })?;
    let len = u16::from_be_bytes(len_buf) as usize;

    let mut name = vec![0u8; len];
    if len > 0 {
        reader.read_exact(&mut name).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::UnexpectedEof {
                TransferError::TruncatedName
            } else {
                TransferError::Io(e)
            }
        })?;
    }
    Ok(name)
}
