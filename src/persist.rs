//! Streaming persistence for an incoming transfer body.

use std::path::Path;

use tokio::fs::File;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};

use crate::protocol::CHUNK_SIZE;

/// Copies everything left in `reader` into `dest`, creating or truncating
/// the file first. A single reusable 1 MiB buffer bounds memory regardless
/// of transfer size. Returns bytes written; a mid-copy error leaves the
/// partial file in place for the caller to report.
pub async fn persist<R>(reader: &mut R, dest: &Path) -> std::io::Result<u64>
where
    R: AsyncRead + Unpin,
{
    let mut out = File::create(dest).await?;
    let mut buf = vec![0u8; CHUNK_SIZE];
    let mut written: u64 = 0;
    loop {
        let n = reader.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        out.write_all(&buf[..n]).await?;
        written += n as u64;
    }
    out.flush().await?;
    Ok(written)
}
