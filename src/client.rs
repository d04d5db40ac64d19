//! Sending side: one connection, one file.

use std::ffi::OsStr;
use std::net::IpAddr;
use std::path::Path;

use anyhow::{bail, Context, Result};
use tokio::fs::File;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;

use crate::protocol::{self, CHUNK_SIZE, MAX_NAME_LEN};

/// Streams `path` to `ip:port`. The transfer name is the local base name;
/// directory components never go on the wire. After the last byte the send
/// direction is shut down (half-close) to mark end of content.
pub async fn send(path: &Path, ip: &str, port: u16) -> Result<()> {
    let name = path
        .file_name()
        .with_context(|| format!("{} has no file name", path.display()))?;
    let name_bytes = name_bytes(name)?;
    if name_bytes.len() > MAX_NAME_LEN {
        bail!("file name longer than {MAX_NAME_LEN} bytes");
    }
    let header = protocol::encode_header(name_bytes)?;

    let addr: IpAddr = ip.parse().with_context(|| format!("invalid address {ip}"))?;
    let mut file = File::open(path)
        .await
        .with_context(|| format!("open {}", path.display()))?;
    let mut stream = TcpStream::connect((addr, port))
        .await
        .with_context(|| format!("connect {ip}:{port}"))?;

    stream.write_all(&header).await?;
    let mut buf = vec![0u8; CHUNK_SIZE];
    loop {
        let n = file.read(&mut buf).await?;
        if n == 0 {
            break;
        }
        stream.write_all(&buf[..n]).await?;
    }
    stream.shutdown().await?;
    Ok(())
}

#[cfg(unix)]
fn name_bytes(name: &OsStr) -> Result<&[u8]> {
    use std::os::unix::ffi::OsStrExt;
    Ok(name.as_bytes())
}

#[cfg(not(unix))]
fn name_bytes(name: &OsStr) -> Result<&[u8]> {
    name.to_str()
        .map(str::as_bytes)
        .context("file name is not valid UTF-8")
}
