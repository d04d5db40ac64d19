//! Receiving side: accept loop plus one handler task per connection.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tokio::net::{TcpListener, TcpStream};

use crate::persist;
use crate::protocol::{self, TransferError};
use crate::validate;

/// Binds the listening socket and serves forever. Bind/listen failure is the
/// only fatal error; once listening, every accepted connection runs in its
/// own task and its failures never reach this loop.
pub async fn serve(port: u16, save_dir: &Path) -> Result<()> {
    let listener = TcpListener::bind(("0.0.0.0", port))
        .await
        .with_context(|| format!("bind 0.0.0.0:{port}"))?;
    println!("listening on {} port {}...", save_dir.display(), port);

    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(conn) => conn,
            Err(e) => {
                eprintln!("accept failed: {e}");
                continue;
            }
        };
        println!("client connected");
        let save_dir = save_dir.to_path_buf();
        tokio::spawn(async move {
            if let Err(e) = handle(stream, &save_dir).await {
                eprintln!("connection from {peer} dropped: {e}");
            }
        });
    }
}

/// One connection, start to finish: decode the header, validate the name,
/// then stream the rest of the connection into the destination file. A
/// rejected name never opens a file; the socket and any file handle are
/// released on every exit path when the task ends.
async fn handle(mut stream: TcpStream, save_dir: &Path) -> Result<(), TransferError> {
    let name_bytes = protocol::decode_header(&mut stream).await?;
    let name = validate::check(&name_bytes)?;
    let dest: PathBuf = save_dir.join(&name);
    let written = persist::persist(&mut stream, &dest).await?;
    println!("saved {} ({} bytes)", dest.display(), written);
    Ok(())
}
