//! hf - minimal point-to-point file transfer.
//!
//! `hf -s <dir> -p <port>` receives files into a directory;
//! `hf -c <file> [-i <ip>] -p <port>` sends one file.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::Parser;

use hfile::{client, server};

/// Command-line arguments
#[derive(Parser, Debug)]
#[command(
    name = "hf",
    about = "Point-to-point file transfer: run a receiving server, or send one file to it"
)]
struct Args {
    /// Run as server, persisting received files into DIR
    #[arg(short = 's', value_name = "DIR", num_args = 0..=1)]
    server: Option<Option<PathBuf>>,

    /// Run as client, sending FILE
    #[arg(short = 'c', value_name = "FILE", num_args = 0..=1)]
    client: Option<Option<PathBuf>>,

    /// Destination address, client mode only
    #[arg(short = 'i', value_name = "IP")]
    ip: Option<String>,

    /// TCP port for either mode
    #[arg(short = 'p', value_name = "PORT")]
    port: Option<String>,

    #[arg(value_name = "EXTRA", hide = true)]
    extra: Vec<String>,
}

#[derive(Debug)]
enum Mode {
    Server { dir: PathBuf },
    Client { file: PathBuf, ip: String },
}

fn parse_port(s: Option<&str>) -> Result<u16> {
    let s = s.context("invalid port: -p is required")?;
    match s.parse::<u16>() {
        Ok(0) | Err(_) => bail!("invalid port: {s}"),
        Ok(p) => Ok(p),
    }
}

/// Turns raw arguments into a runnable mode, enforcing the surface contract:
/// `-s`/`-c` mutual exclusion, `-i` only with `-c`, a usable port, and no
/// stray positional arguments. All failures are pre-network and exit 1.
fn resolve(args: Args) -> Result<(Mode, u16)> {
    if let Some(extra) = args.extra.first() {
        bail!("invalid argument: {extra}");
    }
    let port = parse_port(args.port.as_deref())?;

    match (args.server, args.client) {
        (Some(_), Some(_)) => bail!("-s and -c cannot be combined"),
        (Some(dir), None) => {
            if args.ip.is_some() {
                bail!("invalid argument: -i is client-only");
            }
            let dir = dir
                .filter(|d| !d.as_os_str().is_empty())
                .context("invalid server path: missing directory")?;
            if !dir.is_dir() {
                bail!("invalid server path: {}", dir.display());
            }
            Ok((Mode::Server { dir }, port))
        }
        (None, Some(file)) => {
            let file = file
                .filter(|f| !f.as_os_str().is_empty())
                .context("invalid client path: missing file")?;
            let ip = args.ip.unwrap_or_else(|| "127.0.0.1".to_string());
            Ok((Mode::Client { file, ip }, port))
        }
        (None, None) => bail!("one of -s or -c is required"),
    }
}

fn run(args: Args) -> Result<()> {
    let (mode, port) = resolve(args)?;

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("build tokio runtime")?;

    match mode {
        Mode::Server { dir } => rt.block_on(server::serve(port, &dir)),
        Mode::Client { file, ip } => rt.block_on(client::send(&file, &ip, port)),
    }
}

fn main() -> ExitCode {
    // Every argument error exits 1; only -h/--help exits 0. Clap's default
    // status 2 for its own parse errors is remapped here so unknown flags
    // and dangling option values match the rest of the surface.
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("hf: {e:#}");
            ExitCode::FAILURE
        }
    }
}
