//! Black-box checks of the `hf` binary's argument contract: exit codes and
//! stderr diagnostics, no network activity.

use std::process::Command;

fn hf(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_hf"))
        .args(args)
        .output()
        .expect("failed to run hf")
}

fn stderr_of(out: &std::process::Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn help_exits_zero() {
    let out = hf(&["-h"]);
    assert!(out.status.success());
    let text = String::from_utf8_lossy(&out.stdout);
    assert!(text.contains("-s") && text.contains("-c"), "usage incomplete: {text}");
}

#[test]
fn port_zero_never_listens() {
    let dir = tempfile::tempdir().unwrap();
    let out = hf(&["-s", dir.path().to_str().unwrap(), "-p", "0"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr_of(&out).contains("invalid port"));
}

#[test]
fn non_numeric_port_rejected() {
    let out = hf(&["-c", "f.txt", "-p", "http"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr_of(&out).contains("invalid port"));
}

#[test]
fn server_and_client_together_rejected() {
    let out = hf(&["-s", "d", "-c", "f", "-p", "9000"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr_of(&out).contains("-s and -c"));
}

#[test]
fn missing_server_value_rejected() {
    let out = hf(&["-s", "-p", "9000"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr_of(&out).contains("invalid server path"));
}

#[test]
fn nonexistent_server_dir_rejected() {
    let out = hf(&["-s", "/definitely/not/a/real/dir", "-p", "9000"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr_of(&out).contains("invalid server path"));
}

#[test]
fn missing_client_value_rejected() {
    let out = hf(&["-c", "-p", "9000"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr_of(&out).contains("invalid client path"));
}

#[test]
fn bare_argument_rejected() {
    let out = hf(&["bogus", "-c", "f.txt", "-p", "9000"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr_of(&out).contains("invalid argument"));
}

#[test]
fn unknown_flag_exits_one() {
    let out = hf(&["-x", "-p", "9000"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!stderr_of(&out).is_empty());
}

#[test]
fn dangling_port_flag_exits_one() {
    let out = hf(&["-c", "f.txt", "-p"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(!stderr_of(&out).is_empty());
}

#[test]
fn neither_mode_rejected() {
    let out = hf(&["-p", "9000"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(stderr_of(&out).contains("-s or -c"));
}
