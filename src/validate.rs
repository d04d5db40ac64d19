//! Destination-name safety checks.
//!
//! A name arrives as raw bytes off the wire and, if accepted, is joined to
//! the save directory as a single path component. The validator never
//! interprets the bytes as a path itself.

use std::ffi::OsString;

use crate::protocol::{TransferError, MAX_NAME_LEN};

/// Applies the acceptance rules in order: length 1..=255, no `/` or `\`
/// anywhere, no `..` substring anywhere. The `..` rule is deliberately
/// stricter than traversal safety requires: `a..b` is rejected too, and that
/// behavior is part of the tested contract.
pub fn check(name: &[u8]) -> Result<OsString, TransferError> {
    if name.is_empty() || name.len() > MAX_NAME_LEN {
        return Err(TransferError::Reject("name length out of range"));
    }
    if name.contains(&b'/') || name.contains(&b'\\') {
        return Err(TransferError::Reject("name contains a path separator"));
    }
    if name.windows(2).any(|w| w == b"..") {
        return Err(TransferError::Reject("name contains '..'"));
    }
    to_os_string(name)
}

// Names are arbitrary bytes on the wire. Unix filenames are bytes too, so
// they pass through verbatim; elsewhere the name must be valid UTF-8.
#[cfg(unix)]
fn to_os_string(name: &[u8]) -> Result<OsString, TransferError> {
    use std::os::unix::ffi::OsStrExt;
    Ok(std::ffi::OsStr::from_bytes(name).to_os_string())
}

#[cfg(not(unix))]
fn to_os_string(name: &[u8]) -> Result<OsString, TransferError> {
    match std::str::from_utf8(name) {
        Ok(s) => Ok(OsString::from(s)),
        Err(_) => Err(TransferError::Reject("name is not valid UTF-8")),
    }
}
