//! HFile library
//!
//! Point-to-point file transfer over TCP: a server that persists incoming
//! transfers into a directory, and a client that pushes one local file.

pub mod client;
pub mod persist;
pub mod protocol;
pub mod server;
pub mod validate;
