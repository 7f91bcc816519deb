//! Path normalization utilities
//!
//! The engine works on '/' separated byte strings so entry names that are not
//! valid UTF-8 survive untouched. Conversion to and from the host convention
//! happens at the edges.

use std::ffi::{OsStr, OsString};
use std::path::MAIN_SEPARATOR;

/// Root marker used when a prefix joins to the empty string
pub const ROOT: &[u8] = b"/";

/// Raw bytes of an OS string
pub fn os_to_bytes(s: &OsStr) -> &[u8] {
    s.as_encoded_bytes()
}

/// Rebuild an OS string from raw bytes
#[cfg(unix)]
pub fn bytes_to_os(bytes: Vec<u8>) -> OsString {
    use std::os::unix::ffi::OsStringExt;
    OsString::from_vec(bytes)
}

#[cfg(not(unix))]
pub fn bytes_to_os(bytes: Vec<u8>) -> OsString {
    String::from_utf8_lossy(&bytes).into_owned().into()
}

/// Convert host separators to '/'
pub fn to_slash(path: &[u8]) -> Vec<u8> {
    replace_byte(path, MAIN_SEPARATOR as u8, b'/')
}

/// Convert '/' to the host separator
pub fn from_slash(path: &[u8]) -> Vec<u8> {
    replace_byte(path, b'/', MAIN_SEPARATOR as u8)
}

fn replace_byte(path: &[u8], from: u8, to: u8) -> Vec<u8> {
    path.iter()
        .map(|&b| if b == from { to } else { b })
        .collect()
}

/// Drop line breaks picked up from stdin
pub fn strip_newlines(path: &[u8]) -> Vec<u8> {
    path.iter()
        .copied()
        .filter(|&b| b != b'\n' && b != b'\r')
        .collect()
}

/// Split a path into its segments. A leading '/' yields an empty first segment.
pub fn split_segments(path: &[u8]) -> Vec<&[u8]> {
    path.split(|&b| b == b'/').collect()
}

/// Join the first `depth` segments, falling back to the root marker
pub fn join_prefix(segments: &[&[u8]], depth: usize) -> Vec<u8> {
    let joined = segments[..depth.min(segments.len())].join(&b'/');
    if joined.is_empty() {
        ROOT.to_vec()
    } else {
        joined
    }
}

/// `prefix/name`, without doubling the separator at the root
pub fn join_entry(prefix: &[u8], name: &[u8]) -> Vec<u8> {
    let mut entry = prefix.to_vec();
    if prefix != ROOT {
        entry.push(b'/');
    }
    entry.extend_from_slice(name);
    entry
}
