//! Terminal rendering
//!
//! Writes result lines in the host's path convention and provides the ANSI
//! highlighter used by `--color`.

use colored::Colorize;
use std::ffi::OsString;
use std::io::{self, Write};

use crate::core::highlight::Highlighter;
use crate::core::paths::{from_slash, os_to_bytes};

/// Paints the matched term green
#[derive(Debug, Clone, Copy, Default)]
pub struct GreenHighlighter;

impl Highlighter for GreenHighlighter {
    fn emphasize(&self, text: &[u8]) -> Vec<u8> {
        // Terms that are not UTF-8 are written as-is.
        match std::str::from_utf8(text) {
            Ok(term) => term.green().to_string().into_bytes(),
            Err(_) => text.to_vec(),
        }
    }
}

/// Write one result per line, byte for byte
pub fn write_results<W: Write>(out: &mut W, results: &[OsString]) -> io::Result<()> {
    for result in results {
        out.write_all(&from_slash(os_to_bytes(result)))?;
        out.write_all(b"\n")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::highlight::mark_range;

    #[test]
    fn test_write_results_one_per_line() {
        let mut buf = Vec::new();
        write_results(&mut buf, &[OsString::from("a/b"), OsString::from("a/c")]).unwrap();
        let mut expected = from_slash(b"a/b");
        expected.push(b'\n');
        expected.extend(from_slash(b"a/c"));
        expected.push(b'\n');
        assert_eq!(buf, expected);
    }

    #[test]
    fn test_write_results_empty() {
        let mut buf = Vec::new();
        write_results(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_write_results_keeps_raw_bytes() {
        use crate::core::paths::bytes_to_os;

        let mut buf = Vec::new();
        write_results(&mut buf, &[bytes_to_os(b"d/ab\xffcd2".to_vec())]).unwrap();
        assert_eq!(buf, b"d/ab\xffcd2\n");
    }

    #[test]
    fn test_green_highlighter_wraps_match() {
        colored::control::set_override(true);
        let marked = mark_range(b"d2f1.f", 2..4, &GreenHighlighter);
        let raw = GreenHighlighter.emphasize(b"\xff");
        colored::control::unset_override();

        let marked = String::from_utf8(marked).unwrap();
        assert!(marked.starts_with("d2\u{1b}[32mf1"));
        assert!(marked.ends_with("\u{1b}[0m.f"));
        assert_eq!(raw, b"\xff");
    }
}
