//! Pattern compiler
//!
//! Merges the inline regexes, pattern files and exact names into one
//! alternation. Fragment order is: primary pattern, pattern file lines,
//! remaining inline patterns, exact names.

use regex::bytes::Regex;
use std::fs;
use std::ops::Range;
use std::path::Path;

use crate::core::config::PatternSources;
use crate::core::error::MatchError;

/// The single regex every directory entry name is tested against.
///
/// Matching runs on raw name bytes, so names that are not UTF-8 still match.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
}

impl CompiledPattern {
    /// Compile a pattern string as-is
    pub fn new(pattern: &str) -> Result<Self, MatchError> {
        Ok(Self {
            regex: Regex::new(pattern)?,
        })
    }

    /// Combined source text
    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn is_match(&self, name: &[u8]) -> bool {
        self.regex.is_match(name)
    }

    /// Byte range of the leftmost match in `name`
    pub fn find_range(&self, name: &[u8]) -> Option<Range<usize>> {
        self.regex.find(name).map(|m| m.range())
    }
}

/// Read every source and compile the combined pattern.
pub fn compile(sources: &PatternSources) -> Result<CompiledPattern, MatchError> {
    let combined = combine(sources)?;
    CompiledPattern::new(&combined)
}

/// Build the combined pattern string without compiling it
pub fn combine(sources: &PatternSources) -> Result<String, MatchError> {
    let mut fragments: Vec<String> = Vec::new();

    let mut inline = sources.inline.iter();
    if let Some(primary) = inline.next() {
        fragments.push(primary.clone());
    }

    for path in &sources.files {
        fragments.extend(read_pattern_file(path)?);
    }

    fragments.extend(inline.cloned());

    if !sources.exact_names.is_empty() {
        fragments.push(exact_names_fragment(&sources.exact_names));
    }

    Ok(join_alternation(&fragments))
}

/// Read one pattern file into its fragments. Empty files yield nothing.
pub fn read_pattern_file(path: &Path) -> Result<Vec<String>, MatchError> {
    let body = fs::read_to_string(path).map_err(|source| MatchError::PatternFile {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(file_fragments(&body))
}

/// Split a pattern file body into one fragment per non-blank line
pub fn file_fragments(body: &str) -> Vec<String> {
    body.lines()
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// `^a$|^b$|...` with each name taken literally
pub fn exact_names_fragment(names: &[String]) -> String {
    names
        .iter()
        .map(|name| format!("^{}$", regex::escape(name)))
        .collect::<Vec<_>>()
        .join("|")
}

// Empty fragments would turn into empty alternatives that match every name.
fn join_alternation(fragments: &[String]) -> String {
    fragments
        .iter()
        .filter(|f| !f.is_empty())
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn inline(patterns: &[&str]) -> PatternSources {
        PatternSources {
            inline: patterns.iter().map(|p| p.to_string()).collect(),
            ..PatternSources::default()
        }
    }

    #[test]
    fn test_primary_only() {
        assert_eq!(combine(&inline(&["d2"])).unwrap(), "d2");
    }

    #[test]
    fn test_inline_patterns_or_joined() {
        assert_eq!(combine(&inline(&["d1", "d2", "d3"])).unwrap(), "d1|d2|d3");
    }

    #[test]
    fn test_empty_primary_adds_no_alternative() {
        assert_eq!(combine(&inline(&["", "d1", "d2"])).unwrap(), "d1|d2");
    }

    #[test]
    fn test_exact_names_are_anchored() {
        let sources = PatternSources {
            exact_names: vec!["d1".into(), "d2f2.f".into()],
            ..PatternSources::default()
        };
        let combined = combine(&sources).unwrap();
        assert_eq!(combined, r"^d1$|^d2f2\.f$");

        let pattern = CompiledPattern::new(&combined).unwrap();
        assert!(pattern.is_match(b"d2f2.f"));
        assert!(!pattern.is_match(b"d2f2xf"));
        assert!(!pattern.is_match(b"d12"));
    }

    #[test]
    fn test_inline_and_exact_names_combined() {
        let sources = PatternSources {
            inline: vec![".*f1.f".into()],
            exact_names: vec!["d2f2.f".into()],
            ..PatternSources::default()
        };
        let pattern = compile(&sources).unwrap();
        assert!(pattern.is_match(b"d3f1.f"));
        assert!(pattern.is_match(b"d2f2.f"));
        assert!(!pattern.is_match(b"d3f2.f"));
    }

    #[test]
    fn test_file_fragments_come_before_extra_inline() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("patterns");
        fs::write(&file, "alpha\nbeta").unwrap();

        let sources = PatternSources {
            inline: vec!["first".into(), "last".into()],
            files: vec![file],
            ..PatternSources::default()
        };
        assert_eq!(combine(&sources).unwrap(), "first|alpha|beta|last");
    }

    #[test]
    fn test_blank_file_contributes_nothing() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("empty");
        fs::write(&file, "").unwrap();

        let with_file = PatternSources {
            inline: vec!["x".into()],
            files: vec![file],
            ..PatternSources::default()
        };
        assert_eq!(combine(&with_file).unwrap(), combine(&inline(&["x"])).unwrap());
    }

    #[test]
    fn test_trailing_newline_does_not_match_everything() {
        assert_eq!(file_fragments("a\nb\n"), vec!["a", "b"]);
        assert_eq!(file_fragments("a\r\nb\r\n"), vec!["a", "b"]);
        assert!(file_fragments("\n\n").is_empty());
    }

    #[test]
    fn test_missing_file_is_compile_error() {
        let sources = PatternSources {
            files: vec![PathBuf::from("/definitely/not/here/patterns")],
            ..PatternSources::default()
        };
        let err = compile(&sources).unwrap_err();
        assert!(matches!(err, MatchError::PatternFile { .. }));
    }

    #[test]
    fn test_invalid_regex_is_compile_error() {
        let err = compile(&inline(&["d2("])).unwrap_err();
        assert!(matches!(err, MatchError::InvalidPattern(_)));
    }

    #[test]
    fn test_no_sources_matches_everything() {
        let pattern = compile(&PatternSources::default()).unwrap();
        assert_eq!(pattern.as_str(), "");
        assert!(pattern.is_match(b"anything"));
        assert!(pattern.is_match(b""));
    }

    #[test]
    fn test_matches_non_utf8_name() {
        let pattern = CompiledPattern::new("d2").unwrap();
        assert!(pattern.is_match(b"ab\xffcd2"));
        assert_eq!(pattern.find_range(b"ab\xffcd2"), Some(4..6));
    }

    #[test]
    fn test_find_range_is_leftmost() {
        let pattern = CompiledPattern::new("f[0-9]").unwrap();
        assert_eq!(pattern.find_range(b"d2f1.f2"), Some(2..4));
        assert_eq!(pattern.find_range(b"none"), None);
    }
}
