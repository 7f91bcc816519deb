//! Path walker
//!
//! Visits the prefixes of a path one depth at a time, lists each prefix and
//! tests every entry name against the compiled pattern.

use std::ffi::{OsStr, OsString};
use std::fs;
use std::io;
use std::path::Path;

use crate::core::config::WalkOptions;
use crate::core::error::MatchError;
use crate::core::highlight::{mark_range, Highlighter, Plain};
use crate::core::paths::{
    bytes_to_os, join_entry, join_prefix, os_to_bytes, split_segments, strip_newlines,
};
use crate::core::pattern::CompiledPattern;

/// Depths to visit for a path of `segments` segments, in visiting order.
///
/// Right to left starts at the full path, left to right at depth 1.
pub fn prefix_depths(segments: usize, search_from_left: bool) -> impl Iterator<Item = usize> {
    (1..=segments).rev().map(move |i| {
        if search_from_left {
            segments + 1 - i
        } else {
            i
        }
    })
}

/// Walks one path with one pattern
pub struct Walker<'a> {
    pattern: &'a CompiledPattern,
    options: WalkOptions,
    highlighter: &'a dyn Highlighter,
}

impl<'a> Walker<'a> {
    pub fn new(pattern: &'a CompiledPattern, options: WalkOptions) -> Self {
        Self {
            pattern,
            options,
            highlighter: &Plain,
        }
    }

    /// Use `highlighter` for matched names when highlighting is on
    pub fn with_highlighter(mut self, highlighter: &'a dyn Highlighter) -> Self {
        self.highlighter = highlighter;
        self
    }

    /// Walk `raw_path` and collect matches.
    ///
    /// Returns [`MatchError::NoMatch`] when nothing matched and
    /// [`MatchError::DirectoryAccess`] when a prefix cannot be listed.
    pub fn walk(&self, raw_path: &OsStr) -> Result<Vec<OsString>, MatchError> {
        let path = strip_newlines(os_to_bytes(raw_path));
        let segments = split_segments(&path);

        let mut results = Vec::new();

        for depth in prefix_depths(segments.len(), self.options.search_from_left) {
            let prefix = join_prefix(&segments, depth);

            let names = match list_dir(Path::new(&bytes_to_os(prefix.clone())))? {
                Some(names) => names,
                None => continue,
            };

            for name in names {
                let name = os_to_bytes(&name);
                if !self.pattern.is_match(name) {
                    continue;
                }

                results.push(bytes_to_os(self.render_match(&prefix, name)));

                if results.len() == 1 && !self.options.match_all {
                    return Ok(results);
                }
            }
        }

        if results.is_empty() {
            return Err(MatchError::NoMatch);
        }

        Ok(results)
    }

    fn render_match(&self, prefix: &[u8], name: &[u8]) -> Vec<u8> {
        if self.options.base_directory_only {
            return prefix.to_vec();
        }

        if self.options.highlight_matches {
            if let Some(range) = self.pattern.find_range(name) {
                return join_entry(prefix, &mark_range(name, range, self.highlighter));
            }
        }

        join_entry(prefix, name)
    }
}

/// Entry names of `path` sorted by name, or `None` when `path` is not a directory
pub fn list_dir(path: &Path) -> Result<Option<Vec<OsString>>, MatchError> {
    let access_error = |source: io::Error| MatchError::DirectoryAccess {
        path: path.display().to_string(),
        source,
    };

    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(err) if is_not_a_directory(path, &err) => return Ok(None),
        Err(err) => return Err(access_error(err)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(access_error)?;
        names.push(entry.file_name());
    }
    names.sort();

    Ok(Some(names))
}

fn is_not_a_directory(path: &Path, err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::NotADirectory || path.is_file()
}
