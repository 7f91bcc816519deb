//! Configuration for one matching run

use std::ffi::OsString;
use std::path::PathBuf;

/// Where the combined pattern comes from.
#[derive(Debug, Clone, Default)]
pub struct PatternSources {
    /// Inline regex fragments. The first one is the primary pattern.
    pub inline: Vec<String>,
    /// Names that must match an entry exactly.
    pub exact_names: Vec<String>,
    /// Files holding one regex fragment per line.
    pub files: Vec<PathBuf>,
}

/// Walk behaviour switches
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WalkOptions {
    /// Visit the shortest prefix first instead of the full path.
    pub search_from_left: bool,
    /// Emit the containing prefix instead of `prefix/name`.
    pub base_directory_only: bool,
    /// Keep walking after the first match.
    pub match_all: bool,
    /// Mark the matched part of each entry name.
    pub highlight_matches: bool,
}

/// Immutable input to one matching run
#[derive(Debug, Clone, Default)]
pub struct SearchConfig {
    /// Path to search, '/' separated.
    pub raw_path: OsString,
    pub patterns: PatternSources,
    pub options: WalkOptions,
}
