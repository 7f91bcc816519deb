//! Error taxonomy for a single matching run

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can end a matching run without a result.
#[derive(Debug, Error)]
pub enum MatchError {
    /// A pattern file could not be read.
    #[error("failed to read pattern file {}: {source}", path.display())]
    PatternFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The combined pattern is not a valid regular expression.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Listing a prefix failed for a reason other than it being a file.
    #[error("cannot read directory {path}: {source}")]
    DirectoryAccess {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The walk finished without a single matching entry.
    #[error("no match")]
    NoMatch,
}

impl MatchError {
    pub fn is_no_match(&self) -> bool {
        matches!(self, MatchError::NoMatch)
    }
}
