//! CLI module - Command-line interface definitions and handlers

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::ffi::OsString;
use std::io::{self, Read};
use std::path::PathBuf;

use crate::core::config::{PatternSources, SearchConfig, WalkOptions};
use crate::core::error::MatchError;
use crate::core::highlight::{Highlighter, Plain};
use crate::core::paths::{bytes_to_os, os_to_bytes, strip_newlines, to_slash};
use crate::core::pattern;
use crate::core::walker::Walker;
use crate::render::{write_results, GreenHighlighter};

/// remp - find the directory or file along a path matching a regex pattern.
#[derive(Parser, Debug)]
#[command(name = "remp")]
#[command(
    author,
    version,
    about,
    disable_version_flag = true,
    long_about = r#"remp reads a path from stdin and looks for an entry matching PATTERN in
each directory along it, starting from the full path and moving towards the
root (or the other way round with --left).

The first match is printed as DIR/NAME, one line per result.

Pattern sources are OR-combined:
- PATTERN and -e: regular expressions (unanchored)
- -X: names that must match exactly
- -f: files with one regular expression per line

Examples:
    pwd | remp -b -X Cargo.toml
    pwd | remp -a '\.git$'
    echo src/core/deep | remp -l -f patterns.txt
"#
)]
pub struct Cli {
    /// The regex pattern to search for.
    #[arg(value_name = "PATTERN")]
    pub pattern: Option<String>,

    /// Additional regex pattern to search for.
    #[arg(
        short = 'e',
        long = "regexp",
        value_name = "PATTERN",
        long_help = "Additional regex pattern to search for. May be repeated.\n\n\
Every pattern is OR-combined with PATTERN and the other sources."
    )]
    pub regexp: Vec<String>,

    /// File/directory name must exactly match string.
    #[arg(
        short = 'X',
        long = "line-strings",
        value_name = "NAME",
        long_help = "File/directory name must exactly match NAME. May be repeated.\n\n\
NAME is taken literally; regex metacharacters have no special meaning."
    )]
    pub line_strings: Vec<String>,

    /// Provide regex pattern(s) from file(s). One per line.
    #[arg(
        short = 'f',
        long = "file",
        value_name = "FILE",
        long_help = "Read regex patterns from FILE, one per line. May be repeated.\n\n\
Empty files and blank lines contribute nothing."
    )]
    pub file: Vec<PathBuf>,

    /// Search path from left to right instead of right to left.
    #[arg(short = 'l', long)]
    pub left: bool,

    /// Show the base directory without the matched file/directory.
    #[arg(short = 'b', long)]
    pub base_directory: bool,

    /// Search entire path instead of exiting on the first match.
    #[arg(short = 'a', long)]
    pub match_all: bool,

    /// Custom stdout output when no match is found.
    #[arg(
        short = 'O',
        long,
        value_name = "TEXT",
        long_help = "Print TEXT on stdout when no match is found.\n\n\
The exit status is still non-zero."
    )]
    pub no_match: Option<String>,

    /// Highlight matched term(s) with colour.
    #[arg(
        long,
        long_help = "Highlight the matched part of each name in green.\n\n\
Honours NO_COLOR and CLICOLOR_FORCE; colour is off when stdout is not a terminal."
    )]
    pub color: bool,

    /// Verbose mode (diagnostics on stderr).
    #[arg(long)]
    pub verbose: bool,

    /// Shows version.
    #[arg(short = 'v', visible_short_alias = 'V', long, action = ArgAction::Version)]
    #[allow(dead_code)]
    version: Option<bool>,
}

impl Cli {
    /// Build the run configuration for `raw_path`
    pub fn to_config(&self, raw_path: OsString) -> SearchConfig {
        let mut inline = vec![self.pattern.clone().unwrap_or_default()];
        inline.extend(self.regexp.iter().cloned());

        SearchConfig {
            raw_path,
            patterns: PatternSources {
                inline,
                exact_names: self.line_strings.clone(),
                files: self.file.clone(),
            },
            options: WalkOptions {
                search_from_left: self.left,
                base_directory_only: self.base_directory,
                match_all: self.match_all,
                highlight_matches: self.color,
            },
        }
    }
}

/// Read the search path from stdin as raw bytes, normalized to '/' separators
pub fn read_path<R: Read>(mut input: R) -> Result<OsString> {
    let mut buf = Vec::new();
    input
        .read_to_end(&mut buf)
        .context("Failed to read path from stdin")?;
    Ok(bytes_to_os(to_slash(&buf)))
}

/// Compile the patterns and walk the path of one run
pub fn search(
    config: &SearchConfig,
    highlighter: &dyn Highlighter,
    verbose: bool,
) -> Result<Vec<OsString>, MatchError> {
    let pattern = pattern::compile(&config.patterns)?;

    if verbose {
        eprintln!("remp: pattern: {:?}", pattern.as_str());
        eprintln!(
            "remp: path: {:?}",
            String::from_utf8_lossy(&strip_newlines(os_to_bytes(&config.raw_path)))
        );
        eprintln!(
            "remp: direction: {}",
            if config.options.search_from_left {
                "left to right"
            } else {
                "right to left"
            }
        );
    }

    let results = Walker::new(&pattern, config.options)
        .with_highlighter(highlighter)
        .walk(&config.raw_path);

    if verbose {
        match &results {
            Ok(found) => eprintln!("remp: {} match(es)", found.len()),
            Err(err) => eprintln!("remp: {}", err),
        }
    }

    results
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let raw_path = read_path(io::stdin().lock())?;
    let config = cli.to_config(raw_path);

    let highlighter: &dyn Highlighter = if cli.color {
        &GreenHighlighter
    } else {
        &Plain
    };

    match search(&config, highlighter, cli.verbose) {
        Ok(results) => {
            write_results(&mut io::stdout().lock(), &results)?;
            Ok(())
        }
        Err(err) if err.is_no_match() => {
            if let Some(text) = cli.no_match.as_deref().filter(|t| !t.is_empty()) {
                println!("{}", text);
            }
            Err(err.into())
        }
        Err(err) => Err(err.into()),
    }
}
