//! Core module - the matching engine
//!
//! This module provides:
//! - Run configuration (SearchConfig)
//! - Pattern compilation from inline, exact-name and file sources
//! - The prefix walker
//! - Range highlighting behind a swappable Highlighter
//! - Path normalization utilities

pub mod config;
pub mod error;
pub mod highlight;
pub mod paths;
pub mod pattern;
pub mod walker;
