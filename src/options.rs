//! Configuration options for fuzzrank.
//!
//! This module provides the `RankOptions` struct and builder, used both by
//! the `fzr` command line and by library callers of [`render`](crate::output::render).

use std::path::PathBuf;

use derive_builder::Builder;

/// fzr - rank identifiers against a fuzzy pattern
///
/// fzr scores every candidate against the query and prints the matching ones,
/// best first.
/// Candidates are read from the command line, from --input, or from stdin.
/// Default options can be set in the FZR_DEFAULT_OPTIONS environment variable.
#[derive(Builder, Debug, Clone, Default, PartialEq)]
#[builder(default)]
#[builder(setter(into))]
#[cfg_attr(feature = "cli", derive(clap::Parser))]
#[cfg_attr(
    feature = "cli",
    command(name = "fzr", args_override_self = true, verbatim_doc_comment, version, about)
)]
pub struct RankOptions {
    //  --- Search ---
    /// Query pattern
    ///
    /// Only the first 63 bytes are used. An empty query matches everything.
    #[cfg_attr(feature = "cli", arg(short, long, default_value = "", help_heading = "Search"))]
    pub query: String,

    /// Print only the most similar candidate
    ///
    /// Candidates the query does not match are also matched the other way
    /// around, looking for the candidate inside the query.
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Search"))]
    pub best: bool,

    /// Maximum number of results to print
    #[cfg_attr(feature = "cli", arg(short, long, help_heading = "Search"))]
    pub limit: Option<usize>,

    //  --- Display ---
    /// Wrap the matched parts of each result in brackets
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Display"))]
    pub highlight: bool,

    /// Print the score before each result
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Display"))]
    pub print_score: bool,

    /// Print the alignment table after each result (debugging)
    #[cfg_attr(feature = "cli", arg(long, help_heading = "Display"))]
    pub table: bool,

    //  --- Input ---
    /// Read candidates from this file, one per line
    #[cfg_attr(feature = "cli", arg(short, long, help_heading = "Input"))]
    pub input: Option<PathBuf>,

    /// Candidates to rank
    ///
    /// When empty, candidates are read from --input or from stdin.
    #[cfg_attr(feature = "cli", arg(help_heading = "Input"))]
    pub candidates: Vec<String>,
}
