//! CLI argument parsing for wayfind
//!
//! Uses clap for argument parsing.
//! Supports global flags: --format, --quiet, --verbose, --log-level, --log-json

pub mod parse;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use parse::parse_format;
pub use wayfind_core::format::OutputFormat;

/// Wayfind - shortest-path CLI for weighted graphs and word ladders
#[derive(Parser, Debug)]
#[command(name = "wayfind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format (human, json)
    #[arg(long, global = true, default_value = "human", value_parser = parse_format)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(long, short, global = true)]
    pub quiet: bool,

    /// Report timing and enable debug logging
    #[arg(long, short, global = true)]
    pub verbose: bool,

    /// Log level filter (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "WAYFIND_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Shortest paths from a source vertex in a weighted directed graph
    Route {
        /// Graph file: vertex count on the first line, then one
        /// `src dst weight` edge per line
        graph_file: PathBuf,

        /// Source vertex
        #[arg(long, short, default_value_t = 0)]
        source: usize,

        /// Report only the path to this vertex
        #[arg(long, short = 'D')]
        dest: Option<usize>,
    },

    /// Shortest word ladder between two words
    Ladder {
        /// Start word
        begin: String,

        /// Target word
        end: String,

        /// Dictionary file of valid words (whitespace-separated)
        #[arg(long, short = 'd')]
        dict: PathBuf,
    },
}
