//! Command dispatch logic for wayfind

use std::time::Instant;

use crate::cli::{Cli, Commands};
use wayfind_core::error::Result;
use tracing::debug;

pub mod ladder;
pub mod route;

pub fn run(cli: &Cli, start: Instant) -> Result<()> {
    let result = match &cli.command {
        None => {
            print_banner();
            Ok(())
        }
        Some(Commands::Route {
            graph_file,
            source,
            dest,
        }) => route::execute(cli, graph_file, *source, *dest),
        Some(Commands::Ladder { begin, end, dict }) => ladder::execute(cli, begin, end, dict),
    };

    debug!(elapsed = ?start.elapsed(), "command_complete");

    result
}

fn print_banner() {
    println!("wayfind {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("A shortest-path CLI for weighted graphs and word ladders.");
    println!();
    println!("Run `wayfind --help` for usage information.");
}
