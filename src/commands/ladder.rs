//! `wayfind ladder` command - shortest word ladder between two words
//!
//! Inputs are lowercased to match the normalized dictionary before the
//! search runs. Identical start and end words are rejected here as a usage
//! error; the core treats that case as a defined empty result.

use std::path::Path;

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use wayfind_core::error::{Result, WayfindError};
use wayfind_core::ladder::{generate_ladder, Dictionary};

#[derive(Debug, Serialize)]
struct LadderReport {
    begin: String,
    end: String,
    found: bool,
    ladder: Vec<String>,
    rungs: usize,
}

/// Execute the ladder command
pub fn execute(cli: &Cli, begin: &str, end: &str, dict: &Path) -> Result<()> {
    let begin = begin.to_lowercase();
    let end = end.to_lowercase();

    if begin == end {
        return Err(WayfindError::UsageError(format!(
            "start and end words are the same (\"{}\")",
            begin
        )));
    }

    let dictionary = Dictionary::load(dict)?;
    let ladder = generate_ladder(&begin, &end, &dictionary);

    match cli.format {
        OutputFormat::Json => {
            let report = LadderReport {
                begin,
                end,
                found: !ladder.is_empty(),
                rungs: ladder.len(),
                ladder,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            if ladder.is_empty() {
                println!("No word ladder found.");
            } else {
                println!("Word ladder found: {}", ladder.join(" "));
            }
        }
    }

    Ok(())
}
