//! Graph file parsing
//!
//! Format: the first non-empty line holds the vertex count; every following
//! non-empty line holds one directed edge as `src dst weight`. Out-of-range
//! endpoints, negative weights, and malformed lines are rejected here so the
//! algorithms only ever see graphs satisfying their invariants.

use std::fs;
use std::path::Path;

use crate::error::{Result, WayfindError};
use crate::graph::types::Graph;

/// Load a graph from a text file
#[tracing::instrument]
pub fn load_graph(path: &Path) -> Result<Graph> {
    let contents = fs::read_to_string(path).map_err(|source| WayfindError::GraphFileUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_graph(&contents, path)
}

fn parse_graph(contents: &str, path: &Path) -> Result<Graph> {
    let malformed = |line: usize, reason: String| WayfindError::MalformedGraph {
        path: path.to_path_buf(),
        line,
        reason,
    };

    let mut lines = contents
        .lines()
        .enumerate()
        .filter(|(_, l)| !l.trim().is_empty());

    let (header_no, header) = lines
        .next()
        .ok_or_else(|| malformed(1, "empty graph file".to_string()))?;
    let num_vertices: usize = header
        .trim()
        .parse()
        .map_err(|_| malformed(header_no + 1, format!("invalid vertex count '{}'", header)))?;

    let mut graph = Graph::new(num_vertices);

    for (line_no, line) in lines {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() != 3 {
            return Err(malformed(
                line_no + 1,
                format!("expected 'src dst weight', got '{}'", line.trim()),
            ));
        }

        let src = parse_vertex(fields[0], line_no, &malformed)?;
        let dst = parse_vertex(fields[1], line_no, &malformed)?;

        // Weights are read as signed so a negative weight is reported as
        // such rather than as a parse failure.
        let weight: i64 = fields[2]
            .parse()
            .map_err(|_| malformed(line_no + 1, format!("invalid weight '{}'", fields[2])))?;
        if weight < 0 {
            return Err(malformed(line_no + 1, format!("negative weight {}", weight)));
        }

        graph.add_edge(src, dst, weight as u64).map_err(|_| {
            malformed(
                line_no + 1,
                format!("edge endpoint out of range (graph has {} vertices)", num_vertices),
            )
        })?;
    }

    Ok(graph)
}

fn parse_vertex(
    field: &str,
    line_no: usize,
    malformed: &dyn Fn(usize, String) -> WayfindError,
) -> Result<usize> {
    field
        .parse()
        .map_err(|_| malformed(line_no + 1, format!("invalid vertex '{}'", field)))
}
