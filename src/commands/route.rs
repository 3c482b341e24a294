//! `wayfind route` command - shortest paths in a weighted directed graph
//!
//! Runs Dijkstra from `--source` (default 0) over the graph file and prints
//! the path to each vertex as space-separated indices followed by a total
//! cost line. With `--dest`, only that vertex is reported and an unreachable
//! destination prints "No path found."; without it, unreachable vertices are
//! skipped, matching the one-line-per-reachable-vertex listing.

use std::path::Path;

use serde::Serialize;

use crate::cli::{Cli, OutputFormat};
use wayfind_core::error::{Result, WayfindError};
use wayfind_core::graph::{load_graph, shortest_paths, ShortestPaths, INFINITY};

#[derive(Debug, Serialize)]
struct RouteReport {
    source: usize,
    num_vertices: usize,
    routes: Vec<RouteEntry>,
}

#[derive(Debug, Serialize)]
struct RouteEntry {
    destination: usize,
    found: bool,
    path: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    total_cost: Option<u64>,
}

impl RouteEntry {
    fn new(paths: &ShortestPaths, destination: usize) -> Self {
        let path = paths.path_to(destination);
        let found = !path.is_empty();
        RouteEntry {
            destination,
            found,
            path,
            total_cost: match paths.distance(destination) {
                INFINITY => None,
                cost => Some(cost),
            },
        }
    }
}

/// Execute the route command
pub fn execute(cli: &Cli, graph_file: &Path, source: usize, dest: Option<usize>) -> Result<()> {
    let graph = load_graph(graph_file)?;

    if let Some(destination) = dest {
        if destination >= graph.num_vertices() {
            return Err(WayfindError::VertexOutOfRange {
                vertex: destination,
                num_vertices: graph.num_vertices(),
            });
        }
    }

    let paths = shortest_paths(&graph, source)?;

    let destinations: Vec<usize> = match dest {
        Some(destination) => vec![destination],
        None => (0..graph.num_vertices()).collect(),
    };
    let routes: Vec<RouteEntry> = destinations
        .iter()
        .map(|&destination| RouteEntry::new(&paths, destination))
        .collect();

    match cli.format {
        OutputFormat::Json => {
            let report = RouteReport {
                source,
                num_vertices: graph.num_vertices(),
                routes,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Human => {
            for entry in &routes {
                if let Some(total_cost) = entry.total_cost {
                    let rendered: Vec<String> =
                        entry.path.iter().map(|v| v.to_string()).collect();
                    println!("{}", rendered.join(" "));
                    println!("Total cost is {}", total_cost);
                } else if dest.is_some() && !cli.quiet {
                    println!("No path found.");
                }
            }
        }
    }

    Ok(())
}
