use serde::Serialize;

use crate::error::{Result, WayfindError};

/// Sentinel distance for vertices not reachable from the source.
pub const INFINITY: u64 = u64::MAX;

/// A directed edge to `dst` with a non-negative weight.
///
/// Weights are unsigned by construction; the loader rejects negative
/// weights before a `Graph` is ever built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Edge {
    pub dst: usize,
    pub weight: u64,
}

/// A weighted directed graph with a fixed vertex count, stored as
/// per-vertex adjacency lists.
///
/// Invariant: every edge destination lies in `[0, num_vertices)`.
/// The graph is read-only once handed to the algorithms.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    /// Create a graph with `num_vertices` vertices and no edges
    pub fn new(num_vertices: usize) -> Self {
        Graph {
            adjacency: vec![Vec::new(); num_vertices],
        }
    }

    pub fn num_vertices(&self) -> usize {
        self.adjacency.len()
    }

    /// Add a directed edge. Fails if either endpoint is out of range.
    pub fn add_edge(&mut self, src: usize, dst: usize, weight: u64) -> Result<()> {
        let n = self.num_vertices();
        if src >= n {
            return Err(WayfindError::VertexOutOfRange {
                vertex: src,
                num_vertices: n,
            });
        }
        if dst >= n {
            return Err(WayfindError::VertexOutOfRange {
                vertex: dst,
                num_vertices: n,
            });
        }
        self.adjacency[src].push(Edge { dst, weight });
        Ok(())
    }

    /// Outgoing edges of `src`, in insertion order
    pub fn edges_from(&self, src: usize) -> &[Edge] {
        &self.adjacency[src]
    }

    /// True iff an edge `src -> dst` exists with the given weight
    pub fn has_edge(&self, src: usize, dst: usize, weight: u64) -> bool {
        src < self.num_vertices()
            && self.adjacency[src]
                .iter()
                .any(|e| e.dst == dst && e.weight == weight)
    }
}

/// Result of a single-source shortest-path run: one distance and one
/// optional predecessor per vertex.
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPaths {
    pub source: usize,
    pub distances: Vec<u64>,
    pub predecessors: Vec<Option<usize>>,
}

impl ShortestPaths {
    /// Distance from the source to `vertex`, or `INFINITY` if unreachable
    /// or out of range.
    pub fn distance(&self, vertex: usize) -> u64 {
        self.distances.get(vertex).copied().unwrap_or(INFINITY)
    }

    /// Reconstruct the path from the source to `destination`.
    ///
    /// Returns an empty vector when `destination` is out of range or
    /// unreachable. Otherwise the result starts at the source and ends at
    /// `destination`, inclusive.
    pub fn path_to(&self, destination: usize) -> Vec<usize> {
        if destination >= self.distances.len() || self.distances[destination] == INFINITY {
            return Vec::new();
        }

        let mut path = Vec::new();
        let mut current = Some(destination);
        while let Some(v) = current {
            path.push(v);
            current = self.predecessors[v];
        }
        path.reverse();
        path
    }
}
