use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::{Result, WayfindError};
use crate::graph::types::{Graph, ShortestPaths, INFINITY};

/// Wrapper for BinaryHeap to use as min-heap (ordered by tentative distance)
#[derive(Debug, Clone, PartialEq, Eq)]
struct HeapEntry {
    vertex: usize,
    distance: u64,
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

/// Compute single-source shortest paths with Dijkstra's algorithm.
///
/// Distances are exact for graphs with non-negative weights, which the
/// `Graph` type guarantees. Unreachable vertices keep the `INFINITY`
/// sentinel and a `None` predecessor. Ties between equal-distance frontier
/// entries are resolved arbitrarily; any valid shortest path may be
/// reported.
///
/// Fails with `VertexOutOfRange` when `source` is not a vertex of the
/// graph.
#[tracing::instrument(skip(graph), fields(num_vertices = graph.num_vertices(), source = source))]
pub fn shortest_paths(graph: &Graph, source: usize) -> Result<ShortestPaths> {
    let n = graph.num_vertices();
    if source >= n {
        return Err(WayfindError::VertexOutOfRange {
            vertex: source,
            num_vertices: n,
        });
    }

    let mut distances = vec![INFINITY; n];
    let mut predecessors: Vec<Option<usize>> = vec![None; n];
    let mut finalized = vec![false; n];

    distances[source] = 0;

    let mut heap: BinaryHeap<Reverse<HeapEntry>> = BinaryHeap::new();
    heap.push(Reverse(HeapEntry {
        vertex: source,
        distance: 0,
    }));

    while let Some(Reverse(HeapEntry { vertex, .. })) = heap.pop() {
        // Lazy deletion: a vertex may appear in the heap once per
        // relaxation. Only the first pop (smallest distance) counts.
        if finalized[vertex] {
            continue;
        }
        finalized[vertex] = true;

        for edge in graph.edges_from(vertex) {
            if finalized[edge.dst] {
                continue;
            }
            // Saturating keeps pathological weight sums from wrapping; a
            // saturated total never beats a finite competitor.
            let candidate = distances[vertex].saturating_add(edge.weight);
            if candidate < distances[edge.dst] {
                distances[edge.dst] = candidate;
                predecessors[edge.dst] = Some(vertex);
                heap.push(Reverse(HeapEntry {
                    vertex: edge.dst,
                    distance: candidate,
                }));
            }
        }
    }

    tracing::debug!(
        reachable = distances.iter().filter(|&&d| d != INFINITY).count(),
        "dijkstra_complete"
    );

    Ok(ShortestPaths {
        source,
        distances,
        predecessors,
    })
}
