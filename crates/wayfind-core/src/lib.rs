//! Core library for wayfind - shortest paths in graphs and word ladders
//!
//! Two independent components: Dijkstra single-source shortest paths over
//! weighted directed graphs, and BFS word-ladder search over one-edit
//! neighbors in a dictionary. Both are single-threaded, allocation-local
//! computations; inputs are read-only during a run.

pub mod error;
pub mod format;
pub mod graph;
pub mod ladder;
pub mod logging;
