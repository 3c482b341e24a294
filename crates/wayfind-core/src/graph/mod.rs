pub mod dijkstra;
pub mod loader;
pub mod types;

pub use dijkstra::shortest_paths;
pub use loader::load_graph;
pub use types::{Edge, Graph, ShortestPaths, INFINITY};
