//! Graph model and query engines
//!
//! Provides the adjacency-list graphs and the algorithms that run on them:
//! - Traversal orders (breadth-first, depth-first)
//! - Simple path search, cycle detection and weighted path measurement
//! - Dijkstra shortest paths
//! - Graph provider trait for pluggable adjacency sources

pub mod algos;
pub mod model;
pub mod traversal;
pub mod types;

pub use algos::{
    all_cycles, breadth_first, cycles_through, cycles_through_with, depth_first, dijkstra,
    find_all_paths, find_all_paths_with, find_all_weighted_paths, find_all_weighted_paths_with,
    find_path, path_length, shortest_by_hops, shortest_path_tree, shortest_weighted_path,
    CycleIndex, CycleSearchResult, ShortestPathTree,
};
pub use model::{DistanceTable, Graph, WeightedGraph};
pub use traversal::GraphProvider;
pub use types::{
    Cycle, Path, PathSearchResult, SearchOptions, SearchStats, Vertex, Weight, WeightedPath,
};
