//! Graph algorithm implementations
//!
//! Contains concrete implementations of graph algorithms:
//! - `bfs` / `dfs`: Visit orders from a start vertex
//! - `paths`: Backtracking path search (first, all, fewest hops)
//! - `cycles`: Closed walks through a vertex
//! - `weighted`: Path enumeration and lengths over weighted graphs
//! - `dijkstra`: Minimum-weight shortest paths
//! - `shared`: Backtracking core and limit checks used by several engines

pub mod bfs;
pub mod cycles;
pub mod dfs;
pub mod dijkstra;
pub mod paths;
pub(crate) mod shared;
pub mod weighted;

#[cfg(test)]
pub(crate) mod fixtures;

pub use bfs::breadth_first;
pub use cycles::{all_cycles, cycles_through, cycles_through_with, CycleIndex, CycleSearchResult};
pub use dfs::depth_first;
pub use dijkstra::{dijkstra, shortest_path_tree, ShortestPathTree};
pub use paths::{find_all_paths, find_all_paths_with, find_path, shortest_by_hops};
pub use weighted::{
    find_all_weighted_paths, find_all_weighted_paths_with, path_length, shortest_weighted_path,
};
