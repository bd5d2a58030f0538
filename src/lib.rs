//! Parcours - graph traversal and path finding over adjacency lists
//!
//! Re-exports the engines from `parcours-core`. Most callers only need the
//! [`prelude`]:
//!
//! ```rust
//! use parcours::prelude::*;
//!
//! let graph = Graph::from_adjacency([
//!     ("A", vec!["B", "C"]),
//!     ("B", vec!["C"]),
//!     ("C", vec![]),
//! ]);
//!
//! assert_eq!(breadth_first(&graph, &"A").unwrap(), vec!["A", "B", "C"]);
//! assert_eq!(find_all_paths(&graph, &"A", &"C").unwrap().len(), 2);
//! ```

pub use parcours_core::{config, error, graph, logging};

pub use parcours_core::config::EngineConfig;
pub use parcours_core::error::{ErrorKind, ParcoursError, Result};

/// Everything needed to build graphs and run queries
pub mod prelude {
    pub use parcours_core::config::EngineConfig;
    pub use parcours_core::error::{ErrorKind, ParcoursError};
    pub use parcours_core::graph::{
        all_cycles, breadth_first, cycles_through, cycles_through_with, depth_first, dijkstra,
        find_all_paths, find_all_paths_with, find_all_weighted_paths,
        find_all_weighted_paths_with, find_path, path_length, shortest_by_hops,
        shortest_path_tree, shortest_weighted_path, Cycle, CycleIndex, DistanceTable, Graph,
        GraphProvider, Path, SearchOptions, Vertex, Weight, WeightedGraph, WeightedPath,
    };
}
