//! Graphs shared by the engine unit tests

use crate::graph::model::{Graph, WeightedGraph};

/// Undirected letter graph listed as symmetric adjacency
pub(crate) fn letter_graph() -> Graph<&'static str> {
    Graph::from_adjacency([
        ("A", vec!["B", "D", "E"]),
        ("B", vec!["A", "C"]),
        ("C", vec!["B", "D"]),
        ("D", vec!["A", "C", "E"]),
        ("E", vec!["A", "D", "F", "G"]),
        ("F", vec!["E", "G"]),
        ("G", vec!["E", "F", "H"]),
        ("H", vec!["G"]),
    ])
}

/// `A -(2)-> B -(3)-> C`, no direct `A -> C`
pub(crate) fn weighted_chain() -> WeightedGraph<&'static str> {
    WeightedGraph::from_adjacency([
        ("A", vec![("B", 2.0)]),
        ("B", vec![("C", 3.0)]),
        ("C", vec![]),
    ])
    .unwrap()
}

/// Diamond where the two-hop route beats the direct edge
///
/// `S -> A (1)`, `S -> B (4)`, `S -> T (10)`, `A -> B (1)`, `A -> T (6)`,
/// `B -> T (2)`
pub(crate) fn weighted_diamond() -> WeightedGraph<&'static str> {
    WeightedGraph::from_adjacency([
        ("S", vec![("A", 1.0), ("B", 4.0), ("T", 10.0)]),
        ("A", vec![("B", 1.0), ("T", 6.0)]),
        ("B", vec![("T", 2.0)]),
        ("T", vec![]),
    ])
    .unwrap()
}
