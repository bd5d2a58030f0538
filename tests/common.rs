//! Graphs shared by the integration tests

use parcours::prelude::*;

/// Undirected letter graph listed as symmetric adjacency
#[allow(dead_code)]
pub fn letter_graph() -> Graph<&'static str> {
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

/// `A -(2)-> B -(3)-> C`
#[allow(dead_code)]
pub fn weighted_chain() -> WeightedGraph<&'static str> {
    WeightedGraph::from_adjacency([
        ("A", vec![("B", 2.0)]),
        ("B", vec![("C", 3.0)]),
        ("C", vec![]),
    ])
    .unwrap()
}

/// Small road network with a cheaper detour around the direct edges
#[allow(dead_code)]
pub fn road_network() -> WeightedGraph<&'static str> {
    WeightedGraph::from_adjacency([
        ("depot", vec![("north", 4.0), ("south", 1.0), ("harbor", 12.0)]),
        ("north", vec![("harbor", 5.0)]),
        ("south", vec![("north", 2.0), ("mill", 7.0)]),
        ("mill", vec![("harbor", 1.0)]),
        ("harbor", vec![]),
    ])
    .unwrap()
}
