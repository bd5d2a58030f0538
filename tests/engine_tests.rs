//! Integration tests for the parcours engines
//!
//! These run each engine through the facade on shared graphs.

mod common;

use std::collections::HashMap;

use parcours::prelude::*;

use crate::common::{letter_graph, road_network, weighted_chain};

// ============================================================================
// Traversal
// ============================================================================

#[test]
fn test_letter_graph_breadth_first() {
    let graph = letter_graph();
    assert_eq!(
        breadth_first(&graph, &"A").unwrap(),
        vec!["A", "B", "D", "E", "C", "F", "G", "H"]
    );
}

#[test]
fn test_letter_graph_depth_first() {
    let graph = letter_graph();
    assert_eq!(
        depth_first(&graph, &"A").unwrap(),
        vec!["A", "E", "G", "H", "F", "D", "C", "B"]
    );
}

#[test]
fn test_traversal_over_weighted_graph() {
    let graph = road_network();
    let order = breadth_first(&graph, &"south").unwrap();
    assert_eq!(order, vec!["south", "north", "mill", "harbor"]);
}

#[test]
fn test_traversal_with_integer_vertices() {
    let graph: Graph<u32> = [(1, vec![2, 3]), (2, vec![4]), (3, vec![4]), (4, vec![])]
        .into_iter()
        .collect();
    assert_eq!(breadth_first(&graph, &1).unwrap(), vec![1, 2, 3, 4]);
    assert_eq!(depth_first(&graph, &1).unwrap(), vec![1, 3, 4, 2]);
}

// ============================================================================
// Path search
// ============================================================================

#[test]
fn test_find_path_absent_vertex() {
    let graph = letter_graph();
    let err = find_path(&graph, &"A", &"Z").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::VertexNotFound);
    assert!(matches!(err, ParcoursError::VertexNotFound { .. }));
}

#[test]
fn test_find_path_back_across_letter_graph() {
    let graph = letter_graph();
    assert_eq!(find_path(&graph, &"C", &"A").unwrap().into_vec(), vec!["C", "D", "A"]);

    let all: Vec<_> = find_all_paths(&graph, &"C", &"A")
        .unwrap()
        .into_iter()
        .map(Path::into_vec)
        .collect();
    assert_eq!(
        all,
        vec![vec!["C", "D", "A"], vec!["C", "D", "E", "A"], vec!["C", "B", "A"]]
    );
}

#[test]
fn test_all_paths_count_letter_graph() {
    let graph = letter_graph();
    assert_eq!(find_all_paths(&graph, &"B", &"F").unwrap().len(), 8);
}

#[test]
fn test_tuple_vertices() {
    let graph = Graph::from_adjacency([
        ((0, 0), vec![(0, 1), (1, 0)]),
        ((0, 1), vec![(1, 1)]),
        ((1, 0), vec![(1, 1)]),
        ((1, 1), vec![]),
    ]);
    let path = shortest_by_hops(&graph, &(0, 0), &(1, 1)).unwrap();
    assert_eq!(path.hops(), 2);
    assert_eq!(find_all_paths(&graph, &(0, 0), &(1, 1)).unwrap().len(), 2);
}

// ============================================================================
// Cycles
// ============================================================================

#[test]
fn test_cycles_through_letter_graph() {
    let graph = letter_graph();
    let cycles = cycles_through(&graph, &"H").unwrap();
    assert_eq!(cycles.len(), 1);
    assert_eq!(cycles[0].vertices(), &["H", "G", "H"]);
    assert_eq!(cycles[0].anchor(), Some(&"H"));
}

#[test]
fn test_all_cycles_counts() {
    let graph = letter_graph();
    let index = all_cycles(&graph).unwrap();
    let counts: Vec<(&str, usize)> = index
        .iter()
        .map(|(anchor, cycles)| (*anchor, cycles.len()))
        .collect();
    assert_eq!(
        counts,
        vec![
            ("A", 9),
            ("B", 6),
            ("C", 6),
            ("D", 9),
            ("E", 10),
            ("F", 4),
            ("G", 5),
            ("H", 1),
        ]
    );
}

// ============================================================================
// Weighted paths and Dijkstra
// ============================================================================

#[test]
fn test_dijkstra_chain() {
    let graph = weighted_chain();
    let best = dijkstra(&graph, &"A", &"C").unwrap();
    assert_eq!(best.weight, Weight::from(5));
    assert_eq!(best.path.into_vec(), vec!["A", "B", "C"]);
}

#[test]
fn test_road_network_detour() {
    let graph = road_network();
    let best = dijkstra(&graph, &"depot", &"harbor").unwrap();
    assert_eq!(best.weight, Weight::from(8));
    assert_eq!(best.path.as_slice(), &["depot", "south", "north", "harbor"]);

    let table = DistanceTable::from_weighted_graph(&graph);
    let exhaustive = shortest_weighted_path(&graph, &table, &"depot", &"harbor").unwrap();
    assert_eq!(exhaustive, best);
}

#[test]
fn test_path_length_against_separate_table() {
    let table = DistanceTable::from_rows([
        ("depot", "south", 1.0),
        ("south", "mill", 7.0),
        ("mill", "harbor", 1.0),
    ])
    .unwrap();
    let length = path_length(&["depot", "south", "mill", "harbor"], &table).unwrap();
    assert_eq!(length.value(), 9.0);

    let err = path_length(&["depot", "harbor"], &table).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EdgeNotFound);
}

#[test]
fn test_shortest_path_tree_distances() {
    let graph = road_network();
    let tree = shortest_path_tree(&graph, &"depot").unwrap();
    assert_eq!(tree.distance_to(&"south"), Some(Weight::from(1)));
    assert_eq!(tree.distance_to(&"north"), Some(Weight::from(3)));
    assert_eq!(tree.distance_to(&"mill"), Some(Weight::from(8)));
    assert_eq!(tree.distance_to(&"harbor"), Some(Weight::from(8)));
    assert_eq!(tree.reachable().len(), 5);
}

#[test]
fn test_invalid_weight_rejected() {
    let err = WeightedGraph::from_adjacency([("A", vec![("B", -1.0)])]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
    assert_eq!(err.error_type(), "invalid_weight");

    let err = DistanceTable::from_rows([("A", "B", f64::NAN)]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidInput);
}

// ============================================================================
// Custom providers and serialization
// ============================================================================

/// Adjacency with every edge turned around
struct Reversed {
    keys: Vec<u32>,
    incoming: HashMap<u32, Vec<u32>>,
}

impl Reversed {
    fn of(graph: &Graph<u32>) -> Self {
        let keys: Vec<u32> = graph.vertices().copied().collect();
        let mut incoming: HashMap<u32, Vec<u32>> =
            keys.iter().map(|&key| (key, Vec::new())).collect();
        for &from in &keys {
            for &to in graph.neighbors(&from).unwrap_or_default() {
                incoming.entry(to).or_default().push(from);
            }
        }
        Reversed { keys, incoming }
    }
}

impl GraphProvider<u32> for Reversed {
    fn contains_vertex(&self, vertex: &u32) -> bool {
        self.incoming.contains_key(vertex)
    }

    fn successors<'a>(&'a self, vertex: &u32) -> Option<Vec<&'a u32>> {
        self.incoming.get(vertex).map(|list| list.iter().collect())
    }

    fn vertices(&self) -> Vec<&u32> {
        self.keys.iter().collect()
    }
}

#[test]
fn test_engines_accept_custom_provider() {
    let graph = Graph::from_adjacency([(1u32, vec![2]), (2, vec![3]), (3, vec![])]);
    let reversed = Reversed::of(&graph);

    assert_eq!(breadth_first(&reversed, &3).unwrap(), vec![3, 2, 1]);
    assert_eq!(find_path(&reversed, &3, &1).unwrap().into_vec(), vec![3, 2, 1]);
    assert_eq!(
        find_path(&reversed, &1, &3).unwrap_err().kind(),
        ErrorKind::NotFound
    );
}

#[test]
fn test_results_serialize_to_json() {
    let graph = weighted_chain();
    let best = dijkstra(&graph, &"A", &"C").unwrap();
    let json = serde_json::to_value(&best).unwrap();
    assert_eq!(json, serde_json::json!({"weight": 5.0, "path": ["A", "B", "C"]}));

    let cycles = all_cycles(&letter_graph()).unwrap();
    let json = serde_json::to_value(&cycles).unwrap();
    assert_eq!(json[7], serde_json::json!(["H", [["H", "G", "H"]]]));
}
