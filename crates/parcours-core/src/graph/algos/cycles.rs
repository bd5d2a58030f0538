use serde::Serialize;

use crate::error::Result;
use crate::graph::algos::shared::{backtrack, set_truncation_if_unset, successors_of, SearchMode};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Cycle, SearchOptions, SearchStats, Vertex};

/// Outcome of a bounded cycle search through one vertex
#[derive(Debug, Clone, Serialize)]
pub struct CycleSearchResult<V> {
    pub cycles: Vec<Cycle<V>>,
    pub truncated: bool,
    pub truncation_reason: Option<String>,
    pub stats: SearchStats,
}

/// Cycles grouped by anchor vertex, in graph key order
///
/// Vertices without any cycle are left out.
#[derive(Debug, Clone, Serialize)]
#[serde(transparent)]
pub struct CycleIndex<V> {
    entries: Vec<(V, Vec<Cycle<V>>)>,
}

impl<V: Vertex> CycleIndex<V> {
    /// Cycles anchored at `vertex`, `None` if it has none
    pub fn get(&self, vertex: &V) -> Option<&[Cycle<V>]> {
        self.entries
            .iter()
            .find(|(anchor, _)| anchor == vertex)
            .map(|(_, cycles)| cycles.as_slice())
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.get(vertex).is_some()
    }

    /// Anchors that have at least one cycle
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(anchor, _)| anchor)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&V, &[Cycle<V>])> {
        self.entries
            .iter()
            .map(|(anchor, cycles)| (anchor, cycles.as_slice()))
    }

    /// Number of anchors
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cycles across all anchors
    pub fn total_cycles(&self) -> usize {
        self.entries.iter().map(|(_, cycles)| cycles.len()).sum()
    }
}

/// Closed walks that leave `vertex` and come back to it
///
/// For every key `u` listed among `vertex`'s neighbors (in key order), each
/// simple path `vertex -> ... -> u` is closed by appending `vertex`. The
/// closing step reuses the listed `vertex -> u` edge in reverse, so this
/// reads the adjacency as symmetric. Self-loops yield nothing: a cycle needs
/// two distinct vertices.
///
/// # Errors
///
/// `VertexNotFound` if `vertex` is not a key, or if the underlying path
/// enumeration reaches a dangling vertex.
///
/// # Example
///
/// ```rust
/// use parcours_core::graph::{cycles_through, Graph};
///
/// let graph = Graph::from_adjacency([
///     ("A", vec!["B"]),
///     ("B", vec!["A"]),
/// ]);
///
/// let cycles = cycles_through(&graph, &"A").unwrap();
/// assert_eq!(cycles.len(), 1);
/// assert_eq!(cycles[0].vertices(), &["A", "B", "A"]);
/// ```
#[tracing::instrument(skip(graph))]
pub fn cycles_through<V, G>(graph: &G, vertex: &V) -> Result<Vec<Cycle<V>>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    Ok(cycles_through_with(graph, vertex, &SearchOptions::default())?.cycles)
}

/// [`cycles_through`] with each underlying path enumeration capped by `opts`
#[tracing::instrument(skip(graph, opts))]
pub fn cycles_through_with<V, G>(
    graph: &G,
    vertex: &V,
    opts: &SearchOptions,
) -> Result<CycleSearchResult<V>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    let neighbors = successors_of(graph, vertex)?;

    let mut result = CycleSearchResult {
        cycles: Vec::new(),
        truncated: false,
        truncation_reason: None,
        stats: SearchStats::default(),
    };

    for other in graph.vertices() {
        if !neighbors.contains(&other) {
            continue;
        }

        let search = backtrack(graph, vertex, other, opts, SearchMode::Exhaustive)?;
        result.stats += search.stats;
        if let Some(reason) = search.truncation_reason.as_deref() {
            set_truncation_if_unset(&mut result.truncated, &mut result.truncation_reason, reason);
        }
        result
            .cycles
            .extend(search.paths.into_iter().map(Cycle::close));
    }

    tracing::debug!(cycles = result.cycles.len(), "cycles_through complete");
    Ok(result)
}

/// Cycles through every vertex of the graph
///
/// Runs [`cycles_through`] once per key. Each cycle appears once per anchor
/// it passes through, rotated to start at that anchor.
///
/// # Errors
///
/// `VertexNotFound` if any enumeration reaches a dangling vertex.
#[tracing::instrument(skip(graph))]
pub fn all_cycles<V, G>(graph: &G) -> Result<CycleIndex<V>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    let mut entries = Vec::new();

    for vertex in graph.vertices() {
        let cycles = cycles_through(graph, vertex)?;
        if !cycles.is_empty() {
            entries.push((vertex.clone(), cycles));
        }
    }

    let index = CycleIndex { entries };
    tracing::debug!(
        anchors = index.len(),
        cycles = index.total_cycles(),
        "all_cycles complete"
    );
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;
    use crate::graph::algos::fixtures::letter_graph;
    use crate::graph::model::Graph;

    fn as_vecs(cycles: &[Cycle<&'static str>]) -> Vec<Vec<&'static str>> {
        cycles.iter().map(|c| c.vertices().to_vec()).collect()
    }

    #[test]
    fn test_cycles_through_leaf() {
        let graph = letter_graph();
        let cycles = cycles_through(&graph, &"H").unwrap();
        assert_eq!(as_vecs(&cycles), vec![vec!["H", "G", "H"]]);
    }

    #[test]
    fn test_cycles_through_emits_only_closed_cycles() {
        let graph = letter_graph();
        let cycles = cycles_through(&graph, &"F").unwrap();
        assert_eq!(
            as_vecs(&cycles),
            vec![
                vec!["F", "E", "F"],
                vec!["F", "G", "E", "F"],
                vec!["F", "G", "F"],
                vec!["F", "E", "G", "F"],
            ]
        );
    }

    #[test]
    fn test_cycles_start_and_end_at_anchor() {
        let graph = letter_graph();
        let cycles = cycles_through(&graph, &"E").unwrap();
        assert_eq!(cycles.len(), 10);
        for cycle in &cycles {
            let vertices = cycle.vertices();
            assert_eq!(vertices.first(), Some(&"E"));
            assert_eq!(vertices.last(), Some(&"E"));
            assert!(cycle.distinct_len() >= 2);
        }
    }

    #[test]
    fn test_cycles_through_missing_vertex() {
        let graph = letter_graph();
        let err = cycles_through(&graph, &"Z").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::VertexNotFound);
    }

    #[test]
    fn test_cycles_through_acyclic() {
        let graph = Graph::from_adjacency([("A", vec!["B"]), ("B", vec!["C"]), ("C", vec![])]);
        assert!(cycles_through(&graph, &"A").unwrap().is_empty());
    }

    #[test]
    fn test_self_loop_is_not_a_cycle() {
        let graph = Graph::from_adjacency([("A", vec!["A"])]);
        assert!(cycles_through(&graph, &"A").unwrap().is_empty());
    }

    #[test]
    fn test_dangling_neighbor_fails_enumeration() {
        let graph = Graph::from_adjacency([("A", vec!["Z", "B"]), ("B", vec!["A"])]);
        let err = cycles_through(&graph, &"A").unwrap_err();
        assert_eq!(err.to_string(), "vertex not found: \"Z\"");
    }

    #[test]
    fn test_dangling_neighbor_never_anchors_a_cycle() {
        let graph = Graph::from_adjacency([("A", vec!["B"]), ("B", vec!["A", "Z"])]);
        let cycles = cycles_through(&graph, &"A").unwrap();
        assert_eq!(as_vecs(&cycles), vec![vec!["A", "B", "A"]]);
    }

    #[test]
    fn test_cycles_through_with_cap() {
        let graph = letter_graph();
        let opts = SearchOptions::default().with_max_paths(1);
        let result = cycles_through_with(&graph, &"F", &opts).unwrap();
        assert_eq!(
            as_vecs(&result.cycles),
            vec![vec!["F", "E", "F"], vec!["F", "G", "F"]]
        );
        assert!(result.truncated);
        assert_eq!(result.truncation_reason.as_deref(), Some("max_paths"));
    }

    #[test]
    fn test_cycles_through_with_huge_time_budget() {
        let graph = letter_graph();
        let opts = SearchOptions::default().with_time_budget(std::time::Duration::MAX);
        let result = cycles_through_with(&graph, &"F", &opts).unwrap();
        assert_eq!(result.cycles.len(), 4);
        assert!(!result.truncated);
    }

    #[test]
    fn test_all_cycles_letter_graph() {
        let graph = letter_graph();
        let index = all_cycles(&graph).unwrap();
        assert_eq!(index.len(), 8);
        let anchors: Vec<_> = index.vertices().copied().collect();
        assert_eq!(anchors, vec!["A", "B", "C", "D", "E", "F", "G", "H"]);
        assert_eq!(index.get(&"H").map(<[_]>::len), Some(1));
        assert_eq!(index.get(&"E").map(<[_]>::len), Some(10));
        assert_eq!(index.total_cycles(), 9 + 6 + 6 + 9 + 10 + 4 + 5 + 1);
    }

    #[test]
    fn test_all_cycles_omits_acyclic_vertices() {
        let graph = Graph::from_adjacency([
            ("A", vec!["B"]),
            ("B", vec!["A"]),
            ("C", vec!["A"]),
        ]);
        let index = all_cycles(&graph).unwrap();
        assert!(index.contains(&"A"));
        assert!(index.contains(&"B"));
        assert!(!index.contains(&"C"));
        assert_eq!(index.len(), 2);
    }

    #[test]
    fn test_all_cycles_empty_graph() {
        let graph: Graph<u32> = Graph::new();
        assert!(all_cycles(&graph).unwrap().is_empty());
    }
}
