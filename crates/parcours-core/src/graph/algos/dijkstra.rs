use std::collections::HashMap;
use std::time::Instant;

use crate::error::{ParcoursError, Result};
use crate::graph::model::WeightedGraph;
use crate::graph::types::{Path, Vertex, Weight, WeightedPath};

/// Settled distances and predecessors from a single source
///
/// Produced by [`shortest_path_tree`]. Keys the search never reached keep an
/// infinite distance and are reported as unreachable.
#[derive(Debug, Clone)]
pub struct ShortestPathTree<V: Vertex> {
    source: V,
    distances: HashMap<V, Weight>,
    predecessors: HashMap<V, V>,
    /// Vertices in the order they were settled
    settled: Vec<V>,
}

impl<V: Vertex> ShortestPathTree<V> {
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Settled distance of `vertex`, `None` if it is unreachable or unknown
    pub fn distance_to(&self, vertex: &V) -> Option<Weight> {
        self.distances
            .get(vertex)
            .copied()
            .filter(Weight::is_finite)
    }

    /// Vertices reached from the source, in settle order
    pub fn reachable(&self) -> &[V] {
        &self.settled
    }

    /// Minimum-weight path from the source to `target`
    ///
    /// # Errors
    ///
    /// - `VertexNotFound` if `target` is not a key of the graph
    /// - `Unreachable` if no finite distance was found or the predecessor
    ///   chain does not lead back to the source
    pub fn path_to(&self, target: &V) -> Result<WeightedPath<V>> {
        let distance = *self
            .distances
            .get(target)
            .ok_or_else(|| ParcoursError::vertex_not_found(target))?;
        if !distance.is_finite() {
            return Err(ParcoursError::unreachable(&self.source, target));
        }

        let mut reversed = vec![target.clone()];
        let mut current = target;
        while current != &self.source {
            // A chain longer than the vertex count can only be a loop
            if reversed.len() > self.distances.len() {
                return Err(ParcoursError::unreachable(&self.source, target));
            }
            current = self
                .predecessors
                .get(current)
                .ok_or_else(|| ParcoursError::unreachable(&self.source, target))?;
            reversed.push(current.clone());
        }
        reversed.reverse();

        Ok(WeightedPath::new(distance, Path::new(reversed)))
    }
}

/// Single-source shortest distances over nonnegative weights
///
/// Every key starts at infinity except the source at zero. Each round picks
/// the unvisited vertex with the smallest distance by linear scan, ties going
/// to the earliest key, and stops once that minimum is infinite. Relaxation
/// replaces a distance only on a strict improvement.
///
/// # Errors
///
/// `VertexNotFound` if `source` is not a key, or if a settled vertex has an
/// edge to a vertex that is not a key.
#[tracing::instrument(skip(graph))]
pub fn shortest_path_tree<V: Vertex>(
    graph: &WeightedGraph<V>,
    source: &V,
) -> Result<ShortestPathTree<V>> {
    crate::ensure_vertex!(graph, source);

    let start = Instant::now();
    let mut distances: HashMap<V, Weight> = graph
        .vertices()
        .map(|vertex| (vertex.clone(), Weight::INFINITY))
        .collect();
    distances.insert(source.clone(), Weight::ZERO);

    let mut predecessors: HashMap<V, V> = HashMap::new();
    let mut unvisited: Vec<&V> = graph.vertices().collect();
    let mut settled: Vec<V> = Vec::new();

    while let Some((index, current, current_distance)) = closest(&unvisited, &distances) {
        if !current_distance.is_finite() {
            break;
        }
        unvisited.remove(index);
        settled.push(current.clone());

        for (neighbor, weight) in graph.edges(current).unwrap_or_default() {
            let known = distances
                .get(neighbor)
                .copied()
                .ok_or_else(|| ParcoursError::vertex_not_found(neighbor))?;
            let candidate = current_distance + *weight;
            if candidate < known {
                distances.insert(neighbor.clone(), candidate);
                predecessors.insert(neighbor.clone(), current.clone());
            }
        }
    }

    crate::trace_time!(start, "shortest_path_tree", settled = settled.len());

    Ok(ShortestPathTree {
        source: source.clone(),
        distances,
        predecessors,
        settled,
    })
}

/// First unvisited vertex with the minimum tentative distance
fn closest<'a, V: Vertex>(
    unvisited: &[&'a V],
    distances: &HashMap<V, Weight>,
) -> Option<(usize, &'a V, Weight)> {
    let mut best: Option<(usize, &'a V, Weight)> = None;
    for (index, &vertex) in unvisited.iter().enumerate() {
        let distance = distances.get(vertex).copied().unwrap_or(Weight::INFINITY);
        match best {
            Some((_, _, current)) if distance >= current => {}
            _ => best = Some((index, vertex, distance)),
        }
    }
    best
}

/// Minimum-weight path between two vertices
///
/// Runs [`shortest_path_tree`] from `source` and walks the predecessor chain
/// back from `target`. `source == target` yields a zero-weight single-vertex
/// path.
///
/// # Errors
///
/// - `VertexNotFound` if `source` or `target` is not a key, or a relaxed
///   edge leads to a vertex that is not a key
/// - `Unreachable` if `target` cannot be reached from `source`
///
/// # Example
///
/// ```rust
/// use parcours_core::graph::{dijkstra, WeightedGraph};
///
/// let graph = WeightedGraph::from_adjacency([
///     ("A", vec![("B", 2.0)]),
///     ("B", vec![("C", 3.0)]),
///     ("C", vec![]),
/// ])
/// .unwrap();
///
/// let best = dijkstra(&graph, &"A", &"C").unwrap();
/// assert_eq!(best.weight.value(), 5.0);
/// assert_eq!(best.path.as_slice(), &["A", "B", "C"]);
/// ```
#[tracing::instrument(skip(graph))]
pub fn dijkstra<V: Vertex>(
    graph: &WeightedGraph<V>,
    source: &V,
    target: &V,
) -> Result<WeightedPath<V>> {
    crate::ensure_vertex!(graph, source);
    crate::ensure_vertex!(graph, target);

    let tree = shortest_path_tree(graph, source)?;
    let best = tree.path_to(target)?;

    tracing::debug!(
        weight = %best.weight,
        hops = best.path.hops(),
        settled = tree.reachable().len(),
        "dijkstra complete"
    );
    Ok(best)
}
