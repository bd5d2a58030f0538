use crate::graph::model::{Graph, WeightedGraph};
use crate::graph::types::Vertex;

/// Trait for providing graph adjacency to the engines
///
/// `successors` returns `None` when the vertex is not a key; the engines turn
/// that into `VertexNotFound`.
pub trait GraphProvider<V: Vertex> {
    fn contains_vertex(&self, vertex: &V) -> bool;
    fn successors<'a>(&'a self, vertex: &V) -> Option<Vec<&'a V>>;
    fn vertices(&self) -> Vec<&V>;
}

impl<V: Vertex> GraphProvider<V> for Graph<V> {
    fn contains_vertex(&self, vertex: &V) -> bool {
        Graph::contains_vertex(self, vertex)
    }

    fn successors<'a>(&'a self, vertex: &V) -> Option<Vec<&'a V>> {
        self.neighbors(vertex)
            .map(|neighbors| neighbors.iter().collect())
    }

    fn vertices(&self) -> Vec<&V> {
        Graph::vertices(self).collect()
    }
}

/// Weighted graphs expose the vertex component of each `(neighbor, weight)` pair
impl<V: Vertex> GraphProvider<V> for WeightedGraph<V> {
    fn contains_vertex(&self, vertex: &V) -> bool {
        WeightedGraph::contains_vertex(self, vertex)
    }

    fn successors<'a>(&'a self, vertex: &V) -> Option<Vec<&'a V>> {
        self.edges(vertex)
            .map(|edges| edges.iter().map(|(neighbor, _)| neighbor).collect())
    }

    fn vertices(&self) -> Vec<&V> {
        WeightedGraph::vertices(self).collect()
    }
}
