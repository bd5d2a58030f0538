//! Read-only adjacency structures and distance tables
//!
//! Graphs are built once from an adjacency listing and never mutated by the
//! engines. Key order follows the listing and drives every order-dependent
//! choice: cycle enumeration order and Dijkstra tie breaks.

use std::collections::HashMap;

use crate::error::{ParcoursError, Result};
use crate::graph::types::{Vertex, Weight};

/// Unweighted directed graph: vertex -> ordered neighbor list
///
/// A neighbor that is not itself a key ("dangling") is allowed. Operations
/// that need the neighbor list of such a vertex fail with `VertexNotFound`.
///
/// # Example
///
/// ```rust
/// use parcours_core::graph::Graph;
///
/// let graph = Graph::from_adjacency([
///     ("A", vec!["B", "C"]),
///     ("B", vec!["C"]),
///     ("C", vec![]),
/// ]);
///
/// assert_eq!(graph.vertex_count(), 3);
/// assert_eq!(graph.edge_count(), 3);
/// assert_eq!(graph.neighbors(&"A"), Some(&["B", "C"][..]));
/// ```
#[derive(Debug, Clone)]
pub struct Graph<V> {
    /// Keys in listing order
    order: Vec<V>,
    adjacency: HashMap<V, Vec<V>>,
}

impl<V: Vertex> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> Graph<V> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Builds a graph from `(vertex, neighbors)` entries.
    ///
    /// A repeated vertex replaces its earlier neighbor list but keeps its
    /// original position in key order.
    pub fn from_adjacency<I, N>(entries: I) -> Self
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = V>,
    {
        let mut graph = Self::new();
        for (vertex, neighbors) in entries {
            graph.insert(vertex, neighbors.into_iter().collect());
        }
        graph
    }

    fn insert(&mut self, vertex: V, neighbors: Vec<V>) {
        if self.adjacency.insert(vertex.clone(), neighbors).is_none() {
            self.order.push(vertex);
        }
    }

    /// Ordered neighbor list of a key, `None` for unknown or dangling vertices.
    pub fn neighbors(&self, vertex: &V) -> Option<&[V]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Checks for a directed edge `from -> to`.
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.neighbors(from)
            .is_some_and(|neighbors| neighbors.contains(to))
    }

    /// Keys in listing order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.order.iter()
    }

    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<V: Vertex> FromIterator<(V, Vec<V>)> for Graph<V> {
    fn from_iter<I: IntoIterator<Item = (V, Vec<V>)>>(iter: I) -> Self {
        Self::from_adjacency(iter)
    }
}

/// Weighted directed graph: vertex -> ordered `(neighbor, weight)` list
///
/// Every weight is finite and nonnegative; construction rejects anything else.
///
/// # Example
///
/// ```rust
/// use parcours_core::graph::WeightedGraph;
///
/// let graph = WeightedGraph::from_adjacency([
///     ("A", vec![("B", 2.0)]),
///     ("B", vec![("C", 3.0)]),
///     ("C", vec![]),
/// ])
/// .unwrap();
///
/// assert_eq!(graph.weight(&"A", &"B").map(|w| w.value()), Some(2.0));
/// assert!(graph.weight(&"A", &"C").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct WeightedGraph<V> {
    order: Vec<V>,
    adjacency: HashMap<V, Vec<(V, Weight)>>,
}

impl<V: Vertex> Default for WeightedGraph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> WeightedGraph<V> {
    /// Creates an empty weighted graph.
    pub fn new() -> Self {
        Self {
            order: Vec::new(),
            adjacency: HashMap::new(),
        }
    }

    /// Builds a weighted graph from `(vertex, [(neighbor, weight)])` entries.
    ///
    /// # Errors
    ///
    /// `InvalidWeight` if any weight is negative, NaN or infinite.
    pub fn from_adjacency<I, N>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, N)>,
        N: IntoIterator<Item = (V, f64)>,
    {
        let mut graph = Self::new();
        for (vertex, edges) in entries {
            let mut weighted = Vec::new();
            for (neighbor, raw) in edges {
                let weight = Weight::new(raw);
                if !weight.is_valid_edge_weight() {
                    return Err(ParcoursError::invalid_weight(&vertex, &neighbor, raw));
                }
                weighted.push((neighbor, weight));
            }
            if graph.adjacency.insert(vertex.clone(), weighted).is_none() {
                graph.order.push(vertex);
            }
        }
        Ok(graph)
    }

    /// Ordered outgoing edges of a key.
    pub fn edges(&self, vertex: &V) -> Option<&[(V, Weight)]> {
        self.adjacency.get(vertex).map(Vec::as_slice)
    }

    /// Weight of the first listed edge `from -> to`.
    pub fn weight(&self, from: &V, to: &V) -> Option<Weight> {
        self.edges(from)?
            .iter()
            .find(|(neighbor, _)| neighbor == to)
            .map(|(_, weight)| *weight)
    }

    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Keys in listing order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.order.iter()
    }

    pub fn vertex_count(&self) -> usize {
        self.order.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Same topology with the weights dropped.
    pub fn to_unweighted(&self) -> Graph<V> {
        Graph::from_adjacency(self.order.iter().map(|vertex| {
            let neighbors = self.adjacency[vertex]
                .iter()
                .map(|(neighbor, _)| neighbor.clone())
                .collect::<Vec<_>>();
            (vertex.clone(), neighbors)
        }))
    }
}

/// Explicit `(from, to, weight)` rows used to measure path lengths
///
/// The table is independent of any graph; keeping it coherent with the graph
/// being searched is up to the caller. When a pair is listed more than once
/// the first row wins.
#[derive(Debug, Clone)]
pub struct DistanceTable<V> {
    rows: Vec<(V, V, Weight)>,
    /// First row index for each `(from, to)` pair
    index: HashMap<(V, V), usize>,
}

impl<V: Vertex> Default for DistanceTable<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Vertex> DistanceTable<V> {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Builds a table from `(from, to, weight)` rows.
    ///
    /// # Errors
    ///
    /// `InvalidWeight` if any weight is negative, NaN or infinite.
    pub fn from_rows<I>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, V, f64)>,
    {
        let mut table = Self::new();
        for (from, to, raw) in rows {
            let weight = Weight::new(raw);
            if !weight.is_valid_edge_weight() {
                return Err(ParcoursError::invalid_weight(&from, &to, raw));
            }
            table.push(from, to, weight);
        }
        Ok(table)
    }

    /// Table holding every edge of a weighted graph, in key then neighbor order.
    pub fn from_weighted_graph(graph: &WeightedGraph<V>) -> Self {
        let mut table = Self::new();
        for vertex in graph.vertices() {
            for (neighbor, weight) in graph.edges(vertex).unwrap_or_default() {
                table.push(vertex.clone(), neighbor.clone(), *weight);
            }
        }
        table
    }

    fn push(&mut self, from: V, to: V, weight: Weight) {
        let position = self.rows.len();
        self.index
            .entry((from.clone(), to.clone()))
            .or_insert(position);
        self.rows.push((from, to, weight));
    }

    /// Weight of the first row matching `from -> to`.
    pub fn lookup(&self, from: &V, to: &V) -> Option<Weight> {
        self.index
            .get(&(from.clone(), to.clone()))
            .map(|&position| self.rows[position].2)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(V, V, Weight)> {
        self.rows.iter()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
