use crate::error::Result;
use crate::graph::algos::shared::successors_of;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::Vertex;
use std::collections::{HashSet, VecDeque};

/// State tracked during BFS traversal
struct BfsState<V> {
    visited: HashSet<V>,
    queued: HashSet<V>,
    frontier: VecDeque<V>,
    order: Vec<V>,
}

impl<V: Vertex> BfsState<V> {
    fn new(start: &V) -> Self {
        Self {
            visited: HashSet::new(),
            queued: HashSet::from([start.clone()]),
            frontier: VecDeque::from([start.clone()]),
            order: Vec::new(),
        }
    }

    fn enqueue(&mut self, vertex: &V) {
        if !self.visited.contains(vertex) && !self.queued.contains(vertex) {
            self.queued.insert(vertex.clone());
            self.frontier.push_back(vertex.clone());
        }
    }
}

/// Breadth-first visitation order from `start`
///
/// The frontier is a FIFO queue. Each dequeued vertex is appended to the
/// result, then its neighbors are enqueued in listed order unless they are
/// already visited or already waiting in the frontier.
///
/// # Errors
///
/// `VertexNotFound` if `start` is not a key, or if a dangling neighbor is
/// dequeued and its own neighbor list has to be read.
///
/// # Example
///
/// ```rust
/// use parcours_core::graph::{breadth_first, Graph};
///
/// let graph = Graph::from_adjacency([
///     ("A", vec!["B", "C"]),
///     ("B", vec!["D"]),
///     ("C", vec!["D"]),
///     ("D", vec![]),
/// ]);
///
/// assert_eq!(breadth_first(&graph, &"A").unwrap(), vec!["A", "B", "C", "D"]);
/// ```
#[tracing::instrument(skip(graph))]
pub fn breadth_first<V, G>(graph: &G, start: &V) -> Result<Vec<V>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    crate::ensure_vertex!(graph, start);

    let mut state = BfsState::new(start);

    while let Some(current) = state.frontier.pop_front() {
        state.queued.remove(&current);
        state.visited.insert(current.clone());
        state.order.push(current.clone());

        for neighbor in successors_of(graph, &current)? {
            state.enqueue(neighbor);
        }
    }

    tracing::debug!(visited = state.order.len(), "breadth_first complete");
    Ok(state.order)
}
