use crate::error::Result;
use crate::graph::algos::shared::successors_of;
use crate::graph::traversal::GraphProvider;
use crate::graph::types::Vertex;
use std::collections::HashSet;

/// Depth-first visitation order from `start`
///
/// The frontier is a LIFO stack. Each popped vertex is appended to the
/// result, then its neighbors are pushed in listed order unless already
/// visited or already on the stack. Pushing in listed order and popping from
/// the top means the last-listed unvisited neighbor is explored first.
///
/// # Errors
///
/// `VertexNotFound` if `start` is not a key, or if a dangling neighbor is
/// popped.
///
/// # Example
///
/// ```rust
/// use parcours_core::graph::{depth_first, Graph};
///
/// let graph = Graph::from_adjacency([
///     ("A", vec!["B", "C"]),
///     ("B", vec!["D"]),
///     ("C", vec!["D"]),
///     ("D", vec![]),
/// ]);
///
/// assert_eq!(depth_first(&graph, &"A").unwrap(), vec!["A", "C", "D", "B"]);
/// ```
#[tracing::instrument(skip(graph))]
pub fn depth_first<V, G>(graph: &G, start: &V) -> Result<Vec<V>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    crate::ensure_vertex!(graph, start);

    let mut stack: Vec<V> = vec![start.clone()];
    let mut on_stack: HashSet<V> = HashSet::from([start.clone()]);
    let mut visited: HashSet<V> = HashSet::new();
    let mut order: Vec<V> = Vec::new();

    while let Some(current) = stack.pop() {
        on_stack.remove(&current);
        visited.insert(current.clone());
        order.push(current.clone());

        for neighbor in successors_of(graph, &current)? {
            if !visited.contains(neighbor) && !on_stack.contains(neighbor) {
                on_stack.insert(neighbor.clone());
                stack.push(neighbor.clone());
            }
        }
    }

    tracing::debug!(visited = order.len(), "depth_first complete");
    Ok(order)
}
