use crate::error::{ParcoursError, Result};
use crate::graph::algos::shared::{backtrack, SearchMode};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Path, PathSearchResult, SearchOptions, Vertex};

/// Find one simple path from `start` to `end`
///
/// Backtracks over a stack of `(vertex, path-so-far)` pairs and returns as
/// soon as a neighbor equals `end`. The answer is deterministic for a given
/// adjacency ordering but is not guaranteed to be the shortest path; use
/// [`shortest_by_hops`] for that.
///
/// # Errors
///
/// - `VertexNotFound` if either endpoint is not a key
/// - `NotFound` if no path exists (including `start == end`, since a simple
///   path cannot return to its start)
///
/// # Example
///
/// ```rust
/// use parcours_core::graph::{find_path, Graph};
///
/// let graph = Graph::from_adjacency([
///     ("A", vec!["B", "C"]),
///     ("B", vec!["C"]),
///     ("C", vec![]),
/// ]);
///
/// let path = find_path(&graph, &"A", &"C").unwrap();
/// assert_eq!(path.into_vec(), vec!["A", "C"]);
/// ```
#[tracing::instrument(skip(graph))]
pub fn find_path<V, G>(graph: &G, start: &V, end: &V) -> Result<Path<V>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    let result = backtrack(
        graph,
        start,
        end,
        &SearchOptions::default(),
        SearchMode::FirstMatch,
    )?;

    result
        .paths
        .into_iter()
        .next()
        .ok_or_else(|| ParcoursError::not_found(start, end))
}

/// Enumerate every simple path from `start` to `end`
///
/// Paths come back in enumeration order, which later selections use to break
/// ties. The number of simple paths can grow exponentially with the
/// branching factor; [`find_all_paths_with`] bounds the work.
///
/// # Errors
///
/// `VertexNotFound` if either endpoint is not a key, or if the search reaches
/// a dangling vertex.
#[tracing::instrument(skip(graph))]
pub fn find_all_paths<V, G>(graph: &G, start: &V, end: &V) -> Result<Vec<Path<V>>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    let result = backtrack(
        graph,
        start,
        end,
        &SearchOptions::default(),
        SearchMode::Exhaustive,
    )?;

    tracing::debug!(paths = result.paths.len(), "find_all_paths complete");
    Ok(result.paths)
}

/// Enumerate simple paths under the caps in `opts`
///
/// With default options this is exactly [`find_all_paths`]. When a cap is hit
/// the result is marked truncated and keeps the paths found so far.
///
/// # Errors
///
/// As [`find_all_paths`], plus `InvalidValue` for a zero `max_paths` or
/// `max_expansions`.
#[tracing::instrument(skip(graph, opts), fields(max_paths = ?opts.max_paths, max_hops = ?opts.max_hops))]
pub fn find_all_paths_with<V, G>(
    graph: &G,
    start: &V,
    end: &V,
    opts: &SearchOptions,
) -> Result<PathSearchResult<V>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    let result = backtrack(graph, start, end, opts, SearchMode::Exhaustive)?;

    crate::log_search_stats!(&result.stats, "find_all_paths_with");
    if result.truncated {
        tracing::debug!(reason = ?result.truncation_reason, "path enumeration truncated");
    }
    Ok(result)
}

/// Fewest-vertex path from `start` to `end`
///
/// Picks the shortest of [`find_all_paths`]; among equally short paths the
/// first enumerated wins.
///
/// # Errors
///
/// - `VertexNotFound` if either endpoint is not a key
/// - `NotFound` if no path exists
#[tracing::instrument(skip(graph))]
pub fn shortest_by_hops<V, G>(graph: &G, start: &V, end: &V) -> Result<Path<V>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    find_all_paths(graph, start, end)?
        .into_iter()
        .min_by_key(Path::len)
        .ok_or_else(|| ParcoursError::not_found(start, end))
}
