use crate::error::{ParcoursError, Result};
use crate::graph::algos::shared::{backtrack, SearchMode};
use crate::graph::model::{DistanceTable, WeightedGraph};
use crate::graph::types::{Path, PathSearchResult, SearchOptions, Vertex, Weight, WeightedPath};

/// Enumerate every simple path of a weighted graph
///
/// Same backtracking and ordering as
/// [`find_all_paths`](super::paths::find_all_paths), walking the vertex
/// component of each `(neighbor, weight)` pair. Weights play no part in the
/// enumeration.
///
/// # Errors
///
/// `VertexNotFound` if an endpoint is not a key, or if the search expands a
/// dangling vertex.
#[tracing::instrument(skip(graph))]
pub fn find_all_weighted_paths<V: Vertex>(
    graph: &WeightedGraph<V>,
    start: &V,
    end: &V,
) -> Result<Vec<Path<V>>> {
    Ok(find_all_weighted_paths_with(graph, start, end, &SearchOptions::default())?.paths)
}

/// [`find_all_weighted_paths`] under the caps in `opts`
#[tracing::instrument(skip(graph, opts))]
pub fn find_all_weighted_paths_with<V: Vertex>(
    graph: &WeightedGraph<V>,
    start: &V,
    end: &V,
    opts: &SearchOptions,
) -> Result<PathSearchResult<V>> {
    let result = backtrack(graph, start, end, opts, SearchMode::Exhaustive)?;
    crate::log_search_stats!(&result.stats, "find_all_weighted_paths");
    Ok(result)
}

/// Total weight of a vertex sequence measured against a distance table
///
/// Each consecutive pair takes the weight of the first matching row. Paths
/// with fewer than two vertices have length zero.
///
/// # Errors
///
/// `EdgeNotFound` for the first consecutive pair without a row.
///
/// # Example
///
/// ```rust
/// use parcours_core::graph::{path_length, DistanceTable};
///
/// let table = DistanceTable::from_rows([("A", "B", 2.0), ("B", "C", 3.0)]).unwrap();
///
/// let length = path_length(&["A", "B", "C"], &table).unwrap();
/// assert_eq!(length.value(), 5.0);
/// assert!(path_length(&["A", "C"], &table).is_err());
/// ```
pub fn path_length<V: Vertex>(path: &[V], table: &DistanceTable<V>) -> Result<Weight> {
    path.windows(2)
        .map(|pair| {
            table
                .lookup(&pair[0], &pair[1])
                .ok_or_else(|| ParcoursError::edge_not_found(&pair[0], &pair[1]))
        })
        .sum()
}

/// Minimum-weight simple path by exhaustive enumeration
///
/// Every path from [`find_all_weighted_paths`] is measured with
/// [`path_length`]; the lightest wins and ties keep the earlier path. The
/// table is consulted for weights, not the graph, so the two are expected to
/// agree.
///
/// # Errors
///
/// - `VertexNotFound` if an endpoint is not a key
/// - `EdgeNotFound` if an enumerated path steps over a pair the table lacks
/// - `NotFound` if no path exists
#[tracing::instrument(skip(graph, table))]
pub fn shortest_weighted_path<V: Vertex>(
    graph: &WeightedGraph<V>,
    table: &DistanceTable<V>,
    start: &V,
    end: &V,
) -> Result<WeightedPath<V>> {
    let mut best: Option<WeightedPath<V>> = None;

    for path in find_all_weighted_paths(graph, start, end)? {
        let weight = path_length(path.as_slice(), table)?;
        let lighter = best
            .as_ref()
            .is_none_or(|current| weight < current.weight);
        if lighter {
            best = Some(WeightedPath::new(weight, path));
        }
    }

    let best = best.ok_or_else(|| ParcoursError::not_found(start, end))?;
    tracing::debug!(weight = %best.weight, hops = best.path.hops(), "shortest_weighted_path");
    Ok(best)
}
