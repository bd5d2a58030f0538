use std::time::Instant;

use crate::error::{ParcoursError, Result};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::{Path, PathSearchResult, SearchOptions, SearchStats, Vertex};

/// Whether a backtracking search stops at the first completed path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SearchMode {
    FirstMatch,
    Exhaustive,
}

/// Neighbor list of a vertex, or `VertexNotFound` if it is not a key
pub(crate) fn successors_of<'a, V, G>(graph: &'a G, vertex: &V) -> Result<Vec<&'a V>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    graph
        .successors(vertex)
        .ok_or_else(|| ParcoursError::vertex_not_found(vertex))
}

pub(crate) fn set_truncation(
    truncated: &mut bool,
    truncation_reason: &mut Option<String>,
    reason: &str,
) {
    *truncated = true;
    *truncation_reason = Some(reason.to_string());
}

pub(crate) fn set_truncation_if_unset(
    truncated: &mut bool,
    truncation_reason: &mut Option<String>,
    reason: &str,
) {
    *truncated = true;
    if truncation_reason.is_none() {
        *truncation_reason = Some(reason.to_string());
    }
}

/// Check expansion and time caps; returns false if the search should stop
pub(crate) fn check_limits(
    expansions: u64,
    deadline: Option<Instant>,
    truncated: &mut bool,
    truncation_reason: &mut Option<String>,
    opts: &SearchOptions,
) -> bool {
    if let Some(max) = opts.max_expansions {
        if expansions >= max as u64 {
            set_truncation(truncated, truncation_reason, "max_expansions");
            return false;
        }
    }

    if let Some(deadline) = deadline {
        if Instant::now() >= deadline {
            set_truncation(truncated, truncation_reason, "time_budget");
            return false;
        }
    }

    true
}

/// State tracked during path-aware backtracking
struct BacktrackState<V> {
    stack: Vec<(V, Vec<V>)>,
    paths: Vec<Path<V>>,
    stats: SearchStats,
    truncated: bool,
    truncation_reason: Option<String>,
}

impl<V: Vertex> BacktrackState<V> {
    fn new(start: &V) -> Self {
        Self {
            stack: vec![(start.clone(), vec![start.clone()])],
            paths: Vec::new(),
            stats: SearchStats::default(),
            truncated: false,
            truncation_reason: None,
        }
    }

    fn finish(self) -> PathSearchResult<V> {
        PathSearchResult {
            paths: self.paths,
            truncated: self.truncated,
            truncation_reason: self.truncation_reason,
            stats: self.stats,
        }
    }
}

/// Path-aware depth-first backtracking from `start` to `end`
///
/// The stack holds `(vertex, path-so-far)` pairs. Each popped vertex offers
/// its neighbors that are not already on its path, in listed order. A
/// neighbor equal to `end` completes a path; in exhaustive mode it is still
/// pushed and expanded like any other vertex, which cannot produce duplicates
/// because every extension of it would revisit `end`.
pub(crate) fn backtrack<V, G>(
    graph: &G,
    start: &V,
    end: &V,
    opts: &SearchOptions,
    mode: SearchMode,
) -> Result<PathSearchResult<V>>
where
    V: Vertex,
    G: GraphProvider<V> + ?Sized,
{
    crate::ensure_vertex!(graph, start);
    crate::ensure_vertex!(graph, end);
    opts.validate()?;

    let started = Instant::now();
    // A budget past the representable range means no deadline
    let deadline = opts
        .time_budget
        .and_then(|budget| started.checked_add(budget));
    let mut state = BacktrackState::new(start);

    while let Some((vertex, path)) = state.stack.pop() {
        if !check_limits(
            state.stats.expansions,
            deadline,
            &mut state.truncated,
            &mut state.truncation_reason,
            opts,
        ) {
            break;
        }
        state.stats.expansions += 1;

        let candidates: Vec<&V> = successors_of(graph, &vertex)?
            .into_iter()
            .filter(|neighbor| !path.contains(neighbor))
            .collect();

        if let Some(max) = opts.max_hops {
            if path.len() > max {
                if !candidates.is_empty() {
                    state.stats.pruned += 1;
                    set_truncation_if_unset(
                        &mut state.truncated,
                        &mut state.truncation_reason,
                        "max_hops",
                    );
                }
                continue;
            }
        }

        for candidate in candidates {
            if candidate == end {
                if let Some(max) = opts.max_paths {
                    if state.paths.len() >= max {
                        set_truncation(
                            &mut state.truncated,
                            &mut state.truncation_reason,
                            "max_paths",
                        );
                        return Ok(state.finish());
                    }
                }

                let mut found = path.clone();
                found.push(end.clone());
                state.paths.push(Path::new(found));
                state.stats.paths_found += 1;

                if mode == SearchMode::FirstMatch {
                    crate::trace_time!(started, "backtrack_first_match");
                    return Ok(state.finish());
                }
            }

            let mut extended = path.clone();
            extended.push(candidate.clone());
            state.stack.push((candidate.clone(), extended));
        }
    }

    crate::trace_time!(started, "backtrack");
    Ok(state.finish())
}
