use serde::Serialize;
use std::fmt;
use std::hash::Hash;
use std::time::Duration;

use crate::error::Result;

/// Identifier of a graph vertex
///
/// Any cloneable, hashable type with equality works: string labels,
/// integers, tuples. Vertices have no identity beyond equality.
pub trait Vertex: Clone + Eq + Hash + fmt::Debug {}

impl<T: Clone + Eq + Hash + fmt::Debug> Vertex for T {}

/// Nonnegative edge weight or accumulated path distance
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct Weight(f64);

impl Weight {
    pub const ZERO: Weight = Weight(0.0);
    pub const INFINITY: Weight = Weight(f64::INFINITY);

    pub fn new(value: f64) -> Self {
        Weight(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    pub fn is_finite(&self) -> bool {
        self.0.is_finite()
    }

    /// Whether this value may label an edge: finite and not negative
    pub fn is_valid_edge_weight(&self) -> bool {
        self.0.is_finite() && self.0 >= 0.0
    }
}

impl Default for Weight {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Add for Weight {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Weight(self.0 + other.0)
    }
}

impl std::iter::Sum for Weight {
    fn sum<I: Iterator<Item = Weight>>(iter: I) -> Self {
        iter.fold(Weight::ZERO, |acc, w| acc + w)
    }
}

impl From<f64> for Weight {
    fn from(value: f64) -> Self {
        Weight(value)
    }
}

impl From<u32> for Weight {
    fn from(value: u32) -> Self {
        Weight(f64::from(value))
    }
}

impl fmt::Display for Weight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A simple path: the start vertex first, the end vertex last
///
/// Paths produced by the engines never repeat a vertex. [`Path::new`] does
/// not check this; use [`Path::is_simple`] for caller-built paths.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Path<V> {
    vertices: Vec<V>,
}

impl<V: Vertex> Path<V> {
    pub fn new(vertices: Vec<V>) -> Self {
        Path { vertices }
    }

    /// Number of vertices on the path
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Number of edges on the path
    pub fn hops(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn first(&self) -> Option<&V> {
        self.vertices.first()
    }

    pub fn last(&self) -> Option<&V> {
        self.vertices.last()
    }

    pub fn contains(&self, vertex: &V) -> bool {
        self.vertices.contains(vertex)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, V> {
        self.vertices.iter()
    }

    pub fn as_slice(&self) -> &[V] {
        &self.vertices
    }

    pub fn into_vec(self) -> Vec<V> {
        self.vertices
    }

    /// Consecutive `(from, to)` pairs along the path
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V)> {
        self.vertices.windows(2).map(|pair| (&pair[0], &pair[1]))
    }

    /// True when no vertex occurs twice
    pub fn is_simple(&self) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(self.vertices.len());
        self.vertices.iter().all(|v| seen.insert(v))
    }
}

impl<V> AsRef<[V]> for Path<V> {
    fn as_ref(&self) -> &[V] {
        &self.vertices
    }
}

impl<V> IntoIterator for Path<V> {
    type Item = V;
    type IntoIter = std::vec::IntoIter<V>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}

impl<'a, V> IntoIterator for &'a Path<V> {
    type Item = &'a V;
    type IntoIter = std::slice::Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.iter()
    }
}

/// A closed walk through an anchor vertex
///
/// The vertex list starts and ends with the anchor and holds at least two
/// distinct vertices before the closing step.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Cycle<V> {
    vertices: Vec<V>,
}

impl<V: Vertex> Cycle<V> {
    /// Close a path by returning to its first vertex
    pub(crate) fn close(path: Path<V>) -> Self {
        let mut vertices = path.into_vec();
        if let Some(anchor) = vertices.first().cloned() {
            vertices.push(anchor);
        }
        Cycle { vertices }
    }

    /// The vertex the cycle starts and ends at
    pub fn anchor(&self) -> Option<&V> {
        self.vertices.first()
    }

    /// Full vertex list, anchor repeated at the end
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Number of distinct vertices (the closing repeat is not counted)
    pub fn distinct_len(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    pub fn into_vec(self) -> Vec<V> {
        self.vertices
    }
}

/// A path paired with its total weight
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightedPath<V> {
    pub weight: Weight,
    pub path: Path<V>,
}

impl<V: Vertex> WeightedPath<V> {
    pub fn new(weight: Weight, path: Path<V>) -> Self {
        WeightedPath { weight, path }
    }

    pub fn into_parts(self) -> (Weight, Path<V>) {
        (self.weight, self.path)
    }
}

/// Caps for exhaustive path enumeration
///
/// All caps are off by default, which gives the complete (and possibly
/// exponential) enumeration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchOptions {
    /// Stop after this many paths have been recorded
    pub max_paths: Option<usize>,
    /// Never extend a path beyond this many edges
    pub max_hops: Option<usize>,
    /// Stop after this many stack entries have been expanded
    pub max_expansions: Option<usize>,
    /// Wall-clock budget for a single enumeration
    pub time_budget: Option<Duration>,
}

impl SearchOptions {
    /// Options with no caps
    pub fn unbounded() -> Self {
        Self::default()
    }

    pub fn with_max_paths(mut self, max: usize) -> Self {
        self.max_paths = Some(max);
        self
    }

    pub fn with_max_hops(mut self, max: usize) -> Self {
        self.max_hops = Some(max);
        self
    }

    pub fn with_max_expansions(mut self, max: usize) -> Self {
        self.max_expansions = Some(max);
        self
    }

    pub fn with_time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }

    pub fn is_unbounded(&self) -> bool {
        self.max_paths.is_none()
            && self.max_hops.is_none()
            && self.max_expansions.is_none()
            && self.time_budget.is_none()
    }

    /// Reject caps that would make every search empty
    pub fn validate(&self) -> Result<()> {
        if self.max_paths == Some(0) {
            crate::bail_invalid!("max_paths", 0);
        }
        if self.max_expansions == Some(0) {
            crate::bail_invalid!("max_expansions", 0);
        }
        Ok(())
    }
}

/// Counters collected while enumerating paths
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Stack entries popped and expanded
    pub expansions: u64,
    /// Completed paths recorded
    pub paths_found: u64,
    /// Branches cut by `max_hops`
    pub pruned: u64,
}

impl std::ops::AddAssign for SearchStats {
    fn add_assign(&mut self, other: Self) {
        self.expansions += other.expansions;
        self.paths_found += other.paths_found;
        self.pruned += other.pruned;
    }
}

/// Outcome of a bounded path enumeration
#[derive(Debug, Clone, Serialize)]
pub struct PathSearchResult<V> {
    /// Paths in enumeration order
    pub paths: Vec<Path<V>>,
    pub truncated: bool,
    pub truncation_reason: Option<String>,
    pub stats: SearchStats,
}
