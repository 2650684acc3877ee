//! Result records produced by the search.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::point::Point;

/// A dataset point together with its distance to some query point.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Neighbor<T> {
    /// The dataset point.
    pub point: Point<T>,
    /// Euclidean distance from the query to `point`.
    pub distance: T,
}

impl<T> Neighbor<T> {
    /// Pairs a dataset point with its distance.
    pub const fn new(point: Point<T>, distance: T) -> Self {
        Self { point, distance }
    }
}

/// The ranked neighbors found for one query point.
///
/// `neighbors` is sorted non-decreasing by distance and holds
/// `min(k, dataset.len())` entries.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SearchResult<T> {
    /// The query exactly as it was passed in.
    pub query_point: Point<T>,
    /// Nearest dataset points, closest first.
    pub neighbors: Vec<Neighbor<T>>,
}

impl<T> SearchResult<T> {
    /// Creates a result for `query_point`.
    pub fn new(query_point: Point<T>, neighbors: Vec<Neighbor<T>>) -> Self {
        Self { query_point, neighbors }
    }

    /// The closest neighbor, if any.
    pub fn nearest(&self) -> Option<&Neighbor<T>> {
        self.neighbors.first()
    }

    /// Number of neighbors found.
    pub fn len(&self) -> usize {
        self.neighbors.len()
    }

    /// Returns whether no neighbors were found.
    pub fn is_empty(&self) -> bool {
        self.neighbors.is_empty()
    }

    /// Iterates over the neighbor points, closest first.
    pub fn points(&self) -> impl Iterator<Item = &Point<T>> + '_ {
        self.neighbors.iter().map(|n| &n.point)
    }
}
