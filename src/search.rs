//! Exhaustive k-nearest-neighbor search.
//!
//! Every query is compared against every dataset point. For each query the
//! candidate list is sorted by distance and cut to `k`, so a call costs
//! `O(|queries| * |dataset| * log |dataset|)`. There is no index to amortize
//! repeated queries against the same dataset.
//!
//! # Tie-break
//!
//! The sort is stable: neighbors at equal distance keep their order in the
//! dataset. NaN distances, which only arise from non-finite coordinates, sort
//! after every number.
//!
//! # Parallel evaluation
//!
//! Queries are independent. With the `parallel` feature and
//! [`KnnSearch::parallel`] enabled they are evaluated on the rayon pool;
//! results come back in query order and match the sequential output exactly.

use std::cmp::Ordering;

use num_traits::Float;
#[cfg(feature = "parallel")]
use rayon::iter::{IntoParallelRefIterator, ParallelIterator};
use tracing::debug;

use crate::error::{SearchError, checked_k};
use crate::neighbor::{Neighbor, SearchResult};
use crate::point::Point;

/// Neighbor count used when the caller does not pick one.
pub const DEFAULT_K: usize = 5;

/// Total order on distances: numbers ascending, NaN last.
#[inline]
fn compare_distance<T: Float>(a: T, b: T) -> Ordering {
    a.partial_cmp(&b)
        .unwrap_or_else(|| a.is_nan().cmp(&b.is_nan()))
}

/// Ranks the whole dataset against `query` and keeps the closest `k`.
fn rank_neighbors<T: Float>(query: &Point<T>, dataset: &[Point<T>], k: usize) -> Vec<Neighbor<T>> {
    if k == 0 || dataset.is_empty() {
        return Vec::new();
    }

    let mut distances: Vec<Neighbor<T>> = dataset
        .iter()
        .map(|data_point| Neighbor::new(*data_point, query.distance_to(data_point)))
        .collect();

    distances.sort_by(|a, b| compare_distance(a.distance, b.distance));
    distances.truncate(k);
    distances
}

/// Finds the `k` dataset points closest to a single query.
///
/// # Example
/// ```
/// use knn2d::{search_one, Point};
///
/// let dataset = [Point::new(5.0, 5.0), Point::new(1.0, 1.0)];
/// let result = search_one(Point::new(0.0, 0.0), &dataset, 1);
/// assert_eq!(result.neighbors[0].point, Point::new(1.0, 1.0));
/// ```
pub fn search_one<T: Float>(query: Point<T>, dataset: &[Point<T>], k: usize) -> SearchResult<T> {
    SearchResult::new(query, rank_neighbors(&query, dataset, k))
}

/// Finds the single closest dataset point, or `None` for an empty dataset.
///
/// Equivalent to the first neighbor of a `k = 1` search, including the
/// tie-break: the earliest dataset point wins among equal distances.
pub fn find_nearest<T: Float>(query: Point<T>, dataset: &[Point<T>]) -> Option<Neighbor<T>> {
    dataset
        .iter()
        .map(|data_point| Neighbor::new(*data_point, query.distance_to(data_point)))
        .reduce(|best, candidate| {
            if compare_distance(candidate.distance, best.distance) == Ordering::Less {
                candidate
            } else {
                best
            }
        })
}

/// Finds, for every query, the `k` closest dataset points by Euclidean distance.
///
/// One [`SearchResult`] is returned per query, in query order. Each result
/// holds `min(k, dataset.len())` neighbors sorted closest first. `k == 0` or
/// an empty dataset yields empty neighbor lists; empty `queries` yields an
/// empty vector. This function never fails.
///
/// # Example
/// ```
/// use knn2d::{find_k_nearest_neighbors, Point};
///
/// let queries = [Point::new(0.0, 0.0)];
/// let dataset = [Point::new(1.0, 0.0), Point::new(0.0, 2.0), Point::new(3.0, 4.0)];
///
/// let results = find_k_nearest_neighbors(&queries, &dataset, 2);
/// assert_eq!(results[0].neighbors[0].distance, 1.0);
/// assert_eq!(results[0].neighbors[1].point, Point::new(0.0, 2.0));
/// ```
pub fn find_k_nearest_neighbors<T: Float>(
    queries: &[Point<T>],
    dataset: &[Point<T>],
    k: usize,
) -> Vec<SearchResult<T>> {
    debug!(
        queries = queries.len(),
        dataset = dataset.len(),
        k,
        parallel = false,
        "k-nearest search"
    );
    search_sequential(queries, dataset, k)
}

/// [`find_k_nearest_neighbors`] with `k =` [`DEFAULT_K`].
pub fn find_k_nearest_neighbors_default<T: Float>(
    queries: &[Point<T>],
    dataset: &[Point<T>],
) -> Vec<SearchResult<T>> {
    find_k_nearest_neighbors(queries, dataset, DEFAULT_K)
}

/// Checked variant of [`find_k_nearest_neighbors`] taking a signed `k`.
///
/// # Errors
///
/// Returns [`SearchError::InvalidArgument`] when `k` is negative. Validation
/// happens before any result is computed, so no partial output exists.
pub fn try_find_k_nearest_neighbors<T: Float>(
    queries: &[Point<T>],
    dataset: &[Point<T>],
    k: i64,
) -> Result<Vec<SearchResult<T>>, SearchError> {
    let k = checked_k(k)?;
    Ok(find_k_nearest_neighbors(queries, dataset, k))
}

fn search_sequential<T: Float>(
    queries: &[Point<T>],
    dataset: &[Point<T>],
    k: usize,
) -> Vec<SearchResult<T>> {
    queries
        .iter()
        .map(|query| search_one(*query, dataset, k))
        .collect()
}

#[cfg(feature = "parallel")]
fn search_parallel<T: Float + Send + Sync>(
    queries: &[Point<T>],
    dataset: &[Point<T>],
    k: usize,
) -> Vec<SearchResult<T>> {
    queries
        .par_iter()
        .map(|query| search_one(*query, dataset, k))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn search_parallel<T: Float + Send + Sync>(
    queries: &[Point<T>],
    dataset: &[Point<T>],
    k: usize,
) -> Vec<SearchResult<T>> {
    debug!("built without the `parallel` feature, searching sequentially");
    search_sequential(queries, dataset, k)
}

/// Reusable search configuration.
///
/// ```
/// use knn2d::{KnnSearch, Point};
///
/// let search = KnnSearch::new().k(1).parallel(true);
/// let results = search.search(&[Point::new(0.0, 0.0)], &[Point::new(2.0, 0.0)]);
/// assert_eq!(results[0].neighbors[0].distance, 2.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KnnSearch {
    k: usize,
    parallel: bool,
}

impl KnnSearch {
    /// Sequential search with `k =` [`DEFAULT_K`].
    pub const fn new() -> Self {
        Self {
            k: DEFAULT_K,
            parallel: false,
        }
    }

    /// Starts from a signed neighbor count.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidArgument`] when `k` is negative.
    pub fn try_with_k(k: i64) -> Result<Self, SearchError> {
        Ok(Self::new().k(checked_k(k)?))
    }

    /// Sets the number of neighbors kept per query.
    #[must_use]
    pub const fn k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Evaluates queries on the rayon pool when the `parallel` feature is on.
    #[must_use]
    pub const fn parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Configured neighbor count.
    pub const fn neighbor_count(&self) -> usize {
        self.k
    }

    /// Whether parallel evaluation was requested.
    pub const fn is_parallel(&self) -> bool {
        self.parallel
    }

    /// Runs the search for every query, returning results in query order.
    pub fn search<T: Float + Send + Sync>(
        &self,
        queries: &[Point<T>],
        dataset: &[Point<T>],
    ) -> Vec<SearchResult<T>> {
        debug!(
            queries = queries.len(),
            dataset = dataset.len(),
            k = self.k,
            parallel = self.parallel,
            "k-nearest search"
        );
        if self.parallel {
            search_parallel(queries, dataset, self.k)
        } else {
            search_sequential(queries, dataset, self.k)
        }
    }

    /// Runs the search for one query.
    pub fn search_one<T: Float>(&self, query: Point<T>, dataset: &[Point<T>]) -> SearchResult<T> {
        search_one(query, dataset, self.k)
    }
}

impl Default for KnnSearch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compare_distance_orders_nan_last() {
        assert_eq!(compare_distance(1.0, 2.0), Ordering::Less);
        assert_eq!(compare_distance(2.0, 2.0), Ordering::Equal);
        assert_eq!(compare_distance(f64::NAN, 2.0), Ordering::Greater);
        assert_eq!(compare_distance(2.0, f64::NAN), Ordering::Less);
        assert_eq!(compare_distance(f64::NAN, f64::NAN), Ordering::Equal);
    }

    #[test]
    fn test_rank_neighbors_nan_sorts_last() {
        let dataset = [Point::new(f64::NAN, 0.0), Point::new(1.0, 0.0), Point::new(2.0, 0.0)];
        let ranked = rank_neighbors(&Point::new(0.0, 0.0), &dataset, 3);
        assert_eq!(ranked[0].distance, 1.0);
        assert_eq!(ranked[1].distance, 2.0);
        assert!(ranked[2].distance.is_nan(), "NaN distance should come last");
    }

    #[test]
    fn test_rank_neighbors_short_circuits() {
        let dataset = [Point::new(1.0, 0.0)];
        assert!(rank_neighbors(&Point::new(0.0, 0.0), &dataset, 0).is_empty());
        assert!(rank_neighbors::<f64>(&Point::new(0.0, 0.0), &[], 3).is_empty());
    }

    #[test]
    fn test_builder_defaults() {
        let search = KnnSearch::default();
        assert_eq!(search.neighbor_count(), DEFAULT_K);
        assert!(!search.is_parallel());
        assert_eq!(search, KnnSearch::new());
    }

    #[test]
    fn test_builder_try_with_k() {
        assert_eq!(KnnSearch::try_with_k(3).map(|s| s.neighbor_count()), Ok(3));
        assert_eq!(
            KnnSearch::try_with_k(-2),
            Err(SearchError::InvalidArgument { k: -2 })
        );
    }
}
