//! # knn2d - k-Nearest-Neighbor Search over 2D Points
//!
//! A small Rust library computing, for a set of query points, the `k` points of
//! a reference dataset that are closest under Euclidean distance.
//!
//! ## Features
//!
//! - **Generic Points**: [`Point<T>`] works with any numeric scalar; distance is
//!   available for floating-point coordinates only
//! - **Exact Search**: Exhaustive pairwise comparison, no approximation
//! - **Deterministic Ties**: Equal distances keep dataset order
//! - **Optional Parallelism**: Queries evaluated on rayon with the `parallel` feature
//! - **Serde Support**: Points and results round-trip through any serde format
//!   (`serde` feature, on by default)
//!
//! ## Quick Start
//!
//! ```rust
//! use knn2d::prelude::*;
//!
//! let queries = vec![Point::new(0.0, 0.0), Point::new(10.0, 10.0)];
//! let dataset = vec![
//!     Point::new(1.0, 0.0),   // 1.0 from the first query
//!     Point::new(0.0, 2.0),   // 2.0 from the first query
//!     Point::new(3.0, 4.0),   // 5.0 from the first query
//!     Point::new(9.0, 10.0),  // 1.0 from the second query
//! ];
//!
//! let results = find_k_nearest_neighbors(&queries, &dataset, 2);
//!
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].query_point, Point::new(0.0, 0.0));
//! assert_eq!(results[0].neighbors[0].point, Point::new(1.0, 0.0));
//! assert_eq!(results[0].neighbors[1].distance, 2.0);
//! assert_eq!(results[1].neighbors[0].point, Point::new(9.0, 10.0));
//! ```
//!
//! ## How It Works
//!
//! For every query the distance to every dataset point is computed, the
//! candidates are stable-sorted by distance and the first `k` are kept. Cost is
//! `O(|queries| * |dataset| * log |dataset|)`; nothing is indexed between calls.
//!
//! Integer points support the arithmetic (`scale`, `translate`, `+`, `-`) but
//! not distance, since that needs a square root:
//!
//! ```rust
//! use knn2d::Point;
//!
//! let p = Point::new(1_i32, 1).scale(2, 3).translate(1, -1);
//! assert_eq!(p, Point::new(3, 2));
//! ```

pub mod error;
pub mod neighbor;
pub mod point;
pub mod prelude;
pub mod search;

mod component_tests_i32;

pub use error::SearchError;
pub use neighbor::{Neighbor, SearchResult};
pub use point::{Point, Scalar};
pub use search::{
    DEFAULT_K, KnnSearch, find_k_nearest_neighbors, find_k_nearest_neighbors_default,
    find_nearest, search_one, try_find_k_nearest_neighbors,
};
