//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types from the crate.
//! Users can import everything they need with:
//!
//! ```
//! use knn2d::prelude::*;
//! ```

pub use crate::point::{add, subtract};
pub use crate::{
    DEFAULT_K, KnnSearch, Neighbor, Point, Scalar, SearchError, SearchResult,
    find_k_nearest_neighbors, find_k_nearest_neighbors_default, find_nearest, search_one,
    try_find_k_nearest_neighbors,
};
