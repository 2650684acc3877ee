//! Performance profiling example for find_k_nearest_neighbors
//!
//! Designed to be used with low-level profilers like `samply`:
//!
//! ```bash
//! samply record cargo run --release --example perf_nearest_k
//! ```

use knn2d::prelude::*;
use std::time::Instant;

fn main() {
    let mut rng = 12345u64; // Simple LCG random number generator
    let mut next = move || {
        rng = rng.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((rng >> 32) as f64 / u32::MAX as f64) * 1000.0
    };

    println!("Generating dataset...");
    let dataset: Vec<Point<f64>> = (0..100_000).map(|_| Point::new(next(), next())).collect();
    let queries: Vec<Point<f64>> = (0..1_000).map(|_| Point::new(next(), next())).collect();

    let query_start = Instant::now();
    let results = find_k_nearest_neighbors(&queries, &dataset, 100);
    let query_duration = query_start.elapsed();

    let found: usize = results.iter().map(SearchResult::len).sum();
    println!(
        "\nCompleted {} queries (k=100) in {:.2}ms ({:.2}µs per query, {} neighbors)",
        queries.len(),
        query_duration.as_secs_f64() * 1000.0,
        query_duration.as_secs_f64() * 1_000_000.0 / queries.len() as f64,
        found
    );
}
