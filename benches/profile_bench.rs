//! Profiling benchmark for the exhaustive k-NN search
//!
//! Measures `find_k_nearest_neighbors` over a random dataset for several
//! dataset sizes and values of k.

use knn2d::prelude::*;
use rand::Rng;
use rand::SeedableRng;
use std::time::Instant;

/// Generate random points in a 100x100 coordinate space
fn random_points<R: Rng>(rng: &mut R, count: usize) -> Vec<Point<f64>> {
    (0..count)
        .map(|_| Point::new(rng.random_range(0.0..100.0), rng.random_range(0.0..100.0)))
        .collect()
}

/// Benchmark one (dataset size, k) combination
fn bench_search(queries: &[Point<f64>], dataset: &[Point<f64>], k: usize) {
    let start = Instant::now();
    let results = find_k_nearest_neighbors(queries, dataset, k);
    let elapsed = start.elapsed();

    let found: usize = results.iter().map(SearchResult::len).sum();
    println!(
        "  dataset {:>7}, k = {:>3}: {:>9.2}ms ({:.3}µs/query, {} neighbors)",
        dataset.len(),
        k,
        elapsed.as_secs_f64() * 1000.0,
        elapsed.as_secs_f64() * 1_000_000.0 / queries.len() as f64,
        found
    );
}

fn main() {
    println!("knn2d Profiling Benchmark");
    println!("=========================\n");

    let num_queries = 1_000;

    // Fixed seed for reproducibility
    let seed = 95756739_u64;
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);

    let queries = random_points(&mut rng, num_queries);

    for num_items in [1_000, 10_000, 100_000] {
        let dataset = random_points(&mut rng, num_items);
        println!("Profiling find_k_nearest_neighbors ({} queries):", num_queries);
        println!("{}", "-".repeat(40));
        for k in [1, 10, 100] {
            bench_search(&queries, &dataset, k);
        }
        println!();
    }

    // Single nearest: linear scan, no sort
    let dataset = random_points(&mut rng, 100_000);
    let start = Instant::now();
    let mut hits = 0usize;
    for query in &queries {
        if find_nearest(*query, &dataset).is_some() {
            hits += 1;
        }
    }
    let elapsed = start.elapsed();
    println!(
        "find_nearest over 100000 points: {:.2}ms ({:.3}µs/query, {} hits)",
        elapsed.as_secs_f64() * 1000.0,
        elapsed.as_secs_f64() * 1_000_000.0 / num_queries as f64,
        hits
    );
}
