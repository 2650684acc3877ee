//! Find the K nearest dataset points for several queries.
//!
//! Set `RUST_LOG=debug` to see the search events.
use knn2d::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let queries = vec![Point::new(0.0, 0.0), Point::new(2.5, 2.5)];
    let dataset = vec![
        Point::new(1.0, 0.0),
        Point::new(0.0, 2.0),
        Point::new(3.0, 4.0),
        Point::new(2.0, 2.0),
        Point::new(6.0, 6.0),
    ];

    for result in find_k_nearest_neighbors(&queries, &dataset, 2) {
        println!("Query ({}, {}):", result.query_point.x(), result.query_point.y());
        for n in &result.neighbors {
            println!("  ({}, {}) at {:.3}", n.point.x(), n.point.y(), n.distance);
        }
    }
}
