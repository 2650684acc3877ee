//! Save search results as JSON and load them back
use knn2d::prelude::*;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let queries = [Point::new(0.0, 0.0)];
    let dataset = [Point::new(1.0, 0.0), Point::new(0.0, 2.0), Point::new(3.0, 4.0)];
    let results = find_k_nearest_neighbors(&queries, &dataset, 2);

    let path = std::env::temp_dir().join("knn2d_results.json");
    std::fs::write(&path, serde_json::to_string_pretty(&results)?)?;
    println!("Saved {} results to {}", results.len(), path.display());

    let loaded: Vec<SearchResult<f64>> = serde_json::from_str(&std::fs::read_to_string(&path)?)?;
    println!("Loaded {} results from {}", loaded.len(), path.display());

    assert_eq!(loaded, results, "Round trip should be lossless");
    println!("✓ Results match!");
    Ok(())
}
