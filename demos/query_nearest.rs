//! Find the single nearest point to a query.
use knn2d::prelude::*;

fn main() {
    let dataset = [Point::new(0.0, 3.0), Point::new(4.0, 0.0), Point::new(1.0, 1.0)];

    match find_nearest(Point::new(0.6, 0.6), &dataset) {
        Some(n) => println!("Nearest: ({}, {}) at {:.3}", n.point.x(), n.point.y(), n.distance),
        None => println!("Dataset is empty"),
    }
}
