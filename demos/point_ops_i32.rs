//! Integer points: scale, translate, add and subtract.
//!
//! Distance is not available for integer coordinates, so these points cannot
//! be searched directly.
use knn2d::prelude::*;

fn main() {
    let p = Point::new(1_i32, 1).scale(2, 3).translate(1, -1);
    println!("(1, 1) scaled by (2, 3), moved by (1, -1): ({}, {})", p.x(), p.y());

    let a = Point::new(5_i32, -2);
    let b = Point::new(-1_i32, 8);
    let sum = add(a, b);
    let diff = subtract(a, b);
    println!("a + b = ({}, {})", sum.x(), sum.y());
    println!("a - b = ({}, {})", diff.x(), diff.y());
    assert_eq!(a + b, sum);
}
