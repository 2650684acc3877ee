//! Component tests for integer-coordinate points
//! Integer points support the arithmetic operations only; distance needs a float scalar.
