//! Planar geometry: points on the dispatch plane and straight-line distances.
//!
//! Distances are pure Euclidean geometry. There is no road network and no
//! travel-time model; the nearest vehicle is the one with the smallest
//! `sqrt(dx² + dy²)` to the pickup point.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`.
    pub fn distance_to(&self, other: Point) -> f64 {
        euclidean_distance(*self, other)
    }

    /// Exact coincidence on both axes. No tolerance is applied.
    pub fn coincides_with(&self, other: Point) -> bool {
        self.x == other.x && self.y == other.y
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

pub fn euclidean_distance(a: Point, b: Point) -> f64 {
    let dx = a.x - b.x;
    let dy = a.y - b.y;
    (dx * dx + dy * dy).sqrt()
}
