use std::cmp::Ordering;

use crate::compass::ANCHOR;
use crate::error::HullError;
use crate::geometry::{inflection_point, slope, squared_magnitude, Point};

/// A point seen from a fixed origin, keyed for the radial sort.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RadialVector {
    pub terminal: Point,
    pub slope: f64,
    pub magnitude_sq: f64,
}

impl RadialVector {
    #[inline]
    pub fn new(origin: Point, terminal: Point) -> Self {
        Self {
            terminal,
            slope: slope(origin, terminal),
            magnitude_sq: squared_magnitude(origin, terminal),
        }
    }
}

/// Vectors from `origin` to every point of `points` except copies of `origin`.
pub fn radial_vectors(origin: Point, points: &[Point]) -> Vec<RadialVector> {
    points
        .iter()
        .filter(|&&p| p != origin)
        .map(|&p| RadialVector::new(origin, p))
        .collect()
}

/// One closed candidate path through all points, not yet convex.
///
/// Starts at the west-south-most point, then visits the others by ascending
/// slope from it, nearer points first on equal slope. Copies of the anchor are
/// folded into it; other duplicates stay as separate, adjacent entries.
pub fn build_radial_path(points: &[Point]) -> Result<Vec<Point>, HullError> {
    let anchor = inflection_point(points, ANCHOR)?;
    let mut vectors = radial_vectors(anchor, points);
    // Stable sort: coincident points keep their input order.
    vectors.sort_by(|a, b| {
        match a.slope.partial_cmp(&b.slope).unwrap_or(Ordering::Equal) {
            Ordering::Equal => a
                .magnitude_sq
                .partial_cmp(&b.magnitude_sq)
                .unwrap_or(Ordering::Equal),
            o => o,
        }
    });
    let mut path = Vec::with_capacity(vectors.len() + 1);
    path.push(anchor);
    path.extend(vectors.into_iter().map(|v| v.terminal));
    Ok(path)
}
