use crate::geometry::Point;

/// Drop points that cannot be on the hull. Currently the identity.
#[inline]
pub fn remove_interior_points(points: Vec<Point>) -> Vec<Point> {
    points
}

/// Drop hull points lying strictly between two others on the same edge.
/// Currently the identity, so collinear hull points are kept.
#[inline]
pub fn remove_colinear_points(points: Vec<Point>) -> Vec<Point> {
    points
}
