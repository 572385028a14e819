//! The four-stage hull pipeline.
//!
//! Stages
//! - `filters::remove_interior_points`: pass-through today; the place to drop
//!   points that provably lie inside the hull.
//! - `path::build_radial_path`: anchor plus a slope-sorted sweep of the rest.
//! - `reduce::reduce_to_convex_path`: keep the points whose turns follow the
//!   counterclockwise octant order.
//! - `filters::remove_colinear_points`: pass-through today; the place to drop
//!   hull points lying strictly inside a hull edge.
//!
//! Data only flows forward. Every call is independent; the only shared state is
//! the constant tables in `compass`.

mod filters;
mod path;
mod reduce;

pub use filters::{remove_colinear_points, remove_interior_points};
pub use path::{build_radial_path, radial_vectors, RadialVector};
pub use reduce::reduce_to_convex_path;

use tracing::debug;

use crate::error::HullError;
use crate::geometry::Point;

/// Convex hull of `points`, counterclockwise from the west-south-most point.
///
/// Pre: at least one point (three for a meaningful hull).
/// Post: every returned point is an input point; the result does not depend
/// on input order.
///
/// The closing edge (last point back to the anchor) is not validated.
pub fn convex_hull(points: &[Point]) -> Result<Vec<Point>, HullError> {
    if points.is_empty() {
        return Err(HullError::EmptyPointSet);
    }
    let exterior = remove_interior_points(points.to_vec());
    let concave = build_radial_path(&exterior)?;
    debug!(?concave, "concave path");
    let convex = reduce_to_convex_path(&concave)?;
    debug!(?convex, "convex path");
    Ok(remove_colinear_points(convex))
}
