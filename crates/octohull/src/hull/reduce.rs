use tracing::trace;

use crate::compass::VALID_PATH;
use crate::error::HullError;
use crate::geometry::{inflection_point, relative_direction, Point};

/// Walk a radially sorted path and keep the points on the convex boundary.
///
/// State: the last accepted point and the octant index of the last accepted
/// turn (starting at `VALID_PATH[0]`). A candidate is kept if
/// - it continues in the current octant, or
/// - it turns into an octant at or after the current one, and the last
///   accepted point is the extremal point `LOCAL_MAXIMUMS` names for that
///   octant over the whole path.
///
/// Everything else (concave turns, backwards turns, coincident points) is
/// dropped and the walk continues. Worst case O(n²) from the extremal scans.
///
/// The edge from the last kept point back to `path[0]` is never checked.
pub fn reduce_to_convex_path(path: &[Point]) -> Result<Vec<Point>, HullError> {
    let (&first, rest) = path.split_first().ok_or(HullError::EmptyPointSet)?;
    let mut last_accepted = first;
    let mut octant_index = 0usize;
    let mut accepted = vec![first];

    for &candidate in rest {
        let transition = relative_direction(last_accepted, candidate);
        let Some(octant) = transition.octant() else {
            trace!(?candidate, "coincident with last accepted point; dropped");
            continue;
        };
        if octant == VALID_PATH[octant_index] {
            accepted.push(candidate);
            last_accepted = candidate;
            continue;
        }
        let pivot = inflection_point(path, octant.local_maximum())?;
        if octant.index() >= octant_index && pivot == last_accepted {
            accepted.push(candidate);
            last_accepted = candidate;
            octant_index = octant.index();
        } else {
            trace!(?candidate, %octant, ?pivot, "concave turn; dropped");
        }
    }
    Ok(accepted)
}
