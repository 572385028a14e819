//! Curated API surface.
//!
//! Prefer these re-exports in binaries and benches so call sites stay stable
//! while the module layout moves underneath.

// Compass vocabulary and constant tables
pub use crate::compass::{
    direction_pair_from_label, label_from_direction_pair, Direction, DirectionPair, Octant,
    ANCHOR, LOCAL_MAXIMUMS, VALID_PATH,
};
// Errors
pub use crate::error::{HullError, ParseDirectionError};
// Geometry primitives
pub use crate::geometry::{
    extremal_points, inflection_point, relative_direction, slope, squared_magnitude, Point,
};
// Pipeline stages
pub use crate::hull::{
    build_radial_path, convex_hull, radial_vectors, reduce_to_convex_path, remove_colinear_points,
    remove_interior_points, RadialVector,
};
// Reproducible point clouds
pub use crate::sample::{draw_point_cloud, CloudCfg, PointCount, ReplayToken as CloudReplay};
