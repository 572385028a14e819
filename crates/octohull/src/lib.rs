//! Convex hulls of integer point sets via octant-ordered path reduction.
//!
//! Pipeline (see `hull::convex_hull`)
//! 1. `remove_interior_points` (pass-through extension point)
//! 2. `build_radial_path`: anchor at the west-south-most point, sort the rest by slope
//! 3. `reduce_to_convex_path`: keep points whose turns follow the counterclockwise octant order
//! 4. `remove_colinear_points` (pass-through extension point)
//!
//! API Policy
//! - The surface is small on purpose: `convex_hull` plus the primitives it is built from.
//!   `api` holds the curated re-exports; `prelude` covers the common imports.

pub mod api;
pub mod compass;
pub mod error;
pub mod geometry;
pub mod hull;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{HullError, ParseDirectionError};
pub use geometry::Point;
pub use hull::convex_hull;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::compass::{Direction, DirectionPair, Octant, LOCAL_MAXIMUMS, VALID_PATH};
    pub use crate::error::HullError;
    pub use crate::geometry::{inflection_point, relative_direction, Point};
    pub use crate::hull::convex_hull;
    pub use crate::sample::{draw_point_cloud, CloudCfg, PointCount, ReplayToken};
}
